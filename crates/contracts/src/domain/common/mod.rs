pub mod aggregate_root;
pub mod base_aggregate;
pub mod entity_metadata;

pub use aggregate_root::AggregateRoot;
pub use base_aggregate::BaseAggregate;
pub use entity_metadata::EntityMetadata;
