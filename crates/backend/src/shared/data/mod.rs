pub mod repository;
pub mod seed;

pub use repository::{InMemoryRepository, RecordRepository, RepositoryError};
