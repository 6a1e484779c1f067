pub mod actions;
pub mod api_error;
pub mod export;
pub mod logger;
pub mod money;
pub mod record_view;
pub mod summary;
