pub mod list_params;
pub mod logs;
pub mod modules;
pub mod records;
