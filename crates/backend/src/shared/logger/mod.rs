pub mod repository;

use repository::log_event;

/// Запись события в журнал действий
///
/// # Примеры
/// ```text
/// logger::log("startup", "Server started");
/// logger::log("rti_application", "approve RTI-2024-234: applied");
/// ```
pub fn log(category: &str, message: &str) {
    log_event("server", category, message);
}
