use serde::{Deserialize, Serialize};

/// Запись журнала действий
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    /// Источник записи, сейчас всегда "server"
    pub source: String,
    /// Коллекция модуля (например, "rti_application")
    pub category: String,
    pub message: String,
}
