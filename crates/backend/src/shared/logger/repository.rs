use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use contracts::shared::logger::LogEntry;
use once_cell::sync::Lazy;

/// Сколько последних записей хранится в памяти
pub const MAX_ENTRIES: usize = 1000;

struct ActionLog {
    next_id: i64,
    entries: VecDeque<LogEntry>,
}

static LOG: Lazy<Mutex<ActionLog>> = Lazy::new(|| {
    Mutex::new(ActionLog {
        next_id: 1,
        entries: VecDeque::new(),
    })
});

fn with_log<R>(f: impl FnOnce(&mut ActionLog) -> R) -> R {
    let mut guard = LOG.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
}

/// Добавить запись в лог
pub fn log_event(source: &str, category: &str, message: &str) -> LogEntry {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();

    with_log(|log| {
        let entry = LogEntry {
            id: log.next_id,
            timestamp,
            source: source.to_string(),
            category: category.to_string(),
            message: message.to_string(),
        };
        log.next_id += 1;
        log.entries.push_back(entry.clone());
        while log.entries.len() > MAX_ENTRIES {
            log.entries.pop_front();
        }
        entry
    })
}

/// Получить все записи лога (новые сверху)
pub fn get_all_logs() -> Vec<LogEntry> {
    with_log(|log| log.entries.iter().rev().cloned().collect())
}

/// Очистить все записи лога
pub fn clear_all_logs() {
    with_log(|log| log.entries.clear());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let first = log_event("server", "test_log_order", "first");
        let second = log_event("server", "test_log_order", "second");
        assert!(second.id > first.id);

        let mine: Vec<LogEntry> = get_all_logs()
            .into_iter()
            .filter(|e| e.category == "test_log_order")
            .collect();
        assert_eq!(mine[0].message, "second");
        assert_eq!(mine[1].message, "first");
    }
}
