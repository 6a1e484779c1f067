use contracts::shared::money::group_indian;

/// Форматирует число с индийской группировкой разрядов (для логов запросов)
///
/// # Примеры
/// ```text
/// format_number(1234567) == "12,34,567"
/// format_number(42) == "42"
/// ```
pub fn format_number(n: usize) -> String {
    group_indian(&n.to_string())
}
