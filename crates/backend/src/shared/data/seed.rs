use chrono::NaiveDate;

/// Дата для начальных данных; некорректная дата даёт NaiveDate::MIN
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
