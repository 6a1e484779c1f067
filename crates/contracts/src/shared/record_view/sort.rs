use std::cmp::Ordering;

use chrono::NaiveDate;

use super::column::Tabular;
use super::query::SortSpec;

/// Устойчивая сортировка: при равных ключах порядок сохраняется
pub fn sort_records<T: Tabular>(records: &mut [&T], spec: &SortSpec) {
    match spec {
        SortSpec::DateDesc { field } => {
            records.sort_by(|a, b| compare_dates_desc(a.cell(field).as_date(), b.cell(field).as_date()))
        }
        SortSpec::AmountDesc { field } => {
            records.sort_by(|a, b| b.cell(field).amount_key().cmp(&a.cell(field).amount_key()))
        }
    }
}

/// Сначала новые; записи без даты в конце
fn compare_dates_desc(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
