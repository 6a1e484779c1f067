use super::column::Tabular;
use super::query::FacetFilter;

/// Поиск подстроки без учёта регистра по текстовому значению каждого поля.
/// Подстрока ищется как есть, вместе с пробелами по краям;
/// пустой запрос (или из одних пробелов) подходит любой записи.
pub fn matches_search<T: Tabular>(record: &T, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let needle = term.to_lowercase();

    T::columns()
        .iter()
        .any(|col| record.cell(col.id).to_text().to_lowercase().contains(&needle))
}

/// Проверка одного фасета. Неизвестное поле не совпадает ни с чем.
pub fn matches_facet<T: Tabular>(record: &T, facet: &FacetFilter) -> bool {
    if !facet.is_active() {
        return true;
    }
    if T::find_column(facet.field()).is_none() {
        return false;
    }

    match facet {
        FacetFilter::Equals { field, value } => {
            record.cell(field).to_text().trim().to_lowercase() == value.trim().to_lowercase()
        }
        FacetFilter::DateRange { field, from, to } => match record.cell(field).as_date() {
            Some(date) => {
                from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
            }
            None => false,
        },
    }
}

/// Запись должна удовлетворять поиску и всем фасетам (логическое И)
pub fn matches_all<T: Tabular>(record: &T, search: &str, facets: &[FacetFilter]) -> bool {
    matches_search(record, search) && facets.iter().all(|f| matches_facet(record, f))
}

/// Фильтрует записи, сохраняя исходный порядок
pub fn filter_records<'a, T: Tabular>(
    records: &'a [T],
    search: &str,
    facets: &[FacetFilter],
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|r| matches_all(*r, search, facets))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_view::test_support::{parcels, Parcel};
    use chrono::NaiveDate;

    fn ids(rows: &[&Parcel]) -> Vec<String> {
        rows.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_status_facet_pending() {
        let data = parcels();
        let result = filter_records(&data, "", &[FacetFilter::equals("status", "Pending")]);
        assert_eq!(ids(&result), vec!["PAR-003"]);
    }

    #[test]
    fn test_search_matches_any_field() {
        let data = parcels();
        let result = filter_records(&data, "gomti", &[]);
        assert_eq!(ids(&result), vec!["PAR-001"]);

        // сумма ищется по отображаемому виду
        let result = filter_records(&data, "45,00,000", &[]);
        assert_eq!(ids(&result), vec!["PAR-001"]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let data = parcels();
        assert_eq!(filter_records(&data, "", &[]).len(), data.len());
        assert_eq!(filter_records(&data, "   ", &[]).len(), data.len());
    }

    #[test]
    fn test_search_keeps_edge_spaces() {
        let data = parcels();
        assert_eq!(ids(&filter_records(&data, "road", &[])), vec!["PAR-003", "PAR-004"]);
        assert!(filter_records(&data, "road ", &[]).is_empty());
        assert_eq!(ids(&filter_records(&data, " road", &[])), vec!["PAR-003", "PAR-004"]);
    }

    #[test]
    fn test_narrowing_search_never_grows_result() {
        let data = parcels();
        let terms = ["", "a", "an", "nag", "nagar", "nagar,", "nagar, ", "nagar, l"];
        for pair in terms.windows(2) {
            let wide = ids(&filter_records(&data, pair[0], &[]));
            let narrow = ids(&filter_records(&data, pair[1], &[]));
            assert!(
                narrow.iter().all(|id| wide.contains(id)),
                "'{}' produced rows not matched by '{}'",
                pair[1],
                pair[0]
            );
        }
    }

    #[test]
    fn test_facets_and_equals_intersection() {
        let data = parcels();
        let status = FacetFilter::equals("status", "Acquired");
        let village = FacetFilter::equals("village", "Chinhat");

        let both = ids(&filter_records(&data, "", &[status.clone(), village.clone()]));
        let by_status = ids(&filter_records(&data, "", &[status]));
        let by_village = ids(&filter_records(&data, "", &[village]));
        let intersection: Vec<String> = by_status
            .into_iter()
            .filter(|id| by_village.contains(id))
            .collect();

        assert_eq!(both, intersection);
        assert_eq!(both, vec!["PAR-004"]);
    }

    #[test]
    fn test_inactive_and_unknown_facets() {
        let data = parcels();
        let all = filter_records(&data, "", &[FacetFilter::equals("status", "")]);
        assert_eq!(all.len(), data.len());

        let none = filter_records(&data, "", &[FacetFilter::equals("colour", "red")]);
        assert!(none.is_empty());
    }

    #[test]
    fn test_date_range_inclusive() {
        let data = parcels();
        let from = NaiveDate::from_ymd_opt(2024, 2, 1);
        let to = NaiveDate::from_ymd_opt(2024, 3, 10);
        let result = filter_records(&data, "", &[FacetFilter::date_range("notified_on", from, to)]);
        assert_eq!(ids(&result), vec!["PAR-002", "PAR-003"]);
    }
}
