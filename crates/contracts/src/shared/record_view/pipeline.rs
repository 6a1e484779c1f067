use serde::Serialize;

use super::column::Tabular;
use super::filter::filter_records;
use super::paging::PageWindow;
use super::query::ViewQuery;
use super::selection::{HeaderCheckState, Selection};
use super::sort::sort_records;

/// Строка видимой страницы
#[derive(Debug, Clone, Serialize)]
pub struct ViewRow<T> {
    pub id: String,
    pub selected: bool,
    pub record: T,
}

/// Результат представления списка
#[derive(Debug, Clone, Serialize)]
pub struct ViewPage<T> {
    pub rows: Vec<ViewRow<T>>,
    /// Количество записей после фильтрации
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub showing_from: usize,
    pub showing_to: usize,
    /// Состояние "выбрать все" относительно отфильтрованного набора
    pub header_state: HeaderCheckState,
}

/// Поиск и фасеты, затем сортировка (если задана)
pub fn filtered_sorted<'a, T: Tabular>(records: &'a [T], query: &ViewQuery) -> Vec<&'a T> {
    let mut rows = filter_records(records, &query.search, &query.facets);
    if let Some(sort) = &query.sort {
        sort_records(&mut rows, sort);
    }
    rows
}

/// Полный конвейер: фильтр → сортировка → страница, плюс отметки выбора
pub fn apply_view<T: Tabular + Clone>(
    records: &[T],
    query: &ViewQuery,
    selection: &Selection,
) -> ViewPage<T> {
    let rows = filtered_sorted(records, query);
    let window = PageWindow::clamp(rows.len(), query.page, query.page_size);
    let header_state = selection.header_state(rows.iter().map(|r| r.record_id()));

    let visible = window
        .slice(&rows)
        .iter()
        .map(|r| ViewRow {
            id: r.record_id().to_string(),
            selected: selection.is_selected(r.record_id()),
            record: (*r).clone(),
        })
        .collect();

    ViewPage {
        rows: visible,
        total: window.total,
        page: window.page,
        page_size: window.page_size,
        total_pages: window.total_pages,
        showing_from: window.showing_from(),
        showing_to: window.showing_to(),
        header_state,
    }
}

/// Идентификаторы отфильтрованного набора (все страницы)
pub fn filtered_ids<T: Tabular>(records: &[T], query: &ViewQuery) -> Vec<String> {
    filter_records(records, &query.search, &query.facets)
        .iter()
        .map(|r| r.record_id().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_view::query::{FacetFilter, SortSpec};
    use crate::shared::record_view::test_support::{numbered_parcels, parcels};

    #[test]
    fn test_page_four_of_twenty_five_shows_page_three() {
        let data = numbered_parcels(25);
        let page = apply_view(&data, &ViewQuery::default().page(4, 10), &Selection::new());
        assert_eq!(page.page, 3);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
        let ids: Vec<&str> = page.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["PAR-021", "PAR-022", "PAR-023", "PAR-024", "PAR-025"]);
    }

    #[test]
    fn test_pages_reproduce_filtered_sorted_sequence() {
        let data = numbered_parcels(23);
        let base = ViewQuery::default()
            .with_facet(FacetFilter::equals("status", "Pending"))
            .sorted_by(SortSpec::AmountDesc { field: "compensation".into() });

        let expected: Vec<String> = filtered_sorted(&data, &base)
            .iter()
            .map(|r| r.id.clone())
            .collect();

        let first = apply_view(&data, &base.clone().page(1, 5), &Selection::new());
        let mut joined = Vec::new();
        for n in 1..=first.total_pages {
            let page = apply_view(&data, &base.clone().page(n, 5), &Selection::new());
            joined.extend(page.rows.into_iter().map(|r| r.id));
        }
        assert_eq!(joined, expected);
        assert_eq!(joined.len(), 12);
    }

    #[test]
    fn test_empty_records() {
        let data = numbered_parcels(0);
        let page = apply_view(&data, &ViewQuery::default(), &Selection::new());
        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.header_state, HeaderCheckState::Unchecked);
    }

    #[test]
    fn test_rows_carry_selection_flags() {
        let data = parcels();
        let selection = Selection::from_ids(["PAR-002"]);
        let page = apply_view(&data, &ViewQuery::default(), &selection);
        let flags: Vec<bool> = page.rows.iter().map(|r| r.selected).collect();
        assert_eq!(flags, vec![false, true, false, false, false]);
        assert_eq!(page.header_state, HeaderCheckState::Indeterminate);
    }

    #[test]
    fn test_default_order_is_insertion_order() {
        let data = parcels();
        let page = apply_view(&data, &ViewQuery::default().with_search("road"), &Selection::new());
        let ids: Vec<&str> = page.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["PAR-003", "PAR-004"]);
    }
}
