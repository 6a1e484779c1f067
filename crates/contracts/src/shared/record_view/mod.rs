//! Универсальное представление списка записей в памяти:
//! поиск, фасеты, сортировка, страницы и выбор строк.
//!
//! Конвейер чистый и синхронный: запись → фильтр → сортировка → страница.

pub mod column;
pub mod filter;
pub mod paging;
pub mod pipeline;
pub mod query;
pub mod selection;
pub mod sort;
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use column::{CellValue, ColumnDef, ColumnKind, Tabular};
pub use paging::PageWindow;
pub use pipeline::{apply_view, filtered_ids, filtered_sorted, ViewPage, ViewRow};
pub use query::{FacetFilter, SortSpec, ViewQuery, DEFAULT_PAGE_SIZE};
pub use selection::{HeaderCheckState, Selection};
pub use table::TableDescription;
