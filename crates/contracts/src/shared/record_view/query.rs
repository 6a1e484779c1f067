use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Размер страницы по умолчанию
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Фасетный фильтр (дискретное ограничение на одно поле)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FacetFilter {
    /// Значение поля равно `value` (без учёта регистра). Пустое `value` = "Все".
    Equals { field: String, value: String },
    /// Дата поля в диапазоне, границы включительно, любая может быть открытой
    DateRange {
        field: String,
        #[serde(default)]
        from: Option<NaiveDate>,
        #[serde(default)]
        to: Option<NaiveDate>,
    },
}

impl FacetFilter {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        FacetFilter::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn date_range(
        field: impl Into<String>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Self {
        FacetFilter::DateRange {
            field: field.into(),
            from,
            to,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            FacetFilter::Equals { field, .. } | FacetFilter::DateRange { field, .. } => field,
        }
    }

    /// Фильтр без ограничений ни на что не влияет
    pub fn is_active(&self) -> bool {
        match self {
            FacetFilter::Equals { value, .. } => !value.trim().is_empty(),
            FacetFilter::DateRange { from, to, .. } => from.is_some() || to.is_some(),
        }
    }
}

/// Явная сортировка. Без неё сохраняется порядок вставки.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SortSpec {
    /// Сначала новые
    DateDesc { field: String },
    /// Сначала крупные суммы
    AmountDesc { field: String },
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Параметры представления списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub facets: Vec<FacetFilter>,
    #[serde(default)]
    pub sort: Option<SortSpec>,
    /// Номер страницы, начиная с 1
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            facets: Vec::new(),
            sort: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl ViewQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_facet(mut self, facet: FacetFilter) -> Self {
        self.facets.push(facet);
        self
    }

    pub fn sorted_by(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}
