use chrono::NaiveDate;
use serde::Serialize;

use crate::shared::money::{parse_amount_lenient, Money};

/// Тип колонки таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Text,
    Status,
    Date,
    Money,
    Count,
}

/// Описание колонки таблицы (не зависит от предметной области)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    /// Идентификатор поля (например, "status")
    pub id: &'static str,
    /// Заголовок колонки для UI и CSV
    pub label: &'static str,
    pub kind: ColumnKind,
    /// Доступен ли фильтр по значению (фасет)
    pub facet: bool,
}

impl ColumnDef {
    pub const fn text(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: ColumnKind::Text,
            facet: false,
        }
    }

    pub const fn status(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: ColumnKind::Status,
            facet: true,
        }
    }

    pub const fn date(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: ColumnKind::Date,
            facet: false,
        }
    }

    pub const fn money(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: ColumnKind::Money,
            facet: false,
        }
    }

    pub const fn count(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: ColumnKind::Count,
            facet: false,
        }
    }

    /// Пометить колонку как фасет
    pub const fn faceted(mut self) -> Self {
        self.facet = true;
        self
    }
}

/// Значение ячейки
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Date(NaiveDate),
    Money(Money),
    Count(i64),
    Empty,
}

/// Форматы дат, которые встречаются в текстовых полях
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%b %d, %Y"];

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        match value {
            Some(v) => CellValue::Text(v.to_string()),
            None => CellValue::Empty,
        }
    }

    /// Текстовое представление ячейки (поиск, фасеты, CSV)
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Money(m) => m.format(),
            CellValue::Count(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Дата ячейки; текст разбирается по известным форматам
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            CellValue::Text(s) => parse_date_text(s),
            _ => None,
        }
    }

    /// Ключ сортировки по сумме. Неразборчивый текст даёт 0.
    pub fn amount_key(&self) -> i64 {
        match self {
            CellValue::Money(m) => m.amount_minor,
            CellValue::Count(n) => *n,
            CellValue::Text(s) => parse_amount_lenient(s),
            CellValue::Date(_) | CellValue::Empty => 0,
        }
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// Запись, которую можно показать в универсальной таблице.
///
/// `columns()` перечисляет все поля записи: поиск идёт по каждому из них.
pub trait Tabular {
    /// Колонки в порядке отображения
    fn columns() -> &'static [ColumnDef];

    /// Идентификатор записи (ключ выбора, навигации и действий)
    fn record_id(&self) -> &str;

    /// Значение поля; неизвестное поле даёт `CellValue::Empty`
    fn cell(&self, column_id: &str) -> CellValue;

    /// Колонка даты для сортировки "сначала новые"
    fn date_column() -> Option<&'static str> {
        None
    }

    /// Колонка суммы для сортировки "сначала крупные" и итогов
    fn amount_column() -> Option<&'static str> {
        None
    }

    /// Все значения строки в порядке колонок
    fn cells(&self) -> Vec<CellValue> {
        Self::columns().iter().map(|c| self.cell(c.id)).collect()
    }

    fn find_column(id: &str) -> Option<&'static ColumnDef> {
        Self::columns().iter().find(|c| c.id == id)
    }
}
