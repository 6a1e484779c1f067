use serde::Serialize;

use super::column::{ColumnDef, Tabular};
use crate::shared::actions::RowAction;

/// Описание таблицы для отрисовщика: колонки, фасеты и доступные действия.
/// Действие без обработчика в список не попадает и не отображается.
#[derive(Debug, Clone, Serialize)]
pub struct TableDescription {
    pub collection: String,
    pub title: String,
    pub columns: Vec<ColumnDef>,
    pub facet_columns: Vec<&'static str>,
    pub date_column: Option<&'static str>,
    pub amount_column: Option<&'static str>,
    pub actions: Vec<RowAction>,
}

impl TableDescription {
    pub fn of<T: Tabular>(
        collection: impl Into<String>,
        title: impl Into<String>,
        actions: Vec<RowAction>,
    ) -> Self {
        let columns = T::columns().to_vec();
        let facet_columns = columns.iter().filter(|c| c.facet).map(|c| c.id).collect();
        Self {
            collection: collection.into(),
            title: title.into(),
            columns,
            facet_columns,
            date_column: T::date_column(),
            amount_column: T::amount_column(),
            actions,
        }
    }
}
