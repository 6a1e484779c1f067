//! Универсальный модуль записей: список, карточка, экспорт, действия

pub mod actions;
pub mod service;

use contracts::domain::common::AggregateRoot;
use serde::{de::DeserializeOwned, Serialize};

pub use actions::{outcome_of, ActionHandler, ActionRegistry, DispatchError};
pub use service::{CsvExport, RecordModule, SelectionState};

/// Запись, которую можно обслуживать через HTTP
pub trait ModuleRecord:
    AggregateRoot + Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> ModuleRecord for T where
    T: AggregateRoot + Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
}
