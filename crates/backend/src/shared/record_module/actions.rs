use std::collections::BTreeMap;

use contracts::shared::actions::{ActionOutcome, ConfirmationPrompt, RowAction};
use thiserror::Error;

use crate::shared::data::RepositoryError;

/// Обработчик действия над записью модуля
pub enum ActionHandler<T> {
    /// Переход к карточке/форме записи, данные не меняются
    Navigate,
    /// Изменение записи; при `Applied` запись сохраняется
    Update(fn(&mut T) -> ActionOutcome),
    /// Удаление записи
    Remove,
    /// Интеграция ещё не подключена: ничего не меняется, результат NotImplemented
    PendingIntegration(&'static str),
}

/// Набор действий, доступных в модуле.
/// Действие без обработчика не предлагается и не выполняется.
pub struct ActionRegistry<T> {
    handlers: BTreeMap<RowAction, ActionHandler<T>>,
}

impl<T> ActionRegistry<T> {
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    pub fn register(mut self, action: RowAction, handler: ActionHandler<T>) -> Self {
        self.handlers.insert(action, handler);
        self
    }

    pub fn get(&self, action: RowAction) -> Option<&ActionHandler<T>> {
        self.handlers.get(&action)
    }

    /// Доступные действия в порядке отображения
    pub fn actions(&self) -> Vec<RowAction> {
        self.handlers.keys().copied().collect()
    }
}

impl<T> Default for ActionRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Результат перехода состояния записи как исход действия
pub fn outcome_of(result: Result<(), String>, applied: impl Into<String>) -> ActionOutcome {
    match result {
        Ok(()) => ActionOutcome::applied(applied),
        Err(reason) => ActionOutcome::failed(reason),
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Action '{action}' is not available for {element}")]
    Unavailable {
        action: RowAction,
        element: &'static str,
    },

    #[error("{}", .0.title)]
    ConfirmationRequired(ConfirmationPrompt),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
