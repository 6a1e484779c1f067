use std::sync::Arc;

use chrono::Utc;
use contracts::domain::common::EntityMetadata;
use contracts::shared::actions::{
    ActionOutcome, ActionResult, BulkActionResponse, ConfirmationPrompt, RowAction,
};
use contracts::shared::export::{export_csv, export_filename, ExportOptions};
use contracts::shared::record_view::{
    apply_view, filtered_ids, filtered_sorted, HeaderCheckState, Selection, TableDescription,
    ViewPage, ViewQuery,
};
use contracts::shared::summary::{summarize, ModuleSummary};
use serde::Serialize;

use super::actions::{ActionHandler, ActionRegistry, DispatchError};
use super::ModuleRecord;
use crate::shared::config::{Config, ExportConfig, ViewConfig};
use crate::shared::data::{InMemoryRepository, RecordRepository, RepositoryError};
use crate::shared::logger;

/// Готовый CSV-файл
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

/// Выбор после "выбрать все"/"снять все"
#[derive(Debug, Clone, Serialize)]
pub struct SelectionState {
    pub selected: Selection,
    /// Сколько выбранных записей входит в отфильтрованный набор
    pub selected_in_view: usize,
    pub header_state: HeaderCheckState,
}

pub struct RecordModule<T> {
    repository: Arc<dyn RecordRepository<T>>,
    actions: ActionRegistry<T>,
    view: ViewConfig,
    export: ExportConfig,
}

impl<T: ModuleRecord> RecordModule<T> {
    pub fn new(
        repository: Arc<dyn RecordRepository<T>>,
        actions: ActionRegistry<T>,
        view: ViewConfig,
        export: ExportConfig,
    ) -> Self {
        Self {
            repository,
            actions,
            view,
            export,
        }
    }

    /// Модуль с хранилищем в памяти, заполненным `records`
    pub fn in_memory(records: Vec<T>, actions: ActionRegistry<T>, config: &Config) -> Self {
        Self::new(
            Arc::new(InMemoryRepository::with_records(records)),
            actions,
            config.view,
            config.export,
        )
    }

    pub fn description(&self) -> TableDescription {
        TableDescription::of::<T>(T::collection_name(), T::list_name(), self.actions.actions())
    }

    fn normalize(&self, query: &ViewQuery) -> ViewQuery {
        let mut query = query.clone();
        query.page_size = self.view.effective_page_size(Some(query.page_size));
        query
    }

    /// Страница списка: поиск, фасеты, сортировка, пагинация и отметки выбора
    pub async fn list_view(
        &self,
        query: &ViewQuery,
        selection: &Selection,
    ) -> Result<ViewPage<T>, RepositoryError> {
        let records = self.repository.list().await?;
        Ok(apply_view(&records, &self.normalize(query), selection))
    }

    pub async fn get(&self, id: &str) -> Result<T, RepositoryError> {
        self.repository.get(id).await
    }

    pub async fn create(&self, mut record: T) -> Result<T, RepositoryError> {
        *record.metadata_mut() = EntityMetadata::new();
        let created = self.repository.create(record).await?;
        tracing::info!("{} {} created", T::element_name(), created.code());
        Ok(created)
    }

    /// Обновление с проверкой версии: дата создания сохраняется, версия растёт
    pub async fn update(&self, id: &str, record: T) -> Result<T, RepositoryError> {
        let updated = self.repository.update(id, record).await?;
        tracing::info!(
            "{} {} updated (version {})",
            T::element_name(),
            id,
            updated.metadata().version
        );
        Ok(updated)
    }

    /// CSV по отфильтрованному и отсортированному набору (все страницы)
    pub async fn export(&self, query: &ViewQuery) -> anyhow::Result<CsvExport> {
        let records = self.repository.list().await?;
        let rows = filtered_sorted(&records, query);
        let body = export_csv(
            &rows,
            ExportOptions {
                utf8_bom: self.export.utf8_bom,
            },
        )?;
        let date = self
            .export
            .date_in_filename
            .then(|| Utc::now().date_naive());

        tracing::info!("Exported {} rows of {}", rows.len(), T::full_name());
        Ok(CsvExport {
            filename: export_filename(T::export_slug(), date),
            body,
        })
    }

    pub async fn summary(&self) -> Result<ModuleSummary, RepositoryError> {
        let records = self.repository.list().await?;
        Ok(summarize(&records))
    }

    pub async fn select_all(
        &self,
        query: &ViewQuery,
        mut selection: Selection,
    ) -> Result<SelectionState, RepositoryError> {
        let ids = self.filtered_ids(query).await?;
        selection.select_all(ids.iter().map(String::as_str));
        Ok(selection_state(selection, &ids))
    }

    pub async fn clear_all(
        &self,
        query: &ViewQuery,
        mut selection: Selection,
    ) -> Result<SelectionState, RepositoryError> {
        let ids = self.filtered_ids(query).await?;
        selection.clear_all(ids.iter().map(String::as_str));
        Ok(selection_state(selection, &ids))
    }

    async fn filtered_ids(&self, query: &ViewQuery) -> Result<Vec<String>, RepositoryError> {
        let records = self.repository.list().await?;
        Ok(filtered_ids(&records, query))
    }

    fn handler(&self, action: RowAction) -> Result<&ActionHandler<T>, DispatchError> {
        self.actions
            .get(action)
            .ok_or(DispatchError::Unavailable {
                action,
                element: T::element_name(),
            })
    }

    /// Действие над одной записью.
    ///
    /// Разрушающее действие без подтверждения ничего не меняет и возвращает
    /// `ConfirmationRequired` с текстом запроса.
    pub async fn dispatch(
        &self,
        action: RowAction,
        id: &str,
        confirmed: bool,
    ) -> Result<ActionResult, DispatchError> {
        let handler = self.handler(action)?;
        let record = self.repository.get(id).await?;

        let ids = [id.to_string()];
        if let Some(prompt) =
            ConfirmationPrompt::required(action, &ids, confirmed, T::element_name())
        {
            return Err(DispatchError::ConfirmationRequired(prompt));
        }

        let outcome = self.run(handler, record).await?;
        Ok(self.record_result(action, id, outcome))
    }

    /// Одно действие над списком записей (обычно над выбранными)
    pub async fn dispatch_bulk(
        &self,
        action: RowAction,
        ids: &[String],
        confirmed: bool,
    ) -> Result<BulkActionResponse, DispatchError> {
        let handler = self.handler(action)?;
        if ids.is_empty() {
            return Ok(BulkActionResponse {
                results: Vec::new(),
            });
        }
        if let Some(prompt) = ConfirmationPrompt::required(action, ids, confirmed, T::element_name())
        {
            return Err(DispatchError::ConfirmationRequired(prompt));
        }

        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            let outcome = match self.repository.get(id).await {
                Ok(record) => self
                    .run(handler, record)
                    .await
                    .unwrap_or_else(|e| ActionOutcome::failed(e.to_string())),
                Err(e) => ActionOutcome::failed(e.to_string()),
            };
            results.push(self.record_result(action, id, outcome));
        }
        Ok(BulkActionResponse { results })
    }

    async fn run(
        &self,
        handler: &ActionHandler<T>,
        record: T,
    ) -> Result<ActionOutcome, RepositoryError> {
        let id = record.code().to_string();
        match handler {
            ActionHandler::Navigate => Ok(ActionOutcome::applied(format!(
                "/{}/{}",
                T::route_segment(),
                id
            ))),
            // Переход применяется к хранимой версии под блокировкой записи
            ActionHandler::Update(apply) => self.repository.modify(&id, *apply).await,
            ActionHandler::Remove => {
                self.repository.delete(&id).await?;
                Ok(ActionOutcome::applied(format!(
                    "{} {} deleted",
                    T::element_name(),
                    id
                )))
            }
            ActionHandler::PendingIntegration(message) => {
                Ok(ActionOutcome::not_implemented(*message))
            }
        }
    }

    fn record_result(&self, action: RowAction, id: &str, outcome: ActionOutcome) -> ActionResult {
        let line = format!("{} {}: {}", action, id, outcome.kind());
        match &outcome {
            ActionOutcome::Failed { reason } => {
                tracing::warn!("{} {} failed: {}", T::full_name(), line, reason)
            }
            _ => tracing::info!("{} {}", T::full_name(), line),
        }
        logger::log(T::collection_name(), &line);

        ActionResult {
            record_id: id.to_string(),
            action,
            outcome,
        }
    }
}

fn selection_state(selected: Selection, filtered: &[String]) -> SelectionState {
    let ids = || filtered.iter().map(String::as_str);
    SelectionState {
        selected_in_view: ids().filter(|id| selected.is_selected(id)).count(),
        header_state: selected.header_state(ids()),
        selected,
    }
}
