use async_trait::async_trait;
use contracts::domain::common::{AggregateRoot, EntityMetadata};
use contracts::shared::actions::ActionOutcome;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{element} {id} not found")]
    NotFound { element: &'static str, id: String },

    #[error("{element} {id} already exists")]
    AlreadyExists { element: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Запись изменилась после того, как клиент её прочитал
    #[error("{element} {id} was changed by another request (stored version {stored}, submitted {submitted})")]
    VersionConflict {
        element: &'static str,
        id: String,
        stored: i32,
        submitted: i32,
    },
}

impl RepositoryError {
    pub fn not_found<T: AggregateRoot>(id: &str) -> Self {
        RepositoryError::NotFound {
            element: T::element_name(),
            id: id.to_string(),
        }
    }

    pub fn already_exists<T: AggregateRoot>(id: &str) -> Self {
        RepositoryError::AlreadyExists {
            element: T::element_name(),
            id: id.to_string(),
        }
    }

    pub fn version_conflict<T: AggregateRoot>(id: &str, stored: i32, submitted: i32) -> Self {
        RepositoryError::VersionConflict {
            element: T::element_name(),
            id: id.to_string(),
            stored,
            submitted,
        }
    }
}

/// Хранилище записей модуля
#[async_trait]
pub trait RecordRepository<T>: Send + Sync {
    /// Все записи в порядке вставки
    async fn list(&self) -> Result<Vec<T>, RepositoryError>;

    async fn get(&self, id: &str) -> Result<T, RepositoryError>;

    async fn create(&self, record: T) -> Result<T, RepositoryError>;

    /// Заменить запись `id`; идентификатор менять нельзя.
    ///
    /// `record` должен нести версию хранимой записи (optimistic locking),
    /// иначе `VersionConflict`. Версия растёт, дата создания сохраняется.
    async fn update(&self, id: &str, record: T) -> Result<T, RepositoryError>;

    /// Применить переход состояния к хранимой записи атомарно.
    /// Запись сохраняется только при `Applied` и успешной валидации.
    async fn modify(
        &self,
        id: &str,
        apply: for<'a> fn(&'a mut T) -> ActionOutcome,
    ) -> Result<ActionOutcome, RepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}

/// Хранилище в памяти процесса
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> RecordRepository<T> for InMemoryRepository<T>
where
    T: AggregateRoot + Clone + Send + Sync,
{
    async fn list(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<T, RepositoryError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.code() == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found::<T>(id))
    }

    async fn create(&self, record: T) -> Result<T, RepositoryError> {
        record.validate().map_err(RepositoryError::Validation)?;

        let mut records = self.records.write().await;
        if records.iter().any(|r| r.code() == record.code()) {
            return Err(RepositoryError::already_exists::<T>(record.code()));
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, mut record: T) -> Result<T, RepositoryError> {
        if record.code() != id {
            return Err(RepositoryError::Validation(format!(
                "Record code cannot be changed from {} to {}",
                id,
                record.code()
            )));
        }
        record.validate().map_err(RepositoryError::Validation)?;

        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.code() == id)
            .ok_or_else(|| RepositoryError::not_found::<T>(id))?;

        let stored = slot.metadata().version;
        let submitted = record.metadata().version;
        if stored != submitted {
            return Err(RepositoryError::version_conflict::<T>(id, stored, submitted));
        }

        next_revision(&mut record, slot.metadata());
        *slot = record.clone();
        Ok(record)
    }

    async fn modify(
        &self,
        id: &str,
        apply: for<'a> fn(&'a mut T) -> ActionOutcome,
    ) -> Result<ActionOutcome, RepositoryError> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.code() == id)
            .ok_or_else(|| RepositoryError::not_found::<T>(id))?;

        let mut candidate = slot.clone();
        let outcome = apply(&mut candidate);
        if !outcome.is_applied() {
            return Ok(outcome);
        }
        if let Err(reason) = candidate.validate() {
            return Ok(ActionOutcome::failed(reason));
        }

        next_revision(&mut candidate, slot.metadata());
        *slot = candidate;
        Ok(outcome)
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.code() != id);
        if records.len() == before {
            return Err(RepositoryError::not_found::<T>(id));
        }
        Ok(())
    }
}

/// Метаданные новой версии: created_at хранимой записи, версия +1
fn next_revision<T: AggregateRoot>(record: &mut T, stored: &EntityMetadata) {
    let metadata = record.metadata_mut();
    metadata.created_at = stored.created_at;
    metadata.version = stored.version;
    metadata.increment_version();
    metadata.touch();
}
