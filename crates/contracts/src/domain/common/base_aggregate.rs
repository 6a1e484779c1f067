use serde::{Deserialize, Serialize};

use super::EntityMetadata;

/// Общие поля всех записей модулей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate {
    /// Идентификатор записи (например, "PAR-001", "RTI-2024-234")
    pub code: String,
    /// Описание/название записи
    pub description: String,
    #[serde(default)]
    pub comment: Option<String>,
    /// Заполняется сервером; во входящих DTO можно не передавать
    #[serde(default)]
    pub metadata: EntityMetadata,
}

impl BaseAggregate {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Проверка обязательных общих полей
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Record code must not be empty".into());
        }
        if self.code.chars().any(|c| c.is_whitespace() || c == ',' || c == '/') {
            return Err(format!("Record code '{}' contains invalid characters", self.code));
        }
        if self.description.trim().is_empty() {
            return Err("Description must not be empty".into());
        }
        Ok(())
    }
}
