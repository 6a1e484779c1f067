//! Действия над строками таблицы и их результаты

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Вид действия над записью
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    View,
    Edit,
    Delete,
    Approve,
    Reject,
    Disable,
}

impl RowAction {
    pub const ALL: [RowAction; 6] = [
        RowAction::View,
        RowAction::Edit,
        RowAction::Delete,
        RowAction::Approve,
        RowAction::Reject,
        RowAction::Disable,
    ];

    /// Разрушающие действия выполняются только после подтверждения
    pub fn is_destructive(&self) -> bool {
        matches!(self, RowAction::Delete | RowAction::Reject | RowAction::Disable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::View => "view",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
            RowAction::Approve => "approve",
            RowAction::Reject => "reject",
            RowAction::Disable => "disable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
            RowAction::Approve => "Approve",
            RowAction::Reject => "Reject",
            RowAction::Disable => "Disable",
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RowAction::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown action: {}", s))
    }
}

/// Результат действия
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Действие выполнено
    Applied { message: String },
    /// Заглушка: интеграция ещё не подключена, ничего не изменено
    NotImplemented { message: String },
    Failed { reason: String },
}

impl ActionOutcome {
    pub fn applied(message: impl Into<String>) -> Self {
        ActionOutcome::Applied {
            message: message.into(),
        }
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        ActionOutcome::NotImplemented {
            message: message.into(),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        ActionOutcome::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied { .. })
    }

    /// Короткое имя для логов
    pub fn kind(&self) -> &'static str {
        match self {
            ActionOutcome::Applied { .. } => "applied",
            ActionOutcome::NotImplemented { .. } => "not_implemented",
            ActionOutcome::Failed { .. } => "failed",
        }
    }
}

/// Запрос на действие с одной записью
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Пользователь подтвердил разрушающее действие
    #[serde(default)]
    pub confirmed: bool,
}

/// Запрос на действие с несколькими записями (обычно с выбранными)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkActionRequest {
    pub ids: Vec<String>,
    #[serde(default)]
    pub confirmed: bool,
}

/// Результат действия для одной записи
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub record_id: String,
    pub action: RowAction,
    #[serde(flatten)]
    pub outcome: ActionOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkActionResponse {
    pub results: Vec<ActionResult>,
}

/// Запрос подтверждения разрушающего действия.
/// Отмена означает, что повторный запрос с `confirmed = true` не отправляется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationPrompt {
    pub action: RowAction,
    pub record_ids: Vec<String>,
    pub title: String,
    pub message: String,
}

impl ConfirmationPrompt {
    /// Возвращает запрос подтверждения, если действие разрушающее и ещё не подтверждено
    pub fn required(
        action: RowAction,
        record_ids: &[String],
        confirmed: bool,
        element_name: &str,
    ) -> Option<Self> {
        if !action.is_destructive() || confirmed {
            return None;
        }

        let subject = match record_ids {
            [single] => format!("{} {}", element_name, single),
            many => format!("{} records", many.len()),
        };
        Some(Self {
            action,
            record_ids: record_ids.to_vec(),
            title: format!("{} {}?", action.label(), subject),
            message: format!(
                "{} {}. This cannot be undone.",
                action.label(),
                subject
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destructive_actions() {
        let destructive: Vec<RowAction> = RowAction::ALL
            .into_iter()
            .filter(|a| a.is_destructive())
            .collect();
        assert_eq!(
            destructive,
            vec![RowAction::Delete, RowAction::Reject, RowAction::Disable]
        );
    }

    #[test]
    fn test_parse_action() {
        assert_eq!("approve".parse::<RowAction>(), Ok(RowAction::Approve));
        assert_eq!("DELETE".parse::<RowAction>(), Ok(RowAction::Delete));
        assert!("archive".parse::<RowAction>().is_err());
    }

    #[test]
    fn test_confirmation_required_only_for_unconfirmed_destructive() {
        let ids = vec!["RTI-2024-234".to_string()];
        assert!(ConfirmationPrompt::required(RowAction::Approve, &ids, false, "RTI").is_none());
        assert!(ConfirmationPrompt::required(RowAction::Reject, &ids, true, "RTI").is_none());

        let prompt = ConfirmationPrompt::required(RowAction::Reject, &ids, false, "RTI application")
            .unwrap();
        assert_eq!(prompt.title, "Reject RTI application RTI-2024-234?");
        assert_eq!(prompt.record_ids, ids);
    }

    #[test]
    fn test_outcome_serde_is_tagged() {
        let json = serde_json::to_value(ActionOutcome::not_implemented("CRM sync pending")).unwrap();
        assert_eq!(json["outcome"], "not_implemented");
        assert_eq!(json["message"], "CRM sync pending");
    }
}
