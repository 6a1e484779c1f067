use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, BaseAggregate};
use crate::shared::money::Money;
use crate::shared::record_view::{CellValue, ColumnDef, Tabular};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueStatus {
    Requested,
    Approved,
    Issued,
    Rejected,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Requested => "Requested",
            IssueStatus::Approved => "Approved",
            IssueStatus::Issued => "Issued",
            IssueStatus::Rejected => "Rejected",
        }
    }
}

/// Выдача материалов со склада на объект (агрегат a006)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialIssue {
    #[serde(flatten)]
    pub base: BaseAggregate,

    pub store: String,

    /// Объект/проект-получатель
    pub issued_to: String,

    pub quantity: i64,

    /// Единица измерения (bags, MT, nos)
    pub unit: String,

    pub status: IssueStatus,
    pub issued_on: NaiveDate,
    pub value: Money,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("code", "Issue No."),
    ColumnDef::text("description", "Material"),
    ColumnDef::text("store", "Store").faceted(),
    ColumnDef::text("issued_to", "Issued To"),
    ColumnDef::count("quantity", "Quantity"),
    ColumnDef::text("unit", "Unit"),
    ColumnDef::status("status", "Status"),
    ColumnDef::date("issued_on", "Issue Date"),
    ColumnDef::money("value", "Value"),
    ColumnDef::text("comment", "Remarks"),
];

impl MaterialIssue {
    pub fn approve(&mut self) -> Result<(), String> {
        self.decide(IssueStatus::Approved)
    }

    pub fn reject(&mut self) -> Result<(), String> {
        self.decide(IssueStatus::Rejected)
    }

    fn decide(&mut self, to: IssueStatus) -> Result<(), String> {
        if self.status != IssueStatus::Requested {
            return Err(format!(
                "Issue {} is {}, only requested issues can be decided",
                self.base.code,
                self.status.as_str().to_lowercase()
            ));
        }
        self.status = to;
        Ok(())
    }
}

impl Tabular for MaterialIssue {
    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn record_id(&self) -> &str {
        &self.base.code
    }

    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "code" => CellValue::text(&self.base.code),
            "description" => CellValue::text(&self.base.description),
            "store" => CellValue::text(&self.store),
            "issued_to" => CellValue::text(&self.issued_to),
            "quantity" => CellValue::Count(self.quantity),
            "unit" => CellValue::text(&self.unit),
            "status" => CellValue::text(self.status.as_str()),
            "issued_on" => CellValue::Date(self.issued_on),
            "value" => CellValue::Money(self.value),
            "comment" => CellValue::optional_text(self.base.comment.as_deref()),
            _ => CellValue::Empty,
        }
    }

    fn date_column() -> Option<&'static str> {
        Some("issued_on")
    }

    fn amount_column() -> Option<&'static str> {
        Some("value")
    }
}

impl AggregateRoot for MaterialIssue {
    fn base(&self) -> &BaseAggregate {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAggregate {
        &mut self.base
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.quantity <= 0 {
            return Err("Quantity must be positive".into());
        }
        if self.unit.trim().is_empty() {
            return Err("Unit must not be empty".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "material_issue"
    }

    fn element_name() -> &'static str {
        "Material issue"
    }

    fn list_name() -> &'static str {
        "Material Issues"
    }

    fn export_slug() -> &'static str {
        "material-issues"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decisions_only_from_requested() {
        let mut issue = MaterialIssue {
            base: BaseAggregate::new("MI-2024-001", "OPC Cement 53 Grade"),
            store: "Central Store, Aliganj".into(),
            issued_to: "PRJ-2024-011".into(),
            quantity: 400,
            unit: "bags".into(),
            status: IssueStatus::Requested,
            issued_on: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            value: Money::inr(152_000),
        };
        issue.approve().unwrap();
        assert_eq!(issue.status, IssueStatus::Approved);
        assert!(issue.reject().is_err());
        assert_eq!(issue.status, IssueStatus::Approved);
    }
}
