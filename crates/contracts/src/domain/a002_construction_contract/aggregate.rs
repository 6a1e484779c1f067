use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, BaseAggregate};
use crate::shared::money::Money;
use crate::shared::record_view::{CellValue, ColumnDef, Tabular};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    Tendered,
    Awarded,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Terminated,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Tendered => "Tendered",
            ContractStatus::Awarded => "Awarded",
            ContractStatus::InProgress => "In Progress",
            ContractStatus::Completed => "Completed",
            ContractStatus::Terminated => "Terminated",
        }
    }
}

/// Договор подряда на строительные работы (агрегат a002)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionContract {
    #[serde(flatten)]
    pub base: BaseAggregate,

    /// Код проекта; ссылка не проверяется
    pub project_code: String,

    pub contractor: String,

    /// Вид работ (Civil, Electrical, Road, Drainage)
    pub work_type: String,

    pub status: ContractStatus,

    /// Дата заключения; пусто, пока договор на стадии тендера
    #[serde(default)]
    pub awarded_on: Option<NaiveDate>,

    pub contract_value: Money,

    /// Выполнение, %
    pub progress_percent: i64,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("code", "Contract ID"),
    ColumnDef::text("description", "Work"),
    ColumnDef::text("project_code", "Project"),
    ColumnDef::text("contractor", "Contractor"),
    ColumnDef::text("work_type", "Work Type").faceted(),
    ColumnDef::status("status", "Status"),
    ColumnDef::date("awarded_on", "Awarded On"),
    ColumnDef::money("contract_value", "Contract Value"),
    ColumnDef::count("progress_percent", "Progress (%)"),
    ColumnDef::text("comment", "Remarks"),
];

impl ConstructionContract {
    /// Заключить договор по итогам тендера
    pub fn award(&mut self, on: NaiveDate) -> Result<(), String> {
        if self.status != ContractStatus::Tendered {
            return Err(format!(
                "Contract {} is {}, only tendered contracts can be awarded",
                self.base.code,
                self.status.as_str()
            ));
        }
        self.status = ContractStatus::Awarded;
        self.awarded_on = Some(on);
        Ok(())
    }

    /// Расторгнуть договор
    pub fn terminate(&mut self) -> Result<(), String> {
        match self.status {
            ContractStatus::Completed | ContractStatus::Terminated => Err(format!(
                "Contract {} is already {}",
                self.base.code,
                self.status.as_str().to_lowercase()
            )),
            _ => {
                self.status = ContractStatus::Terminated;
                Ok(())
            }
        }
    }
}

impl Tabular for ConstructionContract {
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
            "project_code" => CellValue::text(&self.project_code),
            "contractor" => CellValue::text(&self.contractor),
            "work_type" => CellValue::text(&self.work_type),
            "status" => CellValue::text(self.status.as_str()),
            "awarded_on" => self.awarded_on.map_or(CellValue::Empty, CellValue::Date),
            "contract_value" => CellValue::Money(self.contract_value),
            "progress_percent" => CellValue::Count(self.progress_percent),
            "comment" => CellValue::optional_text(self.base.comment.as_deref()),
            _ => CellValue::Empty,
        }
    }

    fn date_column() -> Option<&'static str> {
        Some("awarded_on")
    }

    fn amount_column() -> Option<&'static str> {
        Some("contract_value")
    }
}

impl AggregateRoot for ConstructionContract {
    fn base(&self) -> &BaseAggregate {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAggregate {
        &mut self.base
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.contractor.trim().is_empty() {
            return Err("Contractor must not be empty".into());
        }
        if !(0..=100).contains(&self.progress_percent) {
            return Err("Progress must be between 0 and 100".into());
        }
        if self.status != ContractStatus::Tendered && self.awarded_on.is_none() {
            return Err("Award date is required once the contract is awarded".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "construction_contract"
    }

    fn element_name() -> &'static str {
        "Contract"
    }

    fn list_name() -> &'static str {
        "Construction Contracts"
    }

    fn export_slug() -> &'static str {
        "construction-contracts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tendered() -> ConstructionContract {
        ConstructionContract {
            base: BaseAggregate::new("CON-2024-001", "Foundation Work, Block A"),
            project_code: "PRJ-2024-011".into(),
            contractor: "Awadh Infra Pvt Ltd".into(),
            work_type: "Civil".into(),
            status: ContractStatus::Tendered,
            awarded_on: None,
            contract_value: Money::inr(2_75_00_000),
            progress_percent: 0,
        }
    }

    #[test]
    fn test_award_sets_date() {
        let mut c = tendered();
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        c.award(day).unwrap();
        assert_eq!(c.status, ContractStatus::Awarded);
        assert_eq!(c.awarded_on, Some(day));
        assert!(c.award(day).is_err());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_terminate() {
        let mut c = tendered();
        c.terminate().unwrap();
        assert_eq!(c.status, ContractStatus::Terminated);
        assert!(c.terminate().is_err());
    }

    #[test]
    fn test_validate_requires_award_date() {
        let mut c = tendered();
        c.status = ContractStatus::InProgress;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_missing_award_date_is_empty_cell() {
        assert_eq!(tendered().cell("awarded_on"), CellValue::Empty);
    }
}
