use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, BaseAggregate};
use crate::shared::money::Money;
use crate::shared::record_view::{CellValue, ColumnDef, Tabular};

/// Срок ответа на заявление по закону о праве на информацию, дней
pub const RTI_RESPONSE_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RtiStatus {
    Received,
    #[serde(rename = "Under Process")]
    UnderProcess,
    Disposed,
    Rejected,
    Appealed,
}

impl RtiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RtiStatus::Received => "Received",
            RtiStatus::UnderProcess => "Under Process",
            RtiStatus::Disposed => "Disposed",
            RtiStatus::Rejected => "Rejected",
            RtiStatus::Appealed => "Appealed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, RtiStatus::Received | RtiStatus::UnderProcess)
    }
}

/// Заявление о предоставлении информации (агрегат a004)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RtiApplication {
    #[serde(flatten)]
    pub base: BaseAggregate,

    pub applicant: String,

    /// Отдел, которому передано заявление
    pub department: String,

    pub status: RtiStatus,

    pub received_on: NaiveDate,

    pub fee_paid: Money,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("code", "RTI No."),
    ColumnDef::text("description", "Subject"),
    ColumnDef::text("applicant", "Applicant"),
    ColumnDef::text("department", "Department").faceted(),
    ColumnDef::status("status", "Status"),
    ColumnDef::date("received_on", "Received On"),
    ColumnDef::date("due_on", "Due On"),
    ColumnDef::money("fee_paid", "Fee Paid"),
    ColumnDef::text("comment", "Remarks"),
];

impl RtiApplication {
    /// Крайний срок ответа; `None`, если дата выходит за диапазон календаря
    pub fn due_on(&self) -> Option<NaiveDate> {
        self.received_on
            .checked_add_signed(Duration::days(RTI_RESPONSE_DAYS))
    }

    /// Выдать информацию и закрыть заявление
    pub fn dispose(&mut self) -> Result<(), String> {
        self.close(RtiStatus::Disposed)
    }

    pub fn reject(&mut self) -> Result<(), String> {
        self.close(RtiStatus::Rejected)
    }

    fn close(&mut self, to: RtiStatus) -> Result<(), String> {
        if !self.status.is_open() {
            return Err(format!(
                "Application {} is already {}",
                self.base.code,
                self.status.as_str().to_lowercase()
            ));
        }
        self.status = to;
        Ok(())
    }
}

impl Tabular for RtiApplication {
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
            "applicant" => CellValue::text(&self.applicant),
            "department" => CellValue::text(&self.department),
            "status" => CellValue::text(self.status.as_str()),
            "received_on" => CellValue::Date(self.received_on),
            "due_on" => self.due_on().map_or(CellValue::Empty, CellValue::Date),
            "fee_paid" => CellValue::Money(self.fee_paid),
            "comment" => CellValue::optional_text(self.base.comment.as_deref()),
            _ => CellValue::Empty,
        }
    }

    fn date_column() -> Option<&'static str> {
        Some("received_on")
    }

    fn amount_column() -> Option<&'static str> {
        Some("fee_paid")
    }
}

impl AggregateRoot for RtiApplication {
    fn base(&self) -> &BaseAggregate {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAggregate {
        &mut self.base
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.applicant.trim().is_empty() {
            return Err("Applicant must not be empty".into());
        }
        if self.department.trim().is_empty() {
            return Err("Department must not be empty".into());
        }
        if self.due_on().is_none() {
            return Err(format!("Received date {} is out of range", self.received_on));
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "rti_application"
    }

    fn element_name() -> &'static str {
        "RTI application"
    }

    fn list_name() -> &'static str {
        "RTI Applications"
    }

    fn export_slug() -> &'static str {
        "rti-applications"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn received() -> RtiApplication {
        RtiApplication {
            base: BaseAggregate::new("RTI-2024-234", "Copy of layout plan, Sector 9"),
            applicant: "Meena Verma".into(),
            department: "Planning".into(),
            status: RtiStatus::Received,
            received_on: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            fee_paid: Money::inr(10),
        }
    }

    #[test]
    fn test_due_date() {
        let app = received();
        assert_eq!(app.due_on(), NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(app.cell("due_on").as_date(), NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn test_due_date_past_calendar_end() {
        let mut app = received();
        app.received_on = NaiveDate::MAX;
        assert_eq!(app.due_on(), None);
        assert_eq!(app.cell("due_on"), CellValue::Empty);
        assert!(app.validate().is_err());
    }

    #[test]
    fn test_closed_application_cannot_be_rejected() {
        let mut app = received();
        app.dispose().unwrap();
        assert_eq!(app.status, RtiStatus::Disposed);
        assert!(app.reject().is_err());
    }
}
