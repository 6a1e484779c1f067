use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, BaseAggregate};
use crate::shared::money::Money;
use crate::shared::record_view::{CellValue, ColumnDef, Tabular};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Pending,
    #[serde(rename = "Under Hearing")]
    UnderHearing,
    Reserved,
    Disposed,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "Pending",
            CaseStatus::UnderHearing => "Under Hearing",
            CaseStatus::Reserved => "Reserved",
            CaseStatus::Disposed => "Disposed",
        }
    }
}

/// Судебное дело (агрегат a003)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalCase {
    #[serde(flatten)]
    pub base: BaseAggregate,

    pub court: String,
    pub petitioner: String,
    pub respondent: String,
    pub advocate: String,
    pub status: CaseStatus,
    pub filed_on: NaiveDate,

    /// Следующее заседание; у рассмотренных дел отсутствует
    #[serde(default)]
    pub next_hearing: Option<NaiveDate>,

    /// Сумма иска
    pub claim_amount: Money,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("code", "Case No."),
    ColumnDef::text("description", "Title"),
    ColumnDef::text("court", "Court").faceted(),
    ColumnDef::text("petitioner", "Petitioner"),
    ColumnDef::text("respondent", "Respondent"),
    ColumnDef::text("advocate", "Advocate"),
    ColumnDef::status("status", "Status"),
    ColumnDef::date("filed_on", "Filed On"),
    ColumnDef::date("next_hearing", "Next Hearing"),
    ColumnDef::money("claim_amount", "Claim Amount"),
    ColumnDef::text("comment", "Remarks"),
];

impl Tabular for LegalCase {
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
            "court" => CellValue::text(&self.court),
            "petitioner" => CellValue::text(&self.petitioner),
            "respondent" => CellValue::text(&self.respondent),
            "advocate" => CellValue::text(&self.advocate),
            "status" => CellValue::text(self.status.as_str()),
            "filed_on" => CellValue::Date(self.filed_on),
            "next_hearing" => self.next_hearing.map_or(CellValue::Empty, CellValue::Date),
            "claim_amount" => CellValue::Money(self.claim_amount),
            "comment" => CellValue::optional_text(self.base.comment.as_deref()),
            _ => CellValue::Empty,
        }
    }

    fn date_column() -> Option<&'static str> {
        Some("next_hearing")
    }

    fn amount_column() -> Option<&'static str> {
        Some("claim_amount")
    }
}

impl AggregateRoot for LegalCase {
    fn base(&self) -> &BaseAggregate {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAggregate {
        &mut self.base
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.court.trim().is_empty() {
            return Err("Court must not be empty".into());
        }
        if let Some(next) = self.next_hearing {
            if next < self.filed_on {
                return Err("Next hearing cannot precede the filing date".into());
            }
        }
        if self.status == CaseStatus::Disposed && self.next_hearing.is_some() {
            return Err("Disposed cases have no next hearing".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "legal_case"
    }

    fn element_name() -> &'static str {
        "Case"
    }

    fn list_name() -> &'static str {
        "Legal Cases"
    }

    fn export_slug() -> &'static str {
        "legal-cases"
    }
}
