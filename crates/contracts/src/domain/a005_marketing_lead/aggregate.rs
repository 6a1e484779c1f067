use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, BaseAggregate};
use crate::shared::money::Money;
use crate::shared::record_view::{CellValue, ColumnDef, Tabular};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    #[serde(rename = "Site Visit")]
    SiteVisit,
    Booked,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::SiteVisit => "Site Visit",
            LeadStatus::Booked => "Booked",
            LeadStatus::Lost => "Lost",
        }
    }
}

/// Обращение покупателя по жилой/коммерческой схеме (агрегат a005)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingLead {
    #[serde(flatten)]
    pub base: BaseAggregate,

    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,

    /// Схема застройки, которой интересуется клиент
    pub scheme: String,

    /// Канал обращения (Walk-in, Website, Expo, Referral)
    pub source: String,

    pub status: LeadStatus,
    pub enquiry_date: NaiveDate,
    pub budget: Money,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("code", "Lead ID"),
    ColumnDef::text("description", "Name"),
    ColumnDef::text("phone", "Phone"),
    ColumnDef::text("email", "Email"),
    ColumnDef::text("scheme", "Scheme").faceted(),
    ColumnDef::text("source", "Source").faceted(),
    ColumnDef::status("status", "Status"),
    ColumnDef::date("enquiry_date", "Enquiry Date"),
    ColumnDef::money("budget", "Budget"),
    ColumnDef::text("comment", "Remarks"),
];

impl Tabular for MarketingLead {
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
            "phone" => CellValue::text(&self.phone),
            "email" => CellValue::optional_text(self.email.as_deref()),
            "scheme" => CellValue::text(&self.scheme),
            "source" => CellValue::text(&self.source),
            "status" => CellValue::text(self.status.as_str()),
            "enquiry_date" => CellValue::Date(self.enquiry_date),
            "budget" => CellValue::Money(self.budget),
            "comment" => CellValue::optional_text(self.base.comment.as_deref()),
            _ => CellValue::Empty,
        }
    }

    fn date_column() -> Option<&'static str> {
        Some("enquiry_date")
    }

    fn amount_column() -> Option<&'static str> {
        Some("budget")
    }
}

impl AggregateRoot for MarketingLead {
    fn base(&self) -> &BaseAggregate {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAggregate {
        &mut self.base
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        let digits = self.phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < 10 {
            return Err(format!("Phone number '{}' is too short", self.phone));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(format!("Invalid email: {}", email));
            }
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "marketing_lead"
    }

    fn element_name() -> &'static str {
        "Lead"
    }

    fn list_name() -> &'static str {
        "Marketing Leads"
    }

    fn export_slug() -> &'static str {
        "marketing-leads"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_contact_details() {
        let mut lead = MarketingLead {
            base: BaseAggregate::new("LEAD-001", "Anil Srivastava"),
            phone: "+91 98390 12345".into(),
            email: Some("anil@example.in".into()),
            scheme: "Basant Kunj Yojana".into(),
            source: "Expo".into(),
            status: LeadStatus::New,
            enquiry_date: NaiveDate::from_ymd_opt(2024, 4, 14).unwrap(),
            budget: Money::inr(3_500_000),
        };
        assert!(lead.validate().is_ok());

        lead.email = Some("anil.example.in".into());
        assert!(lead.validate().is_err());

        lead.email = None;
        lead.phone = "12345".into();
        assert!(lead.validate().is_err());
        assert_eq!(lead.cell("email"), CellValue::Empty);
    }
}
