use contracts::domain::a005_marketing_lead::aggregate::{LeadStatus, MarketingLead};
use contracts::domain::common::BaseAggregate;
use contracts::shared::money::Money;

use crate::shared::data::seed::date;

pub fn records() -> Vec<MarketingLead> {
    vec![
        MarketingLead {
            base: BaseAggregate::new("LEAD-001", "Anil Srivastava"),
            phone: "+91 98390 12345".into(),
            email: Some("anil.srivastava@example.in".into()),
            scheme: "Basant Kunj Yojana".into(),
            source: "Expo".into(),
            status: LeadStatus::New,
            enquiry_date: date(2024, 4, 14),
            budget: Money::inr(35_00_000),
        },
        MarketingLead {
            base: BaseAggregate::new("LEAD-002", "Rekha Pandey"),
            phone: "+91 94150 67890".into(),
            email: None,
            scheme: "Gomti Nagar Extension".into(),
            source: "Walk-in".into(),
            status: LeadStatus::SiteVisit,
            enquiry_date: date(2024, 3, 29),
            budget: Money::inr(85_00_000),
        },
        MarketingLead {
            base: BaseAggregate::new("LEAD-003", "Faisal Ahmed"),
            phone: "+91 70070 44556".into(),
            email: Some("faisal.ahmed@example.in".into()),
            scheme: "Basant Kunj Yojana".into(),
            source: "Website".into(),
            status: LeadStatus::Contacted,
            enquiry_date: date(2024, 5, 6),
            budget: Money::inr(28_00_000),
        },
        MarketingLead {
            base: BaseAggregate::new("LEAD-004", "Sunita Mishra")
                .with_comment("Booked 2BHK, Tower C"),
            phone: "+91 93359 11223".into(),
            email: Some("sunita.m@example.in".into()),
            scheme: "Gomti Nagar Extension".into(),
            source: "Referral".into(),
            status: LeadStatus::Booked,
            enquiry_date: date(2024, 1, 22),
            budget: Money::inr(72_00_000),
        },
        MarketingLead {
            base: BaseAggregate::new("LEAD-005", "Deepak Chaurasia"),
            phone: "+91 80040 99887".into(),
            email: None,
            scheme: "Transport Nagar Commercial".into(),
            source: "Website".into(),
            status: LeadStatus::Lost,
            enquiry_date: date(2023, 12, 18),
            budget: Money::inr(1_20_00_000),
        },
    ]
}
