use contracts::domain::a003_legal_case::aggregate::{CaseStatus, LegalCase};
use contracts::domain::common::BaseAggregate;
use contracts::shared::money::Money;

use crate::shared::data::seed::date;

pub fn records() -> Vec<LegalCase> {
    vec![
        LegalCase {
            base: BaseAggregate::new("CASE-2024-001", "Enhancement of compensation, Khasra 112"),
            court: "High Court, Lucknow Bench".into(),
            petitioner: "Ram Prakash".into(),
            respondent: "Development Authority".into(),
            advocate: "S. K. Mishra".into(),
            status: CaseStatus::UnderHearing,
            filed_on: date(2024, 2, 1),
            next_hearing: Some(date(2024, 8, 12)),
            claim_amount: Money::inr(12_00_000),
        },
        LegalCase {
            base: BaseAggregate::new("CASE-2024-002", "Title suit, Khasra 302"),
            court: "Civil Judge (Senior Division)".into(),
            petitioner: "Babu Lal".into(),
            respondent: "Development Authority".into(),
            advocate: "R. N. Tripathi".into(),
            status: CaseStatus::Pending,
            filed_on: date(2024, 5, 28),
            next_hearing: Some(date(2024, 9, 3)),
            claim_amount: Money::inr(62_00_000),
        },
        LegalCase {
            base: BaseAggregate::new("CASE-2024-003", "Recovery of dues, CON-2024-005"),
            court: "Commercial Court, Lucknow".into(),
            petitioner: "Development Authority".into(),
            respondent: "Kanhaiya Builders".into(),
            advocate: "Anjali Saxena".into(),
            status: CaseStatus::Reserved,
            filed_on: date(2023, 11, 14),
            next_hearing: None,
            claim_amount: Money::inr(8_75_000),
        },
        LegalCase {
            base: BaseAggregate::new("CASE-2023-017", "Allotment cancellation appeal"),
            court: "High Court, Lucknow Bench".into(),
            petitioner: "Priya Kapoor".into(),
            respondent: "Development Authority".into(),
            advocate: "S. K. Mishra".into(),
            status: CaseStatus::Disposed,
            filed_on: date(2023, 3, 6),
            next_hearing: None,
            claim_amount: Money::inr(3_40_000),
        },
        LegalCase {
            base: BaseAggregate::new("CASE-2024-004", "Encroachment removal, Aliganj"),
            court: "District Magistrate Court".into(),
            petitioner: "Development Authority".into(),
            respondent: "Shyam Traders".into(),
            advocate: "R. N. Tripathi".into(),
            status: CaseStatus::UnderHearing,
            filed_on: date(2024, 4, 19),
            next_hearing: Some(date(2024, 7, 25)),
            claim_amount: Money::inr(0),
        },
    ]
}
