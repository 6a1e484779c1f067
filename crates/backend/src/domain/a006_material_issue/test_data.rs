use contracts::domain::a006_material_issue::aggregate::{IssueStatus, MaterialIssue};
use contracts::domain::common::BaseAggregate;
use contracts::shared::money::Money;

use crate::shared::data::seed::date;

pub fn records() -> Vec<MaterialIssue> {
    vec![
        MaterialIssue {
            base: BaseAggregate::new("MI-2024-001", "OPC Cement 53 Grade"),
            store: "Central Store, Aliganj".into(),
            issued_to: "PRJ-2024-011".into(),
            quantity: 400,
            unit: "bags".into(),
            status: IssueStatus::Issued,
            issued_on: date(2024, 3, 18),
            value: Money::inr(1_52_000),
        },
        MaterialIssue {
            base: BaseAggregate::new("MI-2024-002", "TMT Bars Fe 500D, 12 mm"),
            store: "Central Store, Aliganj".into(),
            issued_to: "PRJ-2024-011".into(),
            quantity: 12,
            unit: "MT".into(),
            status: IssueStatus::Approved,
            issued_on: date(2024, 4, 3),
            value: Money::inr(7_44_000),
        },
        MaterialIssue {
            base: BaseAggregate::new("MI-2024-003", "Hume Pipe NP3, 600 mm"),
            store: "Site Store, Sector 4".into(),
            issued_to: "PRJ-2024-015".into(),
            quantity: 60,
            unit: "nos".into(),
            status: IssueStatus::Requested,
            issued_on: date(2024, 5, 9),
            value: Money::inr(3_90_000),
        },
        MaterialIssue {
            base: BaseAggregate::new("MI-2024-004", "Bitumen VG-30")
                .with_comment("Quantity exceeds approved estimate"),
            store: "Site Store, Basant Kunj".into(),
            issued_to: "PRJ-2023-027".into(),
            quantity: 18,
            unit: "MT".into(),
            status: IssueStatus::Rejected,
            issued_on: date(2024, 2, 26),
            value: Money::inr(8_10_000),
        },
        MaterialIssue {
            base: BaseAggregate::new("MI-2024-005", "Copper Wire 4 sq mm"),
            store: "Central Store, Aliganj".into(),
            issued_to: "PRJ-2024-011".into(),
            quantity: 25,
            unit: "coils".into(),
            status: IssueStatus::Requested,
            issued_on: date(2024, 5, 20),
            value: Money::inr(62_500),
        },
    ]
}
