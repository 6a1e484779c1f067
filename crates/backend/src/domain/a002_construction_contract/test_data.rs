use contracts::domain::a002_construction_contract::aggregate::{
    ConstructionContract, ContractStatus,
};
use contracts::domain::common::BaseAggregate;
use contracts::shared::money::Money;

use crate::shared::data::seed::date;

pub fn records() -> Vec<ConstructionContract> {
    vec![
        ConstructionContract {
            base: BaseAggregate::new("CON-2024-001", "Foundation Work, Block A"),
            project_code: "PRJ-2024-011".into(),
            contractor: "Awadh Infra Pvt Ltd".into(),
            work_type: "Civil".into(),
            status: ContractStatus::InProgress,
            awarded_on: Some(date(2024, 1, 12)),
            contract_value: Money::inr(2_75_00_000),
            progress_percent: 45,
        },
        ConstructionContract {
            base: BaseAggregate::new("CON-2024-002", "Internal Electrification, Tower 2"),
            project_code: "PRJ-2024-011".into(),
            contractor: "Shree Ganesh Electricals".into(),
            work_type: "Electrical".into(),
            status: ContractStatus::Awarded,
            awarded_on: Some(date(2024, 3, 4)),
            contract_value: Money::inr(48_60_000),
            progress_percent: 0,
        },
        ConstructionContract {
            base: BaseAggregate::new("CON-2024-003", "Approach Road, Basant Kunj"),
            project_code: "PRJ-2023-027".into(),
            contractor: "Ravi Constructions".into(),
            work_type: "Road".into(),
            status: ContractStatus::Completed,
            awarded_on: Some(date(2023, 8, 21)),
            contract_value: Money::inr(1_12_00_000),
            progress_percent: 100,
        },
        ConstructionContract {
            base: BaseAggregate::new("CON-2024-004", "Storm Water Drain, Sector 4"),
            project_code: "PRJ-2024-015".into(),
            contractor: "Tiwari & Sons".into(),
            work_type: "Drainage".into(),
            status: ContractStatus::Tendered,
            awarded_on: None,
            contract_value: Money::inr(36_50_000),
            progress_percent: 0,
        },
        ConstructionContract {
            base: BaseAggregate::new("CON-2024-005", "Boundary Wall, Transport Nagar")
                .with_comment("Terminated for delay; bank guarantee encashed"),
            project_code: "PRJ-2023-019".into(),
            contractor: "Kanhaiya Builders".into(),
            work_type: "Civil".into(),
            status: ContractStatus::Terminated,
            awarded_on: Some(date(2023, 5, 9)),
            contract_value: Money::inr(22_40_000),
            progress_percent: 30,
        },
    ]
}
