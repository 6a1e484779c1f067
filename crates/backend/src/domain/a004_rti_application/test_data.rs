use contracts::domain::a004_rti_application::aggregate::{RtiApplication, RtiStatus};
use contracts::domain::common::BaseAggregate;
use contracts::shared::money::Money;

use crate::shared::data::seed::date;

fn application(
    code: &str,
    subject: &str,
    applicant: &str,
    department: &str,
    status: RtiStatus,
    received_on: chrono::NaiveDate,
) -> RtiApplication {
    RtiApplication {
        base: BaseAggregate::new(code, subject),
        applicant: applicant.into(),
        department: department.into(),
        status,
        received_on,
        fee_paid: Money::inr(10),
    }
}

pub fn records() -> Vec<RtiApplication> {
    vec![
        application(
            "RTI-2024-234",
            "Copy of layout plan, Sector 9",
            "Meena Verma",
            "Planning",
            RtiStatus::Received,
            date(2024, 5, 2),
        ),
        application(
            "RTI-2024-198",
            "Compensation paid for Khasra 87",
            "Shanti Devi",
            "Land Acquisition",
            RtiStatus::UnderProcess,
            date(2024, 4, 11),
        ),
        application(
            "RTI-2024-150",
            "Tender evaluation sheet, CON-2024-002",
            "Vikas Gupta",
            "Engineering",
            RtiStatus::Disposed,
            date(2024, 3, 7),
        ),
        application(
            "RTI-2024-121",
            "Names of allottees, Basant Kunj",
            "Arvind Kumar",
            "Property",
            RtiStatus::Rejected,
            date(2024, 2, 20),
        ),
        {
            let mut appealed = application(
                "RTI-2024-087",
                "Inspection notes, Aliganj encroachment",
                "Nadeem Khan",
                "Enforcement",
                RtiStatus::Appealed,
                date(2024, 1, 15),
            );
            appealed.fee_paid = Money::inr(50);
            appealed.base.comment = Some("First appeal filed before the appellate authority".into());
            appealed
        },
    ]
}
