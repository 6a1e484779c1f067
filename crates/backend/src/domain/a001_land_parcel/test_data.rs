use contracts::domain::a001_land_parcel::aggregate::{LandParcel, ParcelStatus};
use contracts::domain::common::BaseAggregate;
use contracts::shared::money::Money;

use crate::shared::data::seed::date;

fn parcel(
    code: &str,
    khasra: &str,
    location: &str,
    village: &str,
    owner: &str,
    area_sq_m: i64,
    status: ParcelStatus,
    notified_on: chrono::NaiveDate,
    compensation_rupees: i64,
) -> LandParcel {
    LandParcel {
        base: BaseAggregate::new(code, khasra),
        location: location.into(),
        village: village.into(),
        owner_name: owner.into(),
        area_sq_m,
        status,
        notified_on,
        compensation: Money::inr(compensation_rupees),
    }
}

/// Начальные записи модуля
pub fn records() -> Vec<LandParcel> {
    vec![
        parcel(
            "PAR-001",
            "Khasra 112/3",
            "Gomti Nagar, Lucknow",
            "Ujariyaon",
            "Ram Prakash",
            4_200,
            ParcelStatus::Acquired,
            date(2024, 1, 20),
            45_00_000,
        ),
        parcel(
            "PAR-002",
            "Khasra 87",
            "Sector 7, Jankipuram",
            "Jankipuram",
            "Shanti Devi",
            1_150,
            ParcelStatus::InProgress,
            date(2024, 2, 15),
            5_00_000,
        ),
        parcel(
            "PAR-003",
            "Khasra 231/1",
            "Kanpur Road",
            "Amausi",
            "Mohd. Irfan",
            2_600,
            ParcelStatus::Pending,
            date(2024, 3, 10),
            12_50_000,
        ),
        parcel(
            "PAR-004",
            "Khasra 45",
            "Faizabad Road",
            "Chinhat",
            "Harish Chandra",
            1_800,
            ParcelStatus::Acquired,
            date(2024, 4, 2),
            5_00_000,
        ),
        parcel(
            "PAR-005",
            "Khasra 19/2",
            "Aliganj",
            "Chinhat",
            "Geeta Singh",
            3_350,
            ParcelStatus::InProgress,
            date(2023, 12, 1),
            30_00_000,
        ),
        {
            let mut disputed = parcel(
                "PAR-006",
                "Khasra 302",
                "Sultanpur Road",
                "Arjunganj",
                "Babu Lal",
                5_000,
                ParcelStatus::Disputed,
                date(2024, 5, 18),
                62_00_000,
            );
            disputed.base.comment = Some("Title suit pending in civil court".into());
            disputed
        },
    ]
}
