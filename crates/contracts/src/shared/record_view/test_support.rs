//! Тестовые записи для конвейера представления

use chrono::NaiveDate;

use super::column::{CellValue, ColumnDef, Tabular};
use crate::shared::money::Money;

#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    pub id: String,
    pub location: String,
    pub village: String,
    pub status: String,
    pub notified_on: Option<NaiveDate>,
    pub compensation: Money,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("id", "Parcel ID"),
    ColumnDef::text("location", "Location"),
    ColumnDef::text("village", "Village").faceted(),
    ColumnDef::status("status", "Status"),
    ColumnDef::date("notified_on", "Notified On"),
    ColumnDef::money("compensation", "Compensation"),
];

impl Tabular for Parcel {
    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "id" => CellValue::text(&self.id),
            "location" => CellValue::text(&self.location),
            "village" => CellValue::text(&self.village),
            "status" => CellValue::text(&self.status),
            "notified_on" => self.notified_on.map_or(CellValue::Empty, CellValue::Date),
            "compensation" => CellValue::Money(self.compensation),
            _ => CellValue::Empty,
        }
    }

    fn date_column() -> Option<&'static str> {
        Some("notified_on")
    }

    fn amount_column() -> Option<&'static str> {
        Some("compensation")
    }
}

pub fn parcel(
    id: &str,
    location: &str,
    village: &str,
    status: &str,
    notified_on: (i32, u32, u32),
    rupees: i64,
) -> Parcel {
    Parcel {
        id: id.to_string(),
        location: location.to_string(),
        village: village.to_string(),
        status: status.to_string(),
        notified_on: NaiveDate::from_ymd_opt(notified_on.0, notified_on.1, notified_on.2),
        compensation: Money::inr(rupees),
    }
}

/// Пять участков с разными статусами, датами и суммами
pub fn parcels() -> Vec<Parcel> {
    vec![
        parcel("PAR-001", "Gomti Nagar, Lucknow", "Ujariyaon", "Acquired", (2024, 1, 20), 4_500_000),
        parcel("PAR-002", "Sector 7, Jankipuram", "Jankipuram", "In Progress", (2024, 2, 15), 500_000),
        parcel("PAR-003", "Kanpur Road", "Amausi", "Pending", (2024, 3, 10), 1_250_000),
        parcel("PAR-004", "Faizabad Road", "Chinhat", "Acquired", (2024, 4, 2), 500_000),
        parcel("PAR-005", "Aliganj", "Chinhat", "In Progress", (2023, 12, 1), 3_000_000),
    ]
}

/// `count` однотипных участков PAR-001..PAR-nnn
pub fn numbered_parcels(count: usize) -> Vec<Parcel> {
    (1..=count)
        .map(|n| {
            parcel(
                &format!("PAR-{:03}", n),
                "Vrindavan Yojana",
                "Telibagh",
                if n % 2 == 0 { "Acquired" } else { "Pending" },
                (2024, 1, 1),
                n as i64 * 1000,
            )
        })
        .collect()
}
