use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, BaseAggregate};
use crate::shared::money::Money;
use crate::shared::record_view::{CellValue, ColumnDef, Tabular};

/// Статус отвода земельного участка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParcelStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Acquired,
    Disputed,
}

impl ParcelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParcelStatus::Pending => "Pending",
            ParcelStatus::InProgress => "In Progress",
            ParcelStatus::Acquired => "Acquired",
            ParcelStatus::Disputed => "Disputed",
        }
    }
}

/// Земельный участок в процессе отвода (агрегат a001)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandParcel {
    #[serde(flatten)]
    pub base: BaseAggregate,

    /// Адрес/ориентир участка (напр. "Gomti Nagar, Lucknow")
    pub location: String,

    pub village: String,

    /// Владелец по записи о правах
    pub owner_name: String,

    pub area_sq_m: i64,

    pub status: ParcelStatus,

    /// Дата публикации уведомления об изъятии
    pub notified_on: NaiveDate,

    pub compensation: Money,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("code", "Parcel ID"),
    ColumnDef::text("description", "Khasra No."),
    ColumnDef::text("location", "Location"),
    ColumnDef::text("village", "Village").faceted(),
    ColumnDef::text("owner_name", "Owner"),
    ColumnDef::count("area_sq_m", "Area (sq m)"),
    ColumnDef::status("status", "Status"),
    ColumnDef::date("notified_on", "Notified On"),
    ColumnDef::money("compensation", "Compensation"),
    ColumnDef::text("comment", "Remarks"),
];

impl LandParcel {
    /// Завершить отвод участка
    pub fn mark_acquired(&mut self) -> Result<(), String> {
        match self.status {
            ParcelStatus::Pending | ParcelStatus::InProgress => {
                self.status = ParcelStatus::Acquired;
                Ok(())
            }
            ParcelStatus::Acquired => Err(format!("Parcel {} is already acquired", self.base.code)),
            ParcelStatus::Disputed => Err(format!(
                "Parcel {} is under dispute and cannot be acquired",
                self.base.code
            )),
        }
    }
}

impl Tabular for LandParcel {
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
            "location" => CellValue::text(&self.location),
            "village" => CellValue::text(&self.village),
            "owner_name" => CellValue::text(&self.owner_name),
            "area_sq_m" => CellValue::Count(self.area_sq_m),
            "status" => CellValue::text(self.status.as_str()),
            "notified_on" => CellValue::Date(self.notified_on),
            "compensation" => CellValue::Money(self.compensation),
            "comment" => CellValue::optional_text(self.base.comment.as_deref()),
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

impl AggregateRoot for LandParcel {
    fn base(&self) -> &BaseAggregate {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAggregate {
        &mut self.base
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.village.trim().is_empty() {
            return Err("Village must not be empty".into());
        }
        if self.area_sq_m <= 0 {
            return Err("Area must be positive".into());
        }
        if self.compensation.amount_minor < 0 {
            return Err("Compensation must not be negative".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "land_parcel"
    }

    fn element_name() -> &'static str {
        "Land parcel"
    }

    fn list_name() -> &'static str {
        "Land Acquisition"
    }

    fn export_slug() -> &'static str {
        "land-parcels"
    }
}
