pub mod actions;
pub mod test_data;

use contracts::domain::a001_land_parcel::aggregate::LandParcel;

use crate::shared::config::Config;
use crate::shared::record_module::RecordModule;

/// Модуль "Land Acquisition" с начальными данными
pub fn module(config: &Config) -> RecordModule<LandParcel> {
    RecordModule::in_memory(test_data::records(), actions::registry(), config)
}
