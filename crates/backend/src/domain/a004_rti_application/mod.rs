pub mod actions;
pub mod test_data;

use contracts::domain::a004_rti_application::aggregate::RtiApplication;

use crate::shared::config::Config;
use crate::shared::record_module::RecordModule;

pub fn module(config: &Config) -> RecordModule<RtiApplication> {
    RecordModule::in_memory(test_data::records(), actions::registry(), config)
}
