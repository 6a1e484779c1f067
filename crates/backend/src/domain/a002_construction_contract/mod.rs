pub mod actions;
pub mod test_data;

use contracts::domain::a002_construction_contract::aggregate::ConstructionContract;

use crate::shared::config::Config;
use crate::shared::record_module::RecordModule;

pub fn module(config: &Config) -> RecordModule<ConstructionContract> {
    RecordModule::in_memory(test_data::records(), actions::registry(), config)
}
