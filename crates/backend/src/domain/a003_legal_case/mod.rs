pub mod actions;
pub mod test_data;

use contracts::domain::a003_legal_case::aggregate::LegalCase;

use crate::shared::config::Config;
use crate::shared::record_module::RecordModule;

pub fn module(config: &Config) -> RecordModule<LegalCase> {
    RecordModule::in_memory(test_data::records(), actions::registry(), config)
}
