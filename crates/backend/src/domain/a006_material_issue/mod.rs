pub mod actions;
pub mod test_data;

use contracts::domain::a006_material_issue::aggregate::MaterialIssue;

use crate::shared::config::Config;
use crate::shared::record_module::RecordModule;

pub fn module(config: &Config) -> RecordModule<MaterialIssue> {
    RecordModule::in_memory(test_data::records(), actions::registry(), config)
}
