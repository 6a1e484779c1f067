pub mod actions;
pub mod test_data;

use contracts::domain::a005_marketing_lead::aggregate::MarketingLead;

use crate::shared::config::Config;
use crate::shared::record_module::RecordModule;

pub fn module(config: &Config) -> RecordModule<MarketingLead> {
    RecordModule::in_memory(test_data::records(), actions::registry(), config)
}
