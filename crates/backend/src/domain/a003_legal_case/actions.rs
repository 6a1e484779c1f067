use contracts::domain::a003_legal_case::aggregate::LegalCase;
use contracts::shared::actions::RowAction;

use crate::shared::record_module::{ActionHandler, ActionRegistry};

pub fn registry() -> ActionRegistry<LegalCase> {
    ActionRegistry::new()
        .register(RowAction::View, ActionHandler::Navigate)
        .register(RowAction::Edit, ActionHandler::Navigate)
        .register(RowAction::Delete, ActionHandler::Remove)
}
