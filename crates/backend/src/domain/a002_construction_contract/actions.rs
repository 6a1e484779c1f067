use chrono::Utc;
use contracts::domain::a002_construction_contract::aggregate::ConstructionContract;
use contracts::shared::actions::{ActionOutcome, RowAction};

use crate::shared::record_module::{outcome_of, ActionHandler, ActionRegistry};

/// Approve = заключить договор сегодняшней датой
fn award(contract: &mut ConstructionContract) -> ActionOutcome {
    let today = Utc::now().date_naive();
    let message = format!("Contract {} awarded on {}", contract.base.code, today);
    outcome_of(contract.award(today), message)
}

fn terminate(contract: &mut ConstructionContract) -> ActionOutcome {
    let message = format!("Contract {} terminated", contract.base.code);
    outcome_of(contract.terminate(), message)
}

pub fn registry() -> ActionRegistry<ConstructionContract> {
    ActionRegistry::new()
        .register(RowAction::View, ActionHandler::Navigate)
        .register(RowAction::Edit, ActionHandler::Navigate)
        .register(RowAction::Delete, ActionHandler::Remove)
        .register(RowAction::Approve, ActionHandler::Update(award))
        .register(RowAction::Disable, ActionHandler::Update(terminate))
}
