use contracts::domain::a004_rti_application::aggregate::RtiApplication;
use contracts::shared::actions::{ActionOutcome, RowAction};

use crate::shared::record_module::{outcome_of, ActionHandler, ActionRegistry};

/// Approve = информация выдана, заявление закрыто
fn dispose(application: &mut RtiApplication) -> ActionOutcome {
    let message = format!("RTI application {} disposed", application.base.code);
    outcome_of(application.dispose(), message)
}

fn reject(application: &mut RtiApplication) -> ActionOutcome {
    let message = format!("RTI application {} rejected", application.base.code);
    outcome_of(application.reject(), message)
}

pub fn registry() -> ActionRegistry<RtiApplication> {
    ActionRegistry::new()
        .register(RowAction::View, ActionHandler::Navigate)
        .register(RowAction::Approve, ActionHandler::Update(dispose))
        .register(RowAction::Reject, ActionHandler::Update(reject))
        .register(RowAction::Delete, ActionHandler::Remove)
}
