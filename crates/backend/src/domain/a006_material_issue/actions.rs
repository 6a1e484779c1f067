use contracts::domain::a006_material_issue::aggregate::MaterialIssue;
use contracts::shared::actions::{ActionOutcome, RowAction};

use crate::shared::record_module::{outcome_of, ActionHandler, ActionRegistry};

fn approve(issue: &mut MaterialIssue) -> ActionOutcome {
    let message = format!("Material issue {} approved", issue.base.code);
    outcome_of(issue.approve(), message)
}

fn reject(issue: &mut MaterialIssue) -> ActionOutcome {
    let message = format!("Material issue {} rejected", issue.base.code);
    outcome_of(issue.reject(), message)
}

pub fn registry() -> ActionRegistry<MaterialIssue> {
    ActionRegistry::new()
        .register(RowAction::View, ActionHandler::Navigate)
        .register(RowAction::Approve, ActionHandler::Update(approve))
        .register(RowAction::Reject, ActionHandler::Update(reject))
        .register(RowAction::Delete, ActionHandler::Remove)
}
