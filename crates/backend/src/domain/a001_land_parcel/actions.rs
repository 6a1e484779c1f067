use contracts::domain::a001_land_parcel::aggregate::LandParcel;
use contracts::shared::actions::{ActionOutcome, RowAction};

use crate::shared::record_module::{outcome_of, ActionHandler, ActionRegistry};

fn mark_acquired(parcel: &mut LandParcel) -> ActionOutcome {
    let message = format!("Parcel {} marked as acquired", parcel.base.code);
    outcome_of(parcel.mark_acquired(), message)
}

pub fn registry() -> ActionRegistry<LandParcel> {
    ActionRegistry::new()
        .register(RowAction::View, ActionHandler::Navigate)
        .register(RowAction::Edit, ActionHandler::Navigate)
        .register(RowAction::Delete, ActionHandler::Remove)
        .register(RowAction::Approve, ActionHandler::Update(mark_acquired))
}
