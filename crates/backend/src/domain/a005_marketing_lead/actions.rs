use contracts::domain::a005_marketing_lead::aggregate::MarketingLead;
use contracts::shared::actions::RowAction;

use crate::shared::record_module::{ActionHandler, ActionRegistry};

pub fn registry() -> ActionRegistry<MarketingLead> {
    ActionRegistry::new()
        .register(RowAction::View, ActionHandler::Navigate)
        .register(RowAction::Edit, ActionHandler::Navigate)
        .register(RowAction::Delete, ActionHandler::Remove)
        // TODO: перевести в Update, когда появится API бронирования в CRM
        .register(
            RowAction::Approve,
            ActionHandler::PendingIntegration("Booking sync with the CRM is not connected yet"),
        )
}
