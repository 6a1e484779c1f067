use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use contracts::shared::actions::RowAction;
use serde::Serialize;

/// Элемент каталога модулей
#[derive(Debug, Clone, Serialize)]
pub struct ModuleInfo {
    /// Например, "a004_rti_application"
    pub name: String,
    pub title: String,
    /// Базовый путь API, например "/api/rti-application"
    pub route: String,
    pub actions: Vec<RowAction>,
}

/// GET /api/modules
pub async fn list_all(State(catalogue): State<Arc<Vec<ModuleInfo>>>) -> Json<Vec<ModuleInfo>> {
    Json(catalogue.as_ref().clone())
}
