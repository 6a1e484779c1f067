//! Обработчики, общие для всех модулей записей.
//! Каждый модуль подключает их через `routes::module_router::<T>()`.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;
use contracts::shared::actions::{
    ActionRequest, ActionResult, BulkActionRequest, BulkActionResponse, RowAction,
};
use contracts::shared::record_view::{TableDescription, ViewPage};
use contracts::shared::summary::ModuleSummary;

use super::list_params::ListParams;
use crate::shared::api_error::ApiError;
use crate::shared::record_module::{ModuleRecord, RecordModule, SelectionState};

pub type ModuleState<T> = State<Arc<RecordModule<T>>>;

fn parse_action(name: &str) -> Result<RowAction, ApiError> {
    RowAction::from_str(name).map_err(ApiError::BadRequest)
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// GET /api/{module}/list
pub async fn list<T: ModuleRecord>(
    State(module): ModuleState<T>,
    uri: Uri,
) -> Result<Json<ViewPage<T>>, ApiError> {
    let params = ListParams::from_uri(&uri)?;
    let query = params.to_query::<T>()?;
    let page = module.list_view(&query, &params.selection()).await?;
    Ok(Json(page))
}

/// GET /api/{module}/columns
pub async fn columns<T: ModuleRecord>(State(module): ModuleState<T>) -> Json<TableDescription> {
    Json(module.description())
}

/// GET /api/{module}/summary
pub async fn summary<T: ModuleRecord>(
    State(module): ModuleState<T>,
) -> Result<Json<ModuleSummary>, ApiError> {
    Ok(Json(module.summary().await?))
}

/// GET /api/{module}/export.csv
pub async fn export_csv<T: ModuleRecord>(
    State(module): ModuleState<T>,
    uri: Uri,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListParams::from_uri(&uri)?.to_query::<T>()?;
    let csv = module.export(&query).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", csv.filename),
            ),
        ],
        csv.body,
    ))
}

/// POST /api/{module}/selection/select-all
pub async fn select_all<T: ModuleRecord>(
    State(module): ModuleState<T>,
    uri: Uri,
) -> Result<Json<SelectionState>, ApiError> {
    let params = ListParams::from_uri(&uri)?;
    let query = params.to_query::<T>()?;
    Ok(Json(module.select_all(&query, params.selection()).await?))
}

/// POST /api/{module}/selection/clear-all
pub async fn clear_all<T: ModuleRecord>(
    State(module): ModuleState<T>,
    uri: Uri,
) -> Result<Json<SelectionState>, ApiError> {
    let params = ListParams::from_uri(&uri)?;
    let query = params.to_query::<T>()?;
    Ok(Json(module.clear_all(&query, params.selection()).await?))
}

/// GET /api/{module}/:id
pub async fn get_by_id<T: ModuleRecord>(
    State(module): ModuleState<T>,
    Path(id): Path<String>,
) -> Result<Json<T>, ApiError> {
    Ok(Json(module.get(&id).await?))
}

/// POST /api/{module}
pub async fn create<T: ModuleRecord>(
    State(module): ModuleState<T>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<(StatusCode, Json<T>), ApiError> {
    let record = body(payload)?;
    let created = module.create(record).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/{module}/:id
pub async fn update<T: ModuleRecord>(
    State(module): ModuleState<T>,
    Path(id): Path<String>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, ApiError> {
    let record = body(payload)?;
    Ok(Json(module.update(&id, record).await?))
}

/// POST /api/{module}/:id/actions/:action
pub async fn dispatch<T: ModuleRecord>(
    State(module): ModuleState<T>,
    Path((id, action)): Path<(String, String)>,
    payload: Option<Json<ActionRequest>>,
) -> Result<Json<ActionResult>, ApiError> {
    let action = parse_action(&action)?;
    let confirmed = payload.map_or(false, |Json(req)| req.confirmed);
    Ok(Json(module.dispatch(action, &id, confirmed).await?))
}

/// POST /api/{module}/actions/:action
pub async fn dispatch_bulk<T: ModuleRecord>(
    State(module): ModuleState<T>,
    Path(action): Path<String>,
    payload: Result<Json<BulkActionRequest>, JsonRejection>,
) -> Result<Json<BulkActionResponse>, ApiError> {
    let action = parse_action(&action)?;
    let request = body(payload)?;
    Ok(Json(
        module
            .dispatch_bulk(action, &request.ids, request.confirmed)
            .await?,
    ))
}
