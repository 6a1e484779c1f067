use axum::Json;

use crate::shared::logger;

/// GET /api/logs
pub async fn list_all() -> Json<Vec<contracts::shared::logger::LogEntry>> {
    Json(logger::repository::get_all_logs())
}

/// DELETE /api/logs
pub async fn clear_all() -> axum::http::StatusCode {
    logger::repository::clear_all_logs();
    axum::http::StatusCode::OK
}
