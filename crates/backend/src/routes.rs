use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::domain::{
    a001_land_parcel, a002_construction_contract, a003_legal_case, a004_rti_application,
    a005_marketing_lead, a006_material_issue,
};
use crate::handlers::{self, modules::ModuleInfo, records};
use crate::shared::config::Config;
use crate::shared::record_module::{ModuleRecord, RecordModule};

/// Конфигурация всех роутов приложения
pub fn configure_routes(config: &Config) -> Router {
    let mut catalogue = Vec::new();

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/logs",
            get(handlers::logs::list_all).delete(handlers::logs::clear_all),
        )
        // ========================================
        // MODULES
        // ========================================
        .merge(mount(a001_land_parcel::module(config), &mut catalogue))
        .merge(mount(
            a002_construction_contract::module(config),
            &mut catalogue,
        ))
        .merge(mount(a003_legal_case::module(config), &mut catalogue))
        .merge(mount(a004_rti_application::module(config), &mut catalogue))
        .merge(mount(a005_marketing_lead::module(config), &mut catalogue))
        .merge(mount(a006_material_issue::module(config), &mut catalogue));

    app.merge(
        Router::new()
            .route("/api/modules", get(handlers::modules::list_all))
            .with_state(Arc::new(catalogue)),
    )
}

/// Подключить модуль по пути `/api/{route_segment}` и добавить его в каталог
fn mount<T: ModuleRecord>(module: RecordModule<T>, catalogue: &mut Vec<ModuleInfo>) -> Router {
    let route = format!("/api/{}", T::route_segment());
    catalogue.push(ModuleInfo {
        name: T::full_name(),
        title: T::list_name().to_string(),
        route: route.clone(),
        actions: module.description().actions,
    });
    tracing::debug!("Mounted {} at {}", T::full_name(), route);
    Router::new().nest(&route, module_router(module))
}

/// Роуты одного модуля записей
pub fn module_router<T: ModuleRecord>(module: RecordModule<T>) -> Router {
    Router::new()
        .route("/", post(records::create::<T>))
        .route("/list", get(records::list::<T>))
        .route("/columns", get(records::columns::<T>))
        .route("/summary", get(records::summary::<T>))
        .route("/export.csv", get(records::export_csv::<T>))
        .route("/selection/select-all", post(records::select_all::<T>))
        .route("/selection/clear-all", post(records::clear_all::<T>))
        .route("/actions/:action", post(records::dispatch_bulk::<T>))
        .route(
            "/:id",
            get(records::get_by_id::<T>).put(records::update::<T>),
        )
        .route("/:id/actions/:action", post(records::dispatch::<T>))
        .with_state(Arc::new(module))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        configure_routes(&Config::default())
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request(method, uri, body)).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn row_ids(page: &Value) -> Vec<String> {
        page["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_with_status_facet() {
        let (status, page) = send(
            &app(),
            Method::GET,
            "/api/land-parcel/list?facet=status:Pending",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["total"], 1);
        assert_eq!(row_ids(&page), vec!["PAR-003"]);
    }

    #[tokio::test]
    async fn test_list_search_is_case_insensitive() {
        let (_, page) = send(&app(), Method::GET, "/api/land-parcel/list?search=gOMTI", None).await;
        assert_eq!(row_ids(&page), vec!["PAR-001"]);
    }

    #[tokio::test]
    async fn test_amount_sort_is_numeric() {
        let (_, page) = send(
            &app(),
            Method::GET,
            "/api/land-parcel/list?sort=amount_desc&page_size=50",
            None,
        )
        .await;
        let ids = row_ids(&page);
        let pos = |id: &str| ids.iter().position(|x| x == id).unwrap();
        assert!(pos("PAR-001") < pos("PAR-002"));
        assert_eq!(ids[0], "PAR-006");
    }

    #[tokio::test]
    async fn test_page_beyond_last_is_clamped() {
        let (status, page) = send(
            &app(),
            Method::GET,
            "/api/land-parcel/list?page=9&page_size=4",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["page"], 2);
        assert_eq!(page["total_pages"], 2);
        assert_eq!(row_ids(&page), vec!["PAR-005", "PAR-006"]);
    }

    #[tokio::test]
    async fn test_selection_marks_and_header_state() {
        let (_, page) = send(
            &app(),
            Method::GET,
            "/api/land-parcel/list?facet=village:Chinhat&selected=PAR-004",
            None,
        )
        .await;
        assert_eq!(page["header_state"], "indeterminate");
        assert_eq!(page["rows"][0]["selected"], true);
        assert_eq!(page["rows"][1]["selected"], false);

        let (_, state) = send(
            &app(),
            Method::POST,
            "/api/land-parcel/selection/select-all?facet=village:Chinhat&selected=PAR-001",
            None,
        )
        .await;
        assert_eq!(state["header_state"], "checked");
        assert_eq!(state["selected"], json!(["PAR-001", "PAR-004", "PAR-005"]));
    }

    #[tokio::test]
    async fn test_bad_query_is_400() {
        let (status, body) = send(&app(), Method::GET, "/api/land-parcel/list?page=abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_unknown_id_is_404() {
        let (status, _) = send(&app(), Method::GET, "/api/legal-case/CASE-404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_destructive_action_needs_confirmation() {
        let app = app();
        let (status, prompt) = send(
            &app,
            Method::POST,
            "/api/rti-application/RTI-2024-234/actions/reject",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(prompt["title"], "Reject RTI application RTI-2024-234?");

        let (_, record) = send(&app, Method::GET, "/api/rti-application/RTI-2024-234", None).await;
        assert_eq!(record["status"], "Received");

        let (status, result) = send(
            &app,
            Method::POST,
            "/api/rti-application/RTI-2024-234/actions/reject",
            Some(json!({ "confirmed": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["outcome"], "applied");

        let (_, record) = send(&app, Method::GET, "/api/rti-application/RTI-2024-234", None).await;
        assert_eq!(record["status"], "Rejected");
    }

    #[tokio::test]
    async fn test_unregistered_action_is_405() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/legal-case/CASE-2024-001/actions/approve",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["code"], "ACTION_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_pending_integration_stub() {
        let (status, result) = send(
            &app(),
            Method::POST,
            "/api/marketing-lead/LEAD-001/actions/approve",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["outcome"], "not_implemented");
    }

    #[tokio::test]
    async fn test_bulk_delete() {
        let app = app();
        let ids = json!({ "ids": ["MI-2024-003", "MI-2024-005"] });
        let (status, _) = send(&app, Method::POST, "/api/material-issue/actions/delete", Some(ids)).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, response) = send(
            &app,
            Method::POST,
            "/api/material-issue/actions/delete",
            Some(json!({ "ids": ["MI-2024-003", "MI-2024-005"], "confirmed": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["results"].as_array().unwrap().len(), 2);

        let (_, page) = send(&app, Method::GET, "/api/material-issue/list", None).await;
        assert_eq!(page["total"], 3);
    }

    #[tokio::test]
    async fn test_create_duplicate_and_invalid() {
        let app = app();
        let record = json!({
            "code": "RTI-2024-300",
            "description": "Copy of building bye-laws",
            "applicant": "Kiran Bala",
            "department": "Planning",
            "status": "Received",
            "received_on": "2024-06-01",
            "fee_paid": { "amount_minor": 1000, "currency": "INR" }
        });

        let (status, created) = send(&app, Method::POST, "/api/rti-application", Some(record.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["metadata"]["version"], 1);

        let (status, _) = send(&app, Method::POST, "/api/rti-application", Some(record.clone())).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let mut invalid = record;
        invalid["code"] = json!("RTI-2024-301");
        invalid["applicant"] = json!("");
        let (status, body) = send(&app, Method::POST, "/api/rti-application", Some(invalid)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/rti-application",
            Some(json!({ "code": "RTI-2024-302" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_bumps_version() {
        let app = app();
        let (_, mut record) = send(&app, Method::GET, "/api/construction-contract/CON-2024-001", None).await;
        record["progress_percent"] = json!(60);

        let (status, updated) = send(
            &app,
            Method::PUT,
            "/api/construction-contract/CON-2024-001",
            Some(record),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["progress_percent"], 60);
        assert_eq!(updated["metadata"]["version"], 2);
    }

    #[tokio::test]
    async fn test_export_csv() {
        let response = app()
            .oneshot(request(
                Method::GET,
                "/api/land-parcel/export.csv?search=Chinhat",
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"land-parcels.csv\""
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "PAR-004");
    }

    #[tokio::test]
    async fn test_columns_and_catalogue() {
        let app = app();
        let (_, table) = send(&app, Method::GET, "/api/rti-application/columns", None).await;
        assert_eq!(table["facet_columns"], json!(["department", "status"]));
        assert_eq!(table["actions"], json!(["view", "delete", "approve", "reject"]));

        let (_, modules) = send(&app, Method::GET, "/api/modules", None).await;
        let modules = modules.as_array().unwrap();
        assert_eq!(modules.len(), 6);
        assert_eq!(modules[0]["route"], "/api/land-parcel");
    }

    #[tokio::test]
    async fn test_summary_cards() {
        let (status, summary) = send(&app(), Method::GET, "/api/land-parcel/summary", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["total"], 6);
        assert_eq!(summary["cards"][0]["label"], "Total");
    }

    #[tokio::test]
    async fn test_received_date_at_calendar_end_is_rejected() {
        let app = app();
        let record = json!({
            "code": "RTI-2024-310",
            "description": "Copy of sanctioned map",
            "applicant": "Rahul Mishra",
            "department": "Planning",
            "status": "Received",
            "received_on": "+262142-12-31",
            "fee_paid": { "amount_minor": 1000, "currency": "INR" }
        });
        let (status, body) = send(&app, Method::POST, "/api/rti-application", Some(record)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, page) = send(
            &app,
            Method::GET,
            "/api/rti-application/list?search=zzz&sort=date_desc",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["total"], 0);
    }

    #[tokio::test]
    async fn test_stale_update_is_409() {
        let app = app();
        let (_, original) = send(&app, Method::GET, "/api/legal-case/CASE-2024-002", None).await;

        let mut first = original.clone();
        first["comment"] = json!("Adjourned at request of respondent");
        let (status, _) = send(&app, Method::PUT, "/api/legal-case/CASE-2024-002", Some(first)).await;
        assert_eq!(status, StatusCode::OK);

        let mut second = original;
        second["comment"] = json!("Written statement filed");
        let (status, body) = send(&app, Method::PUT, "/api/legal-case/CASE-2024-002", Some(second)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "CONFLICT");

        let (_, stored) = send(&app, Method::GET, "/api/legal-case/CASE-2024-002", None).await;
        assert_eq!(stored["comment"], "Adjourned at request of respondent");
        assert_eq!(stored["metadata"]["version"], 2);
    }

    #[tokio::test]
    async fn test_dispatch_is_written_to_action_log() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/material-issue/MI-2024-003/actions/approve",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, logs) = send(&app, Method::GET, "/api/logs", None).await;
        assert_eq!(status, StatusCode::OK);
        let entry = logs
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["category"] == "material_issue" && e["message"] == "approve MI-2024-003: applied")
            .cloned()
            .expect("dispatch must be logged");
        assert_eq!(entry["source"], "server");

        let (status, _) = send(&app, Method::DELETE, "/api/logs", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, logs) = send(&app, Method::GET, "/api/logs", None).await;
        assert!(logs
            .as_array()
            .unwrap()
            .iter()
            .all(|e| e["id"] != entry["id"]));
    }
}
