mod common;

use axum::http::StatusCode;
use common::{
    FailingStockRepository, app, app_with, send, send_raw, send_with_content_type,
};
use serde_json::Value;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn create_then_get_returns_the_stored_record() {
    let app = app();

    let (status, created) = send(
        &app,
        "POST",
        "/stock",
        Some(json!({"name": "Acme", "price": 12.5, "company": "Acme Corp"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["message"], "Stock created successfully");
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);

    let (status, stock) = send(&app, "GET", &format!("/stock/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stock,
        json!({"stockid": id, "name": "Acme", "price": 12.5, "company": "Acme Corp"})
    );
}

#[tokio::test]
async fn update_then_delete_reports_affected_rows() {
    let app = app();

    let (_, created) = send(
        &app,
        "POST",
        "/stock",
        Some(json!({"name": "Acme", "price": 12.5, "company": "Acme Corp"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/stock/{id}"),
        Some(json!({"name": "Acme2", "price": 20, "company": "Acme Corp"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert!(
        updated["message"]
            .as_str()
            .unwrap()
            .contains("Total rows/record affected 1")
    );

    let (_, stock) = send(&app, "GET", &format!("/stock/{id}"), None).await;
    assert_eq!(stock["name"], "Acme2");
    assert_eq!(stock["price"], 20.0);

    let (status, deleted) = send(&app, "DELETE", &format!("/stock/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        deleted["message"],
        "Stock deleted successfully. Total rows/record affected 1"
    );

    let (status, gone) = send(&app, "GET", &format!("/stock/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        gone,
        json!({"stockid": 0, "name": "", "price": 0.0, "company": ""})
    );
}

#[tokio::test]
async fn mutations_on_missing_ids_affect_nothing() {
    let app = app();

    let (status, updated) = send(
        &app,
        "PUT",
        "/stock/404",
        Some(json!({"name": "Ghost", "price": 1, "company": "None"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        updated["message"]
            .as_str()
            .unwrap()
            .ends_with("Total rows/record affected 0")
    );

    let (_, deleted) = send(&app, "DELETE", "/stock/404", None).await;
    assert!(
        deleted["message"]
            .as_str()
            .unwrap()
            .ends_with("Total rows/record affected 0")
    );

    let (status, _) = send_raw(&app, "POST", "/stock", Some("")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = send(&app, "GET", "/stock", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn get_all_contains_every_inserted_stock() {
    let app = app();

    for (name, price) in [("Acme", 12.5), ("Globex", 3.0), ("Initech", 99.99)] {
        send(
            &app,
            "POST",
            "/stock",
            Some(json!({"name": name, "price": price, "company": format!("{name} Corp")})),
        )
        .await;
    }

    let (status, all) = send(&app, "GET", "/stock", None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 3);
    for expected in ["Acme", "Globex", "Initech"] {
        assert!(names.contains(&expected));
    }
}

#[tokio::test]
async fn client_supplied_id_is_ignored_on_create() {
    let app = app();

    let (_, created) = send(
        &app,
        "POST",
        "/stock",
        Some(json!({"stockid": 500, "name": "Acme", "price": 1, "company": "Acme Corp"})),
    )
    .await;
    assert_eq!(created["id"], 1);

    let (_, stock) = send(&app, "GET", "/stock/500", None).await;
    assert_eq!(stock["stockid"], 0);
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request() {
    let app = app();

    let (status, body) = send(&app, "GET", "/stock/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");

    let (status, _) = send(&app, "DELETE", "/stock/1.5", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/stock/%205", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn json_bodies_decode_whatever_the_content_type() {
    let app = app();
    let body = r#"{"name":"Acme","price":12.5,"company":"Acme Corp"}"#;

    for content_type in [
        None,
        Some("application/x-www-form-urlencoded"),
        Some("text/plain"),
    ] {
        let (status, bytes) =
            send_with_content_type(&app, "POST", "/stock", content_type, Some(body)).await;
        assert_eq!(status, StatusCode::OK, "content type {content_type:?}");
        let created: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(created["message"], "Stock created successfully");
    }

    let (status, bytes) = send_with_content_type(
        &app,
        "PUT",
        "/stock/1",
        None,
        Some(r#"{"name":"Acme2","price":20,"company":"Acme Corp"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        updated["message"],
        "Stock updated successfully. Total rows/record affected 1"
    );

    let (_, stock) = send(&app, "GET", "/stock/1", None).await;
    assert_eq!(stock["name"], "Acme2");
    assert_eq!(stock["price"], 20.0);
}

#[tokio::test]
async fn null_body_creates_a_zero_valued_stock() {
    let app = app();

    let (status, created) = send(&app, "POST", "/stock", Some(Value::Null)).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();

    let (_, stock) = send(&app, "GET", &format!("/stock/{id}"), None).await;
    assert_eq!(
        stock,
        json!({"stockid": id, "name": "", "price": 0.0, "company": ""})
    );
}

#[tokio::test]
async fn malformed_bodies_are_rejected_without_touching_storage() {
    let app = app();

    let (status, _) = send_raw(&app, "POST", "/stock", Some("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "POST", "/stock", Some(json!({"price": "cheap"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");

    let (status, _) = send_raw(&app, "POST", "/stock", Some("")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = send(&app, "GET", "/stock", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn pool_exhaustion_is_service_unavailable() {
    let app = app_with(Arc::new(FailingStockRepository::pool_timeout()));

    let (status, body) = send(&app, "GET", "/stock", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "Database unavailable");
}

#[tokio::test]
async fn database_errors_are_internal_and_the_service_keeps_serving() {
    let app = app_with(Arc::new(FailingStockRepository::broken_query()));

    let (status, body) = send(
        &app,
        "POST",
        "/stock",
        Some(json!({"name": "Acme", "price": 1, "company": "Acme Corp"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"status": "error", "message": "Database error"}));

    let (status, _) = send(&app, "GET", "/stock/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn metrics_reflect_handled_requests() {
    let app = app();

    send(
        &app,
        "POST",
        "/stock",
        Some(json!({"name": "Acme", "price": 1, "company": "Acme Corp"})),
    )
    .await;
    send(&app, "GET", "/stock", None).await;

    let (status, bytes) = send_raw(&app, "GET", "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("stock_command_service_requests_total"));
    assert!(text.contains("stock_query_service_requests_total"));
    assert!(text.contains("process_start_time_seconds"));
}

#[tokio::test]
async fn openapi_document_lists_stock_paths() {
    let app = app();

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/stock"].is_object());
    assert!(doc["paths"]["/stock/{id}"].is_object());
}
