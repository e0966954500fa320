//! HTTP API tests
//!
//! Drives the full router with `tower::ServiceExt::oneshot`, one request at a
//! time against a shared workspace seeded with the sample siding items.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use warehouse_inventory_backend::{create_app, AppState, Config};

fn app() -> Router {
    let state = AppState::new(Config::default()).unwrap();
    create_app(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Select a role and a warehouse, ready to scan
async fn ready(app: &Router, role: &str, warehouse: &str) {
    let (status, _) = put(app, "/api/v1/session/user", json!({ "role": role })).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = put(app, "/api/v1/warehouses/active", json!({ "name": warehouse })).await;
    assert_eq!(status, StatusCode::OK);
}

// ============================================================================
// Reference data
// ============================================================================

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = get(&app, "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["warehouses"], 1);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_roles_and_colors() {
    let app = app();
    let (_, roles) = get(&app, "/api/v1/roles").await;
    assert_eq!(roles, json!(["PM", "GM", "Chop Driver", "Lead Installer"]));

    let (_, colors) = get(&app, "/api/v1/colors").await;
    let colors = colors.as_array().unwrap();
    assert_eq!(colors.len(), 14);
    assert_eq!(colors[0], "White");
    assert_eq!(colors[2], "Coal Gray");
    assert_eq!(colors[13], "Green");
}

// ============================================================================
// Warehouse directory
// ============================================================================

#[tokio::test]
async fn test_create_and_list_warehouses() {
    let app = app();
    let (status, created) = post(&app, "/api/v1/warehouses", json!({ "name": "Yard" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Yard");
    assert_eq!(created["item_count"], 0);

    let (_, list) = get(&app, "/api/v1/warehouses").await;
    assert_eq!(list[0]["name"], "Main Warehouse");
    assert_eq!(list[0]["item_count"], 2);
    assert_eq!(list[1]["name"], "Yard");
}

#[tokio::test]
async fn test_create_warehouse_rejections() {
    let app = app();
    let (status, body) = post(&app, "/api/v1/warehouses", json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "name");

    let (status, body) =
        post(&app, "/api/v1/warehouses", json!({ "name": "Main Warehouse" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "DUPLICATE_ENTRY");

    let (_, list) = get(&app, "/api/v1/warehouses").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_select_unknown_warehouse() {
    let app = app();
    let (status, body) =
        put(&app, "/api/v1/warehouses/active", json!({ "name": "Nowhere" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (_, session) = get(&app, "/api/v1/session").await;
    assert_eq!(session["active_warehouse"], Value::Null);
}

#[tokio::test]
async fn test_clear_selection() {
    let app = app();
    ready(&app, "GM", "Main Warehouse").await;
    let (status, session) = send(&app, Method::DELETE, "/api/v1/warehouses/active", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["active_warehouse"], Value::Null);
    assert_eq!(session["user"], "GM");
}

#[tokio::test]
async fn test_list_items_in_insertion_order() {
    let app = app();
    let (status, items) = get(&app, "/api/v1/warehouses/Main%20Warehouse/items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items[0]["code"], "QR001");
    assert_eq!(items[0]["item_number"], "SKU-001");
    assert_eq!(items[0]["last_updated_by"], "PM");
    assert_eq!(items[1]["code"], "QR002");
    assert_eq!(items[1]["color"], "Clay");

    let (status, _) = get(&app, "/api/v1/warehouses/Nowhere/items").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Scan flow
// ============================================================================

#[tokio::test]
async fn test_oversized_check_out_empties_stock() {
    let app = app();
    ready(&app, "Chop Driver", "Main Warehouse").await;

    let (status, session) = post(&app, "/api/v1/scan", json!({ "code": "QR001" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["state"], "adjusting_quantity");
    assert_eq!(session["record"]["quantity"], 50);

    let (status, record) = post(
        &app,
        "/api/v1/scan/adjust",
        json!({ "direction": "out", "amount": "60" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["quantity"], 0);
    assert_eq!(record["last_updated_by"], "Chop Driver");

    let (_, session) = get(&app, "/api/v1/session").await;
    assert_eq!(session["state"], "idle");
}

#[tokio::test]
async fn test_numeric_amount_accepted() {
    let app = app();
    ready(&app, "GM", "Main Warehouse").await;
    post(&app, "/api/v1/scan", json!({ "code": "QR002" })).await;

    let (status, record) = post(
        &app,
        "/api/v1/scan/adjust",
        json!({ "direction": "in", "amount": 5 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["quantity"], 30);
}

#[tokio::test]
async fn test_rejected_amount_keeps_dialog_open() {
    let app = app();
    ready(&app, "GM", "Main Warehouse").await;
    post(&app, "/api/v1/scan", json!({ "code": "QR001" })).await;

    for amount in [json!("0"), json!("-5"), json!("abc"), json!(0)] {
        let (status, body) = post(
            &app,
            "/api/v1/scan/adjust",
            json!({ "direction": "in", "amount": amount }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_AMOUNT");
    }

    let (_, session) = get(&app, "/api/v1/session").await;
    assert_eq!(session["state"], "adjusting_quantity");
    let (_, items) = get(&app, "/api/v1/warehouses/Main%20Warehouse/items").await;
    assert_eq!(items[0]["quantity"], 50);
}

#[tokio::test]
async fn test_non_integer_json_amount_gets_error_body() {
    let app = app();
    ready(&app, "GM", "Main Warehouse").await;
    post(&app, "/api/v1/scan", json!({ "code": "QR001" })).await;

    for amount in [json!(1.5), json!(true), json!(null), json!([3])] {
        let (status, body) = post(
            &app,
            "/api/v1/scan/adjust",
            json!({ "direction": "in", "amount": amount }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_AMOUNT");
        assert_eq!(body["error"]["field"], "amount");
    }

    let (_, session) = get(&app, "/api/v1/session").await;
    assert_eq!(session["state"], "adjusting_quantity");
}

#[tokio::test]
async fn test_whitespace_code_is_accepted() {
    let app = app();
    ready(&app, "GM", "Main Warehouse").await;
    let (status, session) = post(&app, "/api/v1/scan", json!({ "code": "  " })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["state"], "creating_item");
    assert_eq!(session["code"], "  ");

    send(&app, Method::POST, "/api/v1/scan/cancel", None).await;
    let (status, body) = post(&app, "/api/v1/scan", json!({ "code": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "code");
}

#[tokio::test]
async fn test_found_elsewhere_prefills_form() {
    let app = app();
    post(&app, "/api/v1/warehouses", json!({ "name": "Yard" })).await;
    ready(&app, "PM", "Yard").await;

    let (status, session) = post(&app, "/api/v1/scan", json!({ "code": "QR001" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["state"], "creating_item");
    assert_eq!(session["warehouse"], "Yard");
    assert_eq!(session["source_warehouse"], "Main Warehouse");
    assert_eq!(session["prefill"]["item_number"], "SKU-001");
    assert_eq!(session["prefill"]["color"], "Red");
    assert_eq!(session["prefill"]["quantity"], 0);
}

#[tokio::test]
async fn test_new_item_in_yard() {
    let app = app();
    post(&app, "/api/v1/warehouses", json!({ "name": "Yard" })).await;
    ready(&app, "Lead Installer", "Yard").await;

    let (_, session) = post(&app, "/api/v1/scan", json!({ "code": "QR050" })).await;
    assert_eq!(session["state"], "creating_item");
    assert_eq!(session["source_warehouse"], Value::Null);

    let (status, record) = post(
        &app,
        "/api/v1/scan/item",
        json!({
            "item_number": "SKU-099",
            "description": "Widget",
            "quantity": 10,
            "color": "Tan"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["quantity"], 10);
    assert_eq!(record["last_updated_by"], "Lead Installer");

    let (_, items) = get(&app, "/api/v1/warehouses/Yard/items").await;
    assert_eq!(items[0]["code"], "QR050");
    assert_eq!(items[0]["color"], "Tan");
}

#[tokio::test]
async fn test_rejected_item_form() {
    let app = app();
    ready(&app, "GM", "Main Warehouse").await;
    post(&app, "/api/v1/scan", json!({ "code": "QR050" })).await;

    let (status, body) = post(
        &app,
        "/api/v1/scan/item",
        json!({ "item_number": "SKU-099", "description": "Widget", "quantity": 10, "color": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "color");

    let (_, session) = get(&app, "/api/v1/session").await;
    assert_eq!(session["state"], "creating_item");
}

#[tokio::test]
async fn test_cancel_leaves_store_untouched() {
    let app = app();
    ready(&app, "GM", "Main Warehouse").await;
    post(&app, "/api/v1/scan", json!({ "code": "QR001" })).await;

    let (status, session) = send(&app, Method::POST, "/api/v1/scan/cancel", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["state"], "idle");

    let (_, items) = get(&app, "/api/v1/warehouses/Main%20Warehouse/items").await;
    assert_eq!(items[0]["quantity"], 50);
}

#[tokio::test]
async fn test_scan_without_warehouse() {
    let app = app();
    put(&app, "/api/v1/session/user", json!({ "role": "GM" })).await;
    let (status, body) = post(&app, "/api/v1/scan", json!({ "code": "QR001" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "NO_ACTIVE_WAREHOUSE");
}

#[tokio::test]
async fn test_out_of_order_events_rejected() {
    let app = app();
    ready(&app, "GM", "Main Warehouse").await;

    let (status, body) = post(
        &app,
        "/api/v1/scan/adjust",
        json!({ "direction": "in", "amount": "1" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "INVALID_STATE_TRANSITION");
}

// ============================================================================
// Reports
// ============================================================================

#[tokio::test]
async fn test_report_json() {
    let app = app();
    post(&app, "/api/v1/warehouses", json!({ "name": "Yard" })).await;

    let (status, report) = get(&app, "/api/v1/reports/inventory").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["warehouses"], json!(["Main Warehouse", "Yard"]));
    assert_eq!(report["rows"][0]["item_number"], "SKU-001");
    assert_eq!(report["rows"][0]["total_quantity"], 50);
    assert_eq!(report["rows"][0]["warehouses"]["Yard"], 0);
}

#[tokio::test]
async fn test_report_csv_download() {
    let app = app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/reports/inventory?format=csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"inventory-report-"));
    assert!(disposition.ends_with(".csv\""));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(
        body,
        "Item Number,Description,Color,Total Quantity,Main Warehouse\n\
         SKU-001,Red Vinyl Siding,Red,50,50\n\
         SKU-002,Clay Vinyl Siding,Clay,25,25\n"
    );
}

#[tokio::test]
async fn test_report_unknown_format() {
    let app = app();
    let (status, body) = get(&app, "/api/v1/reports/inventory?format=xml").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
