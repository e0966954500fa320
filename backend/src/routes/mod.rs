//! Route definitions for the Warehouse Inventory Manager

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check and reference data
        .route("/health", get(handlers::health_check))
        .route("/roles", get(handlers::list_roles))
        .route("/colors", get(handlers::list_colors))
        // Operator session
        .nest("/session", session_routes())
        // Warehouse directory
        .nest("/warehouses", warehouse_routes())
        // Scan flow
        .nest("/scan", scan_routes())
        // Reports
        .route("/reports/inventory", get(handlers::get_inventory_report))
}

/// Session routes
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_session))
        .route("/user", put(handlers::select_user))
}

/// Warehouse directory routes
fn warehouse_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_warehouses).post(handlers::create_warehouse),
        )
        .route(
            "/active",
            put(handlers::select_warehouse).delete(handlers::clear_selection),
        )
        .route("/:name/items", get(handlers::list_items))
}

/// Scan flow routes
fn scan_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::scan))
        .route("/item", post(handlers::submit_item))
        .route("/adjust", post(handlers::confirm_adjustment))
        .route("/cancel", post(handlers::cancel))
}
