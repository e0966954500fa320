//! Warehouse Inventory Manager - Backend Server
//!
//! HTTP front for the inventory core: warehouses, scan sessions, quantity
//! check-in/out and the cross-warehouse report.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::{InventoryStore, ScanSession};
use tokio::sync::Mutex;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use crate::config::Config;
pub use error::{AppError, AppResult};

/// The store and the scan session it is driven through
///
/// One process serves one operator flow, so both live together behind a
/// single lock and every request runs to completion before the next.
#[derive(Debug, Default)]
pub struct Workspace {
    pub store: InventoryStore,
    pub session: ScanSession,
}

impl Workspace {
    /// Build the starting workspace from configuration
    pub fn from_config(config: &crate::config::InventoryConfig) -> AppResult<Self> {
        let mut store = InventoryStore::with_default_warehouse(&config.default_warehouse)
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        if config.seed_sample_data {
            store.seed_sample_data()?;
        }
        Ok(Self {
            store,
            session: ScanSession::new(),
        })
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub workspace: Arc<Mutex<Workspace>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let workspace = Workspace::from_config(&config.inventory)?;
        Ok(Self {
            workspace: Arc::new(Mutex::new(workspace)),
            config: Arc::new(config),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Warehouse Inventory Manager API v1.0"
}
