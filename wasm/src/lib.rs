//! WebAssembly module for the Warehouse Inventory Manager
//!
//! Runs the inventory core client-side. Structured values cross the boundary
//! as JSON strings; refusals surface as JS exceptions carrying the message.

use std::fmt::Display;

use chrono::Utc;
use shared::{
    aggregate, export, Color, Direction, InventoryStore, ItemDraft, ScanSession, UserRole,
};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

fn to_js(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(to_js)
}

#[cfg(target_arch = "wasm32")]
fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn log(_message: &str) {}

fn parse_direction(direction: &str) -> Result<Direction, JsValue> {
    match direction {
        "in" => Ok(Direction::In),
        "out" => Ok(Direction::Out),
        other => Err(to_js(format!("Unknown direction '{}'", other))),
    }
}

/// Inventory store plus scan session, owned by the page
#[wasm_bindgen]
pub struct InventoryApp {
    store: InventoryStore,
    session: ScanSession,
}

#[wasm_bindgen]
impl InventoryApp {
    /// Start with the default warehouse, optionally holding the demo items
    #[wasm_bindgen(constructor)]
    pub fn new(seed_sample_data: bool) -> Result<InventoryApp, JsValue> {
        let mut store = InventoryStore::new();
        if seed_sample_data {
            store.seed_sample_data().map_err(to_js)?;
        }
        Ok(Self {
            store,
            session: ScanSession::new(),
        })
    }

    /// Act as the role with this label ("PM", "Chop Driver", ...)
    pub fn select_user(&mut self, label: &str) -> Result<(), JsValue> {
        let role: UserRole = label.parse().map_err(to_js)?;
        self.session.select_user(role);
        log(&format!("Acting as {}", role));
        Ok(())
    }

    pub fn create_warehouse(&mut self, name: &str) -> Result<(), JsValue> {
        self.store.create_warehouse(name).map_err(to_js)?;
        log(&format!("Created warehouse '{}'", name));
        Ok(())
    }

    /// Make `name` the active warehouse; any open dialog is closed
    pub fn select_warehouse(&mut self, name: &str) -> Result<(), JsValue> {
        self.store.select_warehouse(name).map_err(to_js)?;
        self.session.cancel();
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
        self.session.cancel();
    }

    /// Warehouse summaries (name, item count, active flag) as JSON
    pub fn warehouses_json(&self) -> Result<String, JsValue> {
        to_json(&self.store.summaries())
    }

    /// `[code, record]` pairs of one warehouse as JSON
    pub fn items_json(&self, warehouse: &str) -> Result<String, JsValue> {
        let items = self.store.items(warehouse).map_err(to_js)?;
        to_json(&items)
    }

    /// Scan a code; returns the new session state as JSON
    pub fn scan(&mut self, code: &str) -> Result<String, JsValue> {
        let state = self.session.scan(&self.store, code).map_err(to_js)?;
        log(&format!("Scanned '{}': {}", code, state.name()));
        to_json(state)
    }

    /// Submit the item form (JSON `ItemDraft`); returns the stored record
    pub fn submit_item_json(&mut self, draft_json: &str) -> Result<String, JsValue> {
        let draft: ItemDraft = serde_json::from_str(draft_json)
            .map_err(|e| to_js(format!("Invalid item JSON: {}", e)))?;
        let record = self
            .session
            .submit_item(&mut self.store, draft)
            .map_err(to_js)?;
        to_json(&record)
    }

    /// Check in (`"in"`) or out (`"out"`) the amount typed in the dialog
    pub fn confirm_adjustment(&mut self, direction: &str, amount: &str) -> Result<String, JsValue> {
        let direction = parse_direction(direction)?;
        let record = self
            .session
            .confirm_adjustment(&mut self.store, direction, amount)
            .map_err(to_js)?;
        log(&format!(
            "Checked {} {}: now {}",
            direction, record.item_number, record.quantity
        ));
        to_json(&record)
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    pub fn state_json(&self) -> Result<String, JsValue> {
        to_json(&self.session)
    }

    pub fn active_warehouse(&self) -> Option<String> {
        self.store.active_warehouse().map(str::to_string)
    }

    /// Aggregated report rows as JSON
    pub fn report_json(&self) -> Result<String, JsValue> {
        to_json(&aggregate(&self.store))
    }

    pub fn export_csv(&self) -> Result<String, JsValue> {
        export::export_csv(&self.store).map_err(to_js)
    }

    /// Download name for a report exported today
    pub fn report_file_name(&self) -> String {
        export::report_file_name(Utc::now().date_naive())
    }
}

/// Palette labels in display order, as JSON
#[wasm_bindgen]
pub fn available_colors_json() -> String {
    let labels: Vec<&str> = Color::ALL.iter().map(Color::as_str).collect();
    serde_json::to_string(&labels).unwrap_or_default()
}

/// Role labels, as JSON
#[wasm_bindgen]
pub fn user_roles_json() -> String {
    let labels: Vec<&str> = UserRole::ALL.iter().map(UserRole::label).collect();
    serde_json::to_string(&labels).unwrap_or_default()
}
