//! Inventory service: warehouse directory, scan session and quantity changes
//!
//! Every method takes the workspace lock for its whole duration, so each call
//! is one atomic event against the store.

use std::sync::Arc;

use serde::Serialize;
use shared::{
    Direction, ItemDraft, ItemRecord, SessionState, UserRole, WarehouseSummary,
};
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::Workspace;

/// Inventory service
#[derive(Clone)]
pub struct InventoryService {
    workspace: Arc<Mutex<Workspace>>,
}

/// Who is acting, where, and which dialog is open
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub user: Option<UserRole>,
    pub active_warehouse: Option<String>,
    #[serde(flatten)]
    pub state: SessionState,
}

/// One record of a warehouse listing, with its scan code
#[derive(Debug, Clone, Serialize)]
pub struct ItemEntry {
    pub code: String,
    #[serde(flatten)]
    pub record: ItemRecord,
}

impl SessionView {
    fn of(workspace: &Workspace) -> Self {
        Self {
            user: workspace.session.user(),
            active_warehouse: workspace.store.active_warehouse().map(str::to_string),
            state: workspace.session.state().clone(),
        }
    }
}

impl InventoryService {
    pub fn new(workspace: Arc<Mutex<Workspace>>) -> Self {
        Self { workspace }
    }

    /// Current session snapshot
    pub async fn session(&self) -> SessionView {
        let workspace = self.workspace.lock().await;
        SessionView::of(&workspace)
    }

    /// Switch the acting role
    pub async fn select_user(&self, role: UserRole) -> SessionView {
        let mut workspace = self.workspace.lock().await;
        workspace.session.select_user(role);
        tracing::info!("Acting user set to {}", role);
        SessionView::of(&workspace)
    }

    /// List warehouses with item counts, in directory order
    pub async fn list_warehouses(&self) -> Vec<WarehouseSummary> {
        self.workspace.lock().await.store.summaries()
    }

    /// Create an empty warehouse
    pub async fn create_warehouse(&self, name: &str) -> AppResult<WarehouseSummary> {
        let mut workspace = self.workspace.lock().await;
        workspace.store.create_warehouse(name)?;
        tracing::info!("Created warehouse '{}'", name);
        Ok(WarehouseSummary {
            name: name.to_string(),
            item_count: 0,
            is_active: false,
        })
    }

    /// Point scans at `name`, abandoning any open dialog
    pub async fn select_warehouse(&self, name: &str) -> AppResult<SessionView> {
        let mut workspace = self.workspace.lock().await;
        workspace.store.select_warehouse(name)?;
        workspace.session.cancel();
        tracing::info!("Active warehouse set to '{}'", name);
        Ok(SessionView::of(&workspace))
    }

    /// Return to "no warehouse selected"
    pub async fn clear_selection(&self) -> SessionView {
        let mut workspace = self.workspace.lock().await;
        workspace.store.clear_selection();
        workspace.session.cancel();
        tracing::info!("Active warehouse cleared");
        SessionView::of(&workspace)
    }

    /// Records of one warehouse in insertion order
    pub async fn list_items(&self, warehouse: &str) -> AppResult<Vec<ItemEntry>> {
        let workspace = self.workspace.lock().await;
        let items = workspace
            .store
            .items(warehouse)?
            .into_iter()
            .map(|(code, record)| ItemEntry {
                code: code.to_string(),
                record: record.clone(),
            })
            .collect();
        Ok(items)
    }

    /// Scan a code and open the matching dialog
    pub async fn scan(&self, code: &str) -> AppResult<SessionView> {
        let mut guard = self.workspace.lock().await;
        let workspace = &mut *guard;
        let state = workspace.session.scan(&workspace.store, code)?;
        tracing::debug!("Code '{}' resolved to {}", code, state.name());
        Ok(SessionView::of(workspace))
    }

    /// Submit the open item form
    pub async fn submit_item(&self, draft: ItemDraft) -> AppResult<ItemRecord> {
        let mut guard = self.workspace.lock().await;
        let workspace = &mut *guard;
        let record = workspace
            .session
            .submit_item(&mut workspace.store, draft)?;
        tracing::info!(
            "Saved item {} ({}) qty {} by {}",
            record.item_number,
            record.color,
            record.quantity,
            record.last_updated_by
        );
        Ok(record)
    }

    /// Confirm the open check-in/out dialog
    pub async fn confirm_adjustment(
        &self,
        direction: Direction,
        amount: &str,
    ) -> AppResult<ItemRecord> {
        let mut guard = self.workspace.lock().await;
        let workspace = &mut *guard;
        let record = workspace
            .session
            .confirm_adjustment(&mut workspace.store, direction, amount)?;
        tracing::info!(
            "Checked {} {} of {}: now {}",
            direction,
            amount.trim(),
            record.item_number,
            record.quantity
        );
        Ok(record)
    }

    /// Abandon the open dialog
    pub async fn cancel(&self) -> SessionView {
        let mut workspace = self.workspace.lock().await;
        workspace.session.cancel();
        tracing::debug!("Scan dialog cancelled");
        SessionView::of(&workspace)
    }
}
