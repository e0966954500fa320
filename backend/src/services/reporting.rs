//! Reporting service for the cross-warehouse inventory report and its CSV
//! export

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use shared::{aggregate, export, ReportRow};
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::Workspace;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    workspace: Arc<Mutex<Workspace>>,
}

/// Aggregated report with its warehouse columns
#[derive(Debug, Serialize)]
pub struct InventoryReport {
    pub warehouses: Vec<String>,
    pub rows: Vec<ReportRow>,
}

/// Rendered CSV ready for download
#[derive(Debug)]
pub struct CsvExport {
    pub file_name: String,
    pub body: String,
}

impl ReportingService {
    pub fn new(workspace: Arc<Mutex<Workspace>>) -> Self {
        Self { workspace }
    }

    /// Aggregate every warehouse into one row per item number and color
    pub async fn inventory_report(&self) -> InventoryReport {
        let workspace = self.workspace.lock().await;
        let rows = aggregate(&workspace.store);
        tracing::debug!("Aggregated {} report rows", rows.len());
        InventoryReport {
            warehouses: workspace.store.warehouse_names(),
            rows,
        }
    }

    /// Render the report as CSV, named after today's date
    pub async fn export_csv(&self) -> AppResult<CsvExport> {
        let body = {
            let workspace = self.workspace.lock().await;
            export::export_csv(&workspace.store)?
        };
        let file_name = export::report_file_name(Utc::now().date_naive());
        tracing::info!("Exported inventory report as {}", file_name);
        Ok(CsvExport { file_name, body })
    }
}
