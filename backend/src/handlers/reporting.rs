//! Reporting handlers for the inventory report and its CSV export

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::reporting::ReportingService;
use crate::AppState;

#[derive(Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>, // "json" or "csv"
}

/// Get the cross-warehouse inventory report
pub async fn get_inventory_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Response> {
    let service = ReportingService::new(state.workspace);

    match query.format.as_deref() {
        None | Some("json") => Ok(Json(service.inventory_report().await).into_response()),
        Some("csv") => {
            let export = service.export_csv().await?;
            let disposition = format!("attachment; filename=\"{}\"", export.file_name);
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                export.body,
            )
                .into_response())
        }
        Some(other) => Err(AppError::ValidationError(format!(
            "Unsupported report format '{}'",
            other
        ))),
    }
}
