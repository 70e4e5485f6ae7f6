use axum::Json;
use common::HealthReport;

/// Static liveness payload. Does not probe the database or the disk.
pub async fn health() -> Json<HealthReport> {
    Json(HealthReport::all_up())
}
