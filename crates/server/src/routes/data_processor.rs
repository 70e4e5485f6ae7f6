use axum::{extract::rejection::JsonRejection, extract::State, Json};
use common::ApiResponse;
use service::data_processor::{DataProcessor, DataProcessorInput};
use tracing::{error, field, info, instrument, warn, Span};
use uuid::Uuid;

use crate::metrics::{self, Outcome, CREATE_DURATION};
use crate::state::AppState;

pub const CREATED: &str = "DataProcessor created successfully";
pub const NOT_FOUND: &str = "DataProcessor doesn't exist";
pub const PROCESSING_FAILED: &str = "Error processing DataProcessor";

/// `POST /api/v1/example`
///
/// Always answers with transport status 200; the envelope's `statusCode`
/// (200, 400 or 500) carries the outcome. A body that cannot be read as a
/// candidate is treated the same as a missing candidate.
#[instrument(name = "create_data_processor", skip_all, fields(request_id = field::Empty))]
pub async fn create_data_processor(
    State(state): State<AppState>,
    payload: Result<Json<Option<DataProcessorInput>>, JsonRejection>,
) -> Json<ApiResponse> {
    let request_id = Uuid::new_v4();
    Span::current().record("request_id", field::display(request_id));
    info!("create_data_processor started");

    let candidate = match payload {
        Ok(Json(candidate)) => candidate,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "request body unreadable");
            None
        }
    };

    let record = match DataProcessor::from_candidate(candidate) {
        Ok(record) => record,
        Err(e) => {
            warn!(reason = %e, "validation failed");
            metrics::record(Outcome::Invalid);
            return Json(ApiResponse::failure(request_id, NOT_FOUND, 400));
        }
    };

    let timer = CREATE_DURATION.start_timer();
    let result = state.data_processors.create_data_processor(record).await;
    timer.observe_duration();

    match result {
        Ok(_) => {
            metrics::record(Outcome::Success);
            let response = ApiResponse::success(request_id, CREATED);
            info!(user_id = record.user_id, response = %response.response, "create_data_processor finished");
            Json(response)
        }
        Err(e) => {
            metrics::record(Outcome::Error);
            error!(error = %e, user_id = record.user_id, "create_data_processor failed");
            Json(ApiResponse::failure(request_id, PROCESSING_FAILED, 500))
        }
    }
}
