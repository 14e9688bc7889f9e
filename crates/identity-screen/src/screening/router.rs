use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{error, warn};

use super::domain::CheckRequest;
use super::normalize::MISSING_FIELDS_MESSAGE;
use super::provider::ScreeningProvider;
use super::service::{ScreeningError, ScreeningService};

pub const LIVENESS_BODY: &str = "Api online!";
pub const INVALID_BODY_MESSAGE: &str = "Request body must be a JSON object";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Router builder exposing the liveness probe and the screening endpoint.
pub fn screening_router<P>(service: Arc<ScreeningService<P>>) -> Router
where
    P: ScreeningProvider + 'static,
{
    Router::new()
        .route("/api", get(liveness_handler))
        .route("/api/check", post(check_handler::<P>))
        .with_state(service)
}

pub(crate) async fn liveness_handler() -> &'static str {
    LIVENESS_BODY
}

pub(crate) async fn check_handler<P>(
    State(service): State<Arc<ScreeningService<P>>>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Response
where
    P: ScreeningProvider + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "rejected malformed screening request");
            return message_response(StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE);
        }
    };

    match service.check(request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(ScreeningError::MissingFields) => {
            message_response(StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
        }
        Err(ScreeningError::Provider(err)) => {
            error!(error = %err, "screening provider call failed");
            message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        }
    }
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}
