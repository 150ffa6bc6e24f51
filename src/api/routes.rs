// report-generation-service/src/api/routes.rs

use crate::api::handler::{ReportHandler, ReportOutcome};
use crate::error::{DocumentError, ErrorResponse};
use crate::models::{GeneratedReport, HealthResponse};
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<ReportHandler>,
}

pub fn create_router(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .route("/api/reports/generate", post(generate_report))
        .route("/api/health", get(health_check))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn generate_report(State(state): State<AppState>, body: Bytes) -> ReportOutcome {
    state.handler.handle_request(&body)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

impl IntoResponse for ReportOutcome {
    fn into_response(self) -> Response {
        match self {
            ReportOutcome::Generated(report) => match download(report) {
                Ok(response) => response,
                Err(e) => failure(&e),
            },
            ReportOutcome::Rejected(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::message(rejection.to_string())),
            )
                .into_response(),
            ReportOutcome::Failed(e) => failure(&e),
        }
    }
}

fn download(report: GeneratedReport) -> Result<Response, DocumentError> {
    // from_bytes keeps non-ASCII client names intact.
    let disposition = HeaderValue::from_bytes(report.content_disposition().as_bytes())?;
    let headers = [
        (CONTENT_TYPE, HeaderValue::from_static(report.content_type)),
        (CONTENT_DISPOSITION, disposition),
        (CONTENT_LENGTH, HeaderValue::from(report.bytes.len())),
    ];

    Ok((StatusCode::OK, headers, report.bytes).into_response())
}

fn failure(e: &DocumentError) -> Response {
    tracing::error!(error = %e, "Report response failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(e.to_error_response()),
    )
        .into_response()
}
