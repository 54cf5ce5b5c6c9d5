use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::service::AssessmentService;
use super::session::SessionError;

/// Router builder exposing the assessment round flow over HTTP.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessment/rounds", post(start_round_handler))
        .route(
            "/api/v1/assessment/rounds/pre",
            post(submit_pre_handler),
        )
        .route(
            "/api/v1/assessment/rounds/post-sample",
            post(start_post_handler),
        )
        .route(
            "/api/v1/assessment/rounds/post",
            post(submit_post_handler),
        )
        .route("/api/v1/assessment/history", get(history_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswersRequest {
    pub(crate) answers: Vec<i32>,
}

pub(crate) async fn start_round_handler(
    State(service): State<Arc<AssessmentService>>,
) -> Response {
    match service.start_round() {
        Ok(prompt) => (StatusCode::CREATED, axum::Json(prompt)).into_response(),
        Err(err) => session_error_response(err),
    }
}

pub(crate) async fn submit_pre_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<AnswersRequest>,
) -> Response {
    match service.submit_pre_answers(&request.answers) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => session_error_response(err),
    }
}

pub(crate) async fn start_post_handler(
    State(service): State<Arc<AssessmentService>>,
) -> Response {
    match service.start_post_round() {
        Ok(prompt) => (StatusCode::CREATED, axum::Json(prompt)).into_response(),
        Err(err) => session_error_response(err),
    }
}

pub(crate) async fn submit_post_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<AnswersRequest>,
) -> Response {
    match service.submit_post_answers(&request.answers, Utc::now()) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(err) => session_error_response(err),
    }
}

pub(crate) async fn history_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    (StatusCode::OK, axum::Json(service.history())).into_response()
}

fn session_error_response(err: SessionError) -> Response {
    // Out-of-order transitions are a sequencing bug in the caller, not a
    // data problem.
    let payload = json!({ "error": err.to_string() });
    (StatusCode::CONFLICT, axum::Json(payload)).into_response()
}
