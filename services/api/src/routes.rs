use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use moodmeal::assessment::{assessment_router, AssessmentService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_service_routes(service: Arc<AssessmentService>) -> axum::Router {
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use moodmeal::assessment::{PostSamplingPolicy, SuggestionEngine};
    use moodmeal::catalog::CatalogStore;
    use std::sync::OnceLock;
    use tower::ServiceExt;

    fn shared_store() -> &'static CatalogStore {
        static STORE: OnceLock<CatalogStore> = OnceLock::new();
        STORE.get_or_init(CatalogStore::builtin)
    }

    fn router() -> axum::Router {
        let service = Arc::new(AssessmentService::new(
            shared_store(),
            SuggestionEngine::default(),
            PostSamplingPolicy::PreferUnseen,
        ));
        with_service_routes(service)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .expect("request builds")
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("handler responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn assessment_round_flows_over_http() {
        let app = router();

        let response = app
            .clone()
            .oneshot(post_empty("/api/v1/assessment/rounds"))
            .await
            .expect("round starts");
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/assessment/rounds/pre",
                json!({ "answers": [5, 5, 5, 5, 5] }),
            ))
            .await
            .expect("pre answers accepted");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(post_empty("/api/v1/assessment/rounds/post-sample"))
            .await
            .expect("post sample drawn");
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/assessment/rounds/post",
                json!({ "answers": [3, 3, 3, 3, 3] }),
            ))
            .await
            .expect("round finalizes");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/assessment/history")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("history served");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn out_of_order_transition_maps_to_conflict() {
        let app = router();

        let response = app
            .oneshot(post_json(
                "/api/v1/assessment/rounds/post",
                json!({ "answers": [3, 3, 3, 3, 3] }),
            ))
            .await
            .expect("handler responds");
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
