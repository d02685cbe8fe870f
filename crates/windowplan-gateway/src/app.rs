use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::planner::SchedulePlanner;

/// Shared state, passed as Arc<AppState> to all Axum handlers.
pub struct AppState {
    pub planner: SchedulePlanner,
}

impl AppState {
    pub fn new(planner: SchedulePlanner) -> Self {
        Self { planner }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::http::health::health_handler))
        .route(
            "/api/schedule",
            post(crate::http::schedule::create_schedule),
        )
        .route(
            "/api/schedule/{schedule_id}",
            get(crate::http::schedule::get_schedule),
        )
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use windowplan_window::FixedWindowLookup;

    use super::*;
    use crate::planner::tests::{planner_with, AlwaysDown};

    fn router_with(planner: SchedulePlanner) -> Router {
        build_router(Arc::new(AppState::new(planner)))
    }

    fn router() -> Router {
        router_with(planner_with(Arc::new(FixedWindowLookup::new(5.0))))
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    fn post_items(items: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/schedule")
            .header("content-type", "application/json")
            .body(Body::from(items.to_string()))
            .unwrap()
    }

    fn get_path(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn created_schedule_can_be_retrieved() {
        let app = router();
        let (status, id) = send(
            &app,
            post_items(json!([
                { "identifier": "A", "durationInHours": 7 },
                { "identifier": "B", "durationInHours": 3 }
            ])),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = id.as_str().expect("id is a JSON string").to_string();

        let (status, entries) = send(&app, get_path(&format!("/api/schedule/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        let entries = entries.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains(&json!({ "identifier": "A", "order": 2 })));
        assert!(entries.contains(&json!({ "identifier": "B", "order": 1 })));
    }

    #[tokio::test]
    async fn two_creates_return_different_ids() {
        let app = router();
        let (_, first) = send(&app, post_items(json!([]))).await;
        let (_, second) = send(&app, post_items(json!([]))).await;
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn empty_schedule_round_trips() {
        let app = router();
        let (status, id) = send(&app, post_items(json!([]))).await;
        assert_eq!(status, StatusCode::OK);
        let (status, entries) = send(
            &app,
            get_path(&format!("/api/schedule/{}", id.as_str().unwrap())),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(entries, json!([]));
    }

    #[tokio::test]
    async fn unknown_schedule_is_404() {
        let app = router();
        let path = format!("/api/schedule/{}", windowplan_core::ScheduleId::new_v4());
        let (status, body) = send(&app, get_path(&path)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn malformed_schedule_id_is_400() {
        let (status, body) = send(&router(), get_path("/api/schedule/not-a-uuid")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn negative_duration_is_400() {
        let (status, body) = send(
            &router(),
            post_items(json!([{ "identifier": "A", "durationInHours": -1 }])),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn item_missing_duration_is_400() {
        let (status, body) = send(&router(), post_items(json!([{ "identifier": "A" }]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
        assert!(body["error"].as_str().unwrap().contains("durationInHours"));
    }

    #[tokio::test]
    async fn object_instead_of_array_is_400() {
        let (status, body) = send(
            &router(),
            post_items(json!({ "identifier": "A", "durationInHours": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn non_json_body_is_400() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/schedule")
            .header("content-type", "application/json")
            .body(Body::from("[{"))
            .unwrap();
        let (status, body) = send(&router(), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn window_service_down_is_502() {
        let app = router_with(planner_with(Arc::new(AlwaysDown)));
        let (status, body) = send(
            &app,
            post_items(json!([{ "identifier": "A", "durationInHours": 1 }])),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "UPSTREAM_UNAVAILABLE");
    }

    #[tokio::test]
    async fn health_reports_store_backend() {
        let (status, body) = send(&router(), get_path("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["store"], "memory");
        assert_eq!(body["window_source"], "fixed");
    }
}
