//! API Routes
//!
//! Configures the Axum router with all analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    ai_citation_handler, core_web_vitals_handler, domain_authority_handler, health_handler,
    image_audit_handler, mobile_audit_handler, stats_handler, technical_seo_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/core-web-vitals`
/// - `POST /api/domain-authority`
/// - `POST /api/image-audit`
/// - `POST /api/technical-seo`
/// - `POST /api/mobile-audit`
/// - `POST /api/ai-citation`
/// - `GET /stats` - Per-tool cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (the dashboard is served from another host)
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/core-web-vitals", post(core_web_vitals_handler))
        .route("/api/domain-authority", post(domain_authority_handler))
        .route("/api/image-audit", post(image_audit_handler))
        .route("/api/technical-seo", post(technical_seo_handler))
        .route("/api/mobile-audit", post(mobile_audit_handler))
        .route("/api/ai-citation", post(ai_citation_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::time::Duration;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::new(Duration::from_secs(3600)))
    }

    fn post_json(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_every_tool_route_answers() {
        let cases = [
            ("/api/core-web-vitals", r#"{"url":"example.com"}"#),
            ("/api/domain-authority", r#"{"url":"example.com"}"#),
            ("/api/image-audit", r#"{"url":"example.com"}"#),
            ("/api/technical-seo", r#"{"url":"example.com"}"#),
            ("/api/mobile-audit", r#"{"url":"example.com"}"#),
            ("/api/ai-citation", r#"{"brandName":"Acme"}"#),
        ];

        for (uri, body) in cases {
            let response = create_test_app().oneshot(post_json(uri, body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "route {}", uri);
        }
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let response = create_test_app()
            .oneshot(post_json("/api/ai-citation", r#"{"url":"example.com"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_on_tool_route_not_allowed() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/api/mobile-audit").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
