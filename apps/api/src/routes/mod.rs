pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::render::handlers as render_handlers;
use crate::richtext::handlers as text_handlers;
use crate::sanitize::handlers as sanitize_handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume records
        .route(
            "/api/v1/resumes/clean",
            post(sanitize_handlers::handle_clean),
        )
        .route(
            "/api/v1/resumes/docx",
            post(render_handlers::handle_render_docx),
        )
        // Text utilities
        .route("/api/v1/text/segments", post(text_handlers::handle_segments))
        .route("/api/v1/text/bullets", post(text_handlers::handle_bullets))
        .route(
            "/api/v1/text/preprocess",
            post(sanitize_handlers::handle_preprocess),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::layout::{default_template, TemplateAssets};
    use crate::render::handlers::DOCX_CONTENT_TYPE;
    use crate::render::test_support::read_part;

    fn test_state() -> AppState {
        AppState {
            template: Arc::new(default_template()),
            assets: Arc::new(TemplateAssets::none()),
        }
    }

    async fn post_json(uri: &str, body: Value) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builder must not fail");
        build_router(test_state())
            .oneshot(request)
            .await
            .expect("handler should respond")
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .expect("body must be collected")
            .to_bytes()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).expect("body must be json")
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_clean_route() {
        let response = post_json(
            "/api/v1/resumes/clean",
            json!({"name": "  Jane ", "summary": "N/A", "skills": ["Rust", null, "-"]}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"name": "Jane", "skills": ["Rust"]})
        );
    }

    #[tokio::test]
    async fn test_clean_route_returns_null_for_placeholder() {
        let response = post_json("/api/v1/resumes/clean", json!("none")).await;
        assert_eq!(body_json(response).await, Value::Null);
    }

    #[tokio::test]
    async fn test_segments_route() {
        let response = post_json(
            "/api/v1/text/segments",
            json!({"text": "Hello <strong>World</strong>!"}),
        )
        .await;
        assert_eq!(
            body_json(response).await,
            json!({"segments": [
                {"text": "Hello ", "bold": false},
                {"text": "World", "bold": true},
                {"text": "!", "bold": false}
            ]})
        );
    }

    #[tokio::test]
    async fn test_bullets_route() {
        let response = post_json(
            "/api/v1/text/bullets",
            json!({"description": "Built it. Ran <strong>it</strong>."}),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["bullets"].as_array().unwrap().len(), 2);
        assert_eq!(body["bullets"][1][1], json!({"text": "it", "bold": true}));
    }

    #[tokio::test]
    async fn test_preprocess_route() {
        let response = post_json(
            "/api/v1/text/preprocess",
            json!({"content": "--- Page 1 ---\nJane Doe\nPage 2\n"}),
        )
        .await;
        assert_eq!(body_json(response).await, json!({"content": "Jane Doe"}));
    }

    #[tokio::test]
    async fn test_docx_route_returns_attachment() {
        let response = post_json(
            "/api/v1/resumes/docx?layout=multi",
            json!({"name": "Jane Doe", "skills": ["Rust"]}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            DOCX_CONTENT_TYPE
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jane_Doe.docx\""
        );

        let bytes = body_bytes(response).await;
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("Rust"));
    }

    #[tokio::test]
    async fn test_docx_route_keeps_non_ascii_name_in_filename_star() {
        let response = post_json("/api/v1/resumes/docx", json!({"name": "José García"})).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jos_Garca.docx\"; filename*=UTF-8''Jos%C3%A9_Garc%C3%ADa.docx"
        );
    }

    #[tokio::test]
    async fn test_docx_route_rejects_non_object_record() {
        let response = post_json("/api/v1/resumes/docx", json!(["not", "a", "record"])).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["error"]["code"],
            "UNPROCESSABLE_ENTITY"
        );
    }

    #[tokio::test]
    async fn test_docx_route_rejects_unknown_layout() {
        let response = post_json("/api/v1/resumes/docx?layout=triple", json!({})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    async fn post_raw(uri: &str, body: &'static str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("request builder must not fail");
        build_router(test_state())
            .oneshot(request)
            .await
            .expect("handler should respond")
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_envelope_on_every_route() {
        for uri in [
            "/api/v1/resumes/clean",
            "/api/v1/resumes/docx",
            "/api/v1/text/segments",
            "/api/v1/text/bullets",
            "/api/v1/text/preprocess",
        ] {
            let response = post_raw(uri, "{\"name\": ").await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body = body_json(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR", "{uri}");
            assert!(body["error"]["message"].is_string(), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_missing_field_uses_error_envelope() {
        let response = post_json("/api/v1/text/bullets", json!({"text": "x"})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = post_json("/api/v1/nope", json!({})).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }
}
