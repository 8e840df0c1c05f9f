use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::docs::ApiDoc;
use axum::Router;
use crate::state::AppState;

use tower_http::cors::{Any, CorsLayer};

pub fn configure_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The callback stays outside CORS so preflight OPTIONS still gets a 405.
    let public = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes())
        .layer(cors);

    Router::new()
        .merge(public)
        .nest("/api", crate::modules::callback::router())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", axum::routing::get(|| async { "ok" }))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{test_config, test_server, MemoryQuestions, MemoryStorage};
    use axum::http::{HeaderName, HeaderValue, Method};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_and_openapi() {
        let server = test_server(
            test_config(),
            Arc::new(MemoryStorage::default()),
            Arc::new(MemoryQuestions::default()),
        );

        server.get("/api/v1/health").await.assert_text("ok");

        let doc: serde_json::Value = server.get("/api-docs/openapi.json").await.json();
        assert!(doc["paths"]["/api/colossyan-callback"]["post"].is_object());
    }

    #[tokio::test]
    async fn test_cors_preflight_on_public_routes() {
        let server = test_server(
            test_config(),
            Arc::new(MemoryStorage::default()),
            Arc::new(MemoryQuestions::default()),
        );

        let response = server
            .method(Method::OPTIONS, "/api/v1/health")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("https://app.test"),
            )
            .add_header(
                HeaderName::from_static("access-control-request-method"),
                HeaderValue::from_static("GET"),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }
}
