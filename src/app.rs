use axum::Router;
use crate::state::AppState;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

// Callback payloads are small JSON documents; the video itself is fetched.
const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn create_app(state: AppState) -> Router {
    crate::routes::configure_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
        )
        .with_state(state)
}
