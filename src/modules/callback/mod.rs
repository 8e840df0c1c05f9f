use axum::Router;
use axum::routing::post;
use crate::state::AppState;

pub mod dto;
pub mod error;
pub mod handler;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/colossyan-callback",
        post(handler::receive_callback).fallback(handler::method_not_allowed),
    )
}
