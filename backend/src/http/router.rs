//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing,
//! request ids), and creates the axum router ready for serving.

use axum::{http::Request, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use super::handlers;
use super::state::AppState;
use crate::routes::{dasha, numbers, profile};

/// Tags every request lacking an `x-request-id` header with a random UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let value = Uuid::new_v4().to_string().parse().ok()?;
        Some(RequestId::new(value))
    }
}

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // All endpoints are public and read-only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(profile::GET_NUMEROLOGY, get(handlers::get_numerology))
        .route(numbers::GET_BASIC_NUMBER, get(handlers::get_basic_number))
        .route(numbers::GET_DESTINY_NUMBER, get(handlers::get_destiny_number))
        .route(numbers::GET_GRID, get(handlers::get_grid))
        .route(dasha::GET_MAHADASHA, get(handlers::get_mahadasha))
        .route(dasha::GET_ANTARDASHA, get(handlers::get_antardasha))
        .route(dasha::GET_MONTHLY_DASHA, get(handlers::get_monthly_dasha))
        .route(dasha::GET_DAY_DASHA, get(handlers::get_day_dasha))
        .fallback(handlers::not_found)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
        .with_state(state)
}
