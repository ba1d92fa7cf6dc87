//! HTTP Layer
//!
//! This crate serves the ClaimWatch claim form and a JSON API using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: HTML form, JSON risk evaluation, health
//! - **Report**: Builds the view model (metrics, pie, gauge, banner) for one evaluation
//! - **Render**: Server-side HTML and inline SVG charts
//! - **Middleware**: Request logging
//! - **Error Handling**: Consistent error responses
//!
//! No state is kept between requests; every submission is scored fresh.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod report;
pub mod render;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_claims::RiskScorer;

use crate::config::ApiConfig;
use crate::middleware::request_log_middleware;
use crate::handlers::{form, health, risk};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub scorer: RiskScorer,
}

/// Creates the main router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState {
        config,
        scorer: RiskScorer::new(),
    };

    // HTML form
    let page_routes = Router::new()
        .route("/", get(form::show_form).post(form::submit_form))
        .route("/health", get(health::health_check));

    // JSON API
    let risk_routes = Router::new()
        .route("/evaluate", post(risk::evaluate_claim))
        .route("/factors", get(risk::list_factors));

    let api_routes = Router::new().nest("/risk", risk_routes);

    Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(request_log_middleware))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
