//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET     /                       - Landing page
//! GET     /health                 - Health check
//!
//! # Mail relay API (permissive CORS)
//! POST    /api/send-contact-email - Relay a contact/inquiry submission
//! OPTIONS /api/send-contact-email - CORS preflight (always 200)
//! ```

pub mod contact;
pub mod home;

use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Permissive CORS for the mail relay API.
///
/// Mirrors the contract the form controller relies on:
/// `Access-Control-Allow-Origin: *` with the enumerated request headers.
fn relay_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// Create the mail relay API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/send-contact-email",
            post(contact::send_contact_email).options(contact::preflight),
        )
        .layer(relay_cors())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::home))
        .route("/health", get(health))
        // Mail relay API
        .nest("/api", api_routes())
}
