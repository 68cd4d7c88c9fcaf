//! Clinic API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! API routes are nested under `/api/` and wrapped in the access log and a
//! `Cache-Control: no-store` header; the frontend is served beside them.

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::{delete, get};
use axum::Router;
use tower_http::services::ServeFile;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints::{appointments, doctors, health, patients};
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the clinic router: JSON API plus the static frontend.
pub fn clinic_api_router(core: Arc<CoreState>) -> Router {
    let static_dir = core.config.static_dir.clone();
    let ctx = ApiContext::new(core);

    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    // `/appointments/today` is a static segment and wins over `/:id`.
    let api = Router::new()
        .route("/health", get(health::check))
        .route("/patients", get(patients::list).post(patients::create))
        .route(
            "/patients/:id",
            get(patients::detail)
                .put(patients::update)
                .delete(patients::remove),
        )
        .route("/doctors", get(doctors::list).post(doctors::create))
        .route(
            "/doctors/:id",
            get(doctors::detail)
                .put(doctors::update)
                .delete(doctors::remove),
        )
        .route(
            "/appointments",
            get(appointments::list).post(appointments::create),
        )
        .route("/appointments/today", get(appointments::today))
        .route("/appointments/:id", delete(appointments::remove))
        .with_state(ctx)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(axum::middleware::from_fn(middleware::access_log::log_access));

    Router::new()
        .nest("/api", api)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/styles.css", ServeFile::new(static_dir.join("styles.css")))
}
