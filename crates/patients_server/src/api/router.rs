//! Patient API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.

use axum::routing::get;
use axum::Router;

use crate::api::endpoints;
use crate::api::middleware;
use crate::state::AppState;

/// Build the full application router.
///
/// Path params use `:param` syntax (axum 0.7).
pub fn api_router(state: AppState) -> Router {
    let patients = Router::new()
        .route(
            "/pacientes",
            get(endpoints::patients::list)
                .post(endpoints::patients::create)
                .put(endpoints::patients::update),
        )
        .route(
            "/pacientes/:id",
            get(endpoints::patients::detail).delete(endpoints::patients::delete),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(endpoints::health::check))
        .nest("/api", patients)
        .layer(axum::middleware::from_fn(middleware::log_access))
}
