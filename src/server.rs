use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::routes::{self, AppState};

/// Assemble the full application router.
///
/// Auth is enforced per-handler via the `Auth` / `OptionalAuth` extractors,
/// so public reads and protected mutations can share resource paths.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/ready", get(routes::health::ready))
        .route("/api/ingredients", get(routes::ingredients::list))
        .route("/api/ingredients/{id}", get(routes::ingredients::retrieve))
        .route("/api/tags", get(routes::tags::list))
        .route("/api/tags/{id}", get(routes::tags::retrieve))
        .route(
            "/api/recipes",
            get(routes::recipes::list).post(routes::recipes::create),
        )
        .route(
            "/api/recipes/download_shopping_cart",
            get(routes::shopping::download),
        )
        .route(
            "/api/recipes/{id}",
            get(routes::recipes::retrieve)
                .patch(routes::recipes::update)
                .delete(routes::recipes::remove),
        )
        .route(
            "/api/recipes/{id}/favorite",
            post(routes::favorites::add).delete(routes::favorites::remove),
        )
        .route(
            "/api/recipes/{id}/shopping_cart",
            post(routes::shopping::add).delete(routes::shopping::remove),
        )
        .route(
            "/api/users/subscriptions",
            get(routes::subscriptions::list),
        )
        .route(
            "/api/users/{id}/subscribe",
            post(routes::subscriptions::subscribe).delete(routes::subscriptions::unsubscribe),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
