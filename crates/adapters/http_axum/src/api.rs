//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod world;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use worldstore_app::ports::WorldRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// Every route under it accepts cross-origin requests from any origin.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: WorldRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/world", get(world::get::<R>).post(world::save::<R>))
        .layer(cors())
}

/// Development CORS policy: any origin, method and header.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
