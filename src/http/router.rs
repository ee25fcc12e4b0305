use crate::app_context::AppContext;
use crate::catalog::interface::SpotCatalog;
use crate::cli::Args;
use crate::http::cors;
use crate::{health, planning};
use axum::{routing::get, Router};

pub fn new<SC: SpotCatalog>(args: &Args, app_context: AppContext<SC>) -> Router {
    let cors_policy = cors(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let planning_routes = Router::new()
        .route("/nearby-spots", get(planning::handlers::nearby_spots::<SC>))
        .route("/search-radius", get(planning::handlers::search_radius));

    Router::new()
        .nest("/health", health_routes)
        .nest("/planning", planning_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
