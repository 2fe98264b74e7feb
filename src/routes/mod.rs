use axum::Router;
use tower_http::services::ServeDir;

use crate::{AppState, controllers::home_controller};

pub mod alerts_routes;
pub mod chat_routes;
pub mod home_routes;
pub mod market_routes;
pub mod portfolio_routes;
pub mod query_routes;
pub mod realtime_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = chat_routes::add_routes(router);
    let router = query_routes::add_routes(router);
    let router = portfolio_routes::add_routes(router);
    let router = market_routes::add_routes(router);
    let router = alerts_routes::add_routes(router);
    let router = realtime_routes::add_routes(router);

    router
        .nest_service("/static", ServeDir::new(&state.settings.static_dir))
        .fallback(home_controller::not_found)
        .with_state(state)
}
