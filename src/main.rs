use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use finrag::{config, routes, templates, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = config::load();

    let hbs = templates::build_handlebars(&settings.templates_dir);
    let state = AppState::new(settings.clone(), hbs);

    let app = routes::app(state);

    let ip = settings
        .host
        .parse::<std::net::IpAddr>()
        .expect("HOST must be an IP address");
    let addr = SocketAddr::from((ip, settings.port));
    tracing::info!("listening on http://{}", addr);
    tracing::info!("query form relays to {}", settings.query_api_url);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind listener");
    axum::serve(listener, app).await.expect("server error");
}
