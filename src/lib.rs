//! Library entrypoint for FinRAG.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

use std::sync::Arc;

use tokio::sync::{broadcast, Mutex, RwLock};

pub mod config;
pub mod models;

pub mod services;

#[path = "views/format.rs"]
pub mod format;
#[path = "views/render.rs"]
pub mod render;
#[path = "views/templates.rs"]
pub mod templates;

pub mod controllers;
pub mod routes;

use services::{
    alerts_service::AlertBook, chat_service::ChatSession, portfolio_service::PortfolioBook,
    relay::QueryRelayClient,
};

#[derive(Clone)]
pub struct AppState {
    pub hbs: templates::Hbs,
    pub settings: config::Settings,
    pub relay: QueryRelayClient,
    pub alerts: Arc<RwLock<AlertBook>>,
    pub portfolio: Arc<RwLock<PortfolioBook>>,
    pub chat: Arc<Mutex<ChatSession>>,
    pub events_tx: broadcast::Sender<String>,
}

impl AppState {
    /// State seeded with the sample alerts, holdings and chat greeting.
    pub fn new(settings: config::Settings, hbs: templates::Hbs) -> Self {
        let (events_tx, _events_rx) = broadcast::channel::<String>(64);

        Self {
            hbs,
            relay: QueryRelayClient::new(settings.query_api_url.clone()),
            settings,
            alerts: Arc::new(RwLock::new(AlertBook::seeded())),
            portfolio: Arc::new(RwLock::new(PortfolioBook::seeded())),
            chat: Arc::new(Mutex::new(ChatSession::new())),
            events_tx,
        }
    }
}
