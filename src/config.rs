use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    // where the query form relays to; defaults to our own stub endpoint
    pub query_api_url: String,
    pub chat_reply_delay_ms: u64,

    pub templates_dir: String,
    pub static_dir: String,
}

/// The built-in stub on this server; wildcard bind addresses are reached via loopback.
pub fn default_query_api_url(host: &str, port: u16) -> String {
    let target = match host {
        "0.0.0.0" | "::" | "" => "127.0.0.1",
        h => h,
    };
    format!("http://{target}:{port}/api/query")
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let query_api_url = env::var("QUERY_API_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default_query_api_url(&host, port));

    let chat_reply_delay_ms = env::var("CHAT_REPLY_DELAY_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(1500);

    let templates_dir = env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_string());
    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    Settings {
        host,
        port,
        query_api_url,
        chat_reply_delay_ms,
        templates_dir,
        static_dir,
    }
}
