use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const GENERIC_ERROR: &str = "An error occurred";

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("query request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("query endpoint returned {status}")]
    Server {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },

    #[error("query endpoint returned no answer")]
    MissingAnswer,
}

impl RelayError {
    /// What the query box shows: the server's `detail` when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct QueryReply {
    pub answer: Option<String>,
    pub result: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Forwards query-box text to the configured endpoint.
#[derive(Clone)]
pub struct QueryRelayClient {
    http: Client,
    endpoint: String,
}

impl QueryRelayClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub async fn send(&self, query: &str) -> Result<String, RelayError> {
        if query.trim().is_empty() {
            return Err(RelayError::EmptyQuery);
        }

        tracing::info!(endpoint = %self.endpoint, query, "relaying query");

        let res = self
            .http
            .post(&self.endpoint)
            .json(&QueryRequest { query })
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail);
            tracing::error!(%status, body = %body, "query endpoint failed");
            return Err(RelayError::Server { status, detail });
        }

        let reply = res.json::<QueryReply>().await?;
        reply
            .answer
            .or(reply.result)
            .ok_or(RelayError::MissingAnswer)
    }
}
