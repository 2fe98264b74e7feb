use std::time::Duration;

use chrono::Utc;

use crate::{
    models::{ChatMessage, Sender},
    services::mock_data,
    AppState,
};

pub const CHAT_UPDATED: &str = "chatUpdated";

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    replies_sent: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

fn message(text: &str, sender: Sender) -> ChatMessage {
    ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        text: text.to_string(),
        sender,
        timestamp: Utc::now(),
    }
}

impl ChatSession {
    /// A fresh session holding only the advisor's greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![message(mock_data::CHAT_GREETING, Sender::Ai)],
            replies_sent: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Quick questions are offered until the user says something.
    pub fn show_quick_questions(&self) -> bool {
        self.messages.len() == 1
    }

    /// Appends a trimmed user message; blank input is ignored.
    pub fn push_user(&mut self, text: &str) -> Option<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let msg = message(text, Sender::User);
        self.messages.push(msg.clone());
        Some(msg)
    }

    /// Appends the next canned reply, cycling through the sample answers.
    pub fn push_reply(&mut self) -> ChatMessage {
        let replies = mock_data::CHAT_REPLIES;
        let text = replies[self.replies_sent % replies.len()];
        self.replies_sent += 1;

        let msg = message(text, Sender::Ai);
        self.messages.push(msg.clone());
        msg
    }
}

pub async fn list_messages(state: &AppState) -> (Vec<ChatMessage>, bool) {
    let chat = state.chat.lock().await;
    (chat.messages().to_vec(), chat.show_quick_questions())
}

/// Records the user's message, waits out the "thinking" delay, then answers.
/// Returns `false` when the input was blank and nothing was sent.
pub async fn send_message(state: &AppState, text: &str) -> bool {
    let Some(sent) = state.chat.lock().await.push_user(text) else {
        return false;
    };
    let _ = state.events_tx.send(CHAT_UPDATED.to_string());
    tracing::debug!(id = %sent.id, "chat message received");

    let delay = state.settings.chat_reply_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let reply = state.chat.lock().await.push_reply();
    let _ = state.events_tx.send(CHAT_UPDATED.to_string());
    tracing::debug!(id = %reply.id, "chat reply sent");

    true
}
