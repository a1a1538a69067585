//! # AI tutor chat
//!
//! A conversation is identified by a server-assigned `session_id`. The first
//! [`send`](crate::ChatApi::send) omits it and the server answers with a fresh one,
//! which the client passes on every following send of that conversation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub context_topic: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Request body for `POST /chat`.
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_topic: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub session_id: String,
    pub reply: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatHistory {
    pub session_id: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// One row of `GET /chat/sessions`, most recently active first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatSessionSummary {
    pub session_id: String,
    #[serde(default)]
    pub context_topic: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub message_count: u32,
}

impl ChatSessionSummary {
    pub fn title(&self) -> &str {
        self.context_topic.as_deref().unwrap_or("General practice")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_missing_fields() {
        let body = ChatRequest {
            message: "hi",
            session_id: None,
            context_topic: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"message": "hi"})
        );
    }

    #[test]
    fn test_decode_history() {
        let history: ChatHistory = serde_json::from_str(
            r#"{"session_id": "s-1", "messages": [
                {"id": "m-1", "role": "user", "content": "Explain CAP",
                 "context_topic": null, "created_at": "2025-02-01T10:00:00"},
                {"id": "m-2", "role": "assistant", "content": "CAP says...",
                 "created_at": "2025-02-01T10:00:01"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(history.messages.len(), 2);
        assert_eq!(history.messages[0].role, Role::User);
        assert_eq!(history.messages[1].role, Role::Assistant);
    }

    #[test]
    fn test_session_title_fallback() {
        let s: ChatSessionSummary =
            serde_json::from_str(r#"{"session_id": "s-1", "message_count": 4}"#).unwrap();
        assert_eq!(s.title(), "General practice");
    }
}
