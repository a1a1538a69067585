//! # Chat transcript
//!
//! The Chat screen keeps its conversation in a [`Transcript`]. Sending is split in
//! two halves so the screen can await the network in between:
//!
//! 1. [`Transcript::begin_send`] appends the user message immediately and returns
//!    the outgoing [`Outgoing`] request, or `None` when the input is blank or a send
//!    is already in flight.
//! 2. [`Transcript::finish_send`] appends the reply (or an apology on failure) and
//!    adopts the server's session id.

use api::{ChatHistory, ChatReply, Role};

pub const APOLOGY: &str = "Sorry, I couldn't process that. Please try again.";

/// Quick topic chips. `topic` is what the server receives as context.
pub struct TopicPreset {
    pub label: &'static str,
    pub topic: &'static str,
}

pub const TOPIC_PRESETS: [TopicPreset; 3] = [
    TopicPreset {
        label: "DSA",
        topic: "Data Structures & Algorithms",
    },
    TopicPreset {
        label: "System Design",
        topic: "System Design",
    },
    TopicPreset {
        label: "GenAI",
        topic: "Generative AI & LLMs",
    },
];

pub const STARTER_PROMPTS: [&str; 6] = [
    "Explain the two-pointer technique with examples",
    "How would you design a URL shortener?",
    "What is RAG and why is it useful?",
    "Give me a medium difficulty LeetCode problem to solve",
    "Explain CAP theorem simply",
    "What are attention mechanisms in transformers?",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Local sequence number, stable for keyed rendering.
    pub seq: usize,
    pub role: Role,
    pub content: String,
}

/// What to send to the server for one user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Outgoing {
    pub message: String,
    pub session_id: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<Entry>,
    session_id: Option<String>,
    topic: Option<String>,
    in_flight: bool,
    next_seq: usize,
}

impl Transcript {
    pub fn with_topic(topic: Option<String>) -> Self {
        Self {
            topic: topic.filter(|t| !t.trim().is_empty()),
            ..Default::default()
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Select a topic, or clear it by selecting the active one again.
    pub fn toggle_topic(&mut self, topic: &str) {
        if self.topic.as_deref() == Some(topic) {
            self.topic = None;
        } else {
            self.topic = Some(topic.to_string());
        }
    }

    fn push(&mut self, role: Role, content: String) {
        self.entries.push(Entry {
            seq: self.next_seq,
            role,
            content,
        });
        self.next_seq += 1;
    }

    pub fn begin_send(&mut self, input: &str) -> Option<Outgoing> {
        let message = input.trim();
        if message.is_empty() || self.in_flight {
            return None;
        }
        self.push(Role::User, message.to_string());
        self.in_flight = true;
        Some(Outgoing {
            message: message.to_string(),
            session_id: self.session_id.clone(),
            topic: self.topic.clone(),
        })
    }

    /// [`Transcript::begin_send`] for a text box: `draft` is cleared only when the
    /// message is accepted, so a rejected send keeps what the user typed.
    pub fn submit(&mut self, draft: &mut String) -> Option<Outgoing> {
        let out = self.begin_send(draft)?;
        draft.clear();
        Some(out)
    }

    pub fn finish_send<E>(&mut self, result: Result<ChatReply, E>) {
        self.in_flight = false;
        match result {
            Ok(reply) => {
                self.session_id = Some(reply.session_id);
                self.push(Role::Assistant, reply.reply);
            }
            Err(_) => self.push(Role::Assistant, APOLOGY.to_string()),
        }
    }

    /// Replace the transcript with a server-side history.
    pub fn load_history(&mut self, history: ChatHistory) {
        self.entries.clear();
        self.session_id = Some(history.session_id);
        for msg in history.messages {
            if self.topic.is_none() {
                self.topic = msg.context_topic.clone();
            }
            self.push(msg.role, msg.content);
        }
    }

    /// "New chat": drop the transcript, the session and the topic.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ChatMessage;

    fn reply(session: &str, text: &str) -> Result<ChatReply, ()> {
        Ok(ChatReply {
            session_id: session.to_string(),
            reply: text.to_string(),
        })
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut t = Transcript::default();
        assert_eq!(t.begin_send(""), None);
        assert_eq!(t.begin_send("   \n\t"), None);
        assert!(t.is_empty());
        assert!(!t.is_in_flight());
    }

    #[test]
    fn test_user_message_appended_before_reply() {
        let mut t = Transcript::with_topic(Some("System Design".to_string()));
        let out = t.begin_send("  Explain CAP  ").unwrap();
        assert_eq!(out.message, "Explain CAP");
        assert_eq!(out.session_id, None);
        assert_eq!(out.topic.as_deref(), Some("System Design"));
        assert_eq!(t.entries().len(), 1);
        assert_eq!(t.entries()[0].role, Role::User);
        assert!(t.is_in_flight());

        t.finish_send(reply("s-1", "Pick two."));
        assert_eq!(t.entries().len(), 2);
        assert_eq!(t.entries()[1].content, "Pick two.");
        assert_eq!(t.session_id(), Some("s-1"));
    }

    #[test]
    fn test_second_send_while_in_flight_is_dropped() {
        let mut t = Transcript::default();
        assert!(t.begin_send("one").is_some());
        assert!(t.begin_send("two").is_none());
        assert_eq!(t.entries().len(), 1);
    }

    #[test]
    fn test_draft_kept_while_in_flight() {
        let mut t = Transcript::default();
        let mut draft = "one".to_string();
        assert!(t.submit(&mut draft).is_some());
        assert_eq!(draft, "");

        draft.push_str("two");
        assert_eq!(t.submit(&mut draft), None);
        assert_eq!(draft, "two");

        t.finish_send::<()>(Err(()));
        assert_eq!(t.submit(&mut draft).map(|o| o.message), Some("two".to_string()));
        assert_eq!(draft, "");
    }

    #[test]
    fn test_session_is_reused() {
        let mut t = Transcript::default();
        t.begin_send("one");
        t.finish_send(reply("s-1", "a"));
        let out = t.begin_send("two").unwrap();
        assert_eq!(out.session_id.as_deref(), Some("s-1"));
    }

    #[test]
    fn test_failure_appends_apology() {
        let mut t = Transcript::default();
        t.begin_send("hello");
        t.finish_send::<&str>(Err("offline"));
        assert!(!t.is_in_flight());
        assert_eq!(t.entries()[1].content, APOLOGY);
        assert_eq!(t.entries()[1].role, Role::Assistant);
        assert_eq!(t.session_id(), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut t = Transcript::with_topic(Some("DSA".to_string()));
        t.begin_send("hello");
        t.finish_send(reply("s-1", "hi"));
        t.reset();
        assert_eq!(t, Transcript::default());
    }

    #[test]
    fn test_topic_toggle() {
        let mut t = Transcript::with_topic(Some(" ".to_string()));
        assert_eq!(t.topic(), None);
        t.toggle_topic("System Design");
        assert_eq!(t.topic(), Some("System Design"));
        t.toggle_topic("System Design");
        assert_eq!(t.topic(), None);
    }

    #[test]
    fn test_load_history() {
        let mut t = Transcript::default();
        t.load_history(ChatHistory {
            session_id: "s-9".to_string(),
            messages: vec![
                ChatMessage {
                    id: "m-1".to_string(),
                    role: Role::User,
                    content: "q".to_string(),
                    context_topic: Some("GenAI".to_string()),
                    created_at: None,
                },
                ChatMessage {
                    id: "m-2".to_string(),
                    role: Role::Assistant,
                    content: "a".to_string(),
                    context_topic: None,
                    created_at: None,
                },
            ],
        });
        assert_eq!(t.session_id(), Some("s-9"));
        assert_eq!(t.topic(), Some("GenAI"));
        assert_eq!(t.entries().len(), 2);
        assert_eq!(t.entries()[1].seq, 1);
    }
}
