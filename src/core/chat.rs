//! Mock assistant chat: message log and reply sources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::analysis::Clause;

/// The only thing the demo assistant ever says.
pub const DEMO_REPLY: &str = "Demo Reply – This is just a sample response to show how the AI works. It’s not real legal advice.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::with_role(Role::Assistant, text)
    }

    fn with_role(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Produces the assistant's answer to a question about a clause.
#[cfg_attr(test, mockall::automock)]
pub trait ReplySource {
    fn reply(&self, clause: &Clause, question: &str) -> String;
}

/// Always answers with [`DEMO_REPLY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedReply;

impl ReplySource for CannedReply {
    fn reply(&self, _clause: &Clause, _question: &str) -> String {
        DEMO_REPLY.to_string()
    }
}

/// Append-only conversation log. Messages arrive in user/assistant pairs.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_exchange(&mut self, question: ChatMessage, answer: ChatMessage) {
        self.messages.push(question);
        self.messages.push(answer);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
