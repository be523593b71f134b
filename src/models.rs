use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::FILES_PER_UPLOAD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Bot => "bot",
        }
    }

    /// Prefix shown in front of every rendered row.
    pub fn label(&self) -> &'static str {
        match self {
            ChatRole::User => "You: ",
            ChatRole::Bot => "AI: ",
        }
    }
}

/// One role-tagged line of the chat transcript. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: ChatRole::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { role: ChatRole::Bot, text: text.into() }
    }

    /// The row as displayed, e.g. `"You: What is the total?"`.
    pub fn line(&self) -> String {
        format!("{}{}", self.role.label(), self.text)
    }
}

/// JSON body of `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskRequest {
    pub question: String,
}

impl AskRequest {
    /// Trims the raw input; blank questions are never sent.
    pub fn from_input(raw: &str) -> Option<Self> {
        let question = raw.trim();
        if question.is_empty() {
            return None;
        }
        Some(Self { question: question.to_string() })
    }
}

/// A single document bound for `POST /upload`. `F` is whatever the transport
/// uses as a file handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest<F> {
    pub file: F,
}

impl<F> UploadRequest<F> {
    /// Keeps the first selected file. Returns `None` for an empty selection.
    pub fn from_selection(files: Vec<F>) -> Option<Self> {
        let selected = files.len();
        let file = files.into_iter().next()?;
        if selected > FILES_PER_UPLOAD {
            debug!(selected, "Only the first selected file is uploaded");
        }
        Some(Self { file })
    }
}

/// Status and decoded JSON body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerResponse {
    pub status: u16,
    pub body: Value,
}

impl ServerResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Text of a top-level field, or `None` when it is missing or falsy
    /// (`null`, `false`, `0`, `""`). Non-string values render as JSON.
    pub fn field_text(&self, name: &str) -> Option<String> {
        match self.body.get(name)? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// The `error` field, or the whole body as compact JSON when there is none.
    pub fn error_text(&self) -> String {
        self.field_text("error").unwrap_or_else(|| self.body.to_string())
    }
}
