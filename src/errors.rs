use thiserror::Error;

/// A request that never produced a usable response.
///
/// The `Display` text is what the user sees after the "Upload failed: " /
/// "Request failed: " prefixes, so variants carry the underlying description
/// rather than a category name.
#[derive(Debug, Error)]
pub enum TransportError {
    // ── Connection ───────────────────────────────────────────────────────────
    #[error("{0}")]
    Network(String),

    // ── Request construction ─────────────────────────────────────────────────
    #[error("{0}")]
    Request(String),

    #[error("could not read '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ── Response decoding ────────────────────────────────────────────────────
    #[error("response was not valid JSON: {0}")]
    InvalidBody(String),
}

impl TransportError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        TransportError::Network(err.to_string())
    }

    /// Like [`TransportError::network`], but keeps every `source()` cause,
    /// e.g. `"error sending request for url (..): tcp connect error: Connection refused"`.
    pub fn network_chain(err: &(dyn std::error::Error + 'static)) -> Self {
        TransportError::Network(error_chain(err))
    }

    pub fn request(err: impl std::fmt::Display) -> Self {
        TransportError::Request(err.to_string())
    }

    pub fn invalid_body(err: impl std::fmt::Display) -> Self {
        TransportError::InvalidBody(err.to_string())
    }
}

/// Joins an error and its causes with `": "`. Causes already spelled out by
/// the outer message are skipped.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let part = inner.to_string();
        if !part.is_empty() && !text.contains(&part) {
            text.push_str(": ");
            text.push_str(&part);
        }
        cause = inner.source();
    }
    text
}

/// Invalid `API_BASE` value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_BASE cannot be empty")]
    EmptyApiBase,

    #[error("API_BASE must start with http:// or https:// (got '{value}')")]
    UnsupportedScheme { value: String },
}
