//! Request/response orchestration shared by every front end.
//!
//! Front ends translate user input into an [`Action`] and hand it to
//! [`dispatch`] together with a [`Backend`] and a [`ChatView`]. The outcome
//! types turn a finished request into display text without touching any view,
//! so they can be exercised on their own.

pub mod ask_flow;
pub mod upload_flow;
pub mod view;

#[cfg(test)]
mod testing;

use tracing::debug;

pub use ask_flow::{run_ask, AskOutcome};
pub use upload_flow::{run_upload, UploadOutcome};
pub use view::ChatView;

use crate::client::Backend;

// ── Display text ─────────────────────────────────────────────────────────────

pub const NO_FILE_SELECTED: &str = "Please select a file.";
pub const UPLOADING: &str = "Uploading and processing...";
pub const UPLOAD_SUCCEEDED: &str = "File processed successfully!";
pub const UPLOAD_FAILED_PREFIX: &str = "Upload failed: ";

pub const THINKING: &str = "Thinking...";
pub const NO_ANSWER: &str = "No answer returned.";
pub const REQUEST_FAILED_PREFIX: &str = "Request failed: ";

pub const SERVER_ERROR_PREFIX: &str = "Error: ";

/// A user action, independent of how it was triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<F> {
    /// Upload the current file selection (possibly empty).
    Upload(Vec<F>),
    /// Ask the raw, untrimmed text from the question field.
    Ask(String),
    /// Empty the transcript.
    ClearChat,
}

/// Runs one action to completion. Every failure ends up as display text, so
/// nothing is returned.
pub async fn dispatch<B, V>(backend: &B, view: &V, action: Action<B::File>)
where
    B: Backend,
    V: ChatView,
{
    match action {
        Action::Upload(files) => {
            run_upload(backend, view, files).await;
        }
        Action::Ask(input) => {
            run_ask(backend, view, &input).await;
        }
        Action::ClearChat => clear_chat(view),
    }
}

/// Removes every transcript row. In-flight requests and the answer display
/// are not affected.
pub fn clear_chat<V: ChatView>(view: &V) {
    debug!("Clearing chat transcript");
    view.clear_entries();
}
