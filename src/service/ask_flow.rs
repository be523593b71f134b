use tracing::{debug, warn};

use crate::client::Backend;
use crate::errors::TransportError;
use crate::models::{AskRequest, ChatEntry, ServerResponse};
use crate::service::view::ChatView;
use crate::service::{NO_ANSWER, REQUEST_FAILED_PREFIX, SERVER_ERROR_PREFIX, THINKING};

/// How a dispatched question ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    /// 2xx: the backend's `answer`, or the no-answer fallback.
    Answered(String),
    /// Non-2xx: `"Error: "` plus the `error` field or the whole body.
    ServerError(String),
    /// The request never completed.
    TransportFailure(String),
}

impl AskOutcome {
    pub fn from_result(result: Result<ServerResponse, TransportError>) -> Self {
        match result {
            Ok(resp) if resp.is_success() => {
                if let Some(error) = resp.field_text("error") {
                    warn!("Question returned {} with an error field: {error}", resp.status);
                }
                AskOutcome::Answered(
                    resp.field_text("answer").unwrap_or_else(|| NO_ANSWER.to_string()),
                )
            }
            Ok(resp) => {
                warn!("Question rejected with status {}", resp.status);
                AskOutcome::ServerError(format!("{SERVER_ERROR_PREFIX}{}", resp.error_text()))
            }
            Err(err) => {
                warn!("Question did not complete: {err}");
                AskOutcome::TransportFailure(format!("{REQUEST_FAILED_PREFIX}{err}"))
            }
        }
    }

    /// Text for the answer-display region.
    pub fn display_text(&self) -> &str {
        match self {
            AskOutcome::Answered(text)
            | AskOutcome::ServerError(text)
            | AskOutcome::TransportFailure(text) => text,
        }
    }

    /// Only answers enter the transcript; failures stay in the answer display.
    pub fn bot_entry(&self) -> Option<ChatEntry> {
        match self {
            AskOutcome::Answered(text) => Some(ChatEntry::bot(text.clone())),
            AskOutcome::ServerError(_) | AskOutcome::TransportFailure(_) => None,
        }
    }
}

/// Runs the ask flow: user row, then "Thinking...", then the request, then
/// the bot row (on success) and the final answer-display text.
///
/// Returns `None` for blank input, in which case nothing is rendered or sent.
pub async fn run_ask<B, V>(backend: &B, view: &V, input: &str) -> Option<AskOutcome>
where
    B: Backend,
    V: ChatView,
{
    let Some(request) = AskRequest::from_input(input) else {
        debug!("Ignoring blank question");
        return None;
    };

    view.append_entry(ChatEntry::user(request.question.clone()));
    view.set_answer(THINKING);

    debug!("Asking: {}", request.question);
    let outcome = AskOutcome::from_result(backend.ask(&request).await);
    if let Some(entry) = outcome.bot_entry() {
        view.append_entry(entry);
    }
    view.set_answer(outcome.display_text());
    Some(outcome)
}
