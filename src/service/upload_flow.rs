use tracing::{debug, info, warn};

use crate::client::Backend;
use crate::errors::TransportError;
use crate::models::{ServerResponse, UploadRequest};
use crate::service::view::ChatView;
use crate::service::{
    NO_FILE_SELECTED, SERVER_ERROR_PREFIX, UPLOAD_FAILED_PREFIX, UPLOAD_SUCCEEDED, UPLOADING,
};

/// How a dispatched upload ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// 2xx: the backend's `message`, or the generic success text.
    Processed(String),
    /// Non-2xx: `"Error: "` plus the `error` field or the whole body.
    ServerError(String),
    /// The request never completed.
    TransportFailure(String),
}

impl UploadOutcome {
    pub fn from_result(result: Result<ServerResponse, TransportError>) -> Self {
        match result {
            Ok(resp) if resp.is_success() => {
                if let Some(chunks) = resp.body.get("num_chunks").and_then(|v| v.as_u64()) {
                    info!(chunks, "Document indexed");
                }
                if let Some(error) = resp.field_text("error") {
                    warn!("Upload returned {} with an error field: {error}", resp.status);
                }
                UploadOutcome::Processed(
                    resp.field_text("message")
                        .unwrap_or_else(|| UPLOAD_SUCCEEDED.to_string()),
                )
            }
            Ok(resp) => {
                warn!("Upload rejected with status {}", resp.status);
                UploadOutcome::ServerError(format!("{SERVER_ERROR_PREFIX}{}", resp.error_text()))
            }
            Err(err) => {
                warn!("Upload did not complete: {err}");
                UploadOutcome::TransportFailure(format!("{UPLOAD_FAILED_PREFIX}{err}"))
            }
        }
    }

    /// Text for the upload-status region.
    pub fn status_text(&self) -> &str {
        match self {
            UploadOutcome::Processed(text)
            | UploadOutcome::ServerError(text)
            | UploadOutcome::TransportFailure(text) => text,
        }
    }
}

/// Runs the upload flow. Only the upload-status region is touched.
///
/// Returns `None` when nothing was selected; no request is made in that case.
pub async fn run_upload<B, V>(backend: &B, view: &V, files: Vec<B::File>) -> Option<UploadOutcome>
where
    B: Backend,
    V: ChatView,
{
    let Some(request) = UploadRequest::from_selection(files) else {
        debug!("Upload requested with no file selected");
        view.set_upload_status(NO_FILE_SELECTED);
        return None;
    };

    view.set_upload_status(UPLOADING);
    let outcome = UploadOutcome::from_result(backend.upload(request).await);
    view.set_upload_status(outcome.status_text());
    Some(outcome)
}
