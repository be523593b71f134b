#[cfg(feature = "native")]
pub mod http;

use crate::errors::TransportError;
use crate::models::{AskRequest, ServerResponse, UploadRequest};

/// Transport to the question-answering backend.
///
/// Implementations only move bytes: any completed HTTP exchange with a JSON
/// body is `Ok`, whatever its status. Interpreting the status is up to the flows.
///
/// Futures are not required to be `Send`; every front end drives the flows
/// from a single thread.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Handle for a user-selected document.
    type File;

    /// `POST /upload` as `multipart/form-data`.
    async fn upload(
        &self,
        request: UploadRequest<Self::File>,
    ) -> Result<ServerResponse, TransportError>;

    /// `POST /ask` with a JSON body.
    async fn ask(&self, request: &AskRequest) -> Result<ServerResponse, TransportError>;
}
