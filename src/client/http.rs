use std::path::PathBuf;

use reqwest::multipart;
use serde_json::Value;
use tracing::{debug, error};

use crate::client::Backend;
use crate::config::{Config, UPLOAD_FIELD};
use crate::errors::TransportError;
use crate::models::{AskRequest, ServerResponse, UploadRequest};

/// reqwest-backed [`Backend`] used by the terminal client.
#[derive(Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    config: Config,
}

impl HttpBackend {
    pub fn new(config: Config) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(TransportError::request)?;
        Ok(Self { http, config })
    }
}

impl Backend for HttpBackend {
    type File = PathBuf;

    async fn upload(
        &self,
        request: UploadRequest<PathBuf>,
    ) -> Result<ServerResponse, TransportError> {
        let path = request.file;
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| TransportError::ReadFile {
                path: path.display().to_string(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UPLOAD_FIELD.to_string());

        debug!("Uploading {} bytes from {}", bytes.len(), path.display());

        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part(UPLOAD_FIELD, part);

        let resp = self
            .http
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Upload to {} failed: {e}", self.config.api_base());
                TransportError::network_chain(&e)
            })?;

        read_response(resp).await
    }

    async fn ask(&self, request: &AskRequest) -> Result<ServerResponse, TransportError> {
        let resp = self
            .http
            .post(self.config.ask_url())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Question to {} failed: {e}", self.config.api_base());
                TransportError::network_chain(&e)
            })?;

        read_response(resp).await
    }
}

async fn read_response(resp: reqwest::Response) -> Result<ServerResponse, TransportError> {
    let status = resp.status().as_u16();
    let body = resp
        .json::<Value>()
        .await
        .map_err(TransportError::invalid_body)?;
    Ok(ServerResponse::new(status, body))
}
