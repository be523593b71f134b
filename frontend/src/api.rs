use gloo_net::http::{Request, Response};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FormData};

use docqa::client::Backend;
use docqa::config::{Config, DEFAULT_API_BASE, UPLOAD_FIELD};
use docqa::errors::TransportError;
use docqa::models::{AskRequest, ServerResponse, UploadRequest};

/// Base URL of the question-answering backend, fixed at build time.
const API_BASE: &str = match option_env!("API_BASE") {
    Some(base) => base,
    None => DEFAULT_API_BASE,
};

/// Builds the client configuration from [`API_BASE`].
pub fn config() -> Config {
    Config::new(API_BASE).unwrap_or_else(|e| {
        log::error!("Ignoring invalid build-time API_BASE: {e}");
        Config::default()
    })
}

/// fetch-backed [`Backend`] for the browser.
#[derive(Clone, Debug)]
pub struct FetchBackend {
    config: Config,
}

impl FetchBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Backend for FetchBackend {
    type File = File;

    /// Sends the file under `file` as `multipart/form-data`. The browser sets
    /// the boundary header itself.
    async fn upload(&self, request: UploadRequest<File>) -> Result<ServerResponse, TransportError> {
        let form = FormData::new().map_err(|e| TransportError::request(js_error_text(&e)))?;
        form.append_with_blob(UPLOAD_FIELD, &request.file)
            .map_err(|e| TransportError::request(js_error_text(&e)))?;

        let resp = Request::post(&self.config.upload_url())
            .body(form)
            .map_err(TransportError::request)?
            .send()
            .await
            .map_err(TransportError::network)?;

        read_response(resp).await
    }

    /// Sends `{ "question": ... }` with `Content-Type: application/json`.
    async fn ask(&self, request: &AskRequest) -> Result<ServerResponse, TransportError> {
        let resp = Request::post(&self.config.ask_url())
            .json(request)
            .map_err(TransportError::request)?
            .send()
            .await
            .map_err(TransportError::network)?;

        read_response(resp).await
    }
}

async fn read_response(resp: Response) -> Result<ServerResponse, TransportError> {
    let status = resp.status();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .map_err(TransportError::invalid_body)?;
    Ok(ServerResponse::new(status, body))
}

/// The `message` of a thrown JS `Error`, or its debug form for anything else.
fn js_error_text(value: &JsValue) -> String {
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}
