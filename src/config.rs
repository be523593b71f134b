use crate::errors::ConfigError;

/// Origin used when `API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "http://localhost:8001";

/// Environment variable naming the backend origin.
pub const API_BASE_VAR: &str = "API_BASE";

/// The backend accepts a single document per upload; extra selections are dropped.
pub const FILES_PER_UPLOAD: usize = 1;

/// Multipart field the document is sent under.
pub const UPLOAD_FIELD: &str = "file";

pub const UPLOAD_PATH: &str = "/upload";
pub const ASK_PATH: &str = "/ask";

/// Client configuration. The only recognised option is the backend origin,
/// which prefixes every request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_base: String,
}

impl Config {
    pub fn new(api_base: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = api_base.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme { value: raw });
        }
        Ok(Self { api_base: trimmed.to_string() })
    }

    /// Reads `API_BASE` from the process environment, falling back to
    /// [`DEFAULT_API_BASE`] when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(API_BASE_VAR) {
            Ok(value) => Self::new(value),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    pub fn upload_url(&self) -> String {
        self.endpoint(UPLOAD_PATH)
    }

    pub fn ask_url(&self) -> String {
        self.endpoint(ASK_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_string() }
    }
}
