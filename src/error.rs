use thiserror::Error;

pub type Result<T> = std::result::Result<T, BiostrapError>;

#[derive(Error, Debug)]
pub enum BiostrapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to fetch manifest from {url}: {message}")]
    ManifestFetch { url: String, message: String },

    #[error("Entry is outside the target dir: {entry}")]
    PathTraversal { entry: String },

    #[error("Invalid archive name: '{name}'")]
    InvalidArchiveName { name: String },

    #[error("Invalid version: '{version}'")]
    InvalidVersion { version: String },

    #[error("Local application data directory not found")]
    DataDirectoryNotFound,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl BiostrapError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        BiostrapError::ConfigError {
            message: message.into(),
        }
    }

    /// Whether this error should end the whole run rather than a single archive.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BiostrapError::ManifestFetch { .. })
    }
}
