use std::path::PathBuf;

/// All errors that can occur in voxscribe.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("API key is required")]
    MissingApiKey,

    #[error("File '{}' not found", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// The service answered with a non-2xx status.
    #[error("HTTP status {status} for url ({url})")]
    Api {
        status: reqwest::StatusCode,
        url: String,
        /// Raw response body, if the service sent one.
        body: Option<String>,
    },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Transport failures and non-2xx responses.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Error::Api { .. } | Error::Http(_))
    }

    /// Problems with what the user passed in, caught before any network activity.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::MissingApiKey | Error::FileNotFound { .. } | Error::InvalidOption(_)
        )
    }

    /// Raw body of a failed response, when the service sent a non-empty one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
