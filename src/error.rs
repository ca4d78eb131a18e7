/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Main error type of the library
#[derive(Debug)]
pub enum AppError {
    /// The server rejected the credentials or the token (401/403)
    Authentication {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Response body, as text
        body: String,
    },
    /// Lookup miss: unknown id (404) or no record with the requested name
    NotFound(String),
    /// Several records share a name that was expected to be unique
    Ambiguous {
        /// The name that was looked up
        name: String,
        /// Ids of every record carrying that name
        ids: Vec<u64>,
    },
    /// Any other non-2xx response
    Remote {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Response body, as text
        body: String,
    },
    /// Network-level failure: timeout, DNS, connection refused
    Transport(String),
    /// Invalid or incomplete configuration
    Config(String),
    /// Invalid argument passed by the caller
    InvalidInput(String),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// Filesystem failure
    Io(std::io::Error),
}

/// Result alias used across the crate
pub type IceResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status matching the error, if it came from a response
    ///
    /// `NotFound` always reports 404, name lookup misses included.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Authentication { status, .. } | AppError::Remote { status, .. } => {
                Some(*status)
            }
            AppError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            _ => None,
        }
    }

    /// Builds the error matching a non-2xx response
    pub(crate) fn from_status(status: StatusCode, body: String, url: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                AppError::Authentication { status, body }
            }
            StatusCode::NOT_FOUND => AppError::NotFound(format!("{url}: {body}")),
            _ => AppError::Remote { status, body },
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Authentication { status, body } => {
                write!(f, "authentication failed ({status}): {body}")
            }
            AppError::NotFound(msg) => write!(f, "not found: {msg}"),
            AppError::Ambiguous { name, ids } => {
                let ids: Vec<String> = ids.iter().map(u64::to_string).collect();
                write!(f, "several records named {name}, with ids {}", ids.join(", "))
            }
            AppError::Remote { status, body } => {
                write!(f, "request failed with status {status}: {body}")
            }
            AppError::Transport(msg) => write!(f, "transport error: {msg}"),
            AppError::Config(msg) => write!(f, "configuration error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.message().to_string())
    }
}
