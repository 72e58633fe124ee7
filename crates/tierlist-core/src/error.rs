use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to fetch {table}: {message}")]
    Fetch { table: String, message: String },

    #[error("Store not configured: {0}")]
    StoreNotConfigured(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Invalid filter mode: {0}")]
    InvalidFilter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        let message = match &e {
            ureq::Error::StatusCode(code) => format!("HTTP {} error", code),
            ureq::Error::Timeout(_) => format!("Request timed out: {}", e),
            ureq::Error::Io(_) | ureq::Error::ConnectionFailed | ureq::Error::HostNotFound => {
                format!("Connection failed: {}", e)
            }
            _ => format!("HTTP error: {}", e),
        };
        Error::Http(message)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}
