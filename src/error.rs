use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("invalid GitHub URL: {0}")]
    InvalidUrl(String),

    #[error("failed to fetch repository data (status {status})")]
    RepoUnavailable { status: u16 },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
