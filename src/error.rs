use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    #[error("invalid platform: {0}")]
    InvalidPlatform(String),
    #[error("player not found")]
    PlayerNotFound,
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    FetchStatus(StatusCode),
    #[error("invalid profile document: {0}")]
    Parse(#[from] std::str::Utf8Error),
}

impl StatsError {
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, StatsError::Fetch(_) | StatsError::FetchStatus(_))
    }
}
