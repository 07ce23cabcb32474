#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("style JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid style: {message}")]
    InvalidStyle { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
