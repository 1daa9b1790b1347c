use thiserror::Error;

/// Failures of the host-facing shell (config files, demo scripts, image
/// output). Misuse of the frame/scope API is not an error: it panics.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid demo script: {0}")]
    InvalidScript(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
