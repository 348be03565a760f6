//! Error handling for the resume screener

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tagger model error: {0}")]
    ModelLoad(String),

    #[error("Empty corpus: neither document contains any scorable terms")]
    EmptyCorpus,

    #[error("Missing upload: {0}")]
    MissingUpload(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Template rendering error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

impl From<askama::Error> for ScreenerError {
    fn from(err: askama::Error) -> Self {
        ScreenerError::Render(err.to_string())
    }
}
