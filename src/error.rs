use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayBySquareError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),
    #[error("Validation task failed: {0}")]
    TaskError(String),
}

pub type Result<T> = std::result::Result<T, PayBySquareError>;
