use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotoError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Duplicate Draw: '{0}' already exists")]
    DuplicateDraw(String),
}

pub type LfResult<T> = Result<T, LotoError>;

/// Coarse category of a failure, as shown to callers outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Config,
    Duplicate,
    Parse,
    Io,
}

/// Structured, user-facing failure: a kind plus a readable message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub success: bool,
    pub kind: ErrorKind,
    pub message: String,
}

impl LotoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LotoError::Io(_) => ErrorKind::Io,
            LotoError::Csv(_) | LotoError::Json(_) => ErrorKind::Parse,
            LotoError::Config(_) => ErrorKind::Config,
            LotoError::Validation(_) => ErrorKind::Validation,
            LotoError::DuplicateDraw(_) => ErrorKind::Duplicate,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            success: false,
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

impl From<&LotoError> for ErrorReport {
    fn from(err: &LotoError) -> Self {
        err.report()
    }
}
