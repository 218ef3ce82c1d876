use thiserror::Error;

pub type LocsheetResult<T> = Result<T, LocsheetError>;

#[derive(Error, Debug)]
pub enum LocsheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No file provided")]
    InputMissing,

    #[error("Unknown conversion mode '{0}' (expected 'app' or 'backend')")]
    InvalidMode(String),

    #[error("Malformed upload: {0}")]
    Upload(String),

    #[error("File too large")]
    FileTooLarge,

    #[error("Failed to decode spreadsheet: {0}")]
    Decode(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),
}

impl LocsheetError {
    /// True when the caller sent a bad request rather than the conversion failing.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LocsheetError::InputMissing
                | LocsheetError::InvalidMode(_)
                | LocsheetError::Upload(_)
                | LocsheetError::FileTooLarge
        )
    }
}
