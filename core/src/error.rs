use thiserror::Error;

/// Algouri error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid scheme: expected algorand://, got {0}")]
    InvalidScheme(String),

    #[error("Invalid query parameter: {0}")]
    InvalidParameter(String),

    #[error("Missing query parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Duplicate query parameter: {0}")]
    DuplicateParameter(String),

    #[error("Conflicting query parameters: {0} and {1}")]
    ConflictingParameters(&'static str, &'static str),

    #[error("Invalid number for {key}: {value}")]
    InvalidNumber { key: String, value: String },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("URI contains non-ASCII characters and cannot be QR encoded")]
    NonAsciiUri,

    #[error("QR generation failed: {0}")]
    QrEncoding(#[from] qrcode::types::QrError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, Error>;
