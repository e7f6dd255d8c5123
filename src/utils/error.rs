// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application.
// The parser and sanitizer are deliberately infallible: a missing or
// malformed section yields that field's default, so no error type exists
// for extraction.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 404 Not Found, 403 Forbidden

    #[error("Generator rate limit exceeded")]
    RateLimited,

    #[error("Generator returned no text")]
    EmptyResponse,

    #[error("Failed to parse generator response: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Generator interaction failed: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
