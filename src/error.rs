// src/error.rs

//! Unified error handling for the scraper.
//!
//! Transport failures are folded into [`AppError::Transport`] as plain
//! strings so callers never see `reqwest` types.

use std::fmt;

use thiserror::Error;

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller supplied an invalid input (e.g. empty character name)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Caller supplied a server that is not in the data center table
    #[error("Unknown server '{server}'. Check the spelling against the world list.")]
    UnknownServer { server: String },

    /// Remote answered 404 (or another client error) for the requested page
    #[error("Not found: {0}")]
    NotFound(String),

    /// Remote answered 403: the page is privacy-restricted
    #[error("Access restricted: {0}")]
    Private(String),

    /// Network failure or unexpected remote status
    #[error("Transport error: {0}")]
    Transport(String),

    /// The document's required structure is missing entirely
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Data center table missing or corrupt, or another configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an unknown-server error.
    pub fn unknown_server(server: impl Into<String>) -> Self {
        Self::UnknownServer {
            server: server.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a private-data error.
    pub fn private(message: impl Into<String>) -> Self {
        Self::Private(message.into())
    }

    /// Create a transport error.
    pub fn transport(message: impl fmt::Display) -> Self {
        Self::Transport(message.to_string())
    }

    /// Create a malformed-document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument(message.into())
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP-equivalent status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) | Self::UnknownServer { .. } => 400,
            Self::Private(_) => 403,
            Self::NotFound(_) => 404,
            Self::Transport(_) => 502,
            Self::MalformedDocument(_)
            | Self::Selector { .. }
            | Self::Config(_)
            | Self::Url(_)
            | Self::Json(_) => 500,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}
