//! Error types

use thiserror::Error;

/// Errors from initializing, looking up or tearing down select instances.
///
/// Interaction never fails: inert targets are ignored, not reported.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("element '{0}' not found in document")]
    ElementNotFound(String),

    #[error("element '{id}' is a <{tag}>, not a <select>")]
    NotASelect { id: String, tag: String },

    #[error("select '{0}' is already initialized")]
    AlreadyInitialized(String),

    #[error("no select instance for '{0}'")]
    NoInstance(String),

    #[error("invalid select options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SelectError>;
