//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{ChapterId, SessionError};
use storage::StorageError;

/// Errors emitted while loading a session.
///
/// All are recoverable: the caller returns to chapter selection or retries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("chapter not found: {0}")]
    ChapterNotFound(ChapterId),
    #[error("questions are unavailable: {0}")]
    RepositoryUnavailable(#[from] StorageError),
    #[error("session could not be created: {0}")]
    Session(SessionError),
}

/// Errors emitted by `QuizFlow` commands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error("no session is in progress")]
    NotInSession,
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors emitted while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("question source cannot be empty")]
    EmptySource,
    #[error("invalid shuffle seed: {raw}")]
    InvalidSeed { raw: String },
}
