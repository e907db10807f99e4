//! Error types for the ef-app service layer.

use std::path::PathBuf;

use ef_core::{EfError, NetworkId, RoomId};
use ef_graph::GraphError;

/// Application error type: every way a user command can be rejected.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid argument count for {command}: expected {expected}, got {got}")]
    ArgumentCount {
        command: &'static str,
        expected: &'static str,
        got: usize,
    },

    #[error("invalid argument format: {0}")]
    InvalidFormat(String),

    #[error("{0}")]
    Input(#[from] EfError),

    #[error("{0}")]
    Graph(#[from] GraphError),

    #[error("escape network {0} does not exist")]
    NetworkNotFound(NetworkId),

    #[error("escape network {0} already exists")]
    NetworkExists(NetworkId),

    #[error("invalid start or target room ({start} -> {end}): {reason}")]
    InvalidEndpoints {
        start: RoomId,
        end: RoomId,
        reason: &'static str,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ef-app operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_errors_keep_their_message() {
        let err: AppError = GraphError::MissingTerminals.into();
        assert_eq!(err.to_string(), GraphError::MissingTerminals.to_string());
    }

    #[test]
    fn endpoint_error_names_rooms() {
        let err = AppError::InvalidEndpoints {
            start: RoomId::parse("a").unwrap(),
            end: RoomId::parse("b").unwrap(),
            reason: "start room has incoming sections",
        };
        let msg = err.to_string();
        assert!(msg.contains("a -> b"));
        assert!(msg.contains("incoming"));
    }
}
