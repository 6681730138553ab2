//! Error types for Gallery Motion.
//!
//! Module-level errors (`GeometryError`, `ActorError`, `ConfigError`) stay
//! precise; `MotionError` is the flattened form handed to hosts and the CLI.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::transition::{ActorError, GeometryError};

/// Errors surfaced at the crate boundary.
///
/// Serializes as `{ "kind": ..., "message": ... }` so hosts can match on the
/// kind without parsing display strings.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum MotionError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Bounds or viewport could not be used.
    #[error("Geometry error: {0}")]
    GeometryError(String),
    /// The transition actor could not be reached.
    #[error("Transition error: {0}")]
    TransitionError(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<GeometryError> for MotionError {
    fn from(err: GeometryError) -> Self { Self::GeometryError(err.to_string()) }
}

impl From<ActorError> for MotionError {
    fn from(err: ActorError) -> Self { Self::TransitionError(err.to_string()) }
}

impl From<ConfigError> for MotionError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<std::io::Error> for MotionError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_conversion() {
        let err: MotionError = GeometryError::NonFinite.into();
        assert!(matches!(err, MotionError::GeometryError(_)));
        assert!(err.to_string().starts_with("Geometry error"));
    }

    #[test]
    fn test_actor_error_conversion() {
        let err: MotionError = ActorError::SendFailed.into();
        assert!(err.to_string().contains("Transition error"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: MotionError = ConfigError::NotFound.into();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MotionError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_serializes_with_kind_and_message() {
        let err = MotionError::InvalidArguments("bad bounds".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "InvalidArguments");
        assert_eq!(json["message"], "bad bounds");
    }
}
