// ABOUTME: Unified error handling with standard error codes for the questionnaire
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used across all crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Two error
//! families matter to callers:
//!
//! - **Validation** (`ValueOutOfRange`, `MissingRequiredField`): a value typed
//!   by the user is outside what the form accepts, or a required one was
//!   left blank. Surfaced at the point of entry and never propagated into
//!   the recommendation engine.
//! - **Invalid input** (`InvalidInput`, `InvalidFormat`): a categorical value
//!   outside its declared set, or a value of the wrong kind for a question.

use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Categorical value outside its declared set
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Required value was not supplied
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Value could not be parsed in the expected format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric value outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Session state (4000-4999)
    /// Navigation or submission not allowed from the current step
    #[serde(rename = "INVALID_TRANSITION")]
    InvalidTransition = 4000,

    // Configuration (6000-6999)
    /// Generic configuration error
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration value failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Input/output failure while talking to the form collaborator
    #[serde(rename = "IO_ERROR")]
    IoError = 9001,
    /// Serialization or deserialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status used by command-line front ends
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 65,
            Self::InvalidTransition => 70,
            Self::ConfigError | Self::ConfigInvalid => 78,
            Self::IoError => 74,
            Self::InternalError | Self::SerializationError => 1,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvalidTransition => "This action is not available at the current step",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::IoError => "Input/output operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message (shown to the user as-is)
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Value typed at the form is out of range (age, height, weight)
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Question left blank although it has no value to keep
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Réponse requise : {field}"),
        )
    }

    /// Categorical value outside its declared set, or wrong value kind
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value could not be parsed
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Navigation or submission attempted from the wrong step
    #[must_use]
    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidTransition, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Input/output error
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Whether this error should be shown at the point of entry and re-asked
    #[must_use]
    pub const fn is_recoverable_at_entry(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ValueOutOfRange
                | ErrorCode::MissingRequiredField
                | ErrorCode::InvalidInput
                | ErrorCode::InvalidFormat
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        // Unknown enum labels surface as data errors; everything else is malformed JSON
        match error.classify() {
            Category::Data => Self::invalid_input(error.to_string()),
            Category::Io => Self::io(error.to_string()),
            Category::Syntax | Category::Eof => Self::invalid_format(error.to_string()),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::io(error.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_status() {
        assert_eq!(ErrorCode::ValueOutOfRange.exit_code(), 65);
        assert_eq!(ErrorCode::InvalidTransition.exit_code(), 70);
        assert_eq!(ErrorCode::InternalError.exit_code(), 1);
    }

    #[test]
    fn test_missing_field_is_recoverable() {
        let error = AppError::missing_field("Poids (kg)");
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.message, "Réponse requise : Poids (kg)");
        assert!(error.is_recoverable_at_entry());
        assert_eq!(error.code.exit_code(), 65);
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::validation("L'âge doit être compris entre 0 et 120 ans");
        let rendered = error.to_string();
        assert!(rendered.starts_with("The provided value is outside the acceptable range"));
        assert!(rendered.ends_with("120 ans"));
    }

    #[test]
    fn test_unknown_variant_maps_to_invalid_input() {
        #[derive(Debug, Deserialize)]
        enum Choice {
            #[allow(dead_code)]
            A,
        }
        let parsed: Result<Choice, _> = serde_json::from_str("\"B\"");
        let Err(error) = parsed else {
            unreachable!("B is not a declared variant");
        };
        assert_eq!(AppError::from(error).code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_truncated_json_maps_to_invalid_format() {
        let parsed: Result<serde_json::Value, _> = serde_json::from_str("{\"age\": ");
        let Err(error) = parsed else {
            unreachable!("input is truncated");
        };
        assert_eq!(AppError::from(error).code, ErrorCode::InvalidFormat);
    }
}
