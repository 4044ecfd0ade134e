// ABOUTME: Unified error handling for the Pierre fitness client
// ABOUTME: Collapses transport, HTTP, application, and validation failures into one AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure a view can observe is an [`AppError`]. The [`ErrorCode`]
//! records which class of failure occurred (transport, HTTP status,
//! application flag, local validation), while [`AppError::message`] is the
//! single human-readable reason that ends up on screen.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::messages;

/// Standard error codes used throughout the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication (1000-1999)
    /// An authenticated view was mounted without a session token
    #[serde(rename = "AUTH_REQUIRED")]
    AuthRequired = 1000,

    // Validation (3000-3999)
    /// Local input failed a shape check
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required form field is empty
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A response body could not be decoded
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Backend (5000-5999)
    /// No response was received
    #[serde(rename = "NETWORK_UNAVAILABLE")]
    NetworkUnavailable = 5000,
    /// The backend answered with a non-success status
    #[serde(rename = "HTTP_STATUS")]
    HttpStatus = 5001,
    /// The backend answered 2xx but signalled failure in the body
    #[serde(rename = "APPLICATION_FAILURE")]
    ApplicationFailure = 5002,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration value is absent
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Session storage failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// JSON encoding failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AuthRequired => "Authentication is required to access this view",
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The response format is invalid",
            Self::NetworkUnavailable => "The server could not be reached",
            Self::HttpStatus => "The server rejected the request",
            Self::ApplicationFailure => "The server reported a failure",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigMissing => "Required configuration is missing",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Session storage operation failed",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Whether the failure was caught locally before any request was issued
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::MissingRequiredField | Self::AuthRequired
        )
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Request ID for tracing
    pub request_id: Option<String>,
    /// HTTP status returned by the backend, if any
    pub http_status: Option<u16>,
    /// Endpoint the failure came from
    pub endpoint: Option<String>,
}

/// Unified error type for the client
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable reason shown to the user
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Field-level validation errors reported by the server
    pub field_errors: BTreeMap<String, String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            field_errors: BTreeMap::new(),
            source: None,
        }
    }

    /// Add a request ID to the error context
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.context.request_id = Some(request_id.into());
        self
    }

    /// Add the endpoint to the error context
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.context.endpoint = Some(endpoint.into());
        self
    }

    /// Attach server-side field errors
    #[must_use]
    pub fn with_field_errors(mut self, field_errors: BTreeMap<String, String>) -> Self {
        self.field_errors = field_errors;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The reason shown to the user, never empty
    #[must_use]
    pub fn reason(&self) -> &str {
        if self.message.trim().is_empty() {
            messages::GENERIC_FAILURE
        } else {
            &self.message
        }
    }

    /// HTTP status attached to this error, if the backend answered
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        self.context.http_status
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.reason())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Authentication required
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, messages::AUTH_REQUIRED)
    }

    /// Transport failure
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkUnavailable, message)
    }

    /// Non-success HTTP status
    pub fn http_status_error(status: u16, message: impl Into<String>) -> Self {
        let mut error = Self::new(ErrorCode::HttpStatus, message);
        error.context.http_status = Some(status);
        error
    }

    /// Success status with a failure signalled in the body
    pub fn application(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApplicationFailure, message)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing required field
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Undecodable response
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Missing configuration
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Session storage failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(ErrorCode::InternalError, format!("{error:#}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}
