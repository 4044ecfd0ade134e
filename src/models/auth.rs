// ABOUTME: Login credentials, registration payload and the normalized login outcome
// ABOUTME: Extracts the bearer token and user id from whichever shape the backend returns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::http::decode;

/// Login form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email
    pub email: String,
    /// Plain password, sent over the configured transport
    pub password: String,
}

/// Raw login body as returned by any backend
#[derive(Debug, Clone, Default, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    /// Bearer token to persist
    pub token: String,
    /// Normalized user id, when the backend sent one
    pub user_id: Option<String>,
}

impl LoginOutcome {
    /// Normalize a login body
    ///
    /// The token is mandatory. The id comes from `data.id` or, when absent,
    /// from a top-level `id`.
    pub fn from_body(body: Value) -> AppResult<Self> {
        let raw: LoginResponse = decode::decode(body, "login")?;
        let token = raw
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::invalid_format(messages::TOKEN_MISSING))?;

        let user_id = raw
            .data
            .as_ref()
            .and_then(|data| data.get("id"))
            .and_then(decode::normalize_user_id)
            .or_else(|| raw.id.as_ref().and_then(decode::normalize_user_id));
        if user_id.is_none() {
            tracing::warn!("Login response carried no usable user id");
        }

        Ok(Self { token, user_id })
    }
}

/// Registration form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Account email
    pub email: String,
    /// Chosen password
    pub password: String,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Inline image data URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Registration outcome
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Whether the account was created
    #[serde(default)]
    pub success: bool,
    /// Server message, if any
    #[serde(default)]
    pub message: Option<String>,
    /// Field-level validation errors
    #[serde(default, skip_deserializing)]
    pub errors: BTreeMap<String, String>,
}

impl RegisterResponse {
    /// Decode a registration body, turning every non-success into an error
    pub fn from_body(body: Value) -> AppResult<Self> {
        let errors = decode::field_errors(&body);
        let mut response: Self = decode::decode(body, "registration")?;
        if response.success {
            response.errors = errors;
            return Ok(response);
        }
        if errors.is_empty() {
            let message = response
                .message
                .take()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| messages::REGISTER_FAILED.to_owned());
            return Err(AppError::application(message));
        }
        Err(AppError::application(messages::REGISTER_FIX_ERRORS).with_field_errors(errors))
    }
}
