// ABOUTME: User profile as served by the profile endpoint and the update payload sent back
// ABOUTME: Numbers are accepted as JSON numbers or numeric strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient_number;
use crate::errors::AppResult;
use crate::http::decode;

/// Fallback image shown when a profile has none
pub const DEFAULT_PROFILE_IMAGE: &str = "/default-profile.png";

/// User profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Account email
    pub email: String,
    /// Age in years
    #[serde(deserialize_with = "lenient_number")]
    pub age: Option<f64>,
    /// Weight in kilograms
    #[serde(deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
    /// Height in centimeters
    #[serde(deserialize_with = "lenient_number")]
    pub height: Option<f64>,
    /// Image URL or inline data URL
    pub image: Option<String>,
}

impl Profile {
    /// Decode a profile body
    pub fn from_payload(body: Value) -> AppResult<Self> {
        decode::decode(body, "profile")
    }

    /// Image to display, falling back to the default picture
    #[must_use]
    pub fn image_or_default(&self) -> &str {
        self.image
            .as_deref()
            .filter(|i| !i.is_empty())
            .unwrap_or(DEFAULT_PROFILE_IMAGE)
    }

    /// `First Last`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

/// Profile update payload
///
/// `password` is only sent when the user typed one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Account email
    pub email: String,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Image URL or inline data URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// New password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    /// Set the password, ignoring blank input
    #[must_use]
    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password.filter(|p| !p.is_empty());
        self
    }
}
