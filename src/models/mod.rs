// ABOUTME: Typed payloads for every backend endpoint, decoded once at the boundary
// ABOUTME: Shared display value and lenient number decoding used across models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models
//!
//! Each endpoint's body is decoded into one of these types right after the
//! HTTP boundary; views never look at raw JSON.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Login, registration and their responses
pub mod auth;
/// Contact form message
pub mod contact;
/// Dashboard stat cards, recent workouts and goals
pub mod dashboard;
/// Exercise catalog entries
pub mod exercise;
/// User profile and its update payload
pub mod profile;
/// Progress metrics, goals, measurements and history
pub mod progress;

pub use auth::{Credentials, LoginOutcome, RegisterResponse, Registration};
pub use contact::ContactMessage;
pub use dashboard::{DashboardData, GoalCard, StatCard, StatKind, WorkoutSummary};
pub use exercise::{Exercise, Rating};
pub use profile::{Profile, ProfileUpdate};
pub use progress::{
    GoalProgress, Measurement, MeasurementKind, Metric, ProgressData, Trend, WorkoutOutcome,
    WorkoutRecord,
};

/// A value the backend sends as either a number or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    /// Numeric value
    Number(serde_json::Number),
    /// Textual value, shown as-is
    Text(String),
}

impl DisplayValue {
    /// Numeric interpretation, parsing text when needed
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(t) => t.trim().parse().ok(),
        }
    }
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

impl From<i64> for DisplayValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Accept `31`, `31.5`, `"31"`, `""` or `null` for an optional number
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DisplayValue>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(DisplayValue::Text(t)) if t.trim().is_empty() => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {v:?}"))),
    }
}

/// Format a number without a trailing `.0` for whole values
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
