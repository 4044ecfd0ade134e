// ABOUTME: Progress page payload: metrics, goal progress, body measurements, workout history
// ABOUTME: Every collection defaults to empty when the backend omits it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient_number, DisplayValue};
use crate::errors::AppResult;
use crate::http::decode;

/// Direction of a metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Improving
    Up,
    /// Anything else
    #[default]
    #[serde(other)]
    Down,
}

/// Monthly metric card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    /// Metric title
    pub title: String,
    /// Displayed value
    pub value: DisplayValue,
    /// Unit suffix
    pub unit: Option<String>,
    /// Trend arrow
    pub trend: Trend,
    /// Change label such as `+5%`
    pub change: String,
}

impl Metric {
    /// Change label starts with `+`
    #[must_use]
    pub fn is_positive_change(&self) -> bool {
        self.change.starts_with('+')
    }
}

/// Progress toward one goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoalProgress {
    /// Goal name
    pub name: String,
    /// Current value
    pub current: DisplayValue,
    /// Target value
    pub target: DisplayValue,
    /// Unit shared by current, start and target
    pub unit: String,
    /// Completion percentage
    #[serde(deserialize_with = "lenient_number")]
    pub percentage: Option<f64>,
    /// Value when the goal was set
    pub start_value: DisplayValue,
}

impl GoalProgress {
    /// Completion clamped to `0..=100`
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percentage.unwrap_or(0.0).clamp(0.0, 100.0)
    }
}

/// Icon family of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKind {
    /// Body weight
    Weight,
    /// Muscle mass
    Muscle,
    /// Anything else
    Other,
}

/// Body measurement entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurement {
    /// Measurement type as sent, e.g. `weight`
    #[serde(rename = "type")]
    pub label: String,
    /// Date label
    pub date: String,
    /// Measured value
    pub value: DisplayValue,
    /// Unit suffix
    pub unit: String,
    /// Change since the previous entry
    pub change: String,
}

impl Measurement {
    /// Classify by type label
    #[must_use]
    pub fn kind(&self) -> MeasurementKind {
        match self.label.as_str() {
            "weight" => MeasurementKind::Weight,
            "muscle" => MeasurementKind::Muscle,
            _ => MeasurementKind::Other,
        }
    }

    /// Change label starts with `+`
    #[must_use]
    pub fn is_positive_change(&self) -> bool {
        self.change.starts_with('+')
    }
}

/// Outcome of a workout compared with the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutOutcome {
    /// Better than last time
    Improved,
    /// Unchanged
    Same,
    /// Anything else
    Declined,
}

/// Workout history row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutRecord {
    /// Date label
    pub date: String,
    /// Workout name
    pub name: String,
    /// Duration label
    pub duration: DisplayValue,
    /// Calories burned
    pub calories: DisplayValue,
    /// Progress label as sent (`improved`, `same`, `declined`)
    pub progress: String,
}

impl WorkoutRecord {
    /// Classify the progress label
    #[must_use]
    pub fn outcome(&self) -> WorkoutOutcome {
        match self.progress.as_str() {
            "improved" => WorkoutOutcome::Improved,
            "same" => WorkoutOutcome::Same,
            _ => WorkoutOutcome::Declined,
        }
    }
}

/// Everything the progress page renders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressData {
    /// Metric cards
    pub metrics: Vec<Metric>,
    /// Goal progress bars
    pub goal_progress: Vec<GoalProgress>,
    /// Workout history table
    pub workout_history: Vec<WorkoutRecord>,
    /// Body measurement list
    pub body_measurements: Vec<Measurement>,
}

impl ProgressData {
    /// Decode a progress body; `null` is an empty page
    pub fn from_payload(body: Value) -> AppResult<Self> {
        if body.is_null() {
            return Ok(Self::default());
        }
        decode::decode(body, "progress")
    }
}
