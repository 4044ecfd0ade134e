// ABOUTME: Dashboard stat cards, recent workouts and goals
// ABOUTME: Accepts both the direct card shape and the PHP envelope with raw stat counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient_number, DisplayValue};
use crate::errors::AppResult;
use crate::http::decode;

/// One headline number on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    /// Card title, also used to pick the icon
    pub title: String,
    /// Displayed value
    pub value: DisplayValue,
    /// Unit suffix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Change label such as `+3`
    #[serde(default)]
    pub change: String,
}

/// Icon family of a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Calorie counters
    Calories,
    /// Heart rate readings
    HeartRate,
    /// Consecutive-day streaks
    Streak,
    /// Everything else
    Other,
}

impl StatCard {
    fn new(title: &str, value: Value, unit: Option<&str>, change: &str) -> Self {
        let value = match value {
            Value::Number(n) => DisplayValue::Number(n),
            Value::String(s) => DisplayValue::Text(s),
            other => DisplayValue::Text(other.to_string()),
        };
        Self {
            title: title.to_owned(),
            value,
            unit: unit.map(str::to_owned),
            change: change.to_owned(),
        }
    }

    /// Classify the card by its title
    #[must_use]
    pub fn kind(&self) -> StatKind {
        if self.title.contains("Calories") {
            StatKind::Calories
        } else if self.title.contains("Heart Rate") {
            StatKind::HeartRate
        } else if self.title.contains("Streak") {
            StatKind::Streak
        } else {
            StatKind::Other
        }
    }

    /// Change label starts with `+`
    #[must_use]
    pub fn is_positive_change(&self) -> bool {
        self.change.starts_with('+')
    }
}

/// Recent workout line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutSummary {
    /// Workout name
    pub name: String,
    /// Duration label
    pub duration: DisplayValue,
    /// Calories burned
    pub calories: DisplayValue,
    /// Date label
    pub date: String,
}

/// Goal progress bar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalCard {
    /// Goal name
    #[serde(default)]
    pub name: String,
    /// Target label
    #[serde(default)]
    pub target: DisplayValue,
    /// Completion percentage
    #[serde(default, deserialize_with = "lenient_number")]
    pub progress: Option<f64>,
}

impl GoalCard {
    /// Completion clamped to `0..=100`
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.progress.unwrap_or(0.0).clamp(0.0, 100.0)
    }
}

/// Everything the dashboard renders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// Headline stats
    #[serde(default)]
    pub stats: Vec<StatCard>,
    /// Most recent workouts
    #[serde(default)]
    pub recent_workouts: Vec<WorkoutSummary>,
    /// Goal bars
    #[serde(default)]
    pub goals: Vec<GoalCard>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeData {
    #[serde(default)]
    stats: Option<serde_json::Map<String, Value>>,
    #[serde(default)]
    workout_history: Vec<WorkoutSummary>,
}

impl DashboardData {
    /// Decode either dashboard shape
    ///
    /// A body with a `data` object is the PHP envelope; anything else is
    /// read as direct `stats` / `recentWorkouts` / `goals` arrays.
    pub fn from_payload(body: Value) -> AppResult<Self> {
        match body {
            Value::Object(mut map) if map.get("data").is_some_and(Value::is_object) => {
                let data = map.remove("data").unwrap_or_default();
                let envelope: EnvelopeData = decode::decode(data, "dashboard")?;
                Ok(Self {
                    stats: envelope.stats.map(transform_stats).unwrap_or_default(),
                    recent_workouts: envelope.workout_history,
                    goals: default_goals(),
                })
            }
            Value::Null => Ok(Self::default()),
            other => decode::decode(other, "dashboard"),
        }
    }
}

/// Build cards from raw PHP counters, one per counter present
#[must_use]
pub fn transform_stats(mut stats: serde_json::Map<String, Value>) -> Vec<StatCard> {
    const CARDS: [(&str, &str, Option<&str>, &str); 4] = [
        ("workoutsCompleted", "Workouts Completed", None, "+3"),
        ("totalCalories", "Calories Burned", Some("kcal"), "+120"),
        ("currentStreak", "Current Streak", Some("days"), "+1"),
        ("totalWorkouts", "Total Workouts", None, "+3"),
    ];
    CARDS
        .iter()
        .filter_map(|(key, title, unit, change)| {
            stats
                .remove(*key)
                .filter(|v| !v.is_null())
                .map(|value| StatCard::new(title, value, *unit, change))
        })
        .collect()
}

/// Placeholder goals shown with PHP dashboard data
#[must_use]
pub fn default_goals() -> Vec<GoalCard> {
    [
        ("Weekly Workouts", "5 workouts", 60.0),
        ("Monthly Calories", "5000 kcal", 45.0),
        ("Streak Goal", "14 days", 30.0),
    ]
    .into_iter()
    .map(|(name, target, progress)| GoalCard {
        name: name.to_owned(),
        target: DisplayValue::from(target),
        progress: Some(progress),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_php_envelope_is_transformed() {
        let body = json!({
            "success": true,
            "data": {
                "stats": {"workoutsCompleted": 4, "totalCalories": 1800, "currentStreak": 2},
                "workoutHistory": [{"name": "Run", "duration": "30 min", "calories": 300, "date": "2024-05-01"}]
            }
        });
        let data = DashboardData::from_payload(body).unwrap();
        let titles: Vec<_> = data.stats.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Workouts Completed", "Calories Burned", "Current Streak"]);
        assert_eq!(data.stats[1].unit.as_deref(), Some("kcal"));
        assert_eq!(data.stats[1].kind(), StatKind::Calories);
        assert_eq!(data.recent_workouts.len(), 1);
        assert_eq!(data.goals.len(), 3);
        assert!((data.goals[0].percent() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_direct_shape_defaults_missing_arrays() {
        let body = json!({"stats": [{"title": "Avg Heart Rate", "value": "72", "unit": "bpm", "change": "-2"}]});
        let data = DashboardData::from_payload(body).unwrap();
        assert_eq!(data.stats[0].kind(), StatKind::HeartRate);
        assert!(!data.stats[0].is_positive_change());
        assert!(data.recent_workouts.is_empty());
        assert!(data.goals.is_empty());
    }

    #[test]
    fn test_envelope_without_stats_has_no_cards() {
        let data = DashboardData::from_payload(json!({"success": true, "data": {}})).unwrap();
        assert!(data.stats.is_empty());
        assert_eq!(data.goals, default_goals());
    }
}
