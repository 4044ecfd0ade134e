// ABOUTME: Progress view: metric cards, goal progress, measurements and workout history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use super::render::{change_marker, progress_bar, Panel};
use super::ViewContext;
use crate::api;
use crate::lifecycle::{FetchLifecycle, FetchState};
use crate::models::{MeasurementKind, ProgressData, Trend, WorkoutOutcome};

/// Progress page
#[derive(Debug)]
pub struct ProgressView {
    lifecycle: FetchLifecycle<ProgressData>,
}

impl Default for ProgressView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressView {
    /// Unmounted view
    #[must_use]
    pub fn new() -> Self {
        Self {
            lifecycle: FetchLifecycle::new("progress"),
        }
    }

    /// Fetch progress data
    pub async fn load(&self, ctx: &ViewContext) -> FetchState<ProgressData> {
        let token = ctx.session.token().await;
        self.lifecycle
            .run(api::progress::fetch(&ctx.client, token.as_deref()))
            .await
    }

    /// Fetch again after a failure
    pub async fn retry(&self, ctx: &ViewContext) -> FetchState<ProgressData> {
        self.load(ctx).await
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> FetchState<ProgressData> {
        self.lifecycle.state()
    }

    /// Render the current state
    #[must_use]
    pub fn render(&self) -> Panel {
        Panel::from_state(&self.state(), "", "Loading progress...", |data| {
            ProgressScreen(data).to_string()
        })
    }
}

struct ProgressScreen<'a>(&'a ProgressData);

impl fmt::Display for ProgressScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0;
        writeln!(f, "Your Progress")?;
        writeln!(f)?;

        for metric in &data.metrics {
            let arrow = match metric.trend {
                Trend::Up => "↑",
                Trend::Down => "↓",
            };
            writeln!(
                f,
                "{arrow} {:<20} {}{}  {} {} vs last month",
                metric.title,
                metric.value,
                metric.unit.as_deref().map(|u| format!(" {u}")).unwrap_or_default(),
                change_marker(metric.is_positive_change()),
                metric.change
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Goal Progress")?;
        for goal in &data.goal_progress {
            writeln!(f, "  {}  {}/{} {}", goal.name, goal.current, goal.target, goal.unit)?;
            writeln!(f, "  {}", progress_bar(goal.percent(), 24))?;
            writeln!(
                f,
                "  Start: {}{}   Target: {}{}",
                goal.start_value, goal.unit, goal.target, goal.unit
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Body Measurements")?;
        for measurement in &data.body_measurements {
            let icon = match measurement.kind() {
                MeasurementKind::Weight => "⚖",
                MeasurementKind::Muscle => "💪",
                MeasurementKind::Other => "•",
            };
            writeln!(
                f,
                "  {icon} {:<10} {:<12} {}{}  {} vs last",
                measurement.label,
                measurement.date,
                measurement.value,
                measurement.unit,
                measurement.change
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Workout History")?;
        writeln!(
            f,
            "  {:<12} {:<20} {:>10} {:>9}  Progress",
            "Date", "Workout", "Duration", "Calories"
        )?;
        for workout in &data.workout_history {
            let badge = match workout.outcome() {
                WorkoutOutcome::Improved => "+",
                WorkoutOutcome::Same => "=",
                WorkoutOutcome::Declined => "-",
            };
            writeln!(
                f,
                "  {:<12} {:<20} {:>10} {:>9}  {badge} {}",
                workout.date,
                workout.name,
                workout.duration.to_string(),
                workout.calories.to_string(),
                workout.progress
            )?;
        }
        Ok(())
    }
}
