// ABOUTME: Dashboard view: stat cards, recent workouts and goal bars for today
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{Local, NaiveDate};

use super::render::{change_marker, progress_bar, Panel};
use super::ViewContext;
use crate::api;
use crate::lifecycle::{FetchLifecycle, FetchState};
use crate::models::{DashboardData, StatKind};

/// Dashboard page
#[derive(Debug)]
pub struct DashboardView {
    lifecycle: FetchLifecycle<DashboardData>,
    today: NaiveDate,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    /// Dashboard dated today
    #[must_use]
    pub fn new() -> Self {
        Self::on(Local::now().date_naive())
    }

    /// Dashboard dated `today`
    #[must_use]
    pub fn on(today: NaiveDate) -> Self {
        Self {
            lifecycle: FetchLifecycle::new("dashboard"),
            today,
        }
    }

    /// Fetch the dashboard for the current session
    pub async fn load(&self, ctx: &ViewContext) -> FetchState<DashboardData> {
        let token = ctx.session.token().await;
        let user_id = ctx.session.user_id().await;
        self.lifecycle
            .run(api::dashboard::fetch(
                &ctx.client,
                token.as_deref(),
                user_id.as_deref(),
            ))
            .await
    }

    /// Fetch again after a failure
    pub async fn retry(&self, ctx: &ViewContext) -> FetchState<DashboardData> {
        self.load(ctx).await
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> FetchState<DashboardData> {
        self.lifecycle.state()
    }

    /// Page heading, e.g. `Fitness Dashboard - Tuesday, October 14`
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Fitness Dashboard - {}", self.today.format("%A, %B %-d"))
    }

    /// Render the current state
    #[must_use]
    pub fn render(&self) -> Panel {
        let heading = self.heading();
        Panel::from_state(&self.state(), "", "Loading dashboard...", |data| {
            DashboardScreen {
                heading: &heading,
                data,
            }
            .to_string()
        })
    }
}

struct DashboardScreen<'a> {
    heading: &'a str,
    data: &'a DashboardData,
}

impl fmt::Display for DashboardScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f)?;

        for stat in &self.data.stats {
            let icon = match stat.kind() {
                StatKind::Calories => "♥",
                StatKind::HeartRate => "♡",
                StatKind::Streak => "★",
                StatKind::Other => "•",
            };
            let unit = stat.unit.as_deref().map(|u| format!(" {u}")).unwrap_or_default();
            writeln!(
                f,
                "{icon} {:<22} {}{unit}  {} {}",
                stat.title,
                stat.value,
                change_marker(stat.is_positive_change()),
                stat.change
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Recent Workouts")?;
        if self.data.recent_workouts.is_empty() {
            writeln!(f, "  No workouts yet")?;
        }
        for workout in &self.data.recent_workouts {
            writeln!(
                f,
                "  {:<20} {:>10}  {} cal  {}",
                workout.name, workout.duration.to_string(), workout.calories, workout.date
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Goals")?;
        for goal in &self.data.goals {
            writeln!(
                f,
                "  {:<18} {:<12} {}",
                goal.name,
                goal.target.to_string(),
                progress_bar(goal.percent(), 20)
            )?;
        }
        Ok(())
    }
}
