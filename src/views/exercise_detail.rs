// ABOUTME: Single exercise view addressed by the id in the route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use super::render::Panel;
use super::ViewContext;
use crate::api;
use crate::lifecycle::{FetchLifecycle, FetchState};
use crate::models::Exercise;

/// Exercise detail page
#[derive(Debug)]
pub struct ExerciseDetailView {
    lifecycle: FetchLifecycle<Option<Exercise>>,
}

impl Default for ExerciseDetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseDetailView {
    /// Unmounted view
    #[must_use]
    pub fn new() -> Self {
        Self {
            lifecycle: FetchLifecycle::new("exercise-detail"),
        }
    }

    /// Fetch the exercise; a new id supersedes any request still in flight
    pub async fn load(&self, ctx: &ViewContext, exercise_id: &str) -> FetchState<Option<Exercise>> {
        self.lifecycle
            .run(api::exercises::detail(&ctx.client, exercise_id))
            .await
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> FetchState<Option<Exercise>> {
        self.lifecycle.state()
    }

    /// Render the current state
    #[must_use]
    pub fn render(&self) -> Panel {
        Panel::from_state(&self.state(), "", "Loading...", |exercise| match exercise {
            Some(exercise) => ExerciseScreen(exercise).to_string(),
            None => "No exercise found.\n".to_owned(),
        })
        .without_retry()
    }
}

struct ExerciseScreen<'a>(&'a Exercise);

impl fmt::Display for ExerciseScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exercise = self.0;
        writeln!(f, "{}", exercise.title)?;
        writeln!(
            f,
            "Level: {}   Rating: {} ★",
            exercise.level_label(),
            exercise.rating_label()
        )?;
        if let Some(category) = &exercise.category {
            writeln!(f, "Category: {category}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", exercise.description)?;
        writeln!(f)?;
        writeln!(f, "Image: {}", exercise.cover_image())?;
        for image in exercise.images.iter().skip(1) {
            writeln!(f, "       {image}")?;
        }
        Ok(())
    }
}
