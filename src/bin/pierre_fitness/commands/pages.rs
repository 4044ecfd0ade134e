// ABOUTME: Page commands for pierre-fitness
// ABOUTME: Mounts read-only views and the contact form, and resolves router paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_fitness_client::{
    errors::AppResult,
    routes::Route,
    views::{
        ContactView, DashboardView, ExerciseCatalogView, ExerciseDetailView, ProgressView,
        ViewContext,
    },
};
use tracing::info;

use crate::commands::profile;
use crate::helpers::display::{display_panel, display_status};

type Result<T> = AppResult<T>;

/// Mount the dashboard
pub async fn dashboard(ctx: &ViewContext) {
    let view = DashboardView::new();
    view.load(ctx).await;
    display_panel("Dashboard", &view.render());
}

/// Mount the progress page
pub async fn progress(ctx: &ViewContext) {
    let view = ProgressView::new();
    view.load(ctx).await;
    display_panel("Progress", &view.render());
}

/// Mount the catalog and jump to `page`
pub async fn exercises(ctx: &ViewContext, page: usize) {
    let mut view = ExerciseCatalogView::new();
    view.load(ctx).await;
    let selected = view.go_to_page(page);
    if selected != page {
        info!(requested = page, selected, "Page clamped to available range");
    }
    display_panel("All Exercises", &view.render());
}

/// Mount one exercise
pub async fn exercise(ctx: &ViewContext, id: &str) {
    let view = ExerciseDetailView::new();
    view.load(ctx, id).await;
    display_panel("Exercise", &view.render());
}

/// Submit the contact form
pub async fn contact(ctx: &ViewContext, [fname, lname, email, message]: [String; 4]) -> Result<()> {
    let mut view = ContactView::new();
    view.set_field("fname", fname);
    view.set_field("lname", lname);
    view.set_field("email", email);
    view.set_field("message", message);

    let result = view.submit(ctx).await;
    display_panel("Contact", &view.render());
    result
}

/// Mount the view selected by a router path
pub async fn route(ctx: &ViewContext, path: &str) -> Result<()> {
    match Route::parse(path)? {
        Route::Dashboard => dashboard(ctx).await,
        Route::Progress => progress(ctx).await,
        Route::AllExercise => exercises(ctx, 1).await,
        Route::ExerciseDetail(id) => exercise(ctx, &id).await,
        Route::Profile(id) => profile::show(ctx, id).await,
        Route::Contact => display_status("Use `pierre-fitness contact` to send a message."),
        Route::Login => display_status("Use `pierre-fitness login` to sign in."),
        Route::Register => display_status("Use `pierre-fitness register` to create an account."),
        Route::Nutrition | Route::Workouts => {
            display_status(&format!("{path} has no data to load."));
        }
    }
    Ok(())
}
