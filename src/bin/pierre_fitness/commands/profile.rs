// ABOUTME: Profile commands for pierre-fitness
// ABOUTME: Shows a profile, or loads it, edits the given fields, and saves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use pierre_fitness_client::{
    attachment::SelectedFile,
    errors::{AppError, AppResult},
    lifecycle::FetchState,
    views::{ProfileView, ViewContext},
};

use crate::helpers::display::display_panel;

type Result<T> = AppResult<T>;

/// Profile fields to change; `None` keeps the loaded value
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub age: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
}

/// Mount the profile page
pub async fn show(ctx: &ViewContext, id: Option<String>) {
    let mut view = ProfileView::new();
    view.load(ctx, id.as_deref()).await;
    display_panel("Profile", &view.render());
}

/// Load, edit and save the profile
pub async fn update(
    ctx: &ViewContext,
    id: Option<String>,
    changes: ProfileChanges,
    image: Option<PathBuf>,
) -> Result<()> {
    let mut view = ProfileView::new();
    match view.load(ctx, id.as_deref()).await {
        FetchState::Success(_) => {}
        FetchState::Failure(reason) => {
            display_panel("Profile", &view.render());
            return Err(AppError::application(reason));
        }
        FetchState::Idle | FetchState::Loading => {
            display_panel("Profile", &view.render());
            return Err(AppError::auth_required());
        }
    }

    view.begin_edit();
    for (field, value) in [
        ("firstName", changes.first_name),
        ("lastName", changes.last_name),
        ("email", changes.email),
        ("password", changes.password),
        ("age", changes.age),
        ("weight", changes.weight),
        ("height", changes.height),
    ] {
        if let Some(value) = value {
            view.set_field(field, value);
        }
    }

    if let Some(path) = image {
        let file = SelectedFile::from_path(&path).await?;
        if let Err(error) = view.attach_image(file).await {
            display_panel("Edit Profile", &view.render());
            return Err(error);
        }
    }

    let result = view.save(ctx).await;
    display_panel("Profile", &view.render());
    result.map(|_| ())
}
