// ABOUTME: Session commands for pierre-fitness
// ABOUTME: Handles login, logout, whoami and registration through their views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use pierre_fitness_client::{
    attachment::SelectedFile,
    errors::AppResult,
    views::{LoginView, RegisterView, ViewContext},
};
use tracing::info;

use crate::helpers::display::{display_panel, display_redirect, display_session, display_status};

type Result<T> = AppResult<T>;

/// Registration form input from the command line
pub struct RegisterFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub age: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
}

/// Log in and wait out the redirect
pub async fn login(ctx: &ViewContext, email: String, password: String) -> Result<()> {
    let mut view = LoginView::new();
    view.set_field("email", email);
    view.set_field("password", password);

    let result = view.submit(ctx).await;
    display_panel("Login", &view.render());
    let navigation = result?;
    let route = navigation.wait().await;
    display_redirect(&route);
    Ok(())
}

/// Drop the stored session
pub async fn logout(ctx: &ViewContext) -> Result<()> {
    ctx.session.logout().await?;
    info!("Logged out");
    display_status("Logged out.");
    Ok(())
}

/// Print the stored session
pub async fn whoami(ctx: &ViewContext) {
    display_session(&ctx.session.current().await);
}

/// Register and wait out the redirect
pub async fn register(ctx: &ViewContext, fields: RegisterFields, image: Option<PathBuf>) -> Result<()> {
    let mut view = RegisterView::new();
    view.set_field("firstName", fields.first_name);
    view.set_field("lastName", fields.last_name);
    view.set_field("email", fields.email);
    view.set_field("password", fields.password);
    for (field, value) in [
        ("age", fields.age),
        ("weight", fields.weight),
        ("height", fields.height),
    ] {
        if let Some(value) = value {
            view.set_field(field, value);
        }
    }

    if let Some(path) = image {
        let file = SelectedFile::from_path(&path).await?;
        if let Err(error) = view.attach_image(file).await {
            display_panel("Register", &view.render());
            return Err(error);
        }
    }

    let result = view.submit(ctx).await;
    display_panel("Register", &view.render());
    let navigation = result?;
    let route = navigation.wait().await;
    display_redirect(&route);
    Ok(())
}
