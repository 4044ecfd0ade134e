// ABOUTME: Login view: validates credentials, stores the session and schedules the redirect
// ABOUTME: A failed attempt clears any stored session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::warn;

use super::navigation::Navigation;
use super::render::Panel;
use super::ViewContext;
use crate::api;
use crate::constants::{messages, redirects};
use crate::errors::AppResult;
use crate::form::{FieldRule, FieldValue, FormController, FormState};
use crate::models::{Credentials, LoginOutcome};
use crate::routes::Route;

/// Login page
#[derive(Debug)]
pub struct LoginView {
    form: FormController<LoginOutcome>,
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginView {
    /// Empty login form
    #[must_use]
    pub fn new() -> Self {
        let form = FormState::new(&["email", "password"])
            .rule(FieldRule::Required, &["email"])
            .rule(FieldRule::Present, &["password"])
            .invalid_message(messages::LOGIN_MISSING_FIELDS);
        Self {
            form: FormController::new("login", form),
        }
    }

    /// Change one field
    pub fn set_field(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.form.set(field, value);
    }

    /// Submission error, if any
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.form.error()
    }

    /// Success message, if any
    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        self.form.success_message()
    }

    /// Whether a login is in flight
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.form.is_submitting()
    }

    /// Log in and persist the session
    ///
    /// Returns the navigation to the dashboard on success.
    pub async fn submit(&mut self, ctx: &ViewContext) -> AppResult<Navigation> {
        let result = self
            .form
            .submit(
                |form| {
                    Ok(Credentials {
                        email: form.text("email"),
                        password: form.raw_text("password"),
                    })
                },
                |credentials| async move { api::auth::login(&ctx.client, &credentials).await },
            )
            .await;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                if !error.code.is_local() {
                    ctx.session.logout().await?;
                }
                return Err(error);
            }
        };

        if let Err(error) = ctx.session.login(outcome.token, outcome.user_id).await {
            warn!("Could not persist session: {}", error);
            self.form.fail(error.reason());
            return Err(error);
        }
        self.form.set_success_message(messages::LOGIN_SUCCESS);
        Ok(Navigation::after_millis(
            Route::Dashboard,
            redirects::LOGIN_REDIRECT_DELAY_MS,
        ))
    }

    /// Render status lines
    #[must_use]
    pub fn render(&self) -> Panel {
        if let Some(error) = self.error() {
            return Panel::Error {
                message: error,
                retry: false,
            };
        }
        if self.is_submitting() {
            return Panel::Spinner("Logging in...".to_owned());
        }
        Panel::Content(self.success_message().unwrap_or_default().to_owned())
    }
}
