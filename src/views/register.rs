// ABOUTME: Registration view with optional profile picture and server field errors
// ABOUTME: Success resets the form and schedules the redirect to login
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use super::navigation::Navigation;
use super::render::Panel;
use super::ViewContext;
use crate::api;
use crate::attachment::{ImageAttachment, ImageRejections, SelectedFile};
use crate::constants::{messages, redirects};
use crate::errors::AppResult;
use crate::form::{FieldRule, FieldValue, FormController, FormState};
use crate::models::{RegisterResponse, Registration};
use crate::routes::Route;

/// Registration page
#[derive(Debug)]
pub struct RegisterView {
    form: FormController<RegisterResponse>,
    preview: Option<String>,
}

impl Default for RegisterView {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterView {
    /// Empty registration form
    #[must_use]
    pub fn new() -> Self {
        let form = FormState::new(&[
            "firstName", "lastName", "email", "password", "age", "weight", "height", "image",
        ])
        .rule(
            FieldRule::Required,
            &["firstName", "lastName", "email"],
        )
        .rule(FieldRule::Present, &["password"])
        .rule(FieldRule::Numeric, &["age", "weight", "height"])
        .invalid_message(messages::REGISTER_MISSING_FIELDS);
        Self {
            form: FormController::new("register", form),
            preview: None,
        }
    }

    /// Change one field, clearing its server error
    pub fn set_field(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.form.set(field, value);
    }

    /// Form values
    #[must_use]
    pub const fn form(&self) -> &FormState {
        self.form.form()
    }

    /// Submission error, if any
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.form.error()
    }

    /// Server-reported errors by field
    #[must_use]
    pub const fn field_errors(&self) -> &BTreeMap<String, String> {
        self.form.field_errors()
    }

    /// Success message, if any
    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        self.form.success_message()
    }

    /// Image preview source
    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Validate and attach a profile picture
    pub async fn attach_image(&mut self, file: SelectedFile) -> AppResult<()> {
        match ImageAttachment::attach(file, ImageRejections::REGISTER).await {
            Ok(image) => {
                self.form.set("image", image.data_url.as_str());
                self.preview = Some(image.data_url);
                Ok(())
            }
            Err(error) => {
                self.form.fail(error.reason());
                Err(error)
            }
        }
    }

    /// Register the account
    ///
    /// Returns the navigation to the login page on success.
    pub async fn submit(&mut self, ctx: &ViewContext) -> AppResult<Navigation> {
        self.form
            .submit(
                |form| {
                    Ok(Registration {
                        first_name: form.text("firstName"),
                        last_name: form.text("lastName"),
                        email: form.text("email"),
                        password: form.raw_text("password"),
                        age: form.optional_number("age")?,
                        weight: form.optional_number("weight")?,
                        height: form.optional_number("height")?,
                        image: form.optional_text("image"),
                    })
                },
                |registration| async move { api::auth::register(&ctx.client, &registration).await },
            )
            .await?;

        self.form.reset();
        self.preview = None;
        self.form.set_success_message(messages::REGISTER_SUCCESS);
        Ok(Navigation::after_millis(
            Route::Login,
            redirects::REGISTER_REDIRECT_DELAY_MS,
        ))
    }

    /// Render status lines, listing field errors under the main error
    #[must_use]
    pub fn render(&self) -> Panel {
        if let Some(error) = self.error() {
            let details: String = self
                .field_errors()
                .values()
                .map(|text| format!("\n  {text}"))
                .collect();
            return Panel::Error {
                message: format!("{error}{details}"),
                retry: false,
            };
        }
        if self.form.is_submitting() {
            return Panel::Spinner("Registering...".to_owned());
        }
        Panel::Content(self.success_message().unwrap_or_default().to_owned())
    }
}
