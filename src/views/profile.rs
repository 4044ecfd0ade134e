// ABOUTME: Profile view with read and edit modes, image attachment and guarded save
// ABOUTME: Loading is skipped entirely when there is no session token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use tracing::debug;

use super::render::Panel;
use super::ViewContext;
use crate::api;
use crate::attachment::{ImageAttachment, ImageRejections, SelectedFile};
use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::form::{FieldRule, FieldValue, FormController, FormState};
use crate::lifecycle::{FetchLifecycle, FetchState};
use crate::models::{format_number, Profile, ProfileUpdate};

const FIELDS: [&str; 8] = [
    "firstName", "lastName", "email", "password", "age", "weight", "height", "image",
];

/// Whether the profile is shown or being edited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileMode {
    /// Read-only card
    #[default]
    Viewing,
    /// Edit form
    Editing,
}

/// Profile page
#[derive(Debug)]
pub struct ProfileView {
    lifecycle: FetchLifecycle<Profile>,
    form: FormController<Profile>,
    mode: ProfileMode,
    user_id: Option<String>,
    preview: Option<String>,
}

impl Default for ProfileView {
    fn default() -> Self {
        Self::new()
    }
}

fn profile_form() -> FormState {
    FormState::new(&FIELDS)
        .rule(FieldRule::Required, &["firstName", "lastName"])
        .rule(FieldRule::Numeric, &["age", "weight", "height"])
        .invalid_message(messages::PROFILE_INVALID_FIELDS)
}

impl ProfileView {
    /// Unmounted view
    #[must_use]
    pub fn new() -> Self {
        Self {
            lifecycle: FetchLifecycle::new("profile"),
            form: FormController::new("profile-save", profile_form()),
            mode: ProfileMode::Viewing,
            user_id: None,
            preview: None,
        }
    }

    /// Fetch the profile for `user_id`, or for the session's user
    ///
    /// Without a token nothing is requested and the view stays `Idle`.
    pub async fn load(&mut self, ctx: &ViewContext, user_id: Option<&str>) -> FetchState<Profile> {
        let Some(token) = ctx.session.token().await else {
            debug!("No session token; profile not requested");
            return self.lifecycle.state();
        };
        let user_id = match user_id {
            Some(id) => id.to_owned(),
            None => ctx.session.user_id().await.unwrap_or_default(),
        };
        self.user_id = Some(user_id.clone());

        let state = self
            .lifecycle
            .run(api::profile::fetch(&ctx.client, &token, &user_id))
            .await;
        if let FetchState::Success(profile) = &state {
            self.preview.clone_from(&profile.image);
        }
        state
    }

    /// Loaded profile state
    #[must_use]
    pub fn state(&self) -> FetchState<Profile> {
        self.lifecycle.state()
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> ProfileMode {
        self.mode
    }

    /// Image preview source
    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Last error from saving or attaching an image
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.form.error()
    }

    /// Edit form values
    #[must_use]
    pub const fn form(&self) -> &FormState {
        self.form.form()
    }

    /// Switch to editing, seeding the form from the loaded profile
    pub fn begin_edit(&mut self) {
        if let Some(profile) = self.lifecycle.value() {
            let form = self.form.form_mut();
            form.set("firstName", profile.first_name.as_str());
            form.set("lastName", profile.last_name.as_str());
            form.set("email", profile.email.as_str());
            form.set("password", "");
            for (field, value) in [
                ("age", profile.age),
                ("weight", profile.weight),
                ("height", profile.height),
            ] {
                form.set(field, value.map_or_else(FieldValue::default, FieldValue::Number));
            }
            form.set("image", profile.image.clone().unwrap_or_default());
        }
        self.mode = ProfileMode::Editing;
    }

    /// Leave edit mode without saving
    pub fn cancel_edit(&mut self) {
        self.mode = ProfileMode::Viewing;
        self.preview = self.lifecycle.value().and_then(|p| p.image);
    }

    /// Change one form field
    pub fn set_field(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.form.set(field, value);
    }

    /// Validate and attach a new picture
    ///
    /// A rejected file leaves the form and preview unchanged.
    pub async fn attach_image(&mut self, file: SelectedFile) -> AppResult<()> {
        match ImageAttachment::attach(file, ImageRejections::PROFILE).await {
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

    /// Validate the form and store it
    ///
    /// On success the stored profile replaces the loaded one and the view
    /// returns to `Viewing`.
    pub async fn save(&mut self, ctx: &ViewContext) -> AppResult<Profile> {
        let Some(token) = ctx.session.token().await else {
            let error = AppError::auth_required();
            self.form.fail(error.reason());
            return Err(error);
        };
        let user_id = match &self.user_id {
            Some(id) => id.clone(),
            None => ctx.session.user_id().await.unwrap_or_default(),
        };

        let result = self
            .form
            .submit(build_update, |update| async move {
                api::profile::update(&ctx.client, &token, &user_id, &update).await
            })
            .await;

        if let Ok(profile) = &result {
            self.preview.clone_from(&profile.image);
            self.lifecycle.succeed(profile.clone());
            self.mode = ProfileMode::Viewing;
        }
        result
    }

    /// Render the current mode
    #[must_use]
    pub fn render(&self) -> Panel {
        let error = self.error();
        match self.mode {
            ProfileMode::Editing => Panel::Content(
                EditScreen {
                    form: self.form.form(),
                    preview: self.preview(),
                    error: error.as_deref(),
                    saving: self.form.is_submitting(),
                }
                .to_string(),
            ),
            ProfileMode::Viewing => Panel::from_state(
                &self.state(),
                "Log in to view your profile.",
                "Loading profile...",
                |profile| ProfileCard(profile).to_string(),
            )
            .without_retry(),
        }
    }
}

fn build_update(form: &FormState) -> AppResult<ProfileUpdate> {
    Ok(ProfileUpdate {
        first_name: form.text("firstName"),
        last_name: form.text("lastName"),
        email: form.text("email"),
        age: form.optional_number("age")?,
        weight: form.optional_number("weight")?,
        height: form.optional_number("height")?,
        image: form.optional_text("image"),
        password: None,
    }
    .with_password(form.optional_raw_text("password")))
}

fn optional(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{}{unit}", format_number(v)))
}

struct ProfileCard<'a>(&'a Profile);

impl fmt::Display for ProfileCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.0;
        writeln!(f, "{}", profile.full_name())?;
        writeln!(f, "Email:  {}", profile.email)?;
        writeln!(f, "Age:    {}", optional(profile.age, ""))?;
        writeln!(f, "Weight: {}", optional(profile.weight, " kg"))?;
        writeln!(f, "Height: {}", optional(profile.height, " cm"))?;
        let image = profile.image_or_default();
        if image.starts_with("data:") {
            writeln!(f, "Image:  inline ({} bytes)", image.len())
        } else {
            writeln!(f, "Image:  {image}")
        }
    }
}

struct EditScreen<'a> {
    form: &'a FormState,
    preview: Option<&'a str>,
    error: Option<&'a str>,
    saving: bool,
}

impl fmt::Display for EditScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = self.error {
            writeln!(f, "Error: {error}")?;
        }
        for field in FIELDS.iter().filter(|f| **f != "image" && **f != "password") {
            writeln!(f, "{field:<10} {}", self.form.text(field))?;
        }
        match self.preview {
            Some(preview) if !preview.is_empty() => {
                writeln!(f, "{:<10} {} bytes", "image", preview.len())?;
            }
            _ => writeln!(f, "{:<10} none", "image")?,
        }
        if self.saving {
            writeln!(f, "Saving...")?;
        }
        Ok(())
    }
}
