// ABOUTME: Contact form view with a dismissible delivery status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::warn;

use super::render::Panel;
use super::ViewContext;
use crate::api;
use crate::constants::messages;
use crate::errors::{AppResult, ErrorCode};
use crate::form::{FieldRule, FieldValue, FormController, FormState};
use crate::models::ContactMessage;

/// Contact page
#[derive(Debug)]
pub struct ContactView {
    form: FormController<()>,
}

impl Default for ContactView {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactView {
    /// Empty contact form
    #[must_use]
    pub fn new() -> Self {
        let fields = ["fname", "lname", "email", "message"];
        let form = FormState::new(&fields)
            .rule(FieldRule::Required, &fields)
            .invalid_message(messages::CONTACT_MISSING_FIELDS);
        Self {
            form: FormController::new("contact", form),
        }
    }

    /// Change one field
    pub fn set_field(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.form.set(field, value);
    }

    /// Form values
    #[must_use]
    pub const fn form(&self) -> &FormState {
        self.form.form()
    }

    /// Delivery status: success message or error
    #[must_use]
    pub fn status(&self) -> Option<String> {
        self.form
            .success_message()
            .map(str::to_owned)
            .or_else(|| self.form.error())
    }

    /// Send the message
    ///
    /// Any delivery failure is reported with the same fixed message.
    pub async fn submit(&mut self, ctx: &ViewContext) -> AppResult<()> {
        let result = self
            .form
            .submit(
                |form| {
                    Ok(ContactMessage {
                        fname: form.text("fname"),
                        lname: form.text("lname"),
                        email: form.text("email"),
                        message: form.text("message"),
                    })
                },
                |message| async move { api::contact::send(&ctx.client, &message).await },
            )
            .await;

        match result {
            Ok(()) => {
                self.form.reset();
                self.form.set_success_message(messages::CONTACT_SUCCESS);
                Ok(())
            }
            Err(error) => {
                if !error.code.is_local() && error.code != ErrorCode::ConfigMissing {
                    warn!("Contact delivery failed: {}", error);
                    self.form.fail(messages::CONTACT_FAILED);
                }
                Err(error)
            }
        }
    }

    /// Clear the status
    pub fn dismiss(&mut self) {
        self.form.dismiss();
    }

    /// Render the status
    #[must_use]
    pub fn render(&self) -> Panel {
        if self.form.is_submitting() {
            return Panel::Spinner("Sending...".to_owned());
        }
        match (self.form.success_message(), self.form.error()) {
            (Some(message), _) => Panel::Content(format!("{message}\n")),
            (None, Some(error)) => Panel::Error {
                message: error,
                retry: false,
            },
            (None, None) => Panel::Content(String::new()),
        }
    }
}
