// ABOUTME: Form state with per-field rules validated synchronously before submission
// ABOUTME: FormController couples a form with the lifecycle of the request it submits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Forms
//!
//! [`FormState::set`] is the only way to change a field. Validation runs
//! once, at submit time; a form that fails validation never reaches the
//! network.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::lifecycle::{FetchLifecycle, FetchState};

/// Value held by one form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text as typed
    Text(String),
    /// Already-numeric value, e.g. copied from a loaded profile
    Number(f64),
}

impl FieldValue {
    /// Text form of the value, trimmed
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_owned(),
            Self::Number(n) => n.to_string(),
        }
    }

    /// Text form of the value exactly as typed
    #[must_use]
    pub fn as_raw_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(n) => n.to_string(),
        }
    }

    /// Whether the field is blank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Numeric interpretation, `None` when blank or not a finite number
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.is_finite().then_some(*n),
            Self::Text(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// Constraint checked by [`FormState::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Non-blank after trimming
    Required,
    /// Non-empty as typed; whitespace counts (passwords)
    Present,
    /// Blank, or parses as a number
    Numeric,
}

/// Field values plus the rules and server errors attached to them
#[derive(Debug, Clone, Default)]
pub struct FormState {
    initial: BTreeMap<String, FieldValue>,
    values: BTreeMap<String, FieldValue>,
    rules: Vec<(String, FieldRule)>,
    invalid_message: String,
    field_errors: BTreeMap<String, String>,
}

impl FormState {
    /// Form with the given fields, all blank
    #[must_use]
    pub fn new(fields: &[&str]) -> Self {
        let initial: BTreeMap<String, FieldValue> = fields
            .iter()
            .map(|field| ((*field).to_owned(), FieldValue::default()))
            .collect();
        Self {
            values: initial.clone(),
            initial,
            rules: Vec::new(),
            invalid_message: crate::constants::messages::GENERIC_FAILURE.to_owned(),
            field_errors: BTreeMap::new(),
        }
    }

    /// Attach `rule` to each of `fields`
    #[must_use]
    pub fn rule(mut self, rule: FieldRule, fields: &[&str]) -> Self {
        self.rules
            .extend(fields.iter().map(|field| ((*field).to_owned(), rule)));
        self
    }

    /// Message reported when validation fails
    #[must_use]
    pub fn invalid_message(mut self, message: &str) -> Self {
        message.clone_into(&mut self.invalid_message);
        self
    }

    /// Set a field, clearing any server error reported for it
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.values.insert(field.to_owned(), value.into());
        if self.field_errors.remove(field).is_some() {
            debug!(field, "Cleared server error after edit");
        }
    }

    /// Raw value of a field
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Trimmed text of a field, empty when absent
    #[must_use]
    pub fn text(&self, field: &str) -> String {
        self.values
            .get(field)
            .map(FieldValue::as_text)
            .unwrap_or_default()
    }

    /// Trimmed text, `None` when blank
    #[must_use]
    pub fn optional_text(&self, field: &str) -> Option<String> {
        let text = self.text(field);
        (!text.is_empty()).then_some(text)
    }

    /// Untrimmed text of a field, empty when absent
    #[must_use]
    pub fn raw_text(&self, field: &str) -> String {
        self.values
            .get(field)
            .map(FieldValue::as_raw_text)
            .unwrap_or_default()
    }

    /// Untrimmed text, `None` only when nothing was typed
    #[must_use]
    pub fn optional_raw_text(&self, field: &str) -> Option<String> {
        let text = self.raw_text(field);
        (!text.is_empty()).then_some(text)
    }

    /// Numeric value of a field
    pub fn number(&self, field: &str) -> AppResult<f64> {
        self.optional_number(field)?
            .ok_or_else(|| AppError::missing_field(self.invalid_message.clone()))
    }

    /// Numeric value, `None` when blank
    pub fn optional_number(&self, field: &str) -> AppResult<Option<f64>> {
        match self.values.get(field) {
            None => Ok(None),
            Some(value) if value.is_empty() => Ok(None),
            Some(value) => value
                .as_number()
                .map(Some)
                .ok_or_else(|| AppError::invalid_input(self.invalid_message.clone())),
        }
    }

    /// Check every rule, failing on the first violation
    pub fn validate(&self) -> AppResult<()> {
        for (field, rule) in &self.rules {
            let value = self.values.get(field);
            let blank = value.is_none_or(FieldValue::is_empty);
            match rule {
                FieldRule::Required if blank => {
                    debug!(field = %field, "Required field is blank");
                    return Err(AppError::missing_field(self.invalid_message.clone()));
                }
                FieldRule::Present
                    if value.is_none_or(|v| matches!(v, FieldValue::Text(t) if t.is_empty())) =>
                {
                    debug!(field = %field, "Field is empty");
                    return Err(AppError::missing_field(self.invalid_message.clone()));
                }
                FieldRule::Numeric if !blank && value.and_then(FieldValue::as_number).is_none() => {
                    debug!(field = %field, "Field is not numeric");
                    return Err(AppError::invalid_input(self.invalid_message.clone()));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Server-reported errors keyed by field
    #[must_use]
    pub const fn field_errors(&self) -> &BTreeMap<String, String> {
        &self.field_errors
    }

    /// Replace the server-reported errors
    pub fn set_field_errors(&mut self, errors: BTreeMap<String, String>) {
        self.field_errors = errors;
    }

    /// Restore the initial values and drop server errors
    pub fn reset(&mut self) {
        self.values.clone_from(&self.initial);
        self.field_errors.clear();
    }

    /// All current values
    #[must_use]
    pub const fn values(&self) -> &BTreeMap<String, FieldValue> {
        &self.values
    }
}

/// A form together with the lifecycle of its submission
#[derive(Debug)]
pub struct FormController<T> {
    form: FormState,
    submission: FetchLifecycle<T>,
    success_message: Option<String>,
}

impl<T> FormController<T>
where
    T: Clone + Send + Sync,
{
    /// Wrap a form; `name` identifies the view in logs
    #[must_use]
    pub fn new(name: &'static str, form: FormState) -> Self {
        Self {
            form,
            submission: FetchLifecycle::new(name),
            success_message: None,
        }
    }

    /// Current form values
    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable access for loading values wholesale
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Set one field
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.form.set(field, value);
    }

    /// Submission state
    #[must_use]
    pub fn state(&self) -> FetchState<T> {
        self.submission.state()
    }

    /// Whether a submission is in flight
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission.state().is_loading()
    }

    /// Error of the last submission
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.submission.state().error().map(str::to_owned)
    }

    /// Server-reported field errors from the last submission
    #[must_use]
    pub const fn field_errors(&self) -> &BTreeMap<String, String> {
        self.form.field_errors()
    }

    /// Message shown after a successful submission
    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    /// Set the success message
    pub fn set_success_message(&mut self, message: impl Into<String>) {
        self.success_message = Some(message.into());
    }

    /// Forget the outcome of the last submission
    pub fn dismiss(&mut self) {
        self.success_message = None;
        self.submission.reset();
    }

    /// Report a failure that happened outside a submission
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.success_message = None;
        self.submission.fail(reason);
    }

    /// Restore the initial values
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Validate, build the payload, then send it
    ///
    /// A validation or payload error settles the submission as failed
    /// without calling `send`.
    pub async fn submit<P, B, S, Fut>(&mut self, build: B, send: S) -> AppResult<T>
    where
        B: FnOnce(&FormState) -> AppResult<P>,
        S: FnOnce(P) -> Fut,
        Fut: std::future::Future<Output = AppResult<T>>,
    {
        self.success_message = None;
        let payload = match self.form.validate().and_then(|()| build(&self.form)) {
            Ok(payload) => payload,
            Err(error) => {
                self.submission.fail(error.reason());
                return Err(error);
            }
        };

        let generation = self.submission.begin();
        let result = send(payload).await;
        if let Err(error) = &result {
            self.form.set_field_errors(error.field_errors.clone());
        }
        self.submission.settle_ref(generation, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::errors::ErrorCode;

    fn profile_form() -> FormState {
        FormState::new(&["firstName", "lastName", "age", "password"])
            .rule(FieldRule::Required, &["firstName", "lastName"])
            .rule(FieldRule::Numeric, &["age"])
            .invalid_message("Please fill in all fields with valid values.")
    }

    #[test]
    fn test_required_and_numeric_rules() {
        let mut form = profile_form();
        let error = form.validate().unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.reason(), "Please fill in all fields with valid values.");

        form.set("firstName", "Ana");
        form.set("lastName", "Diaz");
        assert!(form.validate().is_ok(), "blank numeric field passes");

        form.set("age", "abc");
        assert_eq!(form.validate().unwrap_err().code, ErrorCode::InvalidInput);

        form.set("age", "31");
        assert!(form.validate().is_ok());
        assert_eq!(form.optional_number("age").unwrap(), Some(31.0));
        assert_eq!(form.optional_text("password"), None);
    }

    #[test]
    fn test_present_rule_keeps_whitespace() {
        let mut form = FormState::new(&["password"])
            .rule(FieldRule::Present, &["password"])
            .invalid_message("missing");
        assert_eq!(form.validate().unwrap_err().code, ErrorCode::MissingRequiredField);

        form.set("password", "   ");
        assert!(form.validate().is_ok());
        assert_eq!(form.raw_text("password"), "   ");
        assert_eq!(form.text("password"), "");

        form.set("password", " pw ");
        assert_eq!(form.optional_raw_text("password").as_deref(), Some(" pw "));
    }

    #[test]
    fn test_set_clears_server_error_and_reset_restores() {
        let mut form = profile_form();
        form.set_field_errors(BTreeMap::from([
            ("firstName".to_owned(), "too short".to_owned()),
            ("age".to_owned(), "invalid".to_owned()),
        ]));
        form.set("firstName", "Jo");
        assert!(!form.field_errors().contains_key("firstName"));
        assert!(form.field_errors().contains_key("age"));

        form.reset();
        assert_eq!(form.text("firstName"), "");
        assert!(form.field_errors().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_form_never_sends() {
        let sent = AtomicUsize::new(0);
        let mut controller: FormController<()> = FormController::new("test", profile_form());

        let result = controller
            .submit(
                |_| Ok(()),
                |()| async {
                    sent.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                },
            )
            .await;

        assert!(result.is_err());
        assert_eq!(sent.load(Ordering::SeqCst), 0);
        assert_eq!(
            controller.error().as_deref(),
            Some("Please fill in all fields with valid values.")
        );
    }

    #[tokio::test]
    async fn test_server_field_errors_are_kept() {
        let mut controller: FormController<()> = FormController::new("test", profile_form());
        controller.set("firstName", "Ana");
        controller.set("lastName", "Diaz");

        let result = controller
            .submit(
                |form| Ok(form.text("firstName")),
                |_| async {
                    Err(AppError::application("Please fix the form errors").with_field_errors(
                        BTreeMap::from([("lastName".to_owned(), "taken".to_owned())]),
                    ))
                },
            )
            .await;

        assert!(result.is_err());
        assert_eq!(
            controller.field_errors().get("lastName").map(String::as_str),
            Some("taken")
        );
        assert_eq!(controller.error().as_deref(), Some("Please fix the form errors"));
    }
}
