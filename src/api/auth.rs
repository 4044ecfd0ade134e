// ABOUTME: Login and registration endpoints
// ABOUTME: Failures keep the server's message and any field-level errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{info, instrument};

use crate::constants::messages;
use crate::errors::AppResult;
use crate::http::{ApiClient, ApiRequest};
use crate::models::{Credentials, LoginOutcome, RegisterResponse, Registration};

/// Exchange credentials for a token and user id
#[instrument(skip_all, fields(email = %credentials.email))]
pub async fn login(client: &ApiClient, credentials: &Credentials) -> AppResult<LoginOutcome> {
    let body = serde_json::to_value(credentials)?;
    let response = client
        .send(
            ApiRequest::post(&client.endpoints().login, &body).generic_error(messages::LOGIN_FAILED),
        )
        .await?;
    LoginOutcome::from_body(response)
}

/// Create an account
///
/// A rejection that lists field errors is reported as
/// "Please fix the form errors" with the errors attached.
#[instrument(skip_all, fields(email = %registration.email))]
pub async fn register(client: &ApiClient, registration: &Registration) -> AppResult<RegisterResponse> {
    let body = serde_json::to_value(registration)?;
    let result = client
        .send(
            ApiRequest::post(&client.endpoints().register, &body)
                .generic_error(messages::REGISTER_REQUEST_FAILED)
                .without_success_check(),
        )
        .await;

    match result {
        Ok(response) => {
            let registered = RegisterResponse::from_body(response)?;
            info!("Account registered");
            Ok(registered)
        }
        Err(mut error) => {
            if !error.field_errors.is_empty() {
                messages::REGISTER_FIX_ERRORS.clone_into(&mut error.message);
            }
            Err(error)
        }
    }
}
