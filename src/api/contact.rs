// ABOUTME: Contact form submission to an optional, separately configured endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::info;

use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::http::{ApiClient, ApiRequest};
use crate::models::ContactMessage;

/// Send a message; any 2xx counts as delivered
pub async fn send(client: &ApiClient, message: &ContactMessage) -> AppResult<()> {
    let url = client
        .endpoints()
        .contact
        .as_ref()
        .ok_or_else(|| AppError::config_missing(messages::CONTACT_NOT_CONFIGURED))?;
    let body = serde_json::to_value(message)?;
    client
        .send(
            ApiRequest::post(url, &body)
                .generic_error(messages::CONTACT_FAILED)
                .without_success_check(),
        )
        .await?;
    info!("Contact message sent");
    Ok(())
}
