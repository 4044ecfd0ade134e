// ABOUTME: Progress page endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages;
use crate::errors::AppResult;
use crate::http::{ApiClient, ApiRequest};
use crate::models::ProgressData;

/// Fetch progress data; the token is sent when present
pub async fn fetch(client: &ApiClient, token: Option<&str>) -> AppResult<ProgressData> {
    let response = client
        .send(
            ApiRequest::get(&client.endpoints().progress)
                .bearer(token)
                .generic_error(messages::PROGRESS_FAILED),
        )
        .await?;
    ProgressData::from_payload(response)
}
