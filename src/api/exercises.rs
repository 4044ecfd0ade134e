// ABOUTME: Exercise catalog list and detail endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages;
use crate::errors::AppResult;
use crate::http::{ApiClient, ApiRequest};
use crate::models::Exercise;

/// Whole catalog in one request
pub async fn list(client: &ApiClient) -> AppResult<Vec<Exercise>> {
    let response = client
        .send(ApiRequest::get(&client.endpoints().exercises).generic_error(messages::EXERCISES_FAILED))
        .await?;
    Exercise::list_from_payload(response)
}

/// One exercise by id; `None` when the backend returns an empty body
pub async fn detail(client: &ApiClient, exercise_id: &str) -> AppResult<Option<Exercise>> {
    let url = client.endpoints().exercise_for(exercise_id)?;
    let response = client
        .send(
            ApiRequest::get(&url)
                .generic_error("Failed to fetch")
                .with_status_in_message(),
        )
        .await?;
    Exercise::detail_from_payload(response)
}
