// ABOUTME: Profile read and update endpoints addressed by user id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{info, instrument};

use crate::constants::messages;
use crate::errors::AppResult;
use crate::http::{ApiClient, ApiRequest};
use crate::models::{Profile, ProfileUpdate};

/// `GET <profile>/<id>`
#[instrument(skip(client, token))]
pub async fn fetch(client: &ApiClient, token: &str, user_id: &str) -> AppResult<Profile> {
    let url = client.endpoints().profile_for(user_id)?;
    let response = client
        .send(
            ApiRequest::get(&url)
                .bearer(Some(token))
                .generic_error(messages::PROFILE_LOAD_FAILED),
        )
        .await?;
    Profile::from_payload(response)
}

/// `PUT <profile>/<id>`, returning the stored profile
///
/// An empty response body is read as "stored as sent".
#[instrument(skip(client, token, update))]
pub async fn update(
    client: &ApiClient,
    token: &str,
    user_id: &str,
    update: &ProfileUpdate,
) -> AppResult<Profile> {
    let url = client.endpoints().profile_for(user_id)?;
    let body = serde_json::to_value(update)?;
    let response = client
        .send(
            ApiRequest::put(&url, &body)
                .bearer(Some(token))
                .generic_error(messages::PROFILE_UPDATE_FAILED),
        )
        .await?;
    info!("Profile updated");

    if response.is_null() {
        return Ok(Profile {
            first_name: update.first_name.clone(),
            last_name: update.last_name.clone(),
            email: update.email.clone(),
            age: update.age,
            weight: update.weight,
            height: update.height,
            image: update.image.clone(),
        });
    }
    Profile::from_payload(response)
}
