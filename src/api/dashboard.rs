// ABOUTME: Dashboard endpoint; the PHP backend needs the session, the others do not
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{json, Value};
use tracing::instrument;

use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::http::{decode, ApiClient, ApiRequest};
use crate::models::DashboardData;

/// Fetch the dashboard
///
/// Against the PHP backend this is a `POST {userId}` with the bearer token.
/// Without a token it fails with `AuthRequired` before any request is made.
#[instrument(skip_all, fields(backend = %client.config().backend))]
pub async fn fetch(
    client: &ApiClient,
    token: Option<&str>,
    user_id: Option<&str>,
) -> AppResult<DashboardData> {
    let url = &client.endpoints().dashboard;

    if client.config().backend.dashboard_requires_session() {
        let token = token.ok_or_else(AppError::auth_required)?;
        let body = json!({ "userId": user_id });
        let response = client
            .send(
                ApiRequest::post(url, &body)
                    .bearer(Some(token))
                    .generic_error(messages::DASHBOARD_FAILED),
            )
            .await?;
        if response.get("success").and_then(Value::as_bool) != Some(true) {
            let message = decode::error_message(&response)
                .unwrap_or_else(|| messages::DASHBOARD_FAILED.to_owned());
            return Err(AppError::application(message));
        }
        return DashboardData::from_payload(response);
    }

    let response = client
        .send(
            ApiRequest::get(url)
                .bearer(token)
                .generic_error(messages::DASHBOARD_FAILED),
        )
        .await?;
    DashboardData::from_payload(response)
}
