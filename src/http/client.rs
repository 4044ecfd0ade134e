// ABOUTME: Shared HTTP client for backend calls with configured timeouts and bearer auth
// ABOUTME: Normalizes transport, status, and success-flag failures into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use reqwest::{Client, ClientBuilder, Method, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use super::decode;
use crate::config::{ClientConfig, Endpoints};
use crate::constants::{messages, service_names};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

/// One backend request
#[derive(Debug, Clone)]
pub struct ApiRequest<'a> {
    method: Method,
    url: &'a Url,
    body: Option<&'a Value>,
    bearer: Option<&'a str>,
    generic_error: &'a str,
    include_status: bool,
    check_success: bool,
}

impl<'a> ApiRequest<'a> {
    fn new(method: Method, url: &'a Url) -> Self {
        Self {
            method,
            url,
            body: None,
            bearer: None,
            generic_error: messages::GENERIC_FAILURE,
            include_status: false,
            check_success: true,
        }
    }

    /// `GET` request
    #[must_use]
    pub fn get(url: &'a Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// `POST` request with a JSON body
    #[must_use]
    pub fn post(url: &'a Url, body: &'a Value) -> Self {
        Self::new(Method::POST, url).json(body)
    }

    /// `PUT` request with a JSON body
    #[must_use]
    pub fn put(url: &'a Url, body: &'a Value) -> Self {
        Self::new(Method::PUT, url).json(body)
    }

    /// Attach a JSON body
    #[must_use]
    pub fn json(mut self, body: &'a Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Send `Authorization: Bearer <token>` when a token is present
    #[must_use]
    pub fn bearer(mut self, token: Option<&'a str>) -> Self {
        self.bearer = token;
        self
    }

    /// Message used when a failure body carries none
    #[must_use]
    pub fn generic_error(mut self, message: &'a str) -> Self {
        self.generic_error = message;
        self
    }

    /// Report non-2xx as `<generic> (Status: N)`, ignoring the body's message
    #[must_use]
    pub fn with_status_in_message(mut self) -> Self {
        self.include_status = true;
        self
    }

    /// Leave `"success": false` bodies to the caller
    #[must_use]
    pub fn without_success_check(mut self) -> Self {
        self.check_success = false;
        self
    }
}

/// Client for the fitness backend
///
/// Cheap to clone; clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let http = ClientBuilder::new()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!(
                "{}/{}",
                service_names::PIERRE_FITNESS_CLIENT,
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolved request targets
    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.config.endpoints
    }

    /// Issue a request and return the normalized JSON body
    ///
    /// Failures collapse to:
    /// - `NetworkUnavailable` when no response arrives
    /// - `HttpStatus` for non-2xx, with the body's `message` when present
    /// - `ApplicationFailure` for 2xx bodies with `"success": false`
    pub async fn send(&self, request: ApiRequest<'_>) -> AppResult<Value> {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let method = request.method.clone();

        let mut builder = self
            .http
            .request(request.method.clone(), request.url.clone())
            .header("x-request-id", &request_id);
        if let Some(token) = request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(request_id = %request_id, url = %request.url, "Request failed before a response: {}", e);
                AppLogger::log_api_request(
                    &request_id,
                    method.as_str(),
                    request.url.as_str(),
                    None,
                    elapsed_ms(started),
                );
                return Err(AppError::network(messages::NETWORK_UNAVAILABLE)
                    .with_request_id(request_id)
                    .with_endpoint(request.url.as_str())
                    .with_source(e));
            }
        };

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            AppError::network(messages::NETWORK_UNAVAILABLE)
                .with_request_id(request_id.clone())
                .with_endpoint(request.url.as_str())
                .with_source(e)
        })?;
        AppLogger::log_api_request(
            &request_id,
            method.as_str(),
            request.url.as_str(),
            Some(status.as_u16()),
            elapsed_ms(started),
        );

        if !status.is_success() {
            return Err(self
                .status_error(status, &text, &request)
                .with_request_id(request_id)
                .with_endpoint(request.url.as_str()));
        }

        let body = decode::parse_body(&text, self.config.strip_diagnostic_prefix)
            .map_err(|e| e.with_request_id(request_id.clone()).with_endpoint(request.url.as_str()))?;
        if request.check_success {
            decode::check_success_flag(&body, request.generic_error)
                .map_err(|e| e.with_request_id(request_id).with_endpoint(request.url.as_str()))?;
        }
        Ok(body)
    }

    fn status_error(&self, status: StatusCode, text: &str, request: &ApiRequest<'_>) -> AppError {
        let generic = if request.include_status {
            format!("{} (Status: {})", request.generic_error, status.as_u16())
        } else {
            request.generic_error.to_owned()
        };

        match decode::parse_body(text, self.config.strip_diagnostic_prefix) {
            Ok(body) => {
                let message = if request.include_status {
                    generic
                } else {
                    decode::error_message(&body).unwrap_or(generic)
                };
                AppError::http_status_error(status.as_u16(), message)
                    .with_field_errors(decode::field_errors(&body))
            }
            Err(_) => {
                debug!("Error body for status {} is not JSON", status);
                AppError::http_status_error(status.as_u16(), generic)
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
