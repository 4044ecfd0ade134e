// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds view contexts against a wiremock server and seeds sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pierre_fitness_client`

use std::sync::Once;

use pierre_fitness_client::{
    config::{BackendFlavor, ClientConfig},
    http::ApiClient,
    session::SessionContext,
    views::ViewContext,
};
use wiremock::MockServer;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Client configuration for `flavor` rooted at the mock server
pub fn config_for(flavor: BackendFlavor, server: &MockServer) -> ClientConfig {
    ClientConfig::for_backend(flavor, &server.uri()).unwrap()
}

/// View context with an empty in-memory session
pub fn context_with(config: ClientConfig) -> ViewContext {
    init_test_logging();
    ViewContext::new(ApiClient::new(config).unwrap(), SessionContext::in_memory())
}

/// View context for `flavor` against the mock server
pub fn context(flavor: BackendFlavor, server: &MockServer) -> ViewContext {
    context_with(config_for(flavor, server))
}

/// View context with a stored session
pub async fn logged_in(flavor: BackendFlavor, server: &MockServer, token: &str, user_id: &str) -> ViewContext {
    let ctx = context(flavor, server);
    ctx.session
        .login(token.to_owned(), Some(user_id.to_owned()))
        .await
        .unwrap();
    ctx
}

/// Context whose backend refuses connections
pub fn unreachable_context() -> ViewContext {
    context_with(ClientConfig::for_backend(BackendFlavor::Local, "http://127.0.0.1:9").unwrap())
}
