// ABOUTME: Library entry point for the Pierre fitness tracking client
// ABOUTME: Typed backend endpoints, fetch lifecycle, forms and terminal views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): zero-tolerance unsafe policy
// - unit tests opt out of the unwrap/expect/panic denials, like the integration tests do
#![deny(unsafe_code)]
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

//! # Pierre Fitness Client
//!
//! Client for a fitness tracking backend: dashboard, progress, profile,
//! exercise catalog, authentication and contact views.
//!
//! ## Architecture
//!
//! - **Config**: backend flavor plus one base URL resolve every endpoint
//! - **HTTP**: one client normalizes transport, status and `success: false` failures
//! - **Models / API**: one typed decoding step per endpoint
//! - **Lifecycle**: each view request moves `Idle -> Loading -> Success | Failure`;
//!   results of superseded requests are dropped
//! - **Views**: controllers owning their own state, rendered as [`views::Panel`]s
//! - **Session**: token and user id, passed explicitly through [`views::ViewContext`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_fitness_client::config::ClientConfig;
//! use pierre_fitness_client::errors::AppResult;
//! use pierre_fitness_client::http::ApiClient;
//! use pierre_fitness_client::session::SessionContext;
//! use pierre_fitness_client::views::{DashboardView, ViewContext};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let ctx = ViewContext::new(ApiClient::new(config)?, SessionContext::in_memory());
//!
//!     let dashboard = DashboardView::new();
//!     dashboard.load(&ctx).await;
//!     println!("{}", dashboard.render());
//!     Ok(())
//! }
//! ```

/// Endpoint functions over the shared client
pub mod api;
/// Image attachment validation and encoding
pub mod attachment;
/// Backend selection, endpoint table and client settings
pub mod config;
/// Application constants and user-facing messages
pub mod constants;
/// Unified error handling with standard error codes
pub mod errors;
/// Form state, validation rules and submission controller
pub mod form;
/// HTTP client and response normalization
pub mod http;
/// Per-view fetch lifecycle
pub mod lifecycle;
/// Structured logging to stderr
pub mod logging;
/// Typed payloads for every endpoint
pub mod models;
/// In-memory page selection
pub mod pagination;
/// Router table
pub mod routes;
/// Persisted authentication session
pub mod session;
/// View controllers and rendering
pub mod views;
