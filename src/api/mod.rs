// ABOUTME: Endpoint functions, one per backend operation, over the shared ApiClient
// ABOUTME: Inputs such as the session token are explicit parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Backend endpoints
//!
//! Every function issues exactly one request and decodes its body into a
//! model type. None of them touch the session; callers pass the token in.

/// Login and registration
pub mod auth;
/// Contact form submission
pub mod contact;
/// Dashboard summary
pub mod dashboard;
/// Exercise catalog and detail
pub mod exercises;
/// Profile read and update
pub mod profile;
/// Progress page data
pub mod progress;
