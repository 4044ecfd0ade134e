// ABOUTME: HTTP request issuing and response normalization for the fitness backend
// ABOUTME: Every backend irregularity is absorbed here before typed decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Shared `reqwest` client wrapper with status and success-flag handling
pub mod client;

/// Body normalization: diagnostic stripping, messages, success flags, id shapes
pub mod decode;

pub use client::{ApiClient, ApiRequest};
