// ABOUTME: Core types and constants for the Pierre fitness client
// ABOUTME: Foundation crate with error handling, page-based pagination, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Fitness Core
//!
//! Foundation crate providing shared types and constants for the Pierre fitness
//! client. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: User-facing messages, limits, and default backend hosts
//! - **pagination**: Page-based pagination over fully fetched collections

/// Unified error handling system with the client error taxonomy
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Page-based pagination for in-memory collections
pub mod pagination;
