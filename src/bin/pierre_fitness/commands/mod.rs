// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pierre-fitness
// ABOUTME: Authentication, page views and profile editing

pub mod auth;
pub mod pages;
pub mod profile;
