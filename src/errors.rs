// ABOUTME: Re-exports the unified error types from pierre-fitness-core
// ABOUTME: Keeps AppError and ErrorCode identical across the library, CLI and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_fitness_core::errors::*;
