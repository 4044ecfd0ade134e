// ABOUTME: Re-exports application constants from pierre-fitness-core
// ABOUTME: Messages, limits, redirect delays and default hosts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_fitness_core::constants::*;
