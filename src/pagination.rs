// ABOUTME: Re-exports pagination types from pierre-fitness-core for unified type identity
// ABOUTME: Ensures Paginator is the same type across all workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_fitness_core::pagination::*;
