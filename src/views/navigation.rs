// ABOUTME: Delayed navigation requested by a view after a successful submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use tracing::debug;

use crate::routes::Route;

/// Navigate to `target` once `delay` has elapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Destination
    pub target: Route,
    /// Time to show the success message first
    pub delay: Duration,
}

impl Navigation {
    /// Navigation after `delay_ms` milliseconds
    #[must_use]
    pub const fn after_millis(target: Route, delay_ms: u64) -> Self {
        Self {
            target,
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Sleep for the delay, then hand back the destination
    pub async fn wait(self) -> Route {
        debug!(target_path = %self.target.path(), delay = ?self.delay, "Navigation scheduled");
        tokio::time::sleep(self.delay).await;
        self.target
    }
}
