// ABOUTME: Pure conditional rendering of a fetch state into a terminal panel
// ABOUTME: Loading shows a spinner, failures an error with a retry hint, success the content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use crate::lifecycle::FetchState;

/// What a view shows for its current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Request in flight
    Spinner(String),
    /// Request failed
    Error {
        /// Reason, never empty
        message: String,
        /// Whether a retry action is offered
        retry: bool,
    },
    /// Rendered data
    Content(String),
}

impl Panel {
    /// Choose the panel for `state`
    ///
    /// `Idle` renders `idle` as plain content; `render` is only called on success.
    pub fn from_state<T>(
        state: &FetchState<T>,
        idle: &str,
        loading: &str,
        render: impl FnOnce(&T) -> String,
    ) -> Self {
        match state {
            FetchState::Idle => Self::Content(idle.to_owned()),
            FetchState::Loading => Self::Spinner(loading.to_owned()),
            FetchState::Failure(message) => Self::Error {
                message: message.clone(),
                retry: true,
            },
            FetchState::Success(value) => Self::Content(render(value)),
        }
    }

    /// Drop the retry action from an error panel
    #[must_use]
    pub fn without_retry(self) -> Self {
        match self {
            Self::Error { message, .. } => Self::Error {
                message,
                retry: false,
            },
            other => other,
        }
    }

    /// Whether this is an error panel
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spinner(label) => writeln!(f, "... {label}"),
            Self::Error { message, retry } => {
                writeln!(f, "Error: {message}")?;
                if *retry {
                    writeln!(f, "[Retry]")?;
                }
                Ok(())
            }
            Self::Content(text) => f.write_str(text),
        }
    }
}

/// Text progress bar, `width` cells wide
#[must_use]
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled)),
        percent.clamp(0.0, 100.0)
    )
}

/// Change label marker, `▲` for gains and `▼` otherwise
#[must_use]
pub const fn change_marker(positive: bool) -> &'static str {
    if positive {
        "▲"
    } else {
        "▼"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_per_state() {
        let render = |v: &u32| format!("value {v}");
        assert_eq!(
            Panel::from_state(&FetchState::Loading, "", "Loading...", render),
            Panel::Spinner("Loading...".into())
        );
        assert_eq!(
            Panel::from_state(&FetchState::Success(3), "", "", render),
            Panel::Content("value 3".into())
        );
        let error = Panel::from_state(&FetchState::<u32>::Failure("down".into()), "", "", render);
        assert_eq!(error.to_string(), "Error: down\n[Retry]\n");
        assert_eq!(error.without_retry().to_string(), "Error: down\n");
    }

    #[test]
    fn test_progress_bar_clamps() {
        assert_eq!(progress_bar(50.0, 4), "[##--]  50%");
        assert_eq!(progress_bar(150.0, 2), "[##] 100%");
        assert_eq!(progress_bar(-5.0, 2), "[--]   0%");
    }
}
