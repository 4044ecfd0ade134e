// ABOUTME: View controllers, one per page, each owning its own fetch and form state
// ABOUTME: ViewContext carries the API client and session into every view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Views
//!
//! A view mounts by calling `load`, which issues its request through a
//! [`FetchLifecycle`](crate::lifecycle::FetchLifecycle), and renders its
//! current state as a [`Panel`]. Views never share state with each other;
//! the only thing they have in common is the [`ViewContext`].

use crate::http::ApiClient;
use crate::session::SessionContext;

/// Contact form
pub mod contact;
/// Dashboard summary
pub mod dashboard;
/// Single exercise
pub mod exercise_detail;
/// Paged exercise catalog
pub mod exercises;
/// Login form
pub mod login;
/// Delayed navigation after submissions
pub mod navigation;
/// Profile display and editing
pub mod profile;
/// Progress page
pub mod progress;
/// Registration form
pub mod register;
/// Conditional rendering of fetch states
pub mod render;

pub use contact::ContactView;
pub use dashboard::DashboardView;
pub use exercise_detail::ExerciseDetailView;
pub use exercises::ExerciseCatalogView;
pub use login::LoginView;
pub use navigation::Navigation;
pub use profile::{ProfileMode, ProfileView};
pub use progress::ProgressView;
pub use register::RegisterView;
pub use render::Panel;

/// Everything a view needs from the outside
#[derive(Debug, Clone)]
pub struct ViewContext {
    /// Backend client
    pub client: ApiClient,
    /// Current session
    pub session: SessionContext,
}

impl ViewContext {
    /// Bundle a client and a session
    #[must_use]
    pub const fn new(client: ApiClient, session: SessionContext) -> Self {
        Self { client, session }
    }
}
