// ABOUTME: Fetch lifecycle controller tracking Idle, Loading, Success, and Failure per view
// ABOUTME: Observable through a watch channel; late results from superseded requests are discarded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fetch lifecycle
//!
//! Each view owns one [`FetchLifecycle`] per request it issues. A request
//! moves the state to [`FetchState::Loading`] and settles it as
//! [`FetchState::Success`] or [`FetchState::Failure`]. A new trigger (mount,
//! dependency change, retry) restarts at `Loading`.
//!
//! Only the most recent request is active: every `run` takes a new
//! generation, and a result whose generation has been superseded (or
//! [`detach`](FetchLifecycle::detach)ed) is dropped instead of being
//! written into the view.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

use crate::errors::AppResult;
use crate::logging::AppLogger;

/// State of one request as seen by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum FetchState<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Request settled with data
    Success(T),
    /// Request settled with a human-readable reason
    Failure(String),
}

impl<T> FetchState<T> {
    /// Request in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Request settled, either way
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }

    /// Data, when settled successfully
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Failure reason, when settled with an error
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(reason) => Some(reason),
            _ => None,
        }
    }

    /// Short label, used in logs
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Failure(_) => "failure",
        }
    }
}

/// Lifecycle controller for one view request
pub struct FetchLifecycle<T> {
    name: &'static str,
    state: watch::Sender<FetchState<T>>,
    generation: AtomicU64,
}

impl<T> FetchLifecycle<T>
where
    T: Clone + Send + Sync,
{
    /// New controller in the `Idle` state; `name` identifies the view in logs
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            name,
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    /// Observe state changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }

    /// Current data, when settled successfully
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.state.borrow().value().cloned()
    }

    /// Enter `Loading` and return the generation that owns the request
    pub fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(FetchState::Loading);
        AppLogger::log_view_transition(self.name, "loading");
        generation
    }

    /// Settle the request owned by `generation`
    ///
    /// Returns `false` when the generation was superseded and the result dropped.
    pub fn settle(&self, generation: u64, result: AppResult<T>) -> bool {
        let next = match result {
            Ok(value) => FetchState::Success(value),
            Err(error) => FetchState::Failure(error.reason().to_owned()),
        };
        self.apply(generation, next)
    }

    /// Settle from a borrowed result, cloning the value or reason
    pub fn settle_ref(&self, generation: u64, result: &AppResult<T>) -> bool {
        let next = match result {
            Ok(value) => FetchState::Success(value.clone()),
            Err(error) => FetchState::Failure(error.reason().to_owned()),
        };
        self.apply(generation, next)
    }

    fn apply(&self, generation: u64, next: FetchState<T>) -> bool {
        let label = next.label();
        let applied = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = next;
            true
        });

        if applied {
            AppLogger::log_view_transition(self.name, label);
        } else {
            debug!(
                view = self.name,
                generation, "Discarding result of superseded request"
            );
        }
        applied
    }

    /// Issue one request: `Loading`, then `Success` or `Failure`
    ///
    /// Returns the state after this request settles (which is a newer
    /// request's state if this one was superseded meanwhile).
    pub async fn run<Fut>(&self, request: Fut) -> FetchState<T>
    where
        Fut: Future<Output = AppResult<T>>,
    {
        let generation = self.begin();
        let result = request.await;
        self.settle(generation, result);
        self.state()
    }

    /// Settle as failed without issuing a request
    pub fn fail(&self, reason: impl Into<String>) {
        let mut reason = reason.into();
        if reason.trim().is_empty() {
            reason = crate::constants::messages::GENERIC_FAILURE.to_owned();
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(FetchState::Failure(reason));
        AppLogger::log_view_transition(self.name, "failure");
    }

    /// Settle as succeeded without issuing a request
    pub fn succeed(&self, value: T) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(FetchState::Success(value));
        AppLogger::log_view_transition(self.name, "success");
    }

    /// Back to `Idle`, dropping any in-flight result
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(FetchState::Idle);
    }

    /// Stop accepting the in-flight result while keeping the current state
    pub fn detach(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl<T> fmt::Debug for FetchLifecycle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchLifecycle")
            .field("name", &self.name)
            .field("state", &self.state.borrow().label())
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::oneshot;

    use super::*;
    use crate::constants::messages;
    use crate::errors::AppError;

    #[tokio::test]
    async fn test_success_settles_with_value() {
        let lifecycle = FetchLifecycle::new("test");
        assert_eq!(lifecycle.state(), FetchState::Idle);

        let state = lifecycle.run(async { Ok(5_u32) }).await;
        assert_eq!(state, FetchState::Success(5));
        assert_eq!(lifecycle.value(), Some(5));
    }

    #[tokio::test]
    async fn test_failure_reason_is_never_empty() {
        let lifecycle: FetchLifecycle<u32> = FetchLifecycle::new("test");
        let state = lifecycle
            .run(async { Err(AppError::http_status_error(500, "")) })
            .await;
        assert_eq!(state.error(), Some(messages::GENERIC_FAILURE));

        lifecycle.fail("");
        assert_eq!(lifecycle.state().error(), Some(messages::GENERIC_FAILURE));
    }

    #[tokio::test]
    async fn test_subscriber_sees_loading_then_terminal() {
        let lifecycle: FetchLifecycle<u32> = FetchLifecycle::new("test");
        let mut rx = lifecycle.subscribe();
        let (tx, gate) = oneshot::channel::<()>();

        let run = lifecycle.run(async move {
            gate.await.map_err(|_| AppError::internal("gate dropped"))?;
            Ok::<u32, AppError>(1)
        });
        let observe = async {
            rx.changed().await.unwrap();
            assert!(rx.borrow_and_update().is_loading());
            tx.send(()).unwrap();
            rx.changed().await.unwrap();
            rx.borrow_and_update().clone()
        };

        let (settled, observed) = tokio::join!(run, observe);
        assert_eq!(settled, FetchState::Success(1));
        assert_eq!(observed, FetchState::Success(1));
    }

    #[tokio::test]
    async fn test_superseded_request_is_discarded() {
        let lifecycle: FetchLifecycle<u32> = FetchLifecycle::new("test");
        let (tx, gate) = oneshot::channel::<()>();

        let slow = lifecycle.run(async move {
            gate.await.map_err(|_| AppError::internal("gate dropped"))?;
            Ok::<u32, AppError>(1)
        });
        let fast = async {
            let state = lifecycle.run(async { Ok(2) }).await;
            tx.send(()).unwrap();
            state
        };

        let (_, fast_state) = tokio::join!(slow, fast);
        assert_eq!(fast_state, FetchState::Success(2));
        assert_eq!(lifecycle.state(), FetchState::Success(2));
    }

    #[tokio::test]
    async fn test_detach_ignores_late_result() {
        let lifecycle: FetchLifecycle<u32> = FetchLifecycle::new("test");
        let generation = lifecycle.begin();
        lifecycle.detach();
        assert!(!lifecycle.settle(generation, Ok(9)));
        assert!(lifecycle.state().is_loading());
    }

    #[tokio::test]
    async fn test_retry_restarts_at_loading() {
        let lifecycle: FetchLifecycle<u32> = FetchLifecycle::new("test");
        lifecycle
            .run(async { Err(AppError::network(messages::NETWORK_UNAVAILABLE)) })
            .await;
        assert_eq!(
            lifecycle.state().error(),
            Some(messages::NETWORK_UNAVAILABLE)
        );

        let generation = lifecycle.begin();
        assert!(lifecycle.state().is_loading());
        assert!(lifecycle.settle(generation, Ok(3)));
        assert_eq!(lifecycle.value(), Some(3));
    }
}
