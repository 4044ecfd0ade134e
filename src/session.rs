// ABOUTME: Persisted authentication session (bearer token and user id) and its stores
// ABOUTME: SessionContext is passed explicitly to views instead of reading ambient storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session handling
//!
//! A [`Session`] is created by a successful login, read by every
//! authenticated request and destroyed on logout or on a failed
//! authentication round trip. There is no expiry or refresh.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

/// Authentication token and user identifier pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque bearer credential
    pub token: Option<String>,
    /// User identifier, already normalized to a string
    pub user_id: Option<String>,
}

impl Session {
    /// Whether a non-empty token is present
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Persistent storage for the session
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the stored session; an absent session is the default value
    async fn load(&self) -> AppResult<Session>;

    /// Persist the session
    async fn save(&self, session: &Session) -> AppResult<()>;

    /// Remove any stored session
    async fn clear(&self) -> AppResult<()>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store the session at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the session file
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> AppResult<Session> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::storage(format!(
                    "Session file {} is corrupt: {e}",
                    self.path.display()
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Session::default()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read session file {}: {e}",
                self.path.display()
            ))),
        }
    }

    async fn save(&self, session: &Session) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, bytes).await?;
        debug!("Session written to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store, used by tests and short-lived tools
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Session>,
}

impl MemorySessionStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> AppResult<Session> {
        Ok(self.inner.read().await.clone())
    }

    async fn save(&self, session: &Session) -> AppResult<()> {
        *self.inner.write().await = session.clone();
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.inner.write().await = Session::default();
        Ok(())
    }
}

/// Session handle threaded through views and requests
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    current: Arc<RwLock<Session>>,
}

impl SessionContext {
    /// Wrap a store; call [`Self::restore`] to pick up a persisted session
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            current: Arc::new(RwLock::new(Session::default())),
        }
    }

    /// Context backed by an in-memory store
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    /// Load the persisted session into the context
    pub async fn restore(&self) -> AppResult<Session> {
        let session = self.store.load().await?;
        *self.current.write().await = session.clone();
        Ok(session)
    }

    /// Record a successful authentication
    pub async fn login(&self, token: String, user_id: Option<String>) -> AppResult<Session> {
        if token.trim().is_empty() {
            return Err(AppError::invalid_input("Session token must not be empty"));
        }
        let session = Session {
            token: Some(token),
            user_id,
        };
        self.store.save(&session).await?;
        *self.current.write().await = session.clone();
        AppLogger::log_auth_event(session.user_id.as_deref(), "login", true, None);
        Ok(session)
    }

    /// Destroy the session
    pub async fn logout(&self) -> AppResult<()> {
        self.store.clear().await?;
        let previous = std::mem::take(&mut *self.current.write().await);
        if previous.is_authenticated() {
            info!("Session cleared");
        }
        Ok(())
    }

    /// Snapshot of the current session
    pub async fn current(&self) -> Session {
        self.current.read().await.clone()
    }

    /// Current bearer token, if any
    pub async fn token(&self) -> Option<String> {
        self.current
            .read()
            .await
            .token
            .clone()
            .filter(|t| !t.is_empty())
    }

    /// Current user id, if any
    pub async fn user_id(&self) -> Option<String> {
        self.current.read().await.user_id.clone()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}
