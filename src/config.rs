// ABOUTME: Client configuration for backend selection, endpoints, and timeouts
// ABOUTME: One configurable request target replaces per-component hard-coded hosts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the fitness client
//!
//! The backend has existed in three interchangeable shapes (a PHP API, a mock
//! JSON service and a local development service). A [`BackendFlavor`] picks
//! the path table and a single base URL picks the host; every request target
//! is derived from those two values.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::constants::{env_config, hosts, limits, mock_paths};
use crate::errors::{AppError, AppResult};

/// Which backend the client talks to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendFlavor {
    /// PHP API (`/login.php`, `/dashboard.php`, ...)
    #[default]
    Php,
    /// Public mock JSON collections
    Mock,
    /// Local development service
    Local,
}

impl BackendFlavor {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "mock" | "mock-json" | "dummyjson" => Self::Mock,
            "local" | "dev-service" => Self::Local,
            "php" => Self::Php,
            other => {
                warn!("Unknown backend flavor '{}', falling back to php", other);
                Self::Php
            }
        }
    }

    /// Default host for this flavor
    #[must_use]
    pub const fn default_host(self) -> &'static str {
        match self {
            Self::Php => hosts::PHP_API,
            Self::Mock => hosts::MOCK_JSON,
            Self::Local => hosts::LOCAL_SERVICE,
        }
    }

    /// Whether response bodies may carry diagnostic text ahead of the JSON
    #[must_use]
    pub const fn emits_diagnostics(self) -> bool {
        matches!(self, Self::Php)
    }

    /// Whether the dashboard is an authenticated POST wrapped in a success envelope
    #[must_use]
    pub const fn dashboard_requires_session(self) -> bool {
        matches!(self, Self::Php)
    }

    /// Whether the exercise catalog lives on the public mock host rather than the base URL
    #[must_use]
    pub const fn catalog_on_mock_host(self) -> bool {
        matches!(self, Self::Php)
    }

    /// Path for each endpoint under this flavor
    const fn paths(self) -> EndpointPaths {
        match self {
            Self::Php => EndpointPaths {
                login: "/login.php",
                register: "/register.php",
                dashboard: "/dashboard.php",
                progress: "/progress.php",
                profile: "/profile.php",
                exercises: mock_paths::EXERCISES,
            },
            Self::Mock => EndpointPaths {
                login: mock_paths::LOGIN,
                register: "/register",
                dashboard: mock_paths::DASHBOARD,
                progress: "/progress",
                profile: "/profile",
                exercises: mock_paths::EXERCISES,
            },
            Self::Local => EndpointPaths {
                login: "/login",
                register: "/register",
                dashboard: "/dashboard",
                progress: "/progress",
                profile: "/profile",
                exercises: "/exercises",
            },
        }
    }
}

impl fmt::Display for BackendFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Php => write!(f, "php"),
            Self::Mock => write!(f, "mock"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

struct EndpointPaths {
    login: &'static str,
    register: &'static str,
    dashboard: &'static str,
    progress: &'static str,
    profile: &'static str,
    exercises: &'static str,
}

/// Fully resolved request targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoints {
    /// Authentication
    pub login: Url,
    /// Account creation
    pub register: Url,
    /// Dashboard stats, workouts and goals
    pub dashboard: Url,
    /// Progress metrics and history
    pub progress: Url,
    /// Profile collection (the user id is appended)
    pub profile: Url,
    /// Exercise catalog (the exercise id is appended for details)
    pub exercises: Url,
    /// Contact form target, when one exists
    pub contact: Option<Url>,
}

impl Endpoints {
    /// Build the endpoint table for a flavor under a base URL
    pub fn for_backend(flavor: BackendFlavor, base_url: &str) -> AppResult<Self> {
        let paths = flavor.paths();
        let catalog_base = if flavor.catalog_on_mock_host() {
            hosts::MOCK_JSON
        } else {
            base_url
        };
        Ok(Self {
            login: join(base_url, paths.login)?,
            register: join(base_url, paths.register)?,
            dashboard: join(base_url, paths.dashboard)?,
            progress: join(base_url, paths.progress)?,
            profile: join(base_url, paths.profile)?,
            exercises: join(catalog_base, paths.exercises)?,
            contact: None,
        })
    }

    /// Profile URL for one user
    pub fn profile_for(&self, user_id: &str) -> AppResult<Url> {
        with_segment(&self.profile, user_id)
    }

    /// Detail URL for one exercise
    pub fn exercise_for(&self, exercise_id: &str) -> AppResult<Url> {
        with_segment(&self.exercises, exercise_id)
    }
}

fn join(base_url: &str, path: &str) -> AppResult<Url> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), path);
    Url::parse(&raw).map_err(|e| AppError::config(format!("Invalid endpoint URL '{raw}': {e}")))
}

fn with_segment(url: &Url, segment: &str) -> AppResult<Url> {
    if segment.trim().is_empty() {
        return Err(AppError::invalid_input("Identifier must not be empty"));
    }
    let mut target = url.clone();
    target
        .path_segments_mut()
        .map_err(|()| AppError::config(format!("Endpoint '{url}' cannot take a path segment")))?
        .pop_if_empty()
        .push(segment);
    Ok(target)
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend flavor
    pub backend: BackendFlavor,
    /// Base URL every endpoint is derived from
    pub base_url: String,
    /// Request targets
    pub endpoints: Endpoints,
    /// Total request timeout
    pub request_timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Where the session is persisted
    pub session_path: PathBuf,
    /// Strip diagnostic text before JSON bodies
    pub strip_diagnostic_prefix: bool,
    /// Deployment environment
    pub environment: Environment,
}

impl ClientConfig {
    /// Configuration for a backend flavor rooted at `base_url`, with defaults elsewhere
    pub fn for_backend(backend: BackendFlavor, base_url: &str) -> AppResult<Self> {
        Ok(Self {
            backend,
            base_url: base_url.trim_end_matches('/').to_owned(),
            endpoints: Endpoints::for_backend(backend, base_url)?,
            request_timeout: Duration::from_secs(limits::DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(limits::DEFAULT_CONNECT_TIMEOUT_SECS),
            session_path: default_session_path(),
            strip_diagnostic_prefix: backend.emits_diagnostics(),
            environment: Environment::Development,
        })
    }

    /// Set the contact form target
    pub fn with_contact_url(mut self, contact_url: &str) -> AppResult<Self> {
        let url = Url::parse(contact_url)
            .map_err(|e| AppError::config(format!("Invalid contact URL '{contact_url}': {e}")))?;
        self.endpoints.contact = Some(url);
        Ok(self)
    }

    /// Set the exercise catalog target
    pub fn with_exercises_url(mut self, exercises_url: &str) -> AppResult<Self> {
        self.endpoints.exercises = Url::parse(exercises_url).map_err(|e| {
            AppError::config(format!("Invalid exercises URL '{exercises_url}': {e}"))
        })?;
        Ok(self)
    }

    /// Load configuration from environment variables and defaults
    pub fn from_env() -> AppResult<Self> {
        Self::load_env().map_err(|e| AppError::config(format!("{e:#}")))
    }

    /// Load configuration, overriding the backend and base URL when given
    pub fn from_env_with(
        backend: Option<BackendFlavor>,
        base_url: Option<&str>,
    ) -> AppResult<Self> {
        let mut config = Self::from_env()?;
        if backend.is_none() && base_url.is_none() {
            return Ok(config);
        }
        let flavor = backend.unwrap_or(config.backend);
        let base = base_url.map_or_else(
            || {
                if backend.is_some() {
                    flavor.default_host().to_owned()
                } else {
                    config.base_url.clone()
                }
            },
            str::to_owned,
        );
        let contact = config.endpoints.contact.take();
        let exercises = env::var(env_config::EXERCISES_URL)
            .is_ok()
            .then(|| config.endpoints.exercises.clone());
        config.backend = flavor;
        config.endpoints = Endpoints::for_backend(flavor, &base)?;
        config.endpoints.contact = contact;
        if let Some(exercises) = exercises {
            config.endpoints.exercises = exercises;
        }
        config.base_url = base.trim_end_matches('/').to_owned();
        // An explicit toggle outlives the flavor default
        if env::var(env_config::STRIP_DIAGNOSTICS).is_err() {
            config.strip_diagnostic_prefix = flavor.emits_diagnostics();
        }
        Ok(config)
    }

    fn load_env() -> Result<Self> {
        let backend = env::var(env_config::BACKEND)
            .map(|v| BackendFlavor::from_str_or_default(&v))
            .unwrap_or_default();
        let base_url =
            env::var(env_config::API_URL).unwrap_or_else(|_| backend.default_host().to_owned());

        let mut config = Self::for_backend(backend, &base_url)
            .map_err(|e| anyhow::anyhow!(e.message))
            .with_context(|| format!("{} is not a valid base URL", env_config::API_URL))?;

        if let Ok(contact) = env::var(env_config::CONTACT_URL) {
            config = config
                .with_contact_url(&contact)
                .map_err(|e| anyhow::anyhow!(e.message))?;
        }

        if let Ok(exercises) = env::var(env_config::EXERCISES_URL) {
            config = config
                .with_exercises_url(&exercises)
                .map_err(|e| anyhow::anyhow!(e.message))?;
        }

        if let Ok(raw) = env::var(env_config::TIMEOUT_SECS) {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("{} must be a valid number", env_config::TIMEOUT_SECS))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Ok(raw) = env::var(env_config::CONNECT_TIMEOUT_SECS) {
            let secs: u64 = raw.parse().with_context(|| {
                format!("{} must be a valid number", env_config::CONNECT_TIMEOUT_SECS)
            })?;
            config.connect_timeout = Duration::from_secs(secs);
        }

        if let Ok(path) = env::var(env_config::SESSION_FILE) {
            config.session_path = PathBuf::from(path);
        }

        if let Ok(raw) = env::var(env_config::STRIP_DIAGNOSTICS) {
            config.strip_diagnostic_prefix = raw
                .parse()
                .with_context(|| format!("{} must be true or false", env_config::STRIP_DIAGNOSTICS))?;
        }

        config.environment = env::var(env_config::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();

        config.validate()?;
        debug!(backend = %config.backend, base_url = %config.base_url, "Client configuration loaded");
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.request_timeout.is_zero() {
            anyhow::bail!("Request timeout must be greater than 0");
        }
        if self.connect_timeout.is_zero() {
            anyhow::bail!("Connect timeout must be greater than 0");
        }
        Ok(())
    }
}

fn default_session_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(".pierre-fitness-session.json"),
        |dir| dir.join("pierre-fitness").join("session.json"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_flavor_parsing() {
        assert_eq!(BackendFlavor::from_str_or_default("PHP"), BackendFlavor::Php);
        assert_eq!(BackendFlavor::from_str_or_default("mock"), BackendFlavor::Mock);
        assert_eq!(BackendFlavor::from_str_or_default("dummyjson"), BackendFlavor::Mock);
        assert_eq!(BackendFlavor::from_str_or_default("local"), BackendFlavor::Local);
        assert_eq!(BackendFlavor::from_str_or_default("nope"), BackendFlavor::Php);
    }

    #[test]
    fn test_php_endpoints_under_base() {
        let endpoints = Endpoints::for_backend(BackendFlavor::Php, "http://api.test:8080/").unwrap();
        assert_eq!(endpoints.login.as_str(), "http://api.test:8080/login.php");
        assert_eq!(endpoints.dashboard.as_str(), "http://api.test:8080/dashboard.php");
        assert!(endpoints.contact.is_none());
    }

    #[test]
    fn test_php_catalog_stays_on_public_collection() {
        let endpoints = Endpoints::for_backend(BackendFlavor::Php, "http://api.test:8080").unwrap();
        assert_eq!(
            endpoints.exercises.as_str(),
            "https://dummyjson.com/c/c88f-ea45-4f41-9f71"
        );
        assert_eq!(
            endpoints.exercise_for("4").unwrap().as_str(),
            "https://dummyjson.com/c/c88f-ea45-4f41-9f71/4"
        );

        let local = Endpoints::for_backend(BackendFlavor::Local, "http://dev.test:3001").unwrap();
        assert_eq!(local.exercises.as_str(), "http://dev.test:3001/exercises");
    }

    #[test]
    fn test_exercises_url_override() {
        let config = ClientConfig::for_backend(BackendFlavor::Php, hosts::PHP_API)
            .unwrap()
            .with_exercises_url("http://catalog.test/list")
            .unwrap();
        assert_eq!(config.endpoints.exercises.as_str(), "http://catalog.test/list");
        assert_eq!(config.endpoints.login.as_str(), "http://localhost:8080/login.php");

        let error = ClientConfig::for_backend(BackendFlavor::Php, hosts::PHP_API)
            .unwrap()
            .with_exercises_url("not a url")
            .unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ConfigError);
    }

    #[test]
    fn test_mock_endpoints_keep_collection_paths() {
        let endpoints = Endpoints::for_backend(BackendFlavor::Mock, hosts::MOCK_JSON).unwrap();
        assert_eq!(
            endpoints.exercises.as_str(),
            "https://dummyjson.com/c/c88f-ea45-4f41-9f71"
        );
        assert_eq!(
            endpoints.exercise_for("12").unwrap().as_str(),
            "https://dummyjson.com/c/c88f-ea45-4f41-9f71/12"
        );
    }

    #[test]
    fn test_profile_segment_is_escaped() {
        let endpoints = Endpoints::for_backend(BackendFlavor::Php, "http://localhost:8080").unwrap();
        assert_eq!(
            endpoints.profile_for("a b").unwrap().as_str(),
            "http://localhost:8080/profile.php/a%20b"
        );
        assert!(endpoints.profile_for("").is_err());
    }

    #[test]
    fn test_diagnostic_stripping_defaults_to_php_only() {
        assert!(ClientConfig::for_backend(BackendFlavor::Php, hosts::PHP_API)
            .unwrap()
            .strip_diagnostic_prefix);
        assert!(!ClientConfig::for_backend(BackendFlavor::Local, hosts::LOCAL_SERVICE)
            .unwrap()
            .strip_diagnostic_prefix);
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let error = Endpoints::for_backend(BackendFlavor::Local, "not a url").unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ConfigError);
    }
}
