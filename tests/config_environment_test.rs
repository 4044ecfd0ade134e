// ABOUTME: Tests for environment-driven client configuration
// ABOUTME: Covers backend selection, base URL overrides, timeouts and the contact endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use pierre_fitness_client::{
    config::{BackendFlavor, ClientConfig},
    constants::{env_config, hosts},
    errors::ErrorCode,
};
use serial_test::serial;

const ALL_VARS: [&str; 8] = [
    env_config::BACKEND,
    env_config::API_URL,
    env_config::CONTACT_URL,
    env_config::EXERCISES_URL,
    env_config::TIMEOUT_SECS,
    env_config::CONNECT_TIMEOUT_SECS,
    env_config::SESSION_FILE,
    env_config::STRIP_DIAGNOSTICS,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_to_php_backend() {
    clear_env();
    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config.backend, BackendFlavor::Php);
    assert_eq!(config.base_url, hosts::PHP_API);
    assert_eq!(config.endpoints.login.path(), "/login.php");
    assert_eq!(
        config.endpoints.exercises.as_str(),
        "https://dummyjson.com/c/c88f-ea45-4f41-9f71"
    );
    assert!(config.endpoints.contact.is_none());
    assert!(config.strip_diagnostic_prefix);
}

#[test]
#[serial]
fn test_one_base_url_moves_every_endpoint() {
    clear_env();
    env::set_var(env_config::BACKEND, "local");
    env::set_var(env_config::API_URL, "http://10.0.0.5:4000/");
    let config = ClientConfig::from_env().unwrap();

    for url in [
        &config.endpoints.login,
        &config.endpoints.register,
        &config.endpoints.dashboard,
        &config.endpoints.progress,
        &config.endpoints.profile,
        &config.endpoints.exercises,
    ] {
        assert_eq!(url.host_str(), Some("10.0.0.5"));
        assert_eq!(url.port(), Some(4000));
    }
    assert!(!config.strip_diagnostic_prefix);
    clear_env();
}

#[test]
#[serial]
fn test_timeouts_and_contact_from_env() {
    clear_env();
    env::set_var(env_config::TIMEOUT_SECS, "5");
    env::set_var(env_config::CONNECT_TIMEOUT_SECS, "2");
    env::set_var(env_config::CONTACT_URL, "http://mail.test/send");
    env::set_var(env_config::STRIP_DIAGNOSTICS, "false");
    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config.request_timeout, Duration::from_secs(5));
    assert_eq!(config.connect_timeout, Duration::from_secs(2));
    assert_eq!(
        config.endpoints.contact.as_ref().map(url::Url::as_str),
        Some("http://mail.test/send")
    );
    assert!(!config.strip_diagnostic_prefix);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_values_are_config_errors() {
    clear_env();
    env::set_var(env_config::TIMEOUT_SECS, "soon");
    assert_eq!(ClientConfig::from_env().unwrap_err().code, ErrorCode::ConfigError);

    env::set_var(env_config::TIMEOUT_SECS, "0");
    assert_eq!(ClientConfig::from_env().unwrap_err().code, ErrorCode::ConfigError);

    clear_env();
    env::set_var(env_config::API_URL, "not a url");
    assert_eq!(ClientConfig::from_env().unwrap_err().code, ErrorCode::ConfigError);
    clear_env();
}

#[test]
#[serial]
fn test_command_line_overrides_keep_contact() {
    clear_env();
    env::set_var(env_config::API_URL, "http://php.test");
    env::set_var(env_config::CONTACT_URL, "http://mail.test/send");

    let config = ClientConfig::from_env_with(Some(BackendFlavor::Mock), None).unwrap();
    assert_eq!(config.backend, BackendFlavor::Mock);
    assert_eq!(config.base_url, hosts::MOCK_JSON);
    assert!(config.endpoints.contact.is_some());

    let config = ClientConfig::from_env_with(None, Some("http://other.test:9000")).unwrap();
    assert_eq!(config.backend, BackendFlavor::Php);
    assert_eq!(config.endpoints.dashboard.as_str(), "http://other.test:9000/dashboard.php");
    clear_env();
}

#[test]
#[serial]
fn test_strip_toggle_survives_command_line_overrides() {
    clear_env();
    env::set_var(env_config::STRIP_DIAGNOSTICS, "false");

    let config = ClientConfig::from_env_with(None, Some("http://localhost:8080")).unwrap();
    assert_eq!(config.backend, BackendFlavor::Php);
    assert!(!config.strip_diagnostic_prefix);

    env::set_var(env_config::STRIP_DIAGNOSTICS, "true");
    let config = ClientConfig::from_env_with(Some(BackendFlavor::Local), None).unwrap();
    assert!(config.strip_diagnostic_prefix);

    env::remove_var(env_config::STRIP_DIAGNOSTICS);
    let config = ClientConfig::from_env_with(Some(BackendFlavor::Local), None).unwrap();
    assert!(!config.strip_diagnostic_prefix);
    clear_env();
}

#[test]
#[serial]
fn test_exercises_url_from_env_survives_overrides() {
    clear_env();
    env::set_var(env_config::EXERCISES_URL, "http://catalog.test/items");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.endpoints.exercises.as_str(), "http://catalog.test/items");

    let config = ClientConfig::from_env_with(Some(BackendFlavor::Local), None).unwrap();
    assert_eq!(config.endpoints.exercises.as_str(), "http://catalog.test/items");
    assert_eq!(config.endpoints.login.as_str(), "http://localhost:3001/login");

    env::set_var(env_config::EXERCISES_URL, "catalog");
    assert_eq!(ClientConfig::from_env().unwrap_err().code, ErrorCode::ConfigError);
    clear_env();
}
