// ABOUTME: Application constants for the Pierre fitness client
// ABOUTME: Limits, redirect delays, user-facing messages, and default backend hosts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Size and pagination limits
pub mod limits {
    /// Largest image accepted for inline attachment (5MB)
    pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

    /// Exercise cards shown per catalog page
    pub const EXERCISES_PER_PAGE: usize = 8;

    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Delays applied before navigating away from a successful form
pub mod redirects {
    /// Delay between a successful login and the dashboard (milliseconds)
    pub const LOGIN_REDIRECT_DELAY_MS: u64 = 1000;

    /// Delay between a successful registration and the login view (milliseconds)
    pub const REGISTER_REDIRECT_DELAY_MS: u64 = 1500;
}

/// Default hosts for each backend flavor
pub mod hosts {
    /// PHP API host
    pub const PHP_API: &str = "http://localhost:8080";

    /// Public mock JSON service
    pub const MOCK_JSON: &str = "https://dummyjson.com";

    /// Local development service
    pub const LOCAL_SERVICE: &str = "http://localhost:3001";
}

/// Mock JSON collection paths (hosted under `hosts::MOCK_JSON`)
pub mod mock_paths {
    /// Login collection
    pub const LOGIN: &str = "/c/1445-2c80-484e-9835";

    /// Dashboard collection
    pub const DASHBOARD: &str = "/c/613b-73e3-41f2-b0fa";

    /// Exercise catalog collection
    pub const EXERCISES: &str = "/c/c88f-ea45-4f41-9f71";
}

/// Environment variable names read by the client configuration
pub mod env_config {
    /// Backend flavor (`php`, `mock`, `local`)
    pub const BACKEND: &str = "PIERRE_FITNESS_BACKEND";
    /// Base URL override applied to every endpoint
    pub const API_URL: &str = "PIERRE_FITNESS_API_URL";
    /// Contact form endpoint
    pub const CONTACT_URL: &str = "PIERRE_FITNESS_CONTACT_URL";
    /// Exercise catalog endpoint
    pub const EXERCISES_URL: &str = "PIERRE_FITNESS_EXERCISES_URL";
    /// Request timeout override
    pub const TIMEOUT_SECS: &str = "PIERRE_FITNESS_TIMEOUT_SECS";
    /// Connect timeout override
    pub const CONNECT_TIMEOUT_SECS: &str = "PIERRE_FITNESS_CONNECT_TIMEOUT_SECS";
    /// Session file location
    pub const SESSION_FILE: &str = "PIERRE_FITNESS_SESSION_FILE";
    /// Toggle for stripping diagnostic text ahead of JSON bodies
    pub const STRIP_DIAGNOSTICS: &str = "PIERRE_FITNESS_STRIP_DIAGNOSTICS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service identification
pub mod service_names {
    /// Name used in logs and the HTTP user agent
    pub const PIERRE_FITNESS_CLIENT: &str = "pierre-fitness-client";
}

/// User-facing messages shown in views
pub mod messages {
    /// Fallback when a failure carries no reason
    pub const GENERIC_FAILURE: &str = "Something went wrong.";
    /// Transport failure (no response received)
    pub const NETWORK_UNAVAILABLE: &str = "Cannot connect to server. Please try again later.";
    /// An authenticated view was mounted without a session
    pub const AUTH_REQUIRED: &str = "Authentication required. Please log in.";

    /// Login form is missing a field
    pub const LOGIN_MISSING_FIELDS: &str = "Please provide both email and password.";
    /// Generic login failure
    pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
    /// Successful login
    pub const LOGIN_SUCCESS: &str = "Login successful! Redirecting to dashboard...";
    /// Login response without a token
    pub const TOKEN_MISSING: &str = "Authentication token missing in response";
    /// Login response body could not be parsed
    pub const INVALID_RESPONSE_FORMAT: &str = "Invalid server response format";

    /// Registration field errors returned by the server
    pub const REGISTER_FIX_ERRORS: &str = "Please fix the form errors";
    /// Registration rejected without a message
    pub const REGISTER_FAILED: &str = "Registration failed";
    /// Registration request failed
    pub const REGISTER_REQUEST_FAILED: &str = "Registration failed. Please try again.";
    /// Registration form is missing a required field
    pub const REGISTER_MISSING_FIELDS: &str = "Please fill in all required fields.";
    /// Successful registration
    pub const REGISTER_SUCCESS: &str = "Registration successful! Redirecting to login...";

    /// Dashboard request failed
    pub const DASHBOARD_FAILED: &str = "Failed to fetch dashboard data";
    /// Progress request failed
    pub const PROGRESS_FAILED: &str = "Failed to fetch progress data";
    /// Profile request failed
    pub const PROFILE_LOAD_FAILED: &str = "Failed to load profile data.";
    /// Profile update failed
    pub const PROFILE_UPDATE_FAILED: &str = "Failed to update profile.";
    /// Profile form validation failed
    pub const PROFILE_INVALID_FIELDS: &str = "Please fill in all fields with valid values.";
    /// Exercise catalog came back empty
    pub const EXERCISES_EMPTY: &str = "No products available";
    /// Exercise catalog request failed
    pub const EXERCISES_FAILED: &str = "Failed to fetch exercises";

    /// Contact form is missing a field
    pub const CONTACT_MISSING_FIELDS: &str = "Please fill in all fields.";
    /// Contact message sent
    pub const CONTACT_SUCCESS: &str = "Your message was successfully sent!";
    /// Contact message failed
    pub const CONTACT_FAILED: &str = "Failed to send message. Please try again.";
    /// No contact endpoint configured
    pub const CONTACT_NOT_CONFIGURED: &str = "Contact endpoint is not configured";

    /// Attachment is not an image
    pub const IMAGE_WRONG_TYPE: &str = "Only image files are allowed";
    /// Attachment is over the size ceiling
    pub const IMAGE_TOO_LARGE: &str = "Image must be smaller than 5MB";
    /// Profile picture is not an image
    pub const PROFILE_IMAGE_WRONG_TYPE: &str = "Please select an image file.";
    /// Profile picture is over the size ceiling
    pub const PROFILE_IMAGE_TOO_LARGE: &str = "Image size must be less than 5MB.";
}
