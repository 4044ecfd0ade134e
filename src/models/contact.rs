// ABOUTME: Contact form message payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Message submitted from the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender's first name
    pub fname: String,
    /// Sender's last name
    pub lname: String,
    /// Reply address
    pub email: String,
    /// Message body
    pub message: String,
}
