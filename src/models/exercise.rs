// ABOUTME: Exercise catalog entry with cover image and rating helpers
// ABOUTME: Tolerates the loose shapes the mock catalog serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient_number, DisplayValue};
use crate::errors::AppResult;
use crate::http::decode;

/// Placeholder shown when an exercise has no picture
pub const FALLBACK_IMAGE: &str = "path-to-fallback-image.png";

/// Star rating
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score
    #[serde(default, deserialize_with = "lenient_number")]
    pub rate: Option<f64>,
}

/// One exercise
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exercise {
    /// Identifier used in detail paths
    pub id: DisplayValue,
    /// Exercise name
    pub title: String,
    /// Picture gallery
    pub images: Vec<String>,
    /// Single picture, used when `images` is empty
    pub image: Option<String>,
    /// Star rating
    pub rating: Option<Rating>,
    /// Difficulty level
    pub level: Option<String>,
    /// Long description
    pub description: String,
    /// Primary category
    pub category: Option<String>,
}

impl Exercise {
    /// First gallery picture, then `image`, then the placeholder
    #[must_use]
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .filter(|i| !i.is_empty())
            .or_else(|| self.image.as_deref().filter(|i| !i.is_empty()))
            .unwrap_or(FALLBACK_IMAGE)
    }

    /// Rating as text, `N/A` when missing
    #[must_use]
    pub fn rating_label(&self) -> String {
        self.rating
            .as_ref()
            .and_then(|r| r.rate)
            .map_or_else(|| "N/A".to_owned(), super::format_number)
    }

    /// Level as text, `N/A` when missing
    #[must_use]
    pub fn level_label(&self) -> &str {
        self.level.as_deref().unwrap_or("N/A")
    }

    /// Identifier as a path segment
    #[must_use]
    pub fn id_segment(&self) -> String {
        self.id.to_string()
    }

    /// Decode the catalog array
    pub fn list_from_payload(body: Value) -> AppResult<Vec<Self>> {
        match body {
            Value::Null => Ok(Vec::new()),
            other => decode::decode(other, "exercise list"),
        }
    }

    /// Decode one exercise; `null` means not found
    pub fn detail_from_payload(body: Value) -> AppResult<Option<Self>> {
        match body {
            Value::Null => Ok(None),
            other => decode::decode(other, "exercise").map(Some),
        }
    }
}
