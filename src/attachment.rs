// ABOUTME: Image attachment validation and inline data-URL encoding for profile pictures
// ABOUTME: Rejects non-image types and files over the size limit before any encoding happens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::{debug, info};

use crate::constants::{limits, messages};
use crate::errors::{AppError, AppResult};

const OCTET_STREAM: &str = "application/octet-stream";

/// A file picked by the user, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as picked
    pub name: String,
    /// Declared content type
    pub content_type: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// In-memory file with an explicit content type
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, declaring its type from the extension
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            content_type: content_type_for(path).to_owned(),
            name,
            bytes,
        })
    }
}

/// MIME type declared for a path's extension
#[must_use]
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => OCTET_STREAM,
    }
}

/// Validated image ready to be sent inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// `data:<type>;base64,<payload>`
    pub data_url: String,
    /// Declared content type
    pub content_type: String,
    /// Size of the original file in bytes
    pub size: usize,
}

impl EncodedImage {
    /// Preview source; the data URL itself
    #[must_use]
    pub fn preview(&self) -> &str {
        &self.data_url
    }
}

/// Messages shown when a picked file is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRejections {
    /// Declared type is not `image/*`
    pub wrong_type: &'static str,
    /// File is over [`limits::MAX_IMAGE_BYTES`]
    pub too_large: &'static str,
}

impl ImageRejections {
    /// Wording used by the registration form
    pub const REGISTER: Self = Self {
        wrong_type: messages::IMAGE_WRONG_TYPE,
        too_large: messages::IMAGE_TOO_LARGE,
    };

    /// Wording used by the profile editor
    pub const PROFILE: Self = Self {
        wrong_type: messages::PROFILE_IMAGE_WRONG_TYPE,
        too_large: messages::PROFILE_IMAGE_TOO_LARGE,
    };
}

/// Image validation and encoding
pub struct ImageAttachment;

impl ImageAttachment {
    /// Check type and size without encoding
    pub fn check(file: &SelectedFile, rejections: ImageRejections) -> AppResult<()> {
        if !file.content_type.starts_with("image/") {
            debug!(name = %file.name, content_type = %file.content_type, "Rejected non-image attachment");
            return Err(AppError::invalid_input(rejections.wrong_type));
        }
        if file.bytes.len() > limits::MAX_IMAGE_BYTES {
            debug!(name = %file.name, size = file.bytes.len(), "Rejected oversized attachment");
            return Err(AppError::invalid_input(rejections.too_large));
        }
        Ok(())
    }

    /// Validate and encode as a data URL on a blocking thread
    pub async fn attach(file: SelectedFile, rejections: ImageRejections) -> AppResult<EncodedImage> {
        Self::check(&file, rejections)?;
        let SelectedFile {
            name,
            content_type,
            bytes,
        } = file;
        let size = bytes.len();

        let payload = tokio::task::spawn_blocking(move || STANDARD.encode(bytes))
            .await
            .map_err(|e| AppError::internal(format!("Image encoding task failed: {e}")))?;

        info!(name = %name, size, "Image attached");
        Ok(EncodedImage {
            data_url: format!("data:{content_type};base64,{payload}"),
            content_type,
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    const MIB: usize = 1024 * 1024;

    #[tokio::test]
    async fn test_oversized_image_is_rejected() {
        let file = SelectedFile::new("big.png", "image/png", vec![0; 6 * MIB]);
        let error = ImageAttachment::attach(file, ImageRejections::REGISTER)
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.reason(), messages::IMAGE_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_non_image_is_rejected() {
        let file = SelectedFile::new("notes.txt", "text/plain", b"hello".to_vec());
        let error = ImageAttachment::attach(file, ImageRejections::REGISTER)
            .await
            .unwrap_err();
        assert_eq!(error.reason(), messages::IMAGE_WRONG_TYPE);
    }

    #[test]
    fn test_rejection_wording_follows_caller() {
        let text = SelectedFile::new("notes.txt", "text/plain", b"hi".to_vec());
        let big = SelectedFile::new("big.gif", "image/gif", vec![0; 6 * MIB]);

        let error = ImageAttachment::check(&text, ImageRejections::PROFILE).unwrap_err();
        assert_eq!(error.reason(), "Please select an image file.");
        let error = ImageAttachment::check(&big, ImageRejections::PROFILE).unwrap_err();
        assert_eq!(error.reason(), "Image size must be less than 5MB.");

        let error = ImageAttachment::check(&big, ImageRejections::REGISTER).unwrap_err();
        assert_eq!(error.reason(), messages::IMAGE_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_image_under_limit_is_encoded() {
        let file = SelectedFile::new("me.png", "image/png", vec![7; 4 * MIB]);
        let image = ImageAttachment::attach(file, ImageRejections::PROFILE)
            .await
            .unwrap();
        assert!(image.preview().starts_with("data:image/png;base64,"));
        assert!(image.preview().len() > "data:image/png;base64,".len());
        assert_eq!(image.size, 4 * MIB);
    }

    #[test]
    fn test_exact_limit_is_accepted() {
        let file = SelectedFile::new("edge.jpg", "image/jpeg", vec![0; limits::MAX_IMAGE_BYTES]);
        assert!(ImageAttachment::check(&file, ImageRejections::REGISTER).is_ok());
    }

    #[tokio::test]
    async fn test_from_path_declares_type_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("photo.JPG");
        tokio::fs::write(&photo, [1_u8, 2, 3]).await.unwrap();
        let file = SelectedFile::from_path(&photo).await.unwrap();
        assert_eq!(file.content_type, "image/jpeg");
        assert_eq!(file.name, "photo.JPG");

        assert_eq!(content_type_for(Path::new("a.pdf")), OCTET_STREAM);
        assert_eq!(content_type_for(Path::new("noext")), OCTET_STREAM);
    }
}
