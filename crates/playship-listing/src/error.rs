//! Error types for listing resolution.

use std::path::PathBuf;

use thiserror::Error;

use crate::images::ImageSizeConstraint;

/// Errors that can occur while resolving a listing directory.
#[derive(Debug, Error)]
pub enum ListingError {
    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A text field exceeds its character limit.
    #[error("{}: field is {actual} characters, limit is {limit}", .path.display())]
    FieldTooLong {
        /// File holding the over-length field.
        path: PathBuf,
        /// Maximum allowed character count.
        limit: usize,
        /// Actual character count.
        actual: usize,
    },

    /// An image directory holds more images than the kind allows.
    #[error("{}: {actual} images found, maximum is {max}", .dir.display())]
    TooManyImages {
        /// The image kind's directory.
        dir: PathBuf,
        /// Maximum allowed image count.
        max: usize,
        /// Actual image count.
        actual: usize,
    },

    /// An image's pixel dimensions fall outside the kind's bounds.
    #[error("{}: {width}x{height} is outside the allowed range {constraint}", .path.display())]
    ImageOutOfBounds {
        /// Path to the offending image.
        path: PathBuf,
        /// Measured width in pixels.
        width: u32,
        /// Measured height in pixels.
        height: u32,
        /// The bounds the image was checked against.
        constraint: ImageSizeConstraint,
    },

    /// An image file's header could not be decoded.
    #[error("{}: cannot read image dimensions: {reason}", .path.display())]
    UnreadableImage {
        /// Path to the unreadable file.
        path: PathBuf,
        /// Decoder error text.
        reason: String,
    },

    /// A directory name under the listing root is not a valid locale code.
    #[error("'{name}' is not a valid Play Store locale code")]
    InvalidLocale {
        /// The rejected directory name.
        name: String,
    },

    /// A required subdirectory could not be created.
    #[error("failed to create {}: {source}", .path.display())]
    FolderCreationFailed {
        /// The directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A release track name outside the supported set.
    #[error("'{name}' is not a release track (expected alpha, beta, rollout or production)")]
    InvalidTrack {
        /// The rejected track name.
        name: String,
    },
}
