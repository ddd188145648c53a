//! Play Store listing resolution for playship.
//!
//! This crate turns a `listing/` directory tree on disk into a validated set
//! of publishable text fields and images, enforcing the store's structural
//! and dimensional constraints before any upload is attempted.

pub mod error;
pub mod fields;
pub mod images;
pub mod locale;
pub mod report;
pub mod resolver;
pub mod track;

pub use error::ListingError;
pub use fields::TextFieldKind;
pub use images::{ImageKind, ImageSizeConstraint, IMAGE_EXTENSIONS, MAX_SCREENSHOTS};
pub use locale::{validate_locale, Locale};
pub use report::{check_listing, Issue, Report, Severity};
pub use resolver::{ImageAsset, ImageSet, Listing, ListingResolver, LocaleListing, TextAsset};
pub use track::ReleaseTrack;

/// Result type alias for listing operations.
pub type Result<T> = std::result::Result<T, ListingError>;

/// Conventional name of the listing directory inside a project.
pub const LISTING_DIR: &str = "listing";

/// Relative path where publish artifacts are written.
pub const OUTPUT_DIR: &str = "build/outputs/play";

/// MIME type for app binary uploads.
pub const MIME_TYPE_APK: &str = "application/vnd.android.package-archive";

/// MIME type listing images are uploaded under.
pub const MIME_TYPE_IMAGE: &str = "image/*";
