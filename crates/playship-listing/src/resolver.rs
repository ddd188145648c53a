//! Listing directory resolution.
//!
//! ## Directory Structure
//!
//! ```text
//! listing/
//! └── {locale}/
//!     ├── contactEmail
//!     ├── contactPhone
//!     ├── contactWebsite
//!     ├── defaultLanguage
//!     ├── title
//!     ├── shortdescription
//!     ├── fulldescription
//!     ├── video
//!     ├── whatsnew
//!     ├── icon/
//!     ├── featureGraphic/
//!     ├── phoneScreenshots/
//!     ├── sevenInchScreenshots/
//!     ├── tenInchScreenshots/
//!     ├── promoGraphic/
//!     ├── tvBanner/
//!     ├── tvScreenshots/
//!     └── wearScreenshots/
//! ```
//!
//! Resolution is synchronous and stateless: every call scans the filesystem
//! afresh, and constraint violations surface before any upload is attempted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ListingError;
use crate::fields::TextFieldKind;
use crate::images::{has_image_extension, ImageKind};
use crate::locale::{validate_locale, Locale};
use crate::{Result, MIME_TYPE_IMAGE};

/// A resolved text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextAsset {
    /// Which field this is.
    pub kind: TextFieldKind,
    /// The field's content.
    pub value: String,
}

/// A resolved image file, ready to hand to the upload layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageAsset {
    /// Path to the image file.
    pub path: PathBuf,
    /// Measured width in pixels.
    pub width: u32,
    /// Measured height in pixels.
    pub height: u32,
    /// MIME type to upload the image under.
    pub mime_type: &'static str,
}

/// All resolved images of one kind, in filename order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSet {
    /// Which image kind this is.
    pub kind: ImageKind,
    /// The images, sorted by file name.
    pub images: Vec<ImageAsset>,
}

/// Everything publishable for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleListing {
    /// The locale these assets belong to.
    pub locale: Locale,
    /// Text fields present for this locale.
    pub texts: Vec<TextAsset>,
    /// Image kinds present for this locale.
    pub images: Vec<ImageSet>,
}

/// A fully resolved, validated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    /// Per-locale assets, sorted by locale code.
    pub locales: Vec<LocaleListing>,
}

impl Listing {
    /// Total number of publishable assets (text fields plus image files).
    pub fn asset_count(&self) -> usize {
        self.locales
            .iter()
            .map(|l| l.texts.len() + l.images.iter().map(|s| s.images.len()).sum::<usize>())
            .sum()
    }
}

/// Resolves a `listing/` directory tree into validated publishable assets.
///
/// The resolver holds only the root path; it keeps no state between calls.
#[derive(Debug, Clone)]
pub struct ListingResolver {
    /// Root listing directory, containing one subdirectory per locale.
    root: PathBuf,
}

impl ListingResolver {
    /// Creates a resolver for the given listing root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the listing root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the directory for a locale under the root.
    pub fn locale_dir(&self, locale: &Locale) -> PathBuf {
        self.root.join(locale.as_str())
    }

    /// Reads a text field from a locale directory.
    ///
    /// A missing file is not an error: the field is simply not provided.
    /// Whether a missing field is acceptable is the caller's policy.
    ///
    /// Content is returned exactly as stored, without trimming, so that a
    /// saved value always resolves back unchanged. A trailing newline added
    /// by an editor counts toward the character limit.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::FieldTooLong`] if the field has a character
    /// limit and the content exceeds it.
    pub fn resolve_text_field(
        &self,
        locale: &Locale,
        kind: TextFieldKind,
    ) -> Result<Option<String>> {
        let path = self.locale_dir(locale).join(kind.file_name());
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ListingError::Io(e)),
        };

        check_length(&path, kind, &content)?;
        debug!(field = %kind, locale = %locale, "resolved text field");
        Ok(Some(content))
    }

    /// Writes a text field into a locale directory, creating it as needed.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::FieldTooLong`] if the value exceeds the
    /// field's character limit. Limits are enforced on write as well as on
    /// read, so a listing written through this API always re-resolves.
    pub fn save_text_field(&self, locale: &Locale, kind: TextFieldKind, value: &str) -> Result<()> {
        let path = self.locale_dir(locale).join(kind.file_name());
        check_length(&path, kind, value)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, value)?;
        Ok(())
    }

    /// Resolves the images of one kind from a locale directory.
    ///
    /// Returns `Ok(None)` when the kind's subdirectory does not exist.
    /// Files without an accepted extension (`png`, `jpg`, case-sensitive)
    /// are skipped; the rest are returned sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::TooManyImages`] if more images are present
    /// than the kind allows, and [`ListingError::ImageOutOfBounds`] if any
    /// image's pixel dimensions violate the kind's constraint.
    pub fn resolve_images(&self, locale: &Locale, kind: ImageKind) -> Result<Option<Vec<ImageAsset>>> {
        let dir = self.locale_dir(locale).join(kind.dir_name());
        if !dir.is_dir() {
            return Ok(None);
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            match path.file_name().and_then(|n| n.to_str()) {
                Some(name) if has_image_extension(name) => paths.push(path),
                Some(name) => {
                    debug!(file = name, dir = %dir.display(), "skipping non-image file");
                }
                None => {
                    warn!(dir = %dir.display(), "skipping file with non-UTF-8 name");
                }
            }
        }
        paths.sort();

        if paths.len() > kind.max_count() {
            return Err(ListingError::TooManyImages {
                dir,
                max: kind.max_count(),
                actual: paths.len(),
            });
        }

        let constraint = kind.constraint();
        let mut images = Vec::with_capacity(paths.len());
        for path in paths {
            let (width, height) =
                image::image_dimensions(&path).map_err(|e| ListingError::UnreadableImage {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
            if !constraint.contains(width, height) {
                return Err(ListingError::ImageOutOfBounds {
                    path,
                    width,
                    height,
                    constraint,
                });
            }
            images.push(ImageAsset {
                path,
                width,
                height,
                mime_type: MIME_TYPE_IMAGE,
            });
        }

        debug!(kind = %kind, locale = %locale, count = images.len(), "resolved images");
        Ok(Some(images))
    }

    /// Creates (if necessary) and returns the subdirectory for an image kind.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::FolderCreationFailed`] if the filesystem
    /// refuses to create the directory.
    pub fn ensure_image_folder(&self, locale: &Locale, kind: ImageKind) -> Result<PathBuf> {
        let dir = self.locale_dir(locale).join(kind.dir_name());
        fs::create_dir_all(&dir).map_err(|source| ListingError::FolderCreationFailed {
            path: dir.clone(),
            source,
        })?;
        Ok(dir)
    }

    /// Lists the locales present under the listing root, sorted by code.
    ///
    /// Hidden directories and stray files are skipped. A visible directory
    /// whose name is not a valid locale code is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidLocale`] for the first directory name
    /// that fails the locale pattern.
    pub fn locales(&self) -> Result<Vec<Locale>> {
        let mut locales = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') {
                continue;
            }
            if !validate_locale(&name) {
                return Err(ListingError::InvalidLocale {
                    name: name.into_owned(),
                });
            }
            locales.push(Locale::parse(&name)?);
        }
        locales.sort();
        Ok(locales)
    }

    /// Resolves the complete listing: every locale, every field, every
    /// image kind.
    ///
    /// Fails on the first constraint violation so a publish run aborts
    /// before any network call would be made. Absent fields and absent
    /// image kinds are not violations.
    pub fn resolve(&self) -> Result<Listing> {
        let mut locales = Vec::new();
        for locale in self.locales()? {
            locales.push(self.resolve_locale(&locale)?);
        }
        Ok(Listing { locales })
    }

    /// Resolves all assets for one locale.
    pub fn resolve_locale(&self, locale: &Locale) -> Result<LocaleListing> {
        let mut texts = Vec::new();
        for &kind in TextFieldKind::ALL {
            if let Some(value) = self.resolve_text_field(locale, kind)? {
                texts.push(TextAsset { kind, value });
            }
        }

        let mut images = Vec::new();
        for &kind in ImageKind::ALL {
            if let Some(set) = self.resolve_images(locale, kind)? {
                images.push(ImageSet { kind, images: set });
            }
        }

        Ok(LocaleListing {
            locale: locale.clone(),
            texts,
            images,
        })
    }
}

/// Enforces a field's character limit, counting Unicode scalar values.
fn check_length(path: &Path, kind: TextFieldKind, value: &str) -> Result<()> {
    if let Some(limit) = kind.max_length() {
        let actual = value.chars().count();
        if actual > limit {
            return Err(ListingError::FieldTooLong {
                path: path.to_path_buf(),
                limit,
                actual,
            });
        }
    }
    Ok(())
}
