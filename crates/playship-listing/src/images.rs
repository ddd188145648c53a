//! Image kinds, directory conventions and pixel-size constraints.
//!
//! Each image kind maps to one subdirectory of a locale directory. Fixed-size
//! graphics (icon, feature graphic, promo graphic, TV banner) allow exactly
//! one image; screenshot kinds allow up to [`MAX_SCREENSHOTS`] images bounded
//! to 320..3840 pixels per side.

use serde::{Deserialize, Serialize};

/// Maximum number of screenshots per screenshot kind.
pub const MAX_SCREENSHOTS: usize = 8;

/// Minimum side length for screenshots, in pixels.
pub const SCREENSHOT_MIN_DIM: u32 = 320;

/// Maximum side length for screenshots, in pixels.
pub const SCREENSHOT_MAX_DIM: u32 = 3840;

/// Image file extensions accepted inside an image directory.
///
/// Matched case-sensitively; anything else is skipped.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg"];

/// Pixel-dimension bounds for an image kind.
///
/// When `min == max` on both axes the kind requires an exact size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSizeConstraint {
    /// Minimum width in pixels.
    pub min_width: u32,
    /// Minimum height in pixels.
    pub min_height: u32,
    /// Maximum width in pixels.
    pub max_width: u32,
    /// Maximum height in pixels.
    pub max_height: u32,
}

impl ImageSizeConstraint {
    /// An exact-size requirement.
    pub const fn fixed(width: u32, height: u32) -> Self {
        Self {
            min_width: width,
            min_height: height,
            max_width: width,
            max_height: height,
        }
    }

    /// A bounded-range requirement.
    pub const fn bounded(min_width: u32, min_height: u32, max_width: u32, max_height: u32) -> Self {
        Self {
            min_width,
            min_height,
            max_width,
            max_height,
        }
    }

    /// Returns `true` if the constraint requires one exact size.
    pub fn is_fixed(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Returns `true` if the given dimensions satisfy the constraint.
    pub fn contains(&self, width: u32, height: u32) -> bool {
        width >= self.min_width
            && width <= self.max_width
            && height >= self.min_height
            && height <= self.max_height
    }
}

impl std::fmt::Display for ImageSizeConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_fixed() {
            write!(f, "exactly {}x{}", self.min_width, self.min_height)
        } else {
            write!(
                f,
                "{}x{} to {}x{}",
                self.min_width, self.min_height, self.max_width, self.max_height
            )
        }
    }
}

/// Shared bounds for all screenshot kinds.
const SCREENSHOT_SIZE: ImageSizeConstraint = ImageSizeConstraint::bounded(
    SCREENSHOT_MIN_DIM,
    SCREENSHOT_MIN_DIM,
    SCREENSHOT_MAX_DIM,
    SCREENSHOT_MAX_DIM,
);

/// A store listing image kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    /// App icon, exactly 512x512.
    Icon,
    /// Feature graphic, exactly 1024x500.
    FeatureGraphic,
    /// Phone screenshots.
    PhoneScreenshots,
    /// 7" tablet screenshots.
    SevenInchScreenshots,
    /// 10" tablet screenshots.
    TenInchScreenshots,
    /// Promo graphic, exactly 180x120.
    PromoGraphic,
    /// TV banner, exactly 1280x720.
    TvBanner,
    /// TV screenshots.
    TvScreenshots,
    /// Wear OS screenshots.
    WearScreenshots,
}

impl ImageKind {
    /// All image kinds, in listing order.
    pub const ALL: &'static [ImageKind] = &[
        ImageKind::Icon,
        ImageKind::FeatureGraphic,
        ImageKind::PhoneScreenshots,
        ImageKind::SevenInchScreenshots,
        ImageKind::TenInchScreenshots,
        ImageKind::PromoGraphic,
        ImageKind::TvBanner,
        ImageKind::TvScreenshots,
        ImageKind::WearScreenshots,
    ];

    /// Subdirectory name for this kind under a locale directory.
    pub fn dir_name(self) -> &'static str {
        match self {
            ImageKind::Icon => "icon",
            ImageKind::FeatureGraphic => "featureGraphic",
            ImageKind::PhoneScreenshots => "phoneScreenshots",
            ImageKind::SevenInchScreenshots => "sevenInchScreenshots",
            ImageKind::TenInchScreenshots => "tenInchScreenshots",
            ImageKind::PromoGraphic => "promoGraphic",
            ImageKind::TvBanner => "tvBanner",
            ImageKind::TvScreenshots => "tvScreenshots",
            ImageKind::WearScreenshots => "wearScreenshots",
        }
    }

    /// Pixel-dimension bounds for this kind.
    pub fn constraint(self) -> ImageSizeConstraint {
        match self {
            ImageKind::Icon => ImageSizeConstraint::fixed(512, 512),
            ImageKind::FeatureGraphic => ImageSizeConstraint::fixed(1024, 500),
            ImageKind::PromoGraphic => ImageSizeConstraint::fixed(180, 120),
            ImageKind::TvBanner => ImageSizeConstraint::fixed(1280, 720),
            ImageKind::PhoneScreenshots
            | ImageKind::SevenInchScreenshots
            | ImageKind::TenInchScreenshots
            | ImageKind::TvScreenshots
            | ImageKind::WearScreenshots => SCREENSHOT_SIZE,
        }
    }

    /// Maximum number of images for this kind.
    pub fn max_count(self) -> usize {
        match self {
            ImageKind::Icon
            | ImageKind::FeatureGraphic
            | ImageKind::PromoGraphic
            | ImageKind::TvBanner => 1,
            _ => MAX_SCREENSHOTS,
        }
    }
}

impl std::fmt::Display for ImageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Returns `true` if the file name carries an accepted image extension.
pub(crate) fn has_image_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && IMAGE_EXTENSIONS.contains(&ext),
        None => false,
    }
}
