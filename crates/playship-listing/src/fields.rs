//! Store listing text fields and their file-naming convention.
//!
//! Each field is stored as a plain UTF-8 file directly under the locale
//! directory, named by [`TextFieldKind::file_name`]. Character limits match
//! the Play Console's; fields without a limit accept arbitrary length.

use serde::{Deserialize, Serialize};

/// Character limits for Play Store listing text fields.
pub mod limits {
    /// Maximum characters for the app title.
    pub const TITLE_MAX: usize = 50;
    /// Maximum characters for the short description.
    pub const SHORT_DESCRIPTION_MAX: usize = 80;
    /// Maximum characters for the full description.
    pub const FULL_DESCRIPTION_MAX: usize = 4000;
    /// Maximum characters for release notes.
    pub const WHATS_NEW_MAX: usize = 500;
}

/// A store listing text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextFieldKind {
    /// Support contact email address.
    ContactEmail,
    /// Support contact phone number.
    ContactPhone,
    /// Support contact website URL.
    ContactWebsite,
    /// Default listing language.
    DefaultLanguage,
    /// App title (max 50 characters).
    Title,
    /// Short description (max 80 characters).
    ShortDescription,
    /// Full description (max 4000 characters).
    FullDescription,
    /// Promo video URL.
    Video,
    /// Release notes (max 500 characters).
    WhatsNew,
}

impl TextFieldKind {
    /// All text field kinds, in listing order.
    pub const ALL: &'static [TextFieldKind] = &[
        TextFieldKind::ContactEmail,
        TextFieldKind::ContactPhone,
        TextFieldKind::ContactWebsite,
        TextFieldKind::DefaultLanguage,
        TextFieldKind::Title,
        TextFieldKind::ShortDescription,
        TextFieldKind::FullDescription,
        TextFieldKind::Video,
        TextFieldKind::WhatsNew,
    ];

    /// File name for this field under a locale directory.
    pub fn file_name(self) -> &'static str {
        match self {
            TextFieldKind::ContactEmail => "contactEmail",
            TextFieldKind::ContactPhone => "contactPhone",
            TextFieldKind::ContactWebsite => "contactWebsite",
            TextFieldKind::DefaultLanguage => "defaultLanguage",
            TextFieldKind::Title => "title",
            TextFieldKind::ShortDescription => "shortdescription",
            TextFieldKind::FullDescription => "fulldescription",
            TextFieldKind::Video => "video",
            TextFieldKind::WhatsNew => "whatsnew",
        }
    }

    /// Maximum character count for this field, if the store enforces one.
    pub fn max_length(self) -> Option<usize> {
        match self {
            TextFieldKind::Title => Some(limits::TITLE_MAX),
            TextFieldKind::ShortDescription => Some(limits::SHORT_DESCRIPTION_MAX),
            TextFieldKind::FullDescription => Some(limits::FULL_DESCRIPTION_MAX),
            TextFieldKind::WhatsNew => Some(limits::WHATS_NEW_MAX),
            _ => None,
        }
    }
}

impl std::fmt::Display for TextFieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}
