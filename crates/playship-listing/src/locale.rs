//! Play Store locale codes.
//!
//! Locale directory names follow the store's own convention: a two-letter
//! lowercase language code, optionally suffixed with `-` and either a
//! two-letter uppercase region or the literal `419` (Latin America). The
//! bare literal `fil` (Filipino) is the one three-letter code the store
//! accepts.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ListingError;

// '419' and 'fil' are special cases in the Play Store.
const LOCALE_PATTERN: &str = r"^(fil|[a-z]{2}(-([A-Z]{2}|419))?)$";

fn locale_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LOCALE_PATTERN).expect("locale pattern is valid"))
}

/// Returns `true` if `name` is a valid Play Store locale code.
pub fn validate_locale(name: &str) -> bool {
    locale_regex().is_match(name)
}

/// A validated Play Store locale code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parses and validates a locale code.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidLocale`] if the code does not match
    /// the store's locale pattern.
    pub fn parse(code: &str) -> Result<Self, ListingError> {
        if validate_locale(code) {
            Ok(Self(code.to_string()))
        } else {
            Err(ListingError::InvalidLocale {
                name: code.to_string(),
            })
        }
    }

    /// Returns the locale code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Locale {
    type Error = ListingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locale::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
