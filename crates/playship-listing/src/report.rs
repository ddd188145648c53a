//! Aggregating listing checks.
//!
//! [`ListingResolver::resolve`](crate::ListingResolver::resolve) stops at the
//! first violation, which is what a publish run wants. Interactive checking
//! wants the opposite: every problem in one pass. [`check_listing`] walks the
//! same tree and collects all of them into a [`Report`].

use tracing::debug;

use crate::fields::TextFieldKind;
use crate::images::ImageKind;
use crate::locale::Locale;
use crate::resolver::ListingResolver;
use crate::ListingError;

/// Severity of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Blocks publishing; the store would reject the asset.
    Error,
    /// Worth fixing but does not block publishing.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// One problem found while checking a listing.
#[derive(Debug, Clone)]
pub struct Issue {
    /// Severity of the issue.
    pub severity: Severity,
    /// Locale- and kind-qualified location (e.g. `de-DE/title`).
    pub field: String,
    /// Human-readable description.
    pub message: String,
    /// Optional hint for fixing the issue.
    pub suggestion: Option<String>,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.field, self.message)
    }
}

/// All issues found in one checking pass.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// The issues, in discovery order.
    pub issues: Vec<Issue>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no errors were found. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Returns `true` if nothing at all was found.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the error issues.
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
    }

    /// Returns the warning issues.
    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// Counts the error issues.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Counts the warning issues.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Records an error.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
            suggestion: None,
        });
    }

    /// Merges another report's issues into this one.
    pub fn merge(&mut self, other: Report) {
        self.issues.extend(other.issues);
    }

    /// Records a warning with a fix hint.
    pub fn add_warning(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.issues.push(Issue {
            severity: Severity::Warning,
            field: field.into(),
            message: message.into(),
            suggestion: Some(suggestion.into()),
        });
    }
}

/// Fields a publishable listing should carry for every locale.
const EXPECTED_FIELDS: &[TextFieldKind] = &[
    TextFieldKind::Title,
    TextFieldKind::ShortDescription,
    TextFieldKind::FullDescription,
];

/// Checks an entire listing tree, collecting every violation.
///
/// Unlike [`ListingResolver::resolve`], invalid locales, over-length fields
/// and bad images do not stop the scan. Missing title/short/full description
/// are warnings: the resolver treats absent fields as "not provided", but a
/// listing missing them cannot be published as-is.
pub fn check_listing(resolver: &ListingResolver) -> Report {
    let mut report = Report::new();
    let root = resolver.root();

    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            report.add_error(root.display().to_string(), format!("cannot read listing directory: {e}"));
            return report;
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(String::from))
        .filter(|n| !n.starts_with('.'))
        .collect();
    names.sort();

    for name in names {
        match Locale::parse(&name) {
            Ok(locale) => check_locale(resolver, &locale, &mut report),
            Err(e) => report.add_error(&name, e.to_string()),
        }
    }

    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "listing check finished"
    );
    report
}

/// Checks all fields and image kinds of one locale.
fn check_locale(resolver: &ListingResolver, locale: &Locale, report: &mut Report) {
    let field = |name: &str| format!("{locale}/{name}");

    for &kind in TextFieldKind::ALL {
        match resolver.resolve_text_field(locale, kind) {
            Ok(Some(_)) => {}
            Ok(None) => {
                if EXPECTED_FIELDS.contains(&kind) {
                    report.add_warning(
                        field(kind.file_name()),
                        format!("{kind} is not provided"),
                        format!("create {locale}/{kind} under the listing directory"),
                    );
                }
            }
            Err(e) => report.add_error(field(kind.file_name()), e.to_string()),
        }
    }

    for &kind in ImageKind::ALL {
        match resolver.resolve_images(locale, kind) {
            Ok(_) => {}
            Err(ListingError::TooManyImages { max, actual, .. }) => {
                report.add_error(
                    field(kind.dir_name()),
                    format!("{actual} images found, maximum is {max}"),
                );
            }
            Err(e) => report.add_error(field(kind.dir_name()), e.to_string()),
        }
    }
}
