//! End-to-end tests for listing resolution against a real directory tree.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use playship_listing::{
    check_listing, ImageKind, Listing, ListingError, ListingResolver, Locale, TextFieldKind,
};

fn locale(code: &str) -> Locale {
    Locale::parse(code).unwrap()
}

/// Writes a real PNG of the given size so dimension reading works.
fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    image::RgbaImage::new(width, height).save(path).unwrap();
}

fn image_dir(root: &Path, locale: &str, kind: ImageKind) -> std::path::PathBuf {
    root.join(locale).join(kind.dir_name())
}

#[test]
fn text_field_at_limit_resolves() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());
    let en = locale("en-US");

    for (kind, limit) in [
        (TextFieldKind::Title, 50),
        (TextFieldKind::ShortDescription, 80),
        (TextFieldKind::FullDescription, 4000),
        (TextFieldKind::WhatsNew, 500),
    ] {
        let value = "a".repeat(limit);
        resolver.save_text_field(&en, kind, &value).unwrap();
        let resolved = resolver.resolve_text_field(&en, kind).unwrap();
        assert_eq!(resolved.as_deref(), Some(value.as_str()));
    }
}

#[test]
fn text_field_over_limit_fails() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());
    let en = locale("en-US");

    for (kind, limit) in [
        (TextFieldKind::Title, 50),
        (TextFieldKind::ShortDescription, 80),
        (TextFieldKind::FullDescription, 4000),
        (TextFieldKind::WhatsNew, 500),
    ] {
        // Bypass save_text_field's write-side check to exercise resolve.
        let dir = tmp.path().join("en-US");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(kind.file_name()), "a".repeat(limit + 1)).unwrap();

        let err = resolver.resolve_text_field(&en, kind).unwrap_err();
        match err {
            ListingError::FieldTooLong {
                limit: l, actual, ..
            } => {
                assert_eq!(l, limit);
                assert_eq!(actual, limit + 1);
            }
            other => panic!("expected FieldTooLong, got {other}"),
        }
    }
}

#[test]
fn unbounded_fields_accept_long_content() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());
    let en = locale("en-US");
    let long = "z".repeat(100_000);

    for kind in [
        TextFieldKind::ContactEmail,
        TextFieldKind::ContactPhone,
        TextFieldKind::ContactWebsite,
        TextFieldKind::DefaultLanguage,
        TextFieldKind::Video,
    ] {
        resolver.save_text_field(&en, kind, &long).unwrap();
        let resolved = resolver.resolve_text_field(&en, kind).unwrap();
        assert_eq!(resolved.as_deref(), Some(long.as_str()));
    }
}

#[test]
fn save_then_resolve_round_trips() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());
    let de = locale("de-DE");

    let value = "Eine kurze Beschreibung mit Umlauten: äöü";
    resolver
        .save_text_field(&de, TextFieldKind::ShortDescription, value)
        .unwrap();
    let resolved = resolver
        .resolve_text_field(&de, TextFieldKind::ShortDescription)
        .unwrap();
    assert_eq!(resolved.as_deref(), Some(value));
}

#[test]
fn images_resolve_in_filename_order() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());
    let dir = image_dir(tmp.path(), "en-US", ImageKind::PhoneScreenshots);

    // Created out of order on purpose.
    write_png(&dir.join("03_settings.png"), 1080, 1920);
    write_png(&dir.join("01_home.png"), 1080, 1920);
    write_png(&dir.join("02_detail.png"), 1080, 1920);

    let images = resolver
        .resolve_images(&locale("en-US"), ImageKind::PhoneScreenshots)
        .unwrap()
        .unwrap();
    let names: Vec<_> = images
        .iter()
        .map(|i| i.path.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["01_home.png", "02_detail.png", "03_settings.png"]);
    assert!(images.iter().all(|i| i.mime_type == "image/*"));
    assert!(images.iter().all(|i| i.width == 1080 && i.height == 1920));
}

#[test]
fn unrecognized_extensions_are_skipped() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());
    let dir = image_dir(tmp.path(), "en-US", ImageKind::PhoneScreenshots);

    write_png(&dir.join("shot.png"), 640, 480);
    fs::write(dir.join("animation.gif"), b"GIF89a").unwrap();
    fs::write(dir.join("notes.txt"), "not an image").unwrap();
    // Uppercase extension does not match the case-sensitive filter.
    fs::write(dir.join("SHOUTY.PNG"), b"junk").unwrap();

    let images = resolver
        .resolve_images(&locale("en-US"), ImageKind::PhoneScreenshots)
        .unwrap()
        .unwrap();
    assert_eq!(images.len(), 1);
    assert!(images[0].path.ends_with("shot.png"));
}

#[test]
fn single_image_kind_rejects_second_image() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());
    let dir = image_dir(tmp.path(), "en-US", ImageKind::Icon);

    write_png(&dir.join("icon_a.png"), 512, 512);
    write_png(&dir.join("icon_b.png"), 512, 512);

    let err = resolver
        .resolve_images(&locale("en-US"), ImageKind::Icon)
        .unwrap_err();
    assert!(matches!(
        err,
        ListingError::TooManyImages { max: 1, actual: 2, .. }
    ));
}

#[test]
fn screenshot_kind_rejects_ninth_image() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());
    let dir = image_dir(tmp.path(), "en-US", ImageKind::TenInchScreenshots);

    for i in 0..9 {
        write_png(&dir.join(format!("shot_{i}.png")), 1600, 2560);
    }

    let err = resolver
        .resolve_images(&locale("en-US"), ImageKind::TenInchScreenshots)
        .unwrap_err();
    assert!(matches!(
        err,
        ListingError::TooManyImages { max: 8, actual: 9, .. }
    ));
}

#[test]
fn icon_dimensions_are_exact() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());
    let en = locale("en-US");
    let dir = image_dir(tmp.path(), "en-US", ImageKind::Icon);

    write_png(&dir.join("icon.png"), 512, 512);
    assert!(resolver.resolve_images(&en, ImageKind::Icon).is_ok());

    write_png(&dir.join("icon.png"), 511, 512);
    let err = resolver.resolve_images(&en, ImageKind::Icon).unwrap_err();
    assert!(matches!(
        err,
        ListingError::ImageOutOfBounds { width: 511, height: 512, .. }
    ));

    write_png(&dir.join("icon.png"), 513, 512);
    assert!(resolver.resolve_images(&en, ImageKind::Icon).is_err());
}

#[test]
fn screenshot_below_minimum_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());
    let dir = image_dir(tmp.path(), "en-US", ImageKind::WearScreenshots);

    write_png(&dir.join("watch.png"), 319, 320);
    let err = resolver
        .resolve_images(&locale("en-US"), ImageKind::WearScreenshots)
        .unwrap_err();
    assert!(matches!(err, ListingError::ImageOutOfBounds { .. }));
}

#[test]
fn corrupt_image_is_reported() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());
    let dir = image_dir(tmp.path(), "en-US", ImageKind::PhoneScreenshots);

    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("broken.png"), b"not a png at all").unwrap();

    let err = resolver
        .resolve_images(&locale("en-US"), ImageKind::PhoneScreenshots)
        .unwrap_err();
    assert!(matches!(err, ListingError::UnreadableImage { .. }));
}

#[test]
fn resolve_walks_all_locales() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());

    for code in ["de-DE", "en-US", "es-419", "fil"] {
        let loc = locale(code);
        resolver
            .save_text_field(&loc, TextFieldKind::Title, "My App")
            .unwrap();
    }
    let dir = image_dir(tmp.path(), "en-US", ImageKind::FeatureGraphic);
    write_png(&dir.join("feature.png"), 1024, 500);

    let listing: Listing = resolver.resolve().unwrap();
    let codes: Vec<_> = listing
        .locales
        .iter()
        .map(|l| l.locale.as_str().to_string())
        .collect();
    assert_eq!(codes, ["de-DE", "en-US", "es-419", "fil"]);

    let en = &listing.locales[1];
    assert_eq!(en.texts.len(), 1);
    assert_eq!(en.images.len(), 1);
    assert_eq!(en.images[0].kind, ImageKind::FeatureGraphic);
    assert_eq!(listing.asset_count(), 5);
}

#[test]
fn resolve_fails_on_invalid_locale_directory() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());

    fs::create_dir_all(tmp.path().join("en-US")).unwrap();
    fs::create_dir_all(tmp.path().join("en-us")).unwrap();

    let err = resolver.resolve().unwrap_err();
    assert!(matches!(err, ListingError::InvalidLocale { name } if name == "en-us"));
}

#[test]
fn check_listing_collects_all_issues() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());

    // Invalid locale dir, an over-length title, and a doubled icon,
    // all in one tree.
    fs::create_dir_all(tmp.path().join("english")).unwrap();
    let de = tmp.path().join("de-DE");
    fs::create_dir_all(&de).unwrap();
    fs::write(de.join("title"), "t".repeat(51)).unwrap();
    let icon_dir = image_dir(tmp.path(), "de-DE", ImageKind::Icon);
    write_png(&icon_dir.join("a.png"), 512, 512);
    write_png(&icon_dir.join("b.png"), 512, 512);

    let report = check_listing(&resolver);
    assert!(!report.is_valid());
    assert_eq!(report.error_count(), 3);

    let fields: Vec<_> = report.errors().map(|i| i.field.clone()).collect();
    assert!(fields.contains(&"english".to_string()));
    assert!(fields.contains(&"de-DE/title".to_string()));
    assert!(fields.contains(&"de-DE/icon".to_string()));

    // Missing short/full description surface as warnings, not errors.
    assert!(report.warning_count() >= 2);
}

#[test]
fn check_listing_passes_on_complete_locale() {
    let tmp = TempDir::new().unwrap();
    let resolver = ListingResolver::new(tmp.path());
    let en = locale("en-US");

    resolver
        .save_text_field(&en, TextFieldKind::Title, "My App")
        .unwrap();
    resolver
        .save_text_field(&en, TextFieldKind::ShortDescription, "Short and sweet")
        .unwrap();
    resolver
        .save_text_field(&en, TextFieldKind::FullDescription, "The long story.")
        .unwrap();

    let report = check_listing(&resolver);
    assert!(report.is_valid());
    assert!(report.is_clean());
}
