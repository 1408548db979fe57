use booklet_impose::*;

#[test]
fn test_default_options_are_valid() {
    let options = ImposeOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.target_page, PaperSize::A4);
    assert_eq!(options.signature_cap, DEFAULT_SIGNATURE_CAP);
    assert!((options.bleed_mm - DEFAULT_BLEED_MM).abs() < 1e-6);
}

#[test]
fn test_derived_sheet_is_double_wide_landscape() {
    let options = ImposeOptions::default();
    let (pw, ph) = options.page_dimensions_pt();
    let (sw, sh) = options.sheet_dimensions_pt();
    assert!((sw - 2.0 * pw).abs() < 1e-3);
    assert!((sh - ph).abs() < 1e-3);
}

#[test]
fn test_explicit_sheet_overrides_derivation() {
    let options = ImposeOptions {
        sheet: Some(PaperSize::A3),
        ..ImposeOptions::default()
    };
    let (sw, sh) = options.sheet_dimensions_pt();
    let (a3w, a3h) = PaperSize::A3.dimensions_pt();
    assert_eq!((sw, sh), (a3w, a3h));
}

#[test]
fn test_validation_signature_size() {
    let mut options = ImposeOptions::default();

    for valid in [4, 8, 12, 16, 20] {
        options.signature_size = Some(valid);
        assert!(options.validate().is_ok());
    }

    for invalid in [0, 3, 6, 10] {
        options.signature_size = Some(invalid);
        match options.validate() {
            Err(ImposeError::InvalidArgument(msg)) => {
                assert!(msg.contains("multiple of 4"));
            }
            other => panic!("expected InvalidArgument for {invalid}, got {other:?}"),
        }
    }
}

#[test]
fn test_validation_bleed_and_cap() {
    let mut options = ImposeOptions::default();

    options.bleed_mm = -0.5;
    assert!(options.validate().is_err());
    options.bleed_mm = 0.0;
    assert!(options.validate().is_ok());

    // Cap must be a positive multiple of 4: full signatures are emitted
    // at exactly the cap size.
    for bad in [0, 10, 18] {
        options.signature_cap = bad;
        assert!(options.validate().is_err());
    }
    options.signature_cap = 16;
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_page_dimensions() {
    let options = ImposeOptions {
        target_page: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 297.0,
        },
        ..ImposeOptions::default()
    };
    assert!(options.validate().is_err());

    let options = ImposeOptions {
        sheet: Some(PaperSize::Custom {
            width_mm: 420.0,
            height_mm: -1.0,
        }),
        ..ImposeOptions::default()
    };
    assert!(options.validate().is_err());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = ImposeOptions {
        target_page: PaperSize::A5,
        sheet: Some(PaperSize::A4),
        signature_size: Some(8),
        bleed_mm: 2.0,
        front_flyleaves: 1,
        ..ImposeOptions::default()
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = ImposeOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_malformed_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), b"not json").await.unwrap();

    match ImposeOptions::load(temp_file.path()).await {
        Err(ImposeError::InvalidArgument(_)) => {}
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}
