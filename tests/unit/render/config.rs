use std::io::Write as _;

use super::*;

fn req(width: Option<f64>, height: Option<f64>) -> RenderRequest {
    RenderRequest {
        width,
        height,
        ..RenderRequest::default()
    }
}

#[test]
fn defaults_match_handler_constants() {
    let cfg = OverlayConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.color, Rgba8::new(0, 0, 0, 230));
    assert_eq!(cfg.min_thickness, 3);
    assert_eq!(cfg.min_dimension, 16);
    assert_eq!(cfg.max_dimension, 8192);
    assert_eq!((cfg.default_width, cfg.default_height), (1920, 1080));
}

#[test]
fn empty_json_object_is_the_default_config() {
    let cfg: OverlayConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, OverlayConfig::default());
}

#[test]
fn unknown_keys_are_rejected() {
    let err = serde_json::from_str::<OverlayConfig>(r#"{"colour": {"r":0,"g":0,"b":0,"a":1}}"#);
    assert!(err.is_err());
}

#[test]
fn validate_rejects_bad_ranges() {
    let cfg = OverlayConfig {
        min_dimension: 0,
        ..OverlayConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(OverlayError::Config(_))));

    let cfg = OverlayConfig {
        min_dimension: 100,
        max_dimension: 50,
        ..OverlayConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(OverlayError::Config(_))));

    let cfg = OverlayConfig {
        thickness_ratio: f64::NAN,
        ..OverlayConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(OverlayError::Config(_))));

    let cfg = OverlayConfig {
        thickness_ratio: -0.1,
        ..OverlayConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(OverlayError::Config(_))));
}

#[test]
fn clamp_dimension_floors_then_clamps() {
    let cfg = OverlayConfig::default();
    assert_eq!(cfg.clamp_dimension(100.9), Some(100));
    assert_eq!(cfg.clamp_dimension(10.0), Some(16));
    assert_eq!(cfg.clamp_dimension(-5.0), Some(16));
    assert_eq!(cfg.clamp_dimension(0.0), Some(16));
    assert_eq!(cfg.clamp_dimension(1e9), Some(8192));
    assert_eq!(cfg.clamp_dimension(f64::NAN), None);
    assert_eq!(cfg.clamp_dimension(f64::INFINITY), None);
}

#[test]
fn resolve_size_uses_defaults_for_missing_sides() {
    let cfg = OverlayConfig::default();
    let size = cfg.resolve_size(&req(None, None)).unwrap();
    assert_eq!((size.width, size.height), (1920, 1080));

    let size = cfg.resolve_size(&req(Some(640.0), None)).unwrap();
    assert_eq!((size.width, size.height), (640, 1080));
}

#[test]
fn resolve_size_rejects_non_finite() {
    let cfg = OverlayConfig::default();
    let err = cfg.resolve_size(&req(Some(f64::NAN), Some(10.0))).unwrap_err();
    assert!(matches!(err, OverlayError::InvalidDimension { .. }));
}

#[test]
fn thickness_helpers_follow_width() {
    let cfg = OverlayConfig::default();
    assert_eq!(cfg.thickness_for(100), 3);
    assert_eq!(cfg.half_thickness_for(100), 1);
    assert_eq!(cfg.thickness_for(1920), 6);
    assert_eq!(cfg.half_thickness_for(1920), 3);
}

#[test]
fn from_json_file_loads_and_validates() {
    let dir = std::env::temp_dir().join(format!("framelines-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    let mut f = std::fs::File::create(&good).unwrap();
    f.write_all(br#"{"color": {"r": 255, "g": 0, "b": 0, "a": 255}, "min_thickness": 1}"#)
        .unwrap();
    drop(f);
    let cfg = OverlayConfig::from_json_file(&good).unwrap();
    assert_eq!(cfg.color, Rgba8::new(255, 0, 0, 255));
    assert_eq!(cfg.min_thickness, 1);
    assert_eq!(cfg.max_dimension, 8192);

    let bad = dir.join("bad.json");
    std::fs::write(&bad, br#"{"min_dimension": 9000}"#).unwrap();
    assert!(matches!(
        OverlayConfig::from_json_file(&bad),
        Err(OverlayError::Config(_))
    ));

    let missing = dir.join("missing.json");
    assert!(matches!(
        OverlayConfig::from_json_file(&missing),
        Err(OverlayError::Other(_))
    ));

    let _ = std::fs::remove_dir_all(&dir);
}
