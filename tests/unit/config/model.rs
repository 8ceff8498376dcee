use super::*;

#[test]
fn missing_fields_take_defaults() {
    let cfg = GridConfig::from_reader(r#"{ "n_rows": 3 }"#.as_bytes()).unwrap();
    assert_eq!(cfg, GridConfig::new(3.0));
    assert_eq!(cfg.clip_limit, 0.95);
    assert_eq!(cfg.zoom_vec(), Vec2::new(1.0, 1.0));
    assert_eq!(cfg.pan_vec(), Vec2::ZERO);
}

#[test]
fn full_config_builds_transform() {
    let json = r#"{ "n_rows": 2, "zoom": [2.0, 0.5], "pan": [0.1, 0.0], "clip_limit": 1.0 }"#;
    let cfg = GridConfig::from_reader(json.as_bytes()).unwrap();
    let t = cfg.to_transform().unwrap();
    assert_eq!(t.n_rows(), 2.0);
    assert_eq!(t.zoom(), Vec2::new(2.0, 0.5));
    assert_eq!(t.pan(), Vec2::new(0.1, 0.0));
    assert!(!cfg.clip(Vec2::new(0.97, 0.0)));
    assert!(cfg.clip(Vec2::new(1.01, 0.0)));
}

#[test]
fn parse_errors_are_config_errors() {
    let err = GridConfig::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, GridError::Config(_)));

    let err = GridConfig::from_reader(r#"{ "n_rows": 2, "rows": 3 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, GridError::Config(_)));
}

#[test]
fn invalid_values_are_validation_errors() {
    let mut cfg = GridConfig::new(0.0);
    assert!(matches!(cfg.validate(), Err(GridError::Validation(_))));

    cfg.n_rows = 2.0;
    cfg.clip_limit = -0.1;
    assert!(matches!(cfg.to_transform(), Err(GridError::Validation(_))));
}

#[test]
fn missing_file_reports_path() {
    let err = GridConfig::from_path("definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("definitely/not/here.json"));
}
