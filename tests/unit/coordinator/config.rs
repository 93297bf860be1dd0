use super::*;

#[test]
fn empty_document_yields_defaults() {
    let cfg = CoordinatorConfig::from_json("{}").unwrap();
    assert_eq!(cfg, CoordinatorConfig::default());
    assert_eq!(cfg.breakpoint_px, 768.0);
    assert_eq!(cfg.eras.mid_from, 0.15);
    assert_eq!(cfg.eras.late_from, 0.40);
    assert_eq!(cfg.resize_debounce_s, 0.15);
}

#[test]
fn partial_document_overrides_fields() {
    let cfg = CoordinatorConfig::from_json(
        r#"{"breakpoint_px": 1024, "eras": {"mid_from": 0.2, "late_from": 0.5}}"#,
    )
    .unwrap();
    assert_eq!(cfg.breakpoint_px, 1024.0);
    assert_eq!(cfg.eras.late_from, 0.5);
    assert_eq!(cfg.velocity_decay, 0.9);
}

#[test]
fn overlapping_era_bands_are_rejected() {
    let err = CoordinatorConfig::from_json(r#"{"eras": {"mid_from": 0.5, "late_from": 0.4}}"#)
        .unwrap_err();
    assert!(matches!(err, ScrollcueError::Validation(_)));
}

#[test]
fn bad_decay_is_rejected() {
    let cfg = CoordinatorConfig {
        velocity_decay: 1.5,
        ..CoordinatorConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = CoordinatorConfig::from_json("{").unwrap_err();
    assert!(matches!(err, ScrollcueError::Serde(_)));
}

#[test]
fn sampler_config_mirrors_fields() {
    let s = CoordinatorConfig::default().sampler();
    assert_eq!(s, SamplerConfig::default());
}
