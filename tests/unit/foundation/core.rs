use super::*;

#[test]
fn viewport_rejects_degenerate_sizes() {
    assert!(Viewport::new(0.0, 800.0).is_err());
    assert!(Viewport::new(1024.0, f64::NAN).is_err());
    assert!(Viewport::new(1024.0, 768.0).is_ok());
}

#[test]
fn scroll_range_is_zero_for_short_pages() {
    let vp = Viewport::new(1024.0, 800.0).unwrap();
    assert_eq!(PageMetrics::new(vp, 600.0).unwrap().scroll_range(), 0.0);
    assert_eq!(PageMetrics::new(vp, 800.0).unwrap().scroll_range(), 0.0);
    assert_eq!(PageMetrics::new(vp, 3000.0).unwrap().scroll_range(), 2200.0);
}

#[test]
fn hex_colors_parse_with_optional_alpha() {
    assert_eq!(Rgba8::from_hex("#b845ff").unwrap(), Rgba8::rgb(0xb8, 0x45, 0xff));
    assert_eq!(
        Rgba8::from_hex("#0a0a0a80").unwrap(),
        Rgba8::rgba(10, 10, 10, 128)
    );
    assert!(Rgba8::from_hex("b845ff").is_err());
    assert!(Rgba8::from_hex("#b845f").is_err());
    assert!(Rgba8::from_hex("#zz45ff").is_err());
}

#[test]
fn visual_state_affine_identity_and_translation() {
    let v = VisualState::default();
    assert_eq!(v.to_affine(Vec2::new(50.0, 50.0)), Affine::IDENTITY);
    assert!(v.is_opacity_only());

    let v = VisualState {
        translate: Vec2::new(0.0, 60.0),
        ..VisualState::default()
    };
    assert_eq!(v.to_affine(Vec2::ZERO), Affine::translate(Vec2::new(0.0, 60.0)));
    assert!(!v.is_opacity_only());
}
