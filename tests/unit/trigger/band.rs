use super::*;
use crate::foundation::core::Viewport;

fn page() -> PageMetrics {
    PageMetrics::new(Viewport::new(1280.0, 800.0).unwrap(), 4800.0).unwrap()
}

#[test]
fn band_is_closed_on_both_ends() {
    let b = TriggerBand::new(0.2, 0.6).unwrap();
    assert!(!b.contains(0.19));
    assert!(b.contains(0.2));
    assert!(b.contains(0.6));
    assert!(!b.contains(0.61));
}

#[test]
fn invalid_bands_are_rejected() {
    assert!(TriggerBand::new(0.6, 0.2).is_err());
    assert!(TriggerBand::new(-0.1, 0.2).is_err());
    assert!(BandDef::progress(0.3, 1.5).validate().is_err());
}

#[test]
fn anchored_band_resolves_against_layout() {
    // Section at 2000px, 800px tall; page scrolls 4000px.
    let layout = ElementLayout {
        top: 2000.0,
        height: 800.0,
    };
    let def = BandDef::anchored(Edge::Top, 0.75);
    let band = def.resolve(&layout, &page()).unwrap();
    // top reaches 75% of the viewport at 2000 - 600 = 1400px.
    assert_eq!(band.start, 0.35);
    // bottom leaves through the top at 2800px.
    assert_eq!(band.end, 0.7);
}

#[test]
fn anchors_clamp_and_order() {
    let layout = ElementLayout {
        top: 100.0,
        height: 50.0,
    };
    let def = BandDef::Anchored {
        start: ScrollAnchor::new(Edge::Bottom, 0.0),
        end: ScrollAnchor::new(Edge::Top, 0.9),
    };
    let band = def.resolve(&layout, &page()).unwrap();
    assert_eq!(band.start, 0.0);
    assert!(band.end > 0.0);
    assert!(band.start <= band.end);
}

#[test]
fn unscrollable_page_collapses_to_zero() {
    let short = PageMetrics::new(Viewport::new(1280.0, 800.0).unwrap(), 700.0).unwrap();
    let layout = ElementLayout {
        top: 300.0,
        height: 100.0,
    };
    let band = BandDef::anchored(Edge::Top, 0.8).resolve(&layout, &short).unwrap();
    assert_eq!(band, TriggerBand { start: 0.0, end: 0.0 });
    assert!(band.contains(0.0));
}

#[test]
fn anchored_json_defaults_end() {
    let json = r#"{"units":"anchored","start":{"edge":"top","viewport":0.85}}"#;
    let def: BandDef = serde_json::from_str(json).unwrap();
    assert_eq!(def, BandDef::anchored(Edge::Top, 0.85));
}

#[test]
fn until_end_band_runs_to_the_bottom_of_the_page() {
    let layout = ElementLayout {
        top: 2000.0,
        height: 800.0,
    };
    let band = BandDef::until_end(Edge::Top, 0.75)
        .resolve(&layout, &page())
        .unwrap();
    assert_eq!(band.start, 0.35);
    assert_eq!(band.end, 1.0);
    assert!(band.contains(1.0));
}

#[test]
fn until_end_rejects_non_finite_anchor() {
    assert!(BandDef::until_end(Edge::Top, f64::NAN).validate().is_err());
}
