use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn out_of_range_inputs_clamp() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(-0.5), ease.apply(0.0));
        assert_eq!(ease.apply(1.7), ease.apply(1.0));
        assert_eq!(ease.apply(f64::NAN), 0.0);
    }
}

#[test]
fn out_curves_lead_linear() {
    assert!(Ease::OutCubic.apply(0.3) > 0.3);
    assert!(Ease::OutQuart.apply(0.3) > Ease::OutCubic.apply(0.3));
    assert!(Ease::InCubic.apply(0.3) < 0.3);
}

#[test]
fn serde_names_are_snake_case() {
    let s = serde_json::to_string(&Ease::InOutSine).unwrap();
    assert_eq!(s, "\"in_out_sine\"");
    let e: Ease = serde_json::from_str("\"out_cubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
}
