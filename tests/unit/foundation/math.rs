use super::*;

#[test]
fn clamp01_handles_nan_and_range() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(1.7), 1.0);
    assert_eq!(clamp01(0.25), 0.25);
}

#[test]
fn window_t_is_clamped_and_steps_when_empty() {
    assert_eq!(window_t(0.1, 0.2, 0.6), 0.0);
    assert_eq!(window_t(0.4, 0.2, 0.6), 0.5);
    assert_eq!(window_t(0.9, 0.2, 0.6), 1.0);
    assert_eq!(window_t(0.3, 0.3, 0.3), 1.0);
    assert_eq!(window_t(0.29, 0.3, 0.3), 0.0);
}

#[test]
fn rng_is_seeded_and_in_unit_range() {
    let mut a = Rng64::new(7);
    let mut b = Rng64::new(7);
    for _ in 0..64 {
        let x = a.next_f64_01();
        assert_eq!(x, b.next_f64_01());
        assert!((0.0..1.0).contains(&x));
    }
    let mut c = Rng64::new(8);
    assert_ne!(Rng64::new(7).next_u64(), c.next_u64());
}

#[test]
fn rng_range_respects_bounds() {
    let mut r = Rng64::new(42);
    for _ in 0..64 {
        let v = r.range(2.0, 17.0);
        assert!((2.0..17.0).contains(&v));
    }
}
