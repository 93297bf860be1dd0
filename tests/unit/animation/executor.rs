use super::*;
use crate::animation::{ease::Ease, tween::Property};

fn fade_up() -> Timeline {
    Timeline::new(
        vec![
            TransitionSpec::time(Property::Opacity, 0.0, 1.0, 1.0),
            TransitionSpec::time(Property::Y, 60.0, 0.0, 1.0).with_ease(Ease::OutQuart),
        ],
        LoopMode::Once,
    )
    .unwrap()
}

#[test]
fn idle_track_rests_at_declared_end() {
    let mut ex = TransitionExecutor::new();
    ex.insert("a", fade_up(), RestAt::Start);
    ex.insert("b", fade_up(), RestAt::End);

    let a = ex.sample(&"a", 5.0, VisualState::default()).unwrap();
    assert_eq!(a.opacity, 0.0);
    assert_eq!(a.translate.y, 60.0);

    let b = ex.sample(&"b", 5.0, VisualState::default()).unwrap();
    assert_eq!(b.opacity, 1.0);
    assert_eq!(b.translate.y, 0.0);
    assert!(!ex.is_animating(5.0));
}

#[test]
fn forward_playback_runs_once_and_holds() {
    let mut ex = TransitionExecutor::new();
    ex.insert(1u32, fade_up(), RestAt::Start);
    assert!(ex.play(&1, PlayDirection::Forward, 10.0));

    assert_eq!(ex.position(&1, 10.5), Some(0.5));
    assert!(ex.is_animating(10.5));
    let end = ex.sample(&1, 12.0, VisualState::default()).unwrap();
    assert_eq!(end.opacity, 1.0);
    assert_eq!(end.translate.y, 0.0);
    assert!(!ex.is_animating(12.0));
}

#[test]
fn reverse_restarts_from_current_position() {
    let mut ex = TransitionExecutor::new();
    ex.insert(1u32, fade_up(), RestAt::Start);
    ex.play(&1, PlayDirection::Forward, 0.0);
    ex.play(&1, PlayDirection::Reverse, 0.6);

    assert_eq!(ex.position(&1, 0.6), Some(0.6));
    let p = ex.position(&1, 0.8).unwrap();
    assert!((p - 0.4).abs() < 1e-12);
    assert_eq!(ex.position(&1, 5.0), Some(0.0));
    assert!(!ex.is_animating(5.0));
}

#[test]
fn play_on_unknown_key_is_a_noop() {
    let mut ex: TransitionExecutor<u32> = TransitionExecutor::new();
    assert!(!ex.play(&7, PlayDirection::Forward, 0.0));
    assert!(ex.sample(&7, 0.0, VisualState::default()).is_none());
}

#[test]
fn ping_pong_bounces_between_ends() {
    let tl = Timeline::new(
        vec![TransitionSpec::time(Property::Y, 0.0, 30.0, 2.0)],
        LoopMode::PingPong,
    )
    .unwrap();
    let mut ex = TransitionExecutor::new();
    ex.insert(0u8, tl, RestAt::Start);
    ex.play(&0, PlayDirection::Forward, 0.0);

    assert_eq!(ex.position(&0, 1.0), Some(1.0));
    assert_eq!(ex.position(&0, 3.0), Some(1.0));
    assert_eq!(ex.position(&0, 4.0), Some(0.0));
    assert!(ex.is_animating(100.0));
}

#[test]
fn timeline_rejects_progress_specs_and_empty_loops() {
    let scrub = TransitionSpec::scrub(Property::Y, 0.0, 1.0, 0.0, 1.0);
    assert!(Timeline::new(vec![scrub], LoopMode::Once).is_err());
    assert!(Timeline::new(vec![], LoopMode::Repeat).is_err());
    assert_eq!(Timeline::new(vec![], LoopMode::Once).unwrap().duration_s(), 0.0);
}
