use super::*;
use crate::{
    animation::ease::Ease,
    animation::tween::Property,
    coordinator::fixture::Fixture,
    stage::dsl::{entrance, fade, reveal, scrub},
    stage::element::ElementLayout,
    stage::model::MobileVariant,
    trigger::band::BandDef,
    trigger::scheduler::ReplayPolicy,
};

fn fixture_with(ids: &[&str]) -> Fixture {
    let mut fx = Fixture::desktop();
    for id in ids {
        fx.elements.insert(
            (*id).into(),
            ElementLayout {
                top: 2000.0,
                height: 400.0,
            },
        );
    }
    fx
}

fn reveal_cue(id: &str, policy: ReplayPolicy, mobile: MobileVariant) -> Cue {
    Cue {
        element: id.into(),
        kind: reveal(BandDef::progress(0.3, 0.6), policy, fade(1.0, 0.0, Ease::Linear)),
        mobile,
    }
}

fn run(set: &mut CueSet, fx: &Fixture) -> FrameOutput {
    let mut out = fx.output();
    set.frame(&fx.ctx(), &mut out);
    out
}

fn opacity(out: &FrameOutput, id: &str) -> f64 {
    out.element(id).expect("element state").opacity
}

#[test]
fn once_reveal_plays_forward_and_never_reverses() {
    let mut fx = fixture_with(&["a"]);
    let mut set = CueSet::new(vec![reveal_cue("a", ReplayPolicy::Once, MobileVariant::Same)]).unwrap();
    set.mounted(&fx.ctx());
    assert_eq!(opacity(&run(&mut set, &fx), "a"), 0.0);

    fx.now_s = 1.0;
    fx.set_progress(0.4);
    assert_eq!(opacity(&run(&mut set, &fx), "a"), 0.0);

    fx.now_s = 2.0;
    assert_eq!(opacity(&run(&mut set, &fx), "a"), 1.0);

    fx.now_s = 3.0;
    fx.set_progress(0.9);
    assert_eq!(opacity(&run(&mut set, &fx), "a"), 1.0);
    fx.now_s = 4.0;
    fx.set_progress(0.4);
    assert_eq!(opacity(&run(&mut set, &fx), "a"), 1.0);
}

#[test]
fn toggle_reveal_reverses_from_its_current_position() {
    let mut fx = fixture_with(&["a"]);
    let mut set =
        CueSet::new(vec![reveal_cue("a", ReplayPolicy::Toggle, MobileVariant::Same)]).unwrap();
    set.mounted(&fx.ctx());
    fx.now_s = 1.0;
    fx.set_progress(0.4);
    run(&mut set, &fx);
    fx.now_s = 2.0;
    assert_eq!(opacity(&run(&mut set, &fx), "a"), 1.0);

    fx.now_s = 3.0;
    fx.set_progress(0.1);
    run(&mut set, &fx);
    assert!(set.is_animating(3.2));
    fx.now_s = 3.5;
    assert!((opacity(&run(&mut set, &fx), "a") - 0.5).abs() < 1e-9);
    fx.now_s = 5.0;
    assert_eq!(opacity(&run(&mut set, &fx), "a"), 0.0);
    assert!(!set.is_animating(5.0));
}

#[test]
fn disabled_on_mobile_rests_in_final_state() {
    let mut fx = fixture_with(&["a"]);
    fx.set_tier(DeviceTier::Mobile);
    let cue = Cue {
        element: "a".into(),
        kind: reveal(
            BandDef::progress(0.3, 0.6),
            ReplayPolicy::Toggle,
            vec![TransitionSpec::time(Property::Scale, 0.5, 1.2, 0.8)],
        ),
        mobile: MobileVariant::Disabled,
    };
    let mut set = CueSet::new(vec![cue]).unwrap();
    set.mounted(&fx.ctx());
    assert_eq!(set.trigger_count(), 0);

    let out = run(&mut set, &fx);
    assert_eq!(out.element("a").unwrap().scale, 1.2);
    assert!(!set.is_animating(fx.now_s));

    // Scrolling through the band changes nothing.
    fx.now_s = 1.0;
    fx.set_progress(0.4);
    assert_eq!(run(&mut set, &fx).element("a").unwrap().scale, 1.2);
}

#[test]
fn disabled_scrub_leaves_element_untouched_on_mobile() {
    let mut fx = fixture_with(&["f"]);
    fx.set_tier(DeviceTier::Mobile);
    let cue = Cue {
        element: "f".into(),
        kind: scrub(vec![TransitionSpec::scrub(Property::Y, 0.0, 250.0, 0.0, 1.0)]),
        mobile: MobileVariant::Disabled,
    };
    let mut set = CueSet::new(vec![cue]).unwrap();
    set.mounted(&fx.ctx());
    fx.set_progress(0.8);
    let out = run(&mut set, &fx);
    assert_eq!(out.element("f"), Some(&VisualState::default()));
}

#[test]
fn mobile_replacement_takes_over() {
    let mut fx = fixture_with(&["f"]);
    let cue = Cue {
        element: "f".into(),
        kind: scrub(vec![TransitionSpec::scrub(Property::Y, 0.0, 250.0, 0.0, 1.0)]),
        mobile: MobileVariant::Replace {
            cue: entrance(fade(1.0, 0.0, Ease::Linear)),
        },
    };
    let mut set = CueSet::new(vec![cue]).unwrap();

    fx.set_progress(0.5);
    set.mounted(&fx.ctx());
    let out = run(&mut set, &fx);
    assert_eq!(out.element("f").unwrap().translate.y, 125.0);

    fx.set_tier(DeviceTier::Mobile);
    set.tier_changed(&fx.ctx());
    let out = run(&mut set, &fx);
    let state = out.element("f").unwrap();
    assert_eq!(state.translate.y, 0.0);
    assert_eq!(state.opacity, 0.0);
    assert!(set.is_animating(fx.now_s));
}

#[test]
fn scrub_is_a_pure_function_of_progress() {
    let mut fx = fixture_with(&["f"]);
    let cue = Cue {
        element: "f".into(),
        kind: scrub(vec![
            TransitionSpec::scrub(Property::Scale, 1.0, 0.85, 0.0, 1.0).with_ease(Ease::InOutQuad),
        ]),
        mobile: MobileVariant::Same,
    };
    let mut set = CueSet::new(vec![cue]).unwrap();
    set.mounted(&fx.ctx());

    fx.set_progress(0.7);
    let a = run(&mut set, &fx);
    fx.set_progress(0.2);
    run(&mut set, &fx);
    fx.set_progress(0.7);
    fx.now_s = 9.0;
    let b = run(&mut set, &fx);
    assert_eq!(a.element("f"), b.element("f"));
}

#[test]
fn absent_element_registers_once_it_appears() {
    let mut fx = fixture_with(&[]);
    let mut set =
        CueSet::new(vec![reveal_cue("late", ReplayPolicy::Once, MobileVariant::Same)]).unwrap();
    set.mounted(&fx.ctx());
    assert_eq!(set.trigger_count(), 0);
    assert!(run(&mut set, &fx).element("late").is_none());

    fx.elements.insert(
        "late".into(),
        ElementLayout {
            top: 0.0,
            height: 10.0,
        },
    );
    fx.layout_changed = true;
    run(&mut set, &fx);
    assert_eq!(set.trigger_count(), 1);
}

#[test]
fn cues_on_one_element_compose_in_order() {
    let fx = fixture_with(&["f"]);
    let cues = vec![
        Cue {
            element: "f".into(),
            kind: scrub(vec![TransitionSpec::scrub(Property::Y, 10.0, 20.0, 0.0, 1.0)]),
            mobile: MobileVariant::Same,
        },
        Cue {
            element: "f".into(),
            kind: scrub(vec![TransitionSpec::scrub(Property::X, 5.0, 6.0, 0.0, 1.0)]),
            mobile: MobileVariant::Same,
        },
    ];
    let mut set = CueSet::new(cues).unwrap();
    set.mounted(&fx.ctx());
    let out = run(&mut set, &fx);
    let state = out.element("f").unwrap();
    assert_eq!(state.translate.x, 5.0);
    assert_eq!(state.translate.y, 10.0);
}

#[test]
fn invalid_cues_are_rejected_up_front() {
    let cue = Cue {
        element: "a".into(),
        kind: scrub(fade(1.0, 0.0, Ease::Linear)),
        mobile: MobileVariant::Same,
    };
    assert!(CueSet::new(vec![cue]).is_err());
}

#[test]
fn unmount_drops_triggers_and_timelines() {
    let mut fx = fixture_with(&["a"]);
    let mut set =
        CueSet::new(vec![reveal_cue("a", ReplayPolicy::Toggle, MobileVariant::Same)]).unwrap();
    set.mounted(&fx.ctx());
    fx.set_progress(0.4);
    run(&mut set, &fx);
    assert_eq!(set.trigger_count(), 1);
    set.unmount();
    assert_eq!(set.trigger_count(), 0);
    assert!(!set.is_animating(fx.now_s));
}

#[test]
fn tier_flip_keeps_what_already_played() {
    let mut fx = fixture_with(&["a", "h"]);
    let cues = vec![
        reveal_cue("a", ReplayPolicy::Once, MobileVariant::Same),
        Cue {
            element: "h".into(),
            kind: entrance(fade(1.0, 0.0, Ease::Linear)),
            mobile: MobileVariant::Same,
        },
    ];
    let mut set = CueSet::new(cues).unwrap();
    set.mounted(&fx.ctx());
    fx.set_progress(0.4);
    run(&mut set, &fx);
    fx.now_s = 2.0;
    let out = run(&mut set, &fx);
    assert_eq!(opacity(&out, "a"), 1.0);
    assert_eq!(opacity(&out, "h"), 1.0);

    fx.set_tier(DeviceTier::Mobile);
    set.tier_changed(&fx.ctx());
    let out = run(&mut set, &fx);
    assert_eq!(opacity(&out, "a"), 1.0);
    assert_eq!(opacity(&out, "h"), 1.0);
    assert!(!set.is_animating(fx.now_s));
}
