use super::*;
use crate::animation::tween::Drive;

#[test]
fn duplicate_element_is_rejected() {
    let res = StageBuilder::new()
        .element("a", 0.0, 10.0)
        .and_then(|b| b.element("a", 20.0, 10.0));
    assert!(res.is_err());
}

#[test]
fn builder_validates_on_build() {
    let res = StageBuilder::new()
        .element("a", 0.0, 10.0)
        .unwrap()
        .cue("a", scrub(fade(1.0, 0.0, Ease::Linear)), MobileVariant::Same)
        .build();
    assert!(res.is_err());
}

#[test]
fn fade_up_pairs_opacity_and_offset() {
    let specs = fade_up(60.0, 1.0, 0.2, Ease::OutQuart);
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].property, Property::Opacity);
    assert_eq!((specs[1].from, specs[1].to), (60.0, 0.0));
    for s in &specs {
        assert_eq!(
            s.drive,
            Drive::Time {
                delay_s: 0.2,
                duration_s: 1.0
            }
        );
        assert_eq!(s.ease, Ease::OutQuart);
    }
}

#[test]
fn messages_require_a_mascot() {
    let stage = StageBuilder::new()
        .messages(vec!["hi".to_string()])
        .build()
        .unwrap();
    assert!(stage.mascot.is_none());

    let stage = StageBuilder::new()
        .mascot("/robot.glb")
        .messages(vec!["hi".to_string()])
        .dive(3)
        .build()
        .unwrap();
    assert_eq!(stage.mascot.unwrap().messages, vec!["hi".to_string()]);
    assert_eq!(stage.dive, Some(DiveDef { seed: 3 }));
}

#[test]
fn empty_message_list_fails_validation() {
    let res = StageBuilder::new().mascot("/robot.glb").messages(Vec::new()).build();
    assert!(res.is_err());
}

#[test]
fn reveal_helper_builds_reveal_kind() {
    let kind = reveal(
        BandDef::progress(0.1, 0.2),
        ReplayPolicy::Once,
        fade_in_x(-50.0, 1.0, 0.0, Ease::OutQuart),
    );
    assert!(kind.validate().is_ok());
    assert!(matches!(kind, CueKind::Reveal { .. }));
}
