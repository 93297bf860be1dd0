use super::*;
use crate::{
    animation::ease::Ease,
    coordinator::config::CoordinatorConfig,
    foundation::core::{PageMetrics, Viewport},
    stage::dsl::fade,
    trigger::band::Edge,
};

const MINIMAL: &str = include_str!("../../data/stage_minimal.json");

#[test]
fn stage_document_loads_with_tagged_cues() {
    let stage = Stage::from_json(MINIMAL).unwrap();
    assert_eq!(stage.elements.len(), 3);
    assert_eq!(stage.cues.len(), 3);
    assert!(matches!(
        stage.cues[1].kind,
        CueKind::Reveal {
            band: BandDef::UntilEnd { .. },
            policy: ReplayPolicy::Toggle,
            ..
        }
    ));
    assert_eq!(stage.cues[1].mobile, MobileVariant::Disabled);
    let mascot = stage.mascot.as_ref().unwrap();
    assert_eq!(mascot.messages, default_messages());
    assert_eq!(stage.dive, Some(DiveDef { seed: 7 }));
}

#[test]
fn mobile_variant_must_be_declared() {
    let json = r#"{
        "elements": {},
        "cues": [{
            "element": "a", "kind": "scrub",
            "specs": [{ "property": "y", "from": 0, "to": 1,
                        "drive": { "mode": "progress", "start": 0, "end": 1 } }]
        }]
    }"#;
    assert!(matches!(Stage::from_json(json), Err(ScrollcueError::Serde(_))));
}

#[test]
fn for_tier_selects_variant() {
    let stage = Stage::from_json(MINIMAL).unwrap();
    let reveal = &stage.cues[1];
    assert!(reveal.for_tier(DeviceTier::Desktop).is_some());
    assert!(reveal.for_tier(DeviceTier::Mobile).is_none());

    let floating = &stage.cues[2];
    assert!(matches!(
        floating.for_tier(DeviceTier::Mobile),
        Some(CueKind::Entrance {
            loop_mode: LoopMode::PingPong,
            ..
        })
    ));
    assert!(matches!(
        floating.for_tier(DeviceTier::Desktop),
        Some(CueKind::Scrub { .. })
    ));
}

#[test]
fn time_driven_scrub_is_rejected() {
    let cue = Cue {
        element: "a".into(),
        kind: CueKind::Scrub {
            specs: fade(1.0, 0.0, Ease::Linear),
        },
        mobile: MobileVariant::Same,
    };
    let err = cue.validate().unwrap_err();
    assert!(err.to_string().contains("cue for 'a'"));
}

#[test]
fn bad_replacement_is_rejected() {
    let cue = Cue {
        element: "a".into(),
        kind: CueKind::Entrance {
            specs: fade(1.0, 0.0, Ease::Linear),
            loop_mode: LoopMode::Once,
        },
        mobile: MobileVariant::Replace {
            cue: CueKind::Entrance {
                specs: Vec::new(),
                loop_mode: LoopMode::Once,
            },
        },
    };
    assert!(cue.validate().is_err());
}

#[test]
fn invalid_anchor_is_rejected() {
    let cue = Cue {
        element: "a".into(),
        kind: CueKind::Reveal {
            band: BandDef::until_end(Edge::Top, f64::INFINITY),
            policy: ReplayPolicy::Once,
            specs: fade(1.0, 0.0, Ease::Linear),
        },
        mobile: MobileVariant::Same,
    };
    assert!(cue.validate().is_err());
}

#[test]
fn mount_publishes_layout_and_layers_in_order() {
    let stage = Stage::from_json(MINIMAL).unwrap();
    let metrics = PageMetrics::new(Viewport::new(1280.0, 800.0).unwrap(), 4800.0).unwrap();
    let mut coord = Coordinator::new(CoordinatorConfig::default(), metrics).unwrap();
    let ids = stage.mount(&mut coord).unwrap();
    assert_eq!(ids.len(), 4);
    assert_eq!(coord.mounted_count(), 4);
    assert_eq!(coord.elements().len(), 3);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn stage_without_layers_mounts_only_cues() {
    let mut stage = Stage::from_json(MINIMAL).unwrap();
    stage.mascot = None;
    stage.dive = None;
    let metrics = PageMetrics::new(Viewport::new(1280.0, 800.0).unwrap(), 4800.0).unwrap();
    let mut coord = Coordinator::new(CoordinatorConfig::default(), metrics).unwrap();
    assert_eq!(stage.mount(&mut coord).unwrap().len(), 1);
}
