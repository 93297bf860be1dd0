use super::*;
use crate::stage::model::CueKind;

#[test]
fn landing_page_is_valid() {
    let stage = landing_page().unwrap();
    assert!(stage.validate().is_ok());
    assert!(stage.mascot.is_some());
    assert!(stage.dive.is_some());
    for cue in &stage.cues {
        assert!(
            stage.elements.contains_key(&cue.element),
            "cue targets undeclared element {}",
            cue.element
        );
    }
}

#[test]
fn every_reveal_uses_a_toggle_policy() {
    let stage = landing_page().unwrap();
    for cue in &stage.cues {
        if let CueKind::Reveal { policy, .. } = &cue.kind {
            assert_eq!(*policy, ReplayPolicy::Toggle);
        }
    }
}

#[test]
fn values_and_about_are_desktop_only() {
    let stage = landing_page().unwrap();
    let gated: Vec<_> = stage
        .cues
        .iter()
        .filter(|c| c.element.as_str().starts_with("values.") || c.element.as_str().starts_with("about."))
        .collect();
    assert_eq!(gated.len(), 1 + LANDING_VALUE_CARDS + 2);
    for cue in gated {
        assert_eq!(cue.mobile, MobileVariant::Disabled);
        assert!(cue.for_tier(DeviceTier::Mobile).is_none());
    }
}

#[test]
fn hero_overlaps_by_half_a_second() {
    let stage = landing_page().unwrap();
    let delays: Vec<f64> = ["hero.logo", "hero.title", "hero.subtitle"]
        .iter()
        .map(|id| {
            let cue = stage
                .cues
                .iter()
                .find(|c| c.element.as_str() == *id)
                .unwrap();
            match cue.kind.specs()[0].drive {
                crate::animation::tween::Drive::Time { delay_s, .. } => delay_s,
                crate::animation::tween::Drive::Progress { .. } => panic!("hero must be timed"),
            }
        })
        .collect();
    assert_eq!(delays, vec![0.3, 0.8, 1.3]);
}

#[test]
fn floating_parallax_is_replaced_on_mobile() {
    let stage = landing_page().unwrap();
    let floating: Vec<_> = stage
        .cues
        .iter()
        .filter(|c| c.element.as_str().starts_with("floating."))
        .collect();
    assert_eq!(floating.len(), 6);
    for cue in floating {
        if let CueKind::Scrub { specs } = &cue.kind {
            assert!(specs.iter().all(|s| !s.is_time_driven()));
            assert!(matches!(
                cue.for_tier(DeviceTier::Mobile),
                Some(CueKind::Entrance {
                    loop_mode: LoopMode::PingPong,
                    ..
                })
            ));
        }
    }
}

#[test]
fn card_counts_match_layout() {
    let stage = landing_page().unwrap();
    let count = |prefix: &str| {
        stage
            .elements
            .keys()
            .filter(|k| k.as_str().starts_with(prefix))
            .count()
    };
    assert_eq!(count("services.card."), LANDING_SERVICE_CARDS);
    assert_eq!(count("how.step."), LANDING_STEPS);
}

#[test]
fn service_cards_stagger_across_the_whole_grid() {
    let stage = landing_page().unwrap();
    for tier in [DeviceTier::Desktop, DeviceTier::Mobile] {
        let stagger = tier.params().stagger_s;
        for i in 0..LANDING_SERVICE_CARDS {
            let id = format!("services.card.{i}");
            let cue = stage
                .cues
                .iter()
                .find(|c| c.element.as_str() == id)
                .unwrap();
            let delay = match cue.for_tier(tier).unwrap().specs()[0].drive {
                crate::animation::tween::Drive::Time { delay_s, .. } => delay_s,
                crate::animation::tween::Drive::Progress { .. } => panic!("cards must be timed"),
            };
            assert_eq!(delay, i as f64 * stagger, "{id} on {tier:?}");
        }
    }
}
