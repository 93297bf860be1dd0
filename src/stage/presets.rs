//! Ready-made stages.

use crate::{
    animation::ease::Ease,
    animation::executor::LoopMode,
    animation::tween::{Property, TransitionSpec},
    foundation::error::ScrollcueResult,
    scroll::tier::DeviceTier,
    stage::dsl::{StageBuilder, entrance, fade, fade_in_x, fade_up, looping, replace, reveal, scrub},
    stage::model::{MobileVariant, Stage},
    trigger::band::{BandDef, Edge},
    trigger::scheduler::ReplayPolicy,
};

/// Document height the landing layout is laid out for (px).
pub const LANDING_DOCUMENT_HEIGHT: f64 = 5600.0;

pub const LANDING_SERVICE_CARDS: usize = 6;
pub const LANDING_VALUE_CARDS: usize = 4;
pub const LANDING_STEPS: usize = 4;

/// Parallax speed of each floating robot.
const FLOATING_SPEEDS: [f64; 3] = [0.5, 0.3, 0.6];

/// The marketing landing page: hero entrance, section reveals, floating robots, mascot
/// and the late-era dive.
pub fn landing_page() -> ScrollcueResult<Stage> {
    let desk = DeviceTier::Desktop.params();
    let mob = DeviceTier::Mobile.params();
    let toggle = ReplayPolicy::Toggle;
    let from_top = |viewport: f64| BandDef::until_end(Edge::Top, viewport);

    let mut b = StageBuilder::new()
        .element("hero.logo", 200.0, 150.0)?
        .element("hero.title", 380.0, 120.0)?
        .element("hero.subtitle", 520.0, 80.0)?
        .element("services.title", 900.0, 80.0)?
        .element("services.subtitle", 1000.0, 60.0)?
        .element("values.title", 2100.0, 80.0)?
        .element("how.title", 2900.0, 80.0)?
        .element("about.title", 4050.0, 80.0)?
        .element("about.description", 4150.0, 300.0)?
        .element("contact.title", 4700.0, 80.0)?
        .element("contact.subtitle", 4800.0, 60.0)?
        .element("contact.form", 4900.0, 500.0)?;
    for i in 0..LANDING_SERVICE_CARDS {
        b = b.element(format!("services.card.{i}"), 1100.0 + (i / 3) as f64 * 350.0, 300.0)?;
    }
    for i in 0..LANDING_VALUE_CARDS {
        b = b.element(format!("values.card.{i}"), 2250.0, 300.0)?;
    }
    for i in 0..LANDING_STEPS {
        b = b.element(format!("how.step.{i}"), 3000.0 + i as f64 * 220.0, 200.0)?;
    }
    for (i, _) in FLOATING_SPEEDS.iter().enumerate() {
        b = b.element(format!("floating.{i}"), 0.0, 90.0)?;
    }

    // Hero: staggered timeline overlapping by half a second; plain fades on mobile.
    for (i, id) in ["hero.logo", "hero.title", "hero.subtitle"].into_iter().enumerate() {
        let delay = 0.3 + i as f64 * 0.5;
        b = b.cue(
            id,
            entrance(fade_up(50.0, 1.0, delay, Ease::OutCubic)),
            replace(entrance(fade(0.8, 0.2 + i as f64 * 0.2, Ease::OutCubic))),
        );
    }

    // Section headers.
    for (id, viewport, offset, mobile_offset, delay) in [
        ("services.title", 0.75, desk.reveal_offset_px, mob.reveal_offset_px, 0.0),
        (
            "services.subtitle",
            0.80,
            desk.reveal_subtitle_offset_px,
            mob.reveal_subtitle_offset_px,
            0.2,
        ),
        ("how.title", 0.75, desk.reveal_offset_px, mob.reveal_offset_px, 0.0),
        ("contact.title", 0.75, desk.reveal_offset_px, mob.reveal_offset_px, 0.0),
        (
            "contact.subtitle",
            0.75,
            desk.reveal_subtitle_offset_px,
            mob.reveal_subtitle_offset_px,
            0.2,
        ),
    ] {
        b = b.cue(
            id,
            reveal(
                from_top(viewport),
                toggle,
                fade_up(offset, desk.reveal_duration_s, delay, Ease::OutQuart),
            ),
            replace(reveal(
                from_top(viewport),
                toggle,
                fade_up(mobile_offset, mob.reveal_duration_s, delay, Ease::OutQuart),
            )),
        );
    }

    for i in 0..LANDING_SERVICE_CARDS {
        let stagger = |s: f64| i as f64 * s;
        b = b.cue(
            format!("services.card.{i}"),
            reveal(
                from_top(0.85),
                toggle,
                fade_up(
                    desk.reveal_offset_px,
                    desk.reveal_duration_s,
                    stagger(desk.stagger_s),
                    Ease::OutQuart,
                ),
            ),
            replace(reveal(
                from_top(0.85),
                toggle,
                fade_up(
                    mob.reveal_offset_px,
                    mob.reveal_duration_s,
                    stagger(mob.stagger_s),
                    Ease::OutQuart,
                ),
            )),
        );
    }

    for i in 0..LANDING_STEPS {
        b = b.cue(
            format!("how.step.{i}"),
            reveal(
                from_top(0.85),
                toggle,
                fade_in_x(-50.0, 1.0, 0.0, Ease::OutQuart),
            ),
            replace(reveal(
                from_top(0.85),
                toggle,
                fade_up(mob.reveal_offset_px, mob.reveal_duration_s, 0.0, Ease::OutQuart),
            )),
        );
    }

    b = b.cue(
        "contact.form",
        reveal(from_top(0.80), toggle, fade_up(40.0, 0.8, 0.3, Ease::OutQuart)),
        replace(reveal(
            from_top(0.80),
            toggle,
            fade_up(20.0, 0.5, 0.3, Ease::OutQuart),
        )),
    );

    // Values and about are desktop-only.
    b = b.cue(
        "values.title",
        reveal(from_top(0.80), toggle, fade_up(30.0, 0.8, 0.0, Ease::OutCubic)),
        MobileVariant::Disabled,
    );
    for i in 0..LANDING_VALUE_CARDS {
        b = b.cue(
            format!("values.card.{i}"),
            reveal(
                from_top(0.85),
                toggle,
                fade_up(50.0, 0.8, i as f64 * 0.1, Ease::OutCubic),
            ),
            MobileVariant::Disabled,
        );
    }
    for (id, viewport, delay) in [("about.title", 0.75, 0.0), ("about.description", 0.70, 0.2)] {
        b = b.cue(
            id,
            reveal(from_top(viewport), toggle, fade_up(30.0, 0.8, delay, Ease::OutCubic)),
            MobileVariant::Disabled,
        );
    }

    // Floating robots: parallax over the whole page plus an idle sway. Mobile keeps only
    // a gentle bob.
    for (i, speed) in FLOATING_SPEEDS.into_iter().enumerate() {
        let id = format!("floating.{i}");
        let period = 3.0 + i as f64 * 0.5;
        b = b
            .cue(
                id.clone(),
                scrub(vec![
                    TransitionSpec::scrub(Property::Y, 0.0, speed * 500.0, 0.0, 1.0),
                    TransitionSpec::scrub(Property::Scale, 1.0, 1.0 - speed * 0.3, 0.0, 1.0),
                    TransitionSpec::scrub(Property::Rotation, 0.0, speed * std::f64::consts::TAU, 0.0, 1.0),
                ]),
                replace(looping(
                    vec![
                        TransitionSpec::time(Property::X, 0.0, 20.0, period).with_ease(Ease::InOutSine),
                        TransitionSpec::time(Property::Y, 0.0, 30.0, period).with_ease(Ease::InOutSine),
                    ],
                    LoopMode::PingPong,
                )),
            )
            .cue(
                id,
                looping(
                    vec![TransitionSpec::time(Property::X, 0.0, 20.0, period).with_ease(Ease::InOutSine)],
                    LoopMode::PingPong,
                ),
                MobileVariant::Disabled,
            );
    }

    b.mascot("/robot.glb").dive(0x5eed).build()
}

#[cfg(test)]
#[path = "../../tests/unit/stage/presets.rs"]
mod tests;
