use std::collections::BTreeMap;

use crate::{
    animation::ease::Ease,
    animation::executor::LoopMode,
    animation::tween::{Property, TransitionSpec},
    foundation::error::{ScrollcueError, ScrollcueResult},
    scene::bubble::default_messages,
    stage::element::{ElementId, ElementLayout},
    stage::model::{Cue, CueKind, DiveDef, MascotDef, MobileVariant, Stage},
    trigger::band::BandDef,
    trigger::scheduler::ReplayPolicy,
};

pub struct StageBuilder {
    elements: BTreeMap<ElementId, ElementLayout>,
    cues: Vec<Cue>,
    mascot: Option<MascotDef>,
    dive: Option<DiveDef>,
}

impl Default for StageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StageBuilder {
    pub fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            cues: Vec::new(),
            mascot: None,
            dive: None,
        }
    }

    pub fn element(mut self, id: impl Into<ElementId>, top: f64, height: f64) -> ScrollcueResult<Self> {
        let id = id.into();
        if self.elements.contains_key(&id) {
            return Err(ScrollcueError::validation(format!(
                "duplicate element id '{id}'"
            )));
        }
        self.elements.insert(id, ElementLayout { top, height });
        Ok(self)
    }

    pub fn cue(mut self, element: impl Into<ElementId>, kind: CueKind, mobile: MobileVariant) -> Self {
        self.cues.push(Cue {
            element: element.into(),
            kind,
            mobile,
        });
        self
    }

    pub fn mascot(mut self, asset: impl Into<String>) -> Self {
        self.mascot = Some(MascotDef {
            asset: asset.into(),
            messages: default_messages(),
        });
        self
    }

    /// Replace the mascot's lines. Ignored when no mascot was declared.
    pub fn messages(mut self, messages: Vec<String>) -> Self {
        if let Some(m) = &mut self.mascot {
            m.messages = messages;
        }
        self
    }

    pub fn dive(mut self, seed: u64) -> Self {
        self.dive = Some(DiveDef { seed });
        self
    }

    pub fn build(self) -> ScrollcueResult<Stage> {
        let stage = Stage {
            elements: self.elements,
            cues: self.cues,
            mascot: self.mascot,
            dive: self.dive,
        };
        stage.validate()?;
        Ok(stage)
    }
}

pub fn reveal(band: BandDef, policy: ReplayPolicy, specs: Vec<TransitionSpec>) -> CueKind {
    CueKind::Reveal {
        band,
        policy,
        specs,
    }
}

pub fn scrub(specs: Vec<TransitionSpec>) -> CueKind {
    CueKind::Scrub { specs }
}

pub fn entrance(specs: Vec<TransitionSpec>) -> CueKind {
    CueKind::Entrance {
        specs,
        loop_mode: LoopMode::Once,
    }
}

pub fn looping(specs: Vec<TransitionSpec>, loop_mode: LoopMode) -> CueKind {
    CueKind::Entrance { specs, loop_mode }
}

/// Fade in while sliding up from `offset_px` below.
pub fn fade_up(offset_px: f64, duration_s: f64, delay_s: f64, ease: Ease) -> Vec<TransitionSpec> {
    vec![
        TransitionSpec::time(Property::Opacity, 0.0, 1.0, duration_s)
            .with_delay(delay_s)
            .with_ease(ease),
        TransitionSpec::time(Property::Y, offset_px, 0.0, duration_s)
            .with_delay(delay_s)
            .with_ease(ease),
    ]
}

/// Fade in while sliding horizontally from `offset_px`.
pub fn fade_in_x(offset_px: f64, duration_s: f64, delay_s: f64, ease: Ease) -> Vec<TransitionSpec> {
    vec![
        TransitionSpec::time(Property::Opacity, 0.0, 1.0, duration_s)
            .with_delay(delay_s)
            .with_ease(ease),
        TransitionSpec::time(Property::X, offset_px, 0.0, duration_s)
            .with_delay(delay_s)
            .with_ease(ease),
    ]
}

pub fn fade(duration_s: f64, delay_s: f64, ease: Ease) -> Vec<TransitionSpec> {
    vec![
        TransitionSpec::time(Property::Opacity, 0.0, 1.0, duration_s)
            .with_delay(delay_s)
            .with_ease(ease),
    ]
}

pub fn replace(cue: CueKind) -> MobileVariant {
    MobileVariant::Replace { cue }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/dsl.rs"]
mod tests;
