use std::collections::BTreeMap;

use crate::{
    animation::executor::{LoopMode, Timeline},
    animation::tween::TransitionSpec,
    coordinator::coordinator::{Coordinator, MountId},
    foundation::error::{ScrollcueError, ScrollcueResult},
    scene::bubble::{SpeechBubble, default_messages},
    scene::dive::DiveScene,
    scene::mascot::Mascot,
    scroll::tier::DeviceTier,
    stage::cues::CueSet,
    stage::element::{ElementId, ElementLayout},
    trigger::band::BandDef,
    trigger::scheduler::ReplayPolicy,
};

/// Declarative description of one page: elements, their cues, and the optional 3D layers.
///
/// A stage is plain data. It can be:
/// - built programmatically (see [`crate::StageBuilder`])
/// - loaded from JSON ([`Stage::from_json`])
///
/// and is brought to life with [`Stage::mount`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Stage {
    /// Initial element layout in document px.
    pub elements: BTreeMap<ElementId, ElementLayout>,
    pub cues: Vec<Cue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mascot: Option<MascotDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dive: Option<DiveDef>,
}

/// One declared animation of one element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cue {
    pub element: ElementId,
    #[serde(flatten)]
    pub kind: CueKind,
    /// Behaviour on the mobile tier. Always declared.
    pub mobile: MobileVariant,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CueKind {
    /// Time-driven timeline played when the element enters its band.
    Reveal {
        band: BandDef,
        policy: ReplayPolicy,
        specs: Vec<TransitionSpec>,
    },
    /// Progress-driven specs sampled from scroll progress every frame.
    Scrub { specs: Vec<TransitionSpec> },
    /// Time-driven timeline played as soon as the cue is active.
    Entrance {
        specs: Vec<TransitionSpec>,
        #[serde(default)]
        loop_mode: LoopMode,
    },
}

impl CueKind {
    pub fn specs(&self) -> &[TransitionSpec] {
        match self {
            Self::Reveal { specs, .. } | Self::Scrub { specs } | Self::Entrance { specs, .. } => {
                specs
            }
        }
    }

    /// Timeline for time-driven kinds; `None` for scrubs.
    pub fn timeline(&self) -> ScrollcueResult<Option<Timeline>> {
        match self {
            Self::Reveal { specs, .. } => Timeline::new(specs.clone(), LoopMode::Once).map(Some),
            Self::Entrance { specs, loop_mode } => {
                Timeline::new(specs.clone(), *loop_mode).map(Some)
            }
            Self::Scrub { .. } => Ok(None),
        }
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        if self.specs().is_empty() {
            return Err(ScrollcueError::validation("cue needs at least one spec"));
        }
        if let Self::Reveal { band, .. } = self {
            band.validate()?;
        }
        if let Self::Scrub { specs } = self {
            for spec in specs {
                spec.validate()?;
                if spec.is_time_driven() {
                    return Err(ScrollcueError::validation(
                        "scrub cues take progress-driven specs only",
                    ));
                }
            }
        }
        self.timeline().map(|_| ())
    }
}

/// What a cue does on the mobile tier.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum MobileVariant {
    Same,
    /// Nothing is registered; the element rests in its final state.
    Disabled,
    /// A cheaper cue takes over.
    Replace { cue: CueKind },
}

impl Cue {
    /// The cue active on `tier`, or `None` when disabled there.
    pub fn for_tier(&self, tier: DeviceTier) -> Option<&CueKind> {
        if !tier.is_mobile() {
            return Some(&self.kind);
        }
        match &self.mobile {
            MobileVariant::Same => Some(&self.kind),
            MobileVariant::Disabled => None,
            MobileVariant::Replace { cue } => Some(cue),
        }
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        self.kind.validate().map_err(|e| cue_error(&self.element, e))?;
        if let MobileVariant::Replace { cue } = &self.mobile {
            cue.validate().map_err(|e| cue_error(&self.element, e))?;
        }
        Ok(())
    }
}

fn cue_error(element: &ElementId, err: ScrollcueError) -> ScrollcueError {
    ScrollcueError::validation(format!("cue for '{element}': {err}"))
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MascotDef {
    /// Model path reported back through asset status events.
    pub asset: String,
    #[serde(default = "default_messages")]
    pub messages: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiveDef {
    #[serde(default)]
    pub seed: u64,
}

impl Stage {
    pub fn from_json(json: &str) -> ScrollcueResult<Self> {
        let stage: Self = serde_json::from_str(json)?;
        stage.validate()?;
        Ok(stage)
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        for (id, layout) in &self.elements {
            if !(layout.top.is_finite() && layout.height.is_finite() && layout.height >= 0.0) {
                return Err(ScrollcueError::validation(format!(
                    "element '{id}' layout must be finite with height >= 0"
                )));
            }
        }
        for cue in &self.cues {
            cue.validate()?;
        }
        if let Some(m) = &self.mascot {
            if m.asset.trim().is_empty() {
                return Err(ScrollcueError::validation("mascot asset must be non-empty"));
            }
            if m.messages.is_empty() {
                return Err(ScrollcueError::validation(
                    "mascot needs at least one message",
                ));
            }
        }
        Ok(())
    }

    /// Publish element layouts and mount every layer: cues, mascot, speech bubble, dive.
    ///
    /// The bubble is mounted after the mascot because it reads the mascot's frame.
    pub fn mount(self, coordinator: &mut Coordinator) -> ScrollcueResult<Vec<MountId>> {
        self.validate()?;
        for (id, layout) in self.elements {
            coordinator.set_layout(id, layout);
        }

        let mut ids = vec![coordinator.mount(Box::new(CueSet::new(self.cues)?))];
        if let Some(m) = self.mascot {
            ids.push(coordinator.mount(Box::new(Mascot::new(m.asset)?)));
            ids.push(coordinator.mount(Box::new(SpeechBubble::new(m.messages)?)));
        }
        if let Some(d) = self.dive {
            ids.push(coordinator.mount(Box::new(DiveScene::new(d.seed))));
        }
        Ok(ids)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/model.rs"]
mod tests;
