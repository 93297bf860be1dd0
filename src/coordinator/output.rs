use std::collections::BTreeMap;

use crate::{
    foundation::core::{FrameIndex, VisualState},
    scene::backdrop::EraTheme,
    scene::bubble::BubbleFrame,
    scene::dive::DiveFrame,
    scene::mascot::MascotFrame,
    scroll::era::Era,
    scroll::sampler::ScrollState,
    scroll::tier::DeviceTier,
    stage::element::ElementId,
};

/// Complete visual state produced by one frame pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    pub frame: FrameIndex,
    pub time_s: f64,
    pub scroll: ScrollState,
    pub era: Era,
    pub theme: EraTheme,
    pub tier: DeviceTier,
    /// Animated elements in id order.
    pub elements: BTreeMap<ElementId, VisualState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mascot: Option<MascotFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bubble: Option<BubbleFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dive: Option<DiveFrame>,
}

impl FrameOutput {
    /// Empty output for a frame; components fill in the rest.
    pub fn new(frame: FrameIndex, time_s: f64, scroll: ScrollState, era: Era, tier: DeviceTier) -> Self {
        Self {
            frame,
            time_s,
            scroll,
            era,
            theme: era.theme(),
            tier,
            elements: BTreeMap::new(),
            mascot: None,
            bubble: None,
            dive: None,
        }
    }

    pub fn element(&self, id: &str) -> Option<&VisualState> {
        self.elements.get(&ElementId::from(id))
    }
}
