use crate::{
    coordinator::output::FrameOutput,
    foundation::core::{FrameIndex, PageMetrics},
    scroll::era::{Era, EraBands},
    scroll::sampler::ScrollState,
    scroll::tier::{DeviceTier, TierParams},
    stage::element::ElementRegistry,
};

/// Load state of an external asset (e.g. a 3D model) reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Loading,
    Ready,
    Failed,
}

/// Everything a component may read during one frame pass.
#[derive(Clone, Copy, Debug)]
pub struct FrameCtx<'a> {
    pub frame: FrameIndex,
    pub now_s: f64,
    pub scroll: &'a ScrollState,
    pub metrics: &'a PageMetrics,
    /// Page metrics or element layout changed since the previous frame.
    pub layout_changed: bool,
    pub era: Era,
    pub eras: &'a EraBands,
    pub tier: DeviceTier,
    pub params: &'a TierParams,
    pub elements: &'a ElementRegistry,
}

/// A mounted participant in the frame loop.
///
/// Lifetime is explicit: the coordinator calls [`Component::mounted`] on the first frame
/// after [`crate::Coordinator::mount`] and [`Component::unmount`] before dropping it, so
/// every timer, trigger and render loop a component owns ends with it.
pub trait Component {
    fn name(&self) -> &'static str;

    fn mounted(&mut self, _ctx: &FrameCtx<'_>) {}

    /// The device tier flipped; rebuild tier-dependent state.
    fn tier_changed(&mut self, _ctx: &FrameCtx<'_>) {}

    fn asset_status(&mut self, _path: &str, _status: AssetStatus) {}

    /// Recompute visual state for this frame and write it into `out`.
    fn frame(&mut self, ctx: &FrameCtx<'_>, out: &mut FrameOutput);

    fn unmount(&mut self) {}

    /// Whether the component still changes over time without new input.
    fn is_animating(&self, _now_s: f64) -> bool {
        false
    }
}
