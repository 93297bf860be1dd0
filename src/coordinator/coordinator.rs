use crate::{
    coordinator::component::{AssetStatus, Component, FrameCtx},
    coordinator::config::CoordinatorConfig,
    coordinator::output::FrameOutput,
    foundation::core::{FrameIndex, PageMetrics, Viewport},
    foundation::error::ScrollcueResult,
    scroll::era::Era,
    scroll::sampler::{ScrollSampler, ScrollState},
    scroll::tier::{DeviceTier, TierSelector},
    stage::element::{ElementId, ElementLayout, ElementRegistry},
};

/// Handle returned by [`Coordinator::mount`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct MountId(pub u32);

struct Mounted {
    id: MountId,
    component: Box<dyn Component>,
    /// `mounted` runs on the first frame after mounting.
    fresh: bool,
}

/// Owns the scroll state, tier and era, and drives every mounted component once per frame.
///
/// The host forwards input with [`Coordinator::on_scroll`], [`Coordinator::on_resize`] and
/// [`Coordinator::notify_asset`], then calls [`Coordinator::frame`] from its frame clock.
pub struct Coordinator {
    cfg: CoordinatorConfig,
    sampler: ScrollSampler,
    tiers: TierSelector,
    elements: ElementRegistry,
    layout_dirty: bool,
    components: Vec<Mounted>,
    next_mount: u32,
    frame: u64,
    era: Option<Era>,
}

impl Coordinator {
    pub fn new(cfg: CoordinatorConfig, metrics: PageMetrics) -> ScrollcueResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            sampler: ScrollSampler::new(cfg.sampler(), metrics),
            tiers: TierSelector::new(cfg.breakpoint_px, cfg.resize_debounce_s, metrics.viewport.width),
            elements: ElementRegistry::new(),
            layout_dirty: false,
            components: Vec::new(),
            next_mount: 0,
            frame: 0,
            era: None,
        })
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.cfg
    }

    /// Record a scroll offset. Returns `true` when the host should request a frame.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.sampler.on_scroll(offset)
    }

    /// Record a viewport or document size change.
    ///
    /// Progress is recomputed on the next frame; a tier flip commits only after the resize
    /// debounce has elapsed.
    pub fn on_resize(&mut self, viewport: Viewport, document_height: f64, now_s: f64) -> ScrollcueResult<bool> {
        let metrics = PageMetrics::new(Viewport::new(viewport.width, viewport.height)?, document_height)?;
        self.tiers.on_resize(viewport.width, now_s);
        Ok(self.sampler.on_resize(metrics))
    }

    /// Forward an asset load status to every component.
    pub fn notify_asset(&mut self, path: &str, status: AssetStatus) {
        for m in &mut self.components {
            m.component.asset_status(path, status);
        }
    }

    pub fn set_layout(&mut self, id: ElementId, layout: ElementLayout) {
        self.elements.insert(id, layout);
        self.layout_dirty = true;
    }

    pub fn remove_element(&mut self, id: &ElementId) -> Option<ElementLayout> {
        let removed = self.elements.remove(id);
        self.layout_dirty |= removed.is_some();
        removed
    }

    pub fn elements(&self) -> &ElementRegistry {
        &self.elements
    }

    pub fn mount(&mut self, component: Box<dyn Component>) -> MountId {
        let id = MountId(self.next_mount);
        self.next_mount += 1;
        tracing::debug!(id = id.0, component = component.name(), "mounted");
        self.components.push(Mounted {
            id,
            component,
            fresh: true,
        });
        id
    }

    /// Tear down and drop a component. Returns `false` for an unknown id.
    pub fn unmount(&mut self, id: MountId) -> bool {
        let Some(pos) = self.components.iter().position(|m| m.id == id) else {
            return false;
        };
        let mut m = self.components.remove(pos);
        m.component.unmount();
        tracing::debug!(id = id.0, component = m.component.name(), "unmounted");
        true
    }

    pub fn mounted_count(&self) -> usize {
        self.components.len()
    }

    pub fn tier(&self) -> DeviceTier {
        self.tiers.current()
    }

    /// Era of the last frame, if any frame ran.
    pub fn era(&self) -> Option<Era> {
        self.era
    }

    pub fn scroll(&self) -> Option<&ScrollState> {
        self.sampler.state()
    }

    /// Whether the host must keep its frame clock running.
    pub fn needs_frame(&self, now_s: f64) -> bool {
        self.sampler.has_pending()
            || self.tiers.has_pending()
            || self.sampler.state().is_some_and(|s| s.velocity != 0.0)
            || self.components.iter().any(|m| m.component.is_animating(now_s))
    }

    /// Sample pending input once and recompute every component's visual state.
    #[tracing::instrument(skip(self), fields(frame = self.frame))]
    pub fn frame(&mut self, now_s: f64) -> FrameOutput {
        let sample = self.sampler.sample(now_s);
        let tier_flip = self.tiers.poll(now_s);
        let tier = self.tiers.current();
        let params = tier.params();
        let eras = self.cfg.eras;
        let era = eras.classify(sample.state.progress);
        if self.era != Some(era) {
            tracing::debug!(from = ?self.era, to = ?era, progress = sample.state.progress, "era changed");
            self.era = Some(era);
        }
        let metrics = *self.sampler.metrics();
        let layout_dirty = std::mem::take(&mut self.layout_dirty);
        let layout_changed = sample.metrics_changed || layout_dirty;

        let frame = FrameIndex(self.frame);
        self.frame += 1;
        let mut out = FrameOutput::new(frame, now_s, sample.state, era, tier);
        let ctx = FrameCtx {
            frame,
            now_s,
            scroll: &sample.state,
            metrics: &metrics,
            layout_changed,
            era,
            eras: &eras,
            tier,
            params: &params,
            elements: &self.elements,
        };
        for m in &mut self.components {
            if m.fresh {
                m.fresh = false;
                m.component.mounted(&ctx);
            } else if tier_flip.is_some() {
                m.component.tier_changed(&ctx);
            }
            m.component.frame(&ctx, &mut out);
        }
        out
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        for m in &mut self.components {
            m.component.unmount();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/coordinator/coordinator.rs"]
mod tests;
