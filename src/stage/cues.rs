use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::executor::{LoopMode, PlayDirection, RestAt, TransitionExecutor},
    animation::tween::{TransitionSpec, apply_specs},
    coordinator::component::{Component, FrameCtx},
    coordinator::output::FrameOutput,
    foundation::error::ScrollcueResult,
    scroll::tier::DeviceTier,
    stage::model::{Cue, CueKind},
    trigger::scheduler::{FireDirection, TriggerId, TriggerScheduler},
};

/// How one cue is driven on the current tier.
#[derive(Clone, Debug)]
enum Binding {
    /// Leaves the element untouched: disabled scrubs and rejected cues.
    Rest,
    /// Played by the executor; reveals wait for their trigger.
    Timeline,
    Scrub(Vec<TransitionSpec>),
}

/// Every cue of a stage, with the triggers and timelines that drive them.
///
/// Triggers and timelines are rebuilt whenever the device tier flips and dropped on
/// unmount.
#[derive(Debug)]
pub struct CueSet {
    cues: Vec<Cue>,
    bindings: Vec<Binding>,
    scheduler: TriggerScheduler,
    executor: TransitionExecutor<usize>,
    triggers: BTreeMap<TriggerId, usize>,
    /// Reveal cues whose element was absent at registration time.
    unregistered: Vec<usize>,
    built_for: Option<DeviceTier>,
}

impl CueSet {
    pub fn new(cues: Vec<Cue>) -> ScrollcueResult<Self> {
        for cue in &cues {
            cue.validate()?;
        }
        Ok(Self {
            cues,
            bindings: Vec::new(),
            scheduler: TriggerScheduler::new(),
            executor: TransitionExecutor::new(),
            triggers: BTreeMap::new(),
            unregistered: Vec::new(),
            built_for: None,
        })
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn trigger_count(&self) -> usize {
        self.scheduler.len()
    }

    fn teardown(&mut self) {
        self.bindings.clear();
        self.scheduler.clear();
        self.executor.clear();
        self.triggers.clear();
        self.unregistered.clear();
        self.built_for = None;
    }

    /// (Re)build bindings for `ctx.tier`.
    ///
    /// On a rebuild, reveals that already played and one-shot entrances rest at their end
    /// so a tier flip never replays what the visitor has seen.
    fn build(&mut self, ctx: &FrameCtx<'_>) {
        let rebuild = self.built_for.is_some();
        let entered: BTreeSet<usize> = match self.built_for {
            Some(prev) => self
                .cues
                .iter()
                .enumerate()
                .filter(|(_, cue)| matches!(cue.for_tier(prev), Some(CueKind::Entrance { .. })))
                .map(|(idx, _)| idx)
                .collect(),
            None => BTreeSet::new(),
        };
        let revealed: BTreeSet<usize> = self
            .triggers
            .iter()
            .filter(|(id, _)| self.scheduler.get(**id).is_some_and(|t| t.fired))
            .map(|(_, idx)| *idx)
            .collect();
        self.teardown();

        for (idx, cue) in self.cues.iter().enumerate() {
            let Some(kind) = cue.for_tier(ctx.tier) else {
                // Disabled here: timelines hold their final values, scrubs stay put.
                let binding = match cue.kind.timeline() {
                    Ok(Some(timeline)) => {
                        self.executor.insert(idx, timeline, RestAt::End);
                        Binding::Timeline
                    }
                    _ => Binding::Rest,
                };
                self.bindings.push(binding);
                continue;
            };
            let binding = match kind.timeline() {
                Ok(Some(timeline)) => {
                    let (rest, play) = match kind {
                        CueKind::Reveal { .. } if revealed.contains(&idx) => (RestAt::End, false),
                        CueKind::Reveal { .. } => (RestAt::Start, false),
                        CueKind::Entrance { loop_mode, .. } => {
                            if *loop_mode == LoopMode::Once && entered.contains(&idx) {
                                (RestAt::End, false)
                            } else {
                                (RestAt::Start, true)
                            }
                        }
                        CueKind::Scrub { .. } => (RestAt::Start, false),
                    };
                    self.executor.insert(idx, timeline, rest);
                    if play {
                        self.executor.play(&idx, PlayDirection::Forward, ctx.now_s);
                    }
                    Binding::Timeline
                }
                Ok(None) => Binding::Scrub(kind.specs().to_vec()),
                Err(err) => {
                    // specs were validated in new(); keep the element visible regardless
                    tracing::warn!(element = %cue.element, %err, "cue rejected");
                    Binding::Rest
                }
            };
            self.bindings.push(binding);
            if matches!(kind, CueKind::Reveal { .. }) {
                self.unregistered.push(idx);
            }
        }
        self.register_pending(ctx);
        self.built_for = Some(ctx.tier);
        tracing::debug!(
            tier = ?ctx.tier,
            cues = self.cues.len(),
            triggers = self.scheduler.len(),
            rebuild,
            "cues built"
        );
    }

    fn register_pending(&mut self, ctx: &FrameCtx<'_>) {
        let pending = std::mem::take(&mut self.unregistered);
        for idx in pending {
            let cue = &self.cues[idx];
            let Some(CueKind::Reveal { band, policy, .. }) = cue.for_tier(ctx.tier) else {
                continue;
            };
            match self.scheduler.register(
                cue.element.clone(),
                *band,
                *policy,
                ctx.elements,
                ctx.metrics,
            ) {
                Some(id) => {
                    self.triggers.insert(id, idx);
                }
                None => self.unregistered.push(idx),
            }
        }
    }
}

impl Component for CueSet {
    fn name(&self) -> &'static str {
        "cues"
    }

    fn mounted(&mut self, ctx: &FrameCtx<'_>) {
        self.build(ctx);
    }

    fn tier_changed(&mut self, ctx: &FrameCtx<'_>) {
        self.build(ctx);
    }

    fn frame(&mut self, ctx: &FrameCtx<'_>, out: &mut FrameOutput) {
        if self.built_for != Some(ctx.tier) {
            self.build(ctx);
        } else if ctx.layout_changed {
            self.scheduler.refresh(ctx.elements, ctx.metrics);
            self.register_pending(ctx);
        }

        for fire in self.scheduler.update(ctx.scroll.progress) {
            let Some(&idx) = self.triggers.get(&fire.id) else {
                continue;
            };
            let direction = match fire.direction {
                FireDirection::Forward => PlayDirection::Forward,
                FireDirection::Reverse => PlayDirection::Reverse,
            };
            self.executor.play(&idx, direction, ctx.now_s);
        }

        for (idx, (cue, binding)) in self.cues.iter().zip(&self.bindings).enumerate() {
            if !ctx.elements.contains(&cue.element) {
                continue;
            }
            let base = out
                .elements
                .get(&cue.element)
                .copied()
                .unwrap_or_default();
            let state = match binding {
                Binding::Rest => base,
                Binding::Timeline => self
                    .executor
                    .sample(&idx, ctx.now_s, base)
                    .unwrap_or(base),
                Binding::Scrub(specs) => apply_specs(specs, false, ctx.scroll.progress, base),
            };
            out.elements.insert(cue.element.clone(), state);
        }
    }

    fn unmount(&mut self) {
        self.teardown();
    }

    fn is_animating(&self, now_s: f64) -> bool {
        self.executor.is_animating(now_s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/cues.rs"]
mod tests;
