use crate::{
    foundation::core::PageMetrics,
    stage::element::{ElementId, ElementRegistry},
    trigger::band::{BandDef, TriggerBand},
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TriggerId(pub u32);

/// Whether a trigger re-fires when its element re-enters the band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayPolicy {
    /// Forward once, the first time the element is in its band. Never reverses.
    Once,
    /// Forward on entering, reverse on leaving in either direction.
    Toggle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireDirection {
    Forward,
    Reverse,
}

/// A registered (element, band, policy) tuple.
#[derive(Clone, Debug, PartialEq)]
pub struct Trigger {
    pub id: TriggerId,
    pub target: ElementId,
    pub def: BandDef,
    pub band: TriggerBand,
    pub policy: ReplayPolicy,
    /// For `Once`: has fired. For `Toggle`: the forward transition is the last one played.
    pub fired: bool,
    /// Membership as of the last update.
    pub inside: bool,
}

/// Emitted when a trigger's transition should play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerFire {
    pub id: TriggerId,
    pub target: ElementId,
    pub direction: FireDirection,
}

/// Decides when element entrance/exit transitions fire from scroll progress.
#[derive(Clone, Debug, Default)]
pub struct TriggerScheduler {
    next_id: u32,
    triggers: Vec<Trigger>,
}

impl TriggerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger for `target`.
    ///
    /// Returns `None` (and registers nothing) when the element is absent or the band cannot
    /// be resolved.
    pub fn register(
        &mut self,
        target: ElementId,
        def: BandDef,
        policy: ReplayPolicy,
        elements: &ElementRegistry,
        metrics: &PageMetrics,
    ) -> Option<TriggerId> {
        let Some(layout) = elements.get(&target) else {
            tracing::debug!(element = %target, "trigger target absent; registration skipped");
            return None;
        };
        let band = match def.resolve(layout, metrics) {
            Ok(band) => band,
            Err(err) => {
                tracing::debug!(element = %target, %err, "trigger band unresolvable; registration skipped");
                return None;
            }
        };
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.triggers.push(Trigger {
            id,
            target,
            def,
            band,
            policy,
            fired: false,
            inside: false,
        });
        Some(id)
    }

    pub fn unregister(&mut self, id: TriggerId) -> bool {
        let before = self.triggers.len();
        self.triggers.retain(|t| t.id != id);
        self.triggers.len() != before
    }

    pub fn clear(&mut self) {
        self.triggers.clear();
    }

    pub fn get(&self, id: TriggerId) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Re-resolve anchored bands after layout or metrics change. Triggers whose element
    /// disappeared keep their last band.
    pub fn refresh(&mut self, elements: &ElementRegistry, metrics: &PageMetrics) {
        for t in &mut self.triggers {
            if let Some(band) = elements
                .get(&t.target)
                .and_then(|layout| t.def.resolve(layout, metrics).ok())
            {
                t.band = band;
            }
        }
    }

    /// Evaluate membership at `progress`, once per tick.
    ///
    /// Only the membership at this tick matters; anything that happened between ticks is
    /// not replayed.
    pub fn update(&mut self, progress: f64) -> Vec<TriggerFire> {
        let mut fires = Vec::new();
        for t in &mut self.triggers {
            let inside = t.band.contains(progress);
            let was_inside = std::mem::replace(&mut t.inside, inside);
            let direction = match t.policy {
                ReplayPolicy::Once => {
                    if inside && !t.fired {
                        t.fired = true;
                        Some(FireDirection::Forward)
                    } else {
                        None
                    }
                }
                ReplayPolicy::Toggle => match (was_inside, inside) {
                    (false, true) => Some(FireDirection::Forward),
                    (true, false) => Some(FireDirection::Reverse),
                    _ => None,
                },
            };
            if t.policy == ReplayPolicy::Toggle {
                t.fired = inside;
            }
            if let Some(direction) = direction {
                tracing::debug!(id = t.id.0, element = %t.target, ?direction, progress, "trigger fired");
                fires.push(TriggerFire {
                    id: t.id,
                    target: t.target.clone(),
                    direction,
                });
            }
        }
        fires
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/scheduler.rs"]
mod tests;
