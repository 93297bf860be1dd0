use crate::{
    animation::ease::Ease,
    animation::tween::Lerp,
    foundation::error::{ScrollcueError, ScrollcueResult},
    foundation::math::{clamp01, window_t},
};

/// One ordered window of a multi-phase animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseWindow<T> {
    /// Upper bound of this window on the overall `t` axis. The lower bound is the previous
    /// window's `end` (or 0).
    pub end: f64,
    /// Value reached at the end of the window.
    pub to: T,
    #[serde(default)]
    pub ease: Ease,
}

/// A fixed-duration animation split into ordered, independently eased phases that
/// partition `[0, 1]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhasedAnimation<T> {
    pub start: T,
    pub phases: Vec<PhaseWindow<T>>,
    pub duration_s: f64,
}

/// Position inside a [`PhasedAnimation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhasePoint {
    pub phase: usize,
    /// Phase-local parameter in `[0, 1]`.
    pub t: f64,
}

impl<T> PhasedAnimation<T>
where
    T: Lerp + Clone,
{
    pub fn new(start: T, phases: Vec<PhaseWindow<T>>, duration_s: f64) -> ScrollcueResult<Self> {
        let anim = Self {
            start,
            phases,
            duration_s,
        };
        anim.validate()?;
        Ok(anim)
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        if !(self.duration_s.is_finite() && self.duration_s > 0.0) {
            return Err(ScrollcueError::animation(
                "phased animation duration must be > 0",
            ));
        }
        let Some(last) = self.phases.last() else {
            return Err(ScrollcueError::animation(
                "phased animation needs at least one phase",
            ));
        };
        let mut lower = 0.0;
        for p in &self.phases {
            if !(p.end > lower && p.end <= 1.0) {
                return Err(ScrollcueError::animation(
                    "phase windows must be strictly increasing within (0, 1]",
                ));
            }
            lower = p.end;
        }
        if last.end != 1.0 {
            return Err(ScrollcueError::animation("last phase window must end at 1"));
        }
        Ok(())
    }

    pub fn end_value(&self) -> &T {
        // validate() guarantees a last phase
        self.phases
            .last()
            .map_or(&self.start, |p| &p.to)
    }

    fn bounds(&self, phase: usize) -> (f64, f64) {
        let lower = if phase == 0 {
            0.0
        } else {
            self.phases[phase - 1].end
        };
        (lower, self.phases[phase].end)
    }

    /// Which phase is active at overall `t`; windows are closed-open, the last closed.
    pub fn locate(&self, t: f64) -> PhasePoint {
        let t = clamp01(t);
        let last = self.phases.len().saturating_sub(1);
        let phase = self
            .phases
            .iter()
            .position(|p| t < p.end)
            .unwrap_or(last);
        let (lower, upper) = self.bounds(phase);
        PhasePoint {
            phase,
            t: window_t(t, lower, upper),
        }
    }

    /// Value at a located point.
    pub fn value_at_point(&self, point: PhasePoint) -> T {
        let window = &self.phases[point.phase];
        if point.t >= 1.0 {
            return window.to.clone();
        }
        let from = if point.phase == 0 {
            &self.start
        } else {
            &self.phases[point.phase - 1].to
        };
        T::lerp(from, &window.to, window.ease.apply(point.t))
    }

    /// Value at overall normalized `t` (clamped).
    pub fn sample(&self, t: f64) -> T {
        self.value_at_point(self.locate(t))
    }
}

/// Frame-clock driven state of a one-shot entrance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EntranceState {
    Idle,
    Entering { phase: usize, t: f64 },
    Settled,
}

/// One-shot phased entrance: `Idle -> Entering -> Settled`.
///
/// Teardown is a single [`EntranceMachine::reset`].
#[derive(Clone, Debug)]
pub struct EntranceMachine<T> {
    anim: PhasedAnimation<T>,
    state: EntranceState,
    started_at_s: Option<f64>,
}

impl<T> EntranceMachine<T>
where
    T: Lerp + Clone,
{
    pub fn new(anim: PhasedAnimation<T>) -> Self {
        Self {
            anim,
            state: EntranceState::Idle,
            started_at_s: None,
        }
    }

    pub fn state(&self) -> EntranceState {
        self.state
    }

    pub fn animation(&self) -> &PhasedAnimation<T> {
        &self.anim
    }

    /// Begin entering at `now_s`; ignored unless idle.
    pub fn start(&mut self, now_s: f64) {
        if self.state == EntranceState::Idle {
            self.started_at_s = Some(now_s);
            self.state = EntranceState::Entering { phase: 0, t: 0.0 };
        }
    }

    /// Jump straight to the settled state.
    pub fn settle(&mut self) {
        self.state = EntranceState::Settled;
    }

    pub fn reset(&mut self) {
        self.state = EntranceState::Idle;
        self.started_at_s = None;
    }

    /// Advance to `now_s` and return the current value.
    pub fn advance(&mut self, now_s: f64) -> T {
        match self.state {
            EntranceState::Idle => self.anim.start.clone(),
            EntranceState::Settled => self.anim.end_value().clone(),
            EntranceState::Entering { .. } => {
                let started = self.started_at_s.unwrap_or(now_s);
                let overall = (now_s - started) / self.anim.duration_s;
                if overall >= 1.0 {
                    self.state = EntranceState::Settled;
                    return self.anim.end_value().clone();
                }
                let point = self.anim.locate(overall);
                self.state = EntranceState::Entering {
                    phase: point.phase,
                    t: point.t,
                };
                self.anim.value_at_point(point)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phased.rs"]
mod tests;
