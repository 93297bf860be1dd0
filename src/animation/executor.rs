use std::collections::BTreeMap;

use crate::{
    animation::tween::{TransitionSpec, apply_specs},
    foundation::core::VisualState,
    foundation::error::{ScrollcueError, ScrollcueResult},
};

/// How a timeline behaves once its last spec has finished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Play once and hold the final state.
    #[default]
    Once,
    /// Restart from the beginning.
    Repeat,
    /// Alternate forward and backward.
    PingPong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayDirection {
    Forward,
    Reverse,
}

/// Ordered set of time-driven specs sharing one clock.
#[derive(Clone, Debug)]
pub struct Timeline {
    specs: Vec<TransitionSpec>,
    duration_s: f64,
    loop_mode: LoopMode,
}

impl Timeline {
    pub fn new(specs: Vec<TransitionSpec>, loop_mode: LoopMode) -> ScrollcueResult<Self> {
        for spec in &specs {
            spec.validate()?;
            if !spec.is_time_driven() {
                return Err(ScrollcueError::animation(
                    "timeline specs must be time-driven",
                ));
            }
        }
        let duration_s = specs.iter().map(TransitionSpec::end_s).fold(0.0, f64::max);
        if loop_mode != LoopMode::Once && duration_s <= 0.0 {
            return Err(ScrollcueError::animation(
                "looping timelines need a positive duration",
            ));
        }
        Ok(Self {
            specs,
            duration_s,
            loop_mode,
        })
    }

    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// Visual state at timeline position `position_s`, applied over `base`.
    pub fn state_at(&self, position_s: f64, base: VisualState) -> VisualState {
        apply_specs(&self.specs, true, position_s, base)
    }

    /// Map unbounded elapsed play time onto the timeline for looping modes.
    fn wrap(&self, elapsed_s: f64) -> f64 {
        let d = self.duration_s;
        match self.loop_mode {
            LoopMode::Once => elapsed_s.clamp(0.0, d),
            LoopMode::Repeat => elapsed_s.rem_euclid(d),
            LoopMode::PingPong => {
                let m = elapsed_s.rem_euclid(2.0 * d);
                if m <= d { m } else { 2.0 * d - m }
            }
        }
    }
}

/// One running playback of a timeline.
///
/// A playback never changes direction mid-flight; reversing starts a new playback from the
/// current position.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Playback {
    direction: PlayDirection,
    started_at_s: f64,
    start_pos_s: f64,
}

impl Playback {
    fn position(&self, now_s: f64, timeline: &Timeline) -> f64 {
        let elapsed = (now_s - self.started_at_s).max(0.0);
        match (self.direction, timeline.loop_mode) {
            (PlayDirection::Forward, LoopMode::Once) => {
                (self.start_pos_s + elapsed).min(timeline.duration_s)
            }
            (PlayDirection::Forward, _) => timeline.wrap(self.start_pos_s + elapsed),
            (PlayDirection::Reverse, _) => (self.start_pos_s - elapsed).max(0.0),
        }
    }

    fn is_finished(&self, now_s: f64, timeline: &Timeline) -> bool {
        match (self.direction, timeline.loop_mode) {
            (PlayDirection::Forward, LoopMode::Once) => {
                self.position(now_s, timeline) >= timeline.duration_s
            }
            (PlayDirection::Forward, _) => false,
            (PlayDirection::Reverse, _) => self.position(now_s, timeline) <= 0.0,
        }
    }
}

/// Where an idle track rests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestAt {
    /// Hold the timeline's initial values (hidden until played).
    Start,
    /// Hold the final values.
    End,
}

#[derive(Clone, Debug)]
struct Track {
    timeline: Timeline,
    playback: Option<Playback>,
    rest: RestAt,
}

impl Track {
    fn position(&self, now_s: f64) -> f64 {
        match &self.playback {
            Some(p) => p.position(now_s, &self.timeline),
            None => match self.rest {
                RestAt::Start => 0.0,
                RestAt::End => self.timeline.duration_s,
            },
        }
    }
}

/// Drives time-based timelines keyed by `K`.
#[derive(Clone, Debug)]
pub struct TransitionExecutor<K> {
    tracks: BTreeMap<K, Track>,
}

impl<K> Default for TransitionExecutor<K> {
    fn default() -> Self {
        Self {
            tracks: BTreeMap::new(),
        }
    }
}

impl<K> TransitionExecutor<K>
where
    K: Ord + Clone + std::fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the timeline for `key`, idle at `rest`.
    pub fn insert(&mut self, key: K, timeline: Timeline, rest: RestAt) {
        self.tracks.insert(
            key,
            Track {
                timeline,
                playback: None,
                rest,
            },
        );
    }

    pub fn remove(&mut self, key: &K) -> bool {
        self.tracks.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Start playing `key` in `direction` from wherever it currently is.
    ///
    /// Returns `false` when no timeline is registered under `key`.
    pub fn play(&mut self, key: &K, direction: PlayDirection, now_s: f64) -> bool {
        let Some(track) = self.tracks.get_mut(key) else {
            return false;
        };
        let start_pos_s = track.position(now_s);
        track.playback = Some(Playback {
            direction,
            started_at_s: now_s,
            start_pos_s,
        });
        true
    }

    /// Timeline position of `key` at `now_s`.
    pub fn position(&self, key: &K, now_s: f64) -> Option<f64> {
        self.tracks.get(key).map(|t| t.position(now_s))
    }

    /// Visual state of `key` at `now_s`, applied over `base`.
    pub fn sample(&self, key: &K, now_s: f64, base: VisualState) -> Option<VisualState> {
        let track = self.tracks.get(key)?;
        Some(track.timeline.state_at(track.position(now_s), base))
    }

    /// Whether any playback still changes state after `now_s`.
    pub fn is_animating(&self, now_s: f64) -> bool {
        self.tracks.values().any(|t| {
            t.playback
                .as_ref()
                .is_some_and(|p| !p.is_finished(now_s, &t.timeline))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/executor.rs"]
mod tests;
