use crate::{
    foundation::core::PageMetrics,
    foundation::math::clamp01,
};

/// Velocities below this magnitude (px/s) snap to zero while decaying.
const VELOCITY_FLOOR: f64 = 0.5;

/// Current scroll position as seen by every consumer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollState {
    /// Raw offset reported by the host, in px. May be negative during overscroll.
    pub raw_offset: f64,
    /// Normalized scroll progress, always within `[0, 1]`.
    pub progress: f64,
    /// Signed scroll velocity in px/s.
    pub velocity: f64,
}

/// Tuning for [`ScrollSampler`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerConfig {
    pub epsilon: f64,
    pub velocity_window_s: f64,
    pub velocity_decay: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            velocity_window_s: 0.1,
            velocity_decay: 0.9,
        }
    }
}

/// Normalized progress for `offset`; zero when the page cannot scroll.
pub fn progress_for(offset: f64, metrics: &PageMetrics, epsilon: f64) -> f64 {
    if metrics.document_height <= metrics.viewport.height {
        return 0.0;
    }
    clamp01(offset / metrics.scroll_range().max(epsilon))
}

/// Result of one [`ScrollSampler::sample`] pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub state: ScrollState,
    /// A new offset or new metrics were folded in.
    pub changed: bool,
    pub metrics_changed: bool,
}

/// Single writer of [`ScrollState`].
///
/// Host events only record pending input; [`ScrollSampler::sample`] folds everything that
/// arrived since the previous frame into one new state.
#[derive(Clone, Debug)]
pub struct ScrollSampler {
    cfg: SamplerConfig,
    metrics: PageMetrics,
    state: Option<ScrollState>,
    pending_offset: Option<f64>,
    pending_metrics: Option<PageMetrics>,
    frame_requested: bool,
    last_input_s: Option<f64>,
    last_decay_s: f64,
}

impl ScrollSampler {
    pub fn new(cfg: SamplerConfig, metrics: PageMetrics) -> Self {
        Self {
            cfg,
            metrics,
            state: None,
            pending_offset: None,
            pending_metrics: None,
            frame_requested: false,
            last_input_s: None,
            last_decay_s: 0.0,
        }
    }

    /// Record a scroll event. Returns `true` when the host must request a frame; further
    /// events before that frame are coalesced and return `false`.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.pending_offset = Some(offset);
        self.request_frame()
    }

    /// Record new page metrics, same coalescing contract as [`Self::on_scroll`].
    pub fn on_resize(&mut self, metrics: PageMetrics) -> bool {
        self.pending_metrics = Some(metrics);
        self.request_frame()
    }

    fn request_frame(&mut self) -> bool {
        let first = !self.frame_requested;
        self.frame_requested = true;
        first
    }

    pub fn has_pending(&self) -> bool {
        self.pending_offset.is_some() || self.pending_metrics.is_some()
    }

    pub fn state(&self) -> Option<&ScrollState> {
        self.state.as_ref()
    }

    pub fn metrics(&self) -> &PageMetrics {
        &self.metrics
    }

    /// Fold pending input into the state. The first call creates the state.
    pub fn sample(&mut self, now_s: f64) -> Sample {
        self.frame_requested = false;
        let metrics_changed = match self.pending_metrics.take() {
            Some(m) => {
                let changed = m != self.metrics;
                self.metrics = m;
                changed
            }
            None => false,
        };
        let new_offset = self.pending_offset.take();

        let prev = self.state;
        let offset = new_offset
            .or(prev.map(|s| s.raw_offset))
            .unwrap_or(0.0);
        let velocity = match (new_offset, prev, self.last_input_s) {
            (Some(o), Some(p), Some(last)) if now_s > last => (o - p.raw_offset) / (now_s - last),
            (Some(_), Some(p), _) => p.velocity,
            (Some(_), None, _) => 0.0,
            (None, Some(p), _) => self.decayed(p.velocity, now_s),
            (None, None, _) => 0.0,
        };
        if new_offset.is_some() {
            self.last_input_s = Some(now_s);
            self.last_decay_s = now_s;
        }

        let state = ScrollState {
            raw_offset: offset,
            progress: progress_for(offset, &self.metrics, self.cfg.epsilon),
            velocity,
        };
        self.state = Some(state);
        Sample {
            state,
            changed: new_offset.is_some() || metrics_changed || prev.is_none(),
            metrics_changed,
        }
    }

    fn decayed(&mut self, velocity: f64, now_s: f64) -> f64 {
        let window = self.cfg.velocity_window_s;
        if velocity == 0.0 || window <= 0.0 {
            return velocity;
        }
        let windows = ((now_s - self.last_decay_s) / window).floor();
        if windows < 1.0 {
            return velocity;
        }
        self.last_decay_s += windows * window;
        let v = velocity * self.cfg.velocity_decay.powi(windows as i32);
        if v.abs() < VELOCITY_FLOOR { 0.0 } else { v }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/sampler.rs"]
mod tests;
