use crate::{
    coordinator::component::AssetStatus,
    coordinator::config::CoordinatorConfig,
    coordinator::coordinator::Coordinator,
    coordinator::output::FrameOutput,
    foundation::core::{PageMetrics, Viewport},
    foundation::error::{ScrollcueError, ScrollcueResult},
    stage::model::Stage,
};

/// Recorded host input, replayed against a stage by [`simulate`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollTrace {
    pub viewport: Viewport,
    pub document_height: f64,
    /// Frame clock rate.
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Extra time rendered after the last event.
    #[serde(default)]
    pub tail_s: f64,
    pub events: Vec<TraceEvent>,
}

/// Longest trace [`simulate`] accepts: four hours at 60 fps.
pub const MAX_TRACE_FRAMES: u64 = 4 * 3600 * 60;

fn default_fps() -> f64 {
    60.0
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TraceEvent {
    pub at_s: f64,
    #[serde(flatten)]
    pub kind: TraceEventKind,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEventKind {
    Scroll {
        offset: f64,
    },
    Resize {
        width: f64,
        height: f64,
        document_height: f64,
    },
    Asset {
        path: String,
        status: AssetStatus,
    },
}

impl ScrollTrace {
    pub fn from_json(json: &str) -> ScrollcueResult<Self> {
        let trace: Self = serde_json::from_str(json)?;
        trace.validate()?;
        Ok(trace)
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        PageMetrics::new(
            Viewport::new(self.viewport.width, self.viewport.height)?,
            self.document_height,
        )?;
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(ScrollcueError::validation("trace fps must be > 0"));
        }
        if !(self.tail_s.is_finite() && self.tail_s >= 0.0) {
            return Err(ScrollcueError::validation("trace tail_s must be >= 0"));
        }
        self.frame_count()?;
        let mut last = 0.0;
        for e in &self.events {
            if !(e.at_s.is_finite() && e.at_s >= last) {
                return Err(ScrollcueError::validation(
                    "trace events must be ordered by at_s, starting at >= 0",
                ));
            }
            last = e.at_s;
        }
        Ok(())
    }

    pub fn end_s(&self) -> f64 {
        self.events.last().map_or(0.0, |e| e.at_s) + self.tail_s
    }

    /// Frames on the index-based clock, the frame at `end_s` included.
    pub fn frame_count(&self) -> ScrollcueResult<u64> {
        let last = (self.end_s() * self.fps).floor();
        if !(last.is_finite() && last < MAX_TRACE_FRAMES as f64) {
            return Err(ScrollcueError::validation(format!(
                "trace spans more than {MAX_TRACE_FRAMES} frames"
            )));
        }
        Ok(last as u64 + 1)
    }
}

/// Replay `trace` against `stage` on a fixed frame clock and collect every frame.
///
/// Events are delivered before the first frame at or after their timestamp, so several
/// events between two frames coalesce exactly as they would in a browser.
#[tracing::instrument(skip_all, fields(events = trace.events.len()))]
pub fn simulate(
    stage: Stage,
    trace: &ScrollTrace,
    cfg: CoordinatorConfig,
) -> ScrollcueResult<Vec<FrameOutput>> {
    trace.validate()?;
    let metrics = PageMetrics::new(trace.viewport, trace.document_height)?;
    let mut coord = Coordinator::new(cfg, metrics)?;
    stage.mount(&mut coord)?;

    let dt = 1.0 / trace.fps;
    // Index-based clock; accumulating dt drifts.
    let frames = trace.frame_count()?;
    let mut events = trace.events.iter().peekable();
    let mut out = Vec::with_capacity(usize::try_from(frames).unwrap_or(0));

    for i in 0..frames {
        let now_s = i as f64 * dt;
        while let Some(e) = events.next_if(|e| e.at_s <= now_s + 1e-9) {
            match &e.kind {
                TraceEventKind::Scroll { offset } => {
                    coord.on_scroll(*offset);
                }
                TraceEventKind::Resize {
                    width,
                    height,
                    document_height,
                } => {
                    coord.on_resize(Viewport::new(*width, *height)?, *document_height, e.at_s)?;
                }
                TraceEventKind::Asset { path, status } => coord.notify_asset(path, *status),
            }
        }
        out.push(coord.frame(now_s));
    }
    tracing::debug!(frames = out.len(), "simulation finished");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/coordinator/sim.rs"]
mod tests;
