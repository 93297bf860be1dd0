use crate::{
    foundation::core::PageMetrics,
    foundation::error::{ScrollcueError, ScrollcueResult},
    foundation::math::clamp01,
    stage::element::ElementLayout,
};

/// Closed progress interval `[start, end]` in which a trigger counts as "in view".
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerBand {
    pub start: f64,
    pub end: f64,
}

impl TriggerBand {
    pub fn new(start: f64, end: f64) -> ScrollcueResult<Self> {
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) || start > end {
            return Err(ScrollcueError::validation(format!(
                "trigger band [{start}, {end}] must satisfy 0 <= start <= end <= 1"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, progress: f64) -> bool {
        self.start <= progress && progress <= self.end
    }
}

/// Which edge of the element an anchor tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }
}

/// "When `edge` of the element reaches `viewport` (fraction from the viewport top)".
///
/// `ScrollAnchor { edge: Top, viewport: 0.75 }` fires once the element's top has scrolled
/// up to three quarters of the way down the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollAnchor {
    pub edge: Edge,
    pub viewport: f64,
}

impl ScrollAnchor {
    pub const fn new(edge: Edge, viewport: f64) -> Self {
        Self { edge, viewport }
    }

    /// Scroll offset (px) at which the anchor condition is met.
    pub fn offset(&self, layout: &ElementLayout, viewport_height: f64) -> f64 {
        layout.top + self.edge.fraction() * layout.height - self.viewport * viewport_height
    }
}

fn default_end_anchor() -> ScrollAnchor {
    ScrollAnchor::new(Edge::Bottom, 0.0)
}

/// Declared trigger band, either in progress units or relative to the element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "units", rename_all = "snake_case")]
pub enum BandDef {
    Progress {
        start: f64,
        end: f64,
    },
    Anchored {
        start: ScrollAnchor,
        /// Defaults to the element's bottom leaving through the viewport top.
        #[serde(default = "default_end_anchor")]
        end: ScrollAnchor,
    },
    /// From the anchor to the end of the page: scrolling past never leaves the band, only
    /// scrolling back above the anchor does.
    UntilEnd { start: ScrollAnchor },
}

impl BandDef {
    pub fn progress(start: f64, end: f64) -> Self {
        Self::Progress { start, end }
    }

    /// Anchored band ending when the element has scrolled fully out of the top.
    pub fn anchored(edge: Edge, viewport: f64) -> Self {
        Self::Anchored {
            start: ScrollAnchor::new(edge, viewport),
            end: default_end_anchor(),
        }
    }

    pub fn until_end(edge: Edge, viewport: f64) -> Self {
        Self::UntilEnd {
            start: ScrollAnchor::new(edge, viewport),
        }
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        let anchors = match *self {
            Self::Progress { start, end } => return TriggerBand::new(start, end).map(|_| ()),
            Self::Anchored { start, end } => vec![start, end],
            Self::UntilEnd { start } => vec![start],
        };
        if anchors.iter().any(|a| !a.viewport.is_finite()) {
            return Err(ScrollcueError::validation(
                "anchor viewport fraction must be finite",
            ));
        }
        Ok(())
    }

    /// Resolve into progress units for the current layout.
    pub fn resolve(&self, layout: &ElementLayout, metrics: &PageMetrics) -> ScrollcueResult<TriggerBand> {
        match *self {
            Self::Progress { start, end } => TriggerBand::new(start, end),
            Self::Anchored { start, end } => {
                let (a, b) = (
                    anchor_progress(start, layout, metrics),
                    anchor_progress(end, layout, metrics),
                );
                TriggerBand::new(a.min(b), a.max(b))
            }
            Self::UntilEnd { start } => {
                if metrics.scroll_range() <= 0.0 {
                    return TriggerBand::new(0.0, 0.0);
                }
                TriggerBand::new(anchor_progress(start, layout, metrics), 1.0)
            }
        }
    }
}

fn anchor_progress(anchor: ScrollAnchor, layout: &ElementLayout, metrics: &PageMetrics) -> f64 {
    let range = metrics.scroll_range();
    if range <= 0.0 {
        0.0
    } else {
        clamp01(anchor.offset(layout, metrics.viewport.height) / range)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/band.rs"]
mod tests;
