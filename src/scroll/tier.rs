/// Viewport widths below this (logical px) are the mobile tier.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Device classification gating animation complexity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceTier {
    Mobile,
    Desktop,
}

impl DeviceTier {
    pub fn from_width(width: f64) -> Self {
        Self::from_width_with(width, MOBILE_BREAKPOINT_PX)
    }

    /// No hysteresis: crossing `breakpoint` in either direction flips the tier.
    pub fn from_width_with(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }

    pub fn params(self) -> TierParams {
        match self {
            Self::Mobile => TierParams {
                reveal_offset_px: 30.0,
                reveal_subtitle_offset_px: 20.0,
                reveal_duration_s: 0.6,
                stagger_s: 0.08,
                particle_count: 400,
                shape_count: 6,
                fog_density: 0.012,
                max_pixel_ratio: 1.0,
                mascot_box_px: (200.0, 300.0),
                mascot_bottom_pct: -15.0,
            },
            Self::Desktop => TierParams {
                reveal_offset_px: 60.0,
                reveal_subtitle_offset_px: 40.0,
                reveal_duration_s: 1.0,
                stagger_s: 0.15,
                particle_count: 800,
                shape_count: 12,
                fog_density: 0.008,
                max_pixel_ratio: 2.0,
                mascot_box_px: (500.0, 500.0),
                mascot_bottom_pct: -5.0,
            },
        }
    }
}

/// Per-tier magnitudes shared by every component.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TierParams {
    pub reveal_offset_px: f64,
    pub reveal_subtitle_offset_px: f64,
    pub reveal_duration_s: f64,
    pub stagger_s: f64,
    pub particle_count: usize,
    pub shape_count: usize,
    pub fog_density: f64,
    pub max_pixel_ratio: f64,
    /// Mascot container (width, height).
    pub mascot_box_px: (f64, f64),
    /// Mascot container bottom offset, percent of viewport height.
    pub mascot_bottom_pct: f64,
}

/// Tracks the active tier, committing width changes only after resizing settles.
#[derive(Clone, Debug)]
pub struct TierSelector {
    breakpoint: f64,
    debounce_s: f64,
    current: DeviceTier,
    pending: Option<(f64, f64)>, // (width, deadline)
}

impl TierSelector {
    pub fn new(breakpoint: f64, debounce_s: f64, initial_width: f64) -> Self {
        Self {
            breakpoint,
            debounce_s,
            current: DeviceTier::from_width_with(initial_width, breakpoint),
            pending: None,
        }
    }

    pub fn current(&self) -> DeviceTier {
        self.current
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a resize; each call pushes the commit deadline out.
    pub fn on_resize(&mut self, width: f64, now_s: f64) {
        self.pending = Some((width, now_s + self.debounce_s));
    }

    /// Commit a settled resize. Returns the new tier if it changed.
    pub fn poll(&mut self, now_s: f64) -> Option<DeviceTier> {
        let (width, deadline) = self.pending?;
        if now_s < deadline {
            return None;
        }
        self.pending = None;
        let next = DeviceTier::from_width_with(width, self.breakpoint);
        if next == self.current {
            return None;
        }
        tracing::debug!(?next, width, "device tier changed");
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tier.rs"]
mod tests;
