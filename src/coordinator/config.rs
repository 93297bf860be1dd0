use crate::{
    foundation::error::{ScrollcueError, ScrollcueResult},
    scroll::era::EraBands,
    scroll::sampler::SamplerConfig,
    scroll::tier::MOBILE_BREAKPOINT_PX,
};

/// Tunables of a [`crate::Coordinator`]. Every field has a default, so `{}` is a valid
/// config document.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Viewport widths below this are the mobile tier.
    pub breakpoint_px: f64,
    pub eras: EraBands,
    /// Quiet period after the last resize before a tier flip commits.
    pub resize_debounce_s: f64,
    pub velocity_window_s: f64,
    /// Velocity multiplier per elapsed window without scroll input.
    pub velocity_decay: f64,
    pub progress_epsilon: f64,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        let sampler = SamplerConfig::default();
        Self {
            breakpoint_px: MOBILE_BREAKPOINT_PX,
            eras: EraBands::default(),
            resize_debounce_s: 0.15,
            velocity_window_s: sampler.velocity_window_s,
            velocity_decay: sampler.velocity_decay,
            progress_epsilon: sampler.epsilon,
        }
    }
}

impl CoordinatorConfig {
    pub fn from_json(json: &str) -> ScrollcueResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        if !(self.breakpoint_px.is_finite() && self.breakpoint_px > 0.0) {
            return Err(ScrollcueError::validation("breakpoint_px must be > 0"));
        }
        self.eras.validate()?;
        if !(self.resize_debounce_s.is_finite() && self.resize_debounce_s >= 0.0) {
            return Err(ScrollcueError::validation("resize_debounce_s must be >= 0"));
        }
        if !(self.velocity_window_s.is_finite() && self.velocity_window_s > 0.0) {
            return Err(ScrollcueError::validation("velocity_window_s must be > 0"));
        }
        if !(0.0..1.0).contains(&self.velocity_decay) {
            return Err(ScrollcueError::validation(
                "velocity_decay must be within [0, 1)",
            ));
        }
        if !(self.progress_epsilon.is_finite() && self.progress_epsilon > 0.0) {
            return Err(ScrollcueError::validation("progress_epsilon must be > 0"));
        }
        Ok(())
    }

    pub fn sampler(&self) -> SamplerConfig {
        SamplerConfig {
            epsilon: self.progress_epsilon,
            velocity_window_s: self.velocity_window_s,
            velocity_decay: self.velocity_decay,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/coordinator/config.rs"]
mod tests;
