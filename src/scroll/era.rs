use crate::{
    foundation::error::{ScrollcueError, ScrollcueResult},
    foundation::math::clamp01,
};

/// Named phase of the scroll journey, ordered from top of page to bottom.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    Early,
    Mid,
    Late,
}

impl Era {
    pub const ALL: [Era; 3] = [Era::Early, Era::Mid, Era::Late];

    /// Backdrop theme shown while this era is active.
    pub fn theme(self) -> crate::scene::backdrop::EraTheme {
        use crate::scene::backdrop::EraTheme;
        match self {
            Self::Early => EraTheme::Vintage,
            Self::Mid => EraTheme::Transition,
            Self::Late => EraTheme::Modern,
        }
    }
}

/// Threshold bands partitioning `[0, 1]` into eras.
///
/// Bands are closed-open (`[lower, upper)`) except the last, which is closed, so a value
/// on a boundary belongs to the upper band.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EraBands {
    /// Progress at which [`Era::Mid`] begins.
    pub mid_from: f64,
    /// Progress at which [`Era::Late`] begins.
    pub late_from: f64,
}

impl Default for EraBands {
    fn default() -> Self {
        Self {
            mid_from: 0.15,
            late_from: 0.40,
        }
    }
}

impl EraBands {
    pub fn new(mid_from: f64, late_from: f64) -> ScrollcueResult<Self> {
        let bands = Self {
            mid_from,
            late_from,
        };
        bands.validate()?;
        Ok(bands)
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        if !(0.0 < self.mid_from && self.mid_from < self.late_from && self.late_from < 1.0) {
            return Err(ScrollcueError::validation(
                "era bands must satisfy 0 < mid_from < late_from < 1",
            ));
        }
        Ok(())
    }

    pub fn classify(&self, progress: f64) -> Era {
        let p = clamp01(progress);
        if p < self.mid_from {
            Era::Early
        } else if p < self.late_from {
            Era::Mid
        } else {
            Era::Late
        }
    }

    /// `[lower, upper]` progress range covered by `era`.
    pub fn range(&self, era: Era) -> (f64, f64) {
        match era {
            Era::Early => (0.0, self.mid_from),
            Era::Mid => (self.mid_from, self.late_from),
            Era::Late => (self.late_from, 1.0),
        }
    }
}

/// Classify with the default bands.
pub fn classify(progress: f64) -> Era {
    EraBands::default().classify(progress)
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/era.rs"]
mod tests;
