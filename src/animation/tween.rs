use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8, Vec2, Vec3, VisualState},
    foundation::error::{ScrollcueError, ScrollcueResult},
    foundation::math::{clamp01, lerp, window_t},
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
    }
}

impl Lerp for Vec3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            lerp(f64::from(a), f64::from(b), t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

impl Lerp for VisualState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: lerp(a.opacity, b.opacity, t),
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            scale: lerp(a.scale, b.scale, t),
            rotation_rad: lerp(a.rotation_rad, b.rotation_rad, t),
        }
    }
}

/// Animatable property of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    /// Horizontal offset in px.
    X,
    /// Vertical offset in px.
    Y,
    Scale,
    /// Rotation in radians.
    Rotation,
}

impl Property {
    /// Whether the property moves the element (anything but opacity).
    pub fn is_transform(self) -> bool {
        !matches!(self, Self::Opacity)
    }

    pub fn apply(self, state: &mut VisualState, value: f64) {
        match self {
            Self::Opacity => state.opacity = clamp01(value),
            Self::X => state.translate.x = value,
            Self::Y => state.translate.y = value,
            Self::Scale => state.scale = value,
            Self::Rotation => state.rotation_rad = value,
        }
    }
}

/// What drives a transition's parameter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Drive {
    /// Wall-clock seconds since the owning timeline started.
    Time {
        #[serde(default)]
        delay_s: f64,
        duration_s: f64,
    },
    /// Scroll progress window `[start, end]` within `[0, 1]`.
    Progress { start: f64, end: f64 },
}

/// One visual interpolation of a single property.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionSpec {
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub drive: Drive,
    #[serde(default)]
    pub ease: Ease,
}

impl TransitionSpec {
    /// Time-driven transition starting immediately.
    pub fn time(property: Property, from: f64, to: f64, duration_s: f64) -> Self {
        Self {
            property,
            from,
            to,
            drive: Drive::Time {
                delay_s: 0.0,
                duration_s,
            },
            ease: Ease::Linear,
        }
    }

    /// Progress-driven transition over the scroll window `[start, end]`.
    pub fn scrub(property: Property, from: f64, to: f64, start: f64, end: f64) -> Self {
        Self {
            property,
            from,
            to,
            drive: Drive::Progress { start, end },
            ease: Ease::Linear,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Set the start delay; no effect on progress-driven specs.
    pub fn with_delay(mut self, delay: f64) -> Self {
        if let Drive::Time { delay_s, .. } = &mut self.drive {
            *delay_s = delay;
        }
        self
    }

    pub fn is_time_driven(&self) -> bool {
        matches!(self.drive, Drive::Time { .. })
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        if !(self.from.is_finite() && self.to.is_finite()) {
            return Err(ScrollcueError::animation(format!(
                "{:?} transition endpoints must be finite",
                self.property
            )));
        }
        match self.drive {
            Drive::Time {
                delay_s,
                duration_s,
            } => {
                if !(delay_s.is_finite() && delay_s >= 0.0) {
                    return Err(ScrollcueError::animation("delay_s must be >= 0"));
                }
                if !(duration_s.is_finite() && duration_s >= 0.0) {
                    return Err(ScrollcueError::animation("duration_s must be >= 0"));
                }
            }
            Drive::Progress { start, end } => {
                if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) || start > end {
                    return Err(ScrollcueError::animation(
                        "progress window must satisfy 0 <= start <= end <= 1",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Value at normalized parameter `t`; `t` is clamped, never extrapolated.
    pub fn value_at(&self, t: f64) -> f64 {
        let t = clamp01(t);
        if t >= 1.0 {
            return self.to;
        }
        lerp(self.from, self.to, self.ease.apply(t))
    }

    /// Last instant at which a time-driven spec still changes.
    pub fn end_s(&self) -> f64 {
        match self.drive {
            Drive::Time {
                delay_s,
                duration_s,
            } => delay_s + duration_s,
            Drive::Progress { .. } => 0.0,
        }
    }

    /// Normalized parameter for a driving value: seconds or scroll progress, per the drive.
    pub fn driving_t(&self, driver: f64) -> f64 {
        match self.drive {
            Drive::Time {
                delay_s,
                duration_s,
            } => window_t(driver, delay_s, delay_s + duration_s),
            Drive::Progress { start, end } => window_t(clamp01(driver), start, end),
        }
    }

    pub fn sample(&self, driver: f64) -> f64 {
        self.value_at(self.driving_t(driver))
    }
}

/// Apply every spec to `base` in declaration order; later specs win per property.
///
/// `driver` is elapsed seconds for time-driven specs and scroll progress for
/// progress-driven ones; specs of the other kind are skipped.
pub fn apply_specs(
    specs: &[TransitionSpec],
    time_driven: bool,
    driver: f64,
    base: VisualState,
) -> VisualState {
    let mut out = base;
    for spec in specs.iter().filter(|s| s.is_time_driven() == time_driven) {
        spec.property.apply(&mut out, spec.sample(driver));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
