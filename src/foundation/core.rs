use crate::foundation::error::{ScrollcueError, ScrollcueResult};

pub use kurbo::{Affine, Vec2};

/// Monotonic index of a rendered frame, assigned by the coordinator.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Visible area of the page in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ScrollcueResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ScrollcueError::validation("Viewport width must be > 0"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ScrollcueError::validation("Viewport height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// Viewport plus the full scrollable document height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageMetrics {
    pub viewport: Viewport,
    pub document_height: f64,
}

impl PageMetrics {
    pub fn new(viewport: Viewport, document_height: f64) -> ScrollcueResult<Self> {
        if !(document_height.is_finite() && document_height >= 0.0) {
            return Err(ScrollcueError::validation(
                "PageMetrics document_height must be >= 0",
            ));
        }
        Ok(Self {
            viewport,
            document_height,
        })
    }

    /// Distance the page can scroll; zero for pages no taller than the viewport.
    pub fn scroll_range(self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }
}

/// Scene-space vector used by the 3D mascot and dive camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> ScrollcueResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ScrollcueError::validation(format!("color '{s}' must start with '#'")))?;
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ScrollcueError::validation(format!(
                "color '{s}' must have 6 or 8 hex digits"
            )));
        }
        let byte = |i: usize| -> ScrollcueResult<u8> {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ScrollcueError::validation(format!("color '{s}' is not valid hex")))
        };
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Resolved 2D visual properties of one animated element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Offset from the element's layout position, in px.
    pub translate: Vec2,
    /// Uniform scale, default 1.
    pub scale: f64,
    pub rotation_rad: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate: Vec2::ZERO,
            scale: 1.0,
            rotation_rad: 0.0,
        }
    }
}

impl VisualState {
    /// Matrix a host applies to the element box, pivoting on `anchor`.
    pub fn to_affine(self, anchor: Vec2) -> Affine {
        // T(translate) * T(anchor) * R(rot) * S(scale) * T(-anchor)
        Affine::translate(self.translate)
            * Affine::translate(anchor)
            * Affine::rotate(self.rotation_rad)
            * Affine::scale(self.scale)
            * Affine::translate(-anchor)
    }

    /// True when only opacity departs from the default state.
    pub fn is_opacity_only(&self) -> bool {
        self.translate == Vec2::ZERO && self.scale == 1.0 && self.rotation_rad == 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
