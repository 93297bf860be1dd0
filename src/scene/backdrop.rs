use crate::{
    animation::tween::Lerp,
    foundation::core::Rgba8,
    foundation::error::{ScrollcueError, ScrollcueResult},
    foundation::math::clamp01,
};

/// Visual theme of the fixed page backdrop, one per era.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EraTheme {
    Vintage,
    Transition,
    Modern,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientAxis {
    /// Top-left to bottom-right.
    Diagonal,
    /// Top to bottom.
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba8,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GridSpec {
    pub line: Rgba8,
    pub spacing_px: u32,
    /// Layer opacity applied on top of the line color's own alpha.
    pub opacity: f64,
}

/// Layer description of a themed backdrop.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Backdrop {
    pub theme: EraTheme,
    pub axis: GradientAxis,
    pub stops: Vec<GradientStop>,
    pub grid: GridSpec,
    /// Black vignette strength at the corners, `[0, 1]`.
    pub vignette: f64,
}

const ACCENT: (u8, u8, u8) = (184, 69, 255);

fn accent(alpha: f64) -> Rgba8 {
    Rgba8::rgba(ACCENT.0, ACCENT.1, ACCENT.2, (alpha * 255.0).round() as u8)
}

fn three_stops(edge: Rgba8, middle: Rgba8) -> Vec<GradientStop> {
    vec![
        GradientStop {
            offset: 0.0,
            color: edge,
        },
        GradientStop {
            offset: 0.5,
            color: middle,
        },
        GradientStop {
            offset: 1.0,
            color: edge,
        },
    ]
}

impl EraTheme {
    pub fn backdrop(self) -> Backdrop {
        let ink = Rgba8::rgb(0x0a, 0x0a, 0x0a);
        match self {
            Self::Vintage => Backdrop {
                theme: self,
                axis: GradientAxis::Diagonal,
                stops: three_stops(ink, Rgba8::rgb(0x0f, 0x0f, 0x0f)),
                grid: GridSpec {
                    line: accent(0.3),
                    spacing_px: 60,
                    opacity: 0.02,
                },
                vignette: 0.4,
            },
            Self::Transition => Backdrop {
                theme: self,
                axis: GradientAxis::Vertical,
                stops: three_stops(ink, Rgba8::rgb(18, 10, 26)),
                grid: GridSpec {
                    line: accent(0.2),
                    spacing_px: 80,
                    opacity: 0.03,
                },
                vignette: 0.0,
            },
            Self::Modern => Backdrop {
                theme: self,
                axis: GradientAxis::Diagonal,
                stops: three_stops(ink, Rgba8::rgb(0x12, 0x09, 0x1f)),
                grid: GridSpec {
                    line: accent(0.15),
                    spacing_px: 120,
                    opacity: 0.02,
                },
                vignette: 0.3,
            },
        }
    }
}

impl Backdrop {
    fn gradient_at(&self, t: f64) -> Rgba8 {
        let t = clamp01(t);
        let idx = self.stops.partition_point(|s| s.offset <= t);
        if idx == 0 {
            return self.stops.first().map_or(Rgba8::rgb(0, 0, 0), |s| s.color);
        }
        if idx >= self.stops.len() {
            return self.stops[self.stops.len() - 1].color;
        }
        let (a, b) = (&self.stops[idx - 1], &self.stops[idx]);
        let span = b.offset - a.offset;
        if span <= 0.0 {
            return a.color;
        }
        <Rgba8 as Lerp>::lerp(&a.color, &b.color, (t - a.offset) / span)
    }

    /// Opaque backdrop color of pixel `(x, y)` in a `w x h` frame.
    pub fn pixel(&self, x: u32, y: u32, w: u32, h: u32) -> Rgba8 {
        let (fx, fy) = (f64::from(x) + 0.5, f64::from(y) + 0.5);
        let (fw, fh) = (f64::from(w), f64::from(h));
        let t = match self.axis {
            GradientAxis::Vertical => fy / fh,
            GradientAxis::Diagonal => (fx / fw + fy / fh) / 2.0,
        };
        let mut c = self.gradient_at(t);

        let spacing = self.grid.spacing_px.max(1);
        if x % spacing == 0 || y % spacing == 0 {
            let alpha = f64::from(self.grid.line.a) / 255.0 * self.grid.opacity;
            let line = Rgba8::rgb(self.grid.line.r, self.grid.line.g, self.grid.line.b);
            c = <Rgba8 as Lerp>::lerp(&c, &line, alpha);
        }

        if self.vignette > 0.0 {
            let dx = fx / fw - 0.5;
            let dy = fy / fh - 0.5;
            // 0 at the center, 1 at the corners
            let d = ((dx * dx + dy * dy) / 0.5).sqrt();
            let shade = self.vignette * clamp01((d - 0.5) / 0.5);
            c = <Rgba8 as Lerp>::lerp(&c, &Rgba8::rgb(0, 0, 0), shade);
        }
        Rgba8 { a: 255, ..c }
    }

    /// Rasterize the backdrop into an RGBA image.
    pub fn render(&self, width: u32, height: u32) -> ScrollcueResult<image::RgbaImage> {
        if width == 0 || height == 0 {
            return Err(ScrollcueError::validation(
                "backdrop preview size must be non-zero",
            ));
        }
        if self.stops.is_empty() {
            return Err(ScrollcueError::validation("backdrop has no gradient stops"));
        }
        Ok(image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba(self.pixel(x, y, width, height).to_array())
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/backdrop.rs"]
mod tests;
