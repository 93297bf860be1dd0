use crate::{
    coordinator::component::{Component, FrameCtx},
    coordinator::output::FrameOutput,
    foundation::core::{FrameIndex, Rgba8, Vec3},
    foundation::math::{Rng64, lerp, window_t},
    scroll::era::Era,
};

const CAMERA_START_Z: f64 = 5.0;
const CAMERA_TRAVEL_Z: f64 = 30.0;
const CAMERA_MAX_ROLL: f64 = 0.2;
const FIELD_ROLL_PER_FRAME: f64 = 0.0002;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Box,
    Octahedron,
    Tetrahedron,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Box, ShapeKind::Octahedron, ShapeKind::Tetrahedron];

    pub fn size(self) -> f64 {
        match self {
            Self::Box => 0.5,
            Self::Octahedron => 0.3,
            Self::Tetrahedron => 0.4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    pub position: Vec3,
    /// Linear RGB multipliers.
    pub color: [f64; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WireShape {
    pub kind: ShapeKind,
    pub position: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
}

/// Tunnel of particles plus scattered wireframe shapes, fully determined by the seed.
#[derive(Clone, Debug, PartialEq)]
pub struct DiveField {
    pub particles: Vec<Particle>,
    pub shapes: Vec<WireShape>,
    pub roll: f64,
}

impl DiveField {
    pub const SHAPE_COLOR: Rgba8 = Rgba8 {
        r: 0xb8,
        g: 0x45,
        b: 0xff,
        a: 64,
    };

    pub fn generate(seed: u64, particle_count: usize, shape_count: usize) -> Self {
        let mut rng = Rng64::new(seed);
        let tau = std::f64::consts::TAU;

        let particles = (0..particle_count)
            .map(|_| {
                let radius = rng.range(2.0, 17.0);
                let angle = rng.range(0.0, tau);
                let depth = rng.range(-50.0, 50.0);
                let tint = rng.range(0.7, 1.0);
                Particle {
                    position: Vec3::new(angle.cos() * radius, angle.sin() * radius, depth),
                    color: [0.72 * tint, 0.27 * tint, tint],
                }
            })
            .collect();

        let shapes = (0..shape_count)
            .map(|_| {
                let kind = ShapeKind::ALL[(rng.next_u64() % ShapeKind::ALL.len() as u64) as usize];
                let radius = rng.range(5.0, 15.0);
                let angle = rng.range(0.0, tau);
                let position = Vec3::new(
                    angle.cos() * radius,
                    rng.range(-5.0, 5.0),
                    rng.range(-25.0, 25.0),
                );
                let pi = std::f64::consts::PI;
                let rotation = Vec3::new(rng.range(0.0, pi), rng.range(0.0, pi), rng.range(0.0, pi));
                WireShape {
                    kind,
                    position,
                    rotation,
                }
            })
            .collect();

        Self {
            particles,
            shapes,
            roll: 0.0,
        }
    }

    /// Advance one rendered frame: alternate spin directions and roll the field.
    pub fn spin(&mut self) {
        for (i, shape) in self.shapes.iter_mut().enumerate() {
            shape.rotation.x += if i % 2 == 0 { 0.001 } else { -0.001 };
            shape.rotation.y += if i % 3 == 0 { 0.002 } else { -0.002 };
        }
        self.roll += FIELD_ROLL_PER_FRAME;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DiveCamera {
    pub z: f64,
    pub roll: f64,
}

impl DiveCamera {
    /// Camera pose at `t` through the late band, clamped to `[0, 1]`.
    pub fn at(t: f64) -> Self {
        let t = window_t(t, 0.0, 1.0);
        Self {
            z: lerp(CAMERA_START_Z, CAMERA_START_Z - CAMERA_TRAVEL_Z, t),
            roll: lerp(0.0, CAMERA_MAX_ROLL, t),
        }
    }
}

/// Handle to a running per-frame render loop. Dropping the owning scene ends it.
#[derive(Debug)]
pub struct RenderLoop {
    started_at: FrameIndex,
    frames: u64,
}

impl RenderLoop {
    pub fn start(at: FrameIndex) -> Self {
        tracing::debug!(frame = at.0, "dive render loop started");
        Self {
            started_at: at,
            frames: 0,
        }
    }

    pub fn tick(&mut self) -> u64 {
        self.frames += 1;
        self.frames
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn cancel(self) {
        tracing::debug!(
            started_at = self.started_at.0,
            frames = self.frames,
            "dive render loop cancelled"
        );
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DiveFrame {
    pub camera: DiveCamera,
    pub field_roll: f64,
    pub fog_density: f64,
    pub shape_color: Rgba8,
    pub particle_count: usize,
    pub shapes: Vec<WireShape>,
    pub frames_rendered: u64,
}

/// Late-era tunnel dive. Runs only in [`Era::Late`] on the desktop tier.
#[derive(Debug)]
pub struct DiveScene {
    seed: u64,
    field: Option<DiveField>,
    render_loop: Option<RenderLoop>,
}

impl DiveScene {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            field: None,
            render_loop: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.render_loop.is_some()
    }

    pub fn field(&self) -> Option<&DiveField> {
        self.field.as_ref()
    }

    fn stop(&mut self) {
        if let Some(handle) = self.render_loop.take() {
            handle.cancel();
        }
        self.field = None;
    }
}

impl Component for DiveScene {
    fn name(&self) -> &'static str {
        "dive"
    }

    fn tier_changed(&mut self, ctx: &FrameCtx<'_>) {
        // counts are tier dependent; rebuild on next activation
        if ctx.tier.is_mobile() {
            self.stop();
        }
    }

    fn frame(&mut self, ctx: &FrameCtx<'_>, out: &mut FrameOutput) {
        let active = ctx.era == Era::Late && !ctx.tier.is_mobile();
        if !active {
            self.stop();
            return;
        }
        if self.render_loop.is_none() {
            self.field = Some(DiveField::generate(
                self.seed,
                ctx.params.particle_count,
                ctx.params.shape_count,
            ));
            self.render_loop = Some(RenderLoop::start(ctx.frame));
        }
        let (Some(field), Some(handle)) = (self.field.as_mut(), self.render_loop.as_mut()) else {
            return;
        };
        field.spin();
        let frames_rendered = handle.tick();

        let (lo, hi) = ctx.eras.range(Era::Late);
        out.dive = Some(DiveFrame {
            camera: DiveCamera::at(window_t(ctx.scroll.progress, lo, hi)),
            field_roll: field.roll,
            fog_density: ctx.params.fog_density,
            shape_color: DiveField::SHAPE_COLOR,
            particle_count: field.particles.len(),
            shapes: field.shapes.clone(),
            frames_rendered,
        });
    }

    fn unmount(&mut self) {
        self.stop();
    }

    fn is_animating(&self, _now_s: f64) -> bool {
        self.is_running()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dive.rs"]
mod tests;
