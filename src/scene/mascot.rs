use crate::{
    animation::ease::Ease,
    animation::phased::{EntranceMachine, EntranceState, PhaseWindow, PhasedAnimation},
    animation::tween::Lerp,
    coordinator::component::{AssetStatus, Component, FrameCtx},
    coordinator::output::FrameOutput,
    foundation::core::{Rgba8, Vec3},
    foundation::error::ScrollcueResult,
    foundation::math::lerp,
};

/// Total entrance budget; the speech bubble waits this long too.
pub const ENTRANCE_DURATION_S: f64 = 3.5;
/// Scale at rest.
pub const IDLE_SCALE: f64 = 2.5;

/// Placement of the mascot model in scene space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub yaw: f64,
    pub scale: f64,
}

impl Pose {
    pub const IDLE: Pose = Pose {
        position: Vec3::ZERO,
        yaw: 0.0,
        scale: IDLE_SCALE,
    };
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            position: <Vec3 as Lerp>::lerp(&a.position, &b.position, t),
            yaw: lerp(a.yaw, b.yaw, t),
            scale: lerp(a.scale, b.scale, t),
        }
    }
}

/// Two ordered phases: a fast fly-in from below that overshoots, then a settle onto
/// [`Pose::IDLE`].
pub fn entrance_animation() -> ScrollcueResult<PhasedAnimation<Pose>> {
    PhasedAnimation::new(
        Pose {
            position: Vec3::new(0.0, -4.0, -2.0),
            yaw: -std::f64::consts::FRAC_PI_2,
            scale: 0.5,
        },
        vec![
            PhaseWindow {
                end: 0.6,
                to: Pose {
                    position: Vec3::new(0.0, 0.3, 0.0),
                    yaw: 0.15,
                    scale: 2.8,
                },
                ease: Ease::OutCubic,
            },
            PhaseWindow {
                end: 1.0,
                to: Pose::IDLE,
                ease: Ease::InOutQuad,
            },
        ],
        ENTRANCE_DURATION_S,
    )
}

/// What the host should draw for the mascot.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MascotModel {
    /// Stand-in while the model streams in or after it failed.
    Placeholder {
        size: f64,
        color: Rgba8,
        wireframe: bool,
    },
    Model { path: String },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MascotFrame {
    pub model: MascotModel,
    pub entrance: EntranceState,
    pub pose: Pose,
    /// Fixed container size in px.
    pub box_px: (f64, f64),
    pub bottom_pct: f64,
}

/// Fixed-position 3D mascot: asset fallback, phased entrance, idle float.
#[derive(Clone, Debug)]
pub struct Mascot {
    asset: String,
    status: AssetStatus,
    machine: EntranceMachine<Pose>,
    settled_at_s: Option<f64>,
}

impl Mascot {
    pub fn new(asset: impl Into<String>) -> ScrollcueResult<Self> {
        Ok(Self {
            asset: asset.into(),
            status: AssetStatus::Loading,
            machine: EntranceMachine::new(entrance_animation()?),
            settled_at_s: None,
        })
    }

    pub fn status(&self) -> AssetStatus {
        self.status
    }

    fn model(&self) -> MascotModel {
        match self.status {
            AssetStatus::Ready => MascotModel::Model {
                path: self.asset.clone(),
            },
            AssetStatus::Loading | AssetStatus::Failed => MascotModel::Placeholder {
                size: 1.0,
                color: Rgba8::rgb(0xb8, 0x45, 0xff),
                wireframe: true,
            },
        }
    }

    fn arm(&mut self, ctx: &FrameCtx<'_>) {
        self.machine.reset();
        self.settled_at_s = None;
        if ctx.tier.is_mobile() {
            self.machine.settle();
            self.settled_at_s = Some(ctx.now_s);
        } else {
            self.machine.start(ctx.now_s);
        }
    }
}

/// Gentle float layered on top of the idle pose once settled.
fn idle_float(elapsed_s: f64) -> Pose {
    Pose {
        position: Vec3::new(0.0, (elapsed_s * 0.5).sin() * 0.2, 0.0),
        yaw: (elapsed_s * 0.3).sin() * 0.2,
        scale: IDLE_SCALE,
    }
}

impl Component for Mascot {
    fn name(&self) -> &'static str {
        "mascot"
    }

    fn mounted(&mut self, ctx: &FrameCtx<'_>) {
        self.arm(ctx);
    }

    fn tier_changed(&mut self, ctx: &FrameCtx<'_>) {
        if ctx.tier.is_mobile() && self.machine.state() != EntranceState::Settled {
            self.machine.settle();
            self.settled_at_s = Some(ctx.now_s);
        }
    }

    fn asset_status(&mut self, path: &str, status: AssetStatus) {
        if path == self.asset {
            tracing::debug!(path, ?status, "mascot asset status");
            self.status = status;
        }
    }

    fn frame(&mut self, ctx: &FrameCtx<'_>, out: &mut FrameOutput) {
        let entering_pose = self.machine.advance(ctx.now_s);
        let state = self.machine.state();
        let pose = if state == EntranceState::Settled {
            let since = *self.settled_at_s.get_or_insert(ctx.now_s);
            idle_float(ctx.now_s - since)
        } else {
            entering_pose
        };
        out.mascot = Some(MascotFrame {
            model: self.model(),
            entrance: state,
            pose,
            box_px: ctx.params.mascot_box_px,
            bottom_pct: ctx.params.mascot_bottom_pct,
        });
    }

    fn unmount(&mut self) {
        self.machine.reset();
        self.settled_at_s = None;
    }

    fn is_animating(&self, _now_s: f64) -> bool {
        // idle float never stops
        self.machine.state() != EntranceState::Idle
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/mascot.rs"]
mod tests;
