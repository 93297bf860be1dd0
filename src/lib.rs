//! scrollcue is a headless, deterministic scroll-phase visual coordinator.
//!
//! It turns host input (scroll offsets, viewport resizes, asset load events) and a frame
//! clock into the visual state of every animated element of a page.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: pending scroll/resize input -> `ScrollState` (at most once per frame)
//! 2. **Classify**: progress -> `Era`, viewport width -> `DeviceTier` (debounced)
//! 3. **Trigger**: element bands -> forward/reverse fires per `ReplayPolicy`
//! 4. **Animate**: time-driven timelines and progress-driven scrubs -> `VisualState`
//! 5. **Emit**: one `FrameOutput` per frame, including mascot, speech bubble and dive layers
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same stage and input trace always produce the same frames.
//! - **Single writer**: the coordinator owns scroll state; components only read it.
//! - **Explicit lifetimes**: everything a component registers ends with `Coordinator::unmount`.
#![forbid(unsafe_code)]

mod animation;
mod coordinator;
mod foundation;
mod scene;
mod scroll;
mod site;
mod stage;
mod trigger;

pub use animation::ease::Ease;
pub use animation::executor::{LoopMode, PlayDirection, RestAt, Timeline, TransitionExecutor};
pub use animation::phased::{
    EntranceMachine, EntranceState, PhasePoint, PhaseWindow, PhasedAnimation,
};
pub use animation::tween::{Drive, Lerp, Property, TransitionSpec, apply_specs};
pub use coordinator::component::{AssetStatus, Component, FrameCtx};
pub use coordinator::config::CoordinatorConfig;
pub use coordinator::coordinator::{Coordinator, MountId};
pub use coordinator::output::FrameOutput;
pub use coordinator::sim::{MAX_TRACE_FRAMES, ScrollTrace, TraceEvent, TraceEventKind, simulate};
pub use foundation::core::{
    Affine, FrameIndex, PageMetrics, Rgba8, Vec2, Vec3, Viewport, VisualState,
};
pub use foundation::error::{ScrollcueError, ScrollcueResult};
pub use scene::backdrop::{Backdrop, EraTheme, GradientAxis, GradientStop, GridSpec};
pub use scene::bubble::{BubbleFrame, SpeechBubble, Typewriter, default_messages};
pub use scene::dive::{
    DiveCamera, DiveField, DiveFrame, DiveScene, Particle, RenderLoop, ShapeKind, WireShape,
};
pub use scene::mascot::{Mascot, MascotFrame, MascotModel, Pose, entrance_animation};
pub use scroll::era::{Era, EraBands, classify};
pub use scroll::sampler::{Sample, SamplerConfig, ScrollSampler, ScrollState, progress_for};
pub use scroll::tier::{DeviceTier, MOBILE_BREAKPOINT_PX, TierParams, TierSelector};
pub use site::contact::{ContactField, ContactForm};
pub use site::locale::{Locale, TextDirection};
pub use stage::cues::CueSet;
pub use stage::dsl::{
    StageBuilder, entrance, fade, fade_in_x, fade_up, looping, replace, reveal, scrub,
};
pub use stage::element::{ElementId, ElementLayout, ElementRegistry};
pub use stage::model::{Cue, CueKind, DiveDef, MascotDef, MobileVariant, Stage};
pub use stage::presets::{LANDING_DOCUMENT_HEIGHT, landing_page};
pub use trigger::band::{BandDef, Edge, ScrollAnchor, TriggerBand};
pub use trigger::scheduler::{
    FireDirection, ReplayPolicy, Trigger, TriggerFire, TriggerId, TriggerScheduler,
};
