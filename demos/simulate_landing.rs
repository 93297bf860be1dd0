//! Replays a scripted scroll through the landing page and prints a compact per-frame
//! summary. Logging runs at debug level, so trigger fires, era changes and the dive render
//! loop starting and stopping show up between frames.

use scrollcue::{
    AssetStatus, CoordinatorConfig, LANDING_DOCUMENT_HEIGHT, ScrollTrace, TraceEvent,
    TraceEventKind, Viewport, landing_page, simulate,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let viewport = Viewport::new(1280.0, 800.0)?;
    let range = LANDING_DOCUMENT_HEIGHT - viewport.height;
    let mut events = vec![TraceEvent {
        at_s: 0.5,
        kind: TraceEventKind::Asset {
            path: "/robot.glb".to_string(),
            status: AssetStatus::Ready,
        },
    }];
    // Scroll to the bottom over eight seconds, then halfway back.
    for i in 0..=80 {
        events.push(TraceEvent {
            at_s: 4.0 + i as f64 * 0.1,
            kind: TraceEventKind::Scroll {
                offset: range * i as f64 / 80.0,
            },
        });
    }
    events.push(TraceEvent {
        at_s: 13.0,
        kind: TraceEventKind::Scroll {
            offset: range * 0.5,
        },
    });
    let trace = ScrollTrace {
        viewport,
        document_height: LANDING_DOCUMENT_HEIGHT,
        fps: 30.0,
        tail_s: 1.0,
        events,
    };

    let frames = simulate(landing_page()?, &trace, CoordinatorConfig::default())?;
    for f in frames.iter().step_by(15) {
        let visible = f.elements.values().filter(|v| v.opacity > 0.99).count();
        println!(
            "t={:>5.2}s progress={:.3} era={:?} visible={visible:>2}/{} mascot={} bubble={:?} dive={}",
            f.time_s,
            f.scroll.progress,
            f.era,
            f.elements.len(),
            f.mascot.is_some(),
            f.bubble.as_ref().map(|b| b.text.as_str()),
            f.dive.as_ref().map_or(0, |d| d.frames_rendered),
        );
    }
    Ok(())
}
