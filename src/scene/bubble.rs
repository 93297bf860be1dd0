use crate::{
    coordinator::component::{Component, FrameCtx},
    coordinator::output::FrameOutput,
    foundation::error::{ScrollcueError, ScrollcueResult},
    scene::mascot::ENTRANCE_DURATION_S,
};

pub const CHAR_INTERVAL_S: f64 = 0.08;
pub const HOLD_S: f64 = 3.0;

/// Default lines spoken by the mascot.
pub fn default_messages() -> Vec<String> {
    [
        "Hi! Welcome to RuyaTECH 👋",
        "I'm here to help transform your digital future!",
        "Let's build something amazing together!",
        "Powered by AI & Innovation 🚀",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BubbleFrame {
    pub text: String,
    /// Caret shown while characters are still being revealed.
    pub typing: bool,
    pub message_index: usize,
}

/// Typewriter schedule: wait, type one character per tick, hold, next message.
///
/// The wait only precedes the first message of every cycle, so the first line never races
/// the mascot entrance.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    messages: Vec<String>,
    initial_delay_s: f64,
    char_interval_s: f64,
    hold_s: f64,
}

impl Typewriter {
    pub fn new(messages: Vec<String>) -> ScrollcueResult<Self> {
        if messages.is_empty() {
            return Err(ScrollcueError::validation(
                "speech bubble needs at least one message",
            ));
        }
        Ok(Self {
            messages,
            initial_delay_s: ENTRANCE_DURATION_S,
            char_interval_s: CHAR_INTERVAL_S,
            hold_s: HOLD_S,
        })
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    fn delay(&self, index: usize) -> f64 {
        if index == 0 { self.initial_delay_s } else { 0.0 }
    }

    // One extra tick after the last character before the caret goes away.
    fn typing_s(&self, index: usize) -> f64 {
        (self.messages[index].chars().count() + 1) as f64 * self.char_interval_s
    }

    fn slot_s(&self, index: usize) -> f64 {
        self.delay(index) + self.typing_s(index) + self.hold_s
    }

    pub fn cycle_s(&self) -> f64 {
        (0..self.messages.len()).map(|i| self.slot_s(i)).sum()
    }

    /// Bubble contents `elapsed_s` after it became visible.
    pub fn at(&self, elapsed_s: f64) -> BubbleFrame {
        let mut rem = elapsed_s.max(0.0) % self.cycle_s();
        let mut index = 0;
        while index + 1 < self.messages.len() && rem >= self.slot_s(index) {
            rem -= self.slot_s(index);
            index += 1;
        }

        let message = &self.messages[index];
        let since_typing = rem - self.delay(index);
        if since_typing < 0.0 {
            return BubbleFrame {
                text: String::new(),
                typing: false,
                message_index: index,
            };
        }
        let total = message.chars().count();
        let shown = ((since_typing / self.char_interval_s).floor() as usize).min(total);
        BubbleFrame {
            text: message.chars().take(shown).collect(),
            typing: since_typing < self.typing_s(index),
            message_index: index,
        }
    }
}

/// Speech bubble attached to the mascot; desktop only.
#[derive(Clone, Debug)]
pub struct SpeechBubble {
    writer: Typewriter,
    visible_since_s: Option<f64>,
}

impl SpeechBubble {
    pub fn new(messages: Vec<String>) -> ScrollcueResult<Self> {
        Ok(Self {
            writer: Typewriter::new(messages)?,
            visible_since_s: None,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visible_since_s.is_some()
    }
}

impl Component for SpeechBubble {
    fn name(&self) -> &'static str {
        "speech_bubble"
    }

    fn frame(&mut self, ctx: &FrameCtx<'_>, out: &mut FrameOutput) {
        let visible = out.mascot.is_some() && !ctx.tier.is_mobile();
        if !visible {
            self.visible_since_s = None;
            return;
        }
        let since = *self.visible_since_s.get_or_insert(ctx.now_s);
        out.bubble = Some(self.writer.at(ctx.now_s - since));
    }

    fn unmount(&mut self) {
        self.visible_since_s = None;
    }

    fn is_animating(&self, _now_s: f64) -> bool {
        self.is_visible()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/bubble.rs"]
mod tests;
