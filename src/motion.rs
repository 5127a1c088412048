//! Animation descriptors. Values end up as CSS classes and custom properties;
//! the keyframes themselves live in `styles.css`.

use std::collections::HashSet;

pub const DISCLOSURE_DURATION_MS: u32 = 300;
pub const PROJECT_CARD_STAGGER_MS: u32 = 50;
pub const REVEAL_ROOT_MARGIN: &str = "-100px";
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntranceKind {
    FadeUp,
    ScaleIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntranceTrigger {
    Mount,
    Viewport,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntranceAnimation {
    pub kind: EntranceKind,
    pub trigger: EntranceTrigger,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl EntranceAnimation {
    pub const fn fade_up(duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            kind: EntranceKind::FadeUp,
            trigger: EntranceTrigger::Mount,
            duration_ms,
            delay_ms,
        }
    }

    pub const fn scale_in(duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            kind: EntranceKind::ScaleIn,
            trigger: EntranceTrigger::Mount,
            duration_ms,
            delay_ms,
        }
    }

    pub const fn on_viewport(self) -> Self {
        Self {
            trigger: EntranceTrigger::Viewport,
            ..self
        }
    }

    /// Adds `index * step_ms` to the delay.
    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        let step = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(step_ms);
        Self {
            delay_ms: self.delay_ms.saturating_add(step),
            ..self
        }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            EntranceKind::FadeUp => "entrance-fade-up",
            EntranceKind::ScaleIn => "entrance-scale-in",
        }
    }

    pub fn style(&self) -> String {
        format!(
            "--enter-duration: {}ms; --enter-delay: {}ms;",
            self.duration_ms, self.delay_ms
        )
    }

    /// Mount entrances always play; viewport ones wait for the first reveal.
    pub fn is_playing(&self, revealed: bool) -> bool {
        match self.trigger {
            EntranceTrigger::Mount => true,
            EntranceTrigger::Viewport => revealed,
        }
    }
}

pub const HERO_HEADING: EntranceAnimation = EntranceAnimation::fade_up(600, 0);
pub const HERO_INTRO: EntranceAnimation = EntranceAnimation::fade_up(700, 100);
pub const HERO_ACTIONS: EntranceAnimation = EntranceAnimation::fade_up(700, 200);
pub const HERO_VISUAL: EntranceAnimation = EntranceAnimation::scale_in(600, 100);
pub const PROJECT_CARD: EntranceAnimation = EntranceAnimation::fade_up(500, 0).on_viewport();

pub fn disclosure_style() -> String {
    format!("--disclosure-duration: {DISCLOSURE_DURATION_MS}ms;")
}

/// Keys whose viewport entrance already fired. Keys are never removed, so an
/// entrance cannot replay when the element scrolls out and back in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    /// Returns true only the first time a key becomes visible.
    pub fn mark_visible(&mut self, key: &str) -> bool {
        if self.revealed.contains(key) {
            return false;
        }
        self.revealed.insert(key.to_string())
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// Continuous back-and-forth drift of a decorative background shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloatLoop {
    pub class: &'static str,
    pub dx_px: i32,
    pub dy_px: i32,
    pub period_s: u32,
}

impl FloatLoop {
    pub fn style(&self) -> String {
        format!(
            "--float-x: {}px; --float-y: {}px; --float-period: {}s;",
            self.dx_px, self.dy_px, self.period_s
        )
    }
}

pub const BACKGROUND_BLOBS: [FloatLoop; 2] = [
    FloatLoop {
        class: "blob-fuchsia",
        dx_px: 20,
        dy_px: -30,
        period_s: 12,
    },
    FloatLoop {
        class: "blob-emerald",
        dx_px: -20,
        dy_px: 30,
        period_s: 14,
    },
];
