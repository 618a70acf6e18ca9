//! Fade effects
//!
//! Eased opacity state for the alert dismissal transition. Time is passed
//! in by the caller rather than sampled internally, so the render path and
//! the tests share one clock.

use std::time::{Duration, Instant};

use ratatui::style::Color;

/// A fade-out in progress.
#[derive(Clone, Copy, Debug)]
pub struct FadeState {
    start: Instant,
    duration: Duration,
}

impl FadeState {
    /// Begin a fade-out at `start` lasting `duration`.
    pub fn fade_out(start: Instant, duration: Duration) -> Self {
        Self { start, duration }
    }

    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Remaining opacity at `now`, from 1.0 down to 0.0.
    pub fn alpha(&self, now: Instant) -> f32 {
        1.0 - ease_in_cubic(self.progress(now))
    }

    /// Whether the fade has run its full duration.
    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// Cubic ease-in function
fn ease_in_cubic(t: f32) -> f32 {
    t.powi(3)
}

/// Apply an alpha to a color by dimming it towards black. Non-RGB colors
/// pass through unchanged.
pub fn apply_alpha(color: Color, alpha: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * alpha) as u8,
            (g as f32 * alpha) as u8,
            (b as f32 * alpha) as u8,
        ),
        other => other,
    }
}
