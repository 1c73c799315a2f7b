//! Slide animation controller.
//!
//! Turns [`TranslationCommand`]s into a per-frame strip offset. A zero
//! duration snaps immediately (the silent corrective jump); anything else
//! interpolates linearly over the command's duration. Call `update()`
//! each frame to advance.

use std::time::{Duration, Instant};

use swivel_core::TranslationCommand;

/// Active slide state
#[derive(Debug, Clone)]
struct ActiveSlide {
    /// Slide start time
    start: Instant,
    /// Starting strip offset
    from: f32,
    /// Target strip offset
    to: f32,
    /// Slide duration
    duration: Duration,
}

/// Slide animation controller
#[derive(Debug, Clone, Default)]
pub struct SlideAnimator {
    /// Current active slide (if any)
    animation: Option<ActiveSlide>,
    /// Current strip offset (always up-to-date)
    current_offset: f32,
}

impl SlideAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a slide is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Get the current interpolated strip offset
    #[inline]
    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    /// Get the target offset (final position after the slide)
    pub fn target_offset(&self) -> f32 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_offset)
    }

    /// Apply a translation command.
    ///
    /// Silent commands snap instantly; animated commands slide from the
    /// current visible offset, so a command that interrupts a slide in
    /// flight chains smoothly instead of jumping.
    pub fn apply(&mut self, command: &TranslationCommand) {
        if command.is_silent() {
            self.current_offset = command.offset_px;
            self.animation = None;
            return;
        }

        let from = self.current_offset;
        if (from - command.offset_px).abs() < f32::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveSlide {
            start: Instant::now(),
            from,
            to: command.offset_px,
            duration: command.duration,
        });
    }

    /// Advance the slide and return the current offset.
    /// Call this every frame.
    pub fn update(&mut self) -> f32 {
        if let Some(ref slide) = self.animation {
            if is_complete(slide.start, slide.duration) {
                self.current_offset = slide.to;
                self.animation = None;
            } else {
                let t = progress(slide.start, slide.duration);
                self.current_offset = lerp(slide.from, slide.to, t);
            }
        }
        self.current_offset
    }

    /// Cancel any active slide and stop at the current offset
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}

/// Slide progress (0.0 to 1.0) from start time and duration
#[inline]
fn progress(start: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = start.elapsed().as_secs_f32() / duration.as_secs_f32();
    ratio.clamp(0.0, 1.0)
}

#[inline]
fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

/// Linear interpolation between two offsets
#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
