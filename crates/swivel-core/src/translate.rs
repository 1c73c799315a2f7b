//! Position translation: padded index to strip offset.

use std::time::Duration;

/// Fixed duration of an animated slide.
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// A single visual movement: where the strip goes and how long it takes.
/// Zero duration is a silent snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslationCommand {
    pub offset_px: f32,
    pub duration: Duration,
}

impl TranslationCommand {
    #[inline]
    pub fn is_silent(&self) -> bool {
        self.duration.is_zero()
    }
}

/// Converts a padded index into a strip offset.
///
/// The strip is conceptually pre-shifted one unit left, so the clone at
/// slot 0 sits before the first real panel: `offset = -unit * (padded + 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    unit_width: f32,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the measured viewport width. Zero is tolerated: offsets
    /// degrade to zero until a real measurement arrives.
    pub fn set_unit_width(&mut self, width: f32) {
        self.unit_width = width.max(0.0);
    }

    #[inline]
    pub fn unit_width(&self) -> f32 {
        self.unit_width
    }

    /// Every index change flows through here before it counts as applied.
    pub fn command(&self, padded: usize, silent: bool) -> TranslationCommand {
        TranslationCommand {
            offset_px: -self.unit_width * (padded as f32 + 1.0),
            duration: if silent { Duration::ZERO } else { SLIDE_DURATION },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_formula() {
        let mut translator = Translator::new();
        translator.set_unit_width(300.0);

        let command = translator.command(1, false);
        assert_eq!(command.offset_px, -600.0);
        assert_eq!(command.duration, SLIDE_DURATION);
    }

    #[test]
    fn test_silent_command_has_zero_duration() {
        let mut translator = Translator::new();
        translator.set_unit_width(300.0);

        let command = translator.command(1, true);
        assert_eq!(command.offset_px, -600.0);
        assert!(command.is_silent());
    }

    #[test]
    fn test_zero_width_degrades_to_zero_offsets() {
        let translator = Translator::new();
        for padded in 0..5 {
            assert_eq!(translator.command(padded, false).offset_px, 0.0);
        }
    }

    #[test]
    fn test_negative_width_treated_as_zero() {
        let mut translator = Translator::new();
        translator.set_unit_width(-80.0);
        assert_eq!(translator.unit_width(), 0.0);
    }
}
