//! The carousel index state machine.
//!
//! Owns the current padded index and turns every movement request into a
//! [`Transition`]: the translation to apply, an optional corrective jump
//! (when the index landed on a clone slot), and an optional settled change
//! report (when it landed on a real slot). The transition function works
//! from explicit (from, to) indices, so the silent/animated decision never
//! depends on a stale snapshot of earlier state.

use std::time::Duration;

use tracing::debug;

use crate::track::{PaddedTrack, Slot};
use crate::translate::{TranslationCommand, Translator, SLIDE_DURATION};
use crate::Result;

/// A settled index change, in real coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub current: usize,
    pub previous: usize,
}

/// A corrective jump scheduled after landing on a clone slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    /// Padded index to snap back to
    pub target: usize,
    /// Wait before snapping; zero when the landing move was itself silent
    pub delay: Duration,
}

/// Everything a single index change produces.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub command: TranslationCommand,
    pub correction: Option<Correction>,
    pub change: Option<Change>,
}

/// Index state machine over a [`PaddedTrack`].
///
/// Starts at padded index 1 (real index 0) and runs for the carousel's
/// whole lifetime; there is no terminal state. The panel set is fixed:
/// reconfiguring panels means building a new `Carousel`.
#[derive(Debug)]
pub struct Carousel {
    track: PaddedTrack,
    translator: Translator,
    current: usize,
}

impl Carousel {
    pub fn new(real_len: usize) -> Result<Self> {
        Ok(Self {
            track: PaddedTrack::new(real_len)?,
            translator: Translator::new(),
            current: 1,
        })
    }

    #[inline]
    pub fn track(&self) -> &PaddedTrack {
        &self.track
    }

    #[inline]
    pub fn current_padded(&self) -> usize {
        self.current
    }

    /// Real index currently shown; clones resolve to the panel they
    /// duplicate.
    #[inline]
    pub fn current_real(&self) -> usize {
        self.track.shown_at(self.current)
    }

    /// Record the measured viewport width and re-apply the current
    /// position silently. The first call doubles as the mount-time
    /// initial translation; later calls serve terminal resizes.
    pub fn measure(&mut self, unit_width: f32) -> TranslationCommand {
        self.translator.set_unit_width(unit_width);
        self.translator.command(self.current, true)
    }

    /// Step forward or backward. Clone slots are valid transient
    /// destinations; the returned transition carries the corrective jump
    /// to schedule. Returns `None` when saturated at the padded bounds.
    pub fn advance(&mut self, delta: i32) -> Option<Transition> {
        let bound = self.track.padded_len() as isize - 1;
        let to = (self.current as isize + delta as isize).clamp(0, bound) as usize;
        if to == self.current {
            return None;
        }
        Some(self.transition_to(to))
    }

    /// Jump straight to a real index (a dot click). Out-of-range indices
    /// are clamped. Returns `None` when already there.
    pub fn jump_to(&mut self, real: usize) -> Option<Transition> {
        let to = self.track.to_padded(self.track.clamp_real(real));
        if to == self.current {
            return None;
        }
        Some(self.transition_to(to))
    }

    /// Apply a due corrective jump. Always lands on a real slot and is
    /// always silent, since it originates from a clone.
    pub fn correct(&mut self, correction: Correction) -> Transition {
        self.transition_to(correction.target)
    }

    fn transition_to(&mut self, to: usize) -> Transition {
        let from = self.current;
        // Leaving-index rule: the move is silent iff the slot being LEFT
        // is a clone, regardless of where it lands.
        let silent = self.track.slot(from).is_clone();
        self.current = to;

        let command = self.translator.command(to, silent);

        let correction = self.track.correction_target(to).map(|target| Correction {
            target,
            delay: if silent { Duration::ZERO } else { SLIDE_DURATION },
        });

        // Only settled (real) landings are reported. The raw previous
        // index is clamped only when it was a clone slot; real-origin
        // values pass through unchanged.
        let change = match self.track.slot(to) {
            Slot::Real(current) => Some(Change {
                current,
                previous: self.track.clamp_previous(from as isize - 1),
            }),
            _ => None,
        };

        debug!(
            "Carousel transition: {} -> {} (silent={}, correction={:?})",
            from, to, silent, correction
        );

        Transition {
            from,
            to,
            command,
            correction,
            change,
        }
    }
}
