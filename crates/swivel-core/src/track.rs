use crate::{Error, Result};

/// Partition of the padded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Leading clone of the last real panel
    CloneHead,
    /// A real panel, carrying its real index
    Real(usize),
    /// Trailing clone of the first real panel
    CloneTail,
}

impl Slot {
    #[inline]
    pub fn is_clone(&self) -> bool {
        matches!(self, Slot::CloneHead | Slot::CloneTail)
    }
}

/// The padded panel sequence: a clone of the last panel prepended and a
/// clone of the first appended, so a wrap can animate one step past either
/// end before snapping back into the real range.
///
/// Built once from the panel count. Panels themselves stay with the caller;
/// the track only books ordinals, so the caller's list is never touched.
/// Padded indices 1..=n map 1:1 to real indices 0..n.
///
/// The panel set is fixed for the track's lifetime. Changing it means
/// building a new track (and a new carousel on top of it).
#[derive(Debug, Clone)]
pub struct PaddedTrack {
    real_len: usize,
}

impl PaddedTrack {
    pub fn new(real_len: usize) -> Result<Self> {
        if real_len == 0 {
            return Err(Error::EmptyPanelSet);
        }
        Ok(Self { real_len })
    }

    #[inline]
    pub fn real_len(&self) -> usize {
        self.real_len
    }

    /// Padded length: the real panels plus the two clone slots.
    #[inline]
    pub fn padded_len(&self) -> usize {
        self.real_len + 2
    }

    pub fn slot(&self, padded: usize) -> Slot {
        if padded == 0 {
            Slot::CloneHead
        } else if padded >= self.padded_len() - 1 {
            Slot::CloneTail
        } else {
            Slot::Real(padded - 1)
        }
    }

    /// Map a real index into padded coordinates.
    #[inline]
    pub fn to_padded(&self, real: usize) -> usize {
        real + 1
    }

    /// Clamp an externally supplied real index into range. Stale dot
    /// indices are clamped rather than rejected.
    #[inline]
    pub fn clamp_real(&self, real: usize) -> usize {
        real.min(self.real_len - 1)
    }

    /// Real index shown at a padded slot; clones resolve to the panel they
    /// duplicate.
    pub fn shown_at(&self, padded: usize) -> usize {
        match self.slot(padded) {
            Slot::CloneHead => self.real_len - 1,
            Slot::Real(real) => real,
            Slot::CloneTail => 0,
        }
    }

    /// Padded slot a correction snaps to after the index settles on a
    /// clone: the tail clone wraps to the first real panel, the head clone
    /// to the last.
    pub fn correction_target(&self, padded: usize) -> Option<usize> {
        match self.slot(padded) {
            Slot::CloneHead => Some(self.padded_len() - 2),
            Slot::CloneTail => Some(1),
            Slot::Real(_) => None,
        }
    }

    /// Clamp a raw previous real index (-1 or n for clone-origin
    /// transitions) into valid real range.
    #[inline]
    pub fn clamp_previous(&self, raw: isize) -> usize {
        raw.clamp(0, self.real_len as isize - 1) as usize
    }

    /// The padded sequence expressed as real ordinals, for layout:
    /// `[n-1, 0, 1, ..., n-1, 0]`.
    pub fn render_order(&self) -> Vec<usize> {
        (0..self.padded_len()).map(|p| self.shown_at(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_panel_set_rejected() {
        assert!(matches!(PaddedTrack::new(0), Err(Error::EmptyPanelSet)));
    }

    #[test]
    fn test_padded_length() {
        for n in 1..=6 {
            let track = PaddedTrack::new(n).unwrap();
            assert_eq!(track.padded_len(), n + 2);
        }
    }

    #[test]
    fn test_slot_partition() {
        let track = PaddedTrack::new(3).unwrap();
        assert_eq!(track.slot(0), Slot::CloneHead);
        assert_eq!(track.slot(1), Slot::Real(0));
        assert_eq!(track.slot(2), Slot::Real(1));
        assert_eq!(track.slot(3), Slot::Real(2));
        assert_eq!(track.slot(4), Slot::CloneTail);
    }

    #[test]
    fn test_real_padded_bijection() {
        let track = PaddedTrack::new(5).unwrap();
        for real in 0..5 {
            let padded = track.to_padded(real);
            assert_eq!(track.slot(padded), Slot::Real(real));
            assert_eq!(track.shown_at(padded), real);
        }
    }

    #[test]
    fn test_clones_show_their_twin() {
        let track = PaddedTrack::new(4).unwrap();
        assert_eq!(track.shown_at(0), 3);
        assert_eq!(track.shown_at(5), 0);
    }

    #[test]
    fn test_correction_targets() {
        let track = PaddedTrack::new(3).unwrap();
        assert_eq!(track.correction_target(0), Some(3));
        assert_eq!(track.correction_target(4), Some(1));
        assert_eq!(track.correction_target(2), None);
    }

    #[test]
    fn test_two_panel_boundary() {
        let track = PaddedTrack::new(2).unwrap();
        assert_eq!(track.padded_len(), 4);
        assert_eq!(track.correction_target(0), Some(2));
        assert_eq!(track.correction_target(3), Some(1));
    }

    #[test]
    fn test_clamp_previous() {
        let track = PaddedTrack::new(3).unwrap();
        assert_eq!(track.clamp_previous(-1), 0);
        assert_eq!(track.clamp_previous(3), 2);
        assert_eq!(track.clamp_previous(1), 1);
    }

    #[test]
    fn test_render_order() {
        let track = PaddedTrack::new(3).unwrap();
        assert_eq!(track.render_order(), vec![2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_clamp_real() {
        let track = PaddedTrack::new(3).unwrap();
        assert_eq!(track.clamp_real(99), 2);
        assert_eq!(track.clamp_real(1), 1);
    }
}
