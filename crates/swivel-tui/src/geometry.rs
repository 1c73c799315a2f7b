//! Viewport geometry probe.

use ratatui::layout::Rect;

/// Width of one carousel unit, in terminal cells.
///
/// Read from the laid-out viewport rect, so it must be taken at draw time.
/// A zero-width rect is tolerated: every offset downstream degrades to
/// zero until a real measurement arrives.
pub fn unit_width(viewport: Rect) -> f32 {
    f32::from(viewport.width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_width_reads_rect_width() {
        let rect = Rect::new(2, 3, 40, 10);
        assert_eq!(unit_width(rect), 40.0);
    }

    #[test]
    fn test_zero_width_rect() {
        assert_eq!(unit_width(Rect::default()), 0.0);
    }
}
