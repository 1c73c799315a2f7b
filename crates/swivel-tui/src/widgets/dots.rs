use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use swivel_core::DotsSize;

use crate::app::App;
use crate::theme::GruvboxMaterial;

pub struct DotsWidget;

impl DotsWidget {
    fn glyph(size: DotsSize) -> &'static str {
        match size {
            DotsSize::Small => "∙",
            DotsSize::Normal => "●",
            DotsSize::Large => "⬤",
        }
    }

    fn gap(size: DotsSize) -> u16 {
        match size {
            DotsSize::Large => 2,
            _ => 1,
        }
    }

    /// Per-dot rects, centered in `area`. Shared between rendering and
    /// mouse hit-testing so clicks always agree with what is drawn.
    /// Empty when the indicator is suppressed (one panel or no room).
    pub fn layout(area: Rect, count: usize, size: DotsSize) -> Vec<Rect> {
        if count <= 1 || area.width == 0 || area.height == 0 {
            return Vec::new();
        }

        let glyph_width = Self::glyph(size).width().max(1) as u16;
        let gap = Self::gap(size);
        let count_u16 = count as u16;
        let total = count_u16 * glyph_width + (count_u16 - 1) * gap;
        let start = area.x + area.width.saturating_sub(total) / 2;

        (0..count_u16)
            .map(|i| Rect {
                x: start + i * (glyph_width + gap),
                y: area.y,
                width: glyph_width,
                height: 1,
            })
            .collect()
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let carousel = &app.config.carousel;
        if !carousel.dots || app.panels.len() <= 1 {
            return;
        }

        let glyph = Self::glyph(carousel.dots_size);
        let gap = " ".repeat(Self::gap(carousel.dots_size) as usize);
        let accent = GruvboxMaterial::dots_accent(carousel.dots_color);

        let mut spans = Vec::with_capacity(app.panels.len() * 2);
        for real in 0..app.panels.len() {
            if real > 0 {
                spans.push(Span::raw(gap.clone()));
            }
            let style = if real == app.current {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(GruvboxMaterial::GREY0)
            };
            spans.push(Span::styled(glyph, style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).centered();
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_suppressed_for_single_panel() {
        let area = Rect::new(0, 0, 40, 1);
        assert!(DotsWidget::layout(area, 1, DotsSize::Normal).is_empty());
        assert!(DotsWidget::layout(area, 0, DotsSize::Normal).is_empty());
    }

    #[test]
    fn test_layout_one_rect_per_panel() {
        let area = Rect::new(0, 10, 40, 1);
        let dots = DotsWidget::layout(area, 4, DotsSize::Normal);
        assert_eq!(dots.len(), 4);
        assert!(dots.iter().all(|d| d.y == 10 && d.height == 1));
    }

    #[test]
    fn test_layout_is_centered() {
        let area = Rect::new(0, 0, 41, 1);
        let dots = DotsWidget::layout(area, 3, DotsSize::Normal);
        // 3 glyphs + 2 gaps = 5 cells, centered in 41 -> starts at 18
        assert_eq!(dots[0].x, 18);
        assert_eq!(dots[2].x, 22);
    }

    #[test]
    fn test_layout_large_dots_spread_wider() {
        let area = Rect::new(0, 0, 40, 1);
        let normal = DotsWidget::layout(area, 3, DotsSize::Normal);
        let large = DotsWidget::layout(area, 3, DotsSize::Large);
        let normal_span = normal[2].x - normal[0].x;
        let large_span = large[2].x - large[0].x;
        assert!(large_span > normal_span);
    }
}
