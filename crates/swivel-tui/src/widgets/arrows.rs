use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::GruvboxMaterial;

pub struct ArrowsWidget;

impl ArrowsWidget {
    pub fn render(frame: &mut Frame, left: Rect, right: Rect, app: &App) {
        if !app.config.carousel.arrows {
            return;
        }
        Self::render_arrow(frame, left, "❮");
        Self::render_arrow(frame, right, "❯");
    }

    fn render_arrow(frame: &mut Frame, area: Rect, glyph: &str) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        // Single glyph, vertically centered in its column.
        let row = Rect {
            x: area.x,
            y: area.y + area.height / 2,
            width: area.width,
            height: 1,
        };
        let paragraph = Paragraph::new(glyph)
            .centered()
            .style(
                Style::default()
                    .fg(GruvboxMaterial::ACCENT)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(paragraph, row);
    }
}
