use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::theme::GruvboxMaterial;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let autoplay_str = if !app.config.carousel.autoplay {
            "off"
        } else if app.autoplay_running {
            "on"
        } else {
            "paused"
        };

        let status_text = format!(
            " panel {}/{} | autoplay: {}",
            app.current + 1,
            app.panels.len(),
            autoplay_str
        );

        let help_hint = " q:quit h/l:move 1-9:jump space:autoplay ";
        let padding_len = area
            .width
            .saturating_sub((status_text.width() + help_hint.width()) as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default()
                    .fg(GruvboxMaterial::FG0)
                    .bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                help_hint,
                Style::default()
                    .fg(GruvboxMaterial::GREY2)
                    .bg(GruvboxMaterial::BG2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
