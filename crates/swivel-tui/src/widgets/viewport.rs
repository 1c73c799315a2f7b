use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Panel};
use crate::theme::GruvboxMaterial;

pub struct ViewportWidget;

impl ViewportWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let background = Block::default().style(Style::default().bg(GruvboxMaterial::BG0));
        frame.render_widget(background, area);

        if app.panels.is_empty() || area.width == 0 {
            return;
        }

        let unit = f32::from(area.width);
        let offset = app.slide.current_offset();

        for (padded, &real) in app.render_order.iter().enumerate() {
            // The strip leads with one unit of padding, so slot p starts
            // at (p + 1) * unit; the applied offset brings the current
            // slot to the left edge of the viewport.
            let strip_x = (padded as f32 + 1.0) * unit + offset;
            let left = strip_x.round() as i32;
            let right = left + i32::from(area.width);
            if right <= 0 || left >= i32::from(area.width) {
                continue;
            }

            // Clip partially visible panels to the viewport.
            let clip_left = left.max(0) as u16;
            let clip_right = right.min(i32::from(area.width)) as u16;
            if clip_right <= clip_left {
                continue;
            }
            let slot_area = Rect {
                x: area.x + clip_left,
                y: area.y,
                width: clip_right - clip_left,
                height: area.height,
            };

            Self::render_panel(frame, slot_area, &app.panels[real]);
        }
    }

    fn render_panel(frame: &mut Frame, area: Rect, panel: &Panel) {
        let block = Block::default()
            .title(Line::from(Span::styled(
                format!(" {} ", panel.title),
                Style::default()
                    .fg(GruvboxMaterial::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GruvboxMaterial::GREY0))
            .style(Style::default().bg(GruvboxMaterial::BG1));

        let inner_height = area.height.saturating_sub(2) as usize;
        let top_padding = inner_height.saturating_sub(panel.body.len()) / 2;

        let mut lines: Vec<Line> = Vec::with_capacity(top_padding + panel.body.len());
        lines.resize(top_padding, Line::default());
        lines.extend(panel.body.iter().map(|text| {
            Line::from(Span::styled(
                text.clone(),
                Style::default().fg(GruvboxMaterial::FG0),
            ))
        }));

        let paragraph = Paragraph::new(lines).centered().block(block);
        frame.render_widget(paragraph, area);
    }
}
