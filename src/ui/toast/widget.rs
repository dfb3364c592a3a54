use crate::ui::theme::{STATUS_ERROR, STATUS_OK, TOAST_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::state::{Notification, Severity};

const MAX_WIDTH: u16 = 48;
const MARGIN: u16 = 1;

/// Draw `notification` in the top-right corner of `area`.
pub fn render_toast(frame: &mut Frame<'_>, area: Rect, notification: &Notification) {
    let rect = toast_rect(area, notification);
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    let (title, color) = match notification.severity {
        Severity::Success => (" Success ", STATUS_OK),
        Severity::Failure => (" Failure ", STATUS_ERROR),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(color));
    let body = Paragraph::new(Line::from(notification.text.as_str()))
        .style(
            Style::default()
                .fg(TOAST_TEXT)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(Clear, rect);
    frame.render_widget(body, rect);
}

/// Panel placement: anchored top-right, sized to the text, clamped to `area`.
pub fn toast_rect(area: Rect, notification: &Notification) -> Rect {
    let available = area.width.saturating_sub(MARGIN * 2);
    let text_width = notification.text.chars().count() as u16;
    let width = text_width.saturating_add(4).min(MAX_WIDTH).min(available);
    let inner = width.saturating_sub(2).max(1);
    let lines = text_width.div_ceil(inner).max(1);
    let height = lines.saturating_add(2).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width + MARGIN),
        y: area.y + MARGIN.min(area.height.saturating_sub(height)),
        width,
        height,
    }
}
