use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BITCOIN_ORANGE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT,
};
use crate::ui::views::Screen;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    active: Screen,
    base_url: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(active: Screen, base_url: &'a str) -> Self {
        Self { active, base_url }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Simple Bitcoin",
                Style::default()
                    .fg(BITCOIN_ORANGE)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        for (idx, screen) in Screen::ALL.iter().enumerate() {
            spans.push(Span::styled("  │  ", separator_style));
            let label = format!("F{} {}", idx + 1, screen.title());
            let style = if *screen == self.active {
                text_style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
            } else {
                text_style
            };
            spans.push(Span::styled(label, style));
        }

        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(self.base_url, Style::default().fg(MUTED_TEXT)));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
