use crate::api::ErrorInfo;
use crate::fetch::FetchResult;
use crate::ui::app::App;
use crate::ui::events::WriteAction;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::send_coin::{FormField, SendCoinFormState};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BITCOIN_ORANGE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use crate::ui::toast::render_toast;
use crate::ui::views::{
    address_text, balance_text, AddressView, HomeView, UpdateBlockchainView, View, SYNC_ACTIONS,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.screen(), app.base_url()).widget(), header);
    frame.render_widget(Clear, body);

    let lines = match app.view() {
        View::Home(home) => home_lines(home),
        View::Address(view) => address_lines(view),
        View::UpdateBlockchain(view) => sync_lines(view),
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.screen().title()),
            Style::default().fg(BITCOIN_ORANGE),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        body,
    );

    let footer_widget = Footer::new(app.screen());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(notification) = app.current_toast() {
        render_toast(frame, body, &notification);
    }
}

fn text_style() -> Style {
    Style::default().fg(HEADER_TEXT)
}

fn muted_style() -> Style {
    Style::default().fg(MUTED_TEXT)
}

/// Value line plus loading marker and, after a failed read, the reason.
fn fetched_lines<T>(text: String, result: &FetchResult<T>) -> Vec<Line<'static>> {
    let mut first = vec![Span::styled(text, text_style())];
    if result.is_loading {
        first.push(Span::styled("  (loading…)", muted_style()));
    }

    let mut lines = vec![Line::from(first)];
    if let Some(error) = result.error() {
        lines.push(error_line(error));
    }
    lines
}

fn error_line(error: &ErrorInfo) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", error.message),
        Style::default().fg(STATUS_ERROR).add_modifier(Modifier::DIM),
    ))
}

fn home_lines(home: &HomeView) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    lines.extend(fetched_lines(balance_text(home.balance()), home.balance()));
    lines.push(Line::from(""));
    lines.extend(form_lines(home.form()));
    lines
}

fn form_lines(form: &SendCoinFormState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for field in FormField::ALL {
        let focused = form.focused == field;
        lines.push(Line::from(Span::styled(
            field.label(),
            text_style().add_modifier(Modifier::BOLD),
        )));

        let value = form.field(field);
        let mut input = vec![Span::styled(if focused { " > " } else { "   " }, text_style())];
        if value.is_empty() {
            input.push(Span::styled(field.placeholder(), muted_style()));
        } else {
            input.push(Span::styled(value.to_string(), text_style()));
        }
        if focused {
            input.push(Span::styled("▏", Style::default().fg(BITCOIN_ORANGE)));
        }

        let mut line = Line::from(input);
        if focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
        lines.push(Line::from(""));
    }

    let button = if form.submitting {
        Span::styled(" Sending… ", muted_style())
    } else {
        Span::styled(
            "[ Send Coin(s) ]",
            Style::default()
                .fg(BITCOIN_ORANGE)
                .add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(vec![Span::raw(" "), button]));
    lines
}

fn address_lines(view: &AddressView) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    lines.extend(fetched_lines(address_text(view.address()), view.address()));
    lines
}

fn sync_lines(view: &UpdateBlockchainView) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    for action in SYNC_ACTIONS {
        let label = match action {
            WriteAction::GenerateBlock => "Generate block",
            _ => "Update Blockchain",
        };
        let selected = view.selected() == action;
        let mut spans = vec![
            Span::styled(if selected { " > " } else { "   " }, text_style()),
            Span::styled(format!("[ {} ]", label), text_style()),
        ];
        if view.in_flight() == Some(action) {
            spans.push(Span::styled("  (working…)", muted_style()));
        }

        let mut line = Line::from(spans);
        if selected {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    lines
}
