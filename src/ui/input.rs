use crate::ui::app::App;
use crate::ui::send_coin::SendCoinIntent;
use crate::ui::views::{Screen, View};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.refresh();
        return;
    }

    match key.code {
        KeyCode::F(1) => return app.navigate(Screen::Home),
        KeyCode::F(2) => return app.navigate(Screen::Address),
        KeyCode::F(3) => return app.navigate(Screen::UpdateBlockchain),
        KeyCode::Esc => return app.close_toast(),
        _ => {}
    }

    match app.screen() {
        Screen::Home => handle_home_key(app, key),
        Screen::UpdateBlockchain => handle_sync_key(app, key),
        Screen::Address => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.submit_send_coins();
        return;
    }

    let intent = match key.code {
        KeyCode::Tab | KeyCode::Down => SendCoinIntent::FocusNext,
        KeyCode::BackTab | KeyCode::Up => SendCoinIntent::FocusPrev,
        KeyCode::Backspace => SendCoinIntent::Backspace,
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            SendCoinIntent::Input(ch)
        }
        _ => return,
    };

    if let View::Home(home) = app.view_mut() {
        home.dispatch_form(intent);
    }
}

fn handle_sync_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => {
            if let View::UpdateBlockchain(view) = app.view_mut() {
                view.move_selection(-1);
            }
        }
        KeyCode::Down | KeyCode::Tab => {
            if let View::UpdateBlockchain(view) = app.view_mut() {
                view.move_selection(1);
            }
        }
        KeyCode::Enter => app.run_selected_sync_action(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
