use crate::api::ApiClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;

/// Run the terminal UI until the user quits.
///
/// Must be called from within a tokio runtime; network requests are spawned
/// onto it while this thread drives input and drawing.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api).context("Failed to create backend client")?;
    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(client, config.ui.toast_duration(), events.sender());

    tracing::info!(
        base_url = %config.api.base_url,
        update_blockchain_url = %config.api.update_blockchain_url,
        "UI started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(app.next_wakeup(tick_rate, Instant::now())) {
            Ok(event) => app.handle_event(event),
            Err(RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
