//! Two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tictactoe_round::{RoundEvent, RoundSession, SessionHandle};
use tictactoe_tui::{App, Cli, KeyAction, input, ui};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

/// Frame pacing while something is animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Poll timeout while the screen is static.
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

type Session = SessionHandle<mpsc::UnboundedSender<RoundEvent>>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Log to a file so output doesn't tear the UI
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let settings = cli.settings().context("Failed to load settings")?;
    info!(?settings, "Starting tic-tac-toe");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut session = RoundSession::spawn(event_tx, settings);
    let app = App::new(settings);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &session, &mut event_rx);

    // Cancels a pending reset if we quit mid-pause
    session.shutdown().await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "UI loop error");
        eprintln!("Error: {:?}", err);
    }

    info!("Exiting");
    Ok(())
}

/// Draw/poll loop. Returns when the user quits.
#[instrument(skip_all)]
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    session: &Session,
    event_rx: &mut mpsc::UnboundedReceiver<RoundEvent>,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    // Set after a tap until the session's reply has been drained.
    let mut awaiting_session = false;

    loop {
        let now = Instant::now();
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event, now);
            awaiting_session = false;
        }

        terminal.draw(|f| ui::draw(f, &mut app, now))?;

        let timeout = if awaiting_session || app.is_animating(now) {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };
        if !event::poll(timeout)? {
            // Replies to the last tap, if any, are drained on the next pass.
            awaiting_session = false;
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                match input::key_action(app.cursor(), key.code) {
                    KeyAction::Quit => {
                        info!("Quit requested");
                        return Ok(());
                    }
                    KeyAction::MoveCursor(pos) => app.set_cursor(pos),
                    KeyAction::Tap(pos) if app.accepts_input() => {
                        debug!(position = %pos, "Key tap");
                        app.set_cursor(pos);
                        awaiting_session = session.tap(pos.row(), pos.col());
                    }
                    KeyAction::Tap(_) | KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) if app.accepts_input() => {
                if let Some(pos) = input::mouse_tap(app.board_extent(), mouse) {
                    debug!(position = %pos, "Mouse tap");
                    app.set_cursor(pos);
                    awaiting_session = session.tap(pos.row(), pos.col());
                }
            }
            _ => {}
        }
    }
}
