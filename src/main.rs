mod app;
mod config;
mod data;
mod host;
mod logging;
mod session;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::{AppState, FeedbackKind};
use crate::data::GalleryData;
use crate::host::Capabilities;
use crate::logging::SessionLogger;
use crate::session::name::generate_session_name;
use crate::session::SessionModel;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;

    // Diagnostics go to a file; the terminal belongs to the UI
    logging::init_tracing(&cfg.logging)?;

    // Probe the terminal once; presentation branches on this fixed set
    let size = crossterm::terminal::size().unwrap_or((80, 24));
    let mut caps = Capabilities::detect(size);
    if cfg.ui.ascii_only {
        caps.unicode = false;
    }
    tracing::info!(?caps, "starting session");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if caps.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, caps, size).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    caps: Capabilities,
    size: (u16, u16),
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // One process is one session
    let session_name = generate_session_name();
    let mut session = SessionModel::new(&cfg.ui.timestamp_format);
    let gallery = GalleryData::load(&cfg.data);
    let mut state = AppState::new(cfg.clone(), caps, session_name.clone(), gallery, size);
    let mut session_logger = SessionLogger::new(&cfg.logging, &session_name);

    if !caps.roomy {
        state.push_feedback(
            FeedbackKind::Warning,
            "Terminal is smaller than 80x24; the session panel is hidden.".to_string(),
        );
    }
    state.push_feedback(
        FeedbackKind::Info,
        "Welcome! Tab switches tabs, +'s the counter, q quits.".to_string(),
    );

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    let tick_rate = cfg.ui.tick_rate_ms.max(10);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(tick_rate));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state, &session.snapshot()))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions: each one is a session-model call or a host effect
        for action in actions {
            match action {
                Action::Increment => {
                    let value = session.increment();
                    session_logger.log_interaction(&format!("counter incremented to {}", value));
                    state.dirty = true;
                }
                Action::SubmitMessage { text } => {
                    if let Some(turns) = session.submit_message(&text) {
                        for turn in turns {
                            session_logger.log_turn(turn);
                        }
                        state.dirty = true;
                    }
                }
                Action::StartTask => {
                    state.progress.start();
                    session_logger.log_interaction("fake task started");
                    state.dirty = true;
                }
                Action::LaunchEffect { kind } => {
                    state.launch_effect(kind);
                    session_logger.log_interaction(&format!("effect launched: {:?}", kind));
                }
                Action::SaveConfig => match config::save_config(&state.config) {
                    Ok(()) => state.show_toast("Config saved"),
                    Err(e) => {
                        state.push_feedback(
                            FeedbackKind::Error,
                            format!("Config save failed: {}", e),
                        );
                    }
                },
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            tracing::info!("session ended");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state, &session.snapshot()))?;
            state.dirty = false;
        }
    }

    Ok(())
}
