mod api;
mod app;
mod clipboard;
mod config;
mod logging;
mod session;
mod ui;

use crate::api::client::TutorClient;
use crate::api::manager::RequestManager;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::*;
use crate::logging::TranscriptLogger;
use crate::session::{Session, TokenStore};
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

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
    logging::init_tracing(&cfg.logging)?;
    let session = Session::restore(TokenStore::new(cfg.session.token_path()))
        .context("Failed to restore session")?;
    let client = TutorClient::new(cfg.api.base_url.clone(), cfg.api.timeout())
        .context("Failed to build HTTP client")?;
    info!(base_url = client.base_url(), "Starting bac-tutor");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, session, client).await;

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
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    session: Session,
    client: TutorClient,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let tick_ms = cfg.ui.tick_ms.max(10);
    let mut transcript_logger = TranscriptLogger::new(&cfg.logging);
    let mut state = AppState::new(cfg, session);
    let mut requests = RequestManager::new(client, event_tx.clone());

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
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(tick_ms));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for entry in state.new_transcripts.drain(..) {
            transcript_logger.log_entry(&entry);
        }

        // Process actions
        for action in actions {
            match action {
                Action::Login { username, password } => requests.login(username, password),
                Action::Register { username, password } => requests.register(username, password),
                Action::Submit {
                    ticket,
                    bearer,
                    request,
                } => requests.submit(ticket, bearer, request),
                Action::CancelRequests => requests.cancel_all(),
                Action::CopyToClipboard { text } => {
                    if let Err(e) = clipboard::copy(&mut io::stdout(), &text) {
                        warn!(error = %e, "Clipboard write failed");
                        state.show_toast("Could not copy to clipboard", ToastKind::Error);
                    }
                }
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            requests.cancel_all();
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    info!("Exiting");
    Ok(())
}
