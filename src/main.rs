// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    ExecutableCommand,
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

mod app;
mod config;
mod core;
mod logging;
mod ui;

use app::{App, ViewState};
use config::{Cli, Settings};
use crate::core::backend::AnalysisBackend;
use crate::core::error::ScanError;
use crate::core::models::{AnalysisResult, UploadedFile};

type ScanOutcome = Result<AnalysisResult, ScanError>;

// Fast enough for a smooth progress bar while scanning.
const FRAME_INTERVAL: Duration = Duration::from_millis(35);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::initialize_logging()?;

    let settings = Settings::resolve(&cli)?;
    let backend = crate::core::backend::build(&settings)?;
    info!(backend = %backend.describe(), log = %logging::log_path().display(), "Starting.");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let outcome = run(&mut terminal, backend, cli.file).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableBracketedPaste)?;
    disable_raw_mode()?;
    outcome
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    backend: Arc<dyn AnalysisBackend>,
    initial_file: Option<PathBuf>,
) -> Result<()> {
    let mut app = App::new(backend.describe());
    let (tx, mut rx) = mpsc::channel::<ScanOutcome>(1);

    if let Some(path) = initial_file {
        app.input = path.display().to_string();
        if let Some(file) = app.submit_input() {
            spawn_analysis(&backend, file, &tx);
        }
    }

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(FRAME_INTERVAL)? {
            if let Some(file) = handle_events(&mut app)? {
                spawn_analysis(&backend, file, &tx);
            }
        }

        if let Ok(outcome) = rx.try_recv() {
            app.complete_scan(outcome);
        }
    }
    Ok(())
}

/// Runs both backend calls off the UI loop; the outcome comes back over the
/// channel and only the loop touches the view-state.
fn spawn_analysis(backend: &Arc<dyn AnalysisBackend>, file: UploadedFile, tx: &mpsc::Sender<ScanOutcome>) {
    let backend = Arc::clone(backend);
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = crate::core::pipeline::run_analysis(backend.as_ref(), &file).await;
        let _ = tx.send(outcome).await;
    });
}

/// Handles one terminal event. Returns a file when the event started a scan.
fn handle_events(app: &mut App) -> Result<Option<UploadedFile>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key(app, key)),
        // Terminals hand over a dragged-in file as pasted text.
        Event::Paste(text) => Ok(app.submit_dropped(&text)),
        _ => Ok(None),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Option<UploadedFile> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return None;
    }
    match app.state {
        ViewState::Upload { .. } => return handle_upload_input(app, key.code),
        ViewState::Scanning { .. } => {
            if key.code == KeyCode::Char('q') {
                app.quit();
            }
        }
        ViewState::Results { .. } => handle_results_input(app, key.code),
        ViewState::Error { .. } => match key.code {
            KeyCode::Char('q') => app.quit(),
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Esc => app.reset(),
            _ => {}
        },
    }
    None
}

/// Typing a path and pressing Enter is the file-picker entry point.
fn handle_upload_input(app: &mut App, key_code: KeyCode) -> Option<UploadedFile> {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => return app.submit_input(),
        _ => {}
    }
    None
}

fn handle_results_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Up => app.select_previous_job(),
        KeyCode::Down => app.select_next_job(),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        _ => {}
    }
}
