//! Hito, a terminal file browser built with ratatui.
//!
//! This binary parses the command line, initialises the terminal, runs the
//! event loop, and restores the terminal on exit or panic.

mod app;
mod icons;
mod input;
mod render;
mod ui;

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hito_core::config::default_config_dir;
use hito_core::{Command, CoreError};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use crate::app::{App, StartOptions};
use crate::input::handle_key;
use crate::render::{list_viewport_height, render};

/// Browse the filesystem with a live preview.
#[derive(Parser, Debug)]
#[command(name = "hito", version)]
struct Cli {
    /// Directory to open (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Start with hidden entries visible
    #[arg(long)]
    hidden: bool,

    /// Read config.toml, theme.toml and keymap.toml from DIR
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,
}

/// Sends tracing output to `$TMPDIR/hito.log`, filtered by `HITO_LOG`.
///
/// Logging stays off if the file cannot be opened.
fn init_logging() {
    let path = std::env::temp_dir().join("hito.log");
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(_) => return,
    };
    let filter = EnvFilter::try_from_env("HITO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    if !io::stdout().is_terminal() {
        eprintln!("Error: {}", CoreError::NotATerminal);
        std::process::exit(1);
    }

    install_panic_hook();

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            eprintln!("Error: failed to initialise terminal: {e}");
            std::process::exit(1);
        }
    };

    let result = run_app(&mut terminal, cli);

    let restored = restore_terminal(&mut terminal);

    let errors = shutdown_errors(restored, result);
    for message in &errors {
        tracing::error!("{message}");
        eprintln!("Error: {message}");
    }
    if !errors.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

/// Collects the restore failure and the run-loop failure, in that order.
///
/// Neither hides the other.
fn shutdown_errors(restored: anyhow::Result<()>, result: anyhow::Result<()>) -> Vec<String> {
    let restore_error = restored
        .err()
        .map(|e| format!("failed to restore terminal: {e}"));
    let run_error = result.err().map(|e| e.to_string());
    restore_error.into_iter().chain(run_error).collect()
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, cli: Cli) -> anyhow::Result<()> {
    let height = terminal.size()?.height;
    let options = StartOptions {
        path: cli.path,
        show_hidden: cli.hidden,
        config_dir: cli.config_dir.unwrap_or_else(default_config_dir),
        viewport_height: list_viewport_height(height),
    };
    let mut app = App::new(&options);
    tracing::info!("started in {}", app.session().cwd().display());

    loop {
        terminal.draw(|f| render(f, &app))?;

        let command = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, app.keymap()),
            Event::Resize(_, height) => Some(Command::Resize {
                viewport_height: list_viewport_height(height),
            }),
            _ => None,
        };

        if let Some(command) = command {
            app = app.dispatch(command);
        }
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
