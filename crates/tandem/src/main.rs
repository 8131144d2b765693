//! Tandem - side-by-side diff viewer

mod app;
mod config;
mod views;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tandem_core::{DiffEngine, Document};

#[derive(Debug, Parser)]
#[command(name = "tandem", version, about = "Compare two files side by side")]
struct Cli {
    /// The original file
    left: PathBuf,

    /// The modified file
    right: PathBuf,

    /// Print the edit script and stats as JSON instead of opening the viewer
    #[arg(long)]
    json: bool,

    /// Maximum combined line count accepted for a comparison
    #[arg(long)]
    max_lines: Option<usize>,
}

/// Restores the terminal even when the draw loop errors out
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn run_viewer(mut app: App) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|frame| views::render_side_by_side(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let left = Document::from_file(&cli.left)
        .with_context(|| format!("failed to read {}", cli.left.display()))?;
    let right = Document::from_file(&cli.right)
        .with_context(|| format!("failed to read {}", cli.right.display()))?;

    let mut engine = DiffEngine::new();
    if let Some(limit) = cli.max_lines {
        engine = engine.with_max_lines(limit);
    }
    let result = engine
        .compare_documents(&left, &right)
        .context("comparison failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let config = config::load()?;
    let app = App::new(&left, &right, result, &config);
    run_viewer(app)
}
