//! Swipe Quiz - true/false questions answered with a swipe
//!
//! Swipe a statement right if it is true, left if it is false. Correct
//! answers leave the list; wrong ones snap back.

mod bank;
mod config;
mod error;
mod gesture;
mod logging;
mod models;
mod quiz;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use bank::QuestionBank;
use config::Config;
use ui::App;

// ══════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ══════════════════════════════════════════════════════════════════════════

#[derive(Parser, Debug)]
#[command(name = "swipequiz")]
#[command(author, version, about = "True/false quiz answered by swiping", long_about = None)]
struct Args {
    /// Question bank JSON file (defaults to the bundled bank)
    #[arg(short, long)]
    bank: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate the question bank and exit
    #[arg(long)]
    check: bool,

    /// Print the questions with their answers and exit
    #[arg(long, conflicts_with = "check")]
    list: bool,
}

// ══════════════════════════════════════════════════════════════════════════
// Main Entry Point
// ══════════════════════════════════════════════════════════════════════════

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    let config_path = args.config.unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path).unwrap_or_else(|err| {
        warn!(error = %err, path = ?config_path, "falling back to default config");
        Config::default()
    });

    let bank_path = args.bank.or_else(|| config.bank.clone());
    let bank = QuestionBank::load_or_bundled(bank_path.as_deref())?;

    // A bank whose lists don't line up never reaches the terminal
    let store = bank.to_store()?;

    if args.check {
        println!("✓ '{}' has {} questions", bank.name, bank.question_count());
        return Ok(());
    }

    if args.list {
        for (i, question) in store.iter().enumerate() {
            let answer = if question.answer() { "true" } else { "false" };
            println!("{:>3}. [{:>5}] {}", i + 1, answer, question.text());
        }
        return Ok(());
    }

    let app = App::new(bank, config, config_path)?;
    run_tui(app)
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
        return Err(err);
    }

    info!("session ended");
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }
    Ok(())
}
