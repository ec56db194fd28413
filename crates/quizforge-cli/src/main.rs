//! quizforge CLI — the interactive quiz and flashcard trainer.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quizforge_core::session::Session;
use quizforge_store::{load_config_from, JsonStorage};

mod menu;
mod terminal;

use terminal::TerminalConsole;

#[derive(Parser)]
#[command(
    name = "quizforge",
    version,
    about = "Interactive quiz and flashcard trainer"
)]
struct Cli {
    /// Config file path (default: ./quizforge.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding questions, profiles and results
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizforge=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config_from(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "starting");

    let storage = JsonStorage::from_config(&config);
    let mut session = Session::load(storage)?.with_min_questions(config.min_questions);
    let mut console = TerminalConsole::stdio();
    menu::run(&mut session, &mut console)
}
