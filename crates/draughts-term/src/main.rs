//! Terminal front-end for the draughts rules engine.
//!
//! Reads commands from stdin, forwards them to the engine and prints the
//! board after each one. All rule logic lives in `draughts-engine`.

mod command;
mod config;
mod render;
mod session;

use anyhow::Context;
use clap::Parser;
use command::Command;
use config::Config;
use draughts_engine::Game;
use session::{Flow, Session};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Play English draughts in the terminal.
#[derive(Parser)]
#[command(name = "draughts-term")]
#[command(about = "Play English draughts in the terminal")]
struct Args {
    /// Path to a draughts.toml config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Square size in pixels for `click` input (overrides the config file)
    #[arg(long)]
    square_size: Option<u32>,

    /// Starting position in layout notation
    #[arg(long)]
    layout: Option<String>,

    /// Log level for diagnostics written to stderr
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let mut config = Config::load(args.config.as_deref()).context("loading config")?;
    if let Some(size) = args.square_size.filter(|&size| size > 0) {
        config.square_size = size;
    }
    tracing::debug!(?config, "configuration");

    let game = match &args.layout {
        Some(layout) => Game::from_layout(layout).context("parsing --layout")?,
        None => Game::new(),
    };

    let mut session = Session::new(game, config);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "{}", session.show())?;
    writeln!(out, "type 'help' for commands")?;

    for line in stdin.lock().lines() {
        let line = line?;
        let output = match Command::parse(&line) {
            Ok(command) => match session.handle(command) {
                (Flow::Quit, _) => break,
                (Flow::Continue, output) => output,
            },
            Err(e) => e.to_string(),
        };
        if !output.is_empty() {
            writeln!(out, "{}", output)?;
        }
        out.flush()?;
    }

    tracing::info!(plies = session.game().ply_count(), "session ended");
    Ok(())
}
