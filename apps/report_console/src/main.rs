use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

mod config;
mod controller;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::controller::{actions::parse_action, session::ConsoleSession};

#[derive(Parser, Debug)]
#[command(about = "Drive the report-content dialog from the terminal")]
struct Args {
    #[arg(long, default_value = "report_console.toml")]
    config: PathBuf,
    /// Read actions from a file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Print `state` as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = config::load_settings(&args.config);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(settings.log_filter.as_deref().unwrap_or("info"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(config = %args.config.display(), echo_events = settings.echo_events, "report console starting");

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("failed to open action script '{}'", path.display())
        })?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut session = ConsoleSession::new(&settings, args.json);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (index, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read action line {}", index + 1))?;

        let action = match parse_action(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(err) => {
                tracing::debug!(line = index + 1, error = %err, "rejected action");
                writeln!(out, "error: {err}").context("failed to write to stdout")?;
                continue;
            }
        };

        let outcome = session.handle(action);
        for rendered in &outcome.lines {
            writeln!(out, "{rendered}").context("failed to write to stdout")?;
        }
        if outcome.quit {
            break;
        }
    }

    tracing::info!(
        step = ?session.step(),
        dialog_visible = session.controller().is_visible(),
        "report console finished"
    );
    Ok(())
}
