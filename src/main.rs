//! Mind - CLI
//!
//! Guess the four secret digits before your chances run out.

use anyhow::{Context, Result};
use clap::Parser;
use mind::{
    commands::run_game,
    config::{GameConfig, report_warnings},
    input::TerminalGuard,
    output::{ColorTheme, Screen},
};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mind",
    about = "Guess four secret digits: G = right place, Y = elsewhere in the answer, R = absent",
    version,
    author
)]
struct Cli {
    /// Number of attempts (non-numeric or zero means 10)
    #[arg(short = 'c', long, default_value = "10", allow_hyphen_values = true)]
    chances: String,

    /// Color mode: auto (default), mono, dark, light, grey
    #[arg(short = 'C', long, default_value = "auto", allow_hyphen_values = true)]
    color: String,

    /// Fixed seed for the secret (default: current time)
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics stay off unless RUST_LOG asks for them
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let config = GameConfig::from_args(&cli.chances, &cli.color, cli.seed.as_deref());
    report_warnings(&config.warnings, &mut io::stderr()).context("writing warnings failed")?;

    // Restored on drop, including early returns below
    let guard = TerminalGuard::acquire();
    let theme = ColorTheme::resolve(config.color_mode, guard.is_interactive());
    if theme.uses_color() {
        colored::control::set_override(true);
    }
    let screen = Screen::new(io::stdout().lock(), guard.line_ending());

    run_game(&config, &theme, io::stdin().lock(), screen).context("terminal I/O failed")?;

    Ok(())
}
