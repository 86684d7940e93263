//! Tracker — project board driven from the command line.
//!
//! # Usage
//!
//! ```text
//! tracker session [--script <file>]
//! tracker board --script <file> [--only active|finished] [--json]
//! tracker page --script <file> [--out <file>]
//! tracker [--templates <dir>] <command>
//! ```
//!
//! All project state lives for one process; scripts are newline-delimited
//! JSON requests (see `protocol`).

mod commands;
mod protocol;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{board::BoardArgs, page::PageArgs, session::SessionArgs};
use tracker_core::{config, ProjectStatus};
use tracker_renderer::TemplateEngine;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "tracker",
    version,
    about = "Track projects across active and finished lists",
    long_about = None,
)]
struct Cli {
    /// Directory of `*.html` template overrides (defaults to the config's `templates`).
    #[arg(long, global = true, value_name = "DIR")]
    templates: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an interactive JSON-lines session on stdin/stdout.
    Session(SessionArgs),

    /// Replay a script and print both project lists.
    Board(BoardArgs),

    /// Replay a script and write the rendered HTML page.
    Page(PageArgs),
}

// ---------------------------------------------------------------------------
// Shared ProjectStatus argument — parsed from CLI strings, converts to core type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse `ProjectStatus` from CLI args.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectStatusArg(pub ProjectStatus);

impl FromStr for ProjectStatusArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<ProjectStatus>().map(Self)
    }
}

impl fmt::Display for ProjectStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ProjectStatusArg> for ProjectStatus {
    fn from(p: ProjectStatusArg) -> Self {
        p.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load().context("failed to load ~/.tracker/config.yaml")?;
    init_tracing(&config.log);

    let template_dir = cli.templates.or(config.templates);
    let engine = TemplateEngine::new(template_dir.as_deref()).with_context(|| match &template_dir {
        Some(dir) => format!("failed to load templates from {}", dir.display()),
        None => "failed to load embedded templates".to_string(),
    })?;

    match cli.command {
        Commands::Session(args) => args.run(engine),
        Commands::Board(args) => args.run(engine),
        Commands::Page(args) => args.run(engine),
    }
}

/// Logs go to stderr; stdout carries responses, tables and pages.
fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
