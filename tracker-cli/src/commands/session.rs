//! `tracker session` — JSON-lines requests in, JSON-lines responses out.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tracker_renderer::{App, TemplateEngine};

use crate::protocol;

/// Arguments for `tracker session`.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Read requests from this file instead of stdin.
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

impl SessionArgs {
    pub fn run(self, engine: TemplateEngine) -> Result<()> {
        let mut app = App::new(engine).context("failed to mount views")?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let respond = |response: protocol::SessionResponse| -> Result<()> {
            let line = serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(out, "{line}").context("failed to write response")?;
            out.flush().context("failed to flush stdout")
        };

        let handled = match self.script {
            Some(path) => {
                let file = File::open(&path)
                    .with_context(|| format!("failed to open script {}", path.display()))?;
                protocol::run_script(&mut app, BufReader::new(file), respond)?
            }
            None => protocol::run_script(&mut app, io::stdin().lock(), respond)?,
        };
        tracing::info!(requests = handled, "session finished");
        Ok(())
    }
}
