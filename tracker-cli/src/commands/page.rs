//! `tracker page` — the rendered HTML page after replaying a script.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tracker_renderer::TemplateEngine;

use super::replay;

/// Arguments for `tracker page`.
#[derive(Args, Debug)]
pub struct PageArgs {
    /// Session script to replay (JSON lines).
    #[arg(long, value_name = "FILE")]
    pub script: PathBuf,

    /// Write the page here instead of stdout.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

impl PageArgs {
    pub fn run(self, engine: TemplateEngine) -> Result<()> {
        let app = replay(engine, &self.script)?;
        let html = app.to_html().context("failed to render page")?;

        match self.out {
            Some(path) => {
                std::fs::write(&path, html)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("✓ Wrote page to {}", path.display());
            }
            None => print!("{html}"),
        }
        Ok(())
    }
}
