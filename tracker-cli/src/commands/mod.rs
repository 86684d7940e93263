pub mod board;
pub mod page;
pub mod session;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use tracker_renderer::{App, TemplateEngine};

use crate::protocol;

/// Replay a script quietly, returning the resulting application.
///
/// Failed requests are logged and otherwise ignored, so a board or page
/// always reflects whatever the script managed to do.
pub(crate) fn replay(engine: TemplateEngine, script: &Path) -> Result<App> {
    let mut app = App::new(engine).context("failed to mount views")?;
    let file = File::open(script)
        .with_context(|| format!("failed to open script {}", script.display()))?;
    let mut failed = 0usize;
    let handled = protocol::run_script(&mut app, BufReader::new(file), |response| {
        if let Some(error) = response.error {
            failed += 1;
            tracing::warn!(%error, "script request failed");
        }
        Ok(())
    })?;
    tracing::info!(requests = handled, failed, "script replayed");
    Ok(app)
}
