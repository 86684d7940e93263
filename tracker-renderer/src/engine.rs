//! Tera rendering engine — [`TemplateKind`] enum and [`TemplateEngine`].
//!
//! # Templates
//!
//! | Kind          | Template name                     | Renders                    |
//! |---------------|-----------------------------------|----------------------------|
//! | Page          | `page.html`                       | full document around `#app`|
//! | ProjectInput  | `components/project-input.html`   | the new-project form       |
//! | ProjectList   | `components/project-list.html`    | one status list            |
//! | ProjectItem   | `components/project-item.html`    | one draggable `<li>`       |
//!
//! Names keep the `.html` suffix so tera autoescapes user text.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::Tera;

use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("page.html", include_str!("templates/page.html")),
    (
        "components/project-input.html",
        include_str!("templates/project_input.html"),
    ),
    (
        "components/project-list.html",
        include_str!("templates/project_list.html"),
    ),
    (
        "components/project-item.html",
        include_str!("templates/project_item.html"),
    ),
];

// ---------------------------------------------------------------------------
// Override directory
// ---------------------------------------------------------------------------

/// Template name of `file` below `root`: `/`-separated and lowercase, so
/// `Components\Project-Item.html` overrides `components/project-item.html`.
fn override_name(root: &Path, file: &Path) -> String {
    file.strip_prefix(root)
        .unwrap_or(file)
        .components()
        .map(|part| part.as_os_str().to_string_lossy().to_lowercase())
        .collect::<Vec<_>>()
        .join("/")
}

/// Every `*.html` file below `root`, sorted by path.
fn html_files(root: &Path) -> Result<Vec<PathBuf>, RenderError> {
    let mut pending = vec![root.to_path_buf()];
    let mut found = Vec::new();
    while let Some(dir) = pending.pop() {
        let entries = std::fs::read_dir(&dir).map_err(|source| RenderError::Io {
            path: dir.clone(),
            source,
        })?;
        for entry in entries {
            let path = entry
                .map_err(|source| RenderError::Io {
                    path: dir.clone(),
                    source,
                })?
                .path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "html") {
                found.push(path);
            }
        }
    }
    found.sort();
    Ok(found)
}

fn load_overrides(root: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !root.is_dir() {
        tracing::warn!(path = %root.display(), "template override directory missing");
        return Ok(Vec::new());
    }
    html_files(root)?
        .into_iter()
        .map(|path| {
            let source = std::fs::read_to_string(&path).map_err(|source| RenderError::Io {
                path: path.clone(),
                source,
            })?;
            let name = override_name(root, &path);
            tracing::info!(template = %name, "loaded template override");
            Ok((name, source))
        })
        .collect()
}

/// Embedded templates, replaced name-for-name by any overrides.
fn build_tera(overrides: Option<&Path>) -> Result<Tera, RenderError> {
    let mut sources: BTreeMap<String, String> = TPLS
        .iter()
        .map(|(name, source)| (name.to_string(), source.to_string()))
        .collect();
    if let Some(root) = overrides {
        sources.extend(load_overrides(root)?);
    }

    let mut tera = Tera::default();
    tera.add_raw_templates(sources)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateKind
// ---------------------------------------------------------------------------

/// Every template the views render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Page,
    ProjectInput,
    ProjectList,
    ProjectItem,
}

impl TemplateKind {
    /// All kinds in a stable order.
    pub fn all() -> &'static [TemplateKind] {
        &[
            TemplateKind::Page,
            TemplateKind::ProjectInput,
            TemplateKind::ProjectList,
            TemplateKind::ProjectItem,
        ]
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            TemplateKind::Page         => "page.html",
            TemplateKind::ProjectInput => "components/project-input.html",
            TemplateKind::ProjectList  => "components/project-list.html",
            TemplateKind::ProjectItem  => "components/project-item.html",
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Renders the view templates. Overrides are named by their path relative
/// to the override directory.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Embedded templates plus any `*.html` overrides below `overrides`.
    pub fn new(overrides: Option<&Path>) -> Result<Self, RenderError> {
        Ok(Self {
            tera: build_tera(overrides)?,
        })
    }

    /// Engine with embedded templates only.
    pub fn embedded() -> Result<Self, RenderError> {
        Self::new(None)
    }

    /// Render `kind` with any serializable context.
    pub fn render<C: Serialize>(&self, kind: TemplateKind, ctx: &C) -> Result<String, RenderError> {
        let value = serde_json::to_value(ctx)?;
        let tera_ctx = tera::Context::from_value(value)?;
        Ok(self.tera.render(kind.template_name(), &tera_ctx)?)
    }
}
