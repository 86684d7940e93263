//! In-memory document: the children attached to the application host.
//!
//! Views attach one element each and replace its HTML wholesale when they
//! re-render. Element ids are unique.

use crate::context::{PageCtx, SectionCtx};
use crate::engine::{TemplateEngine, TemplateKind};
use crate::error::RenderError;

pub const PAGE_TITLE: &str = "ProjectManager";

/// Where a new element goes relative to the host's existing children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    AfterBegin,
    BeforeEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub html: String,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    children: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        position: InsertPosition,
        id: impl Into<String>,
        html: String,
    ) -> Result<(), RenderError> {
        let id = id.into();
        if self.get(&id).is_some() {
            return Err(RenderError::DuplicateElement { id });
        }
        let element = Element { id, html };
        match position {
            InsertPosition::AfterBegin => self.children.insert(0, element),
            InsertPosition::BeforeEnd => self.children.push(element),
        }
        Ok(())
    }

    pub fn replace(&mut self, id: &str, html: String) -> Result<(), RenderError> {
        let element = self
            .children
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RenderError::ElementNotFound { id: id.to_string() })?;
        element.html = html;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Element, RenderError> {
        let index = self
            .children
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| RenderError::ElementNotFound { id: id.to_string() })?;
        Ok(self.children.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.children.iter().find(|e| e.id == id)
    }

    /// Ids of attached elements in document order.
    pub fn ids(&self) -> Vec<&str> {
        self.children.iter().map(|e| e.id.as_str()).collect()
    }

    /// Render the whole page around the attached elements.
    pub fn render_page(&self, engine: &TemplateEngine) -> Result<String, RenderError> {
        let ctx = PageCtx {
            title: PAGE_TITLE.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            sections: self
                .children
                .iter()
                .map(|e| SectionCtx {
                    id: e.id.clone(),
                    html: e.html.clone(),
                })
                .collect(),
        };
        engine.render(TemplateKind::Page, &ctx)
    }
}
