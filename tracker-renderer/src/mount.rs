//! Mountable views: render to HTML, attach to the document, re-render in
//! place.

use std::cell::RefCell;
use std::rc::Rc;

use crate::document::{Document, InsertPosition};
use crate::engine::TemplateEngine;
use crate::error::RenderError;

/// Shared handles every view renders through. Cloning is cheap.
#[derive(Clone)]
pub struct ViewContext {
    pub engine: Rc<TemplateEngine>,
    pub document: Rc<RefCell<Document>>,
}

impl ViewContext {
    pub fn new(engine: TemplateEngine) -> Self {
        Self {
            engine: Rc::new(engine),
            document: Rc::new(RefCell::new(Document::new())),
        }
    }
}

pub trait Mount {
    fn element_id(&self) -> String;

    fn position(&self) -> InsertPosition {
        InsertPosition::BeforeEnd
    }

    fn render(&self, engine: &TemplateEngine) -> Result<String, RenderError>;

    fn attach(&self, ctx: &ViewContext) -> Result<(), RenderError> {
        let html = self.render(&ctx.engine)?;
        ctx.document
            .borrow_mut()
            .insert(self.position(), self.element_id(), html)
    }

    /// Replace this view's element with a fresh render.
    fn refresh(&self, ctx: &ViewContext) -> Result<(), RenderError> {
        let html = self.render(&ctx.engine)?;
        ctx.document.borrow_mut().replace(&self.element_id(), html)
    }
}
