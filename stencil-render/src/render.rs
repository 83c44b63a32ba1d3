//! Common interface over the block renderers.

use stencil_core::Result;
use stencil_ir::{NamedCall, Renderable};

use crate::call::CallRenderer;
use crate::document::DocumentRenderer;
use crate::value::ValueRenderer;

/// A renderer producing a block of lines from one input tree.
pub trait LineRenderer {
    type Input: ?Sized;

    /// Render `input` as lines without trailing newlines.
    fn render_lines(&self, input: &Self::Input) -> Result<Vec<String>>;

    /// Render `input` as one string, lines joined with `\n`.
    fn render_string(&self, input: &Self::Input) -> Result<String> {
        Ok(self.render_lines(input)?.join("\n"))
    }
}

impl LineRenderer for ValueRenderer {
    type Input = Renderable;

    fn render_lines(&self, input: &Renderable) -> Result<Vec<String>> {
        self.render_multiline(input)
    }
}

impl LineRenderer for CallRenderer {
    type Input = NamedCall;

    fn render_lines(&self, input: &NamedCall) -> Result<Vec<String>> {
        self.render(input)
    }
}

impl LineRenderer for DocumentRenderer {
    type Input = Renderable;

    fn render_lines(&self, input: &Renderable) -> Result<Vec<String>> {
        self.render(input)
    }
}
