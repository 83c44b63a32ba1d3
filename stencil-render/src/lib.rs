//! Source-text renderers for stencil trees.
//!
//! Every renderer turns a [`stencil_ir::Renderable`] tree into a block of
//! lines without trailing newlines. Blocks start at column 0 relative to
//! their embed level; callers re-indent them when composing larger files.
//!
//! # Module Organization
//!
//! - [`value`] - Value literals in several dialects (ValueRenderer, Dialect)
//! - [`docblock`] - Documentation comments with wrapped prose and tags (DocBlock)
//! - [`call`] - Annotations and attributes (CallRenderer, CallDialect)
//! - [`document`] - YAML configuration documents (DocumentRenderer)
//! - [`fluent`] - Chained method calls (FluentChain)
//! - [`lines`] - Indented line building (LineBuilder)
//! - [`render`] - Uniform interface over the block renderers (LineRenderer)

pub mod call;
pub mod docblock;
pub mod document;
pub mod fluent;
pub mod lines;
pub mod render;
pub mod value;
pub mod wrap;

pub use call::{CallDialect, CallRenderer};
pub use docblock::DocBlock;
pub use document::DocumentRenderer;
pub use fluent::{FluentCall, FluentChain};
pub use lines::LineBuilder;
pub use render::LineRenderer;
pub use value::{Dialect, Layout, ValueRenderer, quote_with};
pub use wrap::wrap;
