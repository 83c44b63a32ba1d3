//! Renderable data model for the stencil renderers.
//!
//! This crate provides the single input type shared by every renderer in
//! `stencil-render`. Trees are built fresh for each generation request,
//! consumed by one render call and discarded.
//!
//! # Architecture
//!
//! ```text
//! definition catalog → Renderable tree (stencil-ir) → renderer → Vec<String>
//! ```
//!
//! The types are designed to be:
//! - Dialect-agnostic (no quoting or layout decisions live here)
//! - Order-preserving (maps keep insertion order)
//! - Explicit about raw expressions (never inferred unless asked)

mod builder;
mod convert;
mod renderable;

pub use builder::MapBuilder;
pub use renderable::{EmbeddedDocument, NamedCall, OrderedMap, Renderable, Scalar};
