//! Core utilities and types for stencil.
//!
//! This crate provides the error type, render configuration and naming
//! helpers used across the stencil renderers.

mod config;
mod error;
mod indent;
mod naming;

// Configuration
pub use config::{DEFAULT_LINE_WIDTH, RenderConfig};
// Errors
pub use error::{Error, Result};
pub use indent::Indent;
// String utilities
pub use naming::{describe, is_identifier, to_snake_case, to_words};
