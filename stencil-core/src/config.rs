//! Per-invocation render configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Indent, Result};

/// Default column budget for wrapped prose.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Layout settings shared by the renderers.
///
/// Every field has a default, so a configuration file only needs the keys it
/// changes:
///
/// ```
/// use stencil_core::RenderConfig;
///
/// let config = RenderConfig::from_toml_str("depth = 1\n", "stencil.toml").unwrap();
/// assert_eq!(config.depth, 1);
/// assert_eq!(config.line_width, 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Base indent depth. For values spliced into an enclosing block this is
    /// the embed level; for doc blocks it is the declaration's depth.
    pub depth: usize,
    /// One indent level.
    pub indent: Indent,
    /// Target line width for wrapped prose.
    pub line_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            depth: 0,
            indent: Indent::STANDARD,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from TOML source.
    pub fn from_toml_str(src: &str, filename: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| Error::config(e, src, filename))
    }

    /// Set the base indentation depth.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Set the target line width.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Columns left for text after `overhead` columns of fixed prefix.
    ///
    /// Never returns less than one column.
    pub fn wrap_width(&self, overhead: usize) -> usize {
        self.line_width.saturating_sub(overhead).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.depth, 0);
        assert_eq!(config.indent, Indent::Spaces(2));
        assert_eq!(config.line_width, 80);
    }

    #[test]
    fn test_wrap_width_never_zero() {
        let config = RenderConfig::default().with_line_width(4);
        assert_eq!(config.wrap_width(3), 1);
        assert_eq!(config.wrap_width(10), 1);
        assert_eq!(RenderConfig::default().wrap_width(5), 75);
    }

    #[test]
    fn test_from_toml() {
        let config = RenderConfig::from_toml_str(
            r#"
            depth = 2
            line_width = 100
            indent = { spaces = 4 }
            "#,
            "stencil.toml",
        )
        .expect("valid config");
        assert_eq!(config.depth, 2);
        assert_eq!(config.line_width, 100);
        assert_eq!(config.indent, Indent::Spaces(4));
    }

    #[test]
    fn test_from_toml_any_space_width() {
        let config = RenderConfig::from_toml_str("indent = { spaces = 3 }", "stencil.toml")
            .expect("valid config");
        assert_eq!(config.indent, Indent::Spaces(3));
        assert_eq!(config.indent.width(), 3);
        assert_eq!(config.indent.repeat(2), "      ");
    }

    #[test]
    fn test_from_toml_tab_indent() {
        let config = RenderConfig::from_toml_str("indent = \"tab\"", "stencil.toml")
            .expect("valid config");
        assert_eq!(config.indent, Indent::Tab);
    }

    #[test]
    fn test_unknown_field_is_config_error() {
        let err = RenderConfig::from_toml_str("colour = \"red\"", "stencil.toml").unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }
}
