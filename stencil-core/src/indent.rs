//! Indentation configuration for rendered text.

use serde::{Deserialize, Serialize};

/// Indentation style for rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation used by every stencil dialect.
    pub const STANDARD: Self = Self::Spaces(2);

    /// Columns occupied by one indent level (tabs count as one).
    pub fn width(&self) -> usize {
        match self {
            Self::Spaces(n) => usize::from(*n),
            Self::Tab => 1,
        }
    }

    /// The indentation string for `level` nesting levels.
    pub fn repeat(&self, level: usize) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(usize::from(*n) * level),
            Self::Tab => "\t".repeat(level),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::STANDARD
    }
}
