//! Value-literal rendering.
//!
//! One table-driven algorithm renders scalars and nested collections in every
//! [`Dialect`]. Dialects only differ in their [`Syntax`] table: delimiters,
//! key form, quote preference and keyword spelling.
//!
//! # Example
//!
//! ```
//! use stencil_ir::Renderable;
//! use stencil_render::{Dialect, ValueRenderer};
//!
//! let value = Renderable::map([("id", "cat"), ("label", "Cat")]);
//!
//! let lines = ValueRenderer::new(Dialect::Code).render_multiline(&value).unwrap();
//! assert_eq!(lines, ["[", "  'id' => 'cat',", "  'label' => 'Cat',", "]"]);
//!
//! let inline = ValueRenderer::new(Dialect::Literal).render_inline(&value).unwrap();
//! assert_eq!(inline, r#"{ id: "cat", label: "Cat" }"#);
//! ```

use std::fmt;

use stencil_core::{Error, RenderConfig, Result, is_identifier};
use stencil_ir::{Renderable, Scalar};
use tracing::debug;

/// Output syntax variant for value literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// General value literal: `{ id: "cat" }`, `["a", "b"]`, `true`.
    Literal,
    /// Comment-embedded annotation arguments: `{"id" = "cat"}`, `TRUE`.
    Annotation,
    /// Code arrays: `['id' => 'cat']`, `TRUE`.
    Code,
    /// Form option arrays: code arrays whose strings are translated,
    /// `['cat' => $this->t('Cat')]`.
    FormOptions,
}

/// How a collection is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// All children on one line.
    Inline,
    /// One child per line.
    #[default]
    Multiline,
}

/// How map keys are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyForm {
    /// Bare when the key is an identifier, quoted otherwise.
    BareIdentifier,
    /// Always quoted.
    Quoted,
    /// Bare when the key is a non-negative integer, quoted otherwise.
    QuotedUnlessInteger,
}

/// Spelling table for one dialect.
#[derive(Debug)]
pub(crate) struct Syntax {
    pub map_open: &'static str,
    pub map_close: &'static str,
    pub list_open: &'static str,
    pub list_close: &'static str,
    /// Pad inline maps with a space inside the braces.
    pub pad_inline_map: bool,
    pub key_form: KeyForm,
    pub key_separator: &'static str,
    pub preferred_quote: char,
    pub alternate_quote: char,
    pub true_literal: &'static str,
    pub false_literal: &'static str,
    pub null_literal: &'static str,
    /// Wrap string values in a translation call.
    pub translate: Option<&'static str>,
}

const LITERAL: Syntax = Syntax {
    map_open: "{",
    map_close: "}",
    list_open: "[",
    list_close: "]",
    pad_inline_map: true,
    key_form: KeyForm::BareIdentifier,
    key_separator: ": ",
    preferred_quote: '"',
    alternate_quote: '\'',
    true_literal: "true",
    false_literal: "false",
    null_literal: "null",
    translate: None,
};

const ANNOTATION: Syntax = Syntax {
    map_open: "{",
    map_close: "}",
    list_open: "{",
    list_close: "}",
    pad_inline_map: false,
    key_form: KeyForm::Quoted,
    key_separator: " = ",
    preferred_quote: '"',
    alternate_quote: '\'',
    true_literal: "TRUE",
    false_literal: "FALSE",
    null_literal: "NULL",
    translate: None,
};

const CODE: Syntax = Syntax {
    map_open: "[",
    map_close: "]",
    list_open: "[",
    list_close: "]",
    pad_inline_map: false,
    key_form: KeyForm::QuotedUnlessInteger,
    key_separator: " => ",
    preferred_quote: '\'',
    alternate_quote: '"',
    true_literal: "TRUE",
    false_literal: "FALSE",
    null_literal: "NULL",
    translate: None,
};

const FORM_OPTIONS: Syntax = Syntax {
    translate: Some("$this->t"),
    ..CODE
};

impl Dialect {
    pub(crate) fn syntax(self) -> &'static Syntax {
        match self {
            Dialect::Literal => &LITERAL,
            Dialect::Annotation => &ANNOTATION,
            Dialect::Code => &CODE,
            Dialect::FormOptions => &FORM_OPTIONS,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Literal => "literal",
            Dialect::Annotation => "annotation",
            Dialect::Code => "code",
            Dialect::FormOptions => "form options",
        };
        f.write_str(name)
    }
}

/// Quote `s` with minimal escaping.
///
/// Uses `preferred` unless the text contains it, then `alternate`; when the
/// text contains both, falls back to `preferred` with backslash escapes.
/// Interior backslashes are kept as written, but a trailing run is doubled
/// so it cannot escape the closing quote.
pub fn quote_with(s: &str, preferred: char, alternate: char) -> String {
    if !s.contains(preferred) {
        enclose(s, preferred)
    } else if !s.contains(alternate) {
        enclose(s, alternate)
    } else {
        let mut escaped = String::with_capacity(s.len() + 4);
        escaped.push(preferred);
        for c in s.chars() {
            if c == '\\' || c == preferred {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped.push(preferred);
        escaped
    }
}

fn enclose(s: &str, quote: char) -> String {
    let body = s.trim_end_matches('\\');
    let trailing = s.len() - body.len();
    format!("{quote}{body}{}{quote}", "\\\\".repeat(trailing))
}

/// Render a float so it always reads as a float.
pub(crate) fn format_float(v: f64) -> String {
    let s = v.to_string();
    if !v.is_finite() || s.contains(['.', 'e', 'E']) {
        s
    } else {
        format!("{s}.0")
    }
}

/// Renders [`Renderable`] values as value-literal expressions.
///
/// The base depth of the [`RenderConfig`] is the embed level: the opening
/// line is never indented (it is spliced after a key or at column 0), while
/// children and the closing delimiter are indented relative to it.
#[derive(Debug, Clone, Copy)]
pub struct ValueRenderer {
    dialect: Dialect,
    config: RenderConfig,
}

impl ValueRenderer {
    /// Create a renderer for the given dialect at embed level 0.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            config: RenderConfig::default(),
        }
    }

    /// Use the given configuration (embed level, indent).
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the embed level.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.config.depth = depth;
        self
    }

    /// Render a value with the given layout.
    ///
    /// Inline layout always yields exactly one line.
    pub fn render(&self, value: &Renderable, layout: Layout) -> Result<Vec<String>> {
        let lines = match layout {
            Layout::Inline => vec![self.inline(value)?],
            Layout::Multiline => self.lines_at(value, self.config.depth)?,
        };
        debug!(dialect = %self.dialect, ?layout, lines = lines.len(), "rendered value");
        Ok(lines)
    }

    /// Render a value on a single line.
    pub fn render_inline(&self, value: &Renderable) -> Result<String> {
        self.inline(value)
    }

    /// Render a value with one child per line.
    pub fn render_multiline(&self, value: &Renderable) -> Result<Vec<String>> {
        self.render(value, Layout::Multiline)
    }

    /// Quote a string using the dialect's quote preference.
    pub fn quote(&self, s: &str) -> String {
        let syntax = self.dialect.syntax();
        quote_with(s, syntax.preferred_quote, syntax.alternate_quote)
    }

    /// Render a scalar leaf.
    pub fn scalar(&self, scalar: &Scalar) -> String {
        let syntax = self.dialect.syntax();
        match scalar {
            Scalar::String(s) => match syntax.translate {
                Some(function) => format!("{function}({})", self.quote(s)),
                None => self.quote(s),
            },
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => format_float(*f),
            Scalar::Bool(true) => syntax.true_literal.to_string(),
            Scalar::Bool(false) => syntax.false_literal.to_string(),
            Scalar::Null => syntax.null_literal.to_string(),
        }
    }

    /// Render a map key including its separator, e.g. `'id' => `.
    pub fn key_prefix(&self, key: &str) -> String {
        let syntax = self.dialect.syntax();
        let key = match syntax.key_form {
            KeyForm::BareIdentifier if is_identifier(key) => key.to_string(),
            KeyForm::QuotedUnlessInteger if is_integer_key(key) => key.to_string(),
            _ => self.quote(key),
        };
        format!("{key}{}", syntax.key_separator)
    }

    /// The one-line literal for an empty collection.
    pub(crate) fn empty_literal(&self, value: &Renderable) -> String {
        let syntax = self.dialect.syntax();
        match value {
            Renderable::Map(_) => format!("{}{}", syntax.map_open, syntax.map_close),
            _ => format!("{}{}", syntax.list_open, syntax.list_close),
        }
    }

    /// Opening and closing delimiters for a collection.
    pub(crate) fn delimiters(&self, value: &Renderable) -> (&'static str, &'static str) {
        let syntax = self.dialect.syntax();
        match value {
            Renderable::Map(_) => (syntax.map_open, syntax.map_close),
            _ => (syntax.list_open, syntax.list_close),
        }
    }

    pub(crate) fn indent(&self, level: usize) -> String {
        self.config.indent.repeat(level)
    }

    fn inline(&self, value: &Renderable) -> Result<String> {
        match value {
            Renderable::Scalar(scalar) => Ok(self.scalar(scalar)),
            Renderable::Raw(raw) => Ok(raw.clone()),
            _ if value.is_empty_collection() => Ok(self.empty_literal(value)),
            Renderable::List(items) => {
                let parts = items
                    .iter()
                    .map(|item| self.inline(item))
                    .collect::<Result<Vec<_>>>()?;
                let (open, close) = self.delimiters(value);
                Ok(format!("{open}{}{close}", parts.join(", ")))
            }
            Renderable::Map(entries) => {
                let parts = entries
                    .iter()
                    .map(|(k, v)| Ok(format!("{}{}", self.key_prefix(k), self.inline(v)?)))
                    .collect::<Result<Vec<_>>>()?;
                let (open, close) = self.delimiters(value);
                if self.dialect.syntax().pad_inline_map {
                    Ok(format!("{open} {} {close}", parts.join(", ")))
                } else {
                    Ok(format!("{open}{}{close}", parts.join(", ")))
                }
            }
            Renderable::Call(_) | Renderable::Document(_) => {
                Err(Error::unsupported_value_kind(value.kind(), "value"))
            }
        }
    }

    /// Render `value` starting on a line at `level`.
    ///
    /// The first line carries no indentation. Children sit at `level + 1`
    /// and the closing delimiter at `level`.
    pub(crate) fn lines_at(&self, value: &Renderable, level: usize) -> Result<Vec<String>> {
        match value {
            Renderable::Scalar(_) | Renderable::Raw(_) => Ok(vec![self.inline(value)?]),
            _ if value.is_empty_collection() => Ok(vec![self.empty_literal(value)]),
            Renderable::List(items) => {
                let (open, close) = self.delimiters(value);
                let mut lines = vec![open.to_string()];
                for item in items {
                    self.push_child(&mut lines, None, item, level + 1)?;
                }
                lines.push(format!("{}{close}", self.indent(level)));
                Ok(lines)
            }
            Renderable::Map(entries) => {
                let (open, close) = self.delimiters(value);
                let mut lines = vec![open.to_string()];
                for (key, child) in entries {
                    self.push_child(&mut lines, Some(key), child, level + 1)?;
                }
                lines.push(format!("{}{close}", self.indent(level)));
                Ok(lines)
            }
            Renderable::Call(_) | Renderable::Document(_) => {
                Err(Error::unsupported_value_kind(value.kind(), "value"))
            }
        }
    }

    fn push_child(
        &self,
        lines: &mut Vec<String>,
        key: Option<&str>,
        child: &Renderable,
        level: usize,
    ) -> Result<()> {
        let mut prefix = self.indent(level);
        if let Some(key) = key {
            prefix.push_str(&self.key_prefix(key));
        }
        let mut child_lines = self.lines_at(child, level)?;
        if let Some(first) = child_lines.first_mut() {
            first.insert_str(0, &prefix);
        }
        if let Some(last) = child_lines.last_mut() {
            last.push(',');
        }
        lines.extend(child_lines);
        Ok(())
    }
}

fn is_integer_key(key: &str) -> bool {
    !key.is_empty()
        && key.chars().all(|c| c.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'))
}
