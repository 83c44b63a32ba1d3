//! Block-structured configuration documents (YAML).
//!
//! Layout is decided per nesting depth: collections at or beyond the inline
//! threshold are written in flow style on one line, shallower ones in block
//! style with one child per line. [`EmbeddedDocument`] children carry their
//! own thresholds, counted from their own root.

use stencil_core::{Error, Indent, Result};
use stencil_ir::{EmbeddedDocument, OrderedMap, Renderable, Scalar};
use tracing::{debug, trace};

use crate::value::format_float;

/// Bare words that YAML reads as booleans or null.
const KEYWORDS: &[&str] = &[
    "true", "false", "yes", "no", "on", "off", "y", "n", "null", "~",
];

/// Characters that cannot start a plain scalar.
const RESERVED_LEADING: &[char] = &[
    '@', '%', '`', '|', '>', '*', '&', '!', '\'', '"', '[', ']', '{', '}', '#', '?', ',', '-',
    ':',
];

const FLOW_INDICATORS: &[char] = &['[', ']', '{', '}', ','];

/// A rendered child, before it is attached to its key or list marker.
enum Node {
    /// Fits on the parent line.
    Inline(String),
    /// Block lines, indented one level below the parent line.
    Block(Vec<String>),
    /// A literal block scalar: the indicator sits on the parent line.
    Literal {
        indicator: &'static str,
        lines: Vec<String>,
    },
}

/// Renders [`Renderable`] trees as YAML documents.
///
/// ```
/// use stencil_ir::Renderable;
/// use stencil_render::DocumentRenderer;
///
/// let data = Renderable::map([
///     ("a", Renderable::list([1, 2])),
///     ("b", Renderable::string("x")),
/// ]);
/// let lines = DocumentRenderer::new(1, None).render(&data).unwrap();
/// assert_eq!(lines, ["a: [1, 2]", "b: x"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DocumentRenderer {
    inline_from_depth: usize,
    blank_lines_until_depth: Option<usize>,
    indent: Indent,
}

impl DocumentRenderer {
    /// Create a renderer.
    ///
    /// Collections at depth `inline_from_depth` or deeper render in flow
    /// style; the root is depth 0. Block collections at depth
    /// `blank_lines_until_depth` or shallower separate their children with a
    /// blank line.
    pub fn new(inline_from_depth: usize, blank_lines_until_depth: Option<usize>) -> Self {
        Self {
            inline_from_depth,
            blank_lines_until_depth,
            indent: Indent::STANDARD,
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Render a document tree.
    pub fn render(&self, data: &Renderable) -> Result<Vec<String>> {
        let lines = match self.node(data, 0)? {
            Node::Inline(line) => vec![line],
            Node::Block(lines) => lines,
            Node::Literal { indicator, lines } => {
                let mut out = vec![indicator.to_string()];
                out.extend(self.indented(lines));
                out
            }
        };
        debug!(
            inline_from_depth = self.inline_from_depth,
            blank_lines_until_depth = ?self.blank_lines_until_depth,
            lines = lines.len(),
            "rendered document"
        );
        Ok(lines)
    }

    fn embedded(&self, doc: &EmbeddedDocument) -> Self {
        Self {
            inline_from_depth: doc.inline_from_depth,
            blank_lines_until_depth: doc.blank_lines_until_depth,
            indent: self.indent,
        }
    }

    fn node(&self, value: &Renderable, depth: usize) -> Result<Node> {
        match value {
            Renderable::Scalar(Scalar::String(s)) => {
                Ok(literal_block(s).unwrap_or_else(|| Node::Inline(quote_scalar(s))))
            }
            Renderable::Scalar(scalar) => Ok(Node::Inline(scalar_literal(scalar))),
            Renderable::Raw(raw) => Ok(Node::Inline(raw.clone())),
            Renderable::Document(doc) => self.embedded(doc).node(&doc.data, 0),
            Renderable::Call(_) => Err(Error::unsupported_value_kind(value.kind(), "document")),
            _ if value.is_empty_collection() => Ok(Node::Inline(empty_literal(value))),
            _ if depth >= self.inline_from_depth => {
                trace!(depth, "flow collection");
                Ok(Node::Inline(self.flow(value)?))
            }
            Renderable::List(items) => Ok(Node::Block(self.block_list(items, depth)?)),
            Renderable::Map(entries) => Ok(Node::Block(self.block_map(entries, depth)?)),
        }
    }

    fn block_map(&self, entries: &OrderedMap, depth: usize) -> Result<Vec<String>> {
        let spaced = self.spaced(depth);
        let mut lines = Vec::new();
        for (i, (key, child)) in entries.iter().enumerate() {
            if spaced && i > 0 {
                lines.push(String::new());
            }
            let key = quote_scalar(key);
            match self.node(child, depth + 1)? {
                Node::Inline(text) => lines.push(format!("{key}: {text}")),
                Node::Block(children) => {
                    lines.push(format!("{key}:"));
                    lines.extend(self.indented(children));
                }
                Node::Literal {
                    indicator,
                    lines: text,
                } => {
                    lines.push(format!("{key}: {indicator}"));
                    lines.extend(self.indented(text));
                }
            }
        }
        Ok(lines)
    }

    fn block_list(&self, items: &[Renderable], depth: usize) -> Result<Vec<String>> {
        let spaced = self.spaced(depth);
        let mut lines = Vec::new();
        for (i, item) in items.iter().enumerate() {
            if spaced && i > 0 {
                lines.push(String::new());
            }
            match self.node(item, depth + 1)? {
                Node::Inline(text) => lines.push(format!("- {text}")),
                Node::Block(children) => {
                    lines.push("-".to_string());
                    lines.extend(self.indented(children));
                }
                Node::Literal {
                    indicator,
                    lines: text,
                } => {
                    lines.push(format!("- {indicator}"));
                    lines.extend(self.indented(text));
                }
            }
        }
        Ok(lines)
    }

    fn flow(&self, value: &Renderable) -> Result<String> {
        match value {
            Renderable::Scalar(Scalar::String(s)) => Ok(quote_scalar(s)),
            Renderable::Scalar(scalar) => Ok(scalar_literal(scalar)),
            Renderable::Raw(raw) => Ok(raw.clone()),
            Renderable::Document(doc) => self.embedded(doc).flow(&doc.data),
            Renderable::Call(_) => Err(Error::unsupported_value_kind(value.kind(), "document")),
            _ if value.is_empty_collection() => Ok(empty_literal(value)),
            Renderable::List(items) => {
                let parts = items
                    .iter()
                    .map(|item| self.flow(item))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("[{}]", parts.join(", ")))
            }
            Renderable::Map(entries) => {
                let parts = entries
                    .iter()
                    .map(|(k, v)| Ok(format!("{}: {}", quote_scalar(k), self.flow(v)?)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{{ {} }}", parts.join(", ")))
            }
        }
    }

    fn spaced(&self, depth: usize) -> bool {
        self.blank_lines_until_depth
            .is_some_and(|until| depth <= until)
    }

    fn indented(&self, lines: Vec<String>) -> impl Iterator<Item = String> {
        let unit = self.indent.repeat(1);
        lines.into_iter().map(move |line| {
            if line.is_empty() {
                line
            } else {
                format!("{unit}{line}")
            }
        })
    }
}

fn empty_literal(value: &Renderable) -> String {
    match value {
        Renderable::Map(_) => "{}".to_string(),
        _ => "[]".to_string(),
    }
}

fn scalar_literal(scalar: &Scalar) -> String {
    match scalar {
        Scalar::String(s) => quote_scalar(s),
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) if f.is_nan() => ".nan".to_string(),
        Scalar::Float(f) if f.is_infinite() && *f > 0.0 => ".inf".to_string(),
        Scalar::Float(f) if f.is_infinite() => "-.inf".to_string(),
        Scalar::Float(f) => format_float(*f),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Null => "null".to_string(),
    }
}

/// A multi-line string as a literal block, when it can be written as one.
fn literal_block(s: &str) -> Option<Node> {
    if !s.contains('\n') || s.ends_with("\n\n") {
        return None;
    }
    if s.chars().any(|c| c.is_control() && c != '\n') || s.starts_with(' ') {
        return None;
    }
    let (body, indicator) = match s.strip_suffix('\n') {
        Some(body) => (body, "|"),
        None => (s, "|-"),
    };
    Some(Node::Literal {
        indicator,
        lines: body.split('\n').map(str::to_string).collect(),
    })
}

/// Write a string as a plain scalar when YAML reads it back unchanged,
/// single-quoted otherwise.
fn quote_scalar(s: &str) -> String {
    if s.chars().any(char::is_control) {
        double_quoted(s)
    } else if needs_quotes(s) {
        format!("'{}'", s.replace('\'', "''"))
    } else {
        s.to_string()
    }
}

fn needs_quotes(s: &str) -> bool {
    let (Some(first), Some(last)) = (s.chars().next(), s.chars().last()) else {
        return true;
    };
    first.is_whitespace()
        || last.is_whitespace()
        || RESERVED_LEADING.contains(&first)
        || s.contains(':')
        || s.contains(" #")
        || s.contains(FLOW_INDICATORS)
        || KEYWORDS.iter().any(|k| s.eq_ignore_ascii_case(k))
        || looks_numeric(s)
}

fn looks_numeric(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    s.parse::<f64>().is_ok()
        || lower.starts_with("0x")
        || lower.starts_with("0o")
        || matches!(lower.as_str(), ".inf" | "-.inf" | "+.inf" | ".nan")
}

fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
