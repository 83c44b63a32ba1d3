//! Declarative metadata calls: comment-embedded annotations and
//! declaration-level attributes.
//!
//! Both dialects share one recursive algorithm. A [`CallDialect`] only
//! decides spelling: call prefixes, how top-level argument names are written,
//! which value dialect renders nested values, name qualification, and how
//! many collection levels deep a call may sit inside another call's arguments.

use stencil_core::{Error, RenderConfig, Result};
use stencil_ir::{NamedCall, Renderable};
use tracing::{debug, trace};

use crate::value::{Dialect, ValueRenderer};

/// Syntax family for metadata calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallDialect {
    /// Annotation inside a doc comment: `@Block(id = "x")`.
    Annotation,
    /// Attribute on a declaration: `#[\Ns\Block(id: 'x')]`.
    Attribute {
        /// Namespace used to qualify bare call names.
        namespace: Option<String>,
    },
}

impl CallDialect {
    /// Attribute dialect without a namespace (names get a leading `\`).
    pub fn attribute() -> Self {
        Self::Attribute { namespace: None }
    }

    /// Attribute dialect qualifying bare names with `namespace`.
    pub fn attribute_in(namespace: impl Into<String>) -> Self {
        Self::Attribute {
            namespace: Some(namespace.into().trim_matches('\\').to_string()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            CallDialect::Annotation => "annotation",
            CallDialect::Attribute { .. } => "attribute",
        }
    }

    fn value_dialect(&self) -> Dialect {
        match self {
            CallDialect::Annotation => Dialect::Annotation,
            CallDialect::Attribute { .. } => Dialect::Code,
        }
    }

    /// How many collection levels a call may sit below a call argument.
    fn max_call_nesting(&self) -> usize {
        match self {
            CallDialect::Annotation => usize::MAX,
            CallDialect::Attribute { .. } => 1,
        }
    }

    fn top_level_separator(&self) -> &'static str {
        match self {
            CallDialect::Annotation => " = ",
            CallDialect::Attribute { .. } => ": ",
        }
    }

    fn qualify(&self, name: &str) -> String {
        match self {
            CallDialect::Annotation => name.to_string(),
            CallDialect::Attribute { .. } if name.starts_with('\\') => name.to_string(),
            CallDialect::Attribute {
                namespace: Some(ns),
            } if !ns.is_empty() => format!("\\{ns}\\{name}"),
            CallDialect::Attribute { .. } => format!("\\{name}"),
        }
    }

    fn head(&self, name: &str, outermost: bool) -> String {
        let name = self.qualify(name);
        match (self, outermost) {
            (CallDialect::Annotation, _) => format!("@{name}("),
            (CallDialect::Attribute { .. }, true) => format!("#[{name}("),
            (CallDialect::Attribute { .. }, false) => format!("new {name}("),
        }
    }

    fn close(&self, outermost: bool) -> &'static str {
        match (self, outermost) {
            (CallDialect::Attribute { .. }, true) => ")]",
            _ => ")",
        }
    }
}

/// Renders [`NamedCall`] trees as metadata call blocks.
///
/// ```
/// use stencil_ir::{NamedCall, Renderable};
/// use stencil_render::{CallDialect, CallRenderer};
///
/// let call = NamedCall::new(
///     "Block",
///     Renderable::map([
///         ("id", Renderable::string("pets_cat")),
///         ("admin_label", Renderable::call("Translation", "Cat")),
///     ]),
/// );
///
/// let lines = CallRenderer::new(CallDialect::Annotation).render(&call).unwrap();
/// assert_eq!(
///     lines,
///     [
///         "@Block(",
///         "  id = \"pets_cat\",",
///         "  admin_label = @Translation(\"Cat\"),",
///         ")",
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CallRenderer {
    dialect: CallDialect,
    config: RenderConfig,
}

impl CallRenderer {
    pub fn new(dialect: CallDialect) -> Self {
        Self {
            dialect,
            config: RenderConfig::default(),
        }
    }

    /// Use the given configuration (base depth, indent).
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base depth of the call.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.config.depth = depth;
        self
    }

    /// Render a call.
    pub fn render(&self, call: &NamedCall) -> Result<Vec<String>> {
        self.render_named(&call.name, &call.args)
    }

    /// Render a call from its parts.
    ///
    /// The opening line is indented to the base depth, argument lines one
    /// level deeper and the closing line back at the base depth.
    pub fn render_named(&self, name: &str, args: &Renderable) -> Result<Vec<String>> {
        let level = self.config.depth;
        let mut lines = self.call_lines(name, args, level, true)?;
        if let Some(first) = lines.first_mut() {
            first.insert_str(0, &self.indent(level));
        }
        debug!(
            dialect = self.dialect.name(),
            name,
            lines = lines.len(),
            "rendered call"
        );
        Ok(lines)
    }

    fn values(&self) -> ValueRenderer {
        ValueRenderer::new(self.dialect.value_dialect()).with_config(self.config)
    }

    fn indent(&self, level: usize) -> String {
        self.config.indent.repeat(level)
    }

    /// Lines for a call whose opening line sits at `level`.
    ///
    /// The first line is returned unindented so the caller can place it
    /// after a key. The closing line never carries a trailing comma.
    fn call_lines(
        &self,
        name: &str,
        args: &Renderable,
        level: usize,
        outermost: bool,
    ) -> Result<Vec<String>> {
        let head = self.dialect.head(name, outermost);
        let close = self.dialect.close(outermost);

        match args {
            Renderable::Scalar(_) | Renderable::Raw(_) => {
                trace!(name, "collapsing call with a single argument");
                let value = self.values().render_inline(args)?;
                Ok(vec![format!("{head}{value}{close}")])
            }
            _ if args.is_empty_collection() => Ok(vec![format!("{head}{close}")]),
            Renderable::Call(_) => {
                self.call_lines(name, &Renderable::List(vec![args.clone()]), level, outermost)
            }
            Renderable::List(items) => {
                let mut lines = vec![head];
                for item in items {
                    self.push_argument(&mut lines, String::new(), item, level + 1, 0)?;
                }
                lines.push(format!("{}{close}", self.indent(level)));
                Ok(lines)
            }
            Renderable::Map(entries) => {
                let separator = self.dialect.top_level_separator();
                let mut lines = vec![head];
                for (key, value) in entries {
                    self.push_argument(
                        &mut lines,
                        format!("{key}{separator}"),
                        value,
                        level + 1,
                        0,
                    )?;
                }
                lines.push(format!("{}{close}", self.indent(level)));
                Ok(lines)
            }
            Renderable::Document(_) => Err(Error::unsupported_value_kind(args.kind(), "call")),
        }
    }

    /// Push one argument (or collection child) at `level` with a trailing comma.
    ///
    /// `nesting` counts the collections between the value and the call whose
    /// argument it is.
    fn push_argument(
        &self,
        lines: &mut Vec<String>,
        key_prefix: String,
        value: &Renderable,
        level: usize,
        nesting: usize,
    ) -> Result<()> {
        let mut value_lines = self.argument_lines(value, level, nesting)?;
        if let Some(first) = value_lines.first_mut() {
            first.insert_str(0, &format!("{}{key_prefix}", self.indent(level)));
        }
        if let Some(last) = value_lines.last_mut() {
            last.push(',');
        }
        lines.extend(value_lines);
        Ok(())
    }

    /// Lines for an argument value whose first line sits at `level`.
    fn argument_lines(
        &self,
        value: &Renderable,
        level: usize,
        nesting: usize,
    ) -> Result<Vec<String>> {
        match value {
            // A nested call sits on its key's line, so it opens at the same level.
            Renderable::Call(call) => self.call_lines(&call.name, &call.args, level, false),
            Renderable::List(_) | Renderable::Map(_) if value.contains_call() => {
                if nesting + 1 > self.dialect.max_call_nesting() {
                    let name = first_call_name(value).unwrap_or_default();
                    return Err(Error::unsupported_nesting(name, self.dialect.name()));
                }
                self.collection_lines(value, level, nesting + 1)
            }
            _ => self.values().lines_at(value, level),
        }
    }

    /// Walk a collection that contains calls, using the value dialect's
    /// delimiters and quoted keys. Children sit `nesting` collections deep.
    fn collection_lines(
        &self,
        value: &Renderable,
        level: usize,
        nesting: usize,
    ) -> Result<Vec<String>> {
        let values = self.values();
        let (open, close) = values.delimiters(value);
        let mut lines = vec![open.to_string()];
        match value {
            Renderable::List(items) => {
                for item in items {
                    self.push_argument(&mut lines, String::new(), item, level + 1, nesting)?;
                }
            }
            Renderable::Map(entries) => {
                for (key, child) in entries {
                    let prefix = values.key_prefix(key);
                    self.push_argument(&mut lines, prefix, child, level + 1, nesting)?;
                }
            }
            _ => return values.lines_at(value, level),
        }
        lines.push(format!("{}{close}", self.indent(level)));
        Ok(lines)
    }
}

fn first_call_name(value: &Renderable) -> Option<&str> {
    match value {
        Renderable::Call(call) => Some(&call.name),
        Renderable::List(items) => items.iter().find_map(first_call_name),
        Renderable::Map(entries) => entries.values().find_map(first_call_name),
        Renderable::Document(doc) => first_call_name(&doc.data),
        Renderable::Scalar(_) | Renderable::Raw(_) => None,
    }
}
