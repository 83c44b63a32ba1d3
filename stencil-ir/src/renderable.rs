//! The tagged union every renderer consumes.

use indexmap::IndexMap;

/// Ordered keyed children. Insertion order is significant to output order.
pub type OrderedMap = IndexMap<String, Renderable>;

/// A leaf value that renderers quote or spell according to their dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// String literal (will be quoted).
    String(String),
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// Boolean literal, spelled by the dialect.
    Bool(bool),
    /// Null literal, spelled by the dialect.
    Null,
}

/// A semantically-typed value tree.
///
/// Values describe *what* to emit. Each renderer decides how it is spelled,
/// quoted and laid out.
#[derive(Debug, Clone, PartialEq)]
pub enum Renderable {
    /// A scalar leaf.
    Scalar(Scalar),
    /// Verbatim expression: variable reference, qualified name, class
    /// constant or pre-rendered sub-expression. Never quoted or wrapped.
    Raw(String),
    /// Positional children. Indices are never emitted.
    List(Vec<Renderable>),
    /// Keyed children in insertion order.
    Map(OrderedMap),
    /// A nested declarative call (annotation or attribute).
    Call(NamedCall),
    /// A nested structured document with its own layout thresholds.
    Document(EmbeddedDocument),
}

/// A declarative call such as `@Translation("Foo")`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedCall {
    /// Call name, optionally qualified (`\Drupal\Core\Foo`).
    pub name: String,
    /// Call arguments: a scalar, a positional list or a keyed map.
    pub args: Box<Renderable>,
}

impl NamedCall {
    /// Create a call with the given arguments.
    pub fn new(name: impl Into<String>, args: impl Into<Renderable>) -> Self {
        Self {
            name: name.into(),
            args: Box::new(args.into()),
        }
    }

    /// Whether the name already carries a leading namespace separator.
    pub fn is_qualified(&self) -> bool {
        self.name.starts_with('\\')
    }
}

/// A structured-document subtree that carries its own layout.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedDocument {
    /// The subtree to render.
    pub data: Box<Renderable>,
    /// Depth (relative to this subtree) from which collections go inline.
    pub inline_from_depth: usize,
    /// Deepest collection depth that separates its children with blank lines.
    pub blank_lines_until_depth: Option<usize>,
}

impl EmbeddedDocument {
    /// Create an embedded document with no blank-line separation.
    pub fn new(data: impl Into<Renderable>, inline_from_depth: usize) -> Self {
        Self {
            data: Box::new(data.into()),
            inline_from_depth,
            blank_lines_until_depth: None,
        }
    }

    /// Separate siblings with blank lines down to the given depth.
    pub fn blank_lines_until(mut self, depth: usize) -> Self {
        self.blank_lines_until_depth = Some(depth);
        self
    }
}

impl Renderable {
    /// Create a string scalar. Never inspects the text for sigils.
    pub fn string(v: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(v.into()))
    }

    /// Create an integer scalar.
    pub fn int(v: i64) -> Self {
        Self::Scalar(Scalar::Int(v))
    }

    /// Create a float scalar.
    pub fn float(v: f64) -> Self {
        Self::Scalar(Scalar::Float(v))
    }

    /// Create a boolean scalar.
    pub fn bool(v: bool) -> Self {
        Self::Scalar(Scalar::Bool(v))
    }

    /// Create a null scalar.
    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    /// Create a raw expression (emitted verbatim).
    pub fn raw(v: impl Into<String>) -> Self {
        Self::Raw(v.into())
    }

    /// Create a variable reference, adding the `$` sigil if missing.
    pub fn variable(name: &str) -> Self {
        if name.starts_with('$') {
            Self::Raw(name.to_string())
        } else {
            Self::Raw(format!("${name}"))
        }
    }

    /// Create a value from text, treating a leading sigil as a raw marker.
    ///
    /// `$name` becomes a variable reference and `\Some\Name` a qualified
    /// name; anything else is a string scalar. Use [`Renderable::string`]
    /// for text that must stay literal even when it starts with a sigil.
    pub fn infer(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.starts_with('$') || text.starts_with('\\') {
            Self::Raw(text)
        } else {
            Self::string(text)
        }
    }

    /// Create a positional list.
    pub fn list(items: impl IntoIterator<Item = impl Into<Renderable>>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Create a keyed map, preserving iteration order.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Renderable>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Create a nested call.
    pub fn call(name: impl Into<String>, args: impl Into<Renderable>) -> Self {
        Self::Call(NamedCall::new(name, args))
    }

    /// Create an embedded document.
    pub fn document(doc: EmbeddedDocument) -> Self {
        Self::Document(doc)
    }

    /// Stable kind name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Renderable::Scalar(Scalar::String(_)) => "string",
            Renderable::Scalar(Scalar::Int(_)) => "integer",
            Renderable::Scalar(Scalar::Float(_)) => "float",
            Renderable::Scalar(Scalar::Bool(_)) => "boolean",
            Renderable::Scalar(Scalar::Null) => "null",
            Renderable::Raw(_) => "raw expression",
            Renderable::List(_) => "list",
            Renderable::Map(_) => "map",
            Renderable::Call(_) => "named call",
            Renderable::Document(_) => "embedded document",
        }
    }

    /// Scalar or raw leaf.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Renderable::Scalar(_) | Renderable::Raw(_))
    }

    /// A list or map with no children.
    pub fn is_empty_collection(&self) -> bool {
        match self {
            Renderable::List(items) => items.is_empty(),
            Renderable::Map(entries) => entries.is_empty(),
            _ => false,
        }
    }

    /// Whether a [`NamedCall`] appears anywhere in this tree.
    pub fn contains_call(&self) -> bool {
        match self {
            Renderable::Call(_) => true,
            Renderable::List(items) => items.iter().any(Renderable::contains_call),
            Renderable::Map(entries) => entries.values().any(Renderable::contains_call),
            Renderable::Document(doc) => doc.data.contains_call(),
            Renderable::Scalar(_) | Renderable::Raw(_) => false,
        }
    }
}

impl From<Scalar> for Renderable {
    fn from(v: Scalar) -> Self {
        Self::Scalar(v)
    }
}

impl From<&str> for Renderable {
    fn from(v: &str) -> Self {
        Self::string(v)
    }
}

impl From<String> for Renderable {
    fn from(v: String) -> Self {
        Self::string(v)
    }
}

impl From<i64> for Renderable {
    fn from(v: i64) -> Self {
        Self::int(v)
    }
}

impl From<i32> for Renderable {
    fn from(v: i32) -> Self {
        Self::int(i64::from(v))
    }
}

impl From<u32> for Renderable {
    fn from(v: u32) -> Self {
        Self::int(i64::from(v))
    }
}

impl From<f64> for Renderable {
    fn from(v: f64) -> Self {
        Self::float(v)
    }
}

impl From<bool> for Renderable {
    fn from(v: bool) -> Self {
        Self::bool(v)
    }
}

impl From<Vec<Renderable>> for Renderable {
    fn from(v: Vec<Renderable>) -> Self {
        Self::List(v)
    }
}

impl From<OrderedMap> for Renderable {
    fn from(v: OrderedMap) -> Self {
        Self::Map(v)
    }
}

impl From<NamedCall> for Renderable {
    fn from(v: NamedCall) -> Self {
        Self::Call(v)
    }
}

impl From<EmbeddedDocument> for Renderable {
    fn from(v: EmbeddedDocument) -> Self {
        Self::Document(v)
    }
}
