//! Documentation comment blocks with wrapped prose and structured tags.

use indexmap::IndexMap;
use stencil_core::{Error, Indent, RenderConfig, Result, describe};
use stencil_ir::NamedCall;
use tracing::debug;

use crate::call::{CallDialect, CallRenderer};
use crate::lines::LineBuilder;
use crate::wrap::wrap;

/// Columns taken by the ` * ` prefix of every comment line.
const MARKER_OVERHEAD: usize = 3;
/// Indentation of descriptions under a tag signature.
const DESCRIPTION_INDENT: Indent = Indent::STANDARD;

#[derive(Debug, Clone)]
enum Paragraph {
    Text(String),
    Call(NamedCall),
    Lines(Vec<String>),
}

#[derive(Debug, Clone)]
struct ParamTag {
    ty: String,
    name: String,
    description: Option<String>,
}

#[derive(Debug, Clone)]
struct ReturnTag {
    ty: String,
    description: Option<String>,
}

/// Builder for documentation comment blocks.
///
/// Content is accumulated through the append methods and rendered once.
/// There is no indexed access to the accumulated content; misuse of the
/// append methods is reported as [`Error::InvalidAccess`].
///
/// ```
/// use stencil_render::DocBlock;
///
/// let lines = DocBlock::new()
///     .paragraph("Builds the pet form.")
///     .param("array", "$form", Some("The form structure."))
///     .unwrap()
///     .returns("array", Some("The form structure."))
///     .unwrap()
///     .render()
///     .unwrap();
///
/// assert_eq!(
///     lines,
///     [
///         "/**",
///         " * Builds the pet form.",
///         " *",
///         " * @param array $form",
///         " *   The form structure.",
///         " *",
///         " * @return array",
///         " *   The form structure.",
///         " */",
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocBlock {
    config: RenderConfig,
    marker: Option<String>,
    paragraphs: Vec<Paragraph>,
    params: Vec<ParamTag>,
    returns: Option<ReturnTag>,
    tags: IndexMap<String, Vec<String>>,
}

impl DocBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given configuration (declaration depth, line width).
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the indent depth of the documented declaration.
    pub fn depth(mut self, depth: usize) -> Self {
        self.config.depth = depth;
        self
    }

    /// Set the leading single-word marker, e.g. `{@inheritdoc}` or `@file`.
    pub fn marker(mut self, word: impl Into<String>) -> Result<Self> {
        let word = word.into();
        if self.marker.is_some() {
            return Err(Error::invalid_access("marker already set"));
        }
        if word.is_empty() || word.chars().any(char::is_whitespace) {
            return Err(Error::invalid_access(format!(
                "marker must be a single word, got '{word}'"
            )));
        }
        self.marker = Some(word);
        Ok(self)
    }

    /// Add a paragraph of prose, wrapped on render.
    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(Paragraph::Text(text.into()));
        self
    }

    /// Add an annotation paragraph, rendered in the comment-embedded dialect.
    pub fn call(mut self, call: NamedCall) -> Self {
        self.paragraphs.push(Paragraph::Call(call));
        self
    }

    /// Add a pre-rendered paragraph, spliced verbatim.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paragraphs
            .push(Paragraph::Lines(lines.into_iter().map(Into::into).collect()));
        self
    }

    /// Document a parameter. Without a description one is derived from the
    /// parameter name.
    pub fn param(
        mut self,
        ty: impl Into<String>,
        name: impl Into<String>,
        description: Option<&str>,
    ) -> Result<Self> {
        let name = name.into();
        let bare = name.trim_start_matches('$');
        if bare.is_empty() {
            return Err(Error::invalid_access("param tag requires a parameter name"));
        }
        self.params.push(ParamTag {
            ty: ty.into(),
            name: format!("${bare}"),
            description: description.map(str::to_string),
        });
        Ok(self)
    }

    /// Document the return value. Only one return tag is allowed.
    pub fn returns(mut self, ty: impl Into<String>, description: Option<&str>) -> Result<Self> {
        if self.returns.is_some() {
            return Err(Error::invalid_access("return tag already set"));
        }
        self.returns = Some(ReturnTag {
            ty: ty.into(),
            description: description.map(str::to_string),
        });
        Ok(self)
    }

    /// Add a tag of any other kind, e.g. `see` or `throws`.
    pub fn tag(mut self, name: &str, value: impl Into<String>) -> Result<Self> {
        let name = name.trim_start_matches('@');
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(Error::invalid_access(format!("invalid tag name '{name}'")));
        }
        self.tags
            .entry(name.to_string())
            .or_default()
            .push(value.into());
        Ok(self)
    }

    /// Add a tag from its name and positional arguments.
    ///
    /// `param` takes `[type, name, description?]` (the type may be omitted
    /// for an untyped `$name`), `return` takes `[type, description?]`; other
    /// tags join their arguments with spaces.
    pub fn add_tag<I, S>(self, name: &str, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        match name.trim_start_matches('@') {
            "param" => match args.as_slice() {
                [name] if name.starts_with('$') => self.param("", name.as_str(), None),
                [ty, name] => self.param(ty.as_str(), name.as_str(), None),
                [ty, name, rest @ ..] => {
                    let description = rest.join(" ");
                    self.param(ty.as_str(), name.as_str(), Some(&description))
                }
                _ => Err(Error::invalid_access(
                    "param tag requires a type and a parameter name",
                )),
            },
            "return" => match args.as_slice() {
                [ty] => self.returns(ty.as_str(), None),
                [ty, rest @ ..] => {
                    let description = rest.join(" ");
                    self.returns(ty.as_str(), Some(&description))
                }
                [] => Err(Error::invalid_access("return tag requires a type")),
            },
            other => self.tag(other, args.join(" ")),
        }
    }

    /// Render the comment block.
    ///
    /// Paragraphs that render to nothing are dropped, so blank separators
    /// only ever sit between content.
    pub fn render(&self) -> Result<Vec<String>> {
        let overhead = self.config.indent.width() * self.config.depth + MARKER_OVERHEAD;
        let width = self.config.wrap_width(overhead);

        let mut body = LineBuilder::new(DESCRIPTION_INDENT);
        if let Some(marker) = &self.marker {
            body.push_line(marker);
        }
        let mut separate = false;
        for paragraph in &self.paragraphs {
            let lines = match paragraph {
                Paragraph::Text(text) => wrap(text, width),
                Paragraph::Call(call) => CallRenderer::new(CallDialect::Annotation).render(call)?,
                Paragraph::Lines(lines) => lines.clone(),
            };
            if lines.iter().all(|line| line.trim().is_empty()) {
                continue;
            }
            if separate {
                body.push_blank();
            }
            separate = true;
            body.push_verbatim(lines);
        }
        self.push_tags(&mut body, width);

        let body = body.build();
        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push("/**".to_string());
        lines.extend(body.into_iter().map(|line| {
            if line.is_empty() {
                " *".to_string()
            } else {
                format!(" * {line}")
            }
        }));
        lines.push(" */".to_string());

        debug!(
            depth = self.config.depth,
            width,
            lines = lines.len(),
            "rendered doc block"
        );
        Ok(lines)
    }

    /// Tag sections in priority order: params, return, then other kinds in
    /// order of first use. Each section is set off by a blank line.
    fn push_tags(&self, body: &mut LineBuilder, width: usize) {
        let description_width = width.saturating_sub(DESCRIPTION_INDENT.width()).max(1);

        if !self.params.is_empty() {
            start_section(body);
            for param in &self.params {
                body.push_line(&signature("param", &[&param.ty, &param.name]));
                let description = param
                    .description
                    .clone()
                    .unwrap_or_else(|| describe(&param.name));
                push_hanging(body, wrap(&description, description_width));
            }
        }

        if let Some(ret) = &self.returns {
            start_section(body);
            body.push_line(&signature("return", &[&ret.ty]));
            if let Some(description) = &ret.description {
                push_hanging(body, wrap(description, description_width));
            }
        }

        for (kind, values) in &self.tags {
            start_section(body);
            for value in values {
                let mut wrapped = wrap(&signature(kind, &[value]), width).into_iter();
                if let Some(first) = wrapped.next() {
                    body.push_line(&first);
                }
                push_hanging(body, wrapped);
            }
        }
    }
}

fn start_section(body: &mut LineBuilder) {
    if !body.is_empty() {
        body.push_blank();
    }
}

/// Push continuation lines one indent level under the current line.
fn push_hanging(body: &mut LineBuilder, lines: impl IntoIterator<Item = String>) {
    body.push_indent();
    for line in lines {
        if line.is_empty() {
            body.push_blank();
        } else {
            body.push_line(&line);
        }
    }
    body.push_dedent();
}

fn signature(tag: &str, parts: &[&str]) -> String {
    let mut line = format!("@{tag}");
    for part in parts.iter().filter(|p| !p.is_empty()) {
        line.push(' ');
        line.push_str(part);
    }
    line
}
