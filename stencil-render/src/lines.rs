//! Line builder for rendering properly indented blocks.

use stencil_core::Indent;

/// Mutable builder for indented line sequences.
///
/// Methods return `&mut Self` so calls chain inside recursive renderers.
/// Blank lines are never indented.
///
/// ```
/// use stencil_core::Indent;
/// use stencil_render::LineBuilder;
///
/// let mut builder = LineBuilder::new(Indent::STANDARD);
/// builder
///     .push_line("[")
///     .push_indent()
///     .push_line("'id' => 'cat',")
///     .push_dedent()
///     .push_line("]");
/// assert_eq!(builder.build(), ["[", "  'id' => 'cat',", "]"]);
/// ```
#[derive(Debug, Clone)]
pub struct LineBuilder {
    indent_level: usize,
    indent: Indent,
    lines: Vec<String>,
}

impl LineBuilder {
    /// Create a new LineBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self::at_level(indent, 0)
    }

    /// Create a new LineBuilder starting at an indentation level.
    pub fn at_level(indent: Indent, level: usize) -> Self {
        Self {
            indent_level: level,
            indent,
            lines: Vec::new(),
        }
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        let mut line = self.indent.repeat(self.indent_level);
        line.push_str(s);
        self.lines.push(line);
        self
    }

    /// Add a blank line, never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Add lines exactly as given, without indentation.
    pub fn push_verbatim<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Append text to the last line, or start an unindented line.
    pub fn push_str(&mut self, s: &str) -> &mut Self {
        match self.lines.last_mut() {
            Some(last) => last.push_str(s),
            None => self.lines.push(s.to_string()),
        }
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Whether no lines have been added.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the builder and return the lines.
    pub fn build(self) -> Vec<String> {
        self.lines
    }
}
