//! Chained method calls, one `->call(...)` per line.

use indexmap::IndexMap;
use stencil_core::{Error, RenderConfig, Result};
use stencil_ir::Renderable;
use tracing::debug;

use crate::lines::LineBuilder;
use crate::value::{Dialect, ValueRenderer};

/// A method call in a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct FluentCall {
    pub method: String,
    pub args: Vec<Renderable>,
}

impl FluentCall {
    pub fn new(
        method: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Renderable>>,
    ) -> Self {
        Self {
            method: method.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Builder for method chains.
///
/// ```
/// use stencil_ir::Renderable;
/// use stencil_render::FluentChain;
///
/// let lines = FluentChain::new()
///     .call("setLabel", [Renderable::raw("t('Name')")])
///     .call("setRequired", [true])
///     .render()
///     .unwrap();
/// assert_eq!(lines, ["  ->setLabel(t('Name'))", "  ->setRequired(TRUE);"]);
/// ```
#[derive(Debug, Clone)]
pub struct FluentChain {
    dialect: Dialect,
    config: RenderConfig,
    calls: Vec<FluentCall>,
}

impl FluentChain {
    /// Create an empty chain rendering arguments as code values.
    pub fn new() -> Self {
        Self {
            dialect: Dialect::Code,
            config: RenderConfig::default(),
            calls: Vec::new(),
        }
    }

    /// Build a chain from method names to arguments.
    ///
    /// Everything from the first `#` in a key is dropped, so one method can
    /// appear several times: `setSetting#1`, `setSetting#2`.
    pub fn from_map(calls: IndexMap<String, Vec<Renderable>>) -> Self {
        calls.into_iter().fold(Self::new(), |chain, (key, args)| {
            let method = key.split('#').next().unwrap_or_default();
            chain.call(method, args)
        })
    }

    /// Render arguments in the given value dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Use the given configuration. Calls sit one level deeper than its depth.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a method call to the chain.
    pub fn call(
        mut self,
        method: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Renderable>>,
    ) -> Self {
        self.calls.push(FluentCall::new(method, args));
        self
    }

    /// Add a method call with no arguments.
    pub fn call_empty(mut self, method: impl Into<String>) -> Self {
        self.calls.push(FluentCall {
            method: method.into(),
            args: Vec::new(),
        });
        self
    }

    /// Conditionally add a method call.
    pub fn call_if(
        self,
        condition: bool,
        method: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Renderable>>,
    ) -> Self {
        if condition {
            self.call(method, args)
        } else {
            self
        }
    }

    /// Add a single-argument method call when the argument is present.
    pub fn call_opt(self, method: impl Into<String>, arg: Option<impl Into<Renderable>>) -> Self {
        match arg {
            Some(a) => self.call(method, [a]),
            None => self,
        }
    }

    /// Append an already built call.
    pub fn push(mut self, call: FluentCall) -> Self {
        self.calls.push(call);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Render the chain. The last call carries the `;` terminator.
    ///
    /// Fails if any call has an empty method name.
    pub fn render(&self) -> Result<Vec<String>> {
        if self.calls.is_empty() {
            return Ok(Vec::new());
        }
        if self.calls.iter().any(|call| call.method.is_empty()) {
            return Err(Error::unsupported_value_kind(
                "call without a method name",
                "fluent",
            ));
        }

        let level = self.config.depth + 1;
        let values = ValueRenderer::new(self.dialect).with_config(self.config);
        let mut builder = LineBuilder::at_level(self.config.indent, level);

        for call in &self.calls {
            builder.push_line(&format!("->{}(", call.method));
            for (i, arg) in call.args.iter().enumerate() {
                if i > 0 {
                    builder.push_str(", ");
                }
                let mut arg_lines = values.lines_at(arg, level)?.into_iter();
                if let Some(first) = arg_lines.next() {
                    builder.push_str(&first);
                }
                builder.push_verbatim(arg_lines);
            }
            builder.push_str(")");
        }
        builder.push_str(";");

        let lines = builder.build();
        debug!(
            dialect = %self.dialect,
            calls = self.calls.len(),
            lines = lines.len(),
            "rendered fluent chain"
        );
        Ok(lines)
    }
}

impl Default for FluentChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use stencil_ir::MapBuilder;

    use super::*;

    #[test]
    fn test_two_calls_literal() {
        let lines = FluentChain::new()
            .with_dialect(Dialect::Literal)
            .call("foo", ["v"])
            .call("bar", [1])
            .render()
            .unwrap();
        assert_eq!(lines, ["  ->foo(\"v\")", "  ->bar(1);"]);
    }

    #[test]
    fn test_field_definition_chain() {
        let options = MapBuilder::new()
            .string("type", "string_textfield")
            .entry("weight", -5)
            .build();
        let lines = FluentChain::new()
            .call("setLabel", [Renderable::raw("t('Name')")])
            .call("setSetting", [Renderable::string("max_length"), Renderable::int(255)])
            .call("setDisplayOptions", [Renderable::string("form"), options])
            .call("setRequired", [true])
            .render()
            .unwrap();
        assert_eq!(
            lines,
            [
                "  ->setLabel(t('Name'))",
                "  ->setSetting('max_length', 255)",
                "  ->setDisplayOptions('form', [",
                "    'type' => 'string_textfield',",
                "    'weight' => -5,",
                "  ])",
                "  ->setRequired(TRUE);",
            ]
        );
    }

    #[test]
    fn test_base_depth() {
        let lines = FluentChain::new()
            .with_config(RenderConfig::default().with_depth(2))
            .call("condition", ["type", "cat"])
            .call_empty("execute")
            .render()
            .unwrap();
        assert_eq!(
            lines,
            [
                "      ->condition('type', 'cat')",
                "      ->execute();"
            ]
        );
    }

    #[test]
    fn test_from_map_strips_suffix() {
        let mut calls = IndexMap::new();
        calls.insert("setSetting#1".to_string(), vec!["target_type".into(), "user".into()]);
        calls.insert("setSetting#2".to_string(), vec!["handler".into(), "default".into()]);
        let lines = FluentChain::from_map(calls).render().unwrap();
        assert_eq!(
            lines,
            [
                "  ->setSetting('target_type', 'user')",
                "  ->setSetting('handler', 'default');"
            ]
        );
    }

    #[test]
    fn test_suffix_only_key_is_rejected() {
        let mut calls = IndexMap::new();
        calls.insert("setLabel".to_string(), vec!["Name".into()]);
        calls.insert("#1".to_string(), vec![true.into()]);
        let err = FluentChain::from_map(calls).render().unwrap_err();
        assert!(matches!(
            *err,
            Error::UnsupportedValueKind {
                renderer: "fluent",
                ..
            }
        ));
        assert!(err.to_string().contains("method name"));

        let err = FluentChain::new().call_empty("").render().unwrap_err();
        assert!(matches!(*err, Error::UnsupportedValueKind { .. }));
    }

    #[test]
    fn test_conditional_calls() {
        let lines = FluentChain::new()
            .call_if(false, "setTranslatable", [true])
            .call_opt("setDescription", None::<&str>)
            .call_opt("setRevisionable", Some(true))
            .render()
            .unwrap();
        assert_eq!(lines, ["  ->setRevisionable(TRUE);"]);
    }

    #[test]
    fn test_empty_chain_renders_nothing() {
        let chain = FluentChain::default();
        assert!(chain.is_empty());
        assert!(chain.render().unwrap().is_empty());
    }

    #[test]
    fn test_push_prebuilt_call() {
        let lines = FluentChain::new()
            .push(FluentCall::new("addTag", ["pets_access"]))
            .render()
            .unwrap();
        assert_eq!(lines, ["  ->addTag('pets_access');"]);
    }

    #[test]
    fn test_call_argument_is_unsupported() {
        let err = FluentChain::new()
            .call("foo", [Renderable::call("Bar", "x")])
            .render()
            .unwrap_err();
        assert!(matches!(*err, Error::UnsupportedValueKind { .. }));
    }
}
