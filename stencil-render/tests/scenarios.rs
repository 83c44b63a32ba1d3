//! End-to-end rendering of typical blocks.
//!
//! Whole-block outputs use inline snapshots. Run `cargo insta review` to
//! update them when making intentional changes.

use stencil_core::{Error, Indent, RenderConfig};
use stencil_ir::{EmbeddedDocument, MapBuilder, NamedCall, Renderable};
use stencil_render::{
    CallDialect, CallRenderer, Dialect, DocBlock, DocumentRenderer, FluentChain, LineBuilder,
    LineRenderer, ValueRenderer,
};

#[test]
fn test_value_map_four_lines() {
    let value = Renderable::map([("id", "cat"), ("label", "Cat")]);
    let lines = ValueRenderer::new(Dialect::Literal)
        .render_multiline(&value)
        .unwrap();
    assert_eq!(lines, ["{", "  id: \"cat\",", "  label: \"Cat\",", "}"]);
}

#[test]
fn test_docblock_wraps_long_paragraph() {
    let paragraph = "Returns the list of pets that are currently available for adoption at the nearest shelter.";
    assert_eq!(paragraph.chars().count(), 90);

    let lines = DocBlock::new()
        .depth(1)
        .paragraph(paragraph)
        .render()
        .unwrap();
    let body: Vec<&str> = lines[1..lines.len() - 1]
        .iter()
        .map(|l| l.strip_prefix(" * ").unwrap())
        .collect();
    assert!(body.len() >= 2);
    assert!(body.iter().all(|l| l.chars().count() <= 75));
    assert_eq!(body.join(" "), paragraph);
}

#[test]
fn test_annotation_single_string() {
    let lines = CallRenderer::new(CallDialect::Annotation)
        .render_named("Foo", &Renderable::string("bar"))
        .unwrap();
    assert_eq!(lines, ["@Foo(\"bar\")"]);
}

#[test]
fn test_document_inline_from_depth_one() {
    let data = Renderable::map([
        ("a", Renderable::list([1, 2])),
        ("b", Renderable::string("x")),
    ]);
    let lines = DocumentRenderer::new(1, None).render(&data).unwrap();
    assert_eq!(lines, ["a: [1, 2]", "b: x"]);
}

#[test]
fn test_fluent_two_calls() {
    let lines = FluentChain::new()
        .with_dialect(Dialect::Literal)
        .call("foo", ["v"])
        .call("bar", [1])
        .render()
        .unwrap();
    assert_eq!(lines, ["  ->foo(\"v\")", "  ->bar(1);"]);
}

#[test]
fn test_block_plugin_docblock() {
    let annotation = NamedCall::new(
        "Block",
        MapBuilder::new()
            .string("id", "pets_cat")
            .entry("admin_label", Renderable::call("Translation", "Cat"))
            .entry("category", Renderable::call("Translation", "Pets"))
            .build(),
    );
    let text = DocBlock::new()
        .paragraph("Provides a 'Cat' block.")
        .call(annotation)
        .render()
        .unwrap()
        .join("\n");

    insta::assert_snapshot!(text, @r#"
    /**
     * Provides a 'Cat' block.
     *
     * @Block(
     *   id = "pets_cat",
     *   admin_label = @Translation("Cat"),
     *   category = @Translation("Pets"),
     * )
     */
    "#);
}

#[test]
fn test_attribute_with_namespace() {
    let args = MapBuilder::new()
        .string("id", "pets_cat")
        .entry("admin_label", Renderable::call("TranslatableMarkup", "Cat"))
        .build();
    let text = CallRenderer::new(CallDialect::attribute_in("Drupal\\Core\\StringTranslation"))
        .render_named("\\Drupal\\Core\\Block\\Attribute\\Block", &args)
        .unwrap()
        .join("\n");

    insta::assert_snapshot!(text, @r"
    #[\Drupal\Core\Block\Attribute\Block(
      id: 'pets_cat',
      admin_label: new \Drupal\Core\StringTranslation\TranslatableMarkup('Cat'),
    )]
    ");
}

#[test]
fn test_form_element_composition() {
    let options = Renderable::map([("cat", "Cat"), ("dog", "Dog")]);
    let options_lines = ValueRenderer::new(Dialect::FormOptions)
        .with_depth(1)
        .render_multiline(&options)
        .unwrap();

    let mut builder = LineBuilder::new(Indent::STANDARD);
    builder
        .push_line("$form['type'] = [")
        .push_indent()
        .push_line("'#type' => 'select',")
        .push_line("'#options' => ");
    let mut options_lines = options_lines.into_iter();
    if let Some(first) = options_lines.next() {
        builder.push_str(&first);
    }
    builder
        .push_verbatim(options_lines)
        .push_str(",")
        .push_dedent()
        .push_line("];");

    insta::assert_snapshot!(builder.build().join("\n"), @r"
    $form['type'] = [
      '#type' => 'select',
      '#options' => [
        'cat' => $this->t('Cat'),
        'dog' => $this->t('Dog'),
      ],
    ];
    ");
}

#[test]
fn test_method_docblock_with_chain() {
    let doc = DocBlock::new()
        .depth(1)
        .marker("{@inheritdoc}")
        .unwrap()
        .render()
        .unwrap();
    let chain = FluentChain::new()
        .with_config(RenderConfig::default().with_depth(2))
        .call("setLabel", [Renderable::raw("t('Name')")])
        .call("setRequired", [true])
        .render()
        .unwrap();

    let indent = "  ";
    let mut lines: Vec<String> = doc.iter().map(|l| format!("{indent}{l}")).collect();
    lines.push(format!("{indent}public static function baseFieldDefinitions() {{"));
    lines.push(format!("{indent}{indent}$fields['name'] = BaseFieldDefinition::create('string')"));
    lines.extend(chain);
    lines.push(format!("{indent}}}"));

    assert_eq!(
        lines,
        [
            "  /**",
            "   * {@inheritdoc}",
            "   */",
            "  public static function baseFieldDefinitions() {",
            "    $fields['name'] = BaseFieldDefinition::create('string')",
            "      ->setLabel(t('Name'))",
            "      ->setRequired(TRUE);",
            "  }",
        ]
    );
}

#[test]
fn test_routing_document_from_json() {
    let json = serde_json::json!({
        "pets.cat": {
            "path": "/pets/cat/{cat}",
            "defaults": { "_controller": "\\Drupal\\pets\\Controller\\CatController::view", "_title": "Cat" },
            "requirements": { "_permission": "access content" }
        },
        "pets.settings": {
            "path": "/admin/config/pets",
            "defaults": { "_form": "\\Drupal\\pets\\Form\\SettingsForm" },
            "requirements": { "_permission": "administer pets" }
        }
    });
    let data = Renderable::from(&json);
    let text = DocumentRenderer::new(usize::MAX, Some(0))
        .render_string(&data)
        .unwrap();

    insta::assert_snapshot!(text, @r"
    pets.cat:
      path: '/pets/cat/{cat}'
      defaults:
        _controller: '\Drupal\pets\Controller\CatController::view'
        _title: Cat
      requirements:
        _permission: access content

    pets.settings:
      path: /admin/config/pets
      defaults:
        _form: \Drupal\pets\Form\SettingsForm
      requirements:
        _permission: administer pets
    ");
}

#[test]
fn test_info_document_with_embedded_dependencies() {
    let data = MapBuilder::new()
        .string("name", "Pets")
        .string("type", "module")
        .string("core_version_requirement", "^10 || ^11")
        .entry(
            "dependencies",
            Renderable::document(EmbeddedDocument::new(
                Renderable::list(["drupal:node", "drupal:user"]),
                usize::MAX,
            )),
        )
        .build();
    let lines = DocumentRenderer::new(1, None).render(&data).unwrap();
    assert_eq!(
        lines,
        [
            "name: Pets",
            "type: module",
            "core_version_requirement: ^10 || ^11",
            "dependencies:",
            "  - 'drupal:node'",
            "  - 'drupal:user'",
        ]
    );
}

#[test]
fn test_errors_surface_through_every_renderer() {
    let call = Renderable::call("Translation", "Cat");

    let err = ValueRenderer::new(Dialect::Code)
        .render_lines(&Renderable::list([call.clone()]))
        .unwrap_err();
    assert!(matches!(*err, Error::UnsupportedValueKind { .. }));

    let err = DocumentRenderer::new(0, None)
        .render_lines(&Renderable::list([call.clone()]))
        .unwrap_err();
    assert!(matches!(*err, Error::UnsupportedValueKind { .. }));

    let err = CallRenderer::new(CallDialect::attribute())
        .render_named(
            "Block",
            &Renderable::map([("labels", Renderable::list([Renderable::list([call])]))]),
        )
        .unwrap_err();
    assert!(matches!(*err, Error::UnsupportedNesting { .. }));
    assert!(err.to_string().contains("attribute"));
}
