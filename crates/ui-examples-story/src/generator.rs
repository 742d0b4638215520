//! Story module generator.

use std::path::Path;
use std::sync::LazyLock;

use ui_examples_schema::{load_example, ExampleDescription};

use crate::case::export_name;
use crate::imports::generate_imports;
use crate::renderer::render_function;
use crate::templates::{StoryContext, TemplateEngine};
use crate::traits::StoryError;
use crate::STORY_GROUP;

static ENGINE: LazyLock<TemplateEngine> = LazyLock::new(TemplateEngine::new);

/// Generate the story module for a description file.
///
/// Disabled examples yield an empty string. Load and render failures are
/// logged with the file path and returned.
pub fn generate_ui_example_story(path: &Path) -> Result<String, StoryError> {
    let result = load_example(path)
        .map_err(StoryError::from)
        .and_then(|example| {
            if !example.enabled {
                tracing::info!("UI example {} is disabled, skipping", example.id);
                return Ok(String::new());
            }
            generate_story_module(&example)
        });

    result.inspect_err(|e| {
        tracing::error!("Error generating UI example story: {}, {}", path.display(), e);
    })
}

/// Generate the story module text for an example, regardless of its enabled flag.
pub fn generate_story_module(example: &ExampleDescription) -> Result<String, StoryError> {
    let story = StoryContext {
        imports: generate_imports(&example.render).join("\n"),
        title: escape_string(&format!("{STORY_GROUP}/{}", example.label)),
        render: render_function(&example.render),
        export_name: export_name(&example.label),
    };

    ENGINE
        .render_story(&story)
        .map_err(|e| StoryError::Template(e.to_string()))
}

/// Escape a string for a single-quoted JavaScript literal.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use ui_examples_schema::{parse_example, LoadError};

    fn example(source: &str) -> ExampleDescription {
        parse_example(source, Path::new("test.ui_examples.yml")).unwrap()
    }

    #[test]
    fn escape_string_works() {
        assert_eq!(escape_string("hello"), "hello");
        assert_eq!(escape_string("it's"), "it\\'s");
        assert_eq!(escape_string("line1\nline2"), "line1\\nline2");
    }

    #[test]
    fn generates_badge_story() {
        let output = generate_story_module(&example(
            r#"
id: x1
enabled: true
label: Badge Demo
render:
  - type: component
    component: 'umami:badge'
    props:
      text: New
"#,
        ))
        .unwrap();

        assert!(output.contains("import badge from '@umami/badge/badge.component.yml';"));
        assert!(output.contains("${badge.component({ ...badge.args, ...{\n  \"text\": \"New\"\n}, ...{} })}"));
        assert!(output.contains("title: 'UI Examples/Badge Demo',"));
        assert!(output.contains("Drupal.attachBehaviors(canvasElement, window.drupalSettings)"));
        assert!(output.contains("export const BadgeDemo = {}"));
    }

    #[test]
    fn duplicate_components_import_once() {
        let output = generate_story_module(&example(
            r#"
id: x2
enabled: true
label: Twice
render:
  - type: component
    component: 'umami:badge'
  - type: component
    component: 'umami:badge'
    props:
      text: Second
"#,
        ))
        .unwrap();

        assert_eq!(output.matches("import badge from").count(), 1);
        assert_eq!(output.matches("${badge.component(").count(), 2);
    }

    #[test]
    fn escapes_quotes_in_title() {
        let output = generate_story_module(&example("id: q\nlabel: \"Chef's pick\"\n")).unwrap();
        assert!(output.contains(r"title: 'UI Examples/Chef\'s pick',"));
    }

    #[test]
    fn disabled_example_yields_empty_story() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("off.ui_examples.yml");
        fs::write(
            &path,
            "id: off\nenabled: false\nlabel: Off\nrender:\n  - type: html_tag\n    tag: p\n",
        )
        .unwrap();

        assert_eq!(generate_ui_example_story(&path).unwrap(), "");
    }

    #[test]
    fn disabled_example_with_loose_render_tree_yields_empty_story() {
        let temp = tempdir().unwrap();
        let list_props = temp.path().join("list.ui_examples.yml");
        fs::write(
            &list_props,
            "id: list\nenabled: false\nlabel: List\nrender:\n  - type: component\n    component: 'umami:badge'\n    props: [1, 2]\n",
        )
        .unwrap();
        let scalar_render = temp.path().join("todo.ui_examples.yml");
        fs::write(&scalar_render, "id: todo\nenabled: false\nlabel: Todo\nrender: todo\n").unwrap();

        assert_eq!(generate_ui_example_story(&list_props).unwrap(), "");
        assert_eq!(generate_ui_example_story(&scalar_render).unwrap(), "");
    }

    #[test]
    fn missing_label_fails_without_output() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.ui_examples.yml");
        fs::write(&path, "id: bad\nenabled: true\nrender: []\n").unwrap();

        let err = generate_ui_example_story(&path).unwrap_err();
        assert!(matches!(err, StoryError::Load(LoadError::Validation { .. })));
    }
}
