//! Bundler plugin serving generated story modules.

use std::path::{Path, PathBuf};

use ui_examples_schema::{COMPONENT_SUFFIX, UI_EXAMPLES_SUFFIX};

use crate::generator::generate_ui_example_story;
use crate::namespace::Namespaces;
use crate::traits::{BundlerPlugin, StoryError};

/// Bundler plugin for `*.ui_examples.yml` modules.
#[derive(Debug, Clone, Default)]
pub struct UiExamplesPlugin {
    namespaces: Namespaces,
}

impl UiExamplesPlugin {
    /// Create a plugin with the host's namespace mapping.
    pub fn new(namespaces: Namespaces) -> Self {
        Self { namespaces }
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// Map a generated component import (`@namespace/name/name.component.yml`)
    /// to its descriptor file through the namespace mapping.
    ///
    /// Returns `Ok(None)` for any other module specifier.
    pub fn resolve_id(&self, source: &str) -> Result<Option<PathBuf>, StoryError> {
        let Some(scoped) = source.strip_prefix('@') else {
            return Ok(None);
        };
        if !scoped.ends_with(COMPONENT_SUFFIX) {
            return Ok(None);
        }

        let mut segments = scoped.split('/');
        let (Some(namespace), Some(component), Some(_file), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Ok(None);
        };

        let path = self.namespaces.resolve(namespace, component).inspect_err(|e| {
            tracing::error!("Error resolving component import: {}, {}", source, e);
        })?;

        Ok(Some(path))
    }
}

impl BundlerPlugin for UiExamplesPlugin {
    fn name(&self) -> &'static str {
        "vite-plugin-ui-examples"
    }

    fn load(&self, id: &str) -> Result<Option<String>, StoryError> {
        if !id.ends_with(UI_EXAMPLES_SUFFIX) {
            return Ok(None);
        }

        tracing::info!("Processing UI example file: {}", id);

        let story = generate_ui_example_story(Path::new(id)).inspect_err(|e| {
            tracing::error!("Error loading UI example file: {}, {}", id, e);
        })?;

        if story.is_empty() {
            tracing::info!("No story content generated for {}", id);
        }

        Ok(Some(story))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use ui_examples_schema::LoadError;

    use crate::namespace::NamespaceError;

    fn plugin() -> UiExamplesPlugin {
        UiExamplesPlugin::new([("umami", "themes/umami")].into_iter().collect())
    }

    #[test]
    fn ignores_other_modules() {
        assert!(plugin().load("src/main.js").unwrap().is_none());
    }

    #[test]
    fn loads_matching_module() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("list.ui_examples.yml");
        fs::write(
            &path,
            r#"
id: list
enabled: true
label: List
render:
  - type: html_tag
    tag: ul
    0:
      - type: html_tag
        tag: li
        value: A
      - type: html_tag
        tag: li
        value: B
"#,
        )
        .unwrap();

        let story = plugin().load(path.to_str().unwrap()).unwrap().unwrap();

        assert!(story.contains("<ul><li>A</li><li>B</li></ul>"));
        assert!(story.contains("export const List = {}"));
    }

    #[test]
    fn disabled_module_is_empty() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("off.ui_examples.yml");
        fs::write(
            &path,
            "id: off\nlabel: Off\nenabled: false\nrender:\n  - type: component\n    component: 'umami:badge'\n    props: [1, 2]\n",
        )
        .unwrap();

        assert_eq!(
            plugin().load(path.to_str().unwrap()).unwrap(),
            Some(String::new())
        );
    }

    #[test]
    fn propagates_load_errors() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.ui_examples.yml");
        fs::write(&path, "id: [broken\n").unwrap();

        let err = plugin().load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, StoryError::Load(LoadError::Parse { .. })));
    }

    #[test]
    fn resolves_component_imports() {
        let resolved = plugin()
            .resolve_id("@umami/badge/badge.component.yml")
            .unwrap();
        assert_eq!(
            resolved,
            Some(PathBuf::from(
                "themes/umami/components/badge/badge.component.yml"
            ))
        );

        assert_eq!(plugin().resolve_id("@storybook/react").unwrap(), None);
        assert_eq!(plugin().resolve_id("./local.js").unwrap(), None);
    }

    #[test]
    fn unknown_namespace_import_fails() {
        let err = plugin()
            .resolve_id("@olivero/card/card.component.yml")
            .unwrap_err();
        assert!(matches!(
            err,
            StoryError::Namespace(NamespaceError::NotFound(_))
        ));
    }
}
