//! Story indexer producing lightweight records without rendering.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use ui_examples_schema::read_header;

use crate::case::{capitalize, export_name};
use crate::traits::{StoryError, StoryIndexer};
use crate::STORY_GROUP;

/// Tag attached to every indexed UI example story.
pub const UI_EXAMPLES_TAG: &str = "ui-examples";

static UI_EXAMPLES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.ui_examples\.yml$").expect("Invalid ui examples regex"));

/// One index record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    /// Always `story`
    #[serde(rename = "type")]
    pub kind: String,

    pub import_path: String,

    /// The label as a JavaScript identifier, matching the story module's
    /// export. Unlike the raw capitalized label, characters that are not
    /// alphanumeric, `_` or `$` are dropped (`Badge Demo` -> `BadgeDemo`).
    pub export_name: String,

    pub title: String,

    pub tags: Vec<String>,
}

/// Indexer for `*.ui_examples.yml` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct UiExamplesIndexer;

impl UiExamplesIndexer {
    pub fn new() -> Self {
        Self
    }

    /// The file name matcher.
    pub fn pattern(&self) -> &'static Regex {
        &UI_EXAMPLES_RE
    }
}

impl StoryIndexer for UiExamplesIndexer {
    fn test(&self, file_name: &str) -> bool {
        UI_EXAMPLES_RE.is_match(file_name)
    }

    fn create_index(
        &self,
        file_name: &Path,
        make_title: &dyn Fn(&str) -> String,
    ) -> Result<Vec<IndexEntry>, StoryError> {
        let header = read_header(file_name).inspect_err(|e| {
            tracing::error!(
                "Error creating index for UI example file: {}, {}",
                file_name.display(),
                e
            );
        })?;

        if !header.enabled {
            tracing::info!(
                "UI example {} is disabled, skipping index",
                header.id.as_deref().unwrap_or_default()
            );
            return Ok(Vec::new());
        }

        let label = header.label();
        let title = make_title(&format!("{STORY_GROUP}/{}", capitalize(label)));

        Ok(vec![IndexEntry {
            kind: "story".to_string(),
            import_path: file_name.display().to_string(),
            export_name: export_name(label),
            title,
            tags: vec![UI_EXAMPLES_TAG.to_string()],
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn identity(title: &str) -> String {
        title.to_string()
    }

    #[test]
    fn matches_description_files_only() {
        let indexer = UiExamplesIndexer::new();

        assert!(indexer.test("ui/badge.ui_examples.yml"));
        assert!(!indexer.test("ui/badge.ui_examples.yml.bak"));
        assert!(!indexer.test("ui/badge.component.yml"));
    }

    #[test]
    fn indexes_enabled_example() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("badge.ui_examples.yml");
        fs::write(&path, "id: x1\nenabled: true\nlabel: badge\n").unwrap();

        let entries = UiExamplesIndexer::new()
            .create_index(&path, &|title| format!("Design/{title}"))
            .unwrap();

        assert_eq!(
            entries,
            vec![IndexEntry {
                kind: "story".to_string(),
                import_path: path.display().to_string(),
                export_name: "Badge".to_string(),
                title: "Design/UI Examples/Badge".to_string(),
                tags: vec!["ui-examples".to_string()],
            }]
        );
    }

    #[test]
    fn disabled_example_has_no_entries() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("off.ui_examples.yml");
        fs::write(&path, "id: off\nenabled: false\nlabel: Off\n").unwrap();

        let entries = UiExamplesIndexer::new()
            .create_index(&path, &identity)
            .unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn does_not_validate_render_tree() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("loose.ui_examples.yml");
        fs::write(&path, "enabled: true\nlabel: Loose\nrender: 42\n").unwrap();

        let entries = UiExamplesIndexer::new()
            .create_index(&path, &identity)
            .unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn serializes_with_indexer_field_names() {
        let entry = IndexEntry {
            kind: "story".to_string(),
            import_path: "a.ui_examples.yml".to_string(),
            export_name: "A".to_string(),
            title: "UI Examples/A".to_string(),
            tags: vec![UI_EXAMPLES_TAG.to_string()],
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "story");
        assert_eq!(json["importPath"], "a.ui_examples.yml");
        assert_eq!(json["exportName"], "A");
    }
}
