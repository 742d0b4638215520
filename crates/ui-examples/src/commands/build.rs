//! Story build command.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use ui_examples_schema::UI_EXAMPLES_SUFFIX;
use ui_examples_story::{
    find_ui_example_files, BundlerPlugin, IndexEntry, StoryError, StoryIndexer, UiExamplesIndexer,
    UiExamplesPlugin,
};

use crate::config::ConfigFile;

const STORY_SUFFIX: &str = ".stories.js";

/// Result of a build.
#[derive(Debug)]
pub struct BuildSummary {
    /// Story modules written
    pub stories: usize,

    /// Disabled examples
    pub skipped: usize,

    /// Stale story modules deleted from the output directory
    pub removed: usize,

    pub duration_ms: u64,

    pub output_dir: PathBuf,
}

/// Run the build command.
pub async fn run(config: ConfigFile, dir: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or(config.examples.dir);
    let output = output.unwrap_or(config.examples.output);
    let plugin = UiExamplesPlugin::new(config.namespaces);

    tracing::info!("Building stories from {}...", dir.display());

    let summary = build_stories(&plugin, &dir, &output)?;

    tracing::info!(
        "Built {} stories ({} disabled, {} removed) in {}ms",
        summary.stories,
        summary.skipped,
        summary.removed,
        summary.duration_ms
    );
    tracing::info!("Output: {}", summary.output_dir.display());

    Ok(())
}

/// Render every description file in `dir` into `output`.
///
/// Writes one `<name>.stories.js` per enabled example and an `index.json`
/// holding all index records. Story modules left over from disabled or
/// deleted examples are removed. Nothing is written if any file fails.
pub fn build_stories(plugin: &UiExamplesPlugin, dir: &Path, output: &Path) -> Result<BuildSummary> {
    let start = Instant::now();
    let files = find_ui_example_files(dir);

    // Each file is independent, so render them in parallel
    let rendered = files
        .par_iter()
        .map(|file| -> Result<(String, String), StoryError> {
            let story = plugin.load(&file.to_string_lossy())?.unwrap_or_default();
            Ok((story_file_name(file), story))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let index = build_index(&files)?;
    let json = serde_json::to_string_pretty(&index)?;

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let mut written = HashSet::new();
    let mut skipped = 0;

    for (name, story) in rendered {
        if story.is_empty() {
            skipped += 1;
            continue;
        }

        let target = output.join(&name);
        fs::write(&target, story)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        written.insert(name);
    }

    fs::write(output.join("index.json"), json).context("Failed to write index.json")?;

    let removed = remove_stale_stories(output, &written)?;

    Ok(BuildSummary {
        stories: written.len(),
        skipped,
        removed,
        duration_ms: start.elapsed().as_millis() as u64,
        output_dir: output.to_path_buf(),
    })
}

/// Delete `*.stories.js` files in `output` that were not part of this build.
fn remove_stale_stories(output: &Path, written: &HashSet<String>) -> Result<usize> {
    let mut removed = 0;

    let entries = fs::read_dir(output)
        .with_context(|| format!("Failed to read {}", output.display()))?;

    for entry in entries {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if !path.is_file() || !name.ends_with(STORY_SUFFIX) || written.contains(name) {
            continue;
        }

        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
        tracing::info!("Removed stale story {}", path.display());
        removed += 1;
    }

    Ok(removed)
}

fn build_index(files: &[PathBuf]) -> Result<Vec<IndexEntry>, StoryError> {
    let indexer = UiExamplesIndexer::new();
    let mut entries = Vec::new();

    for file in files {
        entries.extend(indexer.create_index(file, &|title| title.to_string())?);
    }

    Ok(entries)
}

/// `badge.ui_examples.yml` -> `badge.stories.js`
fn story_file_name(file: &Path) -> String {
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("story");
    let stem = name.strip_suffix(UI_EXAMPLES_SUFFIX).unwrap_or(name);
    format!("{stem}{STORY_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn story_file_name_strips_suffix() {
        assert_eq!(
            story_file_name(Path::new("ui/badge.ui_examples.yml")),
            "badge.stories.js"
        );
    }

    #[test]
    fn builds_enabled_examples() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("ui_examples");
        let out = temp.path().join("stories");
        fs::create_dir_all(&dir).unwrap();

        fs::write(
            dir.join("badge.ui_examples.yml"),
            "id: badge\nenabled: true\nlabel: Badge\nrender:\n  - type: component\n    component: 'umami:badge'\n",
        )
        .unwrap();
        fs::write(
            dir.join("off.ui_examples.yml"),
            "id: off\nenabled: false\nlabel: Off\n",
        )
        .unwrap();

        let summary = build_stories(&UiExamplesPlugin::default(), &dir, &out).unwrap();

        assert_eq!(summary.stories, 1);
        assert_eq!(summary.skipped, 1);

        let story = fs::read_to_string(out.join("badge.stories.js")).unwrap();
        assert!(story.contains("import badge from '@umami/badge/badge.component.yml';"));
        assert!(!out.join("off.stories.js").exists());

        let index = fs::read_to_string(out.join("index.json")).unwrap();
        assert!(index.contains("\"exportName\": \"Badge\""));
        assert!(!index.contains("\"Off\""));
    }

    #[test]
    fn fails_on_invalid_example() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("ui_examples");
        let out = temp.path().join("stories");
        fs::create_dir_all(&dir).unwrap();

        fs::write(
            dir.join("nolabel.ui_examples.yml"),
            "id: nolabel\nenabled: true\n",
        )
        .unwrap();

        let result = build_stories(&UiExamplesPlugin::default(), &dir, &out);

        assert!(result.is_err());
        assert!(!out.join("nolabel.stories.js").exists());
    }

    #[test]
    fn removes_stories_of_disabled_and_deleted_examples() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("ui_examples");
        let out = temp.path().join("stories");
        fs::create_dir_all(&dir).unwrap();

        let badge = dir.join("badge.ui_examples.yml");
        let card = dir.join("card.ui_examples.yml");
        fs::write(&badge, "id: badge\nenabled: true\nlabel: Badge\n").unwrap();
        fs::write(&card, "id: card\nenabled: true\nlabel: Card\n").unwrap();

        let plugin = UiExamplesPlugin::default();
        let summary = build_stories(&plugin, &dir, &out).unwrap();
        assert_eq!(summary.stories, 2);
        assert!(out.join("badge.stories.js").exists());
        assert!(out.join("card.stories.js").exists());

        fs::write(&badge, "id: badge\nenabled: false\nlabel: Badge\n").unwrap();
        fs::remove_file(&card).unwrap();

        let summary = build_stories(&plugin, &dir, &out).unwrap();

        assert_eq!(summary.stories, 0);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.removed, 2);
        assert!(!out.join("badge.stories.js").exists());
        assert!(!out.join("card.stories.js").exists());
        assert!(out.join("index.json").exists());
    }

    #[test]
    fn keeps_unrelated_output_files() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("ui_examples");
        let out = temp.path().join("stories");
        fs::create_dir_all(&dir).unwrap();
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("README.md"), "notes").unwrap();

        build_stories(&UiExamplesPlugin::default(), &dir, &out).unwrap();

        assert!(out.join("README.md").exists());
    }

    #[test]
    fn failed_build_writes_nothing() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("ui_examples");
        let out = temp.path().join("stories");
        fs::create_dir_all(&dir).unwrap();

        fs::write(
            dir.join("a.ui_examples.yml"),
            "id: a\nenabled: true\nlabel: A\n",
        )
        .unwrap();
        fs::write(dir.join("b.ui_examples.yml"), "id: b\nenabled: true\n").unwrap();

        let result = build_stories(&UiExamplesPlugin::default(), &dir, &out);

        assert!(result.is_err());
        assert!(!out.join("a.stories.js").exists());
        assert!(!out.join("index.json").exists());
    }
}
