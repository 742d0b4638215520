//! Description file discovery.

use std::path::{Path, PathBuf};

use ui_examples_schema::UI_EXAMPLES_SUFFIX;
use walkdir::WalkDir;

/// Find description files directly inside `directory` (not recursive).
///
/// Discovery never fails: any filesystem error is logged and an empty list
/// returned.
pub fn find_ui_example_files(directory: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::error!(
                    "Error finding UI example files in {}: {}",
                    directory.display(),
                    e
                );
                return Vec::new();
            }
        };

        let is_example = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(UI_EXAMPLES_SUFFIX));

        if is_example && entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(
        "Found {} UI example files in {}",
        files.len(),
        directory.display()
    );

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_top_level_example_files() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir_all(&nested).unwrap();

        fs::write(temp.path().join("b.ui_examples.yml"), "").unwrap();
        fs::write(temp.path().join("a.ui_examples.yml"), "").unwrap();
        fs::write(temp.path().join("notes.yml"), "").unwrap();
        fs::write(nested.join("deep.ui_examples.yml"), "").unwrap();

        let files = find_ui_example_files(temp.path());

        assert_eq!(
            files,
            vec![
                temp.path().join("a.ui_examples.yml"),
                temp.path().join("b.ui_examples.yml"),
            ]
        );
    }

    #[test]
    fn missing_directory_yields_empty_list() {
        let temp = tempdir().unwrap();
        assert!(find_ui_example_files(&temp.path().join("missing")).is_empty());
    }
}
