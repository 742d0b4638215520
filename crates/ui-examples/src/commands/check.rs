//! Validate description files and the components they reference.

use std::path::{Path, PathBuf};

use anyhow::Result;
use ui_examples_schema::{load_example, ComponentRef, RenderNode};
use ui_examples_story::{find_ui_example_files, Namespaces};

use crate::config::ConfigFile;

/// Outcome of checking a directory.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Description files loaded
    pub files: usize,

    /// Component descriptors referenced but missing on disk
    pub missing: Vec<PathBuf>,
}

/// Run the check command.
pub async fn run(config: ConfigFile, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or(config.examples.dir);
    let report = check_examples(&dir, &config.namespaces)?;

    for path in &report.missing {
        tracing::warn!("Component descriptor not found: {}", path.display());
    }

    tracing::info!(
        "Checked {} UI example files, {} missing components",
        report.files,
        report.missing.len()
    );

    Ok(())
}

/// Load every description file in `dir` and resolve its component references.
///
/// Invalid files and unknown namespaces are errors; descriptors that resolve
/// to a path that does not exist are collected in the report.
pub fn check_examples(dir: &Path, namespaces: &Namespaces) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for file in find_ui_example_files(dir) {
        let example = load_example(&file)?;
        let base = file.parent().unwrap_or(Path::new(""));

        let mut references = Vec::new();
        for root in &example.render {
            root.walk(&mut |node| {
                if let RenderNode::Component(component) = node {
                    references.push(component);
                }
            });
        }

        for component in references {
            let descriptor = match component.reference() {
                ComponentRef::Namespaced { namespace, name } => {
                    namespaces.resolve(namespace, name)?
                }
                ComponentRef::Relative { path, .. } => base.join(path),
            };

            if !descriptor.exists() && !report.missing.contains(&descriptor) {
                report.missing.push(descriptor);
            }
        }

        report.files += 1;
    }

    Ok(report)
}
