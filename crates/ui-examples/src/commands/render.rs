//! Print the generated story module for one file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ui_examples_story::{BundlerPlugin, UiExamplesPlugin};

use crate::config::ConfigFile;

/// Run the render command.
pub async fn run(config: ConfigFile, file: &Path) -> Result<()> {
    let plugin = UiExamplesPlugin::new(config.namespaces);
    let id = file.to_string_lossy();

    let Some(story) = plugin.load(&id)? else {
        anyhow::bail!(
            "{} is not a UI example file (expected a *.ui_examples.yml name)",
            file.display()
        );
    };

    std::io::stdout()
        .write_all(story.as_bytes())
        .context("Failed to write story to stdout")?;

    Ok(())
}
