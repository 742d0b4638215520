//! Print the index records for one file.

use std::path::Path;

use anyhow::Result;
use ui_examples_story::{StoryIndexer, UiExamplesIndexer};

/// Run the index command.
pub async fn run(file: &Path) -> Result<()> {
    let indexer = UiExamplesIndexer::new();

    if !indexer.test(&file.to_string_lossy()) {
        anyhow::bail!(
            "{} does not match {}",
            file.display(),
            indexer.pattern().as_str()
        );
    }

    let entries = indexer.create_index(file, &|title| title.to_string())?;
    println!("{}", serde_json::to_string_pretty(&entries)?);

    Ok(())
}
