//! Rebuild stories on change.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use ui_examples_story::UiExamplesPlugin;

use crate::commands::build::build_stories;
use crate::config::ConfigFile;
use crate::watcher::{FileWatcher, WatchEvent};

/// Run the watch command.
pub async fn run(config: ConfigFile, dir: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or(config.examples.dir);
    let output = output.unwrap_or(config.examples.output);
    let plugin = Arc::new(UiExamplesPlugin::new(config.namespaces));

    rebuild(&plugin, &dir, &output).await;

    let (_watcher, mut rx) = FileWatcher::new(&dir)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;

    tracing::info!("Watching {} for changes", dir.display());

    while let Some(event) = rx.recv().await {
        match &event {
            WatchEvent::Changed(path) => tracing::info!("Changed: {}", path.display()),
            WatchEvent::Removed(path) => tracing::info!("Removed: {}", path.display()),
        }
        rebuild(&plugin, &dir, &output).await;
    }

    Ok(())
}

/// Build once off the async runtime, keeping the watch alive on failure.
async fn rebuild(plugin: &Arc<UiExamplesPlugin>, dir: &Path, output: &Path) {
    let plugin = Arc::clone(plugin);
    let dir = dir.to_path_buf();
    let output = output.to_path_buf();

    let result = tokio::task::spawn_blocking(move || build_stories(&plugin, &dir, &output)).await;

    match result {
        Ok(Ok(summary)) => tracing::info!(
            "Built {} stories ({} disabled, {} removed) in {}ms",
            summary.stories,
            summary.skipped,
            summary.removed,
            summary.duration_ms
        ),
        Ok(Err(e)) => tracing::error!("Build failed: {:#}", e),
        Err(e) => tracing::error!("Build task failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn rebuild_runs_off_the_runtime() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("ui_examples");
        let out = temp.path().join("stories");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("badge.ui_examples.yml"),
            "id: badge\nenabled: true\nlabel: Badge\n",
        )
        .unwrap();

        let plugin = Arc::new(UiExamplesPlugin::default());
        rebuild(&plugin, &dir, &out).await;
        assert!(out.join("badge.stories.js").exists());

        fs::remove_file(dir.join("badge.ui_examples.yml")).unwrap();
        rebuild(&plugin, &dir, &out).await;
        assert!(!out.join("badge.stories.js").exists());
    }
}
