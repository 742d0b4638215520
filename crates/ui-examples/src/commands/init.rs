//! Initialize UI examples in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing ui-examples...");

    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    } else {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    }

    let examples_dir = Path::new("ui_examples");
    if !examples_dir.exists() {
        fs::create_dir_all(examples_dir).context("Failed to create ui_examples directory")?;
    }

    let badge_path = examples_dir.join("badge.ui_examples.yml");
    if !badge_path.exists() || yes {
        fs::write(&badge_path, DEFAULT_EXAMPLE)
            .context("Failed to write badge.ui_examples.yml")?;
        tracing::info!("Created ui_examples/badge.ui_examples.yml");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'ui-examples build' to generate stories.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# ui-examples configuration

[namespaces]
# Namespace name -> theme or module path
umami = "web/themes/custom/umami"

[examples]
# Directory holding *.ui_examples.yml files
dir = "ui_examples"

# Output directory for generated stories
output = "stories"
"#;

const DEFAULT_EXAMPLE: &str = r#"id: badge_demo
enabled: true
label: Badge
description: Badges next to a heading
render:
  - type: html_tag
    tag: h2
    value: 'Recipes '
  - type: component
    component: 'umami:badge'
    props:
      text: New
  - type: image
    uri: /themes/custom/umami/images/badge.png
    alt: Badge preview
    attributes:
      loading: lazy
"#;
