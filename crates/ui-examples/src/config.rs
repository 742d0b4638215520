//! Configuration file (ui-examples.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use ui_examples_story::Namespaces;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Namespace name -> filesystem path prefix
    #[serde(default)]
    pub namespaces: Namespaces,
    #[serde(default)]
    pub examples: ExamplesConfig,
}

#[derive(Debug, Deserialize)]
pub struct ExamplesConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            output: default_output(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("ui_examples")
}
fn default_output() -> PathBuf {
    PathBuf::from("stories")
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = load_config(&temp.path().join("ui-examples.toml")).unwrap();

        assert!(config.namespaces.is_empty());
        assert_eq!(config.examples.dir, PathBuf::from("ui_examples"));
        assert_eq!(config.examples.output, PathBuf::from("stories"));
    }

    #[test]
    fn reads_namespaces() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("ui-examples.toml");
        fs::write(
            &path,
            "[namespaces]\numami = \"web/themes/custom/umami\"\n\n[examples]\ndir = \"examples\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(
            config.namespaces.get("umami"),
            Some(Path::new("web/themes/custom/umami"))
        );
        assert_eq!(config.examples.dir, PathBuf::from("examples"));
        assert_eq!(config.examples.output, PathBuf::from("stories"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("ui-examples.toml");
        fs::write(&path, "[namespaces\n").unwrap();

        assert!(load_config(&path).is_err());
    }
}
