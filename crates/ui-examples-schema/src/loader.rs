//! Reading and validating description files.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::example::{ExampleDescription, ExampleHeader, RenderError};

/// File name suffix of a description file.
pub const UI_EXAMPLES_SUFFIX: &str = ".ui_examples.yml";

/// Errors that can occur when loading a description file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid UI example {}: {message}", .path.display())]
    Validation { path: PathBuf, message: String },

    #[error("Malformed render tree in {}: {message}", .path.display())]
    Schema { path: PathBuf, message: String },
}

impl LoadError {
    /// Path of the file that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::Validation { path, .. }
            | Self::Schema { path, .. } => path,
        }
    }
}

/// Load, parse and validate a description file.
///
/// Fails if the file cannot be read, is not valid YAML, lacks a non-empty
/// `id` or `label`, or is enabled and carries a malformed render tree.
pub fn load_example(path: &Path) -> Result<ExampleDescription, LoadError> {
    read_source(path)
        .and_then(|source| parse_example(&source, path))
        .inspect_err(|e| {
            tracing::error!("Error reading UI example file: {}, {}", path.display(), e);
        })
}

/// Parse and validate description source. `path` is only used for error context.
///
/// The render tree of a disabled example is never read; it comes back empty.
pub fn parse_example(source: &str, path: &Path) -> Result<ExampleDescription, LoadError> {
    let document = parse_document(source, path)?;
    let header = ExampleHeader::from_yaml(&document);

    if is_blank(header.id.as_deref()) || is_blank(header.label.as_deref()) {
        return Err(LoadError::Validation {
            path: path.to_path_buf(),
            message: "UI example must have id and label".to_string(),
        });
    }

    // A header with an id implies a mapping document.
    let Some(map) = document.as_mapping() else {
        return Err(LoadError::Validation {
            path: path.to_path_buf(),
            message: "document must be a mapping".to_string(),
        });
    };

    if !header.enabled {
        return Ok(ExampleDescription::from_header(header));
    }

    ExampleDescription::from_parts(header, map).map_err(|e: RenderError| LoadError::Schema {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read only the scalar fields of a description file, without validation.
pub fn read_header(path: &Path) -> Result<ExampleHeader, LoadError> {
    let source = read_source(path)?;
    let document = parse_document(&source, path)?;
    Ok(ExampleHeader::from_yaml(&document))
}

fn is_blank(field: Option<&str>) -> bool {
    field.map_or(true, str::is_empty)
}

fn read_source(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_document(source: &str, path: &Path) -> Result<Value, LoadError> {
    serde_yaml::from_str(source).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
