//! Hook traits implemented for the documentation toolchain.

use std::path::Path;

use ui_examples_schema::LoadError;

use crate::indexer::IndexEntry;
use crate::namespace::NamespaceError;

/// Errors that can occur while generating or indexing a story.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Namespace(#[from] NamespaceError),

    #[error("Template error: {0}")]
    Template(String),
}

/// A bundler plugin serving virtual modules.
pub trait BundlerPlugin: Send + Sync {
    /// Plugin identifier
    fn name(&self) -> &'static str;

    /// Produce the contents of module `id`.
    ///
    /// Returns `Ok(None)` for ids this plugin does not handle; `Ok(Some(""))`
    /// when the module is handled but has no content.
    fn load(&self, id: &str) -> Result<Option<String>, StoryError>;
}

/// A cataloguing hook producing lightweight story records.
pub trait StoryIndexer: Send + Sync {
    /// Whether `file_name` is handled by this indexer.
    fn test(&self, file_name: &str) -> bool;

    /// Produce zero or more index records for `file_name`.
    ///
    /// # Arguments
    /// * `file_name` - The description file to index
    /// * `make_title` - Host-provided formatter applied to the raw title
    fn create_index(
        &self,
        file_name: &Path,
        make_title: &dyn Fn(&str) -> String,
    ) -> Result<Vec<IndexEntry>, StoryError>;
}
