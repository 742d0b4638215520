//! Story generation for UI example description files.
//!
//! Turns a `*.ui_examples.yml` file into a story module (component imports, a
//! templated render function and the story metadata wrapper), and exposes the
//! two hooks a documentation toolchain calls: a bundler plugin that serves the
//! generated module, and an indexer that produces lightweight story records.

pub mod case;
pub mod discovery;
pub mod generator;
pub mod imports;
pub mod indexer;
pub mod namespace;
pub mod plugin;
pub mod renderer;
pub mod templates;
pub mod traits;

pub use case::{capitalize, export_name, to_kebab_case};
pub use discovery::find_ui_example_files;
pub use generator::{generate_story_module, generate_ui_example_story};
pub use imports::{
    component_import, generate_imports, ComponentImport, RELATIVE_COMPONENTS_ALIAS,
    RELATIVE_COMPONENTS_PREFIX,
};
pub use indexer::{IndexEntry, UiExamplesIndexer, UI_EXAMPLES_TAG};
pub use namespace::{resolve_component_path, NamespaceError, Namespaces};
pub use plugin::UiExamplesPlugin;
pub use renderer::{render_fragment, render_function};
pub use templates::{StoryContext, TemplateEngine};
pub use traits::{BundlerPlugin, StoryError, StoryIndexer};

/// Story group every generated title lives under.
pub const STORY_GROUP: &str = "UI Examples";
