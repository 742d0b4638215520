//! Typed model for UI example description files.
//!
//! A description file (`*.ui_examples.yml`) declares one UI example: an id, a
//! label, an enabled flag and a tree of render nodes. This crate reads such a
//! file, normalizes the loosely shaped YAML into explicit node variants and
//! validates the fields every example must carry.

pub mod example;
pub mod loader;
pub mod node;

pub use example::{ExampleDescription, ExampleHeader};
pub use loader::{load_example, parse_example, read_header, LoadError, UI_EXAMPLES_SUFFIX};
pub use node::{
    Attributes, ComponentNode, ComponentRef, HtmlChild, HtmlTagNode, ImageNode, NodeError,
    RenderNode, COMPONENT_SUFFIX,
};
