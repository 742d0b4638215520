//! Example descriptions.

use serde_yaml::{Mapping, Value};

use crate::node::{scalar_text, NodeError, RenderNode};

/// A fully parsed description file.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleDescription {
    /// Example identifier (unique per file by convention)
    pub id: String,

    /// Disabled examples produce no story
    pub enabled: bool,

    /// Human readable name, used for the story title and export
    pub label: String,

    pub description: Option<String>,

    /// Top-level render nodes, in document order
    pub render: Vec<RenderNode>,
}

/// The scalar fields of a description file, read without validation.
///
/// Used where only metadata is needed and the render tree is never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleHeader {
    pub id: Option<String>,
    pub enabled: bool,
    pub label: Option<String>,
    pub description: Option<String>,
}

impl ExampleHeader {
    pub(crate) fn from_yaml(document: &Value) -> Self {
        let Some(map) = document.as_mapping() else {
            return Self::default();
        };

        Self {
            id: map.get("id").and_then(scalar_text),
            enabled: map.get("enabled").is_some_and(is_truthy),
            label: map.get("label").and_then(scalar_text),
            description: map.get("description").and_then(scalar_text),
        }
    }

    /// Label or an empty string.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }
}

impl ExampleDescription {
    /// Build a description from an already validated header and the raw document.
    pub(crate) fn from_parts(header: ExampleHeader, document: &Mapping) -> Result<Self, RenderError> {
        let render = match document.get("render") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .map(RenderNode::from_yaml)
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(RenderError::NotASequence),
        };

        Ok(Self {
            render,
            ..Self::from_header(header)
        })
    }

    /// Build a description with an empty render tree.
    pub(crate) fn from_header(header: ExampleHeader) -> Self {
        Self {
            id: header.id.unwrap_or_default(),
            enabled: header.enabled,
            label: header.label.unwrap_or_default(),
            description: header.description,
            render: Vec::new(),
        }
    }
}

/// Errors raised while reading the `render` field.
#[derive(Debug, thiserror::Error)]
pub(crate) enum RenderError {
    #[error("`render` must be a sequence of nodes")]
    NotASequence,

    #[error(transparent)]
    Node(#[from] NodeError),
}

/// Loose truthiness: `enabled: 1` and `enabled: "yes"` count as enabled.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) => true,
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}
