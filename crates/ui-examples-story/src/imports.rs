//! Component import statements.

use std::collections::HashSet;

use ui_examples_schema::{ComponentNode, ComponentRef, RenderNode};

use crate::case::to_kebab_case;

/// Prefix of relative component references.
pub const RELATIVE_COMPONENTS_PREFIX: &str = "./components/";

/// Alias replacing [`RELATIVE_COMPONENTS_PREFIX`] in import sources.
pub const RELATIVE_COMPONENTS_ALIAS: &str = "@umami/";

/// A single import of a component descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentImport {
    /// Local binding (kebab-case component name)
    pub binding: String,

    /// Module specifier of the descriptor
    pub source: String,
}

impl ComponentImport {
    /// The import statement line.
    pub fn statement(&self) -> String {
        format!("import {} from '{}';", self.binding, self.source)
    }
}

/// Binding and source for a component node.
pub fn component_import(node: &ComponentNode) -> ComponentImport {
    match node.reference() {
        ComponentRef::Namespaced { namespace, name } => ComponentImport {
            binding: to_kebab_case(name),
            source: format!(
                "@{namespace}/{name}/{name}{}",
                ui_examples_schema::COMPONENT_SUFFIX
            ),
        },
        ComponentRef::Relative { path, name } => ComponentImport {
            binding: to_kebab_case(name),
            source: path.replacen(RELATIVE_COMPONENTS_PREFIX, RELATIVE_COMPONENTS_ALIAS, 1),
        },
    }
}

/// Import lines for every component in the render tree.
///
/// Nodes are visited in pre-order; duplicate lines collapse onto their first
/// occurrence.
pub fn generate_imports(render: &[RenderNode]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut lines = Vec::new();

    for root in render {
        root.walk(&mut |node| {
            if let RenderNode::Component(component) = node {
                let line = component_import(component).statement();
                if seen.insert(line.clone()) {
                    lines.push(line);
                }
            }
        });
    }

    lines
}
