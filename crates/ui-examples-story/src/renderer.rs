//! Render function generation.
//!
//! Every top-level node becomes one fragment of a JavaScript template literal.
//! Components become `${binding.component({...})}` interpolations evaluated by
//! the story at runtime; images and html tags become static markup.

use serde_json::Value as JsonValue;
use ui_examples_schema::{Attributes, ComponentNode, HtmlChild, HtmlTagNode, ImageNode, RenderNode};

use crate::imports::component_import;

/// Separator between fragments inside the template literal.
const FRAGMENT_SEPARATOR: &str = "\n      ";

/// Alt text used when an image declares none.
const DEFAULT_ALT: &str = "Image";

/// Build the story render function from the top-level nodes.
///
/// Fragments are emitted in order; nodes that render to nothing are dropped.
pub fn render_function(render: &[RenderNode]) -> String {
    let fragments: Vec<String> = render
        .iter()
        .filter_map(render_fragment)
        .filter(|fragment| !fragment.is_empty())
        .collect();

    format!(
        "() => {{\n    return `\n      {}\n    `\n  }}",
        fragments.join(FRAGMENT_SEPARATOR)
    )
}

/// Render a single node. Unknown nodes yield `None`.
pub fn render_fragment(node: &RenderNode) -> Option<String> {
    match node {
        RenderNode::Component(component) => Some(component_call(component)),
        RenderNode::Image(image) => Some(image_tag(image)),
        RenderNode::HtmlTag(tag) => Some(html_tag(tag)),
        RenderNode::Unknown => {
            tracing::warn!("Skipping render node without a recognised type or theme");
            None
        }
    }
}

/// `${binding.component({ ...binding.args, ...props, ...slots })}`
fn component_call(node: &ComponentNode) -> String {
    let binding = component_import(node).binding;
    format!(
        "${{{binding}.component({{ ...{binding}.args, ...{}, ...{} }})}}",
        pretty_json(&node.props),
        pretty_json(&node.slots),
    )
}

fn image_tag(node: &ImageNode) -> String {
    let alt = node.alt.as_deref().unwrap_or(DEFAULT_ALT);
    format!(
        r#"<img src="{}" alt="{}"{} />"#,
        escape_template_literal(&html_escape(&node.uri)),
        escape_template_literal(&html_escape(alt)),
        render_attributes(&node.attributes),
    )
}

fn html_tag(node: &HtmlTagNode) -> String {
    let tag = escape_template_literal(&node.tag);
    let mut inner = node
        .value
        .as_deref()
        .map(escape_template_literal)
        .unwrap_or_default();

    for child in &node.children {
        match child {
            HtmlChild::Text(text) => inner.push_str(&escape_template_literal(text)),
            HtmlChild::Node(nested) => {
                if let Some(fragment) = render_fragment(nested) {
                    inner.push_str(&fragment);
                }
            }
        }
    }

    format!(
        "<{tag}{attrs}>{inner}</{tag}>",
        attrs = render_attributes(&node.attributes)
    )
}

/// ` key="value"` for each attribute, in declaration order.
fn render_attributes(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(key, value)| {
            format!(
                r#" {}="{}""#,
                escape_template_literal(key),
                escape_template_literal(&html_escape(&attribute_text(value)))
            )
        })
        .collect()
}

/// Text form of an attribute value. Lists join with spaces (class lists).
fn attribute_text(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::Object(_) => value.to_string(),
        JsonValue::Array(items) => items
            .iter()
            .map(attribute_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Two-space indented JSON, `{}` when empty.
fn pretty_json(map: &Attributes) -> String {
    format!("{:#}", JsonValue::Object(map.clone()))
}

/// Escape text for a JavaScript template literal.
pub(crate) fn escape_template_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Escape HTML special characters for attribute values.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
