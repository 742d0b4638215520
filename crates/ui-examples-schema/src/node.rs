//! Render tree nodes.
//!
//! Description files express nodes as loosely shaped YAML mappings: a `type`
//! field selects the kind, a legacy `theme: image` field is an alternative way
//! to declare an image, and html tags carry their children under arbitrary
//! extra keys. Everything is translated here, once, into [`RenderNode`].

use serde_json::{Map, Number as JsonNumber, Value as JsonValue};
use serde_yaml::{Mapping, Value};

/// File suffix of a component descriptor.
pub const COMPONENT_SUFFIX: &str = ".component.yml";

/// Keys of an html tag mapping that are not child content.
const HTML_TAG_RESERVED_KEYS: [&str; 4] = ["type", "tag", "value", "attributes"];

/// Ordered attribute/prop map, converted from YAML.
pub type Attributes = Map<String, JsonValue>;

/// One visual unit of the render tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// Reference to a component descriptor.
    Component(ComponentNode),
    /// A single `<img>` element.
    Image(ImageNode),
    /// An html element with optional nested content.
    HtmlTag(HtmlTagNode),
    /// A mapping that matches no known node shape. Renders to nothing.
    Unknown,
}

/// A component invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentNode {
    /// `namespace:name` or `./components/<name>/<name>.component.yml`
    pub component: String,

    /// Props merged over the component's default args
    pub props: Attributes,

    /// Slots merged after props
    pub slots: Attributes,
}

/// How a component node points at its descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentRef<'a> {
    /// `namespace:name`
    Namespaced { namespace: &'a str, name: &'a str },
    /// A relative descriptor path; `name` is its last segment without the suffix.
    Relative { path: &'a str, name: &'a str },
}

/// An image element.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    pub uri: String,
    pub alt: Option<String>,
    pub attributes: Attributes,
}

/// An html element.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlTagNode {
    /// Element name, `div` when not given
    pub tag: String,

    /// Text emitted before the children
    pub value: Option<String>,

    pub attributes: Attributes,

    /// Nested content in document order
    pub children: Vec<HtmlChild>,
}

/// Content nested inside an html tag.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlChild {
    Text(String),
    Node(RenderNode),
}

/// Errors raised while translating YAML into render nodes.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("`{0}` must be a mapping")]
    ExpectedMapping(&'static str),

    #[error("unsupported mapping key: {0}")]
    UnsupportedKey(String),
}

impl RenderNode {
    /// Translate one YAML value into a node.
    ///
    /// `type` takes priority over the legacy `theme` field. Values that are not
    /// mappings, and mappings matching no rule, become [`RenderNode::Unknown`].
    pub fn from_yaml(value: &Value) -> Result<Self, NodeError> {
        let Value::Mapping(map) = untag(value) else {
            return Ok(Self::Unknown);
        };

        let kind = map.get("type").and_then(Value::as_str);
        let theme = map.get("theme").and_then(Value::as_str);

        match kind {
            Some("component") if has_text(map, "component") => {
                Ok(Self::Component(ComponentNode::from_mapping(map)?))
            }
            Some("image") => Ok(Self::Image(ImageNode::from_mapping(map)?)),
            Some("html_tag") => Ok(Self::HtmlTag(HtmlTagNode::from_mapping(map)?)),
            _ if theme == Some("image") => Ok(Self::Image(ImageNode::from_mapping(map)?)),
            _ => Ok(Self::Unknown),
        }
    }

    /// Visit this node and every nested node in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a RenderNode)) {
        visit(self);
        if let Self::HtmlTag(tag) = self {
            for child in &tag.children {
                if let HtmlChild::Node(node) = child {
                    node.walk(visit);
                }
            }
        }
    }
}

impl ComponentNode {
    fn from_mapping(map: &Mapping) -> Result<Self, NodeError> {
        Ok(Self {
            component: map.get("component").and_then(scalar_text).unwrap_or_default(),
            props: optional_mapping(map, "props")?,
            slots: optional_mapping(map, "slots")?,
        })
    }

    /// Split the component reference into its namespaced or relative form.
    pub fn reference(&self) -> ComponentRef<'_> {
        match self.component.split_once(':') {
            Some((namespace, name)) => ComponentRef::Namespaced { namespace, name },
            None => {
                let last = self.component.rsplit('/').next().unwrap_or_default();
                let name = match last.find(COMPONENT_SUFFIX) {
                    Some(pos) => &last[..pos],
                    None => last,
                };
                ComponentRef::Relative {
                    path: &self.component,
                    name,
                }
            }
        }
    }
}

impl ImageNode {
    fn from_mapping(map: &Mapping) -> Result<Self, NodeError> {
        Ok(Self {
            uri: map.get("uri").and_then(scalar_text).unwrap_or_default(),
            alt: map
                .get("alt")
                .and_then(scalar_text)
                .filter(|alt| !alt.is_empty()),
            attributes: optional_mapping(map, "attributes")?,
        })
    }
}

impl HtmlTagNode {
    fn from_mapping(map: &Mapping) -> Result<Self, NodeError> {
        let mut children = Vec::new();

        for (key, value) in map {
            let key = key_text(key)?;
            if HTML_TAG_RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            collect_children(value, &mut children)?;
        }

        Ok(Self {
            tag: map
                .get("tag")
                .and_then(scalar_text)
                .filter(|tag| !tag.is_empty())
                .unwrap_or_else(|| "div".to_string()),
            value: map.get("value").and_then(scalar_text),
            attributes: optional_mapping(map, "attributes")?,
            children,
        })
    }
}

/// Flatten one extra-key value into children, in encounter order.
fn collect_children(value: &Value, out: &mut Vec<HtmlChild>) -> Result<(), NodeError> {
    match value {
        Value::Null => {}
        Value::Sequence(items) => {
            for item in items {
                collect_children(item, out)?;
            }
        }
        Value::Mapping(_) => out.push(HtmlChild::Node(RenderNode::from_yaml(value)?)),
        Value::Tagged(tagged) => collect_children(&tagged.value, out)?,
        scalar => {
            if let Some(text) = scalar_text(scalar) {
                out.push(HtmlChild::Text(text));
            }
        }
    }
    Ok(())
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn has_text(map: &Mapping, key: &str) -> bool {
    map.get(key)
        .and_then(scalar_text)
        .is_some_and(|text| !text.is_empty())
}

/// Read `key` as an ordered map. Absent or `null` yields an empty map.
fn optional_mapping(map: &Mapping, key: &'static str) -> Result<Attributes, NodeError> {
    match map.get(key).map(untag) {
        None | Some(Value::Null) => Ok(Attributes::new()),
        Some(Value::Mapping(inner)) => mapping_to_json(inner),
        Some(_) => Err(NodeError::ExpectedMapping(key)),
    }
}

/// Text form of a scalar. Non-scalars yield `None`.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match untag(value) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn key_text(key: &Value) -> Result<String, NodeError> {
    scalar_text(key).ok_or_else(|| NodeError::UnsupportedKey(format!("{key:?}")))
}

fn mapping_to_json(map: &Mapping) -> Result<Attributes, NodeError> {
    let mut out = Attributes::new();
    for (key, value) in map {
        out.insert(key_text(key)?, yaml_to_json(value)?);
    }
    Ok(out)
}

/// Convert a YAML value to JSON, keeping mapping order.
pub fn yaml_to_json(value: &Value) -> Result<JsonValue, NodeError> {
    Ok(match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::from(i)
            } else if let Some(u) = n.as_u64() {
                JsonValue::from(u)
            } else {
                n.as_f64()
                    .and_then(JsonNumber::from_f64)
                    .map_or(JsonValue::Null, JsonValue::Number)
            }
        }
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Sequence(items) => JsonValue::Array(
            items
                .iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Mapping(map) => JsonValue::Object(mapping_to_json(map)?),
        Value::Tagged(tagged) => yaml_to_json(&tagged.value)?,
    })
}
