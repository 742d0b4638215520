//! Namespace mapping and component path resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use ui_examples_schema::COMPONENT_SUFFIX;

/// Mapping from namespace name to a filesystem path prefix.
///
/// Supplied by the host when a plugin is constructed and passed explicitly to
/// every call that needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Namespaces(BTreeMap<String, PathBuf>);

/// Errors that can occur when resolving a component reference.
#[derive(Debug, thiserror::Error)]
pub enum NamespaceError {
    #[error("Namespace '{0}' not found")]
    NotFound(String),

    #[error("Component reference '{0}' is not of the form namespace:component")]
    InvalidReference(String),
}

impl Namespaces {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a namespace.
    pub fn insert(&mut self, namespace: impl Into<String>, path: impl Into<PathBuf>) {
        self.0.insert(namespace.into(), path.into());
    }

    /// Path prefix of a namespace.
    pub fn get(&self, namespace: &str) -> Option<&Path> {
        self.0.get(namespace).map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }

    /// Descriptor path of `component` inside `namespace`.
    pub fn resolve(&self, namespace: &str, component: &str) -> Result<PathBuf, NamespaceError> {
        let root = self
            .get(namespace)
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| NamespaceError::NotFound(namespace.to_string()))?;

        Ok(root
            .join("components")
            .join(component)
            .join(format!("{component}{COMPONENT_SUFFIX}")))
    }

    /// Bundler aliases (`@namespace` -> `<path>/components`) matching the
    /// import sources the story generator emits.
    pub fn aliases(&self) -> Vec<(String, PathBuf)> {
        self.iter()
            .map(|(namespace, path)| (format!("@{namespace}"), path.join("components")))
            .collect()
    }
}

impl<K: Into<String>, V: Into<PathBuf>> FromIterator<(K, V)> for Namespaces {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Resolve a `namespace:component` reference to its descriptor path.
///
/// Splits on the first `:` and produces
/// `<namespacePath>/components/<component>/<component>.component.yml`.
pub fn resolve_component_path(
    reference: &str,
    namespaces: &Namespaces,
) -> Result<PathBuf, NamespaceError> {
    let (namespace, component) = reference
        .split_once(':')
        .ok_or_else(|| NamespaceError::InvalidReference(reference.to_string()))?;

    namespaces.resolve(namespace, component)
}
