//! Registry of node factories keyed by qualified type name.

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use super::errors::FactoryError;
use crate::node::ConfigNode;

/// Separator between namespace and type in a qualified type name.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Builds a fresh node with its schema registered.
pub type NodeFactory = Box<dyn Fn() -> Box<dyn ConfigNode>>;

/// Qualify `type_name` under `namespace` unless it already carries one.
pub fn qualify(type_name: &str, namespace: &str) -> String {
    if type_name.contains(NAMESPACE_SEPARATOR) || namespace.is_empty() {
        type_name.to_string()
    } else {
        format!("{}{}{}", namespace, NAMESPACE_SEPARATOR, type_name)
    }
}

#[derive(Default)]
pub struct FactoryRegistry {
    factories: IndexMap<String, NodeFactory>,
}

impl fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("types", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a type name.
    ///
    /// Type names are matched verbatim, so collaborators normally register
    /// the qualified form (`cfgtree::Detector`).
    pub fn register<F>(&mut self, type_name: impl Into<String>, factory: F) -> Result<(), FactoryError>
    where
        F: Fn() -> Box<dyn ConfigNode> + 'static,
    {
        let type_name = type_name.into();
        if type_name.is_empty() || type_name.chars().any(char::is_whitespace) {
            return Err(FactoryError::InvalidTypeName { type_name });
        }
        if self.factories.contains_key(&type_name) {
            return Err(FactoryError::AlreadyRegistered { type_name });
        }
        debug!(event = "core.factory.type_registered", type_name = %type_name);
        self.factories.insert(type_name, Box::new(factory));
        Ok(())
    }

    /// Resolve a possibly unqualified type name to its registered form.
    ///
    /// The qualified name under `namespace` wins over a bare registration.
    pub fn resolve(&self, type_name: &str, namespace: &str) -> Option<&str> {
        let qualified = qualify(type_name, namespace);
        self.factories
            .get_key_value(qualified.as_str())
            .or_else(|| self.factories.get_key_value(type_name))
            .map(|(k, _)| k.as_str())
    }

    /// Build a node of the given type, returning the resolved type name with it.
    pub fn create(&self, type_name: &str, namespace: &str) -> Option<(String, Box<dyn ConfigNode>)> {
        let resolved = self.resolve(type_name, namespace)?;
        let factory = self.factories.get(resolved)?;
        Some((resolved.to_string(), factory()))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Registered type names in registration order.
    pub fn type_names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
