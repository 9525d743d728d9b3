//! Ordered registry of named child nodes.

use std::fmt;

use indexmap::IndexMap;

use super::errors::NodeError;
use super::traits::ConfigNode;

/// A child node together with the type name it was built from.
pub struct Delegate {
    pub node: Box<dyn ConfigNode>,
    pub type_name: String,
}

impl fmt::Debug for Delegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegate")
            .field("type_name", &self.type_name)
            .field("active", &self.node.is_active())
            .finish()
    }
}

/// Children keyed by name, iterated in insertion order.
#[derive(Debug, Default)]
pub struct DelegateRegistry {
    delegates: IndexMap<String, Delegate>,
}

impl DelegateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `node` under `name`.
    ///
    /// Fails without side effects if the name is already registered; the
    /// rejected node is dropped.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        node: Box<dyn ConfigNode>,
        type_name: impl Into<String>,
    ) -> Result<(), NodeError> {
        let name = name.into();
        if self.delegates.contains_key(&name) {
            return Err(NodeError::DelegateAlreadyRegistered { name });
        }
        self.delegates.insert(
            name,
            Delegate {
                node,
                type_name: type_name.into(),
            },
        );
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.delegates.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&dyn ConfigNode, NodeError> {
        self.delegates
            .get(name)
            .map(|d| d.node.as_ref())
            .ok_or_else(|| NodeError::UnknownDelegate {
                name: name.to_string(),
            })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut dyn ConfigNode, NodeError> {
        match self.delegates.get_mut(name) {
            Some(d) => Ok(d.node.as_mut()),
            None => Err(NodeError::UnknownDelegate {
                name: name.to_string(),
            }),
        }
    }

    pub fn type_name(&self, name: &str) -> Option<&str> {
        self.delegates.get(name).map(|d| d.type_name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Delegate)> {
        self.delegates.iter().map(|(k, d)| (k.as_str(), d))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Delegate)> {
        self.delegates.iter_mut().map(|(k, d)| (k.as_str(), d))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.delegates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}
