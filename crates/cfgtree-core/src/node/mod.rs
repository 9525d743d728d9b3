//! Configuration tree nodes.
//!
//! Every element of the tree, the root included, is a [`ConfigNode`]. A node
//! owns a [`NodeCore`]: an ordered [`ValueStore`] of textual settings and an
//! ordered [`DelegateRegistry`] of exclusively owned children.
//!
//! # Usage
//!
//! ```rust
//! use cfgtree_core::node::{ConfigNode, Node};
//!
//! let mut generator = Node::new();
//! generator.core_mut().values_mut().register("mode", "slow").unwrap();
//!
//! let mut root = Node::new();
//! root.core_mut()
//!     .delegates_mut()
//!     .register("generator", Box::new(generator), "cfgtree::Node")
//!     .unwrap();
//!
//! assert!(root.is_active());
//! assert!(root.core().delegates().contains("generator"));
//! ```

pub mod delegates;
pub mod errors;
pub mod lifecycle;
pub mod traits;
pub mod values;

pub use delegates::{Delegate, DelegateRegistry};
pub use errors::NodeError;
pub use lifecycle::initialize;
pub use traits::{ACTIVE, ConfigNode, STATUS_VALUE};
pub use values::ValueStore;

/// Settings and children shared by every node implementation.
#[derive(Debug)]
pub struct NodeCore {
    values: ValueStore,
    delegates: DelegateRegistry,
}

impl NodeCore {
    /// An empty core with `status` registered as `"active"`.
    pub fn new() -> Self {
        let mut values = ValueStore::new();
        values.register(STATUS_VALUE, ACTIVE).ok();
        Self {
            values,
            delegates: DelegateRegistry::new(),
        }
    }

    /// A core with `status` plus the given settings, registered in order.
    pub fn with_values(values: &[(&str, &str)]) -> Result<Self, NodeError> {
        let mut core = Self::new();
        for (name, default) in values {
            core.values.register(*name, *default)?;
        }
        Ok(core)
    }

    pub fn values(&self) -> &ValueStore {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut ValueStore {
        &mut self.values
    }

    pub fn delegates(&self) -> &DelegateRegistry {
        &self.delegates
    }

    pub fn delegates_mut(&mut self) -> &mut DelegateRegistry {
        &mut self.delegates
    }
}

impl Default for NodeCore {
    fn default() -> Self {
        Self::new()
    }
}

/// A node with no behaviour of its own.
///
/// Used for grouping delegates and as the target of `delegate() <name> Node`.
#[derive(Debug, Default)]
pub struct Node {
    core: NodeCore,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigNode for Node {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }
}
