//! The node trait every element of a configuration tree implements.

use super::NodeCore;
use super::errors::NodeError;

/// Name of the setting every node registers at construction.
pub const STATUS_VALUE: &str = "status";

/// Value of [`STATUS_VALUE`] that marks a node as active.
pub const ACTIVE: &str = "active";

/// A node of the configuration tree.
///
/// Implementors own a [`NodeCore`] holding their settings and child
/// delegates, register their schema at construction and may react to
/// updates through [`ConfigNode::on_value_changed`].
pub trait ConfigNode {
    fn core(&self) -> &NodeCore;

    fn core_mut(&mut self) -> &mut NodeCore;

    /// Called after every successful assignment of one of this node's values.
    fn on_value_changed(&mut self, _name: &str, _value: &str) {}

    /// Called by [`crate::node::initialize`] once configuration is complete.
    ///
    /// Children are initialised before their parent.
    fn on_init(&mut self) -> Result<(), NodeError> {
        Ok(())
    }

    /// A node is active iff its `status` value is exactly `"active"`.
    fn is_active(&self) -> bool {
        self.core().values().is_value(STATUS_VALUE, ACTIVE)
    }
}
