//! Construction of delegate nodes from symbolic type names.
//!
//! Collaborators register one factory per node type at start-up. The
//! `delegate() <name> <type>` directive then looks the type up here.
//!
//! # Usage
//!
//! ```rust
//! use cfgtree_core::factory::FactoryRegistry;
//! use cfgtree_core::node::Node;
//!
//! let mut factories = FactoryRegistry::new();
//! factories.register("cfgtree::Node", || Box::new(Node::new())).unwrap();
//!
//! // Unqualified names are looked up under the namespace
//! let (type_name, _node) = factories.create("Node", "cfgtree").unwrap();
//! assert_eq!(type_name, "cfgtree::Node");
//! ```

pub mod errors;
pub mod registry;

pub use errors::FactoryError;
pub use registry::{FactoryRegistry, NAMESPACE_SEPARATOR, NodeFactory, qualify};
