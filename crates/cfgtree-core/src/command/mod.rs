//! Command routing: parsing single lines, resolving dotted addresses and
//! executing them against a tree.
//!
//! ```
//! use cfgtree_core::command::Router;
//! use cfgtree_core::factory::FactoryRegistry;
//! use cfgtree_core::node::{ConfigNode, Node};
//!
//! let mut root = Node::new();
//! root.core_mut().values_mut().register("nevents", "1").unwrap();
//!
//! let mut router = Router::new(FactoryRegistry::new());
//! router.process_command(&mut root, "nevents 100").unwrap();
//! assert_eq!(root.core().values().get("nevents").unwrap(), "100");
//! ```

pub mod errors;
pub mod mode;
pub mod parse;
pub mod router;

pub use errors::CommandError;
pub use mode::ProcessMode;
pub use parse::{
    BROADCAST_SEGMENT, CommandLine, DELEGATE_DIRECTIVE, Directive, INCLUDE_DIRECTIVE, Target,
    classify,
};
pub use router::Router;
