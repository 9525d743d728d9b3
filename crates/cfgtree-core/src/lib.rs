//! cfgtree-core: Core library for hierarchical command-driven configuration
//!
//! A configuration tree is made of nodes. Each node owns a flat store of
//! named string values and a registry of named child nodes (delegates).
//! Text commands such as `generator.diamond_xyz 0. 0. 0.` are routed down
//! the tree by their dotted address and applied to the node they name.
//!
//! # Main Entry Points
//!
//! - [`node`] - The node trait, value store and delegate registry
//! - [`command`] - Parsing and routing single command lines
//! - [`batch`] - Replaying files and two-pass buffers
//! - [`status`] - Printing and snapshotting the live tree
//! - [`factory`] - Type names `delegate()` can create
//! - [`config`] - Router and reporter settings

pub mod batch;
pub mod command;
pub mod config;
pub mod errors;
pub mod events;
pub mod expand;
pub mod factory;
pub mod logging;
pub mod node;
pub mod status;

// Re-export commonly used types at crate root for convenience
pub use command::{CommandError, ProcessMode, Router};
pub use config::CfgTreeConfig;
pub use errors::{CfgTreeError, CfgTreeResult, ConfigError};
pub use factory::{FactoryError, FactoryRegistry};
pub use node::{ConfigNode, Node, NodeCore, NodeError, initialize};

// Re-export logging initialization
pub use logging::init_logging;
