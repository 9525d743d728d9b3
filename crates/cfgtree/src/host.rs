//! The tree the CLI configures.
//!
//! The root carries three delegates: `simulation`, `generator` and `module`
//! (which groups the `cave` and `tpc` detectors). Nodes here only hold and
//! check settings; nothing is simulated.

use cfgtree_core::factory::{FactoryError, FactoryRegistry, qualify};
use cfgtree_core::node::{ConfigNode, Node, NodeCore, NodeError};
use tracing::debug;

/// Build a core from a fixed schema.
///
/// The schemas below are literals with unique names, so registration
/// cannot fail.
fn schema(values: &[(&str, &str)]) -> NodeCore {
    NodeCore::with_values(values).expect("Node schema has duplicate value names")
}

pub struct RunNode {
    core: NodeCore,
}

impl RunNode {
    pub fn new(namespace: &str) -> Result<Self, NodeError> {
        let mut core = NodeCore::new();
        let delegates = core.delegates_mut();
        delegates.register(
            "simulation",
            Box::new(SimulationNode::new()),
            qualify("Simulation", namespace),
        )?;
        delegates.register(
            "generator",
            Box::new(GeneratorNode::new()),
            qualify("Generator", namespace),
        )?;
        delegates.register(
            "module",
            Box::new(module_group(namespace)?),
            qualify("Node", namespace),
        )?;
        Ok(Self { core })
    }
}

impl ConfigNode for RunNode {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }
}

fn module_group(namespace: &str) -> Result<Node, NodeError> {
    let mut group = Node::new();
    let delegates = group.core_mut().delegates_mut();
    delegates.register(
        "cave",
        Box::new(Detector::with_geometry("cave.geo")),
        qualify("Detector", namespace),
    )?;
    delegates.register(
        "tpc",
        Box::new(Detector::with_geometry("tpc.geo")),
        qualify("Detector", namespace),
    )?;
    Ok(group)
}

pub struct SimulationNode {
    core: NodeCore,
}

impl SimulationNode {
    pub fn new() -> Self {
        Self {
            core: schema(&[("engine", "TGeant3"), ("nevents", "1")]),
        }
    }
}

impl Default for SimulationNode {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigNode for SimulationNode {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn on_init(&mut self) -> Result<(), NodeError> {
        let nevents = self.core.values().parse_i64("nevents", 1)?;
        if nevents[0] < 0 {
            return Err(NodeError::init_failed(
                "simulation",
                format!("nevents must not be negative, got {}", nevents[0]),
            ));
        }
        Ok(())
    }
}

pub struct GeneratorNode {
    core: NodeCore,
}

impl GeneratorNode {
    pub fn new() -> Self {
        Self {
            core: schema(&[
                ("diamond_xyz", "0., 0., 0."),
                ("diamond_sigma_xyz", "0., 0., 0."),
            ]),
        }
    }
}

impl Default for GeneratorNode {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigNode for GeneratorNode {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn on_value_changed(&mut self, name: &str, value: &str) {
        debug!(event = "cli.host.generator_updated", name = name, value = value);
    }

    fn on_init(&mut self) -> Result<(), NodeError> {
        self.core.values().parse_f64("diamond_xyz", 3)?;
        let sigma = self.core.values().parse_f64("diamond_sigma_xyz", 3)?;
        if sigma.iter().any(|s| *s < 0.0) {
            return Err(NodeError::init_failed(
                "generator",
                "diamond_sigma_xyz components must not be negative",
            ));
        }
        Ok(())
    }
}

/// Fixed-momentum particle gun.
pub struct BoxGenerator {
    core: NodeCore,
}

impl BoxGenerator {
    pub fn new() -> Self {
        Self {
            core: schema(&[
                ("pdg", "211"),
                ("momentum", "0., 0., 1."),
                ("multiplicity", "1"),
            ]),
        }
    }
}

impl Default for BoxGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigNode for BoxGenerator {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn on_init(&mut self) -> Result<(), NodeError> {
        self.core.values().parse_i64("pdg", 1)?;
        self.core.values().parse_f64("momentum", 3)?;
        self.core.values().parse_i64("multiplicity", 1)?;
        Ok(())
    }
}

pub struct Detector {
    core: NodeCore,
}

impl Detector {
    pub fn new() -> Self {
        Self::with_geometry("")
    }

    pub fn with_geometry(geometry: &str) -> Self {
        Self {
            core: schema(&[("geometry", geometry)]),
        }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigNode for Detector {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }
}

/// Types `delegate()` can create, qualified by `namespace`.
pub fn register_factories(namespace: &str) -> Result<FactoryRegistry, FactoryError> {
    let mut factories = FactoryRegistry::new();
    factories.register(qualify("Node", namespace), || Box::new(Node::new()))?;
    factories.register(qualify("BoxGenerator", namespace), || {
        Box::new(BoxGenerator::new())
    })?;
    factories.register(qualify("Detector", namespace), || Box::new(Detector::new()))?;
    Ok(factories)
}
