//! Read-only reporting of the live state of a tree.
//!
//! [`print_status`] writes one line per value of every active node, each
//! delegate preceded by a header naming its type:
//!
//! ```text
//! status                                  active
//! generator.                              <cfgtree::Generator>
//! generator.status                        active
//! generator.diamond_xyz                   0. 0. 0.
//! ```

use std::io::{self, Write};

use indexmap::IndexMap;
use serde::Serialize;

use crate::node::ConfigNode;

/// Width of the rule lines framing [`print_report`].
pub const RULE_WIDTH: usize = 80;

/// Write the values of `node` and its active delegates, depth-first.
///
/// Writes nothing for an inactive node.
pub fn print_status(
    node: &dyn ConfigNode,
    prefix: &str,
    width: usize,
    out: &mut dyn Write,
) -> io::Result<()> {
    if !node.is_active() {
        return Ok(());
    }

    for (name, value) in node.core().values().iter() {
        writeln!(out, "{:<width$}{}", format!("{}{}", prefix, name), value)?;
    }

    for (name, delegate) in node.core().delegates().iter() {
        if !delegate.node.is_active() {
            continue;
        }
        let child_prefix = format!("{}{}.", prefix, name);
        writeln!(out, "{:<width$}<{}>", child_prefix, delegate.type_name)?;
        print_status(delegate.node.as_ref(), &child_prefix, width, out)?;
    }

    Ok(())
}

/// [`print_status`] of a whole tree, framed by rule lines.
pub fn print_report(root: &dyn ConfigNode, width: usize, out: &mut dyn Write) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "{}", rule)?;
    print_status(root, "", width, out)?;
    writeln!(out, "{}", rule)
}

/// [`print_status`] into a string.
pub fn render_status(node: &dyn ConfigNode, width: usize) -> String {
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail
    let _ = print_status(node, "", width, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Serializable view of a node and everything below it, inactive nodes included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub active: bool,
    pub values: IndexMap<String, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub delegates: IndexMap<String, DelegateSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelegateSnapshot {
    pub type_name: String,
    #[serde(flatten)]
    pub node: StatusSnapshot,
}

pub fn snapshot(node: &dyn ConfigNode) -> StatusSnapshot {
    StatusSnapshot {
        active: node.is_active(),
        values: node
            .core()
            .values()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        delegates: node
            .core()
            .delegates()
            .iter()
            .map(|(name, delegate)| {
                (
                    name.to_string(),
                    DelegateSnapshot {
                        type_name: delegate.type_name.clone(),
                        node: snapshot(delegate.node.as_ref()),
                    },
                )
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn tree() -> Node {
        let mut generator = Node::new();
        generator
            .core_mut()
            .values_mut()
            .register("mode", "slow")
            .unwrap();

        let mut off = Node::new();
        off.core_mut()
            .values_mut()
            .assign("status", "inactive")
            .unwrap();
        off.core_mut()
            .delegates_mut()
            .register("hidden", Box::new(Node::new()), "cfgtree::Node")
            .unwrap();

        let mut root = Node::new();
        root.core_mut().values_mut().register("nevents", "10").unwrap();
        root.core_mut()
            .delegates_mut()
            .register("gen", Box::new(generator), "cfgtree::Generator")
            .unwrap();
        root.core_mut()
            .delegates_mut()
            .register("off", Box::new(off), "cfgtree::Node")
            .unwrap();
        root
    }

    #[test]
    fn test_status_lines_in_registry_order() {
        let output = render_status(&tree(), 12);
        let expected = "\
status      active
nevents     10
gen.        <cfgtree::Generator>
gen.status  active
gen.mode    slow
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_inactive_node_prints_nothing() {
        let mut root = tree();
        root.core_mut()
            .values_mut()
            .assign("status", "off")
            .unwrap();
        assert_eq!(render_status(&root, 40), "");
    }

    #[test]
    fn test_long_names_are_not_truncated() {
        let mut root = Node::new();
        root.core_mut()
            .values_mut()
            .register("a_rather_long_setting_name", "v")
            .unwrap();
        let output = render_status(&root, 4);
        assert!(output.contains("a_rather_long_setting_namev"));
    }

    #[test]
    fn test_report_is_framed() {
        let mut buffer = Vec::new();
        print_report(&tree(), 40, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.first().unwrap().len(), RULE_WIDTH);
        assert_eq!(lines.last().unwrap(), lines.first().unwrap());
    }

    #[test]
    fn test_snapshot_includes_inactive_nodes() {
        let snap = snapshot(&tree());
        assert!(snap.active);
        assert_eq!(snap.values.get("nevents").map(String::as_str), Some("10"));
        let off = snap.delegates.get("off").unwrap();
        assert!(!off.node.active);
        assert_eq!(off.type_name, "cfgtree::Node");
        assert!(off.node.delegates.contains_key("hidden"));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(snapshot(&tree())).unwrap();
        assert_eq!(json["values"]["nevents"], "10");
        assert_eq!(json["delegates"]["gen"]["type_name"], "cfgtree::Generator");
        assert_eq!(json["delegates"]["gen"]["values"]["mode"], "slow");
        assert_eq!(json["delegates"]["gen"]["active"], true);
    }
}
