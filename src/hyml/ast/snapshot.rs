//! Node snapshot - a normalized, owned copy of the tree
//!
//! The snapshot keeps what makes two parses "the same": tags, values, attributes and children.
//! Arena ids, spans and diagnostics are left out. It is the basis for structural equality and
//! for the serializing formats, so those don't each walk the arena themselves.

use super::attributes::Attributes;
use super::document::Document;
use super::node::{NodeId, NodeKind, NodeRef};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    /// "Root", "Element", "Text" or "Code"
    pub node_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    /// Short one-line description used by tree views
    pub fn label(&self) -> String {
        match (self.node_type.as_str(), &self.tag, &self.value) {
            ("Element", Some(tag), _) => {
                let mut label = tag.clone();
                for (name, value) in self.attributes.iter() {
                    label.push(' ');
                    label.push_str(name);
                    if !value.is_flag() {
                        label.push('=');
                        label.push_str(&value.to_string());
                    }
                }
                label
            }
            (_, _, Some(value)) => value.trim().to_string(),
            _ => String::new(),
        }
    }
}

/// Snapshot `node` and everything below it.
///
/// Nodes are visited in reverse document order, so every child is finished before its parent
/// collects it and the walk needs no recursion.
pub fn snapshot_node(node: NodeRef<'_>) -> NodeSnapshot {
    let mut order = vec![node];
    order.extend(node.descendants());

    let mut finished: HashMap<NodeId, NodeSnapshot> = HashMap::with_capacity(order.len());
    for current in order.into_iter().rev() {
        let children = current
            .children()
            .filter_map(|child| finished.remove(&child.id()))
            .collect();
        finished.insert(current.id(), shallow_snapshot(current, children));
    }

    finished
        .remove(&node.id())
        .unwrap_or_else(|| shallow_snapshot(node, Vec::new()))
}

fn shallow_snapshot(node: NodeRef<'_>, children: Vec<NodeSnapshot>) -> NodeSnapshot {
    NodeSnapshot {
        node_type: node.kind().node_type().to_string(),
        tag: match node.kind() {
            NodeKind::Element { .. } | NodeKind::Code { .. } => node.tag().map(str::to_string),
            _ => None,
        },
        value: node.value().map(str::to_string),
        attributes: node.attributes().clone(),
        children,
    }
}

pub fn snapshot_from_document(doc: &Document) -> NodeSnapshot {
    snapshot_node(doc.root())
}
