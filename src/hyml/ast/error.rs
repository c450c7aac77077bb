//! Error types for document tree operations

use super::node::NodeId;
use thiserror::Error;

/// Errors raised by [`Document::attach_child`](super::Document::attach_child)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {0} does not exist in this document")]
    UnknownNode(NodeId),

    #[error("node {child} already has parent {parent}")]
    AlreadyAttached { child: NodeId, parent: NodeId },

    #[error("the root node cannot be attached as a child")]
    RootAttachment,

    #[error("attaching {child} under {parent} would make it its own ancestor")]
    Cycle { parent: NodeId, child: NodeId },

    #[error("{kind} node {parent} cannot have children")]
    LeafParent { parent: NodeId, kind: &'static str },
}
