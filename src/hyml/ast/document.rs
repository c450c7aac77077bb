//! The document: node arena plus the root
//!
//!     A document is created with its root already in place (always [`NodeId`] 0). Parsers
//!     create detached nodes and then hook them into the tree with
//!     [`attach_child`](Document::attach_child), which is the only way a node gains a parent.
//!
//!     Once a parser hands the document back, nothing else changes its shape. Reading happens
//!     through [`NodeRef`] views starting at [`Document::root`].

use super::attributes::Attributes;
use super::diagnostics::Diagnostic;
use super::error::TreeError;
use super::node::{NodeData, NodeId, NodeKind, NodeRef};
use super::snapshot::snapshot_from_document;
use std::ops::Range as ByteRange;

const ROOT: NodeId = NodeId(0);

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    diagnostics: Vec<Diagnostic>,
}

impl Document {
    /// Create an empty document holding only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Root, Attributes::new(), 0..0)],
            diagnostics: Vec::new(),
        }
    }

    pub fn root_id(&self) -> NodeId {
        ROOT
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            doc: self,
            id: ROOT,
            data: &self.nodes[ROOT.0],
        }
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.nodes.get(id.0).map(|data| NodeRef {
            doc: self,
            id,
            data,
        })
    }

    /// Number of nodes in the arena, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root().child_count() == 0
    }

    /// Non-fatal findings recorded while the document was built
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub(crate) fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn set_root_span(&mut self, span: ByteRange<usize>) {
        self.nodes[ROOT.0].span = span;
    }

    pub fn create_element(
        &mut self,
        tag: impl Into<String>,
        attributes: Attributes,
        span: ByteRange<usize>,
    ) -> NodeId {
        self.push(NodeData::new(
            NodeKind::Element { tag: tag.into() },
            attributes,
            span,
        ))
    }

    pub fn create_text(&mut self, value: impl Into<String>, span: ByteRange<usize>) -> NodeId {
        self.push(NodeData::new(
            NodeKind::Text {
                value: value.into(),
            },
            Attributes::new(),
            span,
        ))
    }

    pub fn create_code(&mut self, source: impl Into<String>, span: ByteRange<usize>) -> NodeId {
        self.push(NodeData::new(
            NodeKind::Code {
                source: source.into(),
            },
            Attributes::new(),
            span,
        ))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(data);
        id
    }

    /// Append `child` to `parent`'s children and point `child` back at `parent`.
    pub fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let parent_data = self.nodes.get(parent.0).ok_or(TreeError::UnknownNode(parent))?;
        if !parent_data.kind.is_container() {
            return Err(TreeError::LeafParent {
                parent,
                kind: parent_data.kind.node_type(),
            });
        }
        let child_data = self.nodes.get(child.0).ok_or(TreeError::UnknownNode(child))?;
        if child == ROOT {
            return Err(TreeError::RootAttachment);
        }
        if let Some(existing) = child_data.parent {
            return Err(TreeError::AlreadyAttached {
                child,
                parent: existing,
            });
        }
        // A childless node can only be its own ancestor
        let cycle = if child_data.children.is_empty() {
            child == parent
        } else {
            self.is_ancestor_or_self(child, parent)
        };
        if cycle {
            return Err(TreeError::Cycle { parent, child });
        }

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == candidate {
                return true;
            }
            match self.nodes[node.0].parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: tags, values, attributes and children. Spans, ids and diagnostics
/// are ignored.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        snapshot_from_document(self) == snapshot_from_document(other)
    }
}
