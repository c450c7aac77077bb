//! Nodes and node handles
//!
//! [`NodeData`] is the arena slot; callers read the tree through [`NodeRef`], a borrowed view
//! that pairs a node with its document so children and parent can be followed.

use super::attributes::Attributes;
use super::document::Document;
use std::fmt;
use std::ops::Range as ByteRange;

/// Tag reported by embedded-code nodes
pub const CODE_TAG: &str = "python";

/// Index of a node inside its [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Element { tag: String },
    Text { value: String },
    Code { source: String },
}

impl NodeKind {
    pub fn node_type(&self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Element { .. } => "Element",
            NodeKind::Text { .. } => "Text",
            NodeKind::Code { .. } => "Code",
        }
    }

    /// Whether this kind of node may own children
    pub fn is_container(&self) -> bool {
        matches!(self, NodeKind::Root | NodeKind::Element { .. })
    }
}

/// Arena slot for a single node
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) attributes: Attributes,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) span: ByteRange<usize>,
}

impl NodeData {
    pub(crate) fn new(kind: NodeKind, attributes: Attributes, span: ByteRange<usize>) -> Self {
        Self {
            kind,
            attributes,
            children: Vec::new(),
            parent: None,
            span,
        }
    }
}

/// Borrowed view of a node within its document
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    pub(crate) doc: &'a Document,
    pub(crate) id: NodeId,
    pub(crate) data: &'a NodeData,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &'a NodeKind {
        &self.data.kind
    }

    /// Element name, [`CODE_TAG`] for embedded code, `None` for text and root
    pub fn tag(&self) -> Option<&'a str> {
        match &self.data.kind {
            NodeKind::Element { tag } => Some(tag),
            NodeKind::Code { .. } => Some(CODE_TAG),
            NodeKind::Root | NodeKind::Text { .. } => None,
        }
    }

    /// Text content for text nodes, expression source for code nodes
    pub fn value(&self) -> Option<&'a str> {
        match &self.data.kind {
            NodeKind::Text { value } => Some(value),
            NodeKind::Code { source } => Some(source),
            NodeKind::Root | NodeKind::Element { .. } => None,
        }
    }

    pub fn attributes(&self) -> &'a Attributes {
        &self.data.attributes
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.data.parent.and_then(|id| self.doc.get(id))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let doc = self.doc;
        self.data
            .children
            .iter()
            .filter_map(move |&id| doc.get(id))
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'a>> {
        self.data
            .children
            .get(index)
            .and_then(|&id| self.doc.get(id))
    }

    pub fn child_count(&self) -> usize {
        self.data.children.len()
    }

    /// Byte range of the source this node was built from
    pub fn span(&self) -> ByteRange<usize> {
        self.data.span.clone()
    }

    pub fn is_root(&self) -> bool {
        matches!(self.data.kind, NodeKind::Root)
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data.kind, NodeKind::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self.data.kind, NodeKind::Text { .. })
    }

    pub fn is_code(&self) -> bool {
        matches!(self.data.kind, NodeKind::Code { .. })
    }

    /// All nodes below this one, depth first in document order
    pub fn descendants(&self) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeRef<'a>> = self.children().collect();
        stack.reverse();
        while let Some(node) = stack.pop() {
            let mut children: Vec<NodeRef<'a>> = node.children().collect();
            children.reverse();
            stack.extend(children);
            out.push(node);
        }
        out
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.data.kind)
            .field("attributes", &self.data.attributes)
            .field("children", &self.data.children.len())
            .finish()
    }
}
