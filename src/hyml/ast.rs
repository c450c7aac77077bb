//! Document model for hyml
//!
//!     This module holds the tree both parser designs build into. A parse always produces a
//!     single [`Document`], which owns a synthetic root node and every node beneath it.
//!
//! Nodes
//!
//!     There is one node entity with four shapes (see [`NodeKind`]):
//!
//!         - Root: the synthetic top-level node, no tag and no value. One per document.
//!         - Element: a tag name, attributes and ordered children.
//!         - Text: a literal run of text. Never has children or attributes.
//!         - Code: an embedded `{ ... }` expression. Its tag reads as the sentinel
//!           [`CODE_TAG`] ("python") and its value is the expression source.
//!
//! Ownership
//!
//!     Nodes live in an arena owned by the document and are addressed by [`NodeId`]. A child
//!     is owned by exactly one parent; the parent back-reference is a plain index, so it never
//!     keeps anything alive. Dropping the document drops the whole tree.
//!
//!     The only structural mutation is [`Document::attach_child`], which refuses anything that
//!     would give a node two parents or make it its own ancestor.
//!
//! Attribute Values
//!
//!     Attribute values remember where they came from: a quoted literal, a `{...}` expression,
//!     or a bare flag. See [`AttributeValue`]. Callers that want the collapsed string view use
//!     [`AttributeValue::as_str`].

pub mod attributes;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod node;
pub mod range;
pub mod snapshot;

pub use attributes::{AttributeValue, Attributes};
pub use diagnostics::{Diagnostic, DiagnosticSeverity};
pub use document::Document;
pub use error::TreeError;
pub use node::{NodeId, NodeKind, NodeRef, CODE_TAG};
pub use range::{Position, Range, SourceLocation};
pub use snapshot::{snapshot_from_document, NodeSnapshot};
