//! Tree building
//!
//!     The grammar parser produces a plain parse tree (see [ir](crate::hyml::parsing::ir)). This
//!     module transforms it into the [`Document`](crate::hyml::ast::Document) model: every
//!     element, text run and code block becomes an arena node attached to its parent, in
//!     source order.
//!
//!     Decisions that belong to the document rather than the grammar are made here:
//!
//!         - a closing tag whose name differs from the opening one is accepted; the opening
//!           name wins and a `tag-mismatch` warning is recorded on the document.
//!         - standalone code nodes are stripped of surrounding whitespace and stray braces.
//!         - attribute values keep their provenance (literal, expression or flag).
//!
//!     The scanner parser builds documents directly and does not go through here.

pub mod tree_builder;

pub use tree_builder::TreeBuilder;
