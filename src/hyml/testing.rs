//! Testing utilities for document assertions
//!
//! # Parser Testing Guidelines
//!
//! Parser tests use two tools together:
//!
//! 1. **[Samples]** - verified hyml sources, embedded from `samples/`
//! 2. **[assert_tree]** - fluent verification of the resulting tree
//!
//! ## Samples
//!
//! The two parsers accept different syntax: the scanner has no self-closing form and reads
//! `{...}` as plain text. Each [`Sample`] lists the strategies it is valid for, so a test
//! parameterized over both parsers can pick only the sources both accept:
//!
//! ```rust-example
//! use hyml::hyml::testing::Samples;
//! use hyml::hyml::parsing::Strategy;
//!
//! for sample in Samples::for_strategy(Strategy::Scanner) {
//!     let doc = parse(sample.source)?;
//! }
//! ```
//!
//! ## The Fluent Assertion API
//!
//! Walking a tree by hand means a `match` per level and a panic message per arm. With
//! `assert_tree` a nested check reads top-down:
//!
//! ```rust-example
//! use hyml::hyml::testing::assert_tree;
//!
//! assert_tree(&doc)
//!     .child_count(1)
//!     .child(0, |node| {
//!         node.assert_element("p")
//!             .attribute("id", "x")
//!             .child(0, |child| {
//!                 child.assert_text().text("Hello");
//!             });
//!     });
//! ```
//!
//! Failures name the path to the node, e.g. `root[0]:children[1]: Expected Text, found Code`.
//!
//! `text()` compares trimmed text so one assertion holds for both parsers; the grammar parser
//! keeps raw whitespace, which `raw()` checks exactly.

mod samples;
mod tree_assertions;

pub use samples::{Sample, Samples};
pub use tree_assertions::{
    assert_tree, CodeAssertion, DocumentAssertion, ElementAssertion, NodeAssertion,
    TextAssertion,
};
