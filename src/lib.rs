//! # hyml
//!
//! A parser for hyml, a small markup language mixing HTML-like tags, plain text and
//! embedded code expressions in braces.
//!
//! File Layout
//!
//! Two parser designs live side by side. They share the global input (the hyml source)
//! and the global output (the [`Document`](hyml::ast::Document) tree), but nothing in
//! between:
//!
//! src/hyml
//!   ├── ast          The document model both designs build into
//!   ├── lexing       logos token sets for the grammar design
//!   ├── parsing      The scanner design, the grammar rules and the IR
//!   ├── building     IR to document transform
//!   ├── formats      Debug views (render, treeviz, json, yaml)
//!   ├── config       Layered configuration
//!   └── testing      Fluent tree assertions and verified samples
//!
//! For testing guidelines, see the [testing module](hyml::testing).

pub mod hyml;
