//! Output formats for documents
//!
//! Every format implements [`Formatter`] and is reachable by name through
//! [`FormatRegistry`] or by value through [`Format`]:
//!
//! - `render`: indented, tag-wrapped debug view (see [render])
//! - `treeviz`: one line per node with box connectors and icons (see [treeviz])
//! - `json`, `yaml`: the structural [snapshot](crate::hyml::ast::snapshot) serialized with serde
//!   (see [structured])

pub mod registry;
pub mod render;
pub mod structured;
pub mod treeviz;

pub use registry::{serialize, Format, FormatError, FormatRegistry, Formatter};
pub use render::{render, RenderFormatter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
