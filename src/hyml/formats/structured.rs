//! JSON and YAML formats
//!
//! Both serialize the document's [`NodeSnapshot`](crate::hyml::ast::NodeSnapshot) with serde.
//! Empty fields are left out: text and code nodes carry a `value`, elements a `tag`, and
//! `attributes`/`children` only appear when non-empty. Attribute values keep their provenance
//! as `{"kind": "literal" | "expression" | "flag", "value": ...}`.

use super::registry::{FormatError, Formatter};
use crate::hyml::ast::{snapshot_from_document, Document};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&snapshot_from_document(doc))
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Structural snapshot as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(&snapshot_from_document(doc))
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Structural snapshot as YAML"
    }
}
