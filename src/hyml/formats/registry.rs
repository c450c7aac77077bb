//! Format registry for document serialization
//!
//! Formats implement the [`Formatter`] trait and are registered by name with
//! [`FormatRegistry`]. The built-in formats are also enumerated by [`Format`], which parses
//! from the same names.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::render::RenderFormatter;
use super::structured::{JsonFormatter, YamlFormatter};
use super::treeviz::TreevizFormatter;
use crate::hyml::ast::Document;
use crate::hyml::config::RenderConfig;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Trait for document formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "json")
    fn name(&self) -> &str;

    /// Serialize a document to this format
    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// The built-in formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Render,
    Treeviz,
    Json,
    Yaml,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Render, Format::Treeviz, Format::Json, Format::Yaml];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Render => "render",
            Format::Treeviz => "treeviz",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// The formatter for this format, configured from `config`
    pub fn formatter(&self, config: &RenderConfig) -> Box<dyn Formatter> {
        match self {
            Format::Render => Box::new(RenderFormatter::new(config.indent.clone())),
            Format::Treeviz => Box::new(TreevizFormatter::new(config.treeviz_max_label)),
            Format::Json => Box::new(JsonFormatter),
            Format::Yaml => Box::new(YamlFormatter),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }
}

/// Serialize `doc` in `format` with default render settings
pub fn serialize(doc: &Document, format: Format) -> Result<String, FormatError> {
    format.formatter(&RenderConfig::default()).serialize(doc)
}

/// Registry of document formatters, keyed by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in format, configured from `config`
    pub fn with_config(config: &RenderConfig) -> Self {
        let mut registry = Self::new();
        for format in Format::ALL {
            registry.register_boxed(format.formatter(config));
        }
        registry
    }

    /// Register a formatter, replacing any formatter with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.register_boxed(Box::new(formatter));
    }

    fn register_boxed(&mut self, formatter: Box<dyn Formatter>) {
        self.formatters
            .insert(formatter.name().to_string(), formatter);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a document using the named format
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(doc)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_config(&RenderConfig::default())
    }
}
