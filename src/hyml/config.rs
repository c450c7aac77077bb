//! Configuration loader for hyml.
//!
//! `defaults/hyml.default.toml` is embedded into the library so that documented defaults and
//! runtime behavior stay in sync. Callers layer their own files on top of those defaults via
//! [`Loader`] before deserializing into [`HymlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::hyml::parsing::{ClosingPolicy, Strategy, DEFAULT_MAX_DEPTH};

const DEFAULT_TOML: &str = include_str!("../../defaults/hyml.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HymlConfig {
    pub parser: ParserConfig,
    pub render: RenderConfig,
}

/// Parser selection and parser options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    pub strategy: Strategy,
    /// Scanner only
    pub closing_policy: ClosingPolicy,
    /// Grammar parser only
    pub trim_text: bool,
    /// Deepest element nesting accepted before the parse fails
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            closing_policy: ClosingPolicy::default(),
            trim_text: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Knobs for the text output formats.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    pub indent: String,
    pub treeviz_max_label: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            treeviz_max_label: 30,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file, skipped if absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `("parser.strategy", "scanner")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<HymlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Shortcut for callers that only need the defaults.
pub fn load_defaults() -> Result<HymlConfig, ConfigError> {
    Loader::new().build()
}
