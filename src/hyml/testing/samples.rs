//! Verified hyml sample sources
//!
//! The files under `samples/` are embedded at compile time. Each sample records which parsers
//! it is written for, since the scanner understands a smaller syntax than the grammar parser.

use crate::hyml::ast::Document;
use crate::hyml::config::ParserConfig;
use crate::hyml::parsing::{parse_with, Strategy};

/// One embedded sample file
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub source: &'static str,
    /// Parse strategies the sample is valid for
    pub strategies: &'static [Strategy],
}

impl Sample {
    pub fn supports(&self, strategy: Strategy) -> bool {
        self.strategies.contains(&strategy)
    }

    /// Parse the sample with default options for `strategy`, panicking on failure
    pub fn parse_with(&self, strategy: Strategy) -> Document {
        let config = ParserConfig {
            strategy,
            ..ParserConfig::default()
        };
        match parse_with(self.source, &config) {
            Ok(doc) => doc,
            Err(err) => panic!(
                "failed to parse sample '{}' with the {} parser: {}",
                self.name,
                strategy.name(),
                err
            ),
        }
    }
}

const BOTH: &[Strategy] = &[Strategy::Scanner, Strategy::Grammar];
const GRAMMAR_ONLY: &[Strategy] = &[Strategy::Grammar];

const SAMPLES: &[Sample] = &[
    Sample {
        name: "attributes.hyml",
        source: include_str!("../../../samples/attributes.hyml"),
        strategies: BOTH,
    },
    Sample {
        name: "code.hyml",
        source: include_str!("../../../samples/code.hyml"),
        strategies: GRAMMAR_ONLY,
    },
    Sample {
        name: "element-text.hyml",
        source: include_str!("../../../samples/element-text.hyml"),
        strategies: BOTH,
    },
    Sample {
        name: "mismatch.hyml",
        source: include_str!("../../../samples/mismatch.hyml"),
        strategies: GRAMMAR_ONLY,
    },
    Sample {
        name: "page.hyml",
        source: include_str!("../../../samples/page.hyml"),
        strategies: BOTH,
    },
    Sample {
        name: "self-closing.hyml",
        source: include_str!("../../../samples/self-closing.hyml"),
        strategies: GRAMMAR_ONLY,
    },
];

/// Access to the embedded samples
pub struct Samples;

impl Samples {
    pub fn all() -> &'static [Sample] {
        SAMPLES
    }

    pub fn find(name: &str) -> Option<&'static Sample> {
        SAMPLES.iter().find(|sample| sample.name == name)
    }

    /// Source of the named sample. Panics on an unknown name so a typo fails the test loudly.
    pub fn get(name: &str) -> &'static str {
        match Self::find(name) {
            Some(sample) => sample.source,
            None => panic!(
                "unknown sample '{}', available: [{}]",
                name,
                Self::names().join(", ")
            ),
        }
    }

    pub fn names() -> Vec<&'static str> {
        SAMPLES.iter().map(|sample| sample.name).collect()
    }

    /// Samples valid for `strategy`
    pub fn for_strategy(strategy: Strategy) -> impl Iterator<Item = &'static Sample> {
        SAMPLES.iter().filter(move |sample| sample.supports(strategy))
    }
}
