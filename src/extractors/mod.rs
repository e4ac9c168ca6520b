//! HTML extraction modules
//!
//! `scanner` drives the tokenizer; `dublin_core_extractor` turns the start
//! tags it reports into Dublin Core elements.

mod dublin_core_extractor;
mod scanner;

pub use dublin_core_extractor::*;
pub use scanner::*;

use serde::{Deserialize, Serialize};

/// Lookup request from C++
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub specs: Vec<LookupSpec>,
}

/// Single lookup specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupSpec {
    /// Element name, optionally qualified: "title", "Date.created"
    pub element: String,
    /// Column alias for output
    pub alias: String,
    /// Return every match as a JSON array instead of the first content
    #[serde(default)]
    pub all: bool,
}

/// Result returned to C++
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtractionResult {
    pub values: Vec<ExtractedValue>,
}

/// Single extracted value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedValue {
    pub alias: String,
    pub value: Option<String>,
}
