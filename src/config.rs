//! Parse-time knobs.
use serde::{Deserialize, Serialize};

/// Nesting depth a parse may descend before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Guard against stack exhaustion on deeply nested schemas/inputs.
    pub max_depth: usize,

    /// When set, `optional` lets `null` through unchecked (treating it like an
    /// absent value). Off by default: `optional` only tolerates absence, and
    /// `null` goes to the inner schema like any other present value.
    pub optional_accepts_null: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            optional_accepts_null: false,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self { Self::default() }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_optional_accepts_null(mut self, yes: bool) -> Self {
        self.optional_accepts_null = yes;
        self
    }
}
