//! Interning configuration.

use serde::{Deserialize, Serialize};

/// Fragments longer than this many bytes are never interned.
pub const DEFAULT_INTERN_THRESHOLD: usize = 40;

/// Interning configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternConfig {
    /// Maximum fragment length (in bytes) eligible for interning.
    pub threshold: usize,
}

impl Default for InternConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_INTERN_THRESHOLD,
        }
    }
}

impl InternConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the intern-eligibility threshold.
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns true if a fragment of `len` bytes may be interned.
    pub fn is_eligible(&self, len: usize) -> bool {
        len <= self.threshold
    }
}
