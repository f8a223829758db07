//! Build configuration for the command line front end

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default terminator appended after the input
pub const DEFAULT_TERMINATOR: u8 = b'$';

/// How input text is turned into a tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Unique symbol appended after the input (default: `$`)
    pub terminator: u8,
    /// Symbols handed to each `extend` call (default: 64KB)
    pub batch_size: usize,
    /// Lowercase ASCII before indexing (default: false)
    pub case_insensitive: bool,
    /// Reject inputs larger than this many bytes (default: 64MB)
    pub max_input_size: u64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            terminator: DEFAULT_TERMINATOR,
            batch_size: 64 * 1024,
            case_insensitive: false,
            max_input_size: 64 * 1024 * 1024,
        }
    }
}

impl BuildConfig {
    /// Load a JSON config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }
}
