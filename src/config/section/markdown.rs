//! `[markdown]` section: markdown transformer options.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Render `$...$` / `$$...$$` math with KaTeX.
    pub math: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self { math: true }
    }
}
