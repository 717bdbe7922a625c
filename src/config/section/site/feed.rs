//! Feed (RSS/Atom) generation configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Enable feed generation.
    pub enable: bool,
    /// Output path for feed file (relative to the output directory).
    pub path: PathBuf,
    /// Feed-level title. Falls back to `site.info.title` when empty.
    pub title: String,
    /// Feed format: rss | atom.
    pub format: FeedFormat,
    /// HTML-escape excerpt and url before embedding them in `content:encoded`.
    /// Off by default so the fragment matches the fixed template byte-for-byte.
    pub escape: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "rss.xml".into(),
            title: String::new(),
            format: FeedFormat::Rss,
            escape: false,
        }
    }
}

impl FeedConfig {
    /// Resolve the feed-level title.
    pub fn title_or<'a>(&'a self, site_title: &'a str) -> &'a str {
        if self.title.is_empty() {
            site_title
        } else {
            &self.title
        }
    }
}
