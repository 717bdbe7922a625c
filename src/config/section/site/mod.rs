//! `[site]` section configuration.
//!
//! Contains site metadata and site-level output features.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "My Blog"
//! description = "A personal blog"
//! author = "@alice"
//! url = "https://myblog.com"
//!
//! [site.feed]
//! path = "rss.xml"
//! title = "My Blog"
//!
//! [site.sitemap]
//! enable = true
//!
//! [site.manifest]
//! enable = true
//! name = "My Blog"
//! ```

mod feed;
mod info;
mod manifest;
mod sitemap;

pub use feed::{FeedConfig, FeedFormat};
pub use info::{SiteInfoConfig, SiteMetadataExport};
pub use manifest::ManifestConfig;
pub use sitemap::SitemapConfig;

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Site section configuration containing info and site-level features.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (title, author, description, etc.)
    pub info: SiteInfoConfig,

    /// Feed generation settings (RSS/Atom).
    pub feed: FeedConfig,

    /// Sitemap generation settings.
    pub sitemap: SitemapConfig,

    /// PWA manifest settings.
    pub manifest: ManifestConfig,
}

impl SiteSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.info.validate(self.feed.enable, diag);
        self.manifest.validate(diag);
    }
}
