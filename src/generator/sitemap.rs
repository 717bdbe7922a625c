//! Sitemap generation.
//!
//! Lists the site root, the theme navigation pages and every post for
//! search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use super::feed::{PostRecord, SiteMetadata, serialize_posts};
use crate::{
    config::SiteConfig,
    generator::minify_xml,
    log,
    utils::{date::DateTimeUtc, html::escape_xml},
};
use anyhow::{Context, Result};
use std::{collections::HashSet, fs, path::PathBuf};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled.
///
/// Returns the written path.
pub fn build_sitemap(
    config: &SiteConfig,
    site: &SiteMetadata,
    posts: &[PostRecord],
) -> Result<Option<PathBuf>> {
    if !config.site.sitemap.enable {
        return Ok(None);
    }
    let sitemap = Sitemap::build(config, site, posts);
    sitemap.write(config).map(Some)
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    fn build(config: &SiteConfig, site: &SiteMetadata, posts: &[PostRecord]) -> Self {
        let base_url = site.site_url.trim_end_matches('/');

        let pages = std::iter::once("/")
            .chain(config.theme.navigation.iter().map(|nav| nav.slug.as_str()))
            .map(|slug| UrlEntry {
                loc: format!("{base_url}{slug}"),
                lastmod: None,
            });

        // Post urls match the feed links exactly
        let entries = serialize_posts(site, posts).into_iter().map(|entry| UrlEntry {
            lastmod: DateTimeUtc::parse(&entry.date).map(DateTimeUtc::to_ymd),
            loc: entry.url,
        });

        let mut seen = HashSet::new();
        let urls = pages
            .chain(entries)
            .filter(|entry| seen.insert(entry.loc.clone()))
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<PathBuf> {
        let sitemap_path = config.output_dir().join(&config.site.sitemap.path);
        let count = self.urls.len();
        let xml = self.into_xml();
        let xml = minify_xml(xml.as_bytes(), config.build.minify);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!(
            "sitemap";
            "{} ({} urls)",
            sitemap_path.file_name().unwrap_or_default().to_string_lossy(),
            count
        );
        Ok(sitemap_path)
    }
}
