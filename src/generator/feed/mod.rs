//! Feed generation (RSS, Atom).
//!
//! - **entry**: post records → feed entries (pure)
//! - **RSS 2.0**: `rss.xml` with `content:encoded` item bodies
//! - **Atom 1.0**: alternative format, same entries

pub mod atom;
mod entry;
pub mod rss;

pub use entry::{FeedEntry, PostRecord, SiteMetadata, serialize_posts, serialize_posts_with};

use crate::{
    config::{FeedFormat, SiteConfig},
    log,
};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Everything a feed writer needs besides the entries.
#[derive(Debug, Clone, Copy)]
pub struct FeedHeader<'a> {
    /// Feed-level title.
    pub title: &'a str,
    pub site: &'a SiteMetadata,
    pub language: &'a str,
    /// Feed path relative to the site root, for Atom's `rel="self"` link.
    pub path: &'a Path,
    pub author: &'a str,
}

impl<'a> FeedHeader<'a> {
    pub fn new(config: &'a SiteConfig, site: &'a SiteMetadata) -> Self {
        Self {
            title: config.site.feed.title_or(&site.title),
            site,
            language: &config.site.info.language,
            path: &config.site.feed.path,
            author: &config.site.info.author,
        }
    }
}

/// Serialize posts into entries using the configured escaping.
pub fn entries_for(
    config: &SiteConfig,
    site: &SiteMetadata,
    posts: &[PostRecord],
) -> Vec<FeedEntry> {
    serialize_posts_with(site, posts, config.site.feed.escape.into())
}

/// Render the feed document in the configured format.
pub fn render_feed(config: &SiteConfig, header: &FeedHeader<'_>, entries: &[FeedEntry]) -> String {
    match config.site.feed.format {
        FeedFormat::Rss => rss::to_xml(header, entries),
        FeedFormat::Atom => atom::to_xml(header, entries),
    }
}

/// Write the feed into the output directory if enabled.
///
/// Returns the written path.
pub fn build_feed(
    config: &SiteConfig,
    site: &SiteMetadata,
    posts: &[PostRecord],
) -> Result<Option<PathBuf>> {
    if !config.site.feed.enable {
        return Ok(None);
    }

    let header = FeedHeader::new(config, site);
    let entries = entries_for(config, site, posts);
    let xml = render_feed(config, &header, &entries);

    let path = config.output_dir().join(&config.site.feed.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, xml)
        .with_context(|| format!("Failed to write feed to {}", path.display()))?;

    let kind = match config.site.feed.format {
        FeedFormat::Rss => "rss",
        FeedFormat::Atom => "atom",
    };
    log!(
        kind;
        "{} ({} entries)",
        path.file_name().unwrap_or_default().to_string_lossy(),
        entries.len()
    );
    Ok(Some(path))
}
