//! `quire build`: write every enabled output into the output directory.
//!
//! Phases:
//! - **Load** - query result + site metadata
//! - **Feed** - RSS or Atom
//! - **Sitemap** - root, navigation and posts
//! - **Manifest** - web app manifest

use super::common::load_source;
use crate::{
    config::SiteConfig,
    debug,
    generator::{feed::build_feed, manifest::build_manifest, sitemap::build_sitemap},
    log,
};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// Build all outputs, returning the written paths in order.
pub fn build_site(config: &SiteConfig) -> Result<Vec<PathBuf>> {
    let (site, query) = load_source(config)?;
    let posts = query.posts();

    let output_dir = config.output_dir();
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output dir {}", output_dir.display()))?;

    for plugin in config.plugins() {
        debug!("plugin"; "{}", plugin.name());
    }

    let written: Vec<PathBuf> = [
        build_feed(config, &site, posts)?,
        build_sitemap(config, &site, posts)?,
        build_manifest(config)?,
    ]
    .into_iter()
    .flatten()
    .collect();

    log!("build"; "{} posts, {} files in {}", posts.len(), written.len(), output_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const QUERY: &str = r#"{
        "allPost": { "nodes": [
            { "title": "Newer", "date": "February 2, 2023", "excerpt": "b", "slug": "/blog/newer" },
            { "title": "Older", "date": "January 1, 2023", "excerpt": "a", "slug": "/blog/older" }
        ] }
    }"#;

    fn config_in(dir: &std::path::Path, extra: &str) -> SiteConfig {
        let posts = dir.join("posts.json");
        fs::write(&posts, QUERY).unwrap();

        let mut config = test_parse_config(&format!("url = \"https://example.com\"\n{extra}"));
        config.build.output = dir.join("public");
        config.build.posts = posts;
        config
    }

    #[test]
    fn test_build_default_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "");

        let written = build_site(&config).unwrap();
        let public = dir.path().join("public");
        assert_eq!(written, [public.join("rss.xml"), public.join("sitemap.xml")]);

        let rss = fs::read_to_string(public.join("rss.xml")).unwrap();
        let newer = rss.find("https://example.com/blog/newer").unwrap();
        let older = rss.find("https://example.com/blog/older").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_build_with_manifest_only() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(
            dir.path(),
            r#"[site.feed]
enable = false
[site.sitemap]
enable = false
[site.manifest]
enable = true
name = "Blog"
icons = [{ src = "/icon.png", sizes = "192x192", type = "image/png" }]"#,
        );

        let written = build_site(&config).unwrap();
        assert_eq!(written, [dir.path().join("public/manifest.webmanifest")]);
    }

    #[test]
    fn test_build_missing_posts_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path(), "");
        config.build.posts = dir.path().join("nope.json");

        assert!(build_site(&config).is_err());
    }
}
