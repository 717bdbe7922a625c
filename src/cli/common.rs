//! Common utilities shared across CLI commands.

use crate::{
    config::SiteConfig,
    generator::feed::SiteMetadata,
    log,
    query::QueryResult,
};
use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// Read the query result named by `build.posts` and resolve site metadata.
///
/// `[site.info]` wins; empty fields fall back to the query's `siteMetadata`.
pub fn load_source(config: &SiteConfig) -> Result<(SiteMetadata, QueryResult)> {
    let query = QueryResult::read(&config.build.posts)
        .with_context(|| "Failed to load posts (set `build.posts` or pass --posts)")?;
    let site = SiteMetadata::from(&config.site.info).or(query.site_metadata());

    if site.site_url.is_empty() {
        log!("warning"; "no site url configured; entry links will be site-relative");
    }
    Ok((site, query))
}

/// Print to stdout, or write to `path` when given.
pub fn emit(content: &str, path: Option<&Path>, module: &str) -> Result<()> {
    emit_to(&mut io::stdout().lock(), content, path, module)
}

/// Write `content` to `out`, or to `path` when given.
pub fn emit_to(
    out: &mut impl Write,
    content: &str,
    path: Option<&Path>,
    module: &str,
) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            writeln!(file, "{content}")?;
            log!(module; "wrote output to {}", path.display());
        }
        None => writeln!(out, "{content}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const QUERY: &str = r#"{
        "site": { "siteMetadata": { "title": "Query", "description": "From query", "siteUrl": "https://query.example" } },
        "allPost": { "nodes": [ { "title": "A", "date": "January 1, 2023", "excerpt": "a", "slug": "/a" } ] }
    }"#;

    #[test]
    fn test_load_source_merges_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts.json");
        fs::write(&posts, QUERY).unwrap();

        let mut config = test_parse_config("");
        config.build.posts = posts;

        let (site, query) = load_source(&config).unwrap();
        assert_eq!(site.title, "Test");
        assert_eq!(site.site_url, "https://query.example");
        assert_eq!(query.posts().len(), 1);
    }

    #[test]
    fn test_load_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_parse_config("");
        config.build.posts = dir.path().join("missing.json");

        assert!(load_source(&config).is_err());
    }

    #[test]
    fn test_emit_to_writer() {
        let mut out = Vec::new();
        emit_to(&mut out, "<rss/>", None, "feed").unwrap();
        assert_eq!(out, b"<rss/>\n");
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/feed.xml");

        emit("<rss/>", Some(&path), "feed").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "<rss/>\n");
    }
}
