//! Post query result input.
//!
//! The content query engine hands over a JSON document shaped like
//!
//! ```json
//! {
//!   "site": { "siteMetadata": { "title": "...", "description": "...", "siteUrl": "..." } },
//!   "allPost": { "nodes": [ { "title": "...", "date": "January 1, 2023", "excerpt": "...", "slug": "/..." } ] }
//! }
//! ```
//!
//! `allPost.nodes` is already sorted by date, newest first; order is kept.

use crate::{
    debug,
    generator::feed::{PostRecord, SiteMetadata},
    log,
};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("IO error when reading query result `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid query result in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub site: Option<SiteNode>,
    #[serde(default)]
    pub all_post: PostConnection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteNode {
    pub site_metadata: SiteMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostConnection {
    #[serde(default)]
    pub nodes: Vec<PostRecord>,
}

impl QueryResult {
    /// Read a query result from a JSON file.
    pub fn read(path: &Path) -> Result<Self, QueryError> {
        let content =
            fs::read_to_string(path).map_err(|err| QueryError::Io(path.to_path_buf(), err))?;
        let result = Self::parse(&content).map_err(|err| QueryError::Json(path.to_path_buf(), err))?;

        debug!("query"; "{} posts from {}", result.posts().len(), path.display());
        result.warn_malformed_slugs();
        Ok(result)
    }

    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.all_post.nodes
    }

    /// Site metadata from the query, if it carried any.
    pub fn site_metadata(&self) -> Option<&SiteMetadata> {
        self.site.as_ref().map(|site| &site.site_metadata)
    }

    /// Slugs are concatenated to the site url as-is; flag the ones that
    /// will produce a broken url.
    fn warn_malformed_slugs(&self) {
        for post in self.malformed_slugs() {
            log!("warning"; "post '{}' has slug '{}' without leading '/'", post.title, post.slug);
        }
    }

    fn malformed_slugs(&self) -> impl Iterator<Item = &PostRecord> {
        self.posts().iter().filter(|post| !post.slug.starts_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY: &str = r#"{
        "site": {
            "siteMetadata": {
                "title": "Blog",
                "description": "A blog",
                "siteUrl": "https://example.com",
                "site_url": "https://example.com"
            }
        },
        "allPost": {
            "nodes": [
                { "title": "Newer", "date": "February 2, 2023", "excerpt": "second", "slug": "/blog/newer" },
                { "title": "Older", "date": "January 1, 2023", "excerpt": "first", "slug": "/blog/older" }
            ]
        }
    }"#;

    #[test]
    fn test_parse_query() {
        let result = QueryResult::parse(QUERY).unwrap();
        let site = result.site_metadata().unwrap();
        assert_eq!(site.title, "Blog");
        assert_eq!(site.site_url, "https://example.com");

        let titles: Vec<_> = result.posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Newer", "Older"]);
    }

    #[test]
    fn test_parse_without_site() {
        let result = QueryResult::parse(r#"{"allPost":{"nodes":[]}}"#).unwrap();
        assert!(result.site_metadata().is_none());
        assert!(result.posts().is_empty());
    }

    #[test]
    fn test_parse_partial_site_metadata() {
        let result =
            QueryResult::parse(r#"{"site":{"siteMetadata":{"siteUrl":"https://a.example"}}}"#)
                .unwrap();
        let site = result.site_metadata().unwrap();
        assert_eq!(site.site_url, "https://a.example");
        assert_eq!(site.title, "");
    }

    #[test]
    fn test_malformed_slugs() {
        let result = QueryResult::parse(
            r#"{"allPost":{"nodes":[
                {"title":"ok","date":"","slug":"/ok"},
                {"title":"bad","date":"","slug":"bad"}
            ]}}"#,
        )
        .unwrap();
        let bad: Vec<_> = result.malformed_slugs().map(|p| p.title.as_str()).collect();
        assert_eq!(bad, ["bad"]);
    }

    #[test]
    fn test_read_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(QueryResult::read(&missing), Err(QueryError::Io(..))));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(QueryResult::read(&broken), Err(QueryError::Json(..))));
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, QUERY).unwrap();

        let result = QueryResult::read(&path).unwrap();
        assert_eq!(result.posts().len(), 2);
    }
}
