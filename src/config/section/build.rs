//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"       # Output directory (relative to site root)
//! posts = "posts.json"    # Post query result (relative to site root)
//! minify = true           # Minify generated XML
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Build output directory.
    pub output: PathBuf,

    /// JSON file holding the post query result.
    pub posts: PathBuf,

    /// Minify XML output.
    pub minify: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            posts: "posts.json".into(),
            minify: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.posts, PathBuf::from("posts.json"));
        assert!(config.build.minify);
    }

    #[test]
    fn test_custom() {
        let config =
            test_parse_config("[build]\noutput = \"dist\"\nposts = \"data/posts.json\"\nminify = false");
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.posts, PathBuf::from("data/posts.json"));
        assert!(!config.build.minify);
    }
}
