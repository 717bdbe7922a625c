//! Sitemap generation configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation
    #[serde(skip_serializing)]
    pub enable: bool,
    /// Output path for sitemap file
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_plugin_options_omit_enable() {
        let config = test_parse_config("[site.sitemap]\npath = \"map.xml\"");
        let json = serde_json::to_value(&config.site.sitemap).unwrap();

        assert!(config.site.sitemap.enable);
        assert_eq!(json, serde_json::json!({ "path": "map.xml" }));
    }
}
