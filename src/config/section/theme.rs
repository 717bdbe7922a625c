//! `[theme]` section configuration.
//!
//! Navigation and external links handed to the blog theme.
//!
//! ```toml
//! [theme]
//! navigation = [{ title = "Blog", slug = "/blog" }]
//! external_links = [{ name = "GitHub", url = "https://github.com/alice" }]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

const FIELD_NAVIGATION: FieldPath = FieldPath::new("theme.navigation");
const FIELD_EXTERNAL_LINKS: FieldPath = FieldPath::new("theme.external_links");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    pub title: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExternalLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Header navigation entries (site-relative slugs).
    pub navigation: Vec<NavItem>,
    /// Header links to other sites.
    #[serde(rename(serialize = "externalLinks"))]
    pub external_links: Vec<ExternalLink>,
}

impl ThemeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for item in &self.navigation {
            if !item.slug.starts_with('/') {
                diag.warn(
                    FIELD_NAVIGATION,
                    format!("slug '{}' of '{}' does not start with '/'", item.slug, item.title),
                );
            }
        }

        for link in &self.external_links {
            if url::Url::parse(&link.url).is_err() {
                diag.error_with_hint(
                    FIELD_EXTERNAL_LINKS,
                    format!("invalid URL '{}' for '{}'", link.url, link.name),
                    "external links need an absolute URL, e.g. https://example.com",
                );
            }
        }
    }
}
