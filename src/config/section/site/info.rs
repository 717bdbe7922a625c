//! `[site.info]` configuration.
//!
//! Basic site information: title, author, description, url. The feed
//! serializer reads title, description and url from here.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

const FIELD_URL: FieldPath = FieldPath::new("site.info.url");
const FIELD_FEED_ENABLE: FieldPath = FieldPath::new("site.feed.enable");

/// Site metadata for feeds, sitemap and the theme's SEO component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Alternative title (used by the theme for the home page `<title>`).
    pub title_alt: String,

    /// Headline shown next to the title.
    pub headline: String,

    /// Site URL without trailing slash (e.g., "https://example.com").
    pub url: Option<String>,

    /// Site description.
    pub description: String,

    /// Language code (e.g., "en").
    pub language: String,

    /// Default social image, relative to the site root (e.g., "/banner.jpg").
    pub image: Option<String>,

    /// Author handle or name.
    pub author: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_alt: String::new(),
            headline: String::new(),
            url: None,
            description: String::new(),
            language: "en".into(),
            image: None,
            author: String::new(),
        }
    }
}

/// `siteMetadata` as the theme reads it, keyed the framework's way.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadataExport<'a> {
    pub site_title: &'a str,
    pub site_title_alt: &'a str,
    pub site_headline: &'a str,
    pub site_url: Option<&'a str>,
    pub site_description: &'a str,
    pub site_language: &'a str,
    pub site_image: Option<&'a str>,
    pub author: &'a str,
}

impl SiteInfoConfig {
    pub fn metadata(&self) -> SiteMetadataExport<'_> {
        SiteMetadataExport {
            site_title: &self.title,
            site_title_alt: &self.title_alt,
            site_headline: &self.headline,
            site_url: self.url.as_deref(),
            site_description: &self.description,
            site_language: &self.language,
            site_image: self.image.as_deref(),
            author: &self.author,
        }
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `feed_enabled` and `url` is unset, warn (the query's `siteUrl`
    ///   is used instead)
    /// - `url` must be a valid http(s) URL with a host
    /// - a trailing `/` on `url` is reported as a warning, since entry URLs
    ///   are built by plain concatenation with slugs
    pub fn validate(&self, feed_enabled: bool, diag: &mut ConfigDiagnostics) {
        if feed_enabled && self.url.is_none() {
            diag.warn(
                FIELD_URL,
                format!(
                    "{FIELD_FEED_ENABLE} is enabled but {FIELD_URL} is not configured, \
                     falling back to the query's siteUrl"
                ),
            );
        }

        let Some(url_str) = &self.url else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        FIELD_URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        FIELD_URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    FIELD_URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }

        if url_str.ends_with('/') {
            diag.warn(
                FIELD_URL,
                "ends with '/', post URLs will contain a double slash",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(url: Option<&str>, feed: bool) -> ConfigDiagnostics {
        let info = SiteInfoConfig {
            url: url.map(str::to_string),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(feed, &mut diag);
        diag
    }

    #[test]
    fn test_parse_info() {
        let config = test_parse_config(
            "url = \"https://www.example.com\"\nauthor = \"@someone\"\nimage = \"/banner.jpg\"",
        );
        assert_eq!(config.site.info.title, "Test");
        assert_eq!(config.site.info.url.as_deref(), Some("https://www.example.com"));
        assert_eq!(config.site.info.author, "@someone");
        assert_eq!(config.site.info.image.as_deref(), Some("/banner.jpg"));
        assert_eq!(config.site.info.language, "en");
    }

    #[test]
    fn test_metadata_keys() {
        let config = test_parse_config(
            "title_alt = \"Test Blog\"\nheadline = \"Notes\"\nurl = \"https://example.com\"\nimage = \"/banner.jpg\"\nauthor = \"@someone\"",
        );
        let json = serde_json::to_value(config.site.info.metadata()).unwrap();

        assert_eq!(json["siteTitle"], "Test");
        assert_eq!(json["siteTitleAlt"], "Test Blog");
        assert_eq!(json["siteHeadline"], "Notes");
        assert_eq!(json["siteUrl"], "https://example.com");
        assert_eq!(json["siteDescription"], "Test");
        assert_eq!(json["siteLanguage"], "en");
        assert_eq!(json["siteImage"], "/banner.jpg");
        assert_eq!(json["author"], "@someone");
        assert_eq!(json.as_object().unwrap().len(), 8);
    }

    #[test]
    fn test_missing_url_warns_when_feed_enabled() {
        let diag = validate(None, true);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);

        let diag = validate(None, false);
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_valid_url() {
        let diag = validate(Some("https://example.com"), true);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_invalid_scheme() {
        let diag = validate(Some("ftp://example.com"), true);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_unparseable_url() {
        let diag = validate(Some("example.com"), true);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_trailing_slash_warns() {
        let diag = validate(Some("https://example.com/"), true);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
