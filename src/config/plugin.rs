//! Resolved plugin list handed to the site framework.
//!
//! Plugins are appended in a fixed order, each only when its feature is
//! enabled, so the list never holds placeholder entries.

use super::{
    AnalyserConfig, FeedFormat, FontsConfig, ManifestConfig, MarkdownConfig, SiteConfig,
    SiteMetadataExport, SitemapConfig, ThemeConfig,
};
use serde::Serialize;
use std::path::Path;

/// One entry of the plugin list, serialized as `{ "resolve", "options" }`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "resolve", content = "options", rename_all = "kebab-case")]
pub enum Plugin<'a> {
    Theme(&'a ThemeConfig),
    FontLoader(&'a FontsConfig),
    Manifest(&'a ManifestConfig),
    Feed(FeedOptions<'a>),
    Markdown(&'a MarkdownConfig),
    Sitemap(&'a SitemapConfig),
    Hosting,
    BundleAnalyser(&'a AnalyserConfig),
}

/// The document handed to the site framework: metadata plus plugins.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkConfig<'a> {
    pub site_metadata: SiteMetadataExport<'a>,
    pub plugins: Vec<Plugin<'a>>,
}

/// Feed plugin options with the feed title already resolved.
#[derive(Debug, Clone, Serialize)]
pub struct FeedOptions<'a> {
    pub output: &'a Path,
    pub title: &'a str,
    pub format: FeedFormat,
}

impl Plugin<'_> {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Theme(_) => "theme",
            Self::FontLoader(_) => "font-loader",
            Self::Manifest(_) => "manifest",
            Self::Feed(_) => "feed",
            Self::Markdown(_) => "markdown",
            Self::Sitemap(_) => "sitemap",
            Self::Hosting => "hosting",
            Self::BundleAnalyser(_) => "bundle-analyser",
        }
    }
}

impl SiteConfig {
    /// Resolve the enabled plugins in load order.
    pub fn plugins(&self) -> Vec<Plugin<'_>> {
        let mut plugins = vec![Plugin::Theme(&self.theme)];

        if !self.fonts.is_empty() {
            plugins.push(Plugin::FontLoader(&self.fonts));
        }
        if self.site.manifest.enable {
            plugins.push(Plugin::Manifest(&self.site.manifest));
        }
        if self.site.feed.enable {
            plugins.push(Plugin::Feed(FeedOptions {
                output: &self.site.feed.path,
                title: self.site.feed.title_or(&self.site.info.title),
                format: self.site.feed.format,
            }));
        }

        plugins.push(Plugin::Markdown(&self.markdown));

        if self.site.sitemap.enable {
            plugins.push(Plugin::Sitemap(&self.site.sitemap));
        }
        if self.hosting.enable {
            plugins.push(Plugin::Hosting);
        }
        if self.analyser.enable {
            plugins.push(Plugin::BundleAnalyser(&self.analyser));
        }

        plugins
    }

    pub fn framework_config(&self) -> FrameworkConfig<'_> {
        FrameworkConfig {
            site_metadata: self.site.info.metadata(),
            plugins: self.plugins(),
        }
    }
}
