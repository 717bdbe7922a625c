//! Configuration section definitions.
//!
//! Each module corresponds to a section in `quire.toml`:
//!
//! | Module     | TOML Section   | Purpose                               |
//! |------------|----------------|---------------------------------------|
//! | `site`     | `[site]`       | Site info, feed, sitemap, manifest    |
//! | `theme`    | `[theme]`      | Navigation and external links         |
//! | `fonts`    | `[fonts]`      | Web font loader                       |
//! | `markdown` | `[markdown]`   | Markdown transformer (math)           |
//! | `hosting`  | `[hosting]`    | Hosting provider plugin toggle        |
//! | `analyser` | `[analyser]`   | Bundle analysis report                |
//! | `build`    | `[build]`      | Output dir, post query file, minify   |

mod analyser;
pub mod build;
mod fonts;
mod hosting;
mod markdown;
pub mod site;
mod theme;

pub use analyser::{ANALYSE_BUNDLE_ENV, AnalyserConfig, env_flag};
pub use build::BuildSectionConfig;
pub use fonts::FontsConfig;
pub use hosting::HostingConfig;
pub use markdown::MarkdownConfig;
pub use site::{
    FeedFormat, ManifestConfig, SiteInfoConfig, SiteMetadataExport, SiteSectionConfig,
    SitemapConfig,
};
pub use theme::ThemeConfig;
