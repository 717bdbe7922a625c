//! Site configuration management for `quire.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site/      # [site.info], [site.feed], [site.sitemap], [site.manifest]
//! │   ├── theme      # [theme]
//! │   ├── fonts      # [fonts]
//! │   ├── markdown   # [markdown]
//! │   ├── hosting    # [hosting]
//! │   ├── analyser   # [analyser]
//! │   └── build      # [build]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── plugin         # Resolved plugin list
//! └── mod.rs         # SiteConfig (this file)
//! ```

mod plugin;
pub mod section;
pub mod types;
mod util;

pub use section::{FeedFormat, ManifestConfig, SiteInfoConfig};
pub use types::{ConfigDiagnostics, FieldPath};

use section::{
    ANALYSE_BUNDLE_ENV, AnalyserConfig, BuildSectionConfig, FontsConfig, HostingConfig,
    MarkdownConfig, SiteMetadataExport, SiteSectionConfig, SitemapConfig, ThemeConfig, env_flag,
};
use types::ConfigError;

use crate::{
    cli::{BuildArgs, Cli, Commands, SourceArgs},
    log,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{find_config_file, normalize_path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing quire.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site configuration (info, feed, sitemap, manifest)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Theme options (navigation, external links)
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Web font loader options
    #[serde(default)]
    pub fonts: FontsConfig,

    /// Markdown transformer options
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Hosting provider plugin
    #[serde(default)]
    pub hosting: HostingConfig,

    /// Bundle analyser report options
    #[serde(default)]
    pub analyser: AnalyserConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file; the project root is the
    /// config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found",
                cli.config.display()
            )));
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = normalize_path(&config_path);
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} are ignored: {}", display_path, fields.join(", "));
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.apply_command_options(cli);
        self.analyser.enable |= env_flag(&root, ANALYSE_BUNDLE_ENV);
        self.normalize_paths(&root);
    }

    /// Output directory for generated files.
    pub fn output_dir(&self) -> &Path {
        &self.build.output
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Feed { args } => self.apply_source_args(&args.source),
            Commands::Plugins { args } => {
                self.analyser.enable |= args.analyse_bundle;
            }
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        self.apply_source_args(&args.source);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.site.feed.enable, args.rss.as_ref());
        Self::update_option(&mut self.site.sitemap.enable, args.sitemap.as_ref());
        Self::update_option(&mut self.site.manifest.enable, args.manifest.as_ref());
        self.analyser.enable |= args.analyse_bundle;
    }

    /// Apply post source / site url overrides shared by build and feed.
    fn apply_source_args(&mut self, args: &SourceArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.posts, args.posts.as_ref());
        if let Some(ref url) = args.site_url {
            self.site.info.url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve build paths relative to the project root.
    ///
    /// `site.feed.path`, `site.sitemap.path` and `site.manifest.path` stay
    /// relative; they are joined with the output dir at write time.
    fn normalize_paths(&mut self, root: &Path) {
        self.build.output = normalize_path(&root.join(&self.build.output));
        self.build.posts = normalize_path(&root.join(&self.build.posts));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once; warnings are
    /// printed and never fail.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.fonts.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site.info]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
