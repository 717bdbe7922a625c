//! `[site.manifest]` PWA web manifest configuration.
//!
//! ```toml
//! [site.manifest]
//! enable = true
//! name = "My Blog"
//! short_name = "Blog"
//! start_url = "/"
//! background_color = "#fff"
//! display = "standalone"
//! icons = [
//!   { src = "/static/icon.png", sizes = "192x192", type = "image/png" },
//! ]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const FIELD_NAME: FieldPath = FieldPath::new("site.manifest.name");
const FIELD_ICONS: FieldPath = FieldPath::new("site.manifest.icons");

/// How the browser presents the installed site.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    #[default]
    Standalone,
    MinimalUi,
    Browser,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestIcon {
    pub src: String,
    /// `WxH`, e.g. "192x192".
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Enable manifest generation.
    #[serde(skip_serializing)]
    pub enable: bool,
    /// Output path (relative to the output directory).
    #[serde(skip_serializing)]
    pub path: PathBuf,
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    pub display: DisplayMode,
    pub icons: Vec<ManifestIcon>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "manifest.webmanifest".into(),
            name: String::new(),
            short_name: String::new(),
            description: String::new(),
            start_url: "/".into(),
            background_color: "#fff".into(),
            theme_color: None,
            display: DisplayMode::Standalone,
            icons: Vec::new(),
        }
    }
}

impl ManifestConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        if self.name.is_empty() {
            diag.error(FIELD_NAME, "manifest is enabled but has no name");
        }
        if self.icons.is_empty() {
            diag.error_with_hint(
                FIELD_ICONS,
                "manifest is enabled but has no icons",
                "add at least one { src, sizes, type } entry",
            );
        }
        for icon in &self.icons {
            if !is_valid_size(&icon.sizes) {
                diag.error_with_hint(
                    FIELD_ICONS,
                    format!("invalid icon size '{}' for {}", icon.sizes, icon.src),
                    "use WxH, e.g. \"192x192\"",
                );
            }
        }
    }
}

/// Check a `WxH` size string (both sides non-zero integers).
fn is_valid_size(sizes: &str) -> bool {
    sizes
        .split_once('x')
        .and_then(|(w, h)| Some((w.parse::<u32>().ok()?, h.parse::<u32>().ok()?)))
        .is_some_and(|(w, h)| w > 0 && h > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let manifest = &config.site.manifest;
        assert!(!manifest.enable);
        assert_eq!(manifest.path, PathBuf::from("manifest.webmanifest"));
        assert_eq!(manifest.start_url, "/");
        assert_eq!(manifest.display, DisplayMode::Standalone);
    }

    #[test]
    fn test_parse_icons() {
        let config = test_parse_config(
            r##"[site.manifest]
enable = true
name = "Blog"
display = "minimal-ui"
icons = [
  { src = "/static/icon.png", sizes = "192x192", type = "image/png" },
  { src = "/static/icon.png", sizes = "512x512", type = "image/png" },
]"##,
        );
        let manifest = &config.site.manifest;
        assert_eq!(manifest.display, DisplayMode::MinimalUi);
        assert_eq!(manifest.icons.len(), 2);
        assert_eq!(manifest.icons[1].sizes, "512x512");
        assert_eq!(manifest.icons[0].mime_type, "image/png");

        let mut diag = ConfigDiagnostics::new();
        manifest.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_validate_enabled_requires_name_and_icons() {
        let manifest = ManifestConfig {
            enable: true,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        manifest.validate(&mut diag);
        assert_eq!(diag.errors().len(), 2);
    }

    #[test]
    fn test_validate_disabled_skips_checks() {
        let mut diag = ConfigDiagnostics::new();
        ManifestConfig::default().validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_icon_sizes() {
        assert!(is_valid_size("192x192"));
        assert!(!is_valid_size("192"));
        assert!(!is_valid_size("0x192"));
        assert!(!is_valid_size("axb"));
    }
}
