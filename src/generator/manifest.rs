//! Web app manifest generation.
//!
//! Serializes `[site.manifest]` into `manifest.webmanifest`, adding the
//! site language.

use crate::{
    config::{ManifestConfig, SiteConfig},
    log,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Serialize)]
struct WebManifest<'a> {
    #[serde(flatten)]
    manifest: &'a ManifestConfig,
    lang: &'a str,
}

impl<'a> WebManifest<'a> {
    fn new(config: &'a SiteConfig) -> Self {
        Self {
            manifest: &config.site.manifest,
            lang: &config.site.info.language,
        }
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the manifest if enabled.
///
/// Returns the written path.
pub fn build_manifest(config: &SiteConfig) -> Result<Option<PathBuf>> {
    if !config.site.manifest.enable {
        return Ok(None);
    }

    let json = WebManifest::new(config).to_json()?;
    let path = config.output_dir().join(&config.site.manifest.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, json)
        .with_context(|| format!("Failed to write manifest to {}", path.display()))?;

    log!("manifest"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(Some(path))
}
