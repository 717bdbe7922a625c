//! `[hosting]` section: hosting provider integration.
//!
//! The provider plugin takes no options; the section only switches it off.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostingConfig {
    /// Add the hosting plugin after the sitemap.
    pub enable: bool,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}
