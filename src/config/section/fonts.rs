//! `[fonts]` web font loader configuration.
//!
//! ```toml
//! [fonts]
//! preconnect = ["https://fonts.gstatic.com"]
//! web = [
//!   { name = "EB Garamond", file = "https://fonts.googleapis.com/css2?family=EB+Garamond&display=swap" },
//! ]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

const FIELD_PRECONNECT: FieldPath = FieldPath::new("fonts.preconnect");
const FIELD_WEB: FieldPath = FieldPath::new("fonts.web");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebFont {
    /// Font family name as referenced by the theme CSS.
    pub name: String,
    /// Stylesheet URL that declares the font faces.
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    /// Listen for font load events and toggle a class on `<html>`.
    #[serde(rename(serialize = "enableListener"))]
    pub enable_listener: bool,
    /// Origins to `<link rel="preconnect">`.
    pub preconnect: Vec<String>,
    /// Polling interval in milliseconds.
    pub interval: u64,
    /// Give up waiting for fonts after this many milliseconds.
    pub timeout: u64,
    pub web: Vec<WebFont>,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            enable_listener: true,
            preconnect: Vec::new(),
            interval: 300,
            timeout: 30_000,
            web: Vec::new(),
        }
    }
}

impl FontsConfig {
    pub fn is_empty(&self) -> bool {
        self.web.is_empty()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for origin in &self.preconnect {
            if url::Url::parse(origin).is_err() {
                diag.error(FIELD_PRECONNECT, format!("invalid origin '{origin}'"));
            }
        }
        for font in &self.web {
            if url::Url::parse(&font.file).is_err() {
                diag.error_with_hint(
                    FIELD_WEB,
                    format!("invalid stylesheet URL for '{}'", font.name),
                    "use an absolute URL, e.g. https://fonts.googleapis.com/css2?family=...",
                );
            }
        }
    }
}
