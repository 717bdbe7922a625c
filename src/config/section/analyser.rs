//! `[analyser]` bundle analysis report options.
//!
//! The section only configures the report. Whether the analyser runs is
//! decided per invocation: the `ANALYSE_BUNDLE` environment variable (any
//! non-empty value, also read from `.env` in the project root) or
//! `--analyse-bundle`.

use serde::{Deserialize, Serialize};
use std::{ffi::OsStr, path::Path};

/// Environment variable that switches bundle analysis on.
pub const ANALYSE_BUNDLE_ENV: &str = "ANALYSE_BUNDLE";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalyserMode {
    /// Write a standalone HTML report.
    #[default]
    Static,
    /// Serve the report from a local HTTP server.
    Server,
    /// Write raw stats as JSON.
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyserConfig {
    /// Resolved at load time from env/CLI, never read from the file.
    #[serde(skip)]
    pub enable: bool,
    #[serde(rename(serialize = "analyzerMode"))]
    pub mode: AnalyserMode,
    #[serde(rename(serialize = "reportFilename"))]
    pub report: String,
    /// Open the report in a browser once written.
    #[serde(rename(serialize = "openAnalyzer"))]
    pub open: bool,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            enable: false,
            mode: AnalyserMode::Static,
            report: "_bundle.html".into(),
            open: false,
        }
    }
}

/// An env flag counts as set when present and non-empty.
pub fn env_flag_set(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Resolve an env flag from the process environment, falling back to the
/// `.env` file in `root`. A variable already set in the process wins, even
/// when empty.
pub fn env_flag(root: &Path, name: &str) -> bool {
    match std::env::var_os(name) {
        Some(value) => env_flag_set(Some(&value)),
        None => dotenv_value(&root.join(".env"), name)
            .is_some_and(|value| env_flag_set(Some(OsStr::new(&value)))),
    }
}

/// Look up `name` in a dotenv file; a missing or unreadable file yields `None`.
fn dotenv_value(path: &Path, name: &str) -> Option<String> {
    dotenvy::from_path_iter(path)
        .ok()?
        .filter_map(Result::ok)
        .find_map(|(key, value)| (key == name).then_some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(!config.analyser.enable);
        assert_eq!(config.analyser.mode, AnalyserMode::Static);
        assert_eq!(config.analyser.report, "_bundle.html");
        assert!(!config.analyser.open);
    }

    #[test]
    fn test_parse_mode() {
        let config = test_parse_config("[analyser]\nmode = \"json\"\nreport = \"stats.json\"");
        assert_eq!(config.analyser.mode, AnalyserMode::Json);
        assert_eq!(config.analyser.report, "stats.json");
    }

    #[test]
    fn test_dotenv_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "# comment\nOTHER=x\nANALYSE_BUNDLE=1\n").unwrap();

        assert_eq!(dotenv_value(&path, "ANALYSE_BUNDLE").as_deref(), Some("1"));
        assert_eq!(dotenv_value(&path, "MISSING"), None);
        assert_eq!(dotenv_value(&dir.path().join("nope.env"), "ANALYSE_BUNDLE"), None);
    }

    #[test]
    fn test_env_flag_from_dotenv() {
        // Names nothing in the process environment sets
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "QUIRE_TEST_FLAG_ON=yes\nQUIRE_TEST_FLAG_EMPTY=\n",
        )
        .unwrap();

        assert!(env_flag(dir.path(), "QUIRE_TEST_FLAG_ON"));
        assert!(!env_flag(dir.path(), "QUIRE_TEST_FLAG_EMPTY"));
        assert!(!env_flag(dir.path(), "QUIRE_TEST_FLAG_UNSET"));
    }

    #[test]
    fn test_env_flag_without_dotenv() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!env_flag(dir.path(), "QUIRE_TEST_FLAG_ON"));
    }

    #[test]
    fn test_env_flag_set() {
        assert!(!env_flag_set(None));
        assert!(!env_flag_set(Some(OsStr::new(""))));
        assert!(env_flag_set(Some(OsStr::new("1"))));
        // Any non-empty value enables it, including "false"
        assert!(env_flag_set(Some(OsStr::new("false"))));
    }
}
