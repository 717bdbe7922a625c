//! `quire plugins`: print the site metadata and resolved plugin list.

use super::{PluginsArgs, common};
use crate::config::SiteConfig;
use anyhow::Result;

pub fn run_plugins(args: &PluginsArgs, config: &SiteConfig) -> Result<()> {
    let json = framework_json(config, args.pretty)?;
    common::emit(&json, None, "plugins")
}

fn framework_json(config: &SiteConfig, pretty: bool) -> Result<String> {
    let document = config.framework_config();
    Ok(if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    })
}
