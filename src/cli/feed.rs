//! `quire feed`: print the feed document, or the serialized entries as JSON.

use super::{FeedArgs, common};
use crate::{
    config::SiteConfig,
    generator::feed::{FeedHeader, entries_for, render_feed},
};
use anyhow::Result;
use std::io::{self, Write};

pub fn run_feed(args: &FeedArgs, config: &SiteConfig) -> Result<()> {
    run_feed_to(&mut io::stdout().lock(), args, config)
}

/// Write the feed to `out` (or to `--write`); logging never lands in `out`.
fn run_feed_to(out: &mut impl Write, args: &FeedArgs, config: &SiteConfig) -> Result<()> {
    let (site, query) = common::load_source(config)?;
    let entries = entries_for(config, &site, query.posts());

    let output = if args.json {
        if args.pretty {
            serde_json::to_string_pretty(&entries)?
        } else {
            serde_json::to_string(&entries)?
        }
    } else {
        render_feed(config, &FeedHeader::new(config, &site), &entries)
    };

    common::emit_to(out, &output, args.write.as_deref(), "feed")
}
