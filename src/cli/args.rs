//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// quire: site config and feed generator for a static blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: quire.toml)
    #[arg(short = 'C', long, default_value = "quire.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write feed, sitemap and manifest into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the feed (XML, or entries as JSON)
    #[command(visible_alias = "f")]
    Feed {
        #[command(flatten)]
        args: FeedArgs,
    },

    /// Print site metadata and the resolved plugin list as JSON
    #[command(visible_alias = "p")]
    Plugins {
        #[command(flatten)]
        args: PluginsArgs,
    },
}

/// Post source arguments shared by Build and Feed commands
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Query result JSON with site metadata and posts
    #[arg(short = 'P', long, value_hint = clap::ValueHint::FilePath)]
    pub posts: Option<PathBuf>,

    /// Override site URL for deployment.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    /// This avoids modifying quire.toml, keeping the source file clean.
    ///
    /// Example:
    ///   quire build --site-url "https://staging.example.com"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Minify the XML output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable RSS feed generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub rss: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Enable web manifest generation
    #[arg(short = 'M', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub manifest: Option<bool>,

    /// Enable the bundle analyser plugin (same as ANALYSE_BUNDLE=1)
    #[arg(short, long)]
    pub analyse_bundle: bool,
}

/// Feed command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct FeedArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output serialized entries as JSON instead of feed XML
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub write: Option<PathBuf>,
}

/// Plugins command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct PluginsArgs {
    /// Include the bundle analyser plugin (same as ANALYSE_BUNDLE=1)
    #[arg(short, long)]
    pub analyse_bundle: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("quire").chain(args.iter().copied()))
    }

    #[test]
    fn test_bool_flag_forms() {
        let cli = parse(&["build", "--rss", "--sitemap=false", "-m", "false"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build_args.rss, Some(true));
        assert_eq!(build_args.sitemap, Some(false));
        assert_eq!(build_args.minify, Some(false));
        assert_eq!(build_args.manifest, None);
    }

    #[test]
    fn test_feed_args() {
        let cli = parse(&["-C", "site/quire.toml", "feed", "--json", "-p", "-w", "out.json"]);
        assert_eq!(cli.config, PathBuf::from("site/quire.toml"));

        let Commands::Feed { args } = cli.command else {
            panic!("expected feed");
        };
        assert!(args.json && args.pretty);
        assert_eq!(args.write, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_default_config_name() {
        let cli = parse(&["plugins"]);
        assert_eq!(cli.config, PathBuf::from("quire.toml"));
        assert!(matches!(cli.command, Commands::Plugins { .. }));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
