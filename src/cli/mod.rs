//! Command-line interface module.

mod args;
pub mod build;
pub mod common;
pub mod feed;
pub mod plugins;

pub use args::{BuildArgs, Cli, Commands, FeedArgs, PluginsArgs, SourceArgs};
