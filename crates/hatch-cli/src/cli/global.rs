//! Flags shared by every `hatch` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, builder::FalseyValueParser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// More log output: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output without ANSI colors
    ///
    /// Any `NO_COLOR` value other than a false literal (`0`, `false`, `no`,
    /// `off`) turns colors off, following <https://no-color.org>.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        hide_env_values = true
    )]
    pub no_color: bool,

    /// Read FILE instead of the per-user config.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Format of command results on stdout
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// Rendering of command results. `Auto` settles on human or plain once the
/// config file and stdout are known.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Colored text for a terminal
    Human,
    /// Text without escape codes
    Plain,
    /// One JSON document per command
    Json,
}
