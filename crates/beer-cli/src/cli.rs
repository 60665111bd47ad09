//! CLI argument definitions for the craft beer explorer.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use beer_model::SortDirection;

#[derive(Parser)]
#[command(
    name = "craft-beers",
    version,
    about = "Craft Beers - explore beers by style, origin, and strength",
    long_about = "Explore a craft beer dataset.\n\n\
                  Drill down through Ale -> Type -> Style, see where the selected\n\
                  beers come from, and page through a sortable detail table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Dashboard configuration file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Beer table CSV (overrides the configuration file).
    #[arg(long = "beers", value_name = "PATH", global = true)]
    pub beers: Option<PathBuf>,

    /// Country table CSV (overrides the configuration file).
    #[arg(long = "countries", value_name = "PATH", global = true)]
    pub countries: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show an overview of the loaded dataset.
    Summary,

    /// Resolve one interaction and print the map and the table page.
    View(ViewArgs),

    /// Print the Ale -> Type -> Style drill-down tree.
    Hierarchy(HierarchyArgs),

    /// Read interaction events (JSON lines) from stdin and write one JSON
    /// view per event to stdout.
    Session,
}

#[derive(Args)]
pub struct ViewArgs {
    /// Hierarchy node to drill into, e.g. "Ale/IPA/American IPA".
    #[arg(long = "select", value_name = "PATH")]
    pub select: Option<String>,

    /// Zero-based page index.
    #[arg(long = "page", default_value_t = 0)]
    pub page: usize,

    /// Rows per page (default from configuration).
    #[arg(long = "page-size", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Column to sort the table by.
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Sort in descending order.
    #[arg(long = "descending", requires = "sort", conflicts_with = "direction")]
    pub descending: bool,

    /// Sort direction (asc, desc, ascending, descending).
    #[arg(
        long = "direction",
        value_name = "DIR",
        requires = "sort",
        value_parser = SortDirection::from_str
    )]
    pub direction: Option<SortDirection>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ViewFormatArg,
}

#[derive(Args)]
pub struct HierarchyArgs {
    /// Deepest level to print (1 = Ale, 2 = Type, 3 = Style).
    #[arg(long = "max-depth", default_value_t = 3)]
    pub max_depth: usize,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: HierarchyFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ViewFormatArg {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum HierarchyFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_args(args: &[&str]) -> Result<ViewArgs, clap::Error> {
        let argv = ["craft-beers", "view"].iter().chain(args).copied();
        match Cli::try_parse_from(argv)?.command {
            Command::View(view) => Ok(view),
            _ => unreachable!("parsed a view command"),
        }
    }

    #[test]
    fn direction_accepts_short_and_long_names() {
        let view = view_args(&["--sort", "Name", "--direction", "desc"]).unwrap();
        assert_eq!(view.direction, Some(SortDirection::Desc));
        let view = view_args(&["--sort", "Name", "--direction", "Ascending"]).unwrap();
        assert_eq!(view.direction, Some(SortDirection::Asc));
    }

    #[test]
    fn direction_rejects_unknown_values_and_conflicts() {
        assert!(view_args(&["--sort", "Name", "--direction", "sideways"]).is_err());
        assert!(view_args(&["--direction", "asc"]).is_err());
        assert!(view_args(&["--sort", "Name", "--descending", "--direction", "asc"]).is_err());
    }
}
