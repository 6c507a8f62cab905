//! CLI argument definitions for the retail master-data converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rpx",
    version,
    about = "Convert retail catalog and inventory exports between XML, CSV and JSON",
    long_about = "Convert retail master-data exports.\n\n\
                  catalog: enrich dcs.xml display names from dcs.csv and write new.xml.\n\
                  inventory: round-trip inventory.xml to new.xml and new.json.\n\
                  inventory-narrow: keep only item identity fields of inventory.xml in new.xml."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Enrich the department/class catalog from the reference table.
    Catalog(CatalogArgs),

    /// Convert the full inventory export to XML and JSON.
    Inventory(InventoryArgs),

    /// Write only the identity fields of each inventory record.
    InventoryNarrow(CommonArgs),
}

/// Options shared by every job.
#[derive(Args)]
pub struct CommonArgs {
    /// Directory holding the input files and receiving the outputs.
    #[arg(long = "dir", value_name = "DIR", env = "RPX_WORK_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Input document (default: dcs.xml or inventory.xml under DIR).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// XML output file (default: new.xml under DIR).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Decode, transform and encode without writing any output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Semicolon-delimited reference table (default: dcs.csv under DIR).
    #[arg(long = "reference", value_name = "PATH")]
    pub reference: Option<PathBuf>,
}

#[derive(Args)]
pub struct InventoryArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// JSON output file (default: new.json under DIR).
    #[arg(long = "json-output", value_name = "PATH", conflicts_with = "no_json")]
    pub json_output: Option<PathBuf>,

    /// Skip the JSON output.
    #[arg(long = "no-json")]
    pub no_json: bool,
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
