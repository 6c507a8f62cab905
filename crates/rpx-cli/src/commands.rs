use std::path::{Path, PathBuf};

use anyhow::Result;

use rpx_cli::pipeline::{JobConfig, JobResult, run_job};
use rpx_model::{JobKind, OutputFormat};

use crate::cli::{CatalogArgs, Command, CommonArgs, InventoryArgs};

pub fn run_command(command: &Command) -> Result<JobResult> {
    run_job(&job_config(command))
}

/// Translate parsed arguments into a job preset with overrides applied.
pub fn job_config(command: &Command) -> JobConfig {
    match command {
        Command::Catalog(args) => catalog_config(args),
        Command::Inventory(args) => inventory_config(args),
        Command::InventoryNarrow(args) => common_config(JobKind::InventoryNarrow, args),
    }
}

fn catalog_config(args: &CatalogArgs) -> JobConfig {
    let mut config = common_config(JobKind::Catalog, &args.common);
    if let Some(reference) = &args.reference {
        config.paths.reference = Some(resolve(&args.common.dir, reference));
    }
    config
}

fn inventory_config(args: &InventoryArgs) -> JobConfig {
    let mut config = common_config(JobKind::Inventory, &args.common);
    if args.no_json {
        config.formats.retain(|format| *format != OutputFormat::Json);
        config.paths.json_output = None;
    } else if let Some(json_output) = &args.json_output {
        config.paths.json_output = Some(resolve(&args.common.dir, json_output));
    }
    config
}

fn common_config(kind: JobKind, args: &CommonArgs) -> JobConfig {
    let mut config = JobConfig::preset(kind, &args.dir);
    if let Some(input) = &args.input {
        config.paths.input = resolve(&args.dir, input);
    }
    if let Some(output) = &args.output {
        config.paths.xml_output = resolve(&args.dir, output);
    }
    config.dry_run = args.dry_run;
    config
}

/// Relative overrides are taken relative to the working directory option.
fn resolve(dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}
