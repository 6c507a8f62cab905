//! Conversion pipeline with explicit stages.
//!
//! Every job runs the same stages in order:
//! 1. **Reference**: load `dcs.csv` (catalog job only)
//! 2. **Ingest**: read and decode the input document
//! 3. **Transform**: enrich catalog entries (catalog job only)
//! 4. **Render**: encode every requested output in memory
//! 5. **Write**: persist the rendered outputs (skipped on dry run)
//!
//! Any stage failure ends the job before the write stage, so a failed job
//! never leaves output files behind.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use rpx_ingest::{load_document, load_reference_table};
use rpx_model::{
    CatalogDocument, DEFAULT_JSON_OUTPUT, DEFAULT_REFERENCE_FILE, DEFAULT_XML_OUTPUT,
    InventoryDocument, JobKind, NarrowInventoryDocument, OutputFormat, RecordCount,
    ReferenceTable,
};
use rpx_output::{EncodedOutput, OutputTarget, render_outputs, target_for, write_outputs};
use rpx_transform::{EnrichmentStats, enrich_catalog};

/// File locations used by one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPaths {
    /// Reference table, read by the catalog job.
    pub reference: Option<PathBuf>,
    pub input: PathBuf,
    pub xml_output: PathBuf,
    pub json_output: Option<PathBuf>,
}

impl JobPaths {
    /// Default file names for `kind`, resolved against `dir`.
    pub fn defaults_for(kind: JobKind, dir: &Path) -> Self {
        Self {
            reference: kind
                .uses_reference()
                .then(|| dir.join(DEFAULT_REFERENCE_FILE)),
            input: dir.join(kind.default_input()),
            xml_output: dir.join(DEFAULT_XML_OUTPUT),
            json_output: kind
                .default_formats()
                .contains(&OutputFormat::Json)
                .then(|| dir.join(DEFAULT_JSON_OUTPUT)),
        }
    }
}

/// Complete description of one conversion run.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub kind: JobKind,
    pub paths: JobPaths,
    pub formats: Vec<OutputFormat>,
    /// Run every stage except the write stage.
    pub dry_run: bool,
}

impl JobConfig {
    /// The preset for `kind` with default file names under `dir`.
    pub fn preset(kind: JobKind, dir: &Path) -> Self {
        Self {
            kind,
            paths: JobPaths::defaults_for(kind, dir),
            formats: kind.default_formats().to_vec(),
            dry_run: false,
        }
    }

    fn targets(&self) -> Result<Vec<OutputTarget>> {
        self.formats
            .iter()
            .map(|format| {
                target_for(
                    *format,
                    Some(self.paths.xml_output.as_path()),
                    self.paths.json_output.as_deref(),
                )
                .map_err(Into::into)
            })
            .collect()
    }
}

/// One rendered output and whether it reached disk.
#[derive(Debug, Clone)]
pub struct OutputSummary {
    pub format: OutputFormat,
    pub path: PathBuf,
    pub bytes: usize,
    pub written: bool,
}

/// Outcome of a successful job.
#[derive(Debug, Clone)]
pub struct JobResult {
    pub kind: JobKind,
    pub input: PathBuf,
    pub records: usize,
    /// Rows in the reference table (catalog job only).
    pub reference_rows: Option<usize>,
    pub enrichment: Option<EnrichmentStats>,
    pub outputs: Vec<OutputSummary>,
    pub dry_run: bool,
}

// ============================================================================
// Stages
// ============================================================================

/// Stage 1: load the reference table.
pub fn load_reference(path: &Path) -> Result<ReferenceTable> {
    let span = info_span!("reference", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table = load_reference_table(path)
        .with_context(|| format!("load reference table {}", path.display()))?;
    info!(
        rows = table.len(),
        overwritten = table.overwritten(),
        duration_ms = start.elapsed().as_millis(),
        "reference table loaded"
    );
    Ok(table)
}

/// Stage 2: read and decode the input document.
pub fn ingest<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned + RecordCount,
{
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let document: T =
        load_document(path).with_context(|| format!("decode document {}", path.display()))?;
    info!(
        records = document.record_count(),
        duration_ms = start.elapsed().as_millis(),
        "document decoded"
    );
    Ok(document)
}

/// Stage 3: enrich catalog entries from the reference table.
pub fn transform(document: &mut CatalogDocument, table: &ReferenceTable) -> EnrichmentStats {
    let span = info_span!("transform");
    let _guard = span.enter();
    let stats = enrich_catalog(document, table);
    info!(
        entries = stats.entries,
        matched = stats.matched,
        unmatched = stats.unmatched,
        "catalog enriched"
    );
    stats
}

/// Stages 4 and 5: render every target, then write them unless `dry_run`.
pub fn output<T: Serialize>(
    document: &T,
    targets: &[OutputTarget],
    dry_run: bool,
) -> Result<Vec<OutputSummary>> {
    let span = info_span!("output", dry_run);
    let _guard = span.enter();
    let rendered: Vec<EncodedOutput> = render_outputs(document, targets)?;

    if !dry_run {
        write_outputs(&rendered)?;
    }
    let summaries = rendered
        .iter()
        .map(|encoded| {
            info!(
                format = encoded.format.label(),
                path = %encoded.path.display(),
                bytes = encoded.bytes.len(),
                written = !dry_run,
                "output ready"
            );
            OutputSummary {
                format: encoded.format,
                path: encoded.path.clone(),
                bytes: encoded.bytes.len(),
                written: !dry_run,
            }
        })
        .collect();
    Ok(summaries)
}

// ============================================================================
// Job
// ============================================================================

/// Run one conversion job end to end.
pub fn run_job(config: &JobConfig) -> Result<JobResult> {
    let span = info_span!("job", kind = config.kind.name());
    let _guard = span.enter();
    let targets = config.targets()?;
    let input = config.paths.input.as_path();

    let mut result = JobResult {
        kind: config.kind,
        input: input.to_path_buf(),
        records: 0,
        reference_rows: None,
        enrichment: None,
        outputs: Vec::new(),
        dry_run: config.dry_run,
    };

    match config.kind {
        JobKind::Catalog => {
            let reference_path = config
                .paths
                .reference
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REFERENCE_FILE));
            let table = load_reference(&reference_path)?;
            let mut document: CatalogDocument = ingest(input)?;
            let stats = transform(&mut document, &table);
            result.reference_rows = Some(table.len());
            result.enrichment = Some(stats);
            result.records = document.record_count();
            result.outputs = output(&document, &targets, config.dry_run)?;
        }
        JobKind::Inventory => {
            let document: InventoryDocument = ingest(input)?;
            result.records = document.record_count();
            result.outputs = output(&document, &targets, config.dry_run)?;
        }
        JobKind::InventoryNarrow => {
            let document: NarrowInventoryDocument = ingest(input)?;
            result.records = document.record_count();
            result.outputs = output(&document, &targets, config.dry_run)?;
        }
    }

    Ok(result)
}
