//! Prepare pipeline with explicit stages.
//!
//! Stages run strictly in order, each consuming the previous stage's
//! output:
//! 1. **Check**: verify every input path exists
//! 2. **Load**: parse config and reference documents
//! 3. **Ingest**: read the dataset into memory
//! 4. **Validate**: compare the header row against the configured order
//! 5. **Aggregate**: normalize, extract, group, and build notices
//! 6. **Output**: write the notices document (skipped on dry runs)
//!
//! Any stage failure aborts the run before the output stage, so no
//! partial document is ever written.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use imms_ingest::{
    bind_client_rows, load_config, load_disease_map, load_vaccine_reference,
    read_csv_table_with_delimiter, require_file, validate_columns,
};
use imms_report::write_notices;
use imms_transform::build_notices;

use crate::types::PrepareResult;

/// Knobs for a prepare run.
#[derive(Debug, Clone)]
pub struct PrepareOptions {
    /// Output directory; defaults to `<dataset dir>/output`.
    pub output_dir: Option<PathBuf>,
    /// Dataset field delimiter.
    pub delimiter: u8,
    /// Validate and aggregate without writing.
    pub dry_run: bool,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            delimiter: imms_ingest::DEFAULT_DELIMITER,
            dry_run: false,
        }
    }
}

/// Run the full prepare pipeline.
pub fn run_prepare_pipeline(
    dataset: &Path,
    config_path: &Path,
    disease_map_path: &Path,
    vaccine_reference_path: &Path,
    options: &PrepareOptions,
) -> Result<PrepareResult> {
    let start = Instant::now();

    // =========================================================================
    // Stage 1: Check input paths before touching any of them
    // =========================================================================
    for path in [dataset, config_path, disease_map_path, vaccine_reference_path] {
        require_file(path)?;
    }

    // =========================================================================
    // Stage 2: Load config and reference documents
    // =========================================================================
    let load_span = info_span!("load");
    let (config, synonyms, reference) = load_span.in_scope(|| -> Result<_> {
        let config = load_config(config_path).context("load config")?;
        let synonyms = load_disease_map(disease_map_path).context("load disease map")?;
        let reference =
            load_vaccine_reference(vaccine_reference_path).context("load vaccine reference")?;
        info!(
            delivery_date = %config.delivery_date,
            data_date = %config.data_date,
            "run configuration"
        );
        Ok((config, synonyms, reference))
    })?;

    // =========================================================================
    // Stage 3: Ingest the dataset
    // =========================================================================
    let ingest_span = info_span!("ingest", dataset = %dataset.display());
    let table = ingest_span.in_scope(|| {
        read_csv_table_with_delimiter(dataset, options.delimiter).context("read dataset")
    })?;
    info!(rows = table.rows.len(), columns = table.headers.len(), "ingested dataset");

    // =========================================================================
    // Stage 4: Validate the schema, then bind rows
    // =========================================================================
    validate_columns(&table.headers, &config.expected_columns)?;
    let rows = bind_client_rows(&table)?;

    // =========================================================================
    // Stage 5: Aggregate notices
    // =========================================================================
    let aggregate_span = info_span!("aggregate");
    let notices =
        aggregate_span.in_scope(|| build_notices(&rows, &config, &synonyms, &reference))?;

    // =========================================================================
    // Stage 6: Output
    // =========================================================================
    let output_path = if options.dry_run {
        info!("dry run; skipping output");
        None
    } else {
        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            dataset
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("output")
        });
        Some(write_notices(&output_dir, &notices)?)
    };

    info!(elapsed_ms = start.elapsed().as_millis() as u64, "prepare finished");
    Ok(PrepareResult {
        delivery_date: config.delivery_date,
        output_path,
        rows: rows.len(),
        notices,
    })
}
