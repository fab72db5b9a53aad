//! Subcommand entry points.

use anyhow::{Context, Result, bail};

use imms_ingest::{read_csv_table_with_delimiter, require_file, scan_dataset};
use imms_report::{convert_reference_matrix, split_by_column};

use crate::cli::{ConvertReferenceArgs, PrepareArgs, ScanArgs, SplitArgs};
use crate::pipeline::{PrepareOptions, run_prepare_pipeline};
use crate::types::PrepareResult;

fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(u32::from(delimiter))
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("delimiter {delimiter:?} is not an ASCII character"))
}

pub fn run_prepare(args: &PrepareArgs) -> Result<PrepareResult> {
    let options = PrepareOptions {
        output_dir: args.output_dir.clone(),
        delimiter: delimiter_byte(args.delimiter)?,
        dry_run: args.dry_run,
    };
    run_prepare_pipeline(
        &args.dataset,
        &args.config,
        &args.disease_map,
        &args.vaccine_reference,
        &options,
    )
}

pub fn run_split(args: &SplitArgs) -> Result<()> {
    require_file(&args.dataset)?;
    let table = read_csv_table_with_delimiter(&args.dataset, delimiter_byte(args.delimiter)?)
        .context("read dataset")?;
    let result = split_by_column(&table, &args.column, &args.out_dir)?;

    // The renderer runs once per group; a count mismatch here means a
    // file collision after name sanitization.
    let written = result
        .files
        .values()
        .filter(|path| path.is_file())
        .count();
    if written != result.group_count() {
        bail!(
            "wrote {written} files for {} groups; check for colliding group names",
            result.group_count()
        );
    }
    println!(
        "Split {} into {} files under {}",
        args.dataset.display(),
        written,
        args.out_dir.display()
    );
    Ok(())
}

pub fn run_convert_reference(args: &ConvertReferenceArgs) -> Result<()> {
    require_file(&args.matrix)?;
    convert_reference_matrix(&args.matrix, &args.out)?;
    println!("Wrote {}", args.out.display());
    Ok(())
}

pub fn run_scan(args: &ScanArgs) -> Result<()> {
    require_file(&args.dataset)?;
    let findings = scan_dataset(&args.dataset, delimiter_byte(args.delimiter)?)?;
    if findings.is_empty() {
        println!("Scan complete; no problems found.");
        return Ok(());
    }
    for finding in &findings {
        println!("line {}: {}", finding.line, finding.message);
    }
    bail!("{} suspect line(s) in {}", findings.len(), args.dataset.display());
}
