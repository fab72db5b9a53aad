//! Dataset splitting by a group column.
//!
//! Downstream rendering runs once per school/site, so the prepared
//! extract is partitioned into one file per distinct value of a chosen
//! column. Group order follows first appearance in the dataset; rows
//! keep their original order within each group.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use imms_ingest::CsvTable;

/// Outcome of a split: one entry per distinct group value.
#[derive(Debug)]
pub struct SplitResult {
    /// Group value → file written for it.
    pub files: BTreeMap<String, PathBuf>,
}

impl SplitResult {
    pub fn group_count(&self) -> usize {
        self.files.len()
    }
}

/// Make a group value safe to use as a file stem.
fn safe_name(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch {
            ' ' | '/' | '-' => '_',
            other => other,
        })
        .collect()
}

/// Write one CSV per distinct value of `column` into `out_dir`.
///
/// The per-group files are plain comma-separated CSV with the source
/// header row repeated, matching what the renderer consumes. Returns the
/// written paths so callers can cross-check the group count against the
/// files that actually landed on disk.
pub fn split_by_column(table: &CsvTable, column: &str, out_dir: &Path) -> Result<SplitResult> {
    let Some(column_index) = table.column_index(column) else {
        bail!(
            "column {column:?} not found; dataset has {:?}",
            table.headers
        );
    };

    fs::create_dir_all(out_dir)
        .with_context(|| format!("create split dir {}", out_dir.display()))?;

    // Partition preserving first-appearance group order.
    let mut groups: Vec<(String, Vec<&Vec<String>>)> = Vec::new();
    for row in &table.rows {
        let value = row
            .get(column_index)
            .map(String::as_str)
            .unwrap_or("")
            .to_string();
        match groups.iter_mut().find(|(name, _)| *name == value) {
            Some((_, rows)) => rows.push(row),
            None => groups.push((value, vec![row])),
        }
    }

    let mut files = BTreeMap::new();
    for (value, rows) in groups {
        let path = out_dir.join(format!("{}.csv", safe_name(&value)));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("create {}", path.display()))?;
        writer
            .write_record(&table.headers)
            .context("write split header")?;
        for row in rows {
            writer.write_record(row.iter()).context("write split row")?;
        }
        writer.flush().context("flush split file")?;
        files.insert(value, path);
    }

    info!(column, groups = files.len(), dir = %out_dir.display(), "split dataset");
    Ok(SplitResult { files })
}
