//! Vaccine-reference matrix conversion.
//!
//! The reference table is maintained as a wide matrix: one row per
//! vaccine, one column per disease, `1` marking coverage. The pipeline
//! consumes it as a `vaccine → [diseases]` JSON object, so this converter
//! turns the former into the latter once per reference update.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use imms_ingest::read_csv_table_with_delimiter;

const VACCINE_COLUMN: &str = "Vaccine";

/// Convert a wide coverage matrix CSV into the vaccine-reference JSON map.
///
/// Disease order in each list follows the matrix column order, which is
/// the order the notices display them in.
pub fn convert_reference_matrix(csv_path: &Path, json_path: &Path) -> Result<()> {
    let table = read_csv_table_with_delimiter(csv_path, b',')
        .with_context(|| format!("read reference matrix {}", csv_path.display()))?;
    let Some(vaccine_index) = table.column_index(VACCINE_COLUMN) else {
        bail!(
            "reference matrix {} has no {VACCINE_COLUMN:?} column",
            csv_path.display()
        );
    };

    let mut reference: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for row in &table.rows {
        let vaccine = row
            .get(vaccine_index)
            .map(String::as_str)
            .unwrap_or("")
            .to_string();
        if vaccine.is_empty() {
            continue;
        }
        let mut diseases = Vec::new();
        for (idx, disease) in table.headers.iter().enumerate() {
            if idx == vaccine_index {
                continue;
            }
            if row.get(idx).map(String::as_str) == Some("1") {
                diseases.push(disease.clone());
            }
        }
        reference.insert(vaccine, diseases);
    }

    let contents =
        serde_json::to_string_pretty(&reference).context("serialize vaccine reference")?;
    fs::write(json_path, contents)
        .with_context(|| format!("write {}", json_path.display()))?;
    info!(vaccines = reference.len(), path = %json_path.display(), "converted reference matrix");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn converts_matrix_rows_to_disease_lists() {
        let mut matrix = tempfile::NamedTempFile::new().unwrap();
        matrix
            .write_all(
                b"Vaccine,Measles,Mumps,Rubella\nMMR,1,1,1\nMen-C-C,,,\nPriorix,1,1,\n",
            )
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("vaccine_reference.json");

        convert_reference_matrix(matrix.path(), &out).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["MMR"], serde_json::json!(["Measles", "Mumps", "Rubella"]));
        assert_eq!(value["Men-C-C"], serde_json::json!([]));
        assert_eq!(value["Priorix"], serde_json::json!(["Measles", "Mumps"]));
    }

    #[test]
    fn matrix_without_vaccine_column_fails() {
        let mut matrix = tempfile::NamedTempFile::new().unwrap();
        matrix.write_all(b"Name,Measles\nMMR,1\n").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("vaccine_reference.json");
        assert!(convert_reference_matrix(matrix.path(), &out).is_err());
    }
}
