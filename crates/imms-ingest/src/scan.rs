//! Pre-flight quality scan for a raw dataset file.
//!
//! Catches the two failure shapes seen in field extracts before the
//! strict reader runs: records the CSV parser rejects outright, and lines
//! whose quote count is odd (an unclosed quote swallows the rest of the
//! file). Diagnostic only; findings are reported, not fixed.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::warn;

use imms_model::Result;

/// One suspect location in the scanned file. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFinding {
    pub line: usize,
    pub message: String,
}

/// Scan a dataset for parse errors and quoting issues.
pub fn scan_dataset(path: &Path, delimiter: u8) -> Result<Vec<ScanFinding>> {
    let mut findings = scan_parse_errors(path, delimiter)?;
    findings.extend(scan_quoting_issues(path)?);
    findings.sort_by_key(|finding| finding.line);
    Ok(findings)
}

/// Report records the CSV parser cannot read.
pub fn scan_parse_errors(path: &Path, delimiter: u8) -> Result<Vec<ScanFinding>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|error| {
            imms_model::NoticeError::Message(format!("scan {}: {error}", path.display()))
        })?;

    let mut findings = Vec::new();
    for result in reader.records() {
        if let Err(error) = result {
            let line = error
                .position()
                .map(|position| position.line() as usize)
                .unwrap_or(0);
            warn!(line, %error, "malformed record");
            findings.push(ScanFinding {
                line,
                message: format!("malformed record: {error}"),
            });
        }
    }
    Ok(findings)
}

/// Report lines with an odd number of quote characters.
pub fn scan_quoting_issues(path: &Path) -> Result<Vec<ScanFinding>> {
    let contents = fs::read_to_string(path)?;
    let mut findings = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let quotes = line.matches('"').count();
        if quotes % 2 != 0 {
            findings.push(ScanFinding {
                line: idx + 1,
                message: format!("odd number of quotes ({quotes})"),
            });
        }
    }
    Ok(findings)
}
