//! Delimiter-separated table reading.
//!
//! The upstream extract is written with a `;` delimiter because vaccine
//! lists embed commas. The reader trims cells, strips a UTF-8 BOM from
//! the first header, skips fully empty rows, and pads short rows to
//! header width so downstream indexing never goes out of bounds.

use std::path::Path;

use csv::ReaderBuilder;

use imms_model::{NoticeError, Result};

/// Delimiter used by the immunization extract.
pub const DEFAULT_DELIMITER: u8 = b';';

/// An in-memory table: one header row plus data rows of equal width.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a header by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a table using the extract's default `;` delimiter.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    read_csv_table_with_delimiter(path, DEFAULT_DELIMITER)
}

/// Read a table with an explicit delimiter.
pub fn read_csv_table_with_delimiter(path: &Path, delimiter: u8) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|error| NoticeError::Message(format!("read csv {}: {error}", path.display())))?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| {
            NoticeError::Message(format!("read record in {}: {error}", path.display()))
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    if raw_rows.is_empty() {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }

    let headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let mut rows = Vec::with_capacity(raw_rows.len() - 1);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(value.to_string());
        }
        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_semicolon_delimited_table() {
        let file = write_temp("A;B\n1;2\n3;4\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn skips_empty_rows_and_pads_short_ones() {
        let file = write_temp("A;B;C\n1;2;3\n;;\n4;5\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["4", "5", ""]);
    }

    #[test]
    fn strips_bom_and_trims_headers() {
        let file = write_temp("\u{feff} Client  ID ;B\n1;2\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers[0], "Client ID");
    }

    #[test]
    fn column_index_is_exact_match() {
        let file = write_temp("Client ID;School\nc1;s1\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.column_index("School"), Some(1));
        assert_eq!(table.column_index("school"), None);
    }

    #[test]
    fn comma_delimiter_when_requested() {
        let file = write_temp("A,B\nx,y\n");
        let table = read_csv_table_with_delimiter(file.path(), b',').unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["x", "y"]]);
    }
}
