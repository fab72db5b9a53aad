#![deny(unsafe_code)]

pub mod config;
pub mod csv_table;
pub mod rows;
pub mod scan;
pub mod schema;

pub use config::{load_config, load_disease_map, load_vaccine_reference, require_file};
pub use csv_table::{CsvTable, DEFAULT_DELIMITER, read_csv_table, read_csv_table_with_delimiter};
pub use rows::bind_client_rows;
pub use scan::{ScanFinding, scan_dataset};
pub use schema::{sanitize_column_name, sanitize_headers, validate_columns};
