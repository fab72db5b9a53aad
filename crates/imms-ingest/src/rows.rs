//! Binding validated table rows to [`ClientRow`] values.

use imms_model::{ClientRow, NoticeError, Result, columns};

use crate::csv_table::CsvTable;
use crate::schema::sanitize_headers;

/// Bind every data row to a [`ClientRow`] by canonical column name.
///
/// Assumes the header has already passed order validation; sanitization
/// here only makes the configured names identifier-safe so they line up
/// with the canonical constants. A blank client identifier is a fatal
/// record error.
pub fn bind_client_rows(table: &CsvTable) -> Result<Vec<ClientRow>> {
    let sanitized = sanitize_headers(&table.headers);
    let index_of = |name: &str| -> Result<usize> {
        sanitized
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| NoticeError::Message(format!("dataset is missing column {name}")))
    };

    let client_id = index_of(columns::CLIENT_ID)?;
    let first_name = index_of(columns::FIRST_NAME)?;
    let last_name = index_of(columns::LAST_NAME)?;
    let date_of_birth = index_of(columns::DATE_OF_BIRTH)?;
    let street_address = index_of(columns::STREET_ADDRESS)?;
    let city = index_of(columns::CITY)?;
    let postal_code = index_of(columns::POSTAL_CODE)?;
    let province = index_of(columns::PROVINCE)?;
    let school = index_of(columns::SCHOOL)?;
    let vaccines_due = index_of(columns::VACCINES_DUE)?;
    let received_agents = index_of(columns::RECEIVED_AGENTS)?;

    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("").to_string();
        let id = cell(client_id);
        if id.is_empty() {
            return Err(NoticeError::Record {
                client_id: String::new(),
                reason: "blank client identifier".to_string(),
            });
        }
        rows.push(ClientRow {
            client_id: id,
            first_name: cell(first_name),
            last_name: cell(last_name),
            date_of_birth: cell(date_of_birth),
            street_address: cell(street_address),
            city: cell(city),
            postal_code: cell(postal_code),
            province: cell(province),
            school: cell(school),
            vaccines_due: cell(vaccines_due),
            received_agents: cell(received_agents),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CsvTable {
        let headers = [
            "Client ID",
            "First Name",
            "Last Name",
            "Date of Birth",
            "Street Address",
            "City",
            "Postal Code",
            "Province",
            "School",
            "Vaccines Due",
            "Received Agents",
        ];
        CsvTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: vec![
                vec![
                    "c-001",
                    "Avery",
                    "Quinn",
                    "2010-03-14",
                    "12 King St",
                    "Guelph",
                    "N1H 1A1",
                    "ON",
                    "Maple_Grove_PS",
                    "Men-C-C",
                    "Jan 5, 2024 - MMR",
                ]
                .into_iter()
                .map(String::from)
                .collect(),
            ],
        }
    }

    #[test]
    fn binds_rows_by_canonical_name() {
        let rows = bind_client_rows(&table()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].client_id, "c-001");
        assert_eq!(rows[0].date_of_birth, "2010-03-14");
        assert_eq!(rows[0].received_agents, "Jan 5, 2024 - MMR");
    }

    #[test]
    fn blank_client_id_is_a_record_error() {
        let mut table = table();
        table.rows[0][0] = String::new();
        let error = bind_client_rows(&table).unwrap_err();
        assert!(matches!(error, NoticeError::Record { .. }));
    }

    #[test]
    fn missing_canonical_column_is_reported() {
        let mut table = table();
        table.headers.remove(0);
        assert!(bind_client_rows(&table).is_err());
    }

    #[test]
    fn sanitized_extract_headers_match_the_canonical_set() {
        let sanitized = crate::schema::sanitize_headers(&table().headers);
        assert_eq!(sanitized, imms_model::CANONICAL_COLUMNS.to_vec());
    }
}
