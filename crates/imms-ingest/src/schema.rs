//! Header schema validation and identifier-safe column naming.

use imms_model::{NoticeError, Result};

/// Verify that the dataset's columns equal the configured ordering exactly.
///
/// This is an order-sensitive comparison, not a set comparison: a header
/// that contains every expected column but in a different order fails, and
/// the run stops before any row is processed.
pub fn validate_columns(headers: &[String], expected: &[String]) -> Result<()> {
    if headers != expected {
        return Err(NoticeError::SchemaMismatch {
            expected: expected.to_vec(),
            found: headers.to_vec(),
        });
    }
    Ok(())
}

/// Rewrite a column name for identifier-safe access: embedded spaces
/// become underscores and any remaining character outside
/// `[A-Za-z0-9_]` is dropped. Presentation-layer only; the semantic
/// column set is fixed by validation beforehand.
pub fn sanitize_column_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|ch| if ch == ' ' { '_' } else { ch })
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect()
}

/// Sanitize every header in order.
pub fn sanitize_headers(headers: &[String]) -> Vec<String> {
    headers.iter().map(|name| sanitize_column_name(name)).collect()
}
