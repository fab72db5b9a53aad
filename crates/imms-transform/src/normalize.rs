//! Per-row field normalization.

use imms_model::DiseaseSynonymMap;

/// Rewrite the free-text vaccines-due list against the synonym map.
///
/// Splits on commas, trims each token, resolves it (identity on a miss),
/// and rejoins with `", "`. Empty tokens vanish, so the result never
/// carries a trailing separator and the operation is idempotent.
pub fn normalize_vaccines_due(text: &str, synonyms: &DiseaseSynonymMap) -> String {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| synonyms.resolve(token))
        .collect::<Vec<_>>()
        .join(", ")
}

/// School/site names arrive underscore-encoded from the upstream export.
pub fn normalize_school(text: &str) -> String {
    text.replace('_', " ")
}
