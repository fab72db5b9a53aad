//! Notice document writer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use imms_model::NoticeSet;

/// Serialize the notice map as pretty JSON to `<dir>/notices.json`.
///
/// The output directory is created if needed. Callers only reach this
/// after every pipeline stage succeeded, so a partially processed run
/// never leaves a document behind.
pub fn write_notices(dir: &Path, notices: &NoticeSet) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create output dir {}", dir.display()))?;
    let path = dir.join("notices.json");
    let contents =
        serde_json::to_string_pretty(notices).context("serialize notices document")?;
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    info!(clients = notices.len(), path = %path.display(), "wrote notices document");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imms_model::Notice;

    #[test]
    fn writes_pretty_json_keyed_by_client() {
        let dir = tempfile::tempdir().unwrap();
        let mut notices = NoticeSet::new();
        notices.insert(
            "c-001".to_string(),
            Notice {
                name: "Avery Quinn".to_string(),
                ..Notice::default()
            },
        );

        let path = write_notices(dir.path(), &notices).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["c-001"]["name"], "Avery Quinn");
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out/run-1");
        let path = write_notices(&nested, &NoticeSet::new()).unwrap();
        assert!(path.exists());
    }
}
