//! Config and reference-document loaders.
//!
//! The config is a YAML key-value document; both reference tables are
//! plain JSON objects. Loader failures carry the offending path so the
//! CLI diagnostic names the file.

use std::fs;
use std::path::Path;

use tracing::debug;

use imms_model::{DiseaseSynonymMap, NoticeConfig, NoticeError, Result, VaccineReferenceMap};

/// Ensure a required input exists before any processing starts.
pub fn require_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(NoticeError::MissingInput(path.to_path_buf()));
    }
    Ok(())
}

/// Load the run configuration from YAML.
pub fn load_config(path: &Path) -> Result<NoticeConfig> {
    let contents = fs::read_to_string(path)?;
    let config: NoticeConfig = serde_yaml::from_str(&contents).map_err(|error| {
        NoticeError::Message(format!("parse config {}: {error}", path.display()))
    })?;
    debug!(
        expected_columns = config.expected_columns.len(),
        ignore_agents = config.ignore_agents.len(),
        "loaded config"
    );
    Ok(config)
}

/// Load the disease-synonym map from a JSON object.
pub fn load_disease_map(path: &Path) -> Result<DiseaseSynonymMap> {
    let contents = fs::read_to_string(path)?;
    let map: DiseaseSynonymMap = serde_json::from_str(&contents).map_err(|error| {
        NoticeError::Message(format!("parse disease map {}: {error}", path.display()))
    })?;
    debug!(entries = map.len(), "loaded disease map");
    Ok(map)
}

/// Load the vaccine-reference map from a JSON object.
pub fn load_vaccine_reference(path: &Path) -> Result<VaccineReferenceMap> {
    let contents = fs::read_to_string(path)?;
    let map: VaccineReferenceMap = serde_json::from_str(&contents).map_err(|error| {
        NoticeError::Message(format!("parse vaccine reference {}: {error}", path.display()))
    })?;
    debug!(entries = map.len(), "loaded vaccine reference");
    Ok(map)
}
