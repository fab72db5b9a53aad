//! Reference lookup tables with identity fallback.
//!
//! Both maps are supplied as already-parsed JSON objects. A lookup miss is
//! never an error: unrecognized names pass through verbatim, which keeps
//! the pipeline tolerant of reference-table gaps at the cost of silently
//! under-translating them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Maps a vaccine/agent name to its canonical disease display name.
///
/// Used only when normalizing the vaccines-due field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiseaseSynonymMap {
    entries: HashMap<String, String>,
}

impl DiseaseSynonymMap {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Resolve a name to its canonical form, or return it unchanged.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries.get(name).map_or(name, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for DiseaseSynonymMap {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Maps a vaccine name to the ordered list of diseases it protects against.
///
/// Used only when annotating received-event groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaccineReferenceMap {
    entries: HashMap<String, Vec<String>>,
}

impl VaccineReferenceMap {
    pub fn new(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Diseases covered by a vaccine, falling back to the vaccine name
    /// itself when the reference table has no entry for it.
    pub fn diseases_for(&self, vaccine: &str) -> Vec<String> {
        match self.entries.get(vaccine) {
            Some(diseases) => diseases.clone(),
            None => vec![vaccine.to_string()],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, &[&str]); N]> for VaccineReferenceMap {
    fn from(entries: [(&str, &[&str]); N]) -> Self {
        Self::new(
            entries
                .into_iter()
                .map(|(k, v)| {
                    (
                        k.to_string(),
                        v.iter().map(|d| (*d).to_string()).collect(),
                    )
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonym_resolve_hits() {
        let map = DiseaseSynonymMap::from([("Men-C-C", "Meningococcal")]);
        assert_eq!(map.resolve("Men-C-C"), "Meningococcal");
    }

    #[test]
    fn synonym_resolve_miss_is_identity() {
        let map = DiseaseSynonymMap::default();
        assert_eq!(map.resolve("Unmapped name"), "Unmapped name");
    }

    #[test]
    fn diseases_for_miss_returns_vaccine_name() {
        let map = VaccineReferenceMap::default();
        assert_eq!(map.diseases_for("NovelVax"), vec!["NovelVax".to_string()]);
    }

    #[test]
    fn diseases_for_hit_preserves_order() {
        let map = VaccineReferenceMap::from([(
            "MMR",
            &["Measles", "Mumps", "Rubella"] as &[&str],
        )]);
        assert_eq!(
            map.diseases_for("MMR"),
            vec!["Measles", "Mumps", "Rubella"]
        );
    }

    #[test]
    fn maps_deserialize_from_plain_json_objects() {
        let synonyms: DiseaseSynonymMap =
            serde_json::from_str(r#"{"Tdap": "Tetanus, Diphtheria, Pertussis"}"#).unwrap();
        assert_eq!(synonyms.resolve("Tdap"), "Tetanus, Diphtheria, Pertussis");

        let reference: VaccineReferenceMap =
            serde_json::from_str(r#"{"DTaP-IPV": ["Diphtheria", "Polio"]}"#).unwrap();
        assert_eq!(reference.diseases_for("DTaP-IPV"), vec!["Diphtheria", "Polio"]);
    }
}
