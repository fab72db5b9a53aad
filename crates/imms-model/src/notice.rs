//! Output document model.
//!
//! One [`Notice`] per client, keyed by client identifier. The serialized
//! shape is consumed by an external renderer and must keep its key names
//! stable.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single administration event recovered from the received-agents log.
///
/// Dates are carried as canonical `YYYY-MM-DD` text; the extractor has
/// already validated them. Never persisted standalone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedEvent {
    /// Administration date, ISO text.
    pub date: String,
    /// Trimmed vaccine/agent name.
    pub vaccine: String,
}

/// All events a client received on one calendar date, combined.
///
/// A client who received three vaccines in one visit gets one entry, not
/// three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceivedEventGroup {
    /// The shared administration date, ISO text.
    pub date_given: String,
    /// Vaccines given that date, insertion order, no duplicates.
    pub vaccines: Vec<String>,
    /// Client age at that date, `"<years>Y <months>M"`.
    pub age: String,
    /// Distinct diseases covered by the group's vaccines, first-seen order.
    pub diseases: Vec<String>,
}

/// The structured per-client output record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// `First Last`.
    pub name: String,
    pub school: String,
    pub date_of_birth: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub province: String,
    /// Age at the configured delivery date.
    pub age: String,
    pub over_16: bool,
    /// Normalized, comma-joined, no trailing separator.
    pub vaccines_due: String,
    /// Grouped received-event history, ascending by date.
    pub received: Vec<ReceivedEventGroup>,
}

/// The complete output document: client identifier → notice, emitted in
/// sorted key order.
pub type NoticeSet = BTreeMap<String, Notice>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_serializes_with_stable_keys() {
        let notice = Notice {
            name: "Avery Quinn".to_string(),
            school: "Maple Grove PS".to_string(),
            date_of_birth: "2010-03-14".to_string(),
            address: "12 King St".to_string(),
            city: "Guelph".to_string(),
            postal_code: "N1H 1A1".to_string(),
            province: "ON".to_string(),
            age: "15Y 1M".to_string(),
            over_16: false,
            vaccines_due: "Meningococcal".to_string(),
            received: vec![ReceivedEventGroup {
                date_given: "2024-01-05".to_string(),
                vaccines: vec!["MMR".to_string()],
                age: "13Y 10M".to_string(),
                diseases: vec!["Measles".to_string()],
            }],
        };

        let value = serde_json::to_value(&notice).unwrap();
        let object = value.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "school",
                "date_of_birth",
                "address",
                "city",
                "postal_code",
                "province",
                "age",
                "over_16",
                "vaccines_due",
                "received",
            ]
        );
        let group = &value["received"][0];
        assert_eq!(group["date_given"], "2024-01-05");
        assert_eq!(group["vaccines"][0], "MMR");
    }
}
