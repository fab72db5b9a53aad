//! Same-date grouping engine.
//!
//! Partitions a client's events by exact administration date so one
//! visit produces one notice line. A single pass accumulates into a map
//! keyed by date; groups are emitted in ascending key order. There is no
//! adjacent-event comparison and no index arithmetic, so any number of
//! vaccines sharing a date collapses into exactly one group.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use imms_model::{ReceivedEvent, ReceivedEventGroup, Result, VaccineReferenceMap};

use crate::dates::{calculate_age, parse_iso_date};

#[derive(Debug, Default)]
struct GroupAccumulator {
    vaccines: Vec<String>,
    diseases: Vec<String>,
}

impl GroupAccumulator {
    fn add(&mut self, vaccine: &str, reference: &VaccineReferenceMap) {
        if !self.vaccines.iter().any(|name| name == vaccine) {
            self.vaccines.push(vaccine.to_string());
        }
        for disease in reference.diseases_for(vaccine) {
            if !self.diseases.contains(&disease) {
                self.diseases.push(disease);
            }
        }
    }
}

/// Group a client's events by identical date.
///
/// Within a group, vaccines keep insertion order with duplicates
/// dropped, and diseases are the first-seen-ordered union of each
/// vaccine's coverage. The group age is computed once from the client's
/// date of birth, since all events in a group share the date by
/// construction. ISO date keys sort lexicographically in calendar order,
/// so the map emits groups ascending by date with first-seen tie order
/// inside each date.
pub fn group_events_by_date(
    events: &[ReceivedEvent],
    dob: NaiveDate,
    reference: &VaccineReferenceMap,
) -> Result<Vec<ReceivedEventGroup>> {
    let mut by_date: BTreeMap<String, GroupAccumulator> = BTreeMap::new();
    for event in events {
        by_date
            .entry(event.date.clone())
            .or_default()
            .add(&event.vaccine, reference);
    }

    let mut groups = Vec::with_capacity(by_date.len());
    for (date_given, accumulator) in by_date {
        let date = parse_iso_date(&date_given)?;
        groups.push(ReceivedEventGroup {
            date_given,
            vaccines: accumulator.vaccines,
            age: calculate_age(dob, date),
            diseases: accumulator.diseases,
        });
    }
    Ok(groups)
}
