//! Received-agents log extraction.
//!
//! The field is a concatenation of fragments shaped
//! `Mon D, YYYY - Name`, back-to-back with no separator guaranteed other
//! than the next date header itself. Extraction finds every date header
//! and takes the text up to the following header (or end of input) as the
//! agent name, so the regime can be swapped for a stricter delimited
//! format without touching grouping or aggregation.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use imms_model::{ReceivedEvent, Result};

use crate::dates::{format_iso, parse_display_date};

/// A date header opening one fragment: `Mon D, YYYY - `.
static DATE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z]{3} \d{1,2}, \d{4}) - ").expect("valid date header pattern")
});

/// Extract ordered `(date, vaccine)` events from one row's log.
///
/// Events whose agent name appears in `ignore_agents` are skipped and
/// extraction continues with the remaining fragments; one ignored agent
/// must never cost a client the rest of their history. Dates are
/// validated here and carried forward in canonical ISO form.
pub fn extract_received_events(
    log: &str,
    ignore_agents: &[String],
) -> Result<Vec<ReceivedEvent>> {
    let mut events = Vec::new();
    let matches: Vec<(usize, usize, &str)> = DATE_HEADER
        .captures_iter(log)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let date_text = captures.get(1)?.as_str();
            Some((whole.start(), whole.end(), date_text))
        })
        .collect();

    for (idx, (_, name_start, date_text)) in matches.iter().enumerate() {
        let name_end = matches
            .get(idx + 1)
            .map_or(log.len(), |(next_start, _, _)| *next_start);
        let name = log[*name_start..name_end]
            .trim()
            .trim_end_matches(',')
            .trim_end();
        if name.is_empty() {
            debug!(date = date_text, "fragment without an agent name");
            continue;
        }
        if ignore_agents.iter().any(|agent| agent == name) {
            debug!(agent = name, "skipping ignored agent");
            continue;
        }
        let date = parse_display_date(date_text)?;
        events.push(ReceivedEvent {
            date: format_iso(date),
            vaccine: name.to_string(),
        });
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignore(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn extracts_back_to_back_fragments() {
        let log = "Jan 5, 2024 - VaxA Jan 5, 2024 - VaxB Feb 1, 2024 - VaxC";
        let events = extract_received_events(log, &[]).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].date, "2024-01-05");
        assert_eq!(events[0].vaccine, "VaxA");
        assert_eq!(events[1].vaccine, "VaxB");
        assert_eq!(events[2].date, "2024-02-01");
    }

    #[test]
    fn extracts_comma_joined_fragments() {
        let log = "Mar 3, 2021 - MMR, Mar 3, 2021 - DTaP-IPV-Hib";
        let events = extract_received_events(log, &[]).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].vaccine, "MMR");
        assert_eq!(events[1].vaccine, "DTaP-IPV-Hib");
    }

    #[test]
    fn ignored_agent_does_not_drop_later_fragments() {
        let log = "Jan 5, 2024 - Tuberculin PPD Jan 5, 2024 - VaxB Feb 1, 2024 - VaxC";
        let events = extract_received_events(log, &ignore(&["Tuberculin PPD"])).unwrap();
        let names: Vec<&str> = events.iter().map(|e| e.vaccine.as_str()).collect();
        assert_eq!(names, vec!["VaxB", "VaxC"]);
    }

    #[test]
    fn empty_log_yields_no_events() {
        assert!(extract_received_events("", &[]).unwrap().is_empty());
        assert!(extract_received_events("no fragments here", &[]).unwrap().is_empty());
    }

    #[test]
    fn names_keep_interior_punctuation() {
        let log = "Sep 9, 2019 - Men-C-ACYW-135";
        let events = extract_received_events(log, &[]).unwrap();
        assert_eq!(events[0].vaccine, "Men-C-ACYW-135");
    }

    #[test]
    fn invalid_month_in_matched_fragment_is_fatal() {
        // The shape matches but the month abbreviation is not a real one.
        let log = "Abc 5, 2024 - VaxA";
        assert!(extract_received_events(log, &[]).is_err());
    }

    #[test]
    fn zero_padded_days_are_accepted() {
        let events = extract_received_events("Jan 05, 2024 - VaxA", &[]).unwrap();
        assert_eq!(events[0].date, "2024-01-05");
    }
}
