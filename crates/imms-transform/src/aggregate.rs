//! Per-client notice aggregation.
//!
//! One sequential pass over validated rows, upserting into a per-client
//! draft: demographic fields take the current row's values (last row
//! wins), while extracted events append to the client's running list.
//! Grouping and sorting happen once per client after all rows are
//! consumed, never mid-stream.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, info};

use imms_model::{
    ClientRow, DiseaseSynonymMap, Notice, NoticeConfig, NoticeError, NoticeSet, ReceivedEvent,
    Result, VaccineReferenceMap,
};

use crate::dates::{calculate_age, is_over_16, parse_any_date, parse_iso_date};
use crate::extract::extract_received_events;
use crate::group::group_events_by_date;
use crate::normalize::{normalize_school, normalize_vaccines_due};

#[derive(Debug)]
struct NoticeDraft {
    notice: Notice,
    dob: NaiveDate,
    events: Vec<ReceivedEvent>,
}

/// Build the output document from validated rows.
///
/// The notice-level age and over-16 flag are both computed at the
/// configured delivery date; per-event ages are computed at each event's
/// date during grouping.
pub fn build_notices(
    rows: &[ClientRow],
    config: &NoticeConfig,
    synonyms: &DiseaseSynonymMap,
    reference: &VaccineReferenceMap,
) -> Result<NoticeSet> {
    let delivery = parse_any_date(&config.delivery_date)?;
    let mut drafts: BTreeMap<String, NoticeDraft> = BTreeMap::new();
    let mut event_count = 0usize;

    for row in rows {
        let dob = parse_iso_date(&row.date_of_birth)?;
        let events = extract_received_events(&row.received_agents, &config.ignore_agents)?;
        for event in &events {
            let date = parse_iso_date(&event.date)?;
            if date < dob {
                return Err(NoticeError::Record {
                    client_id: row.client_id.clone(),
                    reason: format!(
                        "received event on {} predates date of birth {}",
                        event.date, row.date_of_birth
                    ),
                });
            }
        }
        event_count += events.len();

        let notice = Notice {
            name: format!("{} {}", row.first_name, row.last_name),
            school: normalize_school(&row.school),
            date_of_birth: row.date_of_birth.clone(),
            address: row.street_address.clone(),
            city: row.city.clone(),
            postal_code: row.postal_code.clone(),
            province: row.province.clone(),
            age: calculate_age(dob, delivery),
            over_16: is_over_16(dob, delivery),
            vaccines_due: normalize_vaccines_due(&row.vaccines_due, synonyms),
            received: Vec::new(),
        };

        match drafts.get_mut(&row.client_id) {
            Some(draft) => {
                // Last row wins for demographics; events only accumulate.
                draft.notice = notice;
                draft.dob = dob;
                draft.events.extend(events);
                debug!(client_id = %row.client_id, "merged repeat row");
            }
            None => {
                drafts.insert(
                    row.client_id.clone(),
                    NoticeDraft {
                        notice,
                        dob,
                        events,
                    },
                );
            }
        }
    }

    let mut notices = NoticeSet::new();
    let mut group_count = 0usize;
    for (client_id, draft) in drafts {
        let mut notice = draft.notice;
        notice.received = group_events_by_date(&draft.events, draft.dob, reference)?;
        group_count += notice.received.len();
        notices.insert(client_id, notice);
    }

    info!(
        rows = rows.len(),
        clients = notices.len(),
        events = event_count,
        groups = group_count,
        "aggregated notices"
    );
    Ok(notices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NoticeConfig {
        NoticeConfig {
            expected_columns: Vec::new(),
            ignore_agents: vec!["Tuberculin PPD".to_string()],
            delivery_date: "2025-05-08".to_string(),
            data_date: "2025-04-01".to_string(),
        }
    }

    fn row(client_id: &str, received: &str) -> ClientRow {
        ClientRow {
            client_id: client_id.to_string(),
            first_name: "Avery".to_string(),
            last_name: "Quinn".to_string(),
            date_of_birth: "2009-09-08".to_string(),
            street_address: "12 King St".to_string(),
            city: "Guelph".to_string(),
            postal_code: "N1H 1A1".to_string(),
            province: "ON".to_string(),
            school: "Maple_Grove_PS".to_string(),
            vaccines_due: "Men-C-C, HPV-9".to_string(),
            received_agents: received.to_string(),
        }
    }

    fn synonyms() -> DiseaseSynonymMap {
        DiseaseSynonymMap::from([("Men-C-C", "Meningococcal")])
    }

    fn reference() -> VaccineReferenceMap {
        VaccineReferenceMap::from([("MMR", &["Measles", "Mumps", "Rubella"] as &[&str])])
    }

    #[test]
    fn builds_one_notice_per_client() {
        let rows = vec![row("c-001", "Jan 5, 2024 - MMR")];
        let notices = build_notices(&rows, &config(), &synonyms(), &reference()).unwrap();

        assert_eq!(notices.len(), 1);
        let notice = &notices["c-001"];
        assert_eq!(notice.name, "Avery Quinn");
        assert_eq!(notice.school, "Maple Grove PS");
        assert_eq!(notice.age, "15Y 8M");
        assert!(!notice.over_16);
        assert_eq!(notice.vaccines_due, "Meningococcal, HPV-9");
        assert_eq!(notice.received.len(), 1);
        assert_eq!(notice.received[0].diseases, vec!["Measles", "Mumps", "Rubella"]);
    }

    #[test]
    fn repeat_rows_merge_events_and_keep_last_demographics() {
        let mut first = row("c-001", "Jan 5, 2024 - MMR");
        first.city = "Elora".to_string();
        let second = row("c-001", "Feb 1, 2024 - Var");
        let notices =
            build_notices(&[first, second], &config(), &synonyms(), &reference()).unwrap();

        let notice = &notices["c-001"];
        assert_eq!(notice.city, "Guelph");
        let dates: Vec<&str> = notice
            .received
            .iter()
            .map(|group| group.date_given.as_str())
            .collect();
        assert_eq!(dates, vec!["2024-01-05", "2024-02-01"]);
    }

    #[test]
    fn ignored_agents_never_reach_the_output() {
        let rows = vec![row(
            "c-001",
            "Jan 5, 2024 - Tuberculin PPD Jan 5, 2024 - MMR Feb 1, 2024 - Var",
        )];
        let notices = build_notices(&rows, &config(), &synonyms(), &reference()).unwrap();

        let notice = &notices["c-001"];
        for group in &notice.received {
            assert!(!group.vaccines.iter().any(|name| name == "Tuberculin PPD"));
        }
        // Remaining fragments on and after the ignored one survive.
        assert_eq!(notice.received.len(), 2);
        assert_eq!(notice.received[0].vaccines, vec!["MMR"]);
    }

    #[test]
    fn event_before_birth_is_a_record_error() {
        let rows = vec![row("c-001", "Jan 5, 2004 - MMR")];
        let error = build_notices(&rows, &config(), &synonyms(), &reference()).unwrap_err();
        assert!(matches!(error, NoticeError::Record { .. }));
    }

    #[test]
    fn bad_date_of_birth_is_fatal() {
        let mut bad = row("c-001", "");
        bad.date_of_birth = "September 8, 2009".to_string();
        let error = build_notices(&[bad], &config(), &synonyms(), &reference()).unwrap_err();
        assert!(matches!(error, NoticeError::DateParse { .. }));
    }

    #[test]
    fn over_16_uses_the_delivery_date() {
        let mut older = row("c-002", "");
        older.date_of_birth = "2008-05-08".to_string();
        let notices = build_notices(&[older], &config(), &synonyms(), &reference()).unwrap();
        assert!(notices["c-002"].over_16);
    }
}
