//! Calendar date conversion and age calculation.
//!
//! Two textual representations appear across the input: the canonical
//! storage form `YYYY-MM-DD` and the display form used inside the
//! received-agents log, `Mon D, YYYY` (e.g. `May 8, 2025`). The display
//! formatter writes the day unpadded; the parser also accepts a
//! zero-padded day, so the converters are exact inverses on canonical
//! text in both directions.
//!
//! All functions operate on whole calendar dates. There is no
//! time-of-day anywhere in this domain.

use chrono::{Datelike, NaiveDate};

use imms_model::{NoticeError, Result};

const ISO_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_PARSE_FORMAT: &str = "%b %d, %Y";
const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Parse the canonical `YYYY-MM-DD` form.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_FORMAT).map_err(|_| NoticeError::DateParse {
        value: value.to_string(),
    })
}

/// Parse the display form `Mon D, YYYY`.
pub fn parse_display_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DISPLAY_PARSE_FORMAT).map_err(|_| {
        NoticeError::DateParse {
            value: value.to_string(),
        }
    })
}

/// Parse either representation, trying the canonical form first.
pub fn parse_any_date(value: &str) -> Result<NaiveDate> {
    parse_iso_date(value).or_else(|_| parse_display_date(value))
}

/// Format as `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Format as `Mon D, YYYY` with an unpadded day.
pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Convert display text to canonical text.
pub fn convert_date_iso(value: &str) -> Result<String> {
    parse_display_date(value).map(format_iso)
}

/// Convert canonical text to display text.
pub fn convert_date_string(value: &str) -> Result<String> {
    parse_iso_date(value).map(format_display)
}

/// Age in full years and months between a date of birth and a reference
/// date, formatted `"<years>Y <months>M"`.
///
/// The month component rounds toward the next whole month boundary: when
/// the reference day-of-month is earlier than the birth day-of-month, the
/// partially elapsed month counts as a full one. This is a domain
/// convention carried over from the notice wording, not ordinary age
/// arithmetic. When that rounding lands on a full year the result
/// normalizes to `years + 1, 0M`, so months stay in `[0, 11]` for any
/// reference on or after the date of birth.
pub fn calculate_age(dob: NaiveDate, reference: NaiveDate) -> String {
    let mut years = reference.year() - dob.year();
    let mut months = reference.month() as i32 - dob.month() as i32;

    if reference.day() < dob.day() {
        months += 1;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }
    if months == 12 {
        years += 1;
        months = 0;
    }

    format!("{years}Y {months}M")
}

/// True iff the calendar age at the reference date is at least 16.
///
/// Uses the standard birthday-not-yet-occurred adjustment with no month
/// rounding. The asymmetry with [`calculate_age`] is deliberate: the
/// over-16 flag selects notice wording and must flip exactly on the
/// sixteenth birthday.
pub fn is_over_16(dob: NaiveDate, reference: NaiveDate) -> bool {
    let mut age = reference.year() - dob.year();
    if (reference.month(), reference.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age >= 16
}
