#![deny(unsafe_code)]

pub mod aggregate;
pub mod dates;
pub mod extract;
pub mod group;
pub mod normalize;

pub use aggregate::build_notices;
pub use dates::{
    calculate_age, convert_date_iso, convert_date_string, format_display, format_iso, is_over_16,
    parse_any_date, parse_display_date, parse_iso_date,
};
pub use extract::extract_received_events;
pub use group::group_events_by_date;
pub use normalize::{normalize_school, normalize_vaccines_due};
