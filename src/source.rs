//! Report source helpers — cutoff dates and candidate report URLs.
//!
//! No network access happens here; callers probe [`report_urls`] in order and
//! keep the last document that exists.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

/// Date format used in report section markers and record dates.
pub const CUTOFF_FORMAT: &str = "%m/%d/%Y";

const REPORT_URL_BASE: &str = "https://ak-static.cms.nba.com/referee/injury/Injury-Report_";

/// Publication slots in the order reports are released during a day.
pub const REPORT_SLOTS: &[&str] = &[
    "02AM", "04AM", "06AM", "08AM", "10AM", "11AM", "12AM", "01PM", "02PM", "03PM", "04PM",
    "05PM", "06PM", "8PM",
];

#[derive(Debug, Error)]
pub enum CutoffError {
    #[error("invalid cutoff date '{input}': expected MM/DD/YYYY")]
    Invalid {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Format a date the way report sections print it.
pub fn cutoff_for(date: NaiveDate) -> String {
    date.format(CUTOFF_FORMAT).to_string()
}

/// Current date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a `MM/DD/YYYY` cutoff date.
pub fn parse_cutoff(input: &str) -> Result<NaiveDate, CutoffError> {
    NaiveDate::parse_from_str(input.trim(), CUTOFF_FORMAT).map_err(|source| CutoffError::Invalid {
        input: input.to_string(),
        source,
    })
}

/// Candidate report document URLs for a day, earliest slot first.
pub fn report_urls(date: NaiveDate) -> Vec<String> {
    let day = date.format("%Y-%m-%d");
    REPORT_SLOTS
        .iter()
        .map(|slot| format!("{REPORT_URL_BASE}{day}_{slot}.pdf"))
        .collect()
}
