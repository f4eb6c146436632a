//! Data model for parsed injury reports — format-agnostic.

use serde::{Deserialize, Serialize};

/// One line of extracted report text, tagged with its source page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    /// Zero-based page index. Only used to keep lines in document order.
    pub page: usize,
    pub text: String,
}

impl InputLine {
    pub fn new(page: usize, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }
}

/// A single player's entry in the report.
///
/// Field order is the tabular column order; serialized names double as the
/// header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Report date (`MM/DD/YYYY`), always the cutoff date of the run
    pub date: String,
    /// Raw matchup token, e.g. "BOS@NYK"
    pub matchup: String,
    pub team: String,
    /// "Lastname,Firstname"
    pub player_name: String,
    pub status: String,
    /// Free text, may be empty but never absent
    pub reason: String,
}

impl Record {
    /// Header row in column order.
    pub const HEADERS: [&'static str; 6] =
        ["date", "matchup", "team", "playerName", "status", "reason"];

    /// Field values in column order.
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.date,
            &self.matchup,
            &self.team,
            &self.player_name,
            &self.status,
            &self.reason,
        ]
    }
}
