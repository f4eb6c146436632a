//! Injury report state machine — one pass over classified lines.
//!
//! Context (matchup, team) is threaded through the scan; the record that may
//! still receive reason continuations is tracked as an index into the output,
//! so there is exactly one copy of every record.

use super::line::{self, LineKind};
use crate::model::{InputLine, Record};
use tracing::{debug, trace};

// -- Parser state -------------------------------------------------------------

struct ParseState {
    // Results
    records: Vec<Record>,

    // Context
    current_matchup: Option<String>,
    current_team: Option<String>,

    // Index into `records` of the record eligible for continuation
    active: Option<usize>,
    // Last player line had no status; next line continues the active record
    pending_continuation: bool,

    cutoff_date: String,
    stopped: bool,
}

impl ParseState {
    fn new(cutoff_date: &str) -> Self {
        Self {
            records: Vec::new(),
            current_matchup: None,
            current_team: None,
            active: None,
            pending_continuation: false,
            cutoff_date: cutoff_date.to_string(),
            stopped: false,
        }
    }
}

/// Fields pulled out of a player sub-line.
#[derive(Debug, PartialEq, Eq)]
struct PlayerFields {
    name: String,
    status: String,
    reason: String,
}

// -- Public API ---------------------------------------------------------------

/// Parse lines in document order into injury records.
///
/// Only sections dated `cutoff_date` (`MM/DD/YYYY`) are read; the first
/// section with any other date ends the run.
pub fn parse(lines: &[InputLine], cutoff_date: &str) -> Vec<Record> {
    let _span = tracing::debug_span!("parse", cutoff = cutoff_date).entered();
    let mut state = ParseState::new(cutoff_date);

    for line in lines {
        if state.stopped {
            break;
        }
        process_line(&mut state, line);
    }

    debug!(records = state.records.len(), stopped = state.stopped, "report parsed");
    state.records
}

// -- Line processing ----------------------------------------------------------

fn process_line(s: &mut ParseState, line: &InputLine) {
    match line::classify(&line.text, s.current_matchup.as_deref()) {
        LineKind::DatedSection { date, rest } => {
            if date != s.cutoff_date {
                debug!(page = line.page, date, "section outside cutoff date, stopping");
                s.stopped = true;
                return;
            }
            let kind = line::classify_body(rest, s.current_matchup.as_deref());
            dispatch(s, rest, kind);
        }
        kind => dispatch(s, &line.text, kind),
    }
}

fn dispatch(s: &mut ParseState, text: &str, kind: LineKind<'_>) {
    if kind == LineKind::Blank {
        return;
    }
    trace!(?kind, "classified line");

    // A status-less player line turns the next line into a continuation,
    // unless that line opens a new matchup
    let pending = std::mem::take(&mut s.pending_continuation);

    match kind {
        LineKind::Matchup { matchup, team } => {
            set_matchup(s, matchup, team);
        }
        LineKind::MatchupWithPlayer {
            matchup,
            team,
            player,
        } => {
            set_matchup(s, matchup, Some(team));
            push_player(s, &player);
        }
        _ if pending => continue_reason(s, text),
        LineKind::Team(team) => {
            set_team(s, team);
        }
        LineKind::TeamChange { team, player } => {
            if s.current_team.is_some() {
                set_team(s, team);
                push_player(s, &player);
            } else {
                continue_reason(s, text);
            }
        }
        LineKind::Player(tokens) => {
            if s.current_team.is_some() {
                push_player(s, &tokens);
            } else {
                continue_reason(s, text);
            }
        }
        LineKind::Continuation(text) => continue_reason(s, text),
        LineKind::Blank | LineKind::DatedSection { .. } => {}
    }
}

// -- Helper functions ---------------------------------------------------------

fn set_matchup(s: &mut ParseState, matchup: &str, team: Option<&str>) {
    debug!(matchup, team, "matchup");
    s.current_matchup = Some(matchup.to_string());
    s.current_team = team.map(str::to_string);
    s.active = None;
}

fn set_team(s: &mut ParseState, team: &str) {
    debug!(team, "team");
    s.current_team = Some(team.to_string());
    s.active = None;
}

/// Build a record from a player sub-line and make it the active one.
/// Without a status token nothing is emitted and the next line becomes a
/// continuation instead.
fn push_player(s: &mut ParseState, tokens: &[&str]) {
    let (Some(matchup), Some(team)) = (&s.current_matchup, &s.current_team) else {
        return;
    };
    let Some(fields) = extract_player(tokens) else {
        trace!(?tokens, "player line without status");
        s.pending_continuation = true;
        return;
    };

    s.records.push(Record {
        date: s.cutoff_date.clone(),
        matchup: matchup.clone(),
        team: team.clone(),
        player_name: fields.name,
        status: fields.status,
        reason: fields.reason,
    });
    s.active = Some(s.records.len() - 1);
}

/// Shared by inline (matchup line) and standalone player lines:
/// name, status, then the rest joined as the reason.
fn extract_player(tokens: &[&str]) -> Option<PlayerFields> {
    let [name, status, reason @ ..] = tokens else {
        return None;
    };
    Some(PlayerFields {
        name: name.trim().to_string(),
        status: status.trim().to_string(),
        reason: reason.join(" ").trim().to_string(),
    })
}

/// Append text to the active record's reason; dropped if nothing is active.
fn continue_reason(s: &mut ParseState, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    let Some(record) = s.active.and_then(|ix| s.records.get_mut(ix)) else {
        trace!(text, "no active record, line dropped");
        return;
    };
    if !record.reason.is_empty() {
        record.reason.push(' ');
    }
    record.reason.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<InputLine> {
        texts.iter().map(|t| InputLine::new(0, *t)).collect()
    }

    fn record(matchup: &str, team: &str, name: &str, status: &str, reason: &str) -> Record {
        Record {
            date: "01/01/2025".to_string(),
            matchup: matchup.to_string(),
            team: team.to_string(),
            player_name: name.to_string(),
            status: status.to_string(),
            reason: reason.to_string(),
        }
    }

    #[test]
    fn dated_matchup_then_team_then_player() {
        let input = lines(&["01/01/2025 10:00(ET) BOS@NYK", "BOS", "Smith,John Out Back"]);
        let records = parse(&input, "01/01/2025");
        assert_eq!(records, vec![record("BOS@NYK", "BOS", "Smith,John", "Out", "Back")]);
    }

    #[test]
    fn continuation_extends_reason() {
        let input = lines(&[
            "01/01/2025 10:00(ET) BOS@NYK",
            "BOS",
            "Smith,John Out Back",
            "spasm",
        ]);
        let records = parse(&input, "01/01/2025");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].reason, "Back spasm");
    }

    #[test]
    fn other_date_stops_immediately() {
        let input = lines(&[
            "01/02/2025 09:00(ET) BOS@NYK BOS Smith,John Out Back",
            "Jones,Mike Out Knee",
        ]);
        assert!(parse(&input, "01/01/2025").is_empty());
    }

    #[test]
    fn player_without_status_and_nothing_active() {
        assert!(parse(&lines(&["Jones,Mike"]), "01/01/2025").is_empty());

        let input = lines(&["BOS@NYK BOS", "Jones,Mike", "Smith,John Out Back"]);
        let records = parse(&input, "01/01/2025");
        // The short line swallows the next one as a continuation; with no
        // active record it is dropped.
        assert!(records.is_empty());
    }

    #[test]
    fn player_without_status_forces_continuation() {
        let input = lines(&[
            "BOS@NYK BOS Smith,John Out Injury/Illness",
            "Jones,Mike",
            "Lee,Ann Out",
            "Brown,Jaylen Questionable Knee",
        ]);
        let records = parse(&input, "01/01/2025");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].reason, "Injury/Illness Lee,Ann Out");
        assert_eq!(records[1].player_name, "Brown,Jaylen");
    }

    #[test]
    fn matchup_line_wins_over_pending_continuation() {
        let input = lines(&[
            "BOS@NYK BOS Smith,John Out Back",
            "Jones,Mike",
            "LAL@DEN LAL James,LeBron Out Foot",
        ]);
        let records = parse(&input, "01/01/2025");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].reason, "Back");
        assert_eq!(records[1], record("LAL@DEN", "LAL", "James,LeBron", "Out", "Foot"));
    }

    #[test]
    fn records_after_stop_are_never_emitted() {
        let input = lines(&[
            "01/01/2025 10:00(ET) BOS@NYK BOS Smith,John Out Back",
            "Jones,Mike Probable Rest",
            "01/02/2025 10:00(ET) MIA@ORL MIA Butler,Jimmy Out Suspension",
            "01/01/2025 10:00(ET) BOS@NYK BOS Late,Entry Out Back",
        ]);
        let records = parse(&input, "01/01/2025");
        let names: Vec<&str> = records.iter().map(|r| r.player_name.as_str()).collect();
        assert_eq!(names, vec!["Smith,John", "Jones,Mike"]);
    }

    #[test]
    fn context_is_taken_at_read_time() {
        let input = lines(&[
            "BOS@NYK BOS Smith,John Out Back",
            "NYK Hart,Josh Probable Rest",
            "Brunson,Jalen Available",
            "LAL@DEN LAL James,LeBron Out Foot",
        ]);
        let records = parse(&input, "01/01/2025");
        assert_eq!(
            records,
            vec![
                record("BOS@NYK", "BOS", "Smith,John", "Out", "Back"),
                record("BOS@NYK", "NYK", "Hart,Josh", "Probable", "Rest"),
                record("BOS@NYK", "NYK", "Brunson,Jalen", "Available", ""),
                record("LAL@DEN", "LAL", "James,LeBron", "Out", "Foot"),
            ]
        );
    }

    #[test]
    fn new_context_ends_continuation() {
        let input = lines(&["BOS@NYK BOS Smith,John Out Back", "NYK", "spasm"]);
        let records = parse(&input, "01/01/2025");
        assert_eq!(records[0].reason, "Back");
    }

    #[test]
    fn continuation_onto_empty_reason_has_no_leading_space() {
        let input = lines(&["BOS@NYK BOS Smith,John Out", "  Back   spasm "]);
        let records = parse(&input, "01/01/2025");
        assert_eq!(records[0].reason, "Back   spasm");
    }

    #[test]
    fn player_before_any_team_is_dropped() {
        let input = lines(&["BOS@NYK", "Smith,John Out Back", "BOS", "Jones,Mike Out Knee"]);
        let records = parse(&input, "01/01/2025");
        assert_eq!(records, vec![record("BOS@NYK", "BOS", "Jones,Mike", "Out", "Knee")]);
    }

    #[test]
    fn team_change_before_any_team_is_dropped() {
        let input = lines(&["BOS@NYK", "BOS Smith,John Out Back"]);
        assert!(parse(&input, "01/01/2025").is_empty());

        let input = lines(&["BOS@NYK", "BOS Smith,John Out Back", "NYK Hart,Josh Probable Rest"]);
        assert!(parse(&input, "01/01/2025").is_empty());

        let input = lines(&["BOS@NYK", "BOS", "NYK Hart,Josh Probable Rest"]);
        let records = parse(&input, "01/01/2025");
        assert_eq!(records, vec![record("BOS@NYK", "NYK", "Hart,Josh", "Probable", "Rest")]);
    }

    #[test]
    fn lines_before_first_matchup_are_ignored() {
        let input = lines(&[
            "Injury Report: 01/01/2025 05:30 PM",
            "Game Date Game Time Matchup Team Player Name Current Status Reason",
            "01/01/2025 10:00(ET) BOS@NYK BOS Smith,John Out Back",
        ]);
        let records = parse(&input, "01/01/2025");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].reason, "Back");
    }

    #[test]
    fn same_input_same_output() {
        let input = lines(&[
            "01/01/2025 10:00(ET) BOS@NYK BOS Smith,John Out Back",
            "spasm",
            "NYK Hart,Josh Probable Rest",
        ]);
        assert_eq!(parse(&input, "01/01/2025"), parse(&input, "01/01/2025"));
    }

    #[test]
    fn empty_input() {
        assert!(parse(&[], "01/01/2025").is_empty());
    }

    #[test]
    fn extract_player_fields() {
        assert_eq!(
            extract_player(&["Smith,John", "Out", "Lower", "Back"]),
            Some(PlayerFields {
                name: "Smith,John".to_string(),
                status: "Out".to_string(),
                reason: "Lower Back".to_string(),
            })
        );
        assert_eq!(extract_player(&["Smith,John"]), None);
        assert_eq!(extract_player(&[]), None);
    }
}
