//! Line classification — resolves one line of report text into a [`LineKind`].
//!
//! Classification is purely shape-based; the only context it needs is the
//! current matchup, so a bare team code can be told apart from a one-word
//! reason continuation.

use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

// "01/15/2025 07:00(ET)" opening a dated section
static RE_DATED_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}/\d{2}/\d{4})[[:space:]]+\d{1,2}:\d{2}\([A-Z]{2,4}\)(?:[[:space:]]+|$)")
        .unwrap()
});

// "07:00(ET)" game time in front of a matchup
static RE_GAME_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}\([A-Z]{2,4}\)[[:space:]]+").unwrap());

static RE_MATCHUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@[:space:]]+@[^@[:space:]]+$").unwrap());

// "Lastname,Firstname" — text on both sides of the first comma
static RE_PLAYER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^,[:space:]]+,[^[:space:]]+$").unwrap());

// -- Line kinds ---------------------------------------------------------------

/// What a single line of report text means to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Nothing but whitespace.
    Blank,
    /// Leading `MM/DD/YYYY H:MM(ET)`; `rest` is the text after the marker.
    DatedSection { date: &'a str, rest: &'a str },
    /// `AAA@BBB [TEAM]` with nothing recognisable after the team.
    Matchup {
        matchup: &'a str,
        team: Option<&'a str>,
    },
    /// `AAA@BBB TEAM Last,First STATUS [REASON...]`
    MatchupWithPlayer {
        matchup: &'a str,
        team: &'a str,
        player: Vec<&'a str>,
    },
    /// A bare team code belonging to the current matchup.
    Team(&'a str),
    /// `TEAM Last,First STATUS [REASON...]`
    TeamChange { team: &'a str, player: Vec<&'a str> },
    /// `Last,First STATUS [REASON...]`
    Player(Vec<&'a str>),
    /// Anything else; the trimmed text.
    Continuation(&'a str),
}

/// Classify a full line, checking for a dated-section marker first.
pub fn classify<'a>(line: &'a str, matchup: Option<&str>) -> LineKind<'a> {
    let line = line.trim();
    if let Some(caps) = RE_DATED_SECTION.captures(line) {
        let date = caps.get(1).map_or("", |m| m.as_str());
        let end = caps.get(0).map_or(line.len(), |m| m.end());
        return LineKind::DatedSection {
            date,
            rest: &line[end..],
        };
    }
    classify_body(line, matchup)
}

/// Classify text that is known not to open a dated section (or whose marker
/// has already been stripped).
pub fn classify_body<'a>(text: &'a str, matchup: Option<&str>) -> LineKind<'a> {
    let text = strip_game_time(text.trim());
    let tokens: Vec<&'a str> = text.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return LineKind::Blank;
    };

    if is_matchup(first) {
        return match tokens.get(1) {
            Some(&team) if tokens.get(2).is_some_and(|t| is_player_id(t)) => {
                LineKind::MatchupWithPlayer {
                    matchup: first,
                    team,
                    player: tokens[2..].to_vec(),
                }
            }
            team => LineKind::Matchup {
                matchup: first,
                team: team.copied(),
            },
        };
    }

    // Team and player lines only mean something inside a matchup
    if let Some(current) = matchup {
        if tokens.len() == 1 && matchup_teams(current).contains(&first) {
            return LineKind::Team(first);
        }
        if !first.contains(',') && tokens.get(1).is_some_and(|t| is_player_id(t)) {
            return LineKind::TeamChange {
                team: first,
                player: tokens[1..].to_vec(),
            };
        }
        if is_player_id(first) {
            return LineKind::Player(tokens);
        }
    }

    LineKind::Continuation(text)
}

/// True for a matchup token such as "BOS@NYK".
pub fn is_matchup(token: &str) -> bool {
    RE_MATCHUP.is_match(token)
}

/// True for a player identifier token such as "Smith,John".
pub fn is_player_id(token: &str) -> bool {
    RE_PLAYER_ID.is_match(token)
}

/// The two team codes of a matchup token. Empty if it has no separator.
pub fn matchup_teams(matchup: &str) -> Vec<&str> {
    match matchup.split_once('@') {
        Some((away, home)) => vec![away, home],
        None => Vec::new(),
    }
}

/// Drop a leading game time, but only when a matchup follows it.
fn strip_game_time(text: &str) -> &str {
    let Some(m) = RE_GAME_TIME.find(text) else {
        return text;
    };
    let rest = &text[m.end()..];
    match rest.split_whitespace().next() {
        Some(token) if is_matchup(token) => rest,
        _ => text,
    }
}
