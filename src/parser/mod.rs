//! Parser module — page/line input handling and the report state machine.

pub mod line;
pub mod report;

use crate::model::{InputLine, Record};

pub use report::parse;

/// Page break emitted by text extractors between pages.
pub const PAGE_BREAK: char = '\x0c';

/// Flatten pages of lines into document-ordered input lines.
pub fn lines_from_pages<S: AsRef<str>>(pages: &[Vec<S>]) -> Vec<InputLine> {
    pages
        .iter()
        .enumerate()
        .flat_map(|(page, lines)| {
            lines
                .iter()
                .map(move |line| InputLine::new(page, line.as_ref()))
        })
        .collect()
}

/// Split extracted text into input lines. Pages are separated by form feeds.
pub fn lines_from_text(text: &str) -> Vec<InputLine> {
    text.split(PAGE_BREAK)
        .enumerate()
        .flat_map(|(page, body)| body.lines().map(move |line| InputLine::new(page, line)))
        .collect()
}

/// Parse pages of already-extracted lines.
pub fn parse_pages<S: AsRef<str>>(pages: &[Vec<S>], cutoff_date: &str) -> Vec<Record> {
    parse(&lines_from_pages(pages), cutoff_date)
}

/// Parse extracted report text (form-feed separated pages).
pub fn parse_text(text: &str, cutoff_date: &str) -> Vec<Record> {
    parse(&lines_from_text(text), cutoff_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_pages_keep_order() {
        let lines = lines_from_text("a\nb\x0cc\r\nd\n");
        let tagged: Vec<(usize, &str)> = lines.iter().map(|l| (l.page, l.text.as_str())).collect();
        assert_eq!(tagged, vec![(0, "a"), (0, "b"), (1, "c"), (1, "d")]);
    }

    #[test]
    fn pages_flatten_in_order() {
        let pages = vec![vec!["a", "b"], vec![], vec!["c"]];
        let lines = lines_from_pages(&pages);
        assert_eq!(lines, vec![
            InputLine::new(0, "a"),
            InputLine::new(0, "b"),
            InputLine::new(2, "c"),
        ]);
    }

    #[test]
    fn record_spans_page_break() {
        let pages = vec![
            vec!["01/01/2025 10:00(ET) BOS@NYK BOS Smith,John Out Injury/Illness - Lower"],
            vec!["Back; Spasms", "NYK Hart,Josh Probable Rest"],
        ];
        let records = parse_pages(&pages, "01/01/2025");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].reason, "Injury/Illness - Lower Back; Spasms");
        assert_eq!(records[1].team, "NYK");
    }

    #[test]
    fn stop_applies_across_pages() {
        let text = "01/01/2025 10:00(ET) BOS@NYK BOS Smith,John Out Back\n\
                    \x0c01/02/2025 10:00(ET) MIA@ORL MIA Butler,Jimmy Out Rest\n\
                    \x0cLAL@DEN LAL James,LeBron Out Foot\n";
        let records = parse_text(text, "01/01/2025");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].player_name, "Smith,John");
    }
}
