//! GitHub-flavored markdown table renderer.

use crate::model::Record;
use crate::render::{RenderError, Renderer};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, records: &[Record]) -> Result<String, RenderError> {
        let mut output = String::new();

        output.push_str(&table_row(Record::HEADERS.iter().copied()));
        output.push_str(&table_row(Record::HEADERS.iter().map(|_| "---")));

        for record in records {
            output.push_str(&table_row(record.fields().into_iter()));
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn table_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells: Vec<String> = cells.map(escape_cell).collect();
    format!("| {} |\n", cells.join(" | "))
}

/// Escape pipes so they don't split the cell.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_with_header() {
        let records = vec![Record {
            date: "01/01/2025".to_string(),
            matchup: "BOS@NYK".to_string(),
            team: "BOS".to_string(),
            player_name: "Smith,John".to_string(),
            status: "Out".to_string(),
            reason: "G League | Two-Way".to_string(),
        }];
        let out = MarkdownRenderer.render(&records).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "| date | matchup | team | playerName | status | reason |");
        assert_eq!(lines[1], "| --- | --- | --- | --- | --- | --- |");
        assert_eq!(
            lines[2],
            "| 01/01/2025 | BOS@NYK | BOS | Smith,John | Out | G League \\| Two-Way |"
        );
    }

    #[test]
    fn empty_reason_cell() {
        let records = vec![Record {
            player_name: "Hart,Josh".to_string(),
            ..Record::default()
        }];
        let out = MarkdownRenderer.render(&records).unwrap();
        assert!(out.ends_with("|  |  |  | Hart,Josh |  |  |\n"));
    }
}
