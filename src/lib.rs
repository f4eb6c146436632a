//! injury-report — recover per-player records from extracted injury report text.
//!
//! The report is a paginated document whose text has already been extracted
//! line by line. [`parser::parse`] walks those lines once, tracking the current
//! matchup and team, and emits a [`model::Record`] for every player entry in
//! the section dated on the cutoff day. [`render`] turns the records into CSV,
//! TSV, JSON or a Markdown table.

pub mod logging;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;
