//! injury-report — turn extracted injury report text into tabular records.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `injury-report -d 01/15/2025 < report.txt`
//! - **file mode**: `injury-report -o out -f json reports/*.txt`

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use injury_report::{logging, parser, render, source};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "injury-report",
    about = "Parse extracted injury report text into per-player records"
)]
struct Cli {
    /// Input text files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Report date to keep, MM/DD/YYYY. Defaults to today (UTC).
    #[arg(short = 'd', long)]
    date: Option<String>,

    /// Output format: csv (default), tsv, json, markdown
    #[arg(short = 'f', long, default_value = "csv")]
    format: String,

    /// Omit the header row (csv/tsv)
    #[arg(long)]
    no_header: bool,

    /// Print candidate report URLs for the date and exit
    #[arg(long)]
    urls: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let date = resolve_date(cli.date.as_deref())?;

    if cli.urls {
        for url in source::report_urls(date) {
            println!("{}", url);
        }
        return Ok(());
    }

    let cutoff = source::cutoff_for(date);
    if cli.files.is_empty() {
        return stdin_mode(&cli, &cutoff);
    }

    file_mode(&cli, &cutoff)
}

fn resolve_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(text) => Ok(source::parse_cutoff(text)?),
        None => Ok(source::today()),
    }
}

/// stdin mode: read report text from stdin, write rendered records to stdout.
fn stdin_mode(cli: &Cli, cutoff: &str) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let records = parser::parse_text(&input, cutoff);
    info!(records = records.len(), cutoff, "parsed stdin");

    let renderer = render::create_renderer(&cli.format, !cli.no_header)?;
    print!("{}", renderer.render(&records)?);
    Ok(())
}

/// file mode: parse every input file, write one rendered file per input.
fn file_mode(cli: &Cli, cutoff: &str) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let renderer = render::create_renderer(&cli.format, !cli.no_header)?;
    let ext = renderer.file_extension();

    let input_files = expand_globs(&cli.files)?;
    let mut seen: HashMap<String, usize> = HashMap::new();

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let records = parser::parse_text(&content, cutoff);
        if records.is_empty() {
            warn!("no records for {} in {}", cutoff, path.display());
        }

        let out_path = resolve_output_path(output_dir, &derive_output_name(path), ext, &mut seen);
        fs::write(&out_path, renderer.render(&records)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!(records = records.len(), "wrote {}", out_path.display());
    }

    Ok(())
}

const TEXT_EXTENSION: &str = "txt";

/// Resolve file, directory and glob arguments into a sorted list of input
/// files. Directories contribute their `*.txt` entries, one level deep.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            files.extend(text_files_in(path)?);
        } else {
            let before = files.len();
            for entry in glob::glob(pattern)
                .with_context(|| format!("invalid glob pattern: {}", pattern))?
                .flatten()
            {
                if entry.is_file() {
                    files.push(entry);
                }
            }
            if files.len() == before {
                warn!(pattern = pattern.as_str(), "no files matched");
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn text_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    Ok(entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == TEXT_EXTENSION))
        .collect())
}

/// "reports/Injury-Report_2025-01-15_06PM.txt" → "Injury-Report_2025-01-15_06PM"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string())
}

/// Inputs from different directories may share a stem; later ones get
/// "<name> (N).<ext>" with N starting at 2.
fn resolve_output_path(
    dir: &Path,
    name: &str,
    ext: &str,
    seen: &mut HashMap<String, usize>,
) -> PathBuf {
    let count = seen.entry(name.to_string()).or_insert(0);
    let filename = if *count == 0 {
        format!("{name}.{ext}")
    } else {
        format!("{name} ({}).{ext}", *count + 1)
    };
    *count += 1;
    dir.join(filename)
}
