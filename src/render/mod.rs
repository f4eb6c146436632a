//! Renderer module — trait-based format dispatch.

pub mod delimited;
pub mod json;
pub mod markdown;

use crate::model::Record;
use thiserror::Error;

/// Errors raised while turning records into output text.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown format: {0}. Use csv, tsv, json, or markdown")]
    UnknownFormat(String),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Trait for rendering parsed records into a specific output format.
pub trait Renderer {
    fn render(&self, records: &[Record]) -> Result<String, RenderError>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
///
/// `include_header` controls the header row of tabular formats; JSON has
/// no header and Markdown tables always need one.
pub fn create_renderer(format: &str, include_header: bool) -> Result<Box<dyn Renderer>, RenderError> {
    match format {
        "csv" => Ok(Box::new(delimited::DelimitedRenderer::csv(include_header))),
        "tsv" => Ok(Box::new(delimited::DelimitedRenderer::tsv(include_header))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        _ => Err(RenderError::UnknownFormat(format.to_string())),
    }
}
