//! JSON renderer — array of record objects for tooling integration.

use crate::model::Record;
use crate::render::{RenderError, Renderer};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, records: &[Record]) -> Result<String, RenderError> {
        let mut out = serde_json::to_string_pretty(records)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
