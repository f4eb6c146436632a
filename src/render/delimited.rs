//! CSV / TSV renderer — one row per record, fixed column order.

use crate::model::Record;
use crate::render::{RenderError, Renderer};

pub struct DelimitedRenderer {
    delimiter: u8,
    extension: &'static str,
    include_header: bool,
}

impl DelimitedRenderer {
    pub fn csv(include_header: bool) -> Self {
        Self {
            delimiter: b',',
            extension: "csv",
            include_header,
        }
    }

    pub fn tsv(include_header: bool) -> Self {
        Self {
            delimiter: b'\t',
            extension: "tsv",
            include_header,
        }
    }
}

impl Renderer for DelimitedRenderer {
    fn render(&self, records: &[Record]) -> Result<String, RenderError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(csv::Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(Vec::new());

        if self.include_header {
            writer.write_record(Record::HEADERS)?;
        }
        for record in records {
            writer.serialize(record)?;
        }

        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }

    fn file_extension(&self) -> &str {
        self.extension
    }
}
