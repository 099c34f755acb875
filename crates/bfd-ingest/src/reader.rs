//! Tab-separated field-values reader.
//!
//! The configuration is a spreadsheet exported as TSV: a header row, a
//! `field` column naming the output field, and one column per export
//! category holding that category's cell expression.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bfd_model::{ConfigRow, ExportCategory};
use csv::{ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

/// Header of the column naming the target field.
pub const FIELD_COLUMN: &str = "field";

/// Read every configuration row from a TSV file.
pub fn read_config_rows(path: &Path) -> Result<Vec<ConfigRow>> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    read_config_rows_from_reader(BufReader::new(file), path)
}

/// Read configuration rows from any reader; `source` is only used in errors.
pub fn read_config_rows_from_reader<R: Read>(
    mut reader: R,
    source: &Path,
) -> Result<Vec<ConfigRow>> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| IngestError::FileRead {
            path: source.to_path_buf(),
            source: e,
        })?;
    let lines = LineIndex::new(&content);

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| IngestError::csv(source, &e))?
        .clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::EmptyConfig {
            path: source.to_path_buf(),
        });
    }

    let layout = ColumnLayout::from_headers(&headers, source)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(source, &e))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let line_number = record
            .position()
            .map_or(rows.len() + 2, |pos| lines.line_at(pos.byte() as usize));
        rows.push(layout.bind(&record, line_number));
    }

    tracing::debug!(
        path = %source.display(),
        rows = rows.len(),
        "read field-values configuration"
    );
    Ok(rows)
}

/// Maps byte offsets to 1-based physical lines.
///
/// A record's reported position is where the parser resumed, which is before
/// any blank lines it skipped, so those are stepped over first.
struct LineIndex<'a> {
    text: &'a [u8],
    newlines: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text: text.as_bytes(),
            newlines: text.match_indices('\n').map(|(idx, _)| idx).collect(),
        }
    }

    fn line_at(&self, offset: usize) -> usize {
        let mut start = offset.min(self.text.len());
        while start < self.text.len() && matches!(self.text[start], b'\n' | b'\r') {
            start += 1;
        }
        self.newlines.partition_point(|&nl| nl < start) + 1
    }
}

/// Column positions of the recognised headers.
struct ColumnLayout {
    field: usize,
    categories: [usize; ExportCategory::COUNT],
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord, source: &Path) -> Result<Self> {
        let field =
            header_index(headers, FIELD_COLUMN).ok_or_else(|| missing(FIELD_COLUMN, source))?;
        let mut categories = [0; ExportCategory::COUNT];
        for category in ExportCategory::ALL {
            let column = category.column_name();
            categories[category.index()] =
                header_index(headers, column).ok_or_else(|| missing(column, source))?;
        }
        Ok(Self { field, categories })
    }

    fn bind(&self, record: &StringRecord, line_number: usize) -> ConfigRow {
        let mut row = ConfigRow::new(line_number, cell(record, self.field).trim());
        for category in ExportCategory::ALL {
            row = row.with_cell(category, cell(record, self.categories[category.index()]));
        }
        row
    }
}

fn header_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
}

/// Cell text with leading whitespace removed; short rows read as empty.
fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("").trim_start()
}

fn missing(column: &str, source: &Path) -> IngestError {
    IngestError::MissingColumn {
        column: column.to_string(),
        path: source.to_path_buf(),
    }
}
