//! Reference table loading from the semicolon-delimited `dcs.csv`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use rpx_model::{ReferenceRecord, ReferenceTable};

use crate::error::{IngestError, Result};

/// Field delimiter of the reference file.
pub const REFERENCE_DELIMITER: u8 = b';';

/// Load the reference table from `path`.
///
/// The file has no header row and exactly five columns per row. Any malformed
/// row fails the whole load. Later rows replace earlier rows with the same code.
pub fn load_reference_table(path: &Path) -> Result<ReferenceTable> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    read_reference_table(file, path)
}

/// Parse reference rows from any reader. `path` is only used for diagnostics.
pub fn read_reference_table<R: Read>(mut reader: R, path: &Path) -> Result<ReferenceTable> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|e| IngestError::io(path, e))?;
    if let Some((line, message)) = find_quote_error(&content, REFERENCE_DELIMITER) {
        return Err(IngestError::ReferenceRow {
            path: path.to_path_buf(),
            line,
            message: message.to_string(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(REFERENCE_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_slice());

    let mut table = ReferenceTable::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| IngestError::ReferenceRow {
            path: path.to_path_buf(),
            line: e.position().map_or(0, csv::Position::line),
            message: e.to_string(),
        })?;
        let line = row.position().map_or(index as u64 + 1, csv::Position::line);

        if row.len() != ReferenceRecord::COLUMN_COUNT {
            return Err(IngestError::ReferenceRow {
                path: path.to_path_buf(),
                line,
                message: format!(
                    "expected {} fields, found {}",
                    ReferenceRecord::COLUMN_COUNT,
                    row.len()
                ),
            });
        }

        let field = |idx: usize| row.get(idx).unwrap_or_default().to_string();
        let mut code = field(0);
        if index == 0 {
            code = code.trim_start_matches('\u{feff}').to_string();
        }
        let record = ReferenceRecord {
            code,
            department_id: field(1),
            department_description: field(2),
            class_id: field(3),
            class_description: field(4),
        };

        info!(
            code = %record.code,
            department = %record.department_description,
            class = %record.class_description,
            "reference row"
        );
        if let Some(previous) = table.insert(record) {
            debug!(
                code = %previous.code,
                line,
                "duplicate reference code, later row wins"
            );
        }
    }

    Ok(table)
}

/// Find the first quote the `csv` reader would silently accept.
///
/// A `"` is only valid as the first byte of a field, as an escaped `""` pair
/// inside a quoted field, or as the closing quote directly before a delimiter
/// or line end. Returns the 1-based line and a description.
fn find_quote_error(content: &[u8], delimiter: u8) -> Option<(u64, &'static str)> {
    let mut line = 1;
    let mut field_start = true;
    let mut in_quotes = false;
    let mut after_close = false;
    let mut bytes = content.iter().copied().peekable();

    while let Some(byte) = bytes.next() {
        if in_quotes {
            if byte == b'"' {
                if bytes.peek() == Some(&b'"') {
                    bytes.next();
                } else {
                    in_quotes = false;
                    after_close = true;
                }
            } else if byte == b'\n' {
                line += 1;
            }
            continue;
        }
        if after_close {
            after_close = false;
            if byte != delimiter && byte != b'\n' && byte != b'\r' {
                return Some((line, "extraneous or missing \" in quoted field"));
            }
        }
        match byte {
            b'"' if field_start => {
                in_quotes = true;
                field_start = false;
            }
            b'"' => return Some((line, "bare \" in non-quoted field")),
            b'\n' => {
                line += 1;
                field_start = true;
            }
            b if b == delimiter => field_start = true,
            _ => field_start = false,
        }
    }

    in_quotes.then_some((line, "extraneous or missing \" in quoted field"))
}
