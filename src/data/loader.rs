use std::path::Path;

use super::error::{LoadError, ParseError};
use super::model::{PointTable, MIN_WIDTH};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a PTS file from disk.
///
/// Layout:
/// * line 1 – header, skipped without inspection
/// * then one point per line: `X Y Z` or `X Y Z I` (extra columns are kept)
///
/// Fields are whitespace separated. Text after `#` is a comment, and lines
/// left empty are ignored.
pub fn load_pts(path: &Path) -> Result<PointTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_pts(&text)?;
    log::info!(
        "Loaded {} points ({} fields per row) from {}",
        table.len(),
        table.width(),
        path.display()
    );
    Ok(table)
}

/// Parse the text of a PTS file. Every data row must have the width of the
/// first one.
pub fn parse_pts(text: &str) -> Result<PointTable, LoadError> {
    let mut width: Option<usize> = None;
    let mut values = Vec::new();

    for (idx, raw) in split_lines(text).enumerate().skip(1) {
        let line = idx + 1;
        let content = raw.split_once('#').map_or(raw, |(data, _)| data);

        let start = values.len();
        for token in content.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| LoadError::Parse {
                line,
                error: ParseError::NotNumeric(token.to_string()),
            })?;
            values.push(value);
        }

        let found = values.len() - start;
        if found == 0 {
            continue;
        }

        match width {
            None if found < MIN_WIDTH => {
                return Err(LoadError::Parse {
                    line,
                    error: ParseError::TooFewFields(found),
                });
            }
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(LoadError::Parse {
                    line,
                    error: ParseError::InconsistentWidth { expected, found },
                });
            }
            Some(_) => {}
        }
    }

    let width = width.ok_or(LoadError::NoData)?;
    Ok(PointTable::from_parsed_rows(width, values))
}

/// Lines ended by `\n`, `\r\n`, or a bare `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().flat_map(|line| line.split('\r'))
}
