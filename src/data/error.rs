use std::path::PathBuf;

use thiserror::Error;

/// Why a data row was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("'{0}' is not a number")]
    NotNumeric(String),

    #[error("expected {expected} fields, found {found}")]
    InconsistentWidth { expected: usize, found: usize },

    #[error("expected at least 3 fields (X Y Z), found {0}")]
    TooFewFields(usize),
}

/// Failure to turn a PTS file into a point table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {error}")]
    Parse {
        /// 1-based line number in the file, header included.
        line: usize,
        #[source]
        error: ParseError,
    },

    #[error("no point rows after the header")]
    NoData,
}

impl LoadError {
    /// True for malformed content, false when the file could not be read.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, LoadError::Parse { .. } | LoadError::NoData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_line_and_reason() {
        let e = LoadError::Parse {
            line: 7,
            error: ParseError::InconsistentWidth {
                expected: 3,
                found: 4,
            },
        };
        assert_eq!(e.to_string(), "line 7: expected 3 fields, found 4");
        assert!(e.is_parse_error());
    }

    #[test]
    fn file_access_is_not_a_parse_error() {
        let e = LoadError::FileAccess {
            path: PathBuf::from("missing.pts"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(!e.is_parse_error());
        assert!(e.to_string().starts_with("cannot read missing.pts"));
    }
}
