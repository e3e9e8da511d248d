// ---------------------------------------------------------------------------
// PointTable – the parsed body of a PTS file
// ---------------------------------------------------------------------------

/// Fewest fields a row may carry: X, Y, Z.
pub const MIN_WIDTH: usize = 3;

/// Field index holding a stored intensity, when the rows are wide enough.
pub const INTENSITY_FIELD: usize = 3;

/// Rows of numeric fields, all of the same width, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PointTable {
    width: usize,
    values: Vec<f64>,
}

impl PointTable {
    /// Build a table from row-major values. Returns `None` when `width` is
    /// below [`MIN_WIDTH`] or `values` is not a whole number of rows.
    #[cfg(test)]
    pub(crate) fn from_row_major(width: usize, values: Vec<f64>) -> Option<Self> {
        if width < MIN_WIDTH || values.len() % width != 0 {
            return None;
        }
        Some(PointTable { width, values })
    }

    /// Loader-side constructor; the caller has already checked the width.
    pub(crate) fn from_parsed_rows(width: usize, values: Vec<f64>) -> Self {
        debug_assert!(width >= MIN_WIDTH && values.len() % width == 0);
        PointTable { width, values }
    }

    /// Number of fields per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (points).
    pub fn len(&self) -> usize {
        self.values.len() / self.width
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether field 3 carries a stored intensity.
    pub fn has_intensity(&self) -> bool {
        self.width > INTENSITY_FIELD
    }

    /// Row `i`, or `None` past the end.
    #[cfg(test)]
    pub(crate) fn row(&self, i: usize) -> Option<&[f64]> {
        let start = i.checked_mul(self.width)?;
        self.values.get(start..start + self.width)
    }

    /// All rows in file order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.width)
    }

    /// X/Y/Z of every row.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = [f64; 3]> + '_ {
        self.rows().map(|r| [r[0], r[1], r[2]])
    }
}
