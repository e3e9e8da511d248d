use super::model::{PointTable, INTENSITY_FIELD};

/// Per-point intensity: the stored field when the table has one, otherwise
/// the distance of the point from the origin.
pub fn intensity(table: &PointTable) -> Vec<f64> {
    if table.has_intensity() {
        table.rows().map(|r| r[INTENSITY_FIELD]).collect()
    } else {
        table
            .positions()
            .map(|[x, y, z]| (x * x + y * y + z * z).sqrt())
            .collect()
    }
}

/// Difference of each value from the one before it. The first entry has
/// nothing before it and is always zero, even for a non-finite first value.
pub fn changes(series: &[f64]) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }
    std::iter::once(0.0)
        .chain(series.windows(2).map(|w| w[1] - w[0]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table(width: usize, values: &[f64]) -> PointTable {
        PointTable::from_row_major(width, values.to_vec()).unwrap()
    }

    #[test]
    fn norm_for_xyz_rows() {
        let t = table(3, &[3.0, 4.0, 0.0, 1.0, 2.0, 2.0, -2.0, 0.0, 0.0]);
        let i = intensity(&t);
        assert_eq!(i.len(), 3);
        assert_relative_eq!(i[0], 5.0);
        assert_relative_eq!(i[1], 3.0);
        assert_relative_eq!(i[2], 2.0);
    }

    #[test]
    fn stored_column_is_used_verbatim() {
        let t = table(4, &[3.0, 4.0, 0.0, -0.125, 1.0, 1.0, 1.0, 1e9]);
        assert_eq!(intensity(&t), vec![-0.125, 1e9]);
    }

    #[test]
    fn first_change_is_zero() {
        assert_eq!(changes(&[2.5, 4.0, 1.0]), vec![0.0, 1.5, -3.0]);
        assert_eq!(changes(&[7.0]), vec![0.0]);
        assert!(changes(&[]).is_empty());
    }

    #[test]
    fn first_change_is_zero_for_non_finite_start() {
        let c = changes(&[f64::NAN, 2.0, 5.0]);
        assert_eq!(c[0], 0.0);
        assert!(c[1].is_nan());
        assert_eq!(c[2], 3.0);

        let c = changes(&[f64::INFINITY, 1.0]);
        assert_eq!(c[0], 0.0);
        assert_eq!(c[1], f64::NEG_INFINITY);

        let c = changes(&[f64::NEG_INFINITY]);
        assert_eq!(c, vec![0.0]);
    }

    #[test]
    fn stored_nan_intensity_still_starts_at_zero() {
        let t = table(4, &[0.0, 0.0, 0.0, f64::NAN, 0.0, 0.0, 0.0, 2.0]);
        let c = changes(&intensity(&t));
        assert_eq!(c.len(), 2);
        assert_eq!(c[0], 0.0);
    }

    #[test]
    fn changes_match_pairwise_differences() {
        let series = [0.3, -1.7, 2.2, 2.2, 10.0, -4.5];
        let c = changes(&series);
        assert_eq!(c.len(), series.len());
        assert_eq!(c[0], 0.0);
        for i in 1..series.len() {
            assert_relative_eq!(c[i], series[i] - series[i - 1]);
        }
    }
}
