use std::io::Write;

use approx::assert_relative_eq;
use pts_plotter::{changes, intensity, load_pts, LoadError, ParseError};
use tempfile::NamedTempFile;

fn pts(content: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{content}").unwrap();
    tmp.flush().unwrap();
    tmp
}

#[test]
fn xyz_file_derives_norm_and_changes() {
    let tmp = pts("X Y Z\n0 0 0\n1 0 0\n0 0 0\n");
    let table = load_pts(tmp.path()).unwrap();

    let i = intensity(&table);
    assert_eq!(i, vec![0.0, 1.0, 0.0]);
    assert_eq!(changes(&i), vec![0.0, 1.0, -1.0]);
}

#[test]
fn stored_intensity_wins_over_norm() {
    let tmp = pts("header\n0 0 0 5\n0 0 0 9\n");
    let table = load_pts(tmp.path()).unwrap();

    let i = intensity(&table);
    assert_eq!(i, vec![5.0, 9.0]);
    assert_eq!(changes(&i), vec![0.0, 4.0]);
}

#[test]
fn norm_matches_rows_for_larger_file() {
    let rows: Vec<[f64; 3]> = (0..50)
        .map(|k| {
            let t = k as f64 * 0.37;
            [t.cos() * 3.0, t.sin() * 2.0, t - 9.0]
        })
        .collect();
    let mut text = String::from("50\n");
    for [x, y, z] in &rows {
        text.push_str(&format!("{x} {y} {z}\n"));
    }
    let tmp = pts(&text);
    let table = load_pts(tmp.path()).unwrap();

    let i = intensity(&table);
    assert_eq!(i.len(), rows.len());
    for (value, [x, y, z]) in i.iter().zip(&rows) {
        assert_relative_eq!(*value, (x * x + y * y + z * z).sqrt(), epsilon = 1e-12);
    }

    let c = changes(&i);
    assert_eq!(c[0], 0.0);
    for k in 1..c.len() {
        assert_relative_eq!(c[k], i[k] - i[k - 1]);
    }
}

#[test]
fn ragged_rows_yield_no_table() {
    let tmp = pts("X Y Z I\n1 2 3 4\n1 2 3\n");
    match load_pts(tmp.path()) {
        Err(err @ LoadError::Parse { .. }) => {
            assert!(err.is_parse_error());
            assert!(matches!(
                err,
                LoadError::Parse {
                    line: 3,
                    error: ParseError::InconsistentWidth {
                        expected: 4,
                        found: 3
                    }
                }
            ));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn text_header_is_ignored() {
    let tmp = pts("Leica scan export, units=m, 2 points\n1.5 2.5 3.5\n-1 -2 -3\n");
    let table = load_pts(tmp.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.width(), 3);
}

#[test]
fn unreadable_path_is_a_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_pts(&dir.path().join("absent.pts")).unwrap_err();
    assert!(matches!(err, LoadError::FileAccess { .. }));
    assert!(!err.is_parse_error());
}
