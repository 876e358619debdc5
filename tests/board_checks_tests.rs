//! End-to-end checks of board files
use std::io::Write;
use std::path::PathBuf;

use skyscrapers_check::validation::{
    columns_valid, is_complete, left_to_right_check, rows_unique, rows_visible, LineRef,
};
use skyscrapers_check::{
    check_grid, check_skyscrapers, parse_grid, validate_grid, GridError, Markers, Side, Violation,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn check(name: &str) -> bool {
    check_skyscrapers(fixture(name), &Markers::default()).expect("read fixture")
}

#[test]
fn test_valid_board() {
    assert!(check("valid.txt"));
}

#[test]
fn test_blank_lines_are_skipped() {
    assert!(check("valid_with_blank_lines.txt"));
}

#[test]
fn test_row_duplicate_board() {
    assert!(!check("row_duplicate.txt"));
}

#[test]
fn test_unfinished_board() {
    assert!(!check("unfinished.txt"));
}

#[test]
fn test_unfinished_regardless_of_hints() {
    // Every hint is correct for the finished board; one cell is reopened per row
    let finished = [
        "***21**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
    ];
    for row in 1..6 {
        for column in 1..6 {
            let mut rows: Vec<String> = finished.iter().map(|r| r.to_string()).collect();
            rows[row].replace_range(column..column + 1, "?");
            let grid = parse_grid(&rows.join("\n"), &Markers::default()).unwrap();
            assert!(!check_grid(&grid), "row {row}, column {column}");
            assert!(!is_complete(&grid));
        }
    }
}

#[test]
fn test_hintless_column_is_not_checked() {
    // Columns 2 and 5 repeat heights but have no hint on either end
    let path = fixture("hintless_column.txt");
    let grid = skyscrapers_check::read_grid(&path, &Markers::default()).unwrap();

    let column: Vec<_> = grid
        .interior_column(2)
        .iter()
        .filter_map(|c| c.height())
        .collect();
    assert_eq!(column, vec![2, 3, 4, 4, 1]);

    assert!(rows_unique(&grid));
    assert!(rows_visible(&grid));
    assert!(columns_valid(&grid));
    assert!(check_skyscrapers(&path, &Markers::default()).unwrap());
}

#[test]
fn test_bottom_hinted_column_duplicate_board() {
    // Column 1 has only a bottom hint and repeats 5; rows stay distinct
    let path = fixture("bottom_hint_column_duplicate.txt");
    let grid = skyscrapers_check::read_grid(&path, &Markers::default()).unwrap();
    assert_eq!(grid.hint(Side::Top, 1), None);
    assert_eq!(grid.hint(Side::Bottom, 1), Some(2));
    assert!(rows_unique(&grid));
    assert!(rows_visible(&grid));

    assert_eq!(
        validate_grid(&grid).violation,
        Some(Violation::DuplicateHeight {
            line: LineRef::Column(1),
            height: 5
        })
    );
    assert!(!check_skyscrapers(&path, &Markers::default()).unwrap());
}

#[test]
fn test_reports_first_violation() {
    let grid = skyscrapers_check::read_grid(fixture("row_duplicate.txt"), &Markers::default())
        .unwrap();
    assert_eq!(
        validate_grid(&grid).violation,
        Some(Violation::DuplicateHeight {
            line: LineRef::Row(1),
            height: 5
        })
    );
}

#[test]
fn test_wrong_bottom_hint() {
    let content = "***21**\n412453*\n423145*\n*543215\n*35214*\n*41532*\n*2*2***\n";
    let grid = parse_grid(content, &Markers::default()).unwrap();
    assert_eq!(
        validate_grid(&grid).violation,
        Some(Violation::VisibilityMismatch {
            side: Side::Bottom,
            index: 3,
            hint: 2,
            visible: 1
        })
    );
}

#[test]
fn test_left_to_right_examples() {
    assert!(left_to_right_check("412453", 4));
    assert!(!left_to_right_check("452453", 5));
}

#[test]
fn test_custom_markers() {
    let markers = Markers {
        unfinished: '_',
        filler: '.',
    };
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"...21..\n412453.\n423145.\n.543215\n.35214.\n.41532.\n.2.1...\n")
        .expect("write board");
    assert!(check_skyscrapers(file.path(), &markers).unwrap());

    // The default filler is no longer part of the alphabet
    let err = check_skyscrapers(fixture("valid.txt"), &markers).unwrap_err();
    assert!(matches!(err, GridError::UnknownCell { row: 0, column: 1, ch: '*' }));
}

#[test]
fn test_ragged_board_is_a_fault() {
    let err = check_skyscrapers(fixture("ragged.txt"), &Markers::default()).unwrap_err();
    assert!(matches!(
        err,
        GridError::Ragged {
            row: 3,
            expected: 7,
            found: 5
        }
    ));
}

#[test]
fn test_missing_board_is_a_fault() {
    let err = check_skyscrapers(fixture("does_not_exist.txt"), &Markers::default()).unwrap_err();
    assert!(matches!(err, GridError::InputUnavailable { .. }));
}
