use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use ndarray::array;

use stainlab_core::consts::{
    COLUMN_AVERAGE_INTENSITY, COLUMN_IMAGE_NAME, COLUMN_NEGATIVE_PERCENT,
    COLUMN_POSITIVE_PERCENT, COLUMN_TOTAL_PIXELS,
};
use stainlab_core::error::StainlabError;
use stainlab_core::io::export::write_xlsx;
use stainlab_core::session::AnalyzerSession;
use stainlab_core::stats::{binarize, binary_record, intensity_record, StatRecord};

mod common;

/// All rows of the first worksheet.
fn read_rows(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    range.rows().map(|row| row.to_vec()).collect()
}

fn text(cell: &Data) -> &str {
    match cell {
        Data::String(s) => s,
        other => panic!("expected a string cell, got {other:?}"),
    }
}

fn number(cell: &Data) -> f64 {
    match cell {
        Data::Float(v) => *v,
        Data::Int(v) => *v as f64,
        other => panic!("expected a numeric cell, got {other:?}"),
    }
}

#[test]
fn test_write_binary_records() {
    let a = binary_record("a.png", &binarize(&array![[0u8, 255]], 127)).unwrap();
    let b = binary_record("b.png", &binarize(&array![[255u8, 255]], 127)).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.xlsx");
    write_xlsx(&[a, b], &path).unwrap();

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 3);
    let header: Vec<&str> = rows[0].iter().map(text).collect();
    assert_eq!(
        header,
        [
            COLUMN_IMAGE_NAME,
            COLUMN_TOTAL_PIXELS,
            COLUMN_POSITIVE_PERCENT,
            COLUMN_NEGATIVE_PERCENT
        ]
    );

    assert_eq!(text(&rows[1][0]), "a.png");
    assert_eq!(number(&rows[1][1]), 2.0);
    assert_eq!(number(&rows[1][2]), 50.0);
    assert_eq!(number(&rows[1][3]), 50.0);

    assert_eq!(text(&rows[2][0]), "b.png");
    assert_eq!(number(&rows[2][1]), 2.0);
    assert_eq!(number(&rows[2][2]), 100.0);
    assert_eq!(number(&rows[2][3]), 0.0);
}

#[test]
fn test_write_intensity_records() {
    let records: Vec<StatRecord> = (0..3)
        .map(|i| intensity_record(&format!("img{i}.tif"), &array![[i as u8 * 10]]).unwrap())
        .collect();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intensity.xlsx");
    write_xlsx(&records, &path).unwrap();

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 4);
    let header: Vec<&str> = rows[0].iter().map(text).collect();
    assert_eq!(
        header,
        [COLUMN_IMAGE_NAME, COLUMN_TOTAL_PIXELS, COLUMN_AVERAGE_INTENSITY]
    );
    for (i, row) in rows[1..].iter().enumerate() {
        assert_eq!(text(&row[0]), format!("img{i}.tif"));
        assert_eq!(number(&row[1]), 1.0);
        assert_eq!(number(&row[2]), i as f64 * 10.0);
    }
}

#[test]
fn test_custom_metric_columns_follow_first_record() {
    let records = vec![
        StatRecord::new("x.png", 9).with_metric("beta", 1.5).with_metric("alpha", 2.5),
        StatRecord::new("y.png", 4).with_metric("beta", 3.0).with_metric("alpha", 4.0),
    ];
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.xlsx");
    write_xlsx(&records, &path).unwrap();

    let rows = read_rows(&path);
    let header: Vec<&str> = rows[0].iter().map(text).collect();
    assert_eq!(header, [COLUMN_IMAGE_NAME, COLUMN_TOTAL_PIXELS, "beta", "alpha"]);
    assert_eq!(number(&rows[2][2]), 3.0);
    assert_eq!(number(&rows[2][3]), 4.0);
}

#[test]
fn test_session_export_writes_slot_order() {
    let mut session = AnalyzerSession::new(3);
    session
        .load_slot(2, "third.png", common::uniform_gray(2, 2, 0))
        .unwrap();
    session
        .load_slot(0, "first.png", common::uniform_gray(3, 1, 255))
        .unwrap();
    session.run_binary(127).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.xlsx");
    session.export(&path).unwrap();

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 3);
    assert_eq!(text(&rows[1][0]), "first.png");
    assert_eq!(number(&rows[1][1]), 3.0);
    assert_eq!(number(&rows[1][2]), 100.0);
    assert_eq!(text(&rows[2][0]), "third.png");
    assert_eq!(number(&rows[2][1]), 4.0);
    assert_eq!(number(&rows[2][3]), 100.0);
}

#[test]
fn test_session_export_without_run_fails() {
    let mut session = AnalyzerSession::new(1);
    session
        .load_slot(0, "a.png", common::uniform_gray(1, 1, 0))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("none.xlsx");
    assert!(matches!(session.export(&path), Err(StainlabError::NoStatistics)));
    assert!(!path.exists());
}

#[test]
fn test_empty_records_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.xlsx");

    let err = write_xlsx(&[], &path).unwrap_err();
    assert!(matches!(err, StainlabError::NoStatistics));
    assert!(!path.exists());
}

#[test]
fn test_mixed_columns_rejected_before_writing() {
    let binary = binary_record("a.png", &binarize(&array![[0u8, 255]], 127)).unwrap();
    let intensity = intensity_record("b.png", &array![[5u8]]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.xlsx");

    let err = write_xlsx(&[binary, intensity], &path).unwrap_err();
    assert!(matches!(err, StainlabError::WriteFailed { .. }));
    assert!(!path.exists());
}

#[test]
fn test_write_to_missing_directory_fails() {
    let record = StatRecord::new("x", 1).with_metric("m", 1.0);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("out.xlsx");

    assert!(matches!(
        write_xlsx(&[record], &path),
        Err(StainlabError::WriteFailed { .. })
    ));
}
