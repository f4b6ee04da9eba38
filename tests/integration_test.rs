//! Integration tests for msl
//!
//! These tests load whole libraries through the public API.

use std::fs::{self, File};
use std::path::Path;

use msl::cas::hyphenate;
use msl::document::MslDocument;
use msl::models::Peak;
use tempfile::tempdir;

fn sample_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample.msl"))
}

/// Test loading a library file from disk
#[test]
fn test_open_sample_library() {
    let document = MslDocument::open(sample_path()).unwrap();

    let ids: Vec<i64> = document.iter().map(|r| r.compound_id()).collect();
    assert_eq!(ids, vec![1, 2, 4, 5]);

    let acetone = &document.records()[0];
    assert_eq!(acetone.cas_number(), Some("67-64-1"));
    assert_eq!(acetone.peaks_count(), 5);
    assert_eq!(acetone.peaks()[3], Peak::new(43, 999));
    assert_eq!(acetone.base_peak(), Some(&Peak::new(43, 999)));

    let benzene = &document.records()[1];
    assert_eq!(benzene.comment(), "aromatic\n retention confirmed on DB-5");
    assert_eq!(benzene.peaks().len(), 4);

    let heptadecane = &document.records()[3];
    assert_eq!(
        heptadecane.compound_name(),
        "Heptadecane, 2,6,10,14-tetramethyl-"
    );
    assert_eq!(heptadecane.cas_number(), None);
    assert_eq!(heptadecane.retention_index(), 1812.4);
    assert!(!heptadecane.peaks_count_matches());
}

/// Test that the truncated record is reported but does not fail the parse
#[test]
fn test_sample_library_summary() {
    let document = MslDocument::open(sample_path()).unwrap();
    let summary = document.summary();

    assert_eq!(summary.records, 4);
    assert_eq!(summary.total_peaks, 15);
    assert_eq!(summary.with_cas, 3);
    assert_eq!(summary.without_cas, 1);
    assert_eq!(summary.peak_count_mismatches, 1);
    assert_eq!(summary.skipped_fragments, 1);
}

/// Test the file, reader and string entry points agree
#[test]
fn test_entry_points_agree() {
    let text = fs::read_to_string(sample_path()).unwrap();

    let from_str = MslDocument::parse(&text);
    let from_file = MslDocument::open(sample_path()).unwrap();
    let from_reader = MslDocument::from_reader(File::open(sample_path()).unwrap()).unwrap();

    assert_eq!(from_str, from_file);
    assert_eq!(from_str, from_reader);
}

/// Test concatenated libraries parse into the concatenation of their records
#[test]
fn test_concatenated_libraries() {
    let text = fs::read_to_string(sample_path()).unwrap();
    let single = MslDocument::parse(&text);
    let doubled = MslDocument::parse(&format!("{}\n{}", text, text));

    assert_eq!(doubled.len(), 2 * single.len());
    assert_eq!(&doubled.records()[..single.len()], single.records());
    assert_eq!(&doubled.records()[single.len()..], single.records());
}

/// Test builder options on a temporary file
#[test]
fn test_builder_with_post_process() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library.msl");
    fs::copy(sample_path(), &path).unwrap();

    let document = MslDocument::builder()
        .parallel(true)
        .post_process(|doc| doc.retain(|r| r.retention_index() < 1000.0))
        .open(&path)
        .unwrap();

    let names: Vec<&str> = document.iter().map(|r| r.compound_name()).collect();
    assert_eq!(names, ["Acetone", "Benzene", "Toluene"]);
}

/// Test an empty file yields an empty document
#[test]
fn test_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.msl");
    File::create(&path).unwrap();

    let document = MslDocument::open(&path).unwrap();
    assert!(document.is_empty());
    assert_eq!(document.summary().records, 0);
}

/// Test CAS numbers in the sample round-trip through hyphenation
#[test]
fn test_sample_cas_numbers() {
    let document = MslDocument::open(sample_path()).unwrap();
    let cas: Vec<Option<&str>> = document.iter().map(|r| r.cas_number()).collect();

    assert_eq!(
        cas,
        vec![Some("67-64-1"), Some("71-43-2"), Some("108-88-3"), None]
    );
    assert_eq!(hyphenate(71432).as_deref(), Some("71-43-2"));
}
