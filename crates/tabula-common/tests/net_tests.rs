//! Integration tests for source loading.

use std::path::PathBuf;

use tabula_common::net::is_remote;
use tabula_common::{FetchError, load_source};

/// Helper to write a fixture file into the system temp directory
fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tabula-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("fixture should be writable");
    path
}

#[test]
fn test_is_remote() {
    assert!(is_remote("https://example.com/page"));
    assert!(is_remote("http://example.com"));
    assert!(!is_remote("page.html"));
    assert!(!is_remote("/tmp/http-dump.html"));
    assert!(!is_remote("ftp://example.com/page"));
}

#[test]
fn test_load_local_file() {
    let path = write_fixture("local.html", "<table><tr><th>A</th></tr></table>");
    let text = load_source(path.to_str().expect("temp path is UTF-8")).expect("file loads");
    assert_eq!(text, "<table><tr><th>A</th></tr></table>");
    std::fs::remove_file(path).expect("fixture removable");
}

#[test]
fn test_missing_file_is_reported() {
    let err = load_source("definitely/not/here.html").expect_err("missing file must fail");
    match &err {
        FetchError::File { path, .. } => {
            assert_eq!(path, &PathBuf::from("definitely/not/here.html"));
        }
        other => panic!("Expected File error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("failed to read definitely/not/here.html"));
}
