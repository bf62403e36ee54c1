//! Tests for recursive certificate discovery and scanning

use crypto_toolkit::scanner::{find_certificates, scan, NativeEndDate, ScanConfig};
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_finds_every_pem_exactly_once_regardless_of_depth() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();

    std::fs::create_dir_all(root.join("a/b/c")).unwrap();
    std::fs::write(root.join("top.pem"), "x").unwrap();
    std::fs::write(root.join("a/mid.pem"), "x").unwrap();
    std::fs::write(root.join("a/b/c/deep.pem"), "x").unwrap();
    std::fs::write(root.join("a/skipped.txt"), "x").unwrap();
    std::fs::write(root.join("a/b/also-skipped.der"), "x").unwrap();

    let found = find_certificates(root, ".pem").unwrap();

    assert_eq!(found.len(), 3, "each .pem visited exactly once: {:?}", found);
    assert!(found.iter().all(|p| p.to_string_lossy().ends_with(".pem")));
    assert!(found.contains(&root.join("top.pem")));
    assert!(found.contains(&root.join("a/mid.pem")));
    assert!(found.contains(&root.join("a/b/c/deep.pem")));
}

#[test]
fn test_non_matching_files_are_never_visited() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("cert.pem.bak"), "x").unwrap();
    std::fs::write(tmp.path().join("cert.crt"), "x").unwrap();

    let found = find_certificates(tmp.path(), ".pem").unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_empty_tree_yields_empty_list() {
    let tmp = tempfile::tempdir().unwrap();
    let outcomes = scan(&ScanConfig::new(tmp.path()), &NativeEndDate).unwrap();
    assert!(outcomes.is_empty());
}

#[test]
fn test_deterministic_order() {
    let first = find_certificates(&fixtures_dir().join("certs"), ".pem").unwrap();
    let second = find_certificates(&fixtures_dir().join("certs"), ".pem").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_certificate_never_aborts_the_scan() {
    let config = ScanConfig::new(fixtures_dir().join("certs"));
    let outcomes = scan(&config, &NativeEndDate).unwrap();

    // malformed.pem fails, the other three still produce dates
    assert_eq!(outcomes.len(), 4);

    let malformed = outcomes
        .iter()
        .find(|o| o.path.ends_with("malformed.pem"))
        .unwrap();
    assert!(malformed.result.is_err());

    let succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count();
    assert_eq!(succeeded, 3);
}

#[test]
fn test_custom_suffix() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("cert.crt"), "x").unwrap();
    std::fs::write(tmp.path().join("cert.pem"), "x").unwrap();

    let found = find_certificates(tmp.path(), ".crt").unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("cert.crt"));
}
