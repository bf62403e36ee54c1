//! Tests for the end-date sources

use crypto_toolkit::scanner::{EndDateSource, NativeEndDate, OpensslEndDate};
use crypto_toolkit::utils::CertificateError;
use std::path::{Path, PathBuf};

fn certs_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("certs")
}

#[test]
fn test_native_source_returns_iso_date() {
    let date = NativeEndDate.end_date(&certs_dir().join("valid.pem")).unwrap();
    assert_eq!(date, "2030-01-01");
}

#[test]
fn test_native_source_nested_fixtures() {
    let inner = NativeEndDate
        .end_date(&certs_dir().join("nested/inner.pem"))
        .unwrap();
    assert_eq!(inner, "2035-06-15");

    let deep = NativeEndDate
        .end_date(&certs_dir().join("nested/deeper/deep.pem"))
        .unwrap();
    assert_eq!(deep, "2040-12-31");
}

#[test]
fn test_native_source_rejects_non_certificate() {
    let err = NativeEndDate
        .end_date(&certs_dir().join("malformed.pem"))
        .unwrap_err();
    assert!(matches!(
        err,
        CertificateError::NoCertificateBlocks { .. } | CertificateError::FileReadError { .. }
    ));
}

#[test]
fn test_native_source_missing_file() {
    let err = NativeEndDate
        .end_date(&certs_dir().join("does-not-exist.pem"))
        .unwrap_err();
    assert!(matches!(err, CertificateError::FileReadError { .. }));
}

#[cfg(unix)]
#[test]
fn test_tool_source_nonzero_exit_is_a_per_file_failure() {
    // `false` ignores its arguments and exits 1, standing in for a tool
    // that rejects the certificate.
    let source = OpensslEndDate::new("false");
    let err = source.end_date(&certs_dir().join("valid.pem")).unwrap_err();
    assert!(matches!(err, CertificateError::ToolFailed { .. }));
}

#[test]
fn test_tool_source_missing_program() {
    let source = OpensslEndDate::new("definitely-not-installed-x509-tool");
    let err = source.end_date(&certs_dir().join("valid.pem")).unwrap_err();
    assert!(matches!(err, CertificateError::ToolInvocation { .. }));
}

#[cfg(unix)]
#[test]
fn test_tool_source_truncates_to_first_token() {
    use std::os::unix::fs::PermissionsExt;

    // Stub tool printing the exact line openssl would; the extracted
    // "date" is just the first whitespace token after `=`.
    let tmp = tempfile::tempdir().unwrap();
    let stub = tmp.path().join("stub-x509");
    std::fs::write(&stub, "#!/bin/sh\necho 'notAfter=Jan  1 00:00:00 2030 GMT'\n").unwrap();
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

    let source = OpensslEndDate::new(stub.to_string_lossy());
    let date = source.end_date(&certs_dir().join("valid.pem")).unwrap();
    assert_eq!(date, "Jan");
}
