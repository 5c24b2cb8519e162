//! Package download against a local server: temp-then-rename behavior.

mod common;

use common::page_server;
use vsixget_core::download::download_to_dir;
use vsixget_core::gallery::DownloadArtifact;

#[test]
fn download_writes_final_file() {
    let body = b"PK\x03\x04 fake vsix bytes".to_vec();
    let server = page_server::start(body.clone());
    let dir = tempfile::tempdir().unwrap();

    let artifact = DownloadArtifact {
        url: server,
        suggested_filename: "python-2024.1.0.vsix".to_string(),
    };
    let (path, bytes) = download_to_dir(&artifact, dir.path()).unwrap();

    assert_eq!(bytes, body.len() as u64);
    assert_eq!(std::fs::read(&path).unwrap(), body);
    assert_eq!(path.file_name().unwrap(), "python-2024.1.0.vsix");
    assert!(
        !dir.path().join("python-2024.1.0.vsix.part").exists(),
        "temp file must be renamed away"
    );
}

#[test]
fn download_failure_leaves_no_partial_file() {
    let server = page_server::start_with_status("gone", 404);
    let dir = tempfile::tempdir().unwrap();

    let artifact = DownloadArtifact {
        url: server,
        suggested_filename: "x-1.0.vsix".to_string(),
    };
    assert!(download_to_dir(&artifact, dir.path()).is_err());
    assert!(!dir.path().join("x-1.0.vsix").exists());
    assert!(!dir.path().join("x-1.0.vsix.part").exists());
}
