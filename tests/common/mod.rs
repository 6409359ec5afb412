// tests/common/mod.rs — Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;
pub use tempfile::TempDir;

/// Resolve the compiled binary from the workspace target directory
pub fn clc_bin() -> PathBuf {
    let mut path = std::env::current_exe()
        .expect("current_exe")
        .parent()
        .expect("parent")
        .to_path_buf();

    if path.ends_with("deps") {
        path.pop();
    }
    path.join("clc")
}

/// Execute the clc binary with given arguments
pub fn run_clc(args: &[&str]) -> std::process::Output {
    std::process::Command::new(clc_bin())
        .args(args)
        .output()
        .expect("Failed to execute clc binary")
}

/// Create a temporary directory with a set of named files and content.
///
/// The prefix matters: tempfile's default (".tmp") would be a hidden
/// path segment, and clc skips hidden segments.
pub fn make_fixture(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::Builder::new()
        .prefix("clc-fixture")
        .tempdir()
        .expect("tempdir");
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
    dir
}
