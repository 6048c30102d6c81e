use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary resources directory
pub fn create_test_resources_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a resource file with content
pub fn create_test_file(resources_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = resources_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
