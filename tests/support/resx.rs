//! Resource directories for integration tests.
//!
//! [`ResourceDirectory`] writes minimal `.resx` files into a temporary
//! directory that disappears with the value. [`fixtures_dir`] points at the
//! checked-in fixture sets under `tests/fixtures`.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::{TempDir, tempdir};

/// Directory holding the checked-in fixture resource sets.
pub fn fixtures_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Render `.resx` XML declaring `keys`.
pub fn resx_document(keys: &[&str]) -> String {
    let mut document = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<root>\n");
    for key in keys {
        document.push_str(&format!(
            "  <data name=\"{key}\" xml:space=\"preserve\">\n    <value>{key} text</value>\n  </data>\n"
        ));
    }
    document.push_str("</root>\n");
    document
}

/// Temporary directory populated with resource files.
pub struct ResourceDirectory {
    _tempdir: TempDir,
    root: Utf8PathBuf,
}

impl ResourceDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        let tempdir =
            tempdir().unwrap_or_else(|error| panic!("temporary directory should exist: {error}"));
        let root = Utf8PathBuf::from_path_buf(tempdir.path().to_path_buf())
            .unwrap_or_else(|path| panic!("temp path should be UTF-8: {}", path.display()));
        Self {
            _tempdir: tempdir,
            root,
        }
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Writes `file_name` declaring `keys`.
    pub fn write(&self, file_name: &str, keys: &[&str]) {
        self.write_raw(file_name, &resx_document(keys));
    }

    /// Writes `file_name` with arbitrary content.
    pub fn write_raw(&self, file_name: &str, content: &str) {
        let path = self.root.join(file_name);
        fs::write(&path, content)
            .unwrap_or_else(|error| panic!("failed to write {path}: {error}"));
    }

    /// Deletes `file_name`.
    pub fn remove(&self, file_name: &str) {
        let path = self.root.join(file_name);
        fs::remove_file(&path)
            .unwrap_or_else(|error| panic!("failed to remove {path}: {error}"));
    }
}
