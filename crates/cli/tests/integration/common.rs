//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated template root.
///
/// Each test gets its own temporary directory holding a lint configuration
/// and a versions file outside the template tree.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create a template root with a `.jshintrc` in place.
  pub fn new() -> Self {
    let env = Self::empty();
    env.write_file("templates/.jshintrc", "{}");
    env.write_file("versions.ini", "css_version=1\n");
    env
  }

  /// Create a template root without any core files.
  pub fn empty() -> Self {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("templates")).unwrap();
    Self { temp }
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  /// Read a file relative to the temp directory.
  pub fn read_file(&self, relative_path: &str) -> String {
    std::fs::read_to_string(self.temp.path().join(relative_path)).unwrap()
  }

  /// Template root (canonicalized).
  pub fn root(&self) -> PathBuf {
    let p = self.temp.path().join("templates");
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Versions file outside the template tree.
  pub fn versions_ini(&self) -> PathBuf {
    self.temp.path().join("versions.ini")
  }

  /// Get a pre-configured Command for the fb binary.
  ///
  /// Runs inside the template root with external files redirected into the
  /// temp directory:
  /// - `FRONTBUILD_VERSIONS_INI`: isolated versions file
  /// - `RUST_LOG`: info, so log assertions see composition diagnostics
  pub fn fb_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("fb");
    cmd.current_dir(self.root());
    cmd.env("FRONTBUILD_VERSIONS_INI", self.versions_ini());
    cmd.env("RUST_LOG", "info");
    cmd
  }
}
