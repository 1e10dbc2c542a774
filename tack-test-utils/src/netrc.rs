use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// RAII guard for test `.netrc` files
///
/// Creates a temporary home directory holding a `.netrc` with the given
/// content. The process environment is left alone; pass
/// [`NetrcGuard::home_dir`] to the code under test instead. The directory is
/// removed when the guard is dropped.
pub struct NetrcGuard {
  temp_dir: TempDir,
  netrc_path: PathBuf,
}

impl NetrcGuard {
  /// Create a new NetrcGuard with the given content
  pub fn new(content: &str) -> Self {
    Self::try_new(Some(content)).expect("Failed to create test .netrc")
  }

  /// Create a home directory without any `.netrc`
  pub fn empty() -> Self {
    Self::try_new(None).expect("Failed to create temp directory")
  }

  fn try_new(content: Option<&str>) -> Result<Self> {
    let temp_dir = TempDir::new().context("Failed to create temp directory")?;
    let netrc_path = temp_dir.path().join(".netrc");

    if let Some(content) = content {
      fs::write(&netrc_path, content).context("Failed to write test .netrc")?;
    }

    Ok(Self { temp_dir, netrc_path })
  }

  /// Get the path to the .netrc file
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }

  /// Get the path to the temporary home directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_guard_writes_netrc_into_temp_home() {
    let guard = NetrcGuard::new("machine example.com login a password b\n");

    assert_eq!(guard.netrc_path(), guard.home_dir().join(".netrc"));
    assert_eq!(
      fs::read_to_string(guard.netrc_path()).unwrap(),
      "machine example.com login a password b\n"
    );
  }

  #[test]
  fn test_empty_guard_has_no_netrc() {
    let guard = NetrcGuard::empty();
    assert!(guard.home_dir().is_dir());
    assert!(!guard.netrc_path().exists());
  }

  #[test]
  fn test_home_is_removed_on_drop() {
    let home = {
      let guard = NetrcGuard::empty();
      guard.home_dir().to_path_buf()
    };
    assert!(!home.exists());
  }
}
