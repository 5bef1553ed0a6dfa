//! Git fixtures shared by unit tests

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Throwaway repository with a deterministic identity
pub struct GitFixture {
  _root: TempDir,
  pub path: PathBuf,
}

impl GitFixture {
  pub fn new() -> Self {
    let root = TempDir::new().unwrap();
    let path = root.path().to_path_buf();
    run_git(&path, &["init", "--initial-branch=main"]);
    run_git(&path, &["config", "user.name", "Test User"]);
    run_git(&path, &["config", "user.email", "test@example.com"]);
    run_git(&path, &["config", "commit.gpgsign", "false"]);
    Self { _root: root, path }
  }

  /// Write `file` with `message` as content and commit it; returns the new HEAD sha
  pub fn commit_file(&self, file: &str, message: &str) -> String {
    let target = self.path.join(file);
    if let Some(parent) = target.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(target, message).unwrap();
    run_git(&self.path, &["add", "."]);
    run_git(&self.path, &["commit", "-m", message]);
    self.head()
  }

  pub fn head(&self) -> String {
    let out = Command::new("git")
      .current_dir(&self.path)
      .args(["rev-parse", "HEAD"])
      .output()
      .unwrap();
    String::from_utf8_lossy(&out.stdout).trim().to_string()
  }

  pub fn git(&self, args: &[&str]) {
    run_git(&self.path, args);
  }
}

fn run_git(cwd: &Path, args: &[&str]) {
  let status = Command::new("git").current_dir(cwd).args(args).status().unwrap();
  assert!(status.success(), "git {:?} failed", args);
}
