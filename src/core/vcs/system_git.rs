//! System git backend
//!
//! Every query is one blocking `git` subprocess with no timeout. Callers decide
//! whether a failure is fatal; the change summarizer and version detector treat
//! every failure as "no data".

use crate::core::error::{GitError, NotesError, NotesResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using system git (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  pub(crate) repo_path: PathBuf,
}

impl SystemGit {
  /// Use the repository at `path`
  ///
  /// No subprocess is spawned here; an invalid path only shows up as failed queries.
  pub fn new(path: &Path) -> Self {
    Self {
      repo_path: path.to_path_buf(),
    }
  }

  /// Run git with `args` and return its stdout, trimmed
  ///
  /// Non-zero exit becomes `GitError::CommandFailed` carrying stderr.
  pub(crate) fn run(&self, args: &[&str]) -> NotesResult<String> {
    let command = format!("git {}", args.join(" "));
    tracing::debug!(%command, repo = %self.repo_path.display(), "running git");

    let output = self.git_cmd().args(args).output().map_err(|e| {
      NotesError::Git(GitError::Unavailable {
        reason: e.to_string(),
      })
    })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(NotesError::Git(GitError::CommandFailed {
        command,
        stderr: stderr.trim().to_string(),
      }));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Adds configuration overrides for stable, parseable output
  pub(crate) fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII paths
    cmd.arg("-c").arg("log.showSignature=false");
    cmd.arg("-c").arg("color.ui=never");
    cmd.arg("--no-pager");

    cmd
  }
}

/// Split command output into trimmed, non-empty lines
pub(crate) fn non_empty_lines(output: &str) -> Vec<String> {
  output
    .lines()
    .map(|line| line.trim())
    .filter(|line| !line.is_empty())
    .map(String::from)
    .collect()
}
