//! Queries used to build release notes (log, diff, describe)

use super::system_git::{SystemGit, non_empty_lines};
use crate::core::error::NotesResult;

impl SystemGit {
  /// Commit subjects for a revision expression, merges excluded
  ///
  /// Order is git's default log order (newest first); it is never re-sorted.
  pub fn log_subjects(&self, revision: &str) -> NotesResult<Vec<String>> {
    let out = self.run(&["log", "--no-merges", "--format=%s", "--end-of-options", revision, "--"])?;
    Ok(non_empty_lines(&out))
  }

  /// Paths changed by a revision expression, as reported by `git diff --name-only`
  ///
  /// Duplicates are kept as-is.
  pub fn diff_names(&self, revision: &str) -> NotesResult<Vec<String>> {
    let out = self.run(&["diff", "--name-only", "--end-of-options", revision, "--"])?;
    Ok(non_empty_lines(&out))
  }

  /// Most recent tag reachable from HEAD, or None when git prints nothing
  pub fn latest_tag(&self) -> NotesResult<Option<String>> {
    let out = self.run(&["describe", "--tags", "--abbrev=0"])?;
    Ok(Some(out).filter(|tag| !tag.is_empty()))
  }
}
