//! Commits and changed files between two refs
//!
//! Git failures (unknown refs, shallow clones, not a repository) are absorbed:
//! the affected list is simply empty.

use crate::core::vcs::SystemGit;

/// Conventional "no previous revision" sha (first push to a branch)
pub const ZERO_SHA: &str = "0000000000000000000000000000000000000000";

/// Commit subjects and changed paths between two refs
///
/// Both lists keep git's order; nothing is sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSummary {
  commits: Vec<String>,
  files_changed: Vec<String>,
}

impl ChangeSummary {
  pub fn new(commits: Vec<String>, files_changed: Vec<String>) -> Self {
    Self { commits, files_changed }
  }

  /// Commit subjects, newest first as git reports them
  pub fn commits(&self) -> &[String] {
    &self.commits
  }

  pub fn files_changed(&self) -> &[String] {
    &self.files_changed
  }

  pub fn is_empty(&self) -> bool {
    self.commits.is_empty() && self.files_changed.is_empty()
  }
}

/// Revision expression passed to `git log` and `git diff`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefRange {
  /// Nothing to query
  Empty,
  /// Everything reachable from one ref (first push)
  Reachable(String),
  /// `before..after`
  Between { before: String, after: String },
}

impl RefRange {
  /// Compute the range for a before/after pair
  ///
  /// An empty or all-zero `before` collapses the range to `after` alone.
  pub fn resolve(before: &str, after: &str) -> Self {
    let before = normalize_ref(before);
    let after = normalize_ref(after);

    if before.is_empty() || before == ZERO_SHA {
      if after.is_empty() {
        return Self::Empty;
      }
      return Self::Reachable(after);
    }

    Self::Between { before, after }
  }

  /// Revision argument for git, or None when there is nothing to query
  pub fn revision(&self) -> Option<String> {
    match self {
      Self::Empty => None,
      Self::Reachable(after) => Some(after.clone()),
      Self::Between { before, after } => Some(format!("{}..{}", before, after)),
    }
  }
}

/// Trim a ref; hashes and symbolic refs (`HEAD~1`, tags) pass through as-is
pub fn normalize_ref(raw: &str) -> String {
  let trimmed = raw.trim();
  if !trimmed.is_empty() && !is_hex_sha(trimmed) {
    tracing::debug!(git_ref = trimmed, "treating ref as symbolic");
  }
  trimmed.to_string()
}

/// 7 to 40 hex digits, i.e. a full or abbreviated commit hash
pub fn is_hex_sha(s: &str) -> bool {
  (7..=40).contains(&s.len()) && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Collect commit subjects and changed files between `before` and `after`
///
/// Never fails. Each git query that errors contributes an empty list.
pub fn summarize_changes(git: &SystemGit, before: &str, after: &str) -> ChangeSummary {
  let range = RefRange::resolve(before, after);
  let Some(revision) = range.revision() else {
    tracing::debug!("both refs empty, nothing to summarize");
    return ChangeSummary::default();
  };
  tracing::debug!(%revision, "summarizing changes");

  let commits = git.log_subjects(&revision).unwrap_or_else(|e| {
    tracing::debug!(error = %e, "git log failed, no commits listed");
    Vec::new()
  });
  let files_changed = git.diff_names(&revision).unwrap_or_else(|e| {
    tracing::debug!(error = %e, "git diff failed, no files listed");
    Vec::new()
  });

  ChangeSummary::new(commits, files_changed)
}
