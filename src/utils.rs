//! Filesystem-safe naming for the output directory and file

use regex::Regex;
use std::sync::LazyLock;

/// Directory name used when no repository identifier is given
pub const DEFAULT_REPO_DIR: &str = "repository";

/// Version token used when the version sanitizes to nothing
pub const DEFAULT_VERSION_TOKEN: &str = "0.0.0";

static UNSAFE_RUN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[^0-9A-Za-z._-]+").expect("static regex is valid"));

/// Collapse every run of characters outside `[0-9A-Za-z._-]` into one `_`
///
/// Returns `default` when the result is empty.
pub fn sanitize_token(input: &str, default: &str) -> String {
  let token = UNSAFE_RUN.replace_all(input, "_");
  if token.is_empty() {
    default.to_string()
  } else {
    token.into_owned()
  }
}

/// Output subdirectory for a repository identifier such as `org/repo`
///
/// Uses the last `/` segment. `.` and `..` would escape the output directory,
/// so all-dot names fall back to the default as well.
pub fn repo_dir_name(repository: &str) -> String {
  let repository = repository.trim();
  let name = repository.rsplit('/').next().unwrap_or_default();
  let token = sanitize_token(name, DEFAULT_REPO_DIR);
  if token.chars().all(|c| c == '.') {
    DEFAULT_REPO_DIR.to_string()
  } else {
    token
  }
}

/// Version token used in the output file name
pub fn version_token(version: &str) -> String {
  sanitize_token(version, DEFAULT_VERSION_TOKEN)
}
