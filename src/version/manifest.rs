//! Version extraction from project manifests
//!
//! Each extractor works on the file text and returns None for anything it
//! cannot make sense of. Values are trimmed; blank values count as missing.

use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

/// A whole line of the form `version = "..."`
static VERSION_LINE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#"^version\s*=\s*"([^"]+)"\s*$"#).expect("Invalid version line regex"));

static POM_VERSION: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"<version>([^<]+)</version>").expect("Invalid pom version regex"));

/// Read a manifest as text, or None when it is missing or unreadable
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_manifest(path: &Path) -> Option<String> {
  match fs::read(path) {
    Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      tracing::debug!(path = %path.display(), "manifest not present");
      None
    }
    Err(e) => {
      tracing::debug!(path = %path.display(), error = %e, "manifest unreadable");
      None
    }
  }
}

/// `version` field of a package.json document
pub fn from_package_json(text: &str) -> Option<String> {
  let doc: serde_json::Value = match serde_json::from_str(text) {
    Ok(doc) => doc,
    Err(e) => {
      tracing::debug!(error = %e, "package.json is not valid JSON");
      return None;
    }
  };

  match doc.get("version")? {
    serde_json::Value::String(s) => non_blank(s),
    serde_json::Value::Number(n) => non_blank(&n.to_string()),
    other => {
      tracing::debug!(value = %other, "package.json version is not a string");
      None
    }
  }
}

/// `version = "..."` from a pyproject.toml
///
/// Looks at top-level keys first, then the `[project]` table, then any
/// line-anchored assignment (e.g. `[tool.poetry]`).
pub fn from_pyproject(text: &str) -> Option<String> {
  let mut top_level = None;
  let mut project = None;
  let mut anywhere = None;
  let mut table: Option<&str> = None;

  for line in text.lines() {
    let trimmed = line.trim();
    if trimmed.starts_with('[') {
      table = Some(table_name(trimmed));
      continue;
    }

    let Some(version) = version_assignment(line) else {
      continue;
    };
    match table {
      None => {
        top_level.get_or_insert(version);
      }
      Some("project") => {
        project.get_or_insert(version);
      }
      Some(_) => {
        anywhere.get_or_insert(version);
      }
    }
  }

  top_level.or(project).or(anywhere)
}

/// First `<version>` element of a pom.xml
///
/// This is the parent's version when a `<parent>` block comes first.
pub fn from_pom(text: &str) -> Option<String> {
  POM_VERSION
    .captures(text)
    .and_then(|caps| caps.get(1))
    .and_then(|m| non_blank(m.as_str()))
}

/// First line-anchored `version = "..."` of a Cargo.toml
pub fn from_cargo(text: &str) -> Option<String> {
  text.lines().find_map(version_assignment)
}

fn version_assignment(line: &str) -> Option<String> {
  VERSION_LINE
    .captures(line)
    .and_then(|caps| caps.get(1))
    .and_then(|m| non_blank(m.as_str()))
}

/// `[project]` -> `project`, `[[bin]]` -> `bin`, trailing comments ignored
fn table_name(header: &str) -> &str {
  let header = header.split('#').next().unwrap_or_default().trim();
  header.trim_start_matches('[').trim_end_matches(']').trim()
}

fn non_blank(s: &str) -> Option<String> {
  let s = s.trim();
  (!s.is_empty()).then(|| s.to_string())
}
