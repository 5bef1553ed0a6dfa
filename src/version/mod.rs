//! Best-effort project version detection
//!
//! Sources are tried in a fixed order and the first non-empty value wins:
//!
//! 1. `package.json` (`version` field)
//! 2. `pyproject.toml` (top-level, then `[project]`, then any table)
//! 3. `pom.xml` (first `<version>`)
//! 4. `Cargo.toml` (first `version = "..."` line)
//! 5. `git describe --tags --abbrev=0`
//!
//! When nothing matches the version is `0.0.0`. Detection never fails.

pub mod manifest;

use crate::core::vcs::SystemGit;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Version reported when no source yields one
pub const FALLBACK_VERSION: &str = "0.0.0";

/// Where a detected version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionSource {
  PackageJson,
  Pyproject,
  Pom,
  Cargo,
  GitTag,
  Fallback,
}

impl VersionSource {
  /// Probe order; `Fallback` is implied after the last entry
  pub const ORDER: [VersionSource; 5] = [
    VersionSource::PackageJson,
    VersionSource::Pyproject,
    VersionSource::Pom,
    VersionSource::Cargo,
    VersionSource::GitTag,
  ];

  /// Manifest file name for file-backed sources
  pub fn file_name(self) -> Option<&'static str> {
    match self {
      Self::PackageJson => Some("package.json"),
      Self::Pyproject => Some("pyproject.toml"),
      Self::Pom => Some("pom.xml"),
      Self::Cargo => Some("Cargo.toml"),
      Self::GitTag | Self::Fallback => None,
    }
  }

  /// Try this source; None means "keep looking"
  fn probe(self, root: &Path, git: &SystemGit) -> Option<String> {
    match self {
      Self::GitTag => match git.latest_tag() {
        Ok(tag) => tag,
        Err(e) => {
          tracing::debug!(error = %e, "no reachable tag");
          None
        }
      },
      file_backed => {
        let name = file_backed.file_name()?;
        let text = manifest::read_manifest(&root.join(name))?;
        let extract = match file_backed {
          Self::PackageJson => manifest::from_package_json,
          Self::Pyproject => manifest::from_pyproject,
          Self::Pom => manifest::from_pom,
          _ => manifest::from_cargo,
        };
        let found = extract(&text);
        if found.is_none() {
          tracing::debug!(manifest = name, "manifest has no usable version");
        }
        found
      }
    }
  }
}

impl fmt::Display for VersionSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.file_name() {
      Some(name) => write!(f, "{}", name),
      None if *self == Self::GitTag => write!(f, "git tag"),
      None => write!(f, "default"),
    }
  }
}

/// A version and the source that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedVersion {
  pub version: String,
  pub source: VersionSource,
}

/// Detect the project version under `root`, recording which source matched
pub fn detect(root: &Path, git: &SystemGit) -> DetectedVersion {
  for source in VersionSource::ORDER {
    if let Some(version) = source.probe(root, git) {
      tracing::debug!(%version, %source, "detected version");
      return DetectedVersion { version, source };
    }
  }

  tracing::debug!("no version source matched, using {}", FALLBACK_VERSION);
  DetectedVersion {
    version: FALLBACK_VERSION.to_string(),
    source: VersionSource::Fallback,
  }
}
