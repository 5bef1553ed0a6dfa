//! Generate command: detect version, summarize refs, write the release note
//!
//! Output lands in `<output-dir>/<repo>/v<version>-<DDMMYYYY>.md` and is
//! overwritten on re-runs. Only directory creation and the file write can fail.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::changes::{self, RefRange};
use crate::core::config::{DEFAULT_MAX_ITEMS, NotesConfig};
use crate::core::error::{NotesResult, ResultExt};
use crate::core::vcs::SystemGit;
use crate::notes::{self, Locale};
use crate::utils;
use crate::version::{self, VersionSource};

/// Inputs for one generate run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
  pub before: String,
  pub after: String,
  /// Repository identifier such as `org/repo` (may be empty)
  pub repository: String,
  pub output_dir: PathBuf,
  /// Where manifests, git and the config file are looked up
  pub workdir: PathBuf,
  /// Overrides the config file
  pub locale: Option<Locale>,
  /// Overrides the config file; zero means unset
  pub max_items: Option<usize>,
  pub json: bool,
}

/// What a run produced
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
  pub path: PathBuf,
  pub title: String,
  pub version: String,
  pub version_source: VersionSource,
  pub locale: Locale,
  /// Revision expression queried, None when both refs were empty
  pub range: Option<String>,
  /// Config file that was applied, if any
  pub config: Option<PathBuf>,
  pub commits: usize,
  pub files_changed: usize,
}

/// Run the generate command
pub fn run_generate(opts: GenerateOptions) -> NotesResult<()> {
  let json = opts.json;
  let report = generate(&opts, Utc::now().date_naive())?;

  if json {
    let rendered = serde_json::to_string_pretty(&report).context("Failed to render JSON report")?;
    println!("{}", rendered);
  } else {
    println!("✅ Wrote {}", report.path.display());
    println!(
      "   version {} ({}), {} commit(s), {} file(s)",
      report.version, report.version_source, report.commits, report.files_changed
    );
  }

  Ok(())
}

/// Build and write the document for `today`
pub fn generate(opts: &GenerateOptions, today: NaiveDate) -> NotesResult<GenerateReport> {
  let config = NotesConfig::load(&opts.workdir)?;
  let locale = match opts.locale {
    Some(locale) => locale,
    None => config.locale()?.unwrap_or_default(),
  };
  let max_items = opts
    .max_items
    .filter(|n| *n > 0)
    .or_else(|| config.max_items())
    .unwrap_or(DEFAULT_MAX_ITEMS);

  let git = SystemGit::new(&opts.workdir);
  let detected = version::detect(&opts.workdir, &git);
  let summary = changes::summarize_changes(&git, &opts.before, &opts.after);
  if summary.is_empty() {
    tracing::debug!("no commits or files found between refs");
  }
  let description = notes::guess_description(&summary, locale, max_items);

  let date = format_date(today);
  let title = format!("v{} - {}", detected.version, date);
  let markdown = notes::make_markdown(&title, &detected.version, &description, locale);

  let out_dir = opts.output_dir.join(utils::repo_dir_name(&opts.repository));
  fs::create_dir_all(&out_dir).with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

  let path = out_dir.join(output_file_name(&detected.version, &date));
  fs::write(&path, markdown).with_context(|| format!("Failed to write {}", path.display()))?;
  tracing::debug!(path = %path.display(), "release note written");

  Ok(GenerateReport {
    path,
    title,
    version: detected.version,
    version_source: detected.source,
    locale,
    range: RefRange::resolve(&opts.before, &opts.after).revision(),
    config: config.source,
    commits: summary.commits().len(),
    files_changed: summary.files_changed().len(),
  })
}

/// `DDMMYYYY`, the date stamp used in titles and file names
pub fn format_date(date: NaiveDate) -> String {
  date.format("%d%m%Y").to_string()
}

/// `v<sanitized-version>-<date>.md`
pub fn output_file_name(version: &str, date: &str) -> String {
  format!("v{}-{}.md", utils::version_token(version), date)
}
