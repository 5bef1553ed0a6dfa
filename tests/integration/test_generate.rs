//! Integration tests for the end-to-end generate flow

use crate::helpers::{TestRepo, run_merge_notes, today};
use anyhow::Result;

const ZERO_SHA: &str = "0000000000000000000000000000000000000000";

#[test]
fn test_first_push_without_manifest_or_tags() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write("README.md", "hello")?;
  repo.commit("Initial import")?;
  let head = repo.commit("Wire up CI")?;
  let short = &head[..7];
  let out = repo.out.to_string_lossy().to_string();

  run_merge_notes(&repo.path, &["--before", ZERO_SHA, "--after", short, "--output-dir", &out])?;

  let doc = repo.read_output(&format!("repository/v0.0.0-{}.md", today()))?;
  assert!(doc.starts_with(&format!("# v0.0.0 - {} (v0.0.0)\n", today())));
  assert!(doc.contains("## Description of changes\n\n- Wire up CI\n- Initial import\n\n"));

  Ok(())
}

#[test]
fn test_package_json_version_and_repository_dir() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write("package.json", r#"{"name": "widgets", "version": "2.3.1"}"#)?;
  let before = repo.commit("Initial import")?;
  repo.write("src/index.js", "export {}")?;
  let after = repo.commit("Add widget factory")?;
  let out = repo.out.to_string_lossy().to_string();

  let output = run_merge_notes(
    &repo.path,
    &[
      "--before",
      &before,
      "--after",
      &after,
      "--repository",
      "acme/widgets",
      "--output-dir",
      &out,
    ],
  )?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("v2.3.1"), "stdout: {}", stdout);

  let doc = repo.read_output(&format!("widgets/v2.3.1-{}.md", today()))?;
  assert!(doc.starts_with(&format!("# v2.3.1 - {} (v2.3.1)\n", today())));
  assert!(doc.contains("- Add widget factory"));
  assert!(!doc.contains("- Initial import"));

  Ok(())
}

#[test]
fn test_rerun_overwrites_previous_output() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write("Cargo.toml", "[package]\nname = \"demo\"\nversion = \"0.4.0\"\n")?;
  let head = repo.commit("Initial import")?;
  let out = repo.out.to_string_lossy().to_string();
  let args = ["--before", "", "--after", head.as_str(), "--output-dir", out.as_str()];

  run_merge_notes(&repo.path, &args)?;
  let relative = format!("repository/v0.4.0-{}.md", today());
  std::fs::write(repo.out.join(&relative), "edited by hand")?;
  run_merge_notes(&repo.path, &args)?;

  let doc = repo.read_output(&relative)?;
  assert!(doc.starts_with("# v0.4.0 - "));
  assert!(doc.contains("- Initial import"));

  Ok(())
}

#[test]
fn test_workdir_flag_and_git_tag_version() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write("notes.txt", "one")?;
  let before = repo.commit("First")?;
  crate::helpers::git(&repo.path, &["tag", "release-7"])?;
  repo.write("notes.txt", "two")?;
  let after = repo.commit("Second")?;
  let out = repo.out.to_string_lossy().to_string();
  let workdir = repo.path.to_string_lossy().to_string();

  // Run from the output directory so only --workdir points at the repository
  run_merge_notes(
    &repo.out,
    &["-C", &workdir, "--before", &before, "--after", &after, "--output-dir", &out],
  )?;

  let doc = repo.read_output(&format!("repository/vrelease-7-{}.md", today()))?;
  assert!(doc.contains("(vrelease-7)"));
  assert!(doc.contains("- Second"));

  Ok(())
}

#[test]
fn test_unknown_refs_fall_back_to_sentence() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.commit("Initial import")?;
  let out = repo.out.to_string_lossy().to_string();

  run_merge_notes(
    &repo.path,
    &["--before", "deadbeef", "--after", "cafebabe", "--output-dir", &out],
  )?;

  let doc = repo.read_output(&format!("repository/v0.0.0-{}.md", today()))?;
  assert!(doc.contains("## Description of changes\n\n- Changes in this merge could not be inferred automatically.\n\n"));

  Ok(())
}

#[test]
fn test_json_report_and_locale() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write("pyproject.toml", "[project]\nname = \"demo\"\nversion = \"1.2.0\"\n")?;
  let head = repo.commit("Initial import")?;
  let out = repo.out.to_string_lossy().to_string();

  let output = run_merge_notes(
    &repo.path,
    &[
      "--before",
      ZERO_SHA,
      "--after",
      &head,
      "--output-dir",
      &out,
      "--locale",
      "pt-BR",
      "--json",
    ],
  )?;

  let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(report["version"], "1.2.0");
  assert_eq!(report["version_source"], "pyproject");
  assert_eq!(report["locale"], "pt-BR");
  assert_eq!(report["commits"], 1);

  let doc = repo.read_output(&format!("repository/v1.2.0-{}.md", today()))?;
  assert!(doc.contains("## Descrição das alterações"));
  assert!(doc.contains("- (Preencher)"));

  Ok(())
}
