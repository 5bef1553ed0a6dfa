//! Integration tests for fatal error paths and exit codes

use crate::helpers::{TestRepo, run_merge_notes_raw};
use anyhow::Result;

#[test]
fn test_missing_required_flag_fails() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_merge_notes_raw(&repo.path, &["--before", "HEAD~1", "--after", "HEAD"])?;
  assert!(!output.status.success());
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("--output-dir"), "stderr: {}", stderr);

  Ok(())
}

#[test]
fn test_output_dir_blocked_by_file() -> Result<()> {
  let repo = TestRepo::new()?;
  let blocker = repo.out.join("not-a-dir");
  std::fs::write(&blocker, "")?;
  let blocker = blocker.to_string_lossy().to_string();

  let output = run_merge_notes_raw(&repo.path, &["--before", "", "--after", "HEAD", "--output-dir", &blocker])?;
  assert_eq!(output.status.code(), Some(2));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Failed to create output directory"), "stderr: {}", stderr);

  Ok(())
}

#[test]
fn test_invalid_config_is_user_error() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write("merge-notes.toml", "[notes]\nlocale = \"xx\"\n")?;
  let out = repo.out.to_string_lossy().to_string();

  let output = run_merge_notes_raw(&repo.path, &["--before", "", "--after", "HEAD", "--output-dir", &out])?;
  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("notes.locale"), "stderr: {}", stderr);

  Ok(())
}
