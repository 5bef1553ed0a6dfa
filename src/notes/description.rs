//! Markdown description of a change summary
//!
//! Fallback chain: commit subjects, else changed files, else a fixed sentence.
//! Lists are capped and the excess is dropped without a "+N more" line.

use super::Locale;
use crate::changes::ChangeSummary;

/// Render the description fragment (no trailing newline)
pub fn guess_description(summary: &ChangeSummary, locale: Locale, max_items: usize) -> String {
  if !summary.commits().is_empty() {
    return bullets(summary.commits(), max_items, |subject| format!("- {}", subject));
  }

  if !summary.files_changed().is_empty() {
    let prefix = match locale {
      Locale::En => "Update in",
      Locale::PtBr => "Atualização em",
    };
    return bullets(summary.files_changed(), max_items, |path| format!("- {} `{}`", prefix, path));
  }

  no_changes_sentence(locale).to_string()
}

/// Fixed text used when neither commits nor files are known
pub fn no_changes_sentence(locale: Locale) -> &'static str {
  match locale {
    Locale::En => "- Changes in this merge could not be inferred automatically.",
    Locale::PtBr => "- Alterações do merge não puderam ser inferidas automaticamente.",
  }
}

fn bullets(items: &[String], max_items: usize, line: impl Fn(&str) -> String) -> String {
  items
    .iter()
    .take(max_items)
    .map(|item| line(item.as_str()))
    .collect::<Vec<_>>()
    .join("\n")
}
