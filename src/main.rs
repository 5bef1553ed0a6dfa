mod changes;
mod commands;
mod core;
mod notes;
mod utils;
mod version;

#[cfg(test)]
mod test_support;

use clap::Parser;
use crate::core::error::{NotesError, print_error};
use notes::Locale;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Write a release-note stub summarizing the changes between two git refs
#[derive(Parser)]
#[command(name = "merge-notes")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Ref before the merge (the all-zero sha means "first push")
  #[arg(long)]
  before: String,

  /// Ref after the merge
  #[arg(long)]
  after: String,

  /// Repository identifier, e.g. `org/repo`; its last segment names the output subdirectory
  #[arg(long, default_value = "")]
  repository: String,

  /// Directory the release note is written under
  #[arg(long)]
  output_dir: PathBuf,

  /// Repository working directory (manifests, git, config file)
  #[arg(short = 'C', long, default_value = ".")]
  workdir: PathBuf,

  /// Document language: en or pt-BR (overrides merge-notes.toml)
  #[arg(long)]
  locale: Option<Locale>,

  /// Maximum bullets in the description (overrides merge-notes.toml, default 30)
  #[arg(long)]
  max_items: Option<usize>,

  /// Print a JSON report instead of the summary line
  #[arg(long)]
  json: bool,

  /// Debug logging to stderr
  #[arg(short, long)]
  verbose: bool,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

/// Log filter: `--verbose` wins, then `MERGE_NOTES_LOG`, then warnings only
fn init_tracing(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_env("MERGE_NOTES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let opts = commands::GenerateOptions {
    before: cli.before,
    after: cli.after,
    repository: cli.repository,
    output_dir: cli.output_dir,
    workdir: cli.workdir,
    locale: cli.locale,
    max_items: cli.max_items,
    json: cli.json,
  };

  if let Err(err) = commands::run_generate(opts) {
    handle_error(err);
  }
}

fn handle_error(err: NotesError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
