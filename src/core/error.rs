//! Error types for merge-notes with contextual messages and exit codes
//!
//! Only a small set of failures ever reach the user: a broken config file and
//! filesystem errors while writing the document. Git and manifest failures are
//! absorbed by the detectors and never surface here.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for merge-notes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args)
  User = 1,
  /// System error (git, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for merge-notes
#[derive(Debug)]
pub enum NotesError {
  /// Configuration errors
  Config(ConfigError),

  /// Git operation errors
  Git(GitError),

  /// I/O errors
  Io(io::Error),

  /// I/O error with the operation that failed
  IoContext { context: String, source: io::Error },

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl NotesError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    NotesError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  ///
  /// Bare I/O errors keep their source and gain the failing operation.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      NotesError::Message { message, context, help } => NotesError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      NotesError::Io(source) => NotesError::IoContext { context: ctx_str, source },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      NotesError::Config(_) => ExitCode::User,
      NotesError::Git(_) => ExitCode::System,
      NotesError::Io(_) | NotesError::IoContext { .. } => ExitCode::System,
      NotesError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      NotesError::Config(e) => e.help_message(),
      NotesError::Git(e) => e.help_message(),
      NotesError::Io(e) | NotesError::IoContext { source: e, .. } => Some(io_help(e)),
      NotesError::Message { help, .. } => help.clone(),
    }
  }
}

fn io_help(err: &io::Error) -> String {
  match err.kind() {
    io::ErrorKind::PermissionDenied => "Check that the output directory is writable by the current user.".to_string(),
    io::ErrorKind::NotFound => "Check that the output directory path exists or can be created.".to_string(),
    _ => "Check that the output directory is on a writable filesystem.".to_string(),
  }
}

impl fmt::Display for NotesError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NotesError::Config(e) => write!(f, "{}", e),
      NotesError::Git(e) => write!(f, "{}", e),
      NotesError::Io(e) => write!(f, "I/O error: {}", e),
      NotesError::IoContext { context, source } => write!(f, "{}\nI/O error: {}", context, source),
      NotesError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for NotesError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      NotesError::Io(e) | NotesError::IoContext { source: e, .. } => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for NotesError {
  fn from(err: io::Error) -> Self {
    NotesError::Io(err)
  }
}

impl From<String> for NotesError {
  fn from(msg: String) -> Self {
    NotesError::message(msg)
  }
}

impl From<&str> for NotesError {
  fn from(msg: &str) -> Self {
    NotesError::message(msg)
  }
}

impl From<toml_edit::de::Error> for NotesError {
  fn from(err: toml_edit::de::Error) -> Self {
    NotesError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for NotesError {
  fn from(err: serde_json::Error) -> Self {
    NotesError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// Config file exists but could not be read or parsed
  Invalid { path: PathBuf, reason: String },

  /// A field holds a value outside its allowed set
  InvalidValue { field: String, value: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::Invalid { path, .. } => Some(format!(
        "Fix or remove {}. Every setting is optional; see `merge-notes --help` for the flag equivalents.",
        path.display()
      )),
      ConfigError::InvalidValue { field, .. } if field == "notes.locale" => {
        Some("Supported locales: \"en\", \"pt-BR\".".to_string())
      }
      ConfigError::InvalidValue { .. } => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Invalid { path, reason } => {
        write!(f, "Invalid merge-notes configuration: {}\n{}", path.display(), reason)
      }
      ConfigError::InvalidValue { field, value } => {
        write!(f, "Invalid value '{}' for config field '{}'", value, field)
      }
    }
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git command exited non-zero
  CommandFailed { command: String, stderr: String },

  /// Git could not be spawned at all
  Unavailable { reason: String },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::CommandFailed { stderr, .. } if stderr.contains("not a git repository") => {
        Some("Run merge-notes from inside the checked-out repository, or pass --workdir.".to_string())
      }
      GitError::CommandFailed { stderr, .. } if stderr.contains("unknown revision") => {
        Some("Make sure the refs are fetched (e.g. `fetch-depth: 0` in CI checkouts).".to_string())
      }
      GitError::Unavailable { .. } => Some("Install git and make sure it is on PATH.".to_string()),
      _ => None,
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}\n{}", command, stderr)
      }
      GitError::Unavailable { reason } => {
        write!(f, "Could not run git: {}", reason)
      }
    }
  }
}

/// Result type alias for merge-notes
pub type NotesResult<T> = Result<T, NotesError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> NotesResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> NotesResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<NotesError>,
{
  fn context(self, ctx: impl Into<String>) -> NotesResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> NotesResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &NotesError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
