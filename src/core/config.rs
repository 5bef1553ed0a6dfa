use crate::core::error::{ConfigError, NotesError, NotesResult};
use crate::notes::Locale;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Bullet cap used when neither the config file nor the CLI sets one
pub const DEFAULT_MAX_ITEMS: usize = 30;

/// Config file names, searched in this order inside the working directory
const CONFIG_CANDIDATES: [&str; 3] = ["merge-notes.toml", ".merge-notes.toml", ".config/merge-notes.toml"];

/// Configuration for merge-notes
///
/// Every field is optional; a missing file is the same as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotesConfig {
  #[serde(default)]
  pub notes: NotesSection,

  /// File the config was loaded from (None = defaults)
  #[serde(skip)]
  pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotesSection {
  /// Document language ("en" or "pt-BR")
  #[serde(default)]
  pub locale: Option<String>,

  /// Maximum number of bullets in the description
  #[serde(default)]
  pub max_items: Option<usize>,
}

impl NotesConfig {
  /// Find the first existing config file under `root`
  pub fn find_config_path(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES.iter().map(|name| root.join(name)).find(|path| path.is_file())
  }

  /// Load configuration from `root`, falling back to defaults when no file exists
  pub fn load(root: &Path) -> NotesResult<Self> {
    let Some(path) = Self::find_config_path(root) else {
      tracing::debug!(root = %root.display(), "no merge-notes config file, using defaults");
      return Ok(Self::default());
    };

    let content = fs::read_to_string(&path).map_err(|e| {
      NotesError::Config(ConfigError::Invalid {
        path: path.clone(),
        reason: e.to_string(),
      })
    })?;
    let mut config: NotesConfig = toml_edit::de::from_str(&content).map_err(|e| {
      NotesError::Config(ConfigError::Invalid {
        path: path.clone(),
        reason: e.to_string(),
      })
    })?;
    tracing::debug!(path = %path.display(), "loaded merge-notes config");
    config.source = Some(path);
    config.validate()?;
    Ok(config)
  }

  /// Validate values that serde cannot check on its own
  pub fn validate(&self) -> NotesResult<()> {
    self.locale()?;
    Ok(())
  }

  /// Configured locale, or None when the file leaves it unset
  pub fn locale(&self) -> NotesResult<Option<Locale>> {
    match &self.notes.locale {
      None => Ok(None),
      Some(raw) => raw.parse::<Locale>().map(Some).map_err(|_| {
        NotesError::Config(ConfigError::InvalidValue {
          field: "notes.locale".to_string(),
          value: raw.clone(),
        })
      }),
    }
  }

  /// Configured bullet cap; zero means "use the default"
  pub fn max_items(&self) -> Option<usize> {
    self.notes.max_items.filter(|n| *n > 0)
  }
}
