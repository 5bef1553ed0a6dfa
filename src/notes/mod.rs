//! Release-note rendering
//!
//! - **description**: change summary -> markdown bullets, with fallbacks
//! - **document**: fixed five-section template around the description

pub mod description;
pub mod document;

pub use description::guess_description;
pub use document::make_markdown;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Language of the fixed text in the generated document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Locale {
  #[default]
  #[serde(rename = "en")]
  En,
  #[serde(rename = "pt-BR")]
  PtBr,
}

impl Locale {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::PtBr => "pt-BR",
    }
  }
}

impl FromStr for Locale {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
      "en" | "en-us" | "en-gb" => Ok(Self::En),
      "pt" | "pt-br" => Ok(Self::PtBr),
      other => Err(format!("unsupported locale '{}' (expected \"en\" or \"pt-BR\")", other)),
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
