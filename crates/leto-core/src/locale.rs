//! Locales for the names carried by period types and structures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LetoError;

/// A supported display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Bg,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Bg => f.write_str("bg"),
        }
    }
}

impl FromStr for Locale {
    type Err = LetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "bg" => Ok(Locale::Bg),
            other => Err(LetoError::Configuration(format!(
                "unknown locale '{}', expected 'en' or 'bg'",
                other
            ))),
        }
    }
}

/// A name in every supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedName {
    pub en: &'static str,
    pub bg: &'static str,
}

impl LocalizedName {
    pub const fn new(en: &'static str, bg: &'static str) -> Self {
        Self { en, bg }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Bg => self.bg,
        }
    }
}

impl fmt::Display for LocalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.en)
    }
}
