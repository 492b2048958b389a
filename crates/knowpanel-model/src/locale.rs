//! Supported locales
//!
//! The remote API serves documents in a small closed set of languages.
//! Every request carries the active tag; message lookup on the
//! presentation side is keyed by the same value.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Locale tag sent with every retrieval
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// French
    Fr,
}

impl Locale {
    /// All supported locales
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// Wire tag for this locale
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locale tag outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.as_str().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn locale_rejects_unknown_tag() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert_eq!(err, UnsupportedLocale("de".to_string()));
    }

    #[test]
    fn locale_serde_tag() {
        let json = serde_json::to_string(&Locale::Fr).unwrap();
        assert_eq!(json, "\"fr\"");
    }
}
