//! Configuration loaded from the environment.
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{Error, Result};

/// Character count above which the cleaner's count report prints a warning.
///
/// Matches LinkedIn's post length limit.
pub const DEFAULT_CHAR_LIMIT: usize = 3000;

/// Environment variable overriding [`DEFAULT_CHAR_LIMIT`].
pub const CHAR_LIMIT_VAR: &str = "PASTEWASH_CHAR_LIMIT";

/// Runtime configuration shared by both tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Threshold for the "exceeds character limit" warning.
    pub char_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            char_limit: DEFAULT_CHAR_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the current directory or any parent is loaded first
    /// if one exists. Malformed values fall back to defaults, so a stray
    /// `.env` further up the tree cannot stop a run.
    pub fn from_env_or_default() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup_or_default(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_lookup`], but logs and returns defaults on error.
    pub fn from_lookup_or_default(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            tracing::warn!("Ignoring configuration, using defaults: {}", e);
            Self::default()
        })
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(CHAR_LIMIT_VAR) {
            config.char_limit = parse_char_limit(&raw)?;
        }

        Ok(config)
    }
}

fn parse_char_limit(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(Error::Config {
            reason: format!("{} must be greater than zero", CHAR_LIMIT_VAR),
        }),
        Ok(limit) => Ok(limit),
        Err(e) => Err(Error::Config {
            reason: format!("{} is not a valid count ({:?}): {}", CHAR_LIMIT_VAR, raw, e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.char_limit, DEFAULT_CHAR_LIMIT);
    }

    #[test]
    fn test_limit_override() {
        let config = Config::from_lookup(|key| {
            (key == CHAR_LIMIT_VAR).then(|| " 1300 ".to_string())
        })
        .unwrap();
        assert_eq!(config.char_limit, 1300);
    }

    #[test]
    fn test_rejects_bad_limits() {
        for bad in ["zero", "0", "-5", ""] {
            let result = Config::from_lookup(|_| Some(bad.to_string()));
            assert!(
                matches!(result, Err(Error::Config { .. })),
                "expected config error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_bad_limit_falls_back_to_default() {
        for bad in ["abc", "0"] {
            let config = Config::from_lookup_or_default(|key| {
                (key == CHAR_LIMIT_VAR).then(|| bad.to_string())
            });
            assert_eq!(config, Config::default());
        }
    }

    #[test]
    fn test_good_limit_survives_fallback_path() {
        let config = Config::from_lookup_or_default(|_| Some("280".to_string()));
        assert_eq!(config.char_limit, 280);
    }
}
