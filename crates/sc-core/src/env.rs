//! Environment variable lookup with prefixed keys and plain fallbacks
//!
//! Docker/.env setups commonly expose the same setting twice: once under a
//! project prefix (`SUITECRM_DB_HOST`) and once under a generic name
//! (`DB_HOST`). Lookups check the prefixed key first, then the fallback, then
//! use a hardcoded default. Empty strings count as unset.

use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;
use std::str::FromStr;

/// A source of environment variables.
pub trait EnvSource {
    /// Raw value of `key`, `None` when unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key` unless it is unset or empty.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are treated as unset
        std::env::var(key).ok()
    }
}

/// An in-memory environment, used for tests and for explicit overrides.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// A setting addressed by a prefixed key and an optional plain fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvKey {
    pub primary: &'static str,
    pub fallback: Option<&'static str>,
}

impl EnvKey {
    /// Key with a fallback name
    pub const fn new(primary: &'static str, fallback: &'static str) -> Self {
        Self {
            primary,
            fallback: Some(fallback),
        }
    }

    /// Key without a fallback
    pub const fn single(primary: &'static str) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    /// Resolve to `(variable name, value)`, primary first.
    pub fn lookup(&self, env: &dyn EnvSource) -> Option<(&'static str, String)> {
        std::iter::once(self.primary)
            .chain(self.fallback)
            .find_map(|name| env.non_empty(name).map(|value| (name, value)))
    }

    /// Resolve to a string, or `default` when neither key is set.
    pub fn string_or(&self, env: &dyn EnvSource, default: &str) -> String {
        self.lookup(env)
            .map(|(_, value)| value)
            .unwrap_or_else(|| default.to_string())
    }

    /// Resolve and parse, or `default` when neither key is set.
    ///
    /// A value that is set but does not parse is an error naming the
    /// variable it came from.
    pub fn parse_or<T: FromStr>(
        &self,
        env: &dyn EnvSource,
        default: T,
        expected: &'static str,
    ) -> CoreResult<T> {
        match self.lookup(env) {
            None => Ok(default),
            Some((name, value)) => {
                value
                    .trim()
                    .parse()
                    .map_err(|_| CoreError::InvalidEnvValue {
                        var: name.to_string(),
                        value,
                        expected,
                    })
            }
        }
    }
}

/// Whether a flag variable is switched on.
///
/// Unset, empty, and `"0"` are off; anything else is on.
pub fn is_flag_set(env: &dyn EnvSource, key: &str) -> bool {
    env.non_empty(key).is_some_and(|v| v != "0")
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
