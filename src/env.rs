//! Read-only snapshot of the environment-variable table.
//!
//! Resolution never queries `std::env` directly; it reads through an
//! [`EnvSource`] captured once per load. Tests construct snapshots from
//! synthetic pairs instead of mutating the process environment.

use std::collections::HashMap;

/// A read-only name → value mapping queried by exact key.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Snapshot the current process environment.
    pub fn process() -> Self {
        Self::from_pairs(std::env::vars())
    }

    /// Build a snapshot from synthetic pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            vars: pairs.into_iter().collect(),
        }
    }

    /// Look up a variable. A variable set to the empty string is reported
    /// as absent, so it falls through to the next-lower-precedence source
    /// instead of writing an explicit empty value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
