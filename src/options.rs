use std::fmt;

use itertools::Itertools;
use serde_json::{Map, Value};
use tracing::trace;

use crate::errors::{OptError, Result};

/// Names that address internal bookkeeping rather than stored options. Only
/// the scope cursor is reachable by name; the entry map itself is not.
const RESERVED: &[&str] = &["_scope"];

/// A scope-qualified option store. Reads and writes are redirected through
/// the active scope, so `set("power", ...)` inside scope `"render"` lands on
/// the qualified key `"render/power"` and is invisible from any other scope.
///
/// Values are plain [`serde_json::Value`]s and are stored and returned as-is,
/// with no coercion. The empty string is the root scope.
#[derive(Debug, Clone, Default)]
pub struct ScopedOptions {
    pub(crate) entries: Map<String, Value>,
    pub(crate) scope: String,
}

impl ScopedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active scope; `""` is the root scope.
    pub fn current_scope(&self) -> &str {
        &self.scope
    }

    /// Look up `name` under the active scope. Names match case-insensitively.
    pub fn get(&self, name: &str) -> Result<&Value> {
        let key = self.qualified(name);
        self.entries
            .get(&key)
            .ok_or_else(|| OptError::MissingAttribute {
                name: name.to_lowercase(),
                scope: self.scope.clone(),
            })
    }

    /// Store `value` for `name` under the active scope, creating or replacing
    /// the entry. Reserved bookkeeping names are rejected.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        if RESERVED.contains(&name.to_lowercase().as_str()) {
            return Err(OptError::ReservedAttribute(name.to_lowercase()));
        }
        let key = self.qualified(name);
        trace!(key = %key, "set option");
        self.entries.insert(key, value.into());
        Ok(())
    }

    /// Snapshot the store, then apply `overrides` to the snapshot through
    /// [`set`](Self::set), under the scope the snapshot inherits from `self`
    /// at copy time. The original is never touched, and no value is shared
    /// between the two instances afterwards.
    pub fn clone_with<K, I>(&self, overrides: I) -> Result<ScopedOptions>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut snapshot = self.clone();
        for (name, value) in overrides {
            snapshot.set(name.as_ref(), value)?;
        }
        Ok(snapshot)
    }

    // Qualified key for `name` under the active scope. Names are required to
    // be non-empty, so every key keeps the `/` separator even at root scope.
    fn qualified(&self, name: &str) -> String {
        assert!(!name.is_empty(), "option name must not be empty");
        format!("{}/{}", self.scope, name.to_lowercase())
    }
}

/// Debug rendering: one line per entry in insertion order, qualified key
/// uppercased with the outer separators trimmed. Not a parseable format.
impl fmt::Display for ScopedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .entries
            .iter()
            .map(|(key, value)| format!("  {} = {}", key.trim_matches('/').to_uppercase(), value))
            .join("\n");
        if body.is_empty() {
            write!(f, "ScopedOptions(\n)")
        } else {
            write!(f, "ScopedOptions(\n{body}\n)")
        }
    }
}
