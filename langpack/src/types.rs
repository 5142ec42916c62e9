//! Core data types: registry entries, the active translation table, and the
//! `Language` view entity.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::format::Pair;

/// A discovered locale: its identifier and the resource name backing it.
///
/// The registry of these is populated once during catalog initialization and
/// is immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    /// Locale identifier, e.g. `"en"` or `"es-ES"`.
    pub code: String,
    /// Resource name the locale loads from, as reported by its source.
    pub resource: String,
}

/// A locale identifier paired with a human-readable display name.
///
/// The display name is obtained by translating the identifier itself against
/// the currently active table, so it is always rendered in the active locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// The active locale's key → template mapping.
///
/// Built wholesale from one parsed locale file and replaced wholesale on a
/// locale switch; never partially mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Builds a table from parsed pairs.
    ///
    /// A key appearing more than once in the same file is a load error; the
    /// error names the offending line.
    pub fn from_pairs(pairs: Vec<Pair>) -> Result<Self, Error> {
        let mut entries = HashMap::with_capacity(pairs.len());
        for pair in pairs {
            match entries.entry(pair.key) {
                Entry::Occupied(existing) => {
                    return Err(Error::duplicate_key(pair.line, existing.key()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(pair.value);
                }
            }
        }
        Ok(TranslationTable { entries })
    }

    /// Returns the template stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, template)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
