//! Immutable name → resolved text mapping.

use std::{
    collections::{BTreeMap, btree_map::Entry},
    fmt,
    str::FromStr,
};

use crate::{
    error::{KeyError, ParseError},
    parsing::resolve::ResolvedBlock,
};

/// A validated string key.
///
/// Construct keys once where the application registers them, then use
/// [`Store::check_keys`] in tests so a typo fails the build instead of
/// showing up as a missing string at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    pub fn new(key: impl Into<String>) -> Result<Self, KeyError> {
        let key = key.into();
        if key.is_empty() {
            return Err(KeyError::Invalid {
                key,
                reason: "key is empty",
            });
        }
        if key.chars().any(char::is_whitespace) {
            return Err(KeyError::Invalid {
                key,
                reason: "key contains whitespace",
            });
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Key {
    type Error = KeyError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a lookup with key fallback.
///
/// `Missing` carries the requested key so it can be shown as display text,
/// but the caller can always tell it apart from a real translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation<'a> {
    Found(&'a str),
    Missing(&'a str),
}

impl<'a> Translation<'a> {
    /// The translated text, or the key itself when missing.
    pub fn text(self) -> &'a str {
        match self {
            Translation::Found(text) | Translation::Missing(text) => text,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Translation::Found(_))
    }
}

impl fmt::Display for Translation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredEntry {
    text: String,
    comment: Option<String>,
    line: usize,
}

/// Resolved strings of one resource.
///
/// Built once and never mutated; a reload builds a new `Store`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    entries: BTreeMap<String, StoredEntry>,
}

impl Store {
    /// Builds a store, rejecting names defined twice.
    pub fn build(blocks: impl IntoIterator<Item = ResolvedBlock>) -> Result<Self, ParseError> {
        let mut entries: BTreeMap<String, StoredEntry> = BTreeMap::new();
        for block in blocks {
            match entries.entry(block.name) {
                Entry::Occupied(existing) => {
                    return Err(ParseError::DuplicateBlock {
                        name: existing.key().clone(),
                        line: block.line,
                        first_line: existing.get().line,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(StoredEntry {
                        text: block.text,
                        comment: block.comment,
                        line: block.line,
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn lookup(&self, name: &str) -> Result<&str, KeyError> {
        self.entries
            .get(name)
            .map(|e| e.text.as_str())
            .ok_or_else(|| KeyError::NotFound {
                key: name.to_string(),
            })
    }

    pub fn get(&self, key: &Key) -> Result<&str, KeyError> {
        self.lookup(key.as_str())
    }

    /// Lookup that falls back to the key, explicitly marked as missing.
    pub fn lookup_or_key<'a>(&'a self, name: &'a str) -> Translation<'a> {
        match self.entries.get(name) {
            Some(e) => Translation::Found(&e.text),
            None => Translation::Missing(name),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Translator comment from the block header, if any.
    pub fn comment(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(|e| e.comment.as_deref())
    }

    /// Every registered key that this store cannot answer, reported at once.
    pub fn check_keys<'k>(&self, keys: impl IntoIterator<Item = &'k Key>) -> Result<(), KeyError> {
        let missing: Vec<String> = keys
            .into_iter()
            .filter(|k| !self.contains(k.as_str()))
            .map(|k| k.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(KeyError::Missing { keys: missing })
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, text)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, e)| (name.as_str(), e.text.as_str()))
    }
}
