//! Container naming convention.
//!
//! A container is a schema key for a repeated group (`rows`, `user_rows`),
//! and its item is the key for one repeated element inside it (`row`,
//! `user_row`). The table maps container suffixes to item suffixes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Container-suffix to item-name table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerTable {
    entries: IndexMap<String, String>,
}

/// A schema key recognized as a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerMatch<'t> {
    /// The suffix from the table that matched (`rows`).
    pub suffix: &'t str,
    /// The fully-qualified item key (`user_row` for `user_rows`).
    pub item_key: String,
}

impl Default for ContainerTable {
    fn default() -> Self {
        Self::empty().with("rows", "row")
    }
}

impl ContainerTable {
    /// A table that recognizes nothing.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Add a container suffix and its item name.
    pub fn with(mut self, container: impl Into<String>, item: impl Into<String>) -> Self {
        self.entries.insert(container.into(), item.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, i)| (c.as_str(), i.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Match a schema key against the table.
    ///
    /// The suffix must be the whole key or follow a `_` or `-` separator, so
    /// `arrows` is not a `rows` container. When several suffixes match, the
    /// longest wins.
    pub fn match_key(&self, key: &str) -> Option<ContainerMatch<'_>> {
        self.entries
            .iter()
            .filter(|(suffix, _)| ends_with_word(key, suffix))
            .max_by_key(|(suffix, _)| suffix.len())
            .map(|(suffix, item)| {
                let stem = &key[..key.len() - suffix.len()];
                ContainerMatch {
                    suffix: suffix.as_str(),
                    item_key: format!("{stem}{item}"),
                }
            })
    }
}

fn ends_with_word(key: &str, suffix: &str) -> bool {
    if suffix.is_empty() || !key.ends_with(suffix) {
        return false;
    }
    let stem = &key[..key.len() - suffix.len()];
    stem.is_empty() || stem.ends_with(['_', '-'])
}
