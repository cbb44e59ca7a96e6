//! Alias registry: canonical name ↔ known spelling variants.
//!
//! The whole table lives in a single JSON document (an object mapping each
//! canonical name to an array of variant strings). Entry order is the
//! document's declared order and is significant: the resolver returns the
//! first matching entry, so serde_json is built with `preserve_order`.
//! Replacement is wholesale, last-writer-wins; there is no merge and no
//! version check.

use crate::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub canonical: String,
    pub variants: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in declared order.
    pub fn entries(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry. Used when building tables in code; documents loaded
    /// from disk keep their own order.
    pub fn push(&mut self, canonical: &str, variants: &[&str]) {
        self.entries.push(AliasEntry {
            canonical: canonical.to_string(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        });
    }

    /// Load the persisted document. A missing, unreadable or malformed
    /// document yields an empty table so the tool stays usable before any
    /// alias has been defined.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Parse a JSON object of `canonical -> [variants]`. Returns an error when
    /// the root is not an object; values that are not arrays of strings are
    /// skipped.
    pub fn from_json(text: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| AppError::Aliases(format!("invalid JSON: {e}")))?;
        let Value::Object(map) = value else {
            return Err(AppError::Aliases(
                "expected a JSON object mapping canonical names to variant arrays".to_string(),
            ));
        };

        let mut entries = Vec::with_capacity(map.len());
        for (canonical, raw_variants) in map {
            if let Value::Array(items) = raw_variants {
                let variants = items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                entries.push(AliasEntry {
                    canonical,
                    variants,
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        let mut map = Map::with_capacity(self.entries.len());
        for entry in &self.entries {
            map.insert(
                entry.canonical.clone(),
                Value::Array(
                    entry
                        .variants
                        .iter()
                        .map(|v| Value::String(v.clone()))
                        .collect(),
                ),
            );
        }
        serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| AppError::Aliases(e.to_string()))
    }

    /// Overwrite the persisted document with this table.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut text = self.to_json_pretty()?;
        text.push('\n');
        fs::write(path, text)?;
        Ok(())
    }
}
