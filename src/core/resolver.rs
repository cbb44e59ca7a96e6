//! Write-time name normalization.
//!
//! `resolve` maps a free-text participant name to its canonical identity.
//! It is pure and order-sensitive: when a variant is claimed by more than one
//! canonical entry, the entry that appears first in the table wins. Callers
//! must load a fresh table snapshot on every write; results are never cached
//! because the table can change between requests.

use crate::core::aliases::AliasTable;

/// Resolve a raw name against the alias table.
///
/// Matching is case-insensitive and whitespace-trimmed on the input side; a
/// canonical name always matches itself even when absent from its own variant
/// list. Unknown names pass through unchanged and act as their own canonical
/// identity. Empty input is returned as-is rather than inventing a name.
pub fn resolve(raw: &str, table: &AliasTable) -> String {
    let needle = raw.trim().to_lowercase();
    if needle.is_empty() {
        return raw.to_string();
    }

    for entry in table.entries() {
        if entry.canonical.to_lowercase() == needle
            || entry.variants.iter().any(|v| v.to_lowercase() == needle)
        {
            return entry.canonical.clone();
        }
    }

    raw.to_string()
}

/// Optional-field variant enforcing the store invariant: the canonical name
/// is present if and only if the raw name is present and non-empty.
pub fn resolve_optional(raw: Option<&str>, table: &AliasTable) -> Option<String> {
    match raw {
        Some(name) if !name.trim().is_empty() => Some(resolve(name, table)),
        _ => None,
    }
}
