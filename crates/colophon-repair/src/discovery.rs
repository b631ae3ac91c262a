//! Discovery: which records does each repair visit?
//!
//! The catalog's query endpoint matches editions by field pattern
//! (`{field}~=*` means "field has any value"). Each repair contributes the
//! patterns naming the defect it fixes.

use indexmap::IndexSet;

/// Deprecated spelling of the BnF identifier key.
pub const DEPRECATED_BNF_KEY: &str = "bibliothèque_nationale_de_france_(bnf)";

/// Current spelling of the BnF identifier key.
pub const CURRENT_BNF_KEY: &str = "bibliothèque_nationale_de_france";

/// Legacy singular ISBN field.
pub const FIELD_ISBN: &str = "isbn";

/// Legacy singular publisher field.
pub const FIELD_PUBLISHER: &str = "publisher";

/// Query field matching editions that carry the given identifier key.
pub fn identifier_field(key: &str) -> String {
    format!("identifiers.{key}")
}

/// Reduce a catalog key reference like `/books/OL20422410M` to its OLID.
pub fn olid_from_key(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Concatenate candidate lists, dropping repeats while preserving
/// first-seen order. A record matching both discovery queries should be
/// visited once, not twice.
pub fn merge_candidates(first: Vec<String>, second: Vec<String>) -> Vec<String> {
    first
        .into_iter()
        .chain(second)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}
