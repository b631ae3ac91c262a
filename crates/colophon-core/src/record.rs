//! The edition record as the catalog's JSON API serves it.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identifier map of an edition.
///
/// Keys are identifier-scheme names, values are usually arrays of
/// identifier strings. Unrelated keys may hold scalars; repairs pass those
/// through untouched. Key order is significant and must survive a
/// fetch/save round trip.
pub type IdentifierMap = IndexMap<String, Value>;

/// A bibliographic edition's field mapping.
///
/// Only the fields the repair transforms touch are modeled explicitly.
/// Everything else round-trips through `rest`, so a write-back carries the
/// full payload the record was fetched with. `None` means the field is
/// absent from the record, which is distinct from present-but-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<IdentifierMap>,

    /// Legacy singular ISBN field. Catalog data holds either a single
    /// string or an array of strings here.
    #[serde(
        default,
        deserialize_with = "string_or_seq",
        skip_serializing_if = "Option::is_none"
    )]
    pub isbn: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn_10: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn_13: Option<Vec<String>>,

    /// Legacy singular publisher field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishers: Option<Vec<String>>,

    /// Every other record field, preserved verbatim for the write-back.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

fn string_or_seq<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(|value| match value {
        OneOrMany::One(single) => vec![single],
        OneOrMany::Many(many) => many,
    }))
}
