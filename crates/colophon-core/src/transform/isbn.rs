//! Length-based ISBN classification and the legacy `isbn` field repair.

use crate::record::EditionRecord;
use crate::{Error, Result};

/// Partition ISBN strings into `(ISBN-10s, ISBN-13s)` by length.
///
/// Classification is length-based only; check digits are never validated
/// or repaired. Relative order within each partition matches the input.
///
/// # Errors
/// Returns [`Error::InvalidIsbn`] naming the first value that is neither
/// 10 nor 13 characters long. No partial result is produced.
pub fn partition_isbns(isbns: &[String]) -> Result<(Vec<String>, Vec<String>)> {
    let mut isbn_10s = Vec::new();
    let mut isbn_13s = Vec::new();

    for isbn in isbns {
        match isbn.chars().count() {
            10 => isbn_10s.push(isbn.clone()),
            13 => isbn_13s.push(isbn.clone()),
            _ => {
                return Err(Error::InvalidIsbn {
                    value: isbn.clone(),
                })
            }
        }
    }

    Ok((isbn_10s, isbn_13s))
}

/// Move values out of the legacy `isbn` field into `isbn_10`/`isbn_13`.
///
/// An absent or empty `isbn` field leaves the record untouched (an empty
/// array stays on the record). Otherwise the values are classified,
/// appended into the existing array fields without duplicating, or used to
/// create them, and `isbn` itself is cleared.
///
/// # Errors
/// Propagates [`Error::InvalidIsbn`] from the classification; no partial
/// repair is produced and the input is never mutated.
pub fn repair_isbn_fields(record: &EditionRecord) -> Result<EditionRecord> {
    let Some(isbns) = record.isbn.as_deref().filter(|values| !values.is_empty()) else {
        return Ok(record.clone());
    };

    let (isbn_10s, isbn_13s) = partition_isbns(isbns)?;

    let mut repaired = record.clone();
    repaired.isbn = None;
    repaired.isbn_10 = merge_into(record.isbn_10.as_deref(), isbn_10s);
    repaired.isbn_13 = merge_into(record.isbn_13.as_deref(), isbn_13s);

    Ok(repaired)
}

/// Append classified values to an existing list without duplicating, or
/// create the list when absent and there is something to put in it.
fn merge_into(existing: Option<&[String]>, incoming: Vec<String>) -> Option<Vec<String>> {
    match existing {
        Some(values) => {
            let mut merged = values.to_vec();
            for value in incoming {
                if !merged.contains(&value) {
                    merged.push(value);
                }
            }
            Some(merged)
        }
        None if incoming.is_empty() => None,
        None => Some(incoming),
    }
}
