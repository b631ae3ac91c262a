//! Pure repair transforms over edition records.
//!
//! Every transform here is copy-based: it borrows its input and returns a
//! corrected value, never mutating the original. The batch runner compares
//! input and output to decide whether a record needs saving, so identity
//! output means "already correct, skip the write".

mod identifiers;
mod isbn;
mod publisher;

pub use identifiers::merge_identifier_key;
pub use isbn::{partition_isbns, repair_isbn_fields};
pub use publisher::repair_publisher_field;

use crate::record::EditionRecord;
use crate::Result;

/// Apply both legacy-field repairs in sequence: ISBN first, then publisher.
///
/// # Errors
/// Propagates [`Error::InvalidIsbn`] from the ISBN classification; the
/// publisher repair cannot fail.
///
/// [`Error::InvalidIsbn`]: crate::Error::InvalidIsbn
pub fn repair_edition_fields(record: &EditionRecord) -> Result<EditionRecord> {
    let repaired = repair_isbn_fields(record)?;
    Ok(repair_publisher_field(&repaired))
}
