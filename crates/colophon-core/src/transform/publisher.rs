//! The legacy `publisher` field repair.

use crate::record::EditionRecord;

/// Move the legacy singular `publisher` value into the `publishers` array.
///
/// An absent or empty `publisher` leaves the record untouched. Otherwise
/// the value is appended to an existing `publishers` array unless already
/// present, or a one-element array is created, and `publisher` is cleared.
pub fn repair_publisher_field(record: &EditionRecord) -> EditionRecord {
    let Some(publisher) = record.publisher.as_deref().filter(|name| !name.is_empty()) else {
        return record.clone();
    };

    let mut repaired = record.clone();
    repaired.publisher = None;
    repaired.publishers = Some(match record.publishers.as_deref() {
        Some(existing) => {
            let mut merged = existing.to_vec();
            if !merged.iter().any(|name| name == publisher) {
                merged.push(publisher.to_string());
            }
            merged
        }
        None => vec![publisher.to_string()],
    });

    repaired
}
