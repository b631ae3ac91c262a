//! End-to-end transform-path tests over realistic record payloads.
//!
//! These exercise exactly what the batch loop does between fetch and save:
//! deserialize the record, apply the pure transform, and compare input and
//! output to decide whether a write is needed. No network involved.

use colophon_core::{merge_identifier_key, repair_edition_fields, EditionRecord};
use colophon_repair::{merge_candidates, olid_from_key, CURRENT_BNF_KEY, DEPRECATED_BNF_KEY};
use serde_json::json;

/// The identifier-merge transform as the CLI wires it up.
fn merge_transform(record: &EditionRecord) -> EditionRecord {
    let mut repaired = record.clone();
    if let Some(ids) = &record.identifiers {
        repaired.identifiers = Some(merge_identifier_key(ids, DEPRECATED_BNF_KEY, CURRENT_BNF_KEY));
    }
    repaired
}

#[test]
fn test_identifier_merge_changes_only_the_identifier_map() {
    let fetched: EditionRecord = serde_json::from_value(json!({
        "key": "/books/OL24726145M",
        "title": "Le Petit Prince",
        "identifiers": {
            "goodreads": ["123"],
            DEPRECATED_BNF_KEY: ["2531-1964"]
        },
        "publishers": ["Gallimard"]
    }))
    .unwrap();

    let repaired = merge_transform(&fetched);
    assert_ne!(repaired, fetched, "a defective record must need a save");

    let saved = serde_json::to_value(&repaired).unwrap();
    assert_eq!(saved["title"], json!("Le Petit Prince"));
    assert_eq!(saved["publishers"], json!(["Gallimard"]));
    assert_eq!(
        saved["identifiers"],
        json!({
            "goodreads": ["123"],
            CURRENT_BNF_KEY: ["2531-1964"]
        })
    );
}

#[test]
fn test_identifier_merge_is_a_noop_on_already_repaired_records() {
    let fetched: EditionRecord = serde_json::from_value(json!({
        "title": "Le Petit Prince",
        "identifiers": { CURRENT_BNF_KEY: ["2531-1964"] }
    }))
    .unwrap();

    // Equality here is what keeps the record off the save path.
    assert_eq!(merge_transform(&fetched), fetched);
}

#[test]
fn test_identifier_merge_ignores_records_without_identifiers() {
    let fetched: EditionRecord =
        serde_json::from_value(json!({"title": "no identifiers here"})).unwrap();
    assert_eq!(merge_transform(&fetched), fetched);
}

#[test]
fn test_field_repair_full_record_round_trip() {
    let fetched: EditionRecord = serde_json::from_value(json!({
        "key": "/books/OL1M",
        "type": {"key": "/type/edition"},
        "title": "A Repairable Book",
        "isbn": ["0002217317", "9780030050459"],
        "isbn_13": ["9780030050459"],
        "publisher": "Collins",
        "number_of_pages": 318
    }))
    .unwrap();

    let repaired = repair_edition_fields(&fetched).unwrap();
    assert_ne!(repaired, fetched);

    let saved = serde_json::to_value(&repaired).unwrap();
    assert!(saved.get("isbn").is_none());
    assert!(saved.get("publisher").is_none());
    assert_eq!(saved["isbn_10"], json!(["0002217317"]));
    assert_eq!(saved["isbn_13"], json!(["9780030050459"]));
    assert_eq!(saved["publishers"], json!(["Collins"]));
    // Untouched fields survive the round trip for the PUT body.
    assert_eq!(saved["key"], json!("/books/OL1M"));
    assert_eq!(saved["number_of_pages"], json!(318));
}

#[test]
fn test_field_repair_second_pass_is_a_noop() {
    let fetched: EditionRecord = serde_json::from_value(json!({
        "isbn": ["0002217317"],
        "publisher": "Collins"
    }))
    .unwrap();

    let once = repair_edition_fields(&fetched).unwrap();
    let twice = repair_edition_fields(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_field_repair_isolates_the_offending_value() {
    let fetched: EditionRecord = serde_json::from_value(json!({
        "isbn": ["0002217317", "123456"]
    }))
    .unwrap();

    let err = repair_edition_fields(&fetched).unwrap_err();
    assert!(err.to_string().contains("123456"));
}

#[test]
fn test_discovery_candidates_from_two_queries_visit_each_record_once() {
    let isbn_hits = vec![
        olid_from_key("/books/OL1M").to_string(),
        olid_from_key("/books/OL2M").to_string(),
    ];
    let publisher_hits = vec![
        olid_from_key("/books/OL2M").to_string(),
        olid_from_key("/books/OL3M").to_string(),
    ];

    assert_eq!(
        merge_candidates(isbn_hits, publisher_hits),
        ["OL1M", "OL2M", "OL3M"]
    );
}
