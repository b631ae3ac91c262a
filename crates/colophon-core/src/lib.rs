//! Core domain model for colophon.
//!
//! This crate defines the edition record shape, the identifier map, and
//! the pure repair transforms the batch runners apply. It performs no I/O:
//! every transform takes a value and returns a corrected copy, so the
//! orchestration layer can decide whether anything actually changed.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod record;
pub mod transform;

pub use error::{Error, Result};
pub use record::{EditionRecord, IdentifierMap};
pub use transform::{
    merge_identifier_key, partition_isbns, repair_edition_fields, repair_isbn_fields,
    repair_publisher_field,
};
