//! Catalog access and repair orchestration for colophon.
//!
//! Implements the discovery → fetch → transform → save loop over the
//! catalog's JSON API, plus configuration loading and request rate
//! limiting. The transforms themselves live in `colophon-core`; this crate
//! only decides which records to visit and whether a transform's output
//! differs from what was fetched.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod config;
pub mod discovery;
pub mod error;
pub mod resilience;
pub mod run;

pub use client::{CatalogClient, Credentials};
pub use config::Config;
pub use discovery::{
    identifier_field, merge_candidates, olid_from_key, CURRENT_BNF_KEY, DEPRECATED_BNF_KEY,
    FIELD_ISBN, FIELD_PUBLISHER,
};
pub use error::{RepairError, RepairResult};
pub use run::{run_repair, RecordStatus, RepairSummary};
