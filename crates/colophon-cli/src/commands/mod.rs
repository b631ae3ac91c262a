pub mod config;
pub mod fields;
pub mod identifiers;

pub use fields::run_fields;
pub use identifiers::run_identifiers;
