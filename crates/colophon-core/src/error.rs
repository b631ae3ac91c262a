use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value is neither 10 nor 13 characters long, so it cannot be
    /// classified as an ISBN-10 or ISBN-13. Check digits are never
    /// inspected; length is the only criterion.
    #[error("invalid ISBN {value:?}: length is neither 10 nor 13")]
    InvalidIsbn { value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
