use crate::SpiceInt;
use crate::cell::CellDataType;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("shape mismatch for {what}: expected {expected} elements, got {actual}")]
    Shape {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{what} index {index} is out of range for length {len}")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
    #[error("{what} is not an order vector: {index} is out of range or repeated")]
    InvalidOrder { what: &'static str, index: SpiceInt },
    #[error("cell kind mismatch: expected {expected:?} cell, got {actual:?}")]
    KindMismatch {
        expected: CellDataType,
        actual: CellDataType,
    },
    #[error("string contains an interior NUL byte: {0:?}")]
    InteriorNul(String),
    #[error("string is not ASCII: {0:?}")]
    NotAscii(String),
    #[error("native output is not valid UTF-8")]
    NotUtf8,
    #[error("{what} needs {needed} bytes but the buffer holds {capacity}")]
    CapacityExceeded {
        what: &'static str,
        needed: usize,
        capacity: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
