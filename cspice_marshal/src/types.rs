//! Scalar types of the CSPICE C ABI.
//!
//! CSPICE defines `SpiceInt` as `int` on every 64-bit platform it supports,
//! and `SpiceBoolean` as `int`.

use std::os::raw::{c_char, c_double, c_int};

pub type SpiceInt = c_int;
pub type SpiceDouble = c_double;
pub type SpiceBoolean = c_int;
pub type SpiceChar = c_char;

pub const SPICETRUE: SpiceBoolean = 1;
pub const SPICEFALSE: SpiceBoolean = 0;

pub fn to_bool(b: SpiceBoolean) -> bool {
    b != SPICEFALSE
}

pub fn from_bool(b: bool) -> SpiceBoolean {
    if b { SPICETRUE } else { SPICEFALSE }
}

/// Convert a host-side count or index into a `SpiceInt`.
///
/// Counts in this crate always come from in-memory buffers, which are far smaller
/// than `SpiceInt::MAX`, so the cast cannot truncate in practice.
pub fn spice_int(n: usize) -> SpiceInt {
    debug_assert!(n <= SpiceInt::MAX as usize);
    n as SpiceInt
}

/// Convert a count reported by native code back into a `usize`, treating negative
/// values as empty.
pub fn host_count(n: SpiceInt) -> usize {
    n.max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans() {
        assert!(to_bool(SPICETRUE));
        assert!(to_bool(42));
        assert!(!to_bool(SPICEFALSE));
        assert_eq!(from_bool(true), SPICETRUE);
        assert_eq!(from_bool(false), SPICEFALSE);
    }

    #[test]
    fn counts() {
        assert_eq!(host_count(-3), 0);
        assert_eq!(host_count(7), 7);
        assert_eq!(spice_int(12), 12);
    }
}
