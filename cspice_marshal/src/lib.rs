//! Conversion between Rust values and the fixed-layout buffers expected by CSPICE.
//!
//! Nothing in this crate calls native code. It owns the memory that gets lent to a
//! native call, and knows how to read it back afterwards:
//!
//! * fixed-size vectors and matrices ([`array`]), laid out row-major like C
//! * NUL-terminated input strings and pre-sized output strings ([`fstr`])
//! * fixed-width string arrays, `void *cvals` plus `lenvals` in C ([`CharArray`])
//! * tagged `SpiceCell` containers ([`Cell`], [`CharCell`], [`AnyCell`])
//! * small by-reference structs like [`Plane`] and [`Ellipse`] ([`records`])

#![allow(clippy::new_without_default)]

pub mod array;
mod cell;
mod chararray;
mod errors;
pub mod fstr;
pub mod records;
mod types;

pub use array::Matrix;
pub use cell::*;
pub use chararray::*;
pub use errors::*;
pub use fstr::FixedString;
pub use records::{DlaDescr, DskDescr, EkAttDsc, EkDataType, EkSegSum, Ellipse, Plane};
pub use types::*;
