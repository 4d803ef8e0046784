//! The bound routines, as methods on [`SpiceContext`](crate::SpiceContext), grouped by
//! toolkit area.

use crate::Result;
use cspice_marshal::{SpiceBoolean, fstr, to_bool};
use std::ffi::CString;

mod arrays;
mod bodies;
mod cells;
mod ck;
mod constants;
mod coords;
mod daf;
mod das;
mod dsk;
mod ek;
mod elements;
mod errhnd;
mod frames;
mod geometry;
mod gf;
mod interp;
mod kernels;
mod matrix;
mod planes;
mod pool;
mod rotation;
mod sclk;
mod spk;
mod strings;
mod time;
mod vector;

pub use cells::WindowSummary;
pub use daf::DafSummary;
pub use dsk::{DskPlateModel, DskRayHit, Type2Index, Type2Summary};
pub use ek::{EkQueryItem, EkRecord, FastLoad};
pub use geometry::{CutPoints, CutSearch, Illumination, SurfacePoint};
pub use gf::Relation;
pub use kernels::KernelData;
pub use pool::{Fov, PoolType};
pub use spk::SpkSegment;

fn cstr(s: &str) -> Result<CString> {
    Ok(fstr::to_cstring(s)?)
}

/// Apply the found-flag convention.
fn found<T>(flag: SpiceBoolean, value: T) -> Option<T> {
    to_bool(flag).then_some(value)
}
