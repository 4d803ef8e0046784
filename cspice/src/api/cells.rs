//! Cells, sets and windows.
//!
//! Routines that work on any kind of cell are generic over [`AsSpiceCell`]. Routines
//! combining several cells take them all of one Rust type; for [`AnyCell`](crate::AnyCell)
//! the kinds are also checked at run time before the call.

use super::cstr;
use crate::{AsSpiceCell, CharCell, DoubleCell, IntCell, Result, SpiceContext, SpiceInt};
use cspice_marshal::{Error as MarshalError, fstr, host_count, spice_int, to_bool};

fn same_kind<C: AsSpiceCell>(a: &C, b: &C) -> Result<()> {
    if a.dtype() == b.dtype() {
        Ok(())
    } else {
        Err(MarshalError::KindMismatch {
            expected: a.dtype(),
            actual: b.dtype(),
        }
        .into())
    }
}

/// Native routines that take a size store it in the header and then use it, so it must
/// fit in the owned buffer.
fn check_capacity<C: AsSpiceCell>(what: &'static str, size: usize, cell: &C) -> Result<()> {
    if size > cell.capacity() {
        return Err(MarshalError::CapacityExceeded {
            what,
            needed: size,
            capacity: cell.capacity(),
        }
        .into());
    }
    Ok(())
}

/// Measure statistics of a window, from `wnsumd_c`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowSummary {
    /// Total measure of all intervals.
    pub meas: f64,
    pub avg: f64,
    pub stddev: f64,
    /// Left endpoint indices of the shortest and longest intervals.
    pub idxsml: SpiceInt,
    pub idxlon: SpiceInt,
}

impl SpiceContext<'_> {
    pub fn appndc(&mut self, item: &str, cell: &mut CharCell) -> Result<()> {
        let item = cstr(item)?;
        native!(self, appndc_c(item.as_ptr(), cell.as_spice_cell()));
        Ok(())
    }

    pub fn appndd(&mut self, item: f64, cell: &mut DoubleCell) -> Result<()> {
        native!(self, appndd_c(item, cell.as_spice_cell()));
        Ok(())
    }

    pub fn appndi(&mut self, item: SpiceInt, cell: &mut IntCell) -> Result<()> {
        native!(self, appndi_c(item, cell.as_spice_cell()));
        Ok(())
    }

    /// Cardinality as seen by native code.
    pub fn card<C: AsSpiceCell>(&mut self, cell: &mut C) -> Result<usize> {
        let n = native!(self, card_c(cell.as_spice_cell()));
        Ok(host_count(n))
    }

    pub fn size<C: AsSpiceCell>(&mut self, cell: &mut C) -> Result<usize> {
        let n = native!(self, size_c(cell.as_spice_cell()));
        Ok(host_count(n))
    }

    pub fn scard<C: AsSpiceCell>(&mut self, card: usize, cell: &mut C) -> Result<()> {
        native!(self, scard_c(spice_int(card), cell.as_spice_cell()));
        Ok(())
    }

    /// Change the declared size, up to the cell's capacity.
    pub fn ssize<C: AsSpiceCell>(&mut self, size: usize, cell: &mut C) -> Result<()> {
        check_capacity("ssize", size, cell)?;
        native!(self, ssize_c(spice_int(size), cell.as_spice_cell()));
        Ok(())
    }

    /// Copy the contents of `cell` into `copy`.
    pub fn copy<C: AsSpiceCell>(&mut self, cell: &mut C, copy: &mut C) -> Result<()> {
        same_kind(cell, copy)?;
        native!(self, copy_c(cell.as_spice_cell(), copy.as_spice_cell()));
        Ok(())
    }

    /// Make a set out of the first `n` elements of a cell, sorting and dropping
    /// duplicates.
    pub fn valid<C: AsSpiceCell>(&mut self, size: usize, n: usize, a: &mut C) -> Result<()> {
        check_capacity("valid", size, a)?;
        native!(self, valid_c(spice_int(size), spice_int(n), a.as_spice_cell()));
        Ok(())
    }

    pub fn insrtc(&mut self, item: &str, set: &mut CharCell) -> Result<()> {
        let item = cstr(item)?;
        native!(self, insrtc_c(item.as_ptr(), set.as_spice_cell()));
        Ok(())
    }

    pub fn insrtd(&mut self, item: f64, set: &mut DoubleCell) -> Result<()> {
        native!(self, insrtd_c(item, set.as_spice_cell()));
        Ok(())
    }

    pub fn insrti(&mut self, item: SpiceInt, set: &mut IntCell) -> Result<()> {
        native!(self, insrti_c(item, set.as_spice_cell()));
        Ok(())
    }

    pub fn removc(&mut self, item: &str, set: &mut CharCell) -> Result<()> {
        let item = cstr(item)?;
        native!(self, removc_c(item.as_ptr(), set.as_spice_cell()));
        Ok(())
    }

    pub fn removd(&mut self, item: f64, set: &mut DoubleCell) -> Result<()> {
        native!(self, removd_c(item, set.as_spice_cell()));
        Ok(())
    }

    pub fn removi(&mut self, item: SpiceInt, set: &mut IntCell) -> Result<()> {
        native!(self, removi_c(item, set.as_spice_cell()));
        Ok(())
    }

    pub fn elemc(&mut self, item: &str, set: &mut CharCell) -> Result<bool> {
        let item = cstr(item)?;
        Ok(to_bool(native!(self, elemc_c(item.as_ptr(), set.as_spice_cell()))))
    }

    pub fn elemd(&mut self, item: f64, set: &mut DoubleCell) -> Result<bool> {
        Ok(to_bool(native!(self, elemd_c(item, set.as_spice_cell()))))
    }

    pub fn elemi(&mut self, item: SpiceInt, set: &mut IntCell) -> Result<bool> {
        Ok(to_bool(native!(self, elemi_c(item, set.as_spice_cell()))))
    }

    /// `c = a ∪ b`
    pub fn union<C: AsSpiceCell>(&mut self, a: &mut C, b: &mut C, c: &mut C) -> Result<()> {
        same_kind(a, b)?;
        same_kind(a, c)?;
        native!(
            self,
            union_c(a.as_spice_cell(), b.as_spice_cell(), c.as_spice_cell())
        );
        Ok(())
    }

    pub fn inter<C: AsSpiceCell>(&mut self, a: &mut C, b: &mut C, c: &mut C) -> Result<()> {
        same_kind(a, b)?;
        same_kind(a, c)?;
        native!(
            self,
            inter_c(a.as_spice_cell(), b.as_spice_cell(), c.as_spice_cell())
        );
        Ok(())
    }

    pub fn diff<C: AsSpiceCell>(&mut self, a: &mut C, b: &mut C, c: &mut C) -> Result<()> {
        same_kind(a, b)?;
        same_kind(a, c)?;
        native!(
            self,
            diff_c(a.as_spice_cell(), b.as_spice_cell(), c.as_spice_cell())
        );
        Ok(())
    }

    /// Symmetric difference.
    pub fn sdiff<C: AsSpiceCell>(&mut self, a: &mut C, b: &mut C, c: &mut C) -> Result<()> {
        same_kind(a, b)?;
        same_kind(a, c)?;
        native!(
            self,
            sdiff_c(a.as_spice_cell(), b.as_spice_cell(), c.as_spice_cell())
        );
        Ok(())
    }

    /// Compare two sets with a relational operator such as `"<="` or `"&"`.
    pub fn set<C: AsSpiceCell>(&mut self, a: &mut C, op: &str, b: &mut C) -> Result<bool> {
        same_kind(a, b)?;
        let op = cstr(op)?;
        let ret = native!(
            self,
            set_c(a.as_spice_cell(), op.as_ptr(), b.as_spice_cell())
        );
        Ok(to_bool(ret))
    }

    // Windows

    /// Number of intervals.
    pub fn wncard(&mut self, window: &mut DoubleCell) -> Result<usize> {
        let n = native!(self, wncard_c(window.as_spice_cell()));
        Ok(host_count(n))
    }

    /// Complement of `window` with respect to `[left, right]`.
    pub fn wncomd(&mut self, left: f64, right: f64, window: &mut DoubleCell, result: &mut DoubleCell) -> Result<()> {
        native!(
            self,
            wncomd_c(left, right, window.as_spice_cell(), result.as_spice_cell())
        );
        Ok(())
    }

    /// Contract every interval.
    pub fn wncond(&mut self, left: f64, right: f64, window: &mut DoubleCell) -> Result<()> {
        native!(self, wncond_c(left, right, window.as_spice_cell()));
        Ok(())
    }

    pub fn wndifd(&mut self, a: &mut DoubleCell, b: &mut DoubleCell, c: &mut DoubleCell) -> Result<()> {
        native!(
            self,
            wndifd_c(a.as_spice_cell(), b.as_spice_cell(), c.as_spice_cell())
        );
        Ok(())
    }

    pub fn wnelmd(&mut self, point: f64, window: &mut DoubleCell) -> Result<bool> {
        Ok(to_bool(native!(self, wnelmd_c(point, window.as_spice_cell()))))
    }

    /// Expand every interval.
    pub fn wnexpd(&mut self, left: f64, right: f64, window: &mut DoubleCell) -> Result<()> {
        native!(self, wnexpd_c(left, right, window.as_spice_cell()));
        Ok(())
    }

    /// Collapse every interval to its left (`'L'`) or right (`'R'`) endpoint.
    pub fn wnextd(&mut self, side: char, window: &mut DoubleCell) -> Result<()> {
        let side = fstr::to_char(side)?;
        native!(self, wnextd_c(side, window.as_spice_cell()));
        Ok(())
    }

    /// Interval `n` (0-based).
    pub fn wnfetd(&mut self, window: &mut DoubleCell, n: usize) -> Result<(f64, f64)> {
        let (mut left, mut right) = (0.0, 0.0);
        native!(
            self,
            wnfetd_c(window.as_spice_cell(), spice_int(n), &mut left, &mut right)
        );
        Ok((left, right))
    }

    /// Fill gaps no longer than `sml`.
    pub fn wnfild(&mut self, sml: f64, window: &mut DoubleCell) -> Result<()> {
        native!(self, wnfild_c(sml, window.as_spice_cell()));
        Ok(())
    }

    /// Drop intervals no longer than `sml`.
    pub fn wnfltd(&mut self, sml: f64, window: &mut DoubleCell) -> Result<()> {
        native!(self, wnfltd_c(sml, window.as_spice_cell()));
        Ok(())
    }

    /// Whether `[left, right]` is contained in the window.
    pub fn wnincd(&mut self, left: f64, right: f64, window: &mut DoubleCell) -> Result<bool> {
        Ok(to_bool(native!(
            self,
            wnincd_c(left, right, window.as_spice_cell())
        )))
    }

    pub fn wninsd(&mut self, left: f64, right: f64, window: &mut DoubleCell) -> Result<()> {
        native!(self, wninsd_c(left, right, window.as_spice_cell()));
        Ok(())
    }

    pub fn wnintd(&mut self, a: &mut DoubleCell, b: &mut DoubleCell, c: &mut DoubleCell) -> Result<()> {
        native!(
            self,
            wnintd_c(a.as_spice_cell(), b.as_spice_cell(), c.as_spice_cell())
        );
        Ok(())
    }

    pub fn wnreld(&mut self, a: &mut DoubleCell, op: &str, b: &mut DoubleCell) -> Result<bool> {
        let op = cstr(op)?;
        let ret = native!(
            self,
            wnreld_c(a.as_spice_cell(), op.as_ptr(), b.as_spice_cell())
        );
        Ok(to_bool(ret))
    }

    pub fn wnsumd(&mut self, window: &mut DoubleCell) -> Result<WindowSummary> {
        let mut s = WindowSummary::default();
        native!(
            self,
            wnsumd_c(
                window.as_spice_cell(),
                &mut s.meas,
                &mut s.avg,
                &mut s.stddev,
                &mut s.idxsml,
                &mut s.idxlon
            )
        );
        Ok(s)
    }

    pub fn wnunid(&mut self, a: &mut DoubleCell, b: &mut DoubleCell, c: &mut DoubleCell) -> Result<()> {
        native!(
            self,
            wnunid_c(a.as_spice_cell(), b.as_spice_cell(), c.as_spice_cell())
        );
        Ok(())
    }

    /// Make a window out of the first `n` endpoints of a cell.
    pub fn wnvald(&mut self, size: usize, n: usize, window: &mut DoubleCell) -> Result<()> {
        check_capacity("wnvald", size, window)?;
        native!(
            self,
            wnvald_c(spice_int(size), spice_int(n), window.as_spice_cell())
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnyCell, CellDataType};

    #[test]
    fn mixed_any_cells_rejected() {
        let a = AnyCell::from(IntCell::new(4));
        let b = AnyCell::from(DoubleCell::new(4));
        let err = same_kind(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Marshal(MarshalError::KindMismatch {
                expected: CellDataType::Int,
                actual: CellDataType::Dp,
            })
        ));
        assert!(same_kind(&a, &AnyCell::from(IntCell::new(1))).is_ok());
    }
}
