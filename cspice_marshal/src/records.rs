//! Fixed-layout structs passed by reference to native routines.
//!
//! All of these are `#[repr(C)]` copies of the CSPICE typedefs, so a `&mut Plane` can be
//! handed to native code as a `SpicePlane *` directly.

use crate::{Result, SpiceBoolean, SpiceDouble, SpiceInt, fstr, host_count, to_bool};

/// `SpicePlane`: the set of points `x` with `<x, normal> = constant`. `normal` is a unit
/// vector when produced by native code.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Plane {
    pub normal: [SpiceDouble; 3],
    pub constant: SpiceDouble,
}

/// `SpiceEllipse`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ellipse {
    pub center: [SpiceDouble; 3],
    pub semi_major: [SpiceDouble; 3],
    pub semi_minor: [SpiceDouble; 3],
}

/// `SpiceDLADescr`: a DLA segment's link pointers and its base addresses and sizes in
/// each DAS data type.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DlaDescr {
    pub bwdptr: SpiceInt,
    pub fwdptr: SpiceInt,
    pub ibase: SpiceInt,
    pub isize: SpiceInt,
    pub dbase: SpiceInt,
    pub dsize: SpiceInt,
    pub cbase: SpiceInt,
    pub csize: SpiceInt,
}

/// Number of coordinate system parameters in a DSK descriptor.
pub const NSYPAR: usize = 10;

/// `SpiceDSKDescr`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DskDescr {
    pub surfce: SpiceInt,
    pub center: SpiceInt,
    pub dclass: SpiceInt,
    pub dtype: SpiceInt,
    pub frmcde: SpiceInt,
    pub corsys: SpiceInt,
    pub corpar: [SpiceDouble; NSYPAR],
    pub co1min: SpiceDouble,
    pub co1max: SpiceDouble,
    pub co2min: SpiceDouble,
    pub co2max: SpiceDouble,
    pub co3min: SpiceDouble,
    pub co3max: SpiceDouble,
    pub start: SpiceDouble,
    pub stop: SpiceDouble,
}

impl DskDescr {
    /// Coverage bounds as `(min, max)` for each of the three coordinates.
    pub fn bounds(&self) -> [(f64, f64); 3] {
        [
            (self.co1min, self.co1max),
            (self.co2min, self.co2max),
            (self.co3min, self.co3max),
        ]
    }
}

/// EK column class and data type codes as used in [`EkAttDsc`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EkDataType {
    Chr,
    Dp,
    Int,
    Time,
}

impl EkDataType {
    pub fn from_code(code: SpiceInt) -> Option<Self> {
        match code {
            0 => Some(EkDataType::Chr),
            1 => Some(EkDataType::Dp),
            2 => Some(EkDataType::Int),
            3 => Some(EkDataType::Time),
            _ => None,
        }
    }
}

/// `SpiceEKAttDsc`: attributes of one EK column.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EkAttDsc {
    pub cclass: SpiceInt,
    pub dtype: SpiceInt,
    pub strlen: SpiceInt,
    pub size: SpiceInt,
    pub indexd: SpiceBoolean,
    pub nullok: SpiceBoolean,
}

impl EkAttDsc {
    pub fn data_type(&self) -> Option<EkDataType> {
        EkDataType::from_code(self.dtype)
    }

    pub fn is_indexed(&self) -> bool {
        to_bool(self.indexd)
    }

    pub fn nulls_ok(&self) -> bool {
        to_bool(self.nullok)
    }
}

/// Table name length in an EK segment summary, including the terminator.
pub const EK_TSTRLN: usize = 65;
/// Column name length in an EK segment summary, including the terminator.
pub const EK_CSTRLN: usize = 33;
/// Maximum columns per EK segment.
pub const EK_MXCLSG: usize = 100;

/// `SpiceEKSegSum`.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct EkSegSum {
    pub tabnam: [u8; EK_TSTRLN],
    pub nrows: SpiceInt,
    pub ncols: SpiceInt,
    pub cnames: [[u8; EK_CSTRLN]; EK_MXCLSG],
    pub cdescrs: [EkAttDsc; EK_MXCLSG],
}

impl Default for EkSegSum {
    fn default() -> Self {
        Self {
            tabnam: [0; EK_TSTRLN],
            nrows: 0,
            ncols: 0,
            cnames: [[0; EK_CSTRLN]; EK_MXCLSG],
            cdescrs: [EkAttDsc::default(); EK_MXCLSG],
        }
    }
}

impl EkSegSum {
    pub fn table_name(&self) -> Result<String> {
        fstr::decode(&self.tabnam)
    }

    /// Names and descriptors of the segment's columns.
    pub fn columns(&self) -> Result<Vec<(String, EkAttDsc)>> {
        let n = host_count(self.ncols).min(EK_MXCLSG);
        self.cnames[..n]
            .iter()
            .zip(&self.cdescrs[..n])
            .map(|(name, descr)| Ok((fstr::decode(name)?, *descr)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn layouts() {
        assert_eq!(size_of::<Plane>(), 4 * 8);
        assert_eq!(size_of::<Ellipse>(), 9 * 8);
        assert_eq!(size_of::<DlaDescr>(), 8 * 4);
        assert_eq!(size_of::<DskDescr>(), 6 * 4 + (NSYPAR + 8) * 8);
        assert_eq!(size_of::<EkAttDsc>(), 6 * 4);
    }

    #[test]
    fn segment_summary() {
        let mut sum = EkSegSum::default();
        sum.tabnam[..6].copy_from_slice(b"SCALAR");
        sum.ncols = 2;
        sum.cnames[0][..3].copy_from_slice(b"C_1");
        sum.cnames[1][..3].copy_from_slice(b"D_1");
        sum.cdescrs[1].dtype = 1;
        sum.cdescrs[1].nullok = 1;

        assert_eq!(sum.table_name().unwrap(), "SCALAR");
        let cols = sum.columns().unwrap();
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].0, "C_1");
        assert_eq!(cols[1].1.data_type(), Some(EkDataType::Dp));
        assert!(cols[1].1.nulls_ok());
        assert!(!cols[1].1.is_indexed());
    }

    #[test]
    fn dsk_bounds() {
        let d = DskDescr {
            co1min: -1.0,
            co1max: 1.0,
            co3max: 5.0,
            ..Default::default()
        };
        assert_eq!(d.bounds()[0], (-1.0, 1.0));
        assert_eq!(d.bounds()[2], (0.0, 5.0));
    }
}
