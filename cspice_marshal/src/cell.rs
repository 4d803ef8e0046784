//! `SpiceCell` containers.
//!
//! A CSPICE cell is a header struct pointing at a buffer whose first
//! [`CTRLSZ`] elements are a control area used by the Fortran layer, followed by
//! `size` data slots. Native routines read and update the header's `card` (and the
//! control area) in place.
//!
//! The element kind is part of the Rust type: [`DoubleCell`] and [`IntCell`] are
//! `Cell<f64>` and `Cell<SpiceInt>`, and [`CharCell`] holds fixed-width strings. Routines
//! that combine cells take two cells of the same Rust type, so kinds cannot be mixed.
//! [`AnyCell`] is for callers that only know the kind at run time; it checks the tag
//! before handing out a typed cell.

use crate::{Error, Result, SPICEFALSE, SPICETRUE, SpiceBoolean, SpiceInt, fstr, host_count, spice_int};
use std::ffi::c_void;

/// Number of control-area elements at the start of every cell buffer.
pub const CTRLSZ: usize = 6;

/// `SpiceCellDataType`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellDataType {
    Chr,
    Dp,
    Int,
    Time,
    Bool,
}

impl CellDataType {
    pub fn code(self) -> SpiceInt {
        match self {
            CellDataType::Chr => 0,
            CellDataType::Dp => 1,
            CellDataType::Int => 2,
            CellDataType::Time => 3,
            CellDataType::Bool => 4,
        }
    }

    pub fn from_code(code: SpiceInt) -> Option<Self> {
        match code {
            0 => Some(CellDataType::Chr),
            1 => Some(CellDataType::Dp),
            2 => Some(CellDataType::Int),
            3 => Some(CellDataType::Time),
            4 => Some(CellDataType::Bool),
            _ => None,
        }
    }
}

/// C layout of `SpiceCell`.
#[repr(C)]
#[derive(Debug)]
pub struct SpiceCell {
    pub dtype: SpiceInt,
    pub length: SpiceInt,
    pub size: SpiceInt,
    pub card: SpiceInt,
    pub is_set: SpiceBoolean,
    pub adjust: SpiceBoolean,
    pub init: SpiceBoolean,
    pub base: *mut c_void,
    pub data: *mut c_void,
}

impl SpiceCell {
    fn new(dtype: CellDataType, length: usize, size: usize) -> Self {
        // Matches the SPICE*_CELL declaration macros: uninitialised, empty, a set.
        Self {
            dtype: dtype.code(),
            length: spice_int(length),
            size: spice_int(size),
            card: 0,
            is_set: SPICETRUE,
            adjust: SPICEFALSE,
            init: SPICEFALSE,
            base: std::ptr::null_mut(),
            data: std::ptr::null_mut(),
        }
    }

    fn clone_unattached(&self) -> Self {
        Self {
            base: std::ptr::null_mut(),
            data: std::ptr::null_mut(),
            ..*self
        }
    }
}

/// Anything that can be lent to a native routine as a `SpiceCell *`.
pub trait AsSpiceCell {
    fn dtype(&self) -> CellDataType;

    /// Declared size, never more than [`capacity`](Self::capacity).
    fn size(&self) -> usize;

    /// Data slots actually owned by the buffer. Native code must never be told the cell
    /// is larger than this.
    fn capacity(&self) -> usize;

    fn card(&self) -> usize;

    /// Element length of character cells, including the terminator. Zero otherwise.
    fn length(&self) -> usize {
        0
    }

    /// Pointer to the header, with its buffer pointers refreshed and its size and
    /// cardinality clamped to the owned buffer. Valid until the cell is next moved or
    /// mutably borrowed.
    fn as_spice_cell(&mut self) -> *mut SpiceCell;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for f64 {}
    impl Sealed for i32 {}
}

/// Numeric cell element types.
pub trait CellElement: sealed::Sealed + Copy + Default + PartialOrd + std::fmt::Debug {
    const DTYPE: CellDataType;
}

impl CellElement for f64 {
    const DTYPE: CellDataType = CellDataType::Dp;
}

impl CellElement for SpiceInt {
    const DTYPE: CellDataType = CellDataType::Int;
}

/// Numeric cell with a fixed capacity.
#[derive(Debug)]
pub struct Cell<T: CellElement> {
    header: SpiceCell,
    buffer: Box<[T]>,
}

pub type DoubleCell = Cell<f64>;
pub type IntCell = Cell<SpiceInt>;

// SAFETY: the header's pointers only ever address `buffer`, which the cell owns.
unsafe impl<T: CellElement + Send> Send for Cell<T> {}

impl<T: CellElement> Cell<T> {
    pub fn new(size: usize) -> Self {
        Self {
            header: SpiceCell::new(T::DTYPE, 0, size),
            buffer: vec![T::default(); CTRLSZ + size].into_boxed_slice(),
        }
    }

    /// Cell of the given capacity, pre-filled with `items`.
    ///
    /// The contents are only flagged as a set if they are strictly increasing.
    pub fn from_slice(size: usize, items: &[T]) -> Result<Self> {
        if items.len() > size {
            return Err(Error::CapacityExceeded {
                what: "cell",
                needed: items.len(),
                capacity: size,
            });
        }
        let mut cell = Self::new(size);
        cell.buffer[CTRLSZ..CTRLSZ + items.len()].copy_from_slice(items);
        cell.header.card = spice_int(items.len());
        cell.header.is_set = if items.windows(2).all(|w| w[0] < w[1]) {
            SPICETRUE
        } else {
            SPICEFALSE
        };
        Ok(cell)
    }

    pub fn as_slice(&self) -> &[T] {
        let card = self.card();
        &self.buffer[CTRLSZ..CTRLSZ + card]
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    pub fn is_set(&self) -> bool {
        crate::to_bool(self.header.is_set)
    }

    /// Empty the cell without touching its capacity. Native code resynchronises its
    /// control area from the header on the next call.
    pub fn clear(&mut self) {
        self.header.card = 0;
        self.header.is_set = SPICETRUE;
    }
}

impl Cell<f64> {
    /// Interpret the cell as a SPICE window: consecutive `(left, right)` pairs.
    pub fn intervals(&self) -> Vec<(f64, f64)> {
        self.as_slice()
            .chunks_exact(2)
            .map(|w| (w[0], w[1]))
            .collect()
    }

    /// Window with room for `max_intervals` intervals.
    pub fn window(max_intervals: usize) -> Self {
        Self::new(2 * max_intervals)
    }
}

impl<T: CellElement> AsSpiceCell for Cell<T> {
    fn dtype(&self) -> CellDataType {
        T::DTYPE
    }

    fn size(&self) -> usize {
        host_count(self.header.size).min(self.capacity())
    }

    fn capacity(&self) -> usize {
        self.buffer.len() - CTRLSZ
    }

    fn card(&self) -> usize {
        host_count(self.header.card).min(self.size())
    }

    fn as_spice_cell(&mut self) -> *mut SpiceCell {
        self.header.size = spice_int(self.size());
        self.header.card = spice_int(self.card());
        let base = self.buffer.as_mut_ptr();
        self.header.base = base.cast();
        // SAFETY: the buffer always has at least CTRLSZ elements
        self.header.data = unsafe { base.add(CTRLSZ) }.cast();
        &mut self.header
    }
}

impl<T: CellElement> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone_unattached(),
            buffer: self.buffer.clone(),
        }
    }
}

/// Cell of fixed-width strings. `length` includes the NUL terminator.
#[derive(Debug)]
pub struct CharCell {
    header: SpiceCell,
    // Owned element width; the header's copy is rewritten from this before every call
    length: usize,
    buffer: Box<[u8]>,
}

// SAFETY: as for Cell<T>
unsafe impl Send for CharCell {}

impl CharCell {
    pub fn new(size: usize, length: usize) -> Self {
        let length = length.max(1);
        Self {
            header: SpiceCell::new(CellDataType::Chr, length, size),
            length,
            buffer: vec![0; (CTRLSZ + size) * length].into_boxed_slice(),
        }
    }

    /// Character cell pre-filled with `items`, each of which must fit in `length - 1` bytes.
    pub fn from_strs<S: AsRef<str>>(size: usize, length: usize, items: &[S]) -> Result<Self> {
        if items.len() > size {
            return Err(Error::CapacityExceeded {
                what: "character cell",
                needed: items.len(),
                capacity: size,
            });
        }
        let mut cell = Self::new(size, length);
        let length = cell.length();
        for (i, item) in items.iter().enumerate() {
            let bytes = item.as_ref().as_bytes();
            if bytes.contains(&0) {
                return Err(Error::InteriorNul(item.as_ref().to_owned()));
            }
            if bytes.len() >= length {
                return Err(Error::CapacityExceeded {
                    what: "character cell element",
                    needed: bytes.len() + 1,
                    capacity: length,
                });
            }
            let offset = (CTRLSZ + i) * length;
            cell.buffer[offset..offset + bytes.len()].copy_from_slice(bytes);
        }
        cell.header.card = spice_int(items.len());
        let sorted = items.windows(2).all(|w| w[0].as_ref() < w[1].as_ref());
        cell.header.is_set = if sorted { SPICETRUE } else { SPICEFALSE };
        Ok(cell)
    }

    fn slot(&self, index: usize) -> &[u8] {
        let length = self.length();
        let offset = (CTRLSZ + index) * length;
        &self.buffer[offset..offset + length]
    }

    pub fn get(&self, index: usize) -> Result<Option<String>> {
        if index < self.card() {
            fstr::decode(self.slot(index)).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn to_vec(&self) -> Result<Vec<String>> {
        (0..self.card()).map(|i| fstr::decode(self.slot(i))).collect()
    }

    pub fn is_set(&self) -> bool {
        crate::to_bool(self.header.is_set)
    }

    pub fn clear(&mut self) {
        self.header.card = 0;
        self.header.is_set = SPICETRUE;
    }
}

impl AsSpiceCell for CharCell {
    fn dtype(&self) -> CellDataType {
        CellDataType::Chr
    }

    fn length(&self) -> usize {
        self.length
    }

    fn size(&self) -> usize {
        host_count(self.header.size).min(self.capacity())
    }

    fn capacity(&self) -> usize {
        self.buffer.len() / self.length - CTRLSZ
    }

    fn card(&self) -> usize {
        host_count(self.header.card).min(self.size())
    }

    fn as_spice_cell(&mut self) -> *mut SpiceCell {
        self.header.length = spice_int(self.length);
        self.header.size = spice_int(self.size());
        self.header.card = spice_int(self.card());
        let base = self.buffer.as_mut_ptr();
        self.header.base = base.cast();
        // SAFETY: the buffer holds (CTRLSZ + size) * length bytes
        self.header.data = unsafe { base.add(CTRLSZ * self.length()) }.cast();
        &mut self.header
    }
}

impl Clone for CharCell {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone_unattached(),
            length: self.length,
            buffer: self.buffer.clone(),
        }
    }
}

/// A cell whose kind is only known at run time.
#[derive(Clone, Debug)]
pub enum AnyCell {
    Char(CharCell),
    Double(DoubleCell),
    Int(IntCell),
}

impl AnyCell {
    pub fn new(dtype: CellDataType, size: usize, length: usize) -> Result<Self> {
        match dtype {
            CellDataType::Chr => Ok(AnyCell::Char(CharCell::new(size, length))),
            CellDataType::Dp => Ok(AnyCell::Double(DoubleCell::new(size))),
            CellDataType::Int => Ok(AnyCell::Int(IntCell::new(size))),
            other => Err(Error::KindMismatch {
                expected: CellDataType::Dp,
                actual: other,
            }),
        }
    }

    fn mismatch(&self, expected: CellDataType) -> Error {
        Error::KindMismatch {
            expected,
            actual: self.dtype(),
        }
    }

    pub fn as_char(&self) -> Result<&CharCell> {
        match self {
            AnyCell::Char(c) => Ok(c),
            _ => Err(self.mismatch(CellDataType::Chr)),
        }
    }

    pub fn as_char_mut(&mut self) -> Result<&mut CharCell> {
        match self {
            AnyCell::Char(c) => Ok(c),
            _ => Err(self.mismatch(CellDataType::Chr)),
        }
    }

    pub fn as_double(&self) -> Result<&DoubleCell> {
        match self {
            AnyCell::Double(c) => Ok(c),
            _ => Err(self.mismatch(CellDataType::Dp)),
        }
    }

    pub fn as_double_mut(&mut self) -> Result<&mut DoubleCell> {
        match self {
            AnyCell::Double(c) => Ok(c),
            _ => Err(self.mismatch(CellDataType::Dp)),
        }
    }

    pub fn as_int(&self) -> Result<&IntCell> {
        match self {
            AnyCell::Int(c) => Ok(c),
            _ => Err(self.mismatch(CellDataType::Int)),
        }
    }

    pub fn as_int_mut(&mut self) -> Result<&mut IntCell> {
        match self {
            AnyCell::Int(c) => Ok(c),
            _ => Err(self.mismatch(CellDataType::Int)),
        }
    }

    /// Fail unless both cells hold the same kind of element.
    pub fn check_same_kind(&self, other: &AnyCell) -> Result<()> {
        if self.dtype() == other.dtype() {
            Ok(())
        } else {
            Err(other.mismatch(self.dtype()))
        }
    }
}

impl AsSpiceCell for AnyCell {
    fn dtype(&self) -> CellDataType {
        match self {
            AnyCell::Char(c) => c.dtype(),
            AnyCell::Double(c) => c.dtype(),
            AnyCell::Int(c) => c.dtype(),
        }
    }

    fn size(&self) -> usize {
        match self {
            AnyCell::Char(c) => c.size(),
            AnyCell::Double(c) => c.size(),
            AnyCell::Int(c) => c.size(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            AnyCell::Char(c) => c.capacity(),
            AnyCell::Double(c) => c.capacity(),
            AnyCell::Int(c) => c.capacity(),
        }
    }

    fn card(&self) -> usize {
        match self {
            AnyCell::Char(c) => c.card(),
            AnyCell::Double(c) => c.card(),
            AnyCell::Int(c) => c.card(),
        }
    }

    fn length(&self) -> usize {
        match self {
            AnyCell::Char(c) => c.length(),
            _ => 0,
        }
    }

    fn as_spice_cell(&mut self) -> *mut SpiceCell {
        match self {
            AnyCell::Char(c) => c.as_spice_cell(),
            AnyCell::Double(c) => c.as_spice_cell(),
            AnyCell::Int(c) => c.as_spice_cell(),
        }
    }
}

impl From<CharCell> for AnyCell {
    fn from(c: CharCell) -> Self {
        AnyCell::Char(c)
    }
}

impl From<DoubleCell> for AnyCell {
    fn from(c: DoubleCell) -> Self {
        AnyCell::Double(c)
    }
}

impl From<IntCell> for AnyCell {
    fn from(c: IntCell) -> Self {
        AnyCell::Int(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        // 7 ints, padded to pointer alignment, then 2 pointers
        assert_eq!(std::mem::size_of::<SpiceCell>(), 8 * 4 + 2 * 8);
    }

    #[test]
    fn double_cell() {
        let mut c = DoubleCell::new(10);
        assert_eq!(c.dtype(), CellDataType::Dp);
        assert_eq!(c.size(), 10);
        assert_eq!(c.card(), 0);
        assert!(c.as_slice().is_empty());

        let p = c.as_spice_cell();
        unsafe {
            assert_eq!((*p).dtype, 1);
            assert_eq!((*p).size, 10);
            assert_eq!((*p).init, SPICEFALSE);
            assert_eq!((*p).data as usize - (*p).base as usize, CTRLSZ * 8);
        }
    }

    #[test]
    fn filled() {
        let c = IntCell::from_slice(5, &[1, 3, 7]).unwrap();
        assert_eq!(c.to_vec(), [1, 3, 7]);
        assert!(c.is_set());

        let c = IntCell::from_slice(5, &[3, 1]).unwrap();
        assert!(!c.is_set());

        assert!(IntCell::from_slice(1, &[1, 2]).is_err());
    }

    #[test]
    fn windows() {
        let w = DoubleCell::from_slice(4, &[1.0, 2.0, 5.0, 8.0]).unwrap();
        assert_eq!(w.intervals(), [(1.0, 2.0), (5.0, 8.0)]);
        assert_eq!(DoubleCell::window(3).size(), 6);
    }

    #[test]
    fn char_cell() {
        let mut c = CharCell::new(4, 16);
        assert_eq!(c.length(), 16);
        assert_eq!(c.get(0).unwrap(), None);
        let p = c.as_spice_cell();
        unsafe {
            assert_eq!((*p).dtype, 0);
            assert_eq!((*p).length, 16);
            assert_eq!((*p).data as usize - (*p).base as usize, CTRLSZ * 16);
        }
    }

    #[test]
    fn any_cell_kinds() {
        let mut a = AnyCell::from(DoubleCell::new(4));
        let b = AnyCell::from(IntCell::new(4));

        assert!(a.as_double_mut().is_ok());
        assert_eq!(
            a.as_int().unwrap_err(),
            Error::KindMismatch {
                expected: CellDataType::Int,
                actual: CellDataType::Dp
            }
        );
        assert!(a.check_same_kind(&b).is_err());
        assert!(a.check_same_kind(&a.clone()).is_ok());
        assert!(AnyCell::new(CellDataType::Bool, 1, 0).is_err());
    }

    #[test]
    fn clone_detaches() {
        let mut a = DoubleCell::from_slice(3, &[1.0]).unwrap();
        let _ = a.as_spice_cell();
        let mut b = a.clone();
        assert_eq!(b.to_vec(), [1.0]);
        assert_ne!(a.as_spice_cell(), b.as_spice_cell());
    }
}
