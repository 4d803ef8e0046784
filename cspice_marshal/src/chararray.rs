//! Arrays of strings. CSPICE passes these as a `void *` to a contiguous block of
//! `n * lenvals` bytes, i.e. `SpiceChar cvals[n][lenvals]`, plus `lenvals` itself.
//! Each element is NUL-terminated within its slot.
//!
//! `lenvals` counts the terminator, so the longest storable string is `lenvals - 1`.

use crate::{Error, Result, SpiceInt, fstr, spice_int};
use std::ffi::c_void;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharArray {
    data: Vec<u8>,
    element_length: usize,
}

impl CharArray {
    /// Zeroed output array of `count` strings, each with room for `element_length` bytes
    /// including the terminator.
    pub fn new(count: usize, element_length: usize) -> Self {
        let element_length = element_length.max(1);
        Self {
            data: vec![0; count * element_length],
            element_length,
        }
    }

    /// Input array sized to fit the longest string.
    pub fn from_strs<S: AsRef<str>>(items: &[S]) -> Result<Self> {
        let longest = items.iter().map(|s| s.as_ref().len()).max().unwrap_or(0);
        Self::with_element_length(items, longest + 1)
    }

    /// Input array with an explicit slot width, for routines that require a particular
    /// `lenvals`.
    pub fn with_element_length<S: AsRef<str>>(items: &[S], element_length: usize) -> Result<Self> {
        let mut ret = Self::new(items.len(), element_length);
        for (i, s) in items.iter().enumerate() {
            ret.set(i, s.as_ref())?;
        }
        Ok(ret)
    }

    /// Store `s` in slot `index`. Fails with [`Error::OutOfRange`] past the last slot.
    pub fn set(&mut self, index: usize, s: &str) -> Result<()> {
        let len = self.len();
        let element_length = self.element_length;
        let bytes = s.as_bytes();
        if bytes.contains(&0) {
            return Err(Error::InteriorNul(s.to_owned()));
        }
        if bytes.len() >= element_length {
            return Err(Error::CapacityExceeded {
                what: "string array element",
                needed: bytes.len() + 1,
                capacity: element_length,
            });
        }
        let slot = self.slot_mut(index).ok_or(Error::OutOfRange {
            what: "string array",
            index,
            len,
        })?;
        slot.fill(0);
        slot[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        let offset = index.checked_mul(self.element_length)?;
        self.data.get_mut(offset..offset.checked_add(self.element_length)?)
    }

    pub fn len(&self) -> usize {
        self.data.len() / self.element_length
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn count(&self) -> SpiceInt {
        spice_int(self.len())
    }

    /// The `lenvals` argument.
    pub fn element_length(&self) -> SpiceInt {
        spice_int(self.element_length)
    }

    pub fn as_ptr(&self) -> *const c_void {
        self.data.as_ptr().cast()
    }

    pub fn as_mut_ptr(&mut self) -> *mut c_void {
        self.data.as_mut_ptr().cast()
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        let offset = index.checked_mul(self.element_length)?;
        self.data.get(offset..offset.checked_add(self.element_length)?)
    }

    pub fn get_str(&self, index: usize) -> Result<Option<String>> {
        self.get(index).map(fstr::decode).transpose()
    }

    /// Decode the first `count` elements, as reported by the native call.
    pub fn to_strings(&self, count: usize) -> Result<Vec<String>> {
        self.data
            .chunks_exact(self.element_length)
            .take(count)
            .map(fstr::decode)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let items = ["EARTH", "MOON", "", "SUN"];
        let a = CharArray::from_strs(&items).unwrap();
        assert_eq!(a.len(), 4);
        assert_eq!(a.element_length(), 6);
        assert_eq!(a.to_strings(4).unwrap(), items);
        assert_eq!(a.to_strings(2).unwrap(), ["EARTH", "MOON"]);
        assert_eq!(a.get_str(3).unwrap().as_deref(), Some("SUN"));
        assert_eq!(a.get_str(4).unwrap(), None);
    }

    #[test]
    fn layout() {
        let a = CharArray::with_element_length(&["ab", "c"], 4).unwrap();
        assert_eq!(a.get(0), Some(&b"ab\0\0"[..]));
        assert_eq!(a.get(1), Some(&b"c\0\0\0"[..]));
    }

    #[test]
    fn overflow() {
        assert_eq!(
            CharArray::with_element_length(&["abcd"], 4),
            Err(Error::CapacityExceeded {
                what: "string array element",
                needed: 5,
                capacity: 4
            })
        );
        assert!(CharArray::from_strs(&["a\0b"]).is_err());
    }

    #[test]
    fn output() {
        let mut a = CharArray::new(3, 8);
        assert_eq!(a.to_strings(3).unwrap(), ["", "", ""]);
        a.set(1, "FRAME").unwrap();
        assert_eq!(a.to_strings(3).unwrap(), ["", "FRAME", ""]);
        assert!(!a.as_mut_ptr().is_null());
    }

    #[test]
    fn set_past_end() {
        let mut a = CharArray::new(2, 8);
        assert_eq!(
            a.set(2, "X"),
            Err(Error::OutOfRange {
                what: "string array",
                index: 2,
                len: 2
            })
        );
        assert!(a.set(usize::MAX, "X").is_err());
        assert_eq!(a.to_strings(2).unwrap(), ["", ""]);
    }

    #[test]
    fn empty() {
        let a = CharArray::from_strs::<&str>(&[]).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.element_length(), 1);
        assert_eq!(a.to_strings(0).unwrap(), Vec::<String>::new());
    }
}
