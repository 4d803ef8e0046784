//! C string marshalling.
//!
//! Input strings become `CString`s. Output strings are written by native code into a
//! caller-allocated [`FixedString`], whose capacity (including the NUL) is passed as the
//! routine's `lenout` argument. The native routine trusts `lenout`: the buffer must be at
//! least that large and must not move while the call is in progress.
//!
//! Fortran-derived output is blank-padded, so decoding trims trailing blanks.

use crate::{Error, Result, SpiceChar, SpiceInt, spice_int};
use std::ffi::{CStr, CString};

pub fn to_cstring(s: &str) -> Result<CString> {
    CString::new(s).map_err(|_| Error::InteriorNul(s.to_owned()))
}

/// Single-character arguments (`SpiceChar` by value) must be ASCII.
pub fn to_char(c: char) -> Result<SpiceChar> {
    if c.is_ascii() {
        Ok(c as u8 as SpiceChar)
    } else {
        Err(Error::NotAscii(c.to_string()))
    }
}

/// Decode a native character buffer: stop at the first NUL, drop trailing blanks.
pub fn decode(bytes: &[u8]) -> Result<String> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let s = std::str::from_utf8(bytes[..end].trim_ascii_end()).map_err(|_| Error::NotUtf8)?;
    Ok(s.to_owned())
}

/// Decode a NUL-terminated string owned by the native library (e.g. `tkvrsn_c`'s result).
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid for the
/// duration of this call.
pub unsafe fn decode_ptr(ptr: *const SpiceChar) -> Result<String> {
    if ptr.is_null() {
        return Ok(String::new());
    }
    // SAFETY: guaranteed by the caller
    let s = unsafe { CStr::from_ptr(ptr) };
    decode(s.to_bytes())
}

/// Pre-sized character buffer for native output.
#[derive(Clone, Debug)]
pub struct FixedString {
    buf: Vec<u8>,
}

impl FixedString {
    /// Allocate `lenout` zeroed bytes. A zero length is bumped to 1 so the buffer can
    /// at least hold the terminator.
    pub fn new(lenout: usize) -> Self {
        Self {
            buf: vec![0; lenout.max(1)],
        }
    }

    /// In/out buffer holding `s`, NUL-terminated, with room for `lenout` bytes.
    pub fn from_str(s: &str, lenout: usize) -> Result<Self> {
        let needed = s.len() + 1;
        if s.as_bytes().contains(&0) {
            return Err(Error::InteriorNul(s.to_owned()));
        }
        let mut ret = Self::new(lenout.max(needed));
        ret.buf[..s.len()].copy_from_slice(s.as_bytes());
        Ok(ret)
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn lenout(&self) -> SpiceInt {
        spice_int(self.buf.len())
    }

    pub fn as_ptr(&self) -> *const SpiceChar {
        self.buf.as_ptr().cast()
    }

    pub fn as_mut_ptr(&mut self) -> *mut SpiceChar {
        self.buf.as_mut_ptr().cast()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn decode(&self) -> Result<String> {
        decode(&self.buf)
    }

    /// Like [`decode`](Self::decode), replacing invalid UTF-8 instead of failing. Used for
    /// diagnostics, which must never themselves fail.
    pub fn decode_lossy(&self) -> String {
        let end = self.buf.iter().position(|&b| b == 0).unwrap_or(self.buf.len());
        String::from_utf8_lossy(self.buf[..end].trim_ascii_end()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cstring() {
        assert_eq!(to_cstring("EARTH").unwrap().as_bytes(), b"EARTH");
        assert_eq!(
            to_cstring("EA\0RTH"),
            Err(Error::InteriorNul("EA\0RTH".to_owned()))
        );
    }

    #[test]
    fn chars() {
        assert_eq!(to_char('x').unwrap(), b'x' as SpiceChar);
        assert!(to_char('\u{1234}').is_err());
    }

    #[test]
    fn decode_padding() {
        assert_eq!(decode(b"hello   \0garbage").unwrap(), "hello");
        assert_eq!(decode(b"  lead").unwrap(), "  lead");
        assert_eq!(decode(b"\0\0\0").unwrap(), "");
        assert_eq!(decode(b"no terminator ").unwrap(), "no terminator");
        assert_eq!(decode(&[0xff, 0xfe, 0]), Err(Error::NotUtf8));
    }

    #[test]
    fn round_trip() {
        for s in ["", "a", "2000 JAN 01 12:00:00", "  leading"] {
            let f = FixedString::from_str(s, 64).unwrap();
            assert_eq!(f.capacity(), 64);
            assert_eq!(f.decode().unwrap(), s);
        }
    }

    #[test]
    fn grows_to_fit() {
        let f = FixedString::from_str("longer than four", 4).unwrap();
        assert_eq!(f.lenout(), 17);
        assert_eq!(f.decode().unwrap(), "longer than four");
    }

    #[test]
    fn lossy() {
        let mut f = FixedString::new(8);
        f.buf[..4].copy_from_slice(b"ab\xff ");
        assert_eq!(f.decode(), Err(Error::NotUtf8));
        assert_eq!(f.decode_lossy(), "ab\u{fffd}");
    }

    #[test]
    fn empty_output() {
        let f = FixedString::new(0);
        assert_eq!(f.capacity(), 1);
        assert_eq!(f.decode().unwrap(), "");
    }

    #[test]
    fn static_ptr() {
        let s = c"CSPICE_N0067";
        assert_eq!(unsafe { decode_ptr(s.as_ptr()) }.unwrap(), "CSPICE_N0067");
        assert_eq!(unsafe { decode_ptr(std::ptr::null()) }.unwrap(), "");
    }
}
