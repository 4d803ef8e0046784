//! DAS (Direct Access Segregated) files, the format underlying DSK and EK files.
//!
//! Addresses are 1-based and inclusive.

use super::cstr;
use crate::consts::{
    das::{IDWLEN, IFNLEN},
    daf::COMLEN,
    strings::FILELEN,
};
use crate::{CharArray, Result, SpiceContext, SpiceInt};
use cspice_marshal::{FixedString, SPICEFALSE, array, host_count, spice_int, to_bool};

const COMMENT_BATCH: usize = 64;

/// Character data layout for `dasrdc_c`/`dasudc_c`: each string receives the bytes
/// `bpos..=epos` (1-based) of its slot.
fn char_rows(first: SpiceInt, last: SpiceInt, bpos: SpiceInt, epos: SpiceInt) -> usize {
    let count = host_count(last - first + 1);
    let width = host_count(epos - bpos + 1).max(1);
    count.div_ceil(width)
}

impl SpiceContext<'_> {
    pub fn dasopr(&mut self, fname: &str) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let mut handle = 0;
        native!(self, dasopr_c(fname.as_ptr(), &mut handle));
        Ok(handle)
    }

    pub fn dasopw(&mut self, fname: &str) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let mut handle = 0;
        native!(self, dasopw_c(fname.as_ptr(), &mut handle));
        Ok(handle)
    }

    /// Create a new DAS file of type `ftype`, reserving `ncomr` comment records.
    pub fn dasonw(&mut self, fname: &str, ftype: &str, ifname: &str, ncomr: SpiceInt) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let ftype = cstr(ftype)?;
        let ifname = cstr(ifname)?;
        let mut handle = 0;
        native!(
            self,
            dasonw_c(
                fname.as_ptr(),
                ftype.as_ptr(),
                ifname.as_ptr(),
                ncomr,
                &mut handle
            )
        );
        Ok(handle)
    }

    pub fn dascls(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, dascls_c(handle));
        Ok(())
    }

    /// Close a DAS file without segregating it.
    pub fn dasllc(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, dasllc_c(handle));
        Ok(())
    }

    /// File name for a handle.
    pub fn dashfn(&mut self, handle: SpiceInt) -> Result<String> {
        let mut fname = FixedString::new(FILELEN);
        native!(self, dashfn_c(handle, fname.lenout(), fname.as_mut_ptr()));
        Ok(fname.decode()?)
    }

    /// File record contents: `(idword, ifname, nresvr, nresvc, ncomr, ncomc)`.
    pub fn dasrfr(&mut self, handle: SpiceInt) -> Result<(String, String, SpiceInt, SpiceInt, SpiceInt, SpiceInt)> {
        let mut idword = FixedString::new(IDWLEN);
        let mut ifname = FixedString::new(IFNLEN);
        let (mut nresvr, mut nresvc, mut ncomr, mut ncomc) = (0, 0, 0, 0);
        native!(
            self,
            dasrfr_c(
                handle,
                idword.lenout(),
                ifname.lenout(),
                idword.as_mut_ptr(),
                ifname.as_mut_ptr(),
                &mut nresvr,
                &mut nresvc,
                &mut ncomr,
                &mut ncomc
            )
        );
        Ok((idword.decode()?, ifname.decode()?, nresvr, nresvc, ncomr, ncomc))
    }

    /// Last logical addresses in use: `(lastc, lastd, lasti)`.
    pub fn daslla(&mut self, handle: SpiceInt) -> Result<(SpiceInt, SpiceInt, SpiceInt)> {
        let (mut lastc, mut lastd, mut lasti) = (0, 0, 0);
        native!(self, daslla_c(handle, &mut lastc, &mut lastd, &mut lasti));
        Ok((lastc, lastd, lasti))
    }

    /// Append `n` characters, taken from bytes `bpos..=epos` of each string in turn.
    pub fn dasadc<S: AsRef<str>>(
        &mut self,
        handle: SpiceInt,
        n: SpiceInt,
        bpos: SpiceInt,
        epos: SpiceInt,
        data: &[S],
    ) -> Result<()> {
        let data = CharArray::with_element_length(data, host_count(epos) + 1)?;
        native!(
            self,
            dasadc_c(handle, n, bpos, epos, data.element_length(), data.as_ptr())
        );
        Ok(())
    }

    pub fn dasadd(&mut self, handle: SpiceInt, data: &[f64]) -> Result<()> {
        native!(
            self,
            dasadd_c(handle, spice_int(data.len()), array::ptr_or_null(data))
        );
        Ok(())
    }

    pub fn dasadi(&mut self, handle: SpiceInt, data: &[SpiceInt]) -> Result<()> {
        native!(
            self,
            dasadi_c(handle, spice_int(data.len()), array::ptr_or_null(data))
        );
        Ok(())
    }

    /// Read characters `first..=last` into bytes `bpos..=epos` of successive strings.
    pub fn dasrdc(
        &mut self,
        handle: SpiceInt,
        first: SpiceInt,
        last: SpiceInt,
        bpos: SpiceInt,
        epos: SpiceInt,
    ) -> Result<Vec<String>> {
        let rows = char_rows(first, last, bpos, epos);
        let mut data = CharArray::new(rows, host_count(epos) + 1);
        native!(
            self,
            dasrdc_c(
                handle,
                first,
                last,
                bpos,
                epos,
                data.element_length(),
                data.as_mut_ptr()
            )
        );
        Ok(data.to_strings(rows)?)
    }

    pub fn dasrdd(&mut self, handle: SpiceInt, first: SpiceInt, last: SpiceInt) -> Result<Vec<f64>> {
        let mut data = vec![0.0; host_count(last - first + 1)];
        native!(self, dasrdd_c(handle, first, last, data.as_mut_ptr()));
        Ok(data)
    }

    pub fn dasrdi(&mut self, handle: SpiceInt, first: SpiceInt, last: SpiceInt) -> Result<Vec<SpiceInt>> {
        let mut data = vec![0; host_count(last - first + 1)];
        native!(self, dasrdi_c(handle, first, last, data.as_mut_ptr()));
        Ok(data)
    }

    /// Overwrite characters `first..=last`.
    pub fn dasudc<S: AsRef<str>>(
        &mut self,
        handle: SpiceInt,
        first: SpiceInt,
        last: SpiceInt,
        bpos: SpiceInt,
        epos: SpiceInt,
        data: &[S],
    ) -> Result<()> {
        let data = CharArray::with_element_length(data, host_count(epos) + 1)?;
        native!(
            self,
            dasudc_c(
                handle,
                first,
                last,
                bpos,
                epos,
                data.element_length(),
                data.as_ptr()
            )
        );
        Ok(())
    }

    pub fn dasudd(&mut self, handle: SpiceInt, first: SpiceInt, data: &[f64]) -> Result<()> {
        let last = first + spice_int(data.len()) - 1;
        native!(self, dasudd_c(handle, first, last, data.as_ptr()));
        Ok(())
    }

    pub fn dasudi(&mut self, handle: SpiceInt, first: SpiceInt, data: &[SpiceInt]) -> Result<()> {
        let last = first + spice_int(data.len()) - 1;
        native!(self, dasudi_c(handle, first, last, data.as_ptr()));
        Ok(())
    }

    /// Write out buffered records.
    pub fn daswbr(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, daswbr_c(handle));
        Ok(())
    }

    pub fn dasac<S: AsRef<str>>(&mut self, handle: SpiceInt, lines: &[S]) -> Result<()> {
        let buffer = CharArray::from_strs(lines)?;
        native!(
            self,
            dasac_c(handle, buffer.count(), buffer.element_length(), buffer.as_ptr())
        );
        Ok(())
    }

    /// Every comment line in the file.
    pub fn dasec(&mut self, handle: SpiceInt) -> Result<Vec<String>> {
        let mut lines = vec![];
        loop {
            let mut buffer = CharArray::new(COMMENT_BATCH, COMLEN);
            let mut n = 0;
            let mut done = SPICEFALSE;
            native!(
                self,
                dasec_c(
                    handle,
                    buffer.count(),
                    buffer.element_length(),
                    &mut n,
                    buffer.as_mut_ptr(),
                    &mut done
                )
            );
            lines.extend(buffer.to_strings(host_count(n))?);
            if to_bool(done) || n == 0 {
                return Ok(lines);
            }
        }
    }

    pub fn dasdc(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, dasdc_c(handle));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_for_char_reads() {
        assert_eq!(char_rows(1, 10, 1, 5), 2);
        assert_eq!(char_rows(1, 11, 1, 5), 3);
        assert_eq!(char_rows(5, 5, 3, 3), 1);
        assert_eq!(char_rows(5, 4, 1, 5), 0);
    }
}
