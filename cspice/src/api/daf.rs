//! DAF (Double precision Array File) access, the format underlying SPK, CK and binary
//! PCK files.

use super::{cstr, found};
use crate::consts::daf::{COMLEN, IFNLEN, MAXSUM, NAMLEN};
use crate::{CharArray, Result, SpiceContext, SpiceInt};
use cspice_marshal::{FixedString, SPICEFALSE, array, host_count, spice_int, to_bool};

/// Comment lines fetched per `dafec_c` call.
const COMMENT_BATCH: usize = 64;

/// Unpacked DAF array summary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DafSummary {
    pub dc: Vec<f64>,
    pub ic: Vec<SpiceInt>,
}

/// Size in doubles of a packed summary with the given ND and NI.
fn summary_size(nd: usize, ni: usize) -> usize {
    nd + ni.div_ceil(2)
}

impl SpiceContext<'_> {
    pub fn dafopr(&mut self, fname: &str) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let mut handle = 0;
        native!(self, dafopr_c(fname.as_ptr(), &mut handle));
        Ok(handle)
    }

    pub fn dafopw(&mut self, fname: &str) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let mut handle = 0;
        native!(self, dafopw_c(fname.as_ptr(), &mut handle));
        Ok(handle)
    }

    /// Create a new DAF with summaries of `nd` doubles and `ni` integers, reserving
    /// `resv` records.
    pub fn dafopn(&mut self, fname: &str, nd: SpiceInt, ni: SpiceInt, ifname: &str, resv: SpiceInt) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let ifname = cstr(ifname)?;
        let mut handle = 0;
        native!(
            self,
            dafopn_c(fname.as_ptr(), nd, ni, ifname.as_ptr(), resv, &mut handle)
        );
        Ok(handle)
    }

    pub fn dafcls(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, dafcls_c(handle));
        Ok(())
    }

    /// Begin a forward search through the arrays of `handle`.
    pub fn dafbfs(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, dafbfs_c(handle));
        Ok(())
    }

    /// Begin a backward search.
    pub fn dafbbs(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, dafbbs_c(handle));
        Ok(())
    }

    /// Move to the next array. Returns false at the end of the file.
    pub fn daffna(&mut self) -> Result<bool> {
        let mut fnd = SPICEFALSE;
        native!(self, daffna_c(&mut fnd));
        Ok(to_bool(fnd))
    }

    pub fn daffpa(&mut self) -> Result<bool> {
        let mut fnd = SPICEFALSE;
        native!(self, daffpa_c(&mut fnd));
        Ok(to_bool(fnd))
    }

    /// Continue searching `handle`, after a search of another file.
    pub fn dafcs(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, dafcs_c(handle));
        Ok(())
    }

    /// Packed summary of the current array, for a file with the given ND and NI.
    pub fn dafgs(&mut self, nd: usize, ni: usize) -> Result<Vec<f64>> {
        let mut sum = vec![0.0; MAXSUM];
        native!(self, dafgs_c(sum.as_mut_ptr()));
        sum.truncate(summary_size(nd, ni).min(MAXSUM));
        Ok(sum)
    }

    /// Name of the current array.
    pub fn dafgn(&mut self) -> Result<String> {
        let mut name = FixedString::new(NAMLEN);
        native!(self, dafgn_c(name.lenout(), name.as_mut_ptr()));
        Ok(name.decode()?)
    }

    /// Handle of the file being searched.
    pub fn dafgh(&mut self) -> Result<SpiceInt> {
        let mut handle = 0;
        native!(self, dafgh_c(&mut handle));
        Ok(handle)
    }

    pub fn dafus(&mut self, sum: &[f64], nd: usize, ni: usize) -> Result<DafSummary> {
        array::check_len("dafus summary", summary_size(nd, ni), sum.len())?;
        let mut dc = vec![0.0; nd];
        let mut ic = vec![0; ni];
        native!(
            self,
            dafus_c(
                sum.as_ptr(),
                spice_int(nd),
                spice_int(ni),
                dc.as_mut_ptr(),
                ic.as_mut_ptr()
            )
        );
        Ok(DafSummary { dc, ic })
    }

    pub fn dafps(&mut self, summary: &DafSummary) -> Result<Vec<f64>> {
        let (nd, ni) = (summary.dc.len(), summary.ic.len());
        let mut sum = vec![0.0; summary_size(nd, ni)];
        native!(
            self,
            dafps_c(
                spice_int(nd),
                spice_int(ni),
                array::ptr_or_null(&summary.dc),
                array::ptr_or_null(&summary.ic),
                sum.as_mut_ptr()
            )
        );
        Ok(sum)
    }

    /// Packed summary size of an open file, from its ND and NI.
    fn file_summary_size(&mut self, handle: SpiceInt) -> Result<usize> {
        let (nd, ni, ..) = self.dafrfr(handle)?;
        Ok(summary_size(host_count(nd), host_count(ni)))
    }

    /// Replace the summary of the current array. `sum` must have the file's packed
    /// summary size.
    pub fn dafrs(&mut self, sum: &[f64]) -> Result<()> {
        let handle = self.dafgh()?;
        array::check_len("dafrs summary", self.file_summary_size(handle)?, sum.len())?;
        native!(self, dafrs_c(sum.as_ptr()));
        Ok(())
    }

    /// Doubles at addresses `begin..=end`.
    pub fn dafgda(&mut self, handle: SpiceInt, begin: SpiceInt, end: SpiceInt) -> Result<Vec<f64>> {
        let mut data = vec![0.0; host_count(end - begin + 1)];
        native!(self, dafgda_c(handle, begin, end, data.as_mut_ptr()));
        Ok(data)
    }

    /// Words `begin..=end` (1-based) of summary record `recno`.
    pub fn dafgsr(
        &mut self,
        handle: SpiceInt,
        recno: SpiceInt,
        begin: SpiceInt,
        end: SpiceInt,
    ) -> Result<Option<Vec<f64>>> {
        let mut data = vec![0.0; host_count(end - begin + 1)];
        let mut fnd = SPICEFALSE;
        native!(
            self,
            dafgsr_c(handle, recno, begin, end, data.as_mut_ptr(), &mut fnd)
        );
        Ok(found(fnd, data))
    }

    /// File record contents: `(nd, ni, ifname, fward, bward, free)`.
    pub fn dafrfr(&mut self, handle: SpiceInt) -> Result<(SpiceInt, SpiceInt, String, SpiceInt, SpiceInt, SpiceInt)> {
        let (mut nd, mut ni, mut fward, mut bward, mut free) = (0, 0, 0, 0, 0);
        let mut ifname = FixedString::new(IFNLEN);
        native!(
            self,
            dafrfr_c(
                handle,
                ifname.lenout(),
                &mut nd,
                &mut ni,
                ifname.as_mut_ptr(),
                &mut fward,
                &mut bward,
                &mut free
            )
        );
        Ok((nd, ni, ifname.decode()?, fward, bward, free))
    }

    /// Begin a new array in a file open for writing.
    pub fn dafbna(&mut self, handle: SpiceInt, sum: &[f64], name: &str) -> Result<()> {
        array::check_len("dafbna summary", self.file_summary_size(handle)?, sum.len())?;
        let name = cstr(name)?;
        native!(self, dafbna_c(handle, sum.as_ptr(), name.as_ptr()));
        Ok(())
    }

    /// Add data to the array begun by [`dafbna`](Self::dafbna).
    pub fn dafada(&mut self, data: &[f64]) -> Result<()> {
        native!(self, dafada_c(array::ptr_or_null(data), spice_int(data.len())));
        Ok(())
    }

    pub fn dafena(&mut self) -> Result<()> {
        native!(self, dafena_c());
        Ok(())
    }

    /// Append comment lines.
    pub fn dafac<S: AsRef<str>>(&mut self, handle: SpiceInt, lines: &[S]) -> Result<()> {
        let buffer = CharArray::from_strs(lines)?;
        native!(
            self,
            dafac_c(handle, buffer.count(), buffer.element_length(), buffer.as_ptr())
        );
        Ok(())
    }

    /// Every comment line in the file.
    pub fn dafec(&mut self, handle: SpiceInt) -> Result<Vec<String>> {
        let mut lines = vec![];
        loop {
            let mut buffer = CharArray::new(COMMENT_BATCH, COMLEN);
            let mut n = 0;
            let mut done = SPICEFALSE;
            native!(
                self,
                dafec_c(
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

    /// Delete the comment area.
    pub fn dafdc(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, dafdc_c(handle));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_sizes() {
        assert_eq!(summary_size(2, 6), 5);
        assert_eq!(summary_size(2, 5), 5);
        assert_eq!(summary_size(1, 0), 1);
        assert!(summary_size(124, 2) <= MAXSUM);
    }
}
