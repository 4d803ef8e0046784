//! Spacecraft clock. `sc` is the NAIF ID of the spacecraft; an SCLK kernel for it must
//! be loaded.

use super::cstr;
use crate::consts::strings::TIMELEN;
use crate::{Result, SpiceContext, SpiceInt};
use cspice_marshal::FixedString;
use log::trace;

impl SpiceContext<'_> {
    /// Encode a clock string as continuous ticks.
    pub fn scencd(&mut self, sc: SpiceInt, sclkch: &str) -> Result<f64> {
        let sclkch = cstr(sclkch)?;
        let mut sclkdp = 0.0;
        native!(self, scencd_c(sc, sclkch.as_ptr(), &mut sclkdp));
        Ok(sclkdp)
    }

    pub fn scdecd(&mut self, sc: SpiceInt, sclkdp: f64) -> Result<String> {
        let mut sclkch = FixedString::new(TIMELEN);
        native!(self, scdecd_c(sc, sclkdp, sclkch.lenout(), sclkch.as_mut_ptr()));
        Ok(sclkch.decode()?)
    }

    /// Ephemeris time to continuous encoded clock.
    pub fn sce2c(&mut self, sc: SpiceInt, et: f64) -> Result<f64> {
        let mut sclkdp = 0.0;
        native!(self, sce2c_c(sc, et, &mut sclkdp));
        Ok(sclkdp)
    }

    pub fn sce2c_batch(&mut self, sc: SpiceInt, ets: &[f64]) -> Result<Vec<f64>> {
        trace!("sce2c over {} epochs", ets.len());
        ets.iter().map(|&et| self.sce2c(sc, et)).collect()
    }

    pub fn sce2s(&mut self, sc: SpiceInt, et: f64) -> Result<String> {
        let mut sclkch = FixedString::new(TIMELEN);
        native!(self, sce2s_c(sc, et, sclkch.lenout(), sclkch.as_mut_ptr()));
        Ok(sclkch.decode()?)
    }

    /// Ephemeris time to encoded clock, rounded to whole ticks.
    pub fn sce2t(&mut self, sc: SpiceInt, et: f64) -> Result<f64> {
        let mut sclkdp = 0.0;
        native!(self, sce2t_c(sc, et, &mut sclkdp));
        Ok(sclkdp)
    }

    pub fn scs2e(&mut self, sc: SpiceInt, sclkch: &str) -> Result<f64> {
        let sclkch = cstr(sclkch)?;
        let mut et = 0.0;
        native!(self, scs2e_c(sc, sclkch.as_ptr(), &mut et));
        Ok(et)
    }

    pub fn scs2e_batch<S: AsRef<str>>(&mut self, sc: SpiceInt, sclkchs: &[S]) -> Result<Vec<f64>> {
        trace!("scs2e over {} clock strings", sclkchs.len());
        sclkchs.iter().map(|s| self.scs2e(sc, s.as_ref())).collect()
    }

    pub fn sct2e(&mut self, sc: SpiceInt, sclkdp: f64) -> Result<f64> {
        let mut et = 0.0;
        native!(self, sct2e_c(sc, sclkdp, &mut et));
        Ok(et)
    }

    pub fn sct2e_batch(&mut self, sc: SpiceInt, sclkdps: &[f64]) -> Result<Vec<f64>> {
        trace!("sct2e over {} tick counts", sclkdps.len());
        sclkdps.iter().map(|&t| self.sct2e(sc, t)).collect()
    }

    /// Format ticks as a clock string without a partition number.
    pub fn scfmt(&mut self, sc: SpiceInt, ticks: f64) -> Result<String> {
        let mut clkstr = FixedString::new(TIMELEN);
        native!(self, scfmt_c(sc, ticks, clkstr.lenout(), clkstr.as_mut_ptr()));
        Ok(clkstr.decode()?)
    }

    pub fn sctiks(&mut self, sc: SpiceInt, clkstr: &str) -> Result<f64> {
        let clkstr = cstr(clkstr)?;
        let mut ticks = 0.0;
        native!(self, sctiks_c(sc, clkstr.as_ptr(), &mut ticks));
        Ok(ticks)
    }

    /// Partition start and stop times, in ticks.
    pub fn scpart(&mut self, sc: SpiceInt) -> Result<Vec<(f64, f64)>> {
        // MXPART in sclk.inc
        const MXPART: usize = 9999;
        let mut nparts = 0;
        let mut pstart = vec![0.0; MXPART];
        let mut pstop = vec![0.0; MXPART];
        native!(
            self,
            scpart_c(sc, &mut nparts, pstart.as_mut_ptr(), pstop.as_mut_ptr())
        );
        let n = cspice_marshal::host_count(nparts).min(MXPART);
        Ok(pstart[..n].iter().copied().zip(pstop[..n].iter().copied()).collect())
    }
}
