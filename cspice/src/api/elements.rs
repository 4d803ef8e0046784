//! Two-body propagation, osculating elements, and two-line element sets.

use crate::consts::elements::{CONICS, GEOPHS, OSCXSZ, TLE_ELEMS};
use crate::{CharArray, Result, SpiceContext, SpiceInt};

impl SpiceContext<'_> {
    /// State at `et` from conic elements
    /// `[rp, ecc, inc, lnode, argp, m0, t0, mu]`.
    pub fn conics(&mut self, elts: &[f64; CONICS], et: f64) -> Result<[f64; 6]> {
        let mut state = [0.0; 6];
        native!(self, conics_c(elts.as_ptr(), et, state.as_mut_ptr()));
        Ok(state)
    }

    /// Osculating conic elements of a state relative to a body with GM `mu`.
    pub fn oscelt(&mut self, state: &[f64; 6], et: f64, mu: f64) -> Result<[f64; CONICS]> {
        let mut elts = [0.0; CONICS];
        native!(self, oscelt_c(state.as_ptr(), et, mu, elts.as_mut_ptr()));
        Ok(elts)
    }

    /// Extended osculating elements: the conic elements followed by true anomaly,
    /// semi-major axis and period. Unused trailing slots are zero.
    pub fn oscltx(&mut self, state: &[f64; 6], et: f64, mu: f64) -> Result<[f64; OSCXSZ]> {
        let mut elts = [0.0; OSCXSZ];
        native!(self, oscltx_c(state.as_ptr(), et, mu, elts.as_mut_ptr()));
        Ok(elts)
    }

    /// Propagate a two-body state by `dt` seconds.
    pub fn prop2b(&mut self, gm: f64, pvinit: &[f64; 6], dt: f64) -> Result<[f64; 6]> {
        let mut pvprop = [0.0; 6];
        native!(self, prop2b_c(gm, pvinit.as_ptr(), dt, pvprop.as_mut_ptr()));
        Ok(pvprop)
    }

    /// Parse the two lines of a NORAD two-line element set. Two-digit years below
    /// `frstyr % 100` are taken to be in the following century. Returns
    /// `(epoch, elems)`.
    pub fn getelm(&mut self, frstyr: SpiceInt, lines: [&str; 2]) -> Result<(f64, [f64; TLE_ELEMS])> {
        let lines = CharArray::from_strs(&lines)?;
        let mut epoch = 0.0;
        let mut elems = [0.0; TLE_ELEMS];
        native!(
            self,
            getelm_c(
                frstyr,
                lines.element_length(),
                lines.as_ptr(),
                &mut epoch,
                elems.as_mut_ptr()
            )
        );
        Ok((epoch, elems))
    }

    /// Evaluate an SGP4/SDP4 state at `et` from elements parsed by
    /// [`getelm`](Self::getelm) and the geophysical constants
    /// `[J2, J3, J4, KE, QO, SO, ER, AE]`.
    pub fn evsgp4(&mut self, et: f64, geophs: &[f64; GEOPHS], elems: &[f64; TLE_ELEMS]) -> Result<[f64; 6]> {
        let mut state = [0.0; 6];
        native!(
            self,
            evsgp4_c(et, geophs.as_ptr(), elems.as_ptr(), state.as_mut_ptr())
        );
        Ok(state)
    }
}
