//! Reference frames and frame transformations.

use super::cstr;
use crate::consts::names::FRNMLN;
use crate::{Result, SpiceContext, SpiceInt};
use cspice_marshal::{FixedString, SPICEFALSE, to_bool};
use log::trace;

impl SpiceContext<'_> {
    /// Frame ID code for a name, or 0 if the frame is not recognised.
    pub fn namfrm(&mut self, frname: &str) -> Result<SpiceInt> {
        let frname = cstr(frname)?;
        let mut frcode = 0;
        native!(self, namfrm_c(frname.as_ptr(), &mut frcode));
        Ok(frcode)
    }

    /// Frame name for an ID code, or the empty string if it is not recognised.
    pub fn frmnam(&mut self, frcode: SpiceInt) -> Result<String> {
        let mut frname = FixedString::new(FRNMLN);
        native!(self, frmnam_c(frcode, frname.lenout(), frname.as_mut_ptr()));
        Ok(frname.decode()?)
    }

    /// Returns `(center, class, class_id)`.
    pub fn frinfo(&mut self, frcode: SpiceInt) -> Result<Option<(SpiceInt, SpiceInt, SpiceInt)>> {
        let (mut cent, mut frclss, mut clssid) = (0, 0, 0);
        let mut fnd = SPICEFALSE;
        native!(
            self,
            frinfo_c(frcode, &mut cent, &mut frclss, &mut clssid, &mut fnd)
        );
        Ok(super::found(fnd, (cent, frclss, clssid)))
    }

    /// Body-fixed frame associated with a body code. Returns `(frcode, frname)`.
    pub fn cidfrm(&mut self, cent: SpiceInt) -> Result<Option<(SpiceInt, String)>> {
        let mut frcode = 0;
        let mut frname = FixedString::new(FRNMLN);
        let mut fnd = SPICEFALSE;
        native!(
            self,
            cidfrm_c(cent, frname.lenout(), &mut frcode, frname.as_mut_ptr(), &mut fnd)
        );
        if !to_bool(fnd) {
            return Ok(None);
        }
        Ok(Some((frcode, frname.decode()?)))
    }

    /// Body-fixed frame associated with a body name. Returns `(frcode, frname)`.
    pub fn cnmfrm(&mut self, cname: &str) -> Result<Option<(SpiceInt, String)>> {
        let cname = cstr(cname)?;
        let mut frcode = 0;
        let mut frname = FixedString::new(FRNMLN);
        let mut fnd = SPICEFALSE;
        native!(
            self,
            cnmfrm_c(
                cname.as_ptr(),
                frname.lenout(),
                &mut frcode,
                frname.as_mut_ptr(),
                &mut fnd
            )
        );
        if !to_bool(fnd) {
            return Ok(None);
        }
        Ok(Some((frcode, frname.decode()?)))
    }

    /// Frame with the given class and class ID. Returns `(frcode, frname, center)`.
    pub fn ccifrm(&mut self, frclss: SpiceInt, clssid: SpiceInt) -> Result<Option<(SpiceInt, String, SpiceInt)>> {
        let mut frcode = 0;
        let mut frname = FixedString::new(FRNMLN);
        let mut center = 0;
        let mut fnd = SPICEFALSE;
        native!(
            self,
            ccifrm_c(
                frclss,
                clssid,
                frname.lenout(),
                &mut frcode,
                frname.as_mut_ptr(),
                &mut center,
                &mut fnd
            )
        );
        if !to_bool(fnd) {
            return Ok(None);
        }
        Ok(Some((frcode, frname.decode()?, center)))
    }

    /// Rotation from frame `from` to frame `to` at `et`.
    pub fn pxform(&mut self, from: &str, to: &str, et: f64) -> Result<[[f64; 3]; 3]> {
        let from = cstr(from)?;
        let to = cstr(to)?;
        let mut rotate = [[0.0; 3]; 3];
        native!(
            self,
            pxform_c(from.as_ptr(), to.as_ptr(), et, rotate.as_mut_ptr())
        );
        Ok(rotate)
    }

    pub fn pxform_batch(&mut self, from: &str, to: &str, ets: &[f64]) -> Result<Vec<[[f64; 3]; 3]>> {
        trace!("pxform {from} -> {to} over {} epochs", ets.len());
        ets.iter().map(|&et| self.pxform(from, to, et)).collect()
    }

    /// Rotation from `from` at `etfrom` to `to` at `etto`.
    pub fn pxfrm2(&mut self, from: &str, to: &str, etfrom: f64, etto: f64) -> Result<[[f64; 3]; 3]> {
        let from = cstr(from)?;
        let to = cstr(to)?;
        let mut rotate = [[0.0; 3]; 3];
        native!(
            self,
            pxfrm2_c(from.as_ptr(), to.as_ptr(), etfrom, etto, rotate.as_mut_ptr())
        );
        Ok(rotate)
    }

    /// State transformation from frame `from` to frame `to` at `et`.
    pub fn sxform(&mut self, from: &str, to: &str, et: f64) -> Result<[[f64; 6]; 6]> {
        let from = cstr(from)?;
        let to = cstr(to)?;
        let mut xform = [[0.0; 6]; 6];
        native!(
            self,
            sxform_c(from.as_ptr(), to.as_ptr(), et, xform.as_mut_ptr())
        );
        Ok(xform)
    }

    pub fn sxform_batch(&mut self, from: &str, to: &str, ets: &[f64]) -> Result<Vec<[[f64; 6]; 6]>> {
        trace!("sxform {from} -> {to} over {} epochs", ets.len());
        ets.iter().map(|&et| self.sxform(from, to, et)).collect()
    }

    /// Rotation from inertial frame `ref_` to the body-fixed frame of `body`.
    pub fn tipbod(&mut self, ref_: &str, body: SpiceInt, et: f64) -> Result<[[f64; 3]; 3]> {
        let ref_ = cstr(ref_)?;
        let mut tipm = [[0.0; 3]; 3];
        native!(self, tipbod_c(ref_.as_ptr(), body, et, tipm.as_mut_ptr()));
        Ok(tipm)
    }

    pub fn tisbod(&mut self, ref_: &str, body: SpiceInt, et: f64) -> Result<[[f64; 6]; 6]> {
        let ref_ = cstr(ref_)?;
        let mut tsipm = [[0.0; 6]; 6];
        native!(self, tisbod_c(ref_.as_ptr(), body, et, tsipm.as_mut_ptr()));
        Ok(tsipm)
    }

    /// State from equinoctial elements, relative to a frame with pole `(rapol, decpol)`.
    pub fn eqncpv(&mut self, et: f64, epoch: f64, eqel: &[f64; 9], rapol: f64, decpol: f64) -> Result<[f64; 6]> {
        let mut state = [0.0; 6];
        native!(
            self,
            eqncpv_c(et, epoch, eqel.as_ptr(), rapol, decpol, state.as_mut_ptr())
        );
        Ok(state)
    }
}
