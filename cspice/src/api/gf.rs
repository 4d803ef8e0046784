//! The geometry finder: searches for time windows over which a geometric quantity
//! satisfies a constraint.
//!
//! Every search takes a confinement window `cnfine` and writes the solution into
//! `result`, which must be a window with enough room. `nintvls` bounds the workspace
//! native code allocates; use at least twice the number of intervals expected.
//!
//! Searches that call back into user code are not bound.

use super::cstr;
use crate::{AsSpiceCell, DoubleCell, Result, SpiceContext};
use cspice_marshal::{from_bool, spice_int, to_bool};
use log::debug;
use std::ffi::{CStr, c_int};
use std::fmt;

/// Relational operator of a search constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    Greater,
    Less,
    Equal,
    LocalMax,
    LocalMin,
    AbsoluteMax,
    AbsoluteMin,
}

impl Relation {
    pub fn as_str(self) -> &'static str {
        self.as_cstr().to_str().unwrap_or_default()
    }

    fn as_cstr(self) -> &'static CStr {
        match self {
            Relation::Greater => c">",
            Relation::Less => c"<",
            Relation::Equal => c"=",
            Relation::LocalMax => c"LOCMAX",
            Relation::LocalMin => c"LOCMIN",
            Relation::AbsoluteMax => c"ABSMAX",
            Relation::AbsoluteMin => c"ABSMIN",
        }
    }

    /// Whether `refval` is ignored. `adjust` is only used by the absolute extrema.
    pub fn is_extremum(self) -> bool {
        !matches!(self, Relation::Greater | Relation::Less | Relation::Equal)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SpiceContext<'_> {
    /// Set the constant step size used by every search below.
    pub fn gfsstp(&mut self, step: f64) -> Result<()> {
        native!(self, gfsstp_c(step));
        Ok(())
    }

    /// The step size set by [`gfsstp`](Self::gfsstp).
    pub fn gfstep(&mut self, time: f64) -> Result<f64> {
        let mut step = 0.0;
        native!(self, gfstep_c(time, &mut step));
        Ok(step)
    }

    /// Override the convergence tolerance, in seconds.
    pub fn gfstol(&mut self, value: f64) -> Result<()> {
        native!(self, gfstol_c(value));
        Ok(())
    }

    /// Bisection refinement: the next time to test between `t1` and `t2`.
    pub fn gfrefn(&mut self, t1: f64, t2: f64, s1: bool, s2: bool) -> Result<f64> {
        let mut t = 0.0;
        native!(self, gfrefn_c(t1, t2, from_bool(s1), from_bool(s2), &mut t));
        Ok(t)
    }

    /// Initialise the progress report.
    pub fn gfrepi(&mut self, window: &mut DoubleCell, begmss: &str, endmss: &str) -> Result<()> {
        let begmss = cstr(begmss)?;
        let endmss = cstr(endmss)?;
        native!(
            self,
            gfrepi_c(window.as_spice_cell(), begmss.as_ptr(), endmss.as_ptr())
        );
        Ok(())
    }

    pub fn gfrepu(&mut self, ivbeg: f64, ivend: f64, time: f64) -> Result<()> {
        native!(self, gfrepu_c(ivbeg, ivend, time));
        Ok(())
    }

    pub fn gfrepf(&mut self) -> Result<()> {
        native!(self, gfrepf_c());
        Ok(())
    }

    /// Record that the interrupt signal `sigcode` was received.
    pub fn gfinth(&mut self, sigcode: c_int) -> Result<()> {
        native!(self, gfinth_c(sigcode));
        Ok(())
    }

    /// Clear the interrupt flag.
    pub fn gfclrh(&mut self) -> Result<()> {
        native!(self, gfclrh_c());
        Ok(())
    }

    /// Whether an interrupt was recorded.
    pub fn gfbail(&mut self) -> Result<bool> {
        Ok(to_bool(native!(self, gfbail_c())))
    }

    /// Distance between observer and target.
    pub fn gfdist(
        &mut self,
        target: &str,
        abcorr: &str,
        obsrvr: &str,
        relate: Relation,
        refval: f64,
        adjust: f64,
        step: f64,
        nintvls: usize,
        cnfine: &mut DoubleCell,
        result: &mut DoubleCell,
    ) -> Result<()> {
        debug!("gfdist {} {} {}", target, relate, refval);
        let target = cstr(target)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        native!(
            self,
            gfdist_c(
                target.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                relate.as_cstr().as_ptr(),
                refval,
                adjust,
                step,
                spice_int(nintvls),
                cnfine.as_spice_cell(),
                result.as_spice_cell()
            )
        );
        Ok(())
    }

    /// An illumination angle (`"PHASE"`, `"INCIDENCE"` or `"EMISSION"`) at a surface
    /// point.
    pub fn gfilum(
        &mut self,
        method: &str,
        angtyp: &str,
        target: &str,
        illmn: &str,
        fixref: &str,
        abcorr: &str,
        obsrvr: &str,
        spoint: &[f64; 3],
        relate: Relation,
        refval: f64,
        adjust: f64,
        step: f64,
        nintvls: usize,
        cnfine: &mut DoubleCell,
        result: &mut DoubleCell,
    ) -> Result<()> {
        debug!("gfilum {} {} {} {}", angtyp, target, relate, refval);
        let method = cstr(method)?;
        let angtyp = cstr(angtyp)?;
        let target = cstr(target)?;
        let illmn = cstr(illmn)?;
        let fixref = cstr(fixref)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        native!(
            self,
            gfilum_c(
                method.as_ptr(),
                angtyp.as_ptr(),
                target.as_ptr(),
                illmn.as_ptr(),
                fixref.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                spoint.as_ptr(),
                relate.as_cstr().as_ptr(),
                refval,
                adjust,
                step,
                spice_int(nintvls),
                cnfine.as_spice_cell(),
                result.as_spice_cell()
            )
        );
        Ok(())
    }

    /// Occultations of `back` by `front`.
    pub fn gfoclt(
        &mut self,
        occtyp: &str,
        front: &str,
        fshape: &str,
        fframe: &str,
        back: &str,
        bshape: &str,
        bframe: &str,
        abcorr: &str,
        obsrvr: &str,
        step: f64,
        cnfine: &mut DoubleCell,
        result: &mut DoubleCell,
    ) -> Result<()> {
        debug!("gfoclt {} {} by {}", occtyp, back, front);
        let occtyp = cstr(occtyp)?;
        let front = cstr(front)?;
        let fshape = cstr(fshape)?;
        let fframe = cstr(fframe)?;
        let back = cstr(back)?;
        let bshape = cstr(bshape)?;
        let bframe = cstr(bframe)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        native!(
            self,
            gfoclt_c(
                occtyp.as_ptr(),
                front.as_ptr(),
                fshape.as_ptr(),
                fframe.as_ptr(),
                back.as_ptr(),
                bshape.as_ptr(),
                bframe.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                step,
                cnfine.as_spice_cell(),
                result.as_spice_cell()
            )
        );
        Ok(())
    }

    /// Phase angle.
    pub fn gfpa(
        &mut self,
        target: &str,
        illmn: &str,
        abcorr: &str,
        obsrvr: &str,
        relate: Relation,
        refval: f64,
        adjust: f64,
        step: f64,
        nintvls: usize,
        cnfine: &mut DoubleCell,
        result: &mut DoubleCell,
    ) -> Result<()> {
        debug!("gfpa {} {} {}", target, relate, refval);
        let target = cstr(target)?;
        let illmn = cstr(illmn)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        native!(
            self,
            gfpa_c(
                target.as_ptr(),
                illmn.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                relate.as_cstr().as_ptr(),
                refval,
                adjust,
                step,
                spice_int(nintvls),
                cnfine.as_spice_cell(),
                result.as_spice_cell()
            )
        );
        Ok(())
    }

    /// A coordinate of the observer-target position vector.
    pub fn gfposc(
        &mut self,
        target: &str,
        frame: &str,
        abcorr: &str,
        obsrvr: &str,
        crdsys: &str,
        coord: &str,
        relate: Relation,
        refval: f64,
        adjust: f64,
        step: f64,
        nintvls: usize,
        cnfine: &mut DoubleCell,
        result: &mut DoubleCell,
    ) -> Result<()> {
        debug!("gfposc {} {}/{} {} {}", target, crdsys, coord, relate, refval);
        let target = cstr(target)?;
        let frame = cstr(frame)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let crdsys = cstr(crdsys)?;
        let coord = cstr(coord)?;
        native!(
            self,
            gfposc_c(
                target.as_ptr(),
                frame.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                crdsys.as_ptr(),
                coord.as_ptr(),
                relate.as_cstr().as_ptr(),
                refval,
                adjust,
                step,
                spice_int(nintvls),
                cnfine.as_spice_cell(),
                result.as_spice_cell()
            )
        );
        Ok(())
    }

    /// Times when a ray is in an instrument's field of view.
    pub fn gfrfov(
        &mut self,
        inst: &str,
        raydir: &[f64; 3],
        rframe: &str,
        abcorr: &str,
        obsrvr: &str,
        step: f64,
        cnfine: &mut DoubleCell,
        result: &mut DoubleCell,
    ) -> Result<()> {
        debug!("gfrfov {}", inst);
        let inst = cstr(inst)?;
        let rframe = cstr(rframe)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        native!(
            self,
            gfrfov_c(
                inst.as_ptr(),
                raydir.as_ptr(),
                rframe.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                step,
                cnfine.as_spice_cell(),
                result.as_spice_cell()
            )
        );
        Ok(())
    }

    /// Range rate.
    pub fn gfrr(
        &mut self,
        target: &str,
        abcorr: &str,
        obsrvr: &str,
        relate: Relation,
        refval: f64,
        adjust: f64,
        step: f64,
        nintvls: usize,
        cnfine: &mut DoubleCell,
        result: &mut DoubleCell,
    ) -> Result<()> {
        debug!("gfrr {} {} {}", target, relate, refval);
        let target = cstr(target)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        native!(
            self,
            gfrr_c(
                target.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                relate.as_cstr().as_ptr(),
                refval,
                adjust,
                step,
                spice_int(nintvls),
                cnfine.as_spice_cell(),
                result.as_spice_cell()
            )
        );
        Ok(())
    }

    /// Angular separation of two bodies.
    pub fn gfsep(
        &mut self,
        targ1: &str,
        shape1: &str,
        frame1: &str,
        targ2: &str,
        shape2: &str,
        frame2: &str,
        abcorr: &str,
        obsrvr: &str,
        relate: Relation,
        refval: f64,
        adjust: f64,
        step: f64,
        nintvls: usize,
        cnfine: &mut DoubleCell,
        result: &mut DoubleCell,
    ) -> Result<()> {
        debug!("gfsep {} {} {} {}", targ1, targ2, relate, refval);
        let targ1 = cstr(targ1)?;
        let shape1 = cstr(shape1)?;
        let frame1 = cstr(frame1)?;
        let targ2 = cstr(targ2)?;
        let shape2 = cstr(shape2)?;
        let frame2 = cstr(frame2)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        native!(
            self,
            gfsep_c(
                targ1.as_ptr(),
                shape1.as_ptr(),
                frame1.as_ptr(),
                targ2.as_ptr(),
                shape2.as_ptr(),
                frame2.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                relate.as_cstr().as_ptr(),
                refval,
                adjust,
                step,
                spice_int(nintvls),
                cnfine.as_spice_cell(),
                result.as_spice_cell()
            )
        );
        Ok(())
    }

    /// A coordinate of a surface intercept point.
    pub fn gfsntc(
        &mut self,
        target: &str,
        fixref: &str,
        method: &str,
        abcorr: &str,
        obsrvr: &str,
        dref: &str,
        dvec: &[f64; 3],
        crdsys: &str,
        coord: &str,
        relate: Relation,
        refval: f64,
        adjust: f64,
        step: f64,
        nintvls: usize,
        cnfine: &mut DoubleCell,
        result: &mut DoubleCell,
    ) -> Result<()> {
        debug!("gfsntc {} {}/{} {} {}", target, crdsys, coord, relate, refval);
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let method = cstr(method)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let dref = cstr(dref)?;
        let crdsys = cstr(crdsys)?;
        let coord = cstr(coord)?;
        native!(
            self,
            gfsntc_c(
                target.as_ptr(),
                fixref.as_ptr(),
                method.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                dref.as_ptr(),
                dvec.as_ptr(),
                crdsys.as_ptr(),
                coord.as_ptr(),
                relate.as_cstr().as_ptr(),
                refval,
                adjust,
                step,
                spice_int(nintvls),
                cnfine.as_spice_cell(),
                result.as_spice_cell()
            )
        );
        Ok(())
    }

    /// A coordinate of the sub-observer point.
    pub fn gfsubc(
        &mut self,
        target: &str,
        fixref: &str,
        method: &str,
        abcorr: &str,
        obsrvr: &str,
        crdsys: &str,
        coord: &str,
        relate: Relation,
        refval: f64,
        adjust: f64,
        step: f64,
        nintvls: usize,
        cnfine: &mut DoubleCell,
        result: &mut DoubleCell,
    ) -> Result<()> {
        debug!("gfsubc {} {}/{} {} {}", target, crdsys, coord, relate, refval);
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let method = cstr(method)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let crdsys = cstr(crdsys)?;
        let coord = cstr(coord)?;
        native!(
            self,
            gfsubc_c(
                target.as_ptr(),
                fixref.as_ptr(),
                method.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                crdsys.as_ptr(),
                coord.as_ptr(),
                relate.as_cstr().as_ptr(),
                refval,
                adjust,
                step,
                spice_int(nintvls),
                cnfine.as_spice_cell(),
                result.as_spice_cell()
            )
        );
        Ok(())
    }

    /// Times when a target body is in an instrument's field of view.
    pub fn gftfov(
        &mut self,
        inst: &str,
        target: &str,
        tshape: &str,
        tframe: &str,
        abcorr: &str,
        obsrvr: &str,
        step: f64,
        cnfine: &mut DoubleCell,
        result: &mut DoubleCell,
    ) -> Result<()> {
        debug!("gftfov {} {}", inst, target);
        let inst = cstr(inst)?;
        let target = cstr(target)?;
        let tshape = cstr(tshape)?;
        let tframe = cstr(tframe)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        native!(
            self,
            gftfov_c(
                inst.as_ptr(),
                target.as_ptr(),
                tshape.as_ptr(),
                tframe.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                step,
                cnfine.as_spice_cell(),
                result.as_spice_cell()
            )
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_strings() {
        assert_eq!(Relation::Greater.as_str(), ">");
        assert_eq!(Relation::AbsoluteMin.to_string(), "ABSMIN");
        assert_eq!(Relation::LocalMax.as_cstr().to_bytes(), b"LOCMAX");
        assert!(Relation::LocalMin.is_extremum());
        assert!(!Relation::Equal.is_extremum());
    }
}
