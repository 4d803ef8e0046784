//! Observation geometry: sub-points, intercepts, illumination, limbs and terminators,
//! occultation and field-of-view checks.

use super::{cstr, found};
use crate::{Result, SpiceContext, SpiceInt};
use cspice_marshal::{SPICEFALSE, from_bool, host_count, spice_int, to_bool};

/// A surface point as seen from an observer: `(spoint, trgepc, srfvec)`.
pub type SurfacePoint = ([f64; 3], f64, [f64; 3]);

/// Illumination angles at a surface point, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Illumination {
    pub trgepc: f64,
    pub srfvec: [f64; 3],
    pub phase: f64,
    pub incdnc: f64,
    pub emissn: f64,
}

/// Limb or terminator points, grouped by cutting half-plane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CutPoints {
    /// Number of points found in each cut.
    pub npts: Vec<SpiceInt>,
    pub points: Vec<[f64; 3]>,
    pub epochs: Vec<f64>,
    /// Tangent vectors from the observer (limb) or source (terminator).
    pub tangts: Vec<[f64; 3]>,
}

impl CutPoints {
    fn alloc(ncuts: usize, maxn: usize) -> Self {
        Self {
            npts: vec![0; ncuts],
            points: vec![[0.0; 3]; maxn],
            epochs: vec![0.0; maxn],
            tangts: vec![[0.0; 3]; maxn],
        }
    }

    fn finish(mut self) -> Self {
        let total = self.npts.iter().map(|&n| host_count(n)).sum::<usize>().min(self.points.len());
        self.points.truncate(total);
        self.epochs.truncate(total);
        self.tangts.truncate(total);
        self
    }

    /// Points of cut `i`, or `None` past the last cut.
    pub fn cut(&self, i: usize) -> Option<&[[f64; 3]]> {
        let n = host_count(*self.npts.get(i)?);
        let start: usize = self.npts[..i].iter().map(|&n| host_count(n)).sum();
        let len = self.points.len();
        self.points.get(start.min(len)..start.saturating_add(n).min(len))
    }
}

/// Parameters controlling the search for limb and terminator points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutSearch {
    pub refvec: [f64; 3],
    pub rolstp: f64,
    pub ncuts: usize,
    pub schstp: f64,
    pub soltol: f64,
    pub maxn: usize,
}

impl SpiceContext<'_> {
    pub fn subpnt(
        &mut self,
        method: &str,
        target: &str,
        et: f64,
        fixref: &str,
        abcorr: &str,
        obsrvr: &str,
    ) -> Result<SurfacePoint> {
        let method = cstr(method)?;
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let mut spoint = [0.0; 3];
        let mut trgepc = 0.0;
        let mut srfvec = [0.0; 3];
        native!(
            self,
            subpnt_c(
                method.as_ptr(),
                target.as_ptr(),
                et,
                fixref.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                spoint.as_mut_ptr(),
                &mut trgepc,
                srfvec.as_mut_ptr()
            )
        );
        Ok((spoint, trgepc, srfvec))
    }

    pub fn subslr(
        &mut self,
        method: &str,
        target: &str,
        et: f64,
        fixref: &str,
        abcorr: &str,
        obsrvr: &str,
    ) -> Result<SurfacePoint> {
        let method = cstr(method)?;
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let mut spoint = [0.0; 3];
        let mut trgepc = 0.0;
        let mut srfvec = [0.0; 3];
        native!(
            self,
            subslr_c(
                method.as_ptr(),
                target.as_ptr(),
                et,
                fixref.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                spoint.as_mut_ptr(),
                &mut trgepc,
                srfvec.as_mut_ptr()
            )
        );
        Ok((spoint, trgepc, srfvec))
    }

    /// Surface intercept of the ray `dvec` (in frame `dref`) from the observer.
    pub fn sincpt(
        &mut self,
        method: &str,
        target: &str,
        et: f64,
        fixref: &str,
        abcorr: &str,
        obsrvr: &str,
        dref: &str,
        dvec: &[f64; 3],
    ) -> Result<Option<SurfacePoint>> {
        let method = cstr(method)?;
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let dref = cstr(dref)?;
        let mut spoint = [0.0; 3];
        let mut trgepc = 0.0;
        let mut srfvec = [0.0; 3];
        let mut fnd = SPICEFALSE;
        native!(
            self,
            sincpt_c(
                method.as_ptr(),
                target.as_ptr(),
                et,
                fixref.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                dref.as_ptr(),
                dvec.as_ptr(),
                spoint.as_mut_ptr(),
                &mut trgepc,
                srfvec.as_mut_ptr(),
                &mut fnd
            )
        );
        Ok(found(fnd, (spoint, trgepc, srfvec)))
    }

    /// Illumination angles at `spoint`, with the Sun as the source.
    pub fn ilumin(
        &mut self,
        method: &str,
        target: &str,
        et: f64,
        fixref: &str,
        abcorr: &str,
        obsrvr: &str,
        spoint: &[f64; 3],
    ) -> Result<Illumination> {
        let method = cstr(method)?;
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let mut ill = Illumination::default();
        native!(
            self,
            ilumin_c(
                method.as_ptr(),
                target.as_ptr(),
                et,
                fixref.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                spoint.as_ptr(),
                &mut ill.trgepc,
                ill.srfvec.as_mut_ptr(),
                &mut ill.phase,
                &mut ill.incdnc,
                &mut ill.emissn
            )
        );
        Ok(ill)
    }

    /// Illumination angles with an arbitrary source body `ilusrc`.
    pub fn illumg(
        &mut self,
        method: &str,
        target: &str,
        ilusrc: &str,
        et: f64,
        fixref: &str,
        abcorr: &str,
        obsrvr: &str,
        spoint: &[f64; 3],
    ) -> Result<Illumination> {
        let method = cstr(method)?;
        let target = cstr(target)?;
        let ilusrc = cstr(ilusrc)?;
        let fixref = cstr(fixref)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let mut ill = Illumination::default();
        native!(
            self,
            illumg_c(
                method.as_ptr(),
                target.as_ptr(),
                ilusrc.as_ptr(),
                et,
                fixref.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                spoint.as_ptr(),
                &mut ill.trgepc,
                ill.srfvec.as_mut_ptr(),
                &mut ill.phase,
                &mut ill.incdnc,
                &mut ill.emissn
            )
        );
        Ok(ill)
    }

    /// Like [`illumg`](Self::illumg), also reporting whether the point is visible to
    /// the observer and lit by the source: `(angles, visibl, lit)`.
    pub fn illumf(
        &mut self,
        method: &str,
        target: &str,
        ilusrc: &str,
        et: f64,
        fixref: &str,
        abcorr: &str,
        obsrvr: &str,
        spoint: &[f64; 3],
    ) -> Result<(Illumination, bool, bool)> {
        let method = cstr(method)?;
        let target = cstr(target)?;
        let ilusrc = cstr(ilusrc)?;
        let fixref = cstr(fixref)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let mut ill = Illumination::default();
        let mut visibl = SPICEFALSE;
        let mut lit = SPICEFALSE;
        native!(
            self,
            illumf_c(
                method.as_ptr(),
                target.as_ptr(),
                ilusrc.as_ptr(),
                et,
                fixref.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                spoint.as_ptr(),
                &mut ill.trgepc,
                ill.srfvec.as_mut_ptr(),
                &mut ill.phase,
                &mut ill.incdnc,
                &mut ill.emissn,
                &mut visibl,
                &mut lit
            )
        );
        Ok((ill, to_bool(visibl), to_bool(lit)))
    }

    pub fn limbpt(
        &mut self,
        method: &str,
        target: &str,
        et: f64,
        fixref: &str,
        abcorr: &str,
        corloc: &str,
        obsrvr: &str,
        search: &CutSearch,
    ) -> Result<CutPoints> {
        let method = cstr(method)?;
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let abcorr = cstr(abcorr)?;
        let corloc = cstr(corloc)?;
        let obsrvr = cstr(obsrvr)?;
        let mut out = CutPoints::alloc(search.ncuts, search.maxn);
        native!(
            self,
            limbpt_c(
                method.as_ptr(),
                target.as_ptr(),
                et,
                fixref.as_ptr(),
                abcorr.as_ptr(),
                corloc.as_ptr(),
                obsrvr.as_ptr(),
                search.refvec.as_ptr(),
                search.rolstp,
                spice_int(search.ncuts),
                search.schstp,
                search.soltol,
                spice_int(search.maxn),
                out.npts.as_mut_ptr(),
                out.points.as_mut_ptr(),
                out.epochs.as_mut_ptr(),
                out.tangts.as_mut_ptr()
            )
        );
        Ok(out.finish())
    }

    pub fn termpt(
        &mut self,
        method: &str,
        ilusrc: &str,
        target: &str,
        et: f64,
        fixref: &str,
        abcorr: &str,
        corloc: &str,
        obsrvr: &str,
        search: &CutSearch,
    ) -> Result<CutPoints> {
        let method = cstr(method)?;
        let ilusrc = cstr(ilusrc)?;
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let abcorr = cstr(abcorr)?;
        let corloc = cstr(corloc)?;
        let obsrvr = cstr(obsrvr)?;
        let mut out = CutPoints::alloc(search.ncuts, search.maxn);
        native!(
            self,
            termpt_c(
                method.as_ptr(),
                ilusrc.as_ptr(),
                target.as_ptr(),
                et,
                fixref.as_ptr(),
                abcorr.as_ptr(),
                corloc.as_ptr(),
                obsrvr.as_ptr(),
                search.refvec.as_ptr(),
                search.rolstp,
                spice_int(search.ncuts),
                search.schstp,
                search.soltol,
                spice_int(search.maxn),
                out.npts.as_mut_ptr(),
                out.points.as_mut_ptr(),
                out.epochs.as_mut_ptr(),
                out.tangts.as_mut_ptr()
            )
        );
        Ok(out.finish())
    }

    /// `npts` points on an ellipsoidal terminator: `(trgepc, obspos, trmvcs)`.
    pub fn edterm(
        &mut self,
        trmtyp: &str,
        source: &str,
        target: &str,
        et: f64,
        fixref: &str,
        abcorr: &str,
        obsrvr: &str,
        npts: usize,
    ) -> Result<(f64, [f64; 3], Vec<[f64; 3]>)> {
        let trmtyp = cstr(trmtyp)?;
        let source = cstr(source)?;
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let mut trgepc = 0.0;
        let mut obspos = [0.0; 3];
        let mut trmvcs = vec![[0.0; 3]; npts];
        native!(
            self,
            edterm_c(
                trmtyp.as_ptr(),
                source.as_ptr(),
                target.as_ptr(),
                et,
                fixref.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                spice_int(npts),
                &mut trgepc,
                obspos.as_mut_ptr(),
                trmvcs.as_mut_ptr()
            )
        );
        Ok((trgepc, obspos, trmvcs))
    }

    /// Tangent point of a ray: `(tanpt, alt, range, srfpt, trgepc, srfvec)`.
    pub fn tangpt(
        &mut self,
        method: &str,
        target: &str,
        et: f64,
        fixref: &str,
        abcorr: &str,
        corloc: &str,
        obsrvr: &str,
        dref: &str,
        dvec: &[f64; 3],
    ) -> Result<([f64; 3], f64, f64, [f64; 3], f64, [f64; 3])> {
        let method = cstr(method)?;
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let abcorr = cstr(abcorr)?;
        let corloc = cstr(corloc)?;
        let obsrvr = cstr(obsrvr)?;
        let dref = cstr(dref)?;
        let mut tanpt = [0.0; 3];
        let (mut alt, mut range, mut trgepc) = (0.0, 0.0, 0.0);
        let mut srfpt = [0.0; 3];
        let mut srfvec = [0.0; 3];
        native!(
            self,
            tangpt_c(
                method.as_ptr(),
                target.as_ptr(),
                et,
                fixref.as_ptr(),
                abcorr.as_ptr(),
                corloc.as_ptr(),
                obsrvr.as_ptr(),
                dref.as_ptr(),
                dvec.as_ptr(),
                tanpt.as_mut_ptr(),
                &mut alt,
                &mut range,
                srfpt.as_mut_ptr(),
                &mut trgepc,
                srfvec.as_mut_ptr()
            )
        );
        Ok((tanpt, alt, range, srfpt, trgepc, srfvec))
    }

    /// Occultation state of `targ1` and `targ2` seen from `obsrvr`, as a code from
    /// -3 to 3 (0 means no occultation).
    pub fn occult(
        &mut self,
        targ1: &str,
        shape1: &str,
        frame1: &str,
        targ2: &str,
        shape2: &str,
        frame2: &str,
        abcorr: &str,
        obsrvr: &str,
        et: f64,
    ) -> Result<SpiceInt> {
        let targ1 = cstr(targ1)?;
        let shape1 = cstr(shape1)?;
        let frame1 = cstr(frame1)?;
        let targ2 = cstr(targ2)?;
        let shape2 = cstr(shape2)?;
        let frame2 = cstr(frame2)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let mut ocltid = 0;
        native!(
            self,
            occult_c(
                targ1.as_ptr(),
                shape1.as_ptr(),
                frame1.as_ptr(),
                targ2.as_ptr(),
                shape2.as_ptr(),
                frame2.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                et,
                &mut ocltid
            )
        );
        Ok(ocltid)
    }

    /// Whether a ray lies in an instrument's field of view.
    pub fn fovray(
        &mut self,
        inst: &str,
        raydir: &[f64; 3],
        rframe: &str,
        abcorr: &str,
        obsrvr: &str,
        et: f64,
    ) -> Result<bool> {
        let inst = cstr(inst)?;
        let rframe = cstr(rframe)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let mut visibl = SPICEFALSE;
        native!(
            self,
            fovray_c(
                inst.as_ptr(),
                raydir.as_ptr(),
                rframe.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                &et,
                &mut visibl
            )
        );
        Ok(to_bool(visibl))
    }

    pub fn fovtrg(
        &mut self,
        inst: &str,
        target: &str,
        tshape: &str,
        tframe: &str,
        abcorr: &str,
        obsrvr: &str,
        et: f64,
    ) -> Result<bool> {
        let inst = cstr(inst)?;
        let target = cstr(target)?;
        let tshape = cstr(tshape)?;
        let tframe = cstr(tframe)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let mut visibl = SPICEFALSE;
        native!(
            self,
            fovtrg_c(
                inst.as_ptr(),
                target.as_ptr(),
                tshape.as_ptr(),
                tframe.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                &et,
                &mut visibl
            )
        );
        Ok(to_bool(visibl))
    }

    /// Phase angle at `target` between `illmn` and `obsrvr`.
    pub fn phaseq(&mut self, et: f64, target: &str, illmn: &str, obsrvr: &str, abcorr: &str) -> Result<f64> {
        let target = cstr(target)?;
        let illmn = cstr(illmn)?;
        let obsrvr = cstr(obsrvr)?;
        let abcorr = cstr(abcorr)?;
        Ok(native!(
            self,
            phaseq_c(
                et,
                target.as_ptr(),
                illmn.as_ptr(),
                obsrvr.as_ptr(),
                abcorr.as_ptr()
            )
        ))
    }

    /// Planetocentric longitude of the Sun as seen from `body`.
    pub fn lspcn(&mut self, body: &str, et: f64, abcorr: &str) -> Result<f64> {
        let body = cstr(body)?;
        let abcorr = cstr(abcorr)?;
        Ok(native!(self, lspcn_c(body.as_ptr(), et, abcorr.as_ptr())))
    }

    /// Azimuth/elevation state of `target` from a surface observer: `(azlsta, lt)`.
    pub fn azlcpo(
        &mut self,
        method: &str,
        target: &str,
        et: f64,
        abcorr: &str,
        azccw: bool,
        elplsz: bool,
        obspos: &[f64; 3],
        obsctr: &str,
        obsref: &str,
    ) -> Result<([f64; 6], f64)> {
        let method = cstr(method)?;
        let target = cstr(target)?;
        let abcorr = cstr(abcorr)?;
        let obsctr = cstr(obsctr)?;
        let obsref = cstr(obsref)?;
        let mut azlsta = [0.0; 6];
        let mut lt = 0.0;
        native!(
            self,
            azlcpo_c(
                method.as_ptr(),
                target.as_ptr(),
                et,
                abcorr.as_ptr(),
                from_bool(azccw),
                from_bool(elplsz),
                obspos.as_ptr(),
                obsctr.as_ptr(),
                obsref.as_ptr(),
                azlsta.as_mut_ptr(),
                &mut lt
            )
        );
        Ok((azlsta, lt))
    }

    /// Stellar aberration correction for reception.
    pub fn stelab(&mut self, pobj: &[f64; 3], vobs: &[f64; 3]) -> Result<[f64; 3]> {
        let mut appobj = [0.0; 3];
        native!(
            self,
            stelab_c(pobj.as_ptr(), vobs.as_ptr(), appobj.as_mut_ptr())
        );
        Ok(appobj)
    }

    /// Stellar aberration correction for transmission.
    pub fn stlabx(&mut self, pobj: &[f64; 3], vobs: &[f64; 3]) -> Result<[f64; 3]> {
        let mut corpos = [0.0; 3];
        native!(
            self,
            stlabx_c(pobj.as_ptr(), vobs.as_ptr(), corpos.as_mut_ptr())
        );
        Ok(corpos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_points_grouping() {
        let mut out = CutPoints::alloc(3, 10);
        out.npts = vec![2, 0, 3];
        for (i, p) in out.points.iter_mut().enumerate() {
            p[0] = i as f64;
        }
        let out = out.finish();
        assert_eq!(out.points.len(), 5);
        assert_eq!(out.epochs.len(), 5);
        assert_eq!(out.cut(0), Some(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]][..]));
        assert_eq!(out.cut(1).map(<[_]>::len), Some(0));
        assert_eq!(out.cut(2).unwrap()[2][0], 4.0);
        assert_eq!(out.cut(3), None);
        assert_eq!(out.cut(usize::MAX), None);
    }

    #[test]
    fn cut_points_overstated_counts() {
        let mut out = CutPoints::alloc(2, 3);
        out.npts = vec![2, 5];
        let out = out.finish();
        assert_eq!(out.points.len(), 3);
        assert_eq!(out.cut(1).map(<[_]>::len), Some(1));
    }
}
