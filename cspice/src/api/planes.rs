//! Planes, ellipses, triaxial ellipsoids and triangular plates.

use super::found;
use crate::{Ellipse, Plane, Result, SpiceContext};
use cspice_marshal::{SPICEFALSE, array, spice_int};

impl SpiceContext<'_> {
    // Planes

    pub fn nvc2pl(&mut self, normal: &[f64; 3], konst: f64) -> Result<Plane> {
        let mut plane = Plane::default();
        native!(self, nvc2pl_c(normal.as_ptr(), konst, &mut plane));
        Ok(plane)
    }

    pub fn nvp2pl(&mut self, normal: &[f64; 3], point: &[f64; 3]) -> Result<Plane> {
        let mut plane = Plane::default();
        native!(self, nvp2pl_c(normal.as_ptr(), point.as_ptr(), &mut plane));
        Ok(plane)
    }

    pub fn psv2pl(&mut self, point: &[f64; 3], span1: &[f64; 3], span2: &[f64; 3]) -> Result<Plane> {
        let mut plane = Plane::default();
        native!(self, psv2pl_c(point.as_ptr(), span1.as_ptr(), span2.as_ptr(), &mut plane));
        Ok(plane)
    }

    /// Returns `(normal, constant)`.
    pub fn pl2nvc(&mut self, plane: &Plane) -> Result<([f64; 3], f64)> {
        let mut normal = [0.0; 3];
        let mut konst = 0.0;
        native!(self, pl2nvc_c(plane, normal.as_mut_ptr(), &mut konst));
        Ok((normal, konst))
    }

    /// Returns `(normal, point)`.
    pub fn pl2nvp(&mut self, plane: &Plane) -> Result<([f64; 3], [f64; 3])> {
        let mut normal = [0.0; 3];
        let mut point = [0.0; 3];
        native!(self, pl2nvp_c(plane, normal.as_mut_ptr(), point.as_mut_ptr()));
        Ok((normal, point))
    }

    /// Returns `(point, span1, span2)`.
    pub fn pl2psv(&mut self, plane: &Plane) -> Result<([f64; 3], [f64; 3], [f64; 3])> {
        let mut point = [0.0; 3];
        let mut span1 = [0.0; 3];
        let mut span2 = [0.0; 3];
        native!(
            self,
            pl2psv_c(plane, point.as_mut_ptr(), span1.as_mut_ptr(), span2.as_mut_ptr())
        );
        Ok((point, span1, span2))
    }

    /// Intersection of a ray with a plane: `Some(point)` for exactly one intersection
    /// point, `None` if there are none or the ray lies in the plane.
    pub fn inrypl(&mut self, vertex: &[f64; 3], dir: &[f64; 3], plane: &Plane) -> Result<Option<[f64; 3]>> {
        let mut nxpts = 0;
        let mut xpt = [0.0; 3];
        native!(
            self,
            inrypl_c(vertex.as_ptr(), dir.as_ptr(), plane, &mut nxpts, xpt.as_mut_ptr())
        );
        Ok((nxpts == 1).then_some(xpt))
    }

    // Ellipses

    pub fn cgv2el(&mut self, center: &[f64; 3], vec1: &[f64; 3], vec2: &[f64; 3]) -> Result<Ellipse> {
        let mut ellipse = Ellipse::default();
        native!(self, cgv2el_c(center.as_ptr(), vec1.as_ptr(), vec2.as_ptr(), &mut ellipse));
        Ok(ellipse)
    }

    /// Returns `(center, smajor, sminor)`.
    pub fn el2cgv(&mut self, ellipse: &Ellipse) -> Result<([f64; 3], [f64; 3], [f64; 3])> {
        let mut center = [0.0; 3];
        let mut smajor = [0.0; 3];
        let mut sminor = [0.0; 3];
        native!(
            self,
            el2cgv_c(ellipse, center.as_mut_ptr(), smajor.as_mut_ptr(), sminor.as_mut_ptr())
        );
        Ok((center, smajor, sminor))
    }

    /// Semi-axes of the ellipse generated by two vectors.
    pub fn saelgv(&mut self, vec1: &[f64; 3], vec2: &[f64; 3]) -> Result<([f64; 3], [f64; 3])> {
        let mut smajor = [0.0; 3];
        let mut sminor = [0.0; 3];
        native!(
            self,
            saelgv_c(vec1.as_ptr(), vec2.as_ptr(), smajor.as_mut_ptr(), sminor.as_mut_ptr())
        );
        Ok((smajor, sminor))
    }

    pub fn pjelpl(&mut self, elin: &Ellipse, plane: &Plane) -> Result<Ellipse> {
        let mut elout = Ellipse::default();
        native!(self, pjelpl_c(elin, plane, &mut elout));
        Ok(elout)
    }

    /// Intersection points of an ellipse and a plane. Empty if they do not intersect.
    ///
    /// If the ellipse lies in the plane, CSPICE reports `-1` intersection points; that
    /// case is returned as `Ok(None)`.
    pub fn inelpl(&mut self, ellips: &Ellipse, plane: &Plane) -> Result<Option<Vec<[f64; 3]>>> {
        let mut nxpts = 0;
        let mut xpt1 = [0.0; 3];
        let mut xpt2 = [0.0; 3];
        native!(
            self,
            inelpl_c(ellips, plane, &mut nxpts, xpt1.as_mut_ptr(), xpt2.as_mut_ptr())
        );
        Ok(match nxpts {
            n if n < 0 => None,
            0 => Some(vec![]),
            1 => Some(vec![xpt1]),
            _ => Some(vec![xpt1, xpt2]),
        })
    }

    /// Nearest point on an ellipse to `point`, and its distance.
    pub fn npelpt(&mut self, point: &[f64; 3], ellips: &Ellipse) -> Result<([f64; 3], f64)> {
        let mut pnear = [0.0; 3];
        let mut dist = 0.0;
        native!(self, npelpt_c(point.as_ptr(), ellips, pnear.as_mut_ptr(), &mut dist));
        Ok((pnear, dist))
    }

    // Ellipsoids

    /// Outward unit normal at `point` on the ellipsoid with semi-axes `a`, `b`, `c`.
    pub fn surfnm(&mut self, a: f64, b: f64, c: f64, point: &[f64; 3]) -> Result<[f64; 3]> {
        let mut normal = [0.0; 3];
        native!(self, surfnm_c(a, b, c, point.as_ptr(), normal.as_mut_ptr()));
        Ok(normal)
    }

    /// Intercept of the ray from `positn` along `u` with the ellipsoid.
    pub fn surfpt(&mut self, positn: &[f64; 3], u: &[f64; 3], a: f64, b: f64, c: f64) -> Result<Option<[f64; 3]>> {
        let mut point = [0.0; 3];
        let mut fnd = SPICEFALSE;
        native!(
            self,
            surfpt_c(positn.as_ptr(), u.as_ptr(), a, b, c, point.as_mut_ptr(), &mut fnd)
        );
        Ok(found(fnd, point))
    }

    /// State of the ray-ellipsoid intercept, for a ray with time-varying vertex and
    /// direction.
    pub fn surfpv(&mut self, stvrtx: &[f64; 6], stdir: &[f64; 6], a: f64, b: f64, c: f64) -> Result<Option<[f64; 6]>> {
        let mut stx = [0.0; 6];
        let mut fnd = SPICEFALSE;
        native!(
            self,
            surfpv_c(stvrtx.as_ptr(), stdir.as_ptr(), a, b, c, stx.as_mut_ptr(), &mut fnd)
        );
        Ok(found(fnd, stx))
    }

    /// Nearest point on the ellipsoid to `positn`, and the altitude of `positn`.
    pub fn nearpt(&mut self, positn: &[f64; 3], a: f64, b: f64, c: f64) -> Result<([f64; 3], f64)> {
        let mut npoint = [0.0; 3];
        let mut alt = 0.0;
        native!(self, nearpt_c(positn.as_ptr(), a, b, c, npoint.as_mut_ptr(), &mut alt));
        Ok((npoint, alt))
    }

    /// State of the nearest point and the altitude's derivative. `None` if the
    /// derivatives are not computable.
    pub fn dnearp(&mut self, state: &[f64; 6], a: f64, b: f64, c: f64) -> Result<Option<([f64; 6], [f64; 2])>> {
        let mut dnear = [0.0; 6];
        let mut dalt = [0.0; 2];
        let mut fnd = SPICEFALSE;
        native!(
            self,
            dnearp_c(state.as_ptr(), a, b, c, dnear.as_mut_ptr(), dalt.as_mut_ptr(), &mut fnd)
        );
        Ok(found(fnd, (dnear, dalt)))
    }

    /// Nearest point on the ellipsoid to a line, and its distance.
    pub fn npedln(
        &mut self,
        a: f64,
        b: f64,
        c: f64,
        linept: &[f64; 3],
        linedr: &[f64; 3],
    ) -> Result<([f64; 3], f64)> {
        let mut pnear = [0.0; 3];
        let mut dist = 0.0;
        native!(
            self,
            npedln_c(a, b, c, linept.as_ptr(), linedr.as_ptr(), pnear.as_mut_ptr(), &mut dist)
        );
        Ok((pnear, dist))
    }

    pub fn edlimb(&mut self, a: f64, b: f64, c: f64, viewpt: &[f64; 3]) -> Result<Ellipse> {
        let mut limb = Ellipse::default();
        native!(self, edlimb_c(a, b, c, viewpt.as_ptr(), &mut limb));
        Ok(limb)
    }

    /// Point on the ellipsoid with the given outward normal.
    pub fn ednmpt(&mut self, a: f64, b: f64, c: f64, normal: &[f64; 3]) -> Result<[f64; 3]> {
        let mut point = [0.0; 3];
        native!(self, ednmpt_c(a, b, c, normal.as_ptr(), point.as_mut_ptr()));
        Ok(point)
    }

    /// Scale `p` onto the ellipsoid surface.
    pub fn edpnt(&mut self, p: &[f64; 3], a: f64, b: f64, c: f64) -> Result<[f64; 3]> {
        let mut ep = [0.0; 3];
        native!(self, edpnt_c(p.as_ptr(), a, b, c, ep.as_mut_ptr()));
        Ok(ep)
    }

    pub fn inedpl(&mut self, a: f64, b: f64, c: f64, plane: &Plane) -> Result<Option<Ellipse>> {
        let mut ellipse = Ellipse::default();
        let mut fnd = SPICEFALSE;
        native!(self, inedpl_c(a, b, c, plane, &mut ellipse, &mut fnd));
        Ok(found(fnd, ellipse))
    }

    /// Nearest point on a line to `point`, and its distance.
    pub fn nplnpt(&mut self, linpt: &[f64; 3], lindir: &[f64; 3], point: &[f64; 3]) -> Result<([f64; 3], f64)> {
        let mut pnear = [0.0; 3];
        let mut dist = 0.0;
        native!(
            self,
            nplnpt_c(linpt.as_ptr(), lindir.as_ptr(), point.as_ptr(), pnear.as_mut_ptr(), &mut dist)
        );
        Ok((pnear, dist))
    }

    // Plates. Plate vertex indices are 1-based.

    /// Total area of a plate set.
    pub fn pltar(&mut self, vrtces: &[[f64; 3]], plates: &[[i32; 3]]) -> Result<f64> {
        Ok(native!(
            self,
            pltar_c(
                spice_int(vrtces.len()),
                array::ptr_or_null(vrtces),
                spice_int(plates.len()),
                array::ptr_or_null(plates)
            )
        ))
    }

    /// Volume enclosed by a closed plate set.
    pub fn pltvol(&mut self, vrtces: &[[f64; 3]], plates: &[[i32; 3]]) -> Result<f64> {
        Ok(native!(
            self,
            pltvol_c(
                spice_int(vrtces.len()),
                array::ptr_or_null(vrtces),
                spice_int(plates.len()),
                array::ptr_or_null(plates)
            )
        ))
    }

    /// Expand a triangular plate by a fraction `delta` about its centroid.
    pub fn pltexp(&mut self, iverts: &[[f64; 3]; 3], delta: f64) -> Result<[[f64; 3]; 3]> {
        let mut overts = [[0.0; 3]; 3];
        native!(self, pltexp_c(iverts.as_ptr(), delta, overts.as_mut_ptr()));
        Ok(overts)
    }

    /// Nearest point on a triangular plate to `point`, and its distance.
    pub fn pltnp(
        &mut self,
        point: &[f64; 3],
        v1: &[f64; 3],
        v2: &[f64; 3],
        v3: &[f64; 3],
    ) -> Result<([f64; 3], f64)> {
        let mut pnear = [0.0; 3];
        let mut dist = 0.0;
        native!(
            self,
            pltnp_c(
                point.as_ptr(),
                v1.as_ptr(),
                v2.as_ptr(),
                v3.as_ptr(),
                pnear.as_mut_ptr(),
                &mut dist
            )
        );
        Ok((pnear, dist))
    }

    /// Outward normal of a plate, not normalised.
    pub fn pltnrm(&mut self, v1: &[f64; 3], v2: &[f64; 3], v3: &[f64; 3]) -> Result<[f64; 3]> {
        let mut normal = [0.0; 3];
        native!(
            self,
            pltnrm_c(v1.as_ptr(), v2.as_ptr(), v3.as_ptr(), normal.as_mut_ptr())
        );
        Ok(normal)
    }
}
