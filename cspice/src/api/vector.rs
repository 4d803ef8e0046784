//! 3-vectors, 6-vector states, and vectors of arbitrary dimension.

use super::found;
use crate::{Matrix, Plane, Result, SpiceContext};
use cspice_marshal::{SPICEFALSE, array, spice_int, to_bool};

impl SpiceContext<'_> {
    pub fn vadd(&mut self, v1: &[f64; 3], v2: &[f64; 3]) -> Result<[f64; 3]> {
        let mut vout = [0.0; 3];
        native!(self, vadd_c(v1.as_ptr(), v2.as_ptr(), vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn vsub(&mut self, v1: &[f64; 3], v2: &[f64; 3]) -> Result<[f64; 3]> {
        let mut vout = [0.0; 3];
        native!(self, vsub_c(v1.as_ptr(), v2.as_ptr(), vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn vcrss(&mut self, v1: &[f64; 3], v2: &[f64; 3]) -> Result<[f64; 3]> {
        let mut vout = [0.0; 3];
        native!(self, vcrss_c(v1.as_ptr(), v2.as_ptr(), vout.as_mut_ptr()));
        Ok(vout)
    }

    /// Unit cross product.
    pub fn ucrss(&mut self, v1: &[f64; 3], v2: &[f64; 3]) -> Result<[f64; 3]> {
        let mut vout = [0.0; 3];
        native!(self, ucrss_c(v1.as_ptr(), v2.as_ptr(), vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn vequ(&mut self, vin: &[f64; 3]) -> Result<[f64; 3]> {
        let mut vout = [0.0; 3];
        native!(self, vequ_c(vin.as_ptr(), vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn vminus(&mut self, v1: &[f64; 3]) -> Result<[f64; 3]> {
        let mut vout = [0.0; 3];
        native!(self, vminus_c(v1.as_ptr(), vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn vscl(&mut self, s: f64, v1: &[f64; 3]) -> Result<[f64; 3]> {
        let mut vout = [0.0; 3];
        native!(self, vscl_c(s, v1.as_ptr(), vout.as_mut_ptr()));
        Ok(vout)
    }

    /// Scale `v` in place.
    pub fn vsclip(&mut self, s: f64, v: &mut [f64; 3]) -> Result<()> {
        native!(self, vsclip_c(s, v.as_mut_ptr()));
        Ok(())
    }

    pub fn vhat(&mut self, v1: &[f64; 3]) -> Result<[f64; 3]> {
        let mut vout = [0.0; 3];
        native!(self, vhat_c(v1.as_ptr(), vout.as_mut_ptr()));
        Ok(vout)
    }

    /// Normalise `v` in place.
    pub fn vhatip(&mut self, v: &mut [f64; 3]) -> Result<()> {
        native!(self, vhatip_c(v.as_mut_ptr()));
        Ok(())
    }

    /// Unit vector and magnitude.
    pub fn unorm(&mut self, v1: &[f64; 3]) -> Result<([f64; 3], f64)> {
        let mut vout = [0.0; 3];
        let mut vmag = 0.0;
        native!(self, unorm_c(v1.as_ptr(), vout.as_mut_ptr(), &mut vmag));
        Ok((vout, vmag))
    }

    pub fn vdot(&mut self, v1: &[f64; 3], v2: &[f64; 3]) -> Result<f64> {
        Ok(native!(self, vdot_c(v1.as_ptr(), v2.as_ptr())))
    }

    pub fn vnorm(&mut self, v1: &[f64; 3]) -> Result<f64> {
        Ok(native!(self, vnorm_c(v1.as_ptr())))
    }

    pub fn vdist(&mut self, v1: &[f64; 3], v2: &[f64; 3]) -> Result<f64> {
        Ok(native!(self, vdist_c(v1.as_ptr(), v2.as_ptr())))
    }

    /// Angular separation in radians.
    pub fn vsep(&mut self, v1: &[f64; 3], v2: &[f64; 3]) -> Result<f64> {
        Ok(native!(self, vsep_c(v1.as_ptr(), v2.as_ptr())))
    }

    /// Relative difference `|v1 - v2| / max(|v1|, |v2|)`.
    pub fn vrel(&mut self, v1: &[f64; 3], v2: &[f64; 3]) -> Result<f64> {
        Ok(native!(self, vrel_c(v1.as_ptr(), v2.as_ptr())))
    }

    pub fn vzero(&mut self, v: &[f64; 3]) -> Result<bool> {
        Ok(to_bool(native!(self, vzero_c(v.as_ptr()))))
    }

    pub fn vpack(&mut self, x: f64, y: f64, z: f64) -> Result<[f64; 3]> {
        let mut v = [0.0; 3];
        native!(self, vpack_c(x, y, z, v.as_mut_ptr()));
        Ok(v)
    }

    pub fn vupack(&mut self, v: &[f64; 3]) -> Result<(f64, f64, f64)> {
        let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
        native!(self, vupack_c(v.as_ptr(), &mut x, &mut y, &mut z));
        Ok((x, y, z))
    }

    /// `a*v1 + b*v2`
    pub fn vlcom(&mut self, a: f64, v1: &[f64; 3], b: f64, v2: &[f64; 3]) -> Result<[f64; 3]> {
        let mut sum = [0.0; 3];
        native!(self, vlcom_c(a, v1.as_ptr(), b, v2.as_ptr(), sum.as_mut_ptr()));
        Ok(sum)
    }

    /// `a*v1 + b*v2 + c*v3`
    pub fn vlcom3(
        &mut self,
        a: f64,
        v1: &[f64; 3],
        b: f64,
        v2: &[f64; 3],
        c: f64,
        v3: &[f64; 3],
    ) -> Result<[f64; 3]> {
        let mut sum = [0.0; 3];
        native!(
            self,
            vlcom3_c(a, v1.as_ptr(), b, v2.as_ptr(), c, v3.as_ptr(), sum.as_mut_ptr())
        );
        Ok(sum)
    }

    /// Projection of `a` onto `b`.
    pub fn vproj(&mut self, a: &[f64; 3], b: &[f64; 3]) -> Result<[f64; 3]> {
        let mut p = [0.0; 3];
        native!(self, vproj_c(a.as_ptr(), b.as_ptr(), p.as_mut_ptr()));
        Ok(p)
    }

    /// Component of `a` perpendicular to `b`.
    pub fn vperp(&mut self, a: &[f64; 3], b: &[f64; 3]) -> Result<[f64; 3]> {
        let mut p = [0.0; 3];
        native!(self, vperp_c(a.as_ptr(), b.as_ptr(), p.as_mut_ptr()));
        Ok(p)
    }

    /// Rotate `v` about `axis` by `theta` radians.
    pub fn vrotv(&mut self, v: &[f64; 3], axis: &[f64; 3], theta: f64) -> Result<[f64; 3]> {
        let mut r = [0.0; 3];
        native!(self, vrotv_c(v.as_ptr(), axis.as_ptr(), theta, r.as_mut_ptr()));
        Ok(r)
    }

    /// Orthogonal projection of `vin` onto `plane`.
    pub fn vprjp(&mut self, vin: &[f64; 3], plane: &Plane) -> Result<[f64; 3]> {
        let mut vout = [0.0; 3];
        native!(self, vprjp_c(vin.as_ptr(), plane, vout.as_mut_ptr()));
        Ok(vout)
    }

    /// Inverse orthogonal projection from `projpl` onto `invpl`, or `None` if it cannot
    /// be computed.
    pub fn vprjpi(&mut self, vin: &[f64; 3], projpl: &Plane, invpl: &Plane) -> Result<Option<[f64; 3]>> {
        let mut vout = [0.0; 3];
        let mut fnd = SPICEFALSE;
        native!(self, vprjpi_c(vin.as_ptr(), projpl, invpl, vout.as_mut_ptr(), &mut fnd));
        Ok(found(fnd, vout))
    }

    /// `v1ᵀ · m · v2`
    pub fn vtmv(&mut self, v1: &[f64; 3], matrix: &[[f64; 3]; 3], v2: &[f64; 3]) -> Result<f64> {
        Ok(native!(self, vtmv_c(v1.as_ptr(), matrix.as_ptr(), v2.as_ptr())))
    }

    pub fn mxv(&mut self, m: &[[f64; 3]; 3], vin: &[f64; 3]) -> Result<[f64; 3]> {
        let mut vout = [0.0; 3];
        native!(self, mxv_c(m.as_ptr(), vin.as_ptr(), vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn mtxv(&mut self, m: &[[f64; 3]; 3], vin: &[f64; 3]) -> Result<[f64; 3]> {
        let mut vout = [0.0; 3];
        native!(self, mtxv_c(m.as_ptr(), vin.as_ptr(), vout.as_mut_ptr()));
        Ok(vout)
    }

    /// Rotation matrix whose axis `indexa` (1-3) lies along `axdef` and whose axis
    /// `indexp` lies in the plane of `axdef` and `plndef`.
    pub fn twovec(&mut self, axdef: &[f64; 3], indexa: i32, plndef: &[f64; 3], indexp: i32) -> Result<[[f64; 3]; 3]> {
        let mut mout = [[0.0; 3]; 3];
        native!(self, twovec_c(axdef.as_ptr(), indexa, plndef.as_ptr(), indexp, mout.as_mut_ptr()));
        Ok(mout)
    }

    /// Orthonormal frame from `x`: returns `(x̂, y, z)`.
    pub fn frame(&mut self, x: &[f64; 3]) -> Result<([f64; 3], [f64; 3], [f64; 3])> {
        let mut x = *x;
        let mut y = [0.0; 3];
        let mut z = [0.0; 3];
        native!(self, frame_c(x.as_mut_ptr(), y.as_mut_ptr(), z.as_mut_ptr()));
        Ok((x, y, z))
    }

    // General dimension

    pub fn vaddg(&mut self, v1: &[f64], v2: &[f64]) -> Result<Vec<f64>> {
        let n = array::common_len("vaddg", &[v1, v2])?;
        let mut vout = array::zeroed(n);
        native!(self, vaddg_c(v1.as_ptr(), v2.as_ptr(), spice_int(n), vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn vsubg(&mut self, v1: &[f64], v2: &[f64]) -> Result<Vec<f64>> {
        let n = array::common_len("vsubg", &[v1, v2])?;
        let mut vout = array::zeroed(n);
        native!(self, vsubg_c(v1.as_ptr(), v2.as_ptr(), spice_int(n), vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn vdotg(&mut self, v1: &[f64], v2: &[f64]) -> Result<f64> {
        let n = array::common_len("vdotg", &[v1, v2])?;
        Ok(native!(self, vdotg_c(v1.as_ptr(), v2.as_ptr(), spice_int(n))))
    }

    pub fn vnormg(&mut self, v1: &[f64]) -> Result<f64> {
        Ok(native!(self, vnormg_c(v1.as_ptr(), spice_int(v1.len()))))
    }

    pub fn vdistg(&mut self, v1: &[f64], v2: &[f64]) -> Result<f64> {
        let n = array::common_len("vdistg", &[v1, v2])?;
        Ok(native!(self, vdistg_c(v1.as_ptr(), v2.as_ptr(), spice_int(n))))
    }

    pub fn vsepg(&mut self, v1: &[f64], v2: &[f64]) -> Result<f64> {
        let n = array::common_len("vsepg", &[v1, v2])?;
        Ok(native!(self, vsepg_c(v1.as_ptr(), v2.as_ptr(), spice_int(n))))
    }

    pub fn vrelg(&mut self, v1: &[f64], v2: &[f64]) -> Result<f64> {
        let n = array::common_len("vrelg", &[v1, v2])?;
        Ok(native!(self, vrelg_c(v1.as_ptr(), v2.as_ptr(), spice_int(n))))
    }

    pub fn vequg(&mut self, vin: &[f64]) -> Result<Vec<f64>> {
        let mut vout = array::zeroed(vin.len());
        native!(self, vequg_c(vin.as_ptr(), spice_int(vin.len()), vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn vminug(&mut self, vin: &[f64]) -> Result<Vec<f64>> {
        let mut vout = array::zeroed(vin.len());
        native!(self, vminug_c(vin.as_ptr(), spice_int(vin.len()), vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn vsclg(&mut self, s: f64, v1: &[f64]) -> Result<Vec<f64>> {
        let mut vout = array::zeroed(v1.len());
        native!(self, vsclg_c(s, v1.as_ptr(), spice_int(v1.len()), vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn vhatg(&mut self, v1: &[f64]) -> Result<Vec<f64>> {
        let mut vout = array::zeroed(v1.len());
        native!(self, vhatg_c(v1.as_ptr(), spice_int(v1.len()), vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn unormg(&mut self, v1: &[f64]) -> Result<(Vec<f64>, f64)> {
        let mut vout = array::zeroed(v1.len());
        let mut vmag = 0.0;
        native!(self, unormg_c(v1.as_ptr(), spice_int(v1.len()), vout.as_mut_ptr(), &mut vmag));
        Ok((vout, vmag))
    }

    pub fn vzerog(&mut self, v: &[f64]) -> Result<bool> {
        Ok(to_bool(native!(self, vzerog_c(v.as_ptr(), spice_int(v.len())))))
    }

    pub fn vlcomg(&mut self, a: f64, v1: &[f64], b: f64, v2: &[f64]) -> Result<Vec<f64>> {
        let n = array::common_len("vlcomg", &[v1, v2])?;
        let mut sum = array::zeroed(n);
        native!(self, vlcomg_c(spice_int(n), a, v1.as_ptr(), b, v2.as_ptr(), sum.as_mut_ptr()));
        Ok(sum)
    }

    pub fn vprojg(&mut self, a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
        let n = array::common_len("vprojg", &[a, b])?;
        let mut p = array::zeroed(n);
        native!(self, vprojg_c(a.as_ptr(), b.as_ptr(), spice_int(n), p.as_mut_ptr()));
        Ok(p)
    }

    /// `v1ᵀ · m · v2` for an `nrow × ncol` matrix.
    pub fn vtmvg(&mut self, v1: &[f64], matrix: &Matrix, v2: &[f64]) -> Result<f64> {
        array::check_len("vtmvg v1", matrix.rows(), v1.len())?;
        array::check_len("vtmvg v2", matrix.cols(), v2.len())?;
        Ok(native!(
            self,
            vtmvg_c(
                v1.as_ptr().cast(),
                matrix.as_void_ptr(),
                v2.as_ptr().cast(),
                matrix.nrow(),
                matrix.ncol()
            )
        ))
    }

    pub fn mxvg(&mut self, m1: &Matrix, v2: &[f64]) -> Result<Vec<f64>> {
        array::check_len("mxvg", m1.cols(), v2.len())?;
        let mut vout = array::zeroed::<f64>(m1.rows());
        native!(
            self,
            mxvg_c(
                m1.as_void_ptr(),
                v2.as_ptr().cast(),
                m1.nrow(),
                m1.ncol(),
                vout.as_mut_ptr().cast()
            )
        );
        Ok(vout)
    }

    pub fn mtxvg(&mut self, m1: &Matrix, v2: &[f64]) -> Result<Vec<f64>> {
        array::check_len("mtxvg", m1.rows(), v2.len())?;
        let mut vout = array::zeroed::<f64>(m1.cols());
        native!(
            self,
            mtxvg_c(
                m1.as_void_ptr(),
                v2.as_ptr().cast(),
                m1.ncol(),
                m1.nrow(),
                vout.as_mut_ptr().cast()
            )
        );
        Ok(vout)
    }

    // States

    pub fn dvdot(&mut self, s1: &[f64; 6], s2: &[f64; 6]) -> Result<f64> {
        Ok(native!(self, dvdot_c(s1.as_ptr(), s2.as_ptr())))
    }

    pub fn dvhat(&mut self, s1: &[f64; 6]) -> Result<[f64; 6]> {
        let mut sout = [0.0; 6];
        native!(self, dvhat_c(s1.as_ptr(), sout.as_mut_ptr()));
        Ok(sout)
    }

    pub fn dvcrss(&mut self, s1: &[f64; 6], s2: &[f64; 6]) -> Result<[f64; 6]> {
        let mut sout = [0.0; 6];
        native!(self, dvcrss_c(s1.as_ptr(), s2.as_ptr(), sout.as_mut_ptr()));
        Ok(sout)
    }

    pub fn ducrss(&mut self, s1: &[f64; 6], s2: &[f64; 6]) -> Result<[f64; 6]> {
        let mut sout = [0.0; 6];
        native!(self, ducrss_c(s1.as_ptr(), s2.as_ptr(), sout.as_mut_ptr()));
        Ok(sout)
    }

    /// Derivative of the norm of a state's position.
    pub fn dvnorm(&mut self, state: &[f64; 6]) -> Result<f64> {
        Ok(native!(self, dvnorm_c(state.as_ptr())))
    }

    /// Time derivative of the angular separation of two states.
    pub fn dvsep(&mut self, s1: &[f64; 6], s2: &[f64; 6]) -> Result<f64> {
        Ok(native!(self, dvsep_c(s1.as_ptr(), s2.as_ptr())))
    }
}
