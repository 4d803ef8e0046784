//! Chebyshev, Hermite and Lagrange interpolation, and polynomial derivatives.
//!
//! Chebyshev routines take the expansion coefficients `cp` (degree `cp.len() - 1`) and
//! `x2s = [midpoint, radius]` of the interval they map onto `[-1, 1]`.

use crate::{Result, SpiceContext, SpiceInt};
use cspice_marshal::{array, spice_int};

fn degree(coeffs: &[f64]) -> SpiceInt {
    spice_int(coeffs.len()) - 1
}

impl SpiceContext<'_> {
    /// Value and first `nderiv` derivatives of a Chebyshev expansion.
    pub fn chbder(&mut self, cp: &[f64], x2s: &[f64; 2], x: f64, nderiv: usize) -> Result<Vec<f64>> {
        let mut partdp = vec![0.0; 3 * (nderiv + 1)];
        let mut dpdxs = vec![0.0; nderiv + 1];
        native!(
            self,
            chbder_c(
                array::ptr_or_null(cp),
                degree(cp),
                x2s.as_ptr(),
                x,
                spice_int(nderiv),
                partdp.as_mut_ptr(),
                dpdxs.as_mut_ptr()
            )
        );
        Ok(dpdxs)
    }

    /// Value and derivative: `(p, dpdx)`.
    pub fn chbint(&mut self, cp: &[f64], x2s: &[f64; 2], x: f64) -> Result<(f64, f64)> {
        let (mut p, mut dpdx) = (0.0, 0.0);
        native!(
            self,
            chbint_c(
                array::ptr_or_null(cp),
                degree(cp),
                x2s.as_ptr(),
                x,
                &mut p,
                &mut dpdx
            )
        );
        Ok((p, dpdx))
    }

    /// Value and integral: `(p, itgrlp)`.
    pub fn chbigr(&mut self, cp: &[f64], x2s: &[f64; 2], x: f64) -> Result<(f64, f64)> {
        let (mut p, mut itgrlp) = (0.0, 0.0);
        native!(
            self,
            chbigr_c(
                degree(cp),
                array::ptr_or_null(cp),
                x2s.as_ptr(),
                x,
                &mut p,
                &mut itgrlp
            )
        );
        Ok((p, itgrlp))
    }

    pub fn chbval(&mut self, cp: &[f64], x2s: &[f64; 2], x: f64) -> Result<f64> {
        let mut p = 0.0;
        native!(
            self,
            chbval_c(array::ptr_or_null(cp), degree(cp), x2s.as_ptr(), x, &mut p)
        );
        Ok(p)
    }

    /// Hermite interpolation. `yvals` holds a `(value, derivative)` pair per abscissa.
    /// Returns `(f, df)`.
    pub fn hrmint(&mut self, xvals: &[f64], yvals: &[[f64; 2]], x: f64) -> Result<(f64, f64)> {
        array::check_len("hrmint yvals", xvals.len(), yvals.len())?;
        let mut work = vec![0.0; 4 * xvals.len()];
        let (mut f, mut df) = (0.0, 0.0);
        native!(
            self,
            hrmint_c(
                spice_int(xvals.len()),
                array::ptr_or_null(xvals),
                array::ptr_or_null(array::flatten(yvals)),
                x,
                work.as_mut_ptr(),
                &mut f,
                &mut df
            )
        );
        Ok((f, df))
    }

    /// Hermite interpolation on equally spaced abscissas `first + i * step`.
    pub fn hrmesp(&mut self, first: f64, step: f64, yvals: &[[f64; 2]], x: f64) -> Result<(f64, f64)> {
        let (mut f, mut df) = (0.0, 0.0);
        native!(
            self,
            hrmesp_c(
                spice_int(yvals.len()),
                first,
                step,
                array::ptr_or_null(array::flatten(yvals)),
                x,
                &mut f,
                &mut df
            )
        );
        Ok((f, df))
    }

    /// Lagrange interpolation with derivative: `(p, dp)`.
    pub fn lgrind(&mut self, xvals: &[f64], yvals: &[f64], x: f64) -> Result<(f64, f64)> {
        array::check_len("lgrind yvals", xvals.len(), yvals.len())?;
        let mut work = vec![0.0; 2 * xvals.len()];
        let (mut p, mut dp) = (0.0, 0.0);
        native!(
            self,
            lgrind_c(
                spice_int(xvals.len()),
                array::ptr_or_null(xvals),
                array::ptr_or_null(yvals),
                work.as_mut_ptr(),
                x,
                &mut p,
                &mut dp
            )
        );
        Ok((p, dp))
    }

    pub fn lgresp(&mut self, first: f64, step: f64, yvals: &[f64], x: f64) -> Result<f64> {
        Ok(native!(
            self,
            lgresp_c(
                spice_int(yvals.len()),
                first,
                step,
                array::ptr_or_null(yvals),
                x
            )
        ))
    }

    pub fn lgrint(&mut self, xvals: &[f64], yvals: &[f64], x: f64) -> Result<f64> {
        array::check_len("lgrint yvals", xvals.len(), yvals.len())?;
        Ok(native!(
            self,
            lgrint_c(
                spice_int(xvals.len()),
                array::ptr_or_null(xvals),
                array::ptr_or_null(yvals),
                x
            )
        ))
    }

    /// Value and first `nderiv` derivatives of a polynomial at `t`.
    pub fn polyds(&mut self, coeffs: &[f64], nderiv: usize, t: f64) -> Result<Vec<f64>> {
        let mut p = vec![0.0; nderiv + 1];
        native!(
            self,
            polyds_c(
                array::ptr_or_null(coeffs),
                degree(coeffs),
                spice_int(nderiv),
                t,
                p.as_mut_ptr()
            )
        );
        Ok(p)
    }

    /// Quadratic estimate of the derivative of a vector function from samples at
    /// `t - delta` and `t + delta`.
    pub fn qderiv(&mut self, f0: &[f64], f2: &[f64], delta: f64) -> Result<Vec<f64>> {
        array::check_len("qderiv", f0.len(), f2.len())?;
        let mut dfdt = vec![0.0; f0.len()];
        native!(
            self,
            qderiv_c(
                spice_int(f0.len()),
                array::ptr_or_null(f0),
                array::ptr_or_null(f2),
                delta,
                dfdt.as_mut_ptr()
            )
        );
        Ok(dfdt)
    }
}
