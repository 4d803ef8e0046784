use crate::{Matrix, Result, SpiceContext};
use cspice_marshal::{array, to_bool};

impl SpiceContext<'_> {
    pub fn mxm(&mut self, m1: &[[f64; 3]; 3], m2: &[[f64; 3]; 3]) -> Result<[[f64; 3]; 3]> {
        let mut mout = [[0.0; 3]; 3];
        native!(self, mxm_c(m1.as_ptr(), m2.as_ptr(), mout.as_mut_ptr()));
        Ok(mout)
    }

    /// `m1ᵀ · m2`
    pub fn mtxm(&mut self, m1: &[[f64; 3]; 3], m2: &[[f64; 3]; 3]) -> Result<[[f64; 3]; 3]> {
        let mut mout = [[0.0; 3]; 3];
        native!(self, mtxm_c(m1.as_ptr(), m2.as_ptr(), mout.as_mut_ptr()));
        Ok(mout)
    }

    /// `m1 · m2ᵀ`
    pub fn mxmt(&mut self, m1: &[[f64; 3]; 3], m2: &[[f64; 3]; 3]) -> Result<[[f64; 3]; 3]> {
        let mut mout = [[0.0; 3]; 3];
        native!(self, mxmt_c(m1.as_ptr(), m2.as_ptr(), mout.as_mut_ptr()));
        Ok(mout)
    }

    pub fn mxmg(&mut self, m1: &Matrix, m2: &Matrix) -> Result<Matrix> {
        array::check_len("mxmg inner dimension", m1.cols(), m2.rows())?;
        let mut mout = Matrix::zeros(m1.rows(), m2.cols());
        native!(
            self,
            mxmg_c(
                m1.as_void_ptr(),
                m2.as_void_ptr(),
                m1.nrow(),
                m1.ncol(),
                m2.ncol(),
                mout.as_mut_void_ptr()
            )
        );
        Ok(mout)
    }

    pub fn mtxmg(&mut self, m1: &Matrix, m2: &Matrix) -> Result<Matrix> {
        array::check_len("mtxmg inner dimension", m1.rows(), m2.rows())?;
        let mut mout = Matrix::zeros(m1.cols(), m2.cols());
        native!(
            self,
            mtxmg_c(
                m1.as_void_ptr(),
                m2.as_void_ptr(),
                m1.ncol(),
                m1.nrow(),
                m2.ncol(),
                mout.as_mut_void_ptr()
            )
        );
        Ok(mout)
    }

    pub fn mxmtg(&mut self, m1: &Matrix, m2: &Matrix) -> Result<Matrix> {
        array::check_len("mxmtg inner dimension", m1.cols(), m2.cols())?;
        let mut mout = Matrix::zeros(m1.rows(), m2.rows());
        native!(
            self,
            mxmtg_c(
                m1.as_void_ptr(),
                m2.as_void_ptr(),
                m1.nrow(),
                m1.ncol(),
                m2.nrow(),
                mout.as_mut_void_ptr()
            )
        );
        Ok(mout)
    }

    pub fn xpose(&mut self, m1: &[[f64; 3]; 3]) -> Result<[[f64; 3]; 3]> {
        let mut mout = [[0.0; 3]; 3];
        native!(self, xpose_c(m1.as_ptr(), mout.as_mut_ptr()));
        Ok(mout)
    }

    pub fn xpose6(&mut self, m1: &[[f64; 6]; 6]) -> Result<[[f64; 6]; 6]> {
        let mut mout = [[0.0; 6]; 6];
        native!(self, xpose6_c(m1.as_ptr(), mout.as_mut_ptr()));
        Ok(mout)
    }

    pub fn xposeg(&mut self, matrix: &Matrix) -> Result<Matrix> {
        let mut xposem = Matrix::zeros(matrix.cols(), matrix.rows());
        native!(
            self,
            xposeg_c(matrix.as_void_ptr(), matrix.nrow(), matrix.ncol(), xposem.as_mut_void_ptr())
        );
        Ok(xposem)
    }

    pub fn ident(&mut self) -> Result<[[f64; 3]; 3]> {
        let mut matrix = [[0.0; 3]; 3];
        native!(self, ident_c(matrix.as_mut_ptr()));
        Ok(matrix)
    }

    /// Inverse of a 3×3 matrix. CSPICE returns the zero matrix if `m1` is singular.
    pub fn invert(&mut self, m1: &[[f64; 3]; 3]) -> Result<[[f64; 3]; 3]> {
        let mut mout = [[0.0; 3]; 3];
        native!(self, invert_c(m1.as_ptr(), mout.as_mut_ptr()));
        Ok(mout)
    }

    /// Inverse of a matrix with orthogonal (not necessarily unit) columns.
    pub fn invort(&mut self, m: &[[f64; 3]; 3]) -> Result<[[f64; 3]; 3]> {
        let mut mit = [[0.0; 3]; 3];
        native!(self, invort_c(m.as_ptr(), mit.as_mut_ptr()));
        Ok(mit)
    }

    /// Inverse of a state transformation matrix.
    pub fn invstm(&mut self, mat: &[[f64; 6]; 6]) -> Result<[[f64; 6]; 6]> {
        let mut invmat = [[0.0; 6]; 6];
        native!(self, invstm_c(mat.as_ptr(), invmat.as_mut_ptr()));
        Ok(invmat)
    }

    pub fn det(&mut self, m1: &[[f64; 3]; 3]) -> Result<f64> {
        Ok(native!(self, det_c(m1.as_ptr())))
    }

    pub fn trace(&mut self, matrix: &[[f64; 3]; 3]) -> Result<f64> {
        Ok(native!(self, trace_c(matrix.as_ptr())))
    }

    pub fn traceg(&mut self, matrix: &Matrix) -> Result<f64> {
        array::check_len("traceg (square)", matrix.rows(), matrix.cols())?;
        Ok(native!(self, traceg_c(matrix.as_void_ptr(), matrix.nrow())))
    }

    pub fn mequ(&mut self, m1: &[[f64; 3]; 3]) -> Result<[[f64; 3]; 3]> {
        let mut mout = [[0.0; 3]; 3];
        native!(self, mequ_c(m1.as_ptr(), mout.as_mut_ptr()));
        Ok(mout)
    }

    pub fn mequg(&mut self, m1: &Matrix) -> Result<Matrix> {
        let mut mout = Matrix::zeros(m1.rows(), m1.cols());
        native!(self, mequg_c(m1.as_void_ptr(), m1.nrow(), m1.ncol(), mout.as_mut_void_ptr()));
        Ok(mout)
    }

    /// Whether `m` is a rotation matrix, within the given norm and determinant
    /// tolerances.
    pub fn isrot(&mut self, m: &[[f64; 3]; 3], ntol: f64, dtol: f64) -> Result<bool> {
        Ok(to_bool(native!(self, isrot_c(m.as_ptr(), ntol, dtol))))
    }

    /// Diagonalise a symmetric 2×2 matrix: returns `(diag, rotate)`.
    pub fn diags2(&mut self, symmat: &[[f64; 2]; 2]) -> Result<([[f64; 2]; 2], [[f64; 2]; 2])> {
        let mut diag = [[0.0; 2]; 2];
        let mut rotate = [[0.0; 2]; 2];
        native!(self, diags2_c(symmat.as_ptr(), diag.as_mut_ptr(), rotate.as_mut_ptr()));
        Ok((diag, rotate))
    }
}
