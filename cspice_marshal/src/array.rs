//! Numeric arrays. CSPICE takes vectors as `SpiceDouble v[N]` and matrices as
//! `SpiceDouble m[R][C]`, i.e. contiguous and row-major.
//!
//! Where the size is part of the C prototype, the Rust API uses `[f64; N]` and
//! `[[f64; C]; R]` directly, which have exactly the C layout. The helpers here convert
//! from dynamically sized host data (slices, nested `Vec`s), checking the shape
//! instead of letting the native call read past the end of a buffer.
//!
//! [`Matrix`] covers the "generic" routines (`mxmg_c`, `xposeg_c`, ...) whose
//! dimensions are only known at run time.

use crate::{Error, Result, SpiceInt, spice_int};
use std::ffi::c_void;

pub fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::Shape {
            what,
            expected,
            actual,
        })
    }
}

/// Check that `order` is a permutation of `0..n`. Native routines index through order
/// vectors without bounds checks.
pub fn check_order(what: &'static str, order: &[SpiceInt], n: usize) -> Result<()> {
    check_len(what, n, order.len())?;
    let mut seen = vec![false; n];
    for &index in order {
        match usize::try_from(index).ok().and_then(|i| seen.get_mut(i)) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(Error::InvalidOrder { what, index }),
        }
    }
    Ok(())
}

/// Check that every slice has the same length as the first, returning that length.
pub fn common_len(what: &'static str, slices: &[&[f64]]) -> Result<usize> {
    let n = slices.first().map_or(0, |s| s.len());
    for s in slices {
        check_len(what, n, s.len())?;
    }
    Ok(n)
}

pub fn to_fixed<T: Copy + Default, const N: usize>(what: &'static str, values: &[T]) -> Result<[T; N]> {
    check_len(what, N, values.len())?;
    let mut ret = [T::default(); N];
    ret.copy_from_slice(values);
    Ok(ret)
}

pub fn to_fixed_matrix<R: AsRef<[f64]>, const NR: usize, const NC: usize>(
    what: &'static str,
    rows: &[R],
) -> Result<[[f64; NC]; NR]> {
    check_len(what, NR, rows.len())?;
    let mut ret = [[0.0; NC]; NR];
    for (dst, src) in ret.iter_mut().zip(rows) {
        *dst = to_fixed(what, src.as_ref())?;
    }
    Ok(ret)
}

pub fn matrix_to_rows<const NR: usize, const NC: usize>(m: &[[f64; NC]; NR]) -> Vec<Vec<f64>> {
    m.iter().map(|row| row.to_vec()).collect()
}

/// View an array of fixed-width rows (e.g. `&[[f64; 3]]` for a list of vectors)
/// as one flat slice.
pub fn flatten<T: bytemuck::Pod, const N: usize>(rows: &[[T; N]]) -> &[T] {
    bytemuck::must_cast_slice(rows)
}

pub fn flatten_mut<T: bytemuck::Pod, const N: usize>(rows: &mut [[T; N]]) -> &mut [T] {
    bytemuck::must_cast_slice_mut(rows)
}

/// Zero-initialised output buffer of runtime length.
pub fn zeroed<T: Copy + Default>(n: usize) -> Vec<T> {
    vec![T::default(); n]
}

/// Pointer to a possibly-empty slice, as CSPICE expects for `const T *` arrays.
pub fn ptr_or_null<T>(s: &[T]) -> *const T {
    if s.is_empty() {
        std::ptr::null()
    } else {
        s.as_ptr()
    }
}

/// Dense row-major matrix with dimensions known only at run time.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build from a list of rows. Every row must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            check_len("matrix row", cols, row.len())?;
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        check_len("matrix data", rows * cols, data.len())?;
        Ok(Self { rows, cols, data })
    }

    pub fn from_fixed<const NR: usize, const NC: usize>(m: &[[f64; NC]; NR]) -> Self {
        Self {
            rows: NR,
            cols: NC,
            data: flatten(m).to_vec(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn nrow(&self) -> SpiceInt {
        spice_int(self.rows)
    }

    pub fn ncol(&self) -> SpiceInt {
        spice_int(self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks_exact(self.cols).map(|r| r.to_vec()).collect()
    }

    pub fn to_fixed<const NR: usize, const NC: usize>(&self) -> Result<[[f64; NC]; NR]> {
        check_len("matrix rows", NR, self.rows)?;
        check_len("matrix columns", NC, self.cols)?;
        let mut ret = [[0.0; NC]; NR];
        flatten_mut(&mut ret).copy_from_slice(&self.data);
        Ok(ret)
    }

    /// Generic-matrix routines declare their matrices as `const void *`.
    pub fn as_void_ptr(&self) -> *const c_void {
        self.data.as_ptr().cast()
    }

    pub fn as_mut_void_ptr(&mut self) -> *mut c_void {
        self.data.as_mut_ptr().cast()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_vector() {
        let v: [f64; 3] = to_fixed("v", &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0]);

        assert_eq!(
            to_fixed::<f64, 3>("v", &[1.0, 2.0]),
            Err(Error::Shape {
                what: "v",
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn order_vectors() {
        assert!(check_order("o", &[2, 0, 1], 3).is_ok());
        assert!(check_order("o", &[], 0).is_ok());
        assert_eq!(
            check_order("o", &[5, 1], 2),
            Err(Error::InvalidOrder { what: "o", index: 5 })
        );
        assert_eq!(
            check_order("o", &[0, -1], 2),
            Err(Error::InvalidOrder { what: "o", index: -1 })
        );
        assert_eq!(
            check_order("o", &[1, 1], 2),
            Err(Error::InvalidOrder { what: "o", index: 1 })
        );
        assert!(matches!(check_order("o", &[0], 2), Err(Error::Shape { .. })));
    }

    #[test]
    fn fixed_matrix_rows() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![0.0, 4.0, 5.0], vec![0.0, 6.0, 0.0]];
        let m: [[f64; 3]; 3] = to_fixed_matrix("m", &rows).unwrap();
        assert_eq!(m[0], [1.0, 2.0, 3.0]);
        assert_eq!(m[2][1], 6.0);
        assert_eq!(matrix_to_rows(&m), rows);
    }

    #[test]
    fn fixed_matrix_ragged() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![0.0, 4.0], vec![0.0, 6.0, 0.0]];
        assert!(matches!(
            to_fixed_matrix::<_, 3, 3>("m", &rows),
            Err(Error::Shape { actual: 2, .. })
        ));

        let rows = vec![vec![1.0, 2.0, 3.0]];
        assert!(matches!(
            to_fixed_matrix::<_, 3, 3>("m", &rows),
            Err(Error::Shape {
                expected: 3,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn runtime_matrix() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        assert_eq!((m.rows(), m.cols()), (3, 2));
        assert_eq!(m.get(2, 0), Some(5.0));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.to_rows()[1], vec![3.0, 4.0]);

        assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
        assert!(Matrix::from_row_major(2, 2, vec![1.0; 3]).is_err());

        let fixed: [[f64; 2]; 3] = m.to_fixed().unwrap();
        assert_eq!(Matrix::from_fixed(&fixed), m);
        assert!(m.to_fixed::<2, 3>().is_err());
    }

    #[test]
    fn flat_rows() {
        let mut pts = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(flatten(&pts), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        flatten_mut(&mut pts)[4] = 0.0;
        assert_eq!(pts[1], [4.0, 0.0, 6.0]);
    }

    #[test]
    fn lengths() {
        assert_eq!(common_len("v", &[&[1.0, 2.0], &[3.0, 4.0]]), Ok(2));
        assert!(common_len("v", &[&[1.0, 2.0], &[3.0]]).is_err());
        assert!(ptr_or_null::<f64>(&[]).is_null());
    }
}
