//! Searching, ordering and sorting of arrays, and a few numeric helpers.
//!
//! Indices are 0-based. Searches return `None` where CSPICE returns -1.

use super::cstr;
use crate::{CharArray, Result, SpiceContext, SpiceInt};
use cspice_marshal::{array, from_bool, spice_int, to_bool};

fn index(ret: SpiceInt) -> Option<usize> {
    usize::try_from(ret).ok()
}

impl SpiceContext<'_> {
    /// Whether `array` is a permutation of `0..array.len()`.
    pub fn isordv(&mut self, array: &[SpiceInt]) -> Result<bool> {
        let ret = native!(
            self,
            isordv_c(array::ptr_or_null(array), spice_int(array.len()))
        );
        Ok(to_bool(ret))
    }

    /// First element equal to `value`.
    pub fn isrchc<S: AsRef<str>>(&mut self, value: &str, array: &[S]) -> Result<Option<usize>> {
        let value = cstr(value)?;
        let array = CharArray::from_strs(array)?;
        Ok(index(native!(
            self,
            isrchc_c(
                value.as_ptr(),
                array.count(),
                array.element_length(),
                array.as_ptr()
            )
        )))
    }

    pub fn isrchd(&mut self, value: f64, array: &[f64]) -> Result<Option<usize>> {
        Ok(index(native!(
            self,
            isrchd_c(value, spice_int(array.len()), array::ptr_or_null(array))
        )))
    }

    pub fn isrchi(&mut self, value: SpiceInt, array: &[SpiceInt]) -> Result<Option<usize>> {
        Ok(index(native!(
            self,
            isrchi_c(value, spice_int(array.len()), array::ptr_or_null(array))
        )))
    }

    /// First element equivalent to `value`, ignoring case and blanks.
    pub fn esrchc<S: AsRef<str>>(&mut self, value: &str, array: &[S]) -> Result<Option<usize>> {
        let value = cstr(value)?;
        let array = CharArray::from_strs(array)?;
        Ok(index(native!(
            self,
            esrchc_c(
                value.as_ptr(),
                array.count(),
                array.element_length(),
                array.as_ptr()
            )
        )))
    }

    /// Binary search of a sorted array.
    pub fn bsrchc<S: AsRef<str>>(&mut self, value: &str, array: &[S]) -> Result<Option<usize>> {
        let value = cstr(value)?;
        let array = CharArray::from_strs(array)?;
        Ok(index(native!(
            self,
            bsrchc_c(
                value.as_ptr(),
                array.count(),
                array.element_length(),
                array.as_ptr()
            )
        )))
    }

    pub fn bsrchd(&mut self, value: f64, array: &[f64]) -> Result<Option<usize>> {
        Ok(index(native!(
            self,
            bsrchd_c(value, spice_int(array.len()), array::ptr_or_null(array))
        )))
    }

    pub fn bsrchi(&mut self, value: SpiceInt, array: &[SpiceInt]) -> Result<Option<usize>> {
        Ok(index(native!(
            self,
            bsrchi_c(value, spice_int(array.len()), array::ptr_or_null(array))
        )))
    }

    /// Binary search of an array sorted through the order vector `order`.
    pub fn bschoc<S: AsRef<str>>(&mut self, value: &str, array: &[S], order: &[SpiceInt]) -> Result<Option<usize>> {
        array::check_order("bschoc order", order, array.len())?;
        let value = cstr(value)?;
        let array = CharArray::from_strs(array)?;
        Ok(index(native!(
            self,
            bschoc_c(
                value.as_ptr(),
                array.count(),
                array.element_length(),
                array.as_ptr(),
                array::ptr_or_null(order)
            )
        )))
    }

    pub fn bschoi(&mut self, value: SpiceInt, array: &[SpiceInt], order: &[SpiceInt]) -> Result<Option<usize>> {
        array::check_order("bschoi order", order, array.len())?;
        Ok(index(native!(
            self,
            bschoi_c(
                value,
                spice_int(array.len()),
                array::ptr_or_null(array),
                array::ptr_or_null(order)
            )
        )))
    }

    /// Last element of a sorted array that is `<= string`.
    pub fn lstlec<S: AsRef<str>>(&mut self, string: &str, array: &[S]) -> Result<Option<usize>> {
        let string = cstr(string)?;
        let array = CharArray::from_strs(array)?;
        Ok(index(native!(
            self,
            lstlec_c(
                string.as_ptr(),
                array.count(),
                array.element_length(),
                array.as_ptr()
            )
        )))
    }

    pub fn lstltc<S: AsRef<str>>(&mut self, string: &str, array: &[S]) -> Result<Option<usize>> {
        let string = cstr(string)?;
        let array = CharArray::from_strs(array)?;
        Ok(index(native!(
            self,
            lstltc_c(
                string.as_ptr(),
                array.count(),
                array.element_length(),
                array.as_ptr()
            )
        )))
    }

    pub fn lstled(&mut self, x: f64, array: &[f64]) -> Result<Option<usize>> {
        Ok(index(native!(
            self,
            lstled_c(x, spice_int(array.len()), array::ptr_or_null(array))
        )))
    }

    pub fn lstltd(&mut self, x: f64, array: &[f64]) -> Result<Option<usize>> {
        Ok(index(native!(
            self,
            lstltd_c(x, spice_int(array.len()), array::ptr_or_null(array))
        )))
    }

    pub fn lstlei(&mut self, x: SpiceInt, array: &[SpiceInt]) -> Result<Option<usize>> {
        Ok(index(native!(
            self,
            lstlei_c(x, spice_int(array.len()), array::ptr_or_null(array))
        )))
    }

    pub fn lstlti(&mut self, x: SpiceInt, array: &[SpiceInt]) -> Result<Option<usize>> {
        Ok(index(native!(
            self,
            lstlti_c(x, spice_int(array.len()), array::ptr_or_null(array))
        )))
    }

    /// Order vector that sorts `array`.
    pub fn orderc<S: AsRef<str>>(&mut self, array: &[S]) -> Result<Vec<SpiceInt>> {
        let array = CharArray::from_strs(array)?;
        let mut iorder = vec![0; array.len()];
        native!(
            self,
            orderc_c(
                array.element_length(),
                array.as_ptr(),
                array.count(),
                iorder.as_mut_ptr()
            )
        );
        Ok(iorder)
    }

    pub fn orderd(&mut self, array: &[f64]) -> Result<Vec<SpiceInt>> {
        let mut iorder = vec![0; array.len()];
        native!(
            self,
            orderd_c(
                array::ptr_or_null(array),
                spice_int(array.len()),
                iorder.as_mut_ptr()
            )
        );
        Ok(iorder)
    }

    pub fn orderi(&mut self, array: &[SpiceInt]) -> Result<Vec<SpiceInt>> {
        let mut iorder = vec![0; array.len()];
        native!(
            self,
            orderi_c(
                array::ptr_or_null(array),
                spice_int(array.len()),
                iorder.as_mut_ptr()
            )
        );
        Ok(iorder)
    }

    /// Reorder `array` in place according to an order vector, which must be a
    /// permutation of `0..array.len()`.
    pub fn reordc(&mut self, iorder: &[SpiceInt], array: &mut [String]) -> Result<()> {
        array::check_order("reordc order", iorder, array.len())?;
        let mut buffer = CharArray::from_strs(&*array)?;
        native!(
            self,
            reordc_c(
                array::ptr_or_null(iorder),
                buffer.count(),
                buffer.element_length(),
                buffer.as_mut_ptr()
            )
        );
        for (slot, s) in array.iter_mut().zip(buffer.to_strings(iorder.len())?) {
            *slot = s;
        }
        Ok(())
    }

    pub fn reordd(&mut self, iorder: &[SpiceInt], array: &mut [f64]) -> Result<()> {
        array::check_order("reordd order", iorder, array.len())?;
        native!(
            self,
            reordd_c(
                array::ptr_or_null(iorder),
                spice_int(array.len()),
                array.as_mut_ptr()
            )
        );
        Ok(())
    }

    pub fn reordi(&mut self, iorder: &[SpiceInt], array: &mut [SpiceInt]) -> Result<()> {
        array::check_order("reordi order", iorder, array.len())?;
        native!(
            self,
            reordi_c(
                array::ptr_or_null(iorder),
                spice_int(array.len()),
                array.as_mut_ptr()
            )
        );
        Ok(())
    }

    pub fn reordl(&mut self, iorder: &[SpiceInt], array: &mut [bool]) -> Result<()> {
        array::check_order("reordl order", iorder, array.len())?;
        let mut flags: Vec<_> = array.iter().map(|&b| from_bool(b)).collect();
        native!(
            self,
            reordl_c(
                array::ptr_or_null(iorder),
                spice_int(flags.len()),
                flags.as_mut_ptr()
            )
        );
        for (slot, f) in array.iter_mut().zip(flags) {
            *slot = to_bool(f);
        }
        Ok(())
    }

    /// Sort in place, in ASCII order.
    pub fn shellc(&mut self, array: &mut [String]) -> Result<()> {
        let mut buffer = CharArray::from_strs(&*array)?;
        native!(
            self,
            shellc_c(buffer.count(), buffer.element_length(), buffer.as_mut_ptr())
        );
        for (slot, s) in array.iter_mut().zip(buffer.to_strings(buffer.len())?) {
            *slot = s;
        }
        Ok(())
    }

    pub fn shelld(&mut self, array: &mut [f64]) -> Result<()> {
        native!(self, shelld_c(spice_int(array.len()), array.as_mut_ptr()));
        Ok(())
    }

    pub fn shelli(&mut self, array: &mut [SpiceInt]) -> Result<()> {
        native!(self, shelli_c(spice_int(array.len()), array.as_mut_ptr()));
        Ok(())
    }

    pub fn sumad(&mut self, array: &[f64]) -> Result<f64> {
        Ok(native!(
            self,
            sumad_c(array::ptr_or_null(array), spice_int(array.len()))
        ))
    }

    pub fn sumai(&mut self, array: &[SpiceInt]) -> Result<SpiceInt> {
        Ok(native!(
            self,
            sumai_c(array::ptr_or_null(array), spice_int(array.len()))
        ))
    }

    pub fn moved(&mut self, arrfrm: &[f64]) -> Result<Vec<f64>> {
        let mut arrto = vec![0.0; arrfrm.len()];
        native!(
            self,
            moved_c(
                array::ptr_or_null(arrfrm),
                spice_int(arrfrm.len()),
                arrto.as_mut_ptr()
            )
        );
        Ok(arrto)
    }

    /// Clamp `number` to the interval between `end1` and `end2`.
    pub fn brcktd(&mut self, number: f64, end1: f64, end2: f64) -> Result<f64> {
        Ok(native!(self, brcktd_c(number, end1, end2)))
    }

    pub fn brckti(&mut self, number: SpiceInt, end1: SpiceInt, end2: SpiceInt) -> Result<SpiceInt> {
        Ok(native!(self, brckti_c(number, end1, end2)))
    }

    /// Roots of `a x^2 + b x + c`, each as `[real, imaginary]`.
    pub fn rquad(&mut self, a: f64, b: f64, c: f64) -> Result<([f64; 2], [f64; 2])> {
        let mut root1 = [0.0; 2];
        let mut root2 = [0.0; 2];
        native!(
            self,
            rquad_c(a, b, c, root1.as_mut_ptr(), root2.as_mut_ptr())
        );
        Ok((root1, root2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_index() {
        assert_eq!(index(-1), None);
        assert_eq!(index(3), Some(3));
    }
}
