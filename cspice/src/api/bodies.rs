//! Body and surface names, codes and constants.

use super::{cstr, found};
use crate::consts::names::{BDNMLN, SFNMLN};
use crate::{Result, SpiceContext, SpiceInt};
use cspice_marshal::{FixedString, SPICEFALSE, host_count, spice_int, to_bool};

impl SpiceContext<'_> {
    pub fn bodn2c(&mut self, name: &str) -> Result<Option<SpiceInt>> {
        let name = cstr(name)?;
        let mut code = 0;
        let mut fnd = SPICEFALSE;
        native!(self, bodn2c_c(name.as_ptr(), &mut code, &mut fnd));
        Ok(found(fnd, code))
    }

    pub fn bodc2n(&mut self, code: SpiceInt) -> Result<Option<String>> {
        let mut name = FixedString::new(BDNMLN);
        let mut fnd = SPICEFALSE;
        native!(self, bodc2n_c(code, name.lenout(), name.as_mut_ptr(), &mut fnd));
        if !to_bool(fnd) {
            return Ok(None);
        }
        Ok(Some(name.decode()?))
    }

    /// Name of a body, or its code as a string if it has no name.
    pub fn bodc2s(&mut self, code: SpiceInt) -> Result<String> {
        let mut name = FixedString::new(BDNMLN);
        native!(self, bodc2s_c(code, name.lenout(), name.as_mut_ptr()));
        Ok(name.decode()?)
    }

    /// Code of a body given its name or its code as a string.
    pub fn bods2c(&mut self, name: &str) -> Result<Option<SpiceInt>> {
        let name = cstr(name)?;
        let mut code = 0;
        let mut fnd = SPICEFALSE;
        native!(self, bods2c_c(name.as_ptr(), &mut code, &mut fnd));
        Ok(found(fnd, code))
    }

    pub fn boddef(&mut self, name: &str, code: SpiceInt) -> Result<()> {
        let name = cstr(name)?;
        native!(self, boddef_c(name.as_ptr(), code));
        Ok(())
    }

    /// Whether `BODY<body>_<item>` is in the kernel pool.
    pub fn bodfnd(&mut self, body: SpiceInt, item: &str) -> Result<bool> {
        let item = cstr(item)?;
        Ok(to_bool(native!(self, bodfnd_c(body, item.as_ptr()))))
    }

    /// Up to `maxn` values of a body constant, e.g. `bodvrd("EARTH", "RADII", 3)`.
    pub fn bodvrd(&mut self, bodynm: &str, item: &str, maxn: usize) -> Result<Vec<f64>> {
        let bodynm = cstr(bodynm)?;
        let item = cstr(item)?;
        let mut dim = 0;
        let mut values = vec![0.0; maxn];
        native!(
            self,
            bodvrd_c(
                bodynm.as_ptr(),
                item.as_ptr(),
                spice_int(maxn),
                &mut dim,
                values.as_mut_ptr()
            )
        );
        values.truncate(host_count(dim));
        Ok(values)
    }

    pub fn bodvcd(&mut self, bodyid: SpiceInt, item: &str, maxn: usize) -> Result<Vec<f64>> {
        let item = cstr(item)?;
        let mut dim = 0;
        let mut values = vec![0.0; maxn];
        native!(
            self,
            bodvcd_c(bodyid, item.as_ptr(), spice_int(maxn), &mut dim, values.as_mut_ptr())
        );
        values.truncate(host_count(dim));
        Ok(values)
    }

    /// Surface name for `code` on `bodyid`. The flag is false when no name is defined
    /// and the string is just the code.
    pub fn srfc2s(&mut self, code: SpiceInt, bodyid: SpiceInt) -> Result<(String, bool)> {
        let mut srfstr = FixedString::new(SFNMLN);
        let mut isname = SPICEFALSE;
        native!(
            self,
            srfc2s_c(code, bodyid, srfstr.lenout(), srfstr.as_mut_ptr(), &mut isname)
        );
        Ok((srfstr.decode()?, to_bool(isname)))
    }

    pub fn srfcss(&mut self, code: SpiceInt, bodstr: &str) -> Result<(String, bool)> {
        let bodstr = cstr(bodstr)?;
        let mut srfstr = FixedString::new(SFNMLN);
        let mut isname = SPICEFALSE;
        native!(
            self,
            srfcss_c(code, bodstr.as_ptr(), srfstr.lenout(), srfstr.as_mut_ptr(), &mut isname)
        );
        Ok((srfstr.decode()?, to_bool(isname)))
    }

    pub fn srfs2c(&mut self, srfstr: &str, bodstr: &str) -> Result<Option<SpiceInt>> {
        let srfstr = cstr(srfstr)?;
        let bodstr = cstr(bodstr)?;
        let mut code = 0;
        let mut fnd = SPICEFALSE;
        native!(
            self,
            srfs2c_c(srfstr.as_ptr(), bodstr.as_ptr(), &mut code, &mut fnd)
        );
        Ok(found(fnd, code))
    }

    pub fn srfscc(&mut self, srfstr: &str, bodyid: SpiceInt) -> Result<Option<SpiceInt>> {
        let srfstr = cstr(srfstr)?;
        let mut code = 0;
        let mut fnd = SPICEFALSE;
        native!(self, srfscc_c(srfstr.as_ptr(), bodyid, &mut code, &mut fnd));
        Ok(found(fnd, code))
    }
}
