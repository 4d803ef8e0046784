//! Time conversion and formatting.
//!
//! Most of these need a leapseconds kernel to be loaded.

use super::cstr;
use crate::consts::{self, strings::TIMELEN};
use crate::{Result, SpiceContext, SpiceInt};
use cspice_marshal::{FixedString, SPICEFALSE, to_bool};
use log::trace;

impl SpiceContext<'_> {
    /// Convert a time string to ephemeris time (TDB seconds past J2000).
    pub fn str2et(&mut self, string: &str) -> Result<f64> {
        let string = cstr(string)?;
        let mut et = 0.0;
        native!(self, str2et_c(string.as_ptr(), &mut et));
        Ok(et)
    }

    /// [`str2et`](Self::str2et) for each string in turn, stopping at the first error.
    pub fn str2et_batch<S: AsRef<str>>(&mut self, strings: &[S]) -> Result<Vec<f64>> {
        trace!("str2et over {} strings", strings.len());
        strings.iter().map(|s| self.str2et(s.as_ref())).collect()
    }

    pub fn utc2et(&mut self, utcstr: &str) -> Result<f64> {
        let utcstr = cstr(utcstr)?;
        let mut et = 0.0;
        native!(self, utc2et_c(utcstr.as_ptr(), &mut et));
        Ok(et)
    }

    pub fn utc2et_batch<S: AsRef<str>>(&mut self, utcstrs: &[S]) -> Result<Vec<f64>> {
        trace!("utc2et over {} strings", utcstrs.len());
        utcstrs.iter().map(|s| self.utc2et(s.as_ref())).collect()
    }

    /// Format `et` as UTC. `format` is one of `"C"`, `"D"`, `"J"`, `"ISOC"`, `"ISOD"`;
    /// `prec` is the number of decimal places of seconds.
    pub fn et2utc(&mut self, et: f64, format: &str, prec: SpiceInt) -> Result<String> {
        let format = cstr(format)?;
        let mut utcstr = FixedString::new(TIMELEN);
        native!(
            self,
            et2utc_c(et, format.as_ptr(), prec, utcstr.lenout(), utcstr.as_mut_ptr())
        );
        Ok(utcstr.decode()?)
    }

    pub fn et2utc_batch(&mut self, ets: &[f64], format: &str, prec: SpiceInt) -> Result<Vec<String>> {
        trace!("et2utc over {} epochs", ets.len());
        ets.iter().map(|&et| self.et2utc(et, format, prec)).collect()
    }

    /// Calendar string for `et`, without any kernels.
    pub fn etcal(&mut self, et: f64) -> Result<String> {
        let mut string = FixedString::new(TIMELEN);
        native!(self, etcal_c(et, string.lenout(), string.as_mut_ptr()));
        Ok(string.decode()?)
    }

    /// Format `et` according to a picture such as `"YYYY-MM-DD HR:MN:SC.### ::UTC"`.
    ///
    /// The output buffer is sized from the picture.
    pub fn timout(&mut self, et: f64, pictur: &str) -> Result<String> {
        let mut output = FixedString::new(consts::timout_len(pictur));
        let pictur = cstr(pictur)?;
        native!(
            self,
            timout_c(et, pictur.as_ptr(), output.lenout(), output.as_mut_ptr())
        );
        Ok(output.decode()?)
    }

    pub fn timout_batch(&mut self, ets: &[f64], pictur: &str) -> Result<Vec<String>> {
        trace!("timout over {} epochs", ets.len());
        ets.iter().map(|&et| self.timout(et, pictur)).collect()
    }

    /// Derive a `timout` picture from an example time string.
    ///
    /// The inner `Err` holds CSPICE's explanation when `sample` is not recognised.
    pub fn tpictr(&mut self, sample: &str) -> Result<std::result::Result<String, String>> {
        let sample = cstr(sample)?;
        let mut pictur = FixedString::new(consts::strings::DEFAULT_LEN);
        let mut errmsg = FixedString::new(consts::strings::MSGLEN);
        let mut ok = SPICEFALSE;
        native!(
            self,
            tpictr_c(
                sample.as_ptr(),
                pictur.lenout(),
                errmsg.lenout(),
                pictur.as_mut_ptr(),
                &mut ok,
                errmsg.as_mut_ptr()
            )
        );
        if to_bool(ok) {
            Ok(Ok(pictur.decode()?))
        } else {
            Ok(Err(errmsg.decode()?))
        }
    }

    /// Parse a time string to UTC seconds past J2000, without leapseconds.
    ///
    /// The inner `Err` holds the parser's diagnostic.
    pub fn tparse(&mut self, string: &str) -> Result<std::result::Result<f64, String>> {
        let string = cstr(string)?;
        let mut sp2000 = 0.0;
        let mut errmsg = FixedString::new(consts::strings::MSGLEN);
        native!(
            self,
            tparse_c(string.as_ptr(), errmsg.lenout(), &mut sp2000, errmsg.as_mut_ptr())
        );
        let errmsg = errmsg.decode()?;
        if errmsg.is_empty() {
            Ok(Ok(sp2000))
        } else {
            Ok(Err(errmsg))
        }
    }

    /// Enable (`"YES"`) or disable (`"NO"`) non-standard time string forms.
    pub fn tparch(&mut self, type_: &str) -> Result<()> {
        let type_ = cstr(type_)?;
        native!(self, tparch_c(type_.as_ptr()));
        Ok(())
    }

    /// Get (`action = "GET"`) or set (`"SET"`) a default of the time subsystem. Returns
    /// the item's current value.
    pub fn timdef(&mut self, action: &str, item: &str, value: &str) -> Result<String> {
        let action = cstr(action)?;
        let item = cstr(item)?;
        let mut value = FixedString::from_str(value, consts::strings::WORDLEN)?;
        native!(
            self,
            timdef_c(action.as_ptr(), item.as_ptr(), value.lenout(), value.as_mut_ptr())
        );
        Ok(value.decode()?)
    }

    /// Set the lower bound of the 100-year window used for two-digit years.
    pub fn tsetyr(&mut self, year: SpiceInt) -> Result<()> {
        native!(self, tsetyr_c(year));
        Ok(())
    }

    /// Convert `epoch` between uniform time scales (`"TAI"`, `"TDB"`, `"TDT"`, `"ET"`,
    /// `"JDTDB"`, ...).
    pub fn unitim(&mut self, epoch: f64, insys: &str, outsys: &str) -> Result<f64> {
        let insys = cstr(insys)?;
        let outsys = cstr(outsys)?;
        Ok(native!(self, unitim_c(epoch, insys.as_ptr(), outsys.as_ptr())))
    }

    /// ET - UTC at `epoch`, which is of type `"ET"` or `"UTC"`.
    pub fn deltet(&mut self, epoch: f64, eptype: &str) -> Result<f64> {
        let eptype = cstr(eptype)?;
        let mut delta = 0.0;
        native!(self, deltet_c(epoch, eptype.as_ptr(), &mut delta));
        Ok(delta)
    }

    /// Local solar time at longitude `lon` on `body`. Returns
    /// `(hr, mn, sc, time, ampm)`.
    pub fn et2lst(
        &mut self,
        et: f64,
        body: SpiceInt,
        lon: f64,
        type_: &str,
    ) -> Result<(SpiceInt, SpiceInt, SpiceInt, String, String)> {
        let type_ = cstr(type_)?;
        let (mut hr, mut mn, mut sc) = (0, 0, 0);
        let mut time = FixedString::new(TIMELEN);
        let mut ampm = FixedString::new(TIMELEN);
        native!(
            self,
            et2lst_c(
                et,
                body,
                lon,
                type_.as_ptr(),
                time.lenout(),
                ampm.lenout(),
                &mut hr,
                &mut mn,
                &mut sc,
                time.as_mut_ptr(),
                ampm.as_mut_ptr()
            )
        );
        Ok((hr, mn, sc, time.decode()?, ampm.decode()?))
    }

    /// One-way light time between two bodies. Returns `(ettarg, elapsd)`.
    pub fn ltime(&mut self, etobs: f64, obs: SpiceInt, dir: &str, targ: SpiceInt) -> Result<(f64, f64)> {
        let dir = cstr(dir)?;
        let mut ettarg = 0.0;
        let mut elapsd = 0.0;
        native!(
            self,
            ltime_c(etobs, obs, dir.as_ptr(), targ, &mut ettarg, &mut elapsd)
        );
        Ok((ettarg, elapsd))
    }

    /// Convert a measurement between units (`"DEGREES"`, `"KM"`, `"AU"`, ...).
    pub fn convrt(&mut self, x: f64, in_: &str, out: &str) -> Result<f64> {
        let in_ = cstr(in_)?;
        let out = cstr(out)?;
        let mut y = 0.0;
        native!(self, convrt_c(x, in_.as_ptr(), out.as_ptr(), &mut y));
        Ok(y)
    }
}
