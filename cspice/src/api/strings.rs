//! String utilities: case, comparison, searching, marker replacement, parsing and
//! number formatting.
//!
//! Character positions are 0-based. Searches return `None` where CSPICE returns -1.

use super::cstr;
use crate::consts::strings::{DEFAULT_LEN, MSGLEN, WORDLEN};
use crate::{AsSpiceCell, CharArray, CharCell, Result, SpiceContext, SpiceInt};
use cspice_marshal::{FixedString, SPICEFALSE, fstr, host_count, to_bool};

fn position(ret: SpiceInt) -> Option<usize> {
    usize::try_from(ret).ok()
}

/// Room for `input` with a marker replaced by up to `extra` bytes.
fn replaced_len(input: &str, extra: usize) -> usize {
    input.len() + extra + 1
}

impl SpiceContext<'_> {
    pub fn ucase(&mut self, input: &str) -> Result<String> {
        let mut out = FixedString::new(input.len() + 1);
        let input = cstr(input)?;
        native!(self, ucase_c(input.as_ptr(), out.lenout(), out.as_mut_ptr()));
        Ok(out.decode()?)
    }

    pub fn lcase(&mut self, input: &str) -> Result<String> {
        let mut out = FixedString::new(input.len() + 1);
        let input = cstr(input)?;
        native!(self, lcase_c(input.as_ptr(), out.lenout(), out.as_mut_ptr()));
        Ok(out.decode()?)
    }

    /// Squeeze runs of more than `n` consecutive `delim` characters down to `n`.
    pub fn cmprss(&mut self, delim: char, n: SpiceInt, input: &str) -> Result<String> {
        let delim = fstr::to_char(delim)?;
        let mut output = FixedString::new(input.len() + 1);
        let input = cstr(input)?;
        native!(
            self,
            cmprss_c(delim, n, input.as_ptr(), output.lenout(), output.as_mut_ptr())
        );
        Ok(output.decode()?)
    }

    /// Index of the last non-blank character.
    pub fn lastnb(&mut self, string: &str) -> Result<Option<usize>> {
        let string = cstr(string)?;
        Ok(position(native!(self, lastnb_c(string.as_ptr()))))
    }

    pub fn iswhsp(&mut self, string: &str) -> Result<bool> {
        let string = cstr(string)?;
        Ok(to_bool(native!(self, iswhsp_c(string.as_ptr()))))
    }

    /// Equality ignoring case and blanks.
    pub fn eqstr(&mut self, a: &str, b: &str) -> Result<bool> {
        let a = cstr(a)?;
        let b = cstr(b)?;
        Ok(to_bool(native!(self, eqstr_c(a.as_ptr(), b.as_ptr()))))
    }

    /// Case-insensitive wildcard match. `wstr` matches any substring, `wchr` any one
    /// character.
    pub fn matchi(&mut self, string: &str, templ: &str, wstr: char, wchr: char) -> Result<bool> {
        let string = cstr(string)?;
        let templ = cstr(templ)?;
        let (wstr, wchr) = (fstr::to_char(wstr)?, fstr::to_char(wchr)?);
        Ok(to_bool(native!(
            self,
            matchi_c(string.as_ptr(), templ.as_ptr(), wstr, wchr)
        )))
    }

    pub fn matchw(&mut self, string: &str, templ: &str, wstr: char, wchr: char) -> Result<bool> {
        let string = cstr(string)?;
        let templ = cstr(templ)?;
        let (wstr, wchr) = (fstr::to_char(wstr)?, fstr::to_char(wchr)?);
        Ok(to_bool(native!(
            self,
            matchw_c(string.as_ptr(), templ.as_ptr(), wstr, wchr)
        )))
    }

    /// First character at or after `start` that is in `chars`.
    pub fn cpos(&mut self, string: &str, chars: &str, start: SpiceInt) -> Result<Option<usize>> {
        let string = cstr(string)?;
        let chars = cstr(chars)?;
        Ok(position(native!(
            self,
            cpos_c(string.as_ptr(), chars.as_ptr(), start)
        )))
    }

    /// Last character at or before `start` that is in `chars`.
    pub fn cposr(&mut self, string: &str, chars: &str, start: SpiceInt) -> Result<Option<usize>> {
        let string = cstr(string)?;
        let chars = cstr(chars)?;
        Ok(position(native!(
            self,
            cposr_c(string.as_ptr(), chars.as_ptr(), start)
        )))
    }

    /// First character at or after `start` that is not in `chars`.
    pub fn ncpos(&mut self, string: &str, chars: &str, start: SpiceInt) -> Result<Option<usize>> {
        let string = cstr(string)?;
        let chars = cstr(chars)?;
        Ok(position(native!(
            self,
            ncpos_c(string.as_ptr(), chars.as_ptr(), start)
        )))
    }

    pub fn ncposr(&mut self, string: &str, chars: &str, start: SpiceInt) -> Result<Option<usize>> {
        let string = cstr(string)?;
        let chars = cstr(chars)?;
        Ok(position(native!(
            self,
            ncposr_c(string.as_ptr(), chars.as_ptr(), start)
        )))
    }

    pub fn pos(&mut self, string: &str, substr: &str, start: SpiceInt) -> Result<Option<usize>> {
        let string = cstr(string)?;
        let substr = cstr(substr)?;
        Ok(position(native!(
            self,
            pos_c(string.as_ptr(), substr.as_ptr(), start)
        )))
    }

    pub fn posr(&mut self, string: &str, substr: &str, start: SpiceInt) -> Result<Option<usize>> {
        let string = cstr(string)?;
        let substr = cstr(substr)?;
        Ok(position(native!(
            self,
            posr_c(string.as_ptr(), substr.as_ptr(), start)
        )))
    }

    /// Replace the first `marker` in `input` with `value`.
    pub fn repmc(&mut self, input: &str, marker: &str, value: &str) -> Result<String> {
        let mut out = FixedString::new(replaced_len(input, value.len()));
        let input = cstr(input)?;
        let marker = cstr(marker)?;
        let value = cstr(value)?;
        native!(
            self,
            repmc_c(
                input.as_ptr(),
                marker.as_ptr(),
                value.as_ptr(),
                out.lenout(),
                out.as_mut_ptr()
            )
        );
        Ok(out.decode()?)
    }

    /// Replace a marker with a cardinal number written out in words. `repcase` is
    /// `'U'`, `'L'` or `'C'`.
    pub fn repmct(&mut self, input: &str, marker: &str, value: SpiceInt, repcase: char) -> Result<String> {
        let mut out = FixedString::new(replaced_len(input, WORDLEN));
        let input = cstr(input)?;
        let marker = cstr(marker)?;
        let repcase = fstr::to_char(repcase)?;
        native!(
            self,
            repmct_c(
                input.as_ptr(),
                marker.as_ptr(),
                value,
                repcase,
                out.lenout(),
                out.as_mut_ptr()
            )
        );
        Ok(out.decode()?)
    }

    pub fn repmd(&mut self, input: &str, marker: &str, value: f64, sigdig: SpiceInt) -> Result<String> {
        let mut out = FixedString::new(replaced_len(input, 32));
        let input = cstr(input)?;
        let marker = cstr(marker)?;
        native!(
            self,
            repmd_c(
                input.as_ptr(),
                marker.as_ptr(),
                value,
                sigdig,
                out.lenout(),
                out.as_mut_ptr()
            )
        );
        Ok(out.decode()?)
    }

    /// Like [`repmd`](Self::repmd), with `format` `'E'` or `'F'`.
    pub fn repmf(&mut self, input: &str, marker: &str, value: f64, sigdig: SpiceInt, format: char) -> Result<String> {
        // 'F' format of a large number can be long
        let mut out = FixedString::new(replaced_len(input, DEFAULT_LEN));
        let input = cstr(input)?;
        let marker = cstr(marker)?;
        let format = fstr::to_char(format)?;
        native!(
            self,
            repmf_c(
                input.as_ptr(),
                marker.as_ptr(),
                value,
                sigdig,
                format,
                out.lenout(),
                out.as_mut_ptr()
            )
        );
        Ok(out.decode()?)
    }

    pub fn repmi(&mut self, input: &str, marker: &str, value: SpiceInt) -> Result<String> {
        let mut out = FixedString::new(replaced_len(input, 12));
        let input = cstr(input)?;
        let marker = cstr(marker)?;
        native!(
            self,
            repmi_c(
                input.as_ptr(),
                marker.as_ptr(),
                value,
                out.lenout(),
                out.as_mut_ptr()
            )
        );
        Ok(out.decode()?)
    }

    /// Replace a marker with an ordinal number in words.
    pub fn repmot(&mut self, input: &str, marker: &str, value: SpiceInt, repcase: char) -> Result<String> {
        let mut out = FixedString::new(replaced_len(input, WORDLEN));
        let input = cstr(input)?;
        let marker = cstr(marker)?;
        let repcase = fstr::to_char(repcase)?;
        native!(
            self,
            repmot_c(
                input.as_ptr(),
                marker.as_ptr(),
                value,
                repcase,
                out.lenout(),
                out.as_mut_ptr()
            )
        );
        Ok(out.decode()?)
    }

    /// Split `list` on the single character `delim`, keeping at most `nmax` items.
    pub fn lparse(&mut self, list: &str, delim: &str, nmax: usize) -> Result<Vec<String>> {
        let mut items = CharArray::new(nmax, list.len() + 1);
        let list = cstr(list)?;
        let delim = cstr(delim)?;
        let mut n = 0;
        native!(
            self,
            lparse_c(
                list.as_ptr(),
                delim.as_ptr(),
                items.count(),
                items.element_length(),
                &mut n,
                items.as_mut_ptr()
            )
        );
        Ok(items.to_strings(host_count(n))?)
    }

    /// Split `list` on any of the characters in `delims`.
    pub fn lparsm(&mut self, list: &str, delims: &str, nmax: usize) -> Result<Vec<String>> {
        let mut items = CharArray::new(nmax, list.len() + 1);
        let list = cstr(list)?;
        let delims = cstr(delims)?;
        let mut n = 0;
        native!(
            self,
            lparsm_c(
                list.as_ptr(),
                delims.as_ptr(),
                items.count(),
                items.element_length(),
                &mut n,
                items.as_mut_ptr()
            )
        );
        Ok(items.to_strings(host_count(n))?)
    }

    /// Split `list` into a set of distinct items.
    pub fn lparss(&mut self, list: &str, delims: &str, set: &mut CharCell) -> Result<()> {
        let list = cstr(list)?;
        let delims = cstr(delims)?;
        native!(
            self,
            lparss_c(list.as_ptr(), delims.as_ptr(), set.as_spice_cell())
        );
        Ok(())
    }

    /// Extract the value following `keywd` in `string`, up to the next of `terms`.
    /// Returns the string with keyword and value removed, and the value.
    pub fn kxtrct<S: AsRef<str>>(&mut self, keywd: &str, terms: &[S], string: &str) -> Result<Option<(String, String)>> {
        let keywd = cstr(keywd)?;
        let terms = CharArray::from_strs(terms)?;
        let mut string = FixedString::from_str(string, string.len() + 1)?;
        let mut substr = FixedString::new(string.capacity());
        let mut fnd = SPICEFALSE;
        native!(
            self,
            kxtrct_c(
                keywd.as_ptr(),
                terms.element_length(),
                terms.as_ptr(),
                terms.count(),
                string.lenout(),
                substr.lenout(),
                string.as_mut_ptr(),
                &mut fnd,
                substr.as_mut_ptr()
            )
        );
        if !to_bool(fnd) {
            return Ok(None);
        }
        Ok(Some((string.decode()?, substr.decode()?)))
    }

    /// The `nth` word (1-based) and its position.
    pub fn nthwd(&mut self, string: &str, nth: SpiceInt) -> Result<Option<(String, usize)>> {
        let mut word = FixedString::new(string.len() + 1);
        let string = cstr(string)?;
        let mut loc = 0;
        native!(
            self,
            nthwd_c(string.as_ptr(), nth, word.lenout(), word.as_mut_ptr(), &mut loc)
        );
        match position(loc) {
            Some(loc) => Ok(Some((word.decode()?, loc))),
            None => Ok(None),
        }
    }

    /// Split off the first word: `(next, rest)`.
    pub fn nextwd(&mut self, string: &str) -> Result<(String, String)> {
        let mut next = FixedString::new(string.len() + 1);
        let mut rest = FixedString::new(string.len() + 1);
        let string = cstr(string)?;
        native!(
            self,
            nextwd_c(
                string.as_ptr(),
                next.lenout(),
                rest.lenout(),
                next.as_mut_ptr(),
                rest.as_mut_ptr()
            )
        );
        Ok((next.decode()?, rest.decode()?))
    }

    /// Longest decimal number starting at `first`: `(last, nchar)`.
    pub fn lx4dec(&mut self, string: &str, first: SpiceInt) -> Result<(SpiceInt, SpiceInt)> {
        let string = cstr(string)?;
        let (mut last, mut nchar) = (0, 0);
        native!(self, lx4dec_c(string.as_ptr(), first, &mut last, &mut nchar));
        Ok((last, nchar))
    }

    pub fn lx4num(&mut self, string: &str, first: SpiceInt) -> Result<(SpiceInt, SpiceInt)> {
        let string = cstr(string)?;
        let (mut last, mut nchar) = (0, 0);
        native!(self, lx4num_c(string.as_ptr(), first, &mut last, &mut nchar));
        Ok((last, nchar))
    }

    pub fn lx4sgn(&mut self, string: &str, first: SpiceInt) -> Result<(SpiceInt, SpiceInt)> {
        let string = cstr(string)?;
        let (mut last, mut nchar) = (0, 0);
        native!(self, lx4sgn_c(string.as_ptr(), first, &mut last, &mut nchar));
        Ok((last, nchar))
    }

    pub fn lx4uns(&mut self, string: &str, first: SpiceInt) -> Result<(SpiceInt, SpiceInt)> {
        let string = cstr(string)?;
        let (mut last, mut nchar) = (0, 0);
        native!(self, lx4uns_c(string.as_ptr(), first, &mut last, &mut nchar));
        Ok((last, nchar))
    }

    /// Quoted string starting at `first`, delimited by `qchar`.
    pub fn lxqstr(&mut self, string: &str, qchar: char, first: SpiceInt) -> Result<(SpiceInt, SpiceInt)> {
        let string = cstr(string)?;
        let qchar = fstr::to_char(qchar)?;
        let (mut last, mut nchar) = (0, 0);
        native!(
            self,
            lxqstr_c(string.as_ptr(), qchar, first, &mut last, &mut nchar)
        );
        Ok((last, nchar))
    }

    pub fn prsdp(&mut self, string: &str) -> Result<f64> {
        let string = cstr(string)?;
        let mut dpval = 0.0;
        native!(self, prsdp_c(string.as_ptr(), &mut dpval));
        Ok(dpval)
    }

    pub fn prsint(&mut self, string: &str) -> Result<SpiceInt> {
        let string = cstr(string)?;
        let mut intval = 0;
        native!(self, prsint_c(string.as_ptr(), &mut intval));
        Ok(intval)
    }

    /// Format `x` according to a picture such as `"xxx.yyy"`.
    pub fn dpfmt(&mut self, x: f64, pictur: &str) -> Result<String> {
        let mut string = FixedString::new(pictur.len() + 1);
        let pictur = cstr(pictur)?;
        native!(
            self,
            dpfmt_c(x, pictur.as_ptr(), string.lenout(), string.as_mut_ptr())
        );
        Ok(string.decode()?)
    }

    /// Format `x` with `prcisn` significant digits, in `'E'` or `'F'` format.
    pub fn dpstrf(&mut self, x: f64, prcisn: SpiceInt, format: char) -> Result<String> {
        let format = fstr::to_char(format)?;
        let mut string = FixedString::new(DEFAULT_LEN);
        native!(
            self,
            dpstrf_c(x, prcisn, format, string.lenout(), string.as_mut_ptr())
        );
        Ok(string.decode()?)
    }

    /// Hexadecimal representation of a double, e.g. `"^1"` for 1.0.
    pub fn dp2hx(&mut self, number: f64) -> Result<String> {
        let mut hxstr = FixedString::new(WORDLEN);
        let mut length = 0;
        native!(
            self,
            dp2hx_c(number, hxstr.lenout(), hxstr.as_mut_ptr(), &mut length)
        );
        Ok(hxstr.decode()?)
    }

    /// Parse a hexadecimal double. The inner error is the parser's message.
    pub fn hx2dp(&mut self, string: &str) -> Result<std::result::Result<f64, String>> {
        let string = cstr(string)?;
        let mut number = 0.0;
        let mut error = SPICEFALSE;
        let mut errmsg = FixedString::new(MSGLEN);
        native!(
            self,
            hx2dp_c(
                string.as_ptr(),
                errmsg.lenout(),
                &mut number,
                &mut error,
                errmsg.as_mut_ptr()
            )
        );
        if to_bool(error) {
            return Ok(Err(errmsg.decode()?));
        }
        Ok(Ok(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions() {
        assert_eq!(position(-1), None);
        assert_eq!(position(0), Some(0));
        assert_eq!(position(17), Some(17));
        assert_eq!(replaced_len("abc #", 4), 9);
    }
}
