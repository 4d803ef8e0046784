//! The kernel pool: variables loaded from text kernels or inserted at run time.

use super::{cstr, found};
use crate::consts::strings::{DEFAULT_LEN, WORDLEN};
use crate::{CharArray, Result, SpiceContext, SpiceInt};
use cspice_marshal::{FixedString, SPICEFALSE, SpiceChar, host_count, spice_int, to_bool};

/// Type of a kernel pool variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolType {
    Char,
    Numeric,
}

impl PoolType {
    fn from_char(c: SpiceChar) -> Option<Self> {
        match c as u8 {
            b'C' => Some(PoolType::Char),
            b'N' => Some(PoolType::Numeric),
            _ => None,
        }
    }
}

/// Field of view of an instrument, as returned by `getfov_c`.
#[derive(Clone, Debug, PartialEq)]
pub struct Fov {
    /// `"POLYGON"`, `"RECTANGLE"`, `"CIRCLE"` or `"ELLIPSE"`.
    pub shape: String,
    pub frame: String,
    pub bsight: [f64; 3],
    pub bounds: Vec<[f64; 3]>,
}

impl SpiceContext<'_> {
    /// Load a text kernel into the pool without registering it with the kernel database.
    pub fn ldpool(&mut self, filename: &str) -> Result<()> {
        let filename = cstr(filename)?;
        native!(self, ldpool_c(filename.as_ptr()));
        Ok(())
    }

    pub fn clpool(&mut self) -> Result<()> {
        native!(self, clpool_c());
        Ok(())
    }

    /// Load variables from lines in text kernel format.
    pub fn lmpool<S: AsRef<str>>(&mut self, cvals: &[S]) -> Result<()> {
        let cvals = CharArray::from_strs(cvals)?;
        native!(
            self,
            lmpool_c(cvals.as_ptr(), cvals.element_length(), cvals.count())
        );
        Ok(())
    }

    /// Up to `room` numeric values of `name`, starting at index `start` (0-based).
    pub fn gdpool(&mut self, name: &str, start: SpiceInt, room: usize) -> Result<Option<Vec<f64>>> {
        let name = cstr(name)?;
        let mut n = 0;
        let mut values = vec![0.0; room];
        let mut fnd = SPICEFALSE;
        native!(
            self,
            gdpool_c(
                name.as_ptr(),
                start,
                spice_int(room),
                &mut n,
                values.as_mut_ptr(),
                &mut fnd
            )
        );
        values.truncate(host_count(n));
        Ok(found(fnd, values))
    }

    pub fn gipool(&mut self, name: &str, start: SpiceInt, room: usize) -> Result<Option<Vec<SpiceInt>>> {
        let name = cstr(name)?;
        let mut n = 0;
        let mut ivals = vec![0; room];
        let mut fnd = SPICEFALSE;
        native!(
            self,
            gipool_c(
                name.as_ptr(),
                start,
                spice_int(room),
                &mut n,
                ivals.as_mut_ptr(),
                &mut fnd
            )
        );
        ivals.truncate(host_count(n));
        Ok(found(fnd, ivals))
    }

    pub fn gcpool(&mut self, name: &str, start: SpiceInt, room: usize) -> Result<Option<Vec<String>>> {
        let name = cstr(name)?;
        let mut n = 0;
        let mut cvals = CharArray::new(room, DEFAULT_LEN);
        let mut fnd = SPICEFALSE;
        native!(
            self,
            gcpool_c(
                name.as_ptr(),
                start,
                spice_int(room),
                cvals.element_length(),
                &mut n,
                cvals.as_mut_ptr(),
                &mut fnd
            )
        );
        if !to_bool(fnd) {
            return Ok(None);
        }
        Ok(Some(cvals.to_strings(host_count(n))?))
    }

    /// Names of pool variables matching a wildcard template (`*` and `%`).
    pub fn gnpool(&mut self, name: &str, start: SpiceInt, room: usize) -> Result<Option<Vec<String>>> {
        let name = cstr(name)?;
        let mut n = 0;
        let mut kvars = CharArray::new(room, WORDLEN);
        let mut fnd = SPICEFALSE;
        native!(
            self,
            gnpool_c(
                name.as_ptr(),
                start,
                spice_int(room),
                kvars.element_length(),
                &mut n,
                kvars.as_mut_ptr(),
                &mut fnd
            )
        );
        if !to_bool(fnd) {
            return Ok(None);
        }
        Ok(Some(kvars.to_strings(host_count(n))?))
    }

    /// Number of values and type of a pool variable.
    pub fn dtpool(&mut self, name: &str) -> Result<Option<(SpiceInt, PoolType)>> {
        let name = cstr(name)?;
        let mut fnd = SPICEFALSE;
        let mut n = 0;
        let mut type_: SpiceChar = 0;
        native!(self, dtpool_c(name.as_ptr(), &mut fnd, &mut n, &mut type_));
        Ok(found(fnd, ()).and_then(|()| PoolType::from_char(type_).map(|t| (n, t))))
    }

    pub fn expool(&mut self, name: &str) -> Result<bool> {
        let name = cstr(name)?;
        let mut fnd = SPICEFALSE;
        native!(self, expool_c(name.as_ptr(), &mut fnd));
        Ok(to_bool(fnd))
    }

    /// Value of a kernel pool size parameter (`"MAXVAR"`, `"MAXVAL"`, ...).
    pub fn szpool(&mut self, name: &str) -> Result<Option<SpiceInt>> {
        let name = cstr(name)?;
        let mut n = 0;
        let mut fnd = SPICEFALSE;
        native!(self, szpool_c(name.as_ptr(), &mut n, &mut fnd));
        Ok(found(fnd, n))
    }

    pub fn pdpool(&mut self, name: &str, dvals: &[f64]) -> Result<()> {
        let name = cstr(name)?;
        native!(
            self,
            pdpool_c(name.as_ptr(), spice_int(dvals.len()), dvals.as_ptr())
        );
        Ok(())
    }

    pub fn pipool(&mut self, name: &str, ivals: &[SpiceInt]) -> Result<()> {
        let name = cstr(name)?;
        native!(
            self,
            pipool_c(name.as_ptr(), spice_int(ivals.len()), ivals.as_ptr())
        );
        Ok(())
    }

    pub fn pcpool<S: AsRef<str>>(&mut self, name: &str, cvals: &[S]) -> Result<()> {
        let name = cstr(name)?;
        let cvals = CharArray::from_strs(cvals)?;
        native!(
            self,
            pcpool_c(
                name.as_ptr(),
                cvals.count(),
                cvals.element_length(),
                cvals.as_ptr()
            )
        );
        Ok(())
    }

    /// Delete a variable from the pool.
    pub fn dvpool(&mut self, name: &str) -> Result<()> {
        let name = cstr(name)?;
        native!(self, dvpool_c(name.as_ptr()));
        Ok(())
    }

    /// The `nth` (0-based) string of `item`, joining values that end with the
    /// continuation marker `contin`. Returns the string and its length.
    pub fn stpool(&mut self, item: &str, nth: SpiceInt, contin: &str) -> Result<Option<(String, SpiceInt)>> {
        let item = cstr(item)?;
        let contin = cstr(contin)?;
        let mut nthstr = FixedString::new(crate::consts::strings::FILELEN);
        let mut size = 0;
        let mut fnd = SPICEFALSE;
        native!(
            self,
            stpool_c(
                item.as_ptr(),
                nth,
                contin.as_ptr(),
                nthstr.lenout(),
                nthstr.as_mut_ptr(),
                &mut size,
                &mut fnd
            )
        );
        if !to_bool(fnd) {
            return Ok(None);
        }
        Ok(Some((nthstr.decode()?, size)))
    }

    /// Register `agent` as watching the given variables.
    pub fn swpool<S: AsRef<str>>(&mut self, agent: &str, names: &[S]) -> Result<()> {
        let agent = cstr(agent)?;
        let names = CharArray::from_strs(names)?;
        native!(
            self,
            swpool_c(
                agent.as_ptr(),
                names.count(),
                names.element_length(),
                names.as_ptr()
            )
        );
        Ok(())
    }

    /// Whether any variable watched by `agent` has changed since the last check.
    pub fn cvpool(&mut self, agent: &str) -> Result<bool> {
        let agent = cstr(agent)?;
        let mut update = SPICEFALSE;
        native!(self, cvpool_c(agent.as_ptr(), &mut update));
        Ok(to_bool(update))
    }

    /// Field of view of instrument `instid`, with room for `room` boundary vectors.
    pub fn getfov(&mut self, instid: SpiceInt, room: usize) -> Result<Fov> {
        let mut shape = FixedString::new(WORDLEN);
        let mut frame = FixedString::new(crate::consts::names::FRNMLN);
        let mut bsight = [0.0; 3];
        let mut n = 0;
        let mut bounds = vec![[0.0; 3]; room];
        native!(
            self,
            getfov_c(
                instid,
                spice_int(room),
                shape.lenout(),
                frame.lenout(),
                shape.as_mut_ptr(),
                frame.as_mut_ptr(),
                bsight.as_mut_ptr(),
                &mut n,
                bounds.as_mut_ptr()
            )
        );
        bounds.truncate(host_count(n));
        Ok(Fov {
            shape: shape.decode()?,
            frame: frame.decode()?,
            bsight,
            bounds,
        })
    }

    /// Like [`getfov`](Self::getfov), naming the instrument.
    pub fn getfvn(&mut self, inst: &str, room: usize) -> Result<Fov> {
        let inst = cstr(inst)?;
        let mut shape = FixedString::new(WORDLEN);
        let mut frame = FixedString::new(crate::consts::names::FRNMLN);
        let mut bsight = [0.0; 3];
        let mut n = 0;
        let mut bounds = vec![[0.0; 3]; room];
        native!(
            self,
            getfvn_c(
                inst.as_ptr(),
                spice_int(room),
                shape.lenout(),
                frame.lenout(),
                shape.as_mut_ptr(),
                frame.as_mut_ptr(),
                bsight.as_mut_ptr(),
                &mut n,
                bounds.as_mut_ptr()
            )
        );
        bounds.truncate(host_count(n));
        Ok(Fov {
            shape: shape.decode()?,
            frame: frame.decode()?,
            bsight,
            bounds,
        })
    }
}
