//! The native error subsystem.
//!
//! The context already drains and resets the error state after every call (see the
//! [crate docs](crate#error-handling)), so these are mostly useful for signalling errors
//! from Rust code in the same form CSPICE does, and for inspecting the traceback.
//! Changing the error action or output device with `erract`/`errprt`/`errdev` will
//! break the wrapper's error handling.

use super::cstr;
use crate::consts::errhnd::{ACTLEN, LMSGLN, NAMLEN, TRCLEN};
use crate::consts::strings::FILELEN;
use crate::{Error, Result, SpiceContext, SpiceInt};
use cspice_marshal::{FixedString, to_bool};

impl SpiceContext<'_> {
    /// Whether an error is currently signalled. Only observable between a
    /// [`sigerr`](Self::sigerr) and the end of that call, so normally false.
    pub fn failed(&mut self) -> Result<bool> {
        let f = self.table().failed_c.ok_or(Error::Unbound("failed_c"))?;
        // SAFETY: no arguments
        Ok(to_bool(unsafe { f() }))
    }

    pub fn reset(&mut self) -> Result<()> {
        native!(self, reset_c());
        Ok(())
    }

    /// `"SHORT"`, `"EXPLAIN"` or `"LONG"` message of the current error.
    pub fn getmsg(&mut self, option: &str) -> Result<String> {
        let option = cstr(option)?;
        let mut msg = FixedString::new(LMSGLN);
        native!(self, getmsg_c(option.as_ptr(), msg.lenout(), msg.as_mut_ptr()));
        Ok(msg.decode()?)
    }

    /// The traceback as a single string.
    pub fn qcktrc(&mut self) -> Result<String> {
        let mut trace = FixedString::new(TRCLEN);
        native!(self, qcktrc_c(trace.lenout(), trace.as_mut_ptr()));
        Ok(trace.decode()?)
    }

    /// Get (`op = "GET"`) or set (`"SET"`) the error response action.
    pub fn erract(&mut self, op: &str, action: &str) -> Result<String> {
        let op = cstr(op)?;
        let mut action = FixedString::from_str(action, ACTLEN)?;
        native!(
            self,
            erract_c(op.as_ptr(), action.lenout(), action.as_mut_ptr())
        );
        Ok(action.decode()?)
    }

    /// Get or set the list of message kinds written on error.
    pub fn errprt(&mut self, op: &str, list: &str) -> Result<String> {
        let op = cstr(op)?;
        let mut list = FixedString::from_str(list, ACTLEN)?;
        native!(self, errprt_c(op.as_ptr(), list.lenout(), list.as_mut_ptr()));
        Ok(list.decode()?)
    }

    /// Get or set the error output device.
    pub fn errdev(&mut self, op: &str, device: &str) -> Result<String> {
        let op = cstr(op)?;
        let mut device = FixedString::from_str(device, FILELEN)?;
        native!(
            self,
            errdev_c(op.as_ptr(), device.lenout(), device.as_mut_ptr())
        );
        Ok(device.decode()?)
    }

    /// Set the long message for the next [`sigerr`](Self::sigerr).
    pub fn setmsg(&mut self, message: &str) -> Result<()> {
        let message = cstr(message)?;
        native!(self, setmsg_c(message.as_ptr()));
        Ok(())
    }

    /// Signal an error with the given short message, e.g. `"SPICE(BADINPUT)"`.
    ///
    /// The signalled error is drained like any other, so this returns it as
    /// `Err(Error::Spice(..))`.
    pub fn sigerr(&mut self, message: &str) -> Result<()> {
        let message = cstr(message)?;
        native!(self, sigerr_c(message.as_ptr()));
        Ok(())
    }

    /// Replace `marker` in the long message with `string`.
    pub fn errch(&mut self, marker: &str, string: &str) -> Result<()> {
        let marker = cstr(marker)?;
        let string = cstr(string)?;
        native!(self, errch_c(marker.as_ptr(), string.as_ptr()));
        Ok(())
    }

    pub fn errdp(&mut self, marker: &str, number: f64) -> Result<()> {
        let marker = cstr(marker)?;
        native!(self, errdp_c(marker.as_ptr(), number));
        Ok(())
    }

    pub fn errint(&mut self, marker: &str, number: SpiceInt) -> Result<()> {
        let marker = cstr(marker)?;
        native!(self, errint_c(marker.as_ptr(), number));
        Ok(())
    }

    /// Push a module name onto the traceback.
    pub fn chkin(&mut self, module: &str) -> Result<()> {
        let module = cstr(module)?;
        native!(self, chkin_c(module.as_ptr()));
        Ok(())
    }

    pub fn chkout(&mut self, module: &str) -> Result<()> {
        let module = cstr(module)?;
        native!(self, chkout_c(module.as_ptr()));
        Ok(())
    }

    /// Current traceback depth.
    pub fn trcdep(&mut self) -> Result<SpiceInt> {
        let mut depth = 0;
        native!(self, trcdep_c(&mut depth));
        Ok(depth)
    }

    /// Module at traceback level `index` (0-based).
    pub fn trcnam(&mut self, index: SpiceInt) -> Result<String> {
        let mut name = FixedString::new(NAMLEN);
        native!(self, trcnam_c(index, name.lenout(), name.as_mut_ptr()));
        Ok(name.decode()?)
    }

    /// Every module on the traceback, outermost first.
    pub fn traceback(&mut self) -> Result<Vec<String>> {
        let depth = self.trcdep()?;
        (0..depth).map(|i| self.trcnam(i)).collect()
    }

    /// Stop tracing.
    pub fn trcoff(&mut self) -> Result<()> {
        native!(self, trcoff_c());
        Ok(())
    }
}
