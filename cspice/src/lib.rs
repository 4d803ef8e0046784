//! Bindings to the NAIF CSPICE toolkit.
//!
//! CSPICE is loaded at run time as a shared library. Every routine is exposed as a
//! method on [`SpiceContext`], named after the C entry point without its `_c` suffix.
//!
//! ## `SpiceContext`
//!
//! CSPICE keeps all of its state (the kernel pool, open files, the error flag) in
//! process-wide globals and is not re-entrant. A [`SpiceContext`] is a guard on the one
//! global lock around the library: while you hold one, no other thread can call into
//! CSPICE. Get one with [`context()`], which loads the library on first use.
//!
//! ```no_run
//! let mut spice = cspice::context()?;
//! spice.furnsh("naif0012.tls")?;
//! let et = spice.str2et("2000 JAN 01 12:00:00 TDB")?;
//! assert_eq!(et, 0.0);
//! # Ok::<(), cspice::Error>(())
//! ```
//!
//! Holding a context across a long computation blocks every other thread that uses
//! CSPICE. Calling [`context()`] again on a thread that already holds one deadlocks; pass
//! the `&mut SpiceContext` down instead.
//!
//! ## Error handling
//!
//! We run CSPICE in `RETURN` mode with error output disabled. After every native call,
//! the binding checks `failed_c`; if an error was signalled, it reads the short,
//! explanatory and long messages and the traceback, calls `reset_c`, and returns
//! [`Error::Spice`]. The context remains usable afterwards.
//!
//! ```no_run
//! use cspice::{Error, SpiceErrorKind};
//! let mut spice = cspice::context()?;
//! match spice.str2et("not a time") {
//!     Err(e) => assert_eq!(e.spice_kind(), Some(SpiceErrorKind::INVALIDTIMESTRING)),
//!     Ok(_) => unreachable!(),
//! }
//! // The error state has been reset
//! assert!(spice.str2et("2000-01-01").is_ok());
//! # Ok::<(), Error>(())
//! ```
//!
//! You should not use the error API (`erract`, `reset`, ...) to change how errors are
//! handled, as that will conflict with this wrapper.
//!
//! ## Not found
//!
//! Routines that report lookups with a `found` flag return `Ok(None)` when nothing was
//! found. This is not an error.
//!
//! ## Arrays
//!
//! Vectors and matrices whose size is part of the C prototype are Rust arrays
//! (`[f64; 3]`, `[[f64; 3]; 3]`), stored row-major as in C. Use
//! [`cspice_marshal::array::to_fixed`] to convert from slices with a checked length.
//! Routines over matrices of arbitrary shape take a [`Matrix`].
//!
//! ## Strings
//!
//! Input strings are `&str` and must not contain NUL bytes. Output strings are returned
//! as `String`, with CSPICE's trailing blank padding removed. Output buffers are sized by
//! the constants in [`consts`].
//!
//! ## Cells
//!
//! Sets and windows are [`Cell`]s. The element type is part of the Rust type, so a
//! double-precision window cannot be passed to an integer set routine. [`AnyCell`] is
//! available when the kind is only known at run time.

#![allow(clippy::too_many_arguments)]

use cspice_marshal::{FixedString, to_bool};
use log::debug;
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};

pub use cspice_marshal::{
    AnyCell, AsSpiceCell, Cell, CellDataType, CharArray, CharCell, DlaDescr, DoubleCell, DskDescr,
    EkAttDsc, EkDataType, EkSegSum, Ellipse, IntCell, Matrix, Plane, SpiceBoolean, SpiceDouble,
    SpiceInt,
};

/// Call a native routine through the context's table and check the error state.
///
/// Expands to the routine's return value, or returns early with `Error::Unbound` or the
/// drained native error.
macro_rules! native {
    ($ctx:expr, $sym:ident($($arg:expr),* $(,)?)) => {{
        let f = $ctx
            .table()
            .$sym
            .ok_or($crate::Error::Unbound(stringify!($sym)))?;
        // SAFETY: every pointer argument addresses a live buffer at least as large as the
        // routine's prototype requires, and the context holds the global lock
        let ret = unsafe { f($($arg),*) };
        $ctx.handle_errors()?;
        ret
    }};
}

mod api;
pub mod consts;
mod errors;
mod loader;
mod table;

pub use api::*;
pub use errors::*;
pub use loader::*;
pub use table::CallTable;

static NATIVE: Mutex<Option<Native>> = parking_lot::const_mutex(None);

/// Exclusive access to the CSPICE library. See the [crate docs](crate).
pub struct SpiceContext<'a> {
    native: MappedMutexGuard<'a, Native>,
}

/// Install `native` as the library all contexts call into, replacing any previous one.
///
/// Configures the native error subsystem to return errors instead of aborting or
/// printing. Blocks while another thread holds a context. If configuring fails, the
/// previous library stays installed.
pub fn install(native: Native) -> Result<()> {
    let mut guard = NATIVE.lock();
    configure_into(&mut guard, native)
}

pub fn is_installed() -> bool {
    NATIVE.lock().is_some()
}

/// Lock the library, loading it with [`LoadOptions::default`] if nothing was installed.
pub fn context() -> Result<SpiceContext<'static>> {
    let guard = NATIVE.lock();
    load_if_missing(guard)
}

/// Like [`context`], but returns `Ok(None)` instead of blocking if the library is in use.
pub fn try_context() -> Result<Option<SpiceContext<'static>>> {
    match NATIVE.try_lock() {
        Some(guard) => load_if_missing(guard).map(Some),
        None => Ok(None),
    }
}

fn load_if_missing(mut guard: MutexGuard<'static, Option<Native>>) -> Result<SpiceContext<'static>> {
    if guard.is_none() {
        let native = Native::load(&LoadOptions::default())?;
        configure_into(&mut guard, native)?;
    }
    map_guard(guard)
}

/// Configure `native`'s error handling, then store it in `slot`. The caller holds the
/// global lock. On failure `slot` is left as it was.
fn configure_into(slot: &mut Option<Native>, native: Native) -> Result<()> {
    let staged = Mutex::new(Some(native));
    map_guard(staged.lock())?.configure_errors()?;
    *slot = staged.into_inner();
    Ok(())
}

fn map_guard(guard: MutexGuard<'_, Option<Native>>) -> Result<SpiceContext<'_>> {
    let native = MutexGuard::try_map(guard, |n| n.as_mut()).map_err(|_| Error::NotInstalled)?;
    Ok(SpiceContext { native })
}

impl SpiceContext<'_> {
    pub fn native(&self) -> &Native {
        &self.native
    }

    pub(crate) fn table(&self) -> &CallTable {
        &self.native.table
    }

    fn configure_errors(&mut self) -> Result<()> {
        // Return errors so we can handle them nicely
        let mut action = FixedString::from_str("RETURN", consts::errhnd::ACTLEN)?;
        native!(self, erract_c(c"SET".as_ptr(), action.lenout(), action.as_mut_ptr()));

        // Don't print errors to stdout
        let mut list = FixedString::from_str("NONE", consts::errhnd::ACTLEN)?;
        native!(self, errprt_c(c"SET".as_ptr(), list.lenout(), list.as_mut_ptr()));

        Ok(())
    }

    /// Drain and reset the native error state.
    ///
    /// Called exactly once after every native call. Talks to the table directly, so that
    /// a failure here can never recurse.
    fn handle_errors(&mut self) -> Result<()> {
        let table = self.table();
        let Some(failed) = table.failed_c else {
            return Ok(());
        };

        // SAFETY: no arguments
        if !to_bool(unsafe { failed() }) {
            return Ok(());
        }

        let mut short = FixedString::new(consts::errhnd::SMSGLN);
        let mut explain = FixedString::new(consts::errhnd::XMSGLN);
        let mut long = FixedString::new(consts::errhnd::LMSGLN);
        let mut trace = FixedString::new(consts::errhnd::TRCLEN);

        // SAFETY: each buffer holds `lenout` bytes
        unsafe {
            if let Some(getmsg) = table.getmsg_c {
                getmsg(c"SHORT".as_ptr(), short.lenout(), short.as_mut_ptr());
                getmsg(c"EXPLAIN".as_ptr(), explain.lenout(), explain.as_mut_ptr());
                getmsg(c"LONG".as_ptr(), long.lenout(), long.as_mut_ptr());
            }
            if let Some(qcktrc) = table.qcktrc_c {
                qcktrc(trace.lenout(), trace.as_mut_ptr());
            }

            // Reset error state, so the user can continue after recoverable errors
            if let Some(reset) = table.reset_c {
                reset();
            }
        }

        let err = SpiceError::new(
            short.decode_lossy(),
            explain.decode_lossy(),
            long.decode_lossy(),
            trace.decode_lossy(),
        );
        debug!("CSPICE signalled {} in {}", err.short, err.traceback);
        Err(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_table() {
        let native = unsafe { Native::from_table(CallTable::default()) };
        let guard = Mutex::new(Some(native));
        let mapped = MutexGuard::map(guard.lock(), |n| n.as_mut().unwrap());
        let mut ctx = SpiceContext { native: mapped };

        assert!(matches!(ctx.pi(), Err(Error::Unbound("pi_c"))));
        assert!(matches!(
            ctx.vadd(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]),
            Err(Error::Unbound("vadd_c"))
        ));
        // Without failed_c there is no error state to check
        assert!(ctx.handle_errors().is_ok());
    }

    unsafe extern "C" fn three() -> SpiceDouble {
        3.0
    }

    unsafe extern "C" fn accept(_op: *const cspice_marshal::SpiceChar, _lenout: SpiceInt, _value: *mut cspice_marshal::SpiceChar) {}

    #[test]
    fn failed_configuration_keeps_previous() {
        let previous = unsafe {
            Native::from_table(CallTable {
                pi_c: Some(three),
                ..Default::default()
            })
        };
        let mut slot = Some(previous);

        let unconfigurable = unsafe { Native::from_table(CallTable::default()) };
        assert!(matches!(
            configure_into(&mut slot, unconfigurable),
            Err(Error::Unbound("erract_c"))
        ));
        assert!(slot.as_ref().is_some_and(|n| n.table().pi_c.is_some()));

        let mut empty = None;
        let unconfigurable = unsafe { Native::from_table(CallTable::default()) };
        assert!(configure_into(&mut empty, unconfigurable).is_err());
        assert!(empty.is_none());

        let table = CallTable {
            erract_c: Some(accept),
            errprt_c: Some(accept),
            ..Default::default()
        };
        configure_into(&mut slot, unsafe { Native::from_table(table) }).unwrap();
        assert!(slot.as_ref().is_some_and(|n| n.table().pi_c.is_none()));
    }
}
