//! Kernel loading and the kernel database.

use super::{cstr, found};
use crate::consts::strings::{FILELEN, TYPLEN};
use crate::{AsSpiceCell, IntCell, Result, SpiceContext, SpiceInt};
use cspice_marshal::{FixedString, SPICEFALSE, fstr, to_bool};
use log::debug;

/// One loaded kernel, as reported by `kdata_c`/`kinfo_c`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KernelData {
    pub file: String,
    /// `"SPK"`, `"CK"`, `"PCK"`, `"DSK"`, `"EK"`, `"TEXT"` or `"META"`.
    pub filtyp: String,
    /// The meta-kernel that loaded this file, or empty if loaded directly.
    pub srcfil: String,
    /// File handle for binary kernels; 0 for text kernels.
    pub handle: SpiceInt,
}

impl SpiceContext<'_> {
    /// Load a kernel, or every kernel listed in a meta-kernel.
    pub fn furnsh(&mut self, file: &str) -> Result<()> {
        debug!("furnsh {file}");
        let file = cstr(file)?;
        native!(self, furnsh_c(file.as_ptr()));
        Ok(())
    }

    pub fn unload(&mut self, file: &str) -> Result<()> {
        let file = cstr(file)?;
        native!(self, unload_c(file.as_ptr()));
        Ok(())
    }

    /// Unload everything and clear the kernel pool.
    pub fn kclear(&mut self) -> Result<()> {
        native!(self, kclear_c());
        Ok(())
    }

    /// Number of loaded kernels of the given kind (`"ALL"`, `"SPK"`, `"TEXT"`, ...; kinds
    /// may be combined with spaces).
    pub fn ktotal(&mut self, kind: &str) -> Result<SpiceInt> {
        let kind = cstr(kind)?;
        let mut count = 0;
        native!(self, ktotal_c(kind.as_ptr(), &mut count));
        Ok(count)
    }

    /// The `which`th (0-based) loaded kernel of the given kind.
    pub fn kdata(&mut self, which: SpiceInt, kind: &str) -> Result<Option<KernelData>> {
        let kind = cstr(kind)?;
        let mut file = FixedString::new(FILELEN);
        let mut filtyp = FixedString::new(TYPLEN);
        let mut srcfil = FixedString::new(FILELEN);
        let mut handle = 0;
        let mut fnd = SPICEFALSE;
        native!(
            self,
            kdata_c(
                which,
                kind.as_ptr(),
                file.lenout(),
                filtyp.lenout(),
                srcfil.lenout(),
                file.as_mut_ptr(),
                filtyp.as_mut_ptr(),
                srcfil.as_mut_ptr(),
                &mut handle,
                &mut fnd
            )
        );
        if !to_bool(fnd) {
            return Ok(None);
        }
        Ok(Some(KernelData {
            file: file.decode()?,
            filtyp: filtyp.decode()?,
            srcfil: srcfil.decode()?,
            handle,
        }))
    }

    /// Information about a loaded kernel, or `None` if `file` is not loaded.
    pub fn kinfo(&mut self, file: &str) -> Result<Option<KernelData>> {
        let name = cstr(file)?;
        let mut filtyp = FixedString::new(TYPLEN);
        let mut srcfil = FixedString::new(FILELEN);
        let mut handle = 0;
        let mut fnd = SPICEFALSE;
        native!(
            self,
            kinfo_c(
                name.as_ptr(),
                filtyp.lenout(),
                srcfil.lenout(),
                filtyp.as_mut_ptr(),
                srcfil.as_mut_ptr(),
                &mut handle,
                &mut fnd
            )
        );
        let data = KernelData {
            file: file.to_owned(),
            filtyp: filtyp.decode()?,
            srcfil: srcfil.decode()?,
            handle,
        };
        Ok(found(fnd, data))
    }

    /// Add the IDs of frames of class `frmcls` defined in the kernel pool to `idset`.
    pub fn kplfrm(&mut self, frmcls: SpiceInt, idset: &mut IntCell) -> Result<()> {
        native!(self, kplfrm_c(frmcls, idset.as_spice_cell()));
        Ok(())
    }

    /// Architecture (`"DAF"`, `"DAS"`, `"KPL"`, ...) and type (`"SPK"`, `"LSK"`, ...) of
    /// a file.
    pub fn getfat(&mut self, file: &str) -> Result<(String, String)> {
        let file = cstr(file)?;
        let mut arch = FixedString::new(TYPLEN);
        let mut type_ = FixedString::new(TYPLEN);
        native!(
            self,
            getfat_c(
                file.as_ptr(),
                arch.lenout(),
                type_.lenout(),
                arch.as_mut_ptr(),
                type_.as_mut_ptr()
            )
        );
        Ok((arch.decode()?, type_.decode()?))
    }

    pub fn exists(&mut self, name: &str) -> Result<bool> {
        let name = cstr(name)?;
        Ok(to_bool(native!(self, exists_c(name.as_ptr()))))
    }

    /// Toolkit version string. `item` is `"TOOLKIT"` or the name of a toolkit component.
    pub fn tkvrsn(&mut self, item: &str) -> Result<String> {
        let item = cstr(item)?;
        let ptr = native!(self, tkvrsn_c(item.as_ptr()));
        // SAFETY: tkvrsn_c returns a pointer to a static string
        Ok(unsafe { fstr::decode_ptr(ptr) }?)
    }
}
