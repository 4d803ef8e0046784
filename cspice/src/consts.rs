//! Buffer sizes for native output.
//!
//! CSPICE writes output strings into caller-allocated buffers and trusts the length it
//! is given. Every size used by the bindings is named here. Lengths include the NUL
//! terminator.

/// Error subsystem message lengths.
pub mod errhnd {
    /// Short error message, e.g. `SPICE(NOSUCHFILE)`.
    pub const SMSGLN: usize = 26;
    /// Short message explanation.
    pub const XMSGLN: usize = 81;
    /// Long error message.
    pub const LMSGLN: usize = 1841;
    /// Depth of the traceback stack kept by the error subsystem.
    pub const MAXMOD: usize = 100;
    /// Module name as returned by `trcnam_c`.
    pub const NAMLEN: usize = 33;
    /// Separator `qcktrc_c` puts between module names.
    pub const TRCSEP: &str = " --> ";
    /// Traceback from `qcktrc_c` with every level of the stack in use.
    pub const TRCLEN: usize = MAXMOD * (NAMLEN - 1) + (MAXMOD - 1) * TRCSEP.len() + 1;
    /// `erract_c`/`errprt_c`/`errdev_c` values.
    pub const ACTLEN: usize = 256;
}

/// Names of bodies, frames and surfaces.
pub mod names {
    pub const BDNMLN: usize = 37;
    pub const FRNMLN: usize = 33;
    pub const SFNMLN: usize = 100;
}

/// Defaults for general string outputs with no documented upper bound.
pub mod strings {
    pub const DEFAULT_LEN: usize = 256;
    /// File names returned by kernel and file-handle queries.
    pub const FILELEN: usize = 1024;
    /// Kernel and file type names.
    pub const TYPLEN: usize = 32;
    /// Formatted time strings from `et2utc_c`, `etcal_c`, `scdecd_c` and friends.
    pub const TIMELEN: usize = 64;
    /// Query and parser error messages.
    pub const MSGLEN: usize = 1024;
    /// Word extraction buffers.
    pub const WORDLEN: usize = 256;
}

/// Output length for `timout_c`, which depends on the picture and truncates silently.
///
/// Literal text is copied as is. No picture token expands to more than twice its own
/// width: the widest cases are `MONTH` (`SEPTEMBER`), `WEEKDAY` (`WEDNESDAY`) and
/// `SP2000`/`SP1950` (signed whole seconds, at most 12 characters for epochs within
/// 3000 years of J2000). A single-token picture can still need more than twice its length, so
/// the size never drops below [`strings::TIMELEN`].
pub fn timout_len(pictur: &str) -> usize {
    (pictur.len() * 2).max(strings::TIMELEN) + 1
}

/// DAF array summaries.
pub mod daf {
    /// Doubles in an SPK segment descriptor (ND = 2, NI = 6 packed).
    pub const SPK_DSCSIZ: usize = 5;
    pub const SPK_ND: usize = 2;
    pub const SPK_NI: usize = 6;
    pub const CK_ND: usize = 2;
    pub const CK_NI: usize = 6;
    pub const PCK_ND: usize = 2;
    pub const PCK_NI: usize = 5;
    /// Largest summary in doubles, for any ND/NI combination.
    pub const MAXSUM: usize = 125;
    /// Internal file name and segment name lengths.
    pub const IFNLEN: usize = 61;
    pub const NAMLEN: usize = 1001;
    /// DAF/DAS comment line length.
    pub const COMLEN: usize = 1001;
}

/// DAS file records.
pub mod das {
    pub const IDWLEN: usize = 9;
    pub const IFNLEN: usize = 61;
}

/// EK limits.
pub mod ek {
    pub use cspice_marshal::records::{EK_CSTRLN as CNAMSZ, EK_MXCLSG as MXCLSG, EK_TSTRLN as TNAMSZ};
    /// Maximum number of items in a query's SELECT clause.
    pub const MAXQSEL: usize = 50;
    /// Table-qualified column name as returned by `ekpsel_c`.
    pub const QCOLSZ: usize = 65;
    /// Longest character value returned by the readers.
    pub const CVALSZ: usize = 1025;
}

/// DSK sizes.
pub mod dsk {
    pub use cspice_marshal::records::NSYPAR;
    /// Double-precision and integer components of `dskxsi_c`'s source info.
    pub const DCSIZE: usize = 1;
    pub const ICSIZE: usize = 1;
    /// Size of the type 2 spatial index double component.
    pub const SPAISZ: usize = 10;
}

/// Two-body and TLE element counts.
pub mod elements {
    pub const CONICS: usize = 8;
    pub const OSCXSZ: usize = 20;
    pub const TLE_ELEMS: usize = 10;
    pub const GEOPHS: usize = 8;
    pub const EQNCPV: usize = 9;
    pub const SPKW10_CONSTS: usize = 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_lengths() {
        assert_eq!(timout_len(""), 65);
        assert_eq!(timout_len("YYYY-MM-DD"), 65);
        let long = "YYYY MON DD HR:MN:SC.###### (TDB) ::TDB ::RND weekday";
        assert_eq!(timout_len(&long.repeat(2)), long.len() * 4 + 1);
    }

    #[test]
    fn full_traceback_fits() {
        let name = "M".repeat(errhnd::NAMLEN - 1);
        let trace = vec![name.as_str(); errhnd::MAXMOD].join(errhnd::TRCSEP);
        assert_eq!(trace.len() + 1, errhnd::TRCLEN);
        assert_eq!(errhnd::TRCLEN, 3696);
    }

    #[test]
    fn widest_tokens_fit() {
        for (token, widest) in [
            ("MONTH", "SEPTEMBER"),
            ("WEEKDAY", "WEDNESDAY"),
            ("SP2000", "-99999999999"),
            ("ERA", " B.C."),
        ] {
            assert!(timout_len(token) > widest.len());
            let picture = token.repeat(40);
            assert!(timout_len(&picture) > widest.len() * 40);
        }
    }
}
