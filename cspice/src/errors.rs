#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Marshal(#[from] cspice_marshal::Error),

    #[error(transparent)]
    Spice(#[from] SpiceError),

    #[error("{0} is not exported by the loaded CSPICE library")]
    Unbound(&'static str),

    #[error("EK column {0} has no fixed entry size in this segment")]
    UnsizedEntry(String),

    #[error("failed to load CSPICE library: {0}")]
    Load(#[from] libloading::Error),

    #[error("no CSPICE library installed (set CSPICE_LIB or call cspice::install)")]
    NotInstalled,
}

impl Error {
    /// The SPICE error class, if this error was signalled by the native library.
    pub fn spice_kind(&self) -> Option<SpiceErrorKind> {
        match self {
            Error::Spice(e) => Some(e.kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// An error signalled by CSPICE, drained from its error subsystem after the call that
/// raised it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{short}: {long}")]
pub struct SpiceError {
    pub kind: SpiceErrorKind,
    /// e.g. `SPICE(INVALIDTIMESTRING)`
    pub short: String,
    pub explain: String,
    pub long: String,
    pub traceback: String,
}

impl SpiceError {
    pub fn new(short: String, explain: String, long: String, traceback: String) -> Self {
        Self {
            kind: SpiceErrorKind::from_short(&short),
            short,
            explain,
            long,
            traceback,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpiceErrorKind {
    BADENDPOINTS,
    BADGEFVERSION,
    BADSUBSCRIPT,
    BLANKMODULENAME,
    BOGUSENTRY,
    CELLTOOSMALL,
    CLUSTERWRITEERROR,
    DATATYPENOTRECOG,
    DATEEXPECTED,
    DEVICENAMETOOLONG,
    EMBEDDEDBLANK,
    EMPTYSTRING,
    FILEALREADYOPEN,
    FILEOPENFAILED,
    FILEREADFAILED,
    FILEWRITEFAILED,
    FRAMEDATANOTFOUND,
    IDCODENOTFOUND,
    INCOMPATIBLEUNITS,
    INVALIDACTION,
    INVALIDARGUMENT,
    INVALIDCHECKOUT,
    INVALIDCLUSTERNUM,
    INVALIDEPOCH,
    INVALIDINDEX,
    INVALIDTIMESTRING,
    INVALIDLISTITEM,
    INVALIDMSGTYPE,
    INVALIDOPERATION,
    INVALIDOPTION,
    INVALIDTIMEFORMAT,
    KERNELVARNOTFOUND,
    NAMETABLEFULL,
    NOFRAMECONNECT,
    NOFREELOGICALUNIT,
    NOINTERVAL,
    NOLOADEDFILES,
    NOSEGMENT,
    NOSUCHFILE,
    NOSUCHSYMBOL,
    NOTDISTINCT,
    NUMBEREXPECTED,
    POINTERTABLEFULL,
    REFNOTREC,
    SETEXCESS,
    SPKINSUFFDATA,
    TOOMANYFILESOPEN,
    TRACEBACKOVERFLOW,
    UNITSNOTREC,
    UNKNOWNFRAME,
    UNMATCHENDPTS,
    VALUETABLEFULL,
    WINDOWEXCESS,
    WINDOWTOOSMALL,
    WRITEERROR,
    ZERORADIUS,
    ZEROVECTOR,
    ZEROAXISLENGTH,
    /// Any code not listed above. The full code is in [`SpiceError::short`].
    Other,
}

impl SpiceErrorKind {
    pub fn from_short(short: &str) -> Self {
        let code = short
            .trim()
            .strip_prefix("SPICE(")
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or("");

        match code {
            "BADENDPOINTS" => Self::BADENDPOINTS,
            "BADGEFVERSION" => Self::BADGEFVERSION,
            "BADSUBSCRIPT" => Self::BADSUBSCRIPT,
            "BLANKMODULENAME" => Self::BLANKMODULENAME,
            "BOGUSENTRY" => Self::BOGUSENTRY,
            "CELLTOOSMALL" => Self::CELLTOOSMALL,
            "CLUSTERWRITEERROR" => Self::CLUSTERWRITEERROR,
            "DATATYPENOTRECOG" => Self::DATATYPENOTRECOG,
            "DATEEXPECTED" => Self::DATEEXPECTED,
            "DEVICENAMETOOLONG" => Self::DEVICENAMETOOLONG,
            "EMBEDDEDBLANK" => Self::EMBEDDEDBLANK,
            "EMPTYSTRING" => Self::EMPTYSTRING,
            "FILEALREADYOPEN" => Self::FILEALREADYOPEN,
            "FILEOPENFAILED" => Self::FILEOPENFAILED,
            "FILEREADFAILED" => Self::FILEREADFAILED,
            "FILEWRITEFAILED" => Self::FILEWRITEFAILED,
            "FRAMEDATANOTFOUND" => Self::FRAMEDATANOTFOUND,
            "IDCODENOTFOUND" => Self::IDCODENOTFOUND,
            "INCOMPATIBLEUNITS" => Self::INCOMPATIBLEUNITS,
            "INVALIDACTION" => Self::INVALIDACTION,
            "INVALIDARGUMENT" => Self::INVALIDARGUMENT,
            "INVALIDCHECKOUT" => Self::INVALIDCHECKOUT,
            "INVALIDCLUSTERNUM" => Self::INVALIDCLUSTERNUM,
            "INVALIDEPOCH" => Self::INVALIDEPOCH,
            "INVALIDINDEX" => Self::INVALIDINDEX,
            "INVALIDTIMESTRING" => Self::INVALIDTIMESTRING,
            "INVALIDLISTITEM" => Self::INVALIDLISTITEM,
            "INVALIDMSGTYPE" => Self::INVALIDMSGTYPE,
            "INVALIDOPERATION" => Self::INVALIDOPERATION,
            "INVALIDOPTION" => Self::INVALIDOPTION,
            "INVALIDTIMEFORMAT" => Self::INVALIDTIMEFORMAT,
            "KERNELVARNOTFOUND" => Self::KERNELVARNOTFOUND,
            "NAMETABLEFULL" => Self::NAMETABLEFULL,
            "NOFRAMECONNECT" => Self::NOFRAMECONNECT,
            "NOFREELOGICALUNIT" => Self::NOFREELOGICALUNIT,
            "NOINTERVAL" => Self::NOINTERVAL,
            "NOLOADEDFILES" => Self::NOLOADEDFILES,
            "NOSEGMENT" => Self::NOSEGMENT,
            "NOSUCHFILE" => Self::NOSUCHFILE,
            "NOSUCHSYMBOL" => Self::NOSUCHSYMBOL,
            "NOTDISTINCT" => Self::NOTDISTINCT,
            "NUMBEREXPECTED" => Self::NUMBEREXPECTED,
            "POINTERTABLEFULL" => Self::POINTERTABLEFULL,
            "REFNOTREC" => Self::REFNOTREC,
            "SETEXCESS" => Self::SETEXCESS,
            "SPKINSUFFDATA" => Self::SPKINSUFFDATA,
            "TOOMANYFILESOPEN" => Self::TOOMANYFILESOPEN,
            "TRACEBACKOVERFLOW" => Self::TRACEBACKOVERFLOW,
            "UNITSNOTREC" => Self::UNITSNOTREC,
            "UNKNOWNFRAME" => Self::UNKNOWNFRAME,
            "UNMATCHENDPTS" => Self::UNMATCHENDPTS,
            "VALUETABLEFULL" => Self::VALUETABLEFULL,
            "WINDOWEXCESS" => Self::WINDOWEXCESS,
            "WINDOWTOOSMALL" => Self::WINDOWTOOSMALL,
            "WRITEERROR" => Self::WRITEERROR,
            "ZERORADIUS" => Self::ZERORADIUS,
            "ZEROVECTOR" => Self::ZEROVECTOR,
            "ZEROAXISLENGTH" => Self::ZEROAXISLENGTH,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_codes() {
        assert_eq!(
            SpiceErrorKind::from_short("SPICE(INVALIDTIMESTRING)"),
            SpiceErrorKind::INVALIDTIMESTRING
        );
        assert_eq!(
            SpiceErrorKind::from_short("SPICE(ZEROVECTOR)   "),
            SpiceErrorKind::ZEROVECTOR
        );
        assert_eq!(
            SpiceErrorKind::from_short("SPICE(SOMETHINGNEW)"),
            SpiceErrorKind::Other
        );
        assert_eq!(SpiceErrorKind::from_short(""), SpiceErrorKind::Other);
    }

    #[test]
    fn display() {
        let e = Error::from(SpiceError::new(
            "SPICE(NOSUCHFILE)".to_owned(),
            "".to_owned(),
            "The file 'x.bsp' does not exist.".to_owned(),
            "furnsh_c --> FURNSH".to_owned(),
        ));
        assert_eq!(e.to_string(), "SPICE(NOSUCHFILE): The file 'x.bsp' does not exist.");
        assert_eq!(e.spice_kind(), Some(SpiceErrorKind::NOSUCHFILE));
        assert_eq!(Error::Unbound("pi_c").spice_kind(), None);
    }
}
