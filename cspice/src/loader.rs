//! Locating and loading the CSPICE shared library.

use crate::table::CallTable;
use crate::{Error, Result};
use libloading::Library;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Environment variable naming the CSPICE shared library to load.
pub const LIB_ENV: &str = "CSPICE_LIB";

/// File name of the CSPICE shared library on this platform.
pub fn library_file_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "cspice.dll"
    } else if cfg!(target_os = "macos") {
        "libcspice.dylib"
    } else {
        "libcspice.so"
    }
}

/// Where to look for the library.
///
/// Resolution order: `path`, then `$CSPICE_LIB` (if `use_env`), then
/// [`library_file_name`] in each of `search_paths`.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    pub path: Option<PathBuf>,
    pub use_env: bool,
    pub search_paths: Vec<PathBuf>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            path: None,
            use_env: true,
            search_paths: default_search_paths(),
        }
    }
}

impl LoadOptions {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn resolve(&self) -> Option<PathBuf> {
        if let Some(path) = &self.path {
            return Some(path.clone());
        }

        if self.use_env {
            if let Some(path) = std::env::var_os(LIB_ENV).filter(|p| !p.is_empty()) {
                return Some(PathBuf::from(path));
            }
        }

        self.search_paths
            .iter()
            .map(|dir| dir.join(library_file_name()))
            .find(|candidate| candidate.is_file())
    }
}

fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    #[cfg(target_os = "linux")]
    {
        paths.push(PathBuf::from("/usr/local/lib"));
        paths.push(PathBuf::from("/usr/lib"));
        paths.push(PathBuf::from("/usr/lib64"));
    }

    #[cfg(target_os = "macos")]
    {
        paths.push(PathBuf::from("/usr/local/lib"));
        paths.push(PathBuf::from("/opt/homebrew/lib"));
    }

    paths
}

/// A loaded native library and its resolved call table.
pub struct Native {
    pub(crate) table: CallTable,
    path: Option<PathBuf>,
    // Keeps the code behind `table` mapped. Dropped last.
    _lib: Option<Library>,
}

impl Native {
    /// Locate and open CSPICE.
    pub fn load(options: &LoadOptions) -> Result<Self> {
        let path = options.resolve().ok_or(Error::NotInstalled)?;
        Self::open(&path)
    }

    /// Open a specific library file and resolve the call table against it.
    ///
    /// Loading a shared library runs its initialisers, so `path` must be a trusted
    /// CSPICE build.
    pub fn open(path: &Path) -> Result<Self> {
        // SAFETY: see above; CSPICE has no load-time side effects beyond static init
        let lib = unsafe { Library::new(path) }?;
        // SAFETY: the table is stored alongside the library and dropped before it
        let table = unsafe { CallTable::resolve(&lib) };

        let unbound = table.unbound();
        debug!(
            "loaded {} ({} of {} symbols bound)",
            path.display(),
            CallTable::SYMBOLS.len() - unbound.len(),
            CallTable::SYMBOLS.len()
        );
        if !unbound.is_empty() {
            warn!("{} CSPICE symbols not found in {}", unbound.len(), path.display());
        }

        Ok(Self {
            table,
            path: Some(path.to_owned()),
            _lib: Some(lib),
        })
    }

    /// Wrap a table of function pointers that are not backed by a loaded library,
    /// e.g. statically linked or test implementations.
    ///
    /// # Safety
    ///
    /// Every entry must follow the C prototype of the routine it is named after, and
    /// all entries must share one consistent error state.
    pub unsafe fn from_table(table: CallTable) -> Self {
        Self {
            table,
            path: None,
            _lib: None,
        }
    }

    pub fn table(&self) -> &CallTable {
        &self.table
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl std::fmt::Debug for Native {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Native")
            .field("path", &self.path)
            .field("table", &self.table)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let opts = LoadOptions {
            path: Some(PathBuf::from("/nonexistent/libcspice.so")),
            use_env: true,
            search_paths: vec![],
        };
        assert_eq!(opts.resolve(), Some(PathBuf::from("/nonexistent/libcspice.so")));
    }

    #[test]
    fn search_paths() {
        let dir = tempfile::tempdir().unwrap();
        let opts = LoadOptions {
            path: None,
            use_env: false,
            search_paths: vec![PathBuf::from("/nonexistent"), dir.path().to_owned()],
        };
        assert_eq!(opts.resolve(), None);

        let lib = dir.path().join(library_file_name());
        std::fs::write(&lib, b"").unwrap();
        assert_eq!(opts.resolve(), Some(lib));
    }

    #[test]
    fn missing_library() {
        let opts = LoadOptions {
            path: None,
            use_env: false,
            search_paths: vec![],
        };
        assert!(matches!(Native::load(&opts), Err(Error::NotInstalled)));
    }

    #[test]
    fn not_a_library() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().join(library_file_name());
        std::fs::write(&lib, b"not an object file").unwrap();
        assert!(matches!(Native::open(&lib), Err(Error::Load(_))));
    }

    #[test]
    fn bare_table() {
        let native = unsafe { Native::from_table(CallTable::default()) };
        assert!(native.path().is_none());
        assert_eq!(native.table().bound().len(), 0);
        assert_eq!(native.table().unbound().len(), CallTable::SYMBOLS.len());
    }
}
