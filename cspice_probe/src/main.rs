//! Load a CSPICE library and report what it provides.
//!
//! Useful for checking that a build exports the routines these bindings expect, and that
//! kernels load.

use anyhow::{Context, Result};
use clap::Parser;
use cspice::{CallTable, LoadOptions, Native};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(clap::Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSPICE shared library. Defaults to $CSPICE_LIB, then the standard search paths
    #[arg(short, long)]
    lib: Option<PathBuf>,

    /// List the declared routines the library does not export
    #[arg(short, long)]
    missing: bool,

    /// Kernels to furnish after loading
    #[arg(short, long, num_args = 1..)]
    kernel: Vec<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let options = LoadOptions {
        path: cli.lib.clone(),
        ..Default::default()
    };
    let path = options
        .resolve()
        .context("no CSPICE library found; pass --lib or set CSPICE_LIB")?;
    debug!("loading {}", path.display());

    let native = Native::open(&path).with_context(|| format!("loading {}", path.display()))?;
    let unbound = native.table().unbound();
    cspice::install(native)?;

    let mut spice = cspice::context()?;
    let version = spice.tkvrsn("TOOLKIT")?;
    println!("{}: {version}", path.display());
    println!(
        "{} of {} routines bound",
        CallTable::SYMBOLS.len() - unbound.len(),
        CallTable::SYMBOLS.len()
    );

    if cli.missing {
        for name in &unbound {
            println!("  missing {name}");
        }
    }

    for kernel in &cli.kernel {
        let file = kernel.to_str().context("kernel path is not UTF-8")?;
        info!("furnsh {file}");
        spice
            .furnsh(file)
            .with_context(|| format!("loading kernel {file}"))?;
    }

    if !cli.kernel.is_empty() {
        let total = spice.ktotal("ALL")?;
        println!("{total} kernels loaded");
        for which in 0..total {
            if let Some(k) = spice.kdata(which, "ALL")? {
                println!("  {:<5} {}", k.filtyp, k.file);
            }
        }
    }

    Ok(())
}
