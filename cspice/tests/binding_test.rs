mod common;

use approx::assert_relative_eq;
use common::{DAF_SUMMARY, STR2ET_CALLS};
use cspice::{AnyCell, AsSpiceCell, CellDataType, CharCell, DoubleCell, EkRecord, Error, IntCell, Matrix, SpiceErrorKind};
use cspice_marshal::Error as MarshalError;
use rayon::prelude::*;
use std::sync::atomic::Ordering;

#[test]
fn scalars_and_vectors() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    assert_relative_eq!(spice.pi()?, std::f64::consts::PI);
    assert_relative_eq!(spice.halfpi()?, std::f64::consts::PI / 2.0);
    assert_relative_eq!(spice.twopi()?, 2.0 * std::f64::consts::PI);
    assert_eq!(spice.clight()?, 299792.458);
    assert_eq!(spice.vadd(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0])?, [5.0, 7.0, 9.0]);
    assert_eq!(spice.tkvrsn("TOOLKIT")?, "CSPICE_MOCK");
    Ok(())
}

#[test]
fn errors_are_configured_on_install() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    assert_eq!(spice.erract("GET", "")?, "RETURN");
    assert_eq!(spice.errprt("GET", "")?, "NONE");
    Ok(())
}

#[test]
fn native_errors_are_drained() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let err = spice.str2et("not a time").unwrap_err();
    assert_eq!(err.spice_kind(), Some(SpiceErrorKind::INVALIDTIMESTRING));
    match &err {
        Error::Spice(e) => {
            assert_eq!(e.short, "SPICE(INVALIDTIMESTRING)");
            assert!(!e.explain.is_empty());
            assert!(e.long.contains("'not a time'"));
            assert_eq!(e.traceback, "str2et_c --> STR2ET");
        }
        e => panic!("unexpected error {e:?}"),
    }
    assert!(err.to_string().starts_with("SPICE(INVALIDTIMESTRING): "));

    // The error state was reset, so the next call succeeds
    assert!(!spice.failed()?);
    assert_eq!(spice.str2et("86400 TDB")?, 86400.0);

    // And repeating the failure reports the same error, not a stale one
    let again = spice.str2et("also bad").unwrap_err();
    match again {
        Error::Spice(e) => assert!(e.long.contains("'also bad'")),
        e => panic!("unexpected error {e:?}"),
    }
    Ok(())
}

#[test]
fn not_found_is_none() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    assert_eq!(spice.bodn2c("earth")?, Some(399));
    assert_eq!(spice.bodn2c("Moon")?, Some(301));
    assert_eq!(spice.bodn2c("VULCAN")?, None);
    Ok(())
}

#[test]
fn unbound_symbols() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let err = spice
        .spkpos("MOON", 0.0, "J2000", "NONE", "EARTH")
        .unwrap_err();
    assert!(matches!(err, Error::Unbound("spkpos_c")));
    assert!(err.spice_kind().is_none());

    let unbound = spice.native().table().unbound();
    assert!(unbound.contains(&"spkpos_c"));
    assert!(!unbound.contains(&"str2et_c"));
    Ok(())
}

#[test]
fn batches_stop_at_first_error() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let ets = spice.str2et_batch(&["0", "60 TDB", "-3600"])?;
    assert_eq!(ets, [0.0, 60.0, -3600.0]);
    assert!(spice.str2et_batch::<&str>(&[])?.is_empty());

    // Holding the context keeps other tests from calling str2et_c meanwhile
    let before = STR2ET_CALLS.load(Ordering::SeqCst);
    let err = spice.str2et_batch(&["1", "bogus", "2", "3"]).unwrap_err();
    assert_eq!(err.spice_kind(), Some(SpiceErrorKind::INVALIDTIMESTRING));
    assert_eq!(STR2ET_CALLS.load(Ordering::SeqCst) - before, 2);
    Ok(())
}

#[test]
fn cells_filled_by_native_code() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let mut cell = IntCell::new(2);
    spice.appndi(5, &mut cell)?;
    spice.appndi(3, &mut cell)?;
    assert_eq!(cell.to_vec(), [5, 3]);
    assert_eq!(spice.card(&mut cell)?, 2);

    let err = spice.appndi(9, &mut cell).unwrap_err();
    assert_eq!(err.spice_kind(), Some(SpiceErrorKind::CELLTOOSMALL));
    assert_eq!(cell.to_vec(), [5, 3]);
    Ok(())
}

#[test]
fn char_cells_filled_by_native_code() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let mut set = CharCell::new(4, 6);
    for name in ["MOON", "EARTH", "MOON", "JUPITER"] {
        spice.insrtc(name, &mut set)?;
    }
    assert_eq!(set.to_vec()?, ["EARTH", "JUPIT", "MOON"]);
    assert!(set.is_set());

    spice.insrtc("SUN", &mut set)?;
    let err = spice.insrtc("VENUS", &mut set).unwrap_err();
    assert_eq!(err.spice_kind(), Some(SpiceErrorKind::SETEXCESS));
    assert_eq!(set.to_vec()?, ["EARTH", "JUPIT", "MOON", "SUN"]);
    Ok(())
}

#[test]
fn windows_filled_by_native_code() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let mut window = DoubleCell::window(3);
    spice.wninsd(1.0, 3.0, &mut window)?;
    spice.wninsd(7.0, 11.0, &mut window)?;
    spice.wninsd(2.0, 5.0, &mut window)?;
    assert_eq!(window.intervals(), [(1.0, 5.0), (7.0, 11.0)]);
    assert_eq!(spice.wncard(&mut window)?, 2);

    spice.wninsd(23.0, 27.0, &mut window)?;
    let err = spice.wninsd(30.0, 31.0, &mut window).unwrap_err();
    assert_eq!(err.spice_kind(), Some(SpiceErrorKind::WINDOWEXCESS));
    assert_eq!(spice.wncard(&mut window)?, 3);

    let err = spice.wninsd(5.0, 1.0, &mut window).unwrap_err();
    assert_eq!(err.spice_kind(), Some(SpiceErrorKind::BADENDPOINTS));
    assert_eq!(window.intervals(), [(1.0, 5.0), (7.0, 11.0), (23.0, 27.0)]);
    Ok(())
}

#[test]
fn declared_sizes_limited_to_capacity() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let mut cell = IntCell::from_slice(4, &[5, 1, 5, 3])?;
    let err = spice.valid(1000, 4, &mut cell).unwrap_err();
    assert!(matches!(
        err,
        Error::Marshal(MarshalError::CapacityExceeded {
            what: "valid",
            needed: 1000,
            capacity: 4,
        })
    ));
    spice.valid(4, 4, &mut cell)?;
    assert_eq!(cell.to_vec(), [1, 3, 5]);
    assert!(cell.is_set());

    assert!(matches!(
        spice.ssize(10, &mut cell),
        Err(Error::Marshal(MarshalError::CapacityExceeded { what: "ssize", .. }))
    ));
    assert_eq!(spice.size(&mut cell)?, 4);
    spice.ssize(3, &mut cell)?;
    assert_eq!(spice.size(&mut cell)?, 3);
    assert_eq!(cell.size(), 3);
    spice.ssize(4, &mut cell)?;
    assert_eq!(spice.size(&mut cell)?, 4);

    // wnvald_c is not in the mock table, so reaching it would give Unbound instead
    let mut window = DoubleCell::window(2);
    assert!(matches!(
        spice.wnvald(8, 4, &mut window),
        Err(Error::Marshal(MarshalError::CapacityExceeded {
            what: "wnvald",
            needed: 8,
            capacity: 4,
        }))
    ));
    assert!(matches!(
        spice.wnvald(4, 0, &mut window),
        Err(Error::Unbound("wnvald_c"))
    ));
    Ok(())
}

#[test]
fn pool_strings() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let names = spice.gcpool("NAMES", 0, 5)?.unwrap();
    assert_eq!(names.len(), 3);
    assert_eq!(names[0], "EARTH");
    assert_eq!(names[1], "A".repeat(cspice::consts::strings::DEFAULT_LEN - 1));
    assert_eq!(names[2], "MOON");

    assert_eq!(spice.gcpool("NAMES", 2, 5)?, Some(vec!["MOON".to_owned()]));
    assert_eq!(spice.gcpool("NAMES", 0, 1)?, Some(vec!["EARTH".to_owned()]));
    assert_eq!(spice.gcpool("MISSING", 0, 5)?, None);

    assert_eq!(
        spice.gnpool("BODY*", 0, 10)?,
        Some(vec!["BODY399_RADII".to_owned(), "BODY301_RADII".to_owned()])
    );
    assert_eq!(spice.gnpool("BODY*", 1, 10)?, Some(vec!["BODY301_RADII".to_owned()]));
    assert_eq!(spice.gnpool("XYZ*", 0, 10)?, None);
    Ok(())
}

#[test]
fn order_vectors_checked_before_calling() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let mut array = [10, 20];
    for bad in [[5, 1], [0, 0], [-1, 0]] {
        let err = spice.reordi(&bad, &mut array).unwrap_err();
        assert!(matches!(
            err,
            Error::Marshal(MarshalError::InvalidOrder { what: "reordi order", .. })
        ));
    }
    assert!(matches!(
        spice.reordi(&[0], &mut array),
        Err(Error::Marshal(MarshalError::Shape { .. }))
    ));
    // reordi_c is not in the mock table
    assert!(matches!(
        spice.reordi(&[1, 0], &mut array),
        Err(Error::Unbound("reordi_c"))
    ));
    assert_eq!(array, [10, 20]);
    Ok(())
}

#[test]
fn ek_reads_sized_from_segment() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let id = spice.ekrcei(1, 0, 4, "id")?;
    assert_eq!(id, EkRecord::new(vec![40, 41, 42]));
    assert!(matches!(
        spice.ekrcei(1, 0, 4, "NOTES"),
        Err(Error::UnsizedEntry(c)) if c == "NOTES"
    ));
    assert!(matches!(
        spice.ekrcei(1, 0, 4, "MISSING"),
        Err(Error::UnsizedEntry(_))
    ));
    let err = spice.ekrcei(1, 3, 0, "ID").unwrap_err();
    assert_eq!(err.spice_kind(), Some(SpiceErrorKind::INVALIDINDEX));
    Ok(())
}

#[test]
fn ek_fast_load_rows_checked() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let load = spice.ekifld(1, "EVENTS", 2, &["ID"], &["DATATYPE = INTEGER"])?;
    assert_eq!(load.segno, 0);
    assert_eq!(load.nrows(), 2);

    let short = [EkRecord::new(vec![1])];
    assert!(matches!(
        spice.ekacli(1, &load, "ID", &short),
        Err(Error::Marshal(MarshalError::Shape {
            what: "ekacli rows",
            expected: 2,
            actual: 1,
        }))
    ));
    // ekacli_c is not in the mock table
    let full = [EkRecord::new(vec![1]), EkRecord::new(vec![2])];
    assert!(matches!(
        spice.ekacli(1, &load, "ID", &full),
        Err(Error::Unbound("ekacli_c"))
    ));
    Ok(())
}

#[test]
fn daf_summaries_sized_from_file() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    assert!(matches!(
        spice.dafrs(&[0.0; 4]),
        Err(Error::Marshal(MarshalError::Shape {
            what: "dafrs summary",
            expected: 5,
            actual: 4,
        }))
    ));
    spice.dafrs(&[1.0, 2.0, 3.0, 4.0, 5.0])?;
    assert_eq!(*DAF_SUMMARY.lock().unwrap(), [1.0, 2.0, 3.0, 4.0, 5.0]);
    Ok(())
}

#[test]
fn cell_kinds_checked_before_calling() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let mut a = AnyCell::new(CellDataType::Int, 4, 0)?;
    let mut b = AnyCell::from(DoubleCell::new(4));
    let mut c = AnyCell::new(CellDataType::Int, 8, 0)?;

    // union_c is not in the mock table, so reaching it would give Unbound instead
    let err = spice.union(&mut a, &mut b, &mut c).unwrap_err();
    assert!(matches!(
        err,
        Error::Marshal(MarshalError::KindMismatch {
            expected: CellDataType::Int,
            actual: CellDataType::Dp,
        })
    ));
    assert!(matches!(
        spice.union(&mut a, &mut c.clone(), &mut c),
        Err(Error::Unbound("union_c"))
    ));
    Ok(())
}

#[test]
fn matrices_are_row_major() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let m = nalgebra::Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    let rows: [[f64; 3]; 3] = std::array::from_fn(|i| std::array::from_fn(|j| m[(i, j)]));
    let t = spice.xpose(&rows)?;

    let expected = m.transpose();
    for (i, row) in t.iter().enumerate() {
        for (j, x) in row.iter().enumerate() {
            assert_eq!(*x, expected[(i, j)]);
        }
    }

    let m = [[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [0.0, 6.0, 0.0]];
    assert_eq!(spice.xpose(&m)?, [[1.0, 0.0, 0.0], [2.0, 4.0, 6.0], [3.0, 5.0, 0.0]]);
    Ok(())
}

#[test]
fn general_matrix_times_vector() -> cspice::Result<()> {
    common::setup();
    let mut spice = cspice::context()?;

    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
    assert_eq!(spice.mxvg(&m, &[1.0, 0.0, 1.0])?, [4.0, 10.0]);
    assert_eq!(spice.mtxvg(&m, &[1.0, 1.0])?, [5.0, 7.0, 9.0]);
    assert!(matches!(
        spice.mxvg(&m, &[1.0, 1.0]),
        Err(Error::Marshal(MarshalError::Shape { what: "mxvg", .. }))
    ));
    Ok(())
}

#[test]
fn concurrent_contexts() {
    common::setup();

    // Every other call fails. If two threads ever shared the error state, a
    // success would see a failure or a message would name another thread's input.
    let results: Vec<_> = (0..64)
        .into_par_iter()
        .map(|i| {
            let mut spice = cspice::context().unwrap();
            let input = if i % 2 == 0 { format!("{i}") } else { format!("bad{i}") };
            (i, input.clone(), spice.str2et(&input))
        })
        .collect();

    for (i, input, result) in results {
        match result {
            Ok(et) => {
                assert_eq!(i % 2, 0);
                assert_eq!(et, i as f64);
            }
            Err(Error::Spice(e)) => {
                assert_eq!(i % 2, 1);
                assert!(e.long.contains(&format!("'{input}'")));
            }
            Err(e) => panic!("unexpected error {e:?}"),
        }
    }
}

#[test]
fn try_context_while_held() -> cspice::Result<()> {
    common::setup();
    let _spice = cspice::context()?;

    let other = std::thread::spawn(|| cspice::try_context().map(|c| c.is_none()));
    assert!(other.join().unwrap()?);
    Ok(())
}
