//! A tiny stand-in for CSPICE, implementing a handful of routines with the real C ABI
//! and a shared error state, so the bindings can be exercised without the toolkit.

#![allow(dead_code)]

use cspice::{CallTable, Native};
use cspice_marshal::{
    EkAttDsc, EkSegSum, SPICEFALSE, SPICETRUE, SpiceBoolean, SpiceCell, SpiceChar, SpiceDouble, SpiceInt, from_bool,
};
use std::ffi::{CStr, c_void};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

struct MockError {
    short: String,
    explain: String,
    long: String,
    trace: String,
}

static ERROR: Mutex<Option<MockError>> = Mutex::new(None);
static ACTION: Mutex<String> = Mutex::new(String::new());
static PRINT: Mutex<String> = Mutex::new(String::new());

/// Number of `str2et_c` calls so far.
pub static STR2ET_CALLS: AtomicUsize = AtomicUsize::new(0);

/// The last summary written by `dafrs_c`.
pub static DAF_SUMMARY: Mutex<Vec<SpiceDouble>> = Mutex::new(Vec::new());

const POOL_NAMES: &[&str] = &["BODY399_RADII", "BODY301_RADII", "NAMES"];

fn signal(short: &str, explain: &str, long: String, trace: &str) {
    let mut err = ERROR.lock().unwrap();
    // Like CSPICE, keep the first error until reset
    if err.is_none() {
        *err = Some(MockError {
            short: short.to_owned(),
            explain: explain.to_owned(),
            long,
            trace: trace.to_owned(),
        });
    }
}

unsafe fn read_str<'a>(s: *const SpiceChar) -> &'a str {
    unsafe { CStr::from_ptr(s) }.to_str().unwrap()
}

unsafe fn write_str(buf: *mut SpiceChar, lenout: SpiceInt, s: &str) {
    let n = (lenout as usize).saturating_sub(1).min(s.len());
    unsafe {
        std::ptr::copy_nonoverlapping(s.as_ptr().cast::<SpiceChar>(), buf, n);
        *buf.add(n) = 0;
    }
}

unsafe extern "C" fn failed_c() -> SpiceBoolean {
    from_bool(ERROR.lock().unwrap().is_some())
}

unsafe extern "C" fn reset_c() {
    *ERROR.lock().unwrap() = None;
}

unsafe extern "C" fn getmsg_c(option: *const SpiceChar, lenout: SpiceInt, msg: *mut SpiceChar) {
    let err = ERROR.lock().unwrap();
    let text = match (unsafe { read_str(option) }, err.as_ref()) {
        (_, None) => "",
        ("SHORT", Some(e)) => e.short.as_str(),
        ("EXPLAIN", Some(e)) => e.explain.as_str(),
        (_, Some(e)) => e.long.as_str(),
    };
    unsafe { write_str(msg, lenout, text) };
}

unsafe extern "C" fn qcktrc_c(tracelen: SpiceInt, trace: *mut SpiceChar) {
    let err = ERROR.lock().unwrap();
    let text = err.as_ref().map_or("", |e| e.trace.as_str());
    unsafe { write_str(trace, tracelen, text) };
}

unsafe fn get_or_set(store: &Mutex<String>, op: *const SpiceChar, lenout: SpiceInt, value: *mut SpiceChar) {
    let mut store = store.lock().unwrap();
    match unsafe { read_str(op) } {
        "SET" => *store = unsafe { read_str(value) }.trim().to_owned(),
        _ => unsafe { write_str(value, lenout, &store) },
    }
}

unsafe extern "C" fn erract_c(op: *const SpiceChar, lenout: SpiceInt, action: *mut SpiceChar) {
    unsafe { get_or_set(&ACTION, op, lenout, action) };
}

unsafe extern "C" fn errprt_c(op: *const SpiceChar, lenout: SpiceInt, list: *mut SpiceChar) {
    unsafe { get_or_set(&PRINT, op, lenout, list) };
}

unsafe extern "C" fn pi_c() -> SpiceDouble {
    std::f64::consts::PI
}

unsafe extern "C" fn halfpi_c() -> SpiceDouble {
    std::f64::consts::FRAC_PI_2
}

unsafe extern "C" fn twopi_c() -> SpiceDouble {
    std::f64::consts::TAU
}

unsafe extern "C" fn clight_c() -> SpiceDouble {
    299792.458
}

unsafe extern "C" fn vadd_c(v1: *const SpiceDouble, v2: *const SpiceDouble, vout: *mut SpiceDouble) {
    for i in 0..3 {
        unsafe { *vout.add(i) = *v1.add(i) + *v2.add(i) };
    }
}

unsafe extern "C" fn xpose_c(m1: *const [SpiceDouble; 3], mout: *mut [SpiceDouble; 3]) {
    let m1 = unsafe { std::slice::from_raw_parts(m1, 3) };
    let mout = unsafe { std::slice::from_raw_parts_mut(mout, 3) };
    for (i, row) in m1.iter().enumerate() {
        for (j, x) in row.iter().enumerate() {
            mout[j][i] = *x;
        }
    }
}

unsafe extern "C" fn mxvg_c(m1: *const c_void, v2: *const c_void, nr1: SpiceInt, nc1r2: SpiceInt, vout: *mut c_void) {
    let (nr, nc) = (nr1 as usize, nc1r2 as usize);
    let m1 = unsafe { std::slice::from_raw_parts(m1.cast::<SpiceDouble>(), nr * nc) };
    let v2 = unsafe { std::slice::from_raw_parts(v2.cast::<SpiceDouble>(), nc) };
    let vout = unsafe { std::slice::from_raw_parts_mut(vout.cast::<SpiceDouble>(), nr) };
    for (i, out) in vout.iter_mut().enumerate() {
        *out = (0..nc).map(|j| m1[i * nc + j] * v2[j]).sum();
    }
}

unsafe extern "C" fn mtxvg_c(m1: *const c_void, v2: *const c_void, ncol1: SpiceInt, nr1r2: SpiceInt, vout: *mut c_void) {
    let (nc, nr) = (ncol1 as usize, nr1r2 as usize);
    let m1 = unsafe { std::slice::from_raw_parts(m1.cast::<SpiceDouble>(), nr * nc) };
    let v2 = unsafe { std::slice::from_raw_parts(v2.cast::<SpiceDouble>(), nr) };
    let vout = unsafe { std::slice::from_raw_parts_mut(vout.cast::<SpiceDouble>(), nc) };
    for (i, out) in vout.iter_mut().enumerate() {
        *out = (0..nr).map(|j| m1[j * nc + i] * v2[j]).sum();
    }
}

/// Accepts `"<seconds>"` or `"<seconds> TDB"` past J2000.
unsafe extern "C" fn str2et_c(string: *const SpiceChar, et: *mut SpiceDouble) {
    STR2ET_CALLS.fetch_add(1, Ordering::SeqCst);
    let s = unsafe { read_str(string) };
    match s.trim().trim_end_matches("TDB").trim().parse::<f64>() {
        Ok(v) => unsafe { *et = v },
        Err(_) => signal(
            "SPICE(INVALIDTIMESTRING)",
            "INVALIDTIMESTRING --",
            format!("The string '{s}' is not a time string."),
            "str2et_c --> STR2ET",
        ),
    }
}

unsafe extern "C" fn bodn2c_c(name: *const SpiceChar, code: *mut SpiceInt, found: *mut SpiceBoolean) {
    let id = match unsafe { read_str(name) }.trim().to_ascii_uppercase().as_str() {
        "EARTH" => Some(399),
        "MOON" => Some(301),
        "SUN" => Some(10),
        _ => None,
    };
    unsafe {
        *found = SPICEFALSE;
        if let Some(id) = id {
            *code = id;
            *found = SPICETRUE;
        }
    }
}

unsafe extern "C" fn appndi_c(item: SpiceInt, cell: *mut SpiceCell) {
    let cell = unsafe { &mut *cell };
    if cell.card >= cell.size {
        signal(
            "SPICE(CELLTOOSMALL)",
            "CELLTOOSMALL --",
            format!("Cell has size {}.", cell.size),
            "appndi_c",
        );
        return;
    }
    unsafe { *cell.data.cast::<SpiceInt>().add(cell.card as usize) = item };
    cell.card += 1;
}

unsafe extern "C" fn card_c(cell: *mut SpiceCell) -> SpiceInt {
    unsafe { (*cell).card }
}

unsafe extern "C" fn tkvrsn_c(_item: *const SpiceChar) -> *const SpiceChar {
    c"CSPICE_MOCK".as_ptr()
}

unsafe extern "C" fn size_c(cell: *mut SpiceCell) -> SpiceInt {
    unsafe { (*cell).size }
}

unsafe extern "C" fn ssize_c(size: SpiceInt, cell: *mut SpiceCell) {
    unsafe { (*cell).size = size };
}

/// Integer cells only: sort the first `n` elements and drop duplicates.
unsafe extern "C" fn valid_c(size: SpiceInt, n: SpiceInt, a: *mut SpiceCell) {
    let a = unsafe { &mut *a };
    if n > size {
        signal(
            "SPICE(INVALIDCARDINALITY)",
            "INVALIDCARDINALITY --",
            format!("Cardinality {n} exceeds size {size}."),
            "valid_c",
        );
        return;
    }
    let data = unsafe { std::slice::from_raw_parts_mut(a.data.cast::<SpiceInt>(), n as usize) };
    let mut items = data.to_vec();
    items.sort_unstable();
    items.dedup();
    data[..items.len()].copy_from_slice(&items);
    a.size = size;
    a.card = items.len() as SpiceInt;
    a.is_set = SPICETRUE;
}

unsafe extern "C" fn insrtc_c(item: *const SpiceChar, set: *mut SpiceCell) {
    let set = unsafe { &mut *set };
    let length = set.length as usize;
    let data = set.data.cast::<SpiceChar>();
    // Items longer than the cell's strings are truncated, as in CSPICE
    let item: String = unsafe { read_str(item) }.chars().take(length - 1).collect();
    let mut items: Vec<String> = (0..set.card as usize)
        .map(|i| unsafe { read_str(data.add(i * length)) }.to_owned())
        .collect();
    if items.contains(&item) {
        return;
    }
    if set.card >= set.size {
        signal(
            "SPICE(SETEXCESS)",
            "SETEXCESS --",
            format!("Set has size {}.", set.size),
            "insrtc_c",
        );
        return;
    }
    items.push(item);
    items.sort();
    for (i, s) in items.iter().enumerate() {
        unsafe { write_str(data.add(i * length), set.length, s) };
    }
    set.card = items.len() as SpiceInt;
    set.is_set = SPICETRUE;
}

unsafe extern "C" fn wncard_c(window: *mut SpiceCell) -> SpiceInt {
    unsafe { (*window).card / 2 }
}

unsafe extern "C" fn wninsd_c(left: SpiceDouble, right: SpiceDouble, window: *mut SpiceCell) {
    let window = unsafe { &mut *window };
    if left > right {
        signal(
            "SPICE(BADENDPOINTS)",
            "BADENDPOINTS --",
            format!("Left endpoint {left} exceeds right endpoint {right}."),
            "wninsd_c",
        );
        return;
    }
    let data = unsafe { std::slice::from_raw_parts_mut(window.data.cast::<SpiceDouble>(), window.size as usize) };
    let mut intervals: Vec<(f64, f64)> = data[..window.card as usize]
        .chunks_exact(2)
        .map(|w| (w[0], w[1]))
        .collect();
    intervals.push((left, right));
    intervals.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut merged: Vec<(f64, f64)> = Vec::new();
    for (l, r) in intervals {
        match merged.last_mut() {
            Some(last) if l <= last.1 => last.1 = last.1.max(r),
            _ => merged.push((l, r)),
        }
    }
    if 2 * merged.len() > data.len() {
        signal(
            "SPICE(WINDOWEXCESS)",
            "WINDOWEXCESS --",
            format!("Window has size {}.", window.size),
            "wninsd_c",
        );
        return;
    }
    for (i, (l, r)) in merged.iter().enumerate() {
        data[2 * i] = *l;
        data[2 * i + 1] = *r;
    }
    window.card = 2 * merged.len() as SpiceInt;
}

/// Copy `values[start..]` into a `room` by `lenout` string array, as the pool readers do.
unsafe fn fill_strings(
    values: &[String],
    start: SpiceInt,
    room: SpiceInt,
    lenout: SpiceInt,
    n: *mut SpiceInt,
    out: *mut c_void,
    found: *mut SpiceBoolean,
) {
    let out = out.cast::<SpiceChar>();
    let taken: Vec<_> = values.iter().skip(start as usize).take(room as usize).collect();
    for (i, v) in taken.iter().enumerate() {
        unsafe { write_str(out.add(i * lenout as usize), lenout, v) };
    }
    unsafe {
        *n = taken.len() as SpiceInt;
        *found = from_bool(!values.is_empty());
    }
}

/// The only character variable is `NAMES`, whose second value is longer than any
/// output buffer.
unsafe extern "C" fn gcpool_c(
    name: *const SpiceChar,
    start: SpiceInt,
    room: SpiceInt,
    lenout: SpiceInt,
    n: *mut SpiceInt,
    cvals: *mut c_void,
    found: *mut SpiceBoolean,
) {
    let values = match unsafe { read_str(name) } {
        "NAMES" => vec!["EARTH   ".to_owned(), "A".repeat(300), "MOON".to_owned()],
        _ => Vec::new(),
    };
    unsafe { fill_strings(&values, start, room, lenout, n, cvals, found) };
}

/// Supports exact names and templates ending in `*`.
unsafe extern "C" fn gnpool_c(
    name: *const SpiceChar,
    start: SpiceInt,
    room: SpiceInt,
    lenout: SpiceInt,
    n: *mut SpiceInt,
    kvars: *mut c_void,
    found: *mut SpiceBoolean,
) {
    let template = unsafe { read_str(name) };
    let names: Vec<String> = POOL_NAMES
        .iter()
        .filter(|v| match template.strip_suffix('*') {
            Some(prefix) => v.starts_with(prefix),
            None => **v == template,
        })
        .map(|v| v.to_string())
        .collect();
    unsafe { fill_strings(&names, start, room, lenout, n, kvars, found) };
}

/// Handle 1 has one segment, table `EVENTS`, with a three-integer `ID` column and a
/// variable-length `NOTES` column.
unsafe extern "C" fn ekssum_c(handle: SpiceInt, segno: SpiceInt, segsum: *mut EkSegSum) {
    if (handle, segno) != (1, 0) {
        signal(
            "SPICE(INVALIDINDEX)",
            "INVALIDINDEX --",
            format!("No segment {segno} in file {handle}."),
            "ekssum_c",
        );
        return;
    }
    let mut sum = EkSegSum::default();
    sum.tabnam[..6].copy_from_slice(b"EVENTS");
    sum.nrows = 2;
    sum.ncols = 2;
    sum.cnames[0][..2].copy_from_slice(b"ID");
    sum.cdescrs[0] = EkAttDsc {
        dtype: 2,
        size: 3,
        ..Default::default()
    };
    sum.cnames[1][..5].copy_from_slice(b"NOTES");
    sum.cdescrs[1] = EkAttDsc {
        dtype: 0,
        strlen: 80,
        size: -1,
        nullok: SPICETRUE,
        ..Default::default()
    };
    unsafe { *segsum = sum };
}

unsafe extern "C" fn ekrcei_c(
    _handle: SpiceInt,
    _segno: SpiceInt,
    recno: SpiceInt,
    _column: *const SpiceChar,
    nvals: *mut SpiceInt,
    ivals: *mut SpiceInt,
    isnull: *mut SpiceBoolean,
) {
    unsafe {
        for i in 0..3 {
            *ivals.add(i) = recno * 10 + i as SpiceInt;
        }
        *nvals = 3;
        *isnull = SPICEFALSE;
    }
}

unsafe extern "C" fn ekifld_c(
    _handle: SpiceInt,
    _tabnam: *const SpiceChar,
    _ncols: SpiceInt,
    nrows: SpiceInt,
    _cnmlen: SpiceInt,
    _cnames: *const c_void,
    _declen: SpiceInt,
    _decls: *const c_void,
    segno: *mut SpiceInt,
    rcptrs: *mut SpiceInt,
) {
    unsafe {
        *segno = 0;
        for i in 0..nrows as usize {
            *rcptrs.add(i) = 100 + i as SpiceInt;
        }
    }
}

unsafe extern "C" fn dafgh_c(handle: *mut SpiceInt) {
    unsafe { *handle = 7 };
}

/// Every file has the SPK summary layout: ND = 2, NI = 6.
unsafe extern "C" fn dafrfr_c(
    _handle: SpiceInt,
    lenout: SpiceInt,
    nd: *mut SpiceInt,
    ni: *mut SpiceInt,
    ifname: *mut SpiceChar,
    fward: *mut SpiceInt,
    bward: *mut SpiceInt,
    free: *mut SpiceInt,
) {
    unsafe {
        *nd = 2;
        *ni = 6;
        write_str(ifname, lenout, "MOCK SPK");
        *fward = 1;
        *bward = 1;
        *free = 1025;
    }
}

unsafe extern "C" fn dafrs_c(sum: *const SpiceDouble) {
    let sum = unsafe { std::slice::from_raw_parts(sum, 5) };
    *DAF_SUMMARY.lock().unwrap() = sum.to_vec();
}

pub fn table() -> CallTable {
    CallTable {
        failed_c: Some(failed_c),
        reset_c: Some(reset_c),
        getmsg_c: Some(getmsg_c),
        qcktrc_c: Some(qcktrc_c),
        erract_c: Some(erract_c),
        errprt_c: Some(errprt_c),
        pi_c: Some(pi_c),
        halfpi_c: Some(halfpi_c),
        twopi_c: Some(twopi_c),
        clight_c: Some(clight_c),
        vadd_c: Some(vadd_c),
        xpose_c: Some(xpose_c),
        mxvg_c: Some(mxvg_c),
        mtxvg_c: Some(mtxvg_c),
        str2et_c: Some(str2et_c),
        bodn2c_c: Some(bodn2c_c),
        appndi_c: Some(appndi_c),
        card_c: Some(card_c),
        tkvrsn_c: Some(tkvrsn_c),
        size_c: Some(size_c),
        ssize_c: Some(ssize_c),
        valid_c: Some(valid_c),
        insrtc_c: Some(insrtc_c),
        wncard_c: Some(wncard_c),
        wninsd_c: Some(wninsd_c),
        gcpool_c: Some(gcpool_c),
        gnpool_c: Some(gnpool_c),
        ekssum_c: Some(ekssum_c),
        ekrcei_c: Some(ekrcei_c),
        ekifld_c: Some(ekifld_c),
        dafgh_c: Some(dafgh_c),
        dafrfr_c: Some(dafrfr_c),
        dafrs_c: Some(dafrs_c),
        ..Default::default()
    }
}

/// Install the mock as the process-wide library. Safe to call from every test.
pub fn setup() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        // SAFETY: every entry above follows its C prototype and shares ERROR
        let native = unsafe { Native::from_table(table()) };
        cspice::install(native).unwrap();
    });
}
