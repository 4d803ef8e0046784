use cspice_marshal::*;

#[test]
fn typed_cells() {
    let mut d = DoubleCell::from_slice(8, &[1.0, 2.0, 4.0]).unwrap();
    let mut i = IntCell::from_slice(8, &[10, 20]).unwrap();

    assert_eq!(d.dtype(), CellDataType::Dp);
    assert_eq!(i.dtype(), CellDataType::Int);
    assert_eq!(d.length(), 0);

    // What a native routine sees through the header
    let hd = d.as_spice_cell();
    let hi = i.as_spice_cell();
    unsafe {
        assert_eq!((*hd).card, 3);
        assert_eq!((*hi).card, 2);
        let data = (*hd).data as *const f64;
        assert_eq!(*data.add(2), 4.0);
        let data = (*hi).data as *const SpiceInt;
        assert_eq!(*data.add(1), 20);
    }
}

#[test]
fn native_updates_are_visible() {
    let mut c = IntCell::new(4);
    let h = c.as_spice_cell();
    // Emulate appndi_c
    unsafe {
        let data = (*h).data as *mut SpiceInt;
        *data = 7;
        *data.add(1) = 9;
        (*h).card = 2;
    }
    assert_eq!(c.to_vec(), [7, 9]);
    assert_eq!(c.get(1), Some(9));
    assert_eq!(c.get(2), None);

    c.clear();
    assert_eq!(c.card(), 0);
}

#[test]
fn cardinality_never_exceeds_size() {
    let mut c = DoubleCell::new(2);
    let h = c.as_spice_cell();
    unsafe { (*h).card = 50 };
    assert_eq!(c.card(), 2);
    assert_eq!(c.as_slice().len(), 2);
}

#[test]
fn char_cells() {
    let mut c = CharCell::from_strs(5, 8, &["ALPHA", "BETA", "GAMMA"]).unwrap();
    assert_eq!(c.length(), 8);
    assert!(c.is_set());
    assert_eq!(c.to_vec().unwrap(), ["ALPHA", "BETA", "GAMMA"]);
    assert_eq!(c.get(1).unwrap().as_deref(), Some("BETA"));

    let h = c.as_spice_cell();
    unsafe {
        let data = (*h).data as *const u8;
        assert_eq!(std::slice::from_raw_parts(data, 6), b"ALPHA\0");
    }

    assert!(CharCell::from_strs(5, 4, &["TOOLONG"]).is_err());
    assert!(CharCell::from_strs(1, 8, &["A", "B"]).is_err());
    assert!(!CharCell::from_strs(5, 8, &["B", "A"]).unwrap().is_set());
}

#[test]
fn dynamic_cells() {
    let mut cells: Vec<AnyCell> = vec![
        CharCell::new(3, 10).into(),
        DoubleCell::new(3).into(),
        IntCell::new(3).into(),
    ];
    let kinds: Vec<_> = cells.iter().map(|c| c.dtype()).collect();
    assert_eq!(kinds, [CellDataType::Chr, CellDataType::Dp, CellDataType::Int]);
    assert_eq!(cells[0].length(), 10);

    assert!(cells[0].as_char_mut().is_ok());
    assert!(matches!(
        cells[1].as_int_mut(),
        Err(Error::KindMismatch {
            expected: CellDataType::Int,
            actual: CellDataType::Dp
        })
    ));
    assert!(matches!(
        cells[2].as_char(),
        Err(Error::KindMismatch { .. })
    ));
    assert!(!cells[2].as_spice_cell().is_null());
}

#[test]
fn header_size_never_widens_the_buffer() {
    let mut c = IntCell::from_slice(2, &[3, 1]).unwrap();
    let h = c.as_spice_cell();
    // Native code claiming a larger cell than we own
    unsafe {
        (*h).size = 1000;
        (*h).card = 1000;
    }
    assert_eq!(c.capacity(), 2);
    assert_eq!(c.size(), 2);
    assert_eq!(c.to_vec(), [3, 1]);

    // The next call sees the real size again
    let h = c.as_spice_cell();
    unsafe {
        assert_eq!((*h).size, 2);
        assert_eq!((*h).card, 2);
    }

    let mut s = CharCell::new(3, 8);
    assert_eq!(s.capacity(), 3);
    let h = s.as_spice_cell();
    unsafe { (*h).length = 400 };
    assert_eq!(s.length(), 8);
    assert_eq!(s.get(0).unwrap(), None);
    let h = s.as_spice_cell();
    unsafe { assert_eq!((*h).length, 8) };
}
