//! E-kernels: a small relational database of tables split into segments.
//!
//! Queries are plain strings in the EK query language. After [`ekfind`](SpiceContext::ekfind)
//! the matching rows are read back with `ekgc`/`ekgd`/`ekgi`, indexed by SELECT item,
//! row and element (all 0-based in the C API).

use super::cstr;
use crate::consts::ek::{CNAMSZ, CVALSZ, MAXQSEL, QCOLSZ, TNAMSZ};
use crate::consts::strings::MSGLEN;
use crate::{CharArray, EkAttDsc, EkDataType, EkSegSum, Error, Result, SpiceContext, SpiceInt};
use cspice_marshal::{FixedString, SPICEFALSE, SpiceBoolean, from_bool, host_count, spice_int, to_bool};
use log::trace;

/// One item of a query's SELECT clause, as described by `ekpsel_c`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EkQueryItem {
    /// Byte offsets of the item within the query string.
    pub begin: SpiceInt,
    pub end: SpiceInt,
    pub dtype: SpiceInt,
    pub class: SpiceInt,
    pub table: String,
    pub column: String,
}

impl EkQueryItem {
    pub fn data_type(&self) -> Option<EkDataType> {
        EkDataType::from_code(self.dtype)
    }
}

/// One column entry of one record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EkRecord<T> {
    pub values: Vec<T>,
    pub null: bool,
}

impl<T> EkRecord<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values, null: false }
    }

    /// A null entry. Fixed-size columns still need placeholder values.
    pub fn null(values: Vec<T>) -> Self {
        Self { values, null: true }
    }
}

/// A fast-load segment in progress, started by [`ekifld`](SpiceContext::ekifld).
///
/// Holds the record pointers native code allocated, one per row. The column loaders
/// read them and [`ekffld`](SpiceContext::ekffld) consumes them.
#[derive(Debug)]
pub struct FastLoad {
    pub segno: SpiceInt,
    rcptrs: Vec<SpiceInt>,
}

impl FastLoad {
    pub fn nrows(&self) -> usize {
        self.rcptrs.len()
    }
}

/// Flattened arguments for the fast-load column writers.
struct ColumnLoad<T> {
    values: Vec<T>,
    entszs: Vec<SpiceInt>,
    nlflgs: Vec<SpiceBoolean>,
    wkindx: Vec<SpiceInt>,
}

impl<T: Clone> ColumnLoad<T> {
    fn new(records: &[EkRecord<T>]) -> Self {
        Self {
            values: records.iter().flat_map(|r| r.values.iter().cloned()).collect(),
            entszs: records.iter().map(|r| spice_int(r.values.len())).collect(),
            nlflgs: records.iter().map(|r| from_bool(r.null)).collect(),
            wkindx: vec![0; records.len()],
        }
    }
}

impl SpiceContext<'_> {
    pub fn ekopn(&mut self, fname: &str, ifname: &str, ncomch: SpiceInt) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let ifname = cstr(ifname)?;
        let mut handle = 0;
        native!(
            self,
            ekopn_c(fname.as_ptr(), ifname.as_ptr(), ncomch, &mut handle)
        );
        Ok(handle)
    }

    pub fn ekopr(&mut self, fname: &str) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let mut handle = 0;
        native!(self, ekopr_c(fname.as_ptr(), &mut handle));
        Ok(handle)
    }

    pub fn ekopw(&mut self, fname: &str) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let mut handle = 0;
        native!(self, ekopw_c(fname.as_ptr(), &mut handle));
        Ok(handle)
    }

    /// Open a scratch EK, deleted when closed.
    pub fn ekops(&mut self) -> Result<SpiceInt> {
        let mut handle = 0;
        native!(self, ekops_c(&mut handle));
        Ok(handle)
    }

    pub fn ekcls(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, ekcls_c(handle));
        Ok(())
    }

    /// Load an EK for querying.
    pub fn eklef(&mut self, fname: &str) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let mut handle = 0;
        native!(self, eklef_c(fname.as_ptr(), &mut handle));
        Ok(handle)
    }

    pub fn ekuef(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, ekuef_c(handle));
        Ok(())
    }

    /// Number of loaded tables.
    pub fn ekntab(&mut self) -> Result<SpiceInt> {
        let mut n = 0;
        native!(self, ekntab_c(&mut n));
        Ok(n)
    }

    /// Name of the `n`th loaded table (0-based).
    pub fn ektnam(&mut self, n: SpiceInt) -> Result<String> {
        let mut table = FixedString::new(TNAMSZ);
        native!(self, ektnam_c(n, table.lenout(), table.as_mut_ptr()));
        Ok(table.decode()?)
    }

    /// Names of every loaded table.
    pub fn ek_tables(&mut self) -> Result<Vec<String>> {
        let n = self.ekntab()?;
        (0..n).map(|i| self.ektnam(i)).collect()
    }

    /// Number of distinct columns in a loaded table.
    pub fn ekccnt(&mut self, table: &str) -> Result<SpiceInt> {
        let table = cstr(table)?;
        let mut ccount = 0;
        native!(self, ekccnt_c(table.as_ptr(), &mut ccount));
        Ok(ccount)
    }

    /// Name and attributes of column `cindex` (0-based) of a loaded table.
    pub fn ekcii(&mut self, table: &str, cindex: SpiceInt) -> Result<(String, EkAttDsc)> {
        let table = cstr(table)?;
        let mut column = FixedString::new(CNAMSZ);
        let mut attdsc = EkAttDsc::default();
        native!(
            self,
            ekcii_c(
                table.as_ptr(),
                cindex,
                column.lenout(),
                column.as_mut_ptr(),
                &mut attdsc
            )
        );
        Ok((column.decode()?, attdsc))
    }

    /// Number of segments in an EK.
    pub fn eknseg(&mut self, handle: SpiceInt) -> Result<SpiceInt> {
        Ok(native!(self, eknseg_c(handle)))
    }

    /// Summary of segment `segno` (0-based).
    pub fn ekssum(&mut self, handle: SpiceInt, segno: SpiceInt) -> Result<EkSegSum> {
        let mut segsum = EkSegSum::default();
        native!(self, ekssum_c(handle, segno, &mut segsum));
        Ok(segsum)
    }

    /// Run a query over the loaded EKs. Returns the number of matching rows, or the
    /// query parser's message.
    pub fn ekfind(&mut self, query: &str) -> Result<std::result::Result<SpiceInt, String>> {
        let query = cstr(query)?;
        let mut nmrows = 0;
        let mut error = SPICEFALSE;
        let mut errmsg = FixedString::new(MSGLEN);
        native!(
            self,
            ekfind_c(
                query.as_ptr(),
                errmsg.lenout(),
                &mut nmrows,
                &mut error,
                errmsg.as_mut_ptr()
            )
        );
        if to_bool(error) {
            return Ok(Err(errmsg.decode()?));
        }
        trace!("ekfind: {} rows", nmrows);
        Ok(Ok(nmrows))
    }

    /// Parse the SELECT clause of a query.
    pub fn ekpsel(&mut self, query: &str) -> Result<std::result::Result<Vec<EkQueryItem>, String>> {
        let query = cstr(query)?;
        let mut n = 0;
        let mut xbegs = [0; MAXQSEL];
        let mut xends = [0; MAXQSEL];
        let mut xtypes = [0; MAXQSEL];
        let mut xclass = [0; MAXQSEL];
        let mut tabs = CharArray::new(MAXQSEL, TNAMSZ);
        let mut cols = CharArray::new(MAXQSEL, QCOLSZ);
        let mut error = SPICEFALSE;
        let mut errmsg = FixedString::new(MSGLEN);
        native!(
            self,
            ekpsel_c(
                query.as_ptr(),
                errmsg.lenout(),
                tabs.element_length(),
                cols.element_length(),
                &mut n,
                xbegs.as_mut_ptr(),
                xends.as_mut_ptr(),
                xtypes.as_mut_ptr(),
                xclass.as_mut_ptr(),
                tabs.as_mut_ptr(),
                cols.as_mut_ptr(),
                &mut error,
                errmsg.as_mut_ptr()
            )
        );
        if to_bool(error) {
            return Ok(Err(errmsg.decode()?));
        }

        let n = host_count(n).min(MAXQSEL);
        let tables = tabs.to_strings(n)?;
        let columns = cols.to_strings(n)?;
        let items = tables
            .into_iter()
            .zip(columns)
            .enumerate()
            .map(|(i, (table, column))| EkQueryItem {
                begin: xbegs[i],
                end: xends[i],
                dtype: xtypes[i],
                class: xclass[i],
                table,
                column,
            })
            .collect();
        Ok(Ok(items))
    }

    /// Character element of a query result. The outer `None` means the element does
    /// not exist; the inner one means the entry is null.
    pub fn ekgc(&mut self, selidx: SpiceInt, row: SpiceInt, elment: SpiceInt) -> Result<Option<Option<String>>> {
        let mut cdata = FixedString::new(CVALSZ);
        let mut null = SPICEFALSE;
        let mut fnd = SPICEFALSE;
        native!(
            self,
            ekgc_c(
                selidx,
                row,
                elment,
                cdata.lenout(),
                cdata.as_mut_ptr(),
                &mut null,
                &mut fnd
            )
        );
        if !to_bool(fnd) {
            return Ok(None);
        }
        if to_bool(null) {
            return Ok(Some(None));
        }
        Ok(Some(Some(cdata.decode()?)))
    }

    pub fn ekgd(&mut self, selidx: SpiceInt, row: SpiceInt, elment: SpiceInt) -> Result<Option<Option<f64>>> {
        let mut ddata = 0.0;
        let mut null = SPICEFALSE;
        let mut fnd = SPICEFALSE;
        native!(
            self,
            ekgd_c(selidx, row, elment, &mut ddata, &mut null, &mut fnd)
        );
        Ok(to_bool(fnd).then(|| (!to_bool(null)).then_some(ddata)))
    }

    pub fn ekgi(&mut self, selidx: SpiceInt, row: SpiceInt, elment: SpiceInt) -> Result<Option<Option<SpiceInt>>> {
        let mut idata = 0;
        let mut null = SPICEFALSE;
        let mut fnd = SPICEFALSE;
        native!(
            self,
            ekgi_c(selidx, row, elment, &mut idata, &mut null, &mut fnd)
        );
        Ok(to_bool(fnd).then(|| (!to_bool(null)).then_some(idata)))
    }

    /// Number of elements in a query result entry.
    pub fn eknelt(&mut self, selidx: SpiceInt, row: SpiceInt) -> Result<SpiceInt> {
        Ok(native!(self, eknelt_c(selidx, row)))
    }

    /// Start a new segment of table `tabnam`. `decls` are column declarations such as
    /// `"DATATYPE = INTEGER, INDEXED = TRUE"`.
    pub fn ekbseg<S: AsRef<str>, T: AsRef<str>>(
        &mut self,
        handle: SpiceInt,
        tabnam: &str,
        cnames: &[S],
        decls: &[T],
    ) -> Result<SpiceInt> {
        cspice_marshal::array::check_len("ekbseg declarations", cnames.len(), decls.len())?;
        let tabnam = cstr(tabnam)?;
        let cnames = CharArray::from_strs(cnames)?;
        let decls = CharArray::from_strs(decls)?;
        let mut segno = 0;
        native!(
            self,
            ekbseg_c(
                handle,
                tabnam.as_ptr(),
                cnames.count(),
                cnames.element_length(),
                cnames.as_ptr(),
                decls.element_length(),
                decls.as_ptr(),
                &mut segno
            )
        );
        Ok(segno)
    }

    /// Start a fast-load segment of `nrows` rows. Load every column with the `ekacl*`
    /// writers, then finish with [`ekffld`](Self::ekffld).
    pub fn ekifld<S: AsRef<str>, T: AsRef<str>>(
        &mut self,
        handle: SpiceInt,
        tabnam: &str,
        nrows: usize,
        cnames: &[S],
        decls: &[T],
    ) -> Result<FastLoad> {
        cspice_marshal::array::check_len("ekifld declarations", cnames.len(), decls.len())?;
        let tabnam = cstr(tabnam)?;
        let cnames = CharArray::from_strs(cnames)?;
        let decls = CharArray::from_strs(decls)?;
        let mut segno = 0;
        let mut rcptrs = vec![0; nrows];
        native!(
            self,
            ekifld_c(
                handle,
                tabnam.as_ptr(),
                cnames.count(),
                spice_int(nrows),
                cnames.element_length(),
                cnames.as_ptr(),
                decls.element_length(),
                decls.as_ptr(),
                &mut segno,
                rcptrs.as_mut_ptr()
            )
        );
        Ok(FastLoad { segno, rcptrs })
    }

    /// Finish a fast-load segment.
    pub fn ekffld(&mut self, handle: SpiceInt, mut load: FastLoad) -> Result<()> {
        native!(self, ekffld_c(handle, load.segno, load.rcptrs.as_mut_ptr()));
        Ok(())
    }

    /// Load a whole character column of a fast-load segment, one entry per row.
    pub fn ekaclc<S: AsRef<str> + Clone>(
        &mut self,
        handle: SpiceInt,
        segment: &FastLoad,
        column: &str,
        records: &[EkRecord<S>],
    ) -> Result<()> {
        cspice_marshal::array::check_len("ekaclc rows", segment.nrows(), records.len())?;
        let column = cstr(column)?;
        let mut load = ColumnLoad::new(records);
        let cvals = CharArray::from_strs(&load.values)?;
        native!(
            self,
            ekaclc_c(
                handle,
                segment.segno,
                column.as_ptr(),
                cvals.element_length(),
                cvals.as_ptr(),
                load.entszs.as_ptr(),
                load.nlflgs.as_ptr(),
                segment.rcptrs.as_ptr(),
                load.wkindx.as_mut_ptr()
            )
        );
        Ok(())
    }

    pub fn ekacld(
        &mut self,
        handle: SpiceInt,
        segment: &FastLoad,
        column: &str,
        records: &[EkRecord<f64>],
    ) -> Result<()> {
        cspice_marshal::array::check_len("ekacld rows", segment.nrows(), records.len())?;
        let column = cstr(column)?;
        let mut load = ColumnLoad::new(records);
        native!(
            self,
            ekacld_c(
                handle,
                segment.segno,
                column.as_ptr(),
                load.values.as_ptr(),
                load.entszs.as_ptr(),
                load.nlflgs.as_ptr(),
                segment.rcptrs.as_ptr(),
                load.wkindx.as_mut_ptr()
            )
        );
        Ok(())
    }

    pub fn ekacli(
        &mut self,
        handle: SpiceInt,
        segment: &FastLoad,
        column: &str,
        records: &[EkRecord<SpiceInt>],
    ) -> Result<()> {
        cspice_marshal::array::check_len("ekacli rows", segment.nrows(), records.len())?;
        let column = cstr(column)?;
        let mut load = ColumnLoad::new(records);
        native!(
            self,
            ekacli_c(
                handle,
                segment.segno,
                column.as_ptr(),
                load.values.as_ptr(),
                load.entszs.as_ptr(),
                load.nlflgs.as_ptr(),
                segment.rcptrs.as_ptr(),
                load.wkindx.as_mut_ptr()
            )
        );
        Ok(())
    }

    /// Append an empty record. Returns its number.
    pub fn ekappr(&mut self, handle: SpiceInt, segno: SpiceInt) -> Result<SpiceInt> {
        let mut recno = 0;
        native!(self, ekappr_c(handle, segno, &mut recno));
        Ok(recno)
    }

    pub fn ekinsr(&mut self, handle: SpiceInt, segno: SpiceInt, recno: SpiceInt) -> Result<()> {
        native!(self, ekinsr_c(handle, segno, recno));
        Ok(())
    }

    pub fn ekdelr(&mut self, handle: SpiceInt, segno: SpiceInt, recno: SpiceInt) -> Result<()> {
        native!(self, ekdelr_c(handle, segno, recno));
        Ok(())
    }

    /// Add a character entry to a record.
    pub fn ekacec<S: AsRef<str>>(
        &mut self,
        handle: SpiceInt,
        segno: SpiceInt,
        recno: SpiceInt,
        column: &str,
        entry: &EkRecord<S>,
    ) -> Result<()> {
        let column = cstr(column)?;
        let cvals = CharArray::from_strs(&entry.values)?;
        native!(
            self,
            ekacec_c(
                handle,
                segno,
                recno,
                column.as_ptr(),
                cvals.count(),
                cvals.element_length(),
                cvals.as_ptr(),
                from_bool(entry.null)
            )
        );
        Ok(())
    }

    pub fn ekaced(
        &mut self,
        handle: SpiceInt,
        segno: SpiceInt,
        recno: SpiceInt,
        column: &str,
        entry: &EkRecord<f64>,
    ) -> Result<()> {
        let column = cstr(column)?;
        native!(
            self,
            ekaced_c(
                handle,
                segno,
                recno,
                column.as_ptr(),
                spice_int(entry.values.len()),
                cspice_marshal::array::ptr_or_null(&entry.values),
                from_bool(entry.null)
            )
        );
        Ok(())
    }

    pub fn ekacei(
        &mut self,
        handle: SpiceInt,
        segno: SpiceInt,
        recno: SpiceInt,
        column: &str,
        entry: &EkRecord<SpiceInt>,
    ) -> Result<()> {
        let column = cstr(column)?;
        native!(
            self,
            ekacei_c(
                handle,
                segno,
                recno,
                column.as_ptr(),
                spice_int(entry.values.len()),
                cspice_marshal::array::ptr_or_null(&entry.values),
                from_bool(entry.null)
            )
        );
        Ok(())
    }

    /// Replace a character entry.
    pub fn ekucec<S: AsRef<str>>(
        &mut self,
        handle: SpiceInt,
        segno: SpiceInt,
        recno: SpiceInt,
        column: &str,
        entry: &EkRecord<S>,
    ) -> Result<()> {
        let column = cstr(column)?;
        let cvals = CharArray::from_strs(&entry.values)?;
        native!(
            self,
            ekucec_c(
                handle,
                segno,
                recno,
                column.as_ptr(),
                cvals.count(),
                cvals.element_length(),
                cvals.as_ptr(),
                from_bool(entry.null)
            )
        );
        Ok(())
    }

    pub fn ekuced(
        &mut self,
        handle: SpiceInt,
        segno: SpiceInt,
        recno: SpiceInt,
        column: &str,
        entry: &EkRecord<f64>,
    ) -> Result<()> {
        let column = cstr(column)?;
        native!(
            self,
            ekuced_c(
                handle,
                segno,
                recno,
                column.as_ptr(),
                spice_int(entry.values.len()),
                cspice_marshal::array::ptr_or_null(&entry.values),
                from_bool(entry.null)
            )
        );
        Ok(())
    }

    pub fn ekucei(
        &mut self,
        handle: SpiceInt,
        segno: SpiceInt,
        recno: SpiceInt,
        column: &str,
        entry: &EkRecord<SpiceInt>,
    ) -> Result<()> {
        let column = cstr(column)?;
        native!(
            self,
            ekucei_c(
                handle,
                segno,
                recno,
                column.as_ptr(),
                spice_int(entry.values.len()),
                cspice_marshal::array::ptr_or_null(&entry.values),
                from_bool(entry.null)
            )
        );
        Ok(())
    }

    /// Number of elements in every entry of `column`, from the segment summary.
    /// Fails for variable-size columns and for columns the segment does not have.
    fn entry_size(&mut self, handle: SpiceInt, segno: SpiceInt, column: &str) -> Result<usize> {
        let summary = self.ekssum(handle, segno)?;
        let descr = summary
            .columns()?
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column.trim()))
            .map(|(_, descr)| descr);
        match descr {
            Some(descr) if descr.size > 0 => Ok(host_count(descr.size)),
            _ => Err(Error::UnsizedEntry(column.to_owned())),
        }
    }

    /// Read a character entry of a fixed-size column directly from a segment.
    pub fn ekrcec(
        &mut self,
        handle: SpiceInt,
        segno: SpiceInt,
        recno: SpiceInt,
        column: &str,
    ) -> Result<EkRecord<String>> {
        let room = self.entry_size(handle, segno, column)?;
        // SAFETY: fixed-size entries hold exactly `room` elements
        unsafe { self.ekrcec_with_room(handle, segno, recno, column, room) }
    }

    /// Like [`ekrcec`](Self::ekrcec), for variable-size columns.
    ///
    /// # Safety
    ///
    /// Native code writes every element of the entry without a bound. `room` must be at
    /// least the number of elements in it.
    pub unsafe fn ekrcec_with_room(
        &mut self,
        handle: SpiceInt,
        segno: SpiceInt,
        recno: SpiceInt,
        column: &str,
        room: usize,
    ) -> Result<EkRecord<String>> {
        let column = cstr(column)?;
        let mut nvals = 0;
        let mut cvals = CharArray::new(room.max(1), CVALSZ);
        let mut isnull = SPICEFALSE;
        native!(
            self,
            ekrcec_c(
                handle,
                segno,
                recno,
                column.as_ptr(),
                cvals.element_length(),
                &mut nvals,
                cvals.as_mut_ptr(),
                &mut isnull
            )
        );
        Ok(EkRecord {
            values: cvals.to_strings(host_count(nvals).min(room))?,
            null: to_bool(isnull),
        })
    }

    pub fn ekrced(
        &mut self,
        handle: SpiceInt,
        segno: SpiceInt,
        recno: SpiceInt,
        column: &str,
    ) -> Result<EkRecord<f64>> {
        let room = self.entry_size(handle, segno, column)?;
        // SAFETY: as for ekrcec
        unsafe { self.ekrced_with_room(handle, segno, recno, column, room) }
    }

    /// # Safety
    ///
    /// As for [`ekrcec_with_room`](Self::ekrcec_with_room).
    pub unsafe fn ekrced_with_room(
        &mut self,
        handle: SpiceInt,
        segno: SpiceInt,
        recno: SpiceInt,
        column: &str,
        room: usize,
    ) -> Result<EkRecord<f64>> {
        let column = cstr(column)?;
        let mut nvals = 0;
        let mut dvals = vec![0.0; room.max(1)];
        let mut isnull = SPICEFALSE;
        native!(
            self,
            ekrced_c(
                handle,
                segno,
                recno,
                column.as_ptr(),
                &mut nvals,
                dvals.as_mut_ptr(),
                &mut isnull
            )
        );
        dvals.truncate(host_count(nvals).min(room));
        Ok(EkRecord {
            values: dvals,
            null: to_bool(isnull),
        })
    }

    pub fn ekrcei(
        &mut self,
        handle: SpiceInt,
        segno: SpiceInt,
        recno: SpiceInt,
        column: &str,
    ) -> Result<EkRecord<SpiceInt>> {
        let room = self.entry_size(handle, segno, column)?;
        // SAFETY: as for ekrcec
        unsafe { self.ekrcei_with_room(handle, segno, recno, column, room) }
    }

    /// # Safety
    ///
    /// As for [`ekrcec_with_room`](Self::ekrcec_with_room).
    pub unsafe fn ekrcei_with_room(
        &mut self,
        handle: SpiceInt,
        segno: SpiceInt,
        recno: SpiceInt,
        column: &str,
        room: usize,
    ) -> Result<EkRecord<SpiceInt>> {
        let column = cstr(column)?;
        let mut nvals = 0;
        let mut ivals = vec![0; room.max(1)];
        let mut isnull = SPICEFALSE;
        native!(
            self,
            ekrcei_c(
                handle,
                segno,
                recno,
                column.as_ptr(),
                &mut nvals,
                ivals.as_mut_ptr(),
                &mut isnull
            )
        );
        ivals.truncate(host_count(nvals).min(room));
        Ok(EkRecord {
            values: ivals,
            null: to_bool(isnull),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_load_flattening() {
        let records = vec![
            EkRecord::new(vec![1, 2, 3]),
            EkRecord::null(vec![0]),
            EkRecord::new(vec![4]),
        ];
        let load = ColumnLoad::new(&records);
        assert_eq!(load.values, vec![1, 2, 3, 0, 4]);
        assert_eq!(load.entszs, vec![3, 1, 1]);
        assert_eq!(load.nlflgs.iter().map(|&f| to_bool(f)).collect::<Vec<_>>(), vec![false, true, false]);
        assert_eq!(load.wkindx.len(), 3);
    }

    #[test]
    fn query_item_types() {
        let item = EkQueryItem {
            begin: 7,
            end: 12,
            dtype: 2,
            class: 1,
            table: "EVENTS".into(),
            column: "EVENTS.ID".into(),
        };
        assert_eq!(item.data_type(), Some(EkDataType::Int));
    }
}
