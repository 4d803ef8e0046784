//! DSK shape models and the DLA segment lists they are stored in.
//!
//! Only type 2 (triangular plate) segments have dedicated readers and writers.
//! Plate vertex indices are 1-based.

use super::{cstr, found};
use crate::consts::dsk::{DCSIZE, ICSIZE, NSYPAR, SPAISZ};
use crate::{AsSpiceCell, DlaDescr, DskDescr, IntCell, Result, SpiceContext, SpiceInt};
use cspice_marshal::{SPICEFALSE, array, from_bool, host_count, spice_int};

/// Vertices and plates of a type 2 segment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DskPlateModel {
    pub vertices: Vec<[f64; 3]>,
    pub plates: Vec<[SpiceInt; 3]>,
}

/// Spatial index of a type 2 segment, as built by `dskmi2_c`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Type2Index {
    pub spaixd: [f64; SPAISZ],
    pub spaixi: Vec<SpiceInt>,
}

/// Type 2 segment parameters from `dskb02_c`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Type2Summary {
    pub nv: SpiceInt,
    pub np: SpiceInt,
    pub nvxtot: SpiceInt,
    pub vtxbds: [[f64; 2]; 3],
    pub voxsiz: f64,
    pub voxori: [f64; 3],
    pub vgrext: [SpiceInt; 3],
    pub cgscal: SpiceInt,
    pub vtxnpl: SpiceInt,
    pub voxnpt: SpiceInt,
    pub voxnpl: SpiceInt,
}

/// Ray-surface intercept from `dskxsi_c`, with the segment that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DskRayHit {
    pub xpt: [f64; 3],
    pub handle: SpiceInt,
    pub dladsc: DlaDescr,
    pub dskdsc: DskDescr,
    pub dc: [f64; DCSIZE],
    /// Plate ID for type 2 segments.
    pub ic: [SpiceInt; ICSIZE],
}

impl SpiceContext<'_> {
    pub fn dskopn(&mut self, fname: &str, ifname: &str, ncomch: SpiceInt) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let ifname = cstr(ifname)?;
        let mut handle = 0;
        native!(
            self,
            dskopn_c(fname.as_ptr(), ifname.as_ptr(), ncomch, &mut handle)
        );
        Ok(handle)
    }

    /// Close a DSK, optionally segregating it for faster reads.
    pub fn dskcls(&mut self, handle: SpiceInt, optmiz: bool) -> Result<()> {
        native!(self, dskcls_c(handle, from_bool(optmiz)));
        Ok(())
    }

    pub fn dskobj(&mut self, dskfnm: &str, bodids: &mut IntCell) -> Result<()> {
        let dskfnm = cstr(dskfnm)?;
        native!(self, dskobj_c(dskfnm.as_ptr(), bodids.as_spice_cell()));
        Ok(())
    }

    pub fn dsksrf(&mut self, dskfnm: &str, bodyid: SpiceInt, srfids: &mut IntCell) -> Result<()> {
        let dskfnm = cstr(dskfnm)?;
        native!(
            self,
            dsksrf_c(dskfnm.as_ptr(), bodyid, srfids.as_spice_cell())
        );
        Ok(())
    }

    pub fn dskgd(&mut self, handle: SpiceInt, dladsc: &DlaDescr) -> Result<DskDescr> {
        let mut dskdsc = DskDescr::default();
        native!(self, dskgd_c(handle, dladsc, &mut dskdsc));
        Ok(dskdsc)
    }

    pub fn dskb02(&mut self, handle: SpiceInt, dladsc: &DlaDescr) -> Result<Type2Summary> {
        let mut s = Type2Summary::default();
        native!(
            self,
            dskb02_c(
                handle,
                dladsc,
                &mut s.nv,
                &mut s.np,
                &mut s.nvxtot,
                s.vtxbds.as_mut_ptr(),
                &mut s.voxsiz,
                s.voxori.as_mut_ptr(),
                s.vgrext.as_mut_ptr(),
                &mut s.cgscal,
                &mut s.vtxnpl,
                &mut s.voxnpt,
                &mut s.voxnpl
            )
        );
        Ok(s)
    }

    /// Up to `room` double precision items of kind `item`, from index `start`
    /// (1-based).
    pub fn dskd02(
        &mut self,
        handle: SpiceInt,
        dladsc: &DlaDescr,
        item: SpiceInt,
        start: SpiceInt,
        room: usize,
    ) -> Result<Vec<f64>> {
        let mut n = 0;
        let mut values = vec![0.0; room];
        native!(
            self,
            dskd02_c(
                handle,
                dladsc,
                item,
                start,
                spice_int(room),
                &mut n,
                values.as_mut_ptr()
            )
        );
        values.truncate(host_count(n));
        Ok(values)
    }

    pub fn dski02(
        &mut self,
        handle: SpiceInt,
        dladsc: &DlaDescr,
        item: SpiceInt,
        start: SpiceInt,
        room: usize,
    ) -> Result<Vec<SpiceInt>> {
        let mut n = 0;
        let mut values = vec![0; room];
        native!(
            self,
            dski02_c(
                handle,
                dladsc,
                item,
                start,
                spice_int(room),
                &mut n,
                values.as_mut_ptr()
            )
        );
        values.truncate(host_count(n));
        Ok(values)
    }

    /// Outward unit normal of plate `plid`.
    pub fn dskn02(&mut self, handle: SpiceInt, dladsc: &DlaDescr, plid: SpiceInt) -> Result<[f64; 3]> {
        let mut normal = [0.0; 3];
        native!(self, dskn02_c(handle, dladsc, plid, normal.as_mut_ptr()));
        Ok(normal)
    }

    pub fn dskp02(
        &mut self,
        handle: SpiceInt,
        dladsc: &DlaDescr,
        start: SpiceInt,
        room: usize,
    ) -> Result<Vec<[SpiceInt; 3]>> {
        let mut n = 0;
        let mut plates = vec![[0; 3]; room];
        native!(
            self,
            dskp02_c(
                handle,
                dladsc,
                start,
                spice_int(room),
                &mut n,
                plates.as_mut_ptr()
            )
        );
        plates.truncate(host_count(n));
        Ok(plates)
    }

    pub fn dskv02(
        &mut self,
        handle: SpiceInt,
        dladsc: &DlaDescr,
        start: SpiceInt,
        room: usize,
    ) -> Result<Vec<[f64; 3]>> {
        let mut n = 0;
        let mut vrtces = vec![[0.0; 3]; room];
        native!(
            self,
            dskv02_c(
                handle,
                dladsc,
                start,
                spice_int(room),
                &mut n,
                vrtces.as_mut_ptr()
            )
        );
        vrtces.truncate(host_count(n));
        Ok(vrtces)
    }

    /// Vertex and plate counts: `(nv, np)`.
    pub fn dskz02(&mut self, handle: SpiceInt, dladsc: &DlaDescr) -> Result<(SpiceInt, SpiceInt)> {
        let (mut nv, mut np) = (0, 0);
        native!(self, dskz02_c(handle, dladsc, &mut nv, &mut np));
        Ok((nv, np))
    }

    /// Read the whole plate model of a type 2 segment.
    pub fn dsk_plate_model(&mut self, handle: SpiceInt, dladsc: &DlaDescr) -> Result<DskPlateModel> {
        let (nv, np) = self.dskz02(handle, dladsc)?;
        Ok(DskPlateModel {
            vertices: self.dskv02(handle, dladsc, 1, host_count(nv))?,
            plates: self.dskp02(handle, dladsc, 1, host_count(np))?,
        })
    }

    /// Intercept of a ray with a single type 2 segment. Returns `(plid, xpt)`.
    pub fn dskx02(
        &mut self,
        handle: SpiceInt,
        dladsc: &DlaDescr,
        vertex: &[f64; 3],
        raydir: &[f64; 3],
    ) -> Result<Option<(SpiceInt, [f64; 3])>> {
        let mut plid = 0;
        let mut xpt = [0.0; 3];
        let mut fnd = SPICEFALSE;
        native!(
            self,
            dskx02_c(
                handle,
                dladsc,
                vertex.as_ptr(),
                raydir.as_ptr(),
                &mut plid,
                xpt.as_mut_ptr(),
                &mut fnd
            )
        );
        Ok(found(fnd, (plid, xpt)))
    }

    /// Intercept of a ray with the surfaces `srflst` of `target` (all surfaces if
    /// empty), using loaded DSKs.
    pub fn dskxsi(
        &mut self,
        pri: bool,
        target: &str,
        srflst: &[SpiceInt],
        et: f64,
        fixref: &str,
        vertex: &[f64; 3],
        raydir: &[f64; 3],
    ) -> Result<Option<DskRayHit>> {
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let mut hit = DskRayHit {
            xpt: [0.0; 3],
            handle: 0,
            dladsc: DlaDescr::default(),
            dskdsc: DskDescr::default(),
            dc: [0.0; DCSIZE],
            ic: [0; ICSIZE],
        };
        let mut fnd = SPICEFALSE;
        native!(
            self,
            dskxsi_c(
                from_bool(pri),
                target.as_ptr(),
                spice_int(srflst.len()),
                array::ptr_or_null(srflst),
                et,
                fixref.as_ptr(),
                vertex.as_ptr(),
                raydir.as_ptr(),
                spice_int(DCSIZE),
                spice_int(ICSIZE),
                hit.xpt.as_mut_ptr(),
                &mut hit.handle,
                &mut hit.dladsc,
                &mut hit.dskdsc,
                hit.dc.as_mut_ptr(),
                hit.ic.as_mut_ptr(),
                &mut fnd
            )
        );
        Ok(found(fnd, hit))
    }

    /// Intercepts of many rays. Each entry is `None` where the ray misses.
    pub fn dskxv(
        &mut self,
        pri: bool,
        target: &str,
        srflst: &[SpiceInt],
        et: f64,
        fixref: &str,
        vtxarr: &[[f64; 3]],
        dirarr: &[[f64; 3]],
    ) -> Result<Vec<Option<[f64; 3]>>> {
        array::check_len("dskxv rays", vtxarr.len(), dirarr.len())?;
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let nrays = vtxarr.len();
        let mut xptarr = vec![[0.0; 3]; nrays];
        let mut fndarr = vec![SPICEFALSE; nrays];
        native!(
            self,
            dskxv_c(
                from_bool(pri),
                target.as_ptr(),
                spice_int(srflst.len()),
                array::ptr_or_null(srflst),
                et,
                fixref.as_ptr(),
                spice_int(nrays),
                vtxarr.as_ptr(),
                dirarr.as_ptr(),
                xptarr.as_mut_ptr(),
                fndarr.as_mut_ptr()
            )
        );
        Ok(xptarr
            .into_iter()
            .zip(fndarr)
            .map(|(xpt, fnd)| found(fnd, xpt))
            .collect())
    }

    /// Get a DSK tolerance or margin parameter.
    pub fn dskgtl(&mut self, keywrd: SpiceInt) -> Result<f64> {
        let mut dpval = 0.0;
        native!(self, dskgtl_c(keywrd, &mut dpval));
        Ok(dpval)
    }

    pub fn dskstl(&mut self, keywrd: SpiceInt, dpval: f64) -> Result<()> {
        native!(self, dskstl_c(keywrd, dpval));
        Ok(())
    }

    /// Build the spatial index for a plate model.
    pub fn dskmi2(
        &mut self,
        model: &DskPlateModel,
        finscl: f64,
        corscl: SpiceInt,
        worksz: usize,
        voxpsz: SpiceInt,
        voxlsz: SpiceInt,
        makvtl: bool,
        spxisz: usize,
    ) -> Result<Type2Index> {
        let mut work = vec![[0; 2]; worksz];
        let mut index = Type2Index {
            spaixd: [0.0; SPAISZ],
            spaixi: vec![0; spxisz],
        };
        native!(
            self,
            dskmi2_c(
                spice_int(model.vertices.len()),
                model.vertices.as_ptr(),
                spice_int(model.plates.len()),
                model.plates.as_ptr(),
                finscl,
                corscl,
                spice_int(worksz),
                voxpsz,
                voxlsz,
                from_bool(makvtl),
                spice_int(spxisz),
                work.as_mut_ptr(),
                index.spaixd.as_mut_ptr(),
                index.spaixi.as_mut_ptr()
            )
        );
        Ok(index)
    }

    /// Bounds of the third coordinate of a plate model: `(mncor3, mxcor3)`.
    pub fn dskrb2(
        &mut self,
        model: &DskPlateModel,
        corsys: SpiceInt,
        corpar: &[f64; NSYPAR],
    ) -> Result<(f64, f64)> {
        let (mut mncor3, mut mxcor3) = (0.0, 0.0);
        native!(
            self,
            dskrb2_c(
                spice_int(model.vertices.len()),
                model.vertices.as_ptr(),
                spice_int(model.plates.len()),
                model.plates.as_ptr(),
                corsys,
                corpar.as_ptr(),
                &mut mncor3,
                &mut mxcor3
            )
        );
        Ok((mncor3, mxcor3))
    }

    /// Write a type 2 segment. `bounds` holds `(min, max)` for each coordinate.
    pub fn dskw02(
        &mut self,
        handle: SpiceInt,
        center: SpiceInt,
        surfid: SpiceInt,
        dclass: SpiceInt,
        frame: &str,
        corsys: SpiceInt,
        corpar: &[f64; NSYPAR],
        bounds: [(f64, f64); 3],
        first: f64,
        last: f64,
        model: &DskPlateModel,
        index: &Type2Index,
    ) -> Result<()> {
        let frame = cstr(frame)?;
        native!(
            self,
            dskw02_c(
                handle,
                center,
                surfid,
                dclass,
                frame.as_ptr(),
                corsys,
                corpar.as_ptr(),
                bounds[0].0,
                bounds[0].1,
                bounds[1].0,
                bounds[1].1,
                bounds[2].0,
                bounds[2].1,
                first,
                last,
                spice_int(model.vertices.len()),
                model.vertices.as_ptr(),
                spice_int(model.plates.len()),
                model.plates.as_ptr(),
                index.spaixd.as_ptr(),
                index.spaixi.as_ptr()
            )
        );
        Ok(())
    }

    // DLA

    pub fn dlaopn(&mut self, fname: &str, ftype: &str, ifname: &str, ncomch: SpiceInt) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let ftype = cstr(ftype)?;
        let ifname = cstr(ifname)?;
        let mut handle = 0;
        native!(
            self,
            dlaopn_c(
                fname.as_ptr(),
                ftype.as_ptr(),
                ifname.as_ptr(),
                ncomch,
                &mut handle
            )
        );
        Ok(handle)
    }

    /// Begin a new segment.
    pub fn dlabns(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, dlabns_c(handle));
        Ok(())
    }

    /// End the current segment.
    pub fn dlaens(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, dlaens_c(handle));
        Ok(())
    }

    /// First segment in the file.
    pub fn dlabfs(&mut self, handle: SpiceInt) -> Result<Option<DlaDescr>> {
        let mut dladsc = DlaDescr::default();
        let mut fnd = SPICEFALSE;
        native!(self, dlabfs_c(handle, &mut dladsc, &mut fnd));
        Ok(found(fnd, dladsc))
    }

    /// Last segment in the file.
    pub fn dlabbs(&mut self, handle: SpiceInt) -> Result<Option<DlaDescr>> {
        let mut dladsc = DlaDescr::default();
        let mut fnd = SPICEFALSE;
        native!(self, dlabbs_c(handle, &mut dladsc, &mut fnd));
        Ok(found(fnd, dladsc))
    }

    pub fn dlafns(&mut self, handle: SpiceInt, dladsc: &DlaDescr) -> Result<Option<DlaDescr>> {
        let mut nxtdsc = DlaDescr::default();
        let mut fnd = SPICEFALSE;
        native!(self, dlafns_c(handle, dladsc, &mut nxtdsc, &mut fnd));
        Ok(found(fnd, nxtdsc))
    }

    pub fn dlafps(&mut self, handle: SpiceInt, dladsc: &DlaDescr) -> Result<Option<DlaDescr>> {
        let mut prvdsc = DlaDescr::default();
        let mut fnd = SPICEFALSE;
        native!(self, dlafps_c(handle, dladsc, &mut prvdsc, &mut fnd));
        Ok(found(fnd, prvdsc))
    }

    /// Every segment descriptor in the file, in order.
    pub fn dla_segments(&mut self, handle: SpiceInt) -> Result<Vec<DlaDescr>> {
        let mut segments = vec![];
        let mut next = self.dlabfs(handle)?;
        while let Some(dladsc) = next {
            segments.push(dladsc);
            next = self.dlafns(handle, &dladsc)?;
        }
        Ok(segments)
    }

    /// Surface points at the given `(lon, lat)` pairs.
    pub fn latsrf(
        &mut self,
        method: &str,
        target: &str,
        et: f64,
        fixref: &str,
        lonlat: &[[f64; 2]],
    ) -> Result<Vec<[f64; 3]>> {
        let method = cstr(method)?;
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let mut srfpts = vec![[0.0; 3]; lonlat.len()];
        native!(
            self,
            latsrf_c(
                method.as_ptr(),
                target.as_ptr(),
                et,
                fixref.as_ptr(),
                spice_int(lonlat.len()),
                lonlat.as_ptr(),
                srfpts.as_mut_ptr()
            )
        );
        Ok(srfpts)
    }

    /// Outward unit normals at surface points.
    pub fn srfnrm(
        &mut self,
        method: &str,
        target: &str,
        et: f64,
        fixref: &str,
        srfpts: &[[f64; 3]],
    ) -> Result<Vec<[f64; 3]>> {
        let method = cstr(method)?;
        let target = cstr(target)?;
        let fixref = cstr(fixref)?;
        let mut normls = vec![[0.0; 3]; srfpts.len()];
        native!(
            self,
            srfnrm_c(
                method.as_ptr(),
                target.as_ptr(),
                et,
                fixref.as_ptr(),
                spice_int(srfpts.len()),
                srfpts.as_ptr(),
                normls.as_mut_ptr()
            )
        );
        Ok(normls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_layouts() {
        // dskxsi_c and the DLA search routines write straight into these
        assert_eq!(std::mem::size_of::<DlaDescr>(), 8 * std::mem::size_of::<SpiceInt>());
        assert_eq!(DskDescr::default().corpar.len(), NSYPAR);
        assert_eq!(Type2Index::default().spaixd.len(), SPAISZ);
    }
}
