//! C-kernels (spacecraft and instrument orientation), and binary PCKs.

use super::{cstr, found};
use crate::{AsSpiceCell, DoubleCell, IntCell, Result, SpiceContext, SpiceInt};
use cspice_marshal::{SPICEFALSE, array, from_bool, spice_int};

impl SpiceContext<'_> {
    /// Pointing of `inst` at encoded clock time `sclkdp`, within tolerance `tol`.
    /// Returns `(cmat, clkout)`.
    pub fn ckgp(
        &mut self,
        inst: SpiceInt,
        sclkdp: f64,
        tol: f64,
        ref_: &str,
    ) -> Result<Option<([[f64; 3]; 3], f64)>> {
        let ref_ = cstr(ref_)?;
        let mut cmat = [[0.0; 3]; 3];
        let mut clkout = 0.0;
        let mut fnd = SPICEFALSE;
        native!(
            self,
            ckgp_c(
                inst,
                sclkdp,
                tol,
                ref_.as_ptr(),
                cmat.as_mut_ptr(),
                &mut clkout,
                &mut fnd
            )
        );
        Ok(found(fnd, (cmat, clkout)))
    }

    /// Pointing and angular velocity. Returns `(cmat, av, clkout)`.
    pub fn ckgpav(
        &mut self,
        inst: SpiceInt,
        sclkdp: f64,
        tol: f64,
        ref_: &str,
    ) -> Result<Option<([[f64; 3]; 3], [f64; 3], f64)>> {
        let ref_ = cstr(ref_)?;
        let mut cmat = [[0.0; 3]; 3];
        let mut av = [0.0; 3];
        let mut clkout = 0.0;
        let mut fnd = SPICEFALSE;
        native!(
            self,
            ckgpav_c(
                inst,
                sclkdp,
                tol,
                ref_.as_ptr(),
                cmat.as_mut_ptr(),
                av.as_mut_ptr(),
                &mut clkout,
                &mut fnd
            )
        );
        Ok(found(fnd, (cmat, av, clkout)))
    }

    pub fn cklpf(&mut self, fname: &str) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let mut handle = 0;
        native!(self, cklpf_c(fname.as_ptr(), &mut handle));
        Ok(handle)
    }

    pub fn ckupf(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, ckupf_c(handle));
        Ok(())
    }

    pub fn ckobj(&mut self, ckfnm: &str, ids: &mut IntCell) -> Result<()> {
        let ckfnm = cstr(ckfnm)?;
        native!(self, ckobj_c(ckfnm.as_ptr(), ids.as_spice_cell()));
        Ok(())
    }

    /// Add the coverage of `idcode` to `cover`. `level` is `"SEGMENT"` or
    /// `"INTERVAL"`; `timsys` is `"SCLK"` or `"TDB"`.
    pub fn ckcov(
        &mut self,
        ckfnm: &str,
        idcode: SpiceInt,
        needav: bool,
        level: &str,
        tol: f64,
        timsys: &str,
        cover: &mut DoubleCell,
    ) -> Result<()> {
        let ckfnm = cstr(ckfnm)?;
        let level = cstr(level)?;
        let timsys = cstr(timsys)?;
        native!(
            self,
            ckcov_c(
                ckfnm.as_ptr(),
                idcode,
                from_bool(needav),
                level.as_ptr(),
                tol,
                timsys.as_ptr(),
                cover.as_spice_cell()
            )
        );
        Ok(())
    }

    /// Rotation from the base frame of `inst` at `et`. Returns `(rotate, ref_)`.
    pub fn ckfrot(&mut self, inst: SpiceInt, et: f64) -> Result<Option<([[f64; 3]; 3], SpiceInt)>> {
        let mut rotate = [[0.0; 3]; 3];
        let mut ref_ = 0;
        let mut fnd = SPICEFALSE;
        native!(
            self,
            ckfrot_c(inst, et, rotate.as_mut_ptr(), &mut ref_, &mut fnd)
        );
        Ok(found(fnd, (rotate, ref_)))
    }

    pub fn ckfxfm(&mut self, inst: SpiceInt, et: f64) -> Result<Option<([[f64; 6]; 6], SpiceInt)>> {
        let mut xform = [[0.0; 6]; 6];
        let mut ref_ = 0;
        let mut fnd = SPICEFALSE;
        native!(
            self,
            ckfxfm_c(inst, et, xform.as_mut_ptr(), &mut ref_, &mut fnd)
        );
        Ok(found(fnd, (xform, ref_)))
    }

    /// Clock or spacecraft ID associated with a CK ID. `meta` is `"SPK_ID"` or
    /// `"SCLK_ID"`.
    pub fn ckmeta(&mut self, ckid: SpiceInt, meta: &str) -> Result<SpiceInt> {
        let meta = cstr(meta)?;
        let mut idcode = 0;
        native!(self, ckmeta_c(ckid, meta.as_ptr(), &mut idcode));
        Ok(idcode)
    }

    pub fn ckopn(&mut self, fname: &str, ifname: &str, ncomch: SpiceInt) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let ifname = cstr(ifname)?;
        let mut handle = 0;
        native!(
            self,
            ckopn_c(fname.as_ptr(), ifname.as_ptr(), ncomch, &mut handle)
        );
        Ok(handle)
    }

    pub fn ckcls(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, ckcls_c(handle));
        Ok(())
    }

    /// Type 1 segment: discrete pointing instances. `avvs` is ignored by readers
    /// unless `avflag` is set, but must still have one entry per record.
    pub fn ckw01(
        &mut self,
        handle: SpiceInt,
        begtim: f64,
        endtim: f64,
        inst: SpiceInt,
        ref_: &str,
        avflag: bool,
        segid: &str,
        sclkdp: &[f64],
        quats: &[[f64; 4]],
        avvs: &[[f64; 3]],
    ) -> Result<()> {
        array::check_len("ckw01 quats", sclkdp.len(), quats.len())?;
        array::check_len("ckw01 avvs", sclkdp.len(), avvs.len())?;
        let ref_ = cstr(ref_)?;
        let segid = cstr(segid)?;
        native!(
            self,
            ckw01_c(
                handle,
                begtim,
                endtim,
                inst,
                ref_.as_ptr(),
                from_bool(avflag),
                segid.as_ptr(),
                spice_int(sclkdp.len()),
                sclkdp.as_ptr(),
                quats.as_ptr(),
                avvs.as_ptr()
            )
        );
        Ok(())
    }

    /// Type 2 segment: constant angular velocity over intervals.
    pub fn ckw02(
        &mut self,
        handle: SpiceInt,
        begtim: f64,
        endtim: f64,
        inst: SpiceInt,
        ref_: &str,
        segid: &str,
        start: &[f64],
        stop: &[f64],
        quats: &[[f64; 4]],
        avvs: &[[f64; 3]],
        rates: &[f64],
    ) -> Result<()> {
        let nrec = array::common_len("ckw02 records", &[start, stop, rates])?;
        array::check_len("ckw02 quats", nrec, quats.len())?;
        array::check_len("ckw02 avvs", nrec, avvs.len())?;
        let ref_ = cstr(ref_)?;
        let segid = cstr(segid)?;
        native!(
            self,
            ckw02_c(
                handle,
                begtim,
                endtim,
                inst,
                ref_.as_ptr(),
                segid.as_ptr(),
                spice_int(nrec),
                start.as_ptr(),
                stop.as_ptr(),
                quats.as_ptr(),
                avvs.as_ptr(),
                rates.as_ptr()
            )
        );
        Ok(())
    }

    /// Type 3 segment: linearly interpolated pointing, over interpolation intervals
    /// beginning at `starts`.
    pub fn ckw03(
        &mut self,
        handle: SpiceInt,
        begtim: f64,
        endtim: f64,
        inst: SpiceInt,
        ref_: &str,
        avflag: bool,
        segid: &str,
        sclkdp: &[f64],
        quats: &[[f64; 4]],
        avvs: &[[f64; 3]],
        starts: &[f64],
    ) -> Result<()> {
        array::check_len("ckw03 quats", sclkdp.len(), quats.len())?;
        array::check_len("ckw03 avvs", sclkdp.len(), avvs.len())?;
        let ref_ = cstr(ref_)?;
        let segid = cstr(segid)?;
        native!(
            self,
            ckw03_c(
                handle,
                begtim,
                endtim,
                inst,
                ref_.as_ptr(),
                from_bool(avflag),
                segid.as_ptr(),
                spice_int(sclkdp.len()),
                sclkdp.as_ptr(),
                quats.as_ptr(),
                avvs.as_ptr(),
                spice_int(starts.len()),
                starts.as_ptr()
            )
        );
        Ok(())
    }

    /// Type 5 segment: Hermite or Lagrange interpolation of quaternion packets. Packet
    /// sizes by subtype are 8, 4, 14 and 7.
    pub fn ckw05(
        &mut self,
        handle: SpiceInt,
        subtyp: SpiceInt,
        degree: SpiceInt,
        begtim: f64,
        endtim: f64,
        inst: SpiceInt,
        ref_: &str,
        avflag: bool,
        segid: &str,
        sclkdp: &[f64],
        packts: &[f64],
        rate: f64,
        starts: &[f64],
    ) -> Result<()> {
        let pktsiz = match subtyp {
            0 => 8,
            1 => 4,
            2 => 14,
            _ => 7,
        };
        array::check_len("ckw05 packets", sclkdp.len() * pktsiz, packts.len())?;
        let ref_ = cstr(ref_)?;
        let segid = cstr(segid)?;
        native!(
            self,
            ckw05_c(
                handle,
                subtyp,
                degree,
                begtim,
                endtim,
                inst,
                ref_.as_ptr(),
                from_bool(avflag),
                segid.as_ptr(),
                spice_int(sclkdp.len()),
                sclkdp.as_ptr(),
                packts.as_ptr().cast(),
                rate,
                spice_int(starts.len()),
                starts.as_ptr()
            )
        );
        Ok(())
    }

    // Binary PCK

    pub fn pcklof(&mut self, fname: &str) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let mut handle = 0;
        native!(self, pcklof_c(fname.as_ptr(), &mut handle));
        Ok(handle)
    }

    pub fn pckuof(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, pckuof_c(handle));
        Ok(())
    }

    pub fn pckcov(&mut self, pckfnm: &str, idcode: SpiceInt, cover: &mut DoubleCell) -> Result<()> {
        let pckfnm = cstr(pckfnm)?;
        native!(
            self,
            pckcov_c(pckfnm.as_ptr(), idcode, cover.as_spice_cell())
        );
        Ok(())
    }

    /// Add the reference frame class IDs in a binary PCK to `ids`.
    pub fn pckfrm(&mut self, pckfnm: &str, ids: &mut IntCell) -> Result<()> {
        let pckfnm = cstr(pckfnm)?;
        native!(self, pckfrm_c(pckfnm.as_ptr(), ids.as_spice_cell()));
        Ok(())
    }

    pub fn pckopn(&mut self, name: &str, ifname: &str, ncomch: SpiceInt) -> Result<SpiceInt> {
        let name = cstr(name)?;
        let ifname = cstr(ifname)?;
        let mut handle = 0;
        native!(
            self,
            pckopn_c(name.as_ptr(), ifname.as_ptr(), ncomch, &mut handle)
        );
        Ok(handle)
    }

    pub fn pckcls(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, pckcls_c(handle));
        Ok(())
    }

    /// Type 2 PCK segment: Chebyshev Euler angle coefficients. `cdata` holds whole
    /// records of `3 * (polydg + 1)` coefficients.
    pub fn pckw02(
        &mut self,
        handle: SpiceInt,
        clssid: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        intlen: f64,
        polydg: SpiceInt,
        cdata: &[f64],
        btime: f64,
    ) -> Result<()> {
        let recsz = 3 * (polydg.max(0) as usize + 1);
        let n = cdata.len() / recsz;
        array::check_len("pckw02 cdata", n * recsz, cdata.len())?;
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            pckw02_c(
                handle,
                clssid,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                intlen,
                spice_int(n),
                polydg,
                cdata.as_ptr(),
                btime
            )
        );
        Ok(())
    }
}
