//! SPK ephemerides: reading states and positions, and writing segments.
//!
//! States are `[x, y, z, vx, vy, vz]` in km and km/s. Light times are in seconds.

use super::{cstr, found};
use crate::consts::daf::{SPK_DSCSIZ, SPK_ND, SPK_NI};
use crate::{AsSpiceCell, DoubleCell, IntCell, Result, SpiceContext, SpiceInt};
use cspice_marshal::{FixedString, SPICEFALSE, array, spice_int, to_bool};
use log::trace;

/// Segment identifier length, including the terminator.
const SIDLEN: usize = 41;

/// Unpacked SPK segment descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpkSegment {
    pub body: SpiceInt,
    pub center: SpiceInt,
    pub frame: SpiceInt,
    pub type_: SpiceInt,
    pub first: f64,
    pub last: f64,
    pub baddr: SpiceInt,
    pub eaddr: SpiceInt,
}

/// Number of whole `recsz`-sized records in `data`, failing if there is a partial one.
fn record_count(what: &'static str, data: &[f64], recsz: usize) -> Result<SpiceInt> {
    let n = data.len() / recsz.max(1);
    array::check_len(what, n * recsz, data.len())?;
    Ok(spice_int(n))
}

impl SpiceContext<'_> {
    /// State of `targ` relative to `obs` in frame `ref_`, with aberration corrections
    /// `abcorr`. Returns `(state, light_time)`.
    pub fn spkezr(&mut self, targ: &str, et: f64, ref_: &str, abcorr: &str, obs: &str) -> Result<([f64; 6], f64)> {
        let targ = cstr(targ)?;
        let ref_ = cstr(ref_)?;
        let abcorr = cstr(abcorr)?;
        let obs = cstr(obs)?;
        let mut starg = [0.0; 6];
        let mut lt = 0.0;
        native!(
            self,
            spkezr_c(
                targ.as_ptr(),
                et,
                ref_.as_ptr(),
                abcorr.as_ptr(),
                obs.as_ptr(),
                starg.as_mut_ptr(),
                &mut lt
            )
        );
        Ok((starg, lt))
    }

    pub fn spkezr_batch(
        &mut self,
        targ: &str,
        ets: &[f64],
        ref_: &str,
        abcorr: &str,
        obs: &str,
    ) -> Result<Vec<([f64; 6], f64)>> {
        trace!("spkezr {targ} wrt {obs} over {} epochs", ets.len());
        ets.iter()
            .map(|&et| self.spkezr(targ, et, ref_, abcorr, obs))
            .collect()
    }

    /// Position of `targ` relative to `obs`. Returns `(position, light_time)`.
    pub fn spkpos(&mut self, targ: &str, et: f64, ref_: &str, abcorr: &str, obs: &str) -> Result<([f64; 3], f64)> {
        let targ = cstr(targ)?;
        let ref_ = cstr(ref_)?;
        let abcorr = cstr(abcorr)?;
        let obs = cstr(obs)?;
        let mut ptarg = [0.0; 3];
        let mut lt = 0.0;
        native!(
            self,
            spkpos_c(
                targ.as_ptr(),
                et,
                ref_.as_ptr(),
                abcorr.as_ptr(),
                obs.as_ptr(),
                ptarg.as_mut_ptr(),
                &mut lt
            )
        );
        Ok((ptarg, lt))
    }

    pub fn spkpos_batch(
        &mut self,
        targ: &str,
        ets: &[f64],
        ref_: &str,
        abcorr: &str,
        obs: &str,
    ) -> Result<Vec<([f64; 3], f64)>> {
        trace!("spkpos {targ} wrt {obs} over {} epochs", ets.len());
        ets.iter()
            .map(|&et| self.spkpos(targ, et, ref_, abcorr, obs))
            .collect()
    }

    pub fn spkez(&mut self, targ: SpiceInt, et: f64, ref_: &str, abcorr: &str, obs: SpiceInt) -> Result<([f64; 6], f64)> {
        let ref_ = cstr(ref_)?;
        let abcorr = cstr(abcorr)?;
        let mut starg = [0.0; 6];
        let mut lt = 0.0;
        native!(
            self,
            spkez_c(targ, et, ref_.as_ptr(), abcorr.as_ptr(), obs, starg.as_mut_ptr(), &mut lt)
        );
        Ok((starg, lt))
    }

    pub fn spkezp(&mut self, targ: SpiceInt, et: f64, ref_: &str, abcorr: &str, obs: SpiceInt) -> Result<([f64; 3], f64)> {
        let ref_ = cstr(ref_)?;
        let abcorr = cstr(abcorr)?;
        let mut ptarg = [0.0; 3];
        let mut lt = 0.0;
        native!(
            self,
            spkezp_c(targ, et, ref_.as_ptr(), abcorr.as_ptr(), obs, ptarg.as_mut_ptr(), &mut lt)
        );
        Ok((ptarg, lt))
    }

    /// Geometric state, without aberration corrections.
    pub fn spkgeo(&mut self, targ: SpiceInt, et: f64, ref_: &str, obs: SpiceInt) -> Result<([f64; 6], f64)> {
        let ref_ = cstr(ref_)?;
        let mut state = [0.0; 6];
        let mut lt = 0.0;
        native!(
            self,
            spkgeo_c(targ, et, ref_.as_ptr(), obs, state.as_mut_ptr(), &mut lt)
        );
        Ok((state, lt))
    }

    pub fn spkgps(&mut self, targ: SpiceInt, et: f64, ref_: &str, obs: SpiceInt) -> Result<([f64; 3], f64)> {
        let ref_ = cstr(ref_)?;
        let mut pos = [0.0; 3];
        let mut lt = 0.0;
        native!(
            self,
            spkgps_c(targ, et, ref_.as_ptr(), obs, pos.as_mut_ptr(), &mut lt)
        );
        Ok((pos, lt))
    }

    /// State relative to the solar system barycentre.
    pub fn spkssb(&mut self, targ: SpiceInt, et: f64, ref_: &str) -> Result<[f64; 6]> {
        let ref_ = cstr(ref_)?;
        let mut starg = [0.0; 6];
        native!(self, spkssb_c(targ, et, ref_.as_ptr(), starg.as_mut_ptr()));
        Ok(starg)
    }

    /// Aberration-corrected state with light time derivative. Returns
    /// `(state, lt, dlt)`.
    pub fn spkacs(
        &mut self,
        targ: SpiceInt,
        et: f64,
        ref_: &str,
        abcorr: &str,
        obs: SpiceInt,
    ) -> Result<([f64; 6], f64, f64)> {
        let ref_ = cstr(ref_)?;
        let abcorr = cstr(abcorr)?;
        let mut starg = [0.0; 6];
        let mut lt = 0.0;
        let mut dlt = 0.0;
        native!(
            self,
            spkacs_c(
                targ,
                et,
                ref_.as_ptr(),
                abcorr.as_ptr(),
                obs,
                starg.as_mut_ptr(),
                &mut lt,
                &mut dlt
            )
        );
        Ok((starg, lt, dlt))
    }

    /// Apparent position of `targ` as seen from an observer with barycentric state
    /// `sobs`.
    pub fn spkapo(
        &mut self,
        targ: SpiceInt,
        et: f64,
        ref_: &str,
        sobs: &[f64; 6],
        abcorr: &str,
    ) -> Result<([f64; 3], f64)> {
        let ref_ = cstr(ref_)?;
        let abcorr = cstr(abcorr)?;
        let mut ptarg = [0.0; 3];
        let mut lt = 0.0;
        native!(
            self,
            spkapo_c(
                targ,
                et,
                ref_.as_ptr(),
                sobs.as_ptr(),
                abcorr.as_ptr(),
                ptarg.as_mut_ptr(),
                &mut lt
            )
        );
        Ok((ptarg, lt))
    }

    pub fn spkapp(
        &mut self,
        targ: SpiceInt,
        et: f64,
        ref_: &str,
        sobs: &[f64; 6],
        abcorr: &str,
    ) -> Result<([f64; 6], f64)> {
        let ref_ = cstr(ref_)?;
        let abcorr = cstr(abcorr)?;
        let mut starg = [0.0; 6];
        let mut lt = 0.0;
        native!(
            self,
            spkapp_c(
                targ,
                et,
                ref_.as_ptr(),
                sobs.as_ptr(),
                abcorr.as_ptr(),
                starg.as_mut_ptr(),
                &mut lt
            )
        );
        Ok((starg, lt))
    }

    /// Apparent state from an observer's barycentric state and acceleration. Returns
    /// `(state, lt, dlt)`.
    pub fn spkaps(
        &mut self,
        targ: SpiceInt,
        et: f64,
        ref_: &str,
        abcorr: &str,
        stobs: &[f64; 6],
        accobs: &[f64; 3],
    ) -> Result<([f64; 6], f64, f64)> {
        let ref_ = cstr(ref_)?;
        let abcorr = cstr(abcorr)?;
        let mut starg = [0.0; 6];
        let mut lt = 0.0;
        let mut dlt = 0.0;
        native!(
            self,
            spkaps_c(
                targ,
                et,
                ref_.as_ptr(),
                abcorr.as_ptr(),
                stobs.as_ptr(),
                accobs.as_ptr(),
                starg.as_mut_ptr(),
                &mut lt,
                &mut dlt
            )
        );
        Ok((starg, lt, dlt))
    }

    /// Light-time corrected state. Returns `(state, lt, dlt)`.
    pub fn spkltc(
        &mut self,
        targ: SpiceInt,
        et: f64,
        ref_: &str,
        abcorr: &str,
        stobs: &[f64; 6],
    ) -> Result<([f64; 6], f64, f64)> {
        let ref_ = cstr(ref_)?;
        let abcorr = cstr(abcorr)?;
        let mut starg = [0.0; 6];
        let mut lt = 0.0;
        let mut dlt = 0.0;
        native!(
            self,
            spkltc_c(
                targ,
                et,
                ref_.as_ptr(),
                abcorr.as_ptr(),
                stobs.as_ptr(),
                starg.as_mut_ptr(),
                &mut lt,
                &mut dlt
            )
        );
        Ok((starg, lt, dlt))
    }

    /// State of `target` relative to an observer at a constant position `obspos` in
    /// frame `obsref` centred on `obsctr`.
    pub fn spkcpo(
        &mut self,
        target: &str,
        et: f64,
        outref: &str,
        refloc: &str,
        abcorr: &str,
        obspos: &[f64; 3],
        obsctr: &str,
        obsref: &str,
    ) -> Result<([f64; 6], f64)> {
        let target = cstr(target)?;
        let outref = cstr(outref)?;
        let refloc = cstr(refloc)?;
        let abcorr = cstr(abcorr)?;
        let obsctr = cstr(obsctr)?;
        let obsref = cstr(obsref)?;
        let mut state = [0.0; 6];
        let mut lt = 0.0;
        native!(
            self,
            spkcpo_c(
                target.as_ptr(),
                et,
                outref.as_ptr(),
                refloc.as_ptr(),
                abcorr.as_ptr(),
                obspos.as_ptr(),
                obsctr.as_ptr(),
                obsref.as_ptr(),
                state.as_mut_ptr(),
                &mut lt
            )
        );
        Ok((state, lt))
    }

    /// State of a target at a constant position `trgpos`, relative to `obsrvr`.
    pub fn spkcpt(
        &mut self,
        trgpos: &[f64; 3],
        trgctr: &str,
        trgref: &str,
        et: f64,
        outref: &str,
        refloc: &str,
        abcorr: &str,
        obsrvr: &str,
    ) -> Result<([f64; 6], f64)> {
        let trgctr = cstr(trgctr)?;
        let trgref = cstr(trgref)?;
        let outref = cstr(outref)?;
        let refloc = cstr(refloc)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let mut state = [0.0; 6];
        let mut lt = 0.0;
        native!(
            self,
            spkcpt_c(
                trgpos.as_ptr(),
                trgctr.as_ptr(),
                trgref.as_ptr(),
                et,
                outref.as_ptr(),
                refloc.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                state.as_mut_ptr(),
                &mut lt
            )
        );
        Ok((state, lt))
    }

    /// State of `target` relative to an observer with constant velocity, whose state
    /// `obssta` is given at epoch `obsepc`.
    pub fn spkcvo(
        &mut self,
        target: &str,
        et: f64,
        outref: &str,
        refloc: &str,
        abcorr: &str,
        obssta: &[f64; 6],
        obsepc: f64,
        obsctr: &str,
        obsref: &str,
    ) -> Result<([f64; 6], f64)> {
        let target = cstr(target)?;
        let outref = cstr(outref)?;
        let refloc = cstr(refloc)?;
        let abcorr = cstr(abcorr)?;
        let obsctr = cstr(obsctr)?;
        let obsref = cstr(obsref)?;
        let mut state = [0.0; 6];
        let mut lt = 0.0;
        native!(
            self,
            spkcvo_c(
                target.as_ptr(),
                et,
                outref.as_ptr(),
                refloc.as_ptr(),
                abcorr.as_ptr(),
                obssta.as_ptr(),
                obsepc,
                obsctr.as_ptr(),
                obsref.as_ptr(),
                state.as_mut_ptr(),
                &mut lt
            )
        );
        Ok((state, lt))
    }

    /// State of a constant-velocity target relative to `obsrvr`.
    pub fn spkcvt(
        &mut self,
        trgsta: &[f64; 6],
        trgepc: f64,
        trgctr: &str,
        trgref: &str,
        et: f64,
        outref: &str,
        refloc: &str,
        abcorr: &str,
        obsrvr: &str,
    ) -> Result<([f64; 6], f64)> {
        let trgctr = cstr(trgctr)?;
        let trgref = cstr(trgref)?;
        let outref = cstr(outref)?;
        let refloc = cstr(refloc)?;
        let abcorr = cstr(abcorr)?;
        let obsrvr = cstr(obsrvr)?;
        let mut state = [0.0; 6];
        let mut lt = 0.0;
        native!(
            self,
            spkcvt_c(
                trgsta.as_ptr(),
                trgepc,
                trgctr.as_ptr(),
                trgref.as_ptr(),
                et,
                outref.as_ptr(),
                refloc.as_ptr(),
                abcorr.as_ptr(),
                obsrvr.as_ptr(),
                state.as_mut_ptr(),
                &mut lt
            )
        );
        Ok((state, lt))
    }

    /// Evaluate one segment directly. Returns `(frame, state, center)`.
    pub fn spkpvn(
        &mut self,
        handle: SpiceInt,
        descr: &[f64; SPK_DSCSIZ],
        et: f64,
    ) -> Result<(SpiceInt, [f64; 6], SpiceInt)> {
        let mut ref_ = 0;
        let mut state = [0.0; 6];
        let mut center = 0;
        native!(
            self,
            spkpvn_c(handle, descr.as_ptr(), et, &mut ref_, state.as_mut_ptr(), &mut center)
        );
        Ok((ref_, state, center))
    }

    /// Search loaded SPK files for a segment covering `body` at `et`. Returns
    /// `(handle, descr, ident)`.
    pub fn spksfs(&mut self, body: SpiceInt, et: f64) -> Result<Option<(SpiceInt, [f64; SPK_DSCSIZ], String)>> {
        let mut handle = 0;
        let mut descr = [0.0; SPK_DSCSIZ];
        let mut ident = FixedString::new(SIDLEN);
        let mut fnd = SPICEFALSE;
        native!(
            self,
            spksfs_c(
                body,
                et,
                ident.lenout(),
                &mut handle,
                descr.as_mut_ptr(),
                ident.as_mut_ptr(),
                &mut fnd
            )
        );
        if !to_bool(fnd) {
            return Ok(None);
        }
        Ok(Some((handle, descr, ident.decode()?)))
    }

    /// Load an SPK for use by the readers. Prefer [`furnsh`](Self::furnsh).
    pub fn spklef(&mut self, filename: &str) -> Result<SpiceInt> {
        let filename = cstr(filename)?;
        let mut handle = 0;
        native!(self, spklef_c(filename.as_ptr(), &mut handle));
        Ok(handle)
    }

    pub fn spkuef(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, spkuef_c(handle));
        Ok(())
    }

    /// Add the IDs of the bodies in an SPK file to `ids`.
    pub fn spkobj(&mut self, spkfnm: &str, ids: &mut IntCell) -> Result<()> {
        let spkfnm = cstr(spkfnm)?;
        native!(self, spkobj_c(spkfnm.as_ptr(), ids.as_spice_cell()));
        Ok(())
    }

    /// Add the coverage of `idcode` in an SPK file to the window `cover`.
    pub fn spkcov(&mut self, spkfnm: &str, idcode: SpiceInt, cover: &mut DoubleCell) -> Result<()> {
        let spkfnm = cstr(spkfnm)?;
        native!(
            self,
            spkcov_c(spkfnm.as_ptr(), idcode, cover.as_spice_cell())
        );
        Ok(())
    }

    pub fn spkuds(&mut self, descr: &[f64; SPK_DSCSIZ]) -> Result<SpkSegment> {
        let mut s = SpkSegment::default();
        native!(
            self,
            spkuds_c(
                descr.as_ptr(),
                &mut s.body,
                &mut s.center,
                &mut s.frame,
                &mut s.type_,
                &mut s.first,
                &mut s.last,
                &mut s.baddr,
                &mut s.eaddr
            )
        );
        Ok(s)
    }

    /// Pack an SPK descriptor.
    pub fn spkpds(
        &mut self,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        type_: SpiceInt,
        first: f64,
        last: f64,
    ) -> Result<[f64; SPK_DSCSIZ]> {
        let frame = cstr(frame)?;
        let mut descr = [0.0; SPK_DSCSIZ];
        native!(
            self,
            spkpds_c(body, center, frame.as_ptr(), type_, first, last, descr.as_mut_ptr())
        );
        Ok(descr)
    }

    /// Copy the part of a segment between `begin` and `end` into the file open for
    /// writing as `newh`.
    pub fn spksub(
        &mut self,
        handle: SpiceInt,
        descr: &[f64; SPK_DSCSIZ],
        ident: &str,
        begin: f64,
        end: f64,
        newh: SpiceInt,
    ) -> Result<()> {
        let ident = cstr(ident)?;
        native!(
            self,
            spksub_c(handle, descr.as_ptr(), ident.as_ptr(), begin, end, newh)
        );
        Ok(())
    }

    // Writing

    /// Create a new SPK file, reserving `ncomch` characters for comments.
    pub fn spkopn(&mut self, fname: &str, ifname: &str, ncomch: SpiceInt) -> Result<SpiceInt> {
        let fname = cstr(fname)?;
        let ifname = cstr(ifname)?;
        let mut handle = 0;
        native!(
            self,
            spkopn_c(fname.as_ptr(), ifname.as_ptr(), ncomch, &mut handle)
        );
        Ok(handle)
    }

    /// Open an existing SPK file to append segments.
    pub fn spkopa(&mut self, file: &str) -> Result<SpiceInt> {
        let file = cstr(file)?;
        let mut handle = 0;
        native!(self, spkopa_c(file.as_ptr(), &mut handle));
        Ok(handle)
    }

    pub fn spkcls(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, spkcls_c(handle));
        Ok(())
    }

    /// Type 2 segment: Chebyshev position coefficients. `cdata` holds whole records
    /// of `3 * (polydg + 1)` coefficients.
    pub fn spkw02(
        &mut self,
        handle: SpiceInt,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        intlen: f64,
        polydg: SpiceInt,
        cdata: &[f64],
        btime: f64,
    ) -> Result<()> {
        let n = record_count("spkw02 cdata", cdata, 3 * (polydg.max(0) as usize + 1))?;
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            spkw02_c(
                handle,
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                intlen,
                n,
                polydg,
                cdata.as_ptr(),
                btime
            )
        );
        Ok(())
    }

    /// Type 3 segment: Chebyshev position and velocity coefficients. `cdata` holds
    /// whole records of `6 * (polydg + 1)` coefficients.
    pub fn spkw03(
        &mut self,
        handle: SpiceInt,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        intlen: f64,
        polydg: SpiceInt,
        cdata: &[f64],
        btime: f64,
    ) -> Result<()> {
        let n = record_count("spkw03 cdata", cdata, 6 * (polydg.max(0) as usize + 1))?;
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            spkw03_c(
                handle,
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                intlen,
                n,
                polydg,
                cdata.as_ptr(),
                btime
            )
        );
        Ok(())
    }

    /// Type 5 segment: two-body propagation between discrete states.
    pub fn spkw05(
        &mut self,
        handle: SpiceInt,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        gm: f64,
        states: &[[f64; 6]],
        epochs: &[f64],
    ) -> Result<()> {
        array::check_len("spkw05 epochs", states.len(), epochs.len())?;
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            spkw05_c(
                handle,
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                gm,
                spice_int(states.len()),
                states.as_ptr(),
                epochs.as_ptr()
            )
        );
        Ok(())
    }

    /// Type 8 segment: Lagrange interpolation of equally spaced states.
    pub fn spkw08(
        &mut self,
        handle: SpiceInt,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        degree: SpiceInt,
        states: &[[f64; 6]],
        epoch1: f64,
        step: f64,
    ) -> Result<()> {
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            spkw08_c(
                handle,
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                degree,
                spice_int(states.len()),
                states.as_ptr(),
                epoch1,
                step
            )
        );
        Ok(())
    }

    /// Type 9 segment: Lagrange interpolation of unequally spaced states.
    pub fn spkw09(
        &mut self,
        handle: SpiceInt,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        degree: SpiceInt,
        states: &[[f64; 6]],
        epochs: &[f64],
    ) -> Result<()> {
        array::check_len("spkw09 epochs", states.len(), epochs.len())?;
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            spkw09_c(
                handle,
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                degree,
                spice_int(states.len()),
                states.as_ptr(),
                epochs.as_ptr()
            )
        );
        Ok(())
    }

    /// Type 10 segment: NORAD two-line element sets. `elems` holds one set of
    /// [`TLE_ELEMS`](crate::consts::elements::TLE_ELEMS) values per epoch.
    pub fn spkw10(
        &mut self,
        handle: SpiceInt,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        consts: &[f64; crate::consts::elements::SPKW10_CONSTS],
        elems: &[f64],
        epochs: &[f64],
    ) -> Result<()> {
        let n = record_count("spkw10 elems", elems, crate::consts::elements::TLE_ELEMS)?;
        array::check_len("spkw10 epochs", epochs.len(), n as usize)?;
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            spkw10_c(
                handle,
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                consts.as_ptr(),
                n,
                elems.as_ptr(),
                epochs.as_ptr()
            )
        );
        Ok(())
    }

    /// Type 12 segment: Hermite interpolation of equally spaced states.
    pub fn spkw12(
        &mut self,
        handle: SpiceInt,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        degree: SpiceInt,
        states: &[[f64; 6]],
        epoch0: f64,
        step: f64,
    ) -> Result<()> {
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            spkw12_c(
                handle,
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                degree,
                spice_int(states.len()),
                states.as_ptr(),
                epoch0,
                step
            )
        );
        Ok(())
    }

    /// Type 13 segment: Hermite interpolation of unequally spaced states.
    pub fn spkw13(
        &mut self,
        handle: SpiceInt,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        degree: SpiceInt,
        states: &[[f64; 6]],
        epochs: &[f64],
    ) -> Result<()> {
        array::check_len("spkw13 epochs", states.len(), epochs.len())?;
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            spkw13_c(
                handle,
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                degree,
                spice_int(states.len()),
                states.as_ptr(),
                epochs.as_ptr()
            )
        );
        Ok(())
    }

    /// Type 15 segment: precessing conic propagation.
    pub fn spkw15(
        &mut self,
        handle: SpiceInt,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        epoch: f64,
        tp: &[f64; 3],
        pa: &[f64; 3],
        p: f64,
        ecc: f64,
        j2flg: f64,
        pv: &[f64; 3],
        gm: f64,
        j2: f64,
        radius: f64,
    ) -> Result<()> {
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            spkw15_c(
                handle,
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                epoch,
                tp.as_ptr(),
                pa.as_ptr(),
                p,
                ecc,
                j2flg,
                pv.as_ptr(),
                gm,
                j2,
                radius
            )
        );
        Ok(())
    }

    /// Type 17 segment: equinoctial elements.
    pub fn spkw17(
        &mut self,
        handle: SpiceInt,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        epoch: f64,
        eqel: &[f64; 9],
        rapol: f64,
        decpol: f64,
    ) -> Result<()> {
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            spkw17_c(
                handle,
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                epoch,
                eqel.as_ptr(),
                rapol,
                decpol
            )
        );
        Ok(())
    }

    /// Type 18 segment: MEX/Rosetta orbit files. Subtype 0 packets hold 12 values
    /// (Hermite), subtype 1 packets hold 6 (Lagrange).
    pub fn spkw18(
        &mut self,
        handle: SpiceInt,
        subtyp: SpiceInt,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        degree: SpiceInt,
        packts: &[f64],
        epochs: &[f64],
    ) -> Result<()> {
        let pktsiz = if subtyp == 0 { 12 } else { 6 };
        let n = record_count("spkw18 packets", packts, pktsiz)?;
        array::check_len("spkw18 epochs", n as usize, epochs.len())?;
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            spkw18_c(
                handle,
                subtyp,
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                degree,
                n,
                packts.as_ptr().cast(),
                epochs.as_ptr()
            )
        );
        Ok(())
    }

    /// Type 20 segment: Chebyshev velocity coefficients. `cdata` holds whole records of
    /// `3 * (polydg + 1) + 3` values.
    pub fn spkw20(
        &mut self,
        handle: SpiceInt,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        segid: &str,
        intlen: f64,
        polydg: SpiceInt,
        cdata: &[f64],
        dscale: f64,
        tscale: f64,
        initjd: f64,
        initfr: f64,
    ) -> Result<()> {
        let n = record_count("spkw20 cdata", cdata, 3 * (polydg.max(0) as usize + 1) + 3)?;
        let frame = cstr(frame)?;
        let segid = cstr(segid)?;
        native!(
            self,
            spkw20_c(
                handle,
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                segid.as_ptr(),
                intlen,
                n,
                polydg,
                cdata.as_ptr(),
                dscale,
                tscale,
                initjd,
                initfr
            )
        );
        Ok(())
    }

    /// Add Chebyshev coefficient sets to the type 14 segment begun by
    /// [`spk14b`](Self::spk14b).
    pub fn spk14a(&mut self, handle: SpiceInt, coeffs: &[f64], epochs: &[f64]) -> Result<()> {
        native!(
            self,
            spk14a_c(
                handle,
                spice_int(epochs.len()),
                array::ptr_or_null(coeffs),
                array::ptr_or_null(epochs)
            )
        );
        Ok(())
    }

    pub fn spk14b(
        &mut self,
        handle: SpiceInt,
        segid: &str,
        body: SpiceInt,
        center: SpiceInt,
        frame: &str,
        first: f64,
        last: f64,
        chbdeg: SpiceInt,
    ) -> Result<()> {
        let segid = cstr(segid)?;
        let frame = cstr(frame)?;
        native!(
            self,
            spk14b_c(
                handle,
                segid.as_ptr(),
                body,
                center,
                frame.as_ptr(),
                first,
                last,
                chbdeg
            )
        );
        Ok(())
    }

    pub fn spk14e(&mut self, handle: SpiceInt) -> Result<()> {
        native!(self, spk14e_c(handle));
        Ok(())
    }
}

// SPK descriptors are DAF summaries with these dimensions
const _: () = assert!(SPK_DSCSIZ == SPK_ND + SPK_NI.div_ceil(2));
