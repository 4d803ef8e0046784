//! The native call table.
//!
//! One declaration per CSPICE entry point, with the C prototype transcribed into Rust
//! types. [`CallTable`] holds one optional function pointer per declaration, resolved by
//! symbol name when a library is loaded. Entries the library does not export stay `None`
//! and calling them fails with [`Error::Unbound`](crate::Error::Unbound).
//!
//! Pointer conventions:
//! * fixed-size vectors (`SpiceDouble v[3]`) are `*const SpiceDouble`
//! * fixed-size matrices (`SpiceDouble m[3][3]`) decay to `*const [SpiceDouble; 3]`
//! * matrices and string arrays whose shape is only known at run time are `*const c_void`
//! * every `SpiceCell *` is mutable, since native code initialises the control area even
//!   when only reading

use cspice_marshal::{
    DlaDescr, DskDescr, EkAttDsc, EkSegSum, Ellipse, Plane, SpiceBoolean, SpiceCell, SpiceChar,
    SpiceDouble, SpiceInt,
};
use std::ffi::c_void;

type Str = *const SpiceChar;
type StrOut = *mut SpiceChar;
type Dp = *const SpiceDouble;
type DpOut = *mut SpiceDouble;
type Ip = *const SpiceInt;
type IpOut = *mut SpiceInt;
type Bp = *const SpiceBoolean;
type BOut = *mut SpiceBoolean;
type M2 = *const [SpiceDouble; 2];
type M2Out = *mut [SpiceDouble; 2];
type M3 = *const [SpiceDouble; 3];
type M3Out = *mut [SpiceDouble; 3];
type M4 = *const [SpiceDouble; 4];
type M6 = *const [SpiceDouble; 6];
type M6Out = *mut [SpiceDouble; 6];
type I3 = *const [SpiceInt; 3];
type I3Out = *mut [SpiceInt; 3];
type Cell = *mut SpiceCell;
type Void = *const c_void;
type VoidOut = *mut c_void;
type I = SpiceInt;
type D = SpiceDouble;
type B = SpiceBoolean;
type C = SpiceChar;

macro_rules! call_table {
    ($( fn $name:ident ( $($arg:ident : $ty:ty),* $(,)? ) $(-> $ret:ty)? ; )*) => {
        /// Resolved CSPICE entry points.
        #[derive(Clone, Copy, Default)]
        pub struct CallTable {
            $( pub $name: Option<unsafe extern "C" fn($($arg: $ty),*) $(-> $ret)?>, )*
        }

        impl CallTable {
            /// Every declared symbol, in declaration order.
            pub const SYMBOLS: &'static [&'static str] = &[$(stringify!($name)),*];

            /// Look up every declared symbol in `lib`.
            ///
            /// # Safety
            ///
            /// `lib` must be a CSPICE build whose exported functions match the prototypes
            /// declared here, and must outlive every use of the returned table.
            pub unsafe fn resolve(lib: &libloading::Library) -> Self {
                Self {
                    $(
                        $name: unsafe {
                            lib.get::<unsafe extern "C" fn($($ty),*) $(-> $ret)?>(
                                concat!(stringify!($name), "\0").as_bytes(),
                            )
                        }
                        .ok()
                        .map(|sym| *sym),
                    )*
                }
            }

            /// `(symbol, is_bound)` for every declared symbol.
            pub fn entries(&self) -> Vec<(&'static str, bool)> {
                vec![$( (stringify!($name), self.$name.is_some()) ),*]
            }
        }
    };
}

impl CallTable {
    pub fn bound(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter_map(|(name, bound)| bound.then_some(name))
            .collect()
    }

    pub fn unbound(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter_map(|(name, bound)| (!bound).then_some(name))
            .collect()
    }
}

impl std::fmt::Debug for CallTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallTable")
            .field("declared", &Self::SYMBOLS.len())
            .field("bound", &self.bound().len())
            .finish()
    }
}

call_table! {
    // Constants
    fn b1900_c() -> D;
    fn b1950_c() -> D;
    fn clight_c() -> D;
    fn dpmax_c() -> D;
    fn dpmin_c() -> D;
    fn dpr_c() -> D;
    fn halfpi_c() -> D;
    fn intmax_c() -> I;
    fn intmin_c() -> I;
    fn j1900_c() -> D;
    fn j1950_c() -> D;
    fn j2000_c() -> D;
    fn j2100_c() -> D;
    fn jyear_c() -> D;
    fn pi_c() -> D;
    fn rpd_c() -> D;
    fn spd_c() -> D;
    fn twopi_c() -> D;
    fn tyear_c() -> D;

    // 3-vectors
    fn vadd_c(v1: Dp, v2: Dp, vout: DpOut);
    fn vsub_c(v1: Dp, v2: Dp, vout: DpOut);
    fn vcrss_c(v1: Dp, v2: Dp, vout: DpOut);
    fn ucrss_c(v1: Dp, v2: Dp, vout: DpOut);
    fn vequ_c(vin: Dp, vout: DpOut);
    fn vminus_c(v1: Dp, vout: DpOut);
    fn vscl_c(s: D, v1: Dp, vout: DpOut);
    fn vsclip_c(s: D, v: DpOut);
    fn vhat_c(v1: Dp, vout: DpOut);
    fn vhatip_c(v: DpOut);
    fn unorm_c(v1: Dp, vout: DpOut, vmag: DpOut);
    fn vdot_c(v1: Dp, v2: Dp) -> D;
    fn vnorm_c(v1: Dp) -> D;
    fn vdist_c(v1: Dp, v2: Dp) -> D;
    fn vsep_c(v1: Dp, v2: Dp) -> D;
    fn vrel_c(v1: Dp, v2: Dp) -> D;
    fn vzero_c(v: Dp) -> B;
    fn vpack_c(x: D, y: D, z: D, v: DpOut);
    fn vupack_c(v: Dp, x: DpOut, y: DpOut, z: DpOut);
    fn vlcom_c(a: D, v1: Dp, b: D, v2: Dp, sum: DpOut);
    fn vlcom3_c(a: D, v1: Dp, b: D, v2: Dp, c: D, v3: Dp, sum: DpOut);
    fn vproj_c(a: Dp, b: Dp, p: DpOut);
    fn vperp_c(a: Dp, b: Dp, p: DpOut);
    fn vrotv_c(v: Dp, axis: Dp, theta: D, r: DpOut);
    fn vprjp_c(vin: Dp, plane: *const Plane, vout: DpOut);
    fn vprjpi_c(vin: Dp, projpl: *const Plane, invpl: *const Plane, vout: DpOut, found: BOut);
    fn vtmv_c(v1: Dp, matrix: M3, v2: Dp) -> D;
    fn mxv_c(m: M3, vin: Dp, vout: DpOut);
    fn mtxv_c(m: M3, vin: Dp, vout: DpOut);
    fn twovec_c(axdef: Dp, indexa: I, plndef: Dp, indexp: I, mout: M3Out);
    fn frame_c(x: DpOut, y: DpOut, z: DpOut);

    // n-vectors
    fn vaddg_c(v1: Dp, v2: Dp, ndim: I, vout: DpOut);
    fn vsubg_c(v1: Dp, v2: Dp, ndim: I, vout: DpOut);
    fn vdotg_c(v1: Dp, v2: Dp, ndim: I) -> D;
    fn vnormg_c(v1: Dp, ndim: I) -> D;
    fn vdistg_c(v1: Dp, v2: Dp, ndim: I) -> D;
    fn vsepg_c(v1: Dp, v2: Dp, ndim: I) -> D;
    fn vrelg_c(v1: Dp, v2: Dp, ndim: I) -> D;
    fn vequg_c(vin: Dp, ndim: I, vout: DpOut);
    fn vminug_c(vin: Dp, ndim: I, vout: DpOut);
    fn vsclg_c(s: D, v1: Dp, ndim: I, vout: DpOut);
    fn vhatg_c(v1: Dp, ndim: I, vout: DpOut);
    fn unormg_c(v1: Dp, ndim: I, vout: DpOut, vmag: DpOut);
    fn vzerog_c(v: Dp, ndim: I) -> B;
    fn vlcomg_c(n: I, a: D, v1: Dp, b: D, v2: Dp, sum: DpOut);
    fn vprojg_c(a: Dp, b: Dp, ndim: I, p: DpOut);
    fn vtmvg_c(v1: Void, matrix: Void, v2: Void, nrow: I, ncol: I) -> D;
    fn mxvg_c(m1: Void, v2: Void, nr1: I, nc1r2: I, vout: VoidOut);
    fn mtxvg_c(m1: Void, v2: Void, ncol1: I, nr1r2: I, vout: VoidOut);

    // 6-vectors (states)
    fn dvdot_c(s1: Dp, s2: Dp) -> D;
    fn dvhat_c(s1: Dp, sout: DpOut);
    fn dvcrss_c(s1: Dp, s2: Dp, sout: DpOut);
    fn ducrss_c(s1: Dp, s2: Dp, sout: DpOut);
    fn dvnorm_c(state: Dp) -> D;
    fn dvsep_c(s1: Dp, s2: Dp) -> D;

    // Matrices
    fn mxm_c(m1: M3, m2: M3, mout: M3Out);
    fn mtxm_c(m1: M3, m2: M3, mout: M3Out);
    fn mxmt_c(m1: M3, m2: M3, mout: M3Out);
    fn mxmg_c(m1: Void, m2: Void, row1: I, col1: I, col2: I, mout: VoidOut);
    fn mtxmg_c(m1: Void, m2: Void, ncol1: I, nr1r2: I, ncol2: I, mout: VoidOut);
    fn mxmtg_c(m1: Void, m2: Void, nrow1: I, nc1c2: I, nrow2: I, mout: VoidOut);
    fn xpose_c(m1: M3, mout: M3Out);
    fn xpose6_c(m1: M6, mout: M6Out);
    fn xposeg_c(matrix: Void, nrow: I, ncol: I, xposem: VoidOut);
    fn ident_c(matrix: M3Out);
    fn invert_c(m1: M3, mout: M3Out);
    fn invort_c(m: M3, mit: M3Out);
    fn invstm_c(mat: M6, invmat: M6Out);
    fn det_c(m1: M3) -> D;
    fn trace_c(matrix: M3) -> D;
    fn traceg_c(matrix: Void, ndim: I) -> D;
    fn mequ_c(m1: M3, mout: M3Out);
    fn mequg_c(m1: Void, nr: I, nc: I, mout: VoidOut);
    fn isrot_c(m: M3, ntol: D, dtol: D) -> B;
    fn diags2_c(symmat: M2, diag: M2Out, rotate: M2Out);

    // Rotations, Euler angles and quaternions
    fn rotate_c(angle: D, iaxis: I, mout: M3Out);
    fn rotmat_c(m1: M3, angle: D, iaxis: I, mout: M3Out);
    fn rotvec_c(v1: Dp, angle: D, iaxis: I, vout: DpOut);
    fn axisar_c(axis: Dp, angle: D, r: M3Out);
    fn raxisa_c(matrix: M3, axis: DpOut, angle: DpOut);
    fn eul2m_c(angle3: D, angle2: D, angle1: D, axis3: I, axis2: I, axis1: I, r: M3Out);
    fn m2eul_c(r: M3, axis3: I, axis2: I, axis1: I, angle3: DpOut, angle2: DpOut, angle1: DpOut);
    fn eul2xf_c(eulang: Dp, axisa: I, axisb: I, axisc: I, xform: M6Out);
    fn xf2eul_c(xform: M6, axisa: I, axisb: I, axisc: I, eulang: DpOut, unique: BOut);
    fn m2q_c(r: M3, q: DpOut);
    fn q2m_c(q: Dp, r: M3Out);
    fn qxq_c(q1: Dp, q2: Dp, qout: DpOut);
    fn qdq2av_c(q: Dp, dq: Dp, av: DpOut);
    fn xf2rav_c(xform: M6, rot: M3Out, av: DpOut);
    fn rav2xf_c(rot: M3, av: Dp, xform: M6Out);

    // Coordinate systems
    fn latrec_c(radius: D, longitude: D, latitude: D, rectan: DpOut);
    fn reclat_c(rectan: Dp, radius: DpOut, longitude: DpOut, latitude: DpOut);
    fn sphrec_c(r: D, colat: D, slon: D, rectan: DpOut);
    fn recsph_c(rectan: Dp, r: DpOut, colat: DpOut, slon: DpOut);
    fn cylrec_c(r: D, clon: D, z: D, rectan: DpOut);
    fn reccyl_c(rectan: Dp, r: DpOut, clon: DpOut, z: DpOut);
    fn georec_c(lon: D, lat: D, alt: D, re: D, f: D, rectan: DpOut);
    fn recgeo_c(rectan: Dp, re: D, f: D, lon: DpOut, lat: DpOut, alt: DpOut);
    fn pgrrec_c(body: Str, lon: D, lat: D, alt: D, re: D, f: D, rectan: DpOut);
    fn recpgr_c(body: Str, rectan: Dp, re: D, f: D, lon: DpOut, lat: DpOut, alt: DpOut);
    fn radrec_c(range: D, ra: D, dec: D, rectan: DpOut);
    fn recrad_c(rectan: Dp, range: DpOut, ra: DpOut, dec: DpOut);
    fn azlrec_c(range: D, az: D, el: D, azccw: B, elplsz: B, rectan: DpOut);
    fn recazl_c(rectan: Dp, azccw: B, elplsz: B, range: DpOut, az: DpOut, el: DpOut);
    fn cyllat_c(r: D, clon: D, z: D, radius: DpOut, lon: DpOut, lat: DpOut);
    fn cylsph_c(r: D, clon: D, z: D, radius: DpOut, colat: DpOut, slon: DpOut);
    fn latcyl_c(radius: D, lon: D, lat: D, r: DpOut, clon: DpOut, z: DpOut);
    fn latsph_c(radius: D, lon: D, lat: D, rho: DpOut, colat: DpOut, slon: DpOut);
    fn sphcyl_c(radius: D, colat: D, slon: D, r: DpOut, clon: DpOut, z: DpOut);
    fn sphlat_c(r: D, colat: D, slon: D, radius: DpOut, lon: DpOut, lat: DpOut);
    fn drdlat_c(r: D, lon: D, lat: D, jacobi: M3Out);
    fn dlatdr_c(x: D, y: D, z: D, jacobi: M3Out);
    fn drdsph_c(r: D, colat: D, slon: D, jacobi: M3Out);
    fn dsphdr_c(x: D, y: D, z: D, jacobi: M3Out);
    fn drdcyl_c(r: D, clon: D, z: D, jacobi: M3Out);
    fn dcyldr_c(x: D, y: D, z: D, jacobi: M3Out);
    fn drdgeo_c(lon: D, lat: D, alt: D, re: D, f: D, jacobi: M3Out);
    fn dgeodr_c(x: D, y: D, z: D, re: D, f: D, jacobi: M3Out);
    fn drdpgr_c(body: Str, lon: D, lat: D, alt: D, re: D, f: D, jacobi: M3Out);
    fn dpgrdr_c(body: Str, x: D, y: D, z: D, re: D, f: D, jacobi: M3Out);
    fn drdazl_c(range: D, az: D, el: D, azccw: B, elplsz: B, jacobi: M3Out);
    fn dazldr_c(x: D, y: D, z: D, azccw: B, elplsz: B, jacobi: M3Out);
    fn xfmsta_c(istate: Dp, icosys: Str, ocosys: Str, body: Str, ostate: DpOut);

    // Ellipsoids and plates
    fn surfnm_c(a: D, b: D, c: D, point: Dp, normal: DpOut);
    fn surfpt_c(positn: Dp, u: Dp, a: D, b: D, c: D, point: DpOut, found: BOut);
    fn surfpv_c(stvrtx: Dp, stdir: Dp, a: D, b: D, c: D, stx: DpOut, found: BOut);
    fn nearpt_c(positn: Dp, a: D, b: D, c: D, npoint: DpOut, alt: DpOut);
    fn dnearp_c(state: Dp, a: D, b: D, c: D, dnear: DpOut, dalt: DpOut, found: BOut);
    fn npedln_c(a: D, b: D, c: D, linept: Dp, linedr: Dp, pnear: DpOut, dist: DpOut);
    fn edlimb_c(a: D, b: D, c: D, viewpt: Dp, limb: *mut Ellipse);
    fn ednmpt_c(a: D, b: D, c: D, normal: Dp, point: DpOut);
    fn edpnt_c(p: Dp, a: D, b: D, c: D, ep: DpOut);
    fn inedpl_c(a: D, b: D, c: D, plane: *const Plane, ellipse: *mut Ellipse, found: BOut);
    fn nplnpt_c(linpt: Dp, lindir: Dp, point: Dp, pnear: DpOut, dist: DpOut);
    fn pltar_c(nv: I, vrtces: M3, np: I, plates: I3) -> D;
    fn pltvol_c(nv: I, vrtces: M3, np: I, plates: I3) -> D;
    fn pltexp_c(iverts: M3, delta: D, overts: M3Out);
    fn pltnp_c(point: Dp, v1: Dp, v2: Dp, v3: Dp, pnear: DpOut, dist: DpOut);
    fn pltnrm_c(v1: Dp, v2: Dp, v3: Dp, normal: DpOut);

    // Planes and ellipses
    fn nvc2pl_c(normal: Dp, konst: D, plane: *mut Plane);
    fn nvp2pl_c(normal: Dp, point: Dp, plane: *mut Plane);
    fn psv2pl_c(point: Dp, span1: Dp, span2: Dp, plane: *mut Plane);
    fn pl2nvc_c(plane: *const Plane, normal: DpOut, konst: DpOut);
    fn pl2nvp_c(plane: *const Plane, normal: DpOut, point: DpOut);
    fn pl2psv_c(plane: *const Plane, point: DpOut, span1: DpOut, span2: DpOut);
    fn cgv2el_c(center: Dp, vec1: Dp, vec2: Dp, ellipse: *mut Ellipse);
    fn el2cgv_c(ellipse: *const Ellipse, center: DpOut, smajor: DpOut, sminor: DpOut);
    fn saelgv_c(vec1: Dp, vec2: Dp, smajor: DpOut, sminor: DpOut);
    fn pjelpl_c(elin: *const Ellipse, plane: *const Plane, elout: *mut Ellipse);
    fn inelpl_c(ellips: *const Ellipse, plane: *const Plane, nxpts: IpOut, xpt1: DpOut, xpt2: DpOut);
    fn inrypl_c(vertex: Dp, dir: Dp, plane: *const Plane, nxpts: IpOut, xpt: DpOut);
    fn npelpt_c(point: Dp, ellips: *const Ellipse, pnear: DpOut, dist: DpOut);

    // Time
    fn str2et_c(string: Str, et: DpOut);
    fn utc2et_c(utcstr: Str, et: DpOut);
    fn et2utc_c(et: D, format: Str, prec: I, lenout: I, utcstr: StrOut);
    fn etcal_c(et: D, lenout: I, string: StrOut);
    fn timout_c(et: D, pictur: Str, lenout: I, output: StrOut);
    fn tpictr_c(sample: Str, lenout: I, lenerr: I, pictur: StrOut, ok: BOut, errmsg: StrOut);
    fn tparse_c(string: Str, lenout: I, sp2000: DpOut, errmsg: StrOut);
    fn tparch_c(type_: Str);
    fn timdef_c(action: Str, item: Str, lenout: I, value: StrOut);
    fn tsetyr_c(year: I);
    fn unitim_c(epoch: D, insys: Str, outsys: Str) -> D;
    fn deltet_c(epoch: D, eptype: Str, delta: DpOut);
    fn et2lst_c(et: D, body: I, lon: D, type_: Str, timlen: I, ampmlen: I, hr: IpOut, mn: IpOut, sc: IpOut, time: StrOut, ampm: StrOut);
    fn ltime_c(etobs: D, obs: I, dir: Str, targ: I, ettarg: DpOut, elapsd: DpOut);
    fn convrt_c(x: D, in_: Str, out: Str, y: DpOut);

    // Spacecraft clock
    fn scencd_c(sc: I, sclkch: Str, sclkdp: DpOut);
    fn scdecd_c(sc: I, sclkdp: D, sclklen: I, sclkch: StrOut);
    fn sce2c_c(sc: I, et: D, sclkdp: DpOut);
    fn sce2s_c(sc: I, et: D, sclklen: I, sclkch: StrOut);
    fn sce2t_c(sc: I, et: D, sclkdp: DpOut);
    fn scs2e_c(sc: I, sclkch: Str, et: DpOut);
    fn sct2e_c(sc: I, sclkdp: D, et: DpOut);
    fn scfmt_c(sc: I, ticks: D, lenout: I, clkstr: StrOut);
    fn sctiks_c(sc: I, clkstr: Str, ticks: DpOut);
    fn scpart_c(sc: I, nparts: IpOut, pstart: DpOut, pstop: DpOut);

    // Kernels
    fn furnsh_c(file: Str);
    fn unload_c(file: Str);
    fn kclear_c();
    fn ktotal_c(kind: Str, count: IpOut);
    fn kdata_c(which: I, kind: Str, fillen: I, typlen: I, srclen: I, file: StrOut, filtyp: StrOut, srcfil: StrOut, handle: IpOut, found: BOut);
    fn kinfo_c(file: Str, typlen: I, srclen: I, filtyp: StrOut, srcfil: StrOut, handle: IpOut, found: BOut);
    fn kplfrm_c(frmcls: I, idset: Cell);
    fn getfat_c(file: Str, arclen: I, typlen: I, arch: StrOut, type_: StrOut);
    fn exists_c(name: Str) -> B;
    fn tkvrsn_c(item: Str) -> Str;

    // Kernel pool
    fn ldpool_c(filename: Str);
    fn clpool_c();
    fn lmpool_c(cvals: Void, lenvals: I, n: I);
    fn gdpool_c(name: Str, start: I, room: I, n: IpOut, values: DpOut, found: BOut);
    fn gipool_c(name: Str, start: I, room: I, n: IpOut, ivals: IpOut, found: BOut);
    fn gcpool_c(name: Str, start: I, room: I, lenout: I, n: IpOut, cvals: VoidOut, found: BOut);
    fn gnpool_c(name: Str, start: I, room: I, lenout: I, n: IpOut, kvars: VoidOut, found: BOut);
    fn dtpool_c(name: Str, found: BOut, n: IpOut, type_: StrOut);
    fn expool_c(name: Str, found: BOut);
    fn szpool_c(name: Str, n: IpOut, found: BOut);
    fn pdpool_c(name: Str, n: I, dvals: Dp);
    fn pipool_c(name: Str, n: I, ivals: Ip);
    fn pcpool_c(name: Str, n: I, lenvals: I, cvals: Void);
    fn dvpool_c(name: Str);
    fn stpool_c(item: Str, nth: I, contin: Str, lenout: I, nthstr: StrOut, size: IpOut, found: BOut);
    fn swpool_c(agent: Str, nnames: I, lenvals: I, names: Void);
    fn cvpool_c(agent: Str, update: BOut);
    fn getfov_c(instid: I, room: I, shapelen: I, framelen: I, shape: StrOut, frame: StrOut, bsight: DpOut, n: IpOut, bounds: M3Out);
    fn getfvn_c(inst: Str, room: I, shalen: I, fralen: I, shape: StrOut, frame: StrOut, bsight: DpOut, n: IpOut, bounds: M3Out);

    // Bodies and surfaces
    fn bodn2c_c(name: Str, code: IpOut, found: BOut);
    fn bodc2n_c(code: I, lenout: I, name: StrOut, found: BOut);
    fn bodc2s_c(code: I, lenout: I, name: StrOut);
    fn bods2c_c(name: Str, code: IpOut, found: BOut);
    fn boddef_c(name: Str, code: I);
    fn bodfnd_c(body: I, item: Str) -> B;
    fn bodvrd_c(bodynm: Str, item: Str, maxn: I, dim: IpOut, values: DpOut);
    fn bodvcd_c(bodyid: I, item: Str, maxn: I, dim: IpOut, values: DpOut);
    fn srfc2s_c(code: I, bodyid: I, srflen: I, srfstr: StrOut, isname: BOut);
    fn srfcss_c(code: I, bodstr: Str, srflen: I, srfstr: StrOut, isname: BOut);
    fn srfs2c_c(srfstr: Str, bodstr: Str, code: IpOut, found: BOut);
    fn srfscc_c(srfstr: Str, bodyid: I, code: IpOut, found: BOut);

    // Frames
    fn namfrm_c(frname: Str, frcode: IpOut);
    fn frmnam_c(frcode: I, lenout: I, frname: StrOut);
    fn frinfo_c(frcode: I, cent: IpOut, frclss: IpOut, clssid: IpOut, found: BOut);
    fn cidfrm_c(cent: I, lenout: I, frcode: IpOut, frname: StrOut, found: BOut);
    fn cnmfrm_c(cname: Str, lenout: I, frcode: IpOut, frname: StrOut, found: BOut);
    fn ccifrm_c(frclss: I, clssid: I, lenout: I, frcode: IpOut, frname: StrOut, center: IpOut, found: BOut);
    fn pxform_c(from: Str, to: Str, et: D, rotate: M3Out);
    fn pxfrm2_c(from: Str, to: Str, etfrom: D, etto: D, rotate: M3Out);
    fn sxform_c(from: Str, to: Str, et: D, xform: M6Out);
    fn tipbod_c(ref_: Str, body: I, et: D, tipm: M3Out);
    fn tisbod_c(ref_: Str, body: I, et: D, tsipm: M6Out);
    fn eqncpv_c(et: D, epoch: D, eqel: Dp, rapol: D, decpol: D, state: DpOut);

    // SPK read
    fn spkezr_c(targ: Str, et: D, ref_: Str, abcorr: Str, obs: Str, starg: DpOut, lt: DpOut);
    fn spkpos_c(targ: Str, et: D, ref_: Str, abcorr: Str, obs: Str, ptarg: DpOut, lt: DpOut);
    fn spkez_c(targ: I, et: D, ref_: Str, abcorr: Str, obs: I, starg: DpOut, lt: DpOut);
    fn spkezp_c(targ: I, et: D, ref_: Str, abcorr: Str, obs: I, ptarg: DpOut, lt: DpOut);
    fn spkgeo_c(targ: I, et: D, ref_: Str, obs: I, state: DpOut, lt: DpOut);
    fn spkgps_c(targ: I, et: D, ref_: Str, obs: I, pos: DpOut, lt: DpOut);
    fn spkssb_c(targ: I, et: D, ref_: Str, starg: DpOut);
    fn spkacs_c(targ: I, et: D, ref_: Str, abcorr: Str, obs: I, starg: DpOut, lt: DpOut, dlt: DpOut);
    fn spkapo_c(targ: I, et: D, ref_: Str, sobs: Dp, abcorr: Str, ptarg: DpOut, lt: DpOut);
    fn spkapp_c(targ: I, et: D, ref_: Str, sobs: Dp, abcorr: Str, starg: DpOut, lt: DpOut);
    fn spkaps_c(targ: I, et: D, ref_: Str, abcorr: Str, stobs: Dp, accobs: Dp, starg: DpOut, lt: DpOut, dlt: DpOut);
    fn spkltc_c(targ: I, et: D, ref_: Str, abcorr: Str, stobs: Dp, starg: DpOut, lt: DpOut, dlt: DpOut);
    fn spkcpo_c(target: Str, et: D, outref: Str, refloc: Str, abcorr: Str, obspos: Dp, obsctr: Str, obsref: Str, state: DpOut, lt: DpOut);
    fn spkcpt_c(trgpos: Dp, trgctr: Str, trgref: Str, et: D, outref: Str, refloc: Str, abcorr: Str, obsrvr: Str, state: DpOut, lt: DpOut);
    fn spkcvo_c(target: Str, et: D, outref: Str, refloc: Str, abcorr: Str, obssta: Dp, obsepc: D, obsctr: Str, obsref: Str, state: DpOut, lt: DpOut);
    fn spkcvt_c(trgsta: Dp, trgepc: D, trgctr: Str, trgref: Str, et: D, outref: Str, refloc: Str, abcorr: Str, obsrvr: Str, state: DpOut, lt: DpOut);
    fn spkpvn_c(handle: I, descr: Dp, et: D, ref_: IpOut, state: DpOut, center: IpOut);
    fn spksfs_c(body: I, et: D, idlen: I, handle: IpOut, descr: DpOut, ident: StrOut, found: BOut);
    fn spklef_c(filename: Str, handle: IpOut);
    fn spkuef_c(handle: I);
    fn spkobj_c(spkfnm: Str, ids: Cell);
    fn spkcov_c(spkfnm: Str, idcode: I, cover: Cell);
    fn spkuds_c(descr: Dp, body: IpOut, center: IpOut, frame: IpOut, type_: IpOut, first: DpOut, last: DpOut, baddr: IpOut, eaddr: IpOut);
    fn spkpds_c(body: I, center: I, frame: Str, type_: I, first: D, last: D, descr: DpOut);
    fn spksub_c(handle: I, descr: Dp, ident: Str, begin: D, end: D, newh: I);

    // SPK write
    fn spkopn_c(fname: Str, ifname: Str, ncomch: I, handle: IpOut);
    fn spkopa_c(file: Str, handle: IpOut);
    fn spkcls_c(handle: I);
    fn spkw02_c(handle: I, body: I, center: I, frame: Str, first: D, last: D, segid: Str, intlen: D, n: I, polydg: I, cdata: Dp, btime: D);
    fn spkw03_c(handle: I, body: I, center: I, frame: Str, first: D, last: D, segid: Str, intlen: D, n: I, polydg: I, cdata: Dp, btime: D);
    fn spkw05_c(handle: I, body: I, center: I, frame: Str, first: D, last: D, segid: Str, gm: D, n: I, states: M6, epochs: Dp);
    fn spkw08_c(handle: I, body: I, center: I, frame: Str, first: D, last: D, segid: Str, degree: I, n: I, states: M6, epoch1: D, step: D);
    fn spkw09_c(handle: I, body: I, center: I, frame: Str, first: D, last: D, segid: Str, degree: I, n: I, states: M6, epochs: Dp);
    fn spkw10_c(handle: I, body: I, center: I, frame: Str, first: D, last: D, segid: Str, consts: Dp, n: I, elems: Dp, epochs: Dp);
    fn spkw12_c(handle: I, body: I, center: I, frame: Str, first: D, last: D, segid: Str, degree: I, n: I, states: M6, epoch0: D, step: D);
    fn spkw13_c(handle: I, body: I, center: I, frame: Str, first: D, last: D, segid: Str, degree: I, n: I, states: M6, epochs: Dp);
    fn spkw15_c(handle: I, body: I, center: I, frame: Str, first: D, last: D, segid: Str, epoch: D, tp: Dp, pa: Dp, p: D, ecc: D, j2flg: D, pv: Dp, gm: D, j2: D, radius: D);
    fn spkw17_c(handle: I, body: I, center: I, frame: Str, first: D, last: D, segid: Str, epoch: D, eqel: Dp, rapol: D, decpol: D);
    fn spkw18_c(handle: I, subtyp: I, body: I, center: I, frame: Str, first: D, last: D, segid: Str, degree: I, n: I, packts: Void, epochs: Dp);
    fn spkw20_c(handle: I, body: I, center: I, frame: Str, first: D, last: D, segid: Str, intlen: D, n: I, polydg: I, cdata: Dp, dscale: D, tscale: D, initjd: D, initfr: D);
    fn spk14a_c(handle: I, ncsets: I, coeffs: Dp, epochs: Dp);
    fn spk14b_c(handle: I, segid: Str, body: I, center: I, frame: Str, first: D, last: D, chbdeg: I);
    fn spk14e_c(handle: I);

    // CK
    fn ckgp_c(inst: I, sclkdp: D, tol: D, ref_: Str, cmat: M3Out, clkout: DpOut, found: BOut);
    fn ckgpav_c(inst: I, sclkdp: D, tol: D, ref_: Str, cmat: M3Out, av: DpOut, clkout: DpOut, found: BOut);
    fn cklpf_c(fname: Str, handle: IpOut);
    fn ckupf_c(handle: I);
    fn ckobj_c(ckfnm: Str, ids: Cell);
    fn ckcov_c(ckfnm: Str, idcode: I, needav: B, level: Str, tol: D, timsys: Str, cover: Cell);
    fn ckfrot_c(inst: I, et: D, rotate: M3Out, ref_: IpOut, found: BOut);
    fn ckfxfm_c(inst: I, et: D, xform: M6Out, ref_: IpOut, found: BOut);
    fn ckmeta_c(ckid: I, meta: Str, idcode: IpOut);
    fn ckopn_c(fname: Str, ifname: Str, ncomch: I, handle: IpOut);
    fn ckcls_c(handle: I);
    fn ckw01_c(handle: I, begtim: D, endtim: D, inst: I, ref_: Str, avflag: B, segid: Str, nrec: I, sclkdp: Dp, quats: M4, avvs: M3);
    fn ckw02_c(handle: I, begtim: D, endtim: D, inst: I, ref_: Str, segid: Str, nrec: I, start: Dp, stop: Dp, quats: M4, avvs: M3, rates: Dp);
    fn ckw03_c(handle: I, begtim: D, endtim: D, inst: I, ref_: Str, avflag: B, segid: Str, nrec: I, sclkdp: Dp, quats: M4, avvs: M3, nints: I, starts: Dp);
    fn ckw05_c(handle: I, subtyp: I, degree: I, begtim: D, endtim: D, inst: I, ref_: Str, avflag: B, segid: Str, n: I, sclkdp: Dp, packts: Void, rate: D, nints: I, starts: Dp);

    // PCK
    fn pcklof_c(fname: Str, handle: IpOut);
    fn pckuof_c(handle: I);
    fn pckcov_c(pckfnm: Str, idcode: I, cover: Cell);
    fn pckfrm_c(pckfnm: Str, ids: Cell);
    fn pckopn_c(name: Str, ifname: Str, ncomch: I, handle: IpOut);
    fn pckcls_c(handle: I);
    fn pckw02_c(handle: I, clssid: I, frame: Str, first: D, last: D, segid: Str, intlen: D, n: I, polydg: I, cdata: Dp, btime: D);

    // DAF
    fn dafopr_c(fname: Str, handle: IpOut);
    fn dafopw_c(fname: Str, handle: IpOut);
    fn dafopn_c(fname: Str, nd: I, ni: I, ifname: Str, resv: I, handle: IpOut);
    fn dafcls_c(handle: I);
    fn dafbfs_c(handle: I);
    fn dafbbs_c(handle: I);
    fn daffna_c(found: BOut);
    fn daffpa_c(found: BOut);
    fn dafcs_c(handle: I);
    fn dafgs_c(sum: DpOut);
    fn dafgn_c(lenout: I, name: StrOut);
    fn dafgh_c(handle: IpOut);
    fn dafus_c(sum: Dp, nd: I, ni: I, dc: DpOut, ic: IpOut);
    fn dafps_c(nd: I, ni: I, dc: Dp, ic: Ip, sum: DpOut);
    fn dafrs_c(sum: Dp);
    fn dafgda_c(handle: I, begin: I, end: I, data: DpOut);
    fn dafgsr_c(handle: I, recno: I, begin: I, end: I, data: DpOut, found: BOut);
    fn dafrfr_c(handle: I, lenout: I, nd: IpOut, ni: IpOut, ifname: StrOut, fward: IpOut, bward: IpOut, free: IpOut);
    fn dafbna_c(handle: I, sum: Dp, name: Str);
    fn dafada_c(data: Dp, n: I);
    fn dafena_c();
    fn dafac_c(handle: I, n: I, buflen: I, buffer: Void);
    fn dafec_c(handle: I, bufsiz: I, buflen: I, n: IpOut, buffer: VoidOut, done: BOut);
    fn dafdc_c(handle: I);

    // DAS
    fn dasopr_c(fname: Str, handle: IpOut);
    fn dasopw_c(fname: Str, handle: IpOut);
    fn dasonw_c(fname: Str, ftype: Str, ifname: Str, ncomr: I, handle: IpOut);
    fn dascls_c(handle: I);
    fn dasllc_c(handle: I);
    fn dashfn_c(handle: I, namlen: I, fname: StrOut);
    fn dasrfr_c(handle: I, idwlen: I, ifnlen: I, idword: StrOut, ifname: StrOut, nresvr: IpOut, nresvc: IpOut, ncomr: IpOut, ncomc: IpOut);
    fn daslla_c(handle: I, lastc: IpOut, lastd: IpOut, lasti: IpOut);
    fn dasadc_c(handle: I, n: I, bpos: I, epos: I, datlen: I, data: Void);
    fn dasadd_c(handle: I, n: I, data: Dp);
    fn dasadi_c(handle: I, n: I, data: Ip);
    fn dasrdc_c(handle: I, first: I, last: I, bpos: I, epos: I, datlen: I, data: VoidOut);
    fn dasrdd_c(handle: I, first: I, last: I, data: DpOut);
    fn dasrdi_c(handle: I, first: I, last: I, data: IpOut);
    fn dasudc_c(handle: I, first: I, last: I, bpos: I, epos: I, datlen: I, data: Void);
    fn dasudd_c(handle: I, first: I, last: I, data: Dp);
    fn dasudi_c(handle: I, first: I, last: I, data: Ip);
    fn daswbr_c(handle: I);
    fn dasac_c(handle: I, n: I, buflen: I, buffer: Void);
    fn dasec_c(handle: I, bufsiz: I, buflen: I, n: IpOut, buffer: VoidOut, done: BOut);
    fn dasdc_c(handle: I);

    // DSK and DLA
    fn dskopn_c(fname: Str, ifname: Str, ncomch: I, handle: IpOut);
    fn dskcls_c(handle: I, optmiz: B);
    fn dskobj_c(dskfnm: Str, bodids: Cell);
    fn dsksrf_c(dskfnm: Str, bodyid: I, srfids: Cell);
    fn dskgd_c(handle: I, dladsc: *const DlaDescr, dskdsc: *mut DskDescr);
    fn dskb02_c(handle: I, dladsc: *const DlaDescr, nv: IpOut, np: IpOut, nvxtot: IpOut, vtxbds: M2Out, voxsiz: DpOut, voxori: DpOut, vgrext: IpOut, cgscal: IpOut, vtxnpl: IpOut, voxnpt: IpOut, voxnpl: IpOut);
    fn dskd02_c(handle: I, dladsc: *const DlaDescr, item: I, start: I, room: I, n: IpOut, values: DpOut);
    fn dski02_c(handle: I, dladsc: *const DlaDescr, item: I, start: I, room: I, n: IpOut, values: IpOut);
    fn dskn02_c(handle: I, dladsc: *const DlaDescr, plid: I, normal: DpOut);
    fn dskp02_c(handle: I, dladsc: *const DlaDescr, start: I, room: I, n: IpOut, plates: I3Out);
    fn dskv02_c(handle: I, dladsc: *const DlaDescr, start: I, room: I, n: IpOut, vrtces: M3Out);
    fn dskz02_c(handle: I, dladsc: *const DlaDescr, nv: IpOut, np: IpOut);
    fn dskx02_c(handle: I, dladsc: *const DlaDescr, vertex: Dp, raydir: Dp, plid: IpOut, xpt: DpOut, found: BOut);
    fn dskxsi_c(pri: B, target: Str, nsurf: I, srflst: Ip, et: D, fixref: Str, vertex: Dp, raydir: Dp, maxd: I, maxi: I, xpt: DpOut, handle: IpOut, dladsc: *mut DlaDescr, dskdsc: *mut DskDescr, dc: DpOut, ic: IpOut, found: BOut);
    fn dskxv_c(pri: B, target: Str, nsurf: I, srflst: Ip, et: D, fixref: Str, nrays: I, vtxarr: M3, dirarr: M3, xptarr: M3Out, fndarr: BOut);
    fn dskgtl_c(keywrd: I, dpval: DpOut);
    fn dskstl_c(keywrd: I, dpval: D);
    fn dskmi2_c(nv: I, vrtces: M3, np: I, plates: I3, finscl: D, corscl: I, worksz: I, voxpsz: I, voxlsz: I, makvtl: B, spxisz: I, work: *mut [SpiceInt; 2], spaixd: DpOut, spaixi: IpOut);
    fn dskrb2_c(nv: I, vrtces: M3, np: I, plates: I3, corsys: I, corpar: Dp, mncor3: DpOut, mxcor3: DpOut);
    fn dskw02_c(handle: I, center: I, surfid: I, dclass: I, frame: Str, corsys: I, corpar: Dp, mncor1: D, mxcor1: D, mncor2: D, mxcor2: D, mncor3: D, mxcor3: D, first: D, last: D, nv: I, vrtces: M3, np: I, plates: I3, spaixd: Dp, spaixi: Ip);
    fn dlaopn_c(fname: Str, ftype: Str, ifname: Str, ncomch: I, handle: IpOut);
    fn dlabns_c(handle: I);
    fn dlaens_c(handle: I);
    fn dlabfs_c(handle: I, dladsc: *mut DlaDescr, found: BOut);
    fn dlabbs_c(handle: I, dladsc: *mut DlaDescr, found: BOut);
    fn dlafns_c(handle: I, dladsc: *const DlaDescr, nxtdsc: *mut DlaDescr, found: BOut);
    fn dlafps_c(handle: I, dladsc: *const DlaDescr, prvdsc: *mut DlaDescr, found: BOut);
    fn latsrf_c(method: Str, target: Str, et: D, fixref: Str, npts: I, lonlat: M2, srfpts: M3Out);
    fn srfnrm_c(method: Str, target: Str, et: D, fixref: Str, npts: I, srfpts: M3, normls: M3Out);

    // EK
    fn ekopn_c(fname: Str, ifname: Str, ncomch: I, handle: IpOut);
    fn ekopr_c(fname: Str, handle: IpOut);
    fn ekopw_c(fname: Str, handle: IpOut);
    fn ekops_c(handle: IpOut);
    fn ekcls_c(handle: I);
    fn eklef_c(fname: Str, handle: IpOut);
    fn ekuef_c(handle: I);
    fn ekntab_c(n: IpOut);
    fn ektnam_c(n: I, lenout: I, table: StrOut);
    fn ekccnt_c(table: Str, ccount: IpOut);
    fn ekcii_c(table: Str, cindex: I, lenout: I, column: StrOut, attdsc: *mut EkAttDsc);
    fn eknseg_c(handle: I) -> I;
    fn ekssum_c(handle: I, segno: I, segsum: *mut EkSegSum);
    fn ekfind_c(query: Str, lenout: I, nmrows: IpOut, error: BOut, errmsg: StrOut);
    fn ekpsel_c(query: Str, msglen: I, tablen: I, collen: I, n: IpOut, xbegs: IpOut, xends: IpOut, xtypes: IpOut, xclass: IpOut, tabs: VoidOut, cols: VoidOut, error: BOut, errmsg: StrOut);
    fn ekgc_c(selidx: I, row: I, elment: I, lenout: I, cdata: StrOut, null: BOut, found: BOut);
    fn ekgd_c(selidx: I, row: I, elment: I, ddata: DpOut, null: BOut, found: BOut);
    fn ekgi_c(selidx: I, row: I, elment: I, idata: IpOut, null: BOut, found: BOut);
    fn eknelt_c(selidx: I, row: I) -> I;
    fn ekbseg_c(handle: I, tabnam: Str, ncols: I, cnmlen: I, cnames: Void, declen: I, decls: Void, segno: IpOut);
    fn ekifld_c(handle: I, tabnam: Str, ncols: I, nrows: I, cnmlen: I, cnames: Void, declen: I, decls: Void, segno: IpOut, rcptrs: IpOut);
    fn ekffld_c(handle: I, segno: I, rcptrs: IpOut);
    fn ekaclc_c(handle: I, segno: I, column: Str, vallen: I, cvals: Void, entszs: Ip, nlflgs: Bp, rcptrs: Ip, wkindx: IpOut);
    fn ekacld_c(handle: I, segno: I, column: Str, dvals: Dp, entszs: Ip, nlflgs: Bp, rcptrs: Ip, wkindx: IpOut);
    fn ekacli_c(handle: I, segno: I, column: Str, ivals: Ip, entszs: Ip, nlflgs: Bp, rcptrs: Ip, wkindx: IpOut);
    fn ekappr_c(handle: I, segno: I, recno: IpOut);
    fn ekinsr_c(handle: I, segno: I, recno: I);
    fn ekdelr_c(handle: I, segno: I, recno: I);
    fn ekacec_c(handle: I, segno: I, recno: I, column: Str, nvals: I, vallen: I, cvals: Void, isnull: B);
    fn ekaced_c(handle: I, segno: I, recno: I, column: Str, nvals: I, dvals: Dp, isnull: B);
    fn ekacei_c(handle: I, segno: I, recno: I, column: Str, nvals: I, ivals: Ip, isnull: B);
    fn ekucec_c(handle: I, segno: I, recno: I, column: Str, nvals: I, vallen: I, cvals: Void, isnull: B);
    fn ekuced_c(handle: I, segno: I, recno: I, column: Str, nvals: I, dvals: Dp, isnull: B);
    fn ekucei_c(handle: I, segno: I, recno: I, column: Str, nvals: I, ivals: Ip, isnull: B);
    fn ekrcec_c(handle: I, segno: I, recno: I, column: Str, lenout: I, nvals: IpOut, cvals: VoidOut, isnull: BOut);
    fn ekrced_c(handle: I, segno: I, recno: I, column: Str, nvals: IpOut, dvals: DpOut, isnull: BOut);
    fn ekrcei_c(handle: I, segno: I, recno: I, column: Str, nvals: IpOut, ivals: IpOut, isnull: BOut);

    // Cells and sets
    fn appndc_c(item: Str, cell: Cell);
    fn appndd_c(item: D, cell: Cell);
    fn appndi_c(item: I, cell: Cell);
    fn card_c(cell: Cell) -> I;
    fn size_c(cell: Cell) -> I;
    fn scard_c(card: I, cell: Cell);
    fn ssize_c(size: I, cell: Cell);
    fn copy_c(cell: Cell, copy: Cell);
    fn valid_c(size: I, n: I, a: Cell);
    fn insrtc_c(item: Str, set: Cell);
    fn insrtd_c(item: D, set: Cell);
    fn insrti_c(item: I, set: Cell);
    fn removc_c(item: Str, set: Cell);
    fn removd_c(item: D, set: Cell);
    fn removi_c(item: I, set: Cell);
    fn elemc_c(item: Str, set: Cell) -> B;
    fn elemd_c(item: D, set: Cell) -> B;
    fn elemi_c(item: I, set: Cell) -> B;
    fn union_c(a: Cell, b: Cell, c: Cell);
    fn inter_c(a: Cell, b: Cell, c: Cell);
    fn diff_c(a: Cell, b: Cell, c: Cell);
    fn sdiff_c(a: Cell, b: Cell, c: Cell);
    fn set_c(a: Cell, op: Str, b: Cell) -> B;

    // Windows
    fn wncard_c(window: Cell) -> I;
    fn wncomd_c(left: D, right: D, window: Cell, result: Cell);
    fn wncond_c(left: D, right: D, window: Cell);
    fn wndifd_c(a: Cell, b: Cell, c: Cell);
    fn wnelmd_c(point: D, window: Cell) -> B;
    fn wnexpd_c(left: D, right: D, window: Cell);
    fn wnextd_c(side: C, window: Cell);
    fn wnfetd_c(window: Cell, n: I, left: DpOut, right: DpOut);
    fn wnfild_c(sml: D, window: Cell);
    fn wnfltd_c(sml: D, window: Cell);
    fn wnincd_c(left: D, right: D, window: Cell) -> B;
    fn wninsd_c(left: D, right: D, window: Cell);
    fn wnintd_c(a: Cell, b: Cell, c: Cell);
    fn wnreld_c(a: Cell, op: Str, b: Cell) -> B;
    fn wnsumd_c(window: Cell, meas: DpOut, avg: DpOut, stddev: DpOut, idxsml: IpOut, idxlon: IpOut);
    fn wnunid_c(a: Cell, b: Cell, c: Cell);
    fn wnvald_c(size: I, n: I, window: Cell);

    // Observation geometry
    fn subpnt_c(method: Str, target: Str, et: D, fixref: Str, abcorr: Str, obsrvr: Str, spoint: DpOut, trgepc: DpOut, srfvec: DpOut);
    fn subslr_c(method: Str, target: Str, et: D, fixref: Str, abcorr: Str, obsrvr: Str, spoint: DpOut, trgepc: DpOut, srfvec: DpOut);
    fn sincpt_c(method: Str, target: Str, et: D, fixref: Str, abcorr: Str, obsrvr: Str, dref: Str, dvec: Dp, spoint: DpOut, trgepc: DpOut, srfvec: DpOut, found: BOut);
    fn ilumin_c(method: Str, target: Str, et: D, fixref: Str, abcorr: Str, obsrvr: Str, spoint: Dp, trgepc: DpOut, srfvec: DpOut, phase: DpOut, incdnc: DpOut, emissn: DpOut);
    fn illumg_c(method: Str, target: Str, ilusrc: Str, et: D, fixref: Str, abcorr: Str, obsrvr: Str, spoint: Dp, trgepc: DpOut, srfvec: DpOut, phase: DpOut, incdnc: DpOut, emissn: DpOut);
    fn illumf_c(method: Str, target: Str, ilusrc: Str, et: D, fixref: Str, abcorr: Str, obsrvr: Str, spoint: Dp, trgepc: DpOut, srfvec: DpOut, phase: DpOut, incdnc: DpOut, emissn: DpOut, visibl: BOut, lit: BOut);
    fn limbpt_c(method: Str, target: Str, et: D, fixref: Str, abcorr: Str, corloc: Str, obsrvr: Str, refvec: Dp, rolstp: D, ncuts: I, schstp: D, soltol: D, maxn: I, npts: IpOut, points: M3Out, epochs: DpOut, tangts: M3Out);
    fn termpt_c(method: Str, ilusrc: Str, target: Str, et: D, fixref: Str, abcorr: Str, corloc: Str, obsrvr: Str, refvec: Dp, rolstp: D, ncuts: I, schstp: D, soltol: D, maxn: I, npts: IpOut, points: M3Out, epochs: DpOut, trmvcs: M3Out);
    fn edterm_c(trmtyp: Str, source: Str, target: Str, et: D, fixref: Str, abcorr: Str, obsrvr: Str, npts: I, trgepc: DpOut, obspos: DpOut, trmvcs: M3Out);
    fn tangpt_c(method: Str, target: Str, et: D, fixref: Str, abcorr: Str, corloc: Str, obsrvr: Str, dref: Str, dvec: Dp, tanpt: DpOut, alt: DpOut, range: DpOut, srfpt: DpOut, trgepc: DpOut, srfvec: DpOut);
    fn occult_c(targ1: Str, shape1: Str, frame1: Str, targ2: Str, shape2: Str, frame2: Str, abcorr: Str, obsrvr: Str, et: D, ocltid: IpOut);
    fn fovray_c(inst: Str, raydir: Dp, rframe: Str, abcorr: Str, obsrvr: Str, et: Dp, visibl: BOut);
    fn fovtrg_c(inst: Str, target: Str, tshape: Str, tframe: Str, abcorr: Str, obsrvr: Str, et: Dp, visibl: BOut);
    fn phaseq_c(et: D, target: Str, illmn: Str, obsrvr: Str, abcorr: Str) -> D;
    fn lspcn_c(body: Str, et: D, abcorr: Str) -> D;
    fn azlcpo_c(method: Str, target: Str, et: D, abcorr: Str, azccw: B, elplsz: B, obspos: Dp, obsctr: Str, obsref: Str, azlsta: DpOut, lt: DpOut);
    fn stelab_c(pobj: Dp, vobs: Dp, appobj: DpOut);
    fn stlabx_c(pobj: Dp, vobs: Dp, corpos: DpOut);

    // Geometry finder
    fn gfsstp_c(step: D);
    fn gfstep_c(time: D, step: DpOut);
    fn gfstol_c(value: D);
    fn gfrefn_c(t1: D, t2: D, s1: B, s2: B, t: DpOut);
    fn gfrepi_c(window: Cell, begmss: Str, endmss: Str);
    fn gfrepu_c(ivbeg: D, ivend: D, time: D);
    fn gfrepf_c();
    fn gfinth_c(sigcode: std::ffi::c_int);
    fn gfclrh_c();
    fn gfbail_c() -> B;
    fn gfdist_c(target: Str, abcorr: Str, obsrvr: Str, relate: Str, refval: D, adjust: D, step: D, nintvls: I, cnfine: Cell, result: Cell);
    fn gfilum_c(method: Str, angtyp: Str, target: Str, illmn: Str, fixref: Str, abcorr: Str, obsrvr: Str, spoint: Dp, relate: Str, refval: D, adjust: D, step: D, nintvls: I, cnfine: Cell, result: Cell);
    fn gfoclt_c(occtyp: Str, front: Str, fshape: Str, fframe: Str, back: Str, bshape: Str, bframe: Str, abcorr: Str, obsrvr: Str, step: D, cnfine: Cell, result: Cell);
    fn gfpa_c(target: Str, illmn: Str, abcorr: Str, obsrvr: Str, relate: Str, refval: D, adjust: D, step: D, nintvls: I, cnfine: Cell, result: Cell);
    fn gfposc_c(target: Str, frame: Str, abcorr: Str, obsrvr: Str, crdsys: Str, coord: Str, relate: Str, refval: D, adjust: D, step: D, nintvls: I, cnfine: Cell, result: Cell);
    fn gfrfov_c(inst: Str, raydir: Dp, rframe: Str, abcorr: Str, obsrvr: Str, step: D, cnfine: Cell, result: Cell);
    fn gfrr_c(target: Str, abcorr: Str, obsrvr: Str, relate: Str, refval: D, adjust: D, step: D, nintvls: I, cnfine: Cell, result: Cell);
    fn gfsep_c(targ1: Str, shape1: Str, frame1: Str, targ2: Str, shape2: Str, frame2: Str, abcorr: Str, obsrvr: Str, relate: Str, refval: D, adjust: D, step: D, nintvls: I, cnfine: Cell, result: Cell);
    fn gfsntc_c(target: Str, fixref: Str, method: Str, abcorr: Str, obsrvr: Str, dref: Str, dvec: Dp, crdsys: Str, coord: Str, relate: Str, refval: D, adjust: D, step: D, nintvls: I, cnfine: Cell, result: Cell);
    fn gfsubc_c(target: Str, fixref: Str, method: Str, abcorr: Str, obsrvr: Str, crdsys: Str, coord: Str, relate: Str, refval: D, adjust: D, step: D, nintvls: I, cnfine: Cell, result: Cell);
    fn gftfov_c(inst: Str, target: Str, tshape: Str, tframe: Str, abcorr: Str, obsrvr: Str, step: D, cnfine: Cell, result: Cell);

    // Error subsystem
    fn failed_c() -> B;
    fn reset_c();
    fn getmsg_c(option: Str, lenout: I, msg: StrOut);
    fn qcktrc_c(tracelen: I, trace: StrOut);
    fn erract_c(op: Str, lenout: I, action: StrOut);
    fn errprt_c(op: Str, lenout: I, list: StrOut);
    fn errdev_c(op: Str, lenout: I, device: StrOut);
    fn setmsg_c(message: Str);
    fn sigerr_c(message: Str);
    fn errch_c(marker: Str, string: Str);
    fn errdp_c(marker: Str, number: D);
    fn errint_c(marker: Str, number: I);
    fn chkin_c(module: Str);
    fn chkout_c(module: Str);
    fn trcdep_c(depth: IpOut);
    fn trcnam_c(index: I, namelen: I, name: StrOut);
    fn trcoff_c();

    // Strings
    fn ucase_c(in_: Str, lenout: I, out: StrOut);
    fn lcase_c(in_: Str, lenout: I, out: StrOut);
    fn cmprss_c(delim: C, n: I, input: Str, lenout: I, output: StrOut);
    fn lastnb_c(string: Str) -> I;
    fn iswhsp_c(string: Str) -> B;
    fn eqstr_c(a: Str, b: Str) -> B;
    fn matchi_c(string: Str, templ: Str, wstr: C, wchr: C) -> B;
    fn matchw_c(string: Str, templ: Str, wstr: C, wchr: C) -> B;
    fn cpos_c(string: Str, chars: Str, start: I) -> I;
    fn cposr_c(string: Str, chars: Str, start: I) -> I;
    fn ncpos_c(string: Str, chars: Str, start: I) -> I;
    fn ncposr_c(string: Str, chars: Str, start: I) -> I;
    fn pos_c(string: Str, substr: Str, start: I) -> I;
    fn posr_c(string: Str, substr: Str, start: I) -> I;
    fn repmc_c(in_: Str, marker: Str, value: Str, lenout: I, out: StrOut);
    fn repmct_c(in_: Str, marker: Str, value: I, repcase: C, lenout: I, out: StrOut);
    fn repmd_c(in_: Str, marker: Str, value: D, sigdig: I, lenout: I, out: StrOut);
    fn repmf_c(in_: Str, marker: Str, value: D, sigdig: I, format: C, lenout: I, out: StrOut);
    fn repmi_c(in_: Str, marker: Str, value: I, lenout: I, out: StrOut);
    fn repmot_c(in_: Str, marker: Str, value: I, repcase: C, lenout: I, out: StrOut);
    fn lparse_c(list: Str, delim: Str, nmax: I, lenout: I, n: IpOut, items: VoidOut);
    fn lparsm_c(list: Str, delims: Str, nmax: I, lenout: I, n: IpOut, items: VoidOut);
    fn lparss_c(list: Str, delims: Str, set: Cell);
    fn kxtrct_c(keywd: Str, termlen: I, terms: Void, nterms: I, stringlen: I, substrlen: I, string: StrOut, found: BOut, substr: StrOut);
    fn nthwd_c(string: Str, nth: I, lenout: I, word: StrOut, loc: IpOut);
    fn nextwd_c(string: Str, nexlen: I, reslen: I, next: StrOut, rest: StrOut);
    fn lx4dec_c(string: Str, first: I, last: IpOut, nchar: IpOut);
    fn lx4num_c(string: Str, first: I, last: IpOut, nchar: IpOut);
    fn lx4sgn_c(string: Str, first: I, last: IpOut, nchar: IpOut);
    fn lx4uns_c(string: Str, first: I, last: IpOut, nchar: IpOut);
    fn lxqstr_c(string: Str, qchar: C, first: I, last: IpOut, nchar: IpOut);
    fn prsdp_c(string: Str, dpval: DpOut);
    fn prsint_c(string: Str, intval: IpOut);
    fn dpfmt_c(x: D, pictur: Str, lenout: I, string: StrOut);
    fn dpstrf_c(x: D, prcisn: I, format: C, lenout: I, string: StrOut);
    fn dp2hx_c(number: D, lenout: I, hxstr: StrOut, length: IpOut);
    fn hx2dp_c(string: Str, lenout: I, number: DpOut, error: BOut, errmsg: StrOut);

    // Arrays: search, order, sort
    fn isordv_c(array: Ip, n: I) -> B;
    fn isrchc_c(value: Str, ndim: I, lenvals: I, array: Void) -> I;
    fn isrchd_c(value: D, ndim: I, array: Dp) -> I;
    fn isrchi_c(value: I, ndim: I, array: Ip) -> I;
    fn esrchc_c(value: Str, ndim: I, lenvals: I, array: Void) -> I;
    fn bsrchc_c(value: Str, ndim: I, lenvals: I, array: Void) -> I;
    fn bsrchd_c(value: D, ndim: I, array: Dp) -> I;
    fn bsrchi_c(value: I, ndim: I, array: Ip) -> I;
    fn bschoc_c(value: Str, ndim: I, lenvals: I, array: Void, order: Ip) -> I;
    fn bschoi_c(value: I, ndim: I, array: Ip, order: Ip) -> I;
    fn lstlec_c(string: Str, n: I, lenvals: I, array: Void) -> I;
    fn lstltc_c(string: Str, n: I, lenvals: I, array: Void) -> I;
    fn lstled_c(x: D, n: I, array: Dp) -> I;
    fn lstltd_c(x: D, n: I, array: Dp) -> I;
    fn lstlei_c(x: I, n: I, array: Ip) -> I;
    fn lstlti_c(x: I, n: I, array: Ip) -> I;
    fn orderc_c(lenvals: I, array: Void, ndim: I, iorder: IpOut);
    fn orderd_c(array: Dp, ndim: I, iorder: IpOut);
    fn orderi_c(array: Ip, ndim: I, iorder: IpOut);
    fn reordc_c(iorder: Ip, ndim: I, lenvals: I, array: VoidOut);
    fn reordd_c(iorder: Ip, ndim: I, array: DpOut);
    fn reordi_c(iorder: Ip, ndim: I, array: IpOut);
    fn reordl_c(iorder: Ip, ndim: I, array: BOut);
    fn shellc_c(ndim: I, lenvals: I, array: VoidOut);
    fn shelld_c(ndim: I, array: DpOut);
    fn shelli_c(ndim: I, array: IpOut);
    fn sumad_c(array: Dp, n: I) -> D;
    fn sumai_c(array: Ip, n: I) -> I;
    fn moved_c(arrfrm: Dp, ndim: I, arrto: DpOut);
    fn brcktd_c(number: D, end1: D, end2: D) -> D;
    fn brckti_c(number: I, end1: I, end2: I) -> I;
    fn rquad_c(a: D, b: D, c: D, root1: DpOut, root2: DpOut);

    // Interpolation and polynomials
    fn chbder_c(cp: Dp, degp: I, x2s: Dp, x: D, nderiv: I, partdp: DpOut, dpdxs: DpOut);
    fn chbint_c(cp: Dp, degp: I, x2s: Dp, x: D, p: DpOut, dpdx: DpOut);
    fn chbigr_c(degp: I, cp: Dp, x2s: Dp, x: D, p: DpOut, itgrlp: DpOut);
    fn chbval_c(cp: Dp, degp: I, x2s: Dp, x: D, p: DpOut);
    fn hrmint_c(n: I, xvals: Dp, yvals: Dp, x: D, work: DpOut, f: DpOut, df: DpOut);
    fn hrmesp_c(n: I, first: D, step: D, yvals: Dp, x: D, f: DpOut, df: DpOut);
    fn lgrind_c(n: I, xvals: Dp, yvals: Dp, work: DpOut, x: D, p: DpOut, dp: DpOut);
    fn lgresp_c(n: I, first: D, step: D, yvals: Dp, x: D) -> D;
    fn lgrint_c(n: I, xvals: Dp, yvals: Dp, x: D) -> D;
    fn polyds_c(coeffs: Dp, deg: I, nderiv: I, t: D, p: DpOut);
    fn qderiv_c(ndim: I, f0: Dp, f2: Dp, delta: D, dfdt: DpOut);

    // Two-body and TLE propagation
    fn conics_c(elts: Dp, et: D, state: DpOut);
    fn oscelt_c(state: Dp, et: D, mu: D, elts: DpOut);
    fn oscltx_c(state: Dp, et: D, mu: D, elts: DpOut);
    fn prop2b_c(gm: D, pvinit: Dp, dt: D, pvprop: DpOut);
    fn getelm_c(frstyr: I, lineln: I, lines: Void, epoch: DpOut, elems: DpOut);
    fn evsgp4_c(et: D, geophs: Dp, elems: Dp, state: DpOut);
}
