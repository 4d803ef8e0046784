//! Coordinate system conversions and their Jacobians.
//!
//! Angles are radians. Conversions to rectangular coordinates return `[x, y, z]`;
//! conversions from rectangular coordinates return the three coordinates as a tuple in
//! the order of the native routine's output arguments.

use super::cstr;
use crate::{Result, SpiceContext};
use cspice_marshal::from_bool;

impl SpiceContext<'_> {
    pub fn latrec(&mut self, radius: f64, longitude: f64, latitude: f64) -> Result<[f64; 3]> {
        let mut rectan = [0.0; 3];
        native!(self, latrec_c(radius, longitude, latitude, rectan.as_mut_ptr()));
        Ok(rectan)
    }

    /// Returns `(radius, longitude, latitude)`.
    pub fn reclat(&mut self, rectan: &[f64; 3]) -> Result<(f64, f64, f64)> {
        let (mut radius, mut lon, mut lat) = (0.0, 0.0, 0.0);
        native!(self, reclat_c(rectan.as_ptr(), &mut radius, &mut lon, &mut lat));
        Ok((radius, lon, lat))
    }

    pub fn sphrec(&mut self, r: f64, colat: f64, slon: f64) -> Result<[f64; 3]> {
        let mut rectan = [0.0; 3];
        native!(self, sphrec_c(r, colat, slon, rectan.as_mut_ptr()));
        Ok(rectan)
    }

    /// Returns `(r, colat, slon)`.
    pub fn recsph(&mut self, rectan: &[f64; 3]) -> Result<(f64, f64, f64)> {
        let (mut r, mut colat, mut slon) = (0.0, 0.0, 0.0);
        native!(self, recsph_c(rectan.as_ptr(), &mut r, &mut colat, &mut slon));
        Ok((r, colat, slon))
    }

    pub fn cylrec(&mut self, r: f64, clon: f64, z: f64) -> Result<[f64; 3]> {
        let mut rectan = [0.0; 3];
        native!(self, cylrec_c(r, clon, z, rectan.as_mut_ptr()));
        Ok(rectan)
    }

    /// Returns `(r, clon, z)`.
    pub fn reccyl(&mut self, rectan: &[f64; 3]) -> Result<(f64, f64, f64)> {
        let (mut r, mut clon, mut z) = (0.0, 0.0, 0.0);
        native!(self, reccyl_c(rectan.as_ptr(), &mut r, &mut clon, &mut z));
        Ok((r, clon, z))
    }

    /// Geodetic to rectangular, for a spheroid with equatorial radius `re` and
    /// flattening `f`.
    pub fn georec(&mut self, lon: f64, lat: f64, alt: f64, re: f64, f: f64) -> Result<[f64; 3]> {
        let mut rectan = [0.0; 3];
        native!(self, georec_c(lon, lat, alt, re, f, rectan.as_mut_ptr()));
        Ok(rectan)
    }

    /// Returns `(lon, lat, alt)`.
    pub fn recgeo(&mut self, rectan: &[f64; 3], re: f64, f: f64) -> Result<(f64, f64, f64)> {
        let (mut lon, mut lat, mut alt) = (0.0, 0.0, 0.0);
        native!(self, recgeo_c(rectan.as_ptr(), re, f, &mut lon, &mut lat, &mut alt));
        Ok((lon, lat, alt))
    }

    /// Planetographic to rectangular. The sense of longitude depends on `body`'s
    /// rotation and the kernel pool.
    pub fn pgrrec(&mut self, body: &str, lon: f64, lat: f64, alt: f64, re: f64, f: f64) -> Result<[f64; 3]> {
        let body = cstr(body)?;
        let mut rectan = [0.0; 3];
        native!(self, pgrrec_c(body.as_ptr(), lon, lat, alt, re, f, rectan.as_mut_ptr()));
        Ok(rectan)
    }

    pub fn recpgr(&mut self, body: &str, rectan: &[f64; 3], re: f64, f: f64) -> Result<(f64, f64, f64)> {
        let body = cstr(body)?;
        let (mut lon, mut lat, mut alt) = (0.0, 0.0, 0.0);
        native!(
            self,
            recpgr_c(body.as_ptr(), rectan.as_ptr(), re, f, &mut lon, &mut lat, &mut alt)
        );
        Ok((lon, lat, alt))
    }

    pub fn radrec(&mut self, range: f64, ra: f64, dec: f64) -> Result<[f64; 3]> {
        let mut rectan = [0.0; 3];
        native!(self, radrec_c(range, ra, dec, rectan.as_mut_ptr()));
        Ok(rectan)
    }

    /// Returns `(range, ra, dec)`.
    pub fn recrad(&mut self, rectan: &[f64; 3]) -> Result<(f64, f64, f64)> {
        let (mut range, mut ra, mut dec) = (0.0, 0.0, 0.0);
        native!(self, recrad_c(rectan.as_ptr(), &mut range, &mut ra, &mut dec));
        Ok((range, ra, dec))
    }

    pub fn azlrec(&mut self, range: f64, az: f64, el: f64, azccw: bool, elplsz: bool) -> Result<[f64; 3]> {
        let mut rectan = [0.0; 3];
        native!(
            self,
            azlrec_c(range, az, el, from_bool(azccw), from_bool(elplsz), rectan.as_mut_ptr())
        );
        Ok(rectan)
    }

    /// Returns `(range, az, el)`.
    pub fn recazl(&mut self, rectan: &[f64; 3], azccw: bool, elplsz: bool) -> Result<(f64, f64, f64)> {
        let (mut range, mut az, mut el) = (0.0, 0.0, 0.0);
        native!(
            self,
            recazl_c(
                rectan.as_ptr(),
                from_bool(azccw),
                from_bool(elplsz),
                &mut range,
                &mut az,
                &mut el
            )
        );
        Ok((range, az, el))
    }

    pub fn cyllat(&mut self, r: f64, clon: f64, z: f64) -> Result<(f64, f64, f64)> {
        let (mut radius, mut lon, mut lat) = (0.0, 0.0, 0.0);
        native!(self, cyllat_c(r, clon, z, &mut radius, &mut lon, &mut lat));
        Ok((radius, lon, lat))
    }

    pub fn cylsph(&mut self, r: f64, clon: f64, z: f64) -> Result<(f64, f64, f64)> {
        let (mut radius, mut colat, mut slon) = (0.0, 0.0, 0.0);
        native!(self, cylsph_c(r, clon, z, &mut radius, &mut colat, &mut slon));
        Ok((radius, colat, slon))
    }

    pub fn latcyl(&mut self, radius: f64, lon: f64, lat: f64) -> Result<(f64, f64, f64)> {
        let (mut r, mut clon, mut z) = (0.0, 0.0, 0.0);
        native!(self, latcyl_c(radius, lon, lat, &mut r, &mut clon, &mut z));
        Ok((r, clon, z))
    }

    pub fn latsph(&mut self, radius: f64, lon: f64, lat: f64) -> Result<(f64, f64, f64)> {
        let (mut rho, mut colat, mut slon) = (0.0, 0.0, 0.0);
        native!(self, latsph_c(radius, lon, lat, &mut rho, &mut colat, &mut slon));
        Ok((rho, colat, slon))
    }

    pub fn sphcyl(&mut self, radius: f64, colat: f64, slon: f64) -> Result<(f64, f64, f64)> {
        let (mut r, mut clon, mut z) = (0.0, 0.0, 0.0);
        native!(self, sphcyl_c(radius, colat, slon, &mut r, &mut clon, &mut z));
        Ok((r, clon, z))
    }

    pub fn sphlat(&mut self, r: f64, colat: f64, slon: f64) -> Result<(f64, f64, f64)> {
        let (mut radius, mut lon, mut lat) = (0.0, 0.0, 0.0);
        native!(self, sphlat_c(r, colat, slon, &mut radius, &mut lon, &mut lat));
        Ok((radius, lon, lat))
    }

    // Jacobians

    pub fn drdlat(&mut self, r: f64, lon: f64, lat: f64) -> Result<[[f64; 3]; 3]> {
        let mut jacobi = [[0.0; 3]; 3];
        native!(self, drdlat_c(r, lon, lat, jacobi.as_mut_ptr()));
        Ok(jacobi)
    }

    pub fn dlatdr(&mut self, x: f64, y: f64, z: f64) -> Result<[[f64; 3]; 3]> {
        let mut jacobi = [[0.0; 3]; 3];
        native!(self, dlatdr_c(x, y, z, jacobi.as_mut_ptr()));
        Ok(jacobi)
    }

    pub fn drdsph(&mut self, r: f64, colat: f64, slon: f64) -> Result<[[f64; 3]; 3]> {
        let mut jacobi = [[0.0; 3]; 3];
        native!(self, drdsph_c(r, colat, slon, jacobi.as_mut_ptr()));
        Ok(jacobi)
    }

    pub fn dsphdr(&mut self, x: f64, y: f64, z: f64) -> Result<[[f64; 3]; 3]> {
        let mut jacobi = [[0.0; 3]; 3];
        native!(self, dsphdr_c(x, y, z, jacobi.as_mut_ptr()));
        Ok(jacobi)
    }

    pub fn drdcyl(&mut self, r: f64, clon: f64, z: f64) -> Result<[[f64; 3]; 3]> {
        let mut jacobi = [[0.0; 3]; 3];
        native!(self, drdcyl_c(r, clon, z, jacobi.as_mut_ptr()));
        Ok(jacobi)
    }

    pub fn dcyldr(&mut self, x: f64, y: f64, z: f64) -> Result<[[f64; 3]; 3]> {
        let mut jacobi = [[0.0; 3]; 3];
        native!(self, dcyldr_c(x, y, z, jacobi.as_mut_ptr()));
        Ok(jacobi)
    }

    pub fn drdgeo(&mut self, lon: f64, lat: f64, alt: f64, re: f64, f: f64) -> Result<[[f64; 3]; 3]> {
        let mut jacobi = [[0.0; 3]; 3];
        native!(self, drdgeo_c(lon, lat, alt, re, f, jacobi.as_mut_ptr()));
        Ok(jacobi)
    }

    pub fn dgeodr(&mut self, x: f64, y: f64, z: f64, re: f64, f: f64) -> Result<[[f64; 3]; 3]> {
        let mut jacobi = [[0.0; 3]; 3];
        native!(self, dgeodr_c(x, y, z, re, f, jacobi.as_mut_ptr()));
        Ok(jacobi)
    }

    pub fn drdpgr(
        &mut self,
        body: &str,
        lon: f64,
        lat: f64,
        alt: f64,
        re: f64,
        f: f64,
    ) -> Result<[[f64; 3]; 3]> {
        let body = cstr(body)?;
        let mut jacobi = [[0.0; 3]; 3];
        native!(self, drdpgr_c(body.as_ptr(), lon, lat, alt, re, f, jacobi.as_mut_ptr()));
        Ok(jacobi)
    }

    pub fn dpgrdr(&mut self, body: &str, x: f64, y: f64, z: f64, re: f64, f: f64) -> Result<[[f64; 3]; 3]> {
        let body = cstr(body)?;
        let mut jacobi = [[0.0; 3]; 3];
        native!(self, dpgrdr_c(body.as_ptr(), x, y, z, re, f, jacobi.as_mut_ptr()));
        Ok(jacobi)
    }

    pub fn drdazl(
        &mut self,
        range: f64,
        az: f64,
        el: f64,
        azccw: bool,
        elplsz: bool,
    ) -> Result<[[f64; 3]; 3]> {
        let mut jacobi = [[0.0; 3]; 3];
        native!(
            self,
            drdazl_c(range, az, el, from_bool(azccw), from_bool(elplsz), jacobi.as_mut_ptr())
        );
        Ok(jacobi)
    }

    pub fn dazldr(&mut self, x: f64, y: f64, z: f64, azccw: bool, elplsz: bool) -> Result<[[f64; 3]; 3]> {
        let mut jacobi = [[0.0; 3]; 3];
        native!(
            self,
            dazldr_c(x, y, z, from_bool(azccw), from_bool(elplsz), jacobi.as_mut_ptr())
        );
        Ok(jacobi)
    }

    /// Convert a state between coordinate systems (`"RECTANGULAR"`, `"LATITUDINAL"`,
    /// `"PLANETOGRAPHIC"`, ...). `body` is only consulted for geodetic and
    /// planetographic systems.
    pub fn xfmsta(&mut self, istate: &[f64; 6], icosys: &str, ocosys: &str, body: &str) -> Result<[f64; 6]> {
        let icosys = cstr(icosys)?;
        let ocosys = cstr(ocosys)?;
        let body = cstr(body)?;
        let mut ostate = [0.0; 6];
        native!(
            self,
            xfmsta_c(
                istate.as_ptr(),
                icosys.as_ptr(),
                ocosys.as_ptr(),
                body.as_ptr(),
                ostate.as_mut_ptr()
            )
        );
        Ok(ostate)
    }
}
