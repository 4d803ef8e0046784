use crate::{Result, SpiceContext, SpiceInt};

macro_rules! constant {
    ($( $(#[$meta:meta])* $name:ident : $sym:ident -> $ty:ty; )*) => {
        impl SpiceContext<'_> {
            $(
                $(#[$meta])*
                pub fn $name(&mut self) -> Result<$ty> {
                    Ok(native!(self, $sym()))
                }
            )*
        }
    };
}

constant! {
    /// Julian date of the Besselian year 1900.0.
    b1900: b1900_c -> f64;
    /// Julian date of the Besselian year 1950.0.
    b1950: b1950_c -> f64;
    /// Speed of light in vacuum, km/s.
    clight: clight_c -> f64;
    dpmax: dpmax_c -> f64;
    dpmin: dpmin_c -> f64;
    /// Degrees per radian.
    dpr: dpr_c -> f64;
    halfpi: halfpi_c -> f64;
    intmax: intmax_c -> SpiceInt;
    intmin: intmin_c -> SpiceInt;
    j1900: j1900_c -> f64;
    j1950: j1950_c -> f64;
    j2000: j2000_c -> f64;
    j2100: j2100_c -> f64;
    /// Seconds per Julian year.
    jyear: jyear_c -> f64;
    pi: pi_c -> f64;
    /// Radians per degree.
    rpd: rpd_c -> f64;
    /// Seconds per day.
    spd: spd_c -> f64;
    twopi: twopi_c -> f64;
    /// Seconds per tropical year.
    tyear: tyear_c -> f64;
}
