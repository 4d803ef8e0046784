//! Rotations, Euler angles and quaternions.
//!
//! Axis numbers are 1 (x), 2 (y) and 3 (z). Quaternions use the SPICE convention:
//! scalar first.

use crate::{Result, SpiceContext, SpiceInt};
use cspice_marshal::{SPICEFALSE, to_bool};

impl SpiceContext<'_> {
    /// Matrix rotating coordinate frames by `angle` about axis `iaxis`.
    pub fn rotate(&mut self, angle: f64, iaxis: SpiceInt) -> Result<[[f64; 3]; 3]> {
        let mut mout = [[0.0; 3]; 3];
        native!(self, rotate_c(angle, iaxis, mout.as_mut_ptr()));
        Ok(mout)
    }

    pub fn rotmat(&mut self, m1: &[[f64; 3]; 3], angle: f64, iaxis: SpiceInt) -> Result<[[f64; 3]; 3]> {
        let mut mout = [[0.0; 3]; 3];
        native!(self, rotmat_c(m1.as_ptr(), angle, iaxis, mout.as_mut_ptr()));
        Ok(mout)
    }

    pub fn rotvec(&mut self, v1: &[f64; 3], angle: f64, iaxis: SpiceInt) -> Result<[f64; 3]> {
        let mut vout = [0.0; 3];
        native!(self, rotvec_c(v1.as_ptr(), angle, iaxis, vout.as_mut_ptr()));
        Ok(vout)
    }

    pub fn axisar(&mut self, axis: &[f64; 3], angle: f64) -> Result<[[f64; 3]; 3]> {
        let mut r = [[0.0; 3]; 3];
        native!(self, axisar_c(axis.as_ptr(), angle, r.as_mut_ptr()));
        Ok(r)
    }

    /// Axis and angle of a rotation matrix.
    pub fn raxisa(&mut self, matrix: &[[f64; 3]; 3]) -> Result<([f64; 3], f64)> {
        let mut axis = [0.0; 3];
        let mut angle = 0.0;
        native!(self, raxisa_c(matrix.as_ptr(), axis.as_mut_ptr(), &mut angle));
        Ok((axis, angle))
    }

    pub fn eul2m(
        &mut self,
        angles: [f64; 3],
        axes: [SpiceInt; 3],
    ) -> Result<[[f64; 3]; 3]> {
        let mut r = [[0.0; 3]; 3];
        native!(
            self,
            eul2m_c(angles[0], angles[1], angles[2], axes[0], axes[1], axes[2], r.as_mut_ptr())
        );
        Ok(r)
    }

    /// Euler angles `[angle3, angle2, angle1]` for the axis sequence `[axis3, axis2, axis1]`.
    pub fn m2eul(&mut self, r: &[[f64; 3]; 3], axes: [SpiceInt; 3]) -> Result<[f64; 3]> {
        let (mut a3, mut a2, mut a1) = (0.0, 0.0, 0.0);
        native!(self, m2eul_c(r.as_ptr(), axes[0], axes[1], axes[2], &mut a3, &mut a2, &mut a1));
        Ok([a3, a2, a1])
    }

    pub fn eul2xf(&mut self, eulang: &[f64; 6], axes: [SpiceInt; 3]) -> Result<[[f64; 6]; 6]> {
        let mut xform = [[0.0; 6]; 6];
        native!(self, eul2xf_c(eulang.as_ptr(), axes[0], axes[1], axes[2], xform.as_mut_ptr()));
        Ok(xform)
    }

    /// Euler angles and rates of a state transformation, and whether they are unique.
    pub fn xf2eul(&mut self, xform: &[[f64; 6]; 6], axes: [SpiceInt; 3]) -> Result<([f64; 6], bool)> {
        let mut eulang = [0.0; 6];
        let mut unique = SPICEFALSE;
        native!(
            self,
            xf2eul_c(xform.as_ptr(), axes[0], axes[1], axes[2], eulang.as_mut_ptr(), &mut unique)
        );
        Ok((eulang, to_bool(unique)))
    }

    pub fn m2q(&mut self, r: &[[f64; 3]; 3]) -> Result<[f64; 4]> {
        let mut q = [0.0; 4];
        native!(self, m2q_c(r.as_ptr(), q.as_mut_ptr()));
        Ok(q)
    }

    pub fn q2m(&mut self, q: &[f64; 4]) -> Result<[[f64; 3]; 3]> {
        let mut r = [[0.0; 3]; 3];
        native!(self, q2m_c(q.as_ptr(), r.as_mut_ptr()));
        Ok(r)
    }

    pub fn qxq(&mut self, q1: &[f64; 4], q2: &[f64; 4]) -> Result<[f64; 4]> {
        let mut qout = [0.0; 4];
        native!(self, qxq_c(q1.as_ptr(), q2.as_ptr(), qout.as_mut_ptr()));
        Ok(qout)
    }

    /// Angular velocity from a quaternion and its derivative.
    pub fn qdq2av(&mut self, q: &[f64; 4], dq: &[f64; 4]) -> Result<[f64; 3]> {
        let mut av = [0.0; 3];
        native!(self, qdq2av_c(q.as_ptr(), dq.as_ptr(), av.as_mut_ptr()));
        Ok(av)
    }

    /// Rotation and angular velocity of a state transformation.
    pub fn xf2rav(&mut self, xform: &[[f64; 6]; 6]) -> Result<([[f64; 3]; 3], [f64; 3])> {
        let mut rot = [[0.0; 3]; 3];
        let mut av = [0.0; 3];
        native!(self, xf2rav_c(xform.as_ptr(), rot.as_mut_ptr(), av.as_mut_ptr()));
        Ok((rot, av))
    }

    pub fn rav2xf(&mut self, rot: &[[f64; 3]; 3], av: &[f64; 3]) -> Result<[[f64; 6]; 6]> {
        let mut xform = [[0.0; 6]; 6];
        native!(self, rav2xf_c(rot.as_ptr(), av.as_ptr(), xform.as_mut_ptr()));
        Ok(xform)
    }
}
