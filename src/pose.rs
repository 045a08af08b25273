/*
 * File: pose.rs
 * Project: src
 * Created Date: 19/10/2026
 * Author: Shun Suzuki
 * -----
 * Last Modified: 19/10/2026
 * Modified By: Shun Suzuki (suzuki@hapis.k.u-tokyo.ac.jp)
 * -----
 * Copyright (c) 2026 Hapis Lab. All rights reserved.
 *
 */

use vecmath_util::{Quaternion, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector3,
    pub rotation: Quaternion,
}

impl Pose {
    pub fn new(position: Vector3, rotation: Quaternion) -> Self {
        Self { position, rotation }
    }

    /// `angles` are euler angles in degrees.
    pub fn from_euler_deg(position: Vector3, angles: Vector3) -> Self {
        Self::new(position, vecmath_util::quat_from_euler_deg(angles))
    }

    pub fn identity() -> Self {
        Self::new([0., 0., 0.], quaternion::id())
    }

    /// Position and rotation interpolated with the same parameter.
    pub fn interpolate(&self, to: &Pose, t: f32) -> Pose {
        Pose {
            position: vecmath_util::vec3_lerp(self.position, to.position, t),
            rotation: vecmath_util::quat_slerp(self.rotation, to.rotation, t),
        }
    }

    pub fn forward(&self) -> Vector3 {
        vecmath_util::axes(self.rotation).2
    }

    pub fn approx_eq(&self, other: &Pose, eps: f32) -> bool {
        vecmath_util::dist(self.position, other.position) < eps
            && vecmath_util::quat_approx_eq(self.rotation, other.rotation, eps)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_endpoints() {
        let a = Pose::from_euler_deg([0., 1.6, 8.], [0., 0., 0.]);
        let b = Pose::from_euler_deg([4., 1.6, 0.], [0., 90., 0.]);
        assert!(a.interpolate(&b, 0.).approx_eq(&a, 1e-4));
        assert!(b.approx_eq(&a.interpolate(&b, 1.), 1e-4));
    }

    #[test]
    fn interpolate_midpoint_position() {
        let a = Pose::new([0., 0., 0.], quaternion::id());
        let b = Pose::new([2., 4., -6.], quaternion::id());
        let mid = a.interpolate(&b, 0.5);
        assert!(vecmath_util::dist(mid.position, [1., 2., -3.]) < 1e-5);
    }

    #[test]
    fn identity_faces_positive_z() {
        let f = Pose::identity().forward();
        assert!(vecmath_util::dist(f, [0., 0., 1.]) < 1e-5);
    }
}
