/*
 * File: camera_helper.rs
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

use camera_controllers::Camera;
use room_tour::Pose;

pub fn camera_set_pose(camera: &mut Camera<f32>, pose: &Pose) {
    let (right, up, forward) = vecmath_util::axes(pose.rotation);
    camera.position = pose.position;
    camera.right = right;
    camera.up = up;
    camera.forward = forward;
}

/// Normalized direction the camera looks at, projected on the floor (x, z).
pub fn camera_heading(camera: &Camera<f32>) -> [f32; 2] {
    let f = camera.forward;
    let len = (f[0] * f[0] + f[2] * f[2]).sqrt();
    if len < 1e-6 {
        [0., 1.]
    } else {
        [f[0] / len, f[2] / len]
    }
}
