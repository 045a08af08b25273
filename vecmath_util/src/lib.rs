pub type Vector3 = vecmath::Vector3<f32>;
pub type Matrix4 = vecmath::Matrix4<f32>;
pub type Quaternion = quaternion::Quaternion<f32>;

pub fn to_vec3<T: Copy + num_traits::Zero>(v: &[T]) -> vecmath::Vector3<T> {
    let x = if !v.is_empty() { v[0] } else { T::zero() };
    let y = if v.len() > 1 { v[1] } else { T::zero() };
    let z = if v.len() > 2 { v[2] } else { T::zero() };
    [x, y, z]
}

pub fn dist(l: Vector3, r: Vector3) -> f32 {
    let d = vecmath::vec3_sub(l, r);
    vecmath::vec3_dot(d, d).sqrt()
}

pub fn vec3_lerp(from: Vector3, to: Vector3, t: f32) -> Vector3 {
    vecmath::vec3_add(from, vecmath::vec3_scale(vecmath::vec3_sub(to, from), t))
}

/// Rotation from euler angles given in degrees.
pub fn quat_from_euler_deg(angles: Vector3) -> Quaternion {
    quaternion::euler_angles(
        angles[0].to_radians(),
        angles[1].to_radians(),
        angles[2].to_radians(),
    )
}

pub fn quat_dot(a: Quaternion, b: Quaternion) -> f32 {
    a.0 * b.0 + vecmath::vec3_dot(a.1, b.1)
}

pub fn quat_scale(q: Quaternion, s: f32) -> Quaternion {
    (q.0 * s, vecmath::vec3_scale(q.1, s))
}

pub fn quat_add(a: Quaternion, b: Quaternion) -> Quaternion {
    (a.0 + b.0, vecmath::vec3_add(a.1, b.1))
}

pub fn quat_normalized(q: Quaternion) -> Quaternion {
    let len = quat_dot(q, q).sqrt();
    if len < f32::EPSILON {
        return quaternion::id();
    }
    quat_scale(q, 1.0 / len)
}

/// Spherical interpolation along the shortest arc.
pub fn quat_slerp(from: Quaternion, to: Quaternion, t: f32) -> Quaternion {
    let mut to = to;
    let mut cos = quat_dot(from, to);
    if cos < 0.0 {
        to = quat_scale(to, -1.0);
        cos = -cos;
    }

    // nearly parallel: sin(theta) vanishes
    if cos > 0.9995 {
        return quat_normalized(quat_add(quat_scale(from, 1.0 - t), quat_scale(to, t)));
    }

    let theta = cos.acos();
    let sin = theta.sin();
    let s0 = ((1.0 - t) * theta).sin() / sin;
    let s1 = (t * theta).sin() / sin;
    quat_add(quat_scale(from, s0), quat_scale(to, s1))
}

/// `q` and `-q` describe the same rotation.
pub fn quat_approx_eq(a: Quaternion, b: Quaternion, eps: f32) -> bool {
    (quat_dot(quat_normalized(a), quat_normalized(b)).abs() - 1.0).abs() < eps
}

pub fn mat4_rot(rot: Quaternion) -> Matrix4 {
    let x = rot.1[0];
    let y = rot.1[1];
    let z = rot.1[2];
    let w = rot.0;
    [
        [
            1. - 2. * y * y - 2. * z * z,
            2. * x * y + 2. * w * z,
            2. * x * z - 2. * w * y,
            0.,
        ],
        [
            2. * x * y - 2. * w * z,
            1. - 2. * x * x - 2. * z * z,
            2. * y * z + 2. * w * x,
            0.,
        ],
        [
            2. * x * z + 2. * w * y,
            2. * y * z - 2. * w * x,
            1. - 2. * x * x - 2. * y * y,
            0.,
        ],
        [0., 0., 0., 1.],
    ]
}

/// Right, up and forward axes of a rotation.
pub fn axes(rot: Quaternion) -> (Vector3, Vector3, Vector3) {
    let m = mat4_rot(rot);
    (to_vec3(&m[0]), to_vec3(&m[1]), to_vec3(&m[2]))
}
