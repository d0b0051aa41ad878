//! Rotation helpers on top of glam's `Vec3A` / `Mat3A` value types.
//!
//! Orientation matrices store the car's `forward`, `left` and `up` axes as
//! their columns, so `orientation.transpose() * world` is the local frame.

use glam::{Mat3A, Quat, Vec3A};

/// Largest rotation applied in a single integration step
const ANGULAR_MOTION_THRESHOLD: f32 = std::f32::consts::FRAC_PI_4;

/// Euler angles in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub const ZERO: Self = Self::new(0., 0., 0.);

    #[must_use]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.pitch.is_finite() && self.yaw.is_finite() && self.roll.is_finite()
    }

    #[must_use]
    pub fn to_rotation(self) -> Mat3A {
        euler_to_rotation(self)
    }
}

impl From<Rotator> for Mat3A {
    fn from(value: Rotator) -> Self {
        euler_to_rotation(value)
    }
}

impl From<Mat3A> for Rotator {
    fn from(value: Mat3A) -> Self {
        rotation_to_euler(&value)
    }
}

#[must_use]
pub fn euler_to_rotation(angles: Rotator) -> Mat3A {
    let (sp, cp) = angles.pitch.sin_cos();
    let (sy, cy) = angles.yaw.sin_cos();
    let (sr, cr) = angles.roll.sin_cos();

    Mat3A::from_cols(
        Vec3A::new(cp * cy, cp * sy, sp),
        Vec3A::new(cy * sp * sr - cr * sy, sy * sp * sr + cr * cy, -cp * sr),
        Vec3A::new(-cr * cy * sp - sr * sy, -cr * sy * sp + sr * cy, cp * cr),
    )
}

#[must_use]
pub fn rotation_to_euler(rot: &Mat3A) -> Rotator {
    let forward = rot.x_axis;
    let left = rot.y_axis;
    let up = rot.z_axis;

    Rotator {
        pitch: forward.z.atan2(forward.truncate().length()),
        yaw: forward.y.atan2(forward.x),
        roll: (-left.z).atan2(up.z),
    }
}

/// `world` expressed in the frame of `orientation`
#[inline]
#[must_use]
pub fn to_local(orientation: &Mat3A, world: Vec3A) -> Vec3A {
    orientation.transpose() * world
}

#[inline]
#[must_use]
pub fn to_world(orientation: &Mat3A, local: Vec3A) -> Vec3A {
    *orientation * local
}

/// Rotates `orientation` by `ang_vel` over `dt`, renormalizing the result.
#[must_use]
pub fn integrate_orientation(orientation: &Mat3A, ang_vel: Vec3A, dt: f32) -> Mat3A {
    let mut angle = ang_vel.length();

    if angle * dt > ANGULAR_MOTION_THRESHOLD {
        angle = ANGULAR_MOTION_THRESHOLD / dt;
    }

    let axis = if angle < 0.001 {
        // Taylor expansion of sin(x / 2) / x
        ang_vel * (0.5 * dt - dt * dt * dt * 0.020_833_334 * angle * angle)
    } else {
        ang_vel * ((0.5 * angle * dt).sin() / angle)
    };

    let dorn = Quat::from_xyzw(axis.x, axis.y, axis.z, (angle * dt * 0.5).cos());
    let orn0 = Quat::from_mat3a(orientation);

    Mat3A::from_quat((dorn * orn0).normalize())
}

/// Smallest rotation that carries `from` onto `to`, both unit length.
#[must_use]
pub fn rotation_between(from: Vec3A, to: Vec3A) -> Mat3A {
    Mat3A::from_quat(Quat::from_rotation_arc(from.into(), to.into()))
}
