use glam::Vec3A;

use crate::{
    consts::{self, car::drive},
    sim::{Car, Input},
};

/// Throttle used instead of exactly 0 when coasting. It sits under the
/// engine's throttle deadzone, so the car still coasts.
const COAST_THROTTLE: f32 = drive::THROTTLE_DEADZONE * 0.5;

/// Gain from heading error (radians) to steer
const STEER_GAIN: f32 = 3.;

/// Heading error beyond which the handbrake helps swing the car around
const POWERSLIDE_ANGLE: f32 = 2.;
const POWERSLIDE_MIN_SPEED: f32 = 500.;

/// Drives a car towards `target`, trying to hold `speed` along the way.
///
/// Set `target` and `speed`, call [`step`](Self::step), read `controls`.
/// The bound `car` is a snapshot; refresh it each tick from the live game.
#[derive(Clone, Debug)]
pub struct Drive {
    pub car: Car,
    pub target: Vec3A,
    /// Desired forward speed in uu/s
    pub speed: f32,
    /// How quickly speed errors should be corrected, in seconds
    pub reaction_time: f32,
    /// Distance to `target` that counts as arrived
    pub arrival_radius: f32,
    pub controls: Input,
    pub finished: bool,
}

impl Drive {
    pub const DEFAULT_REACTION_TIME: f32 = 0.04;
    pub const DEFAULT_ARRIVAL_RADIUS: f32 = 100.;

    #[must_use]
    pub fn new(car: Car) -> Self {
        Self {
            target: car.position,
            car,
            speed: drive::THROTTLE_MAX_SPEED,
            reaction_time: Self::DEFAULT_REACTION_TIME,
            arrival_radius: Self::DEFAULT_ARRIVAL_RADIUS,
            controls: Input::DEFAULT,
            finished: false,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: Vec3A, speed: f32) -> Self {
        self.target = target;
        self.speed = speed;
        self
    }

    /// Acceleration full throttle gives at `forward_speed`, without boost.
    #[must_use]
    pub fn throttle_accel(forward_speed: f32) -> f32 {
        drive::THROTTLE_ACCEL_FROM_SPEED.get_output(forward_speed.abs())
    }

    /// Tightest turn (1 / radius) possible at `speed`.
    #[must_use]
    pub fn max_turning_curvature(speed: f32) -> f32 {
        drive::CURVATURE_FROM_SPEED.get_output(speed.abs())
    }

    /// Fastest speed at which a turn of `curvature` can still be held.
    #[must_use]
    pub fn max_turning_speed(curvature: f32) -> f32 {
        drive::CURVATURE_FROM_SPEED.get_input_decreasing(curvature.abs())
    }

    /// Recomputes `controls` for the current `car`, `target` and `speed`.
    ///
    /// The controller keeps no state between ticks, so `dt` is unused and
    /// calling `step` twice without moving the car gives the same controls.
    pub fn step(&mut self, _dt: f32) {
        self.controls = Input::DEFAULT;

        self.steer_controller();
        self.speed_controller();

        self.finished = self.car.position.distance(self.target) < self.arrival_radius;
    }

    fn steer_controller(&mut self) {
        let target_local = self.car.local(self.target);

        // atan2(0, 0) is 0, so a target on the car means no steering
        let angle = target_local.y.atan2(target_local.x);

        self.controls.steer = (STEER_GAIN * angle).clamp(-1., 1.);
        self.controls.handbrake =
            angle.abs() > POWERSLIDE_ANGLE && self.car.forward_speed() > POWERSLIDE_MIN_SPEED;
    }

    /// Picks brake, coast, partial throttle or throttle + boost from the
    /// acceleration needed to reach `speed` within `reaction_time`.
    fn speed_controller(&mut self) {
        let forward_speed = self.car.forward_speed();
        let accel = (self.speed - forward_speed) / self.reaction_time.max(f32::EPSILON);

        let throttle_accel = Self::throttle_accel(forward_speed);
        let boost_accel = consts::BOOST_ACCEL_GROUND;

        let (brake_coast, coast_throttle) = if self.car.up().z < 0.7 {
            // walls and ceiling
            (-0.5 * drive::BRAKE_ACCEL, -0.5 * drive::BRAKE_ACCEL)
        } else {
            (
                -(0.45 * drive::BRAKE_ACCEL + 0.55 * drive::COASTING_ACCEL),
                -0.5 * drive::COASTING_ACCEL,
            )
        };
        let throttle_boost = throttle_accel + 0.5 * boost_accel;

        if accel <= brake_coast {
            self.controls.throttle = -1.;
        } else if accel < coast_throttle {
            self.controls.throttle = -COAST_THROTTLE;
        } else if accel <= throttle_boost {
            self.controls.throttle = (accel / throttle_accel.max(1.)).clamp(0.02, 1.);
        } else {
            self.controls.throttle = 1.;
            self.controls.boost = self.car.boost > 0.;
        }
    }
}
