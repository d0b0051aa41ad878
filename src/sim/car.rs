use glam::{Mat3A, Vec3A};
use log::trace;

use crate::{
    MutatorConfig, consts,
    consts::car::{air_control, drive, jump},
    math,
    sim::{Field, Input, Team},
};

/// Oriented box around the car, in the car's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hitbox {
    /// Full length, width and height
    pub widths: Vec3A,
    /// Box center relative to the car origin
    pub offset: Vec3A,
}

impl Default for Hitbox {
    fn default() -> Self {
        Self::OCTANE
    }
}

impl Hitbox {
    pub const OCTANE: Self = Self {
        widths: consts::car::hitbox::SIZE,
        offset: consts::car::hitbox::OFFSET,
    };
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    /// Simulation clock in seconds
    pub time: f32,
    pub position: Vec3A,
    pub velocity: Vec3A,
    pub angular_velocity: Vec3A,
    /// Columns are the car's forward, left and up axes
    pub orientation: Mat3A,
    /// `0..=100`
    pub boost: f32,
    /// Wheels touching a surface
    pub on_ground: bool,
    pub demolished: bool,
    pub supersonic: bool,
    pub jumped: bool,
    pub double_jumped: bool,
    pub team: Team,
    pub hitbox: Hitbox,
    pub id: u32,
    pub name: String,
    /// What the car did on its last step
    pub controls: Input,
    /// Seconds since the first jump, while `jumped`
    pub jump_timer: f32,
    /// Seconds spent supersonic below the start speed
    pub supersonic_timer: f32,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            time: 0.,
            position: Vec3A::new(0., 0., consts::car::REST_Z),
            velocity: Vec3A::ZERO,
            angular_velocity: Vec3A::ZERO,
            orientation: Mat3A::IDENTITY,
            boost: MutatorConfig::DEFAULT.car_spawn_boost_amount,
            on_ground: true,
            demolished: false,
            supersonic: false,
            jumped: false,
            double_jumped: false,
            team: Team::Blue,
            hitbox: Hitbox::OCTANE,
            id: 0,
            name: String::new(),
            controls: Input::DEFAULT,
            jump_timer: 0.,
            supersonic_timer: 0.,
        }
    }
}

impl Car {
    #[must_use]
    pub fn new(position: Vec3A, orientation: Mat3A) -> Self {
        Self {
            position,
            orientation,
            ..Self::default()
        }
    }

    #[must_use]
    #[inline]
    pub fn forward(&self) -> Vec3A {
        self.orientation.x_axis
    }

    #[must_use]
    #[inline]
    pub fn left(&self) -> Vec3A {
        self.orientation.y_axis
    }

    #[must_use]
    #[inline]
    pub fn up(&self) -> Vec3A {
        self.orientation.z_axis
    }

    /// `world` relative to the car, in the car's frame
    #[must_use]
    pub fn local(&self, world: Vec3A) -> Vec3A {
        math::to_local(&self.orientation, world - self.position)
    }

    #[must_use]
    pub fn forward_speed(&self) -> f32 {
        self.velocity.dot(self.forward())
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.position.is_finite()
            && self.velocity.is_finite()
            && self.angular_velocity.is_finite()
            && self.orientation.is_finite()
            && self.boost.is_finite()
    }

    /// Advances the car by `dt` seconds with `input` held.
    pub fn step(&mut self, field: &Field, input: &Input, dt: f32) {
        self.step_with(field, field.mutator_config(), input, dt);
    }

    pub fn step_with(&mut self, field: &Field, config: &MutatorConfig, input: &Input, dt: f32) {
        if dt <= 0. || dt.is_nan() {
            return;
        }

        let input = input.clamped();

        if self.demolished {
            self.controls = input;
            self.time += dt;
            return;
        }

        let boosting = input.boost && self.boost > 0.;
        let jump_pressed = input.jump && !self.controls.jump;

        if self.on_ground {
            self.drive(config, &input, boosting, dt);

            if jump_pressed {
                self.velocity += self.up() * config.jump_immediate_force;
                self.on_ground = false;
                self.jumped = true;
                self.jump_timer = 0.;
            }
        } else {
            self.fly(config, &input, boosting, jump_pressed, dt);
        }

        if boosting {
            self.boost = (self.boost - config.boost_used_per_second * dt).max(0.);
        }

        self.velocity = self.velocity.clamp_length_max(config.car_max_speed);
        self.angular_velocity = self
            .angular_velocity
            .clamp_length_max(config.car_max_ang_speed);

        self.position += self.velocity * dt;
        self.orientation = math::integrate_orientation(&self.orientation, self.angular_velocity, dt);

        self.collide(field);
        self.update_supersonic(dt);

        self.controls = input;
        self.time += dt;
    }

    /// Wheels-down model: throttle, brake or coast along the forward axis,
    /// full tire grip sideways, and yaw from the speed-dependent turn radius.
    fn drive(&mut self, config: &MutatorConfig, input: &Input, boosting: bool, dt: f32) {
        let forward = self.forward();
        let forward_speed = self.velocity.dot(forward);
        let abs_forward_speed = forward_speed.abs();
        let throttle = if boosting { 1. } else { input.throttle };

        let mut accel = if throttle.abs() >= drive::THROTTLE_DEADZONE {
            if forward_speed * throttle < 0. && abs_forward_speed > drive::STOPPING_FORWARD_VEL {
                -forward_speed.signum() * drive::BRAKE_ACCEL.min(abs_forward_speed / dt)
            } else {
                throttle * drive::THROTTLE_ACCEL_FROM_SPEED.get_output(abs_forward_speed)
            }
        } else {
            -forward_speed.signum() * drive::COASTING_ACCEL.min(abs_forward_speed / dt)
        };

        if boosting {
            accel += config.boost_accel_ground;
        }

        self.velocity += forward * (accel * dt);

        let left = self.left();
        let lateral_keep = if input.handbrake {
            drive::POWERSLIDE_LATERAL_KEEP
        } else {
            0.
        };
        self.velocity -= left * (self.velocity.dot(left) * (1. - lateral_keep));

        let forward_speed = self.velocity.dot(forward);
        let curvature = drive::CURVATURE_FROM_SPEED.get_output(forward_speed.abs());
        self.angular_velocity = self.up() * (input.steer * curvature * forward_speed);
    }

    fn fly(
        &mut self,
        config: &MutatorConfig,
        input: &Input,
        boosting: bool,
        jump_pressed: bool,
        dt: f32,
    ) {
        let forward = self.forward();
        let up = self.up();

        self.velocity += config.gravity * dt;
        self.velocity += forward * (input.throttle * drive::THROTTLE_AIR_ACCEL * dt);
        if boosting {
            self.velocity += forward * (config.boost_accel_air * dt);
        }

        if self.jumped {
            self.jump_timer += dt;

            let holding = self.jump_timer < jump::MIN_TIME
                || (input.jump && self.jump_timer < jump::MAX_TIME);
            if holding && !self.double_jumped {
                self.velocity += up * (config.jump_accel * dt);
            }
        }

        let can_double_jump = (!self.double_jumped || config.unlimited_double_jumps)
            && self.jumped
            && self.jump_timer < jump::DOUBLEJUMP_MAX_DELAY;
        if jump_pressed && can_double_jump {
            self.velocity += up * config.jump_immediate_force;
            self.double_jumped = true;
        }

        // roll, pitch, yaw about the forward, left, up axes
        let local_ang_vel = math::to_local(&self.orientation, self.angular_velocity);
        let ang_accel = air_control::TORQUE * Vec3A::new(input.roll, input.pitch, input.yaw)
            + air_control::DAMPING
                * local_ang_vel
                * Vec3A::new(1., 1. - input.pitch.abs(), 1. - input.yaw.abs());

        self.angular_velocity += math::to_world(&self.orientation, ang_accel * dt);
    }

    /// Pushes the car out of the arena and decides whether it is on its wheels.
    ///
    /// Every surface within reach is resolved, so a car driving along a wall
    /// keeps its wheels on the floor.
    fn collide(&mut self, field: &Field) {
        let probe_radius = consts::car::REST_Z + consts::car::GROUND_TOLERANCE;
        let contacts = field.sphere_contacts(self.position, probe_radius);

        let up = self.up();
        let Some(ground) = contacts
            .iter()
            .max_by(|a, b| up.dot(a.normal).total_cmp(&up.dot(b.normal)))
            .copied()
        else {
            self.on_ground = false;
            return;
        };

        let start = self.position;
        let incoming = self.velocity;

        for contact in &contacts {
            let n = contact.normal;

            // earlier pushes may already have cleared this surface
            let penetration =
                contact.depth - (self.position - start).dot(n) - consts::car::GROUND_TOLERANCE;
            if penetration > 0. {
                self.position += n * penetration;
            }

            let normal_speed = self.velocity.dot(n);
            if normal_speed < 0. {
                self.velocity -= n * normal_speed;
            }
        }

        let n = ground.normal;

        // a car leaving the surface after a jump keeps flying
        let separating = incoming.dot(n) > 1.;
        let wheels_down = up.dot(n) > consts::car::LANDING_NORMAL_DOT;

        if wheels_down && !separating {
            if !self.on_ground {
                trace!("car {} landed at {}", self.id, self.position);
            }

            self.on_ground = true;
            self.jumped = false;
            self.double_jumped = false;
            self.jump_timer = 0.;
            self.orientation = math::rotation_between(up, n) * self.orientation;
            self.angular_velocity = n * self.angular_velocity.dot(n);
        } else {
            self.on_ground = false;
        }
    }

    fn update_supersonic(&mut self, dt: f32) {
        let speed = self.velocity.length();

        if speed >= consts::car::SUPERSONIC_START_SPEED {
            self.supersonic = true;
            self.supersonic_timer = 0.;
        } else if self.supersonic
            && speed >= consts::car::SUPERSONIC_MAINTAIN_MIN_SPEED
            && self.supersonic_timer < consts::car::SUPERSONIC_MAINTAIN_MAX_TIME
        {
            self.supersonic_timer += dt;
        } else {
            self.supersonic = false;
            self.supersonic_timer = 0.;
        }
    }
}
