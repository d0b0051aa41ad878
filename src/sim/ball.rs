use glam::Vec3A;
use log::trace;

use crate::{MutatorConfig, consts, sim::Field};

/// Rigid sphere state.
///
/// `Ball` is `Copy`: every copy is an independent prediction seed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ball {
    /// Simulation clock in seconds
    pub time: f32,
    pub position: Vec3A,
    pub velocity: Vec3A,
    pub angular_velocity: Vec3A,
}

impl Default for Ball {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Ball {
    /// At rest on the center of the field.
    pub const DEFAULT: Self = Self {
        time: 0.,
        position: Vec3A::new(0., 0., consts::BALL_REST_Z),
        velocity: Vec3A::ZERO,
        angular_velocity: Vec3A::ZERO,
    };

    /// A motionless ball at `position`.
    #[must_use]
    pub const fn new(time: f32, position: Vec3A) -> Self {
        Self {
            time,
            position,
            velocity: Vec3A::ZERO,
            angular_velocity: Vec3A::ZERO,
        }
    }

    #[must_use]
    pub const fn with_velocity(mut self, velocity: Vec3A) -> Self {
        self.velocity = velocity;
        self
    }

    #[must_use]
    pub const fn with_angular_velocity(mut self, angular_velocity: Vec3A) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.position.is_finite()
            && self.velocity.is_finite()
            && self.angular_velocity.is_finite()
    }

    /// Advances the ball by `dt` seconds using the field's physics parameters.
    pub fn step(&mut self, field: &Field, dt: f32) {
        self.step_with(field, field.mutator_config(), dt);
    }

    /// Advances the ball by `dt` seconds.
    ///
    /// Integration happens first, then any overlap with the arena is
    /// resolved, so the ball never rests inside a surface between steps.
    /// A non-positive `dt` does nothing.
    pub fn step_with(&mut self, field: &Field, config: &MutatorConfig, dt: f32) {
        if dt <= 0. || dt.is_nan() {
            return;
        }

        self.velocity *= (1. - config.ball_drag).powf(dt);
        self.position += self.velocity * dt + 0.5 * config.gravity * dt * dt;
        self.velocity += config.gravity * dt;

        self.collide(field, config);

        self.velocity = self.velocity.clamp_length_max(config.ball_max_speed);
        self.angular_velocity = self
            .angular_velocity
            .clamp_length_max(config.ball_max_ang_speed);

        self.time += dt;
    }

    /// Impulse response against the deepest contact: restitution along the
    /// normal, slip-limited friction along the surface that also spins the ball.
    fn collide(&mut self, field: &Field, config: &MutatorConfig) {
        let radius = config.ball_radius;
        let Some(contact) = field.collide_sphere(self.position, radius) else {
            return;
        };

        let n = contact.normal;
        let m = config.ball_mass;
        let inertia = 0.4 * m * radius * radius;

        // center to contact
        let l = contact.point - self.position;
        let m_reduced = 1. / (1. / m + l.length_squared() / inertia);

        let v_perp = n * self.velocity.dot(n).min(0.);
        let v_para = self.velocity - v_perp - l.cross(self.angular_velocity);

        let ratio = v_perp.length() / v_para.length().max(1e-4);
        let j_perp = -(1. + config.ball_world_restitution) * m * v_perp;
        let j_para = -(config.ball_world_friction * ratio).min(1.) * m_reduced * v_para;

        self.velocity += (j_perp + j_para) / m;
        self.angular_velocity += l.cross(j_para) / inertia;
        self.position += n * contact.depth;

        trace!(
            "ball contact at {} (depth {:.3}), new velocity {}",
            contact.point, contact.depth, self.velocity
        );
    }

    /// Steps a copy of this ball `num_steps` times, collecting every state.
    #[must_use]
    pub fn predict(
        &self,
        field: &Field,
        config: &MutatorConfig,
        dt: f32,
        num_steps: usize,
    ) -> Vec<Self> {
        let mut ball = *self;
        (0..num_steps)
            .map(|_| {
                ball.step_with(field, config, dt);
                ball
            })
            .collect()
    }
}
