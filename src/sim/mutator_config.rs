use glam::Vec3A;

use crate::{GameMode, consts};

/// Physics parameters for one arena. Ball and car stepping read everything
/// tunable from here.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutatorConfig {
    pub gravity: Vec3A,
    pub ball_radius: f32,
    pub ball_mass: f32,
    pub ball_max_speed: f32,
    pub ball_max_ang_speed: f32,
    pub ball_drag: f32,
    pub ball_world_friction: f32,
    pub ball_world_restitution: f32,
    pub car_max_speed: f32,
    pub car_max_ang_speed: f32,
    pub jump_accel: f32,
    pub jump_immediate_force: f32,
    pub boost_accel_ground: f32,
    pub boost_accel_air: f32,
    pub boost_used_per_second: f32,
    pub car_spawn_boost_amount: f32,
    pub boost_pad_cooldown_big: f32,
    pub boost_pad_cooldown_small: f32,
    pub unlimited_double_jumps: bool,
}

impl Default for MutatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl MutatorConfig {
    pub const DEFAULT: Self = Self::new(GameMode::Soccar);

    #[must_use]
    pub const fn new(game_mode: GameMode) -> Self {
        Self {
            gravity: Vec3A::new(0., 0., consts::GRAVITY_Z),
            ball_radius: match game_mode {
                GameMode::Hoops => consts::BALL_COLLISION_RADIUS_HOOPS,
                _ => consts::BALL_COLLISION_RADIUS_SOCCAR,
            },
            ball_mass: consts::BALL_MASS,
            ball_max_speed: consts::BALL_MAX_SPEED,
            ball_max_ang_speed: consts::BALL_MAX_ANG_SPEED,
            ball_drag: consts::BALL_DRAG,
            ball_world_friction: consts::BALL_FRICTION,
            ball_world_restitution: consts::BALL_RESTITUTION,
            car_max_speed: consts::car::MAX_SPEED,
            car_max_ang_speed: consts::car::MAX_ANG_SPEED,
            jump_accel: consts::car::jump::ACCEL,
            jump_immediate_force: consts::car::jump::IMMEDIATE_FORCE,
            boost_accel_ground: consts::BOOST_ACCEL_GROUND,
            boost_accel_air: consts::BOOST_ACCEL_AIR,
            boost_used_per_second: consts::BOOST_USED_PER_SECOND,
            car_spawn_boost_amount: consts::BOOST_SPAWN_AMOUNT,
            boost_pad_cooldown_big: consts::boostpads::COOLDOWN_BIG,
            boost_pad_cooldown_small: consts::boostpads::COOLDOWN_SMALL,
            unlimited_double_jumps: false,
        }
    }

    #[must_use]
    pub const fn with_gravity_z(mut self, gravity_z: f32) -> Self {
        self.gravity = Vec3A::new(0., 0., gravity_z);
        self
    }
}
