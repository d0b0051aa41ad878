//! The snapshot types a game client hands to [`Game`](crate::sim::Game).
//!
//! Counts (`num_cars`, `num_boost`, ...) say how many leading entries of the
//! matching `Vec` are live; trailing entries are ignored.

use glam::Vec3A;

use crate::{
    consts::{BOOST_MAX, MAX_BOOSTS, MAX_CARS, MAX_GOALS},
    error::{Error, Result},
    math::Rotator,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Physics {
    pub location: Vec3A,
    pub rotation: Rotator,
    pub velocity: Vec3A,
    pub angular_velocity: Vec3A,
}

impl Physics {
    fn validate(&self, what: &'static str) -> Result<()> {
        if self.location.is_finite()
            && self.rotation.is_finite()
            && self.velocity.is_finite()
            && self.angular_velocity.is_finite()
        {
            Ok(())
        } else {
            Err(Error::validation(what, "physics contains a non-finite value"))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxShape {
    pub length: f32,
    pub width: f32,
    pub height: f32,
}

impl BoxShape {
    #[must_use]
    pub const fn to_vec3a(self) -> Vec3A {
        Vec3A::new(self.length, self.width, self.height)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameCar {
    pub physics: Physics,
    pub is_demolished: bool,
    pub has_wheel_contact: bool,
    pub is_super_sonic: bool,
    pub jumped: bool,
    pub double_jumped: bool,
    /// 0 is blue, 1 is orange
    pub team: i32,
    pub boost: i32,
    /// All zero means "not reported", which falls back to the Octane hitbox
    pub hitbox: BoxShape,
    pub hitbox_offset: Vec3A,
    pub spawn_id: u32,
    pub name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameBall {
    pub physics: Physics,
    /// Collision sphere diameter, `0` when not reported
    pub diameter: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameBoost {
    pub is_active: bool,
    pub timer: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameInfo {
    pub seconds_elapsed: f32,
    pub game_time_remaining: f32,
    pub world_gravity_z: f32,
    pub is_match_ended: bool,
    pub is_round_active: bool,
    pub is_kickoff_pause: bool,
}

/// One tick of live game state.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameTickPacket {
    pub game_info: GameInfo,
    pub game_ball: GameBall,
    pub game_cars: Vec<GameCar>,
    pub num_cars: usize,
    pub game_boosts: Vec<GameBoost>,
    pub num_boost: usize,
}

impl GameTickPacket {
    /// Live cars, `game_cars[..num_cars]`. Only meaningful after [`validate`](Self::validate).
    #[must_use]
    pub fn cars(&self) -> &[GameCar] {
        &self.game_cars[..self.num_cars.min(self.game_cars.len())]
    }

    #[must_use]
    pub fn boosts(&self) -> &[GameBoost] {
        &self.game_boosts[..self.num_boost.min(self.game_boosts.len())]
    }

    /// Checks everything ingestion relies on, without touching any game state.
    pub fn validate(&self) -> Result<()> {
        check_count("num_cars", self.num_cars, self.game_cars.len(), MAX_CARS)?;
        check_count("num_boost", self.num_boost, self.game_boosts.len(), MAX_BOOSTS)?;

        let info = &self.game_info;
        if !(info.seconds_elapsed.is_finite()
            && info.game_time_remaining.is_finite()
            && info.world_gravity_z.is_finite())
        {
            return Err(Error::validation("game_info", "non-finite time or gravity"));
        }

        self.game_ball.physics.validate("game_ball")?;
        if !(self.game_ball.diameter.is_finite() && self.game_ball.diameter >= 0.) {
            return Err(Error::validation(
                "game_ball",
                format!("bad diameter {}", self.game_ball.diameter),
            ));
        }

        for (i, car) in self.cars().iter().enumerate() {
            car.physics.validate("game_cars")?;

            if !(0..=1).contains(&car.team) {
                return Err(Error::validation(
                    "game_cars",
                    format!("car {i} has team {}", car.team),
                ));
            }

            if !(0..=BOOST_MAX as i32).contains(&car.boost) {
                return Err(Error::validation(
                    "game_cars",
                    format!("car {i} has boost {}", car.boost),
                ));
            }

            let hitbox = car.hitbox.to_vec3a();
            if !hitbox.is_finite() || hitbox.min_element() < 0. || !car.hitbox_offset.is_finite() {
                return Err(Error::validation(
                    "game_cars",
                    format!("car {i} has a bad hitbox"),
                ));
            }
        }

        if let Some(i) = self.boosts().iter().position(|pad| !pad.timer.is_finite()) {
            return Err(Error::validation(
                "game_boosts",
                format!("pad {i} has a non-finite timer"),
            ));
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldBoostPad {
    pub location: Vec3A,
    pub is_full_boost: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldGoalInfo {
    pub team_num: i32,
    pub location: Vec3A,
    pub direction: Vec3A,
    pub width: f32,
    pub height: f32,
}

/// Static arena description, sent once per match.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldInfoPacket {
    pub boost_pads: Vec<FieldBoostPad>,
    pub num_boosts: usize,
    pub goals: Vec<FieldGoalInfo>,
    pub num_goals: usize,
}

impl FieldInfoPacket {
    #[must_use]
    pub fn pads(&self) -> &[FieldBoostPad] {
        &self.boost_pads[..self.num_boosts.min(self.boost_pads.len())]
    }

    #[must_use]
    pub fn goals(&self) -> &[FieldGoalInfo] {
        &self.goals[..self.num_goals.min(self.goals.len())]
    }

    pub fn validate(&self) -> Result<()> {
        check_count("num_boosts", self.num_boosts, self.boost_pads.len(), MAX_BOOSTS)?;
        check_count("num_goals", self.num_goals, self.goals.len(), MAX_GOALS)?;

        if let Some(i) = self.pads().iter().position(|pad| !pad.location.is_finite()) {
            return Err(Error::validation(
                "boost_pads",
                format!("pad {i} has a non-finite location"),
            ));
        }

        for (i, goal) in self.goals().iter().enumerate() {
            if !(0..=1).contains(&goal.team_num) {
                return Err(Error::validation(
                    "goals",
                    format!("goal {i} has team {}", goal.team_num),
                ));
            }

            if !(goal.location.is_finite()
                && goal.direction.is_finite()
                && goal.width.is_finite()
                && goal.height.is_finite())
            {
                return Err(Error::validation(
                    "goals",
                    format!("goal {i} has a non-finite value"),
                ));
            }
        }

        Ok(())
    }
}

fn check_count(what: &'static str, count: usize, len: usize, max: usize) -> Result<()> {
    if count > max {
        Err(Error::validation(
            what,
            format!("{count} exceeds the supported maximum of {max}"),
        ))
    } else if count > len {
        Err(Error::validation(
            what,
            format!("{count} entries claimed but only {len} provided"),
        ))
    } else {
        Ok(())
    }
}
