use std::sync::Arc;

use glam::Vec3A;
use log::debug;

use crate::{
    MutatorConfig,
    error::Result,
    math::euler_to_rotation,
    packet::{FieldInfoPacket, GameCar, GameTickPacket},
    sim::{Ball, BoostPad, Car, Field, Goal, Hitbox, Team},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    #[default]
    Inactive,
    Kickoff,
    Active,
    Ended,
}

/// The live world: last ingested ball and cars plus the static field description.
///
/// Everything is replaced wholesale by each successful [`Game::read_packet`];
/// a rejected packet leaves the previous state untouched.
#[derive(Clone, Debug)]
pub struct Game {
    field: Arc<Field>,
    mutator_config: MutatorConfig,
    pub ball: Ball,
    pub cars: Vec<Car>,
    pub pads: Vec<BoostPad>,
    pub goals: Vec<Goal>,
    pub time: f32,
    /// Seconds between the last two packets
    pub time_delta: f32,
    pub time_remaining: f32,
    pub gravity: Vec3A,
    pub state: GameState,
    /// Packets ingested so far
    pub frame: u64,
}

impl Game {
    #[must_use]
    pub fn new(field: Arc<Field>) -> Self {
        let mutator_config = *field.mutator_config();

        Self {
            field,
            mutator_config,
            ball: Ball::DEFAULT,
            cars: Vec::new(),
            pads: Vec::new(),
            goals: Vec::new(),
            time: 0.,
            time_delta: 0.,
            time_remaining: 0.,
            gravity: mutator_config.gravity,
            state: GameState::Inactive,
            frame: 0,
        }
    }

    #[must_use]
    pub fn field(&self) -> &Arc<Field> {
        &self.field
    }

    /// Field physics with the gravity and ball size from the last packet.
    #[must_use]
    pub const fn mutator_config(&self) -> &MutatorConfig {
        &self.mutator_config
    }

    /// Replaces the boost pad and goal layout.
    pub fn read_field_info(&mut self, info: &FieldInfoPacket) -> Result<()> {
        info.validate()?;

        let goals = info
            .goals()
            .iter()
            .map(|goal| {
                Ok(Goal {
                    team: Team::try_from(goal.team_num)?,
                    position: goal.location,
                    direction: goal.direction.normalize_or_zero(),
                    width: goal.width,
                    height: goal.height,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.pads = info
            .pads()
            .iter()
            .map(|pad| BoostPad::new(pad.location, pad.is_full_boost))
            .collect();
        self.goals = goals;

        debug!(
            "Read field info with {} boost pads and {} goals",
            self.pads.len(),
            self.goals.len()
        );

        Ok(())
    }

    /// Replaces the ball, cars and match info with `packet`.
    pub fn read_packet(&mut self, packet: &GameTickPacket) -> Result<()> {
        packet.validate()?;

        let info = &packet.game_info;
        let time = info.seconds_elapsed;

        let cars = packet
            .cars()
            .iter()
            .map(|car| car_from_packet(car, time))
            .collect::<Result<Vec<_>>>()?;

        // nothing below can fail
        self.time_delta = time - self.time;
        self.time = time;
        self.time_remaining = info.game_time_remaining;
        self.gravity = Vec3A::new(0., 0., info.world_gravity_z);
        self.state = if info.is_match_ended {
            GameState::Ended
        } else if info.is_round_active {
            if info.is_kickoff_pause {
                GameState::Kickoff
            } else {
                GameState::Active
            }
        } else {
            GameState::Inactive
        };

        self.mutator_config = self.mutator_config.with_gravity_z(info.world_gravity_z);
        self.mutator_config.ball_radius = if packet.game_ball.diameter > 0. {
            packet.game_ball.diameter * 0.5
        } else {
            self.field.mutator_config().ball_radius
        };

        for (pad, state) in self.pads.iter_mut().zip(packet.boosts()) {
            pad.is_active = state.is_active;
            pad.timer = state.timer;
        }

        self.cars = cars;

        let ball = &packet.game_ball.physics;
        self.ball = Ball::new(time, ball.location)
            .with_velocity(ball.velocity)
            .with_angular_velocity(ball.angular_velocity);

        self.frame += 1;

        debug!(
            "Read packet #{} at t={time:.3} with {} cars",
            self.frame,
            self.cars.len()
        );

        Ok(())
    }

    /// Future ball states from the live ball, which is left untouched.
    #[must_use]
    pub fn predict_ball(&self, dt: f32, num_steps: usize) -> Vec<Ball> {
        self.ball
            .predict(&self.field, &self.mutator_config, dt, num_steps)
    }
}

fn car_from_packet(car: &GameCar, time: f32) -> Result<Car> {
    let hitbox_widths = car.hitbox.to_vec3a();
    let hitbox = if hitbox_widths == Vec3A::ZERO {
        Hitbox::OCTANE
    } else {
        Hitbox {
            widths: hitbox_widths,
            offset: car.hitbox_offset,
        }
    };

    Ok(Car {
        time,
        position: car.physics.location,
        velocity: car.physics.velocity,
        angular_velocity: car.physics.angular_velocity,
        orientation: euler_to_rotation(car.physics.rotation),
        boost: car.boost as f32,
        on_ground: car.has_wheel_contact,
        demolished: car.is_demolished,
        supersonic: car.is_super_sonic,
        jumped: car.jumped,
        double_jumped: car.double_jumped,
        team: Team::try_from(car.team)?,
        hitbox,
        id: car.spawn_id,
        name: car.name.clone(),
        ..Car::default()
    })
}
