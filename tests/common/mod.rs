use std::sync::Arc;

use fastrand::Rng;
use glam::Vec3A;
use rlpredict::{
    Context,
    math::Rotator,
    packet::{
        BoxShape, FieldBoostPad, FieldGoalInfo, FieldInfoPacket, GameBall, GameBoost, GameCar,
        GameInfo, GameTickPacket, Physics,
    },
    sim::Field,
};

pub const DT: f32 = 1. / 120.;

pub fn soccar() -> Arc<Field> {
    Context::builtin().set_mode("soccar").unwrap()
}

pub fn void() -> Arc<Field> {
    Context::builtin().set_mode("void").unwrap()
}

pub fn uniform(rng: &mut Rng, lo: f32, hi: f32) -> f32 {
    lo + rng.f32() * (hi - lo)
}

fn random_vec(rng: &mut Rng, lo: Vec3A, hi: Vec3A) -> Vec3A {
    Vec3A::new(
        uniform(rng, lo.x, hi.x),
        uniform(rng, lo.y, hi.y),
        uniform(rng, lo.z, hi.z),
    )
}

pub fn random_location(rng: &mut Rng) -> Vec3A {
    random_vec(rng, Vec3A::new(-4000., -5020., 100.), Vec3A::new(4000., 5020., 1944.))
}

pub fn random_physics(rng: &mut Rng, rotation: Rotator) -> Physics {
    Physics {
        location: random_location(rng),
        rotation,
        velocity: random_vec(rng, Vec3A::splat(-2000.), Vec3A::splat(2000.)),
        angular_velocity: random_vec(rng, Vec3A::NEG_ONE, Vec3A::ONE),
    }
}

pub fn field_info() -> FieldInfoPacket {
    let goals = vec![
        FieldGoalInfo {
            team_num: 0,
            location: Vec3A::new(0., 5120., 300.),
            direction: Vec3A::new(0., -1., 0.),
            width: 300.,
            height: 100.,
        },
        FieldGoalInfo {
            team_num: 1,
            location: Vec3A::new(0., -5120., 300.),
            direction: Vec3A::new(0., 1., 0.),
            width: 300.,
            height: 100.,
        },
    ];

    let boost_pads = (0..15)
        .map(|i| FieldBoostPad {
            location: Vec3A::new(15., i as f32, 0.1),
            is_full_boost: true,
        })
        .collect();

    FieldInfoPacket {
        boost_pads,
        num_boosts: 15,
        goals,
        num_goals: 2,
    }
}

pub fn random_car(rng: &mut Rng) -> GameCar {
    GameCar {
        physics: random_physics(rng, Rotator::new(0., 1.1, 0.)),
        team: 0,
        boost: 50,
        hitbox: BoxShape {
            length: 118.,
            width: 84.2,
            height: 36.2,
        },
        hitbox_offset: Vec3A::new(13.9, 0., 20.8),
        spawn_id: rng.u32(0..1 << 30),
        name: "DownToEarth".to_string(),
        ..GameCar::default()
    }
}

pub fn random_packet(rng: &mut Rng, num_cars: usize) -> GameTickPacket {
    let game_boosts = (0..15)
        .map(|_| {
            let timer = (uniform(rng, 0., 10.) * 10.).round() / 10.;
            GameBoost {
                is_active: timer == 0.,
                timer,
            }
        })
        .collect();

    GameTickPacket {
        game_info: GameInfo {
            seconds_elapsed: uniform(rng, 0., 4.),
            world_gravity_z: -650.,
            is_round_active: true,
            ..GameInfo::default()
        },
        game_ball: GameBall {
            physics: random_physics(rng, Rotator::ZERO),
            diameter: 182.5,
        },
        game_cars: (0..num_cars).map(|_| random_car(rng)).collect(),
        num_cars,
        game_boosts,
        num_boost: 15,
    }
}
