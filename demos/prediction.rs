use std::time::Instant;

use glam::Vec3A;
use log::{info, warn};
use rlpredict::{
    Context, logging,
    math::Rotator,
    mech::Drive,
    packet::{GameBall, GameCar, GameInfo, GameTickPacket, Physics},
    sim::Game,
};

const DT: f32 = 1. / 120.;

fn main() -> rlpredict::Result<()> {
    logging::try_init().ok();

    let mut context = Context::init_from_default().unwrap_or_else(|e| {
        warn!("{e}, falling back to the built-in arena");
        Context::builtin()
    });
    let field = context.set_mode("soccar")?;
    let mut game = Game::new(field.clone());

    let mut rng = fastrand::Rng::with_seed(0);
    let game_cars = (0..8)
        .map(|i| GameCar {
            physics: Physics {
                location: Vec3A::new(
                    rng.f32() * 6000. - 3000.,
                    rng.f32() * 8000. - 4000.,
                    17.,
                ),
                rotation: Rotator::new(0., rng.f32() * std::f32::consts::TAU, 0.),
                ..Physics::default()
            },
            has_wheel_contact: true,
            team: i % 2,
            boost: 33,
            spawn_id: i as u32,
            name: format!("car {i}"),
            ..GameCar::default()
        })
        .collect();

    game.read_packet(&GameTickPacket {
        game_info: GameInfo {
            seconds_elapsed: 1.,
            world_gravity_z: -650.,
            is_round_active: true,
            ..GameInfo::default()
        },
        game_ball: GameBall {
            physics: Physics {
                location: Vec3A::new(0., 0., 800.),
                velocity: Vec3A::new(600., 1550., 0.),
                ..Physics::default()
            },
            diameter: 182.5,
        },
        game_cars,
        num_cars: 8,
        ..GameTickPacket::default()
    })?;

    let start = Instant::now();
    let path = game.predict_ball(DT, 720);
    let elapsed = start.elapsed().as_secs_f32();

    if let Some(last) = path.last() {
        info!(
            "ball at t={:.2}: {} -> t={:.2}: {} ({:.3}ms)",
            game.ball.time,
            game.ball.position,
            last.time,
            last.position,
            elapsed * 1000.
        );
    }

    let start = Instant::now();
    const NUM_ROLLOUTS: usize = 2000;
    for _ in 0..NUM_ROLLOUTS {
        let mut ball = game.ball;
        for _ in 0..720 {
            ball.step(&field, DT);
        }
    }
    let elapsed = start.elapsed().as_secs_f32();
    println!(
        "Elapsed: {elapsed}\nTPS: {}",
        (NUM_ROLLOUTS * 720) as f32 / elapsed
    );

    for car in &game.cars {
        let mut drive = Drive::new(car.clone()).with_target(game.ball.position, 1400.);
        drive.step(DT);
        info!("{}: {:?}", car.name, drive.controls);
    }

    Ok(())
}
