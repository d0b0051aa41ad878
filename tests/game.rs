#![allow(unused)]

mod common;

use common::*;
use fastrand::Rng;
use glam::Vec3A;
use rlpredict::{
    Error, consts,
    sim::{Ball, Game, GameState, Team},
};

fn game_with_field_info() -> Game {
    let mut game = Game::new(soccar());
    game.read_field_info(&field_info()).unwrap();
    game
}

#[test]
fn new_game_is_empty() {
    let game = Game::new(soccar());

    assert!(game.cars.is_empty());
    assert!(game.pads.is_empty());
    assert!(game.goals.is_empty());
    assert_eq!(game.ball, Ball::DEFAULT);
    assert_eq!(game.state, GameState::Inactive);
    assert_eq!(game.frame, 0);
}

#[test]
fn reads_field_info() {
    let game = game_with_field_info();

    assert_eq!(game.pads.len(), 15);
    assert!(game.pads.iter().all(|pad| pad.is_big && pad.is_active));
    assert_eq!(game.pads[3].position, Vec3A::new(15., 3., 0.1));

    assert_eq!(game.goals.len(), 2);
    assert_eq!(game.goals[0].team, Team::Blue);
    assert_eq!(game.goals[1].team, Team::Orange);
    assert_eq!(game.goals[1].position, Vec3A::new(0., -5120., 300.));
    assert_eq!(game.goals[1].direction, Vec3A::Y);
}

#[test]
fn rejected_field_info_keeps_the_old_layout() {
    let mut game = game_with_field_info();

    let mut info = field_info();
    info.goals[1].team_num = 5;
    assert!(matches!(
        game.read_field_info(&info),
        Err(Error::Validation { .. })
    ));

    let mut info = field_info();
    info.num_boosts = 16;
    assert!(game.read_field_info(&info).is_err());

    assert_eq!(game.pads.len(), 15);
    assert_eq!(game.goals.len(), 2);
}

#[test]
fn ingests_every_car() {
    let mut rng = Rng::with_seed(1);
    let mut game = game_with_field_info();

    for num_cars in [1, 2, 6, 8] {
        let packet = random_packet(&mut rng, num_cars);
        game.read_packet(&packet).unwrap();

        assert_eq!(game.cars.len(), num_cars);
        for (car, state) in game.cars.iter().zip(&packet.game_cars) {
            assert_ne!(car.position, Vec3A::ZERO);
            assert_eq!(car.position, state.physics.location);
            assert_eq!(car.velocity, state.physics.velocity);
            assert_eq!(car.id, state.spawn_id);
            assert_eq!(car.name, "DownToEarth");
            assert_eq!(car.boost, 50.);
            assert_eq!(car.team, Team::Blue);
            assert_eq!(car.time, packet.game_info.seconds_elapsed);
        }
    }
}

#[test]
fn car_orientation_follows_rotation() {
    let mut rng = Rng::with_seed(2);
    let mut game = game_with_field_info();
    game.read_packet(&random_packet(&mut rng, 1)).unwrap();

    // random cars face yaw 1.1 on flat ground
    let car = &game.cars[0];
    let expected = Vec3A::new(1.1f32.cos(), 1.1f32.sin(), 0.);
    assert!(car.forward().distance(expected) < 1e-5);
    assert!(car.up().distance(Vec3A::Z) < 1e-5);
    assert!((car.hitbox.widths - Vec3A::new(118., 84.2, 36.2)).length() < 1e-5);
}

#[test]
fn missing_hitbox_falls_back_to_octane() {
    let mut rng = Rng::with_seed(3);
    let mut game = game_with_field_info();

    let mut packet = random_packet(&mut rng, 1);
    packet.game_cars[0].hitbox = Default::default();
    game.read_packet(&packet).unwrap();

    assert_eq!(game.cars[0].hitbox, rlpredict::sim::Hitbox::OCTANE);
}

#[test]
fn reingestion_replaces_everything() {
    let mut rng = Rng::with_seed(4);
    let mut game = game_with_field_info();

    let first = random_packet(&mut rng, 8);
    game.read_packet(&first).unwrap();

    let mut second = random_packet(&mut rng, 3);
    second.game_info.seconds_elapsed = first.game_info.seconds_elapsed + 1.;
    game.read_packet(&second).unwrap();

    assert_eq!(game.cars.len(), 3);
    for (car, state) in game.cars.iter().zip(&second.game_cars) {
        assert_eq!(car.position, state.physics.location);
    }
    assert!(
        first
            .game_cars
            .iter()
            .all(|old| game.cars.iter().all(|car| car.position != old.physics.location))
    );

    assert_eq!(game.ball.position, second.game_ball.physics.location);
    assert_eq!(game.ball.velocity, second.game_ball.physics.velocity);
    assert_eq!(game.ball.time, second.game_info.seconds_elapsed);
    assert_eq!(game.time, second.game_info.seconds_elapsed);
    assert!((game.time_delta - 1.).abs() < 1e-5);
    assert_eq!(game.frame, 2);
}

#[test]
fn rejected_packet_leaves_state_untouched() {
    let mut rng = Rng::with_seed(5);
    let mut game = game_with_field_info();

    let good = random_packet(&mut rng, 4);
    game.read_packet(&good).unwrap();

    let before_cars = game.cars.clone();
    let before_ball = game.ball;
    let before_pads = game.pads.clone();

    let too_many = random_packet(&mut rng, consts::MAX_CARS + 1);

    let mut overclaimed = random_packet(&mut rng, 2);
    overclaimed.num_cars = 3;

    let mut bad_team = random_packet(&mut rng, 2);
    bad_team.game_cars[1].team = 2;

    let mut bad_boost = random_packet(&mut rng, 2);
    bad_boost.game_cars[0].boost = 101;

    let mut nan_ball = random_packet(&mut rng, 2);
    nan_ball.game_ball.physics.velocity.y = f32::NAN;

    let mut inf_car = random_packet(&mut rng, 2);
    inf_car.game_cars[1].physics.location.x = f32::INFINITY;

    let mut bad_timer = random_packet(&mut rng, 2);
    bad_timer.game_boosts[7].timer = f32::NAN;

    for packet in [too_many, overclaimed, bad_team, bad_boost, nan_ball, inf_car, bad_timer] {
        let result = game.read_packet(&packet);
        assert!(matches!(result, Err(Error::Validation { .. })), "{result:?}");

        assert_eq!(game.cars, before_cars);
        assert_eq!(game.ball, before_ball);
        assert_eq!(game.pads, before_pads);
        assert_eq!(game.time, good.game_info.seconds_elapsed);
        assert_eq!(game.frame, 1);
    }
}

#[test]
fn trailing_entries_are_ignored() {
    let mut rng = Rng::with_seed(6);
    let mut game = game_with_field_info();

    let mut packet = random_packet(&mut rng, 8);
    packet.num_cars = 5;
    packet.game_cars[6].team = 9;
    game.read_packet(&packet).unwrap();

    assert_eq!(game.cars.len(), 5);
}

#[test]
fn pad_state_follows_packets() {
    let mut rng = Rng::with_seed(7);
    let mut game = game_with_field_info();

    let packet = random_packet(&mut rng, 1);
    game.read_packet(&packet).unwrap();

    for (pad, state) in game.pads.iter().zip(&packet.game_boosts) {
        assert_eq!(pad.is_active, state.is_active);
        assert_eq!(pad.timer, state.timer);
    }

    let config = *game.mutator_config();
    let waiting = game.pads.iter().find(|pad| !pad.is_active).unwrap();
    assert!(waiting.time_until_active(&config) <= consts::boostpads::COOLDOWN_BIG);
}

#[test]
fn match_state_mapping() {
    let mut rng = Rng::with_seed(8);
    let mut game = game_with_field_info();
    let mut packet = random_packet(&mut rng, 1);

    game.read_packet(&packet).unwrap();
    assert_eq!(game.state, GameState::Active);

    packet.game_info.is_kickoff_pause = true;
    game.read_packet(&packet).unwrap();
    assert_eq!(game.state, GameState::Kickoff);

    packet.game_info.is_match_ended = true;
    game.read_packet(&packet).unwrap();
    assert_eq!(game.state, GameState::Ended);

    // a kickoff pause only counts while the round is live
    packet.game_info.is_match_ended = false;
    packet.game_info.is_round_active = false;
    game.read_packet(&packet).unwrap();
    assert_eq!(game.state, GameState::Inactive);

    packet.game_info.is_kickoff_pause = false;
    game.read_packet(&packet).unwrap();
    assert_eq!(game.state, GameState::Inactive);
}

#[test]
fn ingested_goals_and_pads_answer_containment() {
    let game = game_with_field_info();

    // orange defends the mouth at y = -5120, 300 wide and 100 tall
    let orange = &game.goals[1];
    assert!(orange.contains(Vec3A::new(0., -5200., 300.)));
    assert!(!orange.contains(Vec3A::new(0., -5000., 300.)));
    assert!(!orange.contains(Vec3A::new(200., -5200., 300.)));
    assert!(!orange.contains(Vec3A::new(0., -5200., 400.)));
    assert!(!game.goals[0].contains(Vec3A::new(0., -5200., 300.)));

    let pad = &game.pads[3];
    assert!(pad.contains(Vec3A::new(15., 3., consts::car::REST_Z)));
    assert!(pad.contains(Vec3A::new(200., 3., consts::car::REST_Z)));
    assert!(!pad.contains(Vec3A::new(250., 3., consts::car::REST_Z)));
    assert!(!pad.contains(Vec3A::new(15., 3., 100.)));
}

#[test]
fn packet_sets_ball_size_and_gravity() {
    let mut rng = Rng::with_seed(9);
    let mut game = game_with_field_info();

    let mut packet = random_packet(&mut rng, 1);
    game.read_packet(&packet).unwrap();
    assert!((game.mutator_config().ball_radius - 91.25).abs() < 1e-5);

    packet.game_ball.diameter = 0.;
    packet.game_info.world_gravity_z = -325.;
    game.read_packet(&packet).unwrap();
    assert_eq!(
        game.mutator_config().ball_radius,
        game.field().mutator_config().ball_radius
    );
    assert_eq!(game.gravity, Vec3A::new(0., 0., -325.));
    assert_eq!(game.mutator_config().gravity.z, -325.);

    // the shared field keeps its own defaults
    assert_eq!(game.field().mutator_config().gravity.z, consts::GRAVITY_Z);
}

#[test]
fn prediction_leaves_the_live_ball_alone() {
    let mut rng = Rng::with_seed(10);
    let mut game = game_with_field_info();
    game.read_packet(&random_packet(&mut rng, 2)).unwrap();

    let live = game.ball;
    let path = game.predict_ball(DT, 720);

    assert_eq!(game.ball, live);
    assert_eq!(path.len(), 720);

    let last = path.last().unwrap();
    assert!(last.time > live.time + 5.9 && last.time < live.time + 6.1);
    assert_ne!(last.position, live.position);
    assert!(path.windows(2).all(|w| w[1].time > w[0].time));
}

#[test]
fn lower_gravity_slows_the_fall() {
    let mut rng = Rng::with_seed(11);
    let mut packet = random_packet(&mut rng, 1);
    packet.game_ball.physics.location = Vec3A::new(0., 0., 1500.);
    packet.game_ball.physics.velocity = Vec3A::ZERO;

    let mut normal = game_with_field_info();
    normal.read_packet(&packet).unwrap();

    packet.game_info.world_gravity_z = -200.;
    let mut low = game_with_field_info();
    low.read_packet(&packet).unwrap();

    let normal_path = normal.predict_ball(DT, 60);
    let low_path = low.predict_ball(DT, 60);
    assert!(low_path[59].position.z > normal_path[59].position.z);
}
