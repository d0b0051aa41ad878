#![allow(unused)]

mod common;

use std::sync::Arc;

use common::*;
use glam::Vec3A;
use rlpredict::{Context, Error, GameMode, consts::arena};

#[test]
fn set_mode_parses_names() {
    for name in ["soccar", "  Soccar ", "HEATSEEKER", "snowday", "hoops", "void"] {
        let mut context = Context::builtin();
        assert!(context.set_mode(name).is_ok(), "{name}");
    }

    let mut context = Context::builtin();
    assert!(matches!(context.set_mode("nope"), Err(Error::UnknownMode(name)) if name == "nope"));
    assert!(matches!(
        context.set_mode("dropshot"),
        Err(Error::UnsupportedMode(GameMode::Dropshot))
    ));

    // failed selections don't stick
    assert_eq!(context.mode(), None);
    assert!(matches!(context.field(), Err(Error::NoMode)));
}

#[test]
fn set_mode_is_fixed_after_first_call() {
    let mut context = Context::builtin();

    let first = context.set_mode("soccar").unwrap();
    let again = context.set_mode("soccar").unwrap();
    let other = context.set_mode("hoops").unwrap();

    assert!(Arc::ptr_eq(&first, &again));
    assert!(Arc::ptr_eq(&first, &other));
    assert_eq!(other.mode(), GameMode::Soccar);
    assert_eq!(context.mode(), Some(GameMode::Soccar));
    assert!(Arc::ptr_eq(&first, &context.field().unwrap()));
}

#[test]
fn variants_share_soccar_geometry() {
    let soccar = soccar();
    let heatseeker = Context::builtin().set_mode("heatseeker").unwrap();

    assert_eq!(heatseeker.mode(), GameMode::Heatseeker);
    assert_eq!(heatseeker.num_triangles(), soccar.num_triangles());
    assert_eq!(
        heatseeker.mutator_config().ball_radius,
        soccar.mutator_config().ball_radius
    );
}

#[test]
fn nearest_surface_from_above_is_the_floor() {
    let field = soccar();
    let surface = field.nearest_surface(Vec3A::new(0., 0., 500.)).unwrap();

    assert!((surface.distance - 500.).abs() < 1e-2);
    assert!(surface.point.z.abs() < 1e-3);
    assert!(surface.normal.dot(Vec3A::Z) > 0.999, "{}", surface.normal);
}

#[test]
fn nearest_surface_near_a_wall() {
    let field = soccar();

    let surface = field.nearest_surface(Vec3A::new(4000., 0., 1000.)).unwrap();
    assert!((surface.distance - 96.).abs() < 1e-2);
    assert!(surface.normal.dot(Vec3A::NEG_X) > 0.999, "{}", surface.normal);

    // deep inside the blue goal, the back of the net is closest
    let surface = field.nearest_surface(Vec3A::new(0., -5900., 300.)).unwrap();
    assert!((surface.point.y + arena::EXTENT_Y + arena::GOAL_DEPTH).abs() < 1e-2);
    assert!(surface.normal.dot(Vec3A::Y) > 0.999, "{}", surface.normal);
}

#[test]
fn corners_are_diagonal() {
    let field = soccar();
    let surface = field.nearest_surface(Vec3A::new(3400., 4500., 1000.)).unwrap();

    let expected = Vec3A::new(-1., -1., 0.).normalize();
    assert!(surface.normal.dot(expected) > 0.999, "{}", surface.normal);
    assert!((surface.point.x + surface.point.y - arena::CORNER_SUM).abs() < 1e-1);
}

#[test]
fn sphere_penetration_depth() {
    let field = soccar();

    let contact = field.collide_sphere(Vec3A::new(0., 0., 50.), 91.25).unwrap();
    assert!((contact.depth - 41.25).abs() < 1e-3);
    assert!(contact.normal.dot(Vec3A::Z) > 0.999);
    assert!(contact.point.z.abs() < 1e-3);

    assert!((field.penetration(Vec3A::new(0., 0., 50.), 91.25) - 41.25).abs() < 1e-3);
    assert_eq!(field.penetration(Vec3A::new(0., 0., 500.), 91.25), 0.);
    assert!(field.collide_sphere(Vec3A::new(0., 0., 500.), 91.25).is_none());
}

#[test]
fn deepest_contact_wins() {
    let field = soccar();

    // wedged into the floor-wall edge, deeper into the wall
    let contact = field
        .collide_sphere(Vec3A::new(4046., 0., 80.), 91.25)
        .unwrap();
    assert!(contact.normal.dot(Vec3A::NEG_X) > 0.999, "{}", contact.normal);
    assert!((contact.depth - 41.25).abs() < 1e-2);
}

#[test]
fn every_contact_is_reported() {
    let field = soccar();
    let center = Vec3A::new(4046., 0., 80.);

    let contacts = field.sphere_contacts(center, 91.25);
    assert_eq!(contacts.len(), 2, "{contacts:?}");

    // wall first, it is the deeper one
    assert!(contacts[0].normal.dot(Vec3A::NEG_X) > 0.999);
    assert!((contacts[0].depth - 41.25).abs() < 1e-2);
    assert!(contacts[1].normal.dot(Vec3A::Z) > 0.999);
    assert!((contacts[1].depth - 11.25).abs() < 1e-2);

    assert_eq!(field.collide_sphere(center, 91.25), Some(contacts[0]));
    assert!(field.sphere_contacts(Vec3A::new(0., 0., 500.), 91.25).is_empty());
}

#[test]
fn void_has_no_surfaces() {
    let field = void();

    assert_eq!(field.num_triangles(), 0);
    assert!(field.nearest_surface(Vec3A::ZERO).is_none());
    assert!(field.collide_sphere(Vec3A::ZERO, 1000.).is_none());
    assert!(field.is_inside(Vec3A::new(0., 0., -1e6)));
}

#[test]
fn hoops_uses_its_own_box() {
    let field = Context::builtin().set_mode("hoops").unwrap();

    assert_eq!(field.num_triangles(), 12);
    assert!(field.mutator_config().ball_radius > 96.);

    let surface = field
        .nearest_surface(Vec3A::new(0., arena::EXTENT_Y_HOOPS - 50., 800.))
        .unwrap();
    assert!((surface.distance - 50.).abs() < 1e-2);
    assert!(surface.normal.dot(Vec3A::NEG_Y) > 0.999);

    assert!(field.is_inside(Vec3A::new(0., 0., 100.)));
    assert!(!field.is_inside(Vec3A::new(0., 4000., 100.)));
}

#[test]
fn inside_checks() {
    let field = soccar();

    assert!(field.is_inside(Vec3A::ZERO));
    assert!(field.is_inside(Vec3A::new(0., 0., 2000.)));
    assert!(field.is_inside(Vec3A::new(0., 5500., 100.)));

    assert!(!field.is_inside(Vec3A::new(0., 0., -1.)));
    assert!(!field.is_inside(Vec3A::new(0., 0., 2100.)));
    assert!(!field.is_inside(Vec3A::new(2000., 5500., 100.)));
    assert!(!field.is_inside(Vec3A::new(0., 5500., 700.)));
    assert!(!field.is_inside(Vec3A::new(4050., 4050., 100.)));
    assert!(!field.is_inside(Vec3A::new(4200., 0., 100.)));
}

#[test]
fn ball_never_leaves_the_arena() {
    let mut rng = fastrand::Rng::with_seed(7);
    let field = soccar();

    for _ in 0..8 {
        let position = Vec3A::new(
            uniform(&mut rng, -3000., 3000.),
            uniform(&mut rng, -3900., 3900.),
            uniform(&mut rng, 200., 1800.),
        );
        let velocity = Vec3A::new(
            uniform(&mut rng, -2000., 2000.),
            uniform(&mut rng, -2000., 2000.),
            uniform(&mut rng, -2000., 2000.),
        );
        let mut ball = rlpredict::sim::Ball::new(0., position).with_velocity(velocity);

        for _ in 0..600 {
            ball.step(&field, DT);
            assert!(ball.is_finite());
            assert!(field.is_inside(ball.position), "{}", ball.position);
        }
    }
}
