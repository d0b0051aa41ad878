//! Physical constants, all in unreal units (uu), seconds and radians.

pub const GRAVITY_Z: f32 = -650.;

/// Largest number of cars a single snapshot may carry
pub const MAX_CARS: usize = 64;
pub const MAX_BOOSTS: usize = 50;
pub const MAX_GOALS: usize = 200;

pub const BALL_COLLISION_RADIUS_SOCCAR: f32 = 91.25;
pub const BALL_COLLISION_RADIUS_HOOPS: f32 = 96.3831;
/// Height of a ball resting on the floor at kickoff
pub const BALL_REST_Z: f32 = 93.15;
pub const BALL_MAX_SPEED: f32 = 6000.;
pub const BALL_MAX_ANG_SPEED: f32 = 6.;
/// Fraction of velocity lost per second
pub const BALL_DRAG: f32 = 0.03;
/// Scales how strongly surface slip is cancelled on contact
pub const BALL_FRICTION: f32 = 2.;
pub const BALL_RESTITUTION: f32 = 0.6;
pub const BALL_MASS: f32 = 30.;

pub const BOOST_MAX: f32 = 100.;
pub const BOOST_SPAWN_AMOUNT: f32 = BOOST_MAX / 3.;
pub const BOOST_ACCEL_GROUND: f32 = 2975. / 3.;
pub const BOOST_ACCEL_AIR: f32 = 3175. / 3.;
pub const BOOST_USED_PER_SECOND: f32 = BOOST_MAX / 3.;

pub mod car {
    pub const MAX_SPEED: f32 = 2300.;
    pub const MAX_ANG_SPEED: f32 = 5.5;
    /// Height of the car origin when resting on its wheels
    pub const REST_Z: f32 = 17.;
    pub const MASS: f32 = 180.;

    pub const SUPERSONIC_START_SPEED: f32 = 2200.;
    pub const SUPERSONIC_MAINTAIN_MIN_SPEED: f32 = SUPERSONIC_START_SPEED - 100.;
    pub const SUPERSONIC_MAINTAIN_MAX_TIME: f32 = 1.;

    /// Octane
    pub mod hitbox {
        use glam::Vec3A;

        pub const SIZE: Vec3A = Vec3A::new(120.507, 86.6994, 38.6591);
        pub const OFFSET: Vec3A = Vec3A::new(13.8757, 0., 20.755);
    }

    pub mod drive {
        use crate::sim::LinearPieceCurve;

        pub const THROTTLE_DEADZONE: f32 = 0.001;
        pub const STOPPING_FORWARD_VEL: f32 = 25.;
        pub const BRAKE_ACCEL: f32 = 3500.;
        pub const COASTING_BRAKE_FACTOR: f32 = 0.15;
        pub const COASTING_ACCEL: f32 = BRAKE_ACCEL * COASTING_BRAKE_FACTOR;
        pub const THROTTLE_AIR_ACCEL: f32 = 200. / 3.;
        /// Top speed on throttle alone
        pub const THROTTLE_MAX_SPEED: f32 = 1410.;

        /// Maps forward speed to the acceleration full throttle provides
        pub const THROTTLE_ACCEL_FROM_SPEED: LinearPieceCurve<4> =
            LinearPieceCurve::new([
                (0., 1600.),
                (1400., 160.),
                (THROTTLE_MAX_SPEED, 0.),
                (2300., 0.),
            ]);

        /// Maps forward speed to the turning curvature (1 / radius) at full steer
        pub const CURVATURE_FROM_SPEED: LinearPieceCurve<6> = LinearPieceCurve::new([
            (0., 0.006_9),
            (500., 0.003_98),
            (1000., 0.002_35),
            (1500., 0.001_375),
            (1750., 0.001_1),
            (2300., 0.000_88),
        ]);

        /// Fraction of sideways velocity kept per tick while powersliding
        pub const POWERSLIDE_LATERAL_KEEP: f32 = 0.9;
    }

    pub mod jump {
        pub const IMMEDIATE_FORCE: f32 = 875. / 3.;
        pub const ACCEL: f32 = 4375. / 3.;
        pub const MIN_TIME: f32 = 0.025;
        pub const MAX_TIME: f32 = 0.2;
        pub const DOUBLEJUMP_MAX_DELAY: f32 = 1.25;
    }

    pub mod air_control {
        use glam::Vec3A;

        /// Angular acceleration per unit of roll, pitch, yaw input
        pub const TORQUE: Vec3A = Vec3A::new(-400., -130., 95.);
        pub const DAMPING: Vec3A = Vec3A::new(-50., -30., -20.);
    }

    /// Contacts with a normal this close to the car's up axis put it on its wheels
    pub const LANDING_NORMAL_DOT: f32 = 0.7;
    pub const GROUND_TOLERANCE: f32 = 1.5;
}

pub mod boostpads {
    pub const BOX_HEIGHT: f32 = 64.;
    pub const BOX_RAD_BIG: f32 = 208.;
    pub const BOX_RAD_SMALL: f32 = 144.;
    pub const COOLDOWN_BIG: f32 = 10.;
    pub const COOLDOWN_SMALL: f32 = 4.;
    pub const BOOST_AMOUNT_BIG: f32 = 100.;
    pub const BOOST_AMOUNT_SMALL: f32 = 12.;
}

pub mod arena {
    pub const EXTENT_X: f32 = 4096.;
    pub const EXTENT_Y: f32 = 5120.;
    pub const HEIGHT: f32 = 2044.;
    /// The 45 degree corner walls lie on `|x| + |y| == CORNER_SUM`
    pub const CORNER_SUM: f32 = 8064.;

    pub const GOAL_HALF_WIDTH: f32 = 892.755;
    pub const GOAL_HEIGHT: f32 = 642.775;
    pub const GOAL_DEPTH: f32 = 880.;

    pub const EXTENT_X_HOOPS: f32 = 8900. / 3.;
    pub const EXTENT_Y_HOOPS: f32 = 3581.;
    pub const HEIGHT_HOOPS: f32 = 1820.;
}
