//! Deterministic ball and car prediction for soccar-style arenas.
//!
//! ```no_run
//! use rlpredict::{Context, sim::Game};
//!
//! let mut context = Context::init("./collision_meshes")?;
//! let field = context.set_mode("soccar")?;
//! let mut game = Game::new(field.clone());
//!
//! // game.read_field_info(..)?; game.read_packet(..)?;
//!
//! let mut ball = game.ball;
//! for _ in 0..720 {
//!     ball.step(&field, 1. / 120.);
//! }
//! # Ok::<(), rlpredict::Error>(())
//! ```

pub use glam::{Mat3A, Vec3A};

mod assets;
pub mod collision_mesh_file;
pub mod consts;
mod custom;
mod error;
pub mod logging;
pub mod math;
pub mod mech;
pub mod packet;
pub mod sim;

pub use assets::{ASSET_DIR_ENV_VAR, Context};
pub use custom::geometry::Tri;
pub use error::{Error, Result};
pub use sim::{GameMode, MutatorConfig};
