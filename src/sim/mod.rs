mod ball;
mod boost_pad;
mod car;
mod field;
mod game;
mod game_mode;
mod goal;
mod input;
mod linear_piece_curve;
mod mutator_config;
mod team;

pub use ball::*;
pub use boost_pad::*;
pub use car::*;
pub use field::*;
pub use game::*;
pub use game_mode::*;
pub use goal::*;
pub use input::*;
pub use linear_piece_curve::*;
pub use mutator_config::*;
pub use team::*;
