mod drive;

pub use drive::*;
