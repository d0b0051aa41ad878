use std::{io, path::PathBuf};

use thiserror::Error;

use crate::sim::GameMode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("collision mesh folder {}: {reason}", path.display())]
    AssetDir { path: PathBuf, reason: &'static str },

    #[error("invalid collision mesh: {0}")]
    InvalidMesh(String),

    #[error("unknown game mode \"{0}\"")]
    UnknownMode(String),

    #[error("game mode \"{}\" has no supported arena geometry", .0.name())]
    UnsupportedMode(GameMode),

    #[error("no game mode has been selected, call set_mode first")]
    NoMode,

    #[error("invalid {what}: {reason}")]
    Validation { what: &'static str, reason: String },
}

impl Error {
    pub(crate) fn validation(what: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            what,
            reason: reason.into(),
        }
    }
}
