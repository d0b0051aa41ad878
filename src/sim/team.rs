use crate::error::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    #[default]
    Blue,
    Orange,
}

impl Team {
    /// Blue defends the negative-y half of the arena
    #[must_use]
    pub const fn from_team_y(y: f32) -> Self {
        if y.is_sign_negative() {
            Self::Blue
        } else {
            Self::Orange
        }
    }

    #[must_use]
    pub fn into_team_y(self) -> f32 {
        f32::from(self as i8 * 2 - 1)
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Blue => Self::Orange,
            Self::Orange => Self::Blue,
        }
    }
}

impl TryFrom<i32> for Team {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Blue),
            1 => Ok(Self::Orange),
            _ => Err(Error::validation("team", format!("{value} is not 0 or 1"))),
        }
    }
}
