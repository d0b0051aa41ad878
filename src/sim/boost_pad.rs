use glam::Vec3A;

use crate::{MutatorConfig, consts::boostpads};

/// A boost pad's fixed location plus its live pickup state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoostPad {
    pub position: Vec3A,
    pub is_big: bool,
    pub is_active: bool,
    /// Seconds since the pad was picked up, while inactive
    pub timer: f32,
}

impl Default for BoostPad {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BoostPad {
    pub const DEFAULT: Self = Self {
        position: Vec3A::ZERO,
        is_big: false,
        is_active: true,
        timer: 0.,
    };

    #[must_use]
    pub const fn new(position: Vec3A, is_big: bool) -> Self {
        Self {
            position,
            is_big,
            ..Self::DEFAULT
        }
    }

    #[must_use]
    pub const fn boost_amount(&self) -> f32 {
        if self.is_big {
            boostpads::BOOST_AMOUNT_BIG
        } else {
            boostpads::BOOST_AMOUNT_SMALL
        }
    }

    #[must_use]
    pub const fn cooldown(&self, config: &MutatorConfig) -> f32 {
        if self.is_big {
            config.boost_pad_cooldown_big
        } else {
            config.boost_pad_cooldown_small
        }
    }

    /// Seconds until the pad can be picked up again, `0` when active.
    #[must_use]
    pub fn time_until_active(&self, config: &MutatorConfig) -> f32 {
        if self.is_active {
            0.
        } else {
            (self.cooldown(config) - self.timer).max(0.)
        }
    }

    /// Whether a point (e.g. a car origin) sits in the pickup cylinder.
    #[must_use]
    pub fn contains(&self, point: Vec3A) -> bool {
        let radius = if self.is_big {
            boostpads::BOX_RAD_BIG
        } else {
            boostpads::BOX_RAD_SMALL
        };

        let offset = point - self.position;
        offset.truncate().length_squared() <= radius * radius
            && (0. ..=boostpads::BOX_HEIGHT).contains(&offset.z)
    }
}
