/// One tick of controller state.
///
/// Analog axes are in `-1..=1`. Positive `steer` and `yaw` turn towards the
/// car's left axis, positive `pitch` lifts the nose.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Input {
    pub throttle: f32,
    pub steer: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub jump: bool,
    pub boost: bool,
    pub handbrake: bool,
    pub use_item: bool,
}

impl Default for Input {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Input {
    pub const DEFAULT: Self = Self {
        throttle: 0.0,
        steer: 0.0,
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
        jump: false,
        boost: false,
        handbrake: false,
        use_item: false,
    };

    /// Clamps every axis into `-1..=1`, mapping NaN to 0.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        for axis in [
            &mut self.throttle,
            &mut self.steer,
            &mut self.pitch,
            &mut self.yaw,
            &mut self.roll,
        ] {
            *axis = if axis.is_nan() {
                0.
            } else {
                axis.clamp(-1.0, 1.0)
            };
        }

        self
    }
}
