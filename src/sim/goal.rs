use glam::Vec3A;

use crate::sim::Team;

/// A goal mouth from the field description.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Goal {
    /// Team defending this goal
    pub team: Team,
    pub position: Vec3A,
    /// Unit vector pointing out of the goal into the field
    pub direction: Vec3A,
    pub width: f32,
    pub height: f32,
}

impl Goal {
    /// Whether `point` has crossed the goal line inside the mouth.
    ///
    /// `position` is the center of the mouth and `direction` is horizontal.
    #[must_use]
    pub fn contains(&self, point: Vec3A) -> bool {
        let offset = point - self.position;
        let depth = -offset.dot(self.direction);
        let lateral = (offset + self.direction * depth).truncate();

        depth > 0. && lateral.length() <= self.width * 0.5 && offset.z.abs() <= self.height * 0.5
    }
}
