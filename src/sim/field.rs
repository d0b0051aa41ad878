use glam::Vec3A;
use log::debug;

use crate::{
    GameMode, MutatorConfig,
    collision_mesh_file::CollisionMeshFile,
    consts::arena,
    custom::{bvh::Bvh, geometry::Tri},
};

/// A sphere pushing into the arena surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub point: Vec3A,
    /// Unit vector from the surface towards the sphere center
    pub normal: Vec3A,
    /// Penetration depth, `0..=radius`
    pub depth: f32,
}

/// Closest point on the arena surface to some query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
    pub point: Vec3A,
    /// Face normal, flipped to point towards the query point
    pub normal: Vec3A,
    pub distance: f32,
}

/// Static collision geometry for one game mode.
///
/// Immutable once built; share it across threads through an `Arc`.
#[derive(Clone, Debug)]
pub struct Field {
    mode: GameMode,
    mutator_config: MutatorConfig,
    bvh: Bvh,
}

impl Field {
    /// Builds the arena from dumped meshes, or from the built-in hull when `meshes` is empty.
    #[must_use]
    pub fn new(mode: GameMode, meshes: Vec<CollisionMeshFile>) -> Self {
        let mut tris = Vec::new();
        let from_meshes = !meshes.is_empty();

        for mesh in meshes {
            mesh.add_triangles_to(&mut tris);
        }

        match mode.mesh_mode() {
            GameMode::Soccar if from_meshes => CollisionMeshFile::add_extra_soccar_tris_to(&mut tris),
            GameMode::Soccar => CollisionMeshFile::add_soccar_hull_tris_to(&mut tris),
            GameMode::Hoops if !from_meshes => CollisionMeshFile::add_hoops_hull_tris_to(&mut tris),
            _ => {}
        }

        debug!("Building {} field from {} triangles", mode.name(), tris.len());

        Self::from_tris(mode, &tris)
    }

    #[must_use]
    pub fn from_tris(mode: GameMode, tris: &[Tri]) -> Self {
        Self {
            mode,
            mutator_config: MutatorConfig::new(mode),
            bvh: Bvh::from(tris),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn mutator_config(&self) -> &MutatorConfig {
        &self.mutator_config
    }

    #[must_use]
    pub const fn num_triangles(&self) -> usize {
        self.bvh.num_leaves
    }

    /// The deepest point where a sphere overlaps the arena, if any.
    #[must_use]
    pub fn collide_sphere(&self, center: Vec3A, radius: f32) -> Option<Contact> {
        self.bvh
            .collide_sphere(center, radius)
            .map(|info| Contact {
                point: info.point,
                normal: info.normal,
                depth: info.depth,
            })
    }

    /// Every point where a sphere overlaps the arena, deepest first.
    #[must_use]
    pub fn sphere_contacts(&self, center: Vec3A, radius: f32) -> Vec<Contact> {
        let mut contacts = Vec::new();
        self.bvh.for_each_sphere_contact(center, radius, |info| {
            contacts.push(Contact {
                point: info.point,
                normal: info.normal,
                depth: info.depth,
            });
        });

        contacts.sort_unstable_by(|a, b| b.depth.total_cmp(&a.depth));
        contacts
    }

    /// How far a sphere sinks into the arena, `0` when clear.
    #[must_use]
    pub fn penetration(&self, center: Vec3A, radius: f32) -> f32 {
        self.collide_sphere(center, radius)
            .map_or(0., |contact| contact.depth)
    }

    #[must_use]
    pub fn nearest_surface(&self, point: Vec3A) -> Option<SurfacePoint> {
        let hit = self.bvh.nearest(point)?;
        let distance = hit.distance_squared.sqrt();

        let face_normal = hit.tri.normal();
        let normal = if face_normal.dot(point - hit.point) < 0. {
            -face_normal
        } else {
            face_normal
        };

        Some(SurfacePoint {
            point: hit.point,
            normal,
            distance,
        })
    }

    /// Coarse check that `point` lies within the playable volume.
    #[must_use]
    pub fn is_inside(&self, point: Vec3A) -> bool {
        let p = point.abs();

        match self.mode.mesh_mode() {
            GameMode::Soccar => {
                let in_goal = p.x < arena::GOAL_HALF_WIDTH
                    && p.y <= arena::EXTENT_Y + arena::GOAL_DEPTH
                    && point.z <= arena::GOAL_HEIGHT;
                let in_field = p.x <= arena::EXTENT_X
                    && p.y <= arena::EXTENT_Y
                    && p.x + p.y <= arena::CORNER_SUM
                    && point.z <= arena::HEIGHT;

                point.z >= 0. && (in_field || in_goal)
            }
            GameMode::Hoops => {
                point.z >= 0.
                    && p.x <= arena::EXTENT_X_HOOPS
                    && p.y <= arena::EXTENT_Y_HOOPS
                    && point.z <= arena::HEIGHT_HOOPS
            }
            _ => true,
        }
    }
}
