use std::{
    io::{Cursor, Result as IoResult},
    num::Wrapping,
};

use byteorder::{LittleEndian, ReadBytesExt};
use glam::Vec3A;
use log::debug;

use crate::{
    consts::arena,
    custom::geometry::Tri,
    error::{Error, Result},
};

pub const COLLISION_MESH_BASE_PATH: &str = "./collision_meshes/";
pub const COLLISION_MESH_FILE_EXTENSION: &str = "cmf";

trait FromCursor {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> IoResult<Self>
    where
        Self: Sized;
}

impl FromCursor for Vec3A {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> IoResult<Self> {
        Ok(Self::new(
            bytes.read_f32::<LittleEndian>()?,
            bytes.read_f32::<LittleEndian>()?,
            bytes.read_f32::<LittleEndian>()?,
        ))
    }
}

/// An indexed triangle mesh, in unreal units.
///
/// On disk: `num_tris: i32`, `num_vertices: i32`, then `num_tris * 3`
/// vertex indices as `i32` and `num_vertices` points as three `f32`s,
/// all little-endian.
#[derive(Clone, Debug)]
pub struct CollisionMeshFile {
    indices: Vec<usize>,
    vertices: Vec<Vec3A>,
    hash: u32,
}

impl CollisionMeshFile {
    const MAX_VERT_OR_TRI_COUNT: usize = 1000 * 1000;

    /// Two triangles spanning `p ± e1 ± e2`
    #[inline]
    fn quad(p: Vec3A, e1: Vec3A, e2: Vec3A) -> Self {
        Self {
            indices: vec![0, 1, 3, 1, 2, 3],
            vertices: vec![p + e1 + e2, p - e1 + e2, p - e1 - e2, p + e1 - e2],
            hash: 0,
        }
    }

    /// Axis-aligned quad covering `min..max`, which must be flat on one axis
    fn box_face(min: Vec3A, max: Vec3A) -> Self {
        let center = (min + max) * 0.5;
        let half = (max - min) * 0.5;

        let (e1, e2) = if half.x == 0. {
            (Vec3A::new(0., half.y, 0.), Vec3A::new(0., 0., half.z))
        } else if half.y == 0. {
            (Vec3A::new(half.x, 0., 0.), Vec3A::new(0., 0., half.z))
        } else {
            (Vec3A::new(half.x, 0., 0.), Vec3A::new(0., half.y, 0.))
        };

        Self::quad(center, e1, e2)
    }

    /// The large flat planes that the dumped soccar meshes leave out.
    pub fn add_extra_soccar_tris_to(tris: &mut Vec<Tri>) {
        let floor_extent_y = arena::EXTENT_Y + arena::GOAL_DEPTH;

        let planes = [
            // floor
            Self::quad(
                Vec3A::ZERO,
                Vec3A::new(arena::EXTENT_X, 0., 0.),
                Vec3A::new(0., floor_extent_y, 0.),
            ),
            // ceiling
            Self::quad(
                Vec3A::new(0., 0., arena::HEIGHT),
                Vec3A::new(-arena::EXTENT_X, 0., 0.),
                Vec3A::new(0., arena::EXTENT_Y, 0.),
            ),
            // left wall
            Self::quad(
                Vec3A::new(-arena::EXTENT_X, 0., arena::HEIGHT / 2.),
                Vec3A::new(0., arena::EXTENT_Y, 0.),
                Vec3A::new(0., 0., arena::HEIGHT / 2.),
            ),
            // right wall
            Self::quad(
                Vec3A::new(arena::EXTENT_X, 0., arena::HEIGHT / 2.),
                Vec3A::new(0., -arena::EXTENT_Y, 0.),
                Vec3A::new(0., 0., arena::HEIGHT / 2.),
            ),
        ];

        for plane in planes {
            plane.add_triangles_to(tris);
        }
    }

    /// A closed soccar hull built from planes, used when no dumped meshes were loaded.
    ///
    /// Rounded ramps are approximated by sharp edges and the 45 degree corners
    /// by a single vertical plane each.
    pub fn add_soccar_hull_tris_to(tris: &mut Vec<Tri>) {
        let x = arena::EXTENT_X;
        let y = arena::EXTENT_Y;
        let h = arena::HEIGHT;
        let corner_y = arena::CORNER_SUM - x;
        let corner_x = arena::CORNER_SUM - y;
        let goal_x = arena::GOAL_HALF_WIDTH;
        let goal_z = arena::GOAL_HEIGHT;
        let goal_y = y + arena::GOAL_DEPTH;

        let mut faces = vec![
            // floor, reaching into both goals
            Self::box_face(Vec3A::new(-x, -goal_y, 0.), Vec3A::new(x, goal_y, 0.)),
            // ceiling
            Self::box_face(Vec3A::new(-x, -y, h), Vec3A::new(x, y, h)),
        ];

        for sx in [-1f32, 1.] {
            // side wall
            faces.push(Self::box_face(
                Vec3A::new(sx * x, -corner_y, 0.),
                Vec3A::new(sx * x, corner_y, h),
            ));

            for sy in [-1f32, 1.] {
                // corner
                let a = Vec3A::new(sx * x, sy * corner_y, h / 2.);
                let b = Vec3A::new(sx * corner_x, sy * y, h / 2.);
                faces.push(Self::quad(
                    (a + b) * 0.5,
                    (b - a) * 0.5,
                    Vec3A::new(0., 0., h / 2.),
                ));

                // back wall beside the goal
                let (near, far) = (sx * goal_x, sx * corner_x);
                faces.push(Self::box_face(
                    Vec3A::new(near.min(far), sy * y, 0.),
                    Vec3A::new(near.max(far), sy * y, h),
                ));
            }
        }

        for sy in [-1f32, 1.] {
            // back wall above the goal
            faces.push(Self::box_face(
                Vec3A::new(-goal_x, sy * y, goal_z),
                Vec3A::new(goal_x, sy * y, h),
            ));

            let (front, back) = (sy * y, sy * goal_y);
            let (y_min, y_max) = (front.min(back), front.max(back));

            // goal box: back, roof, posts
            faces.push(Self::box_face(
                Vec3A::new(-goal_x, sy * goal_y, 0.),
                Vec3A::new(goal_x, sy * goal_y, goal_z),
            ));
            faces.push(Self::box_face(
                Vec3A::new(-goal_x, y_min, goal_z),
                Vec3A::new(goal_x, y_max, goal_z),
            ));
            for sx in [-1f32, 1.] {
                faces.push(Self::box_face(
                    Vec3A::new(sx * goal_x, y_min, 0.),
                    Vec3A::new(sx * goal_x, y_max, goal_z),
                ));
            }
        }

        for face in faces {
            face.add_triangles_to(tris);
        }
    }

    /// A plain box hull for hoops, used when no dumped meshes were loaded.
    pub fn add_hoops_hull_tris_to(tris: &mut Vec<Tri>) {
        let x = arena::EXTENT_X_HOOPS;
        let y = arena::EXTENT_Y_HOOPS;
        let h = arena::HEIGHT_HOOPS;

        let faces = [
            Self::box_face(Vec3A::new(-x, -y, 0.), Vec3A::new(x, y, 0.)),
            Self::box_face(Vec3A::new(-x, -y, h), Vec3A::new(x, y, h)),
            Self::box_face(Vec3A::new(-x, -y, 0.), Vec3A::new(-x, y, h)),
            Self::box_face(Vec3A::new(x, -y, 0.), Vec3A::new(x, y, h)),
            Self::box_face(Vec3A::new(-x, -y, 0.), Vec3A::new(x, -y, h)),
            Self::box_face(Vec3A::new(-x, y, 0.), Vec3A::new(x, y, h)),
        ];

        for face in faces {
            face.add_triangles_to(tris);
        }
    }

    #[inline]
    #[must_use]
    pub const fn get_hash(&self) -> u32 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn num_tris(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// From: <https://stackoverflow.com/questions/20511347/a-good-hash-function-for-a-vector/72073933#72073933>
    fn calculate_hash(indices: &[usize], vertices: &[Vec3A]) -> u32 {
        let mut hash = Wrapping((vertices.len() + (indices.len() / 3 * vertices.len())) as u32);

        const HASH_VAL_MUELLER: Wrapping<u32> = Wrapping(0x45D9F3B);
        const HASH_VAL_SHIFT: Wrapping<u32> = Wrapping(0x9E3779B9);

        for &vert_index in indices {
            for pos in vertices[vert_index].to_array() {
                let mut cur_val = Wrapping(pos as i32 as u32);
                cur_val = ((cur_val >> 16) ^ cur_val) * HASH_VAL_MUELLER;
                cur_val = ((cur_val >> 16) ^ cur_val) * HASH_VAL_MUELLER;
                cur_val = (cur_val >> 16) ^ cur_val;
                hash ^= cur_val + HASH_VAL_SHIFT + (hash << 6) + (hash >> 2);
            }
        }

        hash.0
    }

    pub fn read_from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut bytes = Cursor::new(bytes);

        let read_count = |bytes: &mut Cursor<&[u8]>| -> Result<usize> {
            let count = bytes.read_i32::<LittleEndian>()?;
            usize::try_from(count)
                .map_err(|_| Error::InvalidMesh(format!("negative element count {count}")))
        };

        let num_tris = read_count(&mut bytes)?;
        let num_indices = num_tris * 3;
        let num_vertices = read_count(&mut bytes)?;

        if num_tris.min(num_vertices) == 0
            || num_tris.max(num_vertices) > Self::MAX_VERT_OR_TRI_COUNT
        {
            return Err(Error::InvalidMesh(format!(
                "bad triangle/vertex count: [{num_tris}, {num_vertices}]"
            )));
        }

        let indices = (0..num_indices)
            .map(|_| read_count(&mut bytes))
            .collect::<Result<Vec<_>>>()?;
        let vertices = (0..num_vertices)
            .map(|_| Vec3A::from_cursor(&mut bytes))
            .collect::<IoResult<Vec<_>>>()?;

        if let Some(&bad) = indices.iter().find(|&&i| i >= num_vertices) {
            return Err(Error::InvalidMesh(format!(
                "triangle vertex index {bad} out of range for {num_vertices} vertices"
            )));
        }

        let hash = Self::calculate_hash(&indices, &vertices);

        debug!("Loaded {num_vertices} verts and {num_tris} tris, hash: {hash:#x}");

        Ok(Self {
            indices,
            vertices,
            hash,
        })
    }

    pub fn add_triangles_to(self, tris: &mut Vec<Tri>) {
        tris.reserve(self.indices.len() / 3);
        tris.extend(self.indices.chunks_exact(3).map(|chunk| {
            Tri::from_points(
                self.vertices[chunk[0]],
                self.vertices[chunk[1]],
                self.vertices[chunk[2]],
            )
        }));
    }
}
