use std::ops::Add;

use glam::Vec3A;

/// Result of a sphere overlapping a triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactInfo {
    /// Points from the surface towards the sphere center.
    pub normal: Vec3A,
    pub point: Vec3A,
    /// How far the sphere reaches past the surface
    pub depth: f32,
}

/// A triangle made from 3 points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tri(pub [Vec3A; 3]);

impl Tri {
    #[must_use]
    #[inline]
    /// Create a new triangle from 3 points
    pub const fn from_points(p0: Vec3A, p1: Vec3A, p2: Vec3A) -> Self {
        Self([p0, p1, p2])
    }

    /// `[p1 - p0, p2 - p1, p0 - p2]`
    #[inline]
    fn edges(&self) -> [Vec3A; 3] {
        let p = &self.0;
        [p[1] - p[0], p[2] - p[1], p[0] - p[2]]
    }

    /// Unit face normal following the winding order, zero for degenerate triangles.
    #[must_use]
    #[inline]
    pub fn normal(&self) -> Vec3A {
        let e = self.edges();
        e[0].cross(-e[2]).normalize_or_zero()
    }

    /// Check if a point projected onto the same plane as the triangle
    /// is within the bounds of it. `n` may face either side.
    fn face_contains(edges: &[Vec3A; 3], n: Vec3A, obj_to_points: &[Vec3A; 3]) -> bool {
        let sides = [0, 1, 2].map(|i| edges[i].cross(obj_to_points[i]).dot(n));

        sides.iter().all(|&side| side >= 0.) || sides.iter().all(|&side| side <= 0.)
    }

    /// Voronoi region walk, see Ericson's "Real-Time Collision Detection" 5.1.5
    fn closest_point_inner(&self, edges: &[Vec3A; 3], obj_to_points: &[Vec3A; 3]) -> Vec3A {
        let p = &self.0;
        let ab = edges[0];
        let ac = -edges[2];

        let d1 = ab.dot(obj_to_points[0]);
        let d2 = ac.dot(obj_to_points[0]);
        if d1 <= 0. && d2 <= 0. {
            return p[0];
        }

        let d3 = ab.dot(obj_to_points[1]);
        let d4 = ac.dot(obj_to_points[1]);
        if d3 >= 0. && d4 <= d3 {
            return p[1];
        }

        let d5 = ab.dot(obj_to_points[2]);
        let d6 = ac.dot(obj_to_points[2]);
        if d6 >= 0. && d5 <= d6 {
            return p[2];
        }

        let vc = d1 * d4 - d3 * d2;
        if vc <= 0. && d1 >= 0. && d3 <= 0. {
            let v = d1 / (d1 - d3);
            return p[0] + v * ab;
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= 0. && d2 >= 0. && d6 <= 0. {
            let v = d2 / (d2 - d6);
            return p[0] + v * ac;
        }

        let va = d3 * d6 - d5 * d4;
        if va <= 0. && (d4 - d3) >= 0. && (d5 - d6) >= 0. {
            let v = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return p[1] + v * edges[1];
        }

        let denom = 1. / (va + vb + vc);
        let v = vb * denom;
        let w = vc * denom;
        p[0] + v * ab + w * ac
    }

    #[must_use]
    pub fn closest_point(&self, point: Vec3A) -> Vec3A {
        let obj_to_points = [point - self.0[0], point - self.0[1], point - self.0[2]];
        self.closest_point_inner(&self.edges(), &obj_to_points)
    }

    #[must_use]
    /// Check if a sphere intersects the triangle.
    pub fn intersect_sphere(&self, center: Vec3A, radius: f32) -> Option<ContactInfo> {
        let edges = self.edges();
        let mut normal = edges[0].cross(-edges[2]).normalize_or_zero();
        if normal == Vec3A::ZERO {
            return None;
        }

        let obj_to_points = [center - self.0[0], center - self.0[1], center - self.0[2]];
        let mut distance_from_plane = obj_to_points[0].dot(normal);

        if distance_from_plane < 0. {
            distance_from_plane *= -1.;
            normal *= -1.;
        }

        if distance_from_plane >= radius {
            return None;
        }

        let contact_point = if Self::face_contains(&edges, normal, &obj_to_points) {
            center - normal * distance_from_plane
        } else {
            let closest_point = self.closest_point_inner(&edges, &obj_to_points);
            if (closest_point - center).length_squared() < radius * radius {
                closest_point
            } else {
                return None;
            }
        };

        let contact_to_center = center - contact_point;
        let distance_sqr = contact_to_center.length_squared();

        let (normal, depth) = if distance_sqr > f32::EPSILON {
            let distance = distance_sqr.sqrt();
            (contact_to_center / distance, radius - distance)
        } else {
            (normal, radius)
        };

        Some(ContactInfo {
            normal,
            point: contact_point,
            depth,
        })
    }
}

// AABB stands for "Axis-Aligned Bounding Boxes"
// Learn more here: https://developer.nvidia.com/blog/thinking-parallel-part-i-collision-detection-gpu/
/// An axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    min: Vec3A,
    max: Vec3A,
}

impl Aabb {
    #[must_use]
    #[inline]
    pub const fn new(min: Vec3A, max: Vec3A) -> Self {
        Self { min, max }
    }

    #[must_use]
    #[inline]
    /// The minimum point contained in the AABB.
    pub const fn min(self) -> Vec3A {
        self.min
    }

    #[must_use]
    #[inline]
    /// The maximum point contained in the AABB.
    pub const fn max(self) -> Vec3A {
        self.max
    }

    #[must_use]
    #[inline]
    pub fn center(self) -> Vec3A {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    #[inline]
    /// Create an AABB from a triangle.
    pub fn from_tri(t: Tri) -> Self {
        let [a, b, c] = t.0;
        Self {
            min: a.min(b).min(c),
            max: a.max(b).max(c),
        }
    }

    /// Squared distance from `point` to the box, zero when inside.
    #[must_use]
    #[inline]
    pub fn distance_squared(self, point: Vec3A) -> f32 {
        (point.clamp(self.min, self.max) - point).length_squared()
    }

    #[must_use]
    #[inline]
    pub fn intersects_sphere(self, center: Vec3A, radius: f32) -> bool {
        self.distance_squared(center) <= radius * radius
    }
}

impl Add for Aabb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            min: self.min.min(rhs.min),
            max: self.max.max(rhs.max),
        }
    }
}

impl From<Tri> for Aabb {
    #[inline]
    fn from(value: Tri) -> Self {
        Self::from_tri(value)
    }
}
