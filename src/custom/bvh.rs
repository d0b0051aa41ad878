use arrayvec::ArrayVec;
use glam::Vec3A;

use super::{
    geometry::{Aabb, ContactInfo, Tri},
    morton::Morton,
};

/// Deep enough for any balanced tree over a `u32` worth of leaves
const STACK_SIZE: usize = 64;

/// A leaf in the BVH.
#[derive(Clone, Copy, Debug)]
pub struct Leaf {
    /// The bounding box of this leaf.
    pub aabb: Aabb,
    /// The primitive that this leaf represents.
    pub primitive: Tri,
    /// The morton code of this leaf.
    pub morton: u64,
}

impl Leaf {
    #[must_use]
    #[inline]
    pub const fn new(primitive: Tri, aabb: Aabb, morton: u64) -> Self {
        Self {
            aabb,
            primitive,
            morton,
        }
    }
}

/// A branch in the BVH.
#[derive(Clone, Debug)]
pub struct Branch {
    pub aabb: Aabb,
    pub left: Box<BvhNode>,
    pub right: Box<BvhNode>,
}

/// A node in the BVH.
#[derive(Clone, Debug)]
pub enum BvhNode {
    /// A leaf node at the end of a series of branches
    Leaf(Leaf),
    /// A branch node that connects to more nodes
    Branch(Branch),
}

impl BvhNode {
    #[must_use]
    #[inline]
    /// Creates a new branch for the BVH given two children.
    pub fn branch(left: Self, right: Self) -> Self {
        Self::Branch(Branch {
            aabb: *left.aabb() + *right.aabb(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    #[must_use]
    #[inline]
    pub const fn aabb(&self) -> &Aabb {
        match self {
            Self::Leaf(leaf) => &leaf.aabb,
            Self::Branch(branch) => &branch.aabb,
        }
    }
}

/// Closest point on any triangle of a [`Bvh`].
#[derive(Clone, Copy, Debug)]
pub struct NearestHit {
    pub point: Vec3A,
    pub distance_squared: f32,
    pub tri: Tri,
}

/// A bounding volume hierarchy.
#[derive(Clone, Debug, Default)]
pub struct Bvh {
    pub num_leaves: usize,
    /// `None` for an empty hierarchy
    pub root: Option<BvhNode>,
}

#[inline]
fn global_aabb(boxes: &[Aabb]) -> Aabb {
    boxes.iter().copied().fold(boxes[0], |a, b| a + b)
}

impl Bvh {
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            num_leaves: 0,
            root: None,
        }
    }

    #[must_use]
    /// Creates a new BVH from a list of primitives.
    pub fn from(primitives: &[Tri]) -> Self {
        let num_leaves = primitives.len();
        if num_leaves == 0 {
            return Self::new();
        }

        let boxes: Vec<Aabb> = primitives.iter().copied().map(Into::into).collect();
        let global_box = global_aabb(&boxes);
        let morton = Morton::from(global_box);

        let mut sorted_leaves: Vec<Leaf> = primitives
            .iter()
            .copied()
            .zip(boxes)
            .map(|(primitive, aabb)| Leaf::new(primitive, aabb, morton.get_code(aabb)))
            .collect();
        radsort::sort_by_key(&mut sorted_leaves, |leaf| leaf.morton);

        let root = Self::generate_hierarchy(&sorted_leaves);

        Self {
            num_leaves,
            root: Some(root),
        }
    }

    fn generate_hierarchy(sorted_leaves: &[Leaf]) -> BvhNode {
        if let [leaf] = sorted_leaves {
            return BvhNode::Leaf(*leaf);
        }

        let (left, right) = sorted_leaves.split_at(sorted_leaves.len().div_ceil(2));
        BvhNode::branch(
            Self::generate_hierarchy(left),
            Self::generate_hierarchy(right),
        )
    }

    /// Calls `f` with every triangle contact of a sphere.
    pub fn for_each_sphere_contact(
        &self,
        center: Vec3A,
        radius: f32,
        mut f: impl FnMut(ContactInfo),
    ) {
        let Some(root) = self.root.as_ref() else {
            return;
        };

        let mut stack = ArrayVec::<&BvhNode, STACK_SIZE>::new();
        stack.push(root);

        while let Some(node) = stack.pop() {
            if !node.aabb().intersects_sphere(center, radius) {
                continue;
            }

            match node {
                BvhNode::Leaf(leaf) => {
                    if let Some(contact) = leaf.primitive.intersect_sphere(center, radius) {
                        f(contact);
                    }
                }
                BvhNode::Branch(branch) => {
                    stack.push(&branch.left);
                    stack.push(&branch.right);
                }
            }
        }
    }

    /// The deepest contact between a sphere and any triangle.
    #[must_use]
    pub fn collide_sphere(&self, center: Vec3A, radius: f32) -> Option<ContactInfo> {
        let mut deepest: Option<ContactInfo> = None;

        self.for_each_sphere_contact(center, radius, |contact| {
            if deepest.is_none_or(|best| contact.depth > best.depth) {
                deepest = Some(contact);
            }
        });

        deepest
    }

    /// Branch-and-bound search for the closest point on any triangle.
    #[must_use]
    pub fn nearest(&self, point: Vec3A) -> Option<NearestHit> {
        let root = self.root.as_ref()?;

        let mut best: Option<NearestHit> = None;
        let mut stack = ArrayVec::<&BvhNode, STACK_SIZE>::new();
        stack.push(root);

        while let Some(node) = stack.pop() {
            let bound = best.map_or(f32::INFINITY, |hit| hit.distance_squared);
            if node.aabb().distance_squared(point) > bound {
                continue;
            }

            match node {
                BvhNode::Leaf(leaf) => {
                    let closest = leaf.primitive.closest_point(point);
                    let distance_squared = closest.distance_squared(point);
                    if distance_squared < bound {
                        best = Some(NearestHit {
                            point: closest,
                            distance_squared,
                            tri: leaf.primitive,
                        });
                    }
                }
                BvhNode::Branch(branch) => {
                    // visit the closer child first so it can tighten the bound
                    let left_dist = branch.left.aabb().distance_squared(point);
                    let right_dist = branch.right.aabb().distance_squared(point);
                    if left_dist < right_dist {
                        stack.push(&branch.right);
                        stack.push(&branch.left);
                    } else {
                        stack.push(&branch.left);
                        stack.push(&branch.right);
                    }
                }
            }
        }

        best
    }
}
