pub mod bvh;
pub mod geometry;
mod morton;
