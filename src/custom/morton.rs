use glam::Vec3A;

use super::geometry::Aabb;

/// Quantizes box centers onto a 21-bit grid per axis and interleaves
/// the bits so that nearby boxes get nearby codes.
#[derive(Clone, Copy, Debug)]
pub struct Morton {
    offset: Vec3A,
    scale: Vec3A,
}

impl Morton {
    const MAX: f32 = ((1u32 << 21) - 1) as f32;

    /// Spreads the low 21 bits of `x` so there are two zero bits between each.
    #[inline]
    const fn expand_bits(x: u64) -> u64 {
        let mut x = x & 0x1f_ffff;
        x = (x | x << 32) & 0x1f_0000_0000_ffff;
        x = (x | x << 16) & 0x1f_0000_ff00_00ff;
        x = (x | x << 8) & 0x100f_00f0_0f00_f00f;
        x = (x | x << 4) & 0x10c3_0c30_c30c_30c3;
        x = (x | x << 2) & 0x1249_2492_4924_9249;
        x
    }

    #[must_use]
    pub fn get_code(&self, box_: Aabb) -> u64 {
        let p = ((box_.center() - self.offset) * self.scale).clamp(Vec3A::ZERO, Vec3A::splat(Self::MAX));

        Self::expand_bits(p.x as u64)
            | Self::expand_bits(p.y as u64) << 1
            | Self::expand_bits(p.z as u64) << 2
    }
}

impl From<Aabb> for Morton {
    fn from(global_box: Aabb) -> Self {
        let offset = global_box.min();
        let extent = global_box.max() - offset;

        // flat boxes (e.g. a single floor quad) have a zero extent on some axis
        let scale = Vec3A::select(
            extent.cmpgt(Vec3A::ZERO),
            Vec3A::splat(Self::MAX) / extent,
            Vec3A::ZERO,
        );

        Self { offset, scale }
    }
}
