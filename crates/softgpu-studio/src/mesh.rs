use std::f32::consts::{PI, TAU};

use bytemuck::{Pod, Zeroable};
use softgpu_engine::math::Vec3;

/// Interleaved vertex as uploaded to the device: position at byte 0, normal at byte 12.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl MeshVertex {
    pub const STRIDE: u64 = core::mem::size_of::<MeshVertex>() as u64;
    pub const POSITION_OFFSET: u64 = 0;
    pub const NORMAL_OFFSET: u64 = core::mem::size_of::<Vec3>() as u64;
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// UV sphere centered at the origin.
    ///
    /// `stacks` latitude bands from +Y to -Y, `slices` longitude segments.
    /// The seam column is duplicated, so there are `(stacks + 1) * (slices + 1)`
    /// vertices; pole rows produce zero-area triangles.
    pub fn uv_sphere(radius: f32, stacks: u32, slices: u32) -> Self {
        let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
        for i in 0..=stacks {
            let phi = PI * i as f32 / stacks as f32;
            let (ring, y) = phi.sin_cos();
            for j in 0..=slices {
                let theta = TAU * j as f32 / slices as f32;
                let (sin_t, cos_t) = theta.sin_cos();
                let normal = Vec3::new(ring * cos_t, y, ring * sin_t);
                vertices.push(MeshVertex {
                    position: normal * radius,
                    normal,
                });
            }
        }

        let row = slices + 1;
        let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
        for i in 0..stacks {
            for j in 0..slices {
                let a = i * row + j;
                let b = a + row;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }

        Self { vertices, indices }
    }

    /// Vertices drawn for the whole mesh.
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_matches_puller_heads() {
        assert_eq!(MeshVertex::STRIDE, 24);
        assert_eq!(MeshVertex::NORMAL_OFFSET, 12);
    }

    #[test]
    fn sphere_counts() {
        let m = Mesh::uv_sphere(1.0, 4, 8);
        assert_eq!(m.vertices.len(), 5 * 9);
        assert_eq!(m.index_count(), 4 * 8 * 6);
        assert_eq!(m.vertex_bytes().len(), 45 * 24);
        assert_eq!(m.index_bytes().len(), 4 * 8 * 6 * 4);
    }

    #[test]
    fn indices_stay_in_range() {
        let m = Mesh::uv_sphere(1.0, 3, 5);
        let n = m.vertices.len() as u32;
        assert!(m.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn vertices_lie_on_sphere_with_unit_normals() {
        let m = Mesh::uv_sphere(0.5, 6, 10);
        for v in &m.vertices {
            assert!((v.normal.length() - 1.0).abs() < 1e-5);
            assert!((v.position.length() - 0.5).abs() < 1e-5);
        }
        assert!((m.vertices[0].position.y - 0.5).abs() < 1e-6);
    }
}
