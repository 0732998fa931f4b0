use bytemuck::{Pod, Zeroable};

use crate::math::{Mat4, Vec2, Vec3, Vec4};

use super::MAX_UNIFORMS;

/// One uniform slot: 64 bytes viewable as float, vec2, vec3, vec4 or mat4.
///
/// No type is recorded. Every view reads the same leading floats, so the last
/// write wins regardless of which setter performed it.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Uniform {
    data: [f32; 16],
}

impl Default for Uniform {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Uniform {
    #[inline]
    pub const fn v1(&self) -> f32 {
        self.data[0]
    }

    #[inline]
    pub const fn v2(&self) -> Vec2 {
        Vec2::new(self.data[0], self.data[1])
    }

    #[inline]
    pub const fn v3(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    #[inline]
    pub const fn v4(&self) -> Vec4 {
        Vec4::new(self.data[0], self.data[1], self.data[2], self.data[3])
    }

    #[inline]
    pub fn m4(&self) -> Mat4 {
        bytemuck::cast(self.data)
    }

    #[inline]
    pub fn set_v1(&mut self, v: f32) {
        self.data[0] = v;
    }

    #[inline]
    pub fn set_v2(&mut self, v: Vec2) {
        self.data[..2].copy_from_slice(&[v.x, v.y]);
    }

    #[inline]
    pub fn set_v3(&mut self, v: Vec3) {
        self.data[..3].copy_from_slice(&[v.x, v.y, v.z]);
    }

    #[inline]
    pub fn set_v4(&mut self, v: Vec4) {
        self.data[..4].copy_from_slice(&[v.x, v.y, v.z, v.w]);
    }

    #[inline]
    pub fn set_m4(&mut self, m: Mat4) {
        self.data = bytemuck::cast(m);
    }
}

/// Uniform table of one program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Uniforms {
    pub slots: [Uniform; MAX_UNIFORMS],
}

impl Uniforms {
    /// Returns slot `index`, or `None` if it is past `MAX_UNIFORMS`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Uniform> {
        self.slots.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Uniform> {
        self.slots.get_mut(index)
    }
}

impl core::ops::Index<usize> for Uniforms {
    type Output = Uniform;
    #[inline]
    fn index(&self, index: usize) -> &Uniform {
        &self.slots[index]
    }
}
