use bytemuck::{Pod, Zeroable};

use crate::math::{Vec2, Vec3, Vec4};

/// Element type carried by an attribute head or a vertex-to-fragment slot.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum AttributeType {
    #[default]
    Empty,
    Float,
    Vec2,
    Vec3,
    Vec4,
}

impl AttributeType {
    /// Number of `f32` components.
    #[inline]
    pub const fn components(self) -> usize {
        match self {
            AttributeType::Empty => 0,
            AttributeType::Float => 1,
            AttributeType::Vec2 => 2,
            AttributeType::Vec3 => 3,
            AttributeType::Vec4 => 4,
        }
    }

    /// Bytes read from a buffer for one element.
    #[inline]
    pub const fn byte_width(self) -> usize {
        self.components() * core::mem::size_of::<f32>()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, AttributeType::Empty)
    }
}

/// Unsigned integer width of the elements in an index buffer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum IndexType {
    #[default]
    U8,
    U16,
    U32,
}

impl IndexType {
    #[inline]
    pub const fn byte_width(self) -> usize {
        match self {
            IndexType::U8 => 1,
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }

    /// Decodes one index from exactly `byte_width()` native-endian bytes.
    #[inline]
    pub(crate) fn decode(self, bytes: &[u8]) -> Option<u32> {
        match self {
            IndexType::U8 => bytes.first().map(|&b| u32::from(b)),
            IndexType::U16 => bytes.try_into().ok().map(|b| u32::from(u16::from_ne_bytes(b))),
            IndexType::U32 => bytes.try_into().ok().map(u32::from_ne_bytes),
        }
    }
}

/// One attribute slot: 16 bytes viewable as float, vec2, vec3 or vec4.
///
/// The views alias the same storage. Writing a narrower view leaves the
/// trailing components as they were.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Attribute {
    data: [f32; 4],
}

impl Attribute {
    #[inline]
    pub const fn from_array(data: [f32; 4]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn from_v1(v: f32) -> Self {
        let mut a = Self::default();
        a.set_v1(v);
        a
    }

    #[inline]
    pub fn from_v2(v: Vec2) -> Self {
        let mut a = Self::default();
        a.set_v2(v);
        a
    }

    #[inline]
    pub fn from_v3(v: Vec3) -> Self {
        let mut a = Self::default();
        a.set_v3(v);
        a
    }

    #[inline]
    pub fn from_v4(v: Vec4) -> Self {
        Self::from_array([v.x, v.y, v.z, v.w])
    }

    #[inline]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.data
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        &mut self.data
    }

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
    pub fn set_v1(&mut self, v: f32) {
        self.data[0] = v;
    }

    #[inline]
    pub fn set_v2(&mut self, v: Vec2) {
        self.data[0] = v.x;
        self.data[1] = v.y;
    }

    #[inline]
    pub fn set_v3(&mut self, v: Vec3) {
        self.data[0] = v.x;
        self.data[1] = v.y;
        self.data[2] = v.z;
    }

    #[inline]
    pub fn set_v4(&mut self, v: Vec4) {
        self.data = [v.x, v.y, v.z, v.w];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_widths_follow_component_count() {
        assert_eq!(AttributeType::Empty.byte_width(), 0);
        assert_eq!(AttributeType::Float.byte_width(), 4);
        assert_eq!(AttributeType::Vec2.byte_width(), 8);
        assert_eq!(AttributeType::Vec3.byte_width(), 12);
        assert_eq!(AttributeType::Vec4.byte_width(), 16);
    }

    #[test]
    fn narrow_write_keeps_trailing_components() {
        let mut a = Attribute::from_v4(Vec4::new(1.0, 2.0, 3.0, 4.0));
        a.set_v2(Vec2::new(9.0, 8.0));
        assert_eq!(a.v4(), Vec4::new(9.0, 8.0, 3.0, 4.0));
    }

    #[test]
    fn index_decode_uses_declared_width() {
        assert_eq!(IndexType::U8.decode(&[7]), Some(7));
        assert_eq!(IndexType::U16.decode(&300u16.to_ne_bytes()), Some(300));
        assert_eq!(IndexType::U32.decode(&70_000u32.to_ne_bytes()), Some(70_000));
        assert_eq!(IndexType::U32.decode(&[1, 2]), None);
    }
}
