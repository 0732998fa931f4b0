use crate::color::{ColorRgba, Rgba8};

/// Depth written by `clear`. Any fragment inside the NDC depth range compares less.
pub const CLEAR_DEPTH: f32 = 1.0;

/// Color + depth attachments of the device.
///
/// Texel `(x, y)` lives at index `x * height + y` in both arrays, with
/// `(0, 0)` the bottom-left pixel. Consumers that blit the raw arrays must
/// use the same addressing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    color: Vec<Rgba8>,
    depth: Vec<f32>,
}

impl Framebuffer {
    /// Allocates `width × height` texels cleared to transparent black at depth 1.
    pub fn new(width: u32, height: u32) -> Self {
        let mut fb = Self::default();
        fb.resize(width, height);
        fb.clear(ColorRgba::transparent());
        fb
    }

    /// Changes the dimensions. Storage keeps its existing prefix; new texels are zero.
    pub fn resize(&mut self, width: u32, height: u32) {
        let n = texel_count(width, height);
        self.color.resize(n, Rgba8::default());
        self.depth.resize(n, 0.0);
        self.width = width;
        self.height = height;
    }

    /// Releases storage and collapses to 0×0.
    pub fn release(&mut self) {
        self.color = Vec::new();
        self.depth = Vec::new();
        self.width = 0;
        self.height = 0;
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.color.is_empty()
    }

    /// Flat index of texel `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        x as usize * self.height as usize + y as usize
    }

    /// Fills color with the quantized `color` and depth with [`CLEAR_DEPTH`].
    pub fn clear(&mut self, color: ColorRgba) {
        self.color.fill(Rgba8::quantize(color));
        self.depth.fill(CLEAR_DEPTH);
    }

    /// Color attachment as interleaved RGBA bytes.
    #[inline]
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color)
    }

    #[inline]
    pub fn color_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.color)
    }

    #[inline]
    pub fn texels(&self) -> &[Rgba8] {
        &self.color
    }

    #[inline]
    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    #[inline]
    pub fn depth_mut(&mut self) -> &mut [f32] {
        &mut self.depth
    }

    /// Color of texel `(x, y)`, or `None` outside the framebuffer.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.color.get(self.index(x, y)).copied()
    }

    /// Depth of texel `(x, y)`, or `None` outside the framebuffer.
    pub fn depth_at(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.depth.get(self.index(x, y)).copied()
    }

    /// Strict less-than depth test at texel `(x, y)`; on pass writes both attachments.
    ///
    /// Returns whether the fragment was written.
    #[inline]
    pub(crate) fn depth_test_write(&mut self, x: u32, y: u32, depth: f32, color: ColorRgba) -> bool {
        let i = self.index(x, y);
        let (Some(stored), Some(texel)) = (self.depth.get_mut(i), self.color.get_mut(i)) else {
            return false;
        };
        if depth < *stored {
            *texel = Rgba8::quantize(color);
            *stored = depth;
            true
        } else {
            false
        }
    }
}

#[inline]
fn texel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_cleared_transparent_at_far_depth() {
        let fb = Framebuffer::new(3, 2);
        assert_eq!(fb.texels().len(), 6);
        assert!(fb.texels().iter().all(|&t| t == Rgba8::new(0, 0, 0, 0)));
        assert!(fb.depth().iter().all(|&d| d == 1.0));
    }

    #[test]
    fn clear_quantizes_every_texel() {
        let mut fb = Framebuffer::new(4, 4);
        fb.clear(ColorRgba::new(1.0, 0.0, 0.0, 1.0));
        assert!(fb.color_bytes().chunks(4).all(|px| px == [255, 0, 0, 255]));
        assert!(fb.depth().iter().all(|&d| d == CLEAR_DEPTH));
    }

    #[test]
    fn addressing_is_column_major() {
        let fb = Framebuffer::new(4, 3);
        assert_eq!(fb.index(0, 0), 0);
        assert_eq!(fb.index(0, 2), 2);
        assert_eq!(fb.index(1, 0), 3);
        assert_eq!(fb.index(3, 2), 11);
    }

    #[test]
    fn depth_test_is_strict() {
        let mut fb = Framebuffer::new(2, 2);
        assert!(fb.depth_test_write(1, 0, 0.5, ColorRgba::white()));
        assert!(!fb.depth_test_write(1, 0, 0.5, ColorRgba::black()));
        assert_eq!(fb.color_at(1, 0), Some(Rgba8::new(255, 255, 255, 255)));
        assert_eq!(fb.depth_at(1, 0), Some(0.5));
    }

    #[test]
    fn resize_keeps_prefix_and_zero_fills() {
        let mut fb = Framebuffer::new(1, 1);
        fb.resize(2, 1);
        assert_eq!(fb.depth(), &[1.0, 0.0]);
        assert_eq!(fb.width(), 2);
    }

    #[test]
    fn release_collapses_to_zero() {
        let mut fb = Framebuffer::new(5, 5);
        fb.release();
        assert!(fb.is_empty());
        assert_eq!((fb.width(), fb.height()), (0, 0));
        assert_eq!(fb.color_at(0, 0), None);
    }
}
