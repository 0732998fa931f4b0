use crate::math::Vec4;

/// Framebuffer extent in pixels, used to map NDC x/y to screen space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Maps x, y from [-1, 1] to [0, width] / [0, height]. `z` and `w` pass through.
    #[inline]
    pub fn to_screen(self, ndc: Vec4) -> Vec4 {
        Vec4::new(
            (ndc.x + 1.0) / 2.0 * self.width,
            (ndc.y + 1.0) / 2.0 * self.height,
            ndc.z,
            ndc.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_framebuffer_extent() {
        let vp = Viewport::new(200.0, 100.0);
        assert_eq!(vp.to_screen(Vec4::new(-1.0, -1.0, 0.5, 2.0)), Vec4::new(0.0, 0.0, 0.5, 2.0));
        assert_eq!(vp.to_screen(Vec4::new(1.0, 1.0, 0.0, 1.0)), Vec4::new(200.0, 100.0, 0.0, 1.0));
        assert_eq!(vp.to_screen(Vec4::new(0.0, 0.0, 0.0, 1.0)), Vec4::new(100.0, 50.0, 0.0, 1.0));
    }
}
