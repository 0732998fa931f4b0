use bytemuck::{Pod, Zeroable};

use super::ColorRgba;

/// One framebuffer color texel.
///
/// Layout is part of the external contract: consumers blit the color buffer
/// as tightly packed `[r, g, b, a]` bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Quantizes every channel of `c` with [`quantize_channel`].
    #[inline]
    pub fn quantize(c: ColorRgba) -> Self {
        Self {
            r: quantize_channel(c.r),
            g: quantize_channel(c.g),
            b: quantize_channel(c.b),
            a: quantize_channel(c.a),
        }
    }
}

impl From<ColorRgba> for Rgba8 {
    #[inline]
    fn from(c: ColorRgba) -> Self {
        Self::quantize(c)
    }
}

/// Converts one channel to 8 bits.
///
/// `v >= 1` maps to 255, `v <= 0` to 0, anything else to `floor(v * 256)`.
/// NaN falls through to the last branch and the saturating cast yields 0.
#[inline]
pub fn quantize_channel(v: f32) -> u8 {
    if v >= 1.0 {
        255
    } else if v <= 0.0 {
        0
    } else {
        (v * 256.0).floor() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturates_at_both_ends() {
        assert_eq!(quantize_channel(1.0), 255);
        assert_eq!(quantize_channel(7.5), 255);
        assert_eq!(quantize_channel(0.0), 0);
        assert_eq!(quantize_channel(-3.0), 0);
    }

    #[test]
    fn interior_values_floor_times_256() {
        assert_eq!(quantize_channel(0.5), 128);
        assert_eq!(quantize_channel(0.25), 64);
        assert_eq!(quantize_channel(0.999), 255);
        assert_eq!(quantize_channel(1.0 / 256.0), 1);
    }

    #[test]
    fn nan_quantizes_to_zero() {
        assert_eq!(quantize_channel(f32::NAN), 0);
    }

    #[test]
    fn texel_is_four_tightly_packed_bytes() {
        assert_eq!(core::mem::size_of::<Rgba8>(), 4);
        let px = [Rgba8::new(1, 2, 3, 4), Rgba8::new(5, 6, 7, 8)];
        assert_eq!(bytemuck::cast_slice::<Rgba8, u8>(&px), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn quantize_maps_each_channel() {
        let c = ColorRgba::new(1.0, 0.0, 0.5, 2.0);
        assert_eq!(Rgba8::from(c), Rgba8::new(255, 0, 128, 255));
    }
}
