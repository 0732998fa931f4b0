//! Color representations on both sides of the compositor.
//!
//! - [`ColorRgba`]: floating-point color produced by fragment shaders, nominally [0, 1]
//! - [`Rgba8`]: one framebuffer texel, 4 × `u8`, interleaved R, G, B, A
//!
//! [`quantize_channel`] is the single conversion rule between the two and is
//! shared by `clear` and the depth-tested pixel write.

mod rgba;
mod texel;

pub use rgba::ColorRgba;
pub use texel::{Rgba8, quantize_channel};
