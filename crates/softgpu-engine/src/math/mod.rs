//! Vector and matrix types shared by the pipeline and shader programs.
//!
//! Conventions:
//! - `f32` components, `#[repr(C)]` + `Pod` so values can be uploaded into
//!   device buffers with `bytemuck::cast_slice`
//! - `Mat4` is column-major (`cols[c]` is column `c`)
//! - clip space is right-handed with NDC depth in [-1, 1]

mod mat4;
mod vec2;
mod vec3;
mod vec4;

pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
