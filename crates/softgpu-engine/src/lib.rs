//! softgpu engine crate.
//!
//! A graphics device emulated entirely on the CPU: buffers, vertex pullers,
//! shader programs supplied as Rust callables, and a depth-buffered
//! triangle rasterizer with perspective-correct interpolation.
//!
//! Start from [`Gpu`]:
//!
//! ```
//! use softgpu_engine::Gpu;
//!
//! let mut gpu = Gpu::new();
//! gpu.create_framebuffer(4, 4);
//! gpu.clear(1.0, 0.0, 0.0, 1.0);
//! assert_eq!(&gpu.framebuffer_color()[..4], &[255, 0, 0, 255]);
//! ```

pub mod color;
pub mod device;
pub mod math;
pub mod pipeline;
pub mod shader;

pub mod logging;

pub use color::{ColorRgba, Rgba8};
pub use device::{BufferId, Framebuffer, Gpu, Handle, ProgramId, PullerId};
pub use pipeline::DrawStats;
pub use shader::{
    Attribute, AttributeType, FragmentShader, InFragment, InVertex, IndexType, MAX_ATTRIBUTES, MAX_UNIFORMS,
    OutFragment, OutVertex, Uniform, Uniforms, VertexShader,
};
