//! Shader-facing contract.
//!
//! Shader programs are supplied from outside the device as a pair of
//! callables. The device hands them the records defined here:
//! - vertex stage: `&mut OutVertex`, `&InVertex`, `&Uniforms`
//! - fragment stage: `&mut OutFragment`, `&InFragment`, `&Uniforms`
//!
//! Shaders are expected to be pure with respect to device state; they read
//! their inputs and write exactly one output record.

mod attribute;
mod program;
mod records;
mod uniform;

pub use attribute::{Attribute, AttributeType, IndexType};
pub use program::{FragmentShader, VertexShader};
pub use records::{InFragment, InVertex, OutFragment, OutVertex};
pub use uniform::{Uniform, Uniforms};

/// Number of attribute heads per puller and attribute slots per vertex/fragment record.
pub const MAX_ATTRIBUTES: usize = 16;

/// Number of uniform slots per program.
pub const MAX_UNIFORMS: usize = 16;
