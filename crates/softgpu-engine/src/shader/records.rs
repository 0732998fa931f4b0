use crate::color::ColorRgba;
use crate::math::Vec4;

use super::{Attribute, MAX_ATTRIBUTES};

/// Vertex as produced by the vertex fetch stage.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct InVertex {
    /// Invocation counter, or the value read from the index buffer when indexing is on.
    pub vertex_id: u32,
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

/// Vertex as written by a vertex shader.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OutVertex {
    /// Clip-space position.
    pub position: Vec4,
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

/// Fragment handed to a fragment shader.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct InFragment {
    /// `x`, `y`: pixel center in screen space. `z`: interpolated NDC depth.
    pub coord: Vec4,
    /// Perspective-correct interpolation of the slots the program forwards.
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

/// Fragment as written by a fragment shader.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OutFragment {
    pub color: ColorRgba,
}
