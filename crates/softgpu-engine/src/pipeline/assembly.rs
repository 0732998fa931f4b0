use crate::math::Vec4;
use crate::shader::OutVertex;

use super::Viewport;

/// Screen-space triangle.
///
/// Positions hold screen x/y, NDC z, and the clip-space w each vertex had
/// before perspective division.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub(crate) struct Triangle {
    pub(crate) a: OutVertex,
    pub(crate) b: OutVertex,
    pub(crate) c: OutVertex,
}

/// Pops the last three pending vertices as triangle `(a, b, c)` in append
/// order and transforms each to screen space.
pub(crate) fn assemble_triangle(pending: &mut Vec<OutVertex>, viewport: Viewport) -> Option<Triangle> {
    let c = pending.pop()?;
    let b = pending.pop()?;
    let a = pending.pop()?;
    Some(Triangle {
        a: to_screen(a, viewport),
        b: to_screen(b, viewport),
        c: to_screen(c, viewport),
    })
}

/// Perspective division followed by the viewport transform. No clipping:
/// vertices outside the view volume or with `w <= 0` go through as-is.
fn to_screen(mut vertex: OutVertex, viewport: Viewport) -> OutVertex {
    vertex.position = viewport.to_screen(perspective_divide(vertex.position));
    vertex
}

#[inline]
fn perspective_divide(p: Vec4) -> Vec4 {
    Vec4::new(p.x / p.w, p.y / p.w, p.z / p.w, p.w)
}
