use super::{InFragment, InVertex, OutFragment, OutVertex, Uniforms};

/// Vertex stage of a shader program.
///
/// Must write `output.position` (clip space) and any attribute slots the
/// program forwards to the fragment stage.
pub trait VertexShader {
    fn shade(&self, output: &mut OutVertex, input: &InVertex, uniforms: &Uniforms);
}

/// Fragment stage of a shader program. Must write `output.color`.
pub trait FragmentShader {
    fn shade(&self, output: &mut OutFragment, input: &InFragment, uniforms: &Uniforms);
}

impl<F> VertexShader for F
where
    F: Fn(&mut OutVertex, &InVertex, &Uniforms),
{
    #[inline]
    fn shade(&self, output: &mut OutVertex, input: &InVertex, uniforms: &Uniforms) {
        self(output, input, uniforms)
    }
}

impl<F> FragmentShader for F
where
    F: Fn(&mut OutFragment, &InFragment, &Uniforms),
{
    #[inline]
    fn shade(&self, output: &mut OutFragment, input: &InFragment, uniforms: &Uniforms) {
        self(output, input, uniforms)
    }
}
