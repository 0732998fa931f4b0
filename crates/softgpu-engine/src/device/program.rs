use crate::shader::{AttributeType, FragmentShader, MAX_ATTRIBUTES, Uniforms, VertexShader};

/// Shader program: two stages, their uniforms, and the vertex-to-fragment slot types.
#[derive(Default)]
pub(crate) struct Program {
    pub(crate) vertex_shader: Option<Box<dyn VertexShader>>,
    pub(crate) fragment_shader: Option<Box<dyn FragmentShader>>,
    pub(crate) uniforms: Uniforms,
    /// Per slot, the type interpolated from vertex output to fragment input.
    pub(crate) vs2fs: [AttributeType; MAX_ATTRIBUTES],
}

impl Program {
    /// Both stages, if attached.
    #[inline]
    pub(crate) fn stages(&self) -> Option<(&dyn VertexShader, &dyn FragmentShader)> {
        Some((self.vertex_shader.as_deref()?, self.fragment_shader.as_deref()?))
    }
}

impl core::fmt::Debug for Program {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Program")
            .field("vertex_shader", &self.vertex_shader.is_some())
            .field("fragment_shader", &self.fragment_shader.is_some())
            .field("vs2fs", &self.vs2fs)
            .finish_non_exhaustive()
    }
}
