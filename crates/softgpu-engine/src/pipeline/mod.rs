//! Draw-call execution.
//!
//! Stage order for `draw_triangles(n)`:
//! 1. vertex fetch ([`VertexFetch`]) pulls `n` input vertices through the bound puller
//! 2. the program's vertex shader turns each into a clip-space output vertex
//! 3. primitive assembly groups every three outputs into a triangle, then
//!    applies perspective division and the viewport transform
//! 4. the rasterizer scans the whole framebuffer, interpolates covered
//!    fragments, runs the fragment shader and depth-tests the result
//!
//! Everything runs synchronously on the caller's thread.

mod assembly;
mod fetch;
mod raster;
mod viewport;

pub use viewport::Viewport;

pub(crate) use assembly::{Triangle, assemble_triangle};
pub(crate) use fetch::VertexFetch;
pub(crate) use raster::rasterize;

use crate::device::{Buffer, BufferId, Framebuffer, ObjectTable, Program, VertexPuller};
use crate::shader::OutVertex;

/// Counters gathered over one draw call.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub vertices: u32,
    pub triangles: u32,
    /// Covered pixels handed to the fragment shader.
    pub fragments: u64,
    /// Fragments that passed the depth test.
    pub fragments_written: u64,
    /// Index or attribute reads that fell outside their buffer.
    pub fetch_faults: u32,
}

/// Borrowed device state a draw call runs against.
pub(crate) struct DrawContext<'a> {
    pub(crate) buffers: &'a ObjectTable<BufferId, Buffer>,
    pub(crate) puller: &'a VertexPuller,
    pub(crate) program: &'a Program,
    pub(crate) framebuffer: &'a mut Framebuffer,
    /// Shaded vertices not yet consumed by a triangle. Persists across draws.
    pub(crate) pending: &'a mut Vec<OutVertex>,
}

/// Runs `vertex_count` vertices through the pipeline.
///
/// Returns `None` if the program does not have both stages attached.
pub(crate) fn draw_triangles(ctx: DrawContext<'_>, vertex_count: u32) -> Option<DrawStats> {
    let DrawContext {
        buffers,
        puller,
        program,
        framebuffer,
        pending,
    } = ctx;

    let (vertex_shader, fragment_shader) = program.stages()?;
    let viewport = Viewport::new(framebuffer.width() as f32, framebuffer.height() as f32);

    let mut stats = DrawStats::default();
    let mut fetch = VertexFetch::new();

    for _ in 0..vertex_count {
        let input = fetch.fetch(puller, buffers);

        let mut output = OutVertex::default();
        vertex_shader.shade(&mut output, &input, &program.uniforms);
        pending.push(output);
        stats.vertices += 1;

        if pending.len() % 3 == 0 {
            let Some(triangle) = assemble_triangle(pending, viewport) else { continue };
            stats.triangles += 1;
            rasterize(
                &triangle,
                fragment_shader,
                &program.uniforms,
                &program.vs2fs,
                framebuffer,
                &mut stats,
            );
        }
    }

    stats.fetch_faults = fetch.faults();
    Some(stats)
}
