use crate::color::ColorRgba;
use crate::math::{Mat4, Vec2, Vec3, Vec4};
use crate::pipeline::{self, DrawContext, DrawStats};
use crate::shader::{
    AttributeType, FragmentShader, IndexType, MAX_ATTRIBUTES, OutVertex, Uniform, VertexShader,
};

use super::bindings::Bindings;
use super::{
    Buffer, BufferId, Framebuffer, ObjectTable, Program, ProgramId, PullerId, VertexHead,
    VertexPuller,
};

/// Software graphics device.
///
/// Owns every buffer, vertex puller and program, the framebuffer, and the
/// binding state a draw call runs against. All operations are synchronous.
///
/// Operations on handles that do not name a live object are silent no-ops
/// (queries return `false`). Out-of-range offsets and indices are logged
/// and ignored.
#[derive(Debug, Default)]
pub struct Gpu {
    buffers: ObjectTable<BufferId, Buffer>,
    pullers: ObjectTable<PullerId, VertexPuller>,
    programs: ObjectTable<ProgramId, Program>,
    framebuffer: Framebuffer,
    bindings: Bindings,
    /// Shaded vertices waiting for a third to complete a triangle.
    pending: Vec<OutVertex>,
}

impl Gpu {
    /// Creates a device with no objects and a 0×0 framebuffer.
    pub fn new() -> Self {
        Self::default()
    }

    // ── buffers ───────────────────────────────────────────────────────────

    /// Allocates a zero-filled buffer of `size` bytes.
    pub fn create_buffer(&mut self, size: usize) -> BufferId {
        let id = self.buffers.insert(Buffer::new(size));
        log::debug!("created {id:?} ({size} bytes)");
        id
    }

    pub fn delete_buffer(&mut self, id: BufferId) {
        match self.buffers.remove(id) {
            Some(_) => log::debug!("deleted {id:?}"),
            None => log::trace!("delete_buffer: {id:?} is not live"),
        }
    }

    /// Copies `data` into the buffer starting at byte `offset`.
    pub fn set_buffer_data(&mut self, id: BufferId, offset: u64, data: &[u8]) {
        let Some(buffer) = self.buffers.get_mut(id) else {
            log::trace!("set_buffer_data: {id:?} is not live");
            return;
        };
        let ok = usize::try_from(offset).is_ok_and(|offset| buffer.write(offset, data));
        if !ok {
            log::warn!(
                "set_buffer_data: {} bytes at offset {offset} do not fit {id:?} ({} bytes); ignored",
                data.len(),
                buffer.len()
            );
        }
    }

    /// Fills `out` with bytes of the buffer starting at byte `offset`.
    pub fn get_buffer_data(&self, id: BufferId, offset: u64, out: &mut [u8]) {
        let Some(buffer) = self.buffers.get(id) else {
            log::trace!("get_buffer_data: {id:?} is not live");
            return;
        };
        let ok = usize::try_from(offset).is_ok_and(|offset| buffer.read(offset, out));
        if !ok {
            log::warn!(
                "get_buffer_data: {} bytes at offset {offset} exceed {id:?} ({} bytes); ignored",
                out.len(),
                buffer.len()
            );
        }
    }

    #[inline]
    pub fn is_buffer(&self, id: BufferId) -> bool {
        self.buffers.contains(id)
    }

    // ── vertex pullers ────────────────────────────────────────────────────

    /// Creates a puller with indexing off and every head empty.
    pub fn create_vertex_puller(&mut self) -> PullerId {
        let id = self.pullers.insert(VertexPuller::default());
        log::debug!("created {id:?}");
        id
    }

    /// Deletes the puller. A binding to it is left in place.
    pub fn delete_vertex_puller(&mut self, id: PullerId) {
        match self.pullers.remove(id) {
            Some(_) => log::debug!("deleted {id:?}"),
            None => log::trace!("delete_vertex_puller: {id:?} is not live"),
        }
    }

    /// Configures head `head` to read `attribute_type` elements from `buffer`
    /// at `offset + stride * vertex_id`.
    ///
    /// The buffer handle is stored as given; a head whose buffer is not live
    /// at draw time leaves its slot at the default.
    pub fn set_vertex_puller_head(
        &mut self,
        id: PullerId,
        head: usize,
        attribute_type: AttributeType,
        stride: u64,
        offset: u64,
        buffer: BufferId,
    ) {
        let Some(slot) = self.head_mut(id, head, "set_vertex_puller_head") else { return };
        slot.attribute_type = attribute_type;
        slot.stride = stride;
        slot.offset = offset;
        slot.buffer = buffer;
    }

    /// Turns indexing on with `buffer` as the index source. Passing
    /// `BufferId::EMPTY` turns it off.
    pub fn set_vertex_puller_indexing(&mut self, id: PullerId, index_type: IndexType, buffer: BufferId) {
        let Some(puller) = self.pullers.get_mut(id) else {
            log::trace!("set_vertex_puller_indexing: {id:?} is not live");
            return;
        };
        puller.indexing.index_type = index_type;
        puller.indexing.buffer = buffer;
    }

    pub fn enable_vertex_puller_head(&mut self, id: PullerId, head: usize) {
        if let Some(slot) = self.head_mut(id, head, "enable_vertex_puller_head") {
            slot.enabled = true;
        }
    }

    /// Clears the enabled flag. Fetch reads every head with a non-empty type
    /// regardless of this flag.
    pub fn disable_vertex_puller_head(&mut self, id: PullerId, head: usize) {
        if let Some(slot) = self.head_mut(id, head, "disable_vertex_puller_head") {
            slot.enabled = false;
        }
    }

    /// Enabled flag of `head`; `false` for a dead puller or an out-of-range head.
    pub fn vertex_puller_head_enabled(&self, id: PullerId, head: usize) -> bool {
        self.pullers
            .get(id)
            .and_then(|p| p.heads.get(head))
            .is_some_and(|h| h.enabled)
    }

    /// Read-only view of a puller's configuration.
    pub fn vertex_puller(&self, id: PullerId) -> Option<&VertexPuller> {
        self.pullers.get(id)
    }

    /// Makes `id` the puller used by draws. Ignored if `id` is not live.
    pub fn bind_vertex_puller(&mut self, id: PullerId) {
        if !self.pullers.contains(id) {
            log::trace!("bind_vertex_puller: {id:?} is not live");
            return;
        }
        self.bindings.vertex_puller = id;
    }

    pub fn unbind_vertex_puller(&mut self) {
        self.bindings.vertex_puller = PullerId::EMPTY;
    }

    #[inline]
    pub fn is_vertex_puller(&self, id: PullerId) -> bool {
        self.pullers.contains(id)
    }

    /// Currently bound puller. May name a deleted object.
    #[inline]
    pub fn bound_vertex_puller(&self) -> PullerId {
        self.bindings.vertex_puller
    }

    fn head_mut(&mut self, id: PullerId, head: usize, op: &str) -> Option<&mut VertexHead> {
        let Some(puller) = self.pullers.get_mut(id) else {
            log::trace!("{op}: {id:?} is not live");
            return None;
        };
        let slot = puller.heads.get_mut(head);
        if slot.is_none() {
            log::warn!("{op}: head {head} out of range (max {MAX_ATTRIBUTES}); ignored");
        }
        slot
    }

    // ── programs ──────────────────────────────────────────────────────────

    /// Creates a program with no shaders, zeroed uniforms and no forwarded slots.
    pub fn create_program(&mut self) -> ProgramId {
        let id = self.programs.insert(Program::default());
        log::debug!("created {id:?}");
        id
    }

    /// Deletes the program. An active binding to it is left in place.
    pub fn delete_program(&mut self, id: ProgramId) {
        match self.programs.remove(id) {
            Some(_) => log::debug!("deleted {id:?}"),
            None => log::trace!("delete_program: {id:?} is not live"),
        }
    }

    /// Replaces both shader stages of the program.
    pub fn attach_shaders<V, F>(&mut self, id: ProgramId, vertex_shader: V, fragment_shader: F)
    where
        V: VertexShader + 'static,
        F: FragmentShader + 'static,
    {
        let Some(program) = self.programs.get_mut(id) else {
            log::trace!("attach_shaders: {id:?} is not live");
            return;
        };
        program.vertex_shader = Some(Box::new(vertex_shader));
        program.fragment_shader = Some(Box::new(fragment_shader));
    }

    /// Declares which components of attribute slot `slot` are interpolated
    /// from vertex output to fragment input.
    pub fn set_vs2fs_type(&mut self, id: ProgramId, slot: usize, attribute_type: AttributeType) {
        let Some(program) = self.programs.get_mut(id) else {
            log::trace!("set_vs2fs_type: {id:?} is not live");
            return;
        };
        match program.vs2fs.get_mut(slot) {
            Some(ty) => *ty = attribute_type,
            None => log::warn!("set_vs2fs_type: slot {slot} out of range (max {MAX_ATTRIBUTES}); ignored"),
        }
    }

    /// Makes `id` the program used by draws. Ignored if `id` is not live.
    pub fn use_program(&mut self, id: ProgramId) {
        if !self.programs.contains(id) {
            log::trace!("use_program: {id:?} is not live");
            return;
        }
        self.bindings.program = id;
    }

    #[inline]
    pub fn is_program(&self, id: ProgramId) -> bool {
        self.programs.contains(id)
    }

    /// Currently active program. May name a deleted object.
    #[inline]
    pub fn active_program(&self) -> ProgramId {
        self.bindings.program
    }

    /// Reads uniform slot `index` of a live program.
    pub fn program_uniform(&self, id: ProgramId, index: usize) -> Option<&Uniform> {
        self.programs.get(id)?.uniforms.get(index)
    }

    pub fn program_uniform_1f(&mut self, id: ProgramId, index: usize, v: f32) {
        self.write_uniform(id, index, "program_uniform_1f", |u| u.set_v1(v));
    }

    pub fn program_uniform_2f(&mut self, id: ProgramId, index: usize, v: Vec2) {
        self.write_uniform(id, index, "program_uniform_2f", |u| u.set_v2(v));
    }

    pub fn program_uniform_3f(&mut self, id: ProgramId, index: usize, v: Vec3) {
        self.write_uniform(id, index, "program_uniform_3f", |u| u.set_v3(v));
    }

    pub fn program_uniform_4f(&mut self, id: ProgramId, index: usize, v: Vec4) {
        self.write_uniform(id, index, "program_uniform_4f", |u| u.set_v4(v));
    }

    pub fn program_uniform_matrix_4f(&mut self, id: ProgramId, index: usize, m: Mat4) {
        self.write_uniform(id, index, "program_uniform_matrix_4f", |u| u.set_m4(m));
    }

    fn write_uniform(&mut self, id: ProgramId, index: usize, op: &str, write: impl FnOnce(&mut Uniform)) {
        let Some(program) = self.programs.get_mut(id) else {
            log::trace!("{op}: {id:?} is not live");
            return;
        };
        match program.uniforms.get_mut(index) {
            Some(uniform) => write(uniform),
            None => log::warn!("{op}: uniform {index} out of range; ignored"),
        }
    }

    // ── framebuffer ───────────────────────────────────────────────────────

    /// Replaces the framebuffer with a `width × height` one cleared to
    /// transparent black at depth 1.
    pub fn create_framebuffer(&mut self, width: u32, height: u32) {
        self.framebuffer = Framebuffer::new(width, height);
        log::debug!("created framebuffer {width}x{height}");
    }

    /// Releases framebuffer storage; the device is left with a 0×0 framebuffer.
    pub fn delete_framebuffer(&mut self) {
        self.framebuffer.release();
        log::debug!("deleted framebuffer");
    }

    /// Changes framebuffer dimensions. Existing storage keeps its prefix and
    /// new texels are zero; contents are not rearranged.
    pub fn resize_framebuffer(&mut self, width: u32, height: u32) {
        self.framebuffer.resize(width, height);
        log::debug!("resized framebuffer to {width}x{height}");
    }

    /// Color attachment as interleaved RGBA bytes, texel `(x, y)` at `x * height + y`.
    #[inline]
    pub fn framebuffer_color(&self) -> &[u8] {
        self.framebuffer.color_bytes()
    }

    #[inline]
    pub fn framebuffer_color_mut(&mut self) -> &mut [u8] {
        self.framebuffer.color_bytes_mut()
    }

    /// Depth attachment, same addressing as the color attachment.
    #[inline]
    pub fn framebuffer_depth(&self) -> &[f32] {
        self.framebuffer.depth()
    }

    #[inline]
    pub fn framebuffer_depth_mut(&mut self) -> &mut [f32] {
        self.framebuffer.depth_mut()
    }

    #[inline]
    pub fn framebuffer_width(&self) -> u32 {
        self.framebuffer.width()
    }

    #[inline]
    pub fn framebuffer_height(&self) -> u32 {
        self.framebuffer.height()
    }

    #[inline]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    // ── execution ─────────────────────────────────────────────────────────

    /// Fills the color attachment with the quantized color and depth with 1.0.
    pub fn clear(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.framebuffer.clear(ColorRgba::new(r, g, b, a));
    }

    /// Runs `vertex_count` vertices through the pipeline with the bound
    /// puller and the active program.
    ///
    /// Every third shaded vertex completes a triangle, which is rasterized
    /// immediately. Leftover vertices carry over to the next draw.
    ///
    /// Returns `None` without touching any state when there is no live
    /// active program or it lacks a shader stage.
    pub fn draw_triangles(&mut self, vertex_count: u32) -> Option<DrawStats> {
        let Self {
            buffers,
            pullers,
            programs,
            framebuffer,
            bindings,
            pending,
        } = self;

        let Some(program) = programs.get(bindings.program) else {
            log::warn!("draw_triangles: active program {:?} is not live; skipped", bindings.program);
            return None;
        };

        let fallback = VertexPuller::default();
        let puller = match pullers.get(bindings.vertex_puller) {
            Some(puller) => puller,
            None => {
                log::trace!(
                    "draw_triangles: bound puller {:?} is not live; using empty configuration",
                    bindings.vertex_puller
                );
                &fallback
            }
        };

        let ctx = DrawContext {
            buffers,
            puller,
            program,
            framebuffer,
            pending,
        };
        let Some(stats) = pipeline::draw_triangles(ctx, vertex_count) else {
            log::warn!("draw_triangles: {:?} has no shaders attached; skipped", bindings.program);
            return None;
        };

        if stats.fetch_faults > 0 {
            log::warn!("draw_triangles: {} reads fell outside their buffer", stats.fetch_faults);
        }
        log::debug!(
            "draw_triangles({vertex_count}): {} triangles, {} fragments, {} written",
            stats.triangles,
            stats.fragments,
            stats.fragments_written
        );
        Some(stats)
    }
}
