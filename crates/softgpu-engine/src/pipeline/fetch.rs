use crate::device::{Buffer, BufferId, ObjectTable, VertexPuller};
use crate::shader::InVertex;

/// Vertex fetch stage state for one draw call.
///
/// The invocation counter starts at 0 and advances once per fetched vertex.
#[derive(Debug, Default)]
pub(crate) struct VertexFetch {
    invocation: u32,
    faults: u32,
}

impl VertexFetch {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reads fetch faults (out-of-range index or attribute reads) seen so far.
    #[inline]
    pub(crate) fn faults(&self) -> u32 {
        self.faults
    }

    /// Pulls the next vertex.
    ///
    /// The vertex id is the invocation counter, or, with indexing on, the
    /// index stored at `invocation * index_width`. Every head with a
    /// non-empty type is read from `offset + stride * vertex_id`; the head's
    /// `enabled` flag is not consulted. Reads from buffers that are not live
    /// leave the destination at its default.
    pub(crate) fn fetch(
        &mut self,
        puller: &VertexPuller,
        buffers: &ObjectTable<BufferId, Buffer>,
    ) -> InVertex {
        let mut vertex = InVertex {
            vertex_id: self.invocation,
            ..InVertex::default()
        };

        if puller.indexing.is_enabled() {
            if let Some(index_buffer) = buffers.get(puller.indexing.buffer) {
                let width = puller.indexing.index_type.byte_width();
                let index = (self.invocation as usize)
                    .checked_mul(width)
                    .and_then(|offset| index_buffer.bytes(offset, width))
                    .and_then(|bytes| puller.indexing.index_type.decode(bytes));
                match index {
                    Some(id) => vertex.vertex_id = id,
                    None => self.faults += 1,
                }
            }
        }

        let vertex_id = u64::from(vertex.vertex_id);
        for (head, slot) in puller.heads.iter().zip(vertex.attributes.iter_mut()) {
            if head.attribute_type.is_empty() {
                continue;
            }
            let Some(source) = buffers.get(head.buffer) else { continue };

            let width = head.attribute_type.byte_width();
            let offset = head
                .stride
                .checked_mul(vertex_id)
                .and_then(|o| o.checked_add(head.offset))
                .and_then(|o| usize::try_from(o).ok());

            let dst = &mut bytemuck::bytes_of_mut(slot)[..width];
            let ok = offset.is_some_and(|offset| source.read(offset, dst));
            if !ok {
                self.faults += 1;
            }
        }

        self.invocation = self.invocation.wrapping_add(1);
        vertex
    }
}
