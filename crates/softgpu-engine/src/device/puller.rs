use crate::shader::{AttributeType, IndexType, MAX_ATTRIBUTES};

use super::BufferId;

/// One attribute reading head.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct VertexHead {
    pub buffer: BufferId,
    /// Byte offset of element 0.
    pub offset: u64,
    /// Byte distance between consecutive elements.
    pub stride: u64,
    pub attribute_type: AttributeType,
    /// Recorded but not consulted by fetch; a head is read whenever its type is non-empty.
    pub enabled: bool,
}

/// Index buffer selection. Indexing is on iff `buffer` is not `EMPTY`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Indexing {
    pub buffer: BufferId,
    pub index_type: IndexType,
}

impl Indexing {
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.buffer != BufferId::EMPTY
    }
}

/// Vertex-pull configuration: where each attribute comes from and how vertices are indexed.
///
/// A default puller has indexing off and every head disabled with an empty type.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct VertexPuller {
    pub indexing: Indexing,
    pub heads: [VertexHead; MAX_ATTRIBUTES],
}
