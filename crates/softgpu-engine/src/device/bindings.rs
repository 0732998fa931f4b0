use super::{ProgramId, PullerId};

/// Device-wide binding state.
///
/// Deleting a bound object does not reset its binding: the slot keeps the
/// stale handle until it is explicitly unbound or rebound.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub(crate) struct Bindings {
    pub(crate) vertex_puller: PullerId,
    pub(crate) program: ProgramId,
}
