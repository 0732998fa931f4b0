//! The software graphics device.
//!
//! [`Gpu`] is the only entry point. It owns:
//! - raw byte buffers, vertex pullers and shader programs, each addressed by
//!   its own handle type ([`BufferId`], [`PullerId`], [`ProgramId`])
//! - the [`Framebuffer`] (RGBA8 color + f32 depth)
//! - binding state: the bound vertex puller and the active program
//!
//! Handles are never reused, and deleting a bound object leaves the
//! binding pointing at the stale handle.

mod bindings;
mod buffer;
mod framebuffer;
mod gpu;
mod handle;
mod program;
mod puller;
mod table;

pub use framebuffer::{CLEAR_DEPTH, Framebuffer};
pub use gpu::Gpu;
pub use handle::{BufferId, Handle, ProgramId, PullerId};
pub use puller::{Indexing, VertexHead, VertexPuller};

pub(crate) use buffer::Buffer;
pub(crate) use program::Program;
pub(crate) use table::ObjectTable;
