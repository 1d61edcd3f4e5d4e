//! Off-screen pixel buffers.
//!
//! The scheduler owns a [`BufferPair`]: one buffer is active for drawing, the
//! other holds the last frame handed to the panel. Drawing collaborators only
//! ever see the active buffer.

mod buffer;
mod pair;

pub use buffer::DisplayBuffer;
pub use pair::BufferPair;
