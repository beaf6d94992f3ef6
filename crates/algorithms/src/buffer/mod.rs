//! Bounded buffers owned by a sampler run
//!
//! Both buffers are fixed arenas indexed by integer cursors, so capacity is a
//! type-level fact and nothing is ever allocated after construction.

pub mod byte_queue;
pub mod output;
pub mod ring;

pub use byte_queue::ByteQueue;
pub use output::OutputBuffer;
pub use ring::Ring;
