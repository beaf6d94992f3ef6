//! Byte producers for the streamed rejection sampler
//!
//! Both producers speak the [`XofProducer`](polysample_api::XofProducer)
//! handshake. [`ShakeProducer`] wraps a real SHAKE instance from the `sha3`
//! crate and never ends its stream; [`SliceProducer`] replays a finite byte
//! slice and can inject stalls, which makes it the workhorse of the tests.

pub mod shake;
pub mod slice;

pub use shake::{Shake128Producer, Shake256Producer, ShakeProducer};
pub use slice::SliceProducer;
