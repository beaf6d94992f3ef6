//! Step-driven polynomial coefficient samplers
//!
//! This crate turns pseudorandom bytes into coefficients in `[0, Q)` for
//! Kyber-class lattice schemes. Two samplers share one control surface:
//!
//! - [`CbdSampler`] draws centered binomial noise from a fixed seed;
//! - [`FlowController`] drives an XOF producer through its absorb/squeeze
//!   handshake and rejection-samples the streamed bytes.
//!
//! Both advance one bounded step per call to `step` and never block. Bytes
//! wait in a 64-byte [`ByteQueue`], coefficients in a two-slot
//! [`OutputBuffer`], and a full buffer stalls the tick instead of dropping
//! data.
//!
//! # Example
//!
//! ```
//! use polysample_algorithms::prelude::*;
//!
//! let rho = [7u8; 32];
//! let mut flow = FlowController::new(Shake128Producer::new());
//! flow.start_with_nonce(&rho, [0, 1]).unwrap();
//!
//! let mut seen = 0;
//! loop {
//!     let tick = flow.step().unwrap();
//!     while let Some(item) = flow.poll_output() {
//!         assert_eq!(item.coefficient.index, seen);
//!         seen += 1;
//!     }
//!     if tick.is_done() {
//!         break;
//!     }
//! }
//! assert_eq!(seen, 256);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
// Log fields are only read when `tracing` is enabled
#![cfg_attr(not(feature = "tracing"), allow(unused_variables))]

#[cfg(feature = "alloc")]
extern crate alloc;

mod log;

pub mod bits;
pub mod buffer;
pub mod drive;
pub mod poly;
pub mod sampler;
pub mod xof;

pub use bits::BitView;
pub use buffer::{ByteQueue, OutputBuffer, Ring};
pub use drive::{Coefficients, DriveConfig, Driver};
pub use poly::{sample_noise, sample_uniform, Polynomial};
pub use sampler::{
    cbd_coefficient, decode_chunk, evaluate_chunk, fill_uniform, sample_cbd, CbdSampler,
    CbdState, FlowController, FlowState, RejectionDecoder,
};
pub use xof::{Shake128Producer, Shake256Producer, ShakeProducer, SliceProducer};

#[cfg(feature = "alloc")]
pub use poly::{expand_matrix, sample_noise_vec};

/// Prelude for running samplers
pub mod prelude {
    pub use crate::drive::{DriveConfig, Driver};
    pub use crate::poly::Polynomial;
    pub use crate::sampler::{CbdSampler, FlowController};
    pub use crate::xof::{Shake128Producer, Shake256Producer, SliceProducer};
    pub use polysample_api::{CoefficientSampler, Coefficient, OutputItem, Tick, XofProducer};
}
