//! Coefficient samplers
//!
//! Two strategies share the [`CoefficientSampler`](polysample_api::CoefficientSampler)
//! control surface:
//!
//! - [`CbdSampler`]: centered binomial sampling over a seed that is fully
//!   available when the run starts;
//! - [`FlowController`]: uniform rejection sampling over bytes streamed from
//!   an XOF producer, with bounded buffering and backpressure.

pub mod cbd;
pub mod flow;
pub mod rejection;

pub use cbd::{cbd_coefficient, sample_cbd, CbdSampler, CbdState};
pub use flow::{FlowController, FlowState};
pub use rejection::{
    decode_chunk, evaluate_chunk, fill_uniform, Candidate, ChunkDecision, DecodeStep,
    RejectionDecoder,
};
